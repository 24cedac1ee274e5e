//! The annotation keyword catalog.
//!
//! Annotations are `@keyword` tags written inside documentation comments;
//! an external admin tool reads them to decide how a property is rendered
//! and validated. The catalog is hand-authored and immutable for the
//! process lifetime.

use regex::Regex;
use std::sync::LazyLock;

/// One catalog entry: the keyword, its markdown description, and the name
/// used to look up an optional preview image on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Annotation {
    pub keyword: &'static str,
    pub doc: &'static str,
}

impl Annotation {
    /// Preview image file name for this entry, e.g. `format-color.png`
    /// when a prefix namespaces the lookup.
    pub fn preview_file(&self, prefix: Option<&str>) -> String {
        preview_file_name(self.keyword, prefix)
    }
}

/// Preview image file name for an arbitrary completion label.
pub fn preview_file_name(label: &str, prefix: Option<&str>) -> String {
    let name = label.trim_start_matches('@');
    match prefix {
        Some(prefix) => format!("{prefix}-{name}.png"),
        None => format!("{name}.png"),
    }
}

/// The full general catalog, in suggestion order.
pub const ANNOTATIONS: &[Annotation] = &[
    Annotation {
        keyword: "title",
        doc: "Receives text that will be used as the title of the label for that input in the form.\n\nUsage: `@title Number of products`",
    },
    Annotation {
        keyword: "description",
        doc: "Receives text that will be used as the description in the label for that input in the form.\n\nUsage: `@description Total number of products to display in the storefront`",
    },
    Annotation {
        keyword: "hide",
        doc: "Hides this property in the Admin form. The value still remains in the JSON of the Section.\n\nUsage: `@hide`",
    },
    Annotation {
        keyword: "format",
        doc: "Configures a field to be formatted differently. This can cause its Widget to change.\n\nUsage: `@format [Format value]`",
    },
    Annotation {
        keyword: "ignore",
        doc: "The value and the property are completely ignored.\n\nUsage: `@ignore`",
    },
    Annotation {
        keyword: "maximum",
        doc: "Configures a maximum value for that field. Works on properties of type `number`. (value <= X)\n\nUsage: `@maximum 10`",
    },
    Annotation {
        keyword: "minimum",
        doc: "Configures a minimum value for that field. Works on properties of type `number`. (value >= X)\n\nUsage: `@minimum 15`",
    },
    Annotation {
        keyword: "exclusiveMaximum",
        doc: "Configures a maximum value for that field. Works on properties of type `number`. It is the exclusive counterpart of `@maximum`. (value < X)\n\nUsage: `@exclusiveMaximum 10`",
    },
    Annotation {
        keyword: "exclusiveMinimum",
        doc: "Configures a minimum value for that field. Works on properties of type `number`. It is the exclusive counterpart of `@minimum`. (value > X)\n\nUsage: `@exclusiveMinimum 15`",
    },
    Annotation {
        keyword: "maxLength",
        doc: "Configures a maximum length for the text of a field. Works on properties of type `string`.\n\nUsage: `@maxLength 30`",
    },
    Annotation {
        keyword: "minLength",
        doc: "Configures a minimum length for the text of a field. Works on properties of type `string`.\n\nUsage: `@minLength 8`",
    },
    Annotation {
        keyword: "readOnly",
        doc: "Makes a field uneditable in the admin form but still readable.\n\nUsage: `@readOnly`",
    },
    Annotation {
        keyword: "uniqueItems",
        doc: "Ensures that fields of type `array` cannot have duplicate values.\n\nUsage: `@uniqueItems true`",
    },
    Annotation {
        keyword: "maxItems",
        doc: "Ensures that fields of type `array` cannot have more than X values.\n\nUsage: `@maxItems 3`",
    },
    Annotation {
        keyword: "minItems",
        doc: "Ensures that fields of type `array` cannot have fewer than X values.\n\nUsage: `@minItems 2`",
    },
    Annotation {
        keyword: "default",
        doc: "Configures a default value for that field.\n\nUsage: `@default Testing`",
    },
    Annotation {
        keyword: "deprecated",
        doc: "Marks a field as deprecated.\n\nUsage: `@deprecated We will remove this field in the next update`",
    },
    Annotation {
        keyword: "options",
        doc: "Required for the operation of dynamic options, button group and icon select widgets.\n\nUsage: `@options deco-sites/mystore/loaders/products.ts`",
    },
    Annotation {
        keyword: "language",
        doc: "Required for the Widget `@format code`, used to define the language on editor.\n\nUsage: `@language javascript`",
    },
];

/// Widget names suggested after `@format`, previews namespaced `format-`.
pub const FORMAT_WIDGETS: &[Annotation] = &[
    Annotation {
        keyword: "color",
        doc: "Renders a color input instead of a text input.",
    },
    Annotation {
        keyword: "date",
        doc: "Renders a date input instead of a text input.",
    },
    Annotation {
        keyword: "datetime",
        doc: "Renders a datetime input instead of a text input.",
    },
    Annotation {
        keyword: "html",
        doc: "Renders an input that opens a WYSIWYG editor for advanced HTML text editing.",
    },
    Annotation {
        keyword: "rich-text",
        doc: "Renders an input that opens a WYSIWYG editor for advanced Markdown text editing.",
    },
    Annotation {
        keyword: "icon-select",
        doc: "The Icon Select widget enables you to create a select input for icons, where each option consists of both an icon and its label. This allows users to preview and choose the right icon easily. All icons rendered in the widget must be defined explicitly as SVG strings",
    },
    Annotation {
        keyword: "button-group",
        doc: "The Button Group widget allows you to render select options in an icon format, providing a visually appealing way to choose options. Each option is represented by an icon, offering flexibility and customization for your application.",
    },
];

// Plain substring-style containment, kept as-is for compatibility with the
// admin tool's established behavior (prose mentioning @format also matches).
static FORMAT_OR_OPTIONS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"@(format|options)").expect("hard-coded regex"));

/// Whether a line already carries a `@format` or `@options` annotation,
/// which suppresses the general catalog (no new tag mid-value).
pub fn suppresses_general_catalog(line: &str) -> bool {
    FORMAT_OR_OPTIONS.is_match(line)
}
