//! Fixed artifact templates.
//!
//! Templates are literal text with a single substitution marker,
//! [`PLACEHOLDER`]. Rendering is a global literal replacement - this is
//! deliberately not a templating language.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The substitution marker every template may contain.
pub const PLACEHOLDER: &str = "__FILENAME__";

/// Replace every placeholder occurrence with the derived identifier.
pub fn render(template: &str, identifier: &str) -> String {
    template.replace(PLACEHOLDER, identifier)
}

pub const COMPONENT: &str = r#"import { JSX } from "preact";

export function __FILENAME__(props: JSX.HTMLAttributes<HTMLDivElement>) {
  return (
    <div {...props}>
      <h1>__FILENAME__</h1>
    </div>
  );
}"#;

pub const ISLAND: &str = r#"// Document https://docs.deco.cx/en/performance/islands#islands

import { useSignal } from "@preact/signals";

export default function __FILENAME__() {
  const count = useSignal(0);

  return (
    <div>
      <button onClick={() => count.value -= 1}>-1</button>
      <p>{count}</p>
      <button onClick={() => count.value += 1}>+1</button>
    </div>
  );
}"#;

pub const LOADER: &str = r#"// Document https://docs.deco.cx/en/concepts/loader#loader
  import { AppContext } from "site/apps/site.ts";

export interface Props {

}

const loader = async (props: Props,req: Request, ctx: AppContext): Promise<unknown | null> => {
  return null;
};

// https://docs.deco.cx/pt/developing-capabilities/manage-block-access
export const defaultVisibility =  'public'

export default loader;
"#;

pub const ACTION: &str = r#"// Document https://docs.deco.cx/en/concepts/action#action
import { AppContext } from "site/apps/site.ts";

export interface Props {

}

const action = async (props: Props,req: Request, ctx: AppContext): Promise<unknown | null> => {
  return null;
};

// https://docs.deco.cx/pt/developing-capabilities/manage-block-access
export const defaultVisibility =  'public'

export default action;
"#;

pub const SECTION: &str = r#"// Document https://docs.deco.cx/en/cms-capabilities/content/sections#sections

export default function __FILENAME__() {

  return (
    <div>
      <h2>__FILENAME__</h2>
    </div>
  );
}

export function LoadingFallback() {
  return (
    <div style={{ height: "716px" }} class="flex justify-center items-center">
      <span class="loading loading-spinner" />
    </div>
  );
}
"#;

const EXPORT_ISLAND: &str = r#"// Document https://docs.deco.cx/en/performance/islands#islands

import Component from "./__FILENAME__";
import type { Props } from "./__FILENAME__";

function Island(props: Props) {
  return <Component {...props} />;
}

export default Island;
"#;

const EXPORT_SECTION: &str = r#"// Document https://docs.deco.cx/en/cms-capabilities/content/sections#sections
export { default } from "./__FILENAME__";

export function LoadingFallback() {
  return (
    <div style={{ height: "716px" }} class="flex justify-center items-center">
      <span class="loading loading-spinner" />
    </div>
  );
}
"#;

/// Targets for the export-as commands: wrap an existing module into a
/// re-export file under the island or section folder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportKind {
    Island,
    Section,
}

impl ExportKind {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Island => "island",
            Self::Section => "section",
        }
    }

    /// Export wrappers always render JSX.
    pub const fn extension(&self) -> &'static str {
        ".tsx"
    }

    pub const fn default_folder(&self) -> &'static str {
        match self {
            Self::Island => "islands",
            Self::Section => "sections",
        }
    }

    pub const fn template(&self) -> &'static str {
        match self {
            Self::Island => EXPORT_ISLAND,
            Self::Section => EXPORT_SECTION,
        }
    }
}

impl fmt::Display for ExportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
