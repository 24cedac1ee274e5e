//! Identifier derivation from user-entered file names.
//!
//! A file name like `sub/my-product_card.tsx` becomes the identifier
//! `MyProductCard`: last path segment, stem before the first dot,
//! kebab/snake separators folded to camelCase, first letter capitalized.
//! Already-camelCase input passes through unchanged.

/// Fold `-x` and `_x` sequences into an uppercased `X`.
///
/// A separator is consumed only when the next character is an ASCII
/// lowercase letter; otherwise it is kept verbatim (so `my-9th` stays
/// `my-9th`).
pub fn fold_separators(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();

    while let Some(ch) = chars.next() {
        if (ch == '-' || ch == '_')
            && chars.peek().is_some_and(|next| next.is_ascii_lowercase())
        {
            // Unwrap is safe: peek above guarantees a next char.
            let next = chars.next().unwrap();
            out.push(next.to_ascii_uppercase());
        } else {
            out.push(ch);
        }
    }

    out
}

/// Uppercase the first character, leaving the rest untouched.
pub fn capitalize_first(input: &str) -> String {
    let mut chars = input.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Derive the type identifier substituted into templates.
pub fn identifier_from_file_name(file_name: &str) -> String {
    let base = file_name.rsplit('/').next().unwrap_or(file_name);
    let stem = base.split('.').next().unwrap_or(base);
    capitalize_first(&fold_separators(stem))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kebab_case_converts() {
        assert_eq!(identifier_from_file_name("my-comp"), "MyComp");
    }

    #[test]
    fn snake_case_converts() {
        assert_eq!(identifier_from_file_name("my_comp"), "MyComp");
    }

    #[test]
    fn camel_case_is_idempotent() {
        assert_eq!(identifier_from_file_name("MyComponent"), "MyComponent");
        assert_eq!(
            identifier_from_file_name(&identifier_from_file_name("my-comp")),
            "MyComp"
        );
    }

    #[test]
    fn mixed_separators_fold() {
        assert_eq!(identifier_from_file_name("my-product_card"), "MyProductCard");
    }

    #[test]
    fn extension_is_stripped() {
        assert_eq!(identifier_from_file_name("my-comp.tsx"), "MyComp");
        assert_eq!(identifier_from_file_name("hero.section.tsx"), "Hero");
    }

    #[test]
    fn path_segments_are_dropped() {
        assert_eq!(identifier_from_file_name("ui/cards/my-card.tsx"), "MyCard");
    }

    #[test]
    fn separator_before_non_lowercase_is_kept() {
        assert_eq!(fold_separators("my-9th"), "my-9th");
        assert_eq!(fold_separators("my-Upper"), "my-Upper");
    }

    #[test]
    fn empty_input_yields_empty_identifier() {
        assert_eq!(identifier_from_file_name(""), "");
        assert_eq!(capitalize_first(""), "");
    }
}
