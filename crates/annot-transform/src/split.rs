//! Function key splitting.

use std::sync::LazyLock;

use regex::Regex;

use annot_model::FunctionName;

/// `display(mangled)`: the last parenthesised group with no nested
/// parentheses, anchored at the end of the key.
static COMBINED_KEY_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<display>.*)\((?P<mangled>[^()]*)\)$").expect("Invalid combined key regex")
});

/// Split a `display(mangled)` key into its parts.
///
/// Never fails: a key that does not match uses itself for both parts.
pub fn split_function_key(key: &str) -> FunctionName {
    let Some(captures) = COMBINED_KEY_REGEX.captures(key) else {
        return FunctionName::unsplit(key);
    };
    FunctionName {
        display: captures["display"].to_string(),
        mangled: captures["mangled"].to_string(),
        matched: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_display_and_mangled() {
        let name = split_function_key("alpha(void alpha())");
        // `[^()]*` cannot span the inner parentheses, so this key falls back.
        assert!(!name.matched);

        let name = split_function_key("strcpy(_Z6strcpyPcPKc)");
        assert!(name.matched);
        assert_eq!(name.display, "strcpy");
        assert_eq!(name.mangled, "_Z6strcpyPcPKc");
    }

    #[test]
    fn last_group_wins() {
        let name = split_function_key("foo(bar)(baz)");
        assert_eq!(name.display, "foo(bar)");
        assert_eq!(name.mangled, "baz");
    }

    #[test]
    fn empty_groups_are_allowed() {
        let name = split_function_key("()");
        assert!(name.matched);
        assert_eq!(name.display, "");
        assert_eq!(name.mangled, "");
    }

    #[test]
    fn trailing_text_prevents_match() {
        let name = split_function_key("foo(bar) ");
        assert_eq!(name, FunctionName::unsplit("foo(bar) "));
    }
}
