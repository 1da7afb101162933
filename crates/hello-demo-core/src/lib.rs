//! # hello-demo-core
//!
//! The greeter used by the `hello-demo` binary.
//!
//! This crate provides:
//! - The fixed greeting template `Hello, {name}!`
//! - Default name substitution when no name is supplied
//!
//! Every function here is pure and total: any string is accepted and inserted
//! verbatim, without trimming or escaping.

/// Name used when the caller does not supply one.
pub const DEFAULT_NAME: &str = "world";

/// Returns the supplied name, or [`DEFAULT_NAME`] when none was given.
///
/// An empty string is a supplied value and is returned as-is.
///
/// # Examples
///
/// ```
/// use hello_demo_core::effective_name;
///
/// assert_eq!(effective_name(None), "world");
/// assert_eq!(effective_name(Some("")), "");
/// ```
#[must_use]
pub fn effective_name(name: Option<&str>) -> &str {
    name.unwrap_or(DEFAULT_NAME)
}

/// Formats the greeting for `name`.
///
/// # Examples
///
/// ```
/// use hello_demo_core::say_hello;
///
/// assert_eq!(say_hello("Alice"), "Hello, Alice!");
/// assert_eq!(say_hello(""), "Hello, !");
/// ```
#[must_use]
pub fn say_hello(name: &str) -> String {
    format!("Hello, {name}!")
}

/// Formats the greeting for an optional name, falling back to [`DEFAULT_NAME`].
#[must_use]
pub fn greet(name: Option<&str>) -> String {
    say_hello(effective_name(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_say_hello_simple_name() {
        assert_eq!(say_hello("Alice"), "Hello, Alice!");
    }

    #[test]
    fn test_say_hello_full_name() {
        assert_eq!(say_hello("Bob Smith"), "Hello, Bob Smith!");
    }

    #[test]
    fn test_say_hello_empty_name() {
        assert_eq!(say_hello(""), "Hello, !");
    }

    #[test]
    fn test_say_hello_keeps_whitespace() {
        // No trimming
        assert_eq!(say_hello("  Ann \t"), "Hello,   Ann \t!");
        assert_eq!(say_hello("line\nbreak"), "Hello, line\nbreak!");
    }

    #[test]
    fn test_say_hello_with_special_characters() {
        assert_eq!(say_hello("José"), "Hello, José!");
        assert_eq!(say_hello("🦀"), "Hello, 🦀!");
        assert_eq!(say_hello("<b>&amp;</b>"), "Hello, <b>&amp;</b>!");
    }

    #[test]
    fn test_say_hello_does_not_interpret_format_syntax() {
        assert_eq!(say_hello("{name}"), "Hello, {name}!");
        assert_eq!(say_hello("{}{{}}%s"), "Hello, {}{{}}%s!");
    }

    #[test]
    fn test_say_hello_matches_template() {
        for name in ["", "a", "world", "Ω", " x ", "!", "Hello, "] {
            assert_eq!(say_hello(name), format!("Hello, {}!", name));
            assert!(say_hello(name).starts_with("Hello, "));
            assert!(say_hello(name).ends_with('!'));
            assert_eq!(say_hello(name).len(), "Hello, !".len() + name.len());
        }
    }

    #[test]
    fn test_say_hello_is_deterministic() {
        assert_eq!(say_hello("Alice"), say_hello("Alice"));
        assert_eq!(greet(None), greet(None));
    }

    #[test]
    fn test_greet_falls_back_to_default() {
        assert_eq!(greet(None), "Hello, world!");
        assert_eq!(greet(Some("Alice")), "Hello, Alice!");
        assert_eq!(greet(Some("")), "Hello, !");
    }

    #[test]
    fn test_effective_name() {
        assert_eq!(effective_name(None), DEFAULT_NAME);
        assert_eq!(effective_name(Some("world")), "world");
        assert_eq!(effective_name(Some("Alice")), "Alice");
        assert_eq!(effective_name(Some("")), "");
    }
}
