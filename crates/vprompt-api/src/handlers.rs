//! Request handlers.

pub mod concepts;
pub mod health;
pub mod images;
pub mod models;
pub mod prompt;

pub use concepts::*;
pub use health::*;
pub use images::*;
pub use models::*;
pub use prompt::*;

/// Treat absent, empty and whitespace-only optional text the same.
pub(crate) fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_blank() {
        assert_eq!(non_blank(&None), None);
        assert_eq!(non_blank(&Some(String::new())), None);
        assert_eq!(non_blank(&Some("  \n".to_string())), None);
        assert_eq!(non_blank(&Some("warm".to_string())), Some("warm"));
    }
}
