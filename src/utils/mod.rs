pub mod logging;

pub fn normalize_title(title: &str) -> String {
    title.trim().to_string()
}

/// Trims an optional form field; blank input counts as absent.
pub fn normalize_optional(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_title() {
        assert_eq!(normalize_title("  IEP Meeting  "), "IEP Meeting");
        assert_eq!(normalize_title("   "), "");
    }

    #[test]
    fn test_normalize_optional() {
        assert_eq!(normalize_optional(None), None);
        assert_eq!(normalize_optional(Some("   ".to_string())), None);
        assert_eq!(
            normalize_optional(Some(" Emily Johnson ".to_string())),
            Some("Emily Johnson".to_string())
        );
    }
}
