//! Formatting of offending-argument lists for error messages.

/// At most this many arguments are shown in one error message.
pub const MAX_REPORTED_ARGUMENTS: usize = 8;

/// Shown in place of the arguments that did not fit.
pub const ELLIPSIS: &str = "...";

/// Quote each entry and join them, truncated to `limit` entries.
///
/// When entries are dropped, [`ELLIPSIS`] is appended as a final item.
pub fn truncate_list(items: &[String], limit: usize) -> String {
    let mut parts: Vec<String> = items
        .iter()
        .take(limit)
        .map(|item| format!("'{item}'"))
        .collect();

    if items.len() > limit {
        parts.push(ELLIPSIS.to_string());
    }

    parts.join(", ")
}

/// [`truncate_list`] with the default limit.
pub fn quoted_list(items: &[String]) -> String {
    truncate_list(items, MAX_REPORTED_ARGUMENTS)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(n: usize) -> Vec<String> {
        (1..=n).map(|i| format!("-{i}")).collect()
    }

    #[test]
    fn short_list_is_shown_whole() {
        assert_eq!(quoted_list(&strings(2)), "'-1', '-2'");
        assert_eq!(quoted_list(&[]), "");
    }

    #[test]
    fn exactly_limit_has_no_ellipsis() {
        let text = quoted_list(&strings(MAX_REPORTED_ARGUMENTS));
        assert!(!text.ends_with(ELLIPSIS));
        assert!(text.ends_with("'-8'"));
    }

    #[test]
    fn long_list_is_truncated() {
        let text = quoted_list(&strings(12));
        assert!(text.ends_with("'-8', ..."));
        assert!(!text.contains("'-9'"));
    }
}
