//! Utility functions for UI components

/// Font stack used for product titles and prices
pub const HELVETICA: &str = "font-family: Helvetica, -apple-system, Roboto, Helvetica, sans-serif";

/// Join class tokens, skipping `None` and blank entries
///
/// ```
/// use storefront_ui::cn;
/// let open = false;
/// assert_eq!(cn([Some("fixed inset-0"), (!open).then_some("pointer-events-none")]), "fixed inset-0 pointer-events-none");
/// ```
pub fn cn<'a, I>(tokens: I) -> String
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    tokens
        .into_iter()
        .flatten()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cn_skips_missing_and_blank_tokens() {
        assert_eq!(cn([Some("a"), None, Some("  "), Some(" b ")]), "a b");
    }

    #[test]
    fn test_cn_empty() {
        assert_eq!(cn(std::iter::empty::<Option<&str>>()), "");
    }
}
