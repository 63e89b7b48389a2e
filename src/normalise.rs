//! Column-name normalisation used as the key of column mappings.

/// Canonicalises names so lookups ignore case and padding.
pub trait NameNormaliser: Send + Sync {
    fn normalise(&self, name: &str) -> String;
}

impl<F> NameNormaliser for F
where
    F: Fn(&str) -> String + Send + Sync,
{
    fn normalise(&self, name: &str) -> String {
        self(name)
    }
}

/// Trims and lower-cases names.
#[derive(Debug, Clone, Copy, Default)]
pub struct CaseFoldingNormaliser;

impl NameNormaliser for CaseFoldingNormaliser {
    fn normalise(&self, name: &str) -> String {
        name.trim().to_lowercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case_folding() {
        assert_eq!(CaseFoldingNormaliser.normalise(" Customer_ID "), "customer_id");
        assert_eq!(CaseFoldingNormaliser.normalise(""), "");
    }

    #[test]
    fn test_closure_normaliser() {
        let upper = |name: &str| name.to_uppercase();
        assert_eq!(upper.normalise("id"), "ID");
    }
}
