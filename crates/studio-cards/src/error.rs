//! Error types for card decks

/// Card catalog and authoring errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    /// No catalog entry with this id
    #[error("unknown card: {0}")]
    UnknownCard(String),

    /// Category label could not be parsed
    #[error("unknown card category: '{0}'")]
    UnknownCategory(String),

    /// Custom card authoring left a required field blank
    #[error("custom card is missing a {field}")]
    IncompleteCustomCard { field: &'static str },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_error_display() {
        let err = CatalogError::IncompleteCustomCard { field: "name" };
        assert_eq!(err.to_string(), "custom card is missing a name");

        let err = CatalogError::UnknownCategory("gadget".to_string());
        assert!(err.to_string().contains("gadget"));
    }
}
