use thiserror::Error;

/// Errors reported when validating a site model.
///
/// Validation is advisory (the `check` command); rendering and export accept
/// any stored model and degrade per-field instead of failing.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ModelError {
    #[error("Profile name cannot be empty")]
    EmptyProfileName,
    #[error("Duplicate block id: {0}")]
    DuplicateBlockId(String),
    #[error("Block {0} has a zero column or row span")]
    ZeroSpan(String),
    #[error("Block {id} spans {col_span} columns (max {max})")]
    SpanTooWide {
        id: String,
        col_span: u32,
        max: u32,
    },
    #[error("Unknown social platform: {0}")]
    UnknownPlatform(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_error_display() {
        assert_eq!(
            ModelError::DuplicateBlockId("b1".to_string()).to_string(),
            "Duplicate block id: b1"
        );
        assert_eq!(
            ModelError::SpanTooWide {
                id: "b2".to_string(),
                col_span: 12,
                max: 9
            }
            .to_string(),
            "Block b2 spans 12 columns (max 9)"
        );
    }
}
