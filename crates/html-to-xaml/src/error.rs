//! Error types for HTML to XAML conversion.

use thiserror::Error;

/// Errors that can occur while converting HTML to XAML.
#[derive(Debug, Error)]
pub enum ConversionError {
    /// The HTML input could not be parsed, even after repair.
    #[error("HTML parsing error: {0}")]
    ParseError(String),

    /// An ordinal outside the domain of a numbering system.
    #[error("invalid ordinal {0}: roman numerals require a positive value")]
    InvalidOrdinal(i64),

    /// The assembled XAML is not well-formed markup.
    #[error("XAML serialization error: {0}")]
    Serialization(String),

    /// I/O error while reading input or writing output.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for conversion operations.
pub type Result<T> = std::result::Result<T, ConversionError>;

impl From<roxmltree::Error> for ConversionError {
    fn from(err: roxmltree::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ConversionError::InvalidOrdinal(0);
        assert_eq!(err.to_string(), "invalid ordinal 0: roman numerals require a positive value");

        let err = ConversionError::ParseError("unexpected end of input".to_string());
        assert_eq!(err.to_string(), "HTML parsing error: unexpected end of input");
    }

    #[test]
    fn test_xml_error_maps_to_serialization() {
        let xml_err = roxmltree::Document::parse("<a><b></a>").unwrap_err();
        let err = ConversionError::from(xml_err);
        assert!(matches!(err, ConversionError::Serialization(_)));
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ConversionError>();
    }
}
