use thiserror::Error;

#[derive(Error, Debug)]
pub enum StorefrontError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Fetch failed: {0}")]
    Fetch(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = StorefrontError::Validation("bad price".into());
        assert_eq!(err.to_string(), "Validation error: bad price");

        let err = StorefrontError::Fetch("catalog offline".into());
        assert_eq!(err.to_string(), "Fetch failed: catalog offline");
    }

    #[test]
    fn test_io_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: StorefrontError = io.into();
        assert!(matches!(err, StorefrontError::Io(_)));
    }
}
