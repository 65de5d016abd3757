use shortmap::errors::{Result, ShortmapError};

#[cfg(test)]
mod error_creation_tests {
    use super::*;

    #[test]
    fn test_invalid_url_error() {
        let error = ShortmapError::invalid_url("scheme not allowed");

        assert!(matches!(error, ShortmapError::InvalidUrl(_)));
        assert!(error.to_string().contains("Invalid URL"));
        assert!(error.to_string().contains("scheme not allowed"));
    }

    #[test]
    fn test_not_found_error() {
        let error = ShortmapError::not_found("short code 'x' does not exist");

        assert!(matches!(error, ShortmapError::NotFound(_)));
        assert!(error.to_string().contains("Resource Not Found"));
        assert!(error.to_string().contains("does not exist"));
    }

    #[test]
    fn test_generation_exhausted_error() {
        let error = ShortmapError::generation_exhausted("no free code after 32 attempts");

        assert!(matches!(error, ShortmapError::GenerationExhausted(_)));
        assert!(error.to_string().contains("Code Generation Exhausted"));
        assert!(error.to_string().contains("32 attempts"));
    }
}

#[cfg(test)]
mod error_properties_tests {
    use super::*;

    #[test]
    fn test_error_codes_are_distinct() {
        let errors = [
            ShortmapError::invalid_url("a"),
            ShortmapError::not_found("b"),
            ShortmapError::generation_exhausted("c"),
        ];

        let codes: Vec<&str> = errors.iter().map(|e| e.code()).collect();
        assert_eq!(codes, vec!["E001", "E002", "E003"]);
    }

    #[test]
    fn test_message_accessor() {
        let error = ShortmapError::not_found("detail text");
        assert_eq!(error.message(), "detail text");
    }

    #[test]
    fn test_format_simple() {
        let error = ShortmapError::invalid_url("bad scheme");
        assert_eq!(error.format_simple(), "Invalid URL: bad scheme");
    }

    #[test]
    fn test_implements_std_error() {
        let error: Box<dyn std::error::Error> = Box::new(ShortmapError::not_found("x"));
        assert!(error.source().is_none());
    }

    #[test]
    fn test_from_url_parse_error() {
        let parse_err = url::Url::parse("not a url").unwrap_err();
        let error: ShortmapError = parse_err.into();
        assert!(matches!(error, ShortmapError::InvalidUrl(_)));
    }

    #[test]
    fn test_result_alias() {
        fn fails() -> Result<()> {
            Err(ShortmapError::not_found("x"))
        }
        assert!(fails().is_err());
    }

    #[test]
    fn test_error_clone() {
        let error = ShortmapError::invalid_url("original");
        let cloned = error.clone();
        assert_eq!(error.to_string(), cloned.to_string());
    }
}
