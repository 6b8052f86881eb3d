use crate::utils::error::{ApiError, Result};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(ApiError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(ApiError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(ApiError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_http_and_https_urls() {
        assert!(validate_url("base_url", "http://localhost:3000/heroes").is_ok());
        assert!(validate_url("base_url", "https://example.com/api/heroes").is_ok());
    }

    #[test]
    fn rejects_empty_url() {
        let err = validate_url("base_url", "").unwrap_err();
        assert!(matches!(err, ApiError::InvalidConfigValueError { .. }));
    }

    #[test]
    fn rejects_non_http_scheme() {
        let err = validate_url("base_url", "ftp://example.com/heroes").unwrap_err();
        assert!(err.to_string().contains("Unsupported URL scheme"));
    }

    #[test]
    fn rejects_unparseable_url() {
        let err = validate_url("base_url", "not a url").unwrap_err();
        assert!(matches!(err, ApiError::InvalidConfigValueError { .. }));
    }
}
