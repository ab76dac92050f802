/// Request and response documents exchanged with a web frontend.
///
/// The HTTP layer itself lives outside this crate; these types pin down the
/// JSON shapes it sends and receives so every frontend agrees on them.
use crate::error::ScanError;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Body of a scan request: `{"path": "..."}`.
///
/// `path` is kept as raw JSON so that missing, `null` and non-string values
/// reach validation instead of failing deserialisation.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScanRequest {
    #[serde(default)]
    pub path: Value,
}

impl ScanRequest {
    pub fn from_json(body: &str) -> Result<Self, ScanError> {
        serde_json::from_str(body)
            .map_err(|err| ScanError::invalid_input(format!("malformed request body: {err}")))
    }

    /// The requested root, provided it is a non-empty string.
    pub fn root(&self) -> Result<&str, ScanError> {
        match &self.path {
            Value::String(s) if !s.is_empty() => Ok(s),
            Value::String(_) => Err(ScanError::invalid_input("path is empty")),
            Value::Null => Err(ScanError::invalid_input("path is missing")),
            other => Err(ScanError::invalid_input(format!(
                "path must be a string, got {other}"
            ))),
        }
    }
}

/// Error body returned alongside a client-error status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorDocument {
    pub error: String,
    pub code: String,
}

impl From<&ScanError> for ErrorDocument {
    fn from(err: &ScanError) -> Self {
        Self {
            error: err.to_string(),
            code: err.code().to_string(),
        }
    }
}

/// Drive roots available for browsing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DriveList {
    pub drives: Vec<String>,
}

impl DriveList {
    pub fn current() -> Self {
        Self {
            drives: crate::platform::list_drives(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_request() {
        let req = ScanRequest::from_json(r#"{"path": "C:/Users"}"#).unwrap();
        assert_eq!(req.root().unwrap(), "C:/Users");
    }

    #[test]
    fn test_whitespace_path_is_passed_through() {
        let req = ScanRequest::from_json(r#"{"path": "   "}"#).unwrap();
        assert_eq!(req.root().unwrap(), "   ");
    }

    #[test]
    fn test_null_missing_and_non_string_paths_are_invalid() {
        for body in [r#"{"path": null}"#, "{}", r#"{"path": 42}"#, r#"{"path": ""}"#] {
            let req = ScanRequest::from_json(body).unwrap();
            assert!(
                matches!(req.root(), Err(ScanError::InvalidInput(_))),
                "{body} should be rejected"
            );
        }
    }

    #[test]
    fn test_malformed_body_is_invalid_input() {
        assert!(matches!(
            ScanRequest::from_json("not json"),
            Err(ScanError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_error_document_code() {
        let doc = ErrorDocument::from(&ScanError::invalid_input("path is missing"));
        assert_eq!(doc.code, "INVALID_PATH");
        assert_eq!(doc.error, "Invalid path provided: path is missing");
    }
}
