pub mod controller;
pub mod error;
pub mod session;
pub mod validation;

use serde::{Deserialize, Serialize};

pub use controller::{ImageFile, PosterClient, Preview, UploadController, UploadView};
pub use error::{PreviewError, TransportError, UploadError, ValidationError};
pub use session::{SubmissionState, UploadSession};
pub use validation::{ImageKind, MAX_UPLOAD_BYTES, validate_selection};

/// Path the poster generator listens on.
pub const GENERATE_ENDPOINT: &str = "/generate";
/// Multipart field carrying the uploaded image.
pub const IMAGE_FIELD: &str = "image";

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct GenerateResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl GenerateResponse {
    pub fn generated(image: impl Into<String>) -> Self {
        Self {
            success: true,
            image: Some(image.into()),
            error: None,
        }
    }

    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            success: false,
            image: None,
            error: Some(error.into()),
        }
    }

    /// Resolves the response into the data reference to display, or the
    /// server-reported failure. Empty strings count as absent.
    pub fn into_result(self) -> Result<String, UploadError> {
        match self.image.filter(|image| !image.is_empty()) {
            Some(image) if self.success => Ok(image),
            _ => Err(UploadError::Rejected(
                self.error.filter(|message| !message.is_empty()),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_with_image_resolves_to_data_reference() {
        let response: GenerateResponse =
            serde_json::from_str(r#"{"success": true, "image": "data:image/png;base64,AAA"}"#)
                .unwrap();
        assert_eq!(
            response.into_result(),
            Ok("data:image/png;base64,AAA".to_string())
        );
    }

    #[test]
    fn success_without_image_is_rejected_with_fallback() {
        let response: GenerateResponse = serde_json::from_str(r#"{"success": true}"#).unwrap();
        let err = response.into_result().unwrap_err();
        assert_eq!(err, UploadError::Rejected(None));
        assert_eq!(err.to_string(), error::GENERIC_FAILURE);
    }

    #[test]
    fn server_error_message_is_kept_verbatim() {
        let response: GenerateResponse =
            serde_json::from_str(r#"{"success": false, "error": "bad input"}"#).unwrap();
        assert_eq!(response.into_result().unwrap_err().to_string(), "bad input");
    }

    #[test]
    fn error_only_body_defaults_success_to_false() {
        // Shape of the server's 4xx responses.
        let response: GenerateResponse =
            serde_json::from_str(r#"{"error": "File type not allowed"}"#).unwrap();
        assert!(!response.success);
        assert_eq!(
            response.into_result().unwrap_err().to_string(),
            "File type not allowed"
        );
    }

    #[test]
    fn empty_error_message_falls_back() {
        let response = GenerateResponse::failed("");
        assert_eq!(
            response.into_result().unwrap_err().to_string(),
            error::GENERIC_FAILURE
        );
    }

    #[test]
    fn serialization_omits_absent_fields() {
        let body = serde_json::to_value(GenerateResponse::failed("No image uploaded")).unwrap();
        assert_eq!(
            body,
            serde_json::json!({"success": false, "error": "No image uploaded"})
        );
    }
}
