use thiserror::Error;

pub const UNSUPPORTED_TYPE: &str = "Please select a valid image file (PNG, JPG, JPEG, or GIF)";
pub const TOO_LARGE: &str = "File size is too large. Please select an image smaller than 10MB.";
pub const NO_FILE_SELECTED: &str = "Please select an image file first.";
pub const GENERIC_FAILURE: &str = "Failed to generate poster. Please try again.";
pub const TRANSPORT_FAILURE: &str =
    "An error occurred while generating the poster. Please try again.";

/// Local, synchronous rejection of a selection or of a submit attempt.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{}", UNSUPPORTED_TYPE)]
    UnsupportedType(String),
    #[error("{}", TOO_LARGE)]
    TooLarge(u64),
    #[error("{}", NO_FILE_SELECTED)]
    NoFileSelected,
}

/// Everything `submit` can fail with. `Display` is the text shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UploadError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("{}", .0.as_deref().unwrap_or(GENERIC_FAILURE))]
    Rejected(Option<String>),
    // The detail is for logs only.
    #[error("{}", TRANSPORT_FAILURE)]
    Transport(String),
    #[error("A poster is already being generated.")]
    Busy,
}

#[derive(Debug, Error)]
pub enum TransportError {
    #[error("request failed: {0}")]
    Request(String),
    #[error("malformed response: {0}")]
    Decode(String),
}

#[derive(Debug, Error)]
#[error("failed to read file: {0}")]
pub struct PreviewError(pub String);

impl From<TransportError> for UploadError {
    fn from(err: TransportError) -> Self {
        UploadError::Transport(err.to_string())
    }
}
