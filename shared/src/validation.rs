use crate::error::ValidationError;
use std::str::FromStr;
use strum_macros::{Display, EnumString};

/// Largest accepted upload, in bytes.
pub const MAX_UPLOAD_BYTES: u64 = 10 * 1024 * 1024;

/// Allow-listed image formats, keyed by their declared media type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
pub enum ImageKind {
    #[strum(serialize = "image/png")]
    Png,
    #[strum(serialize = "image/jpeg")]
    Jpeg,
    #[strum(serialize = "image/jpg")]
    Jpg,
    #[strum(serialize = "image/gif")]
    Gif,
}

impl ImageKind {
    pub fn from_media_type(media_type: &str) -> Option<Self> {
        Self::from_str(media_type).ok()
    }

    /// Extension-based lookup used for server-side screening of file names.
    pub fn from_file_name(name: &str) -> Option<Self> {
        let (_, extension) = name.rsplit_once('.')?;
        match extension.to_ascii_lowercase().as_str() {
            "png" => Some(ImageKind::Png),
            "jpeg" => Some(ImageKind::Jpeg),
            "jpg" => Some(ImageKind::Jpg),
            "gif" => Some(ImageKind::Gif),
            _ => None,
        }
    }
}

/// Media type is checked before size, so an oversized file of the wrong
/// type reports the type.
pub fn validate_selection(media_type: &str, size: u64) -> Result<ImageKind, ValidationError> {
    let kind = ImageKind::from_media_type(media_type)
        .ok_or_else(|| ValidationError::UnsupportedType(media_type.to_string()))?;

    if size > MAX_UPLOAD_BYTES {
        return Err(ValidationError::TooLarge(size));
    }

    Ok(kind)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_every_allow_listed_type() {
        for (media_type, kind) in [
            ("image/png", ImageKind::Png),
            ("image/jpeg", ImageKind::Jpeg),
            ("image/jpg", ImageKind::Jpg),
            ("image/gif", ImageKind::Gif),
        ] {
            assert_eq!(validate_selection(media_type, 1024), Ok(kind));
            assert_eq!(kind.to_string(), media_type);
        }
    }

    #[test]
    fn rejects_other_types_regardless_of_size() {
        for media_type in ["image/webp", "IMAGE/PNG", "image/png ", "", "text/plain"] {
            for size in [0, 1, MAX_UPLOAD_BYTES, MAX_UPLOAD_BYTES + 1] {
                assert_eq!(
                    validate_selection(media_type, size),
                    Err(ValidationError::UnsupportedType(media_type.to_string())),
                    "{media_type:?} at {size} bytes should be rejected"
                );
            }
        }
    }

    #[test]
    fn size_ceiling_is_inclusive() {
        assert_eq!(validate_selection("image/png", 10_485_760), Ok(ImageKind::Png));
        let err = validate_selection("image/png", 10_485_761).unwrap_err();
        assert_eq!(err, ValidationError::TooLarge(10_485_761));
        assert!(err.to_string().contains("smaller than 10MB"));
    }

    #[test]
    fn file_name_extensions_are_case_insensitive() {
        assert_eq!(ImageKind::from_file_name("cat.PNG"), Some(ImageKind::Png));
        assert_eq!(ImageKind::from_file_name("a.b.jpeg"), Some(ImageKind::Jpeg));
        assert_eq!(ImageKind::from_file_name("photo.Jpg"), Some(ImageKind::Jpg));
        assert_eq!(ImageKind::from_file_name("anim.gif"), Some(ImageKind::Gif));
        assert_eq!(ImageKind::from_file_name("no_extension"), None);
        assert_eq!(ImageKind::from_file_name("doc.pdf"), None);
        assert_eq!(ImageKind::from_file_name("png"), None);
    }
}
