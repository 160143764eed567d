//! Upload validation rules.
//!
//! Validation happens before any bytes leave the browser: a size cap and a
//! per-kind type check by extension or MIME prefix. The error display
//! strings are the exact alert messages shown to the user.

use thiserror::Error;

/// Maximum accepted upload size in bytes (50 MB).
pub const MAX_UPLOAD_BYTES: f64 = 50.0 * 1024.0 * 1024.0;

/// What kind of analysis input an upload area accepts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UploadKind {
    Csv,
    Image,
}

impl UploadKind {
    /// Backend endpoint the file is POSTed to.
    pub fn endpoint(self) -> &'static str {
        match self {
            Self::Csv => "/upload-csv/",
            Self::Image => "/upload-image/",
        }
    }

    /// Form field name carrying the file.
    pub fn field_name(self) -> &'static str {
        match self {
            Self::Csv => "csv_file",
            Self::Image => "image_file",
        }
    }

    /// Identifier used in markup (`data-file-type`) and logs.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Image => "image",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum UploadError {
    #[error("File size too large. Maximum 50MB allowed.")]
    TooLarge,
    #[error("Please upload a CSV file.")]
    NotCsv,
    #[error("Please upload an image file.")]
    NotImage,
}

/// Validate a candidate file against the area's accepted kind.
///
/// CSV uploads pass on a `.csv` extension or a MIME type containing "csv";
/// image uploads require a MIME type with the `image/` prefix.
pub fn validate_upload(
    kind: UploadKind,
    file_name: &str,
    mime_type: &str,
    size_bytes: f64,
) -> Result<(), UploadError> {
    if size_bytes > MAX_UPLOAD_BYTES {
        return Err(UploadError::TooLarge);
    }

    match kind {
        UploadKind::Csv => {
            if mime_type.contains("csv") || file_name.ends_with(".csv") {
                Ok(())
            } else {
                Err(UploadError::NotCsv)
            }
        }
        UploadKind::Image => {
            if mime_type.starts_with("image/") {
                Ok(())
            } else {
                Err(UploadError::NotImage)
            }
        }
    }
}
