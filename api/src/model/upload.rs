use base64::{engine::general_purpose::STANDARD, Engine};
use serde::Deserialize;
use shared::error::{AppError, AppResult};

/// Image formats accepted for profile pictures and portfolio uploads.
pub const ALLOWED_IMAGE_EXTENSIONS: [&str; 4] = ["png", "jpg", "jpeg", "gif"];

/// A single file sent inline as base64 inside the JSON body.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageUpload {
    pub file_name: String,
    pub content_base64: String,
}

impl ImageUpload {
    /// Lower-cased extension of the submitted file name, if allowed.
    pub fn extension(&self) -> AppResult<String> {
        allowed_extension(&self.file_name)
    }

    pub fn decode(&self) -> AppResult<Vec<u8>> {
        STANDARD
            .decode(&self.content_base64)
            .map_err(|e| AppError::UnprocessableEntity(format!("invalid base64 payload: {e}")))
    }
}

pub fn allowed_extension(file_name: &str) -> AppResult<String> {
    let ext = file_name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .filter(|ext| ALLOWED_IMAGE_EXTENSIONS.contains(&ext.as_str()));
    match ext {
        Some(ext) => Ok(ext),
        None => Err(AppError::UnprocessableEntity(format!(
            "unsupported file type: {file_name}"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_listed_extensions_case_insensitively() {
        assert_eq!(allowed_extension("me.png").unwrap(), "png");
        assert_eq!(allowed_extension("photo.JPG").unwrap(), "jpg");
        assert_eq!(allowed_extension("a.b.jpeg").unwrap(), "jpeg");
    }

    #[test]
    fn rejects_unknown_or_missing_extension() {
        assert!(allowed_extension("script.exe").is_err());
        assert!(allowed_extension("noextension").is_err());
        assert!(allowed_extension("trailingdot.").is_err());
    }

    #[test]
    fn decodes_base64_content() {
        let upload = ImageUpload {
            file_name: "pixel.png".into(),
            content_base64: STANDARD.encode(b"\x89PNG"),
        };
        assert_eq!(upload.decode().unwrap(), b"\x89PNG");
    }

    #[test]
    fn rejects_malformed_base64() {
        let upload = ImageUpload {
            file_name: "pixel.png".into(),
            content_base64: "not*base64".into(),
        };
        assert!(upload.decode().is_err());
    }
}
