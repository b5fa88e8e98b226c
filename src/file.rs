use base64::Engine;
use std::path::Path;

use crate::error::ClassifyError;

/// MIME prefix a file must declare to be accepted for upload.
pub const IMAGE_MIME_PREFIX: &str = "image/";

/// A file picked or dropped by the user.
///
/// The file is only held long enough to build a preview and submit it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectedFile {
    /// File name as reported by the picker.
    pub name: String,
    /// Declared MIME type, e.g. `image/jpeg`.
    pub mime: String,
    /// Raw file contents.
    pub bytes: Vec<u8>,
}

impl SelectedFile {
    /// Wraps an in-memory file, e.g. one handed over by a picker.
    pub fn new(name: impl Into<String>, mime: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            mime: mime.into(),
            bytes,
        }
    }

    /// Loads a file from disk, guessing its MIME type from the extension.
    pub async fn from_path(path: impl AsRef<Path>) -> Result<Self, ClassifyError> {
        let path = path.as_ref();
        let bytes = tokio::fs::read(path).await?;
        let name = path
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or("upload")
            .to_string();

        Ok(Self {
            name,
            mime: mime_from_path(path).to_string(),
            bytes,
        })
    }

    /// Returns true when the declared type starts with `image/`.
    pub fn is_image(&self) -> bool {
        self.mime.starts_with(IMAGE_MIME_PREFIX)
    }

    /// Encodes the file as a `data:` URL suitable for a local preview.
    pub fn to_data_url(&self) -> String {
        let b64 = base64::engine::general_purpose::STANDARD.encode(&self.bytes);
        format!("data:{};base64,{}", self.mime, b64)
    }
}

/// Picks the file an upload should use: the first one, if it is an image.
///
/// The remaining files of a multi-file selection are ignored.
pub fn first_image(files: &[SelectedFile]) -> Option<&SelectedFile> {
    files.first().filter(|file| file.is_image())
}

fn mime_from_path(path: &Path) -> &'static str {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase());

    match extension.as_deref() {
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("png") => "image/png",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("bmp") => "image/bmp",
        Some("svg") => "image/svg+xml",
        Some("tif" | "tiff") => "image/tiff",
        _ => "application/octet-stream",
    }
}
