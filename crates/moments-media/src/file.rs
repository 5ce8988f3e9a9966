//! A user-selected file and its declared media type.
//!
//! The original client read the browser's `File.type`; headless we derive
//! the type from the file extension.  Unknown extensions fall through to
//! `application/octet-stream`, which the kind rule classifies as video —
//! the same "not an image ⇒ video" guess the original made.

use std::path::{Path, PathBuf};

use moments_shared::MediaKind;

/// One file queued for upload.
#[derive(Debug, Clone)]
pub struct UploadFile {
    pub path: PathBuf,
    pub file_name: String,
    /// Declared media type string, e.g. `image/jpeg`.
    pub media_type: String,
}

impl UploadFile {
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("unnamed")
            .to_string();
        let media_type = media_type_for(&path).to_string();

        Self {
            path,
            file_name,
            media_type,
        }
    }

    pub fn kind(&self) -> MediaKind {
        MediaKind::from_media_type(&self.media_type)
    }
}

/// Map a file extension to a media type string.
pub fn media_type_for(path: &Path) -> &'static str {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());

    match extension.as_deref() {
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("png") => "image/png",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("heic") => "image/heic",
        Some("bmp") => "image/bmp",
        Some("mp4") => "video/mp4",
        Some("m4v") => "video/x-m4v",
        Some("mov") => "video/quicktime",
        Some("webm") => "video/webm",
        Some("avi") => "video/x-msvideo",
        Some("mkv") => "video/x-matroska",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn image_extensions_classify_as_image() {
        for name in ["a.jpg", "b.JPEG", "c.png", "d.webp"] {
            let file = UploadFile::from_path(name);
            assert_eq!(file.kind(), MediaKind::Image, "{name}");
        }
    }

    #[test]
    fn video_and_unknown_extensions_classify_as_video() {
        for name in ["a.mp4", "b.mov", "c.bin", "no-extension"] {
            let file = UploadFile::from_path(name);
            assert_eq!(file.kind(), MediaKind::Video, "{name}");
        }
    }

    #[test]
    fn file_name_is_derived_from_path() {
        let file = UploadFile::from_path("/tmp/photos/dance floor.jpg");
        assert_eq!(file.file_name, "dance floor.jpg");
        assert_eq!(file.media_type, "image/jpeg");
    }
}
