//! Image upload into the media library.
//!
//! There is no external object storage: accepted images are base64-encoded
//! into a `data:` URI and appended to the persisted media collection.
//! Validation happens before any write, so a rejected upload leaves the
//! library untouched.

use std::fs;
use std::path::Path;

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;

use crate::entity::MediaItem;
use crate::error::{FolioError, Result};
use crate::storage::RecordStore;

/// Size cap on the original file. Base64 inflates the stored record by
/// ~33%, so the cap keeps single documents at a manageable size.
pub const MAX_UPLOAD_BYTES: u64 = 5 * 1024 * 1024;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ImageFormat {
    Jpeg,
    Png,
    Gif,
    Webp,
}

impl ImageFormat {
    pub fn mime(self) -> &'static str {
        match self {
            ImageFormat::Jpeg => "image/jpeg",
            ImageFormat::Png => "image/png",
            ImageFormat::Gif => "image/gif",
            ImageFormat::Webp => "image/webp",
        }
    }
}

/// Sniff the image format from magic bytes.
pub fn detect_format(bytes: &[u8]) -> Option<ImageFormat> {
    // JPEG: FF D8 FF
    if bytes.len() >= 3 && bytes[0] == 0xFF && bytes[1] == 0xD8 && bytes[2] == 0xFF {
        return Some(ImageFormat::Jpeg);
    }
    // PNG: 89 50 4E 47 0D 0A 1A 0A
    if bytes.len() >= 8 && &bytes[..8] == b"\x89PNG\r\n\x1a\n" {
        return Some(ImageFormat::Png);
    }
    // GIF: GIF87a / GIF89a
    if bytes.len() >= 6 && (&bytes[..6] == b"GIF87a" || &bytes[..6] == b"GIF89a") {
        return Some(ImageFormat::Gif);
    }
    // WEBP: RIFF .... WEBP
    if bytes.len() >= 12 && &bytes[..4] == b"RIFF" && &bytes[8..12] == b"WEBP" {
        return Some(ImageFormat::Webp);
    }
    None
}

/// Validate and upload one image file, appending exactly one entry to the
/// media library.
pub fn upload_image(store: &RecordStore, path: &Path) -> Result<MediaItem> {
    let bytes = fs::read(path)?;

    let format = detect_format(&bytes)
        .ok_or_else(|| FolioError::Upload("File must be an image".to_string()))?;

    if bytes.len() as u64 > MAX_UPLOAD_BYTES {
        return Err(FolioError::Upload(
            "Image size must be less than 5MB".to_string(),
        ));
    }

    let url = format!("data:{};base64,{}", format.mime(), BASE64.encode(&bytes));
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "upload".to_string());

    let item = MediaItem::new(url, name, bytes.len() as u64);
    store.media_library().insert(item.clone());
    Ok(item)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const PNG_MAGIC: &[u8] = b"\x89PNG\r\n\x1a\n";

    fn write_file(dir: &Path, name: &str, bytes: &[u8]) -> std::path::PathBuf {
        let path = dir.join(name);
        fs::write(&path, bytes).unwrap();
        path
    }

    fn png_of_size(len: usize) -> Vec<u8> {
        let mut bytes = PNG_MAGIC.to_vec();
        bytes.resize(len, 0);
        bytes
    }

    #[test]
    fn test_detect_format_from_magic_bytes() {
        assert_eq!(detect_format(PNG_MAGIC), Some(ImageFormat::Png));
        assert_eq!(detect_format(&[0xFF, 0xD8, 0xFF, 0xE0]), Some(ImageFormat::Jpeg));
        assert_eq!(detect_format(b"GIF89a..."), Some(ImageFormat::Gif));
        assert_eq!(detect_format(b"RIFF\x00\x00\x00\x00WEBP"), Some(ImageFormat::Webp));
        assert_eq!(detect_format(b"plain text"), None);
    }

    #[test]
    fn test_upload_2mb_png_appends_exactly_one_entry() {
        let tmp = TempDir::new().unwrap();
        let store = RecordStore::init(tmp.path()).unwrap();
        let path = write_file(tmp.path(), "photo.png", &png_of_size(2 * 1024 * 1024));

        let item = upload_image(&store, &path).unwrap();

        assert!(item.url.starts_with("data:image/png;base64,"));
        assert_eq!(item.name, "photo.png");
        assert_eq!(item.size, 2 * 1024 * 1024);

        let library = store.media_library().load();
        assert_eq!(library.len(), 1);
        assert_eq!(library[0].id, item.id);
    }

    #[test]
    fn test_upload_6mb_image_is_rejected_with_size_error() {
        let tmp = TempDir::new().unwrap();
        let store = RecordStore::init(tmp.path()).unwrap();
        let path = write_file(tmp.path(), "huge.png", &png_of_size(6 * 1024 * 1024));

        let result = upload_image(&store, &path);
        match result {
            Err(FolioError::Upload(msg)) => assert!(msg.contains("5MB")),
            other => panic!("expected size error, got {:?}", other),
        }

        assert!(store.media_library().load().is_empty());
    }

    #[test]
    fn test_upload_non_image_is_rejected() {
        let tmp = TempDir::new().unwrap();
        let store = RecordStore::init(tmp.path()).unwrap();
        let path = write_file(tmp.path(), "notes.txt", b"just some text");

        let result = upload_image(&store, &path);
        match result {
            Err(FolioError::Upload(msg)) => assert!(msg.contains("must be an image")),
            other => panic!("expected type error, got {:?}", other),
        }

        assert!(store.media_library().load().is_empty());
    }

    #[test]
    fn test_uploaded_bytes_round_trip_through_data_uri() {
        let tmp = TempDir::new().unwrap();
        let store = RecordStore::init(tmp.path()).unwrap();

        let mut bytes = PNG_MAGIC.to_vec();
        bytes.extend_from_slice(&[1, 2, 3, 4, 5]);
        let path = write_file(tmp.path(), "tiny.png", &bytes);

        let item = upload_image(&store, &path).unwrap();
        let encoded = item.url.strip_prefix("data:image/png;base64,").unwrap();
        assert_eq!(BASE64.decode(encoded).unwrap(), bytes);
    }
}
