use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;

use crate::domain::common::entities::app_errors::CoreError;

pub const ALLOWED_IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg"];

static UNSAFE_FILE_NAME_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^A-Za-z0-9._-]").expect("valid file name pattern"));

/// Only `.png`, `.jpg` and `.jpeg` (any case) are accepted.
pub fn ensure_allowed_image(file_name: &str) -> Result<(), CoreError> {
    let extension = Path::new(file_name)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase());

    match extension {
        Some(ext) if ALLOWED_IMAGE_EXTENSIONS.contains(&ext.as_str()) => Ok(()),
        _ => Err(CoreError::UnsupportedImageFormat(file_name.to_string())),
    }
}

/// Reduces a client supplied name to something safe to use as a file name.
pub fn sanitize_file_name(file_name: &str) -> String {
    let base = file_name
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or_default();

    let joined = base.split_whitespace().collect::<Vec<_>>().join("_");
    let cleaned = UNSAFE_FILE_NAME_CHARS.replace_all(&joined, "");
    let cleaned = cleaned.trim_start_matches(['.', '_']);

    if cleaned.is_empty() {
        "image".to_string()
    } else {
        cleaned.to_string()
    }
}

/// A name that refers to a file directly inside a directory, nothing else.
pub fn is_plain_file_name(file_name: &str) -> bool {
    !file_name.is_empty()
        && file_name != "."
        && file_name != ".."
        && !file_name.contains(['/', '\\', '\0'])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allowed_extensions() {
        assert!(ensure_allowed_image("apple.png").is_ok());
        assert!(ensure_allowed_image("apple.JPG").is_ok());
        assert!(ensure_allowed_image("my.apple.jpeg").is_ok());
    }

    #[test]
    fn test_rejected_extensions() {
        assert_eq!(
            ensure_allowed_image("anim.gif"),
            Err(CoreError::UnsupportedImageFormat("anim.gif".to_string()))
        );
        assert!(ensure_allowed_image("noextension").is_err());
        assert!(ensure_allowed_image("").is_err());
        assert!(ensure_allowed_image(".png").is_err());
    }

    #[test]
    fn test_sanitize_file_name() {
        assert_eq!(sanitize_file_name("my lunch.jpg"), "my_lunch.jpg");
        assert_eq!(sanitize_file_name("../../etc/passwd"), "passwd");
        assert_eq!(sanitize_file_name("C:\\photos\\café.png"), "caf.png");
        assert_eq!(sanitize_file_name(".hidden.png"), "hidden.png");
        assert_eq!(sanitize_file_name("???"), "image");
    }

    #[test]
    fn test_plain_file_name() {
        assert!(is_plain_file_name("sheet_1.txt"));
        assert!(!is_plain_file_name("../history.json"));
        assert!(!is_plain_file_name(".."));
        assert!(!is_plain_file_name(""));
    }
}
