/// File type categorisation based on file extensions.
///
/// The treemap frontend only distinguishes video files from everything
/// else, so the category set is deliberately two-valued.
use serde::{Deserialize, Serialize};

/// Display category attached to every file node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileCategory {
    Video,
    Other,
}

impl FileCategory {
    /// Categorise a file by the extension of its name.
    pub fn from_file_name(name: &str) -> Self {
        match name.rsplit_once('.') {
            Some((stem, ext)) if !stem.is_empty() => categorise_extension(ext),
            _ => Self::Other,
        }
    }
}

/// Categorise a file extension (without the leading dot).
///
/// Extensions are lowercased into a fixed-size stack buffer rather than a
/// `String`. Anything longer than 8 bytes cannot be a video extension.
pub fn categorise_extension(ext: &str) -> FileCategory {
    let bytes = ext.as_bytes();
    if bytes.len() > 8 {
        return FileCategory::Other;
    }

    let mut lower = [0u8; 8];
    for (dest, &src) in lower.iter_mut().zip(bytes.iter()) {
        *dest = src.to_ascii_lowercase();
    }
    let lower_str = match std::str::from_utf8(&lower[..bytes.len()]) {
        Ok(s) => s,
        Err(_) => return FileCategory::Other,
    };

    match lower_str {
        "mp4" | "mkv" | "avi" | "mov" | "wmv" | "flv" | "webm" | "m4v" | "mpg" | "mpeg" | "3gp" => {
            FileCategory::Video
        }
        _ => FileCategory::Other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_video_extensions() {
        assert_eq!(categorise_extension("mkv"), FileCategory::Video);
        assert_eq!(categorise_extension("MP4"), FileCategory::Video);
        assert_eq!(categorise_extension("txt"), FileCategory::Other);
        assert_eq!(categorise_extension("matroska"), FileCategory::Other);
    }

    #[test]
    fn test_from_file_name() {
        assert_eq!(FileCategory::from_file_name("c.mkv"), FileCategory::Video);
        assert_eq!(FileCategory::from_file_name("archive.tar.wmv"), FileCategory::Video);
        assert_eq!(FileCategory::from_file_name("a.txt"), FileCategory::Other);
        assert_eq!(FileCategory::from_file_name("noext"), FileCategory::Other);
        // A dotfile has no extension.
        assert_eq!(FileCategory::from_file_name(".mov"), FileCategory::Other);
    }
}
