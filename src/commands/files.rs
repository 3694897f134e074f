//! Local file resolution for the picker and drop paths.
//!
//! A path on disk carries no declared MIME type, so one is inferred from the
//! extension, the way a browser fills in `File.type`.

use std::path::Path;

use crate::error::AppError;
pub use crate::models::file::FALLBACK_MIME_TYPE;
use crate::models::file::SelectedFile;

/// Known video extensions (lowercase) and the MIME type reported for each.
const VIDEO_TYPES: &[(&str, &str)] = &[
    ("mp4", "video/mp4"),
    ("m4v", "video/x-m4v"),
    ("mov", "video/quicktime"),
    ("avi", "video/x-msvideo"),
    ("mkv", "video/x-matroska"),
    ("flv", "video/x-flv"),
    ("wmv", "video/x-ms-wmv"),
    ("webm", "video/webm"),
];

/// Infer a MIME type from the file name's extension, case-insensitively.
pub fn infer_mime_type(file_name: &str) -> &'static str {
    let ext = match Path::new(file_name).extension().and_then(|e| e.to_str()) {
        Some(e) => e.to_ascii_lowercase(),
        None => return FALLBACK_MIME_TYPE,
    };
    VIDEO_TYPES
        .iter()
        .find(|(known, _)| *known == ext)
        .map(|(_, mime)| *mime)
        .unwrap_or(FALLBACK_MIME_TYPE)
}

/// Build a `SelectedFile` from a regular file on disk.
pub fn resolve_local_file(path_str: &str) -> crate::error::Result<SelectedFile> {
    let path = Path::new(path_str);
    if !path.exists() {
        return Err(AppError::Io(format!("Path does not exist: {}", path_str)));
    }
    if !path.is_file() {
        return Err(AppError::Io(format!("Not a regular file: {}", path_str)));
    }
    let name = path
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| AppError::Io(format!("File name is not valid UTF-8: {}", path_str)))?;
    let metadata = std::fs::metadata(path)?;
    Ok(SelectedFile {
        name: name.to_string(),
        size: metadata.len(),
        mime_type: infer_mime_type(name).to_string(),
        path: path.to_string_lossy().to_string(),
    })
}

/// Resolve the paths of a drop, keeping the platform's order.
///
/// Only the first path must resolve, since the intake only looks at the first
/// item. Later paths that are missing or not regular files are skipped. Type
/// filtering is left to the intake.
pub fn resolve_dropped_paths(paths: &[String]) -> crate::error::Result<Vec<SelectedFile>> {
    let Some((first, rest)) = paths.split_first() else {
        return Ok(Vec::new());
    };
    let mut files = vec![resolve_local_file(first)?];
    for path in rest {
        match resolve_local_file(path) {
            Ok(file) => files.push(file),
            Err(e) => log::debug!("Skipping dropped path '{}': {}", path, e),
        }
    }
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_infer_known_video_types() {
        assert_eq!(infer_mime_type("clip.mp4"), "video/mp4");
        assert_eq!(infer_mime_type("game.MOV"), "video/quicktime");
        assert_eq!(infer_mime_type("a.b.mkv"), "video/x-matroska");
        assert_eq!(infer_mime_type("replay.webm"), "video/webm");
    }

    #[test]
    fn test_infer_unknown_falls_back() {
        assert_eq!(infer_mime_type("notes.txt"), FALLBACK_MIME_TYPE);
        assert_eq!(infer_mime_type("README"), FALLBACK_MIME_TYPE);
        assert_eq!(infer_mime_type(".mp4"), FALLBACK_MIME_TYPE);
    }

    #[test]
    fn test_resolve_local_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("clip.mp4");
        fs::write(&path, vec![0u8; 2048]).unwrap();

        let file = resolve_local_file(&path.to_string_lossy()).unwrap();
        assert_eq!(file.name, "clip.mp4");
        assert_eq!(file.size, 2048);
        assert_eq!(file.mime_type, "video/mp4");
        assert!(file.is_video());
    }

    #[test]
    fn test_resolve_nonexistent_path_returns_error() {
        let err = resolve_local_file("/nonexistent/path/xyz.mp4").unwrap_err();
        assert!(err.to_string().contains("does not exist"), "Error: {}", err);
    }

    #[test]
    fn test_resolve_directory_returns_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = resolve_local_file(&dir.path().to_string_lossy()).unwrap_err();
        assert!(err.to_string().contains("Not a regular file"), "Error: {}", err);
    }

    #[test]
    fn test_resolve_dropped_paths_keeps_order() {
        let dir = tempfile::tempdir().unwrap();
        let doc = dir.path().join("doc.pdf");
        let clip = dir.path().join("clip.avi");
        fs::write(&doc, "pdf").unwrap();
        fs::write(&clip, "avi").unwrap();

        let files = resolve_dropped_paths(&[
            doc.to_string_lossy().to_string(),
            clip.to_string_lossy().to_string(),
        ])
        .unwrap();
        assert_eq!(files.len(), 2);
        assert_eq!(files[0].mime_type, FALLBACK_MIME_TYPE);
        assert_eq!(files[1].mime_type, "video/x-msvideo");
    }

    #[test]
    fn test_resolve_dropped_paths_skips_unresolvable_later_paths() {
        let dir = tempfile::tempdir().unwrap();
        let clip = dir.path().join("clip.mp4");
        fs::write(&clip, "mp4").unwrap();

        let files = resolve_dropped_paths(&[
            clip.to_string_lossy().to_string(),
            "/nonexistent/path/gone.mp4".to_string(),
            dir.path().to_string_lossy().to_string(),
        ])
        .unwrap();
        assert_eq!(files.len(), 1);
        assert_eq!(files[0].name, "clip.mp4");
        assert!(files[0].is_video());
    }

    #[test]
    fn test_resolve_dropped_paths_missing_first_path_errors() {
        let dir = tempfile::tempdir().unwrap();
        let clip = dir.path().join("clip.mp4");
        fs::write(&clip, "mp4").unwrap();

        let err = resolve_dropped_paths(&[
            "/nonexistent/path/gone.mp4".to_string(),
            clip.to_string_lossy().to_string(),
        ])
        .unwrap_err();
        assert!(err.to_string().contains("does not exist"), "Error: {}", err);
    }

    #[test]
    fn test_resolve_dropped_paths_empty() {
        assert!(resolve_dropped_paths(&[]).unwrap().is_empty());
    }
}
