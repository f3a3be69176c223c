//! Font discovery
//!
//! The configured font wins; otherwise a list of common system fonts is tried.

use std::path::{Path, PathBuf};

use fontdue::{Font, FontSettings};

#[cfg(target_os = "macos")]
const SYSTEM_FONTS: &[&str] = &[
    "/System/Library/Fonts/SFNS.ttf",
    "/System/Library/Fonts/Helvetica.ttc",
    "/Library/Fonts/Arial.ttf",
    "/System/Library/Fonts/Supplemental/Arial.ttf",
];

#[cfg(target_os = "windows")]
const SYSTEM_FONTS: &[&str] = &[
    "C:\\Windows\\Fonts\\segoeui.ttf",
    "C:\\Windows\\Fonts\\arial.ttf",
    "C:\\Windows\\Fonts\\tahoma.ttf",
];

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
const SYSTEM_FONTS: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu-sans-fonts/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
    "/usr/share/fonts/liberation-sans/LiberationSans-Regular.ttf",
    "/usr/share/fonts/noto/NotoSans-Regular.ttf",
    "/usr/share/fonts/truetype/noto/NotoSans-Regular.ttf",
];

/// Paths to try, in order
pub fn font_candidates(configured: Option<&Path>) -> Vec<PathBuf> {
    configured
        .map(Path::to_path_buf)
        .into_iter()
        .chain(SYSTEM_FONTS.iter().map(PathBuf::from))
        .collect()
}

/// Parse a font file
pub fn load_font_file(path: &Path) -> Result<Font, String> {
    let bytes =
        std::fs::read(path).map_err(|e| format!("Failed to read {}: {}", path.display(), e))?;
    Font::from_bytes(bytes, FontSettings::default())
        .map_err(|e| format!("Failed to parse {}: {}", path.display(), e))
}

/// Load the first usable font. `None` means text will not be drawn.
pub fn load_font(configured: Option<&Path>) -> Option<Font> {
    for path in font_candidates(configured) {
        if !path.exists() {
            continue;
        }
        match load_font_file(&path) {
            Ok(font) => {
                tracing::info!("Using font {}", path.display());
                return Some(font);
            }
            Err(e) => tracing::warn!("{}", e),
        }
    }
    tracing::warn!("No usable font found; text will not be rendered");
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configured_font_is_tried_first() {
        let candidates = font_candidates(Some(Path::new("/tmp/custom.ttf")));
        assert_eq!(candidates[0], PathBuf::from("/tmp/custom.ttf"));
        assert_eq!(candidates.len(), SYSTEM_FONTS.len() + 1);
    }

    #[test]
    fn test_garbage_font_file_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.ttf");
        std::fs::write(&path, b"not a font").unwrap();
        assert!(load_font_file(&path).is_err());
    }
}
