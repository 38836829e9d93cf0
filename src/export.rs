//! PNG export driver.

use std::fs;
use std::path::{Path, PathBuf};

use image::{ImageFormat, RgbaImage};

use crate::error::RenderError;
use crate::renderer::IconRenderer;

/// File name convention for one exported icon.
pub fn icon_file_name(size: u32) -> String {
    format!("icon-{size}.png")
}

/// Renders every driver size and writes `icon-<size>.png` into `dir`,
/// overwriting existing files. Returns the written paths in size order.
pub fn export_icons(renderer: &IconRenderer, dir: &Path) -> Result<Vec<PathBuf>, RenderError> {
    let rendered = renderer.render_all()?;
    let mut written = Vec::with_capacity(rendered.len());
    for (size, img) in rendered {
        let path = dir.join(icon_file_name(size));
        save_png(&img, &path)?;
        written.push(path);
    }
    Ok(written)
}

/// Encodes to a temporary file and renames it into place, so a failed
/// encode or interrupted write never leaves a truncated PNG at the final
/// path.
fn save_png(img: &RgbaImage, path: &Path) -> Result<(), RenderError> {
    let tmp = path.with_extension("png.tmp");
    if let Err(source) = img.save_with_format(&tmp, ImageFormat::Png) {
        let _ = fs::remove_file(&tmp);
        return Err(RenderError::Encode {
            path: path.to_path_buf(),
            source,
        });
    }
    fs::rename(&tmp, path).map_err(|source| RenderError::Io {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::ICON_SIZES;

    fn scratch_dir(label: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "mailsync-icons-{label}-{}",
            std::process::id()
        ));
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn exports_all_sizes_as_decodable_png() {
        let dir = scratch_dir("export");
        let written = export_icons(&IconRenderer::new(), &dir).unwrap();

        assert_eq!(written.len(), ICON_SIZES.len());
        for (path, size) in written.iter().zip(ICON_SIZES) {
            assert_eq!(path.file_name().unwrap().to_str().unwrap(), icon_file_name(size));
            let img = image::open(path).unwrap().to_rgba8();
            assert_eq!((img.width(), img.height()), (size, size));
        }

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn export_overwrites_existing_files() {
        let dir = scratch_dir("overwrite");
        let renderer = IconRenderer::new();

        let first = export_icons(&renderer, &dir).unwrap();
        let second = export_icons(&renderer, &dir).unwrap();
        assert_eq!(first, second);

        // Deterministic rendering means the second pass rewrites identical
        // pixel content.
        let img = image::open(&second[0]).unwrap().to_rgba8();
        assert_eq!((img.width(), img.height()), (16, 16));

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn no_temp_files_remain_after_export() {
        let dir = scratch_dir("tmpfiles");
        export_icons(&IconRenderer::new(), &dir).unwrap();

        let leftovers: Vec<_> = fs::read_dir(&dir)
            .unwrap()
            .filter_map(|e| e.ok())
            .filter(|e| e.path().extension().is_some_and(|ext| ext == "tmp"))
            .collect();
        assert!(leftovers.is_empty());

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn export_to_missing_directory_fails() {
        let parent = scratch_dir("missing");
        let err = export_icons(&IconRenderer::new(), &parent.join("does-not-exist")).unwrap_err();
        assert!(matches!(err, RenderError::Encode { .. } | RenderError::Io { .. }));

        fs::remove_dir_all(&parent).unwrap();
    }
}
