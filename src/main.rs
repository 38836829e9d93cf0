//! No-argument driver: renders the icon set next to the executable.

use std::path::PathBuf;
use std::{env, fs};

use mailsync_icons::{export_icons, IconRenderer, RenderError};

fn main() -> Result<(), RenderError> {
    let out_dir = output_dir();
    let renderer = IconRenderer::new();
    for path in export_icons(&renderer, &out_dir)? {
        println!("Wygenerowano {}", path.display());
    }
    Ok(())
}

/// Icons land in the directory containing the executable, falling back to
/// the working directory when the executable path cannot be resolved.
fn output_dir() -> PathBuf {
    let dir = env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from("."));
    fs::canonicalize(&dir).unwrap_or(dir)
}
