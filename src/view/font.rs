//! Monospace font discovery
//!
//! No font ships with the binary; a system monospace face is located at
//! startup. The search list covers the stock fonts of the supported
//! platforms and common developer installs.

use std::path::PathBuf;

use anyhow::{anyhow, Result};

/// Candidate font paths, most preferred first
fn candidates() -> Vec<PathBuf> {
    let mut paths: Vec<PathBuf> = Vec::new();

    if let Ok(custom) = std::env::var("FOLIO_FONT") {
        paths.push(PathBuf::from(custom));
    }

    #[cfg(target_os = "linux")]
    {
        for p in [
            "/usr/share/fonts/truetype/jetbrains-mono/JetBrainsMono-Regular.ttf",
            "/usr/share/fonts/TTF/JetBrainsMono-Regular.ttf",
            "/usr/share/fonts/truetype/dejavu/DejaVuSansMono.ttf",
            "/usr/share/fonts/TTF/DejaVuSansMono.ttf",
            "/usr/share/fonts/truetype/liberation/LiberationMono-Regular.ttf",
            "/usr/share/fonts/liberation/LiberationMono-Regular.ttf",
            "/usr/share/fonts/truetype/ubuntu/UbuntuMono-R.ttf",
            "/usr/share/fonts/noto/NotoSansMono-Regular.ttf",
        ] {
            paths.push(PathBuf::from(p));
        }
    }

    #[cfg(target_os = "macos")]
    {
        for p in [
            "/System/Library/Fonts/SFNSMono.ttf",
            "/System/Library/Fonts/Menlo.ttc",
            "/System/Library/Fonts/Monaco.ttf",
        ] {
            paths.push(PathBuf::from(p));
        }
    }

    #[cfg(target_os = "windows")]
    {
        if let Ok(windir) = std::env::var("WINDIR") {
            let fonts = PathBuf::from(windir).join("Fonts");
            paths.push(fonts.join("consola.ttf"));
            paths.push(fonts.join("cascadiamono.ttf"));
            paths.push(fonts.join("cour.ttf"));
        }
    }

    paths
}

/// Load the bytes of the first usable monospace font
pub fn load_system_monospace() -> Result<Vec<u8>> {
    for path in candidates() {
        if !path.exists() {
            continue;
        }
        match std::fs::read(&path) {
            Ok(bytes) => {
                tracing::info!("Using font {}", path.display());
                return Ok(bytes);
            }
            Err(e) => {
                tracing::debug!("Skipping font {}: {}", path.display(), e);
            }
        }
    }
    Err(anyhow!(
        "no usable monospace font found; set FOLIO_FONT to a .ttf path"
    ))
}
