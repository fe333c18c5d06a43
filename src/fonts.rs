//! Font registration for chart text.
//!
//! Text is laid out and rasterized with plotters' pure-Rust glyph path, which
//! only knows the fonts registered with it. A TrueType file is registered
//! once per process under the `sans-serif` family used by every chart.

use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use plotters::style::{FontStyle, register_font};

use crate::errors::{Error, Result};

/// Locations probed when no font is given explicitly.
const CANDIDATES: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu-sans-fonts/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
    "/usr/share/fonts/liberation/LiberationSans-Regular.ttf",
    "/usr/share/fonts/truetype/freefont/FreeSans.ttf",
    "/usr/share/fonts/noto/NotoSans-Regular.ttf",
    "/System/Library/Fonts/Supplemental/Arial.ttf",
    "/Library/Fonts/Arial.ttf",
    "C:\\Windows\\Fonts\\arial.ttf",
];

static REGISTERED: OnceLock<PathBuf> = OnceLock::new();

/// The first candidate font present on this machine.
#[must_use]
pub fn find_system_font() -> Option<PathBuf> {
    CANDIDATES
        .iter()
        .map(PathBuf::from)
        .find(|path| path.is_file())
}

/// Register `explicit`, or the first system font found, as `sans-serif`.
///
/// Returns the registered file. Later calls keep the first registration and
/// warn when `explicit` names a different file.
pub fn register_sans_serif(explicit: Option<&Path>) -> Result<PathBuf> {
    if let Some(path) = REGISTERED.get() {
        return Ok(keep_registered(path, explicit));
    }

    let path = match explicit {
        Some(path) => path.to_path_buf(),
        None => find_system_font().ok_or_else(|| Error::FontUnavailable {
            message: format!("none of {} known locations exist", CANDIDATES.len()),
        })?,
    };

    let bytes = std::fs::read(&path).map_err(|e| Error::FontUnavailable {
        message: format!("{}: {e}", path.display()),
    })?;
    // plotters keeps registered font data for the whole process.
    let bytes: &'static [u8] = Box::leak(bytes.into_boxed_slice());
    register_font("sans-serif", FontStyle::Normal, bytes).map_err(|_| Error::FontUnavailable {
        message: format!("{}: not a valid TrueType font", path.display()),
    })?;

    tracing::debug!(font = %path.display(), "registered sans-serif font");
    let registered = REGISTERED.get_or_init(|| path.clone());
    Ok(keep_registered(registered, Some(&path)))
}

/// The font already in use; fonts cannot be swapped after registration.
fn keep_registered(registered: &Path, requested: Option<&Path>) -> PathBuf {
    if let Some(requested) = requested.filter(|requested| *requested != registered) {
        tracing::warn!(
            registered = %registered.display(),
            requested = %requested.display(),
            "a font is already registered, ignoring the requested one"
        );
    }
    registered.to_path_buf()
}
