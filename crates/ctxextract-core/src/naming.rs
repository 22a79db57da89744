//! Output filename derivation.
//!
//! The only rewrite applied to a context value is `,` → `_`; everything else
//! is kept verbatim so names stay predictable from the descriptor.

use crate::error::{ExtractError, Result};
use std::path::{Component, Path};

/// Extension appended to every output record.
pub const OUTPUT_EXTENSION: &str = ".json";

/// Derives the output filename for a context value.
///
/// # Examples
///
/// - `output_filename("kitchen, morning")` → `"kitchen_ morning.json"`
/// - `output_filename("sunset")` → `"sunset.json"`
pub fn output_filename(context: &str) -> String {
    let mut name = context.replace(',', "_");
    name.push_str(OUTPUT_EXTENSION);
    name
}

/// Rejects names that would escape the output directory or that the
/// filesystem cannot hold as a single entry.
pub fn validate_filename(name: &str) -> Result<()> {
    let invalid = || ExtractError::InvalidFileName {
        name: name.to_string(),
    };

    if name.contains('\0') || name.contains('/') {
        return Err(invalid());
    }
    #[cfg(windows)]
    if name.contains('\\') {
        return Err(invalid());
    }
    let mut components = Path::new(name).components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(_)), None) => Ok(()),
        _ => Err(invalid()),
    }
}
