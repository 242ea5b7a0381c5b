///// Otter: Utility helpers kept minimal; epoch_ms + path display; ASCII-only.
///// Schneefuchs: Strictly non-panicking; wall time falls back to 0 on clock errors.
///// Maus: Only what main.rs actually uses - no parked helpers.
///// Datei: src/utils.rs

use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

/// Milliseconds since Unix epoch as u128 (monotonic-ish wall time).
pub fn epoch_ms() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis()
}

/// Human-friendly path printing (lossy OK, ASCII-only upstream logs).
pub fn display_path(p: &Path) -> String {
    p.to_string_lossy().into_owned()
}
