///// Otter: Filename extraction from diagnostic headers - MSVC "file(l,c)" and GCC "file:l:c".
///// Schneefuchs: Earliest marker wins; colon rejoin keeps Windows drive letters intact.
///// Maus: Returns Option - a miss routes the diagnostic to the general group, never an error.
///// Datei: src/engine/engine_extract.rs

use super::engine_classify::{digit_follows, is_digit_run};

// Extraction also recognizes ": note:" so that note headers sharing the
// location prefix resolve to the same file as their diagnostic.
const LOCATION_MARKERS: &[(&str, bool)] = &[
    (": fatal error:", false),
    (": error:", false),
    (": warning:", false),
    (": note:", false),
    (" fatal error C", true),
    (" error C", true),
    (" warning C", true),
];

/// Recover the source filename from a diagnostic header line.
pub fn extract_filename(line: &str) -> Option<String> {
    let stripped = line.trim();

    // Earliest marker wins; remember whether it was the MSVC form, since
    // that one leaves the location colon on the candidate ("file(l,c):").
    let mut best: Option<(usize, bool)> = None;
    for (marker, is_msvc) in LOCATION_MARKERS {
        if let Some(pos) = stripped.find(marker) {
            if *is_msvc && !digit_follows(stripped, pos + marker.len()) {
                continue;
            }
            if best.map_or(true, |(b, _)| pos < b) {
                best = Some((pos, *is_msvc));
            }
        }
    }
    let (marker_pos, msvc_marker) = best?;
    let mut candidate = stripped[..marker_pos].trim();
    if msvc_marker {
        candidate = candidate.strip_suffix(':').unwrap_or(candidate).trim_end();
    }

    // MSVC form: "file(line,col)" or "file(line)" before the marker.
    if let Some(rest) = candidate.strip_suffix(')') {
        if let Some(open_idx) = rest.rfind('(') {
            if open_idx > 0 {
                let name = rest[..open_idx].trim();
                if is_valid_location(rest[open_idx + 1..].trim()) && is_plausible_filename(name) {
                    return Some(name.to_string());
                }
            }
        }
    }

    // GCC/Clang form: colon-delimited, trailing digit segments are line/col.
    let parts: Vec<&str> = candidate.split(':').collect();
    if parts.len() >= 3 && is_digit_run(parts[parts.len() - 1]) && is_digit_run(parts[parts.len() - 2])
    {
        let name = parts[..parts.len() - 2].join(":");
        let name = name.trim();
        if is_plausible_filename(name) {
            return Some(name.to_string());
        }
    }
    if parts.len() >= 2 && is_digit_run(parts[parts.len() - 1]) {
        let name = parts[..parts.len() - 1].join(":");
        let name = name.trim();
        if is_plausible_filename(name) {
            return Some(name.to_string());
        }
    }

    // Fallback for "file.c: message" with no embedded line number.
    if is_plausible_filename(candidate) && !candidate.ends_with(':') {
        return Some(candidate.to_string());
    }
    None
}

/// "12" or "12,5" - the location part inside MSVC parentheses.
fn is_valid_location(loc: &str) -> bool {
    match loc.split_once(',') {
        Some((l, c)) => is_digit_run(l.trim()) && is_digit_run(c.trim()),
        None => is_digit_run(loc),
    }
}

/// Rejects spurious matches: bare counts, severity keywords, "makefile".
fn is_plausible_filename(name: &str) -> bool {
    if name.is_empty() || is_digit_run(name) {
        return false;
    }
    if !(name.contains('.') || name.contains('/') || name.contains('\\')) {
        return false;
    }
    !matches!(
        name.to_lowercase().as_str(),
        "error" | "warning" | "note" | "fatal error" | "makefile"
    )
}
