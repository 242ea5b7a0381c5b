///// Otter: Renders group buffers into the final line sequence with section labels.
///// Schneefuchs: Fixed order preamble -> general -> files (first seen) -> postamble.
///// Maus: Exactly one blank line between non-empty blocks; no leading blank.
///// Datei: src/engine/engine_assemble.rs

use super::engine_groups::{GroupKey, Groups};

pub const GENERAL_HEADER: &str = "--- General Messages/Errors ---";

pub fn file_header(name: &str) -> String {
    format!("--- Errors in file: {name} ---")
}

pub fn assemble(groups: &Groups) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();

    push_block(&mut out, None, groups.lines(&GroupKey::Preamble));
    push_block(&mut out, Some(GENERAL_HEADER.to_string()), groups.lines(&GroupKey::General));
    for name in groups.file_order() {
        let key = GroupKey::File(name.clone());
        push_block(&mut out, Some(file_header(name)), groups.lines(&key));
    }
    push_block(&mut out, None, groups.lines(&GroupKey::Postamble));

    out
}

fn push_block(out: &mut Vec<String>, header: Option<String>, lines: &[String]) {
    if lines.is_empty() {
        return;
    }
    if !out.is_empty() {
        out.push(String::new());
    }
    if let Some(h) = header {
        out.push(h);
    }
    out.extend_from_slice(lines);
}
