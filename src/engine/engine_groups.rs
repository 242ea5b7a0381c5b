///// Otter: Group buffers for the regrouped view - special keys plus one key per filename.
///// Schneefuchs: Map for the buffers, explicit Vec for first-seen file order.
///// Maus: Filename keys are never renamed or merged; order list holds each name once.
///// Datei: src/engine/engine_groups.rs

use std::collections::HashMap;

/// Destination for a filtered line. `File` keys are literal filenames.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub enum GroupKey {
    Preamble,
    Postamble,
    General,
    File(String),
}

/// Append-only line buffers keyed by group, plus the first-seen order of
/// filename keys. Map iteration order is never used for output.
#[derive(Default)]
pub struct Groups {
    buffers: HashMap<GroupKey, Vec<String>>,
    file_order: Vec<String>,
}

impl Groups {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, key: &GroupKey, line: String) {
        self.buffers.entry(key.clone()).or_default().push(line);
    }

    pub fn extend(&mut self, key: &GroupKey, lines: impl IntoIterator<Item = String>) {
        self.buffers.entry(key.clone()).or_default().extend(lines);
    }

    /// Register a filename the first time it appears; later calls are no-ops.
    pub fn note_file(&mut self, name: &str) {
        if !self.file_order.iter().any(|n| n == name) {
            self.file_order.push(name.to_string());
        }
    }

    pub fn lines(&self, key: &GroupKey) -> &[String] {
        self.buffers.get(key).map_or(&[], Vec::as_slice)
    }

    pub fn file_order(&self) -> &[String] {
        &self.file_order
    }
}
