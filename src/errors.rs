///// Otter: Error taxonomy for the outer I/O layer (launch, read, write).
///// Schneefuchs: The engine itself is total and never produces any of these.
///// Maus: Short messages; callers decide between abort and degrade.
///// Datei: src/errors.rs

use std::io;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("command not found: {0}")]
    CommandNotFound(String),
    #[error("spawn {exe} failed: {source}")]
    Spawn { exe: String, source: io::Error },
    #[error("cannot read input file {path}: {source}")]
    InputFile { path: String, source: io::Error },
    #[error("cannot write output file {path}: {source}")]
    OutputFile { path: String, source: io::Error },
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}
