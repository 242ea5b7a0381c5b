///// Otter: Library surface - engine, runner, terminal and CLI glue for the output filter.
///// Schneefuchs: Engine stays pure (no I/O); all streams and files live in runner/main.
///// Maus: Public modules so integration tests can drive filter_lines directly.
///// Datei: src/lib.rs

pub mod cli;
pub mod engine;
pub mod errors;
pub mod runner;
pub mod selftest;
pub mod term;
pub mod utils;
