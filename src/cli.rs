///// Otter: CLI-Definition (Clap) - Optionen fuer Kommando, Dateien und Filter-Schalter.
///// Schneefuchs: Defaults wie gehabt (make); trailing Argumente gehen roh ans Kommando.
///// Maus: Nur Signaturen, keine Ausfuehrungslogik.
///// Datei: src/cli.rs

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "otter_filter",
    version = "0.1.0",
    about = "Filters compiler output: strips CRT noise, groups diagnostics by file"
)]
pub struct Cli {
    /// Arguments passed through to the build command
    #[arg(value_name = "ARG", trailing_var_arg = true, allow_hyphen_values = true)]
    pub command_args: Vec<String>,

    /// Command to run (default: make)
    #[arg(short = 'c', long = "command", default_value = "make", value_name = "CMD")]
    pub command: String,

    /// Process output from a file instead of running a command
    #[arg(short = 'i', long = "input-file", value_name = "PATH")]
    pub input_file: Option<PathBuf>,

    /// Save filtered output to a file
    #[arg(short = 'o', long = "output-file", value_name = "PATH")]
    pub output_file: Option<PathBuf>,

    /// Show verbose per-line routing decisions on stderr
    #[arg(long = "debug-filter", default_value_t = false)]
    pub debug_filter: bool,

    /// Show all 'note:' lines, even CRT-related ones
    #[arg(long = "show-all-notes", default_value_t = false)]
    pub show_all_notes: bool,

    /// Disable grouping of diagnostics by file (flat output)
    #[arg(long = "no-grouping", default_value_t = false)]
    pub no_grouping: bool,

    /// Disable colored output
    #[arg(long = "no-color", default_value_t = false)]
    pub no_color: bool,

    /// Run the built-in filter scenarios and exit
    #[arg(long = "selftest", default_value_t = false)]
    pub selftest: bool,
}
