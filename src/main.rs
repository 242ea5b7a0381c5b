///// Otter: Mini-Entrypoint - liest Datei oder startet das Build-Kommando, filtert, gibt aus.
///// Schneefuchs: Exit-Code spiegelt das Kind-Kommando; 1 bei I/O-Fehlern; 0 nach Selftest.
///// Maus: Kein Over-Engineering; Ausgabe-Datei degradiert auf Konsole statt Daten zu verlieren.
///// Datei: src/main.rs

use std::fs;
use std::io::Write;

use clap::Parser;

use otter_filter::cli::Cli;
use otter_filter::engine::{filter_lines, FilterConfig};
use otter_filter::errors::AppError;
use otter_filter::{runner, selftest, term, utils};

fn main() {
    std::process::exit(run());
}

fn run() -> i32 {
    let cli = Cli::parse();

    term::enable_ansi();
    if cli.no_color {
        term::disable_color();
    }

    if cli.selftest {
        return selftest::run();
    }

    let cfg = FilterConfig {
        debug_trace: cli.debug_filter,
        show_all_notes: cli.show_all_notes,
        no_grouping: cli.no_grouping,
    };

    let (lines, child_code) = match gather_lines(&cli) {
        Ok(pair) => pair,
        Err(e) => {
            term::out_err("FILTER", &e.to_string());
            return 1;
        }
    };

    let filtered = filter_lines(&lines, &cfg);

    if let Some(path) = &cli.output_file {
        match write_output(path, &filtered) {
            Ok(()) => {
                term::out_info("FILTER", &format!("saved to {}", utils::display_path(path)));
            }
            Err(e) => {
                // Degrade: never lose the result over an unwritable file.
                term::out_warn("FILTER", &e.to_string());
                print_filtered(&filtered);
            }
        }
    } else {
        print_filtered(&filtered);
    }

    child_code
}

/// Input lines plus the exit code to mirror (0 when reading from a file).
fn gather_lines(cli: &Cli) -> Result<(Vec<String>, i32), AppError> {
    if let Some(path) = &cli.input_file {
        term::out_info("FILTER", &format!("processing file={}", utils::display_path(path)));
        let content = fs::read_to_string(path).map_err(|e| AppError::InputFile {
            path: utils::display_path(path),
            source: e,
        })?;
        let lines = content.lines().map(str::to_string).collect();
        return Ok((lines, 0));
    }

    let args = &cli.command_args;
    term::out_info(
        "RUN",
        &format!("ts_ms={} cmd=\"{} {}\"", utils::epoch_ms(), cli.command, args.join(" ")),
    );
    let captured = runner::run_captured(&cli.command, args)?;
    Ok((captured.lines, captured.code))
}

fn write_output(path: &std::path::Path, lines: &[String]) -> Result<(), AppError> {
    let mut f = fs::File::create(path).map_err(|e| AppError::OutputFile {
        path: utils::display_path(path),
        source: e,
    })?;
    for line in lines {
        writeln!(f, "{line}").map_err(|e| AppError::OutputFile {
            path: utils::display_path(path),
            source: e,
        })?;
    }
    Ok(())
}

fn print_filtered(lines: &[String]) {
    for line in lines {
        println!("{}", term::colorize_line(line));
    }
}
