///// Otter: Terminal helpers (ANSI enable, pretty tags, severity coloring).
///// Schneefuchs: No external crates; Windows FFI zu kernel32; OTTER_COLOR=0 schaltet ab.
///// Maus: Styling only at print time - stored line text is never touched.
///// Datei: src/term.rs

use std::env;
use std::io::{self, Write};
use std::sync::atomic::{AtomicBool, Ordering};

use crate::engine::engine_classify::{diagnostic_severity, is_note, Severity};

/// Aktiviert ANSI-Sequenzen (Farben/Cursor) - ohne externe Crates.
/// Auf Windows via direktem FFI zu kernel32; auf anderen Plattformen no-op.
pub fn enable_ansi() {
    #[cfg(windows)]
    unsafe {
        // Minimaler FFI-Sockel, keine winapi/windows-Crates.
        use std::ffi::c_void;
        type HANDLE = *mut c_void;
        type DWORD = u32;
        type BOOL = i32;

        const STD_OUTPUT_HANDLE: i32 = -11; // (DWORD)-11
        const ENABLE_VIRTUAL_TERMINAL_PROCESSING: DWORD = 0x0004;

        #[link(name = "kernel32")]
        extern "system" {
            fn GetStdHandle(nStdHandle: i32) -> HANDLE;
            fn GetConsoleMode(hConsoleHandle: HANDLE, lpMode: *mut DWORD) -> BOOL;
            fn SetConsoleMode(hConsoleHandle: HANDLE, dwMode: DWORD) -> BOOL;
        }

        let h = GetStdHandle(STD_OUTPUT_HANDLE);
        if !h.is_null() {
            let mut mode: DWORD = 0;
            if GetConsoleMode(h, &mut mode) != 0 {
                let _ = SetConsoleMode(h, mode | ENABLE_VIRTUAL_TERMINAL_PROCESSING);
            }
        }
    }
    #[cfg(not(windows))]
    {
        // nix zu tun
    }
}

static COLOR_DISABLED: AtomicBool = AtomicBool::new(false);

/// Runtime off-switch for --no-color.
pub fn disable_color() {
    COLOR_DISABLED.store(true, Ordering::SeqCst);
}

/// Farben global aktiv?
/// --no-color oder OTTER_COLOR=0 -> aus; alles andere -> an (Default).
pub fn color_enabled() -> bool {
    if COLOR_DISABLED.load(Ordering::SeqCst) {
        return false;
    }
    !matches!(env::var("OTTER_COLOR"), Ok(v) if v.trim() == "0")
}

// ANSI Codes (nur verwenden, wenn color_enabled()).
const RESET: &str = "\x1b[0m";
const RED: &str = "\x1b[31m";
const YELLOW: &str = "\x1b[33m";
const BLUE: &str = "\x1b[34m";
const MAGENTA: &str = "\x1b[35m";
const CYAN: &str = "\x1b[36m";
const BRIGHT_BLACK: &str = "\x1b[90m";

fn paint(s: &str, code: &str) -> String {
    if color_enabled() {
        format!("{code}{s}{RESET}")
    } else {
        s.to_string()
    }
}

fn tag_colored(s: &str) -> String {
    let (txt_owned, col) = match s {
        "FILTER" => ("[FILTER]".to_string(), CYAN),
        "RUN" => ("[RUN]".to_string(), BLUE),
        "TEST" => ("[TEST]".to_string(), MAGENTA),
        other => (format!("[{}]", other), CYAN),
    };
    paint(&txt_owned, col)
}

pub fn out_info(src: &str, msg: &str) {
    let t = tag_colored(src);
    let m = msg.trim_end_matches('\n');
    let _ = writeln!(io::stdout(), "{} {}", t, m);
    let _ = io::stdout().flush();
}

pub fn out_warn(src: &str, msg: &str) {
    let t = tag_colored(src);
    let m = paint(msg.trim_end_matches('\n'), YELLOW);
    let _ = writeln!(io::stdout(), "{} {}", t, m);
    let _ = io::stdout().flush();
}

pub fn out_err(src: &str, msg: &str) {
    let t = tag_colored(src);
    let m = paint(msg.trim_end_matches('\n'), RED);
    let _ = writeln!(io::stderr(), "{} {}", t, m);
    let _ = io::stderr().flush();
}

/// Colorize one filtered line for console display, keyed off its content.
/// Section labels magenta, errors red, warnings yellow, notes dim.
pub fn colorize_line(line: &str) -> String {
    if line.starts_with("--- ") {
        return paint(line, MAGENTA);
    }
    match diagnostic_severity(line) {
        Some(Severity::FatalError) | Some(Severity::Error) => paint(line, RED),
        Some(Severity::Warning) => paint(line, YELLOW),
        None if is_note(line) => paint(line, BRIGHT_BLACK),
        None => line.to_string(),
    }
}
