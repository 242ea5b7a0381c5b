///// Otter: Line predicates for compiler output - GCC/Clang and MSVC conventions, no regex.
///// Schneefuchs: Pure functions over &str; substring heuristics; case-sensitive noise list.
///// Maus: One predicate per question; precedence is decided by the engine, not here.
///// Datei: src/engine/engine_classify.rs

/// Severity carried by a primary diagnostic line.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Severity {
    FatalError,
    Error,
    Warning,
}

/// Toolchain-internal indicators: CRT macro spam, SDK paths, deprecation
/// boilerplate, calling-convention tokens. Substring test, untrimmed line.
const NOISE_INDICATORS: &[&str] = &[
    "_CRT_",
    "__declspec(deprecated",
    "_Check_return_",
    "__DEFINE_CPP_OVERLOAD",
    "has been explicitly marked deprecated here",
    "Windows Kits",
    "ucrt",
    "_INSECURE_DEPRECATE",
    "_DEPRECATE_TEXT",
    "__cdecl",
];

const PREAMBLE_KEYWORDS: &[&str] = &["Compiling ", "Running ", "Clean "];
const COMPILER_PREFIXES: &[&str] = &["clang ", "cc ", "gcc ", "cl "];
const JOB_CONTROL_PREFIX: &str = "make:";

const DIRECT_STARTERS: &[&str] = &["fatal error:", "error:", "warning:"];

// (marker text, needs a digit right after - i.e. MSVC "error C1234" form)
const EMBEDDED_MARKERS: &[(&str, bool)] = &[
    (": fatal error:", false),
    (": error:", false),
    (": warning:", false),
    (" fatal error C", true),
    (" error C", true),
    (" warning C", true),
];

pub fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}

/// Source excerpt: "   42 |   foo(bar);" - a digit gutter before the first pipe.
pub fn is_source_excerpt(line: &str) -> bool {
    let stripped = line.trim();
    match stripped.find('|') {
        Some(0) | None => false,
        Some(idx) => is_digit_run(stripped[..idx].trim()),
    }
}

/// Caret marker: "      |          ^~~~". Only meaningful right after an excerpt.
pub fn is_caret_marker(line: &str) -> bool {
    let stripped = line.trim();
    match stripped.find('|') {
        Some(idx) if idx + 1 < stripped.len() => stripped[idx + 1..].trim().starts_with('^'),
        _ => false,
    }
}

pub fn is_note(line: &str) -> bool {
    line.trim().starts_with("note:")
}

pub fn is_noise(line: &str) -> bool {
    NOISE_INDICATORS.iter().any(|ind| line.contains(ind))
}

/// Build-lifecycle lines: tool banners, compiler invocations, job control.
pub fn is_preamble(line: &str) -> bool {
    if PREAMBLE_KEYWORDS.iter().any(|kw| line.contains(kw)) {
        return true;
    }
    let stripped = line.trim();
    COMPILER_PREFIXES.iter().any(|p| stripped.starts_with(p))
        || stripped.starts_with(JOB_CONTROL_PREFIX)
}

pub fn is_postamble(line: &str) -> bool {
    line.contains("Build complete")
        || line.contains("errors generated")
        || line.contains("warnings generated")
        || (line.contains("error(s),") && line.contains("warning(s)"))
}

pub fn is_inclusion_start(line: &str) -> bool {
    line.trim().starts_with("In file included from")
}

/// Continuation of an inclusion trace: "                 from foo.h:12:".
pub fn is_inclusion_continuation(line: &str) -> bool {
    let stripped = line.trim();
    stripped.starts_with("from ") && stripped.ends_with(':')
}

/// Primary diagnostic: either a bare "error: ..." starter or an embedded
/// "file:line:col: error: ..." / "file(line,col): error C1234: ..." marker.
/// A "note:" earlier in the line vetoes the embedded match (a note quoting
/// an error phrase is still a note).
pub fn is_primary_diagnostic(line: &str) -> bool {
    let stripped = line.trim();
    if stripped.starts_with("note:") {
        return false;
    }
    if DIRECT_STARTERS.iter().any(|s| stripped.starts_with(s)) {
        return true;
    }
    for (marker, needs_digit) in EMBEDDED_MARKERS {
        if let Some(pos) = stripped.find(marker) {
            if pos == 0 {
                continue;
            }
            if *needs_digit && !digit_follows(stripped, pos + marker.len()) {
                continue;
            }
            if let Some(note_idx) = stripped.find("note:") {
                if note_idx < pos {
                    continue;
                }
            }
            return true;
        }
    }
    false
}

/// Severity of a primary diagnostic line; None for anything else.
pub fn diagnostic_severity(line: &str) -> Option<Severity> {
    if !is_primary_diagnostic(line) {
        return None;
    }
    let stripped = line.trim();
    if stripped.starts_with("fatal error:")
        || stripped.contains(": fatal error:")
        || stripped.contains(" fatal error C")
    {
        return Some(Severity::FatalError);
    }
    if stripped.starts_with("error:") || stripped.contains(": error:") {
        return Some(Severity::Error);
    }
    if stripped.contains(" error C") {
        return Some(Severity::Error);
    }
    Some(Severity::Warning)
}

pub(crate) fn is_digit_run(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_ascii_digit())
}

pub(crate) fn digit_follows(s: &str, idx: usize) -> bool {
    s.as_bytes().get(idx).is_some_and(|b| b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn excerpt_requires_digit_gutter_before_pipe() {
        assert!(is_source_excerpt("    5 |   int x = 5"));
        assert!(is_source_excerpt("  142 | foo();"));
        assert!(!is_source_excerpt("      |          ^"));
        assert!(!is_source_excerpt("| leading pipe"));
        assert!(!is_source_excerpt("abc | def"));
        assert!(!is_source_excerpt(""));
    }

    #[test]
    fn caret_marker_needs_caret_right_after_pipe() {
        assert!(is_caret_marker("      |          ^"));
        assert!(is_caret_marker("     |   ^~~~~~"));
        assert!(!is_caret_marker("    5 |   int x = 5"));
        assert!(!is_caret_marker("      |"));
        assert!(!is_caret_marker("no pipe here"));
    }

    #[test]
    fn note_prefix_is_trimmed_first() {
        assert!(is_note("note: candidate function"));
        assert!(is_note("   note: expanded from macro"));
        assert!(!is_note("a.c:1:1: note: declared here"));
    }

    #[test]
    fn noise_is_substring_and_case_sensitive() {
        assert!(is_noise("   50 | _CRT_DEPRECATE_TEXT(\"...\")"));
        assert!(is_noise("C:\\Program Files\\Windows Kits\\10\\ucrt\\string.h"));
        assert!(is_noise("int __cdecl main(void)"));
        assert!(!is_noise("plain source line"));
        assert!(!is_noise("_crt_ lowercase does not count"));
    }

    #[test]
    fn preamble_covers_keywords_and_compiler_prefixes() {
        assert!(is_preamble("Compiling main.c"));
        assert!(is_preamble("gcc -c main.c -o main.o"));
        assert!(is_preamble("  clang -Wall foo.c"));
        assert!(is_preamble("make: Entering directory '/src'"));
        assert!(!is_preamble("main.c:5:1: error: boom"));
        // "cl " must be a prefix, not a substring
        assert!(!is_preamble("special case"));
    }

    #[test]
    fn postamble_covers_summary_phrasings() {
        assert!(is_postamble("Build complete."));
        assert!(is_postamble("2 errors generated."));
        assert!(is_postamble("1 warnings generated."));
        assert!(is_postamble("3 error(s), 7 warning(s)"));
        assert!(!is_postamble("3 error(s) only"));
    }

    #[test]
    fn inclusion_trace_start_and_continuation() {
        assert!(is_inclusion_start("In file included from a.h:3:"));
        assert!(is_inclusion_start("  In file included from b.h:1,"));
        assert!(is_inclusion_continuation("                 from c.h:7:"));
        assert!(!is_inclusion_continuation("from c.h:7, more"));
        assert!(!is_inclusion_continuation("In file included from a.h:3:"));
    }

    #[test]
    fn primary_detects_direct_starters() {
        assert!(is_primary_diagnostic("error: linker command failed"));
        assert!(is_primary_diagnostic("fatal error: too many errors"));
        assert!(is_primary_diagnostic("  warning: unused variable"));
    }

    #[test]
    fn primary_detects_embedded_gcc_marker() {
        assert!(is_primary_diagnostic("main.c:5:10: error: expected ';'"));
        assert!(is_primary_diagnostic("src/foo.c:1:1: warning: unused"));
        assert!(is_primary_diagnostic("a.c:2: fatal error: a.h: No such file"));
    }

    #[test]
    fn primary_msvc_marker_requires_digit_after_c() {
        assert!(is_primary_diagnostic("foo.cpp(12,5): error C2143: syntax error"));
        assert!(is_primary_diagnostic("bar.cpp(3): warning C4996: deprecated"));
        assert!(!is_primary_diagnostic("bar.cpp(3): warning Cat: not a code"));
    }

    #[test]
    fn primary_rejected_when_note_precedes_marker() {
        assert!(!is_primary_diagnostic(
            "note: in expansion of macro 'X: error: quoted'"
        ));
        assert!(!is_primary_diagnostic(
            "a.c:1:1: note: see ': error:' in the manual"
        ));
    }

    #[test]
    fn severity_distinguishes_fatal_error_warning() {
        assert_eq!(
            diagnostic_severity("a.c:1:1: fatal error: stop"),
            Some(Severity::FatalError)
        );
        assert_eq!(
            diagnostic_severity("a.c:1:1: error: boom"),
            Some(Severity::Error)
        );
        assert_eq!(
            diagnostic_severity("foo.cpp(12,5): error C2143: syntax error"),
            Some(Severity::Error)
        );
        assert_eq!(
            diagnostic_severity("a.c:1:1: warning: meh"),
            Some(Severity::Warning)
        );
        assert_eq!(diagnostic_severity("    5 |   int x = 5"), None);
    }
}
