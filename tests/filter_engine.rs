///// Otter: Integration coverage for the filter engine through the public API.
///// Schneefuchs: Mixed GCC/MSVC fixture; checks ordering, pairing and mode parity.
///// Maus: No I/O here - pure sequences in, pure sequences out.
///// Datei: tests/filter_engine.rs

use otter_filter::engine::engine_classify::{is_caret_marker, is_source_excerpt};
use otter_filter::engine::engine_extract::extract_filename;
use otter_filter::engine::{filter_lines, FilterConfig};

fn lines(v: &[&str]) -> Vec<String> {
    v.iter().map(|s| s.to_string()).collect()
}

fn flat_cfg() -> FilterConfig {
    FilterConfig { no_grouping: true, ..FilterConfig::default() }
}

const MIXED_BUILD_LOG: &[&str] = &[
    "make: Entering directory '/work'",
    "Compiling main.c",
    "gcc -Wall -c main.c -o main.o",
    "",
    "main.c:5:10: error: expected ';' before 'return'",
    "    5 |   int x = 5",
    "      |          ^",
    "In file included from util.h:3:",
    "types.h:12:1: warning: padding struct 'pkt'",
    "   12 | struct pkt {",
    "      | ^~~~~~",
    "note: consider reordering members",
    "foo.cpp(12,5): error C2143: syntax error",
    "note: 'strcpy' has been explicitly marked deprecated here (ucrt)",
    "   50 | _CRT_DEPRECATE_TEXT(\"no\")",
    "      | ^",
    "ld: warning only shown once",
    "main.c:9:2: warning: unused variable 'y'",
    "2 errors generated.",
];

#[test]
fn flat_mode_preserves_diagnostic_triples_in_order() {
    let input = lines(&[
        "main.c:5:10: error: expected ';'",
        "    5 |   int x = 5",
        "      |          ^",
    ]);
    assert_eq!(filter_lines(&input, &flat_cfg()), input);
}

#[test]
fn msvc_extractor_recovers_filename() {
    assert_eq!(
        extract_filename("foo.cpp(12,5): error C2143: syntax error"),
        Some("foo.cpp".to_string())
    );
}

#[test]
fn grouped_sections_follow_first_appearance() {
    let out = filter_lines(&lines(MIXED_BUILD_LOG), &FilterConfig::default());

    let pos = |needle: &str| out.iter().position(|l| l.contains(needle));
    let main_hdr = pos("Errors in file: main.c").expect("main.c section");
    let types_hdr = pos("Errors in file: types.h").expect("types.h section");
    let foo_hdr = pos("Errors in file: foo.cpp").expect("foo.cpp section");
    assert!(main_hdr < types_hdr && types_hdr < foo_hdr);

    // Each filename gets exactly one section.
    let hdr_count = out.iter().filter(|l| l.contains("Errors in file: main.c")).count();
    assert_eq!(hdr_count, 1);

    // Both main.c diagnostics are inside the main.c section.
    let unused = pos("unused variable 'y'").expect("second main.c diagnostic");
    assert!(main_hdr < unused && unused < types_hdr);
}

#[test]
fn inclusion_trace_precedes_the_diagnostic_it_explains() {
    let out = filter_lines(&lines(MIXED_BUILD_LOG), &FilterConfig::default());
    let trace = out.iter().position(|l| l.contains("In file included from util.h")).unwrap();
    let diag = out.iter().position(|l| l.contains("padding struct")).unwrap();
    let hdr = out.iter().position(|l| l.contains("Errors in file: types.h")).unwrap();
    assert!(hdr < trace && trace < diag);
}

#[test]
fn caret_lines_always_directly_follow_their_excerpt() {
    for cfg in [FilterConfig::default(), flat_cfg()] {
        let out = filter_lines(&lines(MIXED_BUILD_LOG), &cfg);
        for (idx, line) in out.iter().enumerate() {
            if is_caret_marker(line) && !is_source_excerpt(line) {
                assert!(idx > 0, "caret without predecessor");
                assert!(
                    is_source_excerpt(&out[idx - 1]),
                    "caret at {idx} not preceded by an excerpt: {line}"
                );
            }
        }
    }
}

#[test]
fn kept_line_multiset_identical_between_modes() {
    let flat_out = filter_lines(&lines(MIXED_BUILD_LOG), &flat_cfg());
    let grouped_out = filter_lines(&lines(MIXED_BUILD_LOG), &FilterConfig::default());

    let mut grouped_core: Vec<String> = grouped_out
        .into_iter()
        .filter(|l| !l.is_empty() && !l.starts_with("--- "))
        .collect();
    let mut flat_sorted = flat_out;
    grouped_core.sort();
    flat_sorted.sort();
    assert_eq!(grouped_core, flat_sorted);
}

#[test]
fn rerunning_flat_output_removes_nothing_further() {
    let once = filter_lines(&lines(MIXED_BUILD_LOG), &flat_cfg());
    let twice = filter_lines(&once, &flat_cfg());
    assert_eq!(once, twice);
}

#[test]
fn noise_suppression_toggle_controls_crt_notes_only() {
    let input = lines(MIXED_BUILD_LOG);

    let silent = filter_lines(&input, &FilterConfig::default());
    assert!(!silent.iter().any(|l| l.contains("deprecated here")));
    assert!(silent.iter().any(|l| l.contains("consider reordering")));

    let cfg = FilterConfig { show_all_notes: true, ..FilterConfig::default() };
    let verbose = filter_lines(&input, &cfg);
    assert!(verbose.iter().any(|l| l.contains("deprecated here")));
}

#[test]
fn unclassified_linker_line_survives_both_modes() {
    for cfg in [FilterConfig::default(), flat_cfg()] {
        let out = filter_lines(&lines(MIXED_BUILD_LOG), &cfg);
        assert!(out.iter().any(|l| l.contains("only shown once")));
    }
}

#[test]
fn empty_input_yields_empty_output() {
    assert!(filter_lines(&[], &FilterConfig::default()).is_empty());
    assert!(filter_lines(&[], &flat_cfg()).is_empty());
}
