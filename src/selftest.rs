///// Otter: Built-in filter scenarios behind --selftest; quick sanity without a toolchain.
///// Schneefuchs: Pattern containment checks against the real engine, colors off-path.
///// Maus: Prints one PASS/FAIL per case; exit 0 only when everything passed.
///// Datei: src/selftest.rs

use crate::engine::{filter_lines, FilterConfig};
use crate::term::{out_err, out_info};

struct Case {
    name: &'static str,
    cfg: FilterConfig,
    input: &'static [&'static str],
    expect_present: &'static [&'static str],
    expect_absent: &'static [&'static str],
}

const CASES: &[Case] = &[
    Case {
        name: "simple error keeps excerpt and caret",
        cfg: FilterConfig { debug_trace: false, show_all_notes: false, no_grouping: false },
        input: &[
            "make: Entering directory '/src'",
            "gcc -c main.c -o main.o",
            "main.c:5:10: error: expected ';' before 'return'",
            "    5 |   int x = 5",
            "      |          ^",
            "note: some note here",
            "make: Leaving directory '/src'",
        ],
        expect_present: &[
            "main.c:5:10: error",
            "int x = 5",
            "^",
            "note: some note here",
        ],
        expect_absent: &[],
    },
    Case {
        name: "crt noise note suppressed by default",
        cfg: FilterConfig { debug_trace: false, show_all_notes: false, no_grouping: false },
        input: &[
            "main.c:10:5: warning: '_CRT_SECURE_NO_WARNINGS' should be defined",
            "  10 |   strcpy(dst, src);",
            "     |   ^~~~~~",
            "note: 'strcpy' has been explicitly marked deprecated here (ucrt)",
        ],
        expect_present: &["main.c:10:5: warning", "strcpy(dst, src)", "^~~~~~"],
        expect_absent: &["deprecated here"],
    },
    Case {
        name: "show-all-notes keeps crt note",
        cfg: FilterConfig { debug_trace: false, show_all_notes: true, no_grouping: false },
        input: &[
            "main.c:10:5: warning: '_CRT_SECURE_NO_WARNINGS' should be defined",
            "  10 |   strcpy(dst, src);",
            "     |   ^~~~~~",
            "note: 'strcpy' has been explicitly marked deprecated here (ucrt)",
        ],
        expect_present: &[
            "main.c:10:5: warning",
            "strcpy(dst, src)",
            "note: 'strcpy' has been explicitly marked deprecated here",
        ],
        expect_absent: &[],
    },
    Case {
        name: "msvc diagnostics group by file",
        cfg: FilterConfig { debug_trace: false, show_all_notes: false, no_grouping: false },
        input: &[
            "foo.cpp(12,5): error C2143: syntax error",
            "bar.cpp(3): warning C4996: 'strcpy' was declared deprecated",
        ],
        expect_present: &["foo.cpp ---", "bar.cpp ---", "error C2143", "warning C4996"],
        expect_absent: &[],
    },
];

/// Run all cases; returns the process exit code (0 = all passed).
pub fn run() -> i32 {
    let mut failed = 0usize;

    for case in CASES {
        let input: Vec<String> = case.input.iter().map(|s| s.to_string()).collect();
        let output = filter_lines(&input, &case.cfg);
        let joined = output.join("\n");

        let mut ok = true;
        for pat in case.expect_present {
            if !joined.contains(pat) {
                out_err("TEST", &format!("{}: missing pattern '{}'", case.name, pat));
                ok = false;
            }
        }
        for pat in case.expect_absent {
            if joined.contains(pat) {
                out_err("TEST", &format!("{}: unexpected pattern '{}'", case.name, pat));
                ok = false;
            }
        }

        if ok {
            out_info("TEST", &format!("PASS {}", case.name));
        } else {
            out_err("TEST", &format!("FAIL {}", case.name));
            failed += 1;
        }
    }

    if failed == 0 {
        out_info("TEST", &format!("all {} cases passed", CASES.len()));
        0
    } else {
        out_err("TEST", &format!("{failed} of {} cases failed", CASES.len()));
        1
    }
}
