///// Otter: Grouping state machine - one forward pass, bounded lookahead, two run modes.
///// Schneefuchs: Pure over the input slice; config threaded explicitly, no globals.
///// Maus: Grouped mode regroups by file, flat mode only strips noise; blanks always drop.
///// Datei: src/engine.rs

pub mod engine_assemble;
pub mod engine_classify;
pub mod engine_extract;
pub mod engine_groups;

use self::engine_assemble::assemble;
use self::engine_classify as classify;
use self::engine_extract::extract_filename;
use self::engine_groups::{GroupKey, Groups};

/// Per-pass configuration, threaded into every call; nothing process-global.
#[derive(Clone, Copy, Debug, Default)]
pub struct FilterConfig {
    /// Emit one routing-decision line per input line to stderr.
    pub debug_trace: bool,
    /// Keep note lines even when they match the noise list.
    pub show_all_notes: bool,
    /// Flat mode: original order, noise stripping only.
    pub no_grouping: bool,
}

/// Filter a captured toolchain output. Total function: every line either
/// lands in the output or is deliberately dropped, never an error.
pub fn filter_lines(lines: &[String], cfg: &FilterConfig) -> Vec<String> {
    if cfg.no_grouping {
        filter_flat(lines, cfg)
    } else {
        filter_grouped(lines, cfg)
    }
}

fn filter_grouped(lines: &[String], cfg: &FilterConfig) -> Vec<String> {
    let mut groups = Groups::new();
    let mut current = GroupKey::Preamble;
    let mut pending_includes: Vec<String> = Vec::new();
    let mut i = 0usize;

    while i < lines.len() {
        let line = lines[i].trim_end().to_string();
        i += 1;

        if classify::is_blank(&line) {
            continue;
        }

        if classify::is_preamble(&line) {
            flush_pending(&mut groups, &mut pending_includes, &GroupKey::General);
            current = GroupKey::Preamble;
            groups.push(&current, line);
            continue;
        }
        if classify::is_postamble(&line) {
            flush_pending(&mut groups, &mut pending_includes, &GroupKey::General);
            current = GroupKey::Postamble;
            groups.push(&current, line);
            continue;
        }

        // Inclusion trace: buffer the start plus its continuations; attachment
        // is deferred until the next diagnostic claims them.
        if classify::is_inclusion_start(&line) {
            pending_includes.push(line);
            while i < lines.len() && classify::is_inclusion_continuation(&lines[i]) {
                pending_includes.push(lines[i].trim_end().to_string());
                i += 1;
            }
            continue;
        }

        if classify::is_primary_diagnostic(&line) {
            let target = match extract_filename(&line) {
                Some(name) => {
                    groups.note_file(&name);
                    GroupKey::File(name)
                }
                None => GroupKey::General,
            };
            // Inclusion context precedes the diagnostic it explains.
            flush_pending(&mut groups, &mut pending_includes, &target);
            current = target;
            groups.push(&current, line);
            continue;
        }

        // Pending includes not claimed by a diagnostic get orphaned to general
        // as soon as other detail content shows up.
        if !pending_includes.is_empty()
            && (classify::is_source_excerpt(&line) || classify::is_note(&line))
        {
            flush_pending(&mut groups, &mut pending_includes, &GroupKey::General);
            if current == GroupKey::Preamble {
                current = GroupKey::General;
            }
        }

        let active = match current {
            GroupKey::Preamble | GroupKey::Postamble => GroupKey::General,
            ref other => other.clone(),
        };

        let noisy = classify::is_noise(&line);

        if classify::is_note(&line) {
            if cfg.show_all_notes || !noisy {
                groups.push(&active, line);
            } else {
                trace(cfg, "skip noise note", &line);
            }
            continue;
        }

        if classify::is_source_excerpt(&line) {
            if noisy {
                trace(cfg, "skip noise excerpt", &line);
                if i < lines.len() && classify::is_caret_marker(&lines[i]) {
                    trace(cfg, "skip noise excerpt caret", lines[i].trim_end());
                    i += 1;
                }
            } else {
                groups.push(&active, line);
                // A caret annotation belongs to its excerpt, always adjacent.
                if i < lines.len() && classify::is_caret_marker(&lines[i]) {
                    groups.push(&active, lines[i].trim_end().to_string());
                    i += 1;
                }
            }
            continue;
        }

        if noisy {
            trace(cfg, "skip noise", &line);
            continue;
        }

        // Conservative default: unrecognized content (linker output etc.)
        // passes through verbatim.
        trace(cfg, "keep unclassified", &line);
        groups.push(&active, line);
    }

    flush_pending(&mut groups, &mut pending_includes, &GroupKey::General);
    assemble(&groups)
}

fn filter_flat(lines: &[String], cfg: &FilterConfig) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    let mut i = 0usize;

    while i < lines.len() {
        let line = lines[i].trim_end().to_string();
        i += 1;

        if classify::is_blank(&line) {
            continue;
        }

        if classify::is_preamble(&line)
            || classify::is_postamble(&line)
            || classify::is_primary_diagnostic(&line)
        {
            out.push(line);
            continue;
        }

        let noisy = classify::is_noise(&line);

        if classify::is_note(&line) {
            if cfg.show_all_notes || !noisy {
                out.push(line);
            } else {
                trace(cfg, "skip noise note", &line);
            }
            continue;
        }

        if classify::is_source_excerpt(&line) {
            if noisy {
                trace(cfg, "skip noise excerpt", &line);
                if i < lines.len() && classify::is_caret_marker(&lines[i]) {
                    trace(cfg, "skip noise excerpt caret", lines[i].trim_end());
                    i += 1;
                }
            } else {
                out.push(line);
                if i < lines.len() && classify::is_caret_marker(&lines[i]) {
                    out.push(lines[i].trim_end().to_string());
                    i += 1;
                }
            }
            continue;
        }

        if noisy {
            trace(cfg, "skip noise", &line);
            continue;
        }

        trace(cfg, "keep unclassified", &line);
        out.push(line);
    }

    out
}

fn flush_pending(groups: &mut Groups, pending: &mut Vec<String>, target: &GroupKey) {
    if !pending.is_empty() {
        groups.extend(target, pending.drain(..));
    }
}

// Routing trace goes to stderr so the filtered stdout stays comparable.
fn trace(cfg: &FilterConfig, reason: &str, line: &str) {
    if cfg.debug_trace {
        eprintln!("[TRACE] {reason}: {line}");
    }
}
