//! Width-measured greedy text wrapping.
//!
//! The wrapper is pure: given the same text, width, and measure function it
//! always yields the same lines, in input order. Explicit line breaks are
//! honored first so the author's paragraph structure survives wrapping.

use unicode_width::UnicodeWidthStr;

/// Wrap `text` into lines no wider than `max_width` under `measure`.
///
/// Each source line (split on `\n`) is wrapped independently: words are
/// accumulated greedily and the line is flushed when the next word would
/// exceed `max_width`. A single word that is wider than `max_width` on its
/// own is emitted alone and allowed to overflow; words are never split.
/// Empty source lines produce one empty output line to preserve blank-line
/// spacing.
///
/// A measure that returns a non-finite value is treated as an overflow for
/// that candidate, so wrapping always terminates and degrades to one word
/// per line rather than looping or panicking.
///
/// # Returns
/// The wrapped lines, in input order.
pub fn wrap<F>(text: &str, max_width: f32, measure: F) -> Vec<String>
where
    F: Fn(&str) -> f32,
{
    let mut lines = Vec::new();
    for source_line in text.split('\n') {
        wrap_source_line(source_line, max_width, &measure, &mut lines);
    }
    lines
}

fn wrap_source_line<F>(source_line: &str, max_width: f32, measure: &F, out: &mut Vec<String>)
where
    F: Fn(&str) -> f32,
{
    let mut words = source_line.split_whitespace();
    let Some(first) = words.next() else {
        // Blank source line: keep one empty output line.
        out.push(String::new());
        return;
    };

    let mut current = first.to_string();
    for word in words {
        let candidate_width = {
            let width = measure(&format!("{current} {word}"));
            if width.is_finite() {
                width
            } else {
                f32::INFINITY
            }
        };
        if candidate_width <= max_width {
            current.push(' ');
            current.push_str(word);
        } else {
            out.push(std::mem::replace(&mut current, word.to_string()));
        }
    }
    out.push(current);
}

/// Column-count measure for monospace-style geometry.
///
/// Uses display columns (via `unicode-width`) times a fixed per-column
/// width, which is exact for terminal output and a serviceable
/// approximation for proportional fonts.
pub fn monospace_measure(column_width: f32) -> impl Fn(&str) -> f32 {
    move |s: &str| s.width() as f32 * column_width
}
