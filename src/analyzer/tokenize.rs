//! Word and sentence tokenization.
//!
//! Two sentence regimes exist on purpose: `sentences` discards terminator
//! punctuation and is used only for counting, while
//! `sentences_with_punctuation` keeps each sentence's trailing terminator
//! run so rules can inspect the last character. Keeping them as separate
//! functions avoids coupling the readability count to the style checks.

use regex::Regex;
use std::sync::OnceLock;

fn terminator_runs() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[.!?]+").unwrap())
}

/// Split text into whitespace-delimited words, dropping empty tokens.
/// Order is preserved.
pub fn words(text: &str) -> Vec<&str> {
    text.split_whitespace().collect()
}

/// Split text into sentences for counting. Runs of `.`, `!`, `?` delimit
/// sentences; fragments that trim to nothing are dropped.
pub fn sentences(text: &str) -> Vec<&str> {
    terminator_runs()
        .split(text)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}

/// Split text into logical sentences, each keeping its trailing terminator
/// run. A terminator run is appended to the previously accumulated
/// sentence when one exists; a leading run with nothing before it becomes
/// its own entry. Whitespace-only fragments are dropped and text
/// fragments are trimmed.
pub fn sentences_with_punctuation(text: &str) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    let mut last = 0;
    for m in terminator_runs().find_iter(text) {
        push_text(&mut out, &text[last..m.start()]);
        match out.last_mut() {
            Some(prev) => prev.push_str(m.as_str()),
            None => out.push(m.as_str().to_string()),
        }
        last = m.end();
    }
    push_text(&mut out, &text[last..]);
    out
}

fn push_text(out: &mut Vec<String>, fragment: &str) {
    let trimmed = fragment.trim();
    if !trimmed.is_empty() {
        out.push(trimmed.to_string());
    }
}
