use regex::Regex;
use std::sync::OnceLock;

fn sentence_end() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"[.!?…]+\s+").expect("valid sentence pattern"))
}

fn clause_end() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"[,;:]\s+").expect("valid clause pattern"))
}

fn word_gap() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\s+").expect("valid word pattern"))
}

fn char_len(text: &str) -> usize {
    text.chars().count()
}

/// Split after every match, keeping the delimiter on the left piece
fn split_after<'a>(text: &'a str, pattern: &Regex) -> Vec<&'a str> {
    let mut pieces = Vec::new();
    let mut last_end = 0;

    for mat in pattern.find_iter(text) {
        pieces.push(&text[last_end..mat.end()]);
        last_end = mat.end();
    }
    if last_end < text.len() {
        pieces.push(&text[last_end..]);
    }

    pieces
}

/// Break `text` into pieces of at most `max_len` characters, trying sentence ends
/// first, then clause punctuation, then word gaps, and cutting hard as a last resort
fn collect_pieces(text: &str, max_len: usize, patterns: &[&Regex], out: &mut Vec<String>) {
    if char_len(text) <= max_len {
        out.push(text.to_string());
        return;
    }

    match patterns.split_first() {
        Some((pattern, rest)) => {
            for piece in split_after(text, pattern) {
                collect_pieces(piece, max_len, rest, out);
            }
        }
        None => {
            let chars: Vec<char> = text.chars().collect();
            for chunk in chars.chunks(max_len) {
                out.push(chunk.iter().collect());
            }
        }
    }
}

/// Split text into batches that respect sentence boundaries where possible.
/// Each batch is trimmed and at most `max_len` characters; blank batches are dropped.
pub fn split_into_batches(text: &str, max_len: usize) -> Vec<String> {
    let max_len = max_len.max(1);
    let mut pieces = Vec::new();
    collect_pieces(
        text,
        max_len,
        &[sentence_end(), clause_end(), word_gap()],
        &mut pieces,
    );

    let mut batches = Vec::new();
    let mut current_batch = String::new();

    for piece in pieces {
        // If adding this piece would exceed the limit, save current batch
        if !current_batch.is_empty() && char_len(&current_batch) + char_len(&piece) > max_len {
            batches.push(current_batch.trim().to_string());
            current_batch.clear();
        }
        current_batch.push_str(&piece);
    }

    // Add any remaining batch
    if !current_batch.is_empty() {
        batches.push(current_batch.trim().to_string());
    }

    batches.retain(|batch| !batch.is_empty());
    batches
}
