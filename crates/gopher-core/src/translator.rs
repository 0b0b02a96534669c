//! Word and sentence translation into gopher-speak.
//!
//! Words are lowercased, then rotated at the first vowel (falling back to the
//! first `y`) with an `ogo` suffix. Words that already start with a vowel, or
//! with `xr`, get a `g`/`ge` prefix instead.

use crate::error::TranslationError;
use tracing::debug;

const VOWELS: &[char] = &['a', 'e', 'i', 'o', 'u'];
const TRAILING_MARKS: &[char] = &[',', '.', '?', '!'];
const SUFFIX: &str = "ogo";
const PREFIX: &str = "g";
const XR_PREFIX: &str = "ge";

/// `'` plus each character of a right single quote read back as Windows-1252.
const APOSTROPHES: &[char] = &['\'', '\u{e2}', '\u{20ac}', '\u{2122}'];

fn is_contraction(word: &str) -> bool {
    word.contains(APOSTROPHES)
}

/// Byte offset where the word is rotated, plus the prefix used when it is 0.
fn split_point(word: &str) -> Option<(usize, &'static str)> {
    if word.starts_with("xr") {
        return Some((0, XR_PREFIX));
    }

    let mut idx = word.find(VOWELS).or_else(|| word.find('y'))?;

    // "qu" acts as a consonant: "squeeze" splits after the u.
    if idx >= 2 && &word.as_bytes()[idx - 1..=idx] == b"qu" {
        idx += 1;
    }
    Some((idx, PREFIX))
}

/// Translate a single word.
pub fn translate_word(word: &str) -> Result<String, TranslationError> {
    if word.is_empty() {
        return Err(TranslationError::empty_word());
    }
    if is_contraction(word) {
        return Err(TranslationError::contraction());
    }

    let word = word.to_lowercase();
    let (idx, prefix) = split_point(&word).ok_or_else(|| TranslationError::no_vowels(&word))?;

    if idx == 0 {
        return Ok(format!("{prefix}{word}"));
    }

    let (head, tail) = word.split_at(idx);
    let mut out = String::with_capacity(word.len() + SUFFIX.len());
    out.push_str(tail);
    out.push_str(head);
    out.push_str(SUFFIX);
    Ok(out)
}

/// Detach one trailing `,` `.` `?` or `!` from a token.
pub fn split_trailing_mark(token: &str) -> (&str, Option<char>) {
    match token.chars().next_back() {
        Some(c) if TRAILING_MARKS.contains(&c) => (&token[..token.len() - c.len_utf8()], Some(c)),
        _ => (token, None),
    }
}

/// Translate a space-separated sentence, keeping one trailing mark per word.
///
/// Contractions are dropped from the output. Any other failing word aborts
/// the whole sentence.
pub fn translate_sentence(sentence: &str) -> Result<String, TranslationError> {
    let mut words = Vec::new();

    for token in sentence.split(' ') {
        let (word, mark) = split_trailing_mark(token);
        let mut translated = match translate_word(word) {
            Ok(t) => t,
            Err(TranslationError::ConfusedGopher { .. }) => {
                debug!(token, "dropping contraction");
                continue;
            }
            Err(e) => return Err(e),
        };
        if let Some(m) = mark {
            translated.push(m);
        }
        words.push(translated);
    }

    Ok(words.join(" "))
}
