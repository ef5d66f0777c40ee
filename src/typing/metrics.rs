//! Words-per-minute and per-character scoring

use std::time::Duration;

/// Characters counted as one word
pub const CHARS_PER_WORD: f64 = 5.0;

/// Words per minute for `chars` characters typed over `elapsed`.
///
/// Rounded to the nearest whole word. Degenerate inputs (no time elapsed,
/// nothing typed) give 0 rather than NaN or infinity.
pub fn wpm(chars: usize, elapsed: Duration) -> u32 {
    let minutes = elapsed.as_secs_f64() / 60.0;
    let raw = (chars as f64 / CHARS_PER_WORD) / minutes;
    if raw.is_finite() && raw > 0.0 {
        raw.round() as u32
    } else {
        0
    }
}

/// How a single target character should be shown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    TypedCorrect,
    TypedIncorrect,
    /// Next character to type
    Cursor,
    Untyped,
}

/// Classify target index `i` against what has been typed so far.
///
/// Only meaningful for `i < target.len()`; anything past the end of the
/// target is reported as [`CharClass::Untyped`].
pub fn classify(target: &[char], buffer: &[char], finished: bool, i: usize) -> CharClass {
    let Some(expected) = target.get(i) else {
        return CharClass::Untyped;
    };
    match buffer.get(i) {
        Some(typed) if typed == expected => CharClass::TypedCorrect,
        Some(_) => CharClass::TypedIncorrect,
        None if i == buffer.len() && !finished => CharClass::Cursor,
        None => CharClass::Untyped,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn sixty_chars_in_a_minute_is_twelve() {
        assert_eq!(wpm(60, Duration::from_secs(60)), 12);
    }

    #[test]
    fn wpm_rounds_to_nearest() {
        // 10 chars in 50s = 2 words / 0.8333 min = 2.4
        assert_eq!(wpm(10, Duration::from_secs(50)), 2);
        // 13 chars in 60s = 2.6 words
        assert_eq!(wpm(13, Duration::from_secs(60)), 3);
    }

    #[test]
    fn wpm_zero_elapsed_is_zero() {
        assert_eq!(wpm(40, Duration::ZERO), 0);
        assert_eq!(wpm(0, Duration::ZERO), 0);
    }

    #[test]
    fn wpm_nothing_typed_is_zero() {
        assert_eq!(wpm(0, Duration::from_secs(30)), 0);
    }

    #[test]
    fn classify_mixed_buffer() {
        let target = chars("abcd");
        let buffer = chars("ax");
        assert_eq!(classify(&target, &buffer, false, 0), CharClass::TypedCorrect);
        assert_eq!(classify(&target, &buffer, false, 1), CharClass::TypedIncorrect);
        assert_eq!(classify(&target, &buffer, false, 2), CharClass::Cursor);
        assert_eq!(classify(&target, &buffer, false, 3), CharClass::Untyped);
    }

    #[test]
    fn classify_no_cursor_when_finished() {
        let target = chars("ab");
        let buffer = chars("a");
        assert_eq!(classify(&target, &buffer, true, 1), CharClass::Untyped);
    }

    #[test]
    fn classify_overlong_buffer() {
        let target = chars("ab");
        let buffer = chars("abzz");
        assert_eq!(classify(&target, &buffer, false, 1), CharClass::TypedCorrect);
        assert_eq!(classify(&target, &buffer, false, 2), CharClass::Untyped);
    }

    #[test]
    fn classify_compares_chars_not_bytes() {
        let target = chars("ёж");
        let buffer = chars("ё");
        assert_eq!(classify(&target, &buffer, false, 0), CharClass::TypedCorrect);
        assert_eq!(classify(&target, &buffer, false, 1), CharClass::Cursor);
    }
}
