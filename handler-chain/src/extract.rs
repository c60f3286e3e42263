//! Numeric literal extraction from free text.
//!
//! Digits are any Unicode decimal digit (full-width `５` included); each is folded to ASCII before
//! the literal is parsed, so every match is a valid `f64` literal.

use std::sync::LazyLock;

use regex::Regex;

static NUMBER_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[-+]?\d*\.\d+|[-+]?\d+").expect("Invalid regex: numeric literal pattern")
});

static DIGIT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d$").expect("Invalid regex: single digit pattern"));

/// First two literals of `text` as `(a, b)`; anything after the second is ignored.
/// `None` when fewer than two literals are present.
pub fn operand_pair(text: &str) -> Option<(f64, f64)> {
    let mut numbers = literals(text);
    let a = numbers.next()?;
    let b = numbers.next()?;
    Some((a, b))
}

/// Every signed integer or decimal literal in `text`, in order of appearance.
fn literals(text: &str) -> impl Iterator<Item = f64> + '_ {
    NUMBER_PATTERN
        .find_iter(text)
        .filter_map(|m| to_ascii_literal(m.as_str()).parse::<f64>().ok())
}

fn to_ascii_literal(literal: &str) -> String {
    literal.chars().map(ascii_digit).collect()
}

/// Folds a Unicode decimal digit to its ASCII form; other chars pass through.
///
/// Decimal digits are encoded in contiguous runs of ten starting at zero, so the value is the
/// count of digits directly preceding `c`, modulo 10.
fn ascii_digit(c: char) -> char {
    if c.is_ascii() || !is_decimal_digit(c) {
        return c;
    }
    let preceding = (1..)
        .map_while(|k| char::from_u32((c as u32).checked_sub(k)?))
        .take_while(|&p| is_decimal_digit(p))
        .count();
    char::from(b'0' + (preceding % 10) as u8)
}

fn is_decimal_digit(c: char) -> bool {
    let mut buf = [0u8; 4];
    DIGIT.is_match(c.encode_utf8(&mut buf))
}
