#![cfg_attr(not(test), no_std)]

use sword_protocol::NumericToken;

const CARDINALS: [(&str, u32); 20] = [
    ("zero", 0),
    ("one", 1),
    ("two", 2),
    ("three", 3),
    ("four", 4),
    ("five", 5),
    ("six", 6),
    ("seven", 7),
    ("eight", 8),
    ("nine", 9),
    ("ten", 10),
    ("eleven", 11),
    ("twelve", 12),
    ("thirteen", 13),
    ("fourteen", 14),
    ("fifteen", 15),
    ("sixteen", 16),
    ("seventeen", 17),
    ("eighteen", 18),
    ("nineteen", 19),
];

const TENS: [(&str, u32); 8] = [
    ("twenty", 20),
    ("thirty", 30),
    ("forty", 40),
    ("fifty", 50),
    ("sixty", 60),
    ("seventy", 70),
    ("eighty", 80),
    ("ninety", 90),
];

const ORDINALS: [(&str, u8); 6] = [
    ("first", 1),
    ("1st", 1),
    ("second", 2),
    ("2nd", 2),
    ("third", 3),
    ("3rd", 3),
];

/// Resolves a single token to a number.
///
/// Accepts ASCII digit strings that fit in `u32` and the cardinal words
/// zero through nineteen plus the tens twenty through ninety. `None` means
/// the token is not numeric; zero is `Some`.
pub fn resolve(token: &str) -> Option<NumericToken> {
    if let Some(value) = parse_digits(token) {
        return Some(NumericToken::new(value, false));
    }

    if let Some(value) = lookup(&TENS, token) {
        return Some(NumericToken::new(value, true));
    }

    lookup(&CARDINALS, token).map(|value| NumericToken::new(value, false))
}

/// True exactly for the words twenty, thirty … ninety.
pub fn is_tens_word(token: &str) -> bool {
    lookup(&TENS, token).is_some()
}

/// Joins a spoken tens word and ones word: (twenty, three) -> 23.
pub fn compound(tens: NumericToken, ones: NumericToken) -> Option<u32> {
    if tens.is_tens_word && ones.is_ones() {
        Some(tens.value + ones.value)
    } else {
        None
    }
}

/// Numeral of an ordinal book prefix: "first" and "1st" both give 1.
/// A bare digit is a number, never a prefix.
pub fn ordinal(token: &str) -> Option<u8> {
    lookup(&ORDINALS, token)
}

fn parse_digits(token: &str) -> Option<u32> {
    if token.is_empty() || !token.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    // Overflow is not a chapter or verse either
    token.parse().ok()
}

fn lookup<T: Copy>(table: &[(&str, T)], token: &str) -> Option<T> {
    table
        .iter()
        .find(|(word, _)| word.eq_ignore_ascii_case(token))
        .map(|&(_, value)| value)
}
