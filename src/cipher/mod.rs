//! Cyclic alphabetic shift shared by encoding and decoding

use crate::{Shift, ALPHABET_LEN};

/// Advance every ASCII letter `shift` positions, wrapping within its case.
/// Any other character is copied unchanged.
pub fn shift_text(text: &str, shift: Shift) -> String {
    text.chars().map(|c| shift_char(c, shift)).collect()
}

/// Undo a shift: same transform with the complementary shift
pub fn decipher(ciphertext: &str, shift: Shift) -> String {
    shift_text(ciphertext, shift.inverse())
}

/// Shift a single character
pub fn shift_char(c: char, shift: Shift) -> char {
    let base = match c {
        'A'..='Z' => b'A',
        'a'..='z' => b'a',
        _ => return c,
    };
    let offset = (c as u8 - base + shift.value()) % ALPHABET_LEN;
    (base + offset) as char
}

/// Keep only the ASCII letters of `text`
pub fn letters_only(text: &str) -> String {
    text.chars().filter(char::is_ascii_alphabetic).collect()
}
