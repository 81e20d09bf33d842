//! The 64-symbol text alphabet and the bitstream ↔ text transcoding.
//!
//! The alphabet matches the classic base64 character set, but symbols are
//! mapped by index lookup rather than by any byte-group arithmetic: each
//! symbol carries exactly six LSB-first stream bits.

use crate::bits::{bits_to_value, value_to_bits};
use crate::errors::DecodeError;

/// Symbol table, order-significant: the symbol at index `i` encodes the
/// 6-bit value `i`.
pub const ALPHABET: &[u8; 64] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";

/// Stream bits carried by one symbol.
pub const SYMBOL_BITS: usize = 6;

/// Looks up a symbol's value in the alphabet.
pub fn symbol_index(symbol: char) -> Result<u64, DecodeError> {
    ALPHABET
        .iter()
        .position(|&c| c as char == symbol)
        .map(|index| index as u64)
        .ok_or(DecodeError::UnknownSymbol(symbol))
}

/// Renders a bitstream as text, 6 bits per symbol, earliest bits first.
///
/// The final group is implicitly right-padded with 0 bits; the field layout
/// guarantees pad bits land after the last meaningful field.
pub fn bits_to_text(bits: &[u8]) -> String {
    let mut text = String::with_capacity(bits.len().div_ceil(SYMBOL_BITS));

    for group in bits.chunks(SYMBOL_BITS) {
        text.push(ALPHABET[bits_to_value(group) as usize] as char);
    }

    text
}

/// Expands text back into the flat bitstream, 6 bits per symbol.
///
/// A character outside the alphabet fails with [DecodeError::UnknownSymbol].
pub fn text_to_bits(text: &str) -> Result<Vec<u8>, DecodeError> {
    let mut bits = Vec::with_capacity(text.len() * SYMBOL_BITS);

    for symbol in text.chars() {
        bits.extend(value_to_bits(symbol_index(symbol)?, SYMBOL_BITS));
    }

    Ok(bits)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbol_index() {
        assert_eq!(symbol_index('A').unwrap(), 0);
        assert_eq!(symbol_index('Z').unwrap(), 25);
        assert_eq!(symbol_index('a').unwrap(), 26);
        assert_eq!(symbol_index('0').unwrap(), 52);
        assert_eq!(symbol_index('/').unwrap(), 63);
    }

    #[test]
    fn test_symbol_index_unknown() {
        assert_eq!(
            symbol_index('*').unwrap_err(),
            DecodeError::UnknownSymbol('*')
        );
        assert_eq!(
            symbol_index('=').unwrap_err(),
            DecodeError::UnknownSymbol('=')
        );
    }

    #[test]
    fn test_bits_to_text_pads_final_group() {
        // 7 bits -> two symbols, the second carrying one data bit and five pad bits
        let bits = [0, 1, 1, 1, 0, 0, 1];
        assert_eq!(bits_to_text(&bits), "OB");
    }

    #[test]
    fn test_text_to_bits() {
        // 'O' is index 14 -> LSB-first 011100
        assert_eq!(text_to_bits("O").unwrap(), vec![0, 1, 1, 1, 0, 0]);
    }

    #[test]
    fn test_text_to_bits_rejects_unknown() {
        assert_eq!(
            text_to_bits("OQ!").unwrap_err(),
            DecodeError::UnknownSymbol('!')
        );
    }

    #[test]
    fn test_closure_on_aligned_streams() {
        let bits: Vec<u8> = (0..60).map(|i| ((i * 7) % 3 == 0) as u8).collect();
        assert_eq!(text_to_bits(&bits_to_text(&bits)).unwrap(), bits);
    }
}
