//! WinAnsi (CP1252) text encoding for the standard fonts.

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// CP1252 code points in 0x80..=0x9F that differ from Latin-1.
const CP1252_SPECIALS: [(u8, char); 27] = [
    (0x80, '€'),
    (0x82, '‚'),
    (0x83, 'ƒ'),
    (0x84, '„'),
    (0x85, '…'),
    (0x86, '†'),
    (0x87, '‡'),
    (0x88, 'ˆ'),
    (0x89, '‰'),
    (0x8A, 'Š'),
    (0x8B, '‹'),
    (0x8C, 'Œ'),
    (0x8E, 'Ž'),
    (0x91, '‘'),
    (0x92, '’'),
    (0x93, '“'),
    (0x94, '”'),
    (0x95, '•'),
    (0x96, '–'),
    (0x97, '—'),
    (0x98, '˜'),
    (0x99, '™'),
    (0x9A, 'š'),
    (0x9B, '›'),
    (0x9C, 'œ'),
    (0x9E, 'ž'),
    (0x9F, 'Ÿ'),
];

static ENCODE_SPECIALS: Lazy<HashMap<char, u8>> =
    Lazy::new(|| CP1252_SPECIALS.iter().map(|(b, c)| (*c, *b)).collect());

/// Encode text for a `WinAnsiEncoding` font. Unmappable characters become `?`.
pub fn encode_win_ansi(s: &str) -> Vec<u8> {
    s.chars()
        .map(|c| match c as u32 {
            0x20..=0x7E | 0xA0..=0xFF => c as u8,
            0x09 => b' ',
            _ => ENCODE_SPECIALS.get(&c).copied().unwrap_or(b'?'),
        })
        .collect()
}

/// Inverse of [`encode_win_ansi`] for bytes read back from a content stream.
pub fn decode_win_ansi(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|&b| match b {
            0x80..=0x9F => CP1252_SPECIALS
                .iter()
                .find(|(code, _)| *code == b)
                .map(|(_, c)| *c)
                .unwrap_or('?'),
            _ => b as char,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_passes_through() {
        assert_eq!(encode_win_ansi("Central Delhi"), b"Central Delhi".to_vec());
    }

    #[test]
    fn bullet_and_dashes_use_cp1252_slots() {
        assert_eq!(encode_win_ansi("• – —"), vec![0x95, b' ', 0x96, b' ', 0x97]);
        assert_eq!(decode_win_ansi(&[0x95, b' ', b'x']), "• x");
    }

    #[test]
    fn unmappable_becomes_question_mark() {
        assert_eq!(encode_win_ansi("आधार"), b"????".to_vec());
    }

    #[test]
    fn latin1_round_trips() {
        let text = "Café déjà vu";
        assert_eq!(decode_win_ansi(&encode_win_ansi(text)), text);
    }
}
