//! Decoding of raw terminal bytes into normalized keys.
//!
//! Arrow keys arrive as escape sequences (`ESC [ A`, or `ESC O A` in application
//! cursor mode). A lone `ESC` can only be told apart from the start of such a
//! sequence by whether the next byte is already available, so every read here is
//! a non-blocking check and a missing follow-up byte ends the sequence.

use std::collections::VecDeque;
use std::io;

use arrayvec::ArrayVec;

use crate::types::Key;

const ESC: u8 = 0x1b;
const CTRL_C: u8 = 0x03;

/// A byte stream that can be checked without blocking.
pub trait ByteSource {
    /// The next byte if one is available right now.
    fn next_ready(&mut self) -> io::Result<Option<u8>>;
}

impl ByteSource for VecDeque<u8> {
    fn next_ready(&mut self) -> io::Result<Option<u8>> {
        Ok(self.pop_front())
    }
}

/// Decode at most one key from `src`.
///
/// Returns `None` when nothing is pending and also when the pending input is not
/// part of the key vocabulary; in that case the whole sequence is consumed.
pub fn decode_next(src: &mut impl ByteSource) -> io::Result<Option<Key>> {
    let Some(b) = src.next_ready()? else {
        return Ok(None);
    };

    match b {
        ESC => decode_escape(src),
        CTRL_C => Ok(Some(Key::Interrupt)),
        b'\r' | b'\n' | b'\t' => Ok(Some(Key::Char(b as char))),
        0x00..=0x1f | 0x7f => Ok(None),
        0x20..=0x7e => Ok(Some(Key::from_char(b as char))),
        _ => decode_utf8(b, src),
    }
}

fn decode_escape(src: &mut impl ByteSource) -> io::Result<Option<Key>> {
    match src.next_ready()? {
        Some(b'[') | Some(b'O') => {}
        // Lone ESC, or ESC + key (Alt chord): not in the vocabulary.
        _ => return Ok(None),
    }

    // Parameter/intermediate bytes, then one final byte.
    let mut bare = true;
    while let Some(b) = src.next_ready()? {
        match b {
            0x20..=0x3f => bare = false,
            0x40..=0x7e => {
                return Ok(match (bare, b) {
                    (true, b'A') => Some(Key::Up),
                    (true, b'B') => Some(Key::Down),
                    _ => None,
                });
            }
            _ => return Ok(None),
        }
    }
    Ok(None)
}

fn decode_utf8(lead: u8, src: &mut impl ByteSource) -> io::Result<Option<Key>> {
    let len = match lead {
        0xc0..=0xdf => 2,
        0xe0..=0xef => 3,
        0xf0..=0xf7 => 4,
        _ => return Ok(None),
    };

    let mut bytes = ArrayVec::<u8, 4>::new();
    bytes.push(lead);
    while bytes.len() < len {
        match src.next_ready()? {
            Some(b) if b & 0xc0 == 0x80 => bytes.push(b),
            _ => return Ok(None),
        }
    }

    Ok(std::str::from_utf8(&bytes)
        .ok()
        .and_then(|s| s.chars().next())
        .map(Key::from_char))
}

/// Key source over a non-blocking byte stream.
#[derive(Debug)]
pub struct KeyDecoder<S: ByteSource> {
    src: S,
}

impl<S: ByteSource> KeyDecoder<S> {
    pub fn new(src: S) -> Self {
        Self { src }
    }

    pub fn next_key(&mut self) -> io::Result<Option<Key>> {
        decode_next(&mut self.src)
    }

    pub fn into_inner(self) -> S {
        self.src
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys(bytes: &[u8]) -> Vec<Option<Key>> {
        let mut src: VecDeque<u8> = bytes.iter().copied().collect();
        let mut out = Vec::new();
        while !src.is_empty() {
            out.push(decode_next(&mut src).unwrap());
        }
        out
    }

    #[test]
    fn empty_input_yields_nothing() {
        let mut src = VecDeque::new();
        assert_eq!(decode_next(&mut src).unwrap(), None);
    }

    #[test]
    fn plain_keys_are_lowercased() {
        assert_eq!(
            keys(b"wS q"),
            vec![
                Some(Key::Char('w')),
                Some(Key::Char('s')),
                Some(Key::Char(' ')),
                Some(Key::Char('q')),
            ]
        );
    }

    #[test]
    fn arrow_sequences() {
        assert_eq!(keys(b"\x1b[A"), vec![Some(Key::Up)]);
        assert_eq!(keys(b"\x1b[B"), vec![Some(Key::Down)]);
        assert_eq!(keys(b"\x1bOA\x1bOB"), vec![Some(Key::Up), Some(Key::Down)]);
    }

    #[test]
    fn lone_escape_yields_nothing() {
        assert_eq!(keys(b"\x1b"), vec![None]);
        assert_eq!(keys(b"\x1b["), vec![None]);
    }

    #[test]
    fn unknown_sequences_are_consumed_whole() {
        // Right arrow, Ctrl+Up, F5, then a real key.
        let out = keys(b"\x1b[C\x1b[1;5A\x1b[15~w");
        assert_eq!(out, vec![None, None, None, Some(Key::Char('w'))]);
    }

    #[test]
    fn alt_chord_is_dropped() {
        assert_eq!(keys(b"\x1bxw"), vec![None, Some(Key::Char('w'))]);
    }

    #[test]
    fn control_bytes() {
        assert_eq!(keys(b"\x03"), vec![Some(Key::Interrupt)]);
        assert_eq!(keys(b"\r"), vec![Some(Key::Char('\r'))]);
        assert_eq!(keys(b"\x7f\x01"), vec![None, None]);
    }

    #[test]
    fn utf8_characters() {
        assert_eq!(keys("É".as_bytes()), vec![Some(Key::Char('é'))]);
        // Truncated sequence.
        assert_eq!(keys(&[0xc3]), vec![None]);
    }

    #[test]
    fn decoder_wraps_a_source() {
        let mut d = KeyDecoder::new(VecDeque::from(b"\x1b[Aa".to_vec()));
        assert_eq!(d.next_key().unwrap(), Some(Key::Up));
        assert_eq!(d.next_key().unwrap(), Some(Key::Char('a')));
        assert_eq!(d.next_key().unwrap(), None);
        assert!(d.into_inner().is_empty());
    }
}
