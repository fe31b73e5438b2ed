//! URL-safe Base64 without padding.
//!
//! Encoding never emits `=`. Decoding is strict about the alphabet (any byte
//! outside `A-Z a-z 0-9 - _` is rejected, padding and whitespace included), but
//! trailing bits that do not complete a byte are discarded rather than
//! reported.

use crate::error::*;

const ALPHABET: &[u8; 64] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789-_";

/// Base64url codec, no padding.
pub struct Base64UrlNoPadding;

impl Base64UrlNoPadding {
    /// Length of the encoding of `bin_len` bytes.
    pub const fn encoded_len(bin_len: usize) -> usize {
        4 * (bin_len / 3)
            + match bin_len % 3 {
                1 => 2,
                2 => 3,
                _ => 0,
            }
    }

    pub fn encode_to_string(bin: impl AsRef<[u8]>) -> String {
        let bin = bin.as_ref();
        let mut b64 = String::with_capacity(Self::encoded_len(bin.len()));
        let mut chunks = bin.chunks_exact(3);
        for chunk in &mut chunks {
            let n = (chunk[0] as u32) << 16 | (chunk[1] as u32) << 8 | chunk[2] as u32;
            push_sextets(&mut b64, n, 4);
        }
        match *chunks.remainder() {
            [a] => push_sextets(&mut b64, (a as u32) << 16, 2),
            [a, b] => push_sextets(&mut b64, (a as u32) << 16 | (b as u32) << 8, 3),
            _ => {}
        }
        b64
    }

    pub fn decode_to_vec(b64: impl AsRef<[u8]>) -> Result<Vec<u8>, Error> {
        let b64 = b64.as_ref();
        let mut bin = Vec::with_capacity(b64.len() * 3 / 4);
        let mut acc: u32 = 0;
        let mut acc_len: u32 = 0;
        for &c in b64 {
            let sextet = match sextet(c) {
                Some(sextet) => sextet,
                None => bail!(JWTError::InvalidEncoding),
            };
            acc = (acc << 6) | sextet as u32;
            acc_len += 6;
            if acc_len >= 8 {
                acc_len -= 8;
                bin.push((acc >> acc_len) as u8);
            }
            acc &= (1 << acc_len) - 1;
        }
        Ok(bin)
    }
}

/// Emits the `count` most significant sextets of a 24-bit group.
fn push_sextets(b64: &mut String, n: u32, count: usize) {
    for i in 0..count {
        let index = (n >> (18 - 6 * i)) & 0x3f;
        b64.push(ALPHABET[index as usize] as char);
    }
}

fn sextet(c: u8) -> Option<u8> {
    match c {
        b'A'..=b'Z' => Some(c - b'A'),
        b'a'..=b'z' => Some(c - b'a' + 26),
        b'0'..=b'9' => Some(c - b'0' + 52),
        b'-' => Some(62),
        b'_' => Some(63),
        _ => None,
    }
}
