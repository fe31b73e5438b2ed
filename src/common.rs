/// Limits applied during verification
#[derive(Clone, Debug, Default)]
pub struct VerificationOptions {
    /// Reject tokens longer than this, in bytes
    pub max_token_length: Option<usize>,

    /// Reject tokens whose encoded header is longer than this, in bytes.
    /// Defaults to `MAX_HEADER_LENGTH`.
    pub max_header_length: Option<usize>,
}

/// Compares two byte strings in time that only depends on their lengths.
///
/// Slices of different lengths are not equal; only the length is leaked.
#[inline(never)]
pub(crate) fn timingsafe_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.iter().zip(b.iter()).fold(0, |c, (x, y)| c | (x ^ y)) == 0
}

#[test]
fn timingsafe_eq_scans_everything() {
    assert!(timingsafe_eq(b"", b""));
    assert!(timingsafe_eq(b"same bytes", b"same bytes"));
    assert!(!timingsafe_eq(b"same bytes", b"same bytez"));
    assert!(!timingsafe_eq(b"xame bytes", b"same bytes"));
    assert!(!timingsafe_eq(b"short", b"shorter"));
    assert!(!timingsafe_eq(b"", b"\0"));
}
