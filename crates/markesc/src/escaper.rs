//! The scan loop shared by every escaping policy.
//!
//! Input is decoded one code point at a time. Code points that pass through
//! extend the pending run; a code point that needs substituting flushes the
//! run (even when empty) and then writes its replacement. The tail run is
//! flushed once the input is exhausted, so a call issues exactly
//! `2 * substitutions + 1` writes.

use crate::{EscapeError, Policy, Sink};

/// Decodes the code point at the start of `bytes` and its encoded width.
///
/// Malformed input yields U+FFFD with a width of one, so decoding resumes at
/// the very next byte. `bytes` must not be empty.
#[inline]
fn decode(bytes: &[u8]) -> (char, usize) {
    match bstr::decode_utf8(bytes) {
        (Some(ch), width) => (ch, width),
        (None, _) => (char::REPLACEMENT_CHARACTER, 1),
    }
}

/// Escapes `input` under `policy`, streaming the result into `sink`.
///
/// # Errors
///
/// Returns the first error reported by `sink`. No further writes are issued
/// after a failure, and whatever was written before it is left in place.
pub fn escape<S>(sink: &mut S, policy: Policy, input: &[u8]) -> Result<(), EscapeError<S::Error>>
where
    S: Sink + ?Sized,
{
    let mut last = 0;
    let mut i = 0;
    while i < input.len() {
        let (ch, width) = decode(&input[i..]);
        let start = i;
        i += width;
        let Some(esc) = policy.substitution(ch, width) else {
            continue;
        };
        sink.write_bytes(&input[last..start])
            .map_err(EscapeError::SinkWrite)?;
        sink.write_bytes(esc).map_err(EscapeError::SinkWrite)?;
        last = i;
    }
    sink.write_bytes(&input[last..])
        .map_err(EscapeError::SinkWrite)
}

/// Escapes `input` for use inside a double-quoted attribute value.
///
/// # Errors
///
/// See [`escape`].
pub fn escape_attribute<S>(sink: &mut S, input: &[u8]) -> Result<(), EscapeError<S::Error>>
where
    S: Sink + ?Sized,
{
    escape(sink, Policy::Attribute, input)
}

/// Escapes `input` for use as element text.
///
/// # Errors
///
/// See [`escape`].
pub fn escape_text<S>(sink: &mut S, input: &[u8]) -> Result<(), EscapeError<S::Error>>
where
    S: Sink + ?Sized,
{
    escape(sink, Policy::Text, input)
}
