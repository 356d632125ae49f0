use alloc::vec::Vec;
use core::fmt;

use crate::{EscapeError, Policy, escaper::escape, sink::FmtSink};

/// Escapes `input` under `policy` into a new buffer.
///
/// The result is always valid UTF-8.
#[must_use]
pub fn escape_to_vec(policy: Policy, input: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(input.len());
    match escape(&mut out, policy, input) {
        Ok(()) => out,
        Err(EscapeError::SinkWrite(never)) => match never {},
    }
}

/// Formats its input escaped under a [`Policy`].
///
/// ```rust
/// use markesc::Policy;
///
/// let title = "Fish & Chips";
/// let tag = format!("<a title=\"{}\">", Policy::Attribute.display(title.as_bytes()));
/// assert_eq!(tag, "<a title=\"Fish &amp; Chips\">");
/// ```
#[derive(Copy, Clone, Debug)]
pub struct Escaped<'a> {
    policy: Policy,
    input: &'a [u8],
}

impl<'a> Escaped<'a> {
    /// Wraps `input` for display under `policy`.
    #[must_use]
    pub fn new(policy: Policy, input: &'a [u8]) -> Self {
        Self { policy, input }
    }
}

impl Policy {
    /// Returns a value that formats `input` escaped under this policy.
    #[must_use]
    pub fn display(self, input: &[u8]) -> Escaped<'_> {
        Escaped::new(self, input)
    }
}

impl fmt::Display for Escaped<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        escape(&mut FmtSink::new(f), self.policy, self.input).map_err(EscapeError::into_inner)
    }
}
