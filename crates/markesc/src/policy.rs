use crate::charset::is_in_character_range;

pub(crate) const ESC_AMP: &[u8] = b"&amp;";
pub(crate) const ESC_LT: &[u8] = b"&lt;";
pub(crate) const ESC_QUOT: &[u8] = b"&quot;";
pub(crate) const ESC_LF: &[u8] = b"&#xA;";
pub(crate) const ESC_CR: &[u8] = b"&#xD;";
pub(crate) const ESC_REPLACEMENT: &[u8] = "\u{FFFD}".as_bytes();

/// Which markup context the escaped bytes will be written into.
///
/// | input | `Attribute` | `Text`  |
/// |-------|-------------|---------|
/// | `&`   | `&amp;`     | `&amp;` |
/// | `<`   | `&lt;`      | `&lt;`  |
/// | `"`   | `&quot;`    | as is   |
/// | `\n`  | `&#xA;`     | as is   |
/// | `\r`  | `&#xD;`     | as is   |
///
/// In both contexts a code point outside the accepted
/// [character range](crate::charset), or a byte that failed to decode, is
/// replaced with U+FFFD.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "fuzzing", derive(arbitrary::Arbitrary))]
pub enum Policy {
    /// A double-quoted attribute value.
    Attribute,
    /// Character data between tags.
    Text,
}

impl Policy {
    /// Returns the bytes that replace `ch`, or `None` when `ch` is written as
    /// is.
    ///
    /// `width` is the number of input bytes `ch` was decoded from. A U+FFFD
    /// with a width of one marks a decode error and is always substituted,
    /// while a U+FFFD spelled out in the input (three bytes) passes through.
    #[must_use]
    pub fn substitution(self, ch: char, width: usize) -> Option<&'static [u8]> {
        match (self, ch) {
            (_, '&') => Some(ESC_AMP),
            (_, '<') => Some(ESC_LT),
            (Self::Attribute, '"') => Some(ESC_QUOT),
            (Self::Attribute, '\n') => Some(ESC_LF),
            (Self::Attribute, '\r') => Some(ESC_CR),
            _ if !is_in_character_range(u32::from(ch)) => Some(ESC_REPLACEMENT),
            (_, char::REPLACEMENT_CHARACTER) if width == 1 => Some(ESC_REPLACEMENT),
            _ => None,
        }
    }
}
