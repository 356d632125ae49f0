//! The range of code points that may be written without substitution.
//!
//! A code point is accepted when it is one of the whitespace controls `\t`,
//! `\n`, `\r`, or falls into one of three closed ranges:
//!
//! | from        | to           |
//! |-------------|--------------|
//! | `0x20`      | [`FIRST_PLANE_END`] (`0xDF77`) |
//! | `0xE000`    | `0xFFFD`     |
//! | `0x10000`   | `0x10FFFF`   |
//!
//! The first range ends at `0xDF77`, not at `0xD7FF` as in the XML `Char`
//! production. Keep it that way: existing output depends on this bound.

/// Last code point of the first accepted range.
pub const FIRST_PLANE_END: u32 = 0xDF77;

/// First code point of the private-use/compatibility range.
pub const SECOND_PLANE_START: u32 = 0xE000;

/// Last code point of the private-use/compatibility range.
pub const SECOND_PLANE_END: u32 = 0xFFFD;

/// First supplementary-plane code point.
pub const SUPPLEMENTARY_START: u32 = 0x1_0000;

/// Largest Unicode code point.
pub const SUPPLEMENTARY_END: u32 = 0x10_FFFF;

/// Returns `true` if `cp` may be emitted without substitution.
#[must_use]
pub const fn is_in_character_range(cp: u32) -> bool {
    matches!(
        cp,
        0x09 | 0x0A
            | 0x0D
            | 0x20..=FIRST_PLANE_END
            | SECOND_PLANE_START..=SECOND_PLANE_END
            | SUPPLEMENTARY_START..=SUPPLEMENTARY_END
    )
}
