//! Streaming escaper for XML attribute values and element text.
//!
//! The escaper decodes a byte slice as UTF-8, classifies every code point under
//! a [`Policy`] and writes the result to a [`Sink`] in maximal unescaped runs
//! interleaved with escape sequences. Nothing is buffered: the input is never
//! copied into an intermediate string.
//!
//! ```rust
//! let mut out = Vec::<u8>::new();
//! markesc::escape_attribute(&mut out, b"say \"hi\" & <go>").unwrap();
//! assert_eq!(out, b"say &quot;hi&quot; &amp; &lt;go>");
//!
//! let mut out = Vec::<u8>::new();
//! markesc::escape_text(&mut out, b"say \"hi\" & <go>").unwrap();
//! assert_eq!(out, b"say \"hi\" &amp; &lt;go>");
//! ```
//!
//! Malformed UTF-8 and characters outside the accepted character range are
//! replaced with U+FFFD rather than reported as errors. The only error the
//! escaper returns is a failed sink write, see [`EscapeError`].

#![no_std]
extern crate alloc;

#[cfg(any(test, feature = "std"))]
extern crate std;

pub mod charset;
mod context;
mod display;
mod error;
mod escaper;
mod policy;
mod sink;

#[cfg(test)]
mod tests;

pub use context::{
    Context, escape_bash, escape_csv, escape_go, escape_html, escape_in, escape_javascript,
    escape_regexp, escape_sql,
};
pub use display::{Escaped, escape_to_vec};
pub use error::EscapeError;
pub use escaper::{escape, escape_attribute, escape_text};
pub use policy::Policy;
#[cfg(feature = "std")]
pub use sink::IoSink;
pub use sink::{FmtSink, Sink};
