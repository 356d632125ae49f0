use alloc::vec::Vec;
use core::{convert::Infallible, error::Error, fmt};

/// Destination for escaped bytes.
///
/// The escaper calls [`write_bytes`](Sink::write_bytes) once per unescaped run
/// and once per escape sequence, and stops at the first error. Implementations
/// are free to buffer; the escaper never flushes or closes the sink.
pub trait Sink {
    /// Error reported when a write cannot be completed.
    type Error: Error;

    /// Writes all of `bytes`, or fails.
    ///
    /// `bytes` may be empty.
    fn write_bytes(&mut self, bytes: &[u8]) -> Result<(), Self::Error>;
}

impl<S: Sink + ?Sized> Sink for &mut S {
    type Error = S::Error;

    #[inline]
    fn write_bytes(&mut self, bytes: &[u8]) -> Result<(), Self::Error> {
        (**self).write_bytes(bytes)
    }
}

impl Sink for Vec<u8> {
    type Error = Infallible;

    #[inline]
    fn write_bytes(&mut self, bytes: &[u8]) -> Result<(), Self::Error> {
        self.extend_from_slice(bytes);
        Ok(())
    }
}

/// Adapts a [`std::io::Write`] into a [`Sink`].
///
/// Each chunk is written with `write_all`; nothing is flushed. Wrap the writer
/// in a `BufWriter` when it is unbuffered, since the escaper issues one write
/// per run and per escape sequence.
#[cfg(feature = "std")]
#[derive(Debug)]
pub struct IoSink<W>(W);

#[cfg(feature = "std")]
impl<W: std::io::Write> IoSink<W> {
    /// Wraps `writer`.
    pub fn new(writer: W) -> Self {
        Self(writer)
    }

    /// Borrows the underlying writer.
    pub fn get_ref(&self) -> &W {
        &self.0
    }

    /// Mutably borrows the underlying writer.
    pub fn get_mut(&mut self) -> &mut W {
        &mut self.0
    }

    /// Returns the underlying writer.
    pub fn into_inner(self) -> W {
        self.0
    }
}

#[cfg(feature = "std")]
impl<W: std::io::Write> Sink for IoSink<W> {
    type Error = std::io::Error;

    fn write_bytes(&mut self, bytes: &[u8]) -> Result<(), Self::Error> {
        self.0.write_all(bytes)
    }
}

/// Adapts a [`core::fmt::Write`] into a [`Sink`].
///
/// Chunks must be valid UTF-8. Every chunk produced by the escaper is, because
/// undecodable bytes are always substituted; anything else is rejected with
/// [`fmt::Error`].
#[derive(Debug)]
pub struct FmtSink<W>(W);

impl<W: fmt::Write> FmtSink<W> {
    /// Wraps `writer`.
    pub fn new(writer: W) -> Self {
        Self(writer)
    }

    /// Returns the underlying writer.
    pub fn into_inner(self) -> W {
        self.0
    }
}

impl<W: fmt::Write> Sink for FmtSink<W> {
    type Error = fmt::Error;

    fn write_bytes(&mut self, bytes: &[u8]) -> Result<(), Self::Error> {
        let s = core::str::from_utf8(bytes).map_err(|_| fmt::Error)?;
        self.0.write_str(s)
    }
}
