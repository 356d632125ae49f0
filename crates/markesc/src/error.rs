use thiserror::Error;

/// Error returned by the escaping functions.
///
/// Malformed input never produces an error; it is replaced in the output. The
/// only failure is the sink refusing a write, in which case the scan stops and
/// the sink's own error is handed back untouched. Bytes written before the
/// failure stay written, so the sink's contents should be treated as
/// incomplete.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EscapeError<E> {
    /// The sink failed to accept a write.
    #[error("sink write failed: {0}")]
    SinkWrite(#[source] E),
}

impl<E> EscapeError<E> {
    /// Returns the error reported by the sink.
    pub fn into_inner(self) -> E {
        match self {
            Self::SinkWrite(e) => e,
        }
    }

    /// Borrows the error reported by the sink.
    pub fn get_ref(&self) -> &E {
        match self {
            Self::SinkWrite(e) => e,
        }
    }
}
