//! Registry of literal contexts.
//!
//! Only the two markup contexts have a [`Policy`] today. The remaining
//! contexts are reserved entry points: they accept the same arguments, write
//! nothing and report success. Giving one of them real behaviour means adding
//! a `Policy` variant and returning it from [`Context::policy`].

use crate::{EscapeError, Policy, Sink, escaper::escape};

/// Every context the crate has an entry point for.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "fuzzing", derive(arbitrary::Arbitrary))]
pub enum Context {
    /// XML attribute value.
    Attribute,
    /// XML element text.
    Text,
    /// CSV field. Reserved.
    Csv,
    /// Bourne shell word. Reserved.
    Bash,
    /// JavaScript string literal. Reserved.
    JavaScript,
    /// Go string literal. Reserved.
    Go,
    /// SQL string literal. Reserved.
    Sql,
    /// HTML content. Reserved.
    Html,
    /// Regular-expression literal. Reserved.
    Regexp,
}

impl Context {
    /// All contexts, markup contexts first.
    pub const ALL: [Self; 9] = [
        Self::Attribute,
        Self::Text,
        Self::Csv,
        Self::Bash,
        Self::JavaScript,
        Self::Go,
        Self::Sql,
        Self::Html,
        Self::Regexp,
    ];

    /// The escaping policy for this context, or `None` for a reserved one.
    #[must_use]
    pub fn policy(self) -> Option<Policy> {
        match self {
            Self::Attribute => Some(Policy::Attribute),
            Self::Text => Some(Policy::Text),
            Self::Csv
            | Self::Bash
            | Self::JavaScript
            | Self::Go
            | Self::Sql
            | Self::Html
            | Self::Regexp => None,
        }
    }

    /// Whether this context is a reserved no-op.
    #[must_use]
    pub fn is_reserved(self) -> bool {
        self.policy().is_none()
    }
}

impl From<Policy> for Context {
    fn from(policy: Policy) -> Self {
        match policy {
            Policy::Attribute => Self::Attribute,
            Policy::Text => Self::Text,
        }
    }
}

/// Escapes `input` for `context`, streaming into `sink`.
///
/// Reserved contexts write nothing and succeed.
///
/// # Errors
///
/// Returns the first error reported by `sink`.
pub fn escape_in<S>(
    sink: &mut S,
    context: Context,
    input: &[u8],
) -> Result<(), EscapeError<S::Error>>
where
    S: Sink + ?Sized,
{
    match context.policy() {
        Some(policy) => escape(sink, policy, input),
        None => Ok(()),
    }
}

macro_rules! reserved {
    ($($(#[$meta:meta])* $name:ident => $context:ident;)*) => {$(
        $(#[$meta])*
        ///
        /// Reserved: writes nothing and always succeeds.
        ///
        /// # Errors
        ///
        /// Never fails.
        pub fn $name<S>(sink: &mut S, input: &[u8]) -> Result<(), EscapeError<S::Error>>
        where
            S: Sink + ?Sized,
        {
            escape_in(sink, Context::$context, input)
        }
    )*};
}

reserved! {
    /// Escapes `input` as a CSV field.
    escape_csv => Csv;
    /// Escapes `input` as a shell word.
    escape_bash => Bash;
    /// Escapes `input` as a JavaScript string literal body.
    escape_javascript => JavaScript;
    /// Escapes `input` as a Go string literal body.
    escape_go => Go;
    /// Escapes `input` as a SQL string literal body.
    escape_sql => Sql;
    /// Escapes `input` as HTML content.
    escape_html => Html;
    /// Escapes `input` as a regular-expression literal.
    escape_regexp => Regexp;
}
