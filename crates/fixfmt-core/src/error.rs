//! Contract-violation kinds.
//!
//! Every error here is a contract violation: the caller supplied a
//! malformed template, an incompatible argument type, or too small a
//! buffer. The engine distinguishes kinds for diagnostics only — see
//! `contract` for the three dispatch modes layered on top of this type.

/// Why a `format` call failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum FormatError {
    /// Malformed placeholder: unterminated spec, bad type letter, bare `}`,
    /// or a width/precision literal that overflows its limit.
    #[error("malformed format placeholder")]
    SpecError,
    /// The presentation type in a `Spec` is incompatible with the argument
    /// kind it was matched to (or a non-empty spec was given to a Custom
    /// argument).
    #[error("presentation type incompatible with argument kind")]
    TypeMismatch,
    /// An explicit positional index, or the sequential argument counter,
    /// reached or exceeded `args.len()`.
    #[error("argument index out of range")]
    ArgIndex,
    /// A write would have advanced the output cursor past the buffer end.
    #[error("output buffer exhausted")]
    Overflow,
}
