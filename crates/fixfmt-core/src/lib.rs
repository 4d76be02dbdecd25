//! # fixfmt-core
//!
//! Bounded, allocation-free string formatting: render a `{}`-placeholder
//! template against a fixed argument list into a caller-owned buffer, with
//! no heap allocation and no unbounded work. Built for embedded and
//! hot-path contexts where `core::fmt`'s `Write` trait and dynamic
//! dispatch are too costly or unavailable.
//!
//! No `unsafe` code is permitted at the crate level.

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]

mod arg;
mod code_unit;
mod contract;
mod engine;
mod error;
#[cfg(feature = "float")]
mod float_cvt;
mod int_cvt;
mod layout;
mod render;
mod spec;
mod view;

pub use arg::{ArgValue, CustomFormat};
pub use code_unit::CodeUnit;
pub use contract::format_or_die;
pub use engine::{MAX_ARGS, format};
pub use error::FormatError;
pub use spec::{Align, FieldType, Sign};
pub use view::OutputView;

/// `format` specialized to narrow (byte) code units.
pub fn format_u8(
    output: &mut [u8],
    template: &[u8],
    args: &[ArgValue<'_, u8>],
) -> Result<usize, FormatError> {
    format(output, template, args)
}

/// `format` specialized to UTF-16-width code units.
pub fn format_u16(
    output: &mut [u16],
    template: &[u16],
    args: &[ArgValue<'_, u16>],
) -> Result<usize, FormatError> {
    format(output, template, args)
}

/// `format` specialized to UTF-32-width code units.
pub fn format_u32(
    output: &mut [u32],
    template: &[u32],
    args: &[ArgValue<'_, u32>],
) -> Result<usize, FormatError> {
    format(output, template, args)
}
