//! The flat `repr(C)` argument record crossing the FFI boundary, and the
//! custom-type hook adapter built on top of it. The target language here
//! has raw pointers directly available, so the hook is realized with them,
//! matching `usf.hpp`'s function-pointer custom-formatter mechanism.

use core::ffi::c_void;

use fixfmt_core::{CodeUnit, CustomFormat, FormatError, OutputView};

/// Discriminants for `FixfmtArg::tag`. Declared in the same order as
/// `fixfmt_core::ArgValue`'s variants.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FixfmtArgTag {
    Bool = 0,
    Char = 1,
    I32 = 2,
    U32 = 3,
    I64 = 4,
    U64 = 5,
    Pointer = 6,
    F64 = 7,
    Str = 8,
    Custom = 9,
}

/// A caller-supplied formatter for a foreign type, called by the engine
/// with a `(pointer, length)` view of the remaining output buffer and the
/// opaque context pointer carried on the `FixfmtArg`.
///
/// Returns the number of code units written, or a negative value to abort
/// the whole `fixfmt_format` call with `FixfmtErrorCode::TypeMismatch`.
///
/// # Safety
///
/// Implementations must not write past `out_len` code units starting at
/// `out_ptr`, and must not read `ctx` as anything other than whatever type
/// the caller who built this `FixfmtArg` agreed it would be.
pub type FixfmtCustomFn =
    unsafe extern "C" fn(out_ptr: *mut c_void, out_len: usize, ctx: *const c_void) -> isize;

/// One argument crossing the FFI boundary, tagged by `tag`. Only the fields
/// relevant to `tag` are read; the rest are ignored (callers may leave them
/// zeroed).
#[repr(C)]
#[derive(Clone, Copy)]
pub struct FixfmtArg {
    pub tag: u8,
    /// `Bool`/`Char`/`I32`/`U32`/`I64`/`U64`/`Pointer`: the value,
    /// reinterpreted to width/signedness.
    pub int_value: u64,
    /// `F64`: the value.
    pub float_value: f64,
    /// `Str`: pointer to `str_len` code units of the call's width (`u8` for
    /// `fixfmt_format`, `u16` for `fixfmt_format16`).
    pub str_ptr: *const c_void,
    /// `Str`: code-unit count (not necessarily bytes — see `str_ptr`).
    pub str_len: usize,
    /// `Custom`: the function to call. `None` is a `TypeMismatch`.
    pub custom_fn: Option<FixfmtCustomFn>,
    /// `Custom`: opaque context passed through to `custom_fn` unexamined.
    pub custom_ctx: *const c_void,
}

impl<U: CodeUnit> CustomFormat<U> for FixfmtArg {
    fn format_into(&self, out: &mut OutputView<'_, U>) -> Result<(), FormatError> {
        let func = self.custom_fn.ok_or(FormatError::TypeMismatch)?;
        let (ptr, len) = out.remainder_raw_parts_mut();

        // SAFETY: `ptr` is valid for `len` code units of width `U` for the
        // duration of this call (borrowed from `out`, which itself borrows
        // from the caller-supplied output buffer). The contract for a
        // custom formatter is to not exceed this view.
        let written = unsafe { func(ptr.cast::<c_void>(), len, self.custom_ctx) };

        if written < 0 || written as usize > len {
            return Err(FormatError::Overflow);
        }
        out.advance(written as usize)
    }
}
