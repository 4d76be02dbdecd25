//! # fixfmt-abi
//!
//! `extern "C"` boundary layer for `fixfmt-core`.
//!
//! This crate produces a `cdylib` exposing `fixfmt_format`/`fixfmt_format16`
//! over `(pointer, length)` pairs, for callers outside Rust (or Rust callers
//! who need a stable ABI rather than the generic safe API). Each entry point
//! decodes a flat, `repr(C)` argument array into `fixfmt_core::ArgValue`,
//! calls the safe core, and maps its `Result` onto a signed return code.
//!
//! # Architecture
//!
//! ```text
//! C caller -> ABI entry (this crate) -> fixfmt-core::format -> return
//! ```
//!
//! This crate's `unsafe` is confined to exactly two operations: turning
//! caller-supplied pointer/length pairs into slices, and calling through a
//! caller-supplied function pointer for the custom-type hook. Nothing else
//! here is `unsafe`.

mod custom;

use core::ffi::c_void;

use fixfmt_core::{ArgValue, CodeUnit, FormatError};

pub use custom::{FixfmtArg, FixfmtArgTag, FixfmtCustomFn};

/// Mirrors `fixfmt_core::MAX_ARGS` — argument arrays longer than this are
/// rejected before any decoding is attempted.
pub const FIXFMT_MAX_ARGS: usize = fixfmt_core::MAX_ARGS;

/// Negative return codes `fixfmt_format`/`fixfmt_format16` may produce,
/// mirroring `fixfmt_core::FormatError` in declaration order (a non-negative
/// return is the written length).
#[repr(isize)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FixfmtErrorCode {
    SpecError = -1,
    TypeMismatch = -2,
    ArgIndex = -3,
    Overflow = -4,
}

fn error_code(err: FormatError) -> isize {
    let code = match err {
        FormatError::SpecError => FixfmtErrorCode::SpecError,
        FormatError::TypeMismatch => FixfmtErrorCode::TypeMismatch,
        FormatError::ArgIndex => FixfmtErrorCode::ArgIndex,
        FormatError::Overflow => FixfmtErrorCode::Overflow,
    };
    code as isize
}

/// Decode one `FixfmtArg` into an `ArgValue<U>`. Precondition: `raw[i].tag`
/// is a valid `FixfmtArgTag` discriminant (checked by the caller up front,
/// so this function never has to report a decode failure of its own).
fn decode_one<U: CodeUnit>(raw: &[FixfmtArg], i: usize) -> ArgValue<'_, U> {
    let a = &raw[i];
    match a.tag {
        t if t == FixfmtArgTag::Bool as u8 => ArgValue::Bool(a.int_value != 0),
        t if t == FixfmtArgTag::Char as u8 => ArgValue::Char(U::from_code_point(a.int_value as u32)),
        t if t == FixfmtArgTag::I32 as u8 => ArgValue::I32(a.int_value as i32),
        t if t == FixfmtArgTag::U32 as u8 => ArgValue::U32(a.int_value as u32),
        t if t == FixfmtArgTag::I64 as u8 => ArgValue::I64(a.int_value as i64),
        t if t == FixfmtArgTag::U64 as u8 => ArgValue::U64(a.int_value),
        t if t == FixfmtArgTag::Pointer as u8 => ArgValue::Pointer(a.int_value as usize),
        t if t == FixfmtArgTag::F64 as u8 => ArgValue::F64(a.float_value),
        t if t == FixfmtArgTag::Str as u8 => {
            let s: &[U] = if a.str_len == 0 {
                &[]
            } else {
                // SAFETY: caller contract (module docs) guarantees `str_ptr`
                // is valid for `str_len` code units of width `U` for the
                // duration of this call.
                unsafe { core::slice::from_raw_parts(a.str_ptr.cast::<U>(), a.str_len) }
            };
            ArgValue::Str(s)
        }
        _ => ArgValue::Custom(a),
    }
}

fn decode_all<U: CodeUnit>(raw: &[FixfmtArg], len: usize) -> [ArgValue<'_, U>; FIXFMT_MAX_ARGS] {
    core::array::from_fn(|i| if i < len { decode_one(raw, i) } else { ArgValue::Bool(false) })
}

/// Validate that every tag in `raw` is a recognized `FixfmtArgTag`
/// discriminant. Called before `decode_all` so decoding itself is total.
fn validate_tags(raw: &[FixfmtArg]) -> bool {
    raw.iter().all(|a| a.tag <= FixfmtArgTag::Custom as u8)
}

/// # Safety
///
/// `out_ptr` must be valid for `out_len` bytes, `tmpl_ptr` for `tmpl_len`
/// bytes, and `args_ptr` for `args_len` `FixfmtArg` records, all for the
/// duration of this call; `out_ptr`/`tmpl_ptr` may be null only if their
/// matching length is zero. Any `FixfmtArg` tagged `Str` must have a
/// `str_ptr` valid for `str_len` bytes; any tagged `Custom` must have a
/// non-null `custom_fn` that itself does not exceed the view it is handed.
///
/// Returns the number of bytes written on success, or a negative
/// [`FixfmtErrorCode`] discriminant on failure.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn fixfmt_format(
    out_ptr: *mut u8,
    out_len: usize,
    tmpl_ptr: *const u8,
    tmpl_len: usize,
    args_ptr: *const FixfmtArg,
    args_len: usize,
) -> isize {
    if args_len > FIXFMT_MAX_ARGS {
        return error_code(FormatError::ArgIndex);
    }
    if (out_len != 0 && out_ptr.is_null()) || (tmpl_len != 0 && tmpl_ptr.is_null()) {
        return error_code(FormatError::Overflow);
    }

    // SAFETY: caller contract above.
    let output = unsafe { core::slice::from_raw_parts_mut(out_ptr, out_len) };
    // SAFETY: caller contract above.
    let template = unsafe { core::slice::from_raw_parts(tmpl_ptr, tmpl_len) };
    let raw_args: &[FixfmtArg] = if args_len == 0 {
        &[]
    } else {
        // SAFETY: caller contract above.
        unsafe { core::slice::from_raw_parts(args_ptr, args_len) }
    };

    if !validate_tags(raw_args) {
        return error_code(FormatError::TypeMismatch);
    }

    let decoded = decode_all::<u8>(raw_args, args_len);
    match fixfmt_core::format(output, template, &decoded[..args_len]) {
        Ok(n) => n as isize,
        Err(e) => error_code(e),
    }
}

/// The `u16` (UTF-16-width) equivalent of [`fixfmt_format`]. `out_len` and
/// `tmpl_len` are counted in `u16` code units, not bytes; a `Str`-tagged
/// argument's `str_len` is likewise a code-unit count. Safety contract is
/// otherwise identical.
///
/// # Safety
///
/// See [`fixfmt_format`].
#[unsafe(no_mangle)]
pub unsafe extern "C" fn fixfmt_format16(
    out_ptr: *mut u16,
    out_len: usize,
    tmpl_ptr: *const u16,
    tmpl_len: usize,
    args_ptr: *const FixfmtArg,
    args_len: usize,
) -> isize {
    if args_len > FIXFMT_MAX_ARGS {
        return error_code(FormatError::ArgIndex);
    }
    if (out_len != 0 && out_ptr.is_null()) || (tmpl_len != 0 && tmpl_ptr.is_null()) {
        return error_code(FormatError::Overflow);
    }

    // SAFETY: caller contract, see `fixfmt_format`.
    let output = unsafe { core::slice::from_raw_parts_mut(out_ptr, out_len) };
    // SAFETY: caller contract, see `fixfmt_format`.
    let template = unsafe { core::slice::from_raw_parts(tmpl_ptr, tmpl_len) };
    let raw_args: &[FixfmtArg] = if args_len == 0 {
        &[]
    } else {
        // SAFETY: caller contract, see `fixfmt_format`.
        unsafe { core::slice::from_raw_parts(args_ptr, args_len) }
    };

    if !validate_tags(raw_args) {
        return error_code(FormatError::TypeMismatch);
    }

    let decoded = decode_all::<u16>(raw_args, args_len);
    match fixfmt_core::format(output, template, &decoded[..args_len]) {
        Ok(n) => n as isize,
        Err(e) => error_code(e),
    }
}

/// Re-export so downstream C headers / bindgen runs have a name for the
/// opaque context pointer type without pulling in `core::ffi` themselves.
pub type FixfmtCtx = c_void;
