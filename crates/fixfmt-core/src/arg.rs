//! `ArgValue`: the tagged union over argument kinds the engine can render,
//! plus the custom-type extension hook.

use crate::code_unit::CodeUnit;
use crate::error::FormatError;
use crate::view::OutputView;

/// A caller-supplied formatter for a foreign (non-built-in) type.
///
/// Implementors write into `out` using its bounded `push*` methods; the
/// view they are handed is already a sub-view of the caller's output
/// buffer, so there is no way to write past the end of it — the contract
/// that a custom formatter must not exceed its handed-out view is
/// enforced structurally rather than trusted.
pub trait CustomFormat<U> {
    fn format_into(&self, out: &mut OutputView<'_, U>) -> Result<(), FormatError>;
}

/// One argument to a `format` call, tagged by kind.
///
/// Narrower integers widen to the 32-bit variant by signedness; a 64-bit
/// integer that fits losslessly in the 32-bit range is demoted to shorten
/// the hot path. Construct these via the `From` impls below,
/// or `ArgValue::char_`/`ArgValue::str`/`ArgValue::pointer`/
/// `ArgValue::custom` for the kinds that carry `U` or a borrow.
pub enum ArgValue<'a, U> {
    Bool(bool),
    Char(U),
    I32(i32),
    U32(u32),
    I64(i64),
    U64(u64),
    Pointer(usize),
    #[cfg(feature = "float")]
    F64(f64),
    Str(&'a [U]),
    Custom(&'a dyn CustomFormat<U>),
}

impl<'a, U: CodeUnit> ArgValue<'a, U> {
    pub fn char_(unit: U) -> Self {
        ArgValue::Char(unit)
    }

    pub fn str(units: &'a [U]) -> Self {
        ArgValue::Str(units)
    }

    pub fn pointer(addr: usize) -> Self {
        ArgValue::Pointer(addr)
    }

    pub fn custom(c: &'a dyn CustomFormat<U>) -> Self {
        ArgValue::Custom(c)
    }
}

macro_rules! impl_from_small_int {
    ($($t:ty => $variant:ident),+ $(,)?) => {
        $(
            impl<'a, U: CodeUnit> From<$t> for ArgValue<'a, U> {
                #[inline]
                fn from(v: $t) -> Self {
                    ArgValue::$variant(v as _)
                }
            }
        )+
    };
}

impl_from_small_int!(
    i8 => I32, u8 => U32, i16 => I32, u16 => U32, i32 => I32, u32 => U32,
);

impl<'a, U: CodeUnit> From<i64> for ArgValue<'a, U> {
    #[inline]
    fn from(v: i64) -> Self {
        match i32::try_from(v) {
            Ok(narrow) => ArgValue::I32(narrow),
            Err(_) => ArgValue::I64(v),
        }
    }
}

impl<'a, U: CodeUnit> From<u64> for ArgValue<'a, U> {
    #[inline]
    fn from(v: u64) -> Self {
        match u32::try_from(v) {
            Ok(narrow) => ArgValue::U32(narrow),
            Err(_) => ArgValue::U64(v),
        }
    }
}

impl<'a, U: CodeUnit> From<isize> for ArgValue<'a, U> {
    #[inline]
    fn from(v: isize) -> Self {
        ArgValue::from(v as i64)
    }
}

impl<'a, U: CodeUnit> From<usize> for ArgValue<'a, U> {
    #[inline]
    fn from(v: usize) -> Self {
        ArgValue::from(v as u64)
    }
}

impl<'a, U: CodeUnit> From<bool> for ArgValue<'a, U> {
    #[inline]
    fn from(v: bool) -> Self {
        ArgValue::Bool(v)
    }
}

#[cfg(feature = "float")]
impl<'a, U: CodeUnit> From<f32> for ArgValue<'a, U> {
    #[inline]
    fn from(v: f32) -> Self {
        ArgValue::F64(v as f64)
    }
}

#[cfg(feature = "float")]
impl<'a, U: CodeUnit> From<f64> for ArgValue<'a, U> {
    #[inline]
    fn from(v: f64) -> Self {
        ArgValue::F64(v)
    }
}

impl<'a, U: CodeUnit, T> From<*const T> for ArgValue<'a, U> {
    #[inline]
    fn from(v: *const T) -> Self {
        ArgValue::Pointer(v as usize)
    }
}

impl<'a, U: CodeUnit, T> From<*mut T> for ArgValue<'a, U> {
    #[inline]
    fn from(v: *mut T) -> Self {
        ArgValue::Pointer(v as usize)
    }
}
