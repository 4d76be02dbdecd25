//! JSON-serializable stand-in for `fixfmt_core::ArgValue`, since the real
//! type borrows (`Str`) or carries trait objects (`Custom`) that don't
//! round-trip through JSON. Golden fixtures describe arguments as `ArgSpec`;
//! the runner converts each to a borrowed `ArgValue<'_, u8>` right before
//! the call.

use serde::{Deserialize, Serialize};

use fixfmt_core::ArgValue;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum ArgSpec {
    Bool(bool),
    /// A single narrow code unit, written as a one-character JSON string.
    Char(char),
    I32(i32),
    U32(u32),
    I64(i64),
    U64(u64),
    Pointer(u64),
    F64(f64),
    Str(String),
}

impl ArgSpec {
    /// Borrow this spec as a narrow-code-unit `ArgValue`.
    pub fn to_arg_value(&self) -> ArgValue<'_, u8> {
        match self {
            ArgSpec::Bool(v) => ArgValue::Bool(*v),
            ArgSpec::Char(c) => ArgValue::char_(*c as u8),
            ArgSpec::I32(v) => ArgValue::from(*v),
            ArgSpec::U32(v) => ArgValue::from(*v),
            ArgSpec::I64(v) => ArgValue::from(*v),
            ArgSpec::U64(v) => ArgValue::from(*v),
            ArgSpec::Pointer(v) => ArgValue::pointer(*v as usize),
            ArgSpec::F64(v) => ArgValue::from(*v),
            ArgSpec::Str(s) => ArgValue::str(s.as_bytes()),
        }
    }
}
