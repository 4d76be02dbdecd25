//! `{…}` placeholder grammar and parsed `Spec` record.

use crate::code_unit::CodeUnit;
use crate::error::FormatError;
use crate::view::TemplateView;

/// Placeholder alignment. `None` in `Spec::align` means "align not given";
/// the effective default (Right for numerics/pointer, Left otherwise) is
/// resolved by `Layout`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Right,
    Center,
    Numeric,
}

/// Explicit sign request. `None` in `Spec::sign` means the default (no sign
/// for non-negative values).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sign {
    Minus,
    Plus,
    Space,
}

/// The presentation type named by the placeholder's type letter, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    Char,
    Dec,
    Hex,
    Oct,
    Bin,
    Pointer,
    FixedF,
    ScientificE,
    GeneralG,
    Str,
}

/// One placeholder's parsed state.
#[derive(Debug, Clone, Copy)]
pub struct Spec<U> {
    pub index: Option<u8>,
    pub fill: U,
    pub align: Option<Align>,
    pub sign: Option<Sign>,
    pub hash: bool,
    pub width: u8,
    /// `-1` means unspecified.
    pub precision: i8,
    pub ty: Option<FieldType>,
    pub uppercase: bool,
    /// Set iff the placeholder was exactly `{}` or `{N}` (no `:` spec).
    pub empty: bool,
}

impl<U: CodeUnit> Spec<U> {
    fn defaults() -> Self {
        Self {
            index: None,
            fill: U::from_ascii(b' '),
            align: None,
            sign: None,
            hash: false,
            width: 0,
            precision: -1,
            ty: None,
            uppercase: false,
            empty: false,
        }
    }
}

fn align_from_ascii(byte: u8) -> Option<Align> {
    match byte {
        b'<' => Some(Align::Left),
        b'>' => Some(Align::Right),
        b'^' => Some(Align::Center),
        b'=' => Some(Align::Numeric),
        _ => None,
    }
}

fn type_from_ascii(byte: u8) -> Option<(FieldType, bool)> {
    use FieldType::*;
    Some(match byte {
        b'c' => (Char, false),
        b'd' => (Dec, false),
        b'x' => (Hex, false),
        b'X' => (Hex, true),
        b'o' => (Oct, false),
        b'b' => (Bin, false),
        b'B' => (Bin, true),
        b'p' => (Pointer, false),
        b'P' => (Pointer, true),
        b'f' => (FixedF, false),
        b'F' => (FixedF, true),
        b'e' => (ScientificE, false),
        b'E' => (ScientificE, true),
        b'g' => (GeneralG, false),
        b'G' => (GeneralG, true),
        b's' => (Str, false),
        _ => return None,
    })
}

/// Parse one placeholder. Precondition: `template.peek() == Some('{')`.
/// Consumes through the matching `}`.
pub fn parse_placeholder<U: CodeUnit>(
    template: &mut TemplateView<'_, U>,
) -> Result<Spec<U>, FormatError> {
    debug_assert!(template.peek().is_some_and(|u| u.eq_ascii(b'{')));
    template.bump();

    let mut spec = Spec::defaults();

    // --- optional index ---
    let mut saw_index_digit = false;
    let mut index: u32 = 0;
    while let Some(d) = template.peek().and_then(CodeUnit::ascii_digit) {
        saw_index_digit = true;
        index = index.saturating_mul(10).saturating_add(d as u32);
        if index > 255 {
            return Err(FormatError::SpecError);
        }
        template.bump();
    }
    if saw_index_digit {
        spec.index = Some(index as u8);
    }

    match template.peek() {
        Some(u) if u.eq_ascii(b'}') => {
            template.bump();
            spec.empty = true;
            return Ok(spec);
        }
        Some(u) if u.eq_ascii(b':') => {
            template.bump();
        }
        _ => return Err(FormatError::SpecError),
    }

    // --- fill/align ---
    if let (Some(cur), Some(next)) = (template.peek(), template.peek_next()) {
        if let Some(next_ascii) = next.as_ascii() {
            if let Some(align) = align_from_ascii(next_ascii) {
                spec.fill = cur;
                spec.align = Some(align);
                template.bump();
                template.bump();
            }
        }
    }
    if spec.align.is_none() {
        if let Some(cur) = template.peek().and_then(CodeUnit::as_ascii) {
            if let Some(align) = align_from_ascii(cur) {
                spec.align = Some(align);
                template.bump();
            }
        }
    }

    // --- sign ---
    if let Some(b) = template.peek().and_then(CodeUnit::as_ascii) {
        let sign = match b {
            b'-' => Some(Sign::Minus),
            b'+' => Some(Sign::Plus),
            b' ' => Some(Sign::Space),
            _ => None,
        };
        if let Some(sign) = sign {
            spec.sign = Some(sign);
            template.bump();
        }
    }

    // --- hash ---
    if template.peek().is_some_and(|u| u.eq_ascii(b'#')) {
        spec.hash = true;
        template.bump();
    }

    // --- zero flag ---
    let mut zero_flag = false;
    if template.peek().is_some_and(|u| u.eq_ascii(b'0')) {
        zero_flag = true;
        template.bump();
    }

    // --- width ---
    let mut saw_width_digit = false;
    let mut width: u32 = 0;
    while let Some(d) = template.peek().and_then(CodeUnit::ascii_digit) {
        saw_width_digit = true;
        width = width.saturating_mul(10).saturating_add(d as u32);
        if width > 255 {
            return Err(FormatError::SpecError);
        }
        template.bump();
    }
    if saw_width_digit {
        spec.width = width as u8;
    }

    // --- precision ---
    if template.peek().is_some_and(|u| u.eq_ascii(b'.')) {
        template.bump();
        let mut saw_digit = false;
        let mut precision: u32 = 0;
        while let Some(d) = template.peek().and_then(CodeUnit::ascii_digit) {
            saw_digit = true;
            precision = precision.saturating_mul(10).saturating_add(d as u32);
            if precision > 127 {
                return Err(FormatError::SpecError);
            }
            template.bump();
        }
        if !saw_digit {
            return Err(FormatError::SpecError);
        }
        spec.precision = precision as i8;
    }

    // --- type ---
    if let Some(b) = template.peek().and_then(CodeUnit::as_ascii) {
        if let Some((ty, uppercase)) = type_from_ascii(b) {
            spec.ty = Some(ty);
            spec.uppercase = uppercase;
            template.bump();
        }
    }

    // --- zero-fill precedence (§4.2) ---
    if zero_flag {
        spec.fill = U::from_ascii(b'0');
        spec.align = Some(Align::Numeric);
    }

    match template.peek() {
        Some(u) if u.eq_ascii(b'}') => {
            template.bump();
            Ok(spec)
        }
        _ => Err(FormatError::SpecError),
    }
}
