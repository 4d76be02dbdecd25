//! One renderer per argument kind: validates the parsed `Spec` against the
//! argument's actual kind (checks the parser can't make on its own, since
//! `Spec.ty` may still be unresolved at parse time), converts the value,
//! and hands the result to `Layout`.

use crate::arg::ArgValue;
use crate::code_unit::CodeUnit;
use crate::error::FormatError;
use crate::int_cvt::{
    convert_bin, convert_dec, convert_hex, convert_oct, count_digits_bin, count_digits_dec,
    count_digits_hex, count_digits_oct,
};
use crate::layout::{write_padded, write_padded_units};
use crate::spec::{FieldType, Sign, Spec};
use crate::view::OutputView;

#[cfg(feature = "float")]
use crate::float_cvt;

pub fn render<U: CodeUnit>(
    out: &mut OutputView<'_, U>,
    spec: &Spec<U>,
    arg: &ArgValue<'_, U>,
) -> Result<(), FormatError> {
    match arg {
        ArgValue::Bool(v) => render_bool(out, spec, *v),
        ArgValue::Char(v) => render_char(out, spec, *v),
        ArgValue::I32(v) => {
            let (mag, neg) = split_signed(*v as i64);
            render_int(out, spec, mag, neg, FieldType::Dec, DEC_RADIX)
        }
        ArgValue::U32(v) => render_int(out, spec, *v as u64, false, FieldType::Dec, DEC_RADIX),
        ArgValue::I64(v) => {
            let (mag, neg) = split_signed(*v);
            render_int(out, spec, mag, neg, FieldType::Dec, DEC_RADIX)
        }
        ArgValue::U64(v) => render_int(out, spec, *v, false, FieldType::Dec, DEC_RADIX),
        ArgValue::Pointer(addr) => {
            render_int(out, spec, *addr as u64, false, FieldType::Pointer, POINTER_RADIX)
        }
        #[cfg(feature = "float")]
        ArgValue::F64(v) => render_float(out, spec, *v),
        ArgValue::Str(s) => render_str(out, spec, s),
        ArgValue::Custom(c) => render_custom(out, spec, c),
    }
}

const DEC_RADIX: &[FieldType] = &[FieldType::Dec, FieldType::Hex, FieldType::Oct, FieldType::Bin];
const POINTER_RADIX: &[FieldType] = &[FieldType::Pointer];

fn split_signed(v: i64) -> (u64, bool) {
    if v < 0 {
        (v.unsigned_abs(), true)
    } else {
        (v as u64, false)
    }
}

/// Presentation types §4.6 classifies as "integers" — the radixes a `Bool`
/// or `Char` argument may additionally be rendered through.
fn is_integer_presentation(ty: FieldType) -> bool {
    matches!(ty, FieldType::Dec | FieldType::Hex | FieldType::Oct | FieldType::Bin)
}

fn render_bool<U: CodeUnit>(
    out: &mut OutputView<'_, U>,
    spec: &Spec<U>,
    value: bool,
) -> Result<(), FormatError> {
    match spec.ty {
        None => {
            if spec.sign.is_some() || spec.hash || spec.precision != -1 {
                return Err(FormatError::TypeMismatch);
            }
            let content: &[u8] = if value { b"true" } else { b"false" };
            write_padded(out, spec, None, None, content, false)
        }
        Some(ty) if is_integer_presentation(ty) => {
            render_int(out, spec, value as u64, false, ty, DEC_RADIX)
        }
        Some(_) => Err(FormatError::TypeMismatch),
    }
}

fn render_char<U: CodeUnit>(
    out: &mut OutputView<'_, U>,
    spec: &Spec<U>,
    value: U,
) -> Result<(), FormatError> {
    match spec.ty {
        None | Some(FieldType::Char) => {
            if spec.sign.is_some() || spec.hash || spec.precision != -1 {
                return Err(FormatError::TypeMismatch);
            }
            write_padded_units(out, spec, core::slice::from_ref(&value), false)
        }
        Some(ty) if is_integer_presentation(ty) => {
            let (mag, negative) = split_signed(value.to_code_point() as i32 as i64);
            render_int(out, spec, mag, negative, ty, DEC_RADIX)
        }
        Some(_) => Err(FormatError::TypeMismatch),
    }
}

fn render_str<U: CodeUnit>(
    out: &mut OutputView<'_, U>,
    spec: &Spec<U>,
    value: &[U],
) -> Result<(), FormatError> {
    if matches!(spec.ty, Some(ty) if ty != FieldType::Str) || spec.sign.is_some() || spec.hash {
        return Err(FormatError::TypeMismatch);
    }
    let content = if spec.precision >= 0 {
        let max = spec.precision as usize;
        &value[..max.min(value.len())]
    } else {
        value
    };
    write_padded_units(out, spec, content, false)
}

fn render_custom<U: CodeUnit>(
    out: &mut OutputView<'_, U>,
    spec: &Spec<U>,
    custom: &dyn crate::arg::CustomFormat<U>,
) -> Result<(), FormatError> {
    // A `Custom` argument only accepts the bare `{}`/`{N}` placeholder — no
    // fill/align/sign/hash/width/precision/type, since none of those have a
    // defined meaning for a foreign type the engine can't introspect.
    if !spec.empty {
        return Err(FormatError::TypeMismatch);
    }
    // Custom formatters write directly into their handed-out sub-view;
    // width/align/fill have no effect on them, matching the rest of this
    // module's "only built-in presentations get Layout treatment" split.
    let mut sub = out.remainder();
    custom.format_into(&mut sub)?;
    let written = sub.written_len();
    out.advance(written)
}

fn render_int<U: CodeUnit>(
    out: &mut OutputView<'_, U>,
    spec: &Spec<U>,
    magnitude: u64,
    negative: bool,
    default_ty: FieldType,
    allowed: &[FieldType],
) -> Result<(), FormatError> {
    let ty = spec.ty.unwrap_or(default_ty);
    if !allowed.contains(&ty) || spec.precision != -1 {
        return Err(FormatError::TypeMismatch);
    }

    // An explicit sign is valid on any numeric radix (dec/hex/oct/bin), not
    // just decimal — `{:+#x}` on 123 renders `+0x7b`. Pointers are never
    // signed: a raw address has no magnitude/sign split.
    let sign = match ty {
        FieldType::Pointer => {
            if negative || spec.sign.is_some() {
                return Err(FormatError::TypeMismatch);
            }
            None
        }
        _ => match (negative, spec.sign) {
            (true, _) => Some(b'-'),
            (false, Some(Sign::Plus)) => Some(b'+'),
            (false, Some(Sign::Space)) => Some(b' '),
            (false, _) => None,
        },
    };

    let prefix: Option<&[u8]> = if spec.hash {
        match ty {
            FieldType::Hex => Some(if spec.uppercase { b"0X" } else { b"0x" }),
            FieldType::Oct => Some(b"0"),
            FieldType::Bin => Some(if spec.uppercase { b"0B" } else { b"0b" }),
            FieldType::Pointer => Some(if spec.uppercase { b"0X" } else { b"0x" }),
            FieldType::Dec => return Err(FormatError::TypeMismatch),
            _ => return Err(FormatError::TypeMismatch),
        }
    } else {
        None
    };

    let mut buf = [0u8; 64];
    let len = match ty {
        FieldType::Dec => {
            let n = count_digits_dec(magnitude);
            convert_dec(&mut buf[..n], magnitude);
            n
        }
        FieldType::Hex | FieldType::Pointer => {
            let n = count_digits_hex(magnitude);
            convert_hex(&mut buf[..n], magnitude, spec.uppercase);
            n
        }
        FieldType::Oct => {
            let n = count_digits_oct(magnitude);
            convert_oct(&mut buf[..n], magnitude);
            n
        }
        FieldType::Bin => {
            let n = count_digits_bin(magnitude);
            convert_bin(&mut buf[..n], magnitude);
            n
        }
        _ => unreachable!("filtered by `allowed` above"),
    };

    write_padded(out, spec, sign, prefix, &buf[..len], true)
}

#[cfg(feature = "float")]
fn render_float<U: CodeUnit>(
    out: &mut OutputView<'_, U>,
    spec: &Spec<U>,
    value: f64,
) -> Result<(), FormatError> {
    let ty = spec.ty.unwrap_or(FieldType::GeneralG);
    if !matches!(ty, FieldType::FixedF | FieldType::ScientificE | FieldType::GeneralG) {
        return Err(FormatError::TypeMismatch);
    }

    let negative = value.is_sign_negative();
    let sign = match (negative, spec.sign) {
        (true, _) => Some(b'-'),
        (false, Some(Sign::Plus)) => Some(b'+'),
        (false, Some(Sign::Space)) => Some(b' '),
        (false, _) => None,
    };

    let mut buf = [0u8; 192];

    if value.is_nan() {
        let s: &[u8] = if spec.uppercase { b"NAN" } else { b"nan" };
        buf[..s.len()].copy_from_slice(s);
        return write_padded(out, spec, None, None, &buf[..s.len()], true);
    }
    if value.is_infinite() {
        let s: &[u8] = if spec.uppercase { b"INF" } else { b"inf" };
        buf[..s.len()].copy_from_slice(s);
        return write_padded(out, spec, sign, None, &buf[..s.len()], true);
    }

    let abs = value.abs();

    // Zero is a fast path in the original (`fp_value.i == 0`): it bypasses
    // the significand extractor entirely and never applies the "unspecified
    // precision defaults to 6" rule below, so `{:f}` on `0.0` prints `0`,
    // not `0.000000`.
    if abs == 0.0 {
        let len = compose_zero(&mut buf, ty, spec.precision, spec.uppercase);
        return write_padded(out, spec, sign, None, &buf[..len], true);
    }

    // Out-of-supported-range sentinel: matches `usf.hpp`'s
    // `value >= 1E-19 && value <= 1.8446744E19` gate.
    if !(1e-19..=1.8446744e19).contains(&abs) {
        let s: &[u8] = if spec.uppercase { b"OVF" } else { b"ovf" };
        buf[..s.len()].copy_from_slice(s);
        return write_padded(out, spec, sign, None, &buf[..s.len()], true);
    }

    let precision: i32 = if spec.precision < 0 { 6 } else { spec.precision as i32 };

    let len = match ty {
        FieldType::FixedF => {
            let (sig, exponent) = float_cvt::convert(abs, true, precision);
            compose_fixed(&mut buf, sig.as_bytes(), exponent, precision, spec.hash, false)
        }
        FieldType::ScientificE => {
            let (sig, exponent) = float_cvt::convert(abs, false, precision);
            compose_scientific(
                &mut buf,
                sig.as_bytes(),
                exponent,
                precision,
                spec.hash,
                false,
                spec.uppercase,
            )
        }
        FieldType::GeneralG => {
            // `g` trims trailing zeros from the fraction unless `#` is
            // given — `f`/`e` always pad out to the requested precision.
            let p = if precision == 0 { 1 } else { precision };
            let trim = !spec.hash;
            let (sig, exponent) = float_cvt::convert(abs, false, p - 1);
            if exponent < -4 || exponent >= p {
                let frac_digits = p - 1;
                compose_scientific(
                    &mut buf,
                    sig.as_bytes(),
                    exponent,
                    frac_digits,
                    spec.hash,
                    trim,
                    spec.uppercase,
                )
            } else {
                let frac_digits = p - 1 - exponent;
                compose_fixed(&mut buf, sig.as_bytes(), exponent, frac_digits.max(0), spec.hash, trim)
            }
        }
        _ => unreachable!("filtered above"),
    };

    write_padded(out, spec, sign, None, &buf[..len], true)
}

/// Write the zero fast path: `0`, an optional `.` plus `precision` zeros for
/// `f`/`e` (only when an explicit precision > 0 was requested — unlike the
/// general float path, the zero fast path does not default unspecified
/// precision to 6), and an optional `e+00` for the scientific presentation.
#[cfg(feature = "float")]
fn compose_zero(buf: &mut [u8], ty: FieldType, raw_precision: i8, uppercase: bool) -> usize {
    let precision = match ty {
        FieldType::FixedF | FieldType::ScientificE => raw_precision as i32,
        _ => 0,
    };

    let mut n = 0usize;
    buf[n] = b'0';
    n += 1;

    if precision > 0 {
        buf[n] = b'.';
        n += 1;
        for b in &mut buf[n..n + precision as usize] {
            *b = b'0';
        }
        n += precision as usize;
    }

    if ty == FieldType::ScientificE {
        buf[n] = if uppercase { b'E' } else { b'e' };
        n += 1;
        buf[n] = b'+';
        n += 1;
        buf[n] = b'0';
        n += 1;
        buf[n] = b'0';
        n += 1;
    }

    n
}

/// Write `ipart.fpart` into `buf`, returning the byte count. `digits` holds
/// the rounded significand (most significant first); `exponent` is the
/// base-10 exponent of its leading digit. `frac_width` fixes the number of
/// digits printed after the point (trailing zeros re-added as needed,
/// since rounding may have trimmed them); a trailing `.` with no digits is
/// only kept when `hash` is set.
#[cfg(feature = "float")]
fn compose_fixed(
    buf: &mut [u8],
    digits: &[u8],
    exponent: i32,
    frac_width: i32,
    hash: bool,
    trim: bool,
) -> usize {
    let mut n = 0usize;

    if exponent >= 0 {
        let ipart_len = (exponent + 1) as usize;
        if digits.len() <= ipart_len {
            buf[n..n + digits.len()].copy_from_slice(digits);
            n += digits.len();
            for b in &mut buf[n..n + (ipart_len - digits.len())] {
                *b = b'0';
            }
            n += ipart_len - digits.len();
            write_frac(buf, &mut n, &[], frac_width, hash, trim);
        } else {
            buf[n..n + ipart_len].copy_from_slice(&digits[..ipart_len]);
            n += ipart_len;
            write_frac(buf, &mut n, &digits[ipart_len..], frac_width, hash, trim);
        }
    } else {
        buf[n] = b'0';
        n += 1;
        let leading_zeros = (-exponent - 1).max(0) as usize;
        let mut scratch = [0u8; 160];
        scratch[..leading_zeros].fill(b'0');
        scratch[leading_zeros..leading_zeros + digits.len()].copy_from_slice(digits);
        write_frac(
            buf,
            &mut n,
            &scratch[..leading_zeros + digits.len()],
            frac_width,
            hash,
            trim,
        );
    }

    n
}

/// Write `.` plus a fractional digit run starting at `*n`.
///
/// When `trim` is set (the `g` presentation without `#`), `available` is
/// written as-is with no padding — `FloatCvt::convert` already trimmed its
/// trailing zeros, so this reproduces "shortest representation at this
/// precision". Otherwise (`f`, `e`, or `g` with `#`) the fraction is
/// padded with zeros out to exactly `width` digits.
#[cfg(feature = "float")]
fn write_frac(buf: &mut [u8], n: &mut usize, available: &[u8], width: i32, hash: bool, trim: bool) {
    if trim {
        if available.is_empty() && !hash {
            return;
        }
        buf[*n] = b'.';
        *n += 1;
        buf[*n..*n + available.len()].copy_from_slice(available);
        *n += available.len();
        return;
    }

    let width = width.max(0) as usize;
    if width == 0 && !hash {
        return;
    }
    buf[*n] = b'.';
    *n += 1;
    let take = available.len().min(width);
    buf[*n..*n + take].copy_from_slice(&available[..take]);
    *n += take;
    for b in &mut buf[*n..*n + (width - take)] {
        *b = b'0';
    }
    *n += width - take;
}

/// Write `d.ddddde±XX` into `buf`, returning the byte count.
#[cfg(feature = "float")]
fn compose_scientific(
    buf: &mut [u8],
    digits: &[u8],
    exponent: i32,
    frac_width: i32,
    hash: bool,
    trim: bool,
    uppercase: bool,
) -> usize {
    let mut n = 0usize;
    buf[n] = digits.first().copied().unwrap_or(b'0');
    n += 1;
    write_frac(buf, &mut n, digits.get(1..).unwrap_or(&[]), frac_width, hash, trim);
    buf[n] = if uppercase { b'E' } else { b'e' };
    n += 1;
    buf[n] = if exponent < 0 { b'-' } else { b'+' };
    n += 1;
    let exp_abs = exponent.unsigned_abs() as u64;
    let exp_digits = count_digits_dec(exp_abs).max(2);
    for b in &mut buf[n..n + (exp_digits - count_digits_dec(exp_abs))] {
        *b = b'0';
    }
    n += exp_digits - count_digits_dec(exp_abs);
    let written = count_digits_dec(exp_abs);
    convert_dec(&mut buf[n..n + written], exp_abs);
    n += written;
    n
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::arg::ArgValue;
    use crate::spec::{Align, Spec};

    fn plain_spec() -> Spec<u8> {
        Spec {
            index: None,
            fill: b' ',
            align: None,
            sign: None,
            hash: false,
            width: 0,
            precision: -1,
            ty: None,
            uppercase: false,
            empty: true,
        }
    }

    #[test]
    fn bool_integer_presentation_renders_zero_or_one() {
        let mut spec = plain_spec();
        spec.ty = Some(FieldType::Dec);
        let mut buf = [0u8; 8];
        let mut out = OutputView::new(&mut buf);
        render(&mut out, &spec, &ArgValue::<'_, u8>::Bool(true)).unwrap();
        assert_eq!(&buf[..out.written_len()], b"1");

        let mut buf = [0u8; 8];
        let mut out = OutputView::new(&mut buf);
        render(&mut out, &spec, &ArgValue::<'_, u8>::Bool(false)).unwrap();
        assert_eq!(&buf[..out.written_len()], b"0");
    }

    #[test]
    fn char_integer_presentation_renders_code_point() {
        let mut spec = plain_spec();
        spec.ty = Some(FieldType::Hex);
        let mut buf = [0u8; 8];
        let mut out = OutputView::new(&mut buf);
        render(&mut out, &spec, &ArgValue::<'_, u8>::Char(b'A')).unwrap();
        assert_eq!(&buf[..out.written_len()], b"41");
    }

    #[test]
    fn renders_signed_decimal_with_sign() {
        let mut spec = plain_spec();
        spec.sign = Some(Sign::Plus);
        let mut buf = [0u8; 8];
        let mut out = OutputView::new(&mut buf);
        render(&mut out, &spec, &ArgValue::<'_, u8>::I32(42)).unwrap();
        assert_eq!(&buf[..out.written_len()], b"+42");
    }

    #[test]
    fn renders_hex_with_hash_prefix() {
        let mut spec = plain_spec();
        spec.ty = Some(FieldType::Hex);
        spec.hash = true;
        let mut buf = [0u8; 8];
        let mut out = OutputView::new(&mut buf);
        render(&mut out, &spec, &ArgValue::<'_, u8>::U32(0xBEEF)).unwrap();
        assert_eq!(&buf[..out.written_len()], b"0xbeef");
    }

    #[test]
    fn explicit_sign_allowed_on_hex() {
        let mut spec = plain_spec();
        spec.ty = Some(FieldType::Hex);
        spec.hash = true;
        spec.sign = Some(Sign::Plus);
        spec.fill = b'*';
        spec.align = Some(Align::Right);
        spec.width = 14;
        let mut buf = [0u8; 16];
        let mut out = OutputView::new(&mut buf);
        render(&mut out, &spec, &ArgValue::<'_, u8>::I32(123)).unwrap();
        assert_eq!(&buf[..out.written_len()], b"*********+0x7b");
    }

    #[test]
    fn rejects_sign_on_pointer() {
        let mut spec = plain_spec();
        spec.ty = Some(FieldType::Pointer);
        spec.sign = Some(Sign::Plus);
        let mut buf = [0u8; 8];
        let mut out = OutputView::new(&mut buf);
        assert!(matches!(
            render(&mut out, &spec, &ArgValue::<'_, u8>::Pointer(1)),
            Err(FormatError::TypeMismatch)
        ));
    }

    #[cfg(feature = "float")]
    #[test]
    fn renders_fixed_float() {
        let mut spec = plain_spec();
        spec.ty = Some(FieldType::FixedF);
        spec.precision = 2;
        let mut buf = [0u8; 16];
        let mut out = OutputView::new(&mut buf);
        render(&mut out, &spec, &ArgValue::<'_, u8>::F64(3.14159)).unwrap();
        assert_eq!(&buf[..out.written_len()], b"3.14");
    }

    #[cfg(feature = "float")]
    #[test]
    fn renders_zero_general_as_bare_zero() {
        let mut spec = plain_spec();
        spec.ty = Some(FieldType::GeneralG);
        let mut buf = [0u8; 8];
        let mut out = OutputView::new(&mut buf);
        render(&mut out, &spec, &ArgValue::<'_, u8>::F64(0.0)).unwrap();
        assert_eq!(&buf[..out.written_len()], b"0");
    }

    #[cfg(feature = "float")]
    #[test]
    fn renders_zero_fixed_unspecified_precision_has_no_fraction() {
        let mut spec = plain_spec();
        spec.ty = Some(FieldType::FixedF);
        let mut buf = [0u8; 8];
        let mut out = OutputView::new(&mut buf);
        render(&mut out, &spec, &ArgValue::<'_, u8>::F64(0.0)).unwrap();
        assert_eq!(&buf[..out.written_len()], b"0");
    }

    #[cfg(feature = "float")]
    #[test]
    fn renders_zero_fixed_with_precision() {
        let mut spec = plain_spec();
        spec.ty = Some(FieldType::FixedF);
        spec.precision = 3;
        let mut buf = [0u8; 8];
        let mut out = OutputView::new(&mut buf);
        render(&mut out, &spec, &ArgValue::<'_, u8>::F64(-0.0)).unwrap();
        assert_eq!(&buf[..out.written_len()], b"-0.000");
    }

    #[cfg(feature = "float")]
    #[test]
    fn renders_zero_scientific_with_exponent() {
        let mut spec = plain_spec();
        spec.ty = Some(FieldType::ScientificE);
        let mut buf = [0u8; 8];
        let mut out = OutputView::new(&mut buf);
        render(&mut out, &spec, &ArgValue::<'_, u8>::F64(0.0)).unwrap();
        assert_eq!(&buf[..out.written_len()], b"0e+00");
    }

    #[cfg(feature = "float")]
    #[test]
    fn renders_out_of_range_as_ovf_sentinel() {
        let mut spec = plain_spec();
        spec.ty = Some(FieldType::FixedF);
        let mut buf = [0u8; 8];
        let mut out = OutputView::new(&mut buf);
        render(&mut out, &spec, &ArgValue::<'_, u8>::F64(1e30)).unwrap();
        assert_eq!(&buf[..out.written_len()], b"ovf");

        let mut buf = [0u8; 8];
        let mut out = OutputView::new(&mut buf);
        render(&mut out, &spec, &ArgValue::<'_, u8>::F64(-1e30)).unwrap();
        assert_eq!(&buf[..out.written_len()], b"-ovf");
    }

    #[cfg(feature = "float")]
    #[test]
    fn renders_general_trims_trailing_zeros() {
        let mut spec = plain_spec();
        spec.ty = Some(FieldType::GeneralG);
        let mut buf = [0u8; 16];
        let mut out = OutputView::new(&mut buf);
        render(&mut out, &spec, &ArgValue::<'_, u8>::F64(1.5)).unwrap();
        assert_eq!(&buf[..out.written_len()], b"1.5");
    }

    #[test]
    fn string_precision_truncates() {
        let mut spec = plain_spec();
        spec.precision = 3;
        let mut buf = [0u8; 8];
        let mut out = OutputView::new(&mut buf);
        render(&mut out, &spec, &ArgValue::<'_, u8>::Str(b"hello")).unwrap();
        assert_eq!(&buf[..out.written_len()], b"hel");
    }

    struct Echo;
    impl crate::arg::CustomFormat<u8> for Echo {
        fn format_into(&self, out: &mut OutputView<'_, u8>) -> Result<(), FormatError> {
            out.push_ascii_slice(b"ok")
        }
    }

    #[test]
    fn custom_runs_with_empty_spec() {
        let echo = Echo;
        let spec = plain_spec();
        let mut buf = [0u8; 8];
        let mut out = OutputView::new(&mut buf);
        render(&mut out, &spec, &ArgValue::<'_, u8>::Custom(&echo)).unwrap();
        assert_eq!(&buf[..out.written_len()], b"ok");
    }

    #[test]
    fn custom_rejects_non_empty_spec() {
        let echo = Echo;
        let mut spec = plain_spec();
        spec.empty = false;
        spec.width = 4;
        let mut buf = [0u8; 8];
        let mut out = OutputView::new(&mut buf);
        assert!(matches!(
            render(&mut out, &spec, &ArgValue::<'_, u8>::Custom(&echo)),
            Err(FormatError::TypeMismatch)
        ));
    }

    #[test]
    fn center_align_string() {
        let mut spec = plain_spec();
        spec.width = 6;
        spec.align = Some(Align::Center);
        let mut buf = [0u8; 8];
        let mut out = OutputView::new(&mut buf);
        render(&mut out, &spec, &ArgValue::<'_, u8>::Str(b"ab")).unwrap();
        assert_eq!(&buf[..out.written_len()], b"  ab  ");
    }
}
