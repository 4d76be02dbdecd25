//! Field padding and alignment: combines a rendered value's three possible
//! pieces — sign, radix prefix, digits/text — with the requested width and
//! fill, in the order printf/format-string users expect.

use crate::code_unit::CodeUnit;
use crate::error::FormatError;
use crate::spec::{Align, Spec};
use crate::view::OutputView;

/// Write one field: `[left-fill] sign prefix [zero-fill] content [right-fill]`.
///
/// `sign` and `prefix` are ASCII and rendered before any fill in `Numeric`
/// alignment (so `{:+06}` on `-42` yields `-00042`, not `00-042`).
/// `is_numeric` selects the default alignment (`Right`) when the
/// placeholder didn't specify one; non-numeric content defaults to `Left`.
pub fn write_padded<U: CodeUnit>(
    out: &mut OutputView<'_, U>,
    spec: &Spec<U>,
    sign: Option<u8>,
    prefix: Option<&[u8]>,
    content: &[u8],
    is_numeric: bool,
) -> Result<(), FormatError> {
    let sign_len = sign.is_some() as usize;
    let prefix_len = prefix.map_or(0, <[u8]>::len);
    let core_len = sign_len + prefix_len + content.len();
    let width = spec.width as usize;
    let pad = width.saturating_sub(core_len);

    let align = spec
        .align
        .unwrap_or(if is_numeric { Align::Right } else { Align::Left });

    let write_sign_prefix = |out: &mut OutputView<'_, U>| -> Result<(), FormatError> {
        if let Some(s) = sign {
            out.push_ascii(s)?;
        }
        if let Some(p) = prefix {
            out.push_ascii_slice(p)?;
        }
        Ok(())
    };

    match align {
        Align::Left => {
            write_sign_prefix(out)?;
            out.push_ascii_slice(content)?;
            out.push_fill(spec.fill, pad)?;
        }
        Align::Right => {
            out.push_fill(spec.fill, pad)?;
            write_sign_prefix(out)?;
            out.push_ascii_slice(content)?;
        }
        Align::Center => {
            let left = pad / 2;
            let right = pad - left;
            out.push_fill(spec.fill, left)?;
            write_sign_prefix(out)?;
            out.push_ascii_slice(content)?;
            out.push_fill(spec.fill, right)?;
        }
        Align::Numeric => {
            // Sign and prefix precede the zero/fill run, which precedes
            // the digits — `{:+06}` on `-42` is `-00042`, not `00-042`.
            write_sign_prefix(out)?;
            out.push_fill(spec.fill, pad)?;
            out.push_ascii_slice(content)?;
        }
    }

    Ok(())
}

/// Write one field whose content is a run of code units rather than ASCII
/// bytes — used for `{:s}`/`{:c}`, where `U` may be a wide character type.
/// Neither kind carries a sign or prefix, so `Numeric` alignment collapses
/// to the same placement as `Left`.
pub fn write_padded_units<U: CodeUnit>(
    out: &mut OutputView<'_, U>,
    spec: &Spec<U>,
    content: &[U],
    is_numeric: bool,
) -> Result<(), FormatError> {
    let width = spec.width as usize;
    let pad = width.saturating_sub(content.len());

    let align = spec
        .align
        .unwrap_or(if is_numeric { Align::Right } else { Align::Left });

    match align {
        Align::Left | Align::Numeric => {
            out.push_slice(content)?;
            out.push_fill(spec.fill, pad)?;
        }
        Align::Right => {
            out.push_fill(spec.fill, pad)?;
            out.push_slice(content)?;
        }
        Align::Center => {
            let left = pad / 2;
            let right = pad - left;
            out.push_fill(spec.fill, left)?;
            out.push_slice(content)?;
            out.push_fill(spec.fill, right)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spec::Spec;

    fn spec_with(width: u8, align: Option<Align>) -> Spec<u8> {
        let mut s = Spec {
            index: None,
            fill: b' ',
            align,
            sign: None,
            hash: false,
            width,
            precision: -1,
            ty: None,
            uppercase: false,
            empty: false,
        };
        s.fill = b' ';
        s
    }

    #[test]
    fn numeric_align_places_sign_before_zero_fill() {
        let mut spec = spec_with(6, Some(Align::Numeric));
        spec.fill = b'0';
        let mut buf = [0u8; 8];
        let mut out = OutputView::new(&mut buf);
        write_padded(&mut out, &spec, Some(b'-'), None, b"42", true).unwrap();
        assert_eq!(&buf[..out.written_len()], b"-00042");
    }

    #[test]
    fn center_splits_padding() {
        let spec = spec_with(6, Some(Align::Center));
        let mut buf = [0u8; 8];
        let mut out = OutputView::new(&mut buf);
        write_padded(&mut out, &spec, None, None, b"ab", false).unwrap();
        assert_eq!(&buf[..out.written_len()], b"  ab  ");
    }

    #[test]
    fn default_alignment_depends_on_numeric() {
        let spec = spec_with(4, None);
        let mut buf = [0u8; 4];
        let mut out = OutputView::new(&mut buf);
        write_padded(&mut out, &spec, None, None, b"7", true).unwrap();
        assert_eq!(&buf[..out.written_len()], b"   7");

        let mut buf = [0u8; 4];
        let mut out = OutputView::new(&mut buf);
        write_padded(&mut out, &spec, None, None, b"7", false).unwrap();
        assert_eq!(&buf[..out.written_len()], b"7   ");
    }
}
