//! The `format` entry point: alternates between copying literal template
//! runs and rendering placeholders until the template is exhausted.

use crate::arg::ArgValue;
use crate::code_unit::CodeUnit;
use crate::error::FormatError;
use crate::render::render;
use crate::spec::parse_placeholder;
use crate::view::{OutputView, TemplateView};

/// Argument lists longer than this are rejected outright — matches the
/// `sizeof...(Args) < 128` ceiling in the `usf` library.
pub const MAX_ARGS: usize = 127;

/// Render `template` against `args` into `output`, returning the number of
/// code units written. `{{` and `}}` are literal-escaped braces; every
/// other `{` opens a placeholder, parsed by [`parse_placeholder`].
/// Placeholders without an explicit index consume arguments left to right.
pub fn format<U: CodeUnit>(
    output: &mut [U],
    template: &[U],
    args: &[ArgValue<'_, U>],
) -> Result<usize, FormatError> {
    if args.len() > MAX_ARGS {
        return Err(FormatError::ArgIndex);
    }

    let mut tv = TemplateView::new(template);
    let mut out = OutputView::new(output);
    let mut auto_index = 0usize;

    while let Some(c) = tv.peek() {
        if c.eq_ascii(b'{') {
            if tv.peek_next().is_some_and(|n| n.eq_ascii(b'{')) {
                tv.bump();
                tv.bump();
                out.push(c)?;
                continue;
            }
            let spec = parse_placeholder(&mut tv)?;
            let index = match spec.index {
                Some(i) => i as usize,
                None => {
                    let i = auto_index;
                    auto_index += 1;
                    i
                }
            };
            let arg = args.get(index).ok_or(FormatError::ArgIndex)?;
            render(&mut out, &spec, arg)?;
        } else if c.eq_ascii(b'}') {
            if tv.peek_next().is_some_and(|n| n.eq_ascii(b'}')) {
                tv.bump();
                tv.bump();
                out.push(c)?;
                continue;
            }
            return Err(FormatError::SpecError);
        } else {
            tv.bump();
            out.push(c)?;
        }
    }

    #[cfg(feature = "terminate")]
    out.write_terminator()?;

    Ok(out.written_len())
}
