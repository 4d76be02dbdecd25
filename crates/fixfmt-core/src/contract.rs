//! Contract-violation dispatch.
//!
//! `format` always returns a `Result`; callers who want Rust's own
//! try-propagation already have that. `format_or_die` is for call sites
//! (and the `fixfmt-abi` boundary, where failure has to be a non-`Result`
//! outcome) that instead want the fixed terminate/abort behavior the
//! original `USF_CONTRACT_VIOLATION` macro family offered, selected at
//! compile time by Cargo feature rather than by a runtime-checked enum.

use crate::arg::ArgValue;
use crate::code_unit::CodeUnit;
use crate::engine::format;
use crate::error::FormatError;

#[cfg(all(feature = "contract-terminate", feature = "contract-abort"))]
compile_error!("`contract-terminate` and `contract-abort` are mutually exclusive");

/// Format, or dispatch to the configured contract-violation handler.
///
/// Returns the number of code units written on success. On a
/// `FormatError`, the behavior is selected by feature: `contract-terminate`
/// (the default) panics; `contract-abort` aborts the process outright,
/// without unwinding.
pub fn format_or_die<U: CodeUnit>(
    output: &mut [U],
    template: &[U],
    args: &[ArgValue<'_, U>],
) -> usize {
    match format(output, template, args) {
        Ok(n) => n,
        Err(e) => on_violation(e),
    }
}

#[cfg(feature = "contract-abort")]
fn on_violation(_err: FormatError) -> ! {
    #[cfg(feature = "std")]
    {
        std::process::abort()
    }
    #[cfg(not(feature = "std"))]
    {
        // No libc/`std::process::abort` in a `no_std` build; spin rather
        // than unwind through a caller that asked for a hard stop.
        loop {
            core::hint::spin_loop();
        }
    }
}

#[cfg(all(feature = "contract-terminate", not(feature = "contract-abort")))]
fn on_violation(err: FormatError) -> ! {
    panic!("fixfmt contract violation: {err}")
}

#[cfg(not(any(feature = "contract-terminate", feature = "contract-abort")))]
fn on_violation(err: FormatError) -> ! {
    panic!("fixfmt contract violation: {err}")
}
