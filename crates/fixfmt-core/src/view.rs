//! Cursor wrappers over caller-owned template/output slices.
//!
//! A `(first, last)` cursor range is naturally a borrowed slice plus a
//! cursor in Rust, which is what these two types are. Both are
//! stack-scoped to a single `format` call.

use crate::code_unit::CodeUnit;
use crate::error::FormatError;

/// An immutable, advancing view over a template's code units.
pub struct TemplateView<'a, U> {
    data: &'a [U],
    pos: usize,
}

impl<'a, U: CodeUnit> TemplateView<'a, U> {
    pub fn new(data: &'a [U]) -> Self {
        Self { data, pos: 0 }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pos >= self.data.len()
    }

    /// The code unit at the cursor, without consuming it.
    #[inline]
    pub fn peek(&self) -> Option<U> {
        self.data.get(self.pos).copied()
    }

    /// The code unit one past the cursor, without consuming anything.
    #[inline]
    pub fn peek_next(&self) -> Option<U> {
        self.data.get(self.pos + 1).copied()
    }

    /// Consume and return the code unit at the cursor.
    #[inline]
    pub fn bump(&mut self) -> Option<U> {
        let u = self.peek()?;
        self.pos += 1;
        Some(u)
    }
}

/// A mutable, advancing view over the caller's output buffer.
///
/// Every write is bounds-checked; a write that would cross the end of the
/// buffer returns `FormatError::Overflow` and leaves the cursor where it was.
pub struct OutputView<'a, U> {
    data: &'a mut [U],
    pos: usize,
}

impl<'a, U: CodeUnit> OutputView<'a, U> {
    pub fn new(data: &'a mut [U]) -> Self {
        Self { data, pos: 0 }
    }

    #[inline]
    pub fn written_len(&self) -> usize {
        self.pos
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn remaining(&self) -> usize {
        self.data.len() - self.pos
    }

    #[inline]
    pub fn has_room(&self, n: usize) -> bool {
        self.remaining() >= n
    }

    /// Write a single code unit, advancing the cursor.
    #[inline]
    pub fn push(&mut self, unit: U) -> Result<(), FormatError> {
        if self.pos >= self.data.len() {
            return Err(FormatError::Overflow);
        }
        self.data[self.pos] = unit;
        self.pos += 1;
        Ok(())
    }

    /// Write `unit` `count` times, advancing the cursor.
    #[inline]
    pub fn push_fill(&mut self, unit: U, count: usize) -> Result<(), FormatError> {
        if !self.has_room(count) {
            return Err(FormatError::Overflow);
        }
        self.data[self.pos..self.pos + count].fill(unit);
        self.pos += count;
        Ok(())
    }

    /// Write a slice verbatim, advancing the cursor.
    #[inline]
    pub fn push_slice(&mut self, units: &[U]) -> Result<(), FormatError> {
        if !self.has_room(units.len()) {
            return Err(FormatError::Overflow);
        }
        self.data[self.pos..self.pos + units.len()].copy_from_slice(units);
        self.pos += units.len();
        Ok(())
    }

    /// Write one ASCII byte as a code unit.
    #[inline]
    pub fn push_ascii(&mut self, byte: u8) -> Result<(), FormatError> {
        self.push(U::from_ascii(byte))
    }

    /// Write a run of ASCII bytes as code units.
    #[inline]
    pub fn push_ascii_slice(&mut self, bytes: &[u8]) -> Result<(), FormatError> {
        if !self.has_room(bytes.len()) {
            return Err(FormatError::Overflow);
        }
        for &b in bytes {
            self.data[self.pos] = U::from_ascii(b);
            self.pos += 1;
        }
        Ok(())
    }

    /// Write `byte` `count` times as code units.
    #[inline]
    pub fn push_ascii_fill(&mut self, byte: u8, count: usize) -> Result<(), FormatError> {
        self.push_fill(U::from_ascii(byte), count)
    }

    /// Raw pointer to the cursor and the number of code units remaining,
    /// for FFI boundaries that must hand a `(pointer, length)` pair to
    /// foreign code rather than a `CustomFormat` trait object. Forming the
    /// pointer is safe; what the caller does with it is not this crate's
    /// concern (and is why the core stays `#![deny(unsafe_code)]`).
    #[inline]
    pub fn remainder_raw_parts_mut(&mut self) -> (*mut U, usize) {
        let remaining = self.remaining();
        (self.data[self.pos..].as_mut_ptr(), remaining)
    }

    /// Reborrow the remaining, unwritten suffix as a fresh view — used to
    /// hand a bounded sub-view to a `CustomFormat` implementor.
    #[inline]
    pub fn remainder(&mut self) -> OutputView<'_, U> {
        OutputView {
            data: &mut self.data[self.pos..],
            pos: 0,
        }
    }

    /// Adopt `written` additional code units as consumed after a sub-view
    /// (e.g. returned by `remainder`) was written into directly.
    #[inline]
    pub fn advance(&mut self, written: usize) -> Result<(), FormatError> {
        if !self.has_room(written) {
            return Err(FormatError::Overflow);
        }
        self.pos += written;
        Ok(())
    }

    /// Write a single `U::ZERO` at the cursor without advancing it — used
    /// by the `terminate` feature to NUL-terminate the buffer one past the
    /// content it reports as written.
    #[inline]
    pub fn write_terminator(&mut self) -> Result<(), FormatError> {
        if self.pos >= self.data.len() {
            return Err(FormatError::Overflow);
        }
        self.data[self.pos] = U::ZERO;
        Ok(())
    }
}
