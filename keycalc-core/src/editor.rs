//! Expression editor
//!
//! Holds the raw characters typed on the keypad. Only the calculator
//! alphabet is accepted, so the buffer is always ASCII and byte offsets are
//! character offsets.

use heapless::String;

use crate::{DISPLAY_WIDTH, MAX_EXPR_LEN};

/// One line of the expression display
pub type DisplayWindow = String<DISPLAY_WIDTH>;

/// Check if `ch` belongs to the calculator alphabet
pub fn is_accepted_char(ch: char) -> bool {
    matches!(ch, '0'..='9' | '.' | '+' | '-' | '*' | '/' | '(' | ')')
}

/// Bounded expression buffer
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ExpressionEditor {
    buffer: String<MAX_EXPR_LEN>,
}

impl ExpressionEditor {
    /// Create an empty editor
    pub const fn new() -> Self {
        Self {
            buffer: String::new(),
        }
    }

    /// Append a character
    ///
    /// Returns `false` and leaves the buffer untouched when `ch` is outside
    /// the alphabet or the buffer is full.
    pub fn append(&mut self, ch: char) -> bool {
        if !is_accepted_char(ch) {
            trace!("rejected input {=char}", ch);
            return false;
        }
        self.buffer.push(ch).is_ok()
    }

    /// Remove the last character, if any
    pub fn backspace(&mut self) {
        self.buffer.pop();
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.buffer.len() == MAX_EXPR_LEN
    }

    /// Largest offset that still fills the window from the buffer
    pub fn max_scroll_offset(&self) -> usize {
        self.buffer.len().saturating_sub(DISPLAY_WIDTH)
    }

    /// Window of [`DISPLAY_WIDTH`] characters starting at `offset`
    ///
    /// Padded with spaces on the right. An offset past the end of the
    /// buffer is treated as zero.
    pub fn display_window(&self, offset: usize) -> DisplayWindow {
        let offset = if offset > self.buffer.len() { 0 } else { offset };
        let visible = &self.buffer[offset..];
        let visible = &visible[..visible.len().min(DISPLAY_WIDTH)];

        let mut window = DisplayWindow::new();
        // Both fit: `visible` is at most DISPLAY_WIDTH bytes
        let _ = window.push_str(visible);
        while window.push(' ').is_ok() {}
        window
    }
}
