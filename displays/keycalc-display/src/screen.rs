//! Screen buffer
//!
//! Character buffer matching the 16x2 LCD. Rows are only marked dirty when
//! their content actually changes, so repeated renders of an unchanged
//! screen cost nothing on the bus.

use heapless::String;

use crate::backend::{DisplayBackend, DisplayError};

/// Number of character rows
pub const SCREEN_ROWS: usize = 2;

/// Number of character columns
pub const SCREEN_COLS: usize = keycalc_core::DISPLAY_WIDTH;

/// Row showing the expression window
pub const EXPRESSION_ROW: usize = 0;

/// Row showing the result
pub const RESULT_ROW: usize = 1;

/// Last column of a right-aligned row whose text did not fit
pub const CLIP_MARKER: char = '>';

/// One row of text
pub type Line = String<SCREEN_COLS>;

/// Text-mode screen buffer
#[derive(Debug, Clone)]
pub struct Screen {
    lines: [Line; SCREEN_ROWS],
    /// Whether the screen needs to be redrawn
    dirty: bool,
}

impl Default for Screen {
    fn default() -> Self {
        Self::new()
    }
}

impl Screen {
    /// Create a blank screen that still needs its first draw
    pub fn new() -> Self {
        Self {
            lines: core::array::from_fn(|_| String::new()),
            dirty: true,
        }
    }

    /// Blank every row
    pub fn clear(&mut self) {
        for row in 0..SCREEN_ROWS {
            self.set_line(row, "");
        }
    }

    /// Set a row, left-aligned
    ///
    /// Text longer than a row is cut at [`SCREEN_COLS`]. Rows past the
    /// bottom are ignored.
    pub fn set_line(&mut self, row: usize, text: &str) {
        let mut line = Line::new();
        let _ = line.push_str(fit(text));
        self.replace(row, line);
    }

    /// Set a row, right-aligned
    ///
    /// Text longer than a row keeps its first `SCREEN_COLS - 1` characters
    /// followed by [`CLIP_MARKER`].
    pub fn set_line_right(&mut self, row: usize, text: &str) {
        let mut line = Line::new();
        if text.chars().count() > SCREEN_COLS {
            let end = text
                .char_indices()
                .nth(SCREEN_COLS - 1)
                .map_or(text.len(), |(end, _)| end);
            let _ = line.push_str(&text[..end]);
            let _ = line.push(CLIP_MARKER);
        } else {
            for _ in text.chars().count()..SCREEN_COLS {
                let _ = line.push(' ');
            }
            let _ = line.push_str(text);
        }
        self.replace(row, line);
    }

    fn replace(&mut self, row: usize, line: Line) {
        if let Some(slot) = self.lines.get_mut(row) {
            if *slot != line {
                *slot = line;
                self.dirty = true;
            }
        }
    }

    /// Get the content of a row
    pub fn get_line(&self, row: usize) -> Option<&str> {
        self.lines.get(row).map(|s| s.as_str())
    }

    /// Get all lines as an iterator
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(|s| s.as_str())
    }

    /// Check if screen needs redrawing
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Force a full redraw on the next render
    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// Draw the screen onto `backend` if anything changed
    ///
    /// Returns whether a redraw happened. The screen stays dirty if the
    /// backend fails, so the next call retries.
    pub fn draw<B: DisplayBackend>(&mut self, backend: &mut B) -> Result<bool, DisplayError> {
        if !self.dirty {
            return Ok(false);
        }
        if !backend.is_ready() {
            return Err(DisplayError::NotInitialized);
        }

        let (cols, rows) = backend.dimensions();
        if usize::from(cols) < SCREEN_COLS || usize::from(rows) < SCREEN_ROWS {
            return Err(DisplayError::InvalidCoordinates);
        }

        backend.clear()?;
        for (row, line) in self.lines.iter().enumerate() {
            if !line.is_empty() {
                backend.draw_text(row as u8, 0, line)?;
            }
        }
        backend.flush()?;

        self.dirty = false;
        Ok(true)
    }
}

/// Cut `text` to one row
fn fit(text: &str) -> &str {
    match text.char_indices().nth(SCREEN_COLS) {
        Some((end, _)) => &text[..end],
        None => text,
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Screen {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "Screen[");
        for (i, line) in self.lines.iter().enumerate() {
            if i > 0 {
                defmt::write!(f, ", ");
            }
            defmt::write!(f, "{}", line.as_str());
        }
        defmt::write!(f, "]");
    }
}
