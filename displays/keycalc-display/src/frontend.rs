//! Calculator front end
//!
//! Turns key actions into calculator edits and keeps the screen buffer in
//! sync: line 1 is a window over the expression, line 2 the result of the
//! last evaluation.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use keycalc_core::{CalcConfig, Calculator, Evaluation};

use crate::backend::{DisplayBackend, DisplayError};
use crate::keypad::{InputSource, KeyAction};
use crate::screen::{Screen, EXPRESSION_ROW, RESULT_ROW};

/// Front end settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FrontendConfig {
    /// Columns moved per scroll key press
    pub scroll_step: u8,
    /// Jump to the end of the expression after each typed character
    pub auto_scroll: bool,
}

impl Default for FrontendConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl FrontendConfig {
    pub const fn new() -> Self {
        Self {
            scroll_step: 1,
            auto_scroll: true,
        }
    }
}

/// Key-driven calculator with a two-line display
///
/// A result wider than the display shows its leading digits with
/// [`CLIP_MARKER`](crate::screen::CLIP_MARKER) in the last column;
/// [`result_text`](Self::result_text) always holds the full text.
#[derive(Debug, Clone)]
pub struct Frontend {
    calculator: Calculator,
    screen: Screen,
    config: FrontendConfig,
    /// First expression column shown on line 1
    scroll_offset: usize,
    /// Last evaluation, cleared when the expression changes
    last: Option<Evaluation>,
}

impl Default for Frontend {
    fn default() -> Self {
        Self::new(CalcConfig::default(), FrontendConfig::default())
    }
}

impl Frontend {
    /// Create a front end with an empty expression
    pub fn new(calc: CalcConfig, config: FrontendConfig) -> Self {
        let mut frontend = Self {
            calculator: Calculator::with_config(calc),
            screen: Screen::new(),
            config,
            scroll_offset: 0,
            last: None,
        };
        frontend.refresh();
        frontend
    }

    pub fn calculator(&self) -> &Calculator {
        &self.calculator
    }

    pub fn config(&self) -> &FrontendConfig {
        &self.config
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn scroll_offset(&self) -> usize {
        self.scroll_offset
    }

    /// Last evaluation, if the expression has not changed since
    pub fn last_evaluation(&self) -> Option<&Evaluation> {
        self.last.as_ref()
    }

    /// Text on the result line
    pub fn result_text(&self) -> &str {
        self.last.as_ref().map_or("", Evaluation::text)
    }

    /// Apply one key action
    ///
    /// Returns `false` if the action changed nothing, e.g. a character the
    /// full expression could not take.
    pub fn handle(&mut self, action: KeyAction) -> bool {
        let changed = match action {
            KeyAction::Input(ch) => self.input(ch),
            KeyAction::Backspace => {
                let changed = !self.calculator.expression().is_empty();
                self.calculator.backspace();
                self.clamp_offset();
                changed
            }
            KeyAction::Clear => {
                self.calculator.clear();
                self.scroll_offset = 0;
                self.last = None;
                true
            }
            KeyAction::Evaluate => {
                let evaluation = self.calculator.evaluate();
                debug!("= {} (code {})", evaluation.text(), evaluation.code());
                self.last = Some(evaluation);
                true
            }
            KeyAction::ScrollLeft => {
                let step = usize::from(self.config.scroll_step);
                self.scroll_to(self.scroll_offset.saturating_sub(step))
            }
            KeyAction::ScrollRight => {
                let step = usize::from(self.config.scroll_step);
                self.scroll_to(self.scroll_offset.saturating_add(step))
            }
        };

        if changed {
            self.refresh();
        }
        changed
    }

    /// Apply the action bound to a raw key code
    ///
    /// Unknown codes are ignored and return `false`.
    pub fn handle_key_code(&mut self, code: u8) -> bool {
        match KeyAction::from_code(code) {
            Some(action) => self.handle(action),
            None => {
                trace!("ignoring key code {=u8:#x}", code);
                false
            }
        }
    }

    /// Read one key from `input` and apply it
    pub fn poll<I: InputSource>(&mut self, input: &mut I) -> Option<KeyAction> {
        let action = KeyAction::from_code(input.poll()?)?;
        self.handle(action);
        Some(action)
    }

    /// Draw the screen onto `backend` if it changed since the last render
    ///
    /// Returns whether anything was drawn.
    pub fn render<B: DisplayBackend>(&mut self, backend: &mut B) -> Result<bool, DisplayError> {
        self.screen.draw(backend)
    }

    fn input(&mut self, ch: char) -> bool {
        if !self.calculator.input_char(ch) {
            return false;
        }
        self.last = None;
        if self.config.auto_scroll {
            self.scroll_offset = self.calculator.max_scroll_offset();
        }
        true
    }

    fn scroll_to(&mut self, offset: usize) -> bool {
        let offset = offset.min(self.calculator.max_scroll_offset());
        let changed = offset != self.scroll_offset;
        self.scroll_offset = offset;
        changed
    }

    fn clamp_offset(&mut self) {
        self.scroll_offset = self.scroll_offset.min(self.calculator.max_scroll_offset());
    }

    /// Rebuild both screen rows from the calculator state
    fn refresh(&mut self) {
        let window = self.calculator.display_window(self.scroll_offset);
        self.screen.set_line(EXPRESSION_ROW, &window);
        let result = self.last.as_ref().map_or("", Evaluation::text);
        self.screen.set_line_right(RESULT_ROW, result);
    }
}
