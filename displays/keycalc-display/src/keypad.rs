//! Keypad key codes and actions
//!
//! The keypad is a 4x4 matrix plus a row of independent keys. The scanner
//! reports each press as a single byte code:
//!
//! ```text
//! Matrix            Independent
//! 1  2  3  +        .  (  )  BS  <  >
//! 4  5  6  -
//! 7  8  9  *
//! C  0  =  /
//! ```

/// Code reported when no key is pressed
pub const KEY_NONE: u8 = 0x00;

/// Clear key
pub const KEY_CLEAR: u8 = b'C';

/// Evaluate key
pub const KEY_EQUAL: u8 = b'=';

/// Backspace key (ASCII BS)
pub const KEY_BACKSPACE: u8 = 0x08;

/// Scroll the expression window left
pub const KEY_SCROLL_LEFT: u8 = b'<';

/// Scroll the expression window right
pub const KEY_SCROLL_RIGHT: u8 = b'>';

/// Matrix rows
pub const MATRIX_ROWS: usize = 4;

/// Matrix columns
pub const MATRIX_COLS: usize = 4;

/// Key codes by matrix position
pub const MATRIX_KEYMAP: [[u8; MATRIX_COLS]; MATRIX_ROWS] = [
    [b'1', b'2', b'3', b'+'],
    [b'4', b'5', b'6', b'-'],
    [b'7', b'8', b'9', b'*'],
    [KEY_CLEAR, b'0', KEY_EQUAL, b'/'],
];

/// What a key press asks the calculator to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum KeyAction {
    /// Append a character to the expression
    Input(char),
    /// Empty the expression and the result
    Clear,
    /// Remove the last character
    Backspace,
    /// Evaluate the expression
    Evaluate,
    /// Move the expression window towards the start
    ScrollLeft,
    /// Move the expression window towards the end
    ScrollRight,
}

impl KeyAction {
    /// Map a raw key code to an action
    ///
    /// Returns `None` for [`KEY_NONE`] and codes no key produces.
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            b'0'..=b'9' | b'.' | b'+' | b'-' | b'*' | b'/' | b'(' | b')' => {
                Some(KeyAction::Input(char::from(code)))
            }
            KEY_CLEAR => Some(KeyAction::Clear),
            KEY_EQUAL => Some(KeyAction::Evaluate),
            KEY_BACKSPACE => Some(KeyAction::Backspace),
            KEY_SCROLL_LEFT => Some(KeyAction::ScrollLeft),
            KEY_SCROLL_RIGHT => Some(KeyAction::ScrollRight),
            _ => None,
        }
    }

    /// Action of the matrix key at `row`, `col`
    pub fn from_matrix(row: usize, col: usize) -> Option<Self> {
        let code = *MATRIX_KEYMAP.get(row)?.get(col)?;
        Self::from_code(code)
    }

    /// Key code producing this action
    pub fn code(self) -> u8 {
        match self {
            // Input only carries ASCII characters
            KeyAction::Input(ch) => ch as u8,
            KeyAction::Clear => KEY_CLEAR,
            KeyAction::Backspace => KEY_BACKSPACE,
            KeyAction::Evaluate => KEY_EQUAL,
            KeyAction::ScrollLeft => KEY_SCROLL_LEFT,
            KeyAction::ScrollRight => KEY_SCROLL_RIGHT,
        }
    }
}

/// Source of debounced key presses
///
/// Implemented by the keypad scanner. Each press is reported once.
pub trait InputSource {
    /// Next pressed key code, or `None` if no key is down
    fn poll(&mut self) -> Option<u8>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matrix_layout() {
        assert_eq!(KeyAction::from_matrix(0, 0), Some(KeyAction::Input('1')));
        assert_eq!(KeyAction::from_matrix(1, 3), Some(KeyAction::Input('-')));
        assert_eq!(KeyAction::from_matrix(3, 0), Some(KeyAction::Clear));
        assert_eq!(KeyAction::from_matrix(3, 1), Some(KeyAction::Input('0')));
        assert_eq!(KeyAction::from_matrix(3, 2), Some(KeyAction::Evaluate));
        assert_eq!(KeyAction::from_matrix(3, 3), Some(KeyAction::Input('/')));
        assert_eq!(KeyAction::from_matrix(4, 0), None);
        assert_eq!(KeyAction::from_matrix(0, 4), None);
    }

    #[test]
    fn test_every_matrix_key_maps() {
        for row in 0..MATRIX_ROWS {
            for col in 0..MATRIX_COLS {
                assert!(KeyAction::from_matrix(row, col).is_some());
            }
        }
    }

    #[test]
    fn test_independent_keys() {
        assert_eq!(KeyAction::from_code(b'.'), Some(KeyAction::Input('.')));
        assert_eq!(KeyAction::from_code(b'('), Some(KeyAction::Input('(')));
        assert_eq!(KeyAction::from_code(b')'), Some(KeyAction::Input(')')));
        assert_eq!(KeyAction::from_code(0x08), Some(KeyAction::Backspace));
        assert_eq!(KeyAction::from_code(b'<'), Some(KeyAction::ScrollLeft));
        assert_eq!(KeyAction::from_code(b'>'), Some(KeyAction::ScrollRight));
    }

    #[test]
    fn test_unknown_codes() {
        assert_eq!(KeyAction::from_code(KEY_NONE), None);
        assert_eq!(KeyAction::from_code(b'x'), None);
        assert_eq!(KeyAction::from_code(b' '), None);
        assert_eq!(KeyAction::from_code(0xFF), None);
    }

    #[test]
    fn test_code_round_trip() {
        for code in 0..=u8::MAX {
            if let Some(action) = KeyAction::from_code(code) {
                assert_eq!(action.code(), code);
            }
        }
    }
}
