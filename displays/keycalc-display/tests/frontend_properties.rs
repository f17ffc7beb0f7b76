//! Property tests for the front end under arbitrary key sequences

use keycalc_display::{Frontend, KeyAction, SCREEN_COLS};
use proptest::prelude::*;

fn action() -> impl Strategy<Value = KeyAction> {
    prop_oneof![
        6 => prop::sample::select(b"0123456789.+-*/()".to_vec())
            .prop_map(|code| KeyAction::Input(char::from(code))),
        1 => Just(KeyAction::Backspace),
        1 => Just(KeyAction::Clear),
        1 => Just(KeyAction::Evaluate),
        2 => Just(KeyAction::ScrollLeft),
        2 => Just(KeyAction::ScrollRight),
    ]
}

proptest! {
    #[test]
    fn scroll_offset_stays_in_bounds(actions in prop::collection::vec(action(), 0..120)) {
        let mut frontend = Frontend::default();
        for action in actions {
            frontend.handle(action);
            let max = frontend.calculator().max_scroll_offset();
            prop_assert!(frontend.scroll_offset() <= max);
        }
    }

    #[test]
    fn screen_rows_are_full_width(actions in prop::collection::vec(action(), 0..120)) {
        let mut frontend = Frontend::default();
        for action in actions {
            frontend.handle(action);
            for line in frontend.screen().lines() {
                prop_assert_eq!(line.len(), SCREEN_COLS);
            }
        }
    }

    #[test]
    fn expression_row_matches_window(actions in prop::collection::vec(action(), 0..120)) {
        let mut frontend = Frontend::default();
        for action in actions {
            frontend.handle(action);
        }
        let window = frontend.calculator().display_window(frontend.scroll_offset());
        prop_assert_eq!(frontend.screen().get_line(0), Some(window.as_str()));
    }

    #[test]
    fn unknown_key_codes_change_nothing(code in any::<u8>()) {
        prop_assume!(KeyAction::from_code(code).is_none());
        let mut frontend = Frontend::default();
        frontend.handle(KeyAction::Input('7'));
        prop_assert!(!frontend.handle_key_code(code));
        prop_assert_eq!(frontend.calculator().expression(), "7");
    }
}
