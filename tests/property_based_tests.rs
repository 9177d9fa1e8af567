// Property-based tests using proptest
// Random command streams must never leave the cursor or viewport inconsistent

mod common;

use common::{assert_session_invariants, editor_with_lines, lines_of};
use proptest::prelude::*;
use wilx_nano::command::Command;
use wilx_nano::history::DEFAULT_UNDO_CAPACITY;

fn command_strategy() -> impl Strategy<Value = Command> {
    prop_oneof![
        Just(Command::MoveLeft),
        Just(Command::MoveRight),
        Just(Command::MoveUp),
        Just(Command::MoveDown),
        Just(Command::MoveHome),
        Just(Command::MoveEnd),
        Just(Command::Enter),
        Just(Command::Backspace),
        Just(Command::Undo),
        Just(Command::SearchNext),
        prop::sample::select(vec!['a', 'z', ' ', '\t', 'é', '中']).prop_map(Command::InsertChar),
        "[a-c]{1,2}".prop_map(Command::Search),
    ]
}

fn edit_strategy() -> impl Strategy<Value = Command> {
    prop_oneof![
        Just(Command::MoveLeft),
        Just(Command::MoveRight),
        Just(Command::MoveUp),
        Just(Command::MoveDown),
        Just(Command::Enter),
        Just(Command::Backspace),
        prop::sample::select(vec!['x', 'y', '\t', 'ß']).prop_map(Command::InsertChar),
    ]
}

fn lines_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[a-c ]{0,12}", 1..8)
}

proptest! {
    #[test]
    fn cursor_and_viewport_stay_consistent(
        lines in lines_strategy(),
        rows in 1usize..6,
        cols in 1usize..10,
        commands in prop::collection::vec(command_strategy(), 0..60)
    ) {
        let refs: Vec<&str> = lines.iter().map(String::as_str).collect();
        let mut editor = editor_with_lines(&refs, rows, cols);
        assert_session_invariants(&editor);

        for cmd in commands {
            editor.execute_command(cmd);
            assert_session_invariants(&editor);
            prop_assert!(editor.undo_depth() <= DEFAULT_UNDO_CAPACITY);
        }
    }

    #[test]
    fn undoing_every_edit_restores_original(
        lines in lines_strategy(),
        commands in prop::collection::vec(edit_strategy(), 0..40)
    ) {
        let refs: Vec<&str> = lines.iter().map(String::as_str).collect();
        let mut editor = editor_with_lines(&refs, 4, 8);

        for cmd in commands {
            editor.execute_command(cmd);
        }
        while editor.undo().is_ok() {}

        prop_assert_eq!(lines_of(&editor), lines);
        assert_session_invariants(&editor);
    }

    #[test]
    fn resize_keeps_cursor_visible(
        lines in lines_strategy(),
        downs in 0usize..10,
        rows in 1usize..6,
        cols in 1usize..10
    ) {
        let refs: Vec<&str> = lines.iter().map(String::as_str).collect();
        let mut editor = editor_with_lines(&refs, 3, 5);
        for _ in 0..downs {
            editor.execute_command(Command::MoveDown);
            editor.execute_command(Command::MoveEnd);
        }
        editor.resize(rows, cols);
        assert_session_invariants(&editor);
    }
}
