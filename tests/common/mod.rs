// Common test utilities for editor session tests

use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;
use wilx_nano::buffer::Buffer;
use wilx_nano::command::Command;
use wilx_nano::editor::Editor;

/// Editor over the given lines with a small viewport, target left untouched
#[allow(dead_code)]
pub fn editor_with_lines(lines: &[&str], rows: usize, cols: usize) -> Editor {
    Editor::new(Buffer::from_lines(lines), "scratch.txt").with_viewport_size(rows, cols)
}

/// Feed each character of `text` as an insert command
#[allow(dead_code)]
pub fn type_text(editor: &mut Editor, text: &str) {
    for ch in text.chars() {
        editor.execute_command(Command::InsertChar(ch));
    }
}

#[allow(dead_code)]
pub fn lines_of(editor: &Editor) -> Vec<String> {
    editor.buffer().lines().collect()
}

/// Temporary directory holding one file with `content`
#[allow(dead_code)]
pub fn temp_file(name: &str, content: &str) -> (TempDir, PathBuf) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    (dir, path)
}

/// Cursor lies inside the buffer and inside the viewport
#[allow(dead_code)]
pub fn assert_session_invariants(editor: &Editor) {
    let buffer = editor.buffer();
    let cursor = editor.cursor();
    assert!(buffer.line_count() >= 1, "buffer lost its last line");
    assert!(cursor.line < buffer.line_count(), "cursor line {} out of range", cursor.line);
    assert!(
        cursor.col <= buffer.line_len(cursor.line),
        "cursor col {} past end of line {}",
        cursor.col,
        cursor.line
    );
    let viewport = editor.viewport();
    assert!(viewport.visible_lines().contains(&cursor.line));
    let view = editor.view();
    let (row, col) = view.cursor_screen.expect("cursor scrolled off screen");
    assert!(row < viewport.rows && col < viewport.cols);
}
