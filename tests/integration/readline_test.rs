//! End-to-end reads through the dispatcher on a scripted terminal

use rawline::terminal::Terminal;
use rawline::{LineReader, ReadResult};

use crate::helpers::{line, read_with, read_with_columns, scripted};

// ============================================================================
// Committing and aborting
// ============================================================================

#[test]
fn enter_commits_typed_line() {
    let mut reader = LineReader::new();
    let (result, output) = read_with(&mut reader, "> ", b"hi\r");

    assert_eq!(result, line("hi"));
    assert!(output.starts_with("> "));
    assert!(reader.history().is_empty());
}

#[test]
fn line_feed_also_commits() {
    let mut reader = LineReader::new();
    let (result, _) = read_with(&mut reader, "> ", b"ok\n");
    assert_eq!(result, line("ok"));
}

#[test]
fn ctrl_d_on_empty_line_ends_input() {
    let mut reader = LineReader::new();
    let (result, _) = read_with(&mut reader, "> ", b"\x04");
    assert_eq!(result, ReadResult::EndOfInput);
    assert!(reader.history().is_empty());
}

#[test]
fn ctrl_d_on_non_empty_line_deletes_forward() {
    let mut reader = LineReader::new();
    let (result, _) = read_with(&mut reader, "> ", b"abc\x01\x04\r");
    assert_eq!(result, line("bc"));
}

#[test]
fn ctrl_c_interrupts_and_discards_line() {
    let mut reader = LineReader::new();
    let (result, _) = read_with(&mut reader, "> ", b"partial\x03");
    assert_eq!(result, ReadResult::Interrupted);
    assert!(reader.history().is_empty());
}

#[test]
fn closed_input_ends_read() {
    let mut reader = LineReader::new();
    reader.add_history("kept").unwrap();
    let (result, _) = read_with(&mut reader, "> ", b"unfinished");
    assert_eq!(result, ReadResult::EndOfInput);
    assert_eq!(reader.history().iter().collect::<Vec<_>>(), vec!["kept"]);
}

// ============================================================================
// Editing
// ============================================================================

#[test]
fn multibyte_input_is_one_codepoint() {
    let mut reader = LineReader::new();
    let (result, _) = read_with(&mut reader, "> ", &[0xE4, 0xB8, 0xAD, b'\r']);
    assert_eq!(result, line("\u{4E2D}"));
}

#[test]
fn backspace_removes_codepoint_not_byte() {
    let mut reader = LineReader::new();
    let (result, _) = read_with(&mut reader, "> ", "aé\x7f\r".as_bytes());
    assert_eq!(result, line("a"));
}

#[test]
fn word_and_line_kills() {
    let mut reader = LineReader::new();
    let (result, _) = read_with(&mut reader, "> ", b"foo bar\x17\r");
    assert_eq!(result, line("foo "));

    let (result, _) = read_with(&mut reader, "> ", b"foo bar\x01\x1bf\x0b\r");
    assert_eq!(result, line("foo"));

    let (result, _) = read_with(&mut reader, "> ", b"foo bar\x1bb\x15\r");
    assert_eq!(result, line("bar"));
}

#[test]
fn ctrl_t_swaps_previous_two() {
    let mut reader = LineReader::new();
    let (result, _) = read_with(&mut reader, "> ", b"ab\x14\r");
    assert_eq!(result, line("ba"));
}

#[test]
fn ctrl_l_clears_screen() {
    let mut reader = LineReader::new();
    let (result, output) = read_with(&mut reader, "> ", b"ab\x0c\r");
    assert_eq!(result, line("ab"));
    assert!(output.contains("\x1b[H\x1b[2J"));
}

// ============================================================================
// History
// ============================================================================

#[test]
fn up_arrow_recalls_older_entries() {
    let mut reader = LineReader::new();
    reader.add_history("first").unwrap();
    reader.add_history("second").unwrap();

    let (result, _) = read_with(&mut reader, "> ", b"\x1b[A\x1b[A\r");
    assert_eq!(result, line("first"));
    assert_eq!(
        reader.history().iter().collect::<Vec<_>>(),
        vec!["first", "second"]
    );
}

#[test]
fn down_arrow_returns_to_live_line() {
    let mut reader = LineReader::new();
    reader.add_history("old").unwrap();

    let (result, _) = read_with(&mut reader, "> ", b"new\x1b[A\x1b[B\r");
    assert_eq!(result, line("new"));
    assert_eq!(reader.history().len(), 1);
}

#[test]
fn ctrl_p_and_ctrl_n_navigate_too() {
    let mut reader = LineReader::new();
    reader.add_history("one").unwrap();
    reader.add_history("two").unwrap();

    let (result, _) = read_with(&mut reader, "> ", b"\x10\x10\x10\x0e\r");
    assert_eq!(result, line("two"));
}

#[test]
fn navigation_past_either_end_is_ignored() {
    let mut reader = LineReader::new();
    reader.add_history("only").unwrap();

    let (result, _) = read_with(&mut reader, "> ", b"\x1b[B\x1b[A\x1b[A\x1b[A\r");
    assert_eq!(result, line("only"));
}

#[test]
fn committed_lines_flow_into_history() {
    let mut reader = LineReader::new();
    let inputs: [&[u8]; 4] = [b"ls\r", b"ls\r", b"\r", b"pwd\r"];
    for input in inputs {
        if let (ReadResult::Line(text), _) = read_with(&mut reader, "> ", input) {
            reader.add_history(&text).unwrap();
        }
    }
    assert_eq!(
        reader.history().iter().collect::<Vec<_>>(),
        vec!["ls", "pwd"]
    );
}

#[test]
fn history_bound_is_respected() {
    let mut reader = LineReader::new();
    reader.set_history_max_len(2);
    for entry in ["a", "b", "c"] {
        reader.add_history(entry).unwrap();
    }
    assert_eq!(reader.history().iter().collect::<Vec<_>>(), vec!["b", "c"]);

    // the placeholder takes a slot, so a full history loses its oldest entry
    let (result, _) = read_with(&mut reader, "> ", b"\x1b[A\x1b[A\r");
    assert_eq!(result, line("c"));
    assert_eq!(reader.history().iter().collect::<Vec<_>>(), vec!["c"]);
}

// ============================================================================
// Completion and hints
// ============================================================================

fn three_candidates(line: &str) -> Vec<String> {
    if line == "ab" {
        vec!["c1".to_string(), "c2".to_string(), "c3".to_string()]
    } else {
        Vec::new()
    }
}

#[test]
fn enter_commits_shown_candidate() {
    let mut reader = LineReader::new();
    reader.set_completer(three_candidates);

    let (result, output) = read_with(&mut reader, "> ", b"ab\t\t\r");
    assert_eq!(result, line("c2"));
    assert!(output.contains("\r> c1\x1b[0K"));
    assert!(reader.history().is_empty());
}

#[test]
fn enter_on_first_candidate_commits_it() {
    let mut reader = LineReader::new();
    reader.set_completer(three_candidates);

    let (result, _) = read_with(&mut reader, "> ", b"ab\t\r");
    assert_eq!(result, line("c1"));
}

#[test]
fn other_key_restores_buffer_and_applies() {
    let mut reader = LineReader::new();
    reader.set_completer(three_candidates);

    let (result, _) = read_with(&mut reader, "> ", b"ab\tx\r");
    assert_eq!(result, line("abx"));
}

#[test]
fn tab_cycles_back_to_first_candidate() {
    let mut reader = LineReader::new();
    reader.set_completer(three_candidates);

    let (result, _) = read_with(&mut reader, "> ", b"ab\t\t\t\t\r");
    assert_eq!(result, line("c1"));
}

#[test]
fn hint_is_drawn_while_typing() {
    let mut reader = LineReader::new();
    reader.set_hinter(|line: &str| (line == "git").then(|| rawline::Hint::new(" commit").color(35)));

    let (result, output) = read_with(&mut reader, "> ", b"git\r");
    assert_eq!(result, line("git"));
    assert!(output.contains("\x1b[35m commit\x1b[0m"));
}

// ============================================================================
// Display modes
// ============================================================================

#[test]
fn mask_mode_never_echoes_text() {
    let mut reader = LineReader::new();
    reader.set_mask(true);

    let (result, output) = read_with(&mut reader, "> ", b"secret\r");
    assert_eq!(result, line("secret"));
    assert!(!output.contains("secret"));
    assert!(output.contains("******"));
}

#[test]
fn multiline_mode_wraps_instead_of_scrolling() {
    let mut reader = LineReader::new();
    reader.set_multiline(true);

    let (result, output) = read_with_columns(&mut reader, "> ", b"abcdefghijkl\r", 10);
    assert_eq!(result, line("abcdefghijkl"));
    assert!(output.contains("> abcdefghijkl"));
    assert!(output.contains("\x1b[1A"));
}

#[test]
fn single_line_mode_scrolls_long_lines() {
    let mut reader = LineReader::new();

    let (result, output) = read_with_columns(&mut reader, "> ", b"abcdefghijkl\r", 10);
    assert_eq!(result, line("abcdefghijkl"));
    assert!(!output.contains("abcdefghijkl"));
}

#[test]
fn scripted_terminal_reports_fixed_width() {
    let mut term = scripted(b"");
    assert_eq!(term.columns(), crate::helpers::COLUMNS);
    assert_eq!(term.read_byte().unwrap(), None);
}

// ============================================================================
// Failures
// ============================================================================

/// Terminal that yields `input` and then fails every read.
struct FailingTerminal {
    input: std::vec::IntoIter<u8>,
}

impl Terminal for FailingTerminal {
    fn read_byte(&mut self) -> std::io::Result<Option<u8>> {
        match self.input.next() {
            Some(byte) => Ok(Some(byte)),
            None => Err(std::io::Error::new(
                std::io::ErrorKind::Other,
                "read failed",
            )),
        }
    }

    fn write_all(&mut self, _bytes: &[u8]) -> std::io::Result<()> {
        Ok(())
    }

    fn columns(&mut self) -> usize {
        crate::helpers::COLUMNS
    }
}

#[test]
fn read_failure_is_fatal_and_leaves_history_alone() {
    let mut reader = LineReader::new();
    reader.add_history("kept").unwrap();

    let mut term = FailingTerminal {
        input: b"draft".to_vec().into_iter(),
    };
    let err = reader.read_line_with(&mut term, "> ").unwrap_err();
    assert!(matches!(err, rawline::Error::Io(_)));
    assert_eq!(reader.history().iter().collect::<Vec<_>>(), vec!["kept"]);

    // the next read sees no leftover entry
    let (result, _) = read_with(&mut reader, "> ", b"\x1b[A\x1b[A\r");
    assert_eq!(result, line("kept"));
}
