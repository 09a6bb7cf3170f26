//! Tests for the template engine.

use super::*;
use crate::reader::{FileReader, MemoryReader, Span, StreamReader};
use std::fs;
use std::io::Cursor;
use tempfile::TempDir;

/// Expands every line of `template` into owned strings.
fn expand_all(template: &str, values: &[&str]) -> Vec<String> {
    let mut engine = Engine::new(MemoryReader::new(template));
    engine.start(values);
    let mut lines = Vec::new();
    while let Some(line) = engine.next_line().unwrap() {
        lines.push(String::from_utf8(line.to_vec()).unwrap());
    }
    engine.end().unwrap();
    lines
}

/// Straightforward single-pass expansion used to cross-check the engine.
fn naive_expand(line: &str, values: &[&str]) -> String {
    let mut out = String::new();
    let mut chars = line.chars().peekable();
    while let Some(ch) = chars.next() {
        if ch != '$' {
            out.push(ch);
            continue;
        }
        match chars.peek().copied() {
            Some(d) if d.is_ascii_digit() => {
                chars.next();
                let index = d.to_digit(10).unwrap() as usize;
                if let Some(value) = values.get(index) {
                    out.push_str(value);
                }
            }
            Some('$') => {
                chars.next();
                out.push('$');
            }
            _ => out.push('$'),
        }
    }
    out
}

#[test]
fn test_hello_world_scenario() {
    let lines = expand_all("Hello, $0!\n$1 is $$10", &["world", "Price"]);
    assert_eq!(lines, vec!["Hello, world!", "Price is $10"]);
}

#[test]
fn test_out_of_range_placeholder_is_deleted() {
    assert_eq!(expand_all("$5 unknown", &["a"]), vec![" unknown"]);
}

#[test]
fn test_empty_template_never_allocates() {
    let mut engine = Engine::new(MemoryReader::new(""));
    engine.start(Values::empty());
    assert_eq!(engine.next_line().unwrap(), None);
    assert!(!engine.holds_buffer());
}

#[test]
fn test_text_without_dollar_is_unchanged() {
    let template = "plain line\n  indented\t tab\n\nunicode: 日本語 🎉";
    let lines = expand_all(template, &["unused"]);
    let expected: Vec<&str> = template.split('\n').collect();
    assert_eq!(lines, expected);
    for (got, want) in lines.iter().zip(expected) {
        assert_eq!(got.len(), want.len());
    }
}

#[test]
fn test_placeholders_preserve_surrounding_order() {
    let lines = expand_all("<$2|$0|$1>", &["a", "bb", "ccc"]);
    assert_eq!(lines, vec!["<ccc|a|bb>"]);
}

#[test]
fn test_repeated_and_adjacent_placeholders() {
    let lines = expand_all("$0$0$1$0", &["x", "Y"]);
    assert_eq!(lines, vec!["xxYx"]);
}

#[test]
fn test_no_values_deletes_every_placeholder() {
    let lines = expand_all("a$0b$9c", &[]);
    assert_eq!(lines, vec!["abc"]);
}

#[test]
fn test_double_dollar_escape() {
    assert_eq!(expand_all("$$", &[]), vec!["$"]);
    assert_eq!(expand_all("cost: $$$0", &["5"]), vec!["cost: $5"]);
    assert_eq!(expand_all("$$$$", &[]), vec!["$$"]);
}

#[test]
fn test_lone_dollar_is_literal() {
    assert_eq!(expand_all("end$", &["v"]), vec!["end$"]);
    assert_eq!(expand_all("$x and $ y", &["v"]), vec!["$x and $ y"]);
    // The byte after a lone `$` is scanned normally
    assert_eq!(expand_all("$-$0", &["v"]), vec!["$-v"]);
}

#[test]
fn test_only_single_digit_indices() {
    let values = ["zero", "one", "two", "3", "4", "5", "6", "7", "8", "9", "ten"];
    assert_eq!(expand_all("$10", &values), vec!["one0"]);
    assert_eq!(expand_all("$9", &values), vec!["9"]);
}

#[test]
fn test_value_containing_dollar_is_not_rescanned() {
    assert_eq!(expand_all("$0", &["$1"]), vec!["$1"]);
}

#[test]
fn test_measure_matches_fill_across_tables() {
    let lines = [
        "",
        "$",
        "$$",
        "$$$",
        "$0",
        "$9",
        "a$b$$c$1d$",
        "Hello, $0! $1 is $$10",
        "$0$1$2$3$4$5$6$7$8$9",
        "trailing $",
        "🎉$0🎉$$🎉",
    ];
    let tables: [&[&str]; 4] = [
        &[],
        &["world"],
        &["", "", ""],
        &["a", "bb", "ccc", "dddd", "", "ünï", "$", "$$", "7", "nine"],
    ];

    for table in tables {
        let values = Values::from(table);
        for line in lines {
            let measured = scan::measure(line.as_bytes(), &values);
            let expanded = expand_line(line.as_bytes(), table).unwrap();
            assert_eq!(measured, expanded.len(), "line {:?}", line);
            assert_eq!(
                String::from_utf8(expanded).unwrap(),
                naive_expand(line, table),
                "line {:?} with {:?}",
                line,
                table
            );
        }
    }
}

#[test]
fn test_end_of_input_is_repeatable() {
    let mut engine = Engine::new(MemoryReader::new("one\ntwo\n"));
    engine.start(Values::empty());
    assert_eq!(engine.next_line().unwrap(), Some(&b"one"[..]));
    assert_eq!(engine.next_line().unwrap(), Some(&b"two"[..]));
    for _ in 0..3 {
        assert_eq!(engine.next_line().unwrap(), None);
    }
}

#[test]
fn test_single_line_without_newline() {
    let mut engine = Engine::new(MemoryReader::new("$0 only"));
    engine.start(&["just"]);
    assert_eq!(engine.next_line().unwrap(), Some(&b"just only"[..]));
    assert_eq!(engine.next_line().unwrap(), None);
}

#[test]
fn test_trailing_newline_yields_no_extra_line() {
    assert_eq!(expand_all("a\n", &[]), vec!["a"]);
    assert_eq!(expand_all("a\n\n", &[]), vec!["a", ""]);
    assert_eq!(expand_all("\n", &[]), vec![""]);
}

#[test]
fn test_next_line_before_start_is_misuse() {
    let mut engine = Engine::new(MemoryReader::new("line"));
    let err = engine.next_line().unwrap_err();
    assert!(matches!(err, TemplateError::NotStarted));
}

#[test]
fn test_next_line_after_end_is_misuse() {
    let mut engine = Engine::new(MemoryReader::new("line"));
    engine.start(Values::empty());
    engine.end().unwrap();
    assert!(matches!(engine.next_line(), Err(TemplateError::NotStarted)));
}

#[test]
fn test_buffer_lifecycle() {
    let mut engine = Engine::new(MemoryReader::new("a$0\nb"));
    assert!(!engine.holds_buffer());

    engine.start(&["!"]);
    assert!(engine.is_started());
    assert!(!engine.holds_buffer());

    engine.next_line().unwrap();
    assert!(engine.holds_buffer());
    assert_eq!(engine.current_with_nul(), Some(&b"a!\0"[..]));

    engine.next_line().unwrap();
    assert_eq!(engine.current_with_nul(), Some(&b"b\0"[..]));

    engine.end().unwrap();
    assert!(!engine.is_started());
    assert!(!engine.holds_buffer());
    assert_eq!(engine.current_with_nul(), None);
}

#[test]
fn test_allocation_failure_leaves_no_buffer() {
    let mut engine = Engine::new(MemoryReader::new("one\n$0\nthree"));
    engine.start(&["two"]);
    assert_eq!(engine.next_line().unwrap(), Some(&b"one"[..]));
    assert!(engine.holds_buffer());

    let err = engine
        .next_line_with(|_| OutputBuffer::allocate(usize::MAX))
        .unwrap_err();
    assert!(matches!(err, TemplateError::Allocation { .. }));
    assert_eq!(err.exit_code(), crate::exit_codes::RESOURCE_EXHAUSTED);
    assert!(!engine.holds_buffer());
    assert_eq!(engine.current_with_nul(), None);

    // The session survives; the failed line was consumed
    assert!(engine.is_started());
    assert_eq!(engine.next_line().unwrap(), Some(&b"three"[..]));
    engine.end().unwrap();
}

#[test]
fn test_end_rewinds_for_next_session() {
    let mut engine = Engine::new(MemoryReader::new("$0\nsecond"));
    engine.start(&["first"]);
    assert_eq!(engine.next_line().unwrap(), Some(&b"first"[..]));
    engine.end().unwrap();

    engine.start(&["again"]);
    assert_eq!(engine.next_line().unwrap(), Some(&b"again"[..]));
    assert_eq!(engine.next_line().unwrap(), Some(&b"second"[..]));
    assert_eq!(engine.next_line().unwrap(), None);
    engine.end().unwrap();
}

#[test]
fn test_end_outside_session_is_harmless() {
    let mut engine = Engine::new(MemoryReader::new("x"));
    engine.end().unwrap();
    engine.end().unwrap();
    assert!(!engine.is_started());
}

#[test]
fn test_borrowed_reader_is_usable_after_engine() {
    let mut reader = MemoryReader::new("a\nb\nc");
    {
        let mut engine = Engine::new(&mut reader);
        engine.start(Values::empty());
        assert_eq!(engine.next_line().unwrap(), Some(&b"a"[..]));
    }
    assert_eq!(reader.position(), 2);
}

#[test]
fn test_session_drop_releases_buffer() {
    let mut engine = Engine::new(MemoryReader::new("one\ntwo\nthree"));
    {
        let mut session = engine.session(Values::empty());
        assert_eq!(session.next_line().unwrap(), Some(&b"one"[..]));
        // Abandoned before end of input
    }
    assert!(!engine.is_started());
    assert!(!engine.holds_buffer());
    assert_eq!(engine.reader().position(), 0);
}

#[test]
fn test_session_finish_ends_session() {
    let mut engine = Engine::new(MemoryReader::new("x"));
    let mut session = engine.session(&["v"]);
    assert_eq!(session.next_line().unwrap(), Some(&b"x"[..]));
    session.finish().unwrap();
    assert!(!engine.is_started());
}

struct UnresettableSource {
    lines: Vec<&'static str>,
    next: usize,
}

impl LineSource for UnresettableSource {
    fn next_line(&mut self) -> Result<Option<Span<'_>>> {
        let line = self.lines.get(self.next).copied();
        self.next += 1;
        Ok(line.map(Span::from))
    }

    fn reset(&mut self) -> Result<()> {
        Err(TemplateError::Read(std::io::Error::other("cannot rewind")))
    }
}

#[test]
fn test_session_drop_tolerates_reset_failure() {
    let source = UnresettableSource {
        lines: vec!["a"],
        next: 0,
    };
    let mut engine = Engine::new(source);
    {
        let mut session = engine.session(Values::empty());
        session.next_line().unwrap();
    }
    assert!(!engine.is_started());
    assert!(!engine.holds_buffer());
}

#[test]
fn test_session_finish_reports_reset_failure() {
    let source = UnresettableSource {
        lines: vec![],
        next: 0,
    };
    let mut engine = Engine::new(source);
    let session = engine.session(Values::empty());
    let err = session.finish().unwrap_err();
    assert!(matches!(err, TemplateError::Read(_)));
}

#[test]
fn test_expand_to_writes_line_endings() {
    let mut engine = Engine::new(MemoryReader::new("Hello, $0!\n$1 is $$10"));
    let mut out = Vec::new();
    let count = engine
        .expand_to(&["world", "Price"], &mut out, WriteOptions::default())
        .unwrap();
    assert_eq!(count, 2);
    assert_eq!(out, b"Hello, world!\nPrice is $10\n");
    assert!(!engine.is_started());

    let crlf = WriteOptions {
        line_ending: LineEnding::CrLf,
        final_newline: true,
    };
    let mut out = Vec::new();
    engine.expand_to(&["w", "p"], &mut out, crlf).unwrap();
    assert_eq!(out, b"Hello, w!\r\np is $10\r\n");
}

#[test]
fn test_expand_to_without_final_newline() {
    let options = WriteOptions {
        line_ending: LineEnding::Lf,
        final_newline: false,
    };
    let mut engine = Engine::new(MemoryReader::new("$0\n$1\n"));
    let mut out = Vec::new();
    engine.expand_to(&["a", "b"], &mut out, options).unwrap();
    assert_eq!(out, b"a\nb");
}

#[test]
fn test_expand_to_empty_template_writes_nothing() {
    let mut engine = Engine::new(MemoryReader::new(""));
    let mut out = Vec::new();
    let count = engine
        .expand_to(Values::empty(), &mut out, WriteOptions::default())
        .unwrap();
    assert_eq!(count, 0);
    assert!(out.is_empty());
}

#[test]
fn test_boxed_source() {
    let source: Box<dyn LineSource> = Box::new(StreamReader::new(Cursor::new("$0-$1")));
    let mut engine = Engine::new(source);
    engine.start(&["left", "right"]);
    assert_eq!(engine.next_line().unwrap(), Some(&b"left-right"[..]));
    assert_eq!(engine.next_line().unwrap(), None);
}

#[test]
fn test_file_template_across_sessions() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("letter.tpl");
    fs::write(&path, "Dear $0,\nYou owe $$$1.\n").unwrap();

    let mut engine = Engine::new(FileReader::open(&path).unwrap());

    let mut out = Vec::new();
    engine
        .expand_to(&["Ann", "12"], &mut out, WriteOptions::default())
        .unwrap();
    assert_eq!(out, b"Dear Ann,\nYou owe $12.\n");

    let mut out = Vec::new();
    engine
        .expand_to(&["Bob", "7"], &mut out, WriteOptions::default())
        .unwrap();
    assert_eq!(out, b"Dear Bob,\nYou owe $7.\n");
}

#[test]
fn test_expand_line_standalone() {
    let expanded = expand_line(b"$1 is $$10", &["world", "Price"]).unwrap();
    assert_eq!(expanded, b"Price is $10");
}
