//! Output formatting for search results

use crate::search::{Outcome, ShiftRule, ShiftStep};
use serde::Serialize;
use std::io::{self, Write};
use std::ops::Range;
use std::path::Path;
use termcolor::{Color, ColorSpec, WriteColor};

/// Machine-readable result for one searched text
#[derive(Debug, Serialize)]
pub struct SearchReport {
    /// File path, or `None` for text given on the command line or stdin
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    pub pattern: String,
    pub text_len: usize,
    pub positions: Vec<usize>,
    /// 1-based `(line, column)` of each position
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_columns: Option<Vec<(usize, usize)>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trace: Option<Vec<ShiftStep>>,
}

/// Print the match summary in the classic format
pub fn print_positions<W: WriteColor>(
    out: &mut W,
    source: Option<&Path>,
    positions: &[usize],
) -> io::Result<()> {
    print_source(out, source)?;

    if positions.is_empty() {
        writeln!(out, "Pattern not found in the text.")?;
        return Ok(());
    }

    write!(out, "Pattern found at positions:")?;
    out.set_color(ColorSpec::new().set_fg(Some(Color::Green)))?;
    for pos in positions {
        write!(out, " {}", pos)?;
    }
    out.reset()?;
    writeln!(out)?;

    Ok(())
}

/// Print one `line:column` entry per match
pub fn print_line_columns<W: WriteColor>(
    out: &mut W,
    source: Option<&Path>,
    text: &[u8],
    positions: &[usize],
) -> io::Result<()> {
    if positions.is_empty() {
        print_source(out, source)?;
        writeln!(out, "Pattern not found in the text.")?;
        return Ok(());
    }

    for (pos, (line, col)) in positions.iter().zip(line_columns(text, positions)) {
        print_source(out, source)?;
        out.set_color(ColorSpec::new().set_fg(Some(Color::Green)))?;
        write!(out, "{}", line)?;
        out.reset()?;
        write!(out, ":{}", col)?;
        writeln!(out, " (offset {})", pos)?;
    }

    Ok(())
}

/// Print `text` with every match highlighted
pub fn print_highlighted<W: WriteColor>(
    out: &mut W,
    text: &[u8],
    positions: &[usize],
    pattern_len: usize,
) -> io::Result<()> {
    let mut cursor = 0;

    for span in merge_spans(positions, pattern_len, text.len()) {
        out.write_all(&text[cursor..span.start])?;
        out.set_color(ColorSpec::new().set_fg(Some(Color::Red)).set_bold(true))?;
        out.write_all(&text[span.clone()])?;
        out.reset()?;
        cursor = span.end;
    }

    out.write_all(&text[cursor..])?;
    if !text.ends_with(b"\n") {
        writeln!(out)?;
    }

    Ok(())
}

/// Print one line per comparison round
pub fn print_trace<W: WriteColor>(out: &mut W, steps: &[ShiftStep]) -> io::Result<()> {
    for step in steps {
        write!(out, "offset {:>4}: ", step.offset)?;

        match step.outcome {
            Outcome::Match => {
                out.set_color(ColorSpec::new().set_fg(Some(Color::Green)).set_bold(true))?;
                write!(out, "match")?;
                out.reset()?;
            }
            Outcome::Mismatch { at, byte } => {
                write!(out, "mismatch at {} ({}), ", at, display_byte(byte))?;
                write!(
                    out,
                    "bad character {}, good suffix {}",
                    step.bad_char_shift, step.good_suffix_shift
                )?;
            }
        }

        write!(out, " -> shift {} ", step.shift)?;
        out.set_color(ColorSpec::new().set_fg(Some(rule_color(step.rule))))?;
        write!(out, "({})", step.rule.as_str())?;
        out.reset()?;
        writeln!(out)?;
    }

    Ok(())
}

/// Print reports as a JSON array
pub fn print_json<W: Write>(out: &mut W, reports: &[SearchReport]) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, reports)?;
    writeln!(out)?;
    Ok(())
}

fn print_source<W: WriteColor>(out: &mut W, source: Option<&Path>) -> io::Result<()> {
    if let Some(path) = source {
        out.set_color(ColorSpec::new().set_fg(Some(Color::Magenta)))?;
        write!(out, "{}", path.display())?;
        out.reset()?;
        write!(out, ": ")?;
    }
    Ok(())
}

fn rule_color(rule: ShiftRule) -> Color {
    match rule {
        ShiftRule::BadCharacter => Color::Yellow,
        ShiftRule::GoodSuffix => Color::Cyan,
        ShiftRule::FullMatch => Color::Green,
        ShiftRule::MinimalStep => Color::White,
    }
}

fn display_byte(byte: u8) -> String {
    if byte.is_ascii_graphic() || byte == b' ' {
        format!("'{}'", byte as char)
    } else {
        format!("0x{:02x}", byte)
    }
}

/// Collapse overlapping or touching match ranges.
pub fn merge_spans(positions: &[usize], pattern_len: usize, text_len: usize) -> Vec<Range<usize>> {
    let mut spans: Vec<Range<usize>> = Vec::new();

    for &pos in positions {
        let end = (pos + pattern_len).min(text_len);
        if pos >= end {
            continue;
        }
        match spans.last_mut() {
            Some(last) if pos <= last.end => last.end = last.end.max(end),
            _ => spans.push(pos..end),
        }
    }

    spans
}

/// 1-based line and byte column for each of the sorted `positions`.
pub fn line_columns(text: &[u8], positions: &[usize]) -> Vec<(usize, usize)> {
    let mut result = Vec::with_capacity(positions.len());
    let mut newlines = memchr::memchr_iter(b'\n', text).peekable();
    let mut line = 1;
    let mut line_start = 0;

    for &pos in positions {
        while let Some(&nl) = newlines.peek() {
            if nl >= pos {
                break;
            }
            line += 1;
            line_start = nl + 1;
            newlines.next();
        }
        result.push((line, pos - line_start + 1));
    }

    result
}
