//! Loading search input
//!
//! Texts come from the command line, from an interactive prompt, or from
//! files. Files are memory-mapped so large inputs are not copied.

use anyhow::{Context, Result};
use memmap2::Mmap;
use std::borrow::Cow;
use std::fs::File;
use std::io::{BufRead, Write};
use std::ops::Deref;
use std::path::Path;

/// Contents of an input file
pub enum FileText {
    Mapped(Mmap),
    /// Zero-length files cannot be mapped on every platform
    Empty,
}

impl Deref for FileText {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        match self {
            FileText::Mapped(mmap) => &mmap[..],
            FileText::Empty => &[],
        }
    }
}

/// Map `path` into memory for searching
pub fn load_file(path: &Path) -> Result<FileText> {
    let file = File::open(path).with_context(|| format!("Failed to open {}", path.display()))?;
    let len = file
        .metadata()
        .with_context(|| format!("Failed to stat {}", path.display()))?
        .len();

    if len == 0 {
        return Ok(FileText::Empty);
    }

    // SAFETY: the map is read-only and dropped before the search returns.
    // Concurrent truncation by another process is outside our control, as
    // with any mmap-based reader.
    let mmap = unsafe { Mmap::map(&file) }
        .with_context(|| format!("Failed to map {}", path.display()))?;
    Ok(FileText::Mapped(mmap))
}

/// Write `prompt`, then read one line from `input` without its line ending.
///
/// Returns `None` at end of input.
pub fn prompt_line<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
) -> Result<Option<String>> {
    write!(output, "{}", prompt)?;
    output.flush()?;

    let mut line = String::new();
    let read = input.read_line(&mut line).context("Failed to read from stdin")?;
    if read == 0 {
        return Ok(None);
    }

    let trimmed = line.trim_end_matches(['\n', '\r']).len();
    line.truncate(trimmed);
    Ok(Some(line))
}

/// ASCII case folding for case-insensitive search; borrows when nothing
/// needs folding.
pub fn fold_case(bytes: &[u8], ignore_case: bool) -> Cow<'_, [u8]> {
    if ignore_case && bytes.iter().any(u8::is_ascii_uppercase) {
        Cow::Owned(bytes.to_ascii_lowercase())
    } else {
        Cow::Borrowed(bytes)
    }
}

/// Check if content is likely binary
pub fn is_binary(content: &[u8]) -> bool {
    let sample_size = content.len().min(8192);
    let sample = &content[..sample_size];

    if memchr::memchr(0, sample).is_some() {
        return true;
    }

    // High proportion of control bytes
    let non_text_count = sample
        .iter()
        .filter(|&&b| b < 0x20 && b != b'\n' && b != b'\r' && b != b'\t')
        .count();

    non_text_count > sample_size / 8
}
