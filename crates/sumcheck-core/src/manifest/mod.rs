//! Manifest reading: one `<path> <algorithm> <digest>` entry per line.
//!
//! The manifest is streamed and decoded with the same lossy UTF-8 policy as
//! text-mode hashing (leading BOM stripped, undecodable bytes dropped). Lines
//! end at `\n`, `\r`, `\r\n`, VT, FF, FS, GS, RS, NEL, U+2028 or U+2029.
//! Parsing stops being useful at the first bad line; callers are expected to
//! abort on the first `Err`.

mod error;
mod parse;

pub use error::ManifestError;
pub use parse::{parse_line, ManifestEntry};

use crate::checksum::text::LossyUtf8;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

fn is_line_break(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r'
            | '\x0b'
            | '\x0c'
            | '\x1c'
            | '\x1d'
            | '\x1e'
            | '\u{85}'
            | '\u{2028}'
            | '\u{2029}'
    )
}

/// Streaming manifest reader; iterate it to get entries in file order.
#[derive(Debug)]
pub struct Manifest<R = BufReader<File>> {
    path: PathBuf,
    reader: R,
    decoder: LossyUtf8,
    /// Decoded text not yet handed out as a line.
    text: String,
    scratch: Vec<u8>,
    line: usize,
    eof: bool,
    done: bool,
}

impl Manifest {
    /// Open the manifest at `path`.
    pub fn open(path: &Path) -> Result<Self, ManifestError> {
        let file = File::open(path).map_err(|source| ManifestError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::from_reader(path, BufReader::new(file)))
    }
}

impl<R: BufRead> Manifest<R> {
    /// Read a manifest from any buffered source; `path` is only used in errors.
    pub fn from_reader(path: impl Into<PathBuf>, reader: R) -> Self {
        Self {
            path: path.into(),
            reader,
            decoder: LossyUtf8::new(),
            text: String::new(),
            scratch: Vec::new(),
            line: 0,
            eof: false,
            done: false,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Split the first complete line off the decoded text.
    fn take_line(&mut self) -> Option<String> {
        let (idx, brk) = self.text.char_indices().find(|&(_, c)| is_line_break(c))?;
        let mut end = idx + brk.len_utf8();
        if brk == '\r' {
            match self.text[end..].chars().next() {
                Some('\n') => end += 1,
                // A following '\n' may still be unread.
                None if !self.eof => return None,
                _ => {}
            }
        }
        let line = self.text[..idx].to_string();
        self.text.drain(..end);
        Some(line)
    }

    /// Decode the next buffered chunk into `text`. An interrupted read adds
    /// nothing; the caller simply tries again.
    fn fill(&mut self) -> io::Result<()> {
        self.scratch.clear();
        let chunk = match self.reader.fill_buf() {
            Ok(chunk) => chunk,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => return Ok(()),
            Err(e) => return Err(e),
        };
        let n = chunk.len();
        if n == 0 {
            self.eof = true;
            self.decoder.finish(&mut self.scratch);
        } else {
            self.decoder.feed(chunk, &mut self.scratch);
            self.reader.consume(n);
        }
        // The decoder only emits valid UTF-8.
        self.text.push_str(&String::from_utf8_lossy(&self.scratch));
        Ok(())
    }

    /// Next line without its terminator, or `None` at EOF.
    fn next_line(&mut self) -> Option<Result<String, ManifestError>> {
        loop {
            if let Some(line) = self.take_line() {
                self.line += 1;
                return Some(Ok(line));
            }
            if self.eof {
                if self.text.is_empty() {
                    return None;
                }
                self.line += 1;
                return Some(Ok(std::mem::take(&mut self.text)));
            }
            if let Err(source) = self.fill() {
                return Some(Err(ManifestError::Read {
                    path: self.path.clone(),
                    line: self.line,
                    source,
                }));
            }
        }
    }
}

impl<R: BufRead> Iterator for Manifest<R> {
    type Item = Result<ManifestEntry, ManifestError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let item = match self.next_line()? {
            Ok(text) => parse_line(self.line, &text),
            Err(e) => Err(e),
        };
        if item.is_err() {
            self.done = true;
        }
        Some(item)
    }
}
