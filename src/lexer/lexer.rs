use std::{
    fs::File,
    io::{BufRead, BufReader, Cursor},
    iter::FusedIterator,
    mem,
    path::{Path, PathBuf},
};

use tracing::{debug, trace, warn};

use crate::{
    errors::errors::{Error, ErrorImpl},
    MK_TOKEN,
};

use super::{
    classifier::classify,
    patterns::next_candidate,
    tokens::{Token, TokenKind, COMMENT_MARKER},
};

enum State {
    Opening(PathBuf),
    Scanning(Box<dyn BufRead>),
    Done,
}

/// Pull-driven token sequence over one source.
///
/// Nothing is read until the first call to `next`. The stream ends with a
/// single `EOF` token, or with a single `FileNotFound` / `InvalidFileName`
/// token when the source cannot be opened, and yields `None` after that.
/// The underlying reader is dropped as soon as the stream is done, or when
/// the stream itself is dropped.
pub struct TokenStream {
    state: State,
    line: String,
    pos: usize,
    line_number: usize,
    open_error: Option<Error>,
}

impl TokenStream {
    /// A stream over the file at `path`. The file is opened on the first pull.
    pub fn open(path: impl AsRef<Path>) -> TokenStream {
        TokenStream::with_state(State::Opening(path.as_ref().to_path_buf()))
    }

    pub fn from_reader(reader: impl BufRead + 'static) -> TokenStream {
        TokenStream::with_state(State::Scanning(Box::new(reader)))
    }

    fn with_state(state: State) -> TokenStream {
        TokenStream {
            state,
            line: String::new(),
            pos: 0,
            line_number: 0,
            open_error: None,
        }
    }

    /// Number of source lines read so far.
    pub fn line_number(&self) -> usize {
        self.line_number
    }

    pub fn is_done(&self) -> bool {
        matches!(self.state, State::Done)
    }

    /// Why the source could not be opened, once a file sentinel has been emitted.
    pub fn open_error(&self) -> Option<&Error> {
        self.open_error.as_ref()
    }

    /// Reads the next line into `self.line`. Returns false once the source is exhausted.
    fn read_line(&mut self) -> bool {
        let State::Scanning(reader) = &mut self.state else {
            return false;
        };

        let mut buffer = Vec::new();
        match reader.read_until(b'\n', &mut buffer) {
            Ok(0) => return false,
            Ok(_) => {}
            Err(error) => {
                warn!(line = self.line_number + 1, %error, "failed to read source line, ending scan");
                return false;
            }
        }

        if buffer.last() == Some(&b'\n') {
            buffer.pop();
            if buffer.last() == Some(&b'\r') {
                buffer.pop();
            }
        }

        self.line = String::from_utf8_lossy(&buffer).into_owned();
        self.line_number += 1;
        self.pos = 0;

        if self.line.starts_with(COMMENT_MARKER) {
            trace!(line = self.line_number, "skipping comment line");
            self.pos = self.line.len();
        }

        true
    }

    /// Next token on the current line, or `None` once the line is used up.
    fn next_in_line(&mut self) -> Option<Token> {
        let range = next_candidate(&self.line, self.pos)?;
        let lexeme = &self.line[range.clone()];

        if lexeme == COMMENT_MARKER {
            self.pos = self.line.len();
            return None;
        }

        self.pos = range.end;
        let kind = classify(lexeme);

        if kind == TokenKind::Illegal {
            debug!(line = self.line_number, lexeme, "illegal token");
        } else {
            trace!(line = self.line_number, lexeme, %kind, "token");
        }

        Some(MK_TOKEN!(kind, String::from(lexeme), self.line_number))
    }
}

impl Iterator for TokenStream {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        loop {
            match mem::replace(&mut self.state, State::Done) {
                State::Done => return None,
                State::Opening(path) => match open_source(&path) {
                    Ok(file) => {
                        debug!(path = %path.display(), "opened source");
                        self.state = State::Scanning(Box::new(BufReader::new(file)));
                    }
                    Err(error) => {
                        debug!(%error, "could not open source");
                        let lexeme = path.to_string_lossy().into_owned();
                        let kind = error.sentinel_kind();
                        self.open_error = Some(error);
                        return Some(MK_TOKEN!(kind, lexeme, 0));
                    }
                },
                State::Scanning(reader) => {
                    self.state = State::Scanning(reader);

                    if let Some(token) = self.next_in_line() {
                        return Some(token);
                    }

                    if !self.read_line() {
                        debug!(lines = self.line_number, "end of source");
                        self.state = State::Done;
                        return Some(MK_TOKEN!(TokenKind::EOF, String::new(), self.line_number));
                    }
                }
            }
        }
    }
}

impl FusedIterator for TokenStream {}

/// Opens `path` for scanning, sorting any failure into a file-not-found or
/// invalid-file-name error.
pub fn open_source(path: &Path) -> Result<File, Error> {
    if path.as_os_str().is_empty() {
        return Err(Error::new(
            ErrorImpl::InvalidFileName {
                reason: String::from("empty path"),
            },
            path,
        ));
    }

    let file = File::open(path).map_err(|error| Error::from_io(&error, path))?;
    let metadata = file.metadata().map_err(|error| Error::from_io(&error, path))?;

    if metadata.is_dir() {
        return Err(Error::new(
            ErrorImpl::InvalidFileName {
                reason: String::from("path is a directory"),
            },
            path,
        ));
    }

    Ok(file)
}

/// Scans in-memory source text, EOF token included.
pub fn tokenize(source: &str) -> Vec<Token> {
    TokenStream::from_reader(Cursor::new(source.to_owned())).collect()
}
