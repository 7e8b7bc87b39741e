//! Splitting of input lines into argument tokens.
//!
//! There is no quoting, escaping or expansion: a token is any maximal run of
//! bytes outside [`DELIMITERS`]. Tokens are raw bytes, so names that are not
//! valid UTF-8 reach `chdir` and `execvp` unchanged.

use crate::error::ShellError;
use crate::reader::grow_when_full;
use std::ffi::{CString, NulError, OsStr, OsString};
use std::ops::Index;
use std::os::unix::ffi::OsStrExt;

/// Initial token capacity, and the step it grows by.
pub const TOKEN_BUFSIZE: usize = 64;

/// Bytes that separate tokens: space, tab, carriage return, newline, bell.
pub const DELIMITERS: [u8; 5] = [b' ', b'\t', b'\r', b'\n', 0x07];

/// Ordered, owned tokens of one command line.
///
/// Token 0, when present, is the command name. Tokens are copies, so the list
/// does not borrow from the line it was split from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenList {
    tokens: Vec<OsString>,
}

impl TokenList {
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// The command name, if any.
    pub fn command(&self) -> Option<&OsStr> {
        self.get(0)
    }

    pub fn get(&self, index: usize) -> Option<&OsStr> {
        self.tokens.get(index).map(OsString::as_os_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &OsStr> {
        self.tokens.iter().map(OsString::as_os_str)
    }

    /// Argument vector for `execvp`.
    pub fn to_argv(&self) -> Result<Vec<CString>, NulError> {
        self.tokens.iter().map(|t| CString::new(t.as_bytes())).collect()
    }
}

impl Index<usize> for TokenList {
    type Output = OsStr;

    fn index(&self, index: usize) -> &OsStr {
        &self.tokens[index]
    }
}

impl<S: Into<OsString>> FromIterator<S> for TokenList {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            tokens: iter.into_iter().map(Into::into).collect(),
        }
    }
}

/// Split `line` on runs of [`DELIMITERS`].
///
/// Never yields an empty token. A blank line yields an empty list.
pub fn split_line(line: &OsStr) -> Result<TokenList, ShellError> {
    split_with_step(line, TOKEN_BUFSIZE)
}

fn split_with_step(line: &OsStr, step: usize) -> Result<TokenList, ShellError> {
    let mut tokens: Vec<OsString> = Vec::new();
    tokens.try_reserve_exact(step)?;

    let words = line
        .as_bytes()
        .split(|b| DELIMITERS.contains(b))
        .filter(|t| !t.is_empty());
    for word in words {
        grow_when_full(&mut tokens, step)?;
        tokens.push(OsStr::from_bytes(word).to_os_string());
    }

    Ok(TokenList { tokens })
}
