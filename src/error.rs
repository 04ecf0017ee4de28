//! Error type shared by the composer, the reference protocol and the node types.

use std::fmt;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Outer delimiter of a composable JSON fragment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delimiter {
    Object,
    Array,
}

impl Delimiter {
    pub fn of(text: &str) -> Option<Self> {
        match text.as_bytes().first()? {
            b'{' => Some(Self::Object),
            b'[' => Some(Self::Array),
            _ => None,
        }
    }

    pub fn open(self) -> char {
        match self {
            Self::Object => '{',
            Self::Array => '[',
        }
    }

    pub fn close(self) -> char {
        match self {
            Self::Object => '}',
            Self::Array => ']',
        }
    }

    pub fn empty(self) -> &'static str {
        match self {
            Self::Object => "{}",
            Self::Array => "[]",
        }
    }
}

impl fmt::Display for Delimiter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Object => f.write_str("object"),
            Self::Array => f.write_str("array"),
        }
    }
}

#[derive(Error, Debug)]
pub enum Error {
    /// A field group failed to (de)serialize; the message is serde_json's own.
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error("fragment {index} starts with {found:?}, expected a JSON object or array")]
    NotComposable { index: usize, found: char },

    #[error("fragment {index} is an {found}, but earlier fragments are {expected}s")]
    DelimiterMismatch {
        index: usize,
        expected: Delimiter,
        found: Delimiter,
    },

    #[error("key {key:?} in fragment {index} is already emitted by an earlier field group")]
    DuplicateKey { index: usize, key: String },

    #[error("unknown component group: {0}")]
    UnknownComponentGroup(String),

    #[error("unknown http method: {0}")]
    UnknownHttpMethod(String),

    #[error("rendered document is not valid utf-8")]
    Utf8(#[from] std::string::FromUtf8Error),
}
