use std::fmt;
use std::num::ParseIntError;
use std::path::PathBuf;
use thiserror::Error;

/// Integer-valued fields of the gate format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    GateId,
    GateTag,
    ItemQuantity,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Field::GateId => "gate id",
            Field::GateTag => "gate tag",
            Field::ItemQuantity => "item quantity",
        };
        f.write_str(name)
    }
}

/// A fatal condition hit while scanning gate text. Line numbers are 1-based.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("line {line}: malformed gate header: {content:?}")]
    MalformedHeader { line: usize, content: String },

    #[error("line {line}: invalid {field} {value:?}: {source}")]
    InvalidInteger {
        line: usize,
        field: Field,
        value: String,
        #[source]
        source: ParseIntError,
    },
}

impl ParseError {
    pub fn line(&self) -> usize {
        match self {
            ParseError::MalformedHeader { line, .. } | ParseError::InvalidInteger { line, .. } => {
                *line
            }
        }
    }
}

#[derive(Error, Debug)]
pub enum GateError {
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: ParseError,
    },

    #[error("Invalid path: {0}")]
    Path(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),
}

impl GateError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        GateError::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, GateError>;
