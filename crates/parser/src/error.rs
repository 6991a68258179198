// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use std::path::PathBuf;

use mklite_core::CircularIncludeError;
use mklite_expand::ExpandError;
use thiserror::Error;

/// Errors raised while turning makefile text into a [`mklite_core::Makefile`].
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("{}:{line}: {source}", file.display())]
    Io {
        file: PathBuf,
        line: usize,
        #[source]
        source: std::io::Error,
    },
    #[error("{}:{line}: ambiguous line continuation in comment", file.display())]
    AmbiguousCommentContinuation { file: PathBuf, line: usize },
    #[error("{0}")]
    CircularInclude(#[from] CircularIncludeError),
    #[error("{}:{line}: unexpected indented line, must follow a rule definition", file.display())]
    UnexpectedIndent { file: PathBuf, line: usize },
    #[error("{}:{line}: a second unescaped `:` appears in a rule header", file.display())]
    MultipleColonsInHeader { file: PathBuf, line: usize },
    #[error("{}:{line}: rule header has no targets", file.display())]
    EmptyTargets { file: PathBuf, line: usize },
    #[error("{}:{line}: not a rule, assignment, or directive", file.display())]
    Unrecognized { file: PathBuf, line: usize },
    #[error("{}:{line}: {source}", file.display())]
    Expand {
        file: PathBuf,
        line: usize,
        #[source]
        source: ExpandError,
    },
}

impl ParseError {
    pub fn location(&self) -> Option<(&PathBuf, usize)> {
        match self {
            ParseError::Io { file, line, .. }
            | ParseError::AmbiguousCommentContinuation { file, line }
            | ParseError::UnexpectedIndent { file, line }
            | ParseError::MultipleColonsInHeader { file, line }
            | ParseError::EmptyTargets { file, line }
            | ParseError::Unrecognized { file, line }
            | ParseError::Expand { file, line, .. } => Some((file, *line)),
            ParseError::CircularInclude(_) => None,
        }
    }
}
