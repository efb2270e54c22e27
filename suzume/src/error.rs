/*
 * Copyright (c) 2024 Libraz Team
 *
 * Licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License.
 * You may obtain a copy of the License at
 *
 *     http://www.apache.org/licenses/LICENSE-2.0
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under the License is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 * See the License for the specific language governing permissions and
 * limitations under the License.
 */

use thiserror::Error;

use crate::dic::header::HeaderError;

pub type SuzumeResult<T> = Result<T, SuzumeError>;

/// Suzume error
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum SuzumeError {
    #[error("{context}: {cause}")]
    ErrWithContext {
        context: String,
        cause: Box<SuzumeError>,
    },

    #[error("{context}: {cause}")]
    Io {
        cause: std::io::Error,
        context: String,
    },

    #[error("Invalid UTF-8 input")]
    InvalidUtf8,

    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Parse error at line {line}: {message}")]
    ParseError { line: usize, message: String },

    #[error("Invalid header: {0}")]
    InvalidHeader(#[from] HeaderError),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl From<std::io::Error> for SuzumeError {
    fn from(e: std::io::Error) -> Self {
        SuzumeError::Io {
            cause: e,
            context: String::from("IO Error"),
        }
    }
}

impl SuzumeError {
    pub fn with_context<S: Into<String>>(self, ctx: S) -> Self {
        match self {
            SuzumeError::Io { cause, .. } => SuzumeError::Io {
                cause,
                context: ctx.into(),
            },
            cause => SuzumeError::ErrWithContext {
                cause: Box::new(cause),
                context: ctx.into(),
            },
        }
    }

    pub fn parse<S: Into<String>>(line: usize, message: S) -> Self {
        SuzumeError::ParseError {
            line,
            message: message.into(),
        }
    }
}
