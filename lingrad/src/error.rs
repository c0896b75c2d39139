// Copyright 2024 the Lingrad Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The common error type for lingrad operations.

use std::fmt;

/// An error that can occur while building inputs or rendering a gradient.
///
/// The geometry itself never fails: inconsistent inputs suppress the plan
/// instead. Errors only come from constructing typed inputs out of loosely
/// typed host values, and from render contexts.
#[derive(Debug)]
#[non_exhaustive]
pub enum Error {
    /// A value handed in by the host does not have the expected shape.
    InvalidInput,
    /// The render context does not support the requested operation.
    NotSupported,
    /// `restore` was called without a matching `save`.
    StackUnbalance,
    /// An error reported by the backend of a render context.
    BackendError(Box<dyn std::error::Error>),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::InvalidInput => write!(f, "Invalid input"),
            Error::NotSupported => write!(f, "Option not supported"),
            Error::StackUnbalance => write!(f, "Stack unbalanced"),
            Error::BackendError(e) => {
                write!(f, "Backend error: ")?;
                fmt::Display::fmt(e, f)
            }
        }
    }
}

impl std::error::Error for Error {}

impl From<Box<dyn std::error::Error>> for Error {
    fn from(e: Box<dyn std::error::Error>) -> Error {
        Error::BackendError(e)
    }
}
