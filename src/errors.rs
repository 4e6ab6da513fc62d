//! Copyright © 2025-2026 Wenze Wei. All Rights Reserved.
//!
//! This file is part of Zi.
//! The Zi project belongs to the Dunimd Team.
//!
//! Licensed under the Apache License, Version 2.0 (the "License");
//! You may not use this file except in compliance with the License.
//! You may obtain a copy of the License at
//!
//!     http://www.apache.org/licenses/LICENSE-2.0
//!
//! Unless required by applicable law or agreed to in writing, software
//! distributed under the License is distributed on an "AS IS" BASIS,
//! WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
//! See the License for the specific language governing permissions and
//! limitations under the License.

//! # Zimol Error Module
//!
//! This module defines the error types shared by the epoch iterator, the
//! string codec, the batch loader, and the augmentation generator.
//!
//! ## Error Categories
//!
//! - **Validation**: Invalid construction parameters or inputs, reported
//!   before any work begins
//! - **Schema**: Shape mismatches between strings, labels, and tensors
//! - **Toolkit**: Failures of the external molecule serializer; these are
//!   surfaced per call and never counted as per-character encode errors
//! - **Io** / **Serde**: Failures while persisting augmented records
//! - **Internal**: Unexpected internal failures such as a poisoned lock
//!
//! Per-character encode errors are not represented here. They truncate a
//! single row and are only reported as a count alongside the tensor.
//!
//! ## Usage
//!
//! ```rust
//! use zimol::errors::{Result, ZiError};
//!
//! fn check(n: usize, batch_size: usize) -> Result<()> {
//!     if n < batch_size {
//!         return Err(ZiError::validation("dataset is shorter than batch_size"));
//!     }
//!     Ok(())
//! }
//! ```

use std::io;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Convenience result type used throughout Zimol.
pub type Result<T> = std::result::Result<T, ZiError>;

/// Canonical error enumeration for Zimol.
#[derive(Debug, Error, Serialize, Deserialize)]
pub enum ZiError {
    /// Errors originating from filesystem or stream IO.
    #[error("io error: {0}")]
    Io(String),

    /// Length or shape mismatch between aligned inputs.
    #[error("schema error: {message}")]
    Schema { message: String },

    /// Validation errors triggered by invalid parameters or inputs.
    #[error("validation error: {message}")]
    Validation { message: String },

    /// The molecule serializer could not re-serialize an input string.
    #[error("toolkit failed on '{input}': {message}")]
    Toolkit { input: String, message: String },

    /// Wrapper for serde-style serialization issues.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Catch-all variant for unexpected situations.
    #[error("internal error: {0}")]
    Internal(String),
}

impl From<io::Error> for ZiError {
    fn from(err: io::Error) -> Self {
        ZiError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for ZiError {
    fn from(err: serde_json::Error) -> Self {
        ZiError::Serde(err.to_string())
    }
}

impl ZiError {
    /// Helper to construct simple validation errors.
    pub fn validation<T: Into<String>>(message: T) -> Self {
        ZiError::Validation {
            message: message.into(),
        }
    }

    /// Helper to construct schema errors.
    pub fn schema<T: Into<String>>(message: T) -> Self {
        ZiError::Schema {
            message: message.into(),
        }
    }

    /// Helper to construct toolkit errors for a given input string.
    pub fn toolkit(input: impl Into<String>, message: impl Into<String>) -> Self {
        ZiError::Toolkit {
            input: input.into(),
            message: message.into(),
        }
    }

    /// Helper to construct internal errors.
    pub fn internal<T: Into<String>>(message: T) -> Self {
        ZiError::Internal(message.into())
    }
}
