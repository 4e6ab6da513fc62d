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

use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

use ndarray::{Array2, Array3, ArrayView2, ArrayView3, ArrayViewMut2, Axis};
use serde_json::Value;

use crate::codec::vocab::ZiVocabulary;
use crate::config::ZiCodecConfig;
use crate::errors::{Result, ZiError};
use crate::toolkit::{ZiIdentitySerializer, ZiMolSerializer, ZiSerializeOptions};

/// One-hot tensor of shape `(rows, pad, vocab_size)` plus the number of rows
/// whose encoding stopped early.
#[derive(Clone, Debug, PartialEq)]
pub struct ZiEncoded {
    pub tensor: Array3<u8>,
    pub errors: usize,
}

/// Single encoded row of shape `(pad, vocab_size)`.
#[derive(Clone, Debug, PartialEq)]
pub struct ZiEncodedRow {
    pub row: Array2<u8>,
    pub errors: usize,
}

/// Character-level SMILES vectorizer.
///
/// Holds the vocabulary, the pad length, and the padding side. With
/// `enumerate` enabled every string is first re-serialized through the bound
/// [`ZiMolSerializer`].
pub struct ZiSmilesCodec {
    vocab: ZiVocabulary,
    pad: usize,
    leftpad: bool,
    enumerate: bool,
    options: ZiSerializeOptions,
    serializer: Arc<dyn ZiMolSerializer>,
}

impl fmt::Debug for ZiSmilesCodec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ZiSmilesCodec")
            .field("charset", &self.vocab.charset())
            .field("pad", &self.pad)
            .field("leftpad", &self.leftpad)
            .field("enumerate", &self.enumerate)
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}

impl ZiSmilesCodec {
    pub fn new(config: ZiCodecConfig) -> Result<Self> {
        let vocab = ZiVocabulary::from_charset(&config.charset)?;
        Ok(Self {
            vocab,
            pad: config.pad,
            leftpad: config.leftpad,
            enumerate: config.enumerate,
            options: ZiSerializeOptions::from(&config),
            serializer: Arc::new(ZiIdentitySerializer),
        })
    }

    pub fn from_json(config: &Value) -> Result<Self> {
        Self::new(ZiCodecConfig::from_json(config)?)
    }

    /// Binds the toolkit used when `enumerate` is on.
    pub fn with_serializer<S: ZiMolSerializer + 'static>(mut self, serializer: S) -> Self {
        self.serializer = Arc::new(serializer);
        self
    }

    pub fn set_enumerate(&mut self, enumerate: bool) {
        self.enumerate = enumerate;
    }

    pub fn set_leftpad(&mut self, leftpad: bool) {
        self.leftpad = leftpad;
    }

    pub fn vocabulary(&self) -> &ZiVocabulary {
        &self.vocab
    }

    pub fn charset(&self) -> String {
        self.vocab.charset()
    }

    pub fn pad(&self) -> usize {
        self.pad
    }

    pub fn vocab_size(&self) -> usize {
        self.vocab.len()
    }

    pub fn leftpad(&self) -> bool {
        self.leftpad
    }

    pub fn enumerates(&self) -> bool {
        self.enumerate
    }

    /// Replaces the vocabulary with the characters of `strings` plus
    /// `extra_chars`, and sets `pad` to the longest string plus `extra_pad`.
    pub fn fit<S: AsRef<str>>(
        &mut self,
        strings: &[S],
        extra_chars: &[char],
        extra_pad: usize,
    ) -> Result<()> {
        let longest = strings
            .iter()
            .map(|s| s.as_ref().chars().count())
            .max()
            .ok_or_else(|| ZiError::validation("fit requires at least one string"))?;

        self.vocab = ZiVocabulary::from_strings(strings, extra_chars);
        self.pad = longest + extra_pad;
        log::debug!(
            "fitted vocabulary of {} chars, pad {}",
            self.vocab.len(),
            self.pad
        );
        Ok(())
    }

    /// Encodes every string into a fresh `(n, pad, vocab_size)` tensor.
    ///
    /// A character missing from the vocabulary, or a position beyond `pad`,
    /// stops that row where it is and counts one error. Toolkit failures are
    /// returned as errors.
    pub fn encode<S: AsRef<str>>(&self, strings: &[S]) -> Result<ZiEncoded> {
        let mut tensor = Array3::<u8>::zeros((strings.len(), self.pad, self.vocab.len()));
        let mut errors = 0;
        for (i, smiles) in strings.iter().enumerate() {
            errors += self.encode_into(smiles.as_ref(), tensor.index_axis_mut(Axis(0), i))?;
        }
        log::info!("errors: {}", errors);
        Ok(ZiEncoded { tensor, errors })
    }

    /// Encodes a single string into a `(pad, vocab_size)` row.
    pub fn encode_one(&self, smiles: &str) -> Result<ZiEncodedRow> {
        let mut row = Array2::<u8>::zeros((self.pad, self.vocab.len()));
        let errors = self.encode_into(smiles, row.view_mut())?;
        Ok(ZiEncodedRow { row, errors })
    }

    /// Writes the one-hot encoding of `smiles` into `row`, which must be
    /// zeroed and shaped `(pad, vocab_size)`. Returns 1 if the row was cut
    /// short, else 0.
    pub fn encode_into(&self, smiles: &str, mut row: ArrayViewMut2<'_, u8>) -> Result<usize> {
        if row.dim() != (self.pad, self.vocab.len()) {
            return Err(ZiError::schema(format!(
                "row shape {:?} does not match ({}, {})",
                row.dim(),
                self.pad,
                self.vocab.len()
            )));
        }

        let smiles: Cow<'_, str> = if self.enumerate {
            Cow::Owned(self.serializer.reserialize(smiles, &self.options)?)
        } else {
            Cow::Borrowed(smiles)
        };

        let length = smiles.chars().count() as isize;
        let offset = if self.leftpad {
            self.pad as isize - length
        } else {
            0
        };

        for (j, ch) in smiles.chars().enumerate() {
            let column = j as isize + offset;
            if column < 0 || column >= self.pad as isize {
                return Ok(1);
            }
            match self.vocab.index_of(ch) {
                Some(index) => row[[column as usize, index]] = 1,
                None => return Ok(1),
            }
        }
        Ok(0)
    }

    /// Turns a tensor back into strings. Positions whose indicators do not
    /// sum to exactly one are skipped.
    pub fn decode(&self, tensor: ArrayView3<'_, u8>) -> Result<Vec<String>> {
        let (_, _, width) = tensor.dim();
        if width != self.vocab.len() {
            return Err(ZiError::schema(format!(
                "tensor vocabulary axis is {width}, codec has {}",
                self.vocab.len()
            )));
        }
        tensor
            .outer_iter()
            .map(|row| self.decode_row(row))
            .collect()
    }

    pub fn decode_row(&self, row: ArrayView2<'_, u8>) -> Result<String> {
        let mut out = String::with_capacity(row.nrows());
        for position in row.outer_iter() {
            let total: usize = position.iter().map(|&v| v as usize).sum();
            if total != 1 {
                continue;
            }
            let index = position
                .iter()
                .position(|&v| v == 1)
                .ok_or_else(|| ZiError::internal("one-hot position without a set entry"))?;
            let ch = self
                .vocab
                .char_at(index)
                .ok_or_else(|| ZiError::schema(format!("index {index} outside vocabulary")))?;
            out.push(ch);
        }
        Ok(out)
    }
}
