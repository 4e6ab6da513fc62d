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

use std::collections::{BTreeSet, HashMap};

use crate::errors::{Result, ZiError};

/// Bijective character ↔ index mapping.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ZiVocabulary {
    chars: Vec<char>,
    index: HashMap<char, usize>,
}

impl ZiVocabulary {
    /// Builds a vocabulary from an explicit charset, keeping its order.
    pub fn from_charset(charset: &str) -> Result<Self> {
        let chars: Vec<char> = charset.chars().collect();
        let mut index = HashMap::with_capacity(chars.len());
        for (i, ch) in chars.iter().enumerate() {
            if index.insert(*ch, i).is_some() {
                return Err(ZiError::validation(format!(
                    "charset contains '{ch}' more than once"
                )));
            }
        }
        Ok(Self { chars, index })
    }

    /// Collects every character of `strings` plus `extra_chars`.
    ///
    /// Characters are sorted so the same inputs always give the same indices.
    pub fn from_strings<S: AsRef<str>>(strings: &[S], extra_chars: &[char]) -> Self {
        let set: BTreeSet<char> = strings
            .iter()
            .flat_map(|s| s.as_ref().chars())
            .chain(extra_chars.iter().copied())
            .collect();
        let chars: Vec<char> = set.into_iter().collect();
        let index = chars.iter().enumerate().map(|(i, &c)| (c, i)).collect();
        Self { chars, index }
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn index_of(&self, ch: char) -> Option<usize> {
        self.index.get(&ch).copied()
    }

    pub fn char_at(&self, index: usize) -> Option<char> {
        self.chars.get(index).copied()
    }

    pub fn contains(&self, ch: char) -> bool {
        self.index.contains_key(&ch)
    }

    /// Characters in index order.
    pub fn charset(&self) -> String {
        self.chars.iter().collect()
    }
}
