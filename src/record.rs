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

//! # Zimol Record Module
//!
//! Output records of an augmentation run. Records derive `Serialize` and
//! `Deserialize` so callers can persist them in whatever format they use;
//! [`write_jsonl`] covers the common case of one JSON object per line.
//!
//! ## Usage Example
//!
//! ```rust
//! use zimol::record::{write_jsonl, ZiHardNegativeRecord};
//!
//! let rows = vec![ZiHardNegativeRecord {
//!     original: "CCO".into(),
//!     transformed: "OCC".into(),
//!     hard_neg: "CCN".into(),
//! }];
//! let mut out = Vec::new();
//! write_jsonl(&rows, &mut out)?;
//! // {"sent1":"CCO","sent0":"OCC","hard_neg":"CCN"}
//! ```

use std::io::Write;

use serde::{Deserialize, Serialize};

use crate::errors::{Result, ZiError};

/// Marks a transformed string that re-serializes its original.
pub const PROVENANCE_ENUMERATED: u8 = 1;

/// Marks a transformed string substituted from an unrelated row.
pub const PROVENANCE_RANDOM: u8 = 0;

/// One `(original, transformed, provenance)` row.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZiAugmentedRecord {
    pub original: String,
    pub transformed: String,
    pub is_enumerated: u8,
}

/// Column-aligned output of plain enumeration pairing.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZiPairSet {
    pub original: Vec<String>,
    pub transformed: Vec<String>,
    pub is_enumerated: Vec<u8>,
}

impl ZiPairSet {
    /// Builds a pair set, checking that all three columns line up.
    pub fn new(original: Vec<String>, transformed: Vec<String>, is_enumerated: Vec<u8>) -> Result<Self> {
        if original.len() != transformed.len() || original.len() != is_enumerated.len() {
            return Err(ZiError::schema(format!(
                "augmented columns differ in length: {} originals, {} transformed, {} flags",
                original.len(),
                transformed.len(),
                is_enumerated.len()
            )));
        }
        Ok(Self {
            original,
            transformed,
            is_enumerated,
        })
    }

    pub fn len(&self) -> usize {
        self.original.len()
    }

    pub fn is_empty(&self) -> bool {
        self.original.is_empty()
    }

    /// Number of rows substituted with an unrelated string.
    pub fn random_count(&self) -> usize {
        self.is_enumerated
            .iter()
            .filter(|&&flag| flag == PROVENANCE_RANDOM)
            .count()
    }

    pub fn records(&self) -> Vec<ZiAugmentedRecord> {
        self.original
            .iter()
            .zip(&self.transformed)
            .zip(&self.is_enumerated)
            .map(|((original, transformed), &flag)| ZiAugmentedRecord {
                original: original.clone(),
                transformed: transformed.clone(),
                is_enumerated: flag,
            })
            .collect()
    }
}

/// One row of hard-negative output, keyed the way contrastive trainers
/// expect: `sent1` original, `sent0` transformed, `hard_neg` negative.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZiHardNegativeRecord {
    #[serde(rename = "sent1")]
    pub original: String,
    #[serde(rename = "sent0")]
    pub transformed: String,
    pub hard_neg: String,
}

/// Writes one JSON object per line and returns the number of lines.
pub fn write_jsonl<T: Serialize, W: Write>(records: &[T], mut writer: W) -> Result<usize> {
    for record in records {
        serde_json::to_writer(&mut writer, record)?;
        writer.write_all(b"\n")?;
    }
    writer.flush()?;
    Ok(records.len())
}
