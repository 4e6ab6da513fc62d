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

//! # Enumeration Augmentation Module
//!
//! Builds training pairs by replicating a SMILES column, fitting a fresh
//! vocabulary on the replicas, and round-tripping every replica through the
//! codec (encode with enumeration, then decode). Each round trip yields a
//! different but equivalent serialization of the same molecule.
//!
//! Two outputs are supported:
//!
//! - **Plain pairing** ([`ZiEnumerationAugmenter::enumerate_pairs`]): every
//!   row is flagged as a genuine re-serialization, unless random pairing is
//!   on and the row's draw falls at or below `rand_proba`, in which case the
//!   transformed string is swapped for a random replica and flagged 0.
//! - **Hard negatives** ([`ZiEnumerationAugmenter::enumerate_hard_negatives`]):
//!   every row additionally gets a replica that differs from its original.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use serde_json::Value;

use crate::codec::ZiSmilesCodec;
use crate::config::ZiAugmentConfig;
use crate::dataset::column_strings;
use crate::errors::{Result, ZiError};
use crate::record::{ZiHardNegativeRecord, ZiPairSet, PROVENANCE_ENUMERATED, PROVENANCE_RANDOM};

#[derive(Debug)]
pub struct ZiEnumerationAugmenter {
    codec: ZiSmilesCodec,
    config: ZiAugmentConfig,
    rng: StdRng,
}

impl ZiEnumerationAugmenter {
    pub fn new(codec: ZiSmilesCodec, config: ZiAugmentConfig) -> Result<Self> {
        if config.replication_count == 0 {
            return Err(ZiError::validation("replication_count must be positive"));
        }
        if !(0.0..=1.0).contains(&config.rand_proba) {
            return Err(ZiError::validation("rand_proba must be in [0,1]"));
        }
        let rng = match config.seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_entropy(),
        };
        Ok(Self { codec, config, rng })
    }

    pub fn from_json(codec: ZiSmilesCodec, config: &Value) -> Result<Self> {
        Self::new(codec, ZiAugmentConfig::from_json(config)?)
    }

    /// The codec, carrying the vocabulary fitted by the last run.
    pub fn codec(&self) -> &ZiSmilesCodec {
        &self.codec
    }

    pub fn config(&self) -> &ZiAugmentConfig {
        &self.config
    }

    /// Repeats each element `count` times in place: `[a, b]` → `[a, a, b, b]`.
    pub fn replicate<S: AsRef<str>>(column: &[S], count: usize) -> Vec<String> {
        column
            .iter()
            .flat_map(|s| std::iter::repeat(s.as_ref().to_string()).take(count))
            .collect()
    }

    /// Plain pairing over a column of strings.
    pub fn enumerate_pairs<S: AsRef<str>>(&mut self, column: &[S]) -> Result<ZiPairSet> {
        let original = Self::replicate(column, self.config.replication_count);
        let mut transformed = self.round_trip(&original)?;
        let mut is_enumerated = vec![PROVENANCE_ENUMERATED; original.len()];

        if self.config.random_pairs {
            for idx in 0..original.len() {
                let draw: f64 = self.rng.gen();
                if (draw * 10.0).round() / 10.0 > self.config.rand_proba {
                    continue;
                }
                if let Some(pick) = original.choose(&mut self.rng) {
                    transformed[idx] = pick.clone();
                    is_enumerated[idx] = PROVENANCE_RANDOM;
                }
            }
        }

        let pairs = ZiPairSet::new(original, transformed, is_enumerated)?;
        log::info!(
            "enumerated {} rows, {} random substitutions",
            pairs.len(),
            pairs.random_count()
        );
        Ok(pairs)
    }

    /// Hard-negative pairing over a column of strings.
    ///
    /// Fails when the replicated pool holds a single distinct string, since
    /// no negative could ever differ from its original.
    pub fn enumerate_hard_negatives<S: AsRef<str>>(
        &mut self,
        column: &[S],
    ) -> Result<Vec<ZiHardNegativeRecord>> {
        let original = Self::replicate(column, self.config.replication_count);
        if let Some(first) = original.first() {
            if original.iter().all(|s| s == first) {
                return Err(ZiError::validation(
                    "hard negatives need at least two distinct strings",
                ));
            }
        }

        let transformed = self.round_trip(&original)?;

        let mut records = Vec::with_capacity(original.len());
        for (smiles, enumerated) in original.iter().zip(transformed) {
            let hard_neg = loop {
                let pick = original
                    .choose(&mut self.rng)
                    .ok_or_else(|| ZiError::internal("empty replication pool"))?;
                if pick != smiles {
                    break pick.clone();
                }
            };
            records.push(ZiHardNegativeRecord {
                original: smiles.clone(),
                transformed: enumerated,
                hard_neg,
            });
        }

        log::info!("built {} hard-negative records", records.len());
        Ok(records)
    }

    /// [`Self::enumerate_pairs`] over the named column of row objects.
    pub fn enumerate_pairs_from_rows(&mut self, rows: &[Value], column: &str) -> Result<ZiPairSet> {
        let strings = column_strings(rows, column)?;
        self.enumerate_pairs(&strings)
    }

    /// [`Self::enumerate_hard_negatives`] over the named column of row objects.
    pub fn enumerate_hard_negatives_from_rows(
        &mut self,
        rows: &[Value],
        column: &str,
    ) -> Result<Vec<ZiHardNegativeRecord>> {
        let strings = column_strings(rows, column)?;
        self.enumerate_hard_negatives(&strings)
    }

    fn round_trip(&mut self, replicated: &[String]) -> Result<Vec<String>> {
        log::debug!("round-tripping {} replicated strings", replicated.len());
        self.codec
            .fit(replicated, &self.config.extra_chars, self.config.extra_pad)?;
        let encoded = self.codec.encode(replicated)?;
        self.codec.decode(encoded.tensor.view())
    }
}
