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

//! # Zimol Configuration Module
//!
//! Serde-backed configuration for the codec, the batch loader, and the
//! enumeration augmenter. Each struct has a `Default` and a `from_json`
//! factory that starts from the defaults and overrides whatever keys the
//! object carries, rejecting values of the wrong type or range.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::errors::{Result, ZiError};

/// Characters known to the codec before any `fit` call.
pub const DEFAULT_CHARSET: &str = "@C)(=cOn1S2/H[N]\\";

/// Tensor length used before any `fit` call.
pub const DEFAULT_PAD: usize = 120;

/// Slack added on top of the longest string when fitting.
pub const DEFAULT_EXTRA_PAD: usize = 5;

/// Escape character used by stereochemical bond notation.
pub const STEREO_ESCAPE: char = '\\';

fn _config_object<'a>(config: &'a Value, name: &str) -> Result<&'a Map<String, Value>> {
    config
        .as_object()
        .ok_or_else(|| ZiError::validation(format!("{name} config must be object")))
}

fn _config_bool(obj: &Map<String, Value>, name: &str, key: &str, fallback: bool) -> Result<bool> {
    match obj.get(key) {
        None | Some(Value::Null) => Ok(fallback),
        Some(value) => value
            .as_bool()
            .ok_or_else(|| ZiError::validation(format!("{name} '{key}' must be boolean"))),
    }
}

fn _config_usize(obj: &Map<String, Value>, name: &str, key: &str, fallback: usize) -> Result<usize> {
    match obj.get(key) {
        None | Some(Value::Null) => Ok(fallback),
        Some(value) => value
            .as_u64()
            .map(|v| v as usize)
            .ok_or_else(|| ZiError::validation(format!("{name} '{key}' must be a non-negative integer"))),
    }
}

fn _config_seed(obj: &Map<String, Value>, name: &str) -> Result<Option<u64>> {
    match obj.get("seed") {
        None | Some(Value::Null) => Ok(None),
        Some(value) => value
            .as_u64()
            .map(Some)
            .ok_or_else(|| ZiError::validation(format!("{name} 'seed' must be a non-negative integer"))),
    }
}

/// Vocabulary and padding behaviour of [`crate::codec::ZiSmilesCodec`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ZiCodecConfig {
    /// Characters of the initial vocabulary, in index order.
    pub charset: String,
    /// Second dimension of every encoded tensor.
    pub pad: usize,
    /// Align strings to the right end of the row (padding on the left).
    pub leftpad: bool,
    /// Keep stereochemical detail when re-serializing.
    pub isomeric: bool,
    /// Re-serialize every string through the molecule toolkit before encoding.
    pub enumerate: bool,
    /// Ask the toolkit for the canonical form instead of a random one.
    pub canonical: bool,
}

impl Default for ZiCodecConfig {
    fn default() -> Self {
        Self {
            charset: DEFAULT_CHARSET.to_string(),
            pad: DEFAULT_PAD,
            leftpad: true,
            isomeric: true,
            enumerate: true,
            canonical: false,
        }
    }
}

impl ZiCodecConfig {
    pub fn from_json(config: &Value) -> Result<Self> {
        let name = "codec";
        let obj = _config_object(config, name)?;
        let base = Self::default();

        let charset = match obj.get("charset") {
            None | Some(Value::Null) => base.charset,
            Some(value) => value
                .as_str()
                .ok_or_else(|| ZiError::validation("codec 'charset' must be string"))?
                .to_string(),
        };

        Ok(Self {
            charset,
            pad: _config_usize(obj, name, "pad", base.pad)?,
            leftpad: _config_bool(obj, name, "leftpad", base.leftpad)?,
            isomeric: _config_bool(obj, name, "isomeric", base.isomeric)?,
            enumerate: _config_bool(obj, name, "enumerate", base.enumerate)?,
            canonical: _config_bool(obj, name, "canonical", base.canonical)?,
        })
    }
}

/// Batching behaviour of [`crate::batch::ZiBatchLoader`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ZiLoaderConfig {
    pub batch_size: usize,
    pub shuffle: bool,
    pub seed: Option<u64>,
    /// Fan per-item encoding out over Rayon. Ignored without the `parallel` feature.
    pub parallel: bool,
}

impl Default for ZiLoaderConfig {
    fn default() -> Self {
        Self {
            batch_size: 32,
            shuffle: false,
            seed: None,
            parallel: false,
        }
    }
}

impl ZiLoaderConfig {
    pub fn from_json(config: &Value) -> Result<Self> {
        let name = "loader";
        let obj = _config_object(config, name)?;
        let base = Self::default();

        let batch_size = _config_usize(obj, name, "batch_size", base.batch_size)?;
        if batch_size == 0 {
            return Err(ZiError::validation("loader 'batch_size' must be positive"));
        }

        Ok(Self {
            batch_size,
            shuffle: _config_bool(obj, name, "shuffle", base.shuffle)?,
            seed: _config_seed(obj, name)?,
            parallel: _config_bool(obj, name, "parallel", base.parallel)?,
        })
    }
}

/// Replication and pairing behaviour of [`crate::augment::ZiEnumerationAugmenter`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ZiAugmentConfig {
    /// Number of copies of each source string.
    pub replication_count: usize,
    /// Substitute unrelated strings for some transformed rows.
    pub random_pairs: bool,
    /// Threshold compared against a uniform draw rounded to one decimal.
    pub rand_proba: f64,
    /// Characters forced into the fitted vocabulary.
    pub extra_chars: Vec<char>,
    pub extra_pad: usize,
    pub seed: Option<u64>,
}

impl Default for ZiAugmentConfig {
    fn default() -> Self {
        Self {
            replication_count: 2,
            random_pairs: false,
            rand_proba: 0.0,
            extra_chars: vec![STEREO_ESCAPE],
            extra_pad: DEFAULT_EXTRA_PAD,
            seed: None,
        }
    }
}

impl ZiAugmentConfig {
    pub fn from_json(config: &Value) -> Result<Self> {
        let name = "augment";
        let obj = _config_object(config, name)?;
        let base = Self::default();

        let replication_count =
            _config_usize(obj, name, "replication_count", base.replication_count)?;
        if replication_count == 0 {
            return Err(ZiError::validation(
                "augment 'replication_count' must be positive",
            ));
        }

        let rand_proba = match obj.get("rand_proba") {
            None | Some(Value::Null) => base.rand_proba,
            Some(value) => value
                .as_f64()
                .ok_or_else(|| ZiError::validation("augment 'rand_proba' must be number"))?,
        };
        if !(0.0..=1.0).contains(&rand_proba) {
            return Err(ZiError::validation(
                "augment 'rand_proba' must be in [0,1]",
            ));
        }

        let extra_chars = match obj.get("extra_chars") {
            None | Some(Value::Null) => base.extra_chars,
            Some(Value::String(s)) => s.chars().collect(),
            Some(Value::Array(items)) => items
                .iter()
                .map(|item| {
                    item.as_str()
                        .ok_or_else(|| {
                            ZiError::validation("augment 'extra_chars' entries must be strings")
                        })
                        .map(|s| s.chars().collect::<Vec<_>>())
                })
                .collect::<Result<Vec<_>>>()?
                .into_iter()
                .flatten()
                .collect(),
            Some(_) => {
                return Err(ZiError::validation(
                    "augment 'extra_chars' must be string or array",
                ))
            }
        };

        Ok(Self {
            replication_count,
            random_pairs: _config_bool(obj, name, "random_pairs", base.random_pairs)?,
            rand_proba,
            extra_chars,
            extra_pad: _config_usize(obj, name, "extra_pad", base.extra_pad)?,
            seed: _config_seed(obj, name)?,
        })
    }
}
