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

//! # Zimol Core Library
//!
//! Prepares SMILES strings for machine learning: deterministic epoch
//! batching, character-level one-hot encoding, and enumeration-based
//! augmentation that pairs each molecule with an equivalent serialization.
//!
//! ## Module Overview
//!
//! - **epoch**: Restartable, thread-safe batch index windows over `n` items
//! - **batch**: Materializes windows into one-hot tensors and aligned labels
//! - **codec**: Vocabulary fitting, encoding, and decoding
//! - **augment**: Enumeration pairs and hard-negative mining
//! - **toolkit**: Seam to the external molecule serializer
//! - **dataset** / **record**: Input columns and augmentation output
//! - **config**: Serde-backed configuration with JSON factories
//!
//! ## Feature Flags
//!
//! - `parallel`: Per-item encoding on the Rayon pool inside batch pulls
//! - `full`: Enables all features
//!
//! ## Quick Start
//!
//! ```rust
//! use zimol::{ZiBatchLoader, ZiCodecConfig, ZiLoaderConfig, ZiSmilesCodec};
//!
//! let mut codec = ZiSmilesCodec::new(ZiCodecConfig { enumerate: false, ..Default::default() })?;
//! let smiles = vec!["CCO".to_string(), "CCN".to_string(), "c1ccccc1".to_string()];
//! codec.fit(&smiles, &['\\'], 5)?;
//!
//! let config = ZiLoaderConfig { batch_size: 2, shuffle: true, seed: Some(42), ..Default::default() };
//! let loader = ZiBatchLoader::<_, ()>::from_parts(smiles, None, codec, &config)?;
//! let batch = loader.next_batch()?;
//! assert_eq!(batch.inputs.dim().0, 2);
//! ```
//!
//! ## Error Handling
//!
//! All fallible operations return `Result<T, ZiError>`. Per-character encode
//! problems are not errors; they are counted and reported with the tensor.

pub mod errors;
pub mod config;
pub mod toolkit;
pub mod codec;
pub mod epoch;
pub mod dataset;
pub mod batch;
pub mod record;
pub mod augment;

pub use errors::{Result, ZiError};
pub use config::{ZiAugmentConfig, ZiCodecConfig, ZiLoaderConfig};
pub use toolkit::{ZiIdentitySerializer, ZiMolSerializer, ZiSerializeOptions};
pub use codec::{ZiEncoded, ZiEncodedRow, ZiSmilesCodec, ZiVocabulary};
pub use epoch::{ZiBatchWindow, ZiEpochIterator};
pub use dataset::ZiMolDataset;
pub use batch::{ZiBatch, ZiBatchLoader, ZiRowEncoder};
pub use record::{write_jsonl, ZiAugmentedRecord, ZiHardNegativeRecord, ZiPairSet};
pub use augment::ZiEnumerationAugmenter;
