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

//! # String Codec Module
//!
//! Character-level one-hot encoding of SMILES strings.
//!
//! ## Module Components
//!
//! - **Vocabulary** ([vocab.rs](vocab/index.html)): Bijective character ↔ index
//!   mapping, built from an explicit charset or fitted on a dataset
//! - **SMILES codec** ([smiles.rs](smiles/index.html)): `fit`, `encode`, and
//!   `decode` over a `(rows, pad, vocab_size)` tensor
//!
//! ## Padding
//!
//! With left padding a string of length `l` occupies columns `pad - l ..
//! pad`; with right padding it occupies `0 .. l`. Decoding drops all-zero
//! positions, so a tensor must be decoded by a codec with the same padding
//! side it was encoded with.
//!
//! ## Usage
//!
//! ```rust
//! use zimol::codec::ZiSmilesCodec;
//! use zimol::config::ZiCodecConfig;
//!
//! let mut codec = ZiSmilesCodec::new(ZiCodecConfig { enumerate: false, ..Default::default() })?;
//! codec.fit(&["CCO", "CCN"], &['\\'], 2)?;
//! let encoded = codec.encode(&["CCO"])?;
//! let decoded = codec.decode(encoded.tensor.view())?;
//! assert_eq!(decoded, vec!["CCO"]);
//! ```

pub mod smiles;
pub mod vocab;

pub use smiles::{ZiEncoded, ZiEncodedRow, ZiSmilesCodec};
pub use vocab::ZiVocabulary;
