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

//! # Molecule Toolkit Seam
//!
//! Zimol never parses molecules itself. Re-serializing a SMILES string into
//! an equivalent form (random atom order, canonical form, with or without
//! stereochemistry) is delegated to an external chemistry toolkit through
//! the [`ZiMolSerializer`] trait.
//!
//! A toolkit failure is returned as [`crate::errors::ZiError::Toolkit`] and propagates out
//! of `encode`. It is never counted as a per-character encode error.

use crate::config::ZiCodecConfig;
use crate::errors::Result;

/// Options forwarded to the toolkit on every call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ZiSerializeOptions {
    /// Return the canonical serialization. Overrides randomization.
    pub canonical: bool,
    /// Keep stereochemical detail.
    pub isomeric: bool,
}

impl From<&ZiCodecConfig> for ZiSerializeOptions {
    fn from(config: &ZiCodecConfig) -> Self {
        Self {
            canonical: config.canonical,
            isomeric: config.isomeric,
        }
    }
}

/// Produces an equivalent serialization of the same molecule.
///
/// Implementations must be safe to call from several threads at once; any
/// randomness they need is their own business.
pub trait ZiMolSerializer: Send + Sync {
    fn reserialize(&self, smiles: &str, options: &ZiSerializeOptions) -> Result<String>;
}

impl<F> ZiMolSerializer for F
where
    F: Fn(&str, &ZiSerializeOptions) -> Result<String> + Send + Sync,
{
    fn reserialize(&self, smiles: &str, options: &ZiSerializeOptions) -> Result<String> {
        self(smiles, options)
    }
}

/// Returns every input unchanged. Used when no toolkit is bound.
#[derive(Clone, Copy, Debug, Default)]
pub struct ZiIdentitySerializer;

impl ZiMolSerializer for ZiIdentitySerializer {
    fn reserialize(&self, smiles: &str, _options: &ZiSerializeOptions) -> Result<String> {
        Ok(smiles.to_string())
    }
}
