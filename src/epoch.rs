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

//! # Epoch Iterator Module
//!
//! A restartable, never-ending source of batch index windows over `n` items.
//!
//! Each pull returns the next slice of the current index permutation. When
//! the slice reaches the end of the permutation the cursor wraps to zero and
//! the following pull starts a new epoch, recomputing the permutation
//! (identity, or a random shuffle when `shuffle` is on).
//!
//! ## Seeding
//!
//! With a seed, the iterator's RNG is reseeded from `seed + total_batches_seen`
//! before every pull, not once per epoch. Replaying the same number of pulls
//! on a fresh iterator therefore reproduces the same windows, even
//! mid-epoch. Downstream reproducibility relies on this exact reseed rule.
//!
//! ## Thread Safety
//!
//! Only window selection (cursor advance, pull counter, permutation refresh)
//! runs under the internal mutex. Callers sharing one iterator through an
//! `Arc` see a strictly increasing pull count.

use std::sync::{Mutex, MutexGuard};

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

use crate::errors::{Result, ZiError};

/// One slice of an epoch: the item indices, the offset of the slice within
/// the permutation, and its length.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZiBatchWindow {
    pub indices: Vec<usize>,
    pub start: usize,
    pub size: usize,
}

#[derive(Debug)]
struct ZiEpochState {
    batch_index: usize,
    total_batches_seen: u64,
    permutation: Vec<usize>,
    rng: StdRng,
}

#[derive(Debug)]
pub struct ZiEpochIterator {
    n: usize,
    batch_size: usize,
    shuffle: bool,
    seed: Option<u64>,
    state: Mutex<ZiEpochState>,
}

impl ZiEpochIterator {
    pub fn new(n: usize, batch_size: usize, shuffle: bool, seed: Option<u64>) -> Result<Self> {
        if batch_size == 0 {
            return Err(ZiError::validation("batch_size must be positive"));
        }
        if n < batch_size {
            return Err(ZiError::validation(format!(
                "input data length {n} is shorter than batch_size {batch_size}"
            )));
        }

        let rng = match seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_entropy(),
        };

        Ok(Self {
            n,
            batch_size,
            shuffle,
            seed,
            state: Mutex::new(ZiEpochState {
                batch_index: 0,
                total_batches_seen: 0,
                permutation: (0..n).collect(),
                rng,
            }),
        })
    }

    pub fn len(&self) -> usize {
        self.n
    }

    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    pub fn batch_size(&self) -> usize {
        self.batch_size
    }

    /// Number of pulls that make up one epoch.
    pub fn batches_per_epoch(&self) -> usize {
        self.n.div_ceil(self.batch_size)
    }

    pub fn total_batches_seen(&self) -> Result<u64> {
        Ok(self.lock()?.total_batches_seen)
    }

    /// Moves the cursor back to the start of an epoch. The pull counter is
    /// kept, so seeded windows continue from where they were.
    pub fn reset(&self) -> Result<()> {
        self.lock()?.batch_index = 0;
        Ok(())
    }

    /// Selects the next window.
    pub fn next_window(&self) -> Result<ZiBatchWindow> {
        let mut state = self.lock()?;
        let state = &mut *state;

        if let Some(seed) = self.seed {
            state.rng = StdRng::seed_from_u64(seed.wrapping_add(state.total_batches_seen));
        }

        if state.batch_index == 0 {
            state.permutation = (0..self.n).collect();
            if self.shuffle {
                state.permutation.shuffle(&mut state.rng);
            }
        }

        let start = (state.batch_index * self.batch_size) % self.n;
        let size = if self.n > start + self.batch_size {
            state.batch_index += 1;
            self.batch_size
        } else {
            state.batch_index = 0;
            self.n - start
        };
        state.total_batches_seen += 1;

        Ok(ZiBatchWindow {
            indices: state.permutation[start..start + size].to_vec(),
            start,
            size,
        })
    }

    fn lock(&self) -> Result<MutexGuard<'_, ZiEpochState>> {
        self.state
            .lock()
            .map_err(|_| ZiError::internal("epoch iterator lock poisoned"))
    }
}
