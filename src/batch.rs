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

//! # Batch Loader Module
//!
//! Binds a dataset and a row encoder to a [`ZiEpochIterator`]. Each pull
//! takes one index window (the only locked step), then encodes every item of
//! the window into its slot of a freshly allocated tensor. Labels are sliced
//! with the same window, so they stay aligned with the rows under shuffling.
//!
//! With the `parallel` feature and `ZiLoaderConfig::parallel` set, the
//! per-item encode runs on the Rayon pool.

use std::sync::Arc;

use ndarray::{Array3, ArrayViewMut2, Axis};
#[cfg(feature = "parallel")]
use ndarray::Array2;
#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::codec::ZiSmilesCodec;
use crate::config::ZiLoaderConfig;
use crate::dataset::ZiMolDataset;
use crate::epoch::{ZiBatchWindow, ZiEpochIterator};
use crate::errors::Result;

/// Turns one item into one `(rows, cols)` slice of a batch tensor.
pub trait ZiRowEncoder: Send + Sync {
    /// Shape of a single encoded row.
    fn row_shape(&self) -> (usize, usize);

    /// Encodes `item` into the zeroed `row`, returning its error count.
    fn encode_row(&self, item: &str, row: ArrayViewMut2<'_, u8>) -> Result<usize>;
}

impl ZiRowEncoder for ZiSmilesCodec {
    fn row_shape(&self) -> (usize, usize) {
        (self.pad(), self.vocab_size())
    }

    fn encode_row(&self, item: &str, row: ArrayViewMut2<'_, u8>) -> Result<usize> {
        self.encode_into(item, row)
    }
}

impl<T: ZiRowEncoder + ?Sized> ZiRowEncoder for Arc<T> {
    fn row_shape(&self) -> (usize, usize) {
        (**self).row_shape()
    }

    fn encode_row(&self, item: &str, row: ArrayViewMut2<'_, u8>) -> Result<usize> {
        (**self).encode_row(item, row)
    }
}

/// One materialized batch.
#[derive(Clone, Debug, PartialEq)]
pub struct ZiBatch<L> {
    /// `(window size, pad, vocab_size)` one-hot tensor.
    pub inputs: Array3<u8>,
    /// Labels selected with the same window, when the dataset has labels.
    pub labels: Option<Vec<L>>,
    /// Dataset indices of the rows, in row order.
    pub indices: Vec<usize>,
    /// Rows whose encoding stopped early.
    pub errors: usize,
}

#[derive(Debug)]
pub struct ZiBatchLoader<E, L> {
    smiles: Vec<String>,
    labels: Option<Vec<L>>,
    encoder: E,
    windows: ZiEpochIterator,
    parallel: bool,
}

impl<E: ZiRowEncoder, L: Clone> ZiBatchLoader<E, L> {
    /// Fails when labels and strings differ in length, or when the dataset
    /// cannot fill one batch.
    pub fn new(dataset: ZiMolDataset<L>, encoder: E, config: &ZiLoaderConfig) -> Result<Self> {
        let (smiles, labels) = dataset.into_parts();
        let windows =
            ZiEpochIterator::new(smiles.len(), config.batch_size, config.shuffle, config.seed)?;
        Ok(Self {
            smiles,
            labels,
            encoder,
            windows,
            parallel: config.parallel,
        })
    }

    /// Same as [`ZiBatchLoader::new`] from separate string and label vectors.
    pub fn from_parts(
        smiles: Vec<String>,
        labels: Option<Vec<L>>,
        encoder: E,
        config: &ZiLoaderConfig,
    ) -> Result<Self> {
        Self::new(ZiMolDataset::new(smiles, labels)?, encoder, config)
    }

    pub fn encoder(&self) -> &E {
        &self.encoder
    }

    pub fn epoch(&self) -> &ZiEpochIterator {
        &self.windows
    }

    pub fn batches_per_epoch(&self) -> usize {
        self.windows.batches_per_epoch()
    }

    pub fn reset(&self) -> Result<()> {
        self.windows.reset()
    }

    /// Pulls and materializes the next batch.
    pub fn next_batch(&self) -> Result<ZiBatch<L>> {
        let window = self.windows.next_window()?;
        let (rows, cols) = self.encoder.row_shape();
        let mut inputs = Array3::<u8>::zeros((window.size, rows, cols));

        let errors = if self.parallel {
            self.encode_parallel(&window, &mut inputs)?
        } else {
            self.encode_sequential(&window, &mut inputs)?
        };

        let labels = self
            .labels
            .as_ref()
            .map(|labels| window.indices.iter().map(|&i| labels[i].clone()).collect());

        log::debug!(
            "batch at offset {} with {} rows, {} encode errors",
            window.start,
            window.size,
            errors
        );

        Ok(ZiBatch {
            inputs,
            labels,
            indices: window.indices,
            errors,
        })
    }

    fn encode_sequential(&self, window: &ZiBatchWindow, inputs: &mut Array3<u8>) -> Result<usize> {
        let mut errors = 0;
        for (slot, &index) in window.indices.iter().enumerate() {
            errors += self
                .encoder
                .encode_row(&self.smiles[index], inputs.index_axis_mut(Axis(0), slot))?;
        }
        Ok(errors)
    }

    #[cfg(feature = "parallel")]
    fn encode_parallel(&self, window: &ZiBatchWindow, inputs: &mut Array3<u8>) -> Result<usize> {
        let (rows, cols) = self.encoder.row_shape();
        let encoder = &self.encoder;
        let smiles = &self.smiles;
        let encoded = window
            .indices
            .par_iter()
            .map(|&index| -> Result<(Array2<u8>, usize)> {
                let mut row = Array2::<u8>::zeros((rows, cols));
                let errors = encoder.encode_row(&smiles[index], row.view_mut())?;
                Ok((row, errors))
            })
            .collect::<Result<Vec<_>>>()?;

        let mut errors = 0;
        for (slot, (row, row_errors)) in encoded.into_iter().enumerate() {
            inputs.index_axis_mut(Axis(0), slot).assign(&row);
            errors += row_errors;
        }
        Ok(errors)
    }

    #[cfg(not(feature = "parallel"))]
    fn encode_parallel(&self, window: &ZiBatchWindow, inputs: &mut Array3<u8>) -> Result<usize> {
        self.encode_sequential(window, inputs)
    }
}

impl<E: ZiRowEncoder, L: Clone> Iterator for ZiBatchLoader<E, L> {
    type Item = Result<ZiBatch<L>>;

    fn next(&mut self) -> Option<Self::Item> {
        Some(self.next_batch())
    }
}
