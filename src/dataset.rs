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

use serde_json::Value;

use crate::errors::{Result, ZiError};

/// Ordered SMILES strings with an optional parallel label column.
#[derive(Clone, Debug, PartialEq)]
pub struct ZiMolDataset<L = Value> {
    smiles: Vec<String>,
    labels: Option<Vec<L>>,
}

impl<L> ZiMolDataset<L> {
    /// Fails when labels are given and their length differs from the strings.
    pub fn new(smiles: Vec<String>, labels: Option<Vec<L>>) -> Result<Self> {
        if let Some(labels) = &labels {
            if labels.len() != smiles.len() {
                return Err(ZiError::schema(format!(
                    "strings and labels should have the same length, found {} strings and {} labels",
                    smiles.len(),
                    labels.len()
                )));
            }
        }
        Ok(Self { smiles, labels })
    }

    pub fn len(&self) -> usize {
        self.smiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.smiles.is_empty()
    }

    pub fn smiles(&self) -> &[String] {
        &self.smiles
    }

    pub fn labels(&self) -> Option<&[L]> {
        self.labels.as_deref()
    }

    pub fn into_parts(self) -> (Vec<String>, Option<Vec<L>>) {
        (self.smiles, self.labels)
    }
}

impl ZiMolDataset<Value> {
    /// Reads the `smiles_col` string of every row object, and `label_col`
    /// when given.
    pub fn from_rows(rows: &[Value], smiles_col: &str, label_col: Option<&str>) -> Result<Self> {
        let smiles = column_strings(rows, smiles_col)?;
        let labels = match label_col {
            Some(col) => Some(
                rows.iter()
                    .enumerate()
                    .map(|(i, row)| {
                        row.get(col).cloned().ok_or_else(|| {
                            ZiError::schema(format!("row {i} has no column '{col}'"))
                        })
                    })
                    .collect::<Result<Vec<_>>>()?,
            ),
            None => None,
        };
        Self::new(smiles, labels)
    }
}

/// Extracts one string column from row objects.
pub fn column_strings(rows: &[Value], column: &str) -> Result<Vec<String>> {
    rows.iter()
        .enumerate()
        .map(|(i, row)| {
            row.get(column)
                .and_then(Value::as_str)
                .map(str::to_string)
                .ok_or_else(|| {
                    ZiError::schema(format!("row {i} has no string column '{column}'"))
                })
        })
        .collect()
}
