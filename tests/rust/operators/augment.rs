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

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use serde_json::json;
use zimol::record::write_jsonl;
use zimol::{
    Result, ZiAugmentConfig, ZiCodecConfig, ZiEnumerationAugmenter, ZiError, ZiSerializeOptions,
    ZiSmilesCodec,
};

/// Rotates the string by a growing offset, standing in for a randomizing toolkit.
fn rotating_codec() -> ZiSmilesCodec {
    let calls = Arc::new(AtomicUsize::new(0));
    ZiSmilesCodec::new(ZiCodecConfig::default())
        .unwrap()
        .with_serializer(move |smiles: &str, _: &ZiSerializeOptions| -> Result<String> {
            let chars: Vec<char> = smiles.chars().collect();
            if chars.is_empty() {
                return Ok(String::new());
            }
            let k = calls.fetch_add(1, Ordering::SeqCst) % chars.len();
            Ok(chars[k..].iter().chain(&chars[..k]).collect())
        })
}

#[test]
fn augment_pairs_round_trip_through_toolkit() {
    let mut aug = ZiEnumerationAugmenter::new(rotating_codec(), ZiAugmentConfig::default()).unwrap();
    let pairs = aug.enumerate_pairs(&["CCO", "NCC"]).unwrap();
    assert_eq!(pairs.original, vec!["CCO", "CCO", "NCC", "NCC"]);
    assert_eq!(pairs.transformed, vec!["CCO", "COC", "CNC", "NCC"]);
    assert!(pairs.is_enumerated.iter().all(|&f| f == 1));
    assert_eq!(aug.codec().pad(), 3 + 5);
}

#[test]
fn augment_zero_probability_keeps_most_pairs() {
    let config = ZiAugmentConfig {
        random_pairs: true,
        rand_proba: 0.0,
        seed: Some(1),
        ..Default::default()
    };
    let mut aug = ZiEnumerationAugmenter::new(rotating_codec(), config).unwrap();
    let column: Vec<String> = (0..50).map(|i| format!("C{}", "C".repeat(i % 7))).collect();
    let pairs = aug.enumerate_pairs(&column).unwrap();
    // Only draws that round to 0.0 are substituted.
    assert!(pairs.random_count() < pairs.len() / 4);
    for record in pairs.records() {
        if record.is_enumerated == 0 {
            assert!(pairs.original.contains(&record.transformed));
        }
    }
}

#[test]
fn augment_seeded_runs_repeat() {
    let config = ZiAugmentConfig {
        random_pairs: true,
        rand_proba: 0.5,
        seed: Some(77),
        ..Default::default()
    };
    let column = ["CCO", "CCN", "CCC", "OCO"];
    let mut a = ZiEnumerationAugmenter::new(rotating_codec(), config.clone()).unwrap();
    let mut b = ZiEnumerationAugmenter::new(rotating_codec(), config).unwrap();
    assert_eq!(a.enumerate_pairs(&column).unwrap(), b.enumerate_pairs(&column).unwrap());
}

#[test]
fn augment_hard_negatives_from_rows() {
    let rows = vec![
        json!({"smiles": "CCO", "id": 1}),
        json!({"smiles": "CCN", "id": 2}),
        json!({"smiles": "c1ccccc1", "id": 3}),
    ];
    let config = ZiAugmentConfig::from_json(&json!({"replication_count": 3, "seed": 4})).unwrap();
    let mut aug = ZiEnumerationAugmenter::new(rotating_codec(), config).unwrap();
    let records = aug.enumerate_hard_negatives_from_rows(&rows, "smiles").unwrap();

    assert_eq!(records.len(), 9);
    for record in &records {
        assert_ne!(record.hard_neg, record.original);
        let mut a: Vec<char> = record.original.chars().collect();
        let mut b: Vec<char> = record.transformed.chars().collect();
        a.sort_unstable();
        b.sort_unstable();
        assert_eq!(a, b);
    }

    let mut out = Vec::new();
    write_jsonl(&records, &mut out).unwrap();
    let first: serde_json::Value =
        serde_json::from_str(String::from_utf8(out).unwrap().lines().next().unwrap()).unwrap();
    assert_eq!(first["sent1"], json!("CCO"));
    assert!(first.get("sent0").is_some());
    assert!(first.get("hard_neg").is_some());
}

#[test]
fn augment_missing_column_is_schema_error() {
    let rows = vec![json!({"smiles": "CCO"})];
    let mut aug = ZiEnumerationAugmenter::new(rotating_codec(), ZiAugmentConfig::default()).unwrap();
    assert!(matches!(
        aug.enumerate_pairs_from_rows(&rows, "canonical_smiles"),
        Err(ZiError::Schema { .. })
    ));
}

#[test]
fn augment_toolkit_failure_propagates() {
    let codec = ZiSmilesCodec::new(ZiCodecConfig::default()).unwrap().with_serializer(
        |smiles: &str, _: &ZiSerializeOptions| -> Result<String> {
            Err(ZiError::toolkit(smiles, "sanitization failed"))
        },
    );
    let mut aug = ZiEnumerationAugmenter::new(codec, ZiAugmentConfig::default()).unwrap();
    assert!(matches!(
        aug.enumerate_pairs(&["CCO"]),
        Err(ZiError::Toolkit { .. })
    ));
}
