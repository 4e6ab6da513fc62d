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

use proptest::prelude::*;
use zimol::{Result, ZiCodecConfig, ZiError, ZiSerializeOptions, ZiSmilesCodec};

fn codec(charset: &str, pad: usize, leftpad: bool) -> ZiSmilesCodec {
    ZiSmilesCodec::new(ZiCodecConfig {
        charset: charset.to_string(),
        pad,
        leftpad,
        enumerate: false,
        ..Default::default()
    })
    .unwrap()
}

#[test]
fn codec_left_pad_scenario() {
    let codec = codec("ABC", 5, true);
    let encoded = codec.encode(&["ABC"]).unwrap();
    let tensor = &encoded.tensor;
    assert_eq!(tensor.dim(), (1, 5, 3));
    for position in 0..2 {
        assert_eq!((0..3).map(|c| tensor[[0, position, c]]).sum::<u8>(), 0);
    }
    for (position, expected) in [(2, 0), (3, 1), (4, 2)] {
        for c in 0..3 {
            let want = u8::from(c == expected);
            assert_eq!(tensor[[0, position, c]], want);
        }
    }
}

#[test]
fn codec_fit_scenario() {
    let mut codec = codec("ABC", 120, true);
    codec.fit(&["CCO", "CCN"], &['\\'], 2).unwrap();
    let mut chars: Vec<char> = codec.charset().chars().collect();
    chars.sort_unstable();
    let mut expected = vec!['C', 'O', 'N', '\\'];
    expected.sort_unstable();
    assert_eq!(chars, expected);
    assert_eq!(codec.pad(), 5);
}

#[test]
fn codec_fit_is_deterministic() {
    let mut a = codec("A", 1, true);
    let mut b = codec("B", 1, true);
    a.fit(&["c1ccccc1O", "CC(=O)N"], &[], 5).unwrap();
    b.fit(&["CC(=O)N", "c1ccccc1O"], &[], 5).unwrap();
    assert_eq!(a.charset(), b.charset());
}

#[test]
fn codec_decode_skips_padding_on_either_side() {
    let left = codec("CO", 6, true);
    let right = codec("CO", 6, false);
    let from_left = left.encode(&["OC"]).unwrap();
    let from_right = right.encode(&["OC"]).unwrap();
    assert_ne!(from_left.tensor, from_right.tensor);
    assert_eq!(left.decode(from_right.tensor.view()).unwrap(), vec!["OC"]);
    assert_eq!(right.decode(from_left.tensor.view()).unwrap(), vec!["OC"]);
}

#[test]
fn codec_partial_rows_keep_written_positions() {
    let codec = codec("CN", 6, true);
    let encoded = codec.encode(&["CNxC"]).unwrap();
    assert_eq!(encoded.errors, 1);
    // Left padding starts at column 2: C and N are written, then x stops the row.
    assert_eq!(encoded.tensor[[0, 2, 0]], 1);
    assert_eq!(encoded.tensor[[0, 3, 1]], 1);
    assert_eq!(encoded.tensor.sum(), 2);
    assert_eq!(codec.decode(encoded.tensor.view()).unwrap(), vec!["CN"]);
}

#[test]
fn codec_toolkit_errors_propagate() {
    let mut codec = codec("C", 4, true).with_serializer(
        |smiles: &str, _: &ZiSerializeOptions| -> Result<String> {
            Err(ZiError::toolkit(smiles, "not a molecule"))
        },
    );
    codec.set_enumerate(true);
    match codec.encode(&["C(C"]) {
        Err(ZiError::Toolkit { input, .. }) => assert_eq!(input, "C(C"),
        other => panic!("unexpected result: {other:?}"),
    }
}

#[test]
fn codec_options_reach_toolkit() {
    let mut codec = ZiSmilesCodec::new(ZiCodecConfig {
        charset: "CO".to_string(),
        pad: 4,
        canonical: true,
        isomeric: false,
        ..Default::default()
    })
    .unwrap()
    .with_serializer(|smiles: &str, options: &ZiSerializeOptions| -> Result<String> {
        assert!(options.canonical);
        assert!(!options.isomeric);
        Ok(smiles.to_string())
    });
    codec.set_enumerate(true);
    assert_eq!(codec.encode(&["CO"]).unwrap().errors, 0);
}

proptest! {
    #[test]
    fn codec_round_trip_within_vocabulary(s in "[CNOc1()=#]{0,12}", leftpad in any::<bool>()) {
        let codec = codec("CNOc1()=#", 12, leftpad);
        let encoded = codec.encode(&[s.as_str()]).unwrap();
        prop_assert_eq!(encoded.errors, 0);
        let decoded = codec.decode(encoded.tensor.view()).unwrap();
        prop_assert_eq!(&decoded[0], &s);
    }

    #[test]
    fn codec_fit_covers_every_char(strings in prop::collection::vec("[ -~]{1,20}", 1..10), extra_pad in 0usize..8) {
        let mut codec = codec("A", 1, true);
        codec.fit(&strings, &[], extra_pad).unwrap();
        let longest = strings.iter().map(|s| s.chars().count()).max().unwrap();
        prop_assert!(codec.pad() >= longest + extra_pad);
        for s in &strings {
            for ch in s.chars() {
                prop_assert!(codec.vocabulary().contains(ch));
            }
        }
    }
}
