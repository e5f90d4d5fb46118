// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{decode, encode};
use serde_json::{Value, json};

/// Produced by a reference gzip implementation, not by this crate.
const FOREIGN_TOKEN: &str = "H4sIAAAAAAACA0XMSwqAIBRG4b384ygfReBWIkRI8IJacIUIce9JkyZn9HEq7kDFR-LiD8uemc7MMBVymYSelFALzAY5CgzQvXsbELwryV0fW39WoTowc-vkcBQfG_vwzDZSogKj2gt4SSmhbwAAAA";

fn sample_values() -> Vec<Value> {
    vec![
        json!({}),
        json!(null),
        json!([]),
        json!("plain string"),
        json!(42),
        json!(-7.25),
        json!(true),
        json!({
            "whitelisted_sessions": {"15/03/2025": ["1.0", "3.0"]},
            "heatmap": {"15/03/2025": {"1.0": 3}},
            "daily_lesson_limit": 2,
            "stop_at_midnight": true
        }),
        json!({"unicode": "Zürich · 東京 🚀", "escapes": "quote \" slash / back \\ nl \n"}),
        json!({"nested": [[1, [2, [3, {"deep": [null, false]}]]]]}),
        json!({"big": u64::MAX, "small": i64::MIN}),
    ]
}

#[tokio::test]
async fn test_round_trip_preserves_values() {
    for value in sample_values() {
        let token: String = encode(&value).await.unwrap();
        let decoded: Value = decode(&token).await.unwrap();
        assert_eq!(decoded, value);
    }
}

#[tokio::test]
async fn test_round_trip_of_large_payload() {
    let sessions: serde_json::Map<String, Value> = (1..=28)
        .map(|day| {
            (
                format!("{day:02}/02/2026"),
                json!(["1.0", "2.0", "3.0", "4.0", "5.0", "6.0", "7.0"]),
            )
        })
        .collect();
    let value: Value = json!({ "whitelisted_sessions": sessions });

    let token: String = encode(&value).await.unwrap();
    let decoded: Value = decode(&token).await.unwrap();

    assert_eq!(decoded, value);
    // Repetitive payloads compress well below their JSON size.
    assert!(token.len() < serde_json::to_string(&value).unwrap().len());
}

#[tokio::test]
async fn test_tokens_are_url_safe() {
    for value in sample_values() {
        let token: String = encode(&value).await.unwrap();
        assert!(
            token
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_'),
            "token {token} contains characters outside the URL-safe alphabet"
        );
    }
}

#[tokio::test]
async fn test_encoding_twice_decodes_equal() {
    let value: Value = json!({"a": [1, 2, 3]});

    let first: Value = decode(&encode(&value).await.unwrap()).await.unwrap();
    let second: Value = decode(&encode(&value).await.unwrap()).await.unwrap();

    assert_eq!(first, second);
}

#[tokio::test]
async fn test_decodes_foreign_token() {
    let decoded: Value = decode(FOREIGN_TOKEN).await.unwrap();

    assert_eq!(
        decoded,
        json!({
            "whitelisted_sessions": {"15/03/2025": ["1.0", "3.0"]},
            "heatmap": {"17/03/2025": {"2.0": 4}},
            "daily_lesson_limit": 2
        })
    );
}

#[tokio::test]
async fn test_decodes_padded_standard_alphabet() {
    let standard: String = FOREIGN_TOKEN.replace('-', "+").replace('_', "/") + "==";
    let from_standard: Value = decode(&standard).await.unwrap();
    let from_url_safe: Value = decode(FOREIGN_TOKEN).await.unwrap();

    assert_eq!(from_standard, from_url_safe);
}

#[tokio::test]
async fn test_typed_round_trip() {
    #[derive(Debug, PartialEq, serde::Serialize, serde::Deserialize)]
    struct Probe {
        name: String,
        counts: Vec<u32>,
    }

    let probe: Probe = Probe {
        name: String::from("probe"),
        counts: vec![1, 2, 3],
    };

    let decoded: Probe = decode(&encode(&probe).await.unwrap()).await.unwrap();
    assert_eq!(decoded, probe);
}
