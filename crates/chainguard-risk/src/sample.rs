use chainguard_core::{
    FeatureValue, InferenceResult, PredictedLabel, TopRiskRecord, TransactionFeatures,
};
use std::collections::HashMap;

#[allow(clippy::too_many_arguments)]
fn record(
    tx_hash: &str,
    sender: &str,
    recipient: &str,
    value: f64,
    gas_used: u64,
    nonce: u64,
    features: Vec<(&str, FeatureValue)>,
    label: PredictedLabel,
    confidence: f64,
) -> TopRiskRecord {
    TopRiskRecord {
        tx_hash: tx_hash.to_string(),
        transaction: TransactionFeatures {
            sender: sender.to_string(),
            recipient: Some(recipient.to_string()),
            value,
            gas_used,
            nonce,
            features: features
                .into_iter()
                .map(|(k, v)| (k.to_string(), v))
                .collect::<HashMap<_, _>>(),
        },
        inference: InferenceResult::new(label, confidence),
    }
}

/// Amostra das dez transações mais arriscadas exibida quando a listagem
/// não está disponível.
pub fn sample_top_risks() -> Vec<TopRiskRecord> {
    use FeatureValue::{Flag, Number, Text};
    use PredictedLabel::{Fraudulent, Normal};

    vec![
        record(
            "0x9f8a...a4e1", "0xFA1b...c12E", "0xB12c...d9f0", 125.3, 21000, 441,
            vec![("avg_send_value", Number(80.2)), ("txs_last_hour", Number(7.0)), ("label_score", Number(0.02))],
            Fraudulent, 0.97,
        ),
        record(
            "0x5b4c...77b2", "0xD34f...091A", "0xC212...ffe1", 0.02, 125000, 12,
            vec![("token_in", Text("USDC".into())), ("txs_last_min", Number(3.0))],
            Fraudulent, 0.86,
        ),
        record(
            "0x3c1d...a2b3", "0xE3a2...3f11", "0xAbe2...4cde", 5000.0, 300000, 992,
            vec![("new_address", Flag(true)), ("score_abnormal_flow", Number(0.9))],
            Fraudulent, 0.78,
        ),
        record(
            "0x1134...f9de", "0xB11a...00AA", "0xF01b...88ff", 0.5, 45000, 38,
            vec![("internal_calls", Number(12.0)), ("swap_count", Number(3.0))],
            Normal, 0.52,
        ),
        record(
            "0x291b...0123", "0x12aa...bbcc", "0x22bb...ccdd", 10.0, 210000, 5,
            vec![("value_to_balance", Number(0.9)), ("historical_vol", Number(0.01))],
            Fraudulent, 0.66,
        ),
        record(
            "0x8a9d...7f7e", "0x99aa...ffee", "0x88bb...7766", 0.0001, 21000, 1,
            vec![("dust", Flag(true))],
            Normal, 0.12,
        ),
        record(
            "0x77e1...9c4a", "0xabc1...1111", "0xabc1...2222", 250.0, 21000, 1001,
            vec![("mixing_pattern", Number(0.8))],
            Fraudulent, 0.92,
        ),
        record(
            "0x44d2...fd12", "0x0f0f...0f0f", "0xf0f0...f0f0", 2.2, 100000, 402,
            vec![("bridge_used", Text("unknown".into()))],
            Normal, 0.39,
        ),
        record(
            "0x99aa...5b5b", "0xaaaa...bbbb", "0xcccc...dddd", 800.5, 260000, 888,
            vec![("flashloan", Flag(true)), ("loans", Number(1.0))],
            Fraudulent, 0.83,
        ),
        record(
            "0x1020...ff03", "0x0011...2233", "0x4455...6677", 0.45, 21000, 17,
            vec![("label_score", Number(0.15))],
            Normal, 0.34,
        ),
    ]
}
