use chainguard_core::{InferenceResult, PredictedLabel, TopRiskRecord, TransactionFeatures};
use chainguard_risk::{
    rank_transactions, sample_top_risks, ActionRecommendation, RankingQuery, SortDirection,
    SortKey, TOP_N,
};
use std::collections::HashMap;

fn tx(hash: &str, sender: &str, value: f64, confidence: f64) -> TopRiskRecord {
    TopRiskRecord {
        tx_hash: hash.to_string(),
        transaction: TransactionFeatures {
            sender: sender.to_string(),
            recipient: None,
            value,
            gas_used: 21000,
            nonce: 0,
            features: HashMap::new(),
        },
        inference: InferenceResult::new(PredictedLabel::Normal, confidence),
    }
}

fn hashes(rows: &[chainguard_risk::RankedTransaction]) -> Vec<&str> {
    rows.iter().map(|r| r.record.tx_hash.as_str()).collect()
}

#[test]
fn sample_sorted_by_risk_descending() {
    let sample = sample_top_risks();
    let query = RankingQuery::new("", SortKey::Risk, SortDirection::Descending);
    let ranked = rank_transactions(&sample, &query);

    assert_eq!(ranked.len(), 10);
    assert_eq!(ranked.first().unwrap().record.tx_hash, "0x9f8a...a4e1");
    assert_eq!(ranked.first().unwrap().record.inference.confidence, 0.97);
    assert_eq!(ranked.last().unwrap().record.tx_hash, "0x8a9d...7f7e");
    assert_eq!(ranked.last().unwrap().record.inference.confidence, 0.12);

    let scores: Vec<u8> = ranked.iter().map(|r| r.risk.value()).collect();
    assert_eq!(scores, vec![96, 90, 82, 78, 72, 58, 43, 29, 25, 6]);
}

#[test]
fn sample_actions_follow_scores() {
    let sample = sample_top_risks();
    let ranked = rank_transactions(&sample, &RankingQuery::default());
    let flagged = ranked
        .iter()
        .filter(|r| r.action == ActionRecommendation::FlagForInvestigation)
        .count();
    let watch = ranked
        .iter()
        .filter(|r| r.action == ActionRecommendation::AddToWatchlist)
        .count();
    assert_eq!(flagged, 3);
    assert_eq!(watch, 2);
}

#[test]
fn ascending_by_value() {
    let sample = sample_top_risks();
    let query = RankingQuery::new("", SortKey::Value, SortDirection::Ascending);
    let ranked = rank_transactions(&sample, &query);
    assert_eq!(ranked.first().unwrap().record.tx_hash, "0x8a9d...7f7e");
    assert_eq!(ranked.last().unwrap().record.tx_hash, "0x3c1d...a2b3");
}

#[test]
fn sort_by_confidence_descending() {
    let sample = sample_top_risks();
    let query = RankingQuery::new("", SortKey::Confidence, SortDirection::Descending);
    let ranked = rank_transactions(&sample, &query);
    let confidences: Vec<f64> = ranked.iter().map(|r| r.record.inference.confidence).collect();
    assert!(confidences.windows(2).all(|w| w[0] >= w[1]));
}

#[test]
fn query_matches_hash_or_sender_case_insensitive() {
    let sample = sample_top_risks();

    let by_sender = rank_transactions(&sample, &RankingQuery::new("fa1B", SortKey::Risk, SortDirection::Descending));
    assert_eq!(hashes(&by_sender), vec!["0x9f8a...a4e1"]);

    let by_hash = rank_transactions(&sample, &RankingQuery::new("0X77E1", SortKey::Risk, SortDirection::Descending));
    assert_eq!(hashes(&by_hash), vec!["0x77e1...9c4a"]);

    // "B12c" aparece só como destinatário
    let recipient_only = rank_transactions(&sample, &RankingQuery::new("B12c", SortKey::Risk, SortDirection::Descending));
    assert!(recipient_only.is_empty());
}

#[test]
fn query_without_matches_is_empty() {
    let sample = sample_top_risks();
    let ranked = rank_transactions(&sample, &RankingQuery::new("zzzz", SortKey::Value, SortDirection::Ascending));
    assert!(ranked.is_empty());
}

#[test]
fn only_empty_query_matches_everything() {
    let sample = sample_top_risks();
    assert_eq!(rank_transactions(&sample, &RankingQuery::default()).len(), 10);
    let blank = RankingQuery::new("   ", SortKey::Risk, SortDirection::Descending);
    assert!(rank_transactions(&sample, &blank).is_empty());
}

#[test]
fn ties_keep_original_order_in_both_directions() {
    let records = vec![
        tx("0xa", "s1", 1.0, 0.5),
        tx("0xb", "s2", 1.0, 0.9),
        tx("0xc", "s3", 1.0, 0.1),
        tx("0xd", "s4", 2.0, 0.5),
    ];

    let desc = rank_transactions(&records, &RankingQuery::new("", SortKey::Value, SortDirection::Descending));
    assert_eq!(hashes(&desc), vec!["0xd", "0xa", "0xb", "0xc"]);

    let asc = rank_transactions(&records, &RankingQuery::new("", SortKey::Value, SortDirection::Ascending));
    assert_eq!(hashes(&asc), vec!["0xa", "0xb", "0xc", "0xd"]);
}

#[test]
fn truncates_to_top_n() {
    let records: Vec<TopRiskRecord> = (0..25)
        .map(|i| tx(&format!("0x{:02}", i), "s", f64::from(i), f64::from(i) / 25.0))
        .collect();
    let ranked = rank_transactions(&records, &RankingQuery::default());
    assert_eq!(ranked.len(), TOP_N);
    assert_eq!(ranked[0].record.tx_hash, "0x24");
}
