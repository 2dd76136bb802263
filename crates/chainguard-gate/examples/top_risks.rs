//! Lista as transações mais arriscadas com filtro e ordenação.
//!
//! ```bash
//! cargo run -p chainguard-gate --example top_risks -- [BUSCA] [risk|value|confidence] [asc|desc]
//! ```

use std::env;

use anyhow::Result;
use chainguard_client::{ClientConfig, InferenceClient};
use chainguard_risk::{rank_transactions, RankingQuery, SortDirection, SortKey};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let args: Vec<String> = env::args().collect();
    let mut query = RankingQuery::default();
    if let Some(text) = args.get(1) {
        query.text = text.clone();
    }
    if let Some(key) = args.get(2) {
        query.key = key.parse::<SortKey>().map_err(anyhow::Error::msg)?;
    }
    if args.get(3).map(String::as_str) == Some("asc") {
        query.direction = SortDirection::Ascending;
    }

    let client = InferenceClient::new(ClientConfig::from_env()?)?;
    let records = client.top_risks_or_sample().await;

    println!("Ordenado por {} ({:?})", query.key, query.direction);
    for ranked in rank_transactions(&records, &query) {
        println!(
            "{:<14}  {:<14}  {:>8.4} ETH  {:>3}/100  {}",
            ranked.record.tx_hash,
            ranked.record.transaction.sender,
            ranked.record.transaction.value,
            ranked.risk.value(),
            ranked.action.label(),
        );
    }

    Ok(())
}
