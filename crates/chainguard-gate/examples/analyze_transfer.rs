//! Analisa o risco de uma transferência e só envia após confirmação no terminal.
//!
//! ```bash
//! CHAINGUARD_PRIVATE_KEY=<CHAVE> cargo run -p chainguard-gate --example analyze_transfer -- \
//!     <RPC_ENDPOINT> <DESTINATARIO> <VALOR_ETH>
//! ```
//!
//! O endpoint de inferência vem de `CHAINGUARD_API_URL` (padrão `http://localhost:8000`).

use std::env;
use std::io::{self, BufRead, Write};
use std::sync::Arc;

use anyhow::{Context, Result};
use chainguard_client::{ClientConfig, InferenceClient};
use chainguard_core::utils::short_address;
use chainguard_gate::{EthersWallet, TransactionGate, WalletSession};
use ethers::prelude::*;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 4 {
        eprintln!("Uso: {} <RPC_ENDPOINT> <DESTINATARIO> <VALOR_ETH>", args[0]);
        std::process::exit(1);
    }

    let key = env::var("CHAINGUARD_PRIVATE_KEY").context("CHAINGUARD_PRIVATE_KEY não definida")?;
    let provider = Provider::<Http>::try_from(args[1].as_str()).context("falha ao conectar via http")?;
    let chain_id = provider
        .get_chainid()
        .await
        .context("falha ao obter chain id")?;
    let signer = key
        .parse::<LocalWallet>()
        .context("chave privada inválida")?
        .with_chain_id(chain_id.as_u64());
    let client = Arc::new(SignerMiddleware::new(provider, signer));

    let session = Arc::new(WalletSession::new(EthersWallet::new(client)));
    let account = session.connect().await.context("falha ao conectar carteira")?;
    println!("Conta: {}", short_address(&account));

    let inference = InferenceClient::new(ClientConfig::from_env()?)?;
    let mut gate = TransactionGate::new(session, Arc::new(inference));

    gate.open()?;
    gate.set_recipient(args[2].as_str())?;
    gate.set_amount(args[3].as_str())?;

    let assessment = match gate.analyze().await {
        Ok(assessment) => assessment,
        Err(e) => {
            eprintln!("{}", gate.status());
            return Err(e.into());
        }
    };
    println!("Rótulo: {}", assessment.label());
    println!("Risco: {}/100", assessment.risk_score());
    println!("Ação: {}", assessment.action().label());
    println!("{}", gate.status());

    print!("Enviar? [s/N] ");
    io::stdout().flush()?;
    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;

    if answer.trim().eq_ignore_ascii_case("s") {
        let receipt = gate.confirm().await;
        println!("{}", gate.status());
        let receipt = receipt?;
        println!("Bloco: {:?}", receipt.block_number);
    } else {
        gate.cancel()?;
        println!("{}", gate.status());
    }

    Ok(())
}
