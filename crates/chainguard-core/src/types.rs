/*!
 * ChainGuard Types
 *
 * Tipos comuns e formatos de fio usados em toda a workspace ChainGuard
 */

use chrono::{DateTime, Utc};
use ethereum_types::{Address, H256, U256};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

use crate::error::{Error, Result};
use crate::utils::{decimal_to_u256, parse_timestamp};

/// Alias para hash de transação
pub type TransactionHash = H256;

/// Rótulo binário previsto pelo modelo
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PredictedLabel {
    Normal,
    Fraudulent,
}

impl fmt::Display for PredictedLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PredictedLabel::Normal => write!(f, "Normal"),
            PredictedLabel::Fraudulent => write!(f, "Fraudulent"),
        }
    }
}

/// Severidade de uma recomendação de ação
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Severity {
    None,
    Low,
    Medium,
    High,
}

/// Status de transação
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TransactionStatus {
    Success,
    Failure,
    Pending,
}

/// Valor escalar de uma feature exibida junto da transação
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FeatureValue {
    Flag(bool),
    Number(f64),
    Text(String),
}

impl fmt::Display for FeatureValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FeatureValue::Flag(v) => write!(f, "{}", v),
            FeatureValue::Number(v) => write!(f, "{}", v),
            FeatureValue::Text(v) => write!(f, "{}", v),
        }
    }
}

/// Parâmetros de uma transação usados para exibição e contexto.
///
/// Endereços ficam como texto porque as listagens trazem formas abreviadas
/// (`0xFA1b...c12E`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionFeatures {
    pub sender: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recipient: Option<String>,
    pub value: f64,
    pub gas_used: u64,
    pub nonce: u64,
    #[serde(default)]
    pub features: HashMap<String, FeatureValue>,
}

/// Resultado de inferência: rótulo e confiança em [0,1]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InferenceResult {
    #[serde(rename = "predicted")]
    pub label: PredictedLabel,
    pub confidence: f64,
}

impl InferenceResult {
    pub fn new(label: PredictedLabel, confidence: f64) -> Self {
        Self { label, confidence }
    }
}

/// Elemento da listagem de transações mais arriscadas
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopRiskRecord {
    #[serde(rename = "txHash")]
    pub tx_hash: String,
    #[serde(flatten)]
    pub transaction: TransactionFeatures,
    #[serde(flatten)]
    pub inference: InferenceResult,
}

/// Corpo enviado para `POST /predict`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PredictRequest {
    pub from_address: Address,
    pub to_address: Address,
    /// Valor em wei, como string decimal
    pub value: String,
    pub gas: u64,
    /// Preço do gas em wei, como string decimal
    pub gas_price: String,
    pub input_data: String,
    pub nonce: u64,
    /// Segundos unix
    pub timestamp: i64,
}

/// Resposta de sucesso de `POST /predict`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictResponse {
    pub risk_score: f64,
    pub alert: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_fraud: Option<bool>,
}

impl PredictResponse {
    /// Converte a pontuação 0-100 do serviço em um [`InferenceResult`].
    ///
    /// Pontuações fora de [0,100] são tratadas como dados malformados.
    pub fn to_inference(&self) -> Result<InferenceResult> {
        if !self.risk_score.is_finite() || !(0.0..=100.0).contains(&self.risk_score) {
            return Err(Error::DecodeError(format!(
                "risk_score fora do intervalo [0,100]: {}",
                self.risk_score
            )));
        }

        let fraudulent = self
            .is_fraud
            .unwrap_or_else(|| self.alert.trim().to_uppercase().starts_with("CRITICAL"));
        let label = if fraudulent {
            PredictedLabel::Fraudulent
        } else {
            PredictedLabel::Normal
        };

        Ok(InferenceResult::new(label, self.risk_score / 100.0))
    }
}

/// Corpo retornado em respostas não-2xx
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiErrorBody {
    pub detail: String,
}

/// Transação registrada no perfil de reputação de uma carteira
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalletTransaction {
    pub hash: String,
    pub from_address: String,
    #[serde(default)]
    pub to_address: Option<String>,
    pub value_wei: String,
    pub risk_score: i64,
    pub is_flagged_fraud: bool,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl WalletTransaction {
    /// Valor em wei, se a string for decimal válida
    pub fn value(&self) -> Option<U256> {
        decimal_to_u256(&self.value_wei)
    }

    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        self.created_at.as_deref().and_then(parse_timestamp)
    }
}

/// Perfil retornado por `GET /wallet/{address}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalletProfile {
    pub address: String,
    pub total_tx_sent: u64,
    pub total_tx_received: u64,
    pub is_known_scam: bool,
    #[serde(default)]
    pub last_active: Option<String>,
    #[serde(default)]
    pub transactions: Vec<WalletTransaction>,
}

impl WalletProfile {
    /// Transações marcadas como fraude
    pub fn flagged_transactions(&self) -> impl Iterator<Item = &WalletTransaction> {
        self.transactions.iter().filter(|tx| tx.is_flagged_fraud)
    }

    /// Maior pontuação de risco registrada, se houver transações
    pub fn max_risk_score(&self) -> Option<i64> {
        self.transactions.iter().map(|tx| tx.risk_score).max()
    }

    pub fn total_transactions(&self) -> u64 {
        self.total_tx_sent.saturating_add(self.total_tx_received)
    }

    pub fn last_active_at(&self) -> Option<DateTime<Utc>> {
        self.last_active.as_deref().and_then(parse_timestamp)
    }
}

/// Dados de taxa da rede obtidos do provedor da carteira
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FeeData {
    pub gas_price: Option<U256>,
}

/// Transferência de moeda nativa a ser assinada pela carteira
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferRequest {
    pub from: Address,
    pub to: Address,
    pub value: U256,
    pub gas_limit: U256,
    pub gas_price: Option<U256>,
}

/// Recibo de uma transferência confirmada
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferReceipt {
    pub tx_hash: TransactionHash,
    pub block_number: Option<u64>,
    pub gas_used: Option<U256>,
    pub status: TransactionStatus,
}
