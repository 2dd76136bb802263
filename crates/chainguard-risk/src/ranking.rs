use chainguard_core::TopRiskRecord;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::classifier::{classify_risk, ActionRecommendation};
use crate::mapper::{confidence_to_risk, RiskScore};

/// Quantidade máxima de linhas exibidas
pub const TOP_N: usize = 10;

/// Chave de ordenação
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    #[default]
    Risk,
    Value,
    Confidence,
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortKey::Risk => write!(f, "risk"),
            SortKey::Value => write!(f, "value"),
            SortKey::Confidence => write!(f, "confidence"),
        }
    }
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "risk" => Ok(SortKey::Risk),
            "value" => Ok(SortKey::Value),
            "confidence" => Ok(SortKey::Confidence),
            other => Err(format!("Chave de ordenação desconhecida: {}", other)),
        }
    }
}

/// Direção da ordenação
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SortDirection {
    Ascending,
    #[default]
    Descending,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }
}

/// Linha ranqueada: registro original com risco e ação derivados
#[derive(Debug, Clone, PartialEq)]
pub struct RankedTransaction {
    pub record: TopRiskRecord,
    pub risk: RiskScore,
    pub action: ActionRecommendation,
}

impl RankedTransaction {
    pub fn new(record: TopRiskRecord) -> Self {
        let risk = confidence_to_risk(record.inference.confidence);
        Self {
            action: classify_risk(risk),
            risk,
            record,
        }
    }
}

/// Parâmetros da visão ranqueada
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RankingQuery {
    pub text: String,
    pub key: SortKey,
    pub direction: SortDirection,
}

impl RankingQuery {
    pub fn new(text: impl Into<String>, key: SortKey, direction: SortDirection) -> Self {
        Self {
            text: text.into(),
            key,
            direction,
        }
    }

    /// Busca sem diferenciar maiúsculas em hash e remetente; vazio aceita tudo
    pub fn matches(&self, record: &TopRiskRecord) -> bool {
        let needle = self.text.to_lowercase();
        if needle.is_empty() {
            return true;
        }
        record.tx_hash.to_lowercase().contains(&needle)
            || record.transaction.sender.to_lowercase().contains(&needle)
    }

    fn compare(&self, a: &RankedTransaction, b: &RankedTransaction) -> Ordering {
        let ordering = match self.key {
            SortKey::Risk => a.risk.cmp(&b.risk),
            SortKey::Value => a.record.transaction.value.total_cmp(&b.record.transaction.value),
            SortKey::Confidence => a
                .record
                .inference
                .confidence
                .total_cmp(&b.record.inference.confidence),
        };
        match self.direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    }
}

/// Filtra, ordena de forma estável e limita a [`TOP_N`] linhas.
///
/// Empates mantêm a ordem relativa original nas duas direções.
pub fn rank_transactions<'a, I>(records: I, query: &RankingQuery) -> Vec<RankedTransaction>
where
    I: IntoIterator<Item = &'a TopRiskRecord>,
{
    let mut ranked: Vec<RankedTransaction> = records
        .into_iter()
        .filter(|record| query.matches(record))
        .cloned()
        .map(RankedTransaction::new)
        .collect();

    ranked.sort_by(|a, b| query.compare(a, b));
    ranked.truncate(TOP_N);
    ranked
}
