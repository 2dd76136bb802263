use chainguard_core::Severity;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::mapper::RiskScore;

/// Limites inferiores (inclusivos) de cada faixa
pub const HIGH_RISK_THRESHOLD: u8 = 80;
pub const MEDIUM_RISK_THRESHOLD: u8 = 60;
pub const LOW_RISK_THRESHOLD: u8 = 40;

/// Ação recomendada para uma pontuação de risco
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActionRecommendation {
    /// Sinalizar a carteira para investigação
    FlagForInvestigation,
    /// Adicionar o remetente à watchlist
    AddToWatchlist,
    Monitor,
    NoAction,
}

impl ActionRecommendation {
    pub fn severity(self) -> Severity {
        match self {
            ActionRecommendation::FlagForInvestigation => Severity::High,
            ActionRecommendation::AddToWatchlist => Severity::Medium,
            ActionRecommendation::Monitor => Severity::Low,
            ActionRecommendation::NoAction => Severity::None,
        }
    }

    /// Rótulo fixo exibido ao usuário
    pub fn label(self) -> &'static str {
        match self {
            ActionRecommendation::FlagForInvestigation => "High Risk: Flag Wallet for Investigation",
            ActionRecommendation::AddToWatchlist => "Medium Risk: Add Sender to Watchlist",
            ActionRecommendation::Monitor => "Low Risk: Monitor",
            ActionRecommendation::NoAction => "No Action",
        }
    }

    /// Verifica se a ação exige intervenção de um analista
    pub fn requires_review(self) -> bool {
        self.severity() >= Severity::Medium
    }
}

impl fmt::Display for ActionRecommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Mapeia a pontuação para a ação; faixas verificadas em ordem decrescente.
pub fn classify_risk(score: RiskScore) -> ActionRecommendation {
    let r = score.value();
    if r >= HIGH_RISK_THRESHOLD {
        ActionRecommendation::FlagForInvestigation
    } else if r >= MEDIUM_RISK_THRESHOLD {
        ActionRecommendation::AddToWatchlist
    } else if r >= LOW_RISK_THRESHOLD {
        ActionRecommendation::Monitor
    } else {
        ActionRecommendation::NoAction
    }
}
