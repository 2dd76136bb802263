use serde::{Deserialize, Serialize};
use std::fmt;

/// Expoente aplicado à confiança. Valores > 1 comprimem a faixa intermediária.
pub const RISK_EXPONENT: f64 = 1.3;

/// Pontuação de risco inteira em [0,100].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct RiskScore(u8);

impl RiskScore {
    pub const MIN: RiskScore = RiskScore(0);
    pub const MAX: RiskScore = RiskScore(100);

    /// Pontuação a partir de um inteiro arbitrário, limitada a [0,100].
    ///
    /// Usado para pontuações vindas do fio, onde -1 significa "não pontuado".
    pub fn from_raw(raw: i64) -> Self {
        RiskScore(raw.clamp(0, 100) as u8)
    }

    pub fn value(self) -> u8 {
        self.0
    }
}

impl fmt::Display for RiskScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Converte a confiança `c` em `round(c^1.3 × 100)`.
///
/// Entradas fora de [0,1] são limitadas ao intervalo; NaN vira 0.
pub fn confidence_to_risk(confidence: f64) -> RiskScore {
    if confidence.is_nan() {
        return RiskScore::MIN;
    }
    let c = confidence.clamp(0.0, 1.0);
    let scaled = (c.powf(RISK_EXPONENT) * 100.0).round();
    RiskScore(scaled.clamp(0.0, 100.0) as u8)
}
