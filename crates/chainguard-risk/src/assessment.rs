use chainguard_core::{InferenceResult, PredictedLabel, Severity};

use crate::classifier::{classify_risk, ActionRecommendation};
use crate::mapper::{confidence_to_risk, RiskScore};

/// Avaliação de risco de uma inferência.
///
/// Guarda apenas a inferência; pontuação e ação são recalculadas a cada acesso.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RiskAssessment {
    inference: InferenceResult,
}

impl RiskAssessment {
    pub fn new(inference: InferenceResult) -> Self {
        Self { inference }
    }

    pub fn inference(&self) -> &InferenceResult {
        &self.inference
    }

    pub fn label(&self) -> PredictedLabel {
        self.inference.label
    }

    pub fn confidence(&self) -> f64 {
        self.inference.confidence
    }

    pub fn risk_score(&self) -> RiskScore {
        confidence_to_risk(self.inference.confidence)
    }

    pub fn action(&self) -> ActionRecommendation {
        classify_risk(self.risk_score())
    }

    pub fn severity(&self) -> Severity {
        self.action().severity()
    }

    /// Linha de resumo exibida antes da confirmação
    pub fn summary(&self) -> String {
        format!(
            "{} (confiança {:.0}%), risco {}/100: {}",
            self.label(),
            self.confidence().clamp(0.0, 1.0) * 100.0,
            self.risk_score(),
            self.action()
        )
    }
}

impl From<InferenceResult> for RiskAssessment {
    fn from(inference: InferenceResult) -> Self {
        Self::new(inference)
    }
}
