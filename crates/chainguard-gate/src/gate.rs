use chainguard_core::{
    error::Result,
    traits::{InferenceService, WalletProvider},
    utils::{format_address, format_h256, hex_to_address, parse_ether_amount},
    Error, FeeData, PredictRequest, TransactionStatus, TransferReceipt, TransferRequest,
};
use chainguard_risk::RiskAssessment;
use chrono::Utc;
use ethereum_types::{Address, U256};
use std::fmt;
use std::sync::Arc;
use tracing::{info, warn};

use crate::config::GateConfig;
use crate::session::WalletSession;

/// Campos do formulário de transferência, como digitados
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransferForm {
    pub recipient: String,
    /// Valor em ether
    pub amount: String,
}

/// Parâmetros de gas usados na análise e no envio
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GasParameters {
    pub nonce: U256,
    pub gas_limit: U256,
    pub gas_price: U256,
    /// `false` quando o limite veio do padrão por falha na estimativa
    pub gas_limit_estimated: bool,
}

/// Transferência analisada aguardando a decisão do usuário.
///
/// Só é construída por [`TransactionGate::analyze`].
#[derive(Debug, Clone, PartialEq)]
pub struct PendingTransfer {
    form: TransferForm,
    from: Address,
    to: Address,
    value: U256,
    gas: GasParameters,
    request: PredictRequest,
    assessment: RiskAssessment,
}

impl PendingTransfer {
    pub fn form(&self) -> &TransferForm {
        &self.form
    }

    pub fn from(&self) -> Address {
        self.from
    }

    pub fn to(&self) -> Address {
        self.to
    }

    /// Valor em wei
    pub fn value(&self) -> U256 {
        self.value
    }

    pub fn gas(&self) -> &GasParameters {
        &self.gas
    }

    /// Corpo enviado ao serviço de inferência
    pub fn request(&self) -> &PredictRequest {
        &self.request
    }

    pub fn assessment(&self) -> &RiskAssessment {
        &self.assessment
    }

    fn transfer_request(&self) -> TransferRequest {
        TransferRequest {
            from: self.from,
            to: self.to,
            value: self.value,
            gas_limit: self.gas.gas_limit,
            gas_price: Some(self.gas.gas_price),
        }
    }
}

/// Estados do gate
#[derive(Debug, Clone, PartialEq)]
pub enum GateState {
    Idle,
    Collecting(TransferForm),
    Analyzing(TransferForm),
    AwaitingConfirmation(PendingTransfer),
    Submitting(PendingTransfer),
    Sent(TransferReceipt),
    Failed(String),
}

impl GateState {
    pub fn name(&self) -> &'static str {
        match self {
            GateState::Idle => "idle",
            GateState::Collecting(_) => "collecting",
            GateState::Analyzing(_) => "analyzing",
            GateState::AwaitingConfirmation(_) => "awaiting_confirmation",
            GateState::Submitting(_) => "submitting",
            GateState::Sent(_) => "sent",
            GateState::Failed(_) => "failed",
        }
    }
}

impl fmt::Display for GateState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Gate de confirmação de transferências.
///
/// Toda transição recebe `&mut self`, então cada instância tem no máximo uma
/// requisição em andamento. Nenhuma transferência é transmitida sem passar
/// por [`GateState::AwaitingConfirmation`].
pub struct TransactionGate<W, I> {
    session: Arc<WalletSession<W>>,
    inference: Arc<I>,
    config: GateConfig,
    state: GateState,
    status: String,
}

impl<W, I> TransactionGate<W, I>
where
    W: WalletProvider,
    I: InferenceService,
{
    pub fn new(session: Arc<WalletSession<W>>, inference: Arc<I>) -> Self {
        Self::with_config(session, inference, GateConfig::default())
    }

    pub fn with_config(session: Arc<WalletSession<W>>, inference: Arc<I>, config: GateConfig) -> Self {
        Self {
            session,
            inference,
            config,
            state: GateState::Idle,
            status: String::new(),
        }
    }

    pub fn state(&self) -> &GateState {
        &self.state
    }

    /// Linha de status legível exibida ao usuário
    pub fn status(&self) -> &str {
        &self.status
    }

    /// Há uma chamada em andamento; o gatilho deve ficar desabilitado
    pub fn is_busy(&self) -> bool {
        matches!(self.state, GateState::Analyzing(_) | GateState::Submitting(_))
    }

    pub fn form(&self) -> Option<&TransferForm> {
        match &self.state {
            GateState::Collecting(form) | GateState::Analyzing(form) => Some(form),
            GateState::AwaitingConfirmation(p) | GateState::Submitting(p) => Some(&p.form),
            _ => None,
        }
    }

    pub fn pending(&self) -> Option<&PendingTransfer> {
        match &self.state {
            GateState::AwaitingConfirmation(p) | GateState::Submitting(p) => Some(p),
            _ => None,
        }
    }

    /// Abre o formulário de transferência
    pub fn open(&mut self) -> Result<()> {
        match self.state {
            GateState::Collecting(_) => Ok(()),
            GateState::Idle | GateState::Sent(_) | GateState::Failed(_) => {
                self.state = GateState::Collecting(TransferForm::default());
                self.status.clear();
                Ok(())
            }
            _ => Err(self.invalid_state("abrir o formulário")),
        }
    }

    pub fn set_recipient(&mut self, recipient: impl Into<String>) -> Result<()> {
        self.form_mut("editar o destinatário")?.recipient = recipient.into();
        Ok(())
    }

    pub fn set_amount(&mut self, amount: impl Into<String>) -> Result<()> {
        self.form_mut("editar o valor")?.amount = amount.into();
        Ok(())
    }

    /// Valida o formulário, consulta a inferência e aguarda confirmação.
    ///
    /// Falhas de validação não fazem chamadas de rede. Falhas na inferência
    /// devolvem o gate ao formulário com os dados preservados.
    pub async fn analyze(&mut self) -> Result<RiskAssessment> {
        let form = match &self.state {
            GateState::Collecting(form) => form.clone(),
            _ => return Err(self.invalid_state("analisar")),
        };

        let (to, value) = match validate_form(&form) {
            Ok(parsed) => parsed,
            Err(e) => return Err(self.report(e)),
        };
        let from = match self.session.account() {
            Some(account) => account,
            None => {
                return Err(self.report(Error::ValidationError(
                    "carteira não conectada".to_string(),
                )))
            }
        };

        self.state = GateState::Analyzing(form.clone());
        self.status = "Obtendo dados da blockchain...".to_string();
        info!(from = %format_address(&from), to = %format_address(&to), %value, "analisando transferência");

        let gas = self.gas_parameters(from, to, value).await;
        let request = PredictRequest {
            from_address: from,
            to_address: to,
            value: value.to_string(),
            gas: saturating_u64(gas.gas_limit),
            gas_price: gas.gas_price.to_string(),
            input_data: self.config.input_data.clone(),
            nonce: saturating_u64(gas.nonce),
            timestamp: Utc::now().timestamp(),
        };

        self.status = "Analisando risco da transação...".to_string();
        match self.inference.predict(&request).await {
            Ok(inference) => {
                let assessment = RiskAssessment::new(inference);
                info!(
                    risk = assessment.risk_score().value(),
                    action = ?assessment.action(),
                    "avaliação de risco pronta, aguardando confirmação"
                );
                self.status = format!("{}. Confirme para enviar.", assessment.summary());
                self.state = GateState::AwaitingConfirmation(PendingTransfer {
                    form,
                    from,
                    to,
                    value,
                    gas,
                    request,
                    assessment,
                });
                Ok(assessment)
            }
            Err(e) => {
                warn!(error = %e, "falha na inferência");
                self.state = GateState::Collecting(form);
                Err(self.report(e))
            }
        }
    }

    /// Usuário recusou ou fechou o formulário; nenhuma interação com a carteira
    pub fn cancel(&mut self) -> Result<()> {
        match self.state {
            GateState::Analyzing(_) | GateState::Submitting(_) => {
                Err(self.invalid_state("cancelar"))
            }
            GateState::Idle => Ok(()),
            _ => {
                if matches!(self.state, GateState::AwaitingConfirmation(_)) {
                    info!("transferência cancelada pelo usuário");
                }
                self.state = GateState::Idle;
                self.status = "Transação cancelada.".to_string();
                Ok(())
            }
        }
    }

    /// Usuário aprovou o risco exibido: assina, transmite e aguarda confirmação.
    pub async fn confirm(&mut self) -> Result<TransferReceipt> {
        let pending = match std::mem::replace(&mut self.state, GateState::Idle) {
            GateState::AwaitingConfirmation(pending) => pending,
            other => {
                self.state = other;
                return Err(self.invalid_state("confirmar"));
            }
        };

        if self.session.account() != Some(pending.from) {
            self.state = GateState::Collecting(pending.form);
            return Err(self.report(Error::InvalidState(
                "a conta conectada mudou desde a análise".to_string(),
            )));
        }

        let transfer = pending.transfer_request();
        self.state = GateState::Submitting(pending);
        self.status = "Enviando transação...".to_string();

        let session = Arc::clone(&self.session);
        let wallet = session.provider();

        let tx_hash = match wallet.send_transfer(&transfer).await {
            Ok(hash) => hash,
            Err(e) => return Err(self.fail(e)),
        };
        self.status = format!("Transação enviada! Hash: {}", format_h256(&tx_hash));
        info!(tx_hash = %format_h256(&tx_hash), "transferência transmitida");

        match wallet.wait_for_confirmation(tx_hash).await {
            Ok(receipt) => {
                self.status = match receipt.status {
                    TransactionStatus::Success => "Transação confirmada!".to_string(),
                    TransactionStatus::Failure => format!(
                        "Transação revertida na blockchain: {}",
                        format_h256(&receipt.tx_hash)
                    ),
                    TransactionStatus::Pending => {
                        format!("Transação pendente: {}", format_h256(&receipt.tx_hash))
                    }
                };
                info!(status = ?receipt.status, block = ?receipt.block_number, "transferência concluída");
                self.state = GateState::Sent(receipt.clone());
                Ok(receipt)
            }
            Err(e) => Err(self.fail(e)),
        }
    }

    /// Volta para `Idle` incondicionalmente, ex.: após abandonar uma chamada
    pub fn reset(&mut self) {
        self.state = GateState::Idle;
        self.status.clear();
    }

    async fn gas_parameters(&self, from: Address, to: Address, value: U256) -> GasParameters {
        let wallet = self.session.provider();

        let nonce = match wallet.transaction_count(from).await {
            Ok(nonce) => nonce,
            Err(e) => {
                warn!(error = %e, "falha ao obter nonce, usando 0");
                U256::zero()
            }
        };

        let gas_price = match wallet.fee_data().await {
            Ok(FeeData { gas_price: Some(price) }) => price,
            Ok(FeeData { gas_price: None }) => self.config.default_gas_price,
            Err(e) => {
                warn!(error = %e, "falha ao obter taxa, usando padrão");
                self.config.default_gas_price
            }
        };

        let (gas_limit, gas_limit_estimated) = match wallet.estimate_gas(from, to, value).await {
            Ok(limit) => (limit, true),
            Err(e) => {
                warn!(error = %e, "falha ao estimar gas, usando padrão");
                (self.config.default_gas_limit, false)
            }
        };

        GasParameters {
            nonce,
            gas_limit,
            gas_price,
            gas_limit_estimated,
        }
    }

    fn form_mut(&mut self, action: &str) -> Result<&mut TransferForm> {
        if !matches!(self.state, GateState::Collecting(_)) {
            return Err(self.invalid_state(action));
        }
        match &mut self.state {
            GateState::Collecting(form) => Ok(form),
            _ => Err(Error::InvalidState(action.to_string())),
        }
    }

    fn invalid_state(&self, action: &str) -> Error {
        Error::InvalidState(format!("não é possível {} no estado {}", action, self.state))
    }

    fn report(&mut self, e: Error) -> Error {
        self.status = e.status_message();
        e
    }

    fn fail(&mut self, e: Error) -> Error {
        warn!(error = %e, "falha no envio da transferência");
        self.state = GateState::Failed(e.to_string());
        self.report(e)
    }
}

fn validate_form(form: &TransferForm) -> Result<(Address, U256)> {
    let recipient = form.recipient.trim();
    if recipient.is_empty() || form.amount.trim().is_empty() {
        return Err(Error::ValidationError(
            "preencha destinatário e valor".to_string(),
        ));
    }
    let to = hex_to_address(recipient).ok_or_else(|| {
        Error::ValidationError(format!("endereço de destino inválido: {}", recipient))
    })?;
    let value = parse_ether_amount(&form.amount)?;
    Ok((to, value))
}

fn saturating_u64(value: U256) -> u64 {
    if value > U256::from(u64::MAX) {
        u64::MAX
    } else {
        value.as_u64()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_fields_fail_validation() {
        let form = TransferForm {
            recipient: String::new(),
            amount: "1".into(),
        };
        assert!(matches!(validate_form(&form), Err(Error::ValidationError(_))));

        let form = TransferForm {
            recipient: "0x1111111111111111111111111111111111111111".into(),
            amount: "  ".into(),
        };
        assert!(matches!(validate_form(&form), Err(Error::ValidationError(_))));
    }

    #[test]
    fn valid_form_parses() {
        let form = TransferForm {
            recipient: " 0x2222222222222222222222222222222222222222 ".into(),
            amount: "0.25".into(),
        };
        let (to, value) = validate_form(&form).unwrap();
        assert_eq!(to, Address::repeat_byte(0x22));
        assert_eq!(value, U256::from(250_000_000_000_000_000u64));
    }

    #[test]
    fn saturating_conversion() {
        assert_eq!(saturating_u64(U256::from(21_000u64)), 21_000);
        assert_eq!(saturating_u64(U256::MAX), u64::MAX);
    }
}
