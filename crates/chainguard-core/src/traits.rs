/*!
 * ChainGuard Traits
 *
 * Traits para os colaboradores externos: serviço de inferência e carteira
 */

use async_trait::async_trait;
use ethereum_types::{Address, U256};

use crate::error::Result;
use crate::types::{
    FeeData, InferenceResult, PredictRequest, TransactionHash, TransferReceipt, TransferRequest,
};

/// Serviço de inferência de fraude
#[async_trait]
pub trait InferenceService: Send + Sync {
    /// Envia os parâmetros da transação e devolve a inferência do modelo
    async fn predict(&self, request: &PredictRequest) -> Result<InferenceResult>;
}

/// Provedor de assinatura da carteira conectada
#[async_trait]
pub trait WalletProvider: Send + Sync {
    /// Conta atualmente conectada
    async fn current_account(&self) -> Result<Address>;

    /// Nonce (quantidade de transações enviadas) da conta
    async fn transaction_count(&self, account: Address) -> Result<U256>;

    /// Dados de taxa atuais da rede
    async fn fee_data(&self) -> Result<FeeData>;

    /// Estima o limite de gas de uma transferência
    async fn estimate_gas(&self, from: Address, to: Address, value: U256) -> Result<U256>;

    /// Assina e transmite a transferência, devolvendo o hash
    async fn send_transfer(&self, request: &TransferRequest) -> Result<TransactionHash>;

    /// Aguarda a confirmação da transação
    async fn wait_for_confirmation(&self, tx_hash: TransactionHash) -> Result<TransferReceipt>;
}
