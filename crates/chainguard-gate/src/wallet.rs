use async_trait::async_trait;
use chainguard_core::{
    error::Result, traits::WalletProvider, Error, FeeData, TransactionHash, TransactionStatus,
    TransferReceipt, TransferRequest,
};
use ethers::providers::{Middleware, PendingTransaction};
use ethers::types::{
    transaction::eip2718::TypedTransaction, Address, TransactionReceipt, TransactionRequest, U256,
};
use std::sync::Arc;

/// [`WalletProvider`] sobre qualquer `Middleware` do ethers.
///
/// Para assinar transferências use um `SignerMiddleware` ou um node com
/// contas desbloqueadas.
#[derive(Debug)]
pub struct EthersWallet<M> {
    client: Arc<M>,
    confirmations: usize,
}

impl<M: Middleware + 'static> EthersWallet<M> {
    pub fn new(client: Arc<M>) -> Self {
        Self {
            client,
            confirmations: 1,
        }
    }

    /// Quantidade de blocos a aguardar na confirmação
    pub fn confirmations(mut self, confirmations: usize) -> Self {
        self.confirmations = confirmations.max(1);
        self
    }

    pub fn client(&self) -> &Arc<M> {
        &self.client
    }
}

fn receipt_from(receipt: TransactionReceipt) -> TransferReceipt {
    let status = match receipt.status.map(|s| s.as_u64()) {
        Some(1) => TransactionStatus::Success,
        Some(_) => TransactionStatus::Failure,
        None => TransactionStatus::Pending,
    };
    TransferReceipt {
        tx_hash: receipt.transaction_hash,
        block_number: receipt.block_number.map(|b| b.as_u64()),
        gas_used: receipt.gas_used,
        status,
    }
}

#[async_trait]
impl<M> WalletProvider for EthersWallet<M>
where
    M: Middleware + 'static,
{
    async fn current_account(&self) -> Result<Address> {
        if let Some(sender) = self.client.default_sender() {
            return Ok(sender);
        }
        let accounts = self
            .client
            .get_accounts()
            .await
            .map_err(|e| Error::WalletError(format!("Falha ao obter contas: {}", e)))?;
        accounts
            .into_iter()
            .next()
            .ok_or_else(|| Error::WalletError("nenhuma conta disponível".to_string()))
    }

    async fn transaction_count(&self, account: Address) -> Result<U256> {
        self.client
            .get_transaction_count(account, None)
            .await
            .map_err(|e| Error::EstimationError(format!("Falha ao obter nonce: {}", e)))
    }

    async fn fee_data(&self) -> Result<FeeData> {
        let gas_price = self
            .client
            .get_gas_price()
            .await
            .map_err(|e| Error::EstimationError(format!("Falha ao obter preço do gas: {}", e)))?;
        Ok(FeeData {
            gas_price: Some(gas_price),
        })
    }

    async fn estimate_gas(&self, from: Address, to: Address, value: U256) -> Result<U256> {
        let tx: TypedTransaction = TransactionRequest::new()
            .from(from)
            .to(to)
            .value(value)
            .into();
        self.client
            .estimate_gas(&tx, None)
            .await
            .map_err(|e| Error::EstimationError(format!("Falha ao estimar gas: {}", e)))
    }

    async fn send_transfer(&self, request: &TransferRequest) -> Result<TransactionHash> {
        let mut tx = TransactionRequest::new()
            .from(request.from)
            .to(request.to)
            .value(request.value)
            .gas(request.gas_limit);
        if let Some(price) = request.gas_price {
            tx = tx.gas_price(price);
        }

        let pending = self
            .client
            .send_transaction(tx, None)
            .await
            .map_err(|e| Error::WalletError(format!("Falha ao enviar transação: {}", e)))?;
        Ok(pending.tx_hash())
    }

    async fn wait_for_confirmation(&self, tx_hash: TransactionHash) -> Result<TransferReceipt> {
        let receipt = PendingTransaction::new(tx_hash, self.client.provider())
            .confirmations(self.confirmations)
            .await
            .map_err(|e| Error::WalletError(format!("Falha ao aguardar transação: {}", e)))?
            .ok_or_else(|| Error::WalletError("transação descartada sem recibo".to_string()))?;
        Ok(receipt_from(receipt))
    }
}
