use chainguard_core::{error::Result, traits::WalletProvider};
use ethereum_types::Address;
use parking_lot::RwLock;
use std::sync::Arc;
use tracing::info;

/// Estado da carteira conectada, compartilhado entre os componentes.
///
/// Criado uma vez pela aplicação e injetado em cada gate via `Arc`.
pub struct WalletSession<W> {
    provider: Arc<W>,
    account: RwLock<Option<Address>>,
}

impl<W: WalletProvider> WalletSession<W> {
    pub fn new(provider: W) -> Self {
        Self::from_arc(Arc::new(provider))
    }

    pub fn from_arc(provider: Arc<W>) -> Self {
        Self {
            provider,
            account: RwLock::new(None),
        }
    }

    /// Consulta a conta atual no provedor e a memoriza
    pub async fn connect(&self) -> Result<Address> {
        let account = self.provider.current_account().await?;
        *self.account.write() = Some(account);
        info!(account = ?account, "carteira conectada");
        Ok(account)
    }

    pub fn disconnect(&self) {
        if self.account.write().take().is_some() {
            info!("carteira desconectada");
        }
    }

    pub fn account(&self) -> Option<Address> {
        *self.account.read()
    }

    pub fn is_connected(&self) -> bool {
        self.account.read().is_some()
    }

    pub fn provider(&self) -> &W {
        &self.provider
    }
}
