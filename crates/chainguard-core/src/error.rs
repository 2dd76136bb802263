use thiserror::Error;

/// Erros comuns da biblioteca ChainGuard
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Campo obrigatório ausente ou inválido; nenhuma chamada de rede é feita
    #[error("Erro de validação: {0}")]
    ValidationError(String),

    /// Falha ao consultar inferência, reputação ou listagem
    #[error("Erro de rede: {0}")]
    NetworkError(String),

    /// Recurso não encontrado (ex.: endereço sem perfil)
    #[error("Não encontrado: {0}")]
    NotFound(String),

    /// Falha ao estimar gas, taxa ou nonce
    #[error("Erro de estimativa: {0}")]
    EstimationError(String),

    /// Resposta malformada
    #[error("Erro de decodificação: {0}")]
    DecodeError(String),

    /// Falha ao enviar ou confirmar a transferência pela carteira
    #[error("Erro de carteira: {0}")]
    WalletError(String),

    /// Operação não permitida no estado atual
    #[error("Estado inválido: {0}")]
    InvalidState(String),

    /// Erro genérico
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Indica o estado vazio de "endereço desconhecido", que não é uma falha
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound(_))
    }

    /// Indica se o usuário pode tentar novamente a mesma operação
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            Error::NetworkError(_) | Error::DecodeError(_) | Error::WalletError(_)
        )
    }

    /// Texto de status exibido na fronteira do componente
    pub fn status_message(&self) -> String {
        match self {
            Error::NotFound(what) => format!("Nenhum perfil encontrado para {}", what),
            other => format!("Erro: {}", other),
        }
    }
}

/// Tipo de resultado usado em toda a biblioteca
pub type Result<T> = std::result::Result<T, Error>;
