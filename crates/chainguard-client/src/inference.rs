use async_trait::async_trait;
use chainguard_core::{
    error::Result, traits::InferenceService, ApiErrorBody, Error, InferenceResult, PredictRequest,
    PredictResponse, TopRiskRecord, WalletProfile,
};
use chainguard_risk::sample_top_risks;
use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::config::ClientConfig;

/// Corpo 2xx de `/predict`: predição ou falha interna do backend
#[derive(Deserialize)]
#[serde(untagged)]
enum PredictReply {
    Prediction(PredictResponse),
    Failure { error: String },
}

/// Cliente para os serviços HTTP do ChainGuard
#[derive(Debug, Clone)]
pub struct InferenceClient {
    config: ClientConfig,
    client: Client,
}

impl InferenceClient {
    /// Cria um novo cliente com o timeout configurado
    pub fn new(config: ClientConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| Error::Other(format!("Falha ao criar cliente HTTP: {}", e)))?;
        Ok(Self { config, client })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Envia a transação para `POST /predict`
    pub async fn predict_raw(&self, request: &PredictRequest) -> Result<PredictResponse> {
        let url = self.config.url_for("/predict")?;
        debug!(%url, nonce = request.nonce, "enviando transação para inferência");

        let resp = self
            .client
            .post(url)
            .json(request)
            .send()
            .await
            .map_err(|e| network_error("Falha ao consultar inferência", e))?;

        let resp = ensure_success(resp).await?;
        let body = resp
            .text()
            .await
            .map_err(|e| network_error("Falha ao ler resposta da inferência", e))?;

        match serde_json::from_str::<PredictReply>(&body) {
            Ok(PredictReply::Prediction(prediction)) => Ok(prediction),
            Ok(PredictReply::Failure { error }) => Err(Error::NetworkError(format!(
                "Serviço de inferência falhou: {}",
                error
            ))),
            Err(e) => Err(Error::DecodeError(format!(
                "Resposta de inferência malformada: {}",
                e
            ))),
        }
    }

    /// Consulta o perfil de reputação de um endereço.
    ///
    /// Endereço desconhecido retorna [`Error::NotFound`]. Só aceita caracteres
    /// alfanuméricos, sem nenhuma requisição para entradas inválidas.
    pub async fn wallet_profile(&self, address: &str) -> Result<WalletProfile> {
        let address = address.trim();
        if address.is_empty() {
            return Err(Error::ValidationError("endereço é obrigatório".to_string()));
        }
        if !address.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(Error::ValidationError(format!("endereço inválido: {}", address)));
        }

        let mut url = self.config.url_for("/wallet/")?;
        url.path_segments_mut()
            .map_err(|_| Error::ValidationError("endpoint não aceita caminhos".to_string()))?
            .pop_if_empty()
            .push(address);
        debug!(%url, "consultando reputação");

        let resp = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| network_error("Falha ao consultar reputação", e))?;

        if resp.status() == StatusCode::NOT_FOUND {
            return Err(Error::NotFound(address.to_string()));
        }

        decode_json(ensure_success(resp).await?, "perfil de reputação").await
    }

    /// Obtém a listagem das transações mais arriscadas
    pub async fn top_risks(&self) -> Result<Vec<TopRiskRecord>> {
        let url = self.config.url_for(&self.config.top_risks_path)?;
        debug!(%url, "consultando listagem de riscos");

        let resp = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| network_error("Falha ao consultar listagem de riscos", e))?;

        decode_json(ensure_success(resp).await?, "listagem de riscos").await
    }

    /// Listagem de riscos, ou a amostra embutida se o serviço falhar
    pub async fn top_risks_or_sample(&self) -> Vec<TopRiskRecord> {
        match self.top_risks().await {
            Ok(records) => records,
            Err(e) => {
                warn!(error = %e, "listagem indisponível, usando amostra");
                sample_top_risks()
            }
        }
    }
}

#[async_trait]
impl InferenceService for InferenceClient {
    async fn predict(&self, request: &PredictRequest) -> Result<InferenceResult> {
        self.predict_raw(request).await?.to_inference()
    }
}

fn network_error(context: &str, e: reqwest::Error) -> Error {
    if e.is_timeout() {
        Error::NetworkError(format!("{}: tempo esgotado", context))
    } else {
        Error::NetworkError(format!("{}: {}", context, e))
    }
}

/// Converte respostas não-2xx em erro, usando `detail` quando presente
async fn ensure_success(resp: Response) -> Result<Response> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }

    let body = resp.text().await.unwrap_or_default();
    let detail = serde_json::from_str::<ApiErrorBody>(&body)
        .map(|b| b.detail)
        .unwrap_or(body);

    Err(Error::NetworkError(if detail.is_empty() {
        format!("HTTP {}", status)
    } else {
        format!("HTTP {}: {}", status, detail)
    }))
}

async fn decode_json<T: DeserializeOwned>(resp: Response, what: &str) -> Result<T> {
    let body = resp
        .text()
        .await
        .map_err(|e| network_error(&format!("Falha ao ler {}", what), e))?;
    serde_json::from_str(&body)
        .map_err(|e| Error::DecodeError(format!("{} malformado: {}", what, e)))
}
