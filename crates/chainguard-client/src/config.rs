use chainguard_core::{error::Result, Error};
use reqwest::Url;
use std::time::Duration;

/// Variável com a URL base dos serviços
pub const ENV_API_URL: &str = "CHAINGUARD_API_URL";
/// Variável com o timeout em segundos
pub const ENV_TIMEOUT_SECS: &str = "CHAINGUARD_TIMEOUT_SECS";
/// Variável com o caminho da listagem de riscos
pub const ENV_TOP_RISKS_PATH: &str = "CHAINGUARD_TOP_RISKS_PATH";

/// Configuração do cliente HTTP
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub endpoint: String,
    pub timeout: Duration,
    pub top_risks_path: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: "http://localhost:8000".to_string(),
            timeout: Duration::from_secs(30),
            top_risks_path: "/api/chainguard/top-risks".to_string(),
        }
    }
}

impl ClientConfig {
    /// Cria um builder para a configuração
    pub fn builder() -> ClientConfigBuilder {
        ClientConfigBuilder::default()
    }

    /// Lê a configuração das variáveis de ambiente, usando os padrões
    /// para as ausentes
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut builder = Self::builder();
        if let Some(url) = lookup(ENV_API_URL) {
            builder = builder.endpoint(url);
        }
        if let Some(raw) = lookup(ENV_TIMEOUT_SECS) {
            let secs: u64 = raw.trim().parse().map_err(|_| {
                Error::ValidationError(format!("{} inválido: {}", ENV_TIMEOUT_SECS, raw))
            })?;
            builder = builder.timeout(Duration::from_secs(secs));
        }
        if let Some(path) = lookup(ENV_TOP_RISKS_PATH) {
            builder = builder.top_risks_path(path);
        }
        builder.build()
    }

    /// Resolve um caminho abaixo da URL base, preservando o prefixo dela
    /// (ex.: `https://host/chainguard` + `/predict`)
    pub fn url_for(&self, path: &str) -> Result<Url> {
        let mut base = Url::parse(&self.endpoint)
            .map_err(|e| Error::ValidationError(format!("endpoint inválido: {}", e)))?;
        if !base.path().ends_with('/') {
            let prefixed = format!("{}/", base.path());
            base.set_path(&prefixed);
        }
        base.join(path.trim_start_matches('/'))
            .map_err(|e| Error::ValidationError(format!("caminho inválido '{}': {}", path, e)))
    }
}

/// Builder para configuração do cliente
#[derive(Debug, Default)]
pub struct ClientConfigBuilder {
    endpoint: Option<String>,
    timeout: Option<Duration>,
    top_risks_path: Option<String>,
}

impl ClientConfigBuilder {
    /// Define a URL base dos serviços
    pub fn endpoint<S: Into<String>>(mut self, endpoint: S) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    /// Define o timeout de cada requisição
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Define o caminho da listagem de riscos
    pub fn top_risks_path<S: Into<String>>(mut self, path: S) -> Self {
        self.top_risks_path = Some(path.into());
        self
    }

    /// Constrói a configuração
    pub fn build(self) -> Result<ClientConfig> {
        let defaults = ClientConfig::default();

        let endpoint = self.endpoint.unwrap_or(defaults.endpoint);
        let parsed = Url::parse(&endpoint)
            .map_err(|e| Error::ValidationError(format!("endpoint inválido '{}': {}", endpoint, e)))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(Error::ValidationError(format!(
                "endpoint deve ser http(s): {}",
                endpoint
            )));
        }

        let timeout = self.timeout.unwrap_or(defaults.timeout);
        if timeout.is_zero() {
            return Err(Error::ValidationError("timeout deve ser maior que zero".to_string()));
        }

        Ok(ClientConfig {
            endpoint,
            timeout,
            top_risks_path: self.top_risks_path.unwrap_or(defaults.top_risks_path),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn defaults() {
        let config = ClientConfig::default();
        assert_eq!(config.endpoint, "http://localhost:8000");
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert_eq!(
            config.url_for("/predict").unwrap().as_str(),
            "http://localhost:8000/predict"
        );
    }

    #[test]
    fn builder_validates_endpoint() {
        assert!(ClientConfig::builder().endpoint("not a url").build().is_err());
        assert!(ClientConfig::builder().endpoint("ftp://host").build().is_err());
        assert!(ClientConfig::builder().timeout(Duration::ZERO).build().is_err());
        let config = ClientConfig::builder()
            .endpoint("https://api.example.com")
            .timeout(Duration::from_secs(5))
            .build()
            .unwrap();
        assert_eq!(config.timeout, Duration::from_secs(5));
    }

    #[test]
    fn reads_from_lookup() {
        let vars: HashMap<&str, &str> = [
            (ENV_API_URL, "http://10.0.0.2:9000"),
            (ENV_TIMEOUT_SECS, "7"),
            (ENV_TOP_RISKS_PATH, "/risks"),
        ]
        .into_iter()
        .collect();
        let config = ClientConfig::from_lookup(|k| vars.get(k).map(|v| v.to_string())).unwrap();
        assert_eq!(config.endpoint, "http://10.0.0.2:9000");
        assert_eq!(config.timeout, Duration::from_secs(7));
        assert_eq!(config.top_risks_path, "/risks");
    }

    #[test]
    fn endpoint_prefix_is_kept() {
        for endpoint in ["https://api.example.com/chainguard/", "https://api.example.com/chainguard"] {
            let config = ClientConfig::builder().endpoint(endpoint).build().unwrap();
            assert_eq!(
                config.url_for("/predict").unwrap().as_str(),
                "https://api.example.com/chainguard/predict"
            );
            assert_eq!(
                config.url_for("/api/chainguard/top-risks").unwrap().as_str(),
                "https://api.example.com/chainguard/api/chainguard/top-risks"
            );
        }
    }

    #[test]
    fn invalid_timeout_from_env() {
        let result = ClientConfig::from_lookup(|k| (k == ENV_TIMEOUT_SECS).then(|| "abc".to_string()));
        assert!(matches!(result, Err(Error::ValidationError(_))));
    }
}
