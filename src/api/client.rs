// src/api/client.rs

use reqwest::{Method, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::time::Duration;
use thiserror::Error;

// Falhas de transporte e de protocolo ao falar com a API da padaria.
// O dashboard nunca vê essas variantes: para ele, qualquer uma vira
// "fonte indisponível". Os handlers de CRUD as traduzem em status HTTP.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Tempo limite excedido. O servidor está demorando para responder.")]
    Timeout,

    #[error("Não foi possível conectar ao servidor.")]
    Conexao(#[source] reqwest::Error),

    #[error("Erro HTTP: {0}")]
    Status(StatusCode),

    #[error("Resposta do servidor sem corpo ou com JSON inválido.")]
    RespostaInvalida,
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            FetchError::Timeout
        } else if let Some(status) = err.status() {
            FetchError::Status(status)
        } else {
            FetchError::Conexao(err)
        }
    }
}

// O cliente JSON-sobre-HTTP que todos os serviços compartilham.
// Cada requisição tem seu próprio prazo; não há retry nem fila.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self {
            http,
            base_url: base_url.into(),
        })
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url, endpoint)
    }

    /// GET que espera um corpo JSON do tipo `T`.
    pub async fn get<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T, FetchError> {
        let resposta = self.http.get(self.url(endpoint)).send().await?;
        let resposta = checar_status(resposta)?;

        ler_corpo(resposta).await?.ok_or(FetchError::RespostaInvalida)
    }

    /// POST com corpo JSON. `Ok(None)` quando o backend responde 2xx sem corpo.
    pub async fn post<B, T>(&self, endpoint: &str, corpo: &B) -> Result<Option<T>, FetchError>
    where
        B: Serialize,
        T: DeserializeOwned,
    {
        self.enviar(Method::POST, endpoint, corpo).await
    }

    /// PUT com corpo JSON, mesma convenção do POST.
    pub async fn put<B, T>(&self, endpoint: &str, corpo: &B) -> Result<Option<T>, FetchError>
    where
        B: Serialize,
        T: DeserializeOwned,
    {
        self.enviar(Method::PUT, endpoint, corpo).await
    }

    /// DELETE; qualquer 2xx conta como sucesso, com ou sem corpo.
    pub async fn delete(&self, endpoint: &str) -> Result<(), FetchError> {
        let resposta = self.http.delete(self.url(endpoint)).send().await?;
        checar_status(resposta)?;

        Ok(())
    }

    async fn enviar<B, T>(
        &self,
        metodo: Method,
        endpoint: &str,
        corpo: &B,
    ) -> Result<Option<T>, FetchError>
    where
        B: Serialize,
        T: DeserializeOwned,
    {
        let resposta = self
            .http
            .request(metodo, self.url(endpoint))
            .json(corpo)
            .send()
            .await?;
        let resposta = checar_status(resposta)?;

        ler_corpo(resposta).await
    }
}

fn checar_status(resposta: reqwest::Response) -> Result<reqwest::Response, FetchError> {
    let status = resposta.status();
    if status.is_success() {
        Ok(resposta)
    } else {
        Err(FetchError::Status(status))
    }
}

// 204 e corpo em branco são sucesso sem dados, não erro.
async fn ler_corpo<T: DeserializeOwned>(
    resposta: reqwest::Response,
) -> Result<Option<T>, FetchError> {
    if resposta.status() == StatusCode::NO_CONTENT {
        return Ok(None);
    }

    let texto = resposta.text().await?;
    if texto.trim().is_empty() {
        return Ok(None);
    }

    serde_json::from_str(&texto)
        .map(Some)
        .map_err(|_| FetchError::RespostaInvalida)
}
