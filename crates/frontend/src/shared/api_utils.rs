//! HTTP client for the FarmaGestión REST backend.
//!
//! Every request goes through [`dispatch`]: JSON content type, 10 s timeout via
//! `AbortController`, and failures are logged before being returned.

use contracts::shared::validation::ValidationError;
use gloo_net::http::{Request, RequestBuilder, Response};
use gloo_timers::callback::Timeout;
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;
use web_sys::AbortController;

pub const DEFAULT_API_URL: &str = "http://127.0.0.1:8000";
pub const REQUEST_TIMEOUT_MS: u32 = 10_000;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("No se pudo conectar con el servidor: {0}")]
    Network(String),
    #[error("El servidor no respondió en {} segundos", .0 / 1000)]
    Timeout(u32),
    #[error("Error del servidor ({status}) en {url}")]
    Status { status: u16, url: String, body: String },
    #[error("Respuesta inválida del servidor: {0}")]
    Decode(String),
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl ApiError {
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Base URL of the backend, taken from `FARMA_API_URL` at build time.
pub fn api_base() -> String {
    option_env!("FARMA_API_URL")
        .map(str::trim)
        .filter(|url| !url.is_empty())
        .unwrap_or(DEFAULT_API_URL)
        .trim_end_matches('/')
        .to_string()
}

/// Joins base and path with exactly one `/` between them. The path keeps its
/// own trailing slash, since the backend distinguishes `/items/` from `/items`.
pub fn join_url(base: &str, path: &str) -> String {
    if path.starts_with("http://") || path.starts_with("https://") {
        return path.to_string();
    }
    let base = base.trim_end_matches('/');
    let path = path.trim_start_matches('/');
    format!("{}/{}", base, path)
}

pub fn api_url(path: &str) -> String {
    join_url(&api_base(), path)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Method {
    Get,
    Post,
    Put,
    Delete,
}

fn builder(method: Method, url: &str) -> RequestBuilder {
    let builder = match method {
        Method::Get => Request::get(url),
        Method::Post => Request::post(url),
        Method::Put => Request::put(url),
        Method::Delete => Request::delete(url),
    };
    builder
        .header("Content-Type", "application/json")
        .header("Accept", "application/json")
}

async fn dispatch<B>(method: Method, path: &str, body: Option<&B>) -> Result<Response, ApiError>
where
    B: Serialize + ?Sized,
{
    let url = api_url(path);
    let controller = AbortController::new().ok();
    let signal = controller.as_ref().map(|c| c.signal());
    // Dropping the timer cancels it, so it lives until the response arrives.
    let _timer = controller.map(|c| Timeout::new(REQUEST_TIMEOUT_MS, move || c.abort()));

    let request = builder(method, &url).abort_signal(signal.as_ref());
    let sent = match body {
        Some(body) => match request.json(body) {
            Ok(req) => req.send().await,
            Err(e) => return Err(ApiError::Decode(format!("No se pudo serializar la petición: {}", e))),
        },
        None => request.send().await,
    };

    let response = match sent {
        Ok(response) => response,
        Err(e) => {
            if signal.as_ref().map(|s| s.aborted()).unwrap_or(false) {
                log::error!("❌ Tiempo de espera agotado: {:?} {}", method, url);
                return Err(ApiError::Timeout(REQUEST_TIMEOUT_MS));
            }
            log::error!("❌ Error de conexión con el backend: {}", e);
            return Err(ApiError::Network(e.to_string()));
        }
    };

    if !response.ok() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        log::error!("❌ [{}] {}", status, url);
        if !body.is_empty() {
            log::error!("Detalles: {}", body);
        }
        return Err(ApiError::Status { status, url, body });
    }

    Ok(response)
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let url = response.url();
    response.json::<T>().await.map_err(|e| {
        log::error!("❌ Respuesta inválida de {}: {}", url, e);
        ApiError::Decode(e.to_string())
    })
}

pub async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    let response = dispatch::<()>(Method::Get, path, None).await?;
    decode(response).await
}

pub async fn post_json<B, T>(path: &str, body: &B) -> Result<T, ApiError>
where
    B: Serialize + ?Sized,
    T: DeserializeOwned,
{
    let response = dispatch(Method::Post, path, Some(body)).await?;
    decode(response).await
}

pub async fn put_json<B, T>(path: &str, body: &B) -> Result<T, ApiError>
where
    B: Serialize + ?Sized,
    T: DeserializeOwned,
{
    let response = dispatch(Method::Put, path, Some(body)).await?;
    decode(response).await
}

/// POST whose response body is ignored.
pub async fn post<B: Serialize + ?Sized>(path: &str, body: &B) -> Result<(), ApiError> {
    dispatch(Method::Post, path, Some(body)).await.map(|_| ())
}

/// PUT whose response body is ignored.
pub async fn put<B: Serialize + ?Sized>(path: &str, body: &B) -> Result<(), ApiError> {
    dispatch(Method::Put, path, Some(body)).await.map(|_| ())
}

pub async fn delete(path: &str) -> Result<(), ApiError> {
    dispatch::<()>(Method::Delete, path, None).await.map(|_| ())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn join_url_normalizes_slashes() {
        assert_eq!(join_url("http://127.0.0.1:8000/", "/items/"), "http://127.0.0.1:8000/items/");
        assert_eq!(join_url("http://127.0.0.1:8000", "lotes"), "http://127.0.0.1:8000/lotes");
        assert_eq!(
            join_url("http://api", "https://other/host"),
            "https://other/host"
        );
    }

    #[test]
    fn default_base_has_no_trailing_slash() {
        assert!(!api_base().ends_with('/'));
    }

    #[test]
    fn error_messages_are_user_facing() {
        assert_eq!(
            ApiError::Timeout(REQUEST_TIMEOUT_MS).to_string(),
            "El servidor no respondió en 10 segundos"
        );
        let err = ApiError::Status {
            status: 404,
            url: "http://127.0.0.1:8000/comprobantes/9".into(),
            body: String::new(),
        };
        assert_eq!(err.status(), Some(404));
        assert_eq!(err.to_string(), "Error del servidor (404) en http://127.0.0.1:8000/comprobantes/9");
    }
}
