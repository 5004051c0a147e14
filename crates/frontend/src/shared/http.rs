//! Ejecutor HTTP compartido por los orquestadores de pantalla.
//!
//! Emite exactamente una llamada por invocación, sin reintentos: un fallo es
//! terminal para ese intento y el operador debe volver a enviar. Todo fallo
//! se clasifica en una de tres categorías excluyentes y exhaustivas.

use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{AbortController, Request, RequestInit, RequestMode, Response};

use super::api_utils::api_base;

/// Límite de espera de una llamada. Las consultas cortas usan límites de
/// segundos; el ETL por rango tarda minutos porque el backend recorre cada
/// periodo secuencialmente.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestTimeout {
    /// Sin límite explícito: aplica el del navegador.
    Default,
    Millis(u32),
}

/// Fallo clasificado de una llamada al backend. El mensaje se muestra al
/// operador tal cual.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiFailure {
    /// El servidor respondió con un estado no-2xx.
    #[error("{0}")]
    ServerRejected(String),

    /// La petición salió pero no llegó respuesta: red caída, conexión
    /// rechazada o timeout.
    #[error("{0}")]
    Unreachable(String),

    /// La petición no se pudo construir o despachar, o la respuesta 2xx no
    /// tenía la forma esperada.
    #[error("{0}")]
    ClientError(String),
}

/// Extrae el mensaje de un cuerpo de error estructurado: `detail` primero,
/// `message` después, y un genérico con el estado si no hay nada legible.
fn rejection_message(status: u16, body: &str) -> String {
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
        for key in ["detail", "message"] {
            if let Some(text) = value.get(key).and_then(|v| v.as_str()) {
                return text.to_string();
            }
        }
    }
    format!("Error HTTP {}", status)
}

fn unreachable_message(base: &str) -> String {
    format!(
        "No se pudo conectar con el servidor backend en {}. Inicia el backend y vuelve a intentarlo.",
        base
    )
}

/// Cliente del backend de integración. El origen se inyecta al construirlo;
/// ningún punto de llamada escribe URLs absolutas.
#[derive(Debug, Clone)]
pub struct ApiClient {
    base: String,
}

impl ApiClient {
    pub fn new(base: impl Into<String>) -> Self {
        let base = base.into();
        Self {
            base: base.trim_end_matches('/').to_string(),
        }
    }

    /// Cliente apuntando al backend estándar: mismo host que la página,
    /// puerto 8000.
    pub fn from_window() -> Self {
        Self::new(api_base())
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }

    pub async fn get_json<T>(&self, path: &str, timeout: RequestTimeout) -> Result<T, ApiFailure>
    where
        T: DeserializeOwned,
    {
        self.execute("GET", path, None, timeout).await
    }

    pub async fn post_json<B, T>(
        &self,
        path: &str,
        body: &B,
        timeout: RequestTimeout,
    ) -> Result<T, ApiFailure>
    where
        B: Serialize,
        T: DeserializeOwned,
    {
        let json = serde_json::to_string(body).map_err(|e| {
            ApiFailure::ClientError(format!("No se pudo serializar la petición: {}", e))
        })?;
        self.execute("POST", path, Some(json), timeout).await
    }

    async fn execute<T>(
        &self,
        method: &str,
        path: &str,
        body: Option<String>,
        timeout: RequestTimeout,
    ) -> Result<T, ApiFailure>
    where
        T: DeserializeOwned,
    {
        let opts = RequestInit::new();
        opts.set_method(method);
        opts.set_mode(RequestMode::Cors);

        // El timeout se materializa como un AbortController armado con un
        // temporizador; si la respuesta llega antes, el drop lo desarma.
        let mut abort_timer: Option<gloo_timers::callback::Timeout> = None;
        if let RequestTimeout::Millis(ms) = timeout {
            let controller = AbortController::new().map_err(|e| {
                ApiFailure::ClientError(format!("No se pudo crear el AbortController: {:?}", e))
            })?;
            opts.set_signal(Some(&controller.signal()));
            abort_timer = Some(gloo_timers::callback::Timeout::new(ms, move || {
                controller.abort()
            }));
        }

        if let Some(json) = &body {
            opts.set_body(&JsValue::from_str(json));
        }

        let request = Request::new_with_str_and_init(&self.url(path), &opts).map_err(|e| {
            ApiFailure::ClientError(format!("No se pudo crear la petición: {:?}", e))
        })?;
        if body.is_some() {
            request
                .headers()
                .set("Content-Type", "application/json")
                .map_err(|e| {
                    ApiFailure::ClientError(format!("No se pudo fijar la cabecera: {:?}", e))
                })?;
        }

        let window = web_sys::window()
            .ok_or_else(|| ApiFailure::ClientError("No window object".to_string()))?;

        let response_value = JsFuture::from(window.fetch_with_request(&request))
            .await
            .map_err(|_| ApiFailure::Unreachable(unreachable_message(&self.base)))?;
        drop(abort_timer);

        let response: Response = response_value
            .dyn_into()
            .map_err(|_| ApiFailure::ClientError("Not a Response".to_string()))?;

        let status = response.status();
        let text = response_text(&response).await?;

        if !response.ok() {
            return Err(ApiFailure::ServerRejected(rejection_message(status, &text)));
        }

        serde_json::from_str(&text).map_err(|e| {
            ApiFailure::ClientError(format!("Respuesta inesperada del servidor: {}", e))
        })
    }
}

async fn response_text(response: &Response) -> Result<String, ApiFailure> {
    let promise = response
        .text()
        .map_err(|e| ApiFailure::ClientError(format!("No se pudo leer la respuesta: {:?}", e)))?;
    let value = JsFuture::from(promise)
        .await
        .map_err(|e| ApiFailure::ClientError(format!("No se pudo leer la respuesta: {:?}", e)))?;
    Ok(value.as_string().unwrap_or_default())
}
