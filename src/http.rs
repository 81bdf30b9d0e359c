//! POST de JSON compartido por el cliente RPC y el del modelo.
//!
//! Nativo: `reqwest` bloqueante (siempre se llama desde un hilo de trabajo).
//! WASM: `fetch` del navegador.

use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum HttpError {
    #[error("no se pudo serializar la petición: {0}")]
    Encode(String),
    #[error("error conectando con {url}: {message}")]
    Transport { url: String, message: String },
    #[error("{url} devolvió HTTP {status}{}", body_suffix(.body))]
    Status {
        url: String,
        status: u16,
        body: String,
    },
    #[error("respuesta JSON inválida: {0}")]
    Decode(String),
}

fn body_suffix(body: &str) -> String {
    if body.trim().is_empty() {
        String::new()
    } else {
        format!(". Body: {}", body.trim())
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn post_json<B, R>(url: &str, bearer: Option<&str>, body: &B) -> Result<R, HttpError>
where
    B: Serialize + ?Sized,
    R: DeserializeOwned,
{
    let client = reqwest::blocking::Client::new();
    let mut request = client.post(url).json(body);
    if let Some(token) = bearer {
        request = request.bearer_auth(token);
    }

    let response = request.send().map_err(|err| HttpError::Transport {
        url: url.to_string(),
        message: err.to_string(),
    })?;

    let status = response.status();
    let text = response.text().map_err(|err| HttpError::Transport {
        url: url.to_string(),
        message: err.to_string(),
    })?;

    if !status.is_success() {
        return Err(HttpError::Status {
            url: url.to_string(),
            status: status.as_u16(),
            body: text,
        });
    }

    serde_json::from_str(&text).map_err(|err| HttpError::Decode(err.to_string()))
}

#[cfg(target_arch = "wasm32")]
pub async fn post_json<B, R>(url: &str, bearer: Option<&str>, body: &B) -> Result<R, HttpError>
where
    B: Serialize + ?Sized,
    R: DeserializeOwned,
{
    use wasm_bindgen::JsCast;
    use wasm_bindgen::JsValue;
    use wasm_bindgen_futures::JsFuture;
    use web_sys::{Request, RequestInit, RequestMode, Response};

    let transport = |message: String| HttpError::Transport {
        url: url.to_string(),
        message,
    };

    let payload = serde_json::to_string(body).map_err(|err| HttpError::Encode(err.to_string()))?;

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::Cors);
    opts.set_body(&JsValue::from_str(&payload));

    let request = Request::new_with_str_and_init(url, &opts)
        .map_err(|err| transport(format!("no se pudo crear el request: {err:?}")))?;
    let headers = request.headers();
    headers
        .set("Content-Type", "application/json")
        .map_err(|err| transport(format!("no se pudo asignar headers: {err:?}")))?;
    if let Some(token) = bearer {
        headers
            .set("Authorization", &format!("Bearer {token}"))
            .map_err(|err| transport(format!("no se pudo asignar headers: {err:?}")))?;
    }

    let window = web_sys::window().ok_or_else(|| transport("no existe window".into()))?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|err| transport(format!("fetch falló: {err:?}")))?;
    let response: Response = resp_value
        .dyn_into()
        .map_err(|_| transport("la respuesta no es un Response".into()))?;

    let promise = response
        .text()
        .map_err(|err| transport(format!("no se pudo leer el body: {err:?}")))?;
    let text = JsFuture::from(promise)
        .await
        .ok()
        .and_then(|v| v.as_string())
        .ok_or_else(|| transport("el body no es texto".into()))?;

    if !response.ok() {
        return Err(HttpError::Status {
            url: url.to_string(),
            status: response.status(),
            body: text,
        });
    }

    serde_json::from_str(&text).map_err(|err| HttpError::Decode(err.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_error_mentions_body_only_when_present() {
        let with_body = HttpError::Status {
            url: "http://x".into(),
            status: 500,
            body: " boom ".into(),
        };
        assert_eq!(with_body.to_string(), "http://x devolvió HTTP 500. Body: boom");

        let empty = HttpError::Status {
            url: "http://x".into(),
            status: 404,
            body: String::new(),
        };
        assert_eq!(empty.to_string(), "http://x devolvió HTTP 404");
    }
}
