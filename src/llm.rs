//! Cliente de generación de texto (API compatible con chat-completions).
//!
//! Si la petición lleva herramientas, las llamadas que pida el modelo se
//! ejecutan y sus resultados se le devuelven, hasta `max_steps` rondas.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::agent::ToolError;
use crate::config::LlmConfig;
use crate::http::{HttpError, post_json};
use crate::model::{ChatMessage, Role};
use crate::task::BoxedFuture;

#[derive(Debug, Error)]
pub enum LlmError {
    #[error(transparent)]
    Http(#[from] HttpError),
    #[error("el modelo no devolvió ninguna respuesta")]
    EmptyResponse,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ToolDefinition {
    pub name: &'static str,
    pub description: &'static str,
    pub parameters: serde_json::Value,
}

/// Herramientas que el modelo puede invocar durante una generación.
pub trait ToolExecutor: Send + Sync {
    fn definitions(&self) -> Vec<ToolDefinition>;
    fn invoke(&self, name: &str, arguments: serde_json::Value) -> BoxedFuture<Result<String, ToolError>>;
}

#[derive(Clone, Default)]
pub struct GenerateRequest {
    pub model: String,
    pub prompt: Option<String>,
    pub messages: Vec<ChatMessage>,
    pub system: Option<String>,
    pub tools: Option<Arc<dyn ToolExecutor>>,
    pub temperature: Option<f32>,
    pub max_steps: u32,
}

impl std::fmt::Debug for GenerateRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GenerateRequest")
            .field("model", &self.model)
            .field("prompt", &self.prompt)
            .field("messages", &self.messages.len())
            .field("system", &self.system.is_some())
            .field("tools", &self.tools.is_some())
            .field("temperature", &self.temperature)
            .field("max_steps", &self.max_steps)
            .finish()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GenerateResponse {
    pub text: String,
}

pub trait TextGenerator: Send + Sync {
    fn generate(&self, request: GenerateRequest) -> BoxedFuture<Result<GenerateResponse, LlmError>>;
}

// ---------- Formato de la API ----------

#[derive(Debug, Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    messages: &'a [WireMessage],
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    tools: Vec<WireTool>,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
struct WireMessage {
    role: String,
    #[serde(default)]
    content: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    tool_calls: Vec<WireToolCall>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    tool_call_id: Option<String>,
}

impl WireMessage {
    fn text(role: &str, content: &str) -> Self {
        Self {
            role: role.to_string(),
            content: Some(content.to_string()),
            tool_calls: Vec::new(),
            tool_call_id: None,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
struct WireToolCall {
    id: String,
    #[serde(rename = "type", default = "function_kind")]
    kind: String,
    function: WireFunctionCall,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
struct WireFunctionCall {
    name: String,
    #[serde(default)]
    arguments: String,
}

#[derive(Debug, Serialize)]
struct WireTool {
    #[serde(rename = "type")]
    kind: &'static str,
    function: WireFunction,
}

#[derive(Debug, Serialize)]
struct WireFunction {
    name: &'static str,
    description: &'static str,
    parameters: serde_json::Value,
}

#[derive(Debug, Deserialize)]
struct CompletionResponse {
    #[serde(default)]
    choices: Vec<CompletionChoice>,
}

#[derive(Debug, Deserialize)]
struct CompletionChoice {
    message: WireMessage,
}

fn function_kind() -> String {
    "function".to_string()
}

fn role_name(role: Role) -> &'static str {
    match role {
        Role::User => "user",
        Role::Assistant => "assistant",
    }
}

fn initial_messages(request: &GenerateRequest) -> Vec<WireMessage> {
    let mut messages = Vec::with_capacity(request.messages.len() + 2);
    if let Some(system) = &request.system {
        messages.push(WireMessage::text("system", system));
    }
    for m in &request.messages {
        messages.push(WireMessage::text(role_name(m.role), &m.content));
    }
    if let Some(prompt) = &request.prompt {
        messages.push(WireMessage::text("user", prompt));
    }
    messages
}

fn wire_tools(tools: Option<&Arc<dyn ToolExecutor>>) -> Vec<WireTool> {
    tools
        .map(|t| t.definitions())
        .unwrap_or_default()
        .into_iter()
        .map(|d| WireTool {
            kind: "function",
            function: WireFunction {
                name: d.name,
                description: d.description,
                parameters: d.parameters,
            },
        })
        .collect()
}

fn parse_arguments(raw: &str) -> serde_json::Value {
    if raw.trim().is_empty() {
        return serde_json::Value::Object(Default::default());
    }
    serde_json::from_str(raw).unwrap_or(serde_json::Value::Object(Default::default()))
}

/// Implementación HTTP contra un endpoint compatible con OpenAI.
#[derive(Clone, Debug)]
pub struct HttpTextGenerator {
    config: LlmConfig,
}

impl HttpTextGenerator {
    pub fn new(config: LlmConfig) -> Self {
        Self { config }
    }

    pub fn model(&self) -> &str {
        &self.config.model
    }
}

async fn run_completion(
    config: LlmConfig,
    request: GenerateRequest,
) -> Result<GenerateResponse, LlmError> {
    let model = if request.model.is_empty() {
        config.model.clone()
    } else {
        request.model.clone()
    };
    let max_steps = request.max_steps.max(1);
    let mut messages = initial_messages(&request);

    for step in 1..=max_steps {
        let body = CompletionRequest {
            model: &model,
            messages: &messages,
            temperature: request.temperature,
            tools: wire_tools(request.tools.as_ref()),
        };
        let response: CompletionResponse =
            post_json(&config.endpoint, config.api_key.as_deref(), &body).await?;
        let message = response
            .choices
            .into_iter()
            .next()
            .map(|c| c.message)
            .ok_or(LlmError::EmptyResponse)?;

        let tools = match &request.tools {
            Some(tools) if !message.tool_calls.is_empty() && step < max_steps => tools,
            _ => {
                return Ok(GenerateResponse {
                    text: message.content.unwrap_or_default(),
                });
            }
        };

        let calls = message.tool_calls.clone();
        messages.push(message);
        for call in calls {
            log::info!("Herramienta solicitada por el modelo: {}", call.function.name);
            let output = match tools
                .invoke(&call.function.name, parse_arguments(&call.function.arguments))
                .await
            {
                Ok(output) => output,
                Err(err) => {
                    log::warn!("Herramienta {} falló: {err}", call.function.name);
                    format!("error: {err}")
                }
            };
            messages.push(WireMessage {
                role: "tool".to_string(),
                content: Some(output),
                tool_calls: Vec::new(),
                tool_call_id: Some(call.id),
            });
        }
    }

    Ok(GenerateResponse {
        text: String::new(),
    })
}

impl TextGenerator for HttpTextGenerator {
    fn generate(&self, request: GenerateRequest) -> BoxedFuture<Result<GenerateResponse, LlmError>> {
        let config = self.config.clone();
        log::debug!("Generando con {} ({:?})", config.endpoint, request);
        Box::pin(run_completion(config, request))
    }
}

#[cfg(test)]
pub mod testing {
    //! Generador falso para los tests de quiz y tutor.

    use super::*;
    use std::sync::Mutex;

    pub struct ScriptedGenerator {
        replies: Mutex<Vec<Result<String, ()>>>,
        pub seen: Mutex<Vec<GenerateRequest>>,
    }

    impl ScriptedGenerator {
        pub fn new(replies: Vec<Result<String, ()>>) -> Self {
            Self {
                replies: Mutex::new(replies),
                seen: Mutex::new(Vec::new()),
            }
        }
    }

    impl TextGenerator for ScriptedGenerator {
        fn generate(
            &self,
            request: GenerateRequest,
        ) -> BoxedFuture<Result<GenerateResponse, LlmError>> {
            self.seen.lock().unwrap().push(request);
            let mut replies = self.replies.lock().unwrap();
            let reply = if replies.is_empty() {
                Err(())
            } else {
                replies.remove(0)
            };
            Box::pin(async move {
                reply
                    .map(|text| GenerateResponse { text })
                    .map_err(|_| LlmError::EmptyResponse)
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct NoTools;

    impl ToolExecutor for NoTools {
        fn definitions(&self) -> Vec<ToolDefinition> {
            vec![ToolDefinition {
                name: "get_wallet_address",
                description: "d",
                parameters: serde_json::json!({"type": "object", "properties": {}}),
            }]
        }

        fn invoke(&self, _: &str, _: serde_json::Value) -> BoxedFuture<Result<String, ToolError>> {
            Box::pin(async { Ok(String::new()) })
        }
    }

    #[test]
    fn system_prompt_goes_first_and_prompt_last() {
        let request = GenerateRequest {
            model: "m".into(),
            prompt: Some("genera".into()),
            messages: vec![ChatMessage::assistant("hola"), ChatMessage::user("¿qué es PoH?")],
            system: Some("eres tutor".into()),
            ..Default::default()
        };
        let roles: Vec<String> = initial_messages(&request)
            .into_iter()
            .map(|m| m.role)
            .collect();
        assert_eq!(roles, ["system", "assistant", "user", "user"]);
    }

    #[test]
    fn transcript_only_carries_user_and_assistant_turns() {
        assert_eq!(role_name(Role::User), "user");
        assert_eq!(role_name(Role::Assistant), "assistant");
        // El prompt de sistema viaja aparte, nunca como mensaje del historial.
        let raw = r#"{"role":"system","content":"x"}"#;
        assert!(serde_json::from_str::<ChatMessage>(raw).is_err());
    }

    #[test]
    fn tools_are_serialized_as_functions() {
        let tools: Arc<dyn ToolExecutor> = Arc::new(NoTools);
        let body = CompletionRequest {
            model: "m",
            messages: &[],
            temperature: None,
            tools: wire_tools(Some(&tools)),
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["tools"][0]["type"], "function");
        assert_eq!(json["tools"][0]["function"]["name"], "get_wallet_address");
        assert!(json.get("temperature").is_none());
    }

    #[test]
    fn parses_tool_calls_from_response() {
        let raw = r#"{"choices":[{"message":{"role":"assistant","content":null,
            "tool_calls":[{"id":"c1","type":"function","function":{"name":"get_balance","arguments":"{}"}}]}}]}"#;
        let response: CompletionResponse = serde_json::from_str(raw).unwrap();
        let message = &response.choices[0].message;
        assert_eq!(message.content, None);
        assert_eq!(message.tool_calls[0].function.name, "get_balance");
    }

    #[test]
    fn malformed_arguments_become_empty_object() {
        assert_eq!(parse_arguments("no json"), serde_json::json!({}));
        assert_eq!(parse_arguments(""), serde_json::json!({}));
        assert_eq!(parse_arguments(r#"{"amount_sol":1}"#)["amount_sol"], 1);
    }
}
