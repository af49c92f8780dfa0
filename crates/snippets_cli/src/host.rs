//! Flow Launcher JSON-RPC adapter.
//!
//! # Responsibility
//! - Decode plugin requests (`query`, `context_menu`, `save`, `copy`, `delete`).
//! - Encode resolver results in the launcher's result shape.
//! - Route requests to the core resolver and executor.
//!
//! # Invariants
//! - Listing requests never fail because of the store; the resolver owns that boundary.
//! - Save/delete failures are returned so the process can exit non-zero.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use snippets_core::{
    ActionDescriptor, ActionExecutor, ClipboardPort, PersistenceError, QueryResolver, ResultItem,
    SnippetContext, SnippetRepository, SnippetsConfig,
};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Raw request as sent by the launcher.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RpcRequest {
    pub method: String,
    #[serde(default)]
    pub parameters: Vec<Value>,
}

/// Action attached to a result row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RpcAction {
    pub method: String,
    pub parameters: Vec<String>,
}

/// One result row in the launcher's wire format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RpcResultItem {
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "SubTitle")]
    pub subtitle: String,
    #[serde(rename = "IcoPath")]
    pub icon_path: String,
    #[serde(rename = "ContextData", skip_serializing_if = "Option::is_none")]
    pub context_data: Option<[String; 2]>,
    #[serde(rename = "JsonRPCAction", skip_serializing_if = "Option::is_none")]
    pub action: Option<RpcAction>,
}

/// Response envelope for listing requests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RpcResponse {
    pub result: Vec<RpcResultItem>,
}

impl RpcResponse {
    pub fn from_items(items: Vec<ResultItem>) -> Self {
        Self {
            result: items.into_iter().map(to_rpc_item).collect(),
        }
    }
}

/// Decoded host request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostRequest {
    Query(String),
    ContextMenu(SnippetContext),
    Execute(ActionDescriptor),
}

/// Malformed or unsupported request.
#[derive(Debug)]
pub enum HostError {
    InvalidJson(serde_json::Error),
    UnknownMethod(String),
    InvalidParameters {
        method: &'static str,
        expected: &'static str,
    },
}

impl Display for HostError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidJson(_) => write!(f, "invalid JSON-RPC request"),
            Self::UnknownMethod(method) => write!(f, "unknown method `{method}`"),
            Self::InvalidParameters { method, expected } => {
                write!(f, "invalid parameters for `{method}`: expected {expected}")
            }
        }
    }
}

impl Error for HostError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidJson(err) => Some(err),
            _ => None,
        }
    }
}

/// Parses a JSON-RPC request string.
pub fn parse_request(raw: &str) -> Result<HostRequest, HostError> {
    let request: RpcRequest = serde_json::from_str(raw).map_err(HostError::InvalidJson)?;
    decode_request(&request)
}

/// Maps a raw request onto a host request.
pub fn decode_request(request: &RpcRequest) -> Result<HostRequest, HostError> {
    let params = request.parameters.as_slice();
    match request.method.as_str() {
        "query" => match params {
            [] => Ok(HostRequest::Query(String::new())),
            [Value::String(text), ..] => Ok(HostRequest::Query(text.clone())),
            _ => Err(invalid("query", "[text]")),
        },
        "context_menu" => decode_context(params)
            .map(HostRequest::ContextMenu)
            .ok_or_else(|| invalid("context_menu", "[[key, value]]")),
        "save" => match params {
            [Value::String(key), Value::String(value), ..] => {
                Ok(HostRequest::Execute(ActionDescriptor::Save {
                    key: key.clone(),
                    value: value.clone(),
                }))
            }
            _ => Err(invalid("save", "[key, value]")),
        },
        "copy" => match params {
            [Value::String(value), ..] => Ok(HostRequest::Execute(ActionDescriptor::Copy {
                value: value.clone(),
            })),
            _ => Err(invalid("copy", "[value]")),
        },
        "delete" => match params {
            [Value::String(key), ..] => Ok(HostRequest::Execute(ActionDescriptor::Delete {
                key: key.clone(),
            })),
            _ => Err(invalid("delete", "[key]")),
        },
        other => Err(HostError::UnknownMethod(other.to_string())),
    }
}

/// Encodes an action descriptor as a positional JSON-RPC action.
pub fn to_rpc_action(action: &ActionDescriptor) -> RpcAction {
    let parameters = match action {
        ActionDescriptor::Save { key, value } => vec![key.clone(), value.clone()],
        ActionDescriptor::Copy { value } => vec![value.clone()],
        ActionDescriptor::Delete { key } => vec![key.clone()],
    };
    RpcAction {
        method: action.name().to_string(),
        parameters,
    }
}

fn to_rpc_item(item: ResultItem) -> RpcResultItem {
    RpcResultItem {
        title: item.title,
        subtitle: item.subtitle,
        icon_path: item.icon_path,
        context_data: item.context.map(|context| [context.key, context.value]),
        action: item.action.as_ref().map(to_rpc_action),
    }
}

// Context data comes back nested (`[[key, value]]`); older hosts flatten it.
fn decode_context(params: &[Value]) -> Option<SnippetContext> {
    let pair = match params {
        [Value::Array(inner)] => inner.as_slice(),
        flat => flat,
    };
    match pair {
        [Value::String(key), Value::String(value), ..] => {
            Some(SnippetContext::new(key.as_str(), value.as_str()))
        }
        _ => None,
    }
}

fn invalid(method: &'static str, expected: &'static str) -> HostError {
    HostError::InvalidParameters { method, expected }
}

/// Routes host requests to the core services.
pub struct Host<'a, R: SnippetRepository, C: ClipboardPort + ?Sized> {
    resolver: QueryResolver<'a, R, C>,
    executor: ActionExecutor<'a, R, C>,
}

impl<'a, R: SnippetRepository, C: ClipboardPort + ?Sized> Host<'a, R, C> {
    pub fn new(repo: &'a R, clipboard: &'a C, config: &'a SnippetsConfig) -> Self {
        Self {
            resolver: QueryResolver::new(repo, clipboard, config),
            executor: ActionExecutor::new(repo, clipboard),
        }
    }

    /// Handles one request.
    ///
    /// Listing requests return `Some(response)`; executed actions return `None`.
    pub fn handle(&self, request: HostRequest) -> Result<Option<RpcResponse>, PersistenceError> {
        match request {
            HostRequest::Query(text) => {
                Ok(Some(RpcResponse::from_items(self.resolver.resolve(&text))))
            }
            HostRequest::ContextMenu(context) => Ok(Some(RpcResponse::from_items(
                self.resolver.context_menu(&context),
            ))),
            HostRequest::Execute(action) => {
                self.executor.execute(&action)?;
                Ok(None)
            }
        }
    }
}
