// Method channel dispatch - routes named method calls from the host shell
// to registered handlers and carries exactly one reply back per call

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;

/// A single incoming call: a method name plus loosely typed arguments.
///
/// Arguments are kept as raw JSON so each handler can apply its own
/// validation rules (a missing field is a handler-level error, not a
/// dispatch-level one).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MethodCall {
    pub method: String,
    #[serde(default)]
    pub arguments: Value,
}

impl MethodCall {
    pub fn new(method: impl Into<String>, arguments: Value) -> Self {
        Self {
            method: method.into(),
            arguments,
        }
    }

    /// A call with no arguments.
    pub fn bare(method: impl Into<String>) -> Self {
        Self::new(method, Value::Null)
    }
}

/// Structured error reply: a stable machine-readable code plus a
/// human-readable message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChannelError {
    pub code: String,
    pub message: String,
}

impl ChannelError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }
}

/// The single reply to a method call.
///
/// A handler produces this as its return value, so every call resolves
/// exactly once: never zero replies, never two.
#[derive(Debug, Clone, PartialEq)]
pub enum MethodReply {
    /// The call succeeded; the value is the method's result payload.
    Success(Value),
    /// The call was understood but failed.
    Error(ChannelError),
    /// No handler recognizes this method name.
    NotImplemented,
}

impl MethodReply {
    pub fn is_success(&self) -> bool {
        matches!(self, MethodReply::Success(_))
    }

    pub fn error_code(&self) -> Option<&str> {
        match self {
            MethodReply::Error(e) => Some(&e.code),
            _ => None,
        }
    }
}

/// Handler for one or more method names on a channel.
#[async_trait]
pub trait MethodHandler: Send + Sync {
    async fn handle(&self, call: &MethodCall) -> MethodReply;
}

/// A named dispatch table mapping method names to handlers.
///
/// Mirrors the host framework's method-channel surface: the host owns
/// the transport and codec; this side owns routing and replies.
pub struct MethodChannel {
    name: String,
    handlers: HashMap<String, Arc<dyn MethodHandler>>,
}

impl MethodChannel {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            handlers: HashMap::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Register a handler for a method name. Later registrations for
    /// the same name replace earlier ones.
    pub fn register(&mut self, method: impl Into<String>, handler: Arc<dyn MethodHandler>) {
        let method = method.into();
        println!("Registered {} on channel {}", method, self.name);
        self.handlers.insert(method, handler);
    }

    pub fn has_method(&self, method: &str) -> bool {
        self.handlers.contains_key(method)
    }

    /// Route a call to its handler. Unknown method names get a
    /// not-implemented reply rather than an error, so the host can
    /// probe for optional capabilities without tripping error paths.
    pub async fn invoke(&self, call: &MethodCall) -> MethodReply {
        match self.handlers.get(&call.method) {
            Some(handler) => handler.handle(call).await,
            None => MethodReply::NotImplemented,
        }
    }
}
