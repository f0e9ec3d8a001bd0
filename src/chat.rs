//! Chat collaborator
//!
//! Sends a question to an HTTP endpoint and keeps the transcript that chat
//! panels display. The layout core never looks inside the messages; it only
//! places the rendered transcript into panels.
//!
//! Wire format: POST `{"query": "..."}`, response `{"answer": "<html>"}`.

use std::sync::{Arc, OnceLock};
use std::time::Duration;

use anyhow::{anyhow, Context, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::config::ChatConfig;
use crate::util::escape_html;

/// Shown in place of an answer when the request fails
pub const FALLBACK_ANSWER: &str = "Sorry, I encountered an error while processing your request.";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatRequest {
    pub query: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ChatReply {
    pub answer: String,
}

// ============================================================================
// Transcript
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatRole {
    User,
    Assistant,
}

/// One rendered transcript entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub role: ChatRole,
    /// Markup shown in the panel (user text is escaped, answers are trusted HTML)
    pub html: String,
}

#[derive(Debug, Clone, Default)]
pub struct ChatState {
    pub messages: Vec<ChatMessage>,
    /// Requests sent but not yet answered
    pub pending: usize,
}

impl ChatState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an outgoing question
    pub fn push_query(&mut self, query: &str) {
        self.messages.push(ChatMessage {
            role: ChatRole::User,
            html: escape_html(query),
        });
        self.pending += 1;
    }

    /// Record the outcome of a request
    pub fn push_reply(&mut self, result: Result<String, String>) {
        self.pending = self.pending.saturating_sub(1);
        let html = match result {
            Ok(answer) => format_answer(&answer),
            Err(e) => {
                tracing::warn!("Chat request failed: {}", e);
                FALLBACK_ANSWER.to_string()
            }
        };
        self.messages.push(ChatMessage {
            role: ChatRole::Assistant,
            html,
        });
    }

    /// Render the transcript as panel markup
    pub fn render_html(&self) -> String {
        let mut out = String::new();
        for message in &self.messages {
            let (class, who) = match message.role {
                ChatRole::User => ("user-message", "You"),
                ChatRole::Assistant => ("ai-message", "AI"),
            };
            out.push_str(&format!(
                "<div class=\"message {}\"><strong>{}:</strong> {}</div>\n",
                class, who, message.html
            ));
        }
        out
    }
}

/// Wrap q-language code blocks so they get the code-block styling
pub fn format_answer(answer: &str) -> String {
    static CODE_BLOCK: OnceLock<Option<Regex>> = OnceLock::new();
    let Some(re) = CODE_BLOCK.get_or_init(|| {
        Regex::new(r#"(?s)<pre><code class="language-q">(.*?)</code></pre>"#).ok()
    }) else {
        return answer.to_string();
    };
    re.replace_all(
        answer,
        r#"<div class="code-block"><pre><code class="language-q">$1</code></pre></div>"#,
    )
    .into_owned()
}

// ============================================================================
// Backends
// ============================================================================

/// Something that can answer a chat query. Called off the UI thread.
pub trait ChatBackend: Send + Sync {
    fn ask(&self, query: &str) -> Result<String>;
}

/// JSON-over-HTTP backend
pub struct HttpChatBackend {
    client: reqwest::blocking::Client,
    endpoint: String,
}

impl HttpChatBackend {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build HTTP client")?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }
}

impl ChatBackend for HttpChatBackend {
    fn ask(&self, query: &str) -> Result<String> {
        let request = ChatRequest {
            query: query.to_string(),
        };
        let reply: ChatReply = self
            .client
            .post(&self.endpoint)
            .json(&request)
            .send()
            .with_context(|| format!("Failed to reach {}", self.endpoint))?
            .error_for_status()?
            .json()
            .context("Malformed chat reply")?;
        Ok(reply.answer)
    }
}

/// Backend used when no endpoint is configured; every query fails
pub struct UnconfiguredChatBackend;

impl ChatBackend for UnconfiguredChatBackend {
    fn ask(&self, _query: &str) -> Result<String> {
        Err(anyhow!("No chat endpoint configured"))
    }
}

/// Pick a backend from configuration
pub fn backend_from_config(config: &ChatConfig) -> Result<Arc<dyn ChatBackend>> {
    match &config.endpoint {
        Some(endpoint) => Ok(Arc::new(HttpChatBackend::new(
            endpoint.clone(),
            Duration::from_secs(config.timeout_secs),
        )?)),
        None => Ok(Arc::new(UnconfiguredChatBackend)),
    }
}
