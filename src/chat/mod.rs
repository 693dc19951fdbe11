mod prompts;

use log::{error, warn};
use serde_json::{Map, Value};

use crate::model::{CompletionProvider, DEFAULT_MODEL};
use crate::web::models::{ChatMessage, ChatRequest, ChatResponse, Mode};

// How many trailing history messages are forwarded in chat mode.
const HISTORY_WINDOW: usize = 12;

const FALLBACK_GREETING: &str = "Hi!";
const APOLOGY_TEXT: &str =
    "I'm having trouble connecting to the AI service right now. Please try again later.";

// Renders the caller-supplied summary as one compact context line. Key order
// follows the request body.
fn render_summary(summary: &Map<String, Value>) -> String {
    format!("summary: {}", Value::Object(summary.clone()))
}

// Turns a request into the flat message list sent to the provider: system
// prompt, optional summary context, then either the greeting instruction or
// the tail of the supplied history.
pub fn assemble(req: &ChatRequest) -> Vec<ChatMessage> {
    let mut messages = vec![ChatMessage::system(prompts::system_prompt(req.language))];

    if let Some(summary) = &req.summary {
        messages.push(ChatMessage::system(render_summary(summary)));
    }

    match req.mode {
        Mode::Greeting => {
            // A greeting ignores any supplied history and asks for one
            // proactive tip instead.
            messages.push(ChatMessage::user(prompts::greeting_prompt(req.language)));
        }
        Mode::Chat => {
            if let Some(history) = &req.messages {
                let tail = history.len().saturating_sub(HISTORY_WINDOW);
                messages.extend(history[tail..].iter().cloned());
            }
        }
    }

    messages
}

// Echo fallback used when no provider credential is configured.
fn fallback_text(req: &ChatRequest) -> String {
    let last = req
        .messages
        .as_ref()
        .and_then(|messages| messages.last())
        .map(|message| message.content.trim())
        .unwrap_or("");
    if last.is_empty() {
        FALLBACK_GREETING.to_string()
    } else {
        last.to_string()
    }
}

// Produces a response under all circumstances; provider failures degrade to
// fixed fallback text and are logged, never surfaced to the caller.
pub async fn respond(provider: &CompletionProvider, req: &ChatRequest) -> ChatResponse {
    let model = req.model.as_deref().unwrap_or(DEFAULT_MODEL);
    let messages = assemble(req);

    let text = match provider {
        CompletionProvider::Unconfigured => {
            warn!("No completion provider configured, using echo fallback");
            fallback_text(req)
        }
        CompletionProvider::Configured(client) => match client.complete(&messages, model).await {
            Ok(text) => text,
            Err(e) => {
                error!("Completion call failed: {:#}", e);
                APOLOGY_TEXT.to_string()
            }
        },
    };

    ChatResponse { text }
}
