//! Prompt composition for the support chat

use crate::model::ChatTurn;

/// Maximum number of prior turns carried into the prompt
pub const MAX_HISTORY_TURNS: usize = 5;

/// Build the instruction prompt for one support exchange
///
/// Carries the persona contract and behavioral constraints as instructions to
/// the model; nothing here is enforced programmatically. History is truncated
/// to the last [`MAX_HISTORY_TURNS`] turns, oldest first.
pub fn build_support_prompt(message: &str, history: &[ChatTurn]) -> String {
    format!(
        r#"You are an empathetic support assistant for people affected by domestic violence.

Guidelines:
1. Respond with care and understanding, and validate the person's feelings
2. Prioritize their safety and well-being
3. Keep replies brief and concrete; avoid generic platitudes
4. Do not repeat the phrase "you are not alone" in every reply
5. When pointing to resources, prefer hotlines and services specific to the person's region
6. Share information only if specifically asked; provide emotional support first
7. If a message is unrelated to domestic violence support, gently explain that this service only covers safety and support topics

Conversation so far:
{history}

User message: {message}

Provide a caring, supportive response:"#,
        history = render_history(history),
        message = message
    )
}

/// Render the last turns as "User:"/"Assistant:" lines, oldest first
fn render_history(history: &[ChatTurn]) -> String {
    if history.is_empty() {
        return "(no previous messages)".to_string();
    }

    let start = history.len().saturating_sub(MAX_HISTORY_TURNS);
    history[start..]
        .iter()
        .map(|turn| {
            let speaker = if turn.is_user { "User" } else { "Assistant" };
            format!("{}: {}", speaker, turn.text)
        })
        .collect::<Vec<_>>()
        .join("\n")
}
