//! A single message bubble in the conversation.
//!
//! Assistant replies render as sanitized markdown followed by their cited
//! sources; user messages render as pre-wrapped plain text.

#[cfg(test)]
#[path = "chat_message_test.rs"]
mod chat_message_test;

use leptos::prelude::*;

use crate::components::sources_list::SourcesList;
use crate::net::types::Source;
use crate::util::markdown::render_markdown_html;

/// Message bubble with sender avatar and optional timestamp caption.
#[component]
pub fn ChatMessage(
    message: String,
    is_bot: bool,
    #[prop(optional)] timestamp: Option<String>,
    #[prop(optional)] sources: Vec<Source>,
) -> impl IntoView {
    let body = if is_bot {
        let rendered = render_markdown_html(&message);
        view! { <div class="chat-message__markdown" inner_html=rendered></div> }.into_any()
    } else {
        view! { <p class="chat-message__text">{message}</p> }.into_any()
    };

    view! {
        <div class=row_class(is_bot)>
            <div class=avatar_class(is_bot) aria-hidden="true">{avatar_glyph(is_bot)}</div>
            <div class="chat-message__column">
                <div class=bubble_class(is_bot)>
                    {body}
                    {is_bot.then(|| view! { <SourcesList sources=sources/> })}
                </div>
                {timestamp
                    .filter(|t| !t.is_empty())
                    .map(|t| view! { <p class="chat-message__timestamp">{t}</p> })}
            </div>
        </div>
    }
}

/// Row class; user rows are mirrored to the right.
fn row_class(is_bot: bool) -> &'static str {
    if is_bot { "chat-message" } else { "chat-message chat-message--user" }
}

fn avatar_class(is_bot: bool) -> &'static str {
    if is_bot { "avatar avatar--bot" } else { "avatar avatar--user" }
}

fn avatar_glyph(is_bot: bool) -> &'static str {
    if is_bot { "🤖" } else { "👤" }
}

fn bubble_class(is_bot: bool) -> &'static str {
    if is_bot {
        "chat-message__bubble chat-message__bubble--bot"
    } else {
        "chat-message__bubble chat-message__bubble--user"
    }
}
