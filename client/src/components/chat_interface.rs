//! Conversation view: message history, loading indicator, and input row.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reads and appends to the shared `ChatState`; the outgoing request runs on
//! a local task and its outcome is recorded back into the same state.

use leptos::prelude::*;

use crate::components::chat_message::ChatMessage;
use crate::net::api::send_message;
use crate::state::chat::ChatState;

/// Chat thread with an input for sending new messages.
///
/// `on_user_interaction` fires once, when the first user message is sent.
#[component]
pub fn ChatInterface(#[prop(optional)] on_user_interaction: Option<Callback<()>>) -> impl IntoView {
    let chat = expect_context::<RwSignal<ChatState>>();

    let input = RwSignal::new(String::new());
    let messages_end_ref = NodeRef::<leptos::html::Div>::new();

    Effect::new(move || {
        if !chat.with(ChatState::should_autoscroll) {
            return;
        }

        #[cfg(feature = "hydrate")]
        {
            if let Some(el) = messages_end_ref.get() {
                let opts = web_sys::ScrollIntoViewOptions::new();
                opts.set_behavior(web_sys::ScrollBehavior::Smooth);
                el.scroll_into_view_with_scroll_into_view_options(&opts);
            }
        }
    });

    let do_send = move || {
        let text = input.get_untracked();
        let first = !chat.with_untracked(|c| c.has_interacted);

        let mut outgoing = None;
        chat.update(|c| outgoing = c.begin_send(&text));
        let Some(message) = outgoing else {
            return;
        };
        input.set(String::new());

        if first {
            if let Some(cb) = on_user_interaction.as_ref() {
                cb.run(());
            }
        }

        leptos::task::spawn_local(async move {
            match send_message(&message).await {
                Ok(response) => chat.update(|c| c.receive_reply(response)),
                Err(err) => chat.update(|c| c.receive_error(&err)),
            }
        });
    };

    let on_click = move |_| do_send();

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" && !ev.shift_key() {
            ev.prevent_default();
            do_send();
        }
    };

    let loading = move || chat.with(|c| c.loading);
    let can_send = move || chat.with(|c| c.can_send(&input.get()));

    view! {
        <div class="chat-interface">
            <div class="chat-interface__messages">
                <For
                    each=move || chat.get().messages
                    key=|msg| msg.id
                    children=move |msg| {
                        view! {
                            <ChatMessage
                                message=msg.message
                                is_bot=msg.is_bot
                                timestamp=msg.timestamp
                                sources=msg.sources
                            />
                        }
                    }
                />

                <Show when=loading>
                    <div class="chat-message chat-interface__loading">
                        <div class="avatar avatar--bot" aria-hidden="true">
                            <span class="spinner"></span>
                        </div>
                        <div class="chat-message__bubble chat-message__bubble--bot">
                            <p class="chat-interface__loading-text">"Searching..."</p>
                        </div>
                    </div>
                </Show>

                <div node_ref=messages_end_ref></div>
            </div>

            <div class="chat-interface__input-row">
                <input
                    class="chat-interface__input"
                    type="text"
                    placeholder="What product are you looking for?"
                    disabled=loading
                    prop:value=move || input.get()
                    on:input=move |ev| input.set(event_target_value(&ev))
                    on:keydown=on_keydown
                />
                <button
                    class="btn btn--primary chat-interface__send"
                    aria-label="Send"
                    on:click=on_click
                    disabled=move || !can_send()
                >
                    "➤"
                </button>
            </div>
        </div>
    }
}
