//! Header strip above the conversation identifying the assistant.

use leptos::prelude::*;

/// Assistant avatar with title and subtitle.
#[component]
pub fn ChatHeader() -> impl IntoView {
    view! {
        <div class="chat-header">
            <div class="avatar avatar--bot" aria-hidden="true">"🤖"</div>
            <div class="chat-header__text">
                <h2 class="chat-header__title">"AI Assistant"</h2>
                <p class="chat-header__subtitle">"Here to help you pick the right product"</p>
            </div>
        </div>
    }
}
