//! Product comparison landing page with the assistant chat.
//!
//! ARCHITECTURE
//! ============
//! Owns the tab strip and sidebar visibility; the conversation itself lives
//! in `ChatInterface`.

use leptos::prelude::*;

use crate::components::chat_header::ChatHeader;
use crate::components::chat_interface::ChatInterface;
use crate::components::related_products::RelatedProducts;
use crate::state::ui::{Tab, UiState};

/// Index page: header, tabs, and the AI compare workspace.
#[component]
pub fn IndexPage() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    let on_user_interaction = Callback::new(move |()| ui.update(UiState::reveal_sidebar));

    let tabs = Tab::ALL
        .into_iter()
        .map(|tab| {
            let is_active = move || ui.with(|u| u.active_tab == tab);
            view! {
                <button
                    class="tabs__trigger"
                    class:tabs__trigger--active=is_active
                    role="tab"
                    aria-selected=move || is_active().to_string()
                    on:click=move |_| ui.update(|u| u.active_tab = tab)
                >
                    {tab.label()}
                </button>
            }
        })
        .collect_view();

    view! {
        <div class="index-page">
            <div class="index-page__top">
                <div class="index-page__header">
                    <h1 class="index-page__title">"Product Comparison"</h1>
                    <p class="index-page__subtitle">"Smart AI-powered product recommendations"</p>
                </div>

                <div class="tabs" role="tablist">{tabs}</div>
            </div>

            <Show when=move || ui.with(|u| u.active_tab == Tab::AiCompare)>
                <div class="workspace">
                    <div class="workspace__chat">
                        <ChatHeader/>
                        <ChatInterface on_user_interaction=on_user_interaction/>
                    </div>
                    <Show when=move || ui.with(|u| u.show_sidebar)>
                        <div class="workspace__sidebar">
                            <RelatedProducts/>
                        </div>
                    </Show>
                </div>
            </Show>

            {move || {
                ui.with(|u| u.active_tab)
                    .placeholder()
                    .map(|text| view! { <div class="tab-placeholder">{text}</div> })
            }}
        </div>
    }
}
