//! Cited references rendered under an assistant reply.
//!
//! Source URLs come from model/search output, so script-capable link targets
//! are replaced with `#` just like links inside the reply markdown.

#[cfg(test)]
#[path = "sources_list_test.rs"]
mod sources_list_test;

use leptos::prelude::*;

use crate::net::types::Source;
use crate::util::markdown::safe_href;

/// List of external links the assistant cited. Renders nothing when empty.
#[component]
pub fn SourcesList(sources: Vec<Source>) -> impl IntoView {
    (!sources.is_empty()).then(|| {
        let items = sources
            .into_iter()
            .map(|source| {
                let label = source.label().to_owned();
                let href = safe_href(&source.url).to_owned();
                view! {
                    <li class="sources-list__item">
                        <span class="sources-list__icon" aria-hidden="true">"↗"</span>
                        <a
                            class="sources-list__link"
                            href=href
                            target="_blank"
                            rel="noopener noreferrer"
                            title=source.title
                        >
                            {label}
                        </a>
                    </li>
                }
            })
            .collect_view();

        view! {
            <div class="sources-list">
                <h4 class="sources-list__title">"📚 References"</h4>
                <ul class="sources-list__items">{items}</ul>
            </div>
        }
    })
}
