//! Sidebar with related comparisons, popular categories, and live activity.

use leptos::prelude::*;

use crate::util::catalog::{
    POPULAR_CATEGORIES, RECENT_COMPARISONS, RELATED_POSTS, category_badge, views_caption,
};

/// Static related-products sidebar.
#[component]
pub fn RelatedProducts() -> impl IntoView {
    let posts = RELATED_POSTS
        .iter()
        .map(|post| {
            view! {
                <div class="related-post">
                    <div class="related-post__head">
                        <h3 class="related-post__title">{post.title}</h3>
                        <span class="related-post__icon" aria-hidden="true">"↗"</span>
                    </div>
                    <p class="related-post__description">{post.description}</p>
                    <div class="related-post__meta">
                        <span>{views_caption(post)}</span>
                        <span>{post.age}</span>
                    </div>
                </div>
            }
        })
        .collect_view();

    let categories = POPULAR_CATEGORIES
        .iter()
        .map(|category| {
            view! {
                <div class="category-row">
                    <span class="category-row__name">{category.name}</span>
                    <span class="category-row__count">{category_badge(category)}</span>
                </div>
            }
        })
        .collect_view();

    let comparisons = RECENT_COMPARISONS
        .iter()
        .map(|cmp| {
            view! {
                <div class="comparison-row">
                    <div class="comparison-row__meta">
                        <span aria-hidden="true">"👥"</span>
                        <span>{cmp.age}</span>
                    </div>
                    <p class="comparison-row__pair">
                        <span class="comparison-row__product">{cmp.left}</span>
                        <span class="comparison-row__vs">"vs"</span>
                        <span class="comparison-row__product">{cmp.right}</span>
                    </p>
                </div>
            }
        })
        .collect_view();

    view! {
        <aside class="related-products">
            <section class="related-products__section">
                <h2 class="related-products__heading">"📈 Related comparisons"</h2>
                <div class="related-products__list">{posts}</div>
            </section>

            <section class="related-products__section">
                <h3 class="related-products__subheading">"⭐ Popular categories"</h3>
                <div class="related-products__list">{categories}</div>
            </section>

            <section class="related-products__section">
                <h3 class="related-products__subheading">"🕒 Live comparisons"</h3>
                <div class="related-products__list">{comparisons}</div>
            </section>

            <div class="related-products__footer">
                <button class="related-products__more">"See more comparisons →"</button>
            </div>
        </aside>
    }
}
