//! Articles Page
//!
//! Card grid over the `articles` collection, with the admin
//! create/edit/delete form and the featured toggle.

use leptos::prelude::*;

use crate::api::Articles;
use crate::auth::AuthContext;
use crate::components::DeleteConfirmButton;
use crate::controller::{FormController, ListController};
use crate::dates::format_date;
use crate::store::use_app_store;

#[component]
pub fn ArticlesPage() -> impl IntoView {
    let auth = expect_context::<AuthContext>();
    let list: ListController<Articles> = ListController::new(use_app_store(), auth);
    let form = FormController::new(list);

    Effect::new(move |_| {
        list.refresh();
    });

    view! {
        <div class="page articles-page">
            <header class="page-header">
                <div>
                    <h1>"Articles"</h1>
                    <p class="page-subtitle">
                        "Insights and thoughts on AI, Machine Learning, and Technology"
                    </p>
                </div>
                <Show when=move || auth.is_admin()>
                    <button class="primary-btn" on:click=move |_| form.start_create()>
                        "+ Add Article"
                    </button>
                </Show>
            </header>

            <Show when=move || form.open.get()>
                <div class="dialog-overlay">
                    <div class="dialog">
                        <div class="dialog-header">
                            <h2>
                                {move || if form.editing.get().is_some() {
                                    "Edit Article"
                                } else {
                                    "Create New Article"
                                }}
                            </h2>
                            <button class="close-btn" on:click=move |_| form.cancel()>"×"</button>
                        </div>
                        <form on:submit=move |ev: web_sys::SubmitEvent| {
                            ev.prevent_default();
                            form.submit();
                        }>
                            <label>"Title"</label>
                            <input
                                type="text"
                                prop:value=move || form.draft.get().title
                                on:input=move |ev| {
                                    form.draft.update(|d| d.title = event_target_value(&ev))
                                }
                            />
                            <label>"Excerpt"</label>
                            <textarea
                                rows="3"
                                prop:value=move || form.draft.get().excerpt
                                on:input=move |ev| {
                                    form.draft.update(|d| d.excerpt = event_target_value(&ev))
                                }
                            ></textarea>
                            <label>"Content"</label>
                            <textarea
                                rows="6"
                                prop:value=move || form.draft.get().content
                                on:input=move |ev| {
                                    form.draft.update(|d| d.content = event_target_value(&ev))
                                }
                            ></textarea>
                            <label>"Author"</label>
                            <input
                                type="text"
                                prop:value=move || form.draft.get().author
                                on:input=move |ev| {
                                    form.draft.update(|d| d.author = event_target_value(&ev))
                                }
                            />
                            <label>"Category"</label>
                            <input
                                type="text"
                                prop:value=move || form.draft.get().category
                                on:input=move |ev| {
                                    form.draft.update(|d| d.category = event_target_value(&ev))
                                }
                            />
                            <label>"Tags (comma-separated)"</label>
                            <input
                                type="text"
                                placeholder="AI, Machine Learning, Python"
                                prop:value=move || form.draft.get().tags
                                on:input=move |ev| {
                                    form.draft.update(|d| d.tags = event_target_value(&ev))
                                }
                            />
                            <label>"Read Time (minutes)"</label>
                            <input
                                type="number"
                                min="1"
                                max="120"
                                prop:value=move || form.draft.get().read_time
                                on:input=move |ev| {
                                    let input = event_target_value(&ev);
                                    form.draft
                                        .update(|d| d.read_time = parse_read_time(&input, d.read_time))
                                }
                            />
                            <label class="checkbox-row">
                                <input
                                    type="checkbox"
                                    prop:checked=move || form.draft.get().featured
                                    on:change=move |ev| {
                                        form.draft.update(|d| d.featured = event_target_checked(&ev))
                                    }
                                />
                                "Featured Article"
                            </label>
                            <button type="submit" class="primary-btn" disabled=move || form.submitting.get()>
                                {move || if form.editing.get().is_some() {
                                    "Update Article"
                                } else {
                                    "Create Article"
                                }}
                            </button>
                        </form>
                    </div>
                </div>
            </Show>

            <Show when=move || list.loading.get()>
                <p class="loading">"Loading articles..."</p>
            </Show>

            <div class="card-grid">
                <For
                    each=move || list.records.get()
                    key=|article| article.id.clone()
                    children=move |article| {
                        let featured = article.featured;
                        let toggle_id = article.id.clone();
                        let delete_id = article.id.clone();
                        let edit_article = article.clone();
                        let star_class = if featured { "icon-btn star active" } else { "icon-btn star" };
                        view! {
                            <article class="card">
                                <div class="card-top">
                                    <span class="badge">{article.category.clone()}</span>
                                    <Show when=move || featured>
                                        <span class="badge featured">"★ Featured"</span>
                                    </Show>
                                    <Show when=move || auth.is_admin()>
                                        <span class="card-admin-actions">
                                            <button
                                                class=star_class
                                                title=if featured { "Remove from featured" } else { "Add to featured" }
                                                on:click={
                                                    let id = toggle_id.clone();
                                                    move |_| list.toggle_featured(id.clone())
                                                }
                                            >
                                                "★"
                                            </button>
                                            <button
                                                class="icon-btn"
                                                title="Edit"
                                                on:click={
                                                    let article = edit_article.clone();
                                                    move |_| form.start_edit(&article)
                                                }
                                            >
                                                "✎"
                                            </button>
                                            <DeleteConfirmButton
                                                button_class="icon-btn delete"
                                                on_confirm={
                                                    let id = delete_id.clone();
                                                    Callback::new(move |_| list.remove(id.clone()))
                                                }
                                            />
                                        </span>
                                    </Show>
                                </div>
                                <h3>{article.title.clone()}</h3>
                                <p class="excerpt">{article.excerpt.clone()}</p>
                                <div class="tag-row">
                                    {article.tags.iter().map(|tag| view! {
                                        <span class="tag">{tag.clone()}</span>
                                    }).collect_view()}
                                </div>
                                <div class="card-meta">
                                    <span>{article.author.clone()}</span>
                                    <span>{format_date(&article.created_at)}</span>
                                    <span>{format!("{} min read", article.read_time)}</span>
                                </div>
                            </article>
                        }
                    }
                />
            </div>

            <Show when=move || !list.loading.get() && list.records.get().is_empty()>
                <div class="empty-state">
                    <h3>"No articles yet"</h3>
                    <p>
                        {move || if auth.is_admin() {
                            "Start creating content to share your insights with the world."
                        } else {
                            "Check back soon for new articles."
                        }}
                    </p>
                </div>
            </Show>
        </div>
    }
}

/// Read-time input as minutes. A half-typed or cleared field keeps the
/// draft's current value instead of snapping elsewhere.
fn parse_read_time(input: &str, current: u32) -> u32 {
    input.trim().parse().unwrap_or(current)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_time_parses_digits() {
        assert_eq!(parse_read_time("12", 5), 12);
        assert_eq!(parse_read_time(" 3 ", 5), 3);
    }

    #[test]
    fn test_read_time_keeps_current_on_bad_input() {
        assert_eq!(parse_read_time("", 7), 7);
        assert_eq!(parse_read_time("abc", 7), 7);
        assert_eq!(parse_read_time("-2", 7), 7);
    }
}
