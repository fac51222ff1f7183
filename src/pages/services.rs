//! Services Page
//!
//! Catalog over the `services` collection. Defaults to the featured subset
//! with a "show all" toggle; admins get the full CRUD form with an icon
//! picker constrained to the known icon names.

use leptos::prelude::*;

use crate::api::Services;
use crate::auth::AuthContext;
use crate::components::DeleteConfirmButton;
use crate::controller::{FormController, ListController};
use crate::models::SERVICE_ICONS;
use crate::store::use_app_store;

#[component]
pub fn ServicesPage() -> impl IntoView {
    let auth = expect_context::<AuthContext>();
    let list: ListController<Services> = ListController::new(use_app_store(), auth);
    let form = FormController::new(list);
    let (show_all, set_show_all) = signal(false);

    Effect::new(move |_| {
        list.refresh();
    });

    // Featured subset unless the visitor asks for everything. Falls back to
    // the full list when nothing is featured yet.
    let visible = move || {
        let records = list.records.get();
        if show_all.get() {
            return records;
        }
        let featured: Vec<_> = records.iter().filter(|s| s.featured).cloned().collect();
        if featured.is_empty() {
            records
        } else {
            featured
        }
    };

    view! {
        <div class="page services-page">
            <header class="page-header">
                <div>
                    <h1>"Services"</h1>
                    <p class="page-subtitle">
                        "What I can build for you, from prototypes to production systems"
                    </p>
                </div>
                <div class="page-header-actions">
                    <button class="secondary-btn" on:click=move |_| set_show_all.update(|v| *v = !*v)>
                        {move || if show_all.get() { "Show Featured" } else { "Show All" }}
                    </button>
                    <Show when=move || auth.is_admin()>
                        <button class="primary-btn" on:click=move |_| form.start_create()>
                            "+ Add Service"
                        </button>
                    </Show>
                </div>
            </header>

            <Show when=move || form.open.get()>
                <div class="dialog-overlay">
                    <div class="dialog">
                        <div class="dialog-header">
                            <h2>
                                {move || if form.editing.get().is_some() {
                                    "Edit Service"
                                } else {
                                    "Create New Service"
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
                            <label>"Description"</label>
                            <textarea
                                rows="4"
                                prop:value=move || form.draft.get().description
                                on:input=move |ev| {
                                    form.draft.update(|d| d.description = event_target_value(&ev))
                                }
                            ></textarea>
                            <label>"Technologies (comma-separated)"</label>
                            <input
                                type="text"
                                placeholder="LLMs, RAG, Vector Search"
                                prop:value=move || form.draft.get().tech
                                on:input=move |ev| {
                                    form.draft.update(|d| d.tech = event_target_value(&ev))
                                }
                            />
                            <label>"Icon"</label>
                            <select
                                prop:value=move || form.draft.get().icon
                                on:change=move |ev| {
                                    form.draft.update(|d| d.icon = event_target_value(&ev))
                                }
                            >
                                {SERVICE_ICONS.iter().map(|name| view! {
                                    <option value=*name>{*name}</option>
                                }).collect_view()}
                            </select>
                            <label>"Image URL"</label>
                            <input
                                type="text"
                                prop:value=move || form.draft.get().image
                                on:input=move |ev| {
                                    form.draft.update(|d| d.image = event_target_value(&ev))
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
                                "Featured Service"
                            </label>
                            <button type="submit" class="primary-btn" disabled=move || form.submitting.get()>
                                {move || if form.editing.get().is_some() {
                                    "Update Service"
                                } else {
                                    "Create Service"
                                }}
                            </button>
                        </form>
                    </div>
                </div>
            </Show>

            <Show when=move || list.loading.get()>
                <p class="loading">"Loading services..."</p>
            </Show>

            <div class="card-grid">
                <For
                    each=visible
                    key=|service| service.id.clone()
                    children=move |service| {
                        let featured = service.featured;
                        let toggle_id = service.id.clone();
                        let delete_id = service.id.clone();
                        let edit_service = service.clone();
                        let star_class = if featured { "icon-btn star active" } else { "icon-btn star" };
                        view! {
                            <article class="card">
                                <div class="card-top">
                                    <span class=format!("service-icon icon-{}", service.icon)>
                                        {service.icon.clone()}
                                    </span>
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
                                                    let service = edit_service.clone();
                                                    move |_| form.start_edit(&service)
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
                                <h3>{service.title.clone()}</h3>
                                <p class="excerpt">{service.description.clone()}</p>
                                <div class="tag-row">
                                    {service.tech.iter().map(|tech| view! {
                                        <span class="tag">{tech.clone()}</span>
                                    }).collect_view()}
                                </div>
                            </article>
                        }
                    }
                />
            </div>

            <Show when=move || !list.loading.get() && list.records.get().is_empty()>
                <div class="empty-state">
                    <h3>"No services yet"</h3>
                    <p>
                        {move || if auth.is_admin() {
                            "Describe your first service offering."
                        } else {
                            "Check back soon."
                        }}
                    </p>
                </div>
            </Show>
        </div>
    }
}
