//! Projects Page
//!
//! Card grid over the `projects` collection with GitHub/demo links and the
//! admin CRUD form.

use leptos::prelude::*;

use crate::api::Projects;
use crate::auth::AuthContext;
use crate::components::DeleteConfirmButton;
use crate::controller::{FormController, ListController};
use crate::store::use_app_store;

#[component]
pub fn ProjectsPage() -> impl IntoView {
    let auth = expect_context::<AuthContext>();
    let list: ListController<Projects> = ListController::new(use_app_store(), auth);
    let form = FormController::new(list);

    Effect::new(move |_| {
        list.refresh();
    });

    view! {
        <div class="page projects-page">
            <header class="page-header">
                <div>
                    <h1>"Projects"</h1>
                    <p class="page-subtitle">
                        "A selection of AI and machine learning systems I have built"
                    </p>
                </div>
                <Show when=move || auth.is_admin()>
                    <button class="primary-btn" on:click=move |_| form.start_create()>
                        "+ Add Project"
                    </button>
                </Show>
            </header>

            <Show when=move || form.open.get()>
                <div class="dialog-overlay">
                    <div class="dialog">
                        <div class="dialog-header">
                            <h2>
                                {move || if form.editing.get().is_some() {
                                    "Edit Project"
                                } else {
                                    "Create New Project"
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
                                placeholder="Rust, PyTorch, PostgreSQL"
                                prop:value=move || form.draft.get().tech
                                on:input=move |ev| {
                                    form.draft.update(|d| d.tech = event_target_value(&ev))
                                }
                            />
                            <label>"GitHub URL"</label>
                            <input
                                type="text"
                                prop:value=move || form.draft.get().github_url
                                on:input=move |ev| {
                                    form.draft.update(|d| d.github_url = event_target_value(&ev))
                                }
                            />
                            <label>"Demo URL"</label>
                            <input
                                type="text"
                                prop:value=move || form.draft.get().demo_url
                                on:input=move |ev| {
                                    form.draft.update(|d| d.demo_url = event_target_value(&ev))
                                }
                            />
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
                                "Featured Project"
                            </label>
                            <button type="submit" class="primary-btn" disabled=move || form.submitting.get()>
                                {move || if form.editing.get().is_some() {
                                    "Update Project"
                                } else {
                                    "Create Project"
                                }}
                            </button>
                        </form>
                    </div>
                </div>
            </Show>

            <Show when=move || list.loading.get()>
                <p class="loading">"Loading projects..."</p>
            </Show>

            <div class="card-grid">
                <For
                    each=move || list.records.get()
                    key=|project| project.id.clone()
                    children=move |project| {
                        let featured = project.featured;
                        let toggle_id = project.id.clone();
                        let delete_id = project.id.clone();
                        let edit_project = project.clone();
                        let star_class = if featured { "icon-btn star active" } else { "icon-btn star" };
                        view! {
                            <article class="card">
                                <div class="card-top">
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
                                                    let project = edit_project.clone();
                                                    move |_| form.start_edit(&project)
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
                                {project.image.clone().map(|src| view! {
                                    <img class="card-image" src=src alt=project.title.clone()/>
                                })}
                                <h3>{project.title.clone()}</h3>
                                <p class="excerpt">{project.description.clone()}</p>
                                <div class="tag-row">
                                    {project.tech.iter().map(|tech| view! {
                                        <span class="tag">{tech.clone()}</span>
                                    }).collect_view()}
                                </div>
                                <div class="card-links">
                                    {project.github_url.clone().map(|url| view! {
                                        <a href=url target="_blank" rel="noopener noreferrer">"Code"</a>
                                    })}
                                    {project.demo_url.clone().map(|url| view! {
                                        <a href=url target="_blank" rel="noopener noreferrer">"Live Demo"</a>
                                    })}
                                </div>
                            </article>
                        }
                    }
                />
            </div>

            <Show when=move || !list.loading.get() && list.records.get().is_empty()>
                <div class="empty-state">
                    <h3>"No projects yet"</h3>
                    <p>
                        {move || if auth.is_admin() {
                            "Add your first project to start the showcase."
                        } else {
                            "Check back soon for new projects."
                        }}
                    </p>
                </div>
            </Show>
        </div>
    }
}
