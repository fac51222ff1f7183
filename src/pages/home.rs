//! Home Page
//!
//! Hero, headline stats, the featured-projects strip (with admin controls),
//! and an education summary.

use leptos::prelude::*;

use crate::api::Projects;
use crate::auth::AuthContext;
use crate::components::{DeleteConfirmButton, Page};
use crate::controller::ListController;
use crate::store::use_app_store;

const STATS: &[(&str, &str)] = &[
    ("5+", "Years Experience"),
    ("50+", "Projects Completed"),
    ("15+", "AI Models Deployed"),
    ("1M+", "Users Impacted"),
];

const EDUCATION: &[(&str, &str)] = &[
    ("Master of Science in Artificial Intelligence", "2017 - 2019"),
    ("Bachelor of Science in Computer Science", "2013 - 2017"),
];

#[component]
pub fn HomePage(set_current_page: WriteSignal<Page>) -> impl IntoView {
    let auth = expect_context::<AuthContext>();
    let list: ListController<Projects> = ListController::new(use_app_store(), auth);

    Effect::new(move |_| {
        list.refresh();
    });

    let featured = move || {
        list.records
            .get()
            .into_iter()
            .filter(|project| project.featured)
            .collect::<Vec<_>>()
    };

    view! {
        <div class="page home-page">
            <section class="hero">
                <h1>"Umar Majeed"</h1>
                <p class="hero-tagline">"AI Engineer & Machine Learning Specialist"</p>
                <div class="hero-stats">
                    {STATS.iter().map(|(value, label)| view! {
                        <div class="stat">
                            <div class="stat-value">{*value}</div>
                            <div class="stat-label">{*label}</div>
                        </div>
                    }).collect_view()}
                </div>
                <div class="hero-actions">
                    <button class="primary-btn" on:click=move |_| set_current_page.set(Page::Contact)>
                        "Get in Touch"
                    </button>
                    <button class="secondary-btn" on:click=move |_| set_current_page.set(Page::Projects)>
                        "View Projects"
                    </button>
                </div>
            </section>

            <section class="featured-strip">
                <h2>"Featured Projects"</h2>
                <Show when=move || list.loading.get()>
                    <p class="loading">"Loading projects..."</p>
                </Show>
                <div class="card-grid">
                    <For
                        each=featured
                        key=|project| project.id.clone()
                        children=move |project| {
                            let toggle_id = project.id.clone();
                            let delete_id = project.id.clone();
                            view! {
                                <article class="card">
                                    <div class="card-top">
                                        <span class="badge featured">"★ Featured"</span>
                                        <Show when=move || auth.is_admin()>
                                            <span class="card-admin-actions">
                                                <button
                                                    class="icon-btn star active"
                                                    title="Remove from featured"
                                                    on:click={
                                                        let id = toggle_id.clone();
                                                        move |_| list.toggle_featured(id.clone())
                                                    }
                                                >
                                                    "★"
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
                                    <h3>{project.title.clone()}</h3>
                                    <p class="excerpt">{project.description.clone()}</p>
                                    <div class="tag-row">
                                        {project.tech.iter().map(|tech| view! {
                                            <span class="tag">{tech.clone()}</span>
                                        }).collect_view()}
                                    </div>
                                </article>
                            }
                        }
                    />
                </div>
                <Show when=move || !list.loading.get() && featured().is_empty()>
                    <p class="empty-state">"Featured projects will appear here."</p>
                </Show>
            </section>

            <section class="education-summary">
                <h2>"Education"</h2>
                {EDUCATION.iter().map(|(degree, period)| view! {
                    <div class="education-entry">
                        <h3>{*degree}</h3>
                        <span class="period">{*period}</span>
                    </div>
                }).collect_view()}
            </section>
        </div>
    }
}
