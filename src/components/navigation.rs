//! Navigation Bar Component
//!
//! Top bar switching between pages. Navigation is a plain page signal, no
//! router; the bar also carries the sign-out control when a session exists.

use leptos::prelude::*;

use crate::auth::AuthContext;

/// The site's pages.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Page {
    Home,
    About,
    Services,
    Projects,
    Articles,
    Contact,
    NotFound,
}

const NAV_ITEMS: &[(Page, &str)] = &[
    (Page::Home, "Home"),
    (Page::About, "About"),
    (Page::Services, "Services"),
    (Page::Projects, "Projects"),
    (Page::Articles, "Articles"),
    (Page::Contact, "Contact"),
];

#[component]
pub fn Navigation(
    current_page: ReadSignal<Page>,
    set_current_page: WriteSignal<Page>,
) -> impl IntoView {
    let auth = expect_context::<AuthContext>();

    view! {
        <nav class="navigation">
            <button class="nav-brand" on:click=move |_| set_current_page.set(Page::Home)>
                "Umar Majeed"
            </button>
            <div class="nav-items">
                {NAV_ITEMS.iter().map(|(page, label)| {
                    let page = *page;
                    let item_class = move || {
                        if current_page.get() == page { "nav-item active" } else { "nav-item" }
                    };
                    view! {
                        <button class=item_class on:click=move |_| set_current_page.set(page)>
                            {*label}
                        </button>
                    }
                }).collect_view()}
            </div>
            <Show when=move || auth.current_user().is_some()>
                <div class="nav-session">
                    <Show when=move || auth.is_admin()>
                        <span class="nav-admin-badge">"Admin"</span>
                    </Show>
                    <button class="nav-signout" on:click=move |_| auth.sign_out()>
                        "Sign Out"
                    </button>
                </div>
            </Show>
        </nav>
    }
}
