//! Application Root
//!
//! Provides the global store and auth context, holds the current-page
//! signal, and renders the chrome around the active page.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::auth::AuthContext;
use crate::components::{Footer, Navigation, Page, ToastHost};
use crate::pages::{
    AboutPage, ArticlesPage, ContactPage, HomePage, NotFoundPage, ProjectsPage, ServicesPage,
};
use crate::store::AppState;

#[component]
pub fn App() -> impl IntoView {
    let (current_page, set_current_page) = signal(Page::Home);

    provide_context(Store::new(AppState::default()));

    let auth = AuthContext::new();
    provide_context(auth);
    auth.restore();

    view! {
        <div class="app-layout">
            <Navigation current_page=current_page set_current_page=set_current_page/>
            <main class="main-content">
                {move || match current_page.get() {
                    Page::Home => view! { <HomePage set_current_page=set_current_page/> }.into_any(),
                    Page::About => view! { <AboutPage/> }.into_any(),
                    Page::Services => view! { <ServicesPage/> }.into_any(),
                    Page::Projects => view! { <ProjectsPage/> }.into_any(),
                    Page::Articles => view! { <ArticlesPage/> }.into_any(),
                    Page::Contact => view! { <ContactPage/> }.into_any(),
                    Page::NotFound => view! { <NotFoundPage set_current_page=set_current_page/> }.into_any(),
                }}
            </main>
            <Footer/>
            <ToastHost/>
        </div>
    }
}
