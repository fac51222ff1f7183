//! Not Found Page

use leptos::prelude::*;

use crate::components::Page;

#[component]
pub fn NotFoundPage(set_current_page: WriteSignal<Page>) -> impl IntoView {
    web_sys::console::error_1(&"404: rendered the not-found page".into());

    view! {
        <div class="page not-found-page">
            <h1>"404"</h1>
            <p>"Oops! The page you are looking for does not exist."</p>
            <button class="primary-btn" on:click=move |_| set_current_page.set(Page::Home)>
                "Return to Home"
            </button>
        </div>
    }
}
