//! Toast Host Component
//!
//! Renders the transient notification queue from the global store; toasts
//! auto-dismiss after a few seconds (see `store.rs`) or on click.

use leptos::prelude::*;

use crate::store::{use_app_store, AppStateStoreFields, ToastKind};

#[component]
pub fn ToastHost() -> impl IntoView {
    let store = use_app_store();

    view! {
        <div class="toast-host">
            <For
                each=move || store.toasts().get()
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    let class = match toast.kind {
                        ToastKind::Success => "toast success",
                        ToastKind::Error => "toast error",
                    };
                    view! {
                        <div
                            class=class
                            on:click=move |_| {
                                store.toasts().write().retain(|t| t.id != id);
                            }
                        >
                            {toast.message}
                        </div>
                    }
                }
            />
        </div>
    }
}
