//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The store holds
//! cross-cutting UI state only: the transient toast queue. Content snapshots
//! live in their page's list controller.

use leptos::prelude::*;
use reactive_stores::Store;

/// Toast severity, mapped to a CSS class by the host.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

/// One transient notification.
#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u32,
    pub kind: ToastKind,
    pub message: String,
}

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Pending notifications, newest last
    pub toasts: Vec<Toast>,
    /// Monotonic toast id source
    pub toast_seq: u32,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

/// How long a toast stays visible, in milliseconds.
#[cfg(target_arch = "wasm32")]
const TOAST_LIFETIME_MS: u32 = 4_000;

fn push_toast(store: AppStore, kind: ToastKind, message: String) {
    let id = {
        let seq_field = store.toast_seq();
        let mut seq = seq_field.write();
        *seq = seq.wrapping_add(1);
        *seq
    };
    store.toasts().write().push(Toast { id, kind, message });
    // The dismissal timer needs the browser event loop; native tests
    // inspect the queue directly.
    #[cfg(target_arch = "wasm32")]
    leptos::task::spawn_local(async move {
        gloo_timers::future::TimeoutFuture::new(TOAST_LIFETIME_MS).await;
        store.toasts().write().retain(|toast| toast.id != id);
    });
}

/// Surface a success notification.
pub fn toast_success(store: AppStore, message: impl Into<String>) {
    push_toast(store, ToastKind::Success, message.into());
}

/// Surface a failure notification.
pub fn toast_error(store: AppStore, message: impl Into<String>) {
    push_toast(store, ToastKind::Error, message.into());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toasts_queue_in_order_with_distinct_ids() {
        let store = Store::new(AppState::default());
        toast_success(store, "saved");
        toast_error(store, "failed");

        let toasts = store.toasts().get_untracked();
        assert_eq!(toasts.len(), 2);
        assert_ne!(toasts[0].id, toasts[1].id);
        assert_eq!(toasts[0].kind, ToastKind::Success);
        assert_eq!(toasts[1].message, "failed");
    }
}
