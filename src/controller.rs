//! List and Form Controllers
//!
//! The CRUD core shared by Articles, Projects, and Services. A
//! [`ListController`] owns the in-memory snapshot of one collection and keeps
//! it consistent with the store by refetching after every mutation. A
//! [`FormController`] owns the draft being created or edited, reconciled
//! against a nullable edit pointer.
//!
//! Both are `Copy` handles over arena-allocated signals, so closures capture
//! them by value the same way the rest of the app captures signals.

use std::marker::PhantomData;

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, Collection};
use crate::auth::AuthContext;
use crate::store::{toast_error, toast_success, AppStore};

/// "article" -> "Article", for notification texts.
fn title_label<C: Collection>() -> String {
    let mut chars = C::LABEL.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Console diagnostics for failed operations; the user-facing signal is the
/// toast, so off the browser this is a no-op.
fn console_error(message: String) {
    #[cfg(target_arch = "wasm32")]
    web_sys::console::error_1(&message.into());
    #[cfg(not(target_arch = "wasm32"))]
    let _ = message;
}

/// The `featured` flag of the row `id` points at, if the snapshot has it.
fn featured_flag<C: Collection>(records: &[C::Record], id: &str) -> Option<bool> {
    records
        .iter()
        .find(|record| C::record_id(record) == id)
        .map(C::is_featured)
}

/// Authoritative in-memory snapshot of one collection.
pub struct ListController<C: Collection> {
    pub records: RwSignal<Vec<C::Record>>,
    pub loading: RwSignal<bool>,
    store: AppStore,
    auth: AuthContext,
    _collection: PhantomData<C>,
}

impl<C: Collection> Clone for ListController<C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<C: Collection> Copy for ListController<C> {}

impl<C: Collection> ListController<C> {
    pub fn new(store: AppStore, auth: AuthContext) -> Self {
        Self {
            records: RwSignal::new(Vec::new()),
            loading: RwSignal::new(true),
            store,
            auth,
            _collection: PhantomData,
        }
    }

    /// Admin capability check at the mutation boundary.
    fn guard(self) -> bool {
        match self.auth.require_admin() {
            Ok(()) => true,
            Err(err) => {
                toast_error(self.store, err.to_string());
                false
            }
        }
    }

    /// Replace the snapshot with the store's current rows, newest first.
    /// On failure the previous snapshot stays intact.
    pub fn refresh(self) {
        spawn_local(async move {
            match api::store::fetch_all::<C>().await {
                Ok(rows) => self.records.set(rows),
                Err(err) => {
                    console_error(format!("Error fetching {}: {err}", C::PLURAL));
                    toast_error(self.store, format!("Failed to fetch {}", C::PLURAL));
                }
            }
            self.loading.set(false);
        });
    }

    /// Flip `featured` for one row, then resynchronize. The snapshot is
    /// deliberately stale until the refetch lands; no optimistic patch.
    pub fn toggle_featured(self, id: String) {
        if !self.guard() {
            return;
        }
        let current = featured_flag::<C>(&self.records.get_untracked(), &id);
        let Some(current) = current else {
            // Stale snapshot or a bad id; fails like any other refused write.
            console_error(format!(
                "Error updating featured status: no row with id {id} in snapshot"
            ));
            toast_error(self.store, "Failed to update featured status");
            return;
        };
        spawn_local(async move {
            match api::store::set_featured::<C>(&id, !current).await {
                Ok(_) => {
                    let verb = if current { "unfeatured" } else { "featured" };
                    toast_success(
                        self.store,
                        format!("{} {verb} successfully", title_label::<C>()),
                    );
                    self.refresh();
                }
                Err(err) => {
                    console_error(format!("Error updating featured status: {err}"));
                    toast_error(self.store, "Failed to update featured status");
                }
            }
        });
    }

    /// Delete one row, then resynchronize. A miss (unknown id) fails like
    /// any other rejected write and leaves the snapshot untouched.
    pub fn remove(self, id: String) {
        if !self.guard() {
            return;
        }
        spawn_local(async move {
            match api::store::delete::<C>(&id).await {
                Ok(()) => {
                    toast_success(
                        self.store,
                        format!("{} deleted successfully", title_label::<C>()),
                    );
                    self.refresh();
                }
                Err(err) => {
                    console_error(format!("Error deleting {}: {err}", C::LABEL));
                    toast_error(self.store, format!("Failed to delete {}", C::LABEL));
                }
            }
        });
    }
}

/// Draft state for the create-or-update form, independent of the list.
pub struct FormController<C: Collection> {
    pub draft: RwSignal<C::Draft>,
    /// Edit pointer: `None` is create mode, `Some(id)` targets that row.
    pub editing: RwSignal<Option<String>>,
    pub open: RwSignal<bool>,
    pub submitting: RwSignal<bool>,
    list: ListController<C>,
}

impl<C: Collection> Clone for FormController<C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<C: Collection> Copy for FormController<C> {}

impl<C: Collection> FormController<C> {
    pub fn new(list: ListController<C>) -> Self {
        Self {
            draft: RwSignal::new(C::Draft::default()),
            editing: RwSignal::new(None),
            open: RwSignal::new(false),
            submitting: RwSignal::new(false),
            list,
        }
    }

    /// Blank-seeded draft in create mode.
    pub fn start_create(self) {
        self.draft.set(C::Draft::default());
        self.editing.set(None);
        self.open.set(true);
    }

    /// Copy a row's fields into the draft and point the form at it.
    pub fn start_edit(self, record: &C::Record) {
        self.draft.set(C::to_draft(record));
        self.editing.set(Some(C::record_id(record).to_string()));
        self.open.set(true);
    }

    /// Close the form; the draft is discarded, never merged.
    pub fn cancel(self) {
        self.open.set(false);
        self.editing.set(None);
        self.draft.set(C::Draft::default());
    }

    /// Validate the draft and dispatch an insert or update. Validation
    /// failure leaves the form open with the first violation reported;
    /// success closes the form and resynchronizes the sibling list.
    pub fn submit(self) {
        if self.submitting.get_untracked() {
            return;
        }
        if !self.list.guard() {
            return;
        }
        let payload = match C::to_payload(&self.draft.get_untracked()) {
            Ok(payload) => payload,
            Err(err) => {
                toast_error(self.list.store, err.message);
                return;
            }
        };
        let editing = self.editing.get_untracked();
        self.submitting.set(true);
        spawn_local(async move {
            let outcome = match &editing {
                Some(id) => api::store::update::<C>(id, &payload).await.map(|_| ()),
                None => api::store::insert::<C>(&payload).await.map(|_| ()),
            };
            self.submitting.set(false);
            match outcome {
                Ok(()) => {
                    let verb = if editing.is_some() { "updated" } else { "created" };
                    toast_success(
                        self.list.store,
                        format!("{} {verb} successfully", title_label::<C>()),
                    );
                    self.open.set(false);
                    self.editing.set(None);
                    self.draft.set(C::Draft::default());
                    self.list.refresh();
                }
                Err(err) => {
                    console_error(format!("Error saving {}: {err}", C::LABEL));
                    toast_error(self.list.store, format!("Failed to save {}", C::LABEL));
                }
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::Articles;
    use crate::models::{Article, User};
    use crate::store::{AppState, AppStateStoreFields, ToastKind};
    use reactive_stores::Store;
    use serde_json::json;

    fn admin() -> AuthContext {
        AuthContext::signed_in(User {
            id: "u1".to_string(),
            email: None,
            app_metadata: json!({ "role": "admin" }),
        })
    }

    fn form() -> FormController<Articles> {
        let list = ListController::new(Store::new(AppState::default()), AuthContext::new());
        FormController::new(list)
    }

    fn row() -> Article {
        Article {
            id: "a1".to_string(),
            title: "Edge Inference".to_string(),
            excerpt: "Running models on-device".to_string(),
            content: "Body".to_string(),
            author: "Dr. Umar Majeed".to_string(),
            created_at: "2026-02-01T00:00:00Z".to_string(),
            read_time: 8,
            tags: vec!["AI".to_string(), "Edge".to_string()],
            category: "Engineering".to_string(),
            featured: false,
        }
    }

    #[test]
    fn test_start_create_resets_to_defaults() {
        let form = form();
        form.draft.update(|d| d.title = "leftover".to_string());
        form.editing.set(Some("a9".to_string()));

        form.start_create();

        assert_eq!(form.editing.get_untracked(), None);
        assert!(form.open.get_untracked());
        assert_eq!(form.draft.get_untracked().title, "");
        assert_eq!(form.draft.get_untracked().read_time, 5);
    }

    #[test]
    fn test_start_edit_sets_pointer_and_denormalizes() {
        let form = form();
        form.start_edit(&row());

        assert_eq!(form.editing.get_untracked(), Some("a1".to_string()));
        assert!(form.open.get_untracked());
        let draft = form.draft.get_untracked();
        assert_eq!(draft.title, "Edge Inference");
        assert_eq!(draft.tags, "AI, Edge");
    }

    #[test]
    fn test_cancel_discards_draft() {
        let form = form();
        form.start_edit(&row());
        form.draft.update(|d| d.title = "half-edited".to_string());

        form.cancel();

        assert!(!form.open.get_untracked());
        assert_eq!(form.editing.get_untracked(), None);
        assert_eq!(form.draft.get_untracked().title, "");
    }

    #[test]
    fn test_toggle_featured_unknown_id_reports_failure() {
        let list: ListController<Articles> =
            ListController::new(Store::new(AppState::default()), admin());
        list.records.set(vec![row()]);

        list.toggle_featured("missing".to_string());

        let toasts = list.store.toasts().get_untracked();
        assert_eq!(toasts.len(), 1);
        assert_eq!(toasts[0].kind, ToastKind::Error);
        assert_eq!(toasts[0].message, "Failed to update featured status");
        // No write was dispatched, so the snapshot stays as it was.
        let records = list.records.get_untracked();
        assert_eq!(records.len(), 1);
        assert!(!records[0].featured);
    }

    #[test]
    fn test_signed_out_mutation_refused_with_toast() {
        let list: ListController<Articles> =
            ListController::new(Store::new(AppState::default()), AuthContext::new());
        list.records.set(vec![row()]);

        list.remove("a1".to_string());

        let toasts = list.store.toasts().get_untracked();
        assert_eq!(toasts.len(), 1);
        assert_eq!(toasts[0].kind, ToastKind::Error);
        assert_eq!(toasts[0].message, "Not signed in");
        assert_eq!(list.records.get_untracked().len(), 1);
    }

    #[test]
    fn test_featured_flag_lookup() {
        let rows = vec![row()];
        assert_eq!(featured_flag::<Articles>(&rows, "a1"), Some(false));
        assert_eq!(featured_flag::<Articles>(&rows, "a2"), None);
    }

    #[test]
    fn test_list_starts_loading_with_empty_snapshot() {
        let list: ListController<Articles> =
            ListController::new(Store::new(AppState::default()), AuthContext::new());
        assert!(list.loading.get_untracked());
        assert!(list.records.get_untracked().is_empty());
    }
}
