//! UI Components
//!
//! Reusable Leptos components.

mod delete_confirm_button;
mod footer;
mod navigation;
mod toast;

pub use delete_confirm_button::DeleteConfirmButton;
pub use footer::Footer;
pub use navigation::{Navigation, Page};
pub use toast::ToastHost;
