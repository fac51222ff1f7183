//! Contact Page
//!
//! Standalone contact form. Validation failures report the first violated
//! field and never reach the network; transport failures get a generic
//! message and the visitor resubmits manually.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::email::{self, EmailParams};
use crate::config;
use crate::store::{toast_error, toast_success, use_app_store};
use crate::validate::validate_contact;

const CONTACT_INFO: &[(&str, &str)] = &[
    ("Email", "umar@example.com"),
    ("Phone", "+1 (555) 123-4567"),
    ("Location", "San Francisco, CA"),
];

#[component]
pub fn ContactPage() -> impl IntoView {
    let store = use_app_store();
    let (name, set_name) = signal(String::new());
    let (email_addr, set_email_addr) = signal(String::new());
    let (subject, set_subject) = signal(String::new());
    let (message, set_message) = signal(String::new());
    let (submitting, set_submitting) = signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }
        let name_val = name.get_untracked();
        let email_val = email_addr.get_untracked();
        let subject_val = subject.get_untracked();
        let message_val = message.get_untracked();

        if let Err(err) = validate_contact(&name_val, &email_val, &subject_val, &message_val) {
            toast_error(store, err.message);
            return;
        }

        set_submitting.set(true);
        spawn_local(async move {
            let params = EmailParams::contact(&name_val, &email_val, &subject_val, &message_val);
            let outcome = email::send(
                config::EMAILJS_SERVICE_ID,
                config::EMAILJS_TEMPLATE_ID,
                &params,
            )
            .await;
            set_submitting.set(false);
            match outcome {
                Ok(_) => {
                    set_name.set(String::new());
                    set_email_addr.set(String::new());
                    set_subject.set(String::new());
                    set_message.set(String::new());
                    toast_success(store, "Message sent successfully!");
                }
                Err(err) => {
                    web_sys::console::error_1(&format!("Error sending message: {err}").into());
                    toast_error(store, "Failed to send message. Please try again.");
                }
            }
        });
    };

    view! {
        <div class="page contact-page">
            <h1>"Let's Connect"</h1>
            <p class="page-subtitle">
                "Whether you have a question, an idea, or just want to say hello, I'd love to hear from you."
            </p>

            <div class="contact-layout">
                <form class="contact-form" on:submit=on_submit>
                    <label>"Name *"</label>
                    <input
                        type="text"
                        placeholder="Your name"
                        prop:value=move || name.get()
                        on:input=move |ev| set_name.set(event_target_value(&ev))
                    />
                    <label>"Email *"</label>
                    <input
                        type="email"
                        placeholder="your.email@example.com"
                        prop:value=move || email_addr.get()
                        on:input=move |ev| set_email_addr.set(event_target_value(&ev))
                    />
                    <label>"Subject *"</label>
                    <input
                        type="text"
                        placeholder="What's this about?"
                        prop:value=move || subject.get()
                        on:input=move |ev| set_subject.set(event_target_value(&ev))
                    />
                    <label>"Message *"</label>
                    <textarea
                        rows="6"
                        placeholder="Tell me more about your project or question..."
                        prop:value=move || message.get()
                        on:input=move |ev| set_message.set(event_target_value(&ev))
                    ></textarea>
                    <button type="submit" class="primary-btn" disabled=move || submitting.get()>
                        {move || if submitting.get() { "Sending..." } else { "Send Message" }}
                    </button>
                </form>

                <aside class="contact-info">
                    <h3>"Contact Information"</h3>
                    {CONTACT_INFO.iter().map(|(label, value)| view! {
                        <div class="contact-info-entry">
                            <span class="contact-info-label">{*label}</span>
                            <span>{*value}</span>
                        </div>
                    }).collect_view()}
                    <p class="contact-note">
                        "I typically respond to messages within 24 hours."
                    </p>
                </aside>
            </div>
        </div>
    }
}
