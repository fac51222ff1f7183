//! Footer Component

use leptos::prelude::*;

const SOCIAL_LINKS: &[(&str, &str)] = &[
    ("GitHub", "https://github.com/umarmajeedofficial"),
    ("LinkedIn", "https://linkedin.com/in/umarmajeedofficial"),
    ("Hashnode", "https://hashnode.com/@umarmajeed"),
];

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="footer-links">
                {SOCIAL_LINKS.iter().map(|(name, url)| view! {
                    <a href=*url target="_blank" rel="noopener noreferrer">{*name}</a>
                }).collect_view()}
            </div>
            <p class="footer-note">
                "© 2026 Umar Majeed. AI Engineer & Machine Learning Specialist."
            </p>
        </footer>
    }
}
