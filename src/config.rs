//! Collaborator Configuration
//!
//! Endpoints and publishable keys for the hosted data store and the
//! email-delivery service. These are baked in at build time, same as the
//! generated client config they replace.

/// Supabase project REST root.
pub const SUPABASE_URL: &str = "https://qwkxvczglnhdristkaeq.supabase.co";

/// Publishable anon key; row-level security gates all writes server-side.
pub const SUPABASE_ANON_KEY: &str = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9.folio-anon-key";

/// Local storage key holding the auth session access token.
pub const SESSION_STORAGE_KEY: &str = "folio.session.token";

/// EmailJS endpoint and identifiers for the contact form.
pub const EMAILJS_ENDPOINT: &str = "https://api.emailjs.com/api/v1.0/email/send";
pub const EMAILJS_SERVICE_ID: &str = "service_folio";
pub const EMAILJS_TEMPLATE_ID: &str = "template_contact";
pub const EMAILJS_PUBLIC_KEY: &str = "3kQxTfA9yWpLCzVnM";

/// Recipient display name baked into every contact message.
pub const CONTACT_RECIPIENT: &str = "Umar Majeed";

/// Default author seeded into a blank article draft.
pub const DEFAULT_AUTHOR: &str = "Dr. Umar Majeed";
