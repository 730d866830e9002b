//! # vendorhub-client
//!
//! Everything a VendorHub front end needs apart from rendering:
//!
//! - `session` — persisted identity token and decoded user
//! - `api` — typed HTTP client for the vendor endpoints
//! - `list_view` / `controller` — paginated, searchable vendor list with
//!   ownership-gated controls and stale-response handling
//! - `form` — add/edit form model with client-side validation

pub mod api;
pub mod config;
pub mod confirm;
pub mod controller;
pub mod form;
pub mod list_view;
pub mod session;
pub mod token;

pub use api::{VendorApiClient, VendorPage};
pub use config::ClientConfig;
pub use confirm::Confirm;
pub use controller::{DeleteOutcome, VendorListController, confirm_and_delete};
pub use form::VendorForm;
pub use list_view::VendorListView;
pub use session::{Session, SessionStore};

/// Message shown when an action needs a session and there is none.
pub const LOGIN_REQUIRED_MESSAGE: &str = "You must be logged in to perform this action.";
