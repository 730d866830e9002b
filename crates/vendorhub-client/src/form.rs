//! Add/edit vendor form model.

use std::collections::BTreeMap;

use vendorhub_core::error::AppError;
use vendorhub_core::result::AppResult;
use vendorhub_core::types::id::VendorId;
use vendorhub_entity::vendor::model::{Vendor, VendorFields};

use crate::LOGIN_REQUIRED_MESSAGE;
use crate::api::VendorApiClient;
use crate::session::Session;

/// Whether the form creates a new vendor or edits an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit(VendorId),
}

/// Form state: field values plus per-field error messages.
#[derive(Debug, Clone)]
pub struct VendorForm {
    mode: FormMode,
    pub fields: VendorFields,
    errors: BTreeMap<String, String>,
}

impl VendorForm {
    /// An empty "Add New Vendor" form.
    pub fn create() -> Self {
        Self {
            mode: FormMode::Create,
            fields: VendorFields::default(),
            errors: BTreeMap::new(),
        }
    }

    /// An "Edit Vendor" form prefilled from `vendor`.
    pub fn edit(vendor: &Vendor) -> Self {
        Self {
            mode: FormMode::Edit(vendor.id),
            fields: vendor.fields(),
            errors: BTreeMap::new(),
        }
    }

    /// Fetch `id` and open it for editing.
    pub async fn load(
        api: &VendorApiClient,
        session: Option<&Session>,
        id: VendorId,
    ) -> AppResult<Self> {
        let vendor = api.get(session, id).await?;
        Ok(Self::edit(&vendor))
    }

    pub fn mode(&self) -> FormMode {
        self.mode
    }

    pub fn title(&self) -> &'static str {
        match self.mode {
            FormMode::Create => "Add New Vendor",
            FormMode::Edit(_) => "Edit Vendor",
        }
    }

    /// Error message for a field, keyed by its wire name (`accountNo`).
    pub fn error(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(String::as_str)
    }

    pub fn errors(&self) -> &BTreeMap<String, String> {
        &self.errors
    }

    /// Check required fields, recording a message for each failure.
    pub fn validate(&mut self) -> bool {
        match self.fields.clone().checked() {
            Ok(_) => {
                self.errors.clear();
                true
            }
            Err(errors) => {
                self.errors = errors;
                false
            }
        }
    }

    /// Validate and send the form.
    ///
    /// Needs a session; invalid fields fail locally without a request.
    pub async fn submit(
        &mut self,
        api: &VendorApiClient,
        session: Option<&Session>,
    ) -> AppResult<Vendor> {
        if session.is_none() {
            return Err(AppError::missing_token(LOGIN_REQUIRED_MESSAGE));
        }
        if !self.validate() {
            return Err(AppError::validation("Please fix the highlighted fields")
                .with_details(serde_json::json!(self.errors)));
        }

        let fields = self.fields.clone().normalized();
        match self.mode {
            FormMode::Create => api.create(session, &fields).await,
            FormMode::Edit(id) => api.update(session, id, &fields).await,
        }
    }
}
