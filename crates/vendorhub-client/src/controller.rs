//! Drives a [`VendorListView`] against the API.

use std::sync::{Arc, Mutex, MutexGuard};

use tokio::task::JoinHandle;
use tracing::{debug, info};

use vendorhub_core::error::AppError;
use vendorhub_core::result::AppResult;
use vendorhub_core::types::id::VendorId;

use crate::LOGIN_REQUIRED_MESSAGE;
use crate::api::VendorApiClient;
use crate::confirm::Confirm;
use crate::list_view::VendorListView;
use crate::session::Session;

/// Prompt shown before deleting a vendor.
pub const DELETE_PROMPT: &str = "Are you sure you want to delete this vendor?";

/// Result of a delete request from the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted,
    Cancelled,
}

/// Owns the list state and at most one in-flight page fetch.
///
/// Navigating aborts the previous fetch; a response that still arrives
/// late is discarded by its ticket. Dropping the controller aborts the
/// in-flight fetch.
#[derive(Debug)]
pub struct VendorListController {
    api: Arc<VendorApiClient>,
    view: Arc<Mutex<VendorListView>>,
    inflight: Option<JoinHandle<()>>,
}

impl VendorListController {
    /// Create a controller with an empty view. Call [`Self::navigate`] to
    /// load the first page.
    pub fn new(api: Arc<VendorApiClient>, page_size: u64) -> Self {
        Self {
            api,
            view: Arc::new(Mutex::new(VendorListView::new(page_size))),
            inflight: None,
        }
    }

    /// Start loading `page`, superseding any fetch in progress.
    pub fn navigate(&mut self, page: u64) {
        if let Some(handle) = self.inflight.take() {
            handle.abort();
        }

        let (ticket, page, limit) = {
            let mut view = lock(&self.view);
            let ticket = view.begin_fetch(page);
            (ticket, view.page(), view.page_size())
        };
        debug!(page, ticket, "Fetching vendor page");

        let api = Arc::clone(&self.api);
        let view = Arc::clone(&self.view);
        self.inflight = Some(tokio::spawn(async move {
            let result = api.list(page, limit).await;
            if !lock(&view).apply(ticket, result) {
                debug!(ticket, "Discarded stale vendor page");
            }
        }));
    }

    /// Reload the current page.
    pub fn refresh(&mut self) {
        let page = lock(&self.view).page();
        self.navigate(page);
    }

    /// Go to the next page when there is one.
    pub fn next_page(&mut self) {
        let (page, has_next) = {
            let view = lock(&self.view);
            (view.page(), view.has_next())
        };
        if has_next {
            self.navigate(page + 1);
        }
    }

    /// Go to the previous page when there is one.
    pub fn previous_page(&mut self) {
        let (page, has_previous) = {
            let view = lock(&self.view);
            (view.page(), view.has_previous())
        };
        if has_previous {
            self.navigate(page - 1);
        }
    }

    /// Update the search text. The page is not refetched.
    pub fn set_search(&mut self, text: &str) {
        lock(&self.view).set_search(text);
    }

    /// Wait for the in-flight fetch, if any, to finish.
    pub async fn settle(&mut self) {
        if let Some(handle) = self.inflight.take() {
            // An aborted fetch has nothing to apply.
            let _ = handle.await;
        }
    }

    /// Snapshot of the current list state.
    pub fn view(&self) -> VendorListView {
        lock(&self.view).clone()
    }

    /// Delete a vendor after confirmation, then refetch.
    ///
    /// Without a session nothing is sent and the caller gets a
    /// login-required error.
    pub async fn delete(
        &mut self,
        session: Option<&Session>,
        id: VendorId,
        confirm: &dyn Confirm,
    ) -> AppResult<DeleteOutcome> {
        let outcome = confirm_and_delete(&self.api, session, id, confirm).await?;
        if outcome == DeleteOutcome::Cancelled {
            return Ok(outcome);
        }

        let target = {
            let mut view = lock(&self.view);
            view.remove_local(id);
            view.page_after_delete()
        };
        self.navigate(target);
        Ok(DeleteOutcome::Deleted)
    }
}

/// Delete a vendor after checking the session and asking for
/// confirmation. No list state is touched.
pub async fn confirm_and_delete(
    api: &VendorApiClient,
    session: Option<&Session>,
    id: VendorId,
    confirm: &dyn Confirm,
) -> AppResult<DeleteOutcome> {
    let Some(session) = session else {
        return Err(AppError::missing_token(LOGIN_REQUIRED_MESSAGE));
    };
    if !confirm.confirm(DELETE_PROMPT) {
        return Ok(DeleteOutcome::Cancelled);
    }

    api.delete(Some(session), id).await?;
    info!(vendor_id = %id, "Vendor deleted");
    Ok(DeleteOutcome::Deleted)
}

impl Drop for VendorListController {
    fn drop(&mut self) {
        if let Some(handle) = self.inflight.take() {
            handle.abort();
        }
    }
}

fn lock(view: &Mutex<VendorListView>) -> MutexGuard<'_, VendorListView> {
    view.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}
