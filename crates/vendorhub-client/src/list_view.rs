//! State of the paginated, searchable vendor list.

use std::ops::RangeInclusive;

use vendorhub_core::result::AppResult;
use vendorhub_core::types::id::VendorId;
use vendorhub_core::types::pagination::page_count;
use vendorhub_entity::vendor::model::Vendor;
use vendorhub_entity::vendor::policy::can_mutate;

use crate::api::VendorPage;

/// A vendor row as rendered, with its ownership-gated controls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VendorRow<'a> {
    pub vendor: &'a Vendor,
    /// Whether edit and delete controls are shown.
    pub can_edit: bool,
}

/// Pure list state: the current page, search text, loaded rows and
/// fetch bookkeeping.
///
/// Each fetch is stamped with a ticket from [`VendorListView::begin_fetch`];
/// only the response carrying the latest ticket is applied.
#[derive(Debug, Clone)]
pub struct VendorListView {
    page: u64,
    /// Page the loaded rows belong to.
    loaded_page: u64,
    page_size: u64,
    search: String,
    rows: Vec<Vendor>,
    total: u64,
    loading: bool,
    error: Option<String>,
    latest_ticket: u64,
}

impl VendorListView {
    /// An empty view on page 1.
    pub fn new(page_size: u64) -> Self {
        Self {
            page: 1,
            loaded_page: 1,
            page_size: page_size.max(1),
            search: String::new(),
            rows: Vec::new(),
            total: 0,
            loading: false,
            error: None,
            latest_ticket: 0,
        }
    }

    /// Start loading `page`; returns the ticket the response must carry.
    pub fn begin_fetch(&mut self, page: u64) -> u64 {
        self.page = page.max(1);
        self.loading = true;
        self.latest_ticket += 1;
        self.latest_ticket
    }

    /// Apply a fetch result. Returns `false` and changes nothing when
    /// `ticket` has been superseded.
    ///
    /// The page number the server echoes wins over the requested one. A
    /// failed fetch keeps the previous rows and moves back to their page.
    pub fn apply(&mut self, ticket: u64, result: AppResult<VendorPage>) -> bool {
        if ticket != self.latest_ticket {
            return false;
        }
        self.loading = false;
        match result {
            Ok(page) => {
                if page.page > 0 {
                    self.page = page.page;
                }
                self.loaded_page = self.page;
                self.rows = page.vendors;
                self.total = page.total;
                self.error = None;
            }
            Err(err) => {
                self.page = self.loaded_page;
                self.error = Some(err.message);
            }
        }
        true
    }

    /// Set the search text. The current page is kept.
    pub fn set_search(&mut self, text: impl Into<String>) {
        self.search = text.into();
    }

    /// Rows of the loaded page whose name contains the search text,
    /// ignoring case. An empty search shows every row.
    pub fn visible(&self) -> Vec<&Vendor> {
        let needle = self.search.trim().to_lowercase();
        self.rows
            .iter()
            .filter(|v| needle.is_empty() || v.name.to_lowercase().contains(&needle))
            .collect()
    }

    /// Visible rows with controls gated on `email` (empty when logged out).
    pub fn rows_for(&self, email: &str) -> Vec<VendorRow<'_>> {
        self.visible()
            .into_iter()
            .map(|vendor| VendorRow {
                vendor,
                can_edit: can_mutate(vendor, email),
            })
            .collect()
    }

    /// Drop a deleted record from the loaded rows.
    pub fn remove_local(&mut self, id: VendorId) {
        let before = self.rows.len();
        self.rows.retain(|v| v.id != id);
        if self.rows.len() < before {
            self.total = self.total.saturating_sub(1);
        }
    }

    /// Page to show after a delete: one back when the current page has
    /// been emptied and is not the first.
    pub fn page_after_delete(&self) -> u64 {
        if self.rows.is_empty() && self.page > 1 {
            self.page - 1
        } else {
            self.page
        }
    }

    pub fn total_pages(&self) -> u64 {
        page_count(self.total, self.page_size)
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages()
    }

    /// Numbers of every page button.
    pub fn page_numbers(&self) -> RangeInclusive<u64> {
        1..=self.total_pages()
    }

    /// "Showing A to B of T vendors", or "0 to 0" when the loaded page
    /// is empty.
    pub fn summary(&self) -> String {
        let from = self
            .page
            .saturating_sub(1)
            .saturating_mul(self.page_size)
            .saturating_add(1);
        let to = self.page.saturating_mul(self.page_size).min(self.total);
        let (from, to) = if self.rows.is_empty() || from > to {
            (0, 0)
        } else {
            (from, to)
        };
        format!("Showing {from} to {to} of {} vendors", self.total)
    }

    pub fn page(&self) -> u64 {
        self.page
    }

    pub fn page_size(&self) -> u64 {
        self.page_size
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn rows(&self) -> &[Vendor] {
        &self.rows
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Message of the last failed fetch, cleared by the next success.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}
