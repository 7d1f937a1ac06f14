//! Signal-backed store for the price list.
//!
//! Owns the fetched records and funnels every mutation through an index so a
//! tier edit can only ever touch the record it addresses. Edits stay local
//! until [`SellingPriceStore::save`] pushes one record; a successful save
//! triggers a full reload rather than a local patch, and a failed save leaves
//! the local edit in place (the form keeps showing it) while the server keeps
//! its old state until the next reload.

use contracts::domain::selling_price::PriceRecord;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::api;

/// How long the "saved" notice stays on screen.
const NOTICE_DURATION_MS: u32 = 3_000;

#[derive(Clone, Copy)]
pub struct SellingPriceStore {
    pub records: RwSignal<Vec<PriceRecord>>,
    pub loading: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
    pub notice: RwSignal<Option<String>>,
}

impl SellingPriceStore {
    pub fn new() -> Self {
        Self {
            records: RwSignal::new(Vec::new()),
            loading: RwSignal::new(true),
            error: RwSignal::new(None),
            notice: RwSignal::new(None),
        }
    }

    /// Fetch all price records; the result replaces the entire local list.
    /// On failure the list is left empty and the error is surfaced.
    pub fn load(self) {
        self.loading.set(true);
        spawn_local(async move {
            match api::fetch_prices().await {
                Ok(list) => {
                    self.records.set(list);
                    self.error.set(None);
                }
                Err(e) => {
                    log::error!("Error fetching prices: {}", e);
                    self.records.set(Vec::new());
                    self.error.set(Some(e));
                }
            }
            self.loading.set(false);
        });
    }

    /// Create default price records for products that have none, then reload.
    pub fn initialize_missing(self) {
        spawn_local(async move {
            match api::initialize_prices().await {
                Ok(()) => self.load(),
                Err(e) => {
                    log::error!("Initialization failed: {}", e);
                    self.error.set(Some(format!("Initialization failed: {}", e)));
                }
            }
        });
    }

    /// Mutate the record at `index` in place. Out-of-range indexes are
    /// ignored; other records are unreachable from the closure.
    pub fn update_record(self, index: usize, f: impl FnOnce(&mut PriceRecord)) {
        self.records.update(|list| {
            if let Some(record) = list.get_mut(index) {
                f(record);
            }
        });
    }

    /// Push the record at `index`: one PUT carrying the base price and the
    /// full discount array. Success reloads the list and shows a transient
    /// notice; failure surfaces the backend message without rolling back the
    /// local edit.
    pub fn save(self, index: usize) {
        let Some((id, update)) = self
            .records
            .with_untracked(|list| list.get(index).map(|r| (r.id.clone(), r.to_update())))
        else {
            return;
        };

        spawn_local(async move {
            match api::update_price(&id, &update).await {
                Ok(()) => {
                    self.error.set(None);
                    self.notice.set(Some("Price updated successfully".to_string()));
                    self.load();
                    TimeoutFuture::new(NOTICE_DURATION_MS).await;
                    self.notice.set(None);
                }
                Err(e) => {
                    log::error!("Update failed: {}", e);
                    self.error.set(Some(e));
                }
            }
        });
    }
}

impl Default for SellingPriceStore {
    fn default() -> Self {
        Self::new()
    }
}
