use crate::models::{Property, UserId};
use crate::notify::{self, Confirmer, Notice, Notifier};
use crate::query;
use crate::store::PropertyStore;
use crate::views::guard::RequestGuard;
use crate::views::lock;
use std::sync::{Arc, Mutex};
use tracing::{debug, error, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListingState {
    Loading,
    /// Load finished. On failure the list keeps whatever it held before and
    /// no notice is raised; `load_failed` lets a renderer say so.
    Ready { load_failed: bool },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    Loaded(usize),
    Failed,
    /// A newer load or an unmount made this response irrelevant
    Stale,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// User declined the confirmation prompt
    Cancelled,
    Deleted,
    /// Store answered with a non-OK status
    Rejected,
    /// Request never got an answer
    Failed,
}

#[derive(Debug)]
struct Listing {
    state: ListingState,
    properties: Vec<Property>,
}

/// Dashboard of the properties owned by the signed-in user
pub struct OwnerListingsView {
    store: Arc<dyn PropertyStore>,
    guard: RequestGuard,
    listing: Mutex<Listing>,
}

impl OwnerListingsView {
    pub fn new(store: Arc<dyn PropertyStore>) -> Self {
        Self {
            store,
            guard: RequestGuard::new(),
            listing: Mutex::new(Listing {
                state: ListingState::Loading,
                properties: Vec::new(),
            }),
        }
    }

    /// Fetch the collection and keep what `user` owns
    pub async fn load(&self, user: Option<&UserId>) -> LoadOutcome {
        let ticket = self.guard.issue();
        lock(&self.listing).state = ListingState::Loading;

        match user {
            Some(user) => info!("Loading properties owned by {}", user),
            None => debug!("No signed-in user; owner filter will match nothing"),
        }

        let result = self.store.fetch_all().await;

        if !self.guard.is_current(ticket) {
            debug!("Discarding stale listing response");
            return LoadOutcome::Stale;
        }

        let mut listing = lock(&self.listing);
        match result {
            Ok(records) => {
                listing.properties = query::owned_by(records, user);
                listing.state = ListingState::Ready { load_failed: false };
                info!("Showing {} owned properties", listing.properties.len());
                LoadOutcome::Loaded(listing.properties.len())
            }
            Err(e) => {
                error!("There was a problem with the fetch operation: {}", e);
                listing.state = ListingState::Ready { load_failed: true };
                LoadOutcome::Failed
            }
        }
    }

    /// Delete one listing after the user confirms
    pub async fn delete(
        &self,
        id: &str,
        confirmer: &dyn Confirmer,
        notifier: &dyn Notifier,
    ) -> DeleteOutcome {
        if !confirmer.confirm(notify::CONFIRM_DELETE) {
            debug!("Delete of {} cancelled", id);
            return DeleteOutcome::Cancelled;
        }

        match self.store.delete(id).await {
            Ok(()) => {
                query::remove_by_id(&mut lock(&self.listing).properties, id);
                notifier.notify(Notice::success(notify::DELETE_SUCCEEDED));
                DeleteOutcome::Deleted
            }
            Err(e) if e.is_rejection() => {
                error!("Delete of {} rejected: {}", id, e);
                notifier.notify(Notice::error(notify::DELETE_REJECTED));
                DeleteOutcome::Rejected
            }
            Err(e) => {
                error!("There was a problem with the delete operation: {}", e);
                notifier.notify(Notice::error(notify::DELETE_FAILED));
                DeleteOutcome::Failed
            }
        }
    }

    /// Responses still in flight will be dropped on arrival
    pub fn unmount(&self) {
        self.guard.invalidate();
    }

    pub fn state(&self) -> ListingState {
        lock(&self.listing).state
    }

    pub fn properties(&self) -> Vec<Property> {
        lock(&self.listing).properties.clone()
    }

    pub fn total(&self) -> usize {
        lock(&self.listing).properties.len()
    }
}
