pub mod guard;
pub mod owner_listings;
pub mod search_panel;
pub mod team;

pub use guard::{RequestGuard, Ticket};
pub use owner_listings::{DeleteOutcome, ListingState, LoadOutcome, OwnerListingsView};
pub use search_panel::{SearchOutcome, SearchPanel};
pub use team::TeamShowcase;

use std::sync::{Mutex, MutexGuard, PoisonError};

// View state stays usable even if a holder panicked mid-update
pub(crate) fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
