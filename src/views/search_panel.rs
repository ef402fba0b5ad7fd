use crate::models::Property;
use crate::notify::{self, Notice, Notifier};
use crate::query::{self, SearchQuery};
use crate::store::PropertyStore;
use crate::views::guard::RequestGuard;
use crate::views::lock;
use std::sync::{Arc, Mutex};
use tracing::{debug, error, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchOutcome {
    /// Query was blank; nothing was fetched
    Invalid,
    Matched(usize),
    NoResults,
    Failed,
    /// A later search was issued before this one resolved
    Superseded,
}

/// Free-text search over name and location
pub struct SearchPanel {
    store: Arc<dyn PropertyStore>,
    guard: RequestGuard,
    query: Mutex<String>,
    results: Mutex<Vec<Property>>,
}

impl SearchPanel {
    pub fn new(store: Arc<dyn PropertyStore>) -> Self {
        Self {
            store,
            guard: RequestGuard::new(),
            query: Mutex::new(String::new()),
            results: Mutex::new(Vec::new()),
        }
    }

    pub fn set_query(&self, text: impl Into<String>) {
        *lock(&self.query) = text.into();
    }

    pub fn query(&self) -> String {
        lock(&self.query).clone()
    }

    pub fn results(&self) -> Vec<Property> {
        lock(&self.results).clone()
    }

    /// Set the query text and run it
    pub async fn search_for(&self, text: impl Into<String>, notifier: &dyn Notifier) -> SearchOutcome {
        self.set_query(text);
        self.search(notifier).await
    }

    /// Run the current query against the whole collection.
    ///
    /// Results are replaced, never merged. On failure the previous results
    /// stay as they were.
    pub async fn search(&self, notifier: &dyn Notifier) -> SearchOutcome {
        let query = match SearchQuery::parse(&self.query()) {
            Ok(query) => query,
            Err(_) => {
                notifier.notify(Notice::error(notify::EMPTY_QUERY));
                return SearchOutcome::Invalid;
            }
        };

        let ticket = self.guard.issue();
        debug!("Searching for {:?}", query.as_str());

        let result = self.store.fetch_all().await;

        if !self.guard.is_current(ticket) {
            debug!("Discarding superseded search for {:?}", query.as_str());
            return SearchOutcome::Superseded;
        }

        match result {
            Ok(records) => {
                let matches = query::search(records, &query);
                let count = matches.len();
                *lock(&self.results) = matches;
                info!("Search for {:?} matched {} properties", query.as_str(), count);

                if count == 0 {
                    notifier.notify(Notice::info(notify::NO_RESULTS));
                    SearchOutcome::NoResults
                } else {
                    SearchOutcome::Matched(count)
                }
            }
            Err(e) => {
                error!("Error during search: {}", e);
                notifier.notify(Notice::error(notify::SEARCH_FAILED));
                SearchOutcome::Failed
            }
        }
    }

    pub fn unmount(&self) {
        self.guard.invalidate();
    }
}
