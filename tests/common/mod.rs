#![allow(dead_code)]

use async_trait::async_trait;
use property_views::{Property, PropertyStore, StoreError, UserId};
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

#[derive(Debug, Clone, Copy)]
pub enum Failure {
    Status(u16),
    Unreachable,
}

impl Failure {
    async fn to_error(self) -> StoreError {
        match self {
            Failure::Status(status) => StoreError::Status { status },
            Failure::Unreachable => refused_transport_error().await,
        }
    }
}

/// A real transport error: connect to a port nobody listens on
async fn refused_transport_error() -> StoreError {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let err = reqwest::Client::new()
        .get(format!("http://{addr}/properties"))
        .send()
        .await
        .unwrap_err();
    StoreError::Transport(err)
}

/// In-memory property store with scriptable failures and latency
#[derive(Default)]
pub struct MemoryStore {
    records: Mutex<Vec<Property>>,
    fetch_failure: Mutex<Option<Failure>>,
    delete_failure: Mutex<Option<Failure>>,
    fetch_delays: Mutex<VecDeque<Duration>>,
    fetch_calls: AtomicUsize,
    delete_calls: AtomicUsize,
}

impl MemoryStore {
    pub fn with_records(records: Vec<Property>) -> Self {
        Self {
            records: Mutex::new(records),
            ..Self::default()
        }
    }

    pub fn fail_fetch(&self, failure: Option<Failure>) {
        *self.fetch_failure.lock().unwrap() = failure;
    }

    pub fn fail_delete(&self, failure: Option<Failure>) {
        *self.delete_failure.lock().unwrap() = failure;
    }

    /// Delay the next fetches, in call order
    pub fn delay_fetches(&self, delays: &[Duration]) {
        self.fetch_delays.lock().unwrap().extend(delays.iter().copied());
    }

    pub fn set_records(&self, records: Vec<Property>) {
        *self.records.lock().unwrap() = records;
    }

    pub fn fetch_calls(&self) -> usize {
        self.fetch_calls.load(Ordering::SeqCst)
    }

    pub fn delete_calls(&self) -> usize {
        self.delete_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PropertyStore for MemoryStore {
    async fn fetch_all(&self) -> Result<Vec<Property>, StoreError> {
        self.fetch_calls.fetch_add(1, Ordering::SeqCst);

        let delay = self.fetch_delays.lock().unwrap().pop_front();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        let failure = *self.fetch_failure.lock().unwrap();
        if let Some(failure) = failure {
            return Err(failure.to_error().await);
        }
        Ok(self.records.lock().unwrap().clone())
    }

    async fn delete(&self, id: &str) -> Result<(), StoreError> {
        self.delete_calls.fetch_add(1, Ordering::SeqCst);

        let failure = *self.delete_failure.lock().unwrap();
        if let Some(failure) = failure {
            return Err(failure.to_error().await);
        }

        let mut records = self.records.lock().unwrap();
        let before = records.len();
        records.retain(|p| p.id != id);
        if records.len() == before {
            return Err(StoreError::Status { status: 404 });
        }
        Ok(())
    }

    fn source_name(&self) -> &str {
        "memory"
    }
}

pub fn property(id: &str, owner: &str, name: &str, location: &str) -> Property {
    Property {
        id: id.to_string(),
        owner_id: Some(UserId::new(owner)),
        name: name.to_string(),
        location: location.to_string(),
        price: 250.0,
        image: format!("https://img.example/{id}.jpg"),
    }
}

pub fn listings() -> Vec<Property> {
    vec![
        property("p1", "u1", "Sunset Villa", "Austin"),
        property("p2", "u2", "Oak House", "Dallas"),
        property("p3", "u1", "Harbor Loft", "Galveston"),
        property("p4", "u1", "Pine Cottage", "Austin"),
    ]
}

pub fn ids(records: &[Property]) -> Vec<String> {
    records.iter().map(|p| p.id.clone()).collect()
}
