//! In-memory entity API for tests and offline demos

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::Value;
use tokio::time::{sleep, Duration};

use super::entity_api::EntityApi;
use crate::error::{AdminError, AdminResult};
use crate::models::{Entity, Page};

/// Builds the record the server would return for a draft and a fresh id.
type RecordFactory<E> = Box<dyn Fn(i64, &<E as Entity>::Draft) -> E + Send + Sync>;

/// Turns a submitted record into the version the server stores and returns.
type UpdateHook<E> = Box<dyn Fn(E) -> E + Send + Sync>;

/// Mock entity API backed by a vector, with scriptable failures
pub struct MockEntityApi<E: Entity> {
    /// Records "on the server"
    records: Mutex<Vec<E>>,

    /// Total reported by list calls; defaults to the record count
    reported_total: Option<u64>,

    /// Raw list body returned instead of the records, to simulate bad shapes
    raw_list_body: Option<Value>,

    /// Builds created records
    factory: RecordFactory<E>,

    /// Applied to records on update; identity when unset
    on_update: Option<UpdateHook<E>>,

    next_id: Mutex<i64>,

    /// Logical error returned by every mutating call
    rejection: Option<String>,

    /// Transport failure returned by every call
    transport_failure: Option<String>,

    /// Simulated latency
    delay: Duration,

    calls: AtomicUsize,
}

impl<E: Entity> MockEntityApi<E> {
    /// Create a new mock holding `records`
    pub fn new<F>(records: Vec<E>, factory: F) -> Self
    where
        F: Fn(i64, &E::Draft) -> E + Send + Sync + 'static,
    {
        let next_id = records.iter().map(Entity::id).max().unwrap_or(0) + 1;
        Self {
            records: Mutex::new(records),
            reported_total: None,
            raw_list_body: None,
            factory: Box::new(factory),
            on_update: None,
            next_id: Mutex::new(next_id),
            rejection: None,
            transport_failure: None,
            delay: Duration::ZERO,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn with_total(mut self, total: u64) -> Self {
        self.reported_total = Some(total);
        self
    }

    /// Answer list calls by parsing `body` the way a real response is parsed
    pub fn with_list_body(mut self, body: Value) -> Self {
        self.raw_list_body = Some(body);
        self
    }

    /// Answer updates with `hook(record)` instead of the record as sent
    pub fn with_update_hook<F>(mut self, hook: F) -> Self
    where
        F: Fn(E) -> E + Send + Sync + 'static,
    {
        self.on_update = Some(Box::new(hook));
        self
    }

    /// Configure mutating calls to report `message` in the body
    pub fn with_rejection(mut self, message: impl Into<String>) -> Self {
        self.rejection = Some(message.into());
        self
    }

    /// Configure every call to fail before reaching the "server"
    pub fn with_transport_failure(mut self, message: impl Into<String>) -> Self {
        self.transport_failure = Some(message.into());
        self
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Number of calls received, failed ones included
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn stored(&self) -> Vec<E> {
        self.records.lock().map(|r| r.clone()).unwrap_or_default()
    }

    async fn enter(&self) -> AdminResult<()> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if !self.delay.is_zero() {
            sleep(self.delay).await;
        }
        match &self.transport_failure {
            Some(message) => Err(AdminError::ApiError(message.clone())),
            None => Ok(()),
        }
    }

    fn check_rejection(&self) -> AdminResult<()> {
        match &self.rejection {
            Some(message) => Err(AdminError::Rejected(message.clone())),
            None => Ok(()),
        }
    }

    fn lock_records(&self) -> AdminResult<std::sync::MutexGuard<'_, Vec<E>>> {
        self.records
            .lock()
            .map_err(|_| AdminError::Unknown("mock store poisoned".to_string()))
    }
}

#[async_trait]
impl<E: Entity> EntityApi<E> for MockEntityApi<E> {
    async fn list(&self, take: u32, page: u32) -> AdminResult<Page<E>> {
        self.enter().await?;

        if let Some(body) = &self.raw_list_body {
            return Ok(Page::from_body(body));
        }

        let records = self.lock_records()?;
        let take = take.max(1) as usize;
        let skip = (page.max(1) as usize - 1) * take;
        Ok(Page {
            records: records.iter().skip(skip).take(take).cloned().collect(),
            total: self.reported_total.or(Some(records.len() as u64)),
        })
    }

    async fn create(&self, draft: &E::Draft) -> AdminResult<E> {
        self.enter().await?;
        self.check_rejection()?;

        let id = {
            let mut next_id = self
                .next_id
                .lock()
                .map_err(|_| AdminError::Unknown("mock id counter poisoned".to_string()))?;
            let id = *next_id;
            *next_id += 1;
            id
        };
        let record = (self.factory)(id, draft);
        self.lock_records()?.push(record.clone());
        Ok(record)
    }

    async fn update(&self, record: &E) -> AdminResult<E> {
        self.enter().await?;
        self.check_rejection()?;

        let mut records = self.lock_records()?;
        match records.iter_mut().find(|r| r.id() == record.id()) {
            Some(stored) => {
                let saved = match &self.on_update {
                    Some(hook) => hook(record.clone()),
                    None => record.clone(),
                };
                *stored = saved.clone();
                Ok(saved)
            }
            None => Err(AdminError::Rejected(format!("{} not found", E::KIND))),
        }
    }

    async fn delete(&self, id: i64) -> AdminResult<()> {
        self.enter().await?;
        self.check_rejection()?;

        let mut records = self.lock_records()?;
        let before = records.len();
        records.retain(|r| r.id() != id);
        if records.len() == before {
            return Err(AdminError::Rejected(format!("{} not found", E::KIND)));
        }
        Ok(())
    }
}
