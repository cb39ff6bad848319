use std::future::Future;
use std::sync::Arc;

use tokio::time::Instant;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info};

use super::dialog::{CreateDialog, UpdateDialog};
use super::filter::filter_records;
use super::loading::{Activity, LoadingPolicy, Operation};
use super::pagination::{total_pages, Pagination};
use crate::client::EntityApi;
use crate::error::{AdminError, AdminResult};
use crate::models::{Draft, Entity};

/// Local state of one entity table kept in step with the remote API.
///
/// The list only ever changes to what the server stated: a page it returned,
/// a record it created or updated, or an id it confirmed deleted. Every
/// operation goes `idle -> busy -> idle`; results arriving after the
/// controller is cancelled or dropped are discarded.
pub struct TableController<E: Entity, A: EntityApi<E>> {
    api: Arc<A>,
    take: u32,
    policy: LoadingPolicy,
    records: Vec<E>,
    selected: Option<E>,
    pagination: Pagination,
    activity: Activity,
    create_dialog: CreateDialog<E::Draft>,
    update_dialog: UpdateDialog,
    cancel: CancellationToken,
}

impl<E: Entity, A: EntityApi<E>> TableController<E, A> {
    pub fn new(api: Arc<A>, take: u32, policy: LoadingPolicy) -> Self {
        Self {
            api,
            take: take.max(1),
            policy,
            records: Vec::new(),
            selected: None,
            pagination: Pagination::default(),
            activity: Activity::Idle,
            create_dialog: CreateDialog::default(),
            update_dialog: UpdateDialog::default(),
            cancel: CancellationToken::new(),
        }
    }

    pub fn records(&self) -> &[E] {
        &self.records
    }

    pub fn take(&self) -> u32 {
        self.take
    }

    pub fn pagination(&self) -> Pagination {
        self.pagination
    }

    pub fn activity(&self) -> Activity {
        self.activity
    }

    pub fn is_busy(&self) -> bool {
        self.activity.is_busy()
    }

    /// Loaded records whose id or name contains `term`, ignoring case.
    pub fn filter(&self, term: &str) -> Vec<&E> {
        filter_records(&self.records, term)
    }

    pub fn selected(&self) -> Option<&E> {
        self.selected.as_ref()
    }

    /// Edits go to a copy; the list is untouched until the server confirms.
    pub fn selected_mut(&mut self) -> Option<&mut E> {
        self.selected.as_mut()
    }

    pub fn select(&mut self, record: &E) {
        self.selected = Some(record.clone());
    }

    /// Select the loaded record with `id`. Returns false when none matches.
    pub fn select_id(&mut self, id: i64) -> bool {
        match self.records.iter().find(|r| r.id() == id) {
            Some(record) => {
                self.selected = Some(record.clone());
                true
            }
            None => false,
        }
    }

    pub fn create_dialog(&self) -> &CreateDialog<E::Draft> {
        &self.create_dialog
    }

    pub fn create_dialog_mut(&mut self) -> &mut CreateDialog<E::Draft> {
        &mut self.create_dialog
    }

    pub fn update_dialog(&self) -> UpdateDialog {
        self.update_dialog
    }

    /// Open the edit dialog for the current selection.
    pub fn open_update(&mut self) -> bool {
        if self.selected.is_some() {
            self.update_dialog.open();
            true
        } else {
            false
        }
    }

    pub fn close_update(&mut self) {
        self.update_dialog.close();
    }

    /// Handle for cancelling in-flight and future operations from elsewhere.
    pub fn cancel_handle(&self) -> CancellationToken {
        self.cancel.clone()
    }

    /// Replace the list with page `page` from the server. On failure the list
    /// is cleared.
    pub async fn load(&mut self, page: u32) -> AdminResult<()> {
        let page = page.max(1);
        let api = Arc::clone(&self.api);
        let take = self.take;

        let result = self
            .run(Operation::Load, async move { api.list(take, page).await })
            .await;

        match result {
            Ok(loaded) => {
                info!(entity = %E::KIND, page, count = loaded.records.len(), "page loaded");
                self.records = loaded.records;
                self.pagination = Pagination {
                    current: page,
                    total: total_pages(loaded.total, self.take),
                };
                Ok(())
            }
            Err(AdminError::Cancelled) => Err(AdminError::Cancelled),
            Err(e) => {
                error!(entity = %E::KIND, page, error = %e, "error fetching records");
                self.records.clear();
                Err(e)
            }
        }
    }

    /// Submit the create dialog's draft.
    pub async fn submit_create(&mut self) -> AdminResult<()> {
        let draft = self.create_dialog.draft().clone();
        self.create(draft).await
    }

    /// Post `draft`. Success appends the returned record and closes the
    /// dialog; any failure lands in the dialog's error and leaves the list as is.
    pub async fn create(&mut self, draft: E::Draft) -> AdminResult<()> {
        if !draft.is_submittable() {
            return Err(AdminError::InvalidInput(format!(
                "{} name is required",
                E::KIND
            )));
        }

        self.create_dialog.clear_error();
        let api = Arc::clone(&self.api);
        let result = self
            .run(Operation::Create, async move { api.create(&draft).await })
            .await;

        match result {
            Ok(record) => {
                info!(entity = %E::KIND, id = record.id(), "record created");
                self.records.push(record);
                self.create_dialog.finish();
                Ok(())
            }
            Err(AdminError::Cancelled) => Err(AdminError::Cancelled),
            Err(e) => {
                error!(entity = %E::KIND, error = %e, "error creating record");
                self.create_dialog.set_error(e.user_message());
                Err(e)
            }
        }
    }

    /// Submit the edited selection.
    pub async fn submit_update(&mut self) -> AdminResult<()> {
        let record = self
            .selected
            .clone()
            .ok_or_else(|| AdminError::InvalidInput(format!("No {} selected", E::KIND)))?;
        self.update(record).await
    }

    /// Put the full record. Success replaces every entry with its id by the
    /// server's version; failure changes nothing.
    pub async fn update(&mut self, record: E) -> AdminResult<()> {
        let id = record.id();
        let api = Arc::clone(&self.api);
        let result = self
            .run(Operation::Update, async move { api.update(&record).await })
            .await;

        match result {
            Ok(updated) => {
                info!(entity = %E::KIND, id, "record updated");
                for entry in self.records.iter_mut().filter(|r| r.id() == id) {
                    *entry = updated.clone();
                }
                self.update_dialog.close();
                Ok(())
            }
            Err(AdminError::Cancelled) => Err(AdminError::Cancelled),
            Err(e) => {
                error!(entity = %E::KIND, id, error = %e, "error updating record");
                Err(e)
            }
        }
    }

    /// Delete the selected record.
    pub async fn submit_delete(&mut self) -> AdminResult<()> {
        let id = self
            .selected
            .as_ref()
            .map(Entity::id)
            .ok_or_else(|| AdminError::InvalidInput(format!("No {} selected", E::KIND)))?;
        self.delete(id).await
    }

    /// Delete by id. Success drops the matching entries; failure changes nothing.
    pub async fn delete(&mut self, id: i64) -> AdminResult<()> {
        let api = Arc::clone(&self.api);
        let result = self
            .run(Operation::Delete, async move { api.delete(id).await })
            .await;

        match result {
            Ok(()) => {
                info!(entity = %E::KIND, id, "record deleted");
                self.records.retain(|r| r.id() != id);
                Ok(())
            }
            Err(AdminError::Cancelled) => Err(AdminError::Cancelled),
            Err(e) => {
                error!(entity = %E::KIND, id, error = %e, "error deleting record");
                Err(e)
            }
        }
    }

    /// Drive one request: mark busy, wait for the response and the minimum
    /// loading time, mark idle. Cancellation wins over a late response.
    async fn run<T, F>(&mut self, operation: Operation, request: F) -> AdminResult<T>
    where
        F: Future<Output = AdminResult<T>>,
    {
        if self.cancel.is_cancelled() {
            return Err(AdminError::Cancelled);
        }

        debug!(entity = %E::KIND, %operation, "operation started");
        self.activity = Activity::Busy(operation);

        let started = Instant::now();
        let policy = self.policy;
        let token = self.cancel.clone();

        let outcome = tokio::select! {
            _ = token.cancelled() => Err(AdminError::Cancelled),
            result = async {
                let result = request.await;
                policy.settle(started).await;
                result
            } => result,
        };

        self.activity = Activity::Idle;
        if outcome.as_ref().is_err_and(AdminError::is_cancelled) {
            debug!(entity = %E::KIND, %operation, "operation cancelled, response discarded");
        }
        outcome
    }
}

impl<E: Entity, A: EntityApi<E>> Drop for TableController<E, A> {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}
