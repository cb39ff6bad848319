use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

use crate::client::EntityApi;
use crate::error::AdminResult;
use crate::formatting::{row_cells, table_columns};
use crate::models::{Entity, EntityKind, Fields};
use crate::table::{Activity, Pagination, TableController};

/// One rendered table row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub id: i64,
    pub cells: Vec<String>,
}

/// A labelled form field and its current text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormField {
    pub label: &'static str,
    pub value: String,
}

fn form_fields<T: Fields>(source: &T) -> Vec<FormField> {
    T::field_names()
        .iter()
        .enumerate()
        .map(|(index, &label)| FormField {
            label,
            value: source.field(index).unwrap_or_default(),
        })
        .collect()
}

/// Entity-erased view of a table controller, so the app can hold whichever
/// table the current route shows.
#[async_trait]
pub trait TableView: Send {
    fn kind(&self) -> EntityKind;
    fn columns(&self) -> Vec<&'static str>;
    /// Rows of the loaded page matching `term`.
    fn rows(&self, term: &str) -> Vec<Row>;
    fn pagination(&self) -> Pagination;
    fn activity(&self) -> Activity;
    fn cancel_handle(&self) -> CancellationToken;

    fn create_open(&self) -> bool;
    fn open_create(&mut self);
    fn close_create(&mut self);
    fn create_fields(&self) -> Vec<FormField>;
    fn set_create_field(&mut self, index: usize, value: String);
    fn create_error(&self) -> Option<String>;
    fn can_submit_create(&self) -> bool;

    fn select(&mut self, id: i64) -> bool;
    fn selected_id(&self) -> Option<i64>;
    fn update_open(&self) -> bool;
    fn open_update(&mut self) -> bool;
    fn close_update(&mut self);
    fn update_fields(&self) -> Vec<FormField>;
    fn set_update_field(&mut self, index: usize, value: String);

    async fn load(&mut self, page: u32) -> AdminResult<()>;
    async fn submit_create(&mut self) -> AdminResult<()>;
    async fn submit_update(&mut self) -> AdminResult<()>;
    async fn delete(&mut self, id: i64) -> AdminResult<()>;
}

#[async_trait]
impl<E, A> TableView for TableController<E, A>
where
    E: Entity,
    A: EntityApi<E> + 'static,
{
    fn kind(&self) -> EntityKind {
        E::KIND
    }

    fn columns(&self) -> Vec<&'static str> {
        table_columns::<E>()
    }

    fn rows(&self, term: &str) -> Vec<Row> {
        self.filter(term)
            .into_iter()
            .map(|record| Row {
                id: record.id(),
                cells: row_cells(record),
            })
            .collect()
    }

    fn pagination(&self) -> Pagination {
        TableController::pagination(self)
    }

    fn activity(&self) -> Activity {
        TableController::activity(self)
    }

    fn cancel_handle(&self) -> CancellationToken {
        TableController::cancel_handle(self)
    }

    fn create_open(&self) -> bool {
        self.create_dialog().is_open()
    }

    fn open_create(&mut self) {
        self.create_dialog_mut().open();
    }

    fn close_create(&mut self) {
        self.create_dialog_mut().close();
    }

    fn create_fields(&self) -> Vec<FormField> {
        form_fields(self.create_dialog().draft())
    }

    fn set_create_field(&mut self, index: usize, value: String) {
        self.create_dialog_mut().draft_mut().set_field(index, value);
    }

    fn create_error(&self) -> Option<String> {
        self.create_dialog().error().map(str::to_string)
    }

    fn can_submit_create(&self) -> bool {
        self.create_dialog().can_submit(self.is_busy())
    }

    fn select(&mut self, id: i64) -> bool {
        self.select_id(id)
    }

    fn selected_id(&self) -> Option<i64> {
        self.selected().map(Entity::id)
    }

    fn update_open(&self) -> bool {
        self.update_dialog().is_open()
    }

    fn open_update(&mut self) -> bool {
        TableController::open_update(self)
    }

    fn close_update(&mut self) {
        TableController::close_update(self)
    }

    fn update_fields(&self) -> Vec<FormField> {
        self.selected().map(form_fields).unwrap_or_default()
    }

    fn set_update_field(&mut self, index: usize, value: String) {
        if let Some(record) = self.selected_mut() {
            record.set_field(index, value);
        }
    }

    async fn load(&mut self, page: u32) -> AdminResult<()> {
        TableController::load(self, page).await
    }

    async fn submit_create(&mut self) -> AdminResult<()> {
        TableController::submit_create(self).await
    }

    async fn submit_update(&mut self) -> AdminResult<()> {
        TableController::submit_update(self).await
    }

    async fn delete(&mut self, id: i64) -> AdminResult<()> {
        TableController::delete(self, id).await
    }
}
