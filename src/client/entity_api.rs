use async_trait::async_trait;
use serde_json::Value;
use tracing::debug;

use super::api_client::ApiClient;
use crate::error::{AdminError, AdminResult};
use crate::models::{body_error, Entity, Page};

/// CRUD operations on one entity collection of the remote API.
#[async_trait]
pub trait EntityApi<E: Entity>: Send + Sync {
    /// `GET /private/{entity}?take=&page=`
    async fn list(&self, take: u32, page: u32) -> AdminResult<Page<E>>;

    /// `POST /private/{entity}`, returning the record as created by the server.
    async fn create(&self, draft: &E::Draft) -> AdminResult<E>;

    /// `PUT /private/{entity}/{id}` with the full record. A success without a
    /// record in the body yields the record that was sent.
    async fn update(&self, record: &E) -> AdminResult<E>;

    /// `DELETE /private/{entity}/{id}`
    async fn delete(&self, id: i64) -> AdminResult<()>;
}

fn reject_logical_error(body: &Value) -> AdminResult<()> {
    match body_error(body) {
        Some(message) => Err(AdminError::Rejected(message)),
        None => Ok(()),
    }
}

fn record_path<E: Entity>(id: i64) -> String {
    format!("{}/{}", E::KIND.endpoint(), id)
}

#[async_trait]
impl<E: Entity> EntityApi<E> for ApiClient {
    async fn list(&self, take: u32, page: u32) -> AdminResult<Page<E>> {
        let body = self
            .get_json(
                E::KIND.endpoint(),
                &[("take", take.to_string()), ("page", page.to_string())],
            )
            .await?;
        reject_logical_error(&body)?;
        Ok(Page::from_body(&body))
    }

    async fn create(&self, draft: &E::Draft) -> AdminResult<E> {
        let body = self.post_json(E::KIND.endpoint(), draft).await?;
        reject_logical_error(&body)?;
        Ok(serde_json::from_value(body)?)
    }

    async fn update(&self, record: &E) -> AdminResult<E> {
        let body = self.put_json(&record_path::<E>(record.id()), record).await?;
        reject_logical_error(&body)?;
        if body.get("id").is_none() {
            debug!(entity = %E::KIND, id = record.id(), "update returned no record, keeping the one sent");
            return Ok(record.clone());
        }
        Ok(serde_json::from_value(body)?)
    }

    async fn delete(&self, id: i64) -> AdminResult<()> {
        let body = self.delete_json(&record_path::<E>(id)).await?;
        reject_logical_error(&body)
    }
}
