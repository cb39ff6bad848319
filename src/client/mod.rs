pub mod api_client;
pub mod entity_api;
pub mod mock;

pub use api_client::ApiClient;
pub use entity_api::EntityApi;
pub use mock::MockEntityApi;
