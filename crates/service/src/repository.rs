use async_trait::async_trait;

use crate::errors::ServiceError;

/// Whether a read resolves the entity's relation (customer → orders,
/// order → customer) in the same operation. Chosen per call through the
/// `*_including` reads; the plain [`Repository`] reads use `Related`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Include {
    Related,
    Nothing,
}

/// CRUD shape shared by every repository.
///
/// `update` reports a missing row as [`ServiceError::NotFound`]; `delete`
/// of a missing row succeeds silently.
#[async_trait]
pub trait Repository: Send + Sync {
    type Create: Send + 'static;
    type Update: Send + 'static;
    type Response: Send + 'static;

    async fn get_by_id(&self, id: i32) -> Result<Option<Self::Response>, ServiceError>;
    async fn get_all(&self) -> Result<Vec<Self::Response>, ServiceError>;
    async fn create(&self, input: Self::Create) -> Result<Self::Response, ServiceError>;
    async fn update(&self, id: i32, input: Self::Update) -> Result<(), ServiceError>;
    async fn delete(&self, id: i32) -> Result<(), ServiceError>;
}
