use async_trait::async_trait;
use models::service_type;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder};
use tracing::{info, instrument};

use crate::dto::{service_type_response, CreateServiceType, ServiceTypeResponse, UpdateServiceType};
use crate::errors::ServiceError;
use crate::repository::Repository;

pub trait ServiceTypeRepository:
    Repository<Create = CreateServiceType, Update = UpdateServiceType, Response = ServiceTypeResponse>
{
}

pub struct SeaOrmServiceTypeRepository {
    pub db: DatabaseConnection,
}

impl SeaOrmServiceTypeRepository {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }
}

#[async_trait]
impl Repository for SeaOrmServiceTypeRepository {
    type Create = CreateServiceType;
    type Update = UpdateServiceType;
    type Response = ServiceTypeResponse;

    async fn get_by_id(&self, id: i32) -> Result<Option<ServiceTypeResponse>, ServiceError> {
        Ok(service_type::Entity::find_by_id(id).one(&self.db).await?.map(service_type_response))
    }

    async fn get_all(&self) -> Result<Vec<ServiceTypeResponse>, ServiceError> {
        let all = service_type::Entity::find()
            .order_by_asc(service_type::Column::Id)
            .all(&self.db)
            .await?;
        Ok(all.into_iter().map(service_type_response).collect())
    }

    #[instrument(skip(self, input))]
    async fn create(&self, input: CreateServiceType) -> Result<ServiceTypeResponse, ServiceError> {
        let created = input.into_active_model().insert(&self.db).await?;
        info!(id = created.id, "created service type");
        Ok(service_type_response(created))
    }

    #[instrument(skip(self, input))]
    async fn update(&self, id: i32, input: UpdateServiceType) -> Result<(), ServiceError> {
        let mut am: service_type::ActiveModel = service_type::Entity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or_else(|| ServiceError::not_found("service type", id))?
            .into();
        input.apply(&mut am);
        am.update(&self.db).await?;
        info!(id, "updated service type");
        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: i32) -> Result<(), ServiceError> {
        service_type::Entity::delete_by_id(id).exec(&self.db).await?;
        Ok(())
    }
}

impl ServiceTypeRepository for SeaOrmServiceTypeRepository {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::get_db;

    #[tokio::test]
    async fn service_type_crud() -> Result<(), anyhow::Error> {
        let repo = SeaOrmServiceTypeRepository::new(get_db().await?);
        let created = repo
            .create(CreateServiceType { name: "Haircut".into(), price: Some(300), min_price: None, max_price: None })
            .await?;
        assert_eq!(repo.get_by_id(created.id).await?, Some(created.clone()));

        repo.update(
            created.id,
            CreateServiceType { name: "Haircut".into(), price: None, min_price: Some(200), max_price: Some(500) },
        )
        .await?;
        let after = repo.get_by_id(created.id).await?.unwrap();
        assert_eq!(after.price, None);
        assert_eq!((after.min_price, after.max_price), (Some(200), Some(500)));

        let err = repo
            .update(404, CreateServiceType { name: "X".into(), price: None, min_price: None, max_price: None })
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)));

        repo.delete(created.id).await?;
        repo.delete(created.id).await?;
        assert!(repo.get_all().await?.is_empty());
        Ok(())
    }
}
