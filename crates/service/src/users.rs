use async_trait::async_trait;
use models::{enums::JobType, user};
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};
use tracing::{info, instrument};

use crate::dto::{user_response, CreateUser, UpdateUser, UserResponse};
use crate::errors::ServiceError;
use crate::repository::Repository;

#[async_trait]
pub trait UserRepository: Repository<Create = CreateUser, Update = UpdateUser, Response = UserResponse> {
    async fn get_by_job_type(&self, job_type: JobType) -> Result<Vec<UserResponse>, ServiceError>;
}

pub struct SeaOrmUserRepository {
    pub db: DatabaseConnection,
}

impl SeaOrmUserRepository {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }
}

#[async_trait]
impl Repository for SeaOrmUserRepository {
    type Create = CreateUser;
    type Update = UpdateUser;
    type Response = UserResponse;

    async fn get_by_id(&self, id: i32) -> Result<Option<UserResponse>, ServiceError> {
        Ok(user::Entity::find_by_id(id).one(&self.db).await?.map(user_response))
    }

    async fn get_all(&self) -> Result<Vec<UserResponse>, ServiceError> {
        let all = user::Entity::find().order_by_asc(user::Column::Id).all(&self.db).await?;
        Ok(all.into_iter().map(user_response).collect())
    }

    #[instrument(skip(self, input), fields(job_type = %input.job_type))]
    async fn create(&self, input: CreateUser) -> Result<UserResponse, ServiceError> {
        let created = input.into_active_model().insert(&self.db).await?;
        info!(id = created.id, "created user");
        Ok(user_response(created))
    }

    #[instrument(skip(self, input))]
    async fn update(&self, id: i32, input: UpdateUser) -> Result<(), ServiceError> {
        let mut am: user::ActiveModel = user::Entity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or_else(|| ServiceError::not_found("user", id))?
            .into();
        input.apply(&mut am);
        am.update(&self.db).await?;
        info!(id, "updated user");
        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: i32) -> Result<(), ServiceError> {
        user::Entity::delete_by_id(id).exec(&self.db).await?;
        Ok(())
    }
}

#[async_trait]
impl UserRepository for SeaOrmUserRepository {
    async fn get_by_job_type(&self, job_type: JobType) -> Result<Vec<UserResponse>, ServiceError> {
        let found = user::Entity::find()
            .filter(user::Column::JobType.eq(job_type))
            .order_by_asc(user::Column::Id)
            .all(&self.db)
            .await?;
        Ok(found.into_iter().map(user_response).collect())
    }
}
