use async_trait::async_trait;
use chrono::NaiveDate;
use models::{customer, order};
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, LoaderTrait, QueryFilter, QueryOrder};
use tracing::{info, instrument};

use crate::dto::{order_response, CreateOrder, OrderResponse, UpdateOrder};
use crate::errors::ServiceError;
use crate::repository::{Include, Repository};

#[async_trait]
pub trait OrderRepository: Repository<Create = CreateOrder, Update = UpdateOrder, Response = OrderResponse> {
    /// Like [`Repository::get_by_id`]; with [`Include::Nothing`] the owner is
    /// not resolved and `customer_name` is absent.
    async fn get_by_id_including(&self, id: i32, include: Include) -> Result<Option<OrderResponse>, ServiceError>;
    async fn get_all_including(&self, include: Include) -> Result<Vec<OrderResponse>, ServiceError>;
    async fn get_orders_by_customer(&self, customer_id: i32) -> Result<Vec<OrderResponse>, ServiceError>;
    /// Both bounds inclusive; `from > to` yields an empty list.
    async fn get_orders_by_date_range(&self, from: NaiveDate, to: NaiveDate) -> Result<Vec<OrderResponse>, ServiceError>;
}

pub struct SeaOrmOrderRepository {
    pub db: DatabaseConnection,
}

impl SeaOrmOrderRepository {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }

    async fn load(&self, orders: Vec<order::Model>, include: Include) -> Result<Vec<OrderResponse>, ServiceError> {
        if include == Include::Nothing {
            return Ok(orders.into_iter().map(|o| order_response(o, None)).collect());
        }
        let owners = orders.load_one(customer::Entity, &self.db).await?;
        Ok(orders
            .into_iter()
            .zip(owners)
            .map(|(o, owner)| order_response(o, owner.as_ref()))
            .collect())
    }

    /// Inserts without the existence check; a customer deleted in the
    /// meantime surfaces through the foreign key as an invalid reference.
    async fn insert(&self, input: CreateOrder) -> Result<order::Model, ServiceError> {
        let customer_id = input.customer_id;
        input
            .into_active_model()
            .insert(&self.db)
            .await
            .map_err(|e| ServiceError::foreign_key_or_db(e, || missing_customer(customer_id)))
    }
}

fn missing_customer(customer_id: i32) -> ServiceError {
    ServiceError::InvalidReference(format!("customer with id {} does not exist", customer_id))
}

#[async_trait]
impl Repository for SeaOrmOrderRepository {
    type Create = CreateOrder;
    type Update = UpdateOrder;
    type Response = OrderResponse;

    async fn get_by_id(&self, id: i32) -> Result<Option<OrderResponse>, ServiceError> {
        self.get_by_id_including(id, Include::Related).await
    }

    async fn get_all(&self) -> Result<Vec<OrderResponse>, ServiceError> {
        self.get_all_including(Include::Related).await
    }

    #[instrument(skip(self, input), fields(customer_id = input.customer_id))]
    async fn create(&self, input: CreateOrder) -> Result<OrderResponse, ServiceError> {
        let owner = customer::Entity::find_by_id(input.customer_id)
            .one(&self.db)
            .await?
            .ok_or_else(|| missing_customer(input.customer_id))?;
        let created = self.insert(input).await?;
        info!(id = created.id, "created order");
        Ok(order_response(created, Some(&owner)))
    }

    #[instrument(skip(self, input))]
    async fn update(&self, id: i32, input: UpdateOrder) -> Result<(), ServiceError> {
        let mut am: order::ActiveModel = order::Entity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or_else(|| ServiceError::not_found("order", id))?
            .into();
        input.apply(&mut am);
        am.update(&self.db).await?;
        info!(id, "updated order");
        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: i32) -> Result<(), ServiceError> {
        let res = order::Entity::delete_by_id(id).exec(&self.db).await?;
        if res.rows_affected > 0 {
            info!(id, "deleted order");
        }
        Ok(())
    }
}

#[async_trait]
impl OrderRepository for SeaOrmOrderRepository {
    async fn get_by_id_including(&self, id: i32, include: Include) -> Result<Option<OrderResponse>, ServiceError> {
        let found = order::Entity::find_by_id(id).one(&self.db).await?;
        let Some(found) = found else { return Ok(None) };
        Ok(self.load(vec![found], include).await?.pop())
    }

    async fn get_all_including(&self, include: Include) -> Result<Vec<OrderResponse>, ServiceError> {
        let all = order::Entity::find().order_by_asc(order::Column::Id).all(&self.db).await?;
        self.load(all, include).await
    }

    async fn get_orders_by_customer(&self, customer_id: i32) -> Result<Vec<OrderResponse>, ServiceError> {
        let found = order::Entity::find()
            .filter(order::Column::CustomerId.eq(customer_id))
            .order_by_asc(order::Column::Id)
            .all(&self.db)
            .await?;
        self.load(found, Include::Related).await
    }

    async fn get_orders_by_date_range(&self, from: NaiveDate, to: NaiveDate) -> Result<Vec<OrderResponse>, ServiceError> {
        if from > to {
            return Ok(Vec::new());
        }
        let found = order::Entity::find()
            .filter(order::Column::OrderDate.between(from, to))
            .order_by_asc(order::Column::OrderDate)
            .order_by_asc(order::Column::Id)
            .all(&self.db)
            .await?;
        self.load(found, Include::Related).await
    }
}
