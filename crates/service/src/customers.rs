use async_trait::async_trait;
use models::{customer, order};
use sea_orm::sea_query::{Expr, LikeExpr};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, DatabaseConnection, EntityTrait, LoaderTrait, PaginatorTrait,
    QueryFilter, QueryOrder,
};
use tracing::{info, instrument};

use crate::dto::{customer_response, CreateCustomer, CustomerResponse, UpdateCustomer};
use crate::errors::ServiceError;
use crate::repository::{Include, Repository};

#[async_trait]
pub trait CustomerRepository:
    Repository<Create = CreateCustomer, Update = UpdateCustomer, Response = CustomerResponse>
{
    /// Like [`Repository::get_by_id`]; with [`Include::Nothing`] orders are
    /// not loaded and the count reads 0.
    async fn get_by_id_including(&self, id: i32, include: Include) -> Result<Option<CustomerResponse>, ServiceError>;
    async fn get_all_including(&self, include: Include) -> Result<Vec<CustomerResponse>, ServiceError>;
    /// Case-sensitive substring match on name or surname.
    async fn search_by_name(&self, term: &str) -> Result<Vec<CustomerResponse>, ServiceError>;
}

pub struct SeaOrmCustomerRepository {
    pub db: DatabaseConnection,
}

impl SeaOrmCustomerRepository {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }

    async fn load(&self, customers: Vec<customer::Model>, include: Include) -> Result<Vec<CustomerResponse>, ServiceError> {
        if include == Include::Nothing {
            return Ok(customers.into_iter().map(|c| customer_response(c, 0)).collect());
        }
        let orders = customers.load_many(order::Entity, &self.db).await?;
        Ok(customers
            .into_iter()
            .zip(orders)
            .map(|(c, owned)| customer_response(c, owned.len()))
            .collect())
    }

    /// Removes the row; the orders foreign key still rejects it when an order
    /// was attached after the count in `delete`.
    async fn remove(&self, id: i32) -> Result<(), ServiceError> {
        let res = customer::Entity::delete_by_id(id).exec(&self.db).await.map_err(|e| {
            ServiceError::foreign_key_or_db(e, || still_has_orders(id, "at least one".into()))
        })?;
        if res.rows_affected > 0 {
            info!(id, "deleted customer");
        }
        Ok(())
    }
}

fn still_has_orders(id: i32, count: String) -> ServiceError {
    ServiceError::Conflict(format!("customer with id {} still has {} order(s)", id, count))
}

/// Escapes `\`, `%` and `_` so the term matches literally inside a LIKE
/// pattern using `\` as the escape character.
fn escape_like(term: &str) -> String {
    let mut out = String::with_capacity(term.len());
    for ch in term.chars() {
        if matches!(ch, '\\' | '%' | '_') {
            out.push('\\');
        }
        out.push(ch);
    }
    out
}

fn name_matches(term: &str) -> Condition {
    let pattern = format!("%{}%", escape_like(term));
    let like = |col: customer::Column| Expr::col((customer::Entity, col)).like(LikeExpr::new(pattern.clone()).escape('\\'));
    Condition::any().add(like(customer::Column::Name)).add(like(customer::Column::Surname))
}

#[async_trait]
impl Repository for SeaOrmCustomerRepository {
    type Create = CreateCustomer;
    type Update = UpdateCustomer;
    type Response = CustomerResponse;

    async fn get_by_id(&self, id: i32) -> Result<Option<CustomerResponse>, ServiceError> {
        self.get_by_id_including(id, Include::Related).await
    }

    async fn get_all(&self) -> Result<Vec<CustomerResponse>, ServiceError> {
        self.get_all_including(Include::Related).await
    }

    #[instrument(skip(self, input))]
    async fn create(&self, input: CreateCustomer) -> Result<CustomerResponse, ServiceError> {
        let created = input.into_active_model().insert(&self.db).await?;
        info!(id = created.id, "created customer");
        Ok(customer_response(created, 0))
    }

    #[instrument(skip(self, input))]
    async fn update(&self, id: i32, input: UpdateCustomer) -> Result<(), ServiceError> {
        let mut am: customer::ActiveModel = customer::Entity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or_else(|| ServiceError::not_found("customer", id))?
            .into();
        input.apply(&mut am);
        am.update(&self.db).await?;
        info!(id, "updated customer");
        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: i32) -> Result<(), ServiceError> {
        let owned = order::Entity::find()
            .filter(order::Column::CustomerId.eq(id))
            .count(&self.db)
            .await?;
        if owned > 0 {
            return Err(still_has_orders(id, owned.to_string()));
        }
        self.remove(id).await
    }
}

#[async_trait]
impl CustomerRepository for SeaOrmCustomerRepository {
    async fn get_by_id_including(&self, id: i32, include: Include) -> Result<Option<CustomerResponse>, ServiceError> {
        let found = customer::Entity::find_by_id(id).one(&self.db).await?;
        let Some(found) = found else { return Ok(None) };
        Ok(self.load(vec![found], include).await?.pop())
    }

    async fn get_all_including(&self, include: Include) -> Result<Vec<CustomerResponse>, ServiceError> {
        let all = customer::Entity::find()
            .order_by_asc(customer::Column::Id)
            .all(&self.db)
            .await?;
        self.load(all, include).await
    }

    #[instrument(skip(self))]
    async fn search_by_name(&self, term: &str) -> Result<Vec<CustomerResponse>, ServiceError> {
        // LIKE narrows the rows; case sensitivity differs per backend, so the
        // exact match is applied afterwards.
        let mut found = customer::Entity::find()
            .filter(name_matches(term))
            .order_by_asc(customer::Column::Id)
            .all(&self.db)
            .await?;
        found.retain(|c| c.name.contains(term) || c.surname.contains(term));
        self.load(found, Include::Related).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::get_db;
    use chrono::{NaiveDate, NaiveTime};
    use models::enums::OrderType;
    use sea_orm::{ActiveValue::NotSet, DatabaseBackend, QueryTrait, Set};

    fn payload(name: &str, surname: &str) -> CreateCustomer {
        CreateCustomer {
            name: name.into(),
            surname: surname.into(),
            phone_number: "123".into(),
            email: format!("{}@test.com", name.to_lowercase()),
            address: None,
        }
    }

    async fn insert_order(db: &DatabaseConnection, customer_id: i32) -> Result<(), anyhow::Error> {
        order::ActiveModel {
            id: NotSet,
            customer_id: Set(customer_id),
            order_type: Set(OrderType::Standard),
            order_date: Set(NaiveDate::from_ymd_opt(2024, 1, 10).unwrap()),
            order_time: Set(NaiveTime::from_hms_opt(10, 0, 0).unwrap()),
            reserved_seconds: Set(3600),
        }
        .insert(db)
        .await?;
        Ok(())
    }

    #[tokio::test]
    async fn customer_crud() -> Result<(), anyhow::Error> {
        let repo = SeaOrmCustomerRepository::new(get_db().await?);

        let created = repo.create(payload("John", "Doe")).await?;
        assert!(created.id > 0);
        assert_eq!(created.orders_count, 0);

        let fetched = repo.get_by_id(created.id).await?.unwrap();
        assert_eq!(fetched, created);

        let mut changed = payload("Johnny", "Doe");
        changed.address = Some("Main St 1".into());
        repo.update(created.id, changed).await?;
        let fetched = repo.get_by_id(created.id).await?.unwrap();
        assert_eq!(fetched.full_name, "Johnny Doe");
        assert_eq!(fetched.address.as_deref(), Some("Main St 1"));

        repo.delete(created.id).await?;
        assert!(repo.get_by_id(created.id).await?.is_none());
        Ok(())
    }

    #[tokio::test]
    async fn update_missing_is_not_found_and_creates_nothing() -> Result<(), anyhow::Error> {
        let repo = SeaOrmCustomerRepository::new(get_db().await?);
        let err = repo.update(42, payload("Ghost", "User")).await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)));
        assert!(repo.get_all().await?.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn delete_missing_is_noop() -> Result<(), anyhow::Error> {
        let repo = SeaOrmCustomerRepository::new(get_db().await?);
        repo.delete(999).await?;
        assert!(repo.get_by_id(999).await?.is_none());
        Ok(())
    }

    #[tokio::test]
    async fn orders_count_matches_owned_orders() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let repo = SeaOrmCustomerRepository::new(db.clone());
        let a = repo.create(payload("Anna", "Smith")).await?;
        let b = repo.create(payload("Bob", "Brown")).await?;
        insert_order(&db, a.id).await?;
        insert_order(&db, a.id).await?;
        insert_order(&db, b.id).await?;

        let all = repo.get_all().await?;
        assert_eq!(all.iter().map(|c| c.id).collect::<Vec<_>>(), vec![a.id, b.id]);
        assert_eq!(all[0].orders_count, 2);
        assert_eq!(all[1].orders_count, 1);
        assert_eq!(repo.get_by_id(a.id).await?.unwrap().orders_count, 2);

        let bare = repo.get_by_id_including(a.id, Include::Nothing).await?.unwrap();
        assert_eq!(bare.orders_count, 0);
        let bare_all = repo.get_all_including(Include::Nothing).await?;
        assert!(bare_all.iter().all(|c| c.orders_count == 0));
        assert_eq!(repo.get_all_including(Include::Related).await?, all);
        Ok(())
    }

    #[tokio::test]
    async fn delete_with_orders_is_conflict() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let repo = SeaOrmCustomerRepository::new(db.clone());
        let c = repo.create(payload("John", "Doe")).await?;
        insert_order(&db, c.id).await?;

        let err = repo.delete(c.id).await.unwrap_err();
        assert!(matches!(err, ServiceError::Conflict(_)));
        assert!(repo.get_by_id(c.id).await?.is_some());
        Ok(())
    }

    #[tokio::test]
    async fn search_is_case_sensitive_on_name_or_surname() -> Result<(), anyhow::Error> {
        let repo = SeaOrmCustomerRepository::new(get_db().await?);
        let lower = repo.create(payload("doe", "Smith")).await?;
        let surname = repo.create(payload("Jane", "Mcdoe")).await?;
        repo.create(payload("John", "Doe")).await?;
        repo.create(payload("Peter", "Parker")).await?;

        let hits = repo.search_by_name("doe").await?;
        let ids: Vec<i32> = hits.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![lower.id, surname.id]);

        assert!(repo.search_by_name("zzz").await?.is_empty());
        Ok(())
    }

    #[test]
    fn escape_like_marks_wildcards() {
        assert_eq!(escape_like("plain"), "plain");
        assert_eq!(escape_like("50%_off"), "50\\%\\_off");
        assert_eq!(escape_like("a\\b"), "a\\\\b");

        let sql = customer::Entity::find()
            .filter(name_matches("50%"))
            .build(DatabaseBackend::Sqlite)
            .to_string();
        assert!(sql.contains(r"LIKE '%50\%%' ESCAPE '\'"), "{sql}");
    }

    #[tokio::test]
    async fn search_treats_wildcards_literally() -> Result<(), anyhow::Error> {
        let repo = SeaOrmCustomerRepository::new(get_db().await?);
        let percent = repo.create(payload("Ann%", "Smith")).await?;
        let underscore = repo.create(payload("Bo_b", "Brown")).await?;
        repo.create(payload("Annie", "Smith")).await?;
        repo.create(payload("Boob", "Brown")).await?;

        let ids = |hits: Vec<CustomerResponse>| hits.iter().map(|c| c.id).collect::<Vec<_>>();
        assert_eq!(ids(repo.search_by_name("%").await?), vec![percent.id]);
        assert_eq!(ids(repo.search_by_name("o_b").await?), vec![underscore.id]);
        assert!(repo.search_by_name("\\").await?.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn removal_rejected_by_foreign_key_is_conflict() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let repo = SeaOrmCustomerRepository::new(db.clone());
        let c = repo.create(payload("John", "Doe")).await?;
        // an order that lands after the ownership count
        insert_order(&db, c.id).await?;

        let err = repo.remove(c.id).await.unwrap_err();
        assert!(matches!(err, ServiceError::Conflict(_)), "{err:?}");
        assert!(repo.get_by_id(c.id).await?.is_some());
        Ok(())
    }
}
