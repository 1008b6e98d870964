use std::str::FromStr;

use async_trait::async_trait;
use hydroflow_catalog::repository::ServiceRepository;
use hydroflow_catalog::Service;
use hydroflow_core::repository::RepoError;
use rust_decimal::Decimal;
use sqlx::{Row, SqlitePool};

pub struct StoreServiceRepository {
    pool: SqlitePool,
}

impl StoreServiceRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

fn decimal_field(row: &sqlx::sqlite::SqliteRow, column: &str) -> Result<Decimal, RepoError> {
    let text: String = row.try_get(column)?;
    Ok(Decimal::from_str(&text)?)
}

fn row_to_service(row: &sqlx::sqlite::SqliteRow) -> Result<Service, RepoError> {
    let id: i64 = row.try_get("id")?;
    Ok(Service {
        id: id as i32,
        name: row.try_get("name")?,
        price_motorcycle: decimal_field(row, "price_motorcycle")?,
        price_car_small: decimal_field(row, "price_car_small")?,
        price_car_large: decimal_field(row, "price_car_large")?,
        duration_minutes: row.try_get("duration_minutes")?,
        active: row.try_get("active")?,
    })
}

#[async_trait]
impl ServiceRepository for StoreServiceRepository {
    async fn create(&self, service: &Service) -> Result<i32, RepoError> {
        let result = sqlx::query(
            "INSERT INTO services (name, price_motorcycle, price_car_small, price_car_large, duration_minutes, active)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        )
        .bind(&service.name)
        .bind(service.price_motorcycle.to_string())
        .bind(service.price_car_small.to_string())
        .bind(service.price_car_large.to_string())
        .bind(service.duration_minutes)
        .bind(service.active)
        .execute(&self.pool)
        .await?;
        Ok(result.last_insert_rowid() as i32)
    }

    async fn get(&self, id: i32) -> Result<Option<Service>, RepoError> {
        let row = sqlx::query("SELECT * FROM services WHERE id = ?1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        row.as_ref().map(row_to_service).transpose()
    }

    async fn list(&self) -> Result<Vec<Service>, RepoError> {
        let rows = sqlx::query("SELECT * FROM services ORDER BY id")
            .fetch_all(&self.pool)
            .await?;
        rows.iter().map(row_to_service).collect()
    }

    async fn update(&self, service: &Service) -> Result<bool, RepoError> {
        let result = sqlx::query(
            "UPDATE services SET name = ?2, price_motorcycle = ?3, price_car_small = ?4,
             price_car_large = ?5, duration_minutes = ?6, active = ?7
             WHERE id = ?1",
        )
        .bind(service.id)
        .bind(&service.name)
        .bind(service.price_motorcycle.to_string())
        .bind(service.price_car_small.to_string())
        .bind(service.price_car_large.to_string())
        .bind(service.duration_minutes)
        .bind(service.active)
        .execute(&self.pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn delete(&self, id: i32) -> Result<bool, RepoError> {
        let result = sqlx::query("DELETE FROM services WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
