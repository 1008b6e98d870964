use async_trait::async_trait;
use hydroflow_core::repository::{RepoError, VehicleRepository};
use hydroflow_core::{Vehicle, VehicleType};
use sqlx::{Row, SqlitePool};

pub struct StoreVehicleRepository {
    pool: SqlitePool,
}

impl StoreVehicleRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

fn row_to_vehicle(row: &sqlx::sqlite::SqliteRow) -> Result<Vehicle, RepoError> {
    let type_code: i64 = row.try_get("vehicle_type")?;
    Ok(Vehicle {
        plate: row.try_get("plate")?,
        vehicle_type: VehicleType::from_i16(type_code as i16),
        client_document: row.try_get("client_document")?,
    })
}

#[async_trait]
impl VehicleRepository for StoreVehicleRepository {
    async fn create(&self, vehicle: &Vehicle) -> Result<(), RepoError> {
        sqlx::query(
            "INSERT INTO vehicles (plate, vehicle_type, client_document) VALUES (?1, ?2, ?3)",
        )
        .bind(&vehicle.plate)
        .bind(vehicle.vehicle_type.as_i16())
        .bind(&vehicle.client_document)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn get(&self, plate: &str) -> Result<Option<Vehicle>, RepoError> {
        let row = sqlx::query("SELECT * FROM vehicles WHERE plate = ?1")
            .bind(plate)
            .fetch_optional(&self.pool)
            .await?;
        row.as_ref().map(row_to_vehicle).transpose()
    }

    async fn list(&self) -> Result<Vec<Vehicle>, RepoError> {
        let rows = sqlx::query("SELECT * FROM vehicles ORDER BY plate")
            .fetch_all(&self.pool)
            .await?;
        rows.iter().map(row_to_vehicle).collect()
    }

    async fn update(&self, vehicle: &Vehicle) -> Result<bool, RepoError> {
        let result = sqlx::query(
            "UPDATE vehicles SET vehicle_type = ?2, client_document = ?3 WHERE plate = ?1",
        )
        .bind(&vehicle.plate)
        .bind(vehicle.vehicle_type.as_i16())
        .bind(&vehicle.client_document)
        .execute(&self.pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn delete(&self, plate: &str) -> Result<bool, RepoError> {
        let result = sqlx::query("DELETE FROM vehicles WHERE plate = ?1")
            .bind(plate)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
