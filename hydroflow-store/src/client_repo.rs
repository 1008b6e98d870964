use async_trait::async_trait;
use hydroflow_core::repository::{ClientRepository, RepoError};
use hydroflow_core::Client;
use sqlx::{Row, SqlitePool};

pub struct StoreClientRepository {
    pool: SqlitePool,
}

impl StoreClientRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

fn row_to_client(row: &sqlx::sqlite::SqliteRow) -> Result<Client, RepoError> {
    Ok(Client {
        document: row.try_get("document")?,
        name: row.try_get("name")?,
        email: row.try_get("email")?,
        phone: row.try_get("phone")?,
        observations: row.try_get("observations")?,
    })
}

#[async_trait]
impl ClientRepository for StoreClientRepository {
    async fn create(&self, client: &Client) -> Result<(), RepoError> {
        sqlx::query(
            "INSERT INTO clients (document, name, email, phone, observations)
             VALUES (?1, ?2, ?3, ?4, ?5)",
        )
        .bind(&client.document)
        .bind(&client.name)
        .bind(&client.email)
        .bind(&client.phone)
        .bind(&client.observations)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn get(&self, document: &str) -> Result<Option<Client>, RepoError> {
        let row = sqlx::query("SELECT * FROM clients WHERE document = ?1")
            .bind(document)
            .fetch_optional(&self.pool)
            .await?;
        row.as_ref().map(row_to_client).transpose()
    }

    async fn list(&self) -> Result<Vec<Client>, RepoError> {
        let rows = sqlx::query("SELECT * FROM clients ORDER BY name")
            .fetch_all(&self.pool)
            .await?;
        rows.iter().map(row_to_client).collect()
    }

    async fn update(&self, client: &Client) -> Result<bool, RepoError> {
        let result = sqlx::query(
            "UPDATE clients SET name = ?2, email = ?3, phone = ?4, observations = ?5
             WHERE document = ?1",
        )
        .bind(&client.document)
        .bind(&client.name)
        .bind(&client.email)
        .bind(&client.phone)
        .bind(&client.observations)
        .execute(&self.pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn delete(&self, document: &str) -> Result<bool, RepoError> {
        let result = sqlx::query("DELETE FROM clients WHERE document = ?1")
            .bind(document)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
