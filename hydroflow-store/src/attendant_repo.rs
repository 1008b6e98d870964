use async_trait::async_trait;
use hydroflow_core::repository::{AttendantRepository, RepoError};
use hydroflow_core::Attendant;
use sqlx::{Row, SqlitePool};

pub struct StoreAttendantRepository {
    pool: SqlitePool,
}

impl StoreAttendantRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AttendantRepository for StoreAttendantRepository {
    async fn create(&self, attendant: &Attendant) -> Result<(), RepoError> {
        sqlx::query(
            "INSERT INTO attendants (cpf, name, password_hash, password_salt)
             VALUES (?1, ?2, ?3, ?4)",
        )
        .bind(&attendant.cpf)
        .bind(&attendant.name)
        .bind(&attendant.password_hash)
        .bind(&attendant.password_salt)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn get(&self, cpf: &str) -> Result<Option<Attendant>, RepoError> {
        let row = sqlx::query("SELECT * FROM attendants WHERE cpf = ?1")
            .bind(cpf)
            .fetch_optional(&self.pool)
            .await?;

        match row {
            Some(row) => Ok(Some(Attendant {
                cpf: row.try_get("cpf")?,
                name: row.try_get("name")?,
                password_hash: row.try_get("password_hash")?,
                password_salt: row.try_get("password_salt")?,
            })),
            None => Ok(None),
        }
    }

    async fn count(&self) -> Result<i64, RepoError> {
        let row = sqlx::query("SELECT COUNT(*) AS n FROM attendants")
            .fetch_one(&self.pool)
            .await?;
        Ok(row.try_get("n")?)
    }
}
