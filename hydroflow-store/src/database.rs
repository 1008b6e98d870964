use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;
use std::time::Duration;
use tracing::info;

const SCHEMA: &[&str] = &[
    "CREATE TABLE IF NOT EXISTS attendants (
        cpf TEXT PRIMARY KEY,
        name TEXT NOT NULL,
        password_hash BLOB NOT NULL,
        password_salt BLOB NOT NULL
    )",
    "CREATE TABLE IF NOT EXISTS clients (
        document TEXT PRIMARY KEY,
        name TEXT NOT NULL,
        email TEXT,
        phone TEXT,
        observations TEXT
    )",
    "CREATE TABLE IF NOT EXISTS vehicles (
        plate TEXT PRIMARY KEY,
        vehicle_type INTEGER NOT NULL,
        client_document TEXT NOT NULL REFERENCES clients(document) ON DELETE CASCADE
    )",
    "CREATE TABLE IF NOT EXISTS services (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        price_motorcycle TEXT NOT NULL,
        price_car_small TEXT NOT NULL,
        price_car_large TEXT NOT NULL,
        duration_minutes INTEGER NOT NULL,
        active INTEGER NOT NULL DEFAULT 1
    )",
    "CREATE TABLE IF NOT EXISTS orders (
        id TEXT PRIMARY KEY,
        vehicle_plate TEXT NOT NULL REFERENCES vehicles(plate) ON DELETE CASCADE,
        attendant_cpf TEXT,
        created_at TEXT NOT NULL,
        status INTEGER NOT NULL,
        subtotal TEXT NOT NULL,
        discount TEXT NOT NULL,
        total TEXT NOT NULL,
        payment_method INTEGER NOT NULL
    )",
    "CREATE TABLE IF NOT EXISTS order_items (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        order_id TEXT NOT NULL REFERENCES orders(id) ON DELETE CASCADE,
        service_id INTEGER NOT NULL,
        quantity INTEGER NOT NULL,
        unit_price TEXT NOT NULL
    )",
];

#[derive(Clone)]
pub struct DbClient {
    pub pool: SqlitePool,
}

impl DbClient {
    /// Open the SQLite database behind a single-connection pool. SQLite
    /// serializes writers anyway; one connection also keeps an in-memory
    /// database alive for the whole pool lifetime.
    pub async fn new(connection_string: &str) -> Result<Self, sqlx::Error> {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .acquire_timeout(Duration::from_secs(3))
            .connect(connection_string)
            .await?;

        Ok(Self { pool })
    }

    /// Bootstrap the schema. Idempotent; stands in for a migration step on
    /// the embedded database file.
    pub async fn init_schema(&self) -> Result<(), sqlx::Error> {
        info!("Initializing database schema...");
        for statement in SCHEMA {
            sqlx::query(statement).execute(&self.pool).await?;
        }
        info!("Schema ready.");
        Ok(())
    }
}
