use std::str::FromStr;

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use hydroflow_core::{OrderStatus, PaymentMethod};
use hydroflow_order::repository::OrderRepository;
use hydroflow_order::{Order, OrderItem};
use hydroflow_core::repository::RepoError;
use rust_decimal::Decimal;
use sqlx::{Row, SqlitePool};
use uuid::Uuid;

pub struct StoreOrderRepository {
    pool: SqlitePool,
}

impl StoreOrderRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    async fn items_for(&self, order_id: Uuid) -> Result<Vec<OrderItem>, RepoError> {
        let rows = sqlx::query(
            "SELECT service_id, quantity, unit_price FROM order_items
             WHERE order_id = ?1 ORDER BY id",
        )
        .bind(order_id.to_string())
        .fetch_all(&self.pool)
        .await?;

        rows.iter()
            .map(|row| {
                let quantity: i64 = row.try_get("quantity")?;
                Ok(OrderItem {
                    service_id: row.try_get("service_id")?,
                    quantity: u32::try_from(quantity)?,
                    unit_price: decimal_field(row, "unit_price")?,
                })
            })
            .collect()
    }
}

fn decimal_field(row: &sqlx::sqlite::SqliteRow, column: &str) -> Result<Decimal, RepoError> {
    let text: String = row.try_get(column)?;
    Ok(Decimal::from_str(&text)?)
}

fn row_to_order(row: &sqlx::sqlite::SqliteRow) -> Result<Order, RepoError> {
    let id: String = row.try_get("id")?;
    let created_at: String = row.try_get("created_at")?;
    let status_code: i64 = row.try_get("status")?;
    let payment_code: i64 = row.try_get("payment_method")?;

    Ok(Order {
        id: Uuid::parse_str(&id)?,
        vehicle_plate: row.try_get("vehicle_plate")?,
        attendant_cpf: row.try_get("attendant_cpf")?,
        created_at: DateTime::parse_from_rfc3339(&created_at)?.with_timezone(&Utc),
        status: OrderStatus::from_i16(status_code as i16)
            .ok_or_else(|| format!("unknown order status code {status_code}"))?,
        subtotal: decimal_field(row, "subtotal")?,
        discount: decimal_field(row, "discount")?,
        total: decimal_field(row, "total")?,
        payment_method: PaymentMethod::from_i16(payment_code as i16)
            .ok_or_else(|| format!("unknown payment method code {payment_code}"))?,
        items: Vec::new(),
    })
}

#[async_trait]
impl OrderRepository for StoreOrderRepository {
    async fn create_order(&self, order: &Order) -> Result<(), RepoError> {
        let mut tx = self.pool.begin().await?;

        sqlx::query(
            "INSERT INTO orders (id, vehicle_plate, attendant_cpf, created_at, status,
                                 subtotal, discount, total, payment_method)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
        )
        .bind(order.id.to_string())
        .bind(&order.vehicle_plate)
        .bind(&order.attendant_cpf)
        .bind(order.created_at.to_rfc3339())
        .bind(order.status.as_i16())
        .bind(order.subtotal.to_string())
        .bind(order.discount.to_string())
        .bind(order.total.to_string())
        .bind(order.payment_method.as_i16())
        .execute(&mut *tx)
        .await?;

        for item in &order.items {
            sqlx::query(
                "INSERT INTO order_items (order_id, service_id, quantity, unit_price)
                 VALUES (?1, ?2, ?3, ?4)",
            )
            .bind(order.id.to_string())
            .bind(item.service_id)
            .bind(i64::from(item.quantity))
            .bind(item.unit_price.to_string())
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;
        Ok(())
    }

    async fn get_order(&self, id: Uuid) -> Result<Option<Order>, RepoError> {
        let row = sqlx::query("SELECT * FROM orders WHERE id = ?1")
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await?;

        match row {
            Some(row) => {
                let mut order = row_to_order(&row)?;
                order.items = self.items_for(order.id).await?;
                Ok(Some(order))
            }
            None => Ok(None),
        }
    }

    async fn list_orders(&self) -> Result<Vec<Order>, RepoError> {
        let rows = sqlx::query("SELECT * FROM orders ORDER BY created_at DESC")
            .fetch_all(&self.pool)
            .await?;

        let mut orders = Vec::with_capacity(rows.len());
        for row in &rows {
            let mut order = row_to_order(row)?;
            order.items = self.items_for(order.id).await?;
            orders.push(order);
        }
        Ok(orders)
    }

    async fn list_orders_for_day(&self, date: NaiveDate) -> Result<Vec<Order>, RepoError> {
        // created_at is stored as RFC 3339, so the first ten characters are
        // the UTC calendar date.
        let rows = sqlx::query(
            "SELECT * FROM orders WHERE substr(created_at, 1, 10) = ?1 ORDER BY created_at",
        )
        .bind(date.to_string())
        .fetch_all(&self.pool)
        .await?;

        let mut orders = Vec::with_capacity(rows.len());
        for row in &rows {
            let mut order = row_to_order(row)?;
            order.items = self.items_for(order.id).await?;
            orders.push(order);
        }
        Ok(orders)
    }

    async fn save_order(&self, order: &Order) -> Result<(), RepoError> {
        let mut tx = self.pool.begin().await?;

        sqlx::query(
            "UPDATE orders SET status = ?2, subtotal = ?3, discount = ?4, total = ?5,
                               payment_method = ?6
             WHERE id = ?1",
        )
        .bind(order.id.to_string())
        .bind(order.status.as_i16())
        .bind(order.subtotal.to_string())
        .bind(order.discount.to_string())
        .bind(order.total.to_string())
        .bind(order.payment_method.as_i16())
        .execute(&mut *tx)
        .await?;

        sqlx::query("DELETE FROM order_items WHERE order_id = ?1")
            .bind(order.id.to_string())
            .execute(&mut *tx)
            .await?;

        for item in &order.items {
            sqlx::query(
                "INSERT INTO order_items (order_id, service_id, quantity, unit_price)
                 VALUES (?1, ?2, ?3, ?4)",
            )
            .bind(order.id.to_string())
            .bind(item.service_id)
            .bind(i64::from(item.quantity))
            .bind(item.unit_price.to_string())
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;
        Ok(())
    }

    async fn delete_order(&self, id: Uuid) -> Result<bool, RepoError> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("DELETE FROM order_items WHERE order_id = ?1")
            .bind(id.to_string())
            .execute(&mut *tx)
            .await?;

        let result = sqlx::query("DELETE FROM orders WHERE id = ?1")
            .bind(id.to_string())
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(result.rows_affected() > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::DbClient;
    use crate::{StoreClientRepository, StoreVehicleRepository};
    use hydroflow_core::repository::{ClientRepository, VehicleRepository};
    use hydroflow_core::{Client, Vehicle, VehicleType};
    use rust_decimal_macros::dec;

    async fn store() -> DbClient {
        let db = DbClient::new("sqlite::memory:").await.unwrap();
        db.init_schema().await.unwrap();

        StoreClientRepository::new(db.pool.clone())
            .create(&Client {
                document: "12345678900".to_string(),
                name: "Ana".to_string(),
                email: None,
                phone: None,
                observations: None,
            })
            .await
            .unwrap();
        StoreVehicleRepository::new(db.pool.clone())
            .create(&Vehicle {
                plate: "ABC1D23".to_string(),
                vehicle_type: VehicleType::Motorcycle,
                client_document: "12345678900".to_string(),
            })
            .await
            .unwrap();

        db
    }

    fn sample_order() -> Order {
        Order {
            id: Uuid::new_v4(),
            vehicle_plate: "ABC1D23".to_string(),
            attendant_cpf: None,
            created_at: Utc::now(),
            status: OrderStatus::Open,
            subtotal: dec!(45.00),
            discount: dec!(4.50),
            total: dec!(40.50),
            payment_method: PaymentMethod::Cash,
            items: vec![OrderItem {
                service_id: 1,
                quantity: 3,
                unit_price: dec!(15.00),
            }],
        }
    }

    #[tokio::test]
    async fn orders_round_trip_with_their_items() {
        let db = store().await;
        let repo = StoreOrderRepository::new(db.pool.clone());

        let order = sample_order();
        repo.create_order(&order).await.unwrap();

        let loaded = repo.get_order(order.id).await.unwrap().unwrap();
        assert_eq!(loaded.vehicle_plate, "ABC1D23");
        assert_eq!(loaded.status, OrderStatus::Open);
        assert_eq!(loaded.subtotal, dec!(45.00));
        assert_eq!(loaded.total, dec!(40.50));
        assert_eq!(loaded.items, order.items);

        let today = Utc::now().date_naive();
        let todays = repo.list_orders_for_day(today).await.unwrap();
        assert_eq!(todays.len(), 1);
    }

    #[tokio::test]
    async fn save_order_replaces_the_item_set() {
        let db = store().await;
        let repo = StoreOrderRepository::new(db.pool.clone());

        let mut order = sample_order();
        repo.create_order(&order).await.unwrap();

        order.items = vec![OrderItem {
            service_id: 2,
            quantity: 1,
            unit_price: dec!(20.00),
        }];
        order.subtotal = dec!(20.00);
        order.discount = dec!(2.00);
        order.total = dec!(18.00);
        repo.save_order(&order).await.unwrap();

        let loaded = repo.get_order(order.id).await.unwrap().unwrap();
        assert_eq!(loaded.items.len(), 1);
        assert_eq!(loaded.items[0].service_id, 2);
        assert_eq!(loaded.total, dec!(18.00));
    }

    #[tokio::test]
    async fn delete_order_removes_order_and_items() {
        let db = store().await;
        let repo = StoreOrderRepository::new(db.pool.clone());

        let order = sample_order();
        repo.create_order(&order).await.unwrap();

        assert!(repo.delete_order(order.id).await.unwrap());
        assert!(repo.get_order(order.id).await.unwrap().is_none());
        assert!(!repo.delete_order(order.id).await.unwrap());
    }
}
