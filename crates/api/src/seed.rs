//! Bundled seed dataset loaded at process start.
//!
//! Records load in dependency order — users, then orders, then
//! offers — since orders and offers carry references into the earlier
//! tables. Dates in the dataset use the `%m/%d/%Y` form the create
//! path expects.

use domain::{Offer, Order, ResourceService, User};
use record_store::RecordStore;

use crate::error::ApiError;

fn seed_users() -> Vec<serde_json::Value> {
    vec![
        serde_json::json!({
            "id": 1,
            "first_name": "Иван",
            "last_name": "Петров",
            "age": 34,
            "email": "ivan.petrov@example.com",
            "role": "customer",
            "phone": "+7 915 123-45-67"
        }),
        serde_json::json!({
            "id": 2,
            "first_name": "Мария",
            "last_name": "Смирнова",
            "age": 28,
            "email": "maria.smirnova@example.com",
            "role": "executor",
            "phone": "+7 916 765-43-21"
        }),
        serde_json::json!({
            "id": 3,
            "first_name": "Олег",
            "last_name": "Кузнецов",
            "age": 41,
            "email": "oleg.kuznetsov@example.com",
            "role": "executor",
            "phone": "+7 903 111-22-33"
        }),
    ]
}

fn seed_orders() -> Vec<serde_json::Value> {
    vec![
        serde_json::json!({
            "id": 1,
            "name": "Уборка квартиры",
            "description": "Генеральная уборка двухкомнатной квартиры",
            "start_date": "03/01/2024",
            "end_date": "03/05/2024",
            "address": "Москва, ул. Ленина, 12",
            "price": 5000,
            "customer_id": 1,
            "executor_id": 2
        }),
        serde_json::json!({
            "id": 2,
            "name": "Ремонт ванной",
            "description": "Замена плитки и сантехники",
            "start_date": "04/10/2024",
            "end_date": "05/15/2024",
            "address": "Москва, пр. Мира, 101",
            "price": 120000,
            "customer_id": 1,
            "executor_id": 3
        }),
    ]
}

fn seed_offers() -> Vec<serde_json::Value> {
    vec![
        serde_json::json!({ "id": 1, "order_id": 1, "executor_id": 2 }),
        serde_json::json!({ "id": 2, "order_id": 2, "executor_id": 3 }),
        serde_json::json!({ "id": 3, "order_id": 2, "executor_id": 2 }),
    ]
}

/// Loads the seed dataset through the ordinary create operation.
pub async fn load<S: RecordStore>(records: &ResourceService<S>) -> Result<(), ApiError> {
    for value in seed_users() {
        let fields = as_object(value)?;
        records.create::<User>(&fields).await?;
    }
    for value in seed_orders() {
        let fields = as_object(value)?;
        records.create::<Order>(&fields).await?;
    }
    for value in seed_offers() {
        let fields = as_object(value)?;
        records.create::<Offer>(&fields).await?;
    }
    tracing::info!("seed dataset loaded");
    Ok(())
}

fn as_object(
    value: serde_json::Value,
) -> Result<serde_json::Map<String, serde_json::Value>, ApiError> {
    // Seed literals are always objects; a non-object is a programming
    // error in this module.
    match value {
        serde_json::Value::Object(map) => Ok(map),
        _ => Err(ApiError::Internal("seed entry is not an object".to_string())),
    }
}
