use crate::shared::api_utils;
use contracts::domain::a004_customer::aggregate::{Customer, CustomerDto};
use contracts::domain::common::AggregateRoot;

/// Загрузить клиента по идентификатору
pub async fn fetch_by_id(id: String) -> Result<Customer, String> {
    api_utils::get_json(&format!("{}/{}", Customer::api_path(), id)).await
}

/// Сохранить форму: POST для новой записи, PUT для существующей
pub async fn save_form(dto: &CustomerDto) -> Result<(), String> {
    match &dto.id {
        Some(id) => api_utils::put_json(&format!("{}/{}", Customer::api_path(), id), dto).await,
        None => api_utils::post_json(&Customer::api_path(), dto).await,
    }
}
