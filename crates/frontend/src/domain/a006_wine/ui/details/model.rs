use crate::shared::api_utils;
use contracts::domain::a006_wine::aggregate::{Wine, WineDto};
use contracts::domain::common::AggregateRoot;

/// Загрузить вино по идентификатору
pub async fn fetch_by_id(id: String) -> Result<Wine, String> {
    api_utils::get_json(&format!("{}/{}", Wine::api_path(), id)).await
}

/// Сохранить форму: POST для новой записи, PUT для существующей
pub async fn save_form(dto: &WineDto) -> Result<(), String> {
    match &dto.id {
        Some(id) => api_utils::put_json(&format!("{}/{}", Wine::api_path(), id), dto).await,
        None => api_utils::post_json(&Wine::api_path(), dto).await,
    }
}
