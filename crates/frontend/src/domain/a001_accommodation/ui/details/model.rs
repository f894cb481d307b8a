use crate::shared::api_utils;
use contracts::domain::a001_accommodation::aggregate::{Accommodation, AccommodationDto};
use contracts::domain::common::AggregateRoot;

/// Загрузить размещение по идентификатору
pub async fn fetch_by_id(id: String) -> Result<Accommodation, String> {
    api_utils::get_json(&format!("{}/{}", Accommodation::api_path(), id)).await
}

/// Сохранить форму: POST для новой записи, PUT для существующей
pub async fn save_form(dto: &AccommodationDto) -> Result<(), String> {
    match &dto.id {
        Some(id) => {
            api_utils::put_json(&format!("{}/{}", Accommodation::api_path(), id), dto).await
        }
        None => api_utils::post_json(&Accommodation::api_path(), dto).await,
    }
}
