use crate::shared::api_utils;
use contracts::domain::a003_delivery_schedule::aggregate::{DeliverySchedule, DeliveryScheduleDto};
use contracts::domain::common::AggregateRoot;

/// Загрузить график доставки по идентификатору
pub async fn fetch_by_id(id: String) -> Result<DeliverySchedule, String> {
    api_utils::get_json(&format!("{}/{}", DeliverySchedule::api_path(), id)).await
}

/// Сохранить форму: POST для новой записи, PUT для существующей
pub async fn save_form(dto: &DeliveryScheduleDto) -> Result<(), String> {
    match &dto.id {
        Some(id) => {
            api_utils::put_json(&format!("{}/{}", DeliverySchedule::api_path(), id), dto).await
        }
        None => api_utils::post_json(&DeliverySchedule::api_path(), dto).await,
    }
}
