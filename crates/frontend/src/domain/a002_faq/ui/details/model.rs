use crate::shared::api_utils;
use contracts::domain::a002_faq::aggregate::{Faq, FaqDto};
use contracts::domain::common::AggregateRoot;

/// Загрузить вопрос-ответ по идентификатору
pub async fn fetch_by_id(id: String) -> Result<Faq, String> {
    api_utils::get_json(&format!("{}/{}", Faq::api_path(), id)).await
}

/// Сохранить форму: POST для новой записи, PUT для существующей
pub async fn save_form(dto: &FaqDto) -> Result<(), String> {
    match &dto.id {
        Some(id) => api_utils::put_json(&format!("{}/{}", Faq::api_path(), id), dto).await,
        None => api_utils::post_json(&Faq::api_path(), dto).await,
    }
}
