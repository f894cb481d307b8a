use crate::shared::api_utils;
use contracts::domain::a005_payment_method::aggregate::{PaymentMethod, PaymentMethodDto};
use contracts::domain::common::AggregateRoot;

/// Загрузить способ оплаты по идентификатору
pub async fn fetch_by_id(id: String) -> Result<PaymentMethod, String> {
    api_utils::get_json(&format!("{}/{}", PaymentMethod::api_path(), id)).await
}

/// Сохранить форму: POST для новой записи, PUT для существующей
pub async fn save_form(dto: &PaymentMethodDto) -> Result<(), String> {
    match &dto.id {
        Some(id) => {
            api_utils::put_json(&format!("{}/{}", PaymentMethod::api_path(), id), dto).await
        }
        None => api_utils::post_json(&PaymentMethod::api_path(), dto).await,
    }
}
