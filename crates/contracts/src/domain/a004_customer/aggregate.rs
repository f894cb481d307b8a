use crate::domain::common::{AggregateId, AggregateRoot, BaseRecord, EntityMetadata};
use crate::enums::RecordStatus;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// ID Type
// ============================================================================

/// Уникальный идентификатор клиента
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CustomerId(pub Uuid);

impl CustomerId {
    pub fn new(value: Uuid) -> Self {
        Self(value)
    }

    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn value(&self) -> Uuid {
        self.0
    }
}

impl AggregateId for CustomerId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(CustomerId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Клиент интернет-магазина
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Customer {
    #[serde(flatten)]
    pub base: BaseRecord<CustomerId>,

    // Специфичные поля агрегата
    #[serde(rename = "fullName")]
    pub full_name: String,

    pub email: String,
    pub phone: String,
    pub comment: Option<String>,
    pub status: RecordStatus,
}

impl Customer {
    /// Создать нового клиента для вставки в БД
    pub fn new_for_insert(dto: &CustomerDto) -> Self {
        let mut item = Self {
            base: BaseRecord::new(CustomerId::new_v4()),
            full_name: String::new(),
            email: String::new(),
            phone: String::new(),
            comment: None,
            status: RecordStatus::Draft,
        };
        item.update(dto);
        item
    }

    /// Получить ID как строку
    pub fn to_string_id(&self) -> String {
        self.base.id.as_string()
    }

    /// Обновить данные из DTO
    pub fn update(&mut self, dto: &CustomerDto) {
        self.full_name = dto.full_name.clone();
        self.email = dto.email.clone();
        self.phone = dto.phone.clone();
        self.comment = dto.comment.clone();
        self.status = dto.status;
    }

    /// Валидация данных
    pub fn validate(&self) -> Result<(), String> {
        if self.full_name.trim().is_empty() {
            return Err("Имя клиента не может быть пустым".into());
        }
        // Контакт нужен хотя бы один: email или телефон
        if self.email.trim().is_empty() && self.phone.trim().is_empty() {
            return Err("Укажите email или телефон".into());
        }
        if !self.email.trim().is_empty() && !self.email.contains('@') {
            return Err("Некорректный email".into());
        }
        Ok(())
    }

    /// Хук перед записью
    pub fn before_write(&mut self) {
        self.base.touch();
    }
}

impl AggregateRoot for Customer {
    type Id = CustomerId;

    fn id(&self) -> Self::Id {
        self.base.id
    }

    fn metadata(&self) -> &EntityMetadata {
        &self.base.metadata
    }

    fn metadata_mut(&mut self) -> &mut EntityMetadata {
        &mut self.base.metadata
    }

    fn aggregate_index() -> &'static str {
        "a004"
    }

    fn collection_name() -> &'static str {
        "customer"
    }

    fn element_name() -> &'static str {
        "Клиент"
    }

    fn list_name() -> &'static str {
        "Клиенты"
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// DTO для создания/обновления клиента
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CustomerDto {
    pub id: Option<String>,

    #[serde(rename = "fullName")]
    pub full_name: String,

    pub email: String,
    pub phone: String,
    pub comment: Option<String>,

    #[serde(default)]
    pub status: RecordStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_requires_some_contact() {
        let customer = Customer::new_for_insert(&CustomerDto {
            full_name: "Анна Морозова".to_string(),
            ..Default::default()
        });
        assert!(customer.validate().is_err());
    }

    #[test]
    fn test_validate_accepts_phone_only() {
        let customer = Customer::new_for_insert(&CustomerDto {
            full_name: "Анна Морозова".to_string(),
            phone: "+7 921 555-17-03".to_string(),
            ..Default::default()
        });
        assert!(customer.validate().is_ok());
    }
}
