use crate::domain::common::{AggregateId, AggregateRoot, BaseRecord, EntityMetadata};
use crate::enums::PaymentMethodStatus;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// ID Type
// ============================================================================

/// Уникальный идентификатор способа оплаты
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PaymentMethodId(pub Uuid);

impl PaymentMethodId {
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

impl AggregateId for PaymentMethodId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(PaymentMethodId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Способ оплаты заказа
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentMethod {
    #[serde(flatten)]
    pub base: BaseRecord<PaymentMethodId>,

    // Специфичные поля агрегата
    pub name: String,

    /// Код платёжного провайдера ("sbp", "card-online", "cash")
    #[serde(rename = "providerCode")]
    pub provider_code: String,

    #[serde(rename = "commissionPercent")]
    pub commission_percent: f64,

    pub status: PaymentMethodStatus,
}

impl PaymentMethod {
    /// Создать новый способ оплаты для вставки в БД
    pub fn new_for_insert(dto: &PaymentMethodDto) -> Self {
        let mut item = Self {
            base: BaseRecord::new(PaymentMethodId::new_v4()),
            name: String::new(),
            provider_code: String::new(),
            commission_percent: 0.0,
            status: PaymentMethodStatus::Active,
        };
        item.update(dto);
        item
    }

    /// Получить ID как строку
    pub fn to_string_id(&self) -> String {
        self.base.id.as_string()
    }

    /// Обновить данные из DTO
    pub fn update(&mut self, dto: &PaymentMethodDto) {
        self.name = dto.name.clone();
        self.provider_code = dto.provider_code.clone();
        self.commission_percent = dto.commission_percent;
        self.status = dto.status;
    }

    /// Валидация данных
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Название не может быть пустым".into());
        }
        if self.provider_code.trim().is_empty() {
            return Err("Код провайдера не может быть пустым".into());
        }
        if !(0.0..=100.0).contains(&self.commission_percent) {
            return Err("Комиссия должна быть в диапазоне 0–100%".into());
        }
        Ok(())
    }

    /// Хук перед записью
    pub fn before_write(&mut self) {
        self.base.touch();
    }
}

impl AggregateRoot for PaymentMethod {
    type Id = PaymentMethodId;

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
        "a005"
    }

    fn collection_name() -> &'static str {
        "payment-method"
    }

    fn element_name() -> &'static str {
        "Способ оплаты"
    }

    fn list_name() -> &'static str {
        "Способы оплаты"
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// DTO для создания/обновления способа оплаты
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct PaymentMethodDto {
    pub id: Option<String>,
    pub name: String,

    #[serde(rename = "providerCode")]
    pub provider_code: String,

    #[serde(rename = "commissionPercent")]
    pub commission_percent: f64,

    #[serde(default)]
    pub status: PaymentMethodStatus,
}
