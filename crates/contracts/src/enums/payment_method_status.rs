use serde::{Deserialize, Serialize};

/// Статус способа оплаты
///
/// Двухзначный: способ оплаты либо включён, либо выключен, состояния
/// «черновик» у него нет.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethodStatus {
    Active,
    Inactive,
}

impl PaymentMethodStatus {
    /// Получить код статуса
    pub const fn code(&self) -> &'static str {
        match self {
            PaymentMethodStatus::Active => "active",
            PaymentMethodStatus::Inactive => "inactive",
        }
    }

    /// Получить человекочитаемое название
    pub const fn display_name(&self) -> &'static str {
        match self {
            PaymentMethodStatus::Active => "Активен",
            PaymentMethodStatus::Inactive => "Неактивен",
        }
    }

    /// Получить все статусы в порядке отображения
    pub fn all() -> Vec<PaymentMethodStatus> {
        vec![PaymentMethodStatus::Active, PaymentMethodStatus::Inactive]
    }

    /// Парсинг из кода
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "active" => Some(PaymentMethodStatus::Active),
            "inactive" => Some(PaymentMethodStatus::Inactive),
            _ => None,
        }
    }
}

impl Default for PaymentMethodStatus {
    fn default() -> Self {
        PaymentMethodStatus::Active
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_roundtrip() {
        for status in PaymentMethodStatus::all() {
            assert_eq!(PaymentMethodStatus::from_code(status.code()), Some(status));
        }
    }

    #[test]
    fn test_no_draft_state() {
        assert_eq!(PaymentMethodStatus::from_code("draft"), None);
        assert_eq!(PaymentMethodStatus::all().len(), 2);
    }
}
