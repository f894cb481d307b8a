use crate::shared::list_view::{FilterOption, FilterSpec, ListViewConfig, SortOrder};
use once_cell::sync::Lazy;

/// Статусные фасеты списка способов оплаты.
///
/// Двухзначный набор: у способов оплаты нет черновиков.
const STATUS_FILTERS: &[FilterOption] = &[
    FilterOption {
        label: "Активен",
        value: "active",
    },
    FilterOption {
        label: "Неактивен",
        value: "inactive",
    },
];

static CONFIG: Lazy<ListViewConfig> = Lazy::new(|| {
    let config = ListViewConfig {
        entity: "a005_payment_method",
        columns: &[
            "id",
            "name",
            "provider_code",
            "commission_percent",
            "status",
            "created_at",
            "updated_at",
        ],
        default_columns: &["name", "provider_code", "commission_percent", "status"],
        required_columns: &[],
        disabled_columns: &[],
        default_order: SortOrder {
            column: "name",
            ascending: true,
        },
        status_filters: STATUS_FILTERS,
        filters: &[FilterSpec {
            id: "status",
            label: "Статус",
            options: STATUS_FILTERS,
            default_selected: &[],
        }],
    };
    config
        .validate()
        .expect("a005_payment_method: некорректная конфигурация списка");
    config
});

/// Конфигурация списковой формы способов оплаты
pub fn list_view_config() -> &'static ListViewConfig {
    &CONFIG
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_is_valid() {
        assert!(list_view_config().validate().is_ok());
    }

    #[test]
    fn test_status_facet_has_no_draft() {
        let facets = list_view_config().status_filters;
        assert_eq!(facets.len(), 2);
        assert_eq!(facets[0].value, "active");
        assert_eq!(facets[1].value, "inactive");
        assert!(facets.iter().all(|o| o.value != "draft"));
    }
}
