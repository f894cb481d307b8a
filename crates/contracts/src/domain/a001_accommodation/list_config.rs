use crate::shared::list_view::{FilterOption, FilterSpec, ListViewConfig, SortOrder};
use once_cell::sync::Lazy;

/// Статусные фасеты списка размещений
const STATUS_FILTERS: &[FilterOption] = &[
    FilterOption {
        label: "Черновик",
        value: "draft",
    },
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
        entity: "a001_accommodation",
        columns: &[
            "id",
            "name",
            "description",
            "capacity",
            "price_per_night",
            "status",
            "created_at",
            "updated_at",
        ],
        default_columns: &["name", "capacity", "price_per_night", "status"],
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
            default_selected: &["active"],
        }],
    };
    config
        .validate()
        .expect("a001_accommodation: некорректная конфигурация списка");
    config
});

/// Конфигурация списковой формы размещений
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
    fn test_default_selected_status_exists_among_options() {
        let spec = list_view_config().filter("status").unwrap();
        for selected in spec.default_selected {
            assert!(spec.options.iter().any(|o| o.value == *selected));
        }
    }
}
