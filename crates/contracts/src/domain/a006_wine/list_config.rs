use crate::shared::list_view::{FilterOption, FilterSpec, ListViewConfig, SortOrder};
use once_cell::sync::Lazy;

/// Статусные фасеты списка вин
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
        entity: "a006_wine",
        columns: &[
            "id",
            "image",
            "name",
            "producer",
            "vintage",
            "grape_variety",
            "volume_ml",
            "price",
            "stock",
            "status",
            "created_at",
            "updated_at",
        ],
        default_columns: &[
            "image", "name", "producer", "vintage", "price", "stock", "status",
        ],
        // id, image и status нужны строкам списка даже когда колонки скрыты:
        // id — для перехода к редактированию, image и status — для бейджей
        required_columns: &["id", "image", "status"],
        disabled_columns: &["created_at", "updated_at", "volume_ml"],
        default_order: SortOrder {
            column: "updated_at",
            ascending: false,
        },
        status_filters: STATUS_FILTERS,
        filters: &[
            FilterSpec {
                id: "status",
                label: "Статус",
                options: STATUS_FILTERS,
                default_selected: &[],
            },
            FilterSpec {
                id: "producer",
                label: "Производитель",
                options: &[],
                default_selected: &[],
            },
        ],
    };
    config
        .validate()
        .expect("a006_wine: некорректная конфигурация списка");
    config
});

/// Конфигурация списковой формы вин
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
    fn test_required_columns_include_row_essentials() {
        let config = list_view_config();
        for col in ["id", "image", "status"] {
            assert!(config.required_columns.contains(&col), "missing {}", col);
        }
    }

    #[test]
    fn test_disabled_columns_exact_set() {
        let config = list_view_config();
        assert_eq!(
            config.disabled_columns,
            &["created_at", "updated_at", "volume_ml"]
        );
    }

    #[test]
    fn test_default_order_is_updated_at_desc() {
        let order = list_view_config().default_order;
        assert_eq!(order.column, "updated_at");
        assert!(!order.ascending);
    }

    #[test]
    fn test_timestamps_are_not_hideable() {
        let config = list_view_config();
        assert!(!config.is_hideable("created_at"));
        assert!(!config.is_hideable("updated_at"));
        assert!(config.is_hideable("producer"));
    }
}
