//! Видимые колонки списка: разрешение состава и сохранение в localStorage.
//!
//! Чистая часть (разрешение видимости, переключение с учётом нескрываемых
//! колонок) отделена от браузерной, чтобы контракт проверялся тестами без
//! DOM. Ключ хранения должен быть уникальным на список, например
//! `"a006_wine_visible_columns"`.

use contracts::shared::list_view::ListViewConfig;

/// Собрать итоговый список видимых колонок.
///
/// Сохранённый выбор фильтруется по известным колонкам сущности; если
/// выбора нет (первое открытие или мусор в хранилище) — колонки по
/// умолчанию из конфигурации.
pub fn resolve_visible(config: &ListViewConfig, stored: Option<Vec<String>>) -> Vec<String> {
    let fallback = || {
        config
            .default_columns
            .iter()
            .map(|c| c.to_string())
            .collect::<Vec<_>>()
    };

    match stored {
        Some(cols) => {
            let known: Vec<String> = cols
                .into_iter()
                .filter(|c| config.has_column(c))
                .collect();
            if known.is_empty() {
                fallback()
            } else {
                known
            }
        }
        None => fallback(),
    }
}

/// Переключить видимость колонки.
///
/// Нескрываемые колонки переключать нельзя — запрос отклоняется, состав
/// не меняется.
pub fn toggle_column(
    config: &ListViewConfig,
    visible: &[String],
    column: &str,
) -> Result<Vec<String>, String> {
    if !config.has_column(column) {
        return Err(format!(
            "{}: неизвестная колонка '{}'",
            config.entity, column
        ));
    }
    if !config.is_hideable(column) {
        return Err(format!(
            "{}: колонку '{}' нельзя переключать",
            config.entity, column
        ));
    }

    let mut next: Vec<String> = visible.to_vec();
    if let Some(pos) = next.iter().position(|c| c == column) {
        next.remove(pos);
    } else {
        // Новая колонка встаёт на своё место из полного набора
        let order = |c: &str| config.columns.iter().position(|k| *k == c);
        let target = order(column);
        let insert_at = next
            .iter()
            .position(|c| order(c) > target)
            .unwrap_or(next.len());
        next.insert(insert_at, column.to_string());
    }
    Ok(next)
}

/// Сохранить выбор колонок в localStorage
pub fn save_visible_columns(storage_key: &str, visible: &[String]) {
    let Some(storage) = local_storage() else {
        return;
    };
    if let Ok(json) = serde_json::to_string(visible) {
        let _ = storage.set_item(storage_key, &json);
    }
}

/// Прочитать выбор колонок из localStorage
pub fn load_visible_columns(storage_key: &str) -> Option<Vec<String>> {
    let storage = local_storage()?;
    let json = storage.get_item(storage_key).ok().flatten()?;
    serde_json::from_str(&json).ok()
}

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a006_wine::list_config::list_view_config;

    #[test]
    fn test_resolve_falls_back_to_defaults() {
        let config = list_view_config();
        let visible = resolve_visible(config, None);
        assert_eq!(
            visible,
            config
                .default_columns
                .iter()
                .map(|c| c.to_string())
                .collect::<Vec<_>>()
        );
    }

    #[test]
    fn test_resolve_drops_unknown_stored_columns() {
        let config = list_view_config();
        let visible = resolve_visible(
            config,
            Some(vec!["name".to_string(), "ghost".to_string()]),
        );
        assert_eq!(visible, vec!["name".to_string()]);
    }

    #[test]
    fn test_hiding_disabled_column_is_rejected() {
        let config = list_view_config();
        let visible = vec!["name".to_string(), "created_at".to_string()];
        assert!(toggle_column(config, &visible, "created_at").is_err());
    }

    #[test]
    fn test_hiding_regular_column_works() {
        let config = list_view_config();
        let visible = vec!["name".to_string(), "producer".to_string()];
        let next = toggle_column(config, &visible, "producer").unwrap();
        assert_eq!(next, vec!["name".to_string()]);
    }

    #[test]
    fn test_showing_column_keeps_declared_order() {
        let config = list_view_config();
        let visible = vec!["image".to_string(), "producer".to_string()];
        // name стоит между image и producer в полном наборе колонок
        let next = toggle_column(config, &visible, "name").unwrap();
        assert_eq!(
            next,
            vec![
                "image".to_string(),
                "name".to_string(),
                "producer".to_string()
            ]
        );
    }
}
