//! Синхронизация флага «открыта панель создания» с query string адреса.
//!
//! Адаптер на границе: ядро переходов (`PanelController`) про адресную
//! строку не знает. Страница, которой нужна шарируемая ссылка на открытую
//! панель, вызывает [`sync_create_flag`] один раз при монтировании.
//! Сериализуется только флаг создания; цель редактирования в адрес не
//! попадает.

use crate::shared::panel_state::PanelController;
use leptos::prelude::*;
use std::collections::BTreeMap;
use web_sys::window;

/// Имя query-параметра
pub const CREATE_PARAM: &str = "create";

/// Вставить или убрать флаг в строке запроса. Остальные параметры
/// проходят насквозь без изменений.
pub fn merge_create_flag(search: &str, open: bool) -> String {
    let mut params: BTreeMap<String, String> =
        serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
    if open {
        params.insert(CREATE_PARAM.to_string(), "true".to_string());
    } else {
        params.remove(CREATE_PARAM);
    }
    serde_qs::to_string(&params).unwrap_or_default()
}

/// Прочитать флаг из строки запроса
pub fn read_create_flag(search: &str) -> bool {
    let params: BTreeMap<String, String> =
        serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
    params.get(CREATE_PARAM).map(|v| v == "true").unwrap_or(false)
}

/// Включить двустороннюю синхронизацию для контроллера страницы.
///
/// При монтировании `?create=true` открывает панель создания; дальше
/// каждый переход контроллера переписывает адрес через
/// `history.replace_state` — без перезагрузки и потери скролла.
pub fn sync_create_flag<Id>(panel: PanelController<Id>)
where
    Id: Clone + PartialEq + Send + Sync + 'static,
{
    if read_create_flag(&current_search()) {
        panel.set_open_state(true, None);
    }

    Effect::new(move |_| {
        let query = merge_create_flag(&current_search(), panel.create_open());
        let Some(w) = window() else {
            return;
        };
        let pathname = w.location().pathname().unwrap_or_default();
        let new_url = if query.is_empty() {
            pathname
        } else {
            format!("{}?{}", pathname, query)
        };

        let current = w.location().search().unwrap_or_default();
        // Only touch history when the query actually changed
        if current.trim_start_matches('?') != query {
            if let Ok(history) = w.history() {
                let _ = history.replace_state_with_url(
                    &wasm_bindgen::JsValue::NULL,
                    "",
                    Some(&new_url),
                );
            }
        }
    });
}

fn current_search() -> String {
    window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_adds_create_flag() {
        assert_eq!(merge_create_flag("", true), "create=true");
        assert!(read_create_flag("?create=true"));
    }

    #[test]
    fn test_close_removes_create_flag() {
        assert_eq!(merge_create_flag("?create=true", false), "");
        assert!(!read_create_flag(""));
    }

    #[test]
    fn test_unrelated_params_pass_through() {
        let opened = merge_create_flag("?page=2", true);
        assert_eq!(opened, "create=true&page=2");

        let closed = merge_create_flag(&opened, false);
        assert_eq!(closed, "page=2");
    }

    #[test]
    fn test_reapplying_same_flag_is_stable() {
        let once = merge_create_flag("?page=2", true);
        let twice = merge_create_flag(&once, true);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_literal_true_required() {
        assert!(!read_create_flag("?create=1"));
        assert!(!read_create_flag("?create=false"));
    }
}
