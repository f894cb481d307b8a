/// Универсальные утилиты списковых форм (поиск, сортировка, UI компоненты)
use leptos::ev::MouseEvent;
use leptos::prelude::*;
use std::cmp::Ordering;
use wasm_bindgen::JsCast;

/// Trait для строк, поддерживающих поиск
pub trait Searchable {
    /// Соответствует ли строка поисковому запросу
    fn matches_filter(&self, filter: &str) -> bool;

    /// Значение поля для подсветки совпадений
    fn get_field_value(&self, field: &str) -> Option<String>;
}

/// Trait для строк, поддерживающих сортировку
pub trait Sortable {
    /// Сравнить две строки по указанной колонке
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering;
}

/// Минимальная длина поискового запроса
pub const MIN_FILTER_LEN: usize = 3;

/// Сортирует список по указанной колонке
pub fn sort_list<T: Sortable>(items: &mut [T], field: &str, ascending: bool) {
    items.sort_by(|a, b| {
        let cmp = a.compare_by_field(b, field);
        if ascending {
            cmp
        } else {
            cmp.reverse()
        }
    });
}

/// Фильтрует список по поисковому запросу
pub fn filter_list<T: Searchable>(items: Vec<T>, filter: &str) -> Vec<T> {
    if filter.trim().len() < MIN_FILTER_LEN {
        return items;
    }

    items
        .into_iter()
        .filter(|item| item.matches_filter(filter))
        .collect()
}

/// Подсветка совпадений в тексте (без учёта регистра)
pub fn highlight_matches(text: &str, filter: &str) -> AnyView {
    let filter = filter.trim();
    if filter.len() < MIN_FILTER_LEN {
        return view! { <span>{text.to_string()}</span> }.into_any();
    }

    let filter_lower = filter.to_lowercase();
    let text_lower = text.to_lowercase();

    if !text_lower.contains(&filter_lower) {
        return view! { <span>{text.to_string()}</span> }.into_any();
    }

    let mut parts: Vec<AnyView> = Vec::new();
    let mut last_pos = 0;

    while let Some(pos) = text_lower[last_pos..].find(&filter_lower) {
        let actual_pos = last_pos + pos;

        if actual_pos > last_pos {
            parts.push(
                view! { <span>{text[last_pos..actual_pos].to_string()}</span> }.into_any(),
            );
        }

        let match_end = actual_pos + filter_lower.len();
        parts.push(
            view! {
                <span class="search-highlight">
                    {text[actual_pos..match_end].to_string()}
                </span>
            }
            .into_any(),
        );

        last_pos = match_end;
    }

    if last_pos < text.len() {
        parts.push(view! { <span>{text[last_pos..].to_string()}</span> }.into_any());
    }

    view! { <>{parts}</> }.into_any()
}

/// Индикатор сортировки для заголовка колонки
pub fn get_sort_indicator(current_field: &str, field: &str, ascending: bool) -> &'static str {
    if current_field == field {
        if ascending {
            " ▲"
        } else {
            " ▼"
        }
    } else {
        " ⇅"
    }
}

/// Обработчик клика по заголовку: первый клик сортирует по возрастанию,
/// повторный меняет направление
pub fn create_sort_toggle(
    field: &'static str,
    sort_field: Signal<String>,
    set_sort_field: WriteSignal<String>,
    set_sort_ascending: WriteSignal<bool>,
) -> impl Fn(MouseEvent) + 'static {
    move |_| {
        if sort_field.get() == field {
            set_sort_ascending.update(|v| *v = !*v);
        } else {
            set_sort_field.set(field.to_string());
            set_sort_ascending.set(true);
        }
    }
}

/// Поле поиска с debounce и кнопкой очистки
#[component]
pub fn SearchInput(
    /// Текущее значение фильтра
    #[prop(into)]
    value: Signal<String>,
    /// Callback обновления значения фильтра
    #[prop(into)]
    on_change: Callback<String>,
    /// Placeholder
    #[prop(optional, into)]
    placeholder: String,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Поиск (мин. 3 символа)...".to_string()
    } else {
        placeholder
    };

    // Локальное состояние input до срабатывания debounce
    let (input_value, set_input_value) = signal(String::new());

    let debounce_timeout = StoredValue::new(None::<i32>);

    let handle_input_change = move |new_value: String| {
        set_input_value.set(new_value.clone());

        if let Some(timeout_id) = debounce_timeout.get_value() {
            if let Some(w) = web_sys::window() {
                w.clear_timeout_with_handle(timeout_id);
            }
        }

        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move || {
            on_change.run(new_value.clone());
        }) as Box<dyn Fn()>);

        if let Ok(timeout_id) = window.set_timeout_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref::<js_sys::Function>(),
            300,
        ) {
            debounce_timeout.set_value(Some(timeout_id));
        }
        closure.forget();
    };

    let is_filter_active = move || value.get().trim().len() >= MIN_FILTER_LEN;

    let clear_filter = move |_| {
        set_input_value.set(String::new());
        on_change.run(String::new());
    };

    view! {
        <div class="search-input" class:search-input--active=is_filter_active>
            <input
                type="text"
                placeholder=placeholder
                prop:value=move || input_value.get()
                on:input=move |ev| {
                    let val = event_target_value(&ev);
                    handle_input_change(val);
                }
            />
            {move || {
                if !input_value.get().is_empty() {
                    view! {
                        <button
                            class="search-input__clear"
                            title="Очистить"
                            on:click=clear_filter
                        >
                            {crate::shared::icons::icon("x")}
                        </button>
                    }
                        .into_any()
                } else {
                    view! { <></> }.into_any()
                }
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone)]
    struct Row {
        name: String,
        qty: i32,
    }

    impl Searchable for Row {
        fn matches_filter(&self, filter: &str) -> bool {
            self.name.to_lowercase().contains(&filter.to_lowercase())
        }

        fn get_field_value(&self, field: &str) -> Option<String> {
            match field {
                "name" => Some(self.name.clone()),
                _ => None,
            }
        }
    }

    impl Sortable for Row {
        fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
            match field {
                "qty" => self.qty.cmp(&other.qty),
                _ => self.name.cmp(&other.name),
            }
        }
    }

    fn rows() -> Vec<Row> {
        vec![
            Row {
                name: "Мерло".to_string(),
                qty: 5,
            },
            Row {
                name: "Саперави".to_string(),
                qty: 2,
            },
            Row {
                name: "Рислинг".to_string(),
                qty: 9,
            },
        ]
    }

    #[test]
    fn test_sort_list_by_field() {
        let mut items = rows();
        sort_list(&mut items, "qty", true);
        assert_eq!(items[0].qty, 2);
        sort_list(&mut items, "qty", false);
        assert_eq!(items[0].qty, 9);
    }

    #[test]
    fn test_filter_list_ignores_short_queries() {
        // Порог длины считается в байтах, "м" в UTF-8 занимает два
        assert_eq!(filter_list(rows(), "м").len(), 3);
        assert_eq!(filter_list(rows(), "мер").len(), 1);
    }

    #[test]
    fn test_sort_indicator() {
        assert_eq!(get_sort_indicator("name", "name", true), " ▲");
        assert_eq!(get_sort_indicator("name", "name", false), " ▼");
        assert_eq!(get_sort_indicator("name", "qty", true), " ⇅");
    }
}
