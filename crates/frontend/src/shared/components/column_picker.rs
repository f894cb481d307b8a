use crate::shared::column_prefs;
use crate::shared::icons::icon;
use contracts::shared::list_view::ListViewConfig;
use leptos::prelude::*;

/// Выпадающий список управления видимостью колонок.
///
/// Нескрываемые колонки показываются выключенным чекбоксом; попытка их
/// переключить отклоняется ещё в `column_prefs::toggle_column`, здесь
/// чекбокс просто не активен.
#[component]
pub fn ColumnPicker(
    config: &'static ListViewConfig,
    #[prop(into)] visible: Signal<Vec<String>>,
    on_toggle: Callback<String>,
    /// Подпись колонки для списка
    label_for: fn(&str) -> &'static str,
) -> impl IntoView {
    let (open, set_open) = signal(false);

    view! {
        <div class="column-picker">
            <button
                class="button button--secondary"
                on:click=move |_| set_open.update(|v| *v = !*v)
            >
                {icon("columns")}
                {"Колонки"}
            </button>
            <Show when=move || open.get()>
                <div class="column-picker__menu">
                    {config
                        .columns
                        .iter()
                        .map(|column| {
                            let column: &'static str = *column;
                            let hideable = config.is_hideable(column);
                            let is_visible = Signal::derive(move || {
                                visible.get().iter().any(|c| c == column)
                            });
                            view! {
                                <label
                                    class="column-picker__item"
                                    class:column-picker__item--locked=!hideable
                                >
                                    <input
                                        type="checkbox"
                                        prop:checked=move || is_visible.get()
                                        disabled=!hideable
                                        on:change=move |_| {
                                            if hideable {
                                                on_toggle.run(column.to_string());
                                            }
                                        }
                                    />
                                    {label_for(column)}
                                </label>
                            }
                        })
                        .collect_view()}
                </div>
            </Show>
        </div>
    }
}

/// Переключение видимости с сохранением выбора.
///
/// Отклонённые переключения (нескрываемая колонка) логируются и не меняют
/// состояние.
pub fn handle_toggle(
    config: &'static ListViewConfig,
    storage_key: &str,
    visible: &[String],
    column: &str,
) -> Option<Vec<String>> {
    match column_prefs::toggle_column(config, visible, column) {
        Ok(next) => {
            column_prefs::save_visible_columns(storage_key, &next);
            Some(next)
        }
        Err(reason) => {
            log::warn!("{}", reason);
            None
        }
    }
}
