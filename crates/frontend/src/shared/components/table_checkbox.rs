use leptos::prelude::*;

/// Ячейка таблицы с чекбоксом выбора строки.
///
/// Гасит всплытие клика, чтобы выбор не открывал редактирование строки.
#[component]
pub fn TableCheckbox(
    #[prop(into)] checked: Signal<bool>,
    on_change: Callback<bool>,
) -> impl IntoView {
    view! {
        <td
            class="table__cell table__cell--checkbox"
            on:click=move |ev| ev.stop_propagation()
        >
            <input
                type="checkbox"
                class="table__checkbox"
                prop:checked=move || checked.get()
                on:change=move |ev| on_change.run(event_target_checked(&ev))
            />
        </td>
    }
}
