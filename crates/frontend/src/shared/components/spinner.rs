use leptos::prelude::*;

/// Индикатор загрузки
#[component]
pub fn Spinner() -> impl IntoView {
    view! { <div class="spinner" aria-label="Загрузка"></div> }
}
