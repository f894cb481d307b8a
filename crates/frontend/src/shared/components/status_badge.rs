use leptos::prelude::*;

/// Бейдж статуса записи.
///
/// Класс модификатора совпадает с кодом статуса ("draft", "active",
/// "inactive"), цвета задаются в стилях.
#[component]
pub fn StatusBadge(#[prop(into)] code: String, #[prop(into)] label: String) -> impl IntoView {
    let class = format!("badge badge--{}", code);
    view! { <span class=class>{label}</span> }
}
