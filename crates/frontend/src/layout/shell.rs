use crate::layout::global_context::AppGlobalContext;
use crate::layout::sidebar::Sidebar;
use crate::shared::icons::icon;
use leptos::prelude::*;

/// Оболочка приложения: шапка, сворачиваемая боковая панель, рабочая область
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found in context");

    view! {
        <div class="shell">
            <header class="shell__top">
                <button
                    class="button button--ghost"
                    title="Свернуть меню"
                    on:click=move |_| ctx.toggle_left()
                >
                    {icon("menu")}
                </button>
            </header>
            <div class="shell__body">
                <Show when=move || ctx.left_open.get()>
                    <Sidebar />
                </Show>
                <main class="shell__center">{children()}</main>
            </div>
        </div>
    }
}
