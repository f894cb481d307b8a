use gloo_timers::future::TimeoutFuture;
use leptos::ev;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

/// Поверхность панели создания/редактирования (подложка + центрированная
/// карточка).
///
/// Заголовок и кнопки действий рисует сама панель: так форма выглядит
/// одинаково в оверлее и на отдельной странице.
#[component]
pub fn PanelFrame(
    /// Вызывается, когда панель нужно закрыть (клик по подложке, Escape).
    on_close: Callback<()>,
    /// Закрывать ли по клику на подложку (по умолчанию true).
    #[prop(optional)]
    close_on_overlay: Option<bool>,
    /// Дополнительный стиль для поверхности панели.
    #[prop(optional)]
    panel_style: Option<String>,
    /// Дополнительный класс для поверхности панели.
    #[prop(optional)]
    panel_class: Option<String>,
    children: Children,
) -> impl IntoView {
    let close_on_overlay = close_on_overlay.unwrap_or(true);
    let overlay_mouse_down = RwSignal::new(false);

    // Закрытие откладывается на следующий тик: синхронное удаление оверлея
    // во время диспетчеризации его же события роняет делегированный обработчик
    let deferred_close = move || {
        spawn_local(async move {
            TimeoutFuture::new(0).await;
            on_close.run(());
        });
    };

    let is_direct_overlay_event = |ev: &ev::MouseEvent| -> bool {
        match (ev.target(), ev.current_target()) {
            (Some(t), Some(ct)) => t == ct,
            _ => false,
        }
    };

    // Закрываем только если и нажатие, и отпускание пришлись на подложку:
    // выделение текста в форме с отпусканием мыши снаружи закрывать не должно
    let handle_overlay_mouse_down = move |ev: ev::MouseEvent| {
        overlay_mouse_down.set(is_direct_overlay_event(&ev));
    };

    let handle_overlay_click = move |ev: ev::MouseEvent| {
        let should_close =
            close_on_overlay && overlay_mouse_down.get() && is_direct_overlay_event(&ev);
        overlay_mouse_down.set(false);
        if should_close {
            deferred_close();
        }
    };

    let handle_keydown = move |ev: ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            deferred_close();
        }
    };

    let panel_class = format!("panel {}", panel_class.unwrap_or_default());
    let panel_style = panel_style.unwrap_or_default();

    view! {
        <div
            class="panel-overlay"
            tabindex="-1"
            on:mousedown=handle_overlay_mouse_down
            on:click=handle_overlay_click
            on:keydown=handle_keydown
        >
            <div
                class=panel_class
                style=panel_style
                on:click=move |ev: ev::MouseEvent| ev.stop_propagation()
            >
                {children()}
            </div>
        </div>
    }
}
