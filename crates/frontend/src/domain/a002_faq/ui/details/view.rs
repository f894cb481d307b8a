use super::view_model::FaqDetailsViewModel;
use crate::shared::icons::icon;
use crate::shared::page_standard::PAGE_CAT_DETAIL;
use contracts::enums::RecordStatus;
use leptos::prelude::*;
use std::sync::Arc;

#[component]
pub fn FaqDetails(
    id: Option<String>,
    on_saved: Arc<dyn Fn(()) + Send + Sync>,
    on_cancel: Arc<dyn Fn(()) + Send + Sync>,
) -> impl IntoView {
    let vm = FaqDetailsViewModel::new();
    vm.load_if_needed(id);

    let vm_clone = vm.clone();

    view! {
        <div class="details-container faq-details" id="a002_faq--detail" data-page-category=PAGE_CAT_DETAIL>
            <div class="details-header">
                <h3>
                    {
                        let vm = vm_clone.clone();
                        move || if vm.is_edit_mode()() { "Редактирование вопроса" } else { "Новый вопрос" }
                    }
                </h3>
            </div>

            {
                let vm = vm_clone.clone();
                move || vm.error.get().map(|e| view! { <div class="error">{e}</div> })
            }

            <div class="details-form">
                <div class="form-group">
                    <label for="question">{"Вопрос"}</label>
                    <input
                        type="text"
                        id="question"
                        prop:value={
                            let vm = vm_clone.clone();
                            move || vm.form.get().question
                        }
                        on:input={
                            let vm = vm_clone.clone();
                            move |ev| {
                                vm.form.update(|f| f.question = event_target_value(&ev));
                            }
                        }
                        placeholder="Как оформить доставку?"
                    />
                </div>

                <div class="form-group">
                    <label for="answer">{"Ответ"}</label>
                    <textarea
                        id="answer"
                        prop:value={
                            let vm = vm_clone.clone();
                            move || vm.form.get().answer
                        }
                        on:input={
                            let vm = vm_clone.clone();
                            move |ev| {
                                vm.form.update(|f| f.answer = event_target_value(&ev));
                            }
                        }
                        placeholder="Текст ответа для публичного сайта"
                        rows="6"
                    />
                </div>

                <div class="form-row">
                    <div class="form-group">
                        <label for="position">{"Позиция"}</label>
                        <input
                            type="number"
                            id="position"
                            min="0"
                            prop:value={
                                let vm = vm_clone.clone();
                                move || vm.form.get().position.to_string()
                            }
                            on:input={
                                let vm = vm_clone.clone();
                                move |ev| {
                                    let value = event_target_value(&ev).parse().unwrap_or(0);
                                    vm.form.update(|f| f.position = value);
                                }
                            }
                        />
                    </div>

                    <div class="form-group">
                        <label for="status">{"Статус"}</label>
                        <select
                            id="status"
                            on:change={
                                let vm = vm_clone.clone();
                                move |ev| {
                                    if let Some(status) = RecordStatus::from_code(&event_target_value(&ev)) {
                                        vm.form.update(|f| f.status = status);
                                    }
                                }
                            }
                        >
                            {RecordStatus::all().into_iter().map(|status| {
                                let vm = vm_clone.clone();
                                view! {
                                    <option
                                        value=status.code()
                                        selected=move || vm.form.get().status == status
                                    >
                                        {status.display_name()}
                                    </option>
                                }
                            }).collect_view()}
                        </select>
                    </div>
                </div>
            </div>

            <div class="details-actions">
                <button
                    class="btn btn-primary"
                    on:click={
                        let vm = vm_clone.clone();
                        let on_saved = on_saved.clone();
                        move |_| vm.save_command(on_saved.clone())
                    }
                    disabled={
                        let vm = vm_clone.clone();
                        move || !vm.is_form_valid()()
                    }
                >
                    {icon("save")}
                    {
                        let vm = vm_clone.clone();
                        move || if vm.is_edit_mode()() { "Сохранить" } else { "Создать" }
                    }
                </button>
                <button
                    class="btn btn-secondary"
                    on:click=move |_| (on_cancel)(())
                >
                    {icon("cancel")}
                    {"Отмена"}
                </button>
            </div>
        </div>
    }
}
