use super::model;
use contracts::domain::a002_faq::aggregate::{Faq, FaqDto};
use contracts::domain::common::AggregateId;
use leptos::prelude::*;
use std::sync::Arc;

/// ViewModel формы вопроса-ответа
#[derive(Clone)]
pub struct FaqDetailsViewModel {
    pub form: RwSignal<FaqDto>,
    pub error: RwSignal<Option<String>>,
}

impl FaqDetailsViewModel {
    pub fn new() -> Self {
        Self {
            form: RwSignal::new(FaqDto::default()),
            error: RwSignal::new(None),
        }
    }

    pub fn is_edit_mode(&self) -> impl Fn() -> bool + '_ {
        move || self.form.get().id.is_some()
    }

    pub fn is_form_valid(&self) -> impl Fn() -> bool + '_ {
        move || {
            let f = self.form.get();
            !f.question.trim().is_empty() && !f.answer.trim().is_empty()
        }
    }

    /// Загрузить данные с сервера, если передан ID
    pub fn load_if_needed(&self, id: Option<String>) {
        if let Some(existing_id) = id {
            let form = self.form;
            let error = self.error;
            wasm_bindgen_futures::spawn_local(async move {
                match model::fetch_by_id(existing_id).await {
                    Ok(aggregate) => form.set(to_dto(aggregate)),
                    Err(e) => error.set(Some(format!("Ошибка загрузки: {}", e))),
                }
            });
        }
    }

    /// Сохранить форму на сервере
    pub fn save_command(&self, on_saved: Arc<dyn Fn(()) + Send + Sync>) {
        let current = self.form.get();

        if current.question.trim().is_empty() {
            self.error
                .set(Some("Вопрос обязателен для заполнения".to_string()));
            return;
        }
        if current.answer.trim().is_empty() {
            self.error
                .set(Some("Ответ обязателен для заполнения".to_string()));
            return;
        }

        let on_saved_cb = on_saved.clone();
        let error = self.error;
        wasm_bindgen_futures::spawn_local(async move {
            match model::save_form(&current).await {
                Ok(()) => (on_saved_cb)(()),
                Err(e) => error.set(Some(e)),
            }
        });
    }
}

fn to_dto(aggregate: Faq) -> FaqDto {
    FaqDto {
        id: Some(aggregate.base.id.as_string()),
        question: aggregate.question,
        answer: aggregate.answer,
        position: aggregate.position,
        status: aggregate.status,
    }
}
