use super::model;
use contracts::domain::a006_wine::aggregate::{Wine, WineDto};
use contracts::domain::common::AggregateId;
use leptos::prelude::*;
use std::sync::Arc;

/// ViewModel формы вина
#[derive(Clone)]
pub struct WineDetailsViewModel {
    pub form: RwSignal<WineDto>,
    pub error: RwSignal<Option<String>>,
}

impl WineDetailsViewModel {
    pub fn new() -> Self {
        Self {
            form: RwSignal::new(WineDto {
                volume_ml: 750,
                ..Default::default()
            }),
            error: RwSignal::new(None),
        }
    }

    pub fn is_edit_mode(&self) -> impl Fn() -> bool + '_ {
        move || self.form.get().id.is_some()
    }

    pub fn is_form_valid(&self) -> impl Fn() -> bool + '_ {
        move || {
            let f = self.form.get();
            !f.name.trim().is_empty() && !f.producer.trim().is_empty() && f.vintage > 0
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

        if current.name.trim().is_empty() {
            self.error
                .set(Some("Название обязательно для заполнения".to_string()));
            return;
        }
        if current.producer.trim().is_empty() {
            self.error
                .set(Some("Производитель обязателен для заполнения".to_string()));
            return;
        }
        if !(1900..=2100).contains(&current.vintage) {
            self.error
                .set(Some("Год урожая должен быть в диапазоне 1900–2100".to_string()));
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

fn to_dto(aggregate: Wine) -> WineDto {
    WineDto {
        id: Some(aggregate.base.id.as_string()),
        name: aggregate.name,
        producer: aggregate.producer,
        vintage: aggregate.vintage,
        grape_variety: aggregate.grape_variety,
        volume_ml: aggregate.volume_ml,
        price: aggregate.price,
        stock: aggregate.stock,
        image: aggregate.image,
        status: aggregate.status,
    }
}
