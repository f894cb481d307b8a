use crate::domain::a001_accommodation::ui::list::AccommodationList;
use crate::domain::a002_faq::ui::list::FaqList;
use crate::domain::a003_delivery_schedule::ui::list::DeliveryScheduleList;
use crate::domain::a004_customer::ui::list::CustomerList;
use crate::domain::a005_payment_method::ui::list::PaymentMethodList;
use crate::domain::a006_wine::ui::list::WineList;
use crate::layout::Shell;
use crate::shared::page_standard::PAGE_CAT_CUSTOM;
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

#[component]
fn HomePage() -> impl IntoView {
    view! {
        <div class="page" id="home--custom" data-page-category=PAGE_CAT_CUSTOM>
            <h1>{"Бэкофис винодельни"}</h1>
            <p>{"Выберите раздел в меню слева."}</p>
        </div>
    }
}

#[component]
fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="page" id="not-found--custom" data-page-category=PAGE_CAT_CUSTOM>
            <h1>{"Страница не найдена"}</h1>
        </div>
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Shell>
                <Routes fallback=NotFoundPage>
                    <Route path=path!("/") view=HomePage />
                    <Route path=path!("/wines") view=WineList />
                    <Route path=path!("/accommodations") view=AccommodationList />
                    <Route path=path!("/delivery-schedules") view=DeliveryScheduleList />
                    <Route path=path!("/customers") view=CustomerList />
                    <Route path=path!("/payment-methods") view=PaymentMethodList />
                    <Route path=path!("/faq") view=FaqList />
                </Routes>
            </Shell>
        </Router>
    }
}
