use crate::shared::icons::icon;
use contracts::domain::a001_accommodation::aggregate::Accommodation;
use contracts::domain::a002_faq::aggregate::Faq;
use contracts::domain::a003_delivery_schedule::aggregate::DeliverySchedule;
use contracts::domain::a004_customer::aggregate::Customer;
use contracts::domain::a005_payment_method::aggregate::PaymentMethod;
use contracts::domain::a006_wine::aggregate::Wine;
use contracts::domain::common::AggregateRoot;
use leptos::prelude::*;
use leptos_router::components::A;

/// Левая панель навигации по сущностям
#[component]
pub fn Sidebar() -> impl IntoView {
    view! {
        <nav class="sidebar">
            <div class="sidebar__brand">{"Винодельня · Бэкофис"}</div>
            <ul class="sidebar__list">
                <li>
                    <A href="/wines">
                        {icon("wines")}
                        <span>{Wine::list_name()}</span>
                    </A>
                </li>
                <li>
                    <A href="/accommodations">
                        {icon("accommodations")}
                        <span>{Accommodation::list_name()}</span>
                    </A>
                </li>
                <li>
                    <A href="/delivery-schedules">
                        {icon("delivery")}
                        <span>{DeliverySchedule::list_name()}</span>
                    </A>
                </li>
                <li>
                    <A href="/customers">
                        {icon("customers")}
                        <span>{Customer::list_name()}</span>
                    </A>
                </li>
                <li>
                    <A href="/payment-methods">
                        {icon("payments")}
                        <span>{PaymentMethod::list_name()}</span>
                    </A>
                </li>
                <li>
                    <A href="/faq">
                        {icon("faq")}
                        <span>{Faq::list_name()}</span>
                    </A>
                </li>
            </ul>
        </nav>
    }
}
