pub mod common;

pub mod a001_accommodation;
pub mod a002_faq;
pub mod a003_delivery_schedule;
pub mod a004_customer;
pub mod a005_payment_method;
pub mod a006_wine;
