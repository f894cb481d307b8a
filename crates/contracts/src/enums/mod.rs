pub mod payment_method_status;
pub mod record_status;

pub use payment_method_status::PaymentMethodStatus;
pub use record_status::RecordStatus;
