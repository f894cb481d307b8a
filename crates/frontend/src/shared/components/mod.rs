pub mod column_picker;
pub mod spinner;
pub mod status_badge;
pub mod table_checkbox;

pub use column_picker::ColumnPicker;
pub use spinner::Spinner;
pub use status_badge::StatusBadge;
pub use table_checkbox::TableCheckbox;
