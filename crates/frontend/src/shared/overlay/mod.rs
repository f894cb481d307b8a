pub mod frame;

pub use frame::PanelFrame;
