mod model;
mod view;
mod view_model;

pub use view::AccommodationDetails;
