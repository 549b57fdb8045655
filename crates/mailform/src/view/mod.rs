//! View components for the application.

mod attachments;
mod banner;
mod compose;

pub use banner::view_banners;
pub use compose::view_compose;
