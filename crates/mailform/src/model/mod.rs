//! View-side models.

mod banner;

pub use banner::Banner;
