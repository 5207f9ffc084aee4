pub mod color;
pub mod error;
pub mod library;
pub mod palette;
pub mod pixels;
