pub mod image_decoder;
pub mod palette_store;
pub mod timeout;
