pub mod image_rs;
pub mod palette_store;
pub mod tokio_spawn;
