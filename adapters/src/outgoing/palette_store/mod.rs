pub mod json_file_store;
pub mod library_state;
pub mod memory_store;
