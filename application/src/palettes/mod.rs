pub mod data_uri;
pub mod samples;
pub mod service;
