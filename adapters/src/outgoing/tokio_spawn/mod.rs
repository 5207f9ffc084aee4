pub mod decode_timeout_tokio;
