pub mod data_url;
pub mod face_store;
pub mod retry;
