// Adapters layer: concrete implementations for external systems (completion API, deployed endpoint, storage)

pub mod api_client;
pub mod groq;
pub mod local_storage;
pub mod preferences;
