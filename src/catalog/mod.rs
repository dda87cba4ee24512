pub mod client;
pub mod docs;
pub mod metadata;

pub use client::CatalogClient;
pub use metadata::ModelMetadata;
