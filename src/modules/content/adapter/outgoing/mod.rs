mod content_query_postgres;
mod content_seed_postgres;
mod content_store;
pub mod sea_orm_entity;

pub use content_query_postgres::ContentQueryPostgres;
pub use content_seed_postgres::{ContentSeed, ContentSeederPostgres, SeedReport};
pub use content_store::{ContentStore, StoreStatus};
