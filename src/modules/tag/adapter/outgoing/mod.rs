pub mod sea_orm_entity;
pub mod tag_query_postgres;
pub mod tag_repository_postgres;

pub use tag_query_postgres::TagQueryPostgres;
pub use tag_repository_postgres::TagRepositoryPostgres;
