pub use sea_orm_migration::prelude::*;

mod m20261001_000001_create_table_about;
mod m20261001_000002_create_table_skills;
mod m20261001_000003_create_table_projects;
mod m20261001_000004_create_table_experience;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20261001_000001_create_table_about::Migration),
            Box::new(m20261001_000002_create_table_skills::Migration),
            Box::new(m20261001_000003_create_table_projects::Migration),
            Box::new(m20261001_000004_create_table_experience::Migration),
        ]
    }
}
