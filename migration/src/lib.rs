pub use sea_orm_migration::prelude::*;

mod m20200418_000001_create_tables;
mod m20200426_201124_show_indexes;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20200418_000001_create_tables::Migration),
            Box::new(m20200426_201124_show_indexes::Migration),
        ]
    }
}
