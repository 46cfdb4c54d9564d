pub use sea_orm_migration::prelude::*;

mod m20250304_105428_create_users_table;
mod m20250310_090000_create_profiles_table;
mod m20250310_090100_create_experiences_table;
mod m20250310_090200_create_skills_table;
mod m20250310_090300_create_talents_table;
mod m20250310_090400_create_profile_views_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250304_105428_create_users_table::Migration),
            Box::new(m20250310_090000_create_profiles_table::Migration),
            Box::new(m20250310_090100_create_experiences_table::Migration),
            Box::new(m20250310_090200_create_skills_table::Migration),
            Box::new(m20250310_090300_create_talents_table::Migration),
            Box::new(m20250310_090400_create_profile_views_table::Migration),
        ]
    }
}
