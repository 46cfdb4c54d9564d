use std::sync::Arc;

use async_trait::async_trait;
use sea_orm::sea_query::extension::postgres::PgExpr;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, QueryFilter,
};

use crate::auth::adapter::outgoing::sea_orm_entity::users;
use crate::modules::admin::application::domain::entities::{AdminProfileFilter, ProfileStatistics};
use crate::modules::admin::application::ports::outgoing::{AdminQuery, AdminQueryError};
use crate::modules::profile::adapter::outgoing::sea_orm_entity::{profile_views, profiles};
use crate::modules::profile::adapter::outgoing::{apply_ordering, like_pattern, load_profile_details};
use crate::modules::profile::application::domain::entities::ProfileDetail;
use crate::modules::skill::adapter::outgoing::sea_orm_entity::{skill_endorsements, skills};

#[derive(Clone)]
pub struct AdminQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl AdminQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn map_db_err(e: DbErr) -> AdminQueryError {
    AdminQueryError::DatabaseError(e.to_string())
}

#[async_trait]
impl AdminQuery for AdminQueryPostgres {
    async fn search_profiles(
        &self,
        filter: &AdminProfileFilter,
    ) -> Result<Vec<ProfileDetail>, AdminQueryError> {
        use profiles::Column;

        let mut query = profiles::Entity::find();

        if let Some(search) = filter.search.as_deref().filter(|s| !s.trim().is_empty()) {
            let pattern = like_pattern(search);
            query = query.filter(
                Condition::any()
                    .add(Expr::col(Column::Nama).ilike(&pattern))
                    .add(Expr::col(Column::Nim).ilike(&pattern))
                    .add(Expr::col(Column::Prodi).ilike(&pattern)),
            );
        }
        if let Some(status) = filter.status {
            query = query.filter(Column::IsActive.eq(status.is_active()));
        }

        let models = apply_ordering(query, filter.ordering)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        load_profile_details(&*self.db, models)
            .await
            .map_err(map_db_err)
    }

    async fn statistics(&self) -> Result<ProfileStatistics, AdminQueryError> {
        let db = &*self.db;

        let total_mahasiswa = profiles::Entity::find().count(db).await.map_err(map_db_err)?;
        let active_mahasiswa = profiles::Entity::find()
            .filter(profiles::Column::IsActive.eq(true))
            .count(db)
            .await
            .map_err(map_db_err)?;

        Ok(ProfileStatistics {
            total_mahasiswa,
            active_mahasiswa,
            inactive_mahasiswa: total_mahasiswa.saturating_sub(active_mahasiswa),
            total_users: users::Entity::find().count(db).await.map_err(map_db_err)?,
            total_skills: skills::Entity::find().count(db).await.map_err(map_db_err)?,
            total_endorsements: skill_endorsements::Entity::find()
                .count(db)
                .await
                .map_err(map_db_err)?,
            total_profile_views: profile_views::Entity::find()
                .count(db)
                .await
                .map_err(map_db_err)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::admin::application::domain::entities::ActivityStatus;
    use sea_orm::sea_query::Value;
    use sea_orm::{DatabaseBackend, MockDatabase};
    use std::collections::BTreeMap;

    fn count_row(n: i64) -> Vec<BTreeMap<String, Value>> {
        vec![BTreeMap::from([("num_items".to_string(), Value::BigInt(Some(n)))])]
    }

    #[tokio::test]
    async fn statistics_derive_inactive_from_totals() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![count_row(10)])
            .append_query_results(vec![count_row(7)])
            .append_query_results(vec![count_row(12)])
            .append_query_results(vec![count_row(30)])
            .append_query_results(vec![count_row(4)])
            .append_query_results(vec![count_row(55)])
            .into_connection();

        let stats = AdminQueryPostgres::new(Arc::new(db))
            .statistics()
            .await
            .unwrap();

        assert_eq!(
            stats,
            ProfileStatistics {
                total_mahasiswa: 10,
                active_mahasiswa: 7,
                inactive_mahasiswa: 3,
                total_users: 12,
                total_skills: 30,
                total_endorsements: 4,
                total_profile_views: 55,
            }
        );
    }

    #[tokio::test]
    async fn empty_search_skips_relation_queries() {
        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results(vec![Vec::<profiles::Model>::new()])
                .into_connection(),
        );

        let results = AdminQueryPostgres::new(db.clone())
            .search_profiles(&AdminProfileFilter {
                search: Some("siti".into()),
                status: Some(ActivityStatus::Inactive),
                ..Default::default()
            })
            .await
            .unwrap();

        assert!(results.is_empty());

        let log = Arc::try_unwrap(db).unwrap().into_transaction_log();
        assert_eq!(log.len(), 1);
        let sql = format!("{:?}", log[0]);
        assert!(sql.contains("ILIKE"));
        assert!(sql.contains("is_active"));
    }

    #[tokio::test]
    async fn database_errors_are_wrapped() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors(vec![DbErr::Custom("boom".into())])
            .into_connection();

        let err = AdminQueryPostgres::new(Arc::new(db))
            .statistics()
            .await
            .unwrap_err();

        assert!(matches!(err, AdminQueryError::DatabaseError(_)));
    }
}
