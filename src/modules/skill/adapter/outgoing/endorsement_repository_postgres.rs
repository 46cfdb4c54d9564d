use std::sync::Arc;

use async_trait::async_trait;
use sea_orm::{
    ColumnTrait, DatabaseBackend, DatabaseConnection, DbErr, EntityTrait, QueryFilter, Statement,
};
use uuid::Uuid;

use crate::modules::skill::adapter::outgoing::sea_orm_entity::skill_endorsements::{
    self, Column, Entity,
};
use crate::modules::skill::application::domain::entities::Endorsement;
use crate::modules::skill::application::ports::outgoing::{
    EndorsementRepository, EndorsementRepositoryError,
};

const INSERT_IF_ABSENT: &str = r#"
    INSERT INTO skill_endorsements (skill_id, endorsed_by, created_at)
    VALUES ($1, $2, CURRENT_TIMESTAMP)
    ON CONFLICT (skill_id, endorsed_by) DO NOTHING
    RETURNING id, skill_id, endorsed_by, created_at
"#;

#[derive(Clone)]
pub struct EndorsementRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl EndorsementRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn map_db_err(e: DbErr) -> EndorsementRepositoryError {
    EndorsementRepositoryError::DatabaseError(e.to_string())
}

fn to_domain(model: skill_endorsements::Model) -> Endorsement {
    Endorsement {
        id: model.id,
        skill_id: model.skill_id,
        endorsed_by: model.endorsed_by,
        created_at: model.created_at.into(),
    }
}

#[async_trait]
impl EndorsementRepository for EndorsementRepositoryPostgres {
    async fn insert_if_absent(
        &self,
        skill_id: i32,
        endorsed_by: Uuid,
    ) -> Result<Option<Endorsement>, EndorsementRepositoryError> {
        let inserted = Entity::find()
            .from_raw_sql(Statement::from_sql_and_values(
                DatabaseBackend::Postgres,
                INSERT_IF_ABSENT,
                [skill_id.into(), endorsed_by.into()],
            ))
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(inserted.map(to_domain))
    }

    async fn find(
        &self,
        skill_id: i32,
        endorsed_by: Uuid,
    ) -> Result<Option<Endorsement>, EndorsementRepositoryError> {
        let found = Entity::find()
            .filter(Column::SkillId.eq(skill_id))
            .filter(Column::EndorsedBy.eq(endorsed_by))
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(found.map(to_domain))
    }

    async fn delete(
        &self,
        skill_id: i32,
        endorsed_by: Uuid,
    ) -> Result<bool, EndorsementRepositoryError> {
        let result = Entity::delete_many()
            .filter(Column::SkillId.eq(skill_id))
            .filter(Column::EndorsedBy.eq(endorsed_by))
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(result.rows_affected > 0)
    }
}
