use async_trait::async_trait;
use sea_orm::sea_query::{Expr, Func};
use sea_orm::{
    ColumnTrait, ConnectionTrait, DatabaseBackend, DatabaseConnection, EntityTrait, QueryFilter,
    Statement,
};
use std::sync::Arc;
use uuid::Uuid;

use super::sea_orm_entity::users::{
    Column as UserColumn, Entity as UserEntity, Model as UserModel,
};
use crate::auth::application::ports::outgoing::{UserQuery, UserQueryError, UserQueryResult};

#[derive(Clone, Debug)]
pub struct UserQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl UserQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn map_to_query_result(model: UserModel) -> UserQueryResult {
        UserQueryResult {
            id: model.id,
            username: model.username,
            email: model.email,
            password_hash: model.password_hash,
            is_admin: model.is_admin,
            is_student: model.is_student,
            created_at: model.created_at.with_timezone(&chrono::Utc),
            updated_at: model.updated_at.with_timezone(&chrono::Utc),
        }
    }
}

fn map_db_err(e: sea_orm::DbErr) -> UserQueryError {
    UserQueryError::DatabaseError(e.to_string())
}

#[async_trait]
impl UserQuery for UserQueryPostgres {
    async fn find_by_id(&self, user_id: Uuid) -> Result<Option<UserQueryResult>, UserQueryError> {
        let user = UserEntity::find_by_id(user_id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(user.map(Self::map_to_query_result))
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<UserQueryResult>, UserQueryError> {
        let user = UserEntity::find()
            .filter(
                Expr::expr(Func::lower(Expr::col(UserColumn::Email)))
                    .eq(email.trim().to_lowercase()),
            )
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(user.map(Self::map_to_query_result))
    }

    async fn find_by_username(
        &self,
        username: &str,
    ) -> Result<Option<UserQueryResult>, UserQueryError> {
        let user = UserEntity::find()
            .filter(UserColumn::Username.eq(username))
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(user.map(Self::map_to_query_result))
    }

    async fn has_profile(&self, user_id: Uuid) -> Result<bool, UserQueryError> {
        let stmt = Statement::from_sql_and_values(
            DatabaseBackend::Postgres,
            r#"SELECT EXISTS(SELECT 1 FROM profiles WHERE user_id = $1) AS "exists""#,
            vec![user_id.into()],
        );

        let row = self.db.query_one(stmt).await.map_err(map_db_err)?;

        match row {
            Some(row) => row.try_get::<bool>("", "exists").map_err(map_db_err),
            None => Ok(false),
        }
    }
}
