use async_trait::async_trait;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use super::sea_orm_entity::users::{ActiveModel, Column, Entity};
use crate::auth::application::domain::entities::User;
use crate::auth::application::ports::outgoing::{UserRepository, UserRepositoryError};

#[derive(Clone, Debug)]
pub struct UserRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl UserRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn map_db_err(e: DbErr) -> UserRepositoryError {
    let msg = e.to_string();
    if msg.contains("23505") || msg.contains("duplicate key") {
        UserRepositoryError::UserAlreadyExists
    } else {
        UserRepositoryError::DatabaseError(msg)
    }
}

#[async_trait]
impl UserRepository for UserRepositoryPostgres {
    async fn create_user(&self, user: User) -> Result<User, UserRepositoryError> {
        let model = ActiveModel {
            id: Set(user.id),
            username: Set(user.username.clone()),
            email: Set(user.email.clone()),
            password_hash: Set(user.password_hash.clone()),
            is_admin: Set(user.is_admin),
            is_student: Set(user.is_student),
            created_at: Set(user.created_at.into()),
            updated_at: Set(user.updated_at.into()),
        };

        let inserted = model.insert(&*self.db).await.map_err(map_db_err)?;

        Ok(User {
            id: inserted.id,
            username: inserted.username,
            email: inserted.email,
            password_hash: inserted.password_hash,
            is_admin: inserted.is_admin,
            is_student: inserted.is_student,
            created_at: inserted.created_at.with_timezone(&chrono::Utc),
            updated_at: inserted.updated_at.with_timezone(&chrono::Utc),
        })
    }

    async fn grant_admin(&self, user_id: Uuid) -> Result<(), UserRepositoryError> {
        let result = Entity::update_many()
            .col_expr(Column::IsAdmin, Expr::value(true))
            .filter(Column::Id.eq(user_id))
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(UserRepositoryError::UserNotFound);
        }

        Ok(())
    }
}
