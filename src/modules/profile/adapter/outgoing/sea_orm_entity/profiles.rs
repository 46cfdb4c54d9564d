use sea_orm::entity::prelude::*;
use uuid::Uuid;

use crate::auth::adapter::outgoing::sea_orm_entity::users;
use crate::modules::skill::adapter::outgoing::sea_orm_entity::skills;
use crate::modules::talent::adapter::outgoing::sea_orm_entity::talents;

use super::{experiences, profile_views};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "profiles")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    #[sea_orm(unique)]
    pub user_id: Uuid,

    pub nama: String,

    #[sea_orm(unique)]
    pub nim: String,

    pub prodi: String,
    pub angkatan: Option<String>,
    pub fakultas: Option<String>,
    pub email: String,
    pub telepon: Option<String>,

    #[sea_orm(column_type = "Text", nullable)]
    pub alamat: Option<String>,

    #[sea_orm(column_type = "Text", nullable)]
    pub foto_profil: Option<String>,

    #[sea_orm(column_type = "Text", nullable)]
    pub bio: Option<String>,

    pub tanggal_lahir: Option<Date>,
    pub is_active: bool,

    #[sea_orm(column_type = "Text", nullable)]
    pub linkedin: Option<String>,

    #[sea_orm(column_type = "Text", nullable)]
    pub github: Option<String>,

    #[sea_orm(column_type = "Text", nullable)]
    pub instagram: Option<String>,

    #[sea_orm(column_type = "Text", nullable)]
    pub website: Option<String>,

    pub views_count: i32,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "users::Entity",
        from = "Column::UserId",
        to = "users::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Users,

    #[sea_orm(has_many = "skills::Entity")]
    Skills,

    #[sea_orm(has_many = "talents::Entity")]
    Talents,

    #[sea_orm(has_many = "experiences::Entity")]
    Experiences,

    #[sea_orm(has_many = "profile_views::Entity")]
    ProfileViews,
}

impl Related<users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Users.def()
    }
}

impl Related<skills::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Skills.def()
    }
}

impl Related<talents::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Talents.def()
    }
}

impl Related<experiences::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Experiences.def()
    }
}

impl Related<profile_views::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ProfileViews.def()
    }
}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C>(mut self, _db: &C, insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        use chrono::Utc;
        use sea_orm::{ActiveValue, Set};

        if let ActiveValue::Set(nim) = &self.nim {
            self.nim = Set(nim.trim().to_string());
        }

        if !insert {
            self.updated_at = Set(Utc::now().into());
        }

        Ok(self)
    }
}
