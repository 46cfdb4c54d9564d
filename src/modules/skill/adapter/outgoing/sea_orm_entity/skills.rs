use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "skills")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    pub profile_id: i32,

    pub nama: String,

    #[sea_orm(nullable)]
    pub level: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "crate::modules::profile::adapter::outgoing::sea_orm_entity::profiles::Entity",
        from = "Column::ProfileId",
        to = "crate::modules::profile::adapter::outgoing::sea_orm_entity::profiles::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Profiles,

    #[sea_orm(has_many = "super::skill_endorsements::Entity")]
    SkillEndorsements,
}

impl Related<crate::modules::profile::adapter::outgoing::sea_orm_entity::profiles::Entity>
    for Entity
{
    fn to() -> RelationDef {
        Relation::Profiles.def()
    }
}

impl Related<super::skill_endorsements::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SkillEndorsements.def()
    }
}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C>(mut self, _db: &C, _insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        use sea_orm::{ActiveValue, Set};

        if let ActiveValue::Set(nama) = &self.nama {
            self.nama = Set(nama.trim().to_string());
        }

        Ok(self)
    }
}
