use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "talents")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    pub profile_id: i32,

    pub judul: String,

    #[sea_orm(column_type = "Text")]
    pub deskripsi: String,

    #[sea_orm(nullable)]
    pub kategori: Option<String>,

    #[sea_orm(column_type = "Text", nullable)]
    pub link_portfolio: Option<String>,

    #[sea_orm(column_type = "Text", nullable)]
    pub gambar: Option<String>,

    #[sea_orm(nullable)]
    pub tanggal_mulai: Option<Date>,

    #[sea_orm(nullable)]
    pub tanggal_selesai: Option<Date>,

    pub created_at: DateTimeWithTimeZone,

    pub updated_at: DateTimeWithTimeZone,
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
}

impl Related<crate::modules::profile::adapter::outgoing::sea_orm_entity::profiles::Entity>
    for Entity
{
    fn to() -> RelationDef {
        Relation::Profiles.def()
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

        if let ActiveValue::Set(judul) = &self.judul {
            self.judul = Set(judul.trim().to_string());
        }

        if !insert {
            self.updated_at = Set(Utc::now().into());
        }

        Ok(self)
    }
}
