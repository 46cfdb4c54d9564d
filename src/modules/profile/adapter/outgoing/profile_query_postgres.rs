use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use async_trait::async_trait;
use sea_orm::sea_query::extension::postgres::PgExpr;
use sea_orm::sea_query::{Expr, Func, Query};
use sea_orm::{
    ColumnTrait, Condition, ConnectionTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, Select,
};
use uuid::Uuid;

use crate::auth::adapter::outgoing::sea_orm_entity::users;
use crate::modules::profile::adapter::outgoing::sea_orm_entity::{experiences, profiles};
use crate::modules::profile::application::domain::entities::{
    ExperienceRecord, ProfileCard, ProfileDetail, ProfileRecord,
};
use crate::modules::profile::application::domain::listing::{ProfileListFilter, ProfileOrdering};
use crate::modules::profile::application::domain::recommendation::Candidate;
use crate::modules::profile::application::ports::outgoing::{ProfileQuery, ProfileQueryError};
use crate::modules::skill::adapter::outgoing::load_skill_views;
use crate::modules::skill::adapter::outgoing::sea_orm_entity::skills;
use crate::modules::talent::adapter::outgoing::load_talent_records;
use crate::modules::talent::adapter::outgoing::sea_orm_entity::talents;
use crate::shared::pagination::{PageRequest, PageResult};

#[derive(Clone)]
pub struct ProfileQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ProfileQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

pub(crate) fn to_record(model: profiles::Model) -> ProfileRecord {
    ProfileRecord {
        id: model.id,
        user_id: model.user_id,
        nama: model.nama,
        nim: model.nim,
        prodi: model.prodi,
        angkatan: model.angkatan,
        fakultas: model.fakultas,
        email: model.email,
        telepon: model.telepon,
        alamat: model.alamat,
        foto_profil: model.foto_profil,
        bio: model.bio,
        tanggal_lahir: model.tanggal_lahir,
        is_active: model.is_active,
        linkedin: model.linkedin,
        github: model.github,
        instagram: model.instagram,
        website: model.website,
        views_count: model.views_count,
        created_at: model.created_at.into(),
        updated_at: model.updated_at.into(),
    }
}

fn to_experience(model: experiences::Model) -> ExperienceRecord {
    ExperienceRecord {
        id: model.id,
        posisi: model.posisi,
        organisasi: model.organisasi,
        tahun_mulai: model.tahun_mulai,
        tahun_selesai: model.tahun_selesai,
        deskripsi: model.deskripsi,
    }
}

/// Builds full details for profile rows, keeping row order.
///
/// Runs one query per relation regardless of how many profiles are passed.
pub async fn load_profile_details<C>(
    db: &C,
    models: Vec<profiles::Model>,
) -> Result<Vec<ProfileDetail>, DbErr>
where
    C: ConnectionTrait,
{
    if models.is_empty() {
        return Ok(Vec::new());
    }

    let ids: Vec<i32> = models.iter().map(|m| m.id).collect();
    let user_ids: Vec<Uuid> = models.iter().map(|m| m.user_id).collect();

    let usernames: HashMap<Uuid, String> = users::Entity::find()
        .filter(users::Column::Id.is_in(user_ids))
        .all(db)
        .await?
        .into_iter()
        .map(|u| (u.id, u.username))
        .collect();

    let mut skills = load_skill_views(db, &ids).await?;

    let mut pengalaman: HashMap<i32, Vec<ExperienceRecord>> = HashMap::new();
    for model in experiences::Entity::find()
        .filter(experiences::Column::ProfileId.is_in(ids.clone()))
        .order_by_desc(experiences::Column::TahunMulai)
        .order_by_asc(experiences::Column::Id)
        .all(db)
        .await?
    {
        pengalaman
            .entry(model.profile_id)
            .or_default()
            .push(to_experience(model));
    }

    let mut talents = load_talent_records(db, &ids).await?;

    Ok(models
        .into_iter()
        .map(|model| {
            let id = model.id;
            ProfileDetail {
                username: usernames.get(&model.user_id).cloned().unwrap_or_default(),
                skills: skills.remove(&id).unwrap_or_default(),
                pengalaman: pengalaman.remove(&id).unwrap_or_default(),
                talents: talents.remove(&id).unwrap_or_default(),
                profile: to_record(model),
            }
        })
        .collect())
}

/// Per-profile row counts of a child table.
async fn count_by_profile<C, E>(
    db: &C,
    profile_ids: &[i32],
    profile_column: E::Column,
    id_column: E::Column,
) -> Result<HashMap<i32, u64>, DbErr>
where
    C: ConnectionTrait,
    E: EntityTrait,
{
    let rows: Vec<(i32, i64)> = E::find()
        .select_only()
        .column(profile_column)
        .column_as(Expr::col(id_column).count(), "count")
        .filter(profile_column.is_in(profile_ids.to_vec()))
        .group_by(profile_column)
        .into_tuple()
        .all(db)
        .await?;

    Ok(rows
        .into_iter()
        .map(|(id, count)| (id, count.max(0) as u64))
        .collect())
}

async fn to_cards<C>(db: &C, models: Vec<profiles::Model>) -> Result<Vec<ProfileCard>, DbErr>
where
    C: ConnectionTrait,
{
    if models.is_empty() {
        return Ok(Vec::new());
    }

    let ids: Vec<i32> = models.iter().map(|m| m.id).collect();
    let skills_count = count_by_profile::<_, skills::Entity>(
        db,
        &ids,
        skills::Column::ProfileId,
        skills::Column::Id,
    )
    .await?;
    let talents_count = count_by_profile::<_, talents::Entity>(
        db,
        &ids,
        talents::Column::ProfileId,
        talents::Column::Id,
    )
    .await?;

    Ok(models
        .into_iter()
        .map(|m| ProfileCard {
            skills_count: skills_count.get(&m.id).copied().unwrap_or(0),
            talents_count: talents_count.get(&m.id).copied().unwrap_or(0),
            id: m.id,
            nama: m.nama,
            nim: m.nim,
            prodi: m.prodi,
            angkatan: m.angkatan,
            fakultas: m.fakultas,
            email: m.email,
            foto_profil: m.foto_profil,
            bio: m.bio,
            is_active: m.is_active,
            views_count: m.views_count,
            created_at: m.created_at.into(),
        })
        .collect())
}

/// Escapes LIKE wildcards so user input matches literally.
pub(crate) fn like_pattern(search: &str) -> String {
    let escaped = search
        .trim()
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_");
    format!("%{escaped}%")
}

pub(crate) fn apply_ordering(
    query: Select<profiles::Entity>,
    ordering: ProfileOrdering,
) -> Select<profiles::Entity> {
    use profiles::Column;

    let query = match ordering {
        ProfileOrdering::NamaAsc => query.order_by_asc(Column::Nama),
        ProfileOrdering::NamaDesc => query.order_by_desc(Column::Nama),
        ProfileOrdering::NimAsc => query.order_by_asc(Column::Nim),
        ProfileOrdering::NimDesc => query.order_by_desc(Column::Nim),
        ProfileOrdering::CreatedAtAsc => query.order_by_asc(Column::CreatedAt),
        ProfileOrdering::CreatedAtDesc => query.order_by_desc(Column::CreatedAt),
        ProfileOrdering::ViewsAsc => query.order_by_asc(Column::ViewsCount),
        ProfileOrdering::ViewsDesc => query.order_by_desc(Column::ViewsCount),
    };
    query.order_by_asc(Column::Id)
}

fn map_db_err(e: DbErr) -> ProfileQueryError {
    ProfileQueryError::DatabaseError(e.to_string())
}

#[async_trait]
impl ProfileQuery for ProfileQueryPostgres {
    async fn find_by_id(&self, profile_id: i32) -> Result<Option<ProfileRecord>, ProfileQueryError> {
        let model = profiles::Entity::find_by_id(profile_id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;
        Ok(model.map(to_record))
    }

    async fn find_by_user(&self, user_id: Uuid) -> Result<Option<ProfileRecord>, ProfileQueryError> {
        let model = profiles::Entity::find()
            .filter(profiles::Column::UserId.eq(user_id))
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;
        Ok(model.map(to_record))
    }

    async fn find_detail(
        &self,
        profile_id: i32,
    ) -> Result<Option<ProfileDetail>, ProfileQueryError> {
        let Some(model) = profiles::Entity::find_by_id(profile_id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
        else {
            return Ok(None);
        };

        let mut details = load_profile_details(&*self.db, vec![model])
            .await
            .map_err(map_db_err)?;
        Ok(details.pop())
    }

    async fn find_details(
        &self,
        profile_ids: &[i32],
    ) -> Result<Vec<ProfileDetail>, ProfileQueryError> {
        if profile_ids.is_empty() {
            return Ok(Vec::new());
        }

        let mut by_id: HashMap<i32, profiles::Model> = profiles::Entity::find()
            .filter(profiles::Column::Id.is_in(profile_ids.to_vec()))
            .all(&*self.db)
            .await
            .map_err(map_db_err)?
            .into_iter()
            .map(|m| (m.id, m))
            .collect();

        let ordered: Vec<_> = profile_ids.iter().filter_map(|id| by_id.remove(id)).collect();

        load_profile_details(&*self.db, ordered)
            .await
            .map_err(map_db_err)
    }

    async fn nim_taken_by_other(
        &self,
        nim: &str,
        user_id: Uuid,
    ) -> Result<bool, ProfileQueryError> {
        let holder = profiles::Entity::find()
            .filter(profiles::Column::Nim.eq(nim.trim()))
            .filter(profiles::Column::UserId.ne(user_id))
            .select_only()
            .column(profiles::Column::Id)
            .into_tuple::<i32>()
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;
        Ok(holder.is_some())
    }

    async fn list(
        &self,
        filter: &ProfileListFilter,
        page: PageRequest,
    ) -> Result<PageResult<ProfileCard>, ProfileQueryError> {
        use profiles::Column;

        let mut query = profiles::Entity::find().filter(Column::IsActive.eq(true));

        if let Some(prodi) = &filter.prodi {
            query = query.filter(Column::Prodi.eq(prodi.as_str()));
        }
        if let Some(fakultas) = &filter.fakultas {
            query = query.filter(Column::Fakultas.eq(fakultas.as_str()));
        }
        if let Some(angkatan) = &filter.angkatan {
            query = query.filter(Column::Angkatan.eq(angkatan.as_str()));
        }
        if let Some(is_active) = filter.is_active {
            query = query.filter(Column::IsActive.eq(is_active));
        }

        if let Some(search) = filter.search.as_deref().filter(|s| !s.trim().is_empty()) {
            let pattern = like_pattern(search);
            let with_skill = Query::select()
                .column(skills::Column::ProfileId)
                .from(skills::Entity)
                .and_where(Expr::col(skills::Column::Nama).ilike(&pattern))
                .to_owned();

            query = query.filter(
                Condition::any()
                    .add(Expr::col(Column::Nama).ilike(&pattern))
                    .add(Expr::col(Column::Nim).ilike(&pattern))
                    .add(Expr::col(Column::Prodi).ilike(&pattern))
                    .add(Expr::col(Column::Bio).ilike(&pattern))
                    .add(Column::Id.in_subquery(with_skill)),
            );
        }

        let total = query.clone().count(&*self.db).await.map_err(map_db_err)?;

        let models = apply_ordering(query, filter.ordering)
            .offset(page.offset())
            .limit(page.per_page as u64)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(PageResult {
            items: to_cards(&*self.db, models).await.map_err(map_db_err)?,
            page: page.page,
            per_page: page.per_page,
            total,
        })
    }

    async fn latest(&self, limit: u64) -> Result<Vec<ProfileCard>, ProfileQueryError> {
        let models = profiles::Entity::find()
            .filter(profiles::Column::IsActive.eq(true))
            .order_by_desc(profiles::Column::CreatedAt)
            .order_by_desc(profiles::Column::Id)
            .limit(limit)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        to_cards(&*self.db, models).await.map_err(map_db_err)
    }

    async fn most_viewed(&self, limit: u64) -> Result<Vec<ProfileCard>, ProfileQueryError> {
        let models = profiles::Entity::find()
            .filter(profiles::Column::IsActive.eq(true))
            .order_by_desc(profiles::Column::ViewsCount)
            .order_by_asc(profiles::Column::Id)
            .limit(limit)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        to_cards(&*self.db, models).await.map_err(map_db_err)
    }

    async fn skill_names(&self, profile_id: i32) -> Result<Vec<String>, ProfileQueryError> {
        skills::Entity::find()
            .filter(skills::Column::ProfileId.eq(profile_id))
            .select_only()
            .column(skills::Column::Nama)
            .order_by_asc(skills::Column::Id)
            .into_tuple::<String>()
            .all(&*self.db)
            .await
            .map_err(map_db_err)
    }

    async fn recommendation_candidates(
        &self,
        exclude_id: i32,
        skill_names: &[String],
        limit: u64,
    ) -> Result<Vec<Candidate>, ProfileQueryError> {
        let folded: HashSet<String> = skill_names
            .iter()
            .map(|s| s.trim().to_lowercase())
            .filter(|s| !s.is_empty())
            .collect();

        if folded.is_empty() {
            let rows: Vec<(i32, i32)> = profiles::Entity::find()
                .filter(profiles::Column::IsActive.eq(true))
                .filter(profiles::Column::Id.ne(exclude_id))
                .select_only()
                .column(profiles::Column::Id)
                .column(profiles::Column::ViewsCount)
                .order_by_desc(profiles::Column::ViewsCount)
                .order_by_asc(profiles::Column::Id)
                .limit(limit)
                .into_tuple()
                .all(&*self.db)
                .await
                .map_err(map_db_err)?;

            return Ok(rows
                .into_iter()
                .map(|(profile_id, views_count)| Candidate {
                    profile_id,
                    views_count,
                    skills: Vec::new(),
                })
                .collect());
        }

        let matches: Vec<(i32, String)> = skills::Entity::find()
            .select_only()
            .column(skills::Column::ProfileId)
            .column(skills::Column::Nama)
            .filter(skills::Column::ProfileId.ne(exclude_id))
            .filter(
                Expr::expr(Func::lower(Expr::col(skills::Column::Nama)))
                    .is_in(folded.into_iter().collect::<Vec<_>>()),
            )
            .into_tuple()
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        if matches.is_empty() {
            return Ok(Vec::new());
        }

        let mut skills_by_profile: HashMap<i32, Vec<String>> = HashMap::new();
        for (profile_id, nama) in matches {
            skills_by_profile.entry(profile_id).or_default().push(nama);
        }

        let active: Vec<(i32, i32)> = profiles::Entity::find()
            .filter(profiles::Column::IsActive.eq(true))
            .filter(profiles::Column::Id.is_in(skills_by_profile.keys().copied().collect::<Vec<_>>()))
            .select_only()
            .column(profiles::Column::Id)
            .column(profiles::Column::ViewsCount)
            .into_tuple()
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(active
            .into_iter()
            .map(|(profile_id, views_count)| Candidate {
                profile_id,
                views_count,
                skills: skills_by_profile.remove(&profile_id).unwrap_or_default(),
            })
            .collect())
    }
}
