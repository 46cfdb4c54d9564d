use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::auth::application::use_cases::fetch_account::{
    AccountInfo, FetchAccountError, FetchAccountUseCase,
};
use crate::auth::application::use_cases::login_user::{
    ILoginUserUseCase, LoginError, LoginRequest, LoginUserResponse,
};
use crate::auth::application::use_cases::refresh_token::{
    IRefreshTokenUseCase, RefreshTokenError, RefreshTokenRequest, RefreshTokenResponse,
};
use crate::auth::application::use_cases::register_user::{
    IRegisterUserUseCase, RegisterUserError, RegisterUserRequest, RegisterUserResponse,
};
use crate::modules::admin::application::domain::entities::{
    AdminCheck, AdminProfileFilter, AdminProfileList, ProfileStatistics,
};
use crate::modules::admin::application::ports::incoming::use_cases::{
    AdminCheckError, AdminCheckUseCase, ProfileStatisticsError, ProfileStatisticsUseCase,
    SearchProfilesError, SearchProfilesUseCase,
};
use crate::modules::document::application::ports::incoming::use_cases::{
    CvFile, DownloadCvError, DownloadCvUseCase, ProfileQrError, ProfileQrUseCase, QrImage,
};
use crate::modules::profile::application::domain::entities::{
    ExperienceRecord, ProfileCard, ProfileDetail, ProfileLists, ProfilePatch, ProfileRecord,
    ToggleOutcome, ViewContext, ViewOutcome,
};
use crate::modules::profile::application::domain::listing::ProfileListFilter;
use crate::modules::profile::application::ports::incoming::use_cases::{
    CompletionReport, DeleteProfileError, DeleteProfileUseCase, FeaturedProfilesError,
    FeaturedProfilesUseCase, GetProfileError, GetProfileUseCase, ListProfilesError,
    ListProfilesUseCase, MyProfile, MyProfileError, MyProfileUseCase, ProfileCompletionError,
    ProfileCompletionUseCase, RecommendProfilesError, RecommendProfilesUseCase, ToggleStatusError,
    ToggleStatusUseCase, TrackViewError, TrackViewUseCase, UpdateProfileError,
    UpdateProfileUseCase, UpsertOutcome, UpsertProfileError, UpsertProfileUseCase,
};
use crate::modules::skill::application::domain::entities::{
    EndorsementView, NewSkill, SkillPatch, SkillView,
};
use crate::modules::skill::application::ports::incoming::use_cases::{
    CreateSkillError, CreateSkillUseCase, DeleteSkillError, DeleteSkillUseCase, EndorseOutcome,
    EndorseSkillError, EndorseSkillUseCase, GetSkillError, GetSkillUseCase, ListSkillsError,
    ListSkillsUseCase, RemoveEndorsementError, RemoveEndorsementUseCase, UpdateSkillError,
    UpdateSkillUseCase,
};
use crate::modules::talent::application::domain::entities::{NewTalent, TalentPatch, TalentRecord};
use crate::modules::talent::application::ports::incoming::use_cases::{
    CreateTalentError, CreateTalentUseCase, DeleteTalentError, DeleteTalentUseCase,
    GetTalentError, GetTalentUseCase, ListTalentsError, ListTalentsUseCase, UpdateTalentError,
    UpdateTalentUseCase,
};
use crate::shared::pagination::{PageRequest, PageResult};

// ============================ Fixtures ============================

pub fn sample_talent(id: i32, profile_id: i32) -> TalentRecord {
    let now = Utc::now();
    TalentRecord {
        id,
        profile_id,
        judul: format!("Portfolio {id}"),
        deskripsi: "Aplikasi pencatatan kegiatan himpunan".to_string(),
        kategori: Some("Project".to_string()),
        link_portfolio: Some(format!("https://github.com/mhs/portfolio-{id}")),
        gambar: None,
        tanggal_mulai: NaiveDate::from_ymd_opt(2023, 2, 1),
        tanggal_selesai: NaiveDate::from_ymd_opt(2023, 8, 1),
        created_at: now,
        updated_at: now,
    }
}

pub fn sample_record(id: i32, user_id: Uuid) -> ProfileRecord {
    let now = Utc::now();
    ProfileRecord {
        id,
        user_id,
        nama: format!("Mahasiswa {id}"),
        nim: format!("L2000220{id:02}"),
        prodi: "Informatika".to_string(),
        angkatan: Some("2022".to_string()),
        fakultas: None,
        email: format!("m{id}@kampus.ac.id"),
        telepon: Some("08123456789".to_string()),
        alamat: None,
        foto_profil: None,
        bio: Some("Suka membangun backend.".to_string()),
        tanggal_lahir: None,
        is_active: true,
        linkedin: None,
        github: Some(format!("https://github.com/mhs{id}")),
        instagram: None,
        website: None,
        views_count: 0,
        created_at: now,
        updated_at: now,
    }
}

/// Detail with two skills (one without level), one experience and one talent.
pub fn sample_detail(id: i32, user_id: Uuid) -> ProfileDetail {
    let endorsement = EndorsementView {
        id: 1,
        skill_id: id * 10,
        endorsed_by: Uuid::new_v4(),
        endorsed_by_username: "teman".to_string(),
        created_at: Utc::now(),
    };

    ProfileDetail {
        profile: sample_record(id, user_id),
        username: format!("mhs{id}"),
        skills: vec![
            SkillView {
                id: id * 10,
                profile_id: id,
                nama: "Rust".to_string(),
                level: Some("Advanced".to_string()),
                endorsement_count: 1,
                endorsements: vec![endorsement],
            },
            SkillView {
                id: id * 10 + 1,
                profile_id: id,
                nama: "PostgreSQL".to_string(),
                level: None,
                endorsement_count: 0,
                endorsements: Vec::new(),
            },
        ],
        pengalaman: vec![ExperienceRecord {
            id: id * 100,
            posisi: "Ketua".to_string(),
            organisasi: "HIMA Informatika".to_string(),
            tahun_mulai: "2023".to_string(),
            tahun_selesai: None,
            deskripsi: None,
        }],
        talents: vec![sample_talent(id * 1000, id)],
    }
}

pub fn sample_card(id: i32) -> ProfileCard {
    let record = sample_record(id, Uuid::new_v4());
    ProfileCard {
        id,
        nama: record.nama,
        nim: record.nim,
        prodi: record.prodi,
        angkatan: record.angkatan,
        fakultas: record.fakultas,
        email: record.email,
        foto_profil: record.foto_profil,
        bio: record.bio,
        is_active: record.is_active,
        skills_count: 2,
        talents_count: 1,
        views_count: record.views_count,
        created_at: record.created_at,
    }
}

fn not_stubbed() -> String {
    "not stubbed in this test".to_string()
}

// ============================ Auth ============================

#[derive(Default, Clone)]
pub struct StubRegisterUser;

#[async_trait]
impl IRegisterUserUseCase for StubRegisterUser {
    async fn execute(
        &self,
        _request: RegisterUserRequest,
    ) -> Result<RegisterUserResponse, RegisterUserError> {
        Err(RegisterUserError::RepositoryError(not_stubbed()))
    }
}

#[derive(Default, Clone)]
pub struct StubLoginUser;

#[async_trait]
impl ILoginUserUseCase for StubLoginUser {
    async fn execute(&self, _request: LoginRequest) -> Result<LoginUserResponse, LoginError> {
        Err(LoginError::InvalidCredentials)
    }
}

#[derive(Default, Clone)]
pub struct StubRefreshToken;

#[async_trait]
impl IRefreshTokenUseCase for StubRefreshToken {
    async fn execute(
        &self,
        _request: RefreshTokenRequest,
    ) -> Result<RefreshTokenResponse, RefreshTokenError> {
        Err(RefreshTokenError::TokenInvalid)
    }
}

#[derive(Default, Clone)]
pub struct StubFetchAccount;

#[async_trait]
impl FetchAccountUseCase for StubFetchAccount {
    async fn execute(&self, _user_id: UserId) -> Result<AccountInfo, FetchAccountError> {
        Err(FetchAccountError::NotFound)
    }
}

// ============================ Skills ============================

#[derive(Default, Clone)]
pub struct StubListSkills;

#[async_trait]
impl ListSkillsUseCase for StubListSkills {
    async fn execute(&self, _profile_id: Option<i32>) -> Result<Vec<SkillView>, ListSkillsError> {
        Ok(Vec::new())
    }
}

#[derive(Default, Clone)]
pub struct StubGetSkill;

#[async_trait]
impl GetSkillUseCase for StubGetSkill {
    async fn execute(&self, _skill_id: i32) -> Result<SkillView, GetSkillError> {
        Err(GetSkillError::NotFound)
    }
}

#[derive(Default, Clone)]
pub struct StubCreateSkill;

#[async_trait]
impl CreateSkillUseCase for StubCreateSkill {
    async fn execute(&self, _caller: UserId, _skill: NewSkill) -> Result<SkillView, CreateSkillError> {
        Err(CreateSkillError::ProfileRequired)
    }
}

#[derive(Default, Clone)]
pub struct StubUpdateSkill;

#[async_trait]
impl UpdateSkillUseCase for StubUpdateSkill {
    async fn execute(
        &self,
        _caller: UserId,
        _skill_id: i32,
        _patch: SkillPatch,
    ) -> Result<SkillView, UpdateSkillError> {
        Err(UpdateSkillError::NotFound)
    }
}

#[derive(Clone)]
pub struct StubDeleteSkill(Result<(), DeleteSkillError>);

impl StubDeleteSkill {
    pub fn ok() -> Self {
        Self(Ok(()))
    }

    pub fn err(error: DeleteSkillError) -> Self {
        Self(Err(error))
    }
}

impl Default for StubDeleteSkill {
    fn default() -> Self {
        Self::err(DeleteSkillError::NotFound)
    }
}

#[async_trait]
impl DeleteSkillUseCase for StubDeleteSkill {
    async fn execute(&self, _caller: UserId, _skill_id: i32) -> Result<(), DeleteSkillError> {
        self.0.clone()
    }
}

#[derive(Clone)]
pub struct StubEndorseSkill(pub Result<EndorseOutcome, EndorseSkillError>);

impl Default for StubEndorseSkill {
    fn default() -> Self {
        Self(Err(EndorseSkillError::NotFound))
    }
}

#[async_trait]
impl EndorseSkillUseCase for StubEndorseSkill {
    async fn execute(
        &self,
        _endorser: UserId,
        _skill_id: i32,
    ) -> Result<EndorseOutcome, EndorseSkillError> {
        self.0.clone()
    }
}

#[derive(Default, Clone)]
pub struct StubRemoveEndorsement;

#[async_trait]
impl RemoveEndorsementUseCase for StubRemoveEndorsement {
    async fn execute(&self, _endorser: UserId, _skill_id: i32) -> Result<(), RemoveEndorsementError> {
        Err(RemoveEndorsementError::EndorsementNotFound)
    }
}

// ============================ Talents ============================

/// Returns fixed talents and remembers the last `mahasiswa` filter.
#[derive(Default, Clone)]
pub struct StubListTalents {
    talents: Vec<TalentRecord>,
    last_filter: Arc<Mutex<Option<Option<i32>>>>,
}

impl StubListTalents {
    pub fn returning(talents: Vec<TalentRecord>) -> Self {
        Self {
            talents,
            ..Default::default()
        }
    }

    pub fn last_filter(&self) -> Option<Option<i32>> {
        *self.last_filter.lock().unwrap()
    }
}

#[async_trait]
impl ListTalentsUseCase for StubListTalents {
    async fn execute(&self, profile_id: Option<i32>) -> Result<Vec<TalentRecord>, ListTalentsError> {
        *self.last_filter.lock().unwrap() = Some(profile_id);
        Ok(self.talents.clone())
    }
}

#[derive(Default, Clone)]
pub struct StubGetTalent;

#[async_trait]
impl GetTalentUseCase for StubGetTalent {
    async fn execute(&self, _talent_id: i32) -> Result<TalentRecord, GetTalentError> {
        Err(GetTalentError::NotFound)
    }
}

#[derive(Default, Clone)]
pub struct StubCreateTalent;

#[async_trait]
impl CreateTalentUseCase for StubCreateTalent {
    async fn execute(
        &self,
        _caller: UserId,
        _talent: NewTalent,
    ) -> Result<TalentRecord, CreateTalentError> {
        Err(CreateTalentError::ProfileRequired)
    }
}

#[derive(Default, Clone)]
pub struct StubUpdateTalent;

#[async_trait]
impl UpdateTalentUseCase for StubUpdateTalent {
    async fn execute(
        &self,
        _caller: UserId,
        _talent_id: i32,
        _patch: TalentPatch,
    ) -> Result<TalentRecord, UpdateTalentError> {
        Err(UpdateTalentError::NotFound)
    }
}

#[derive(Clone)]
pub struct StubDeleteTalent(pub Result<(), DeleteTalentError>);

impl Default for StubDeleteTalent {
    fn default() -> Self {
        Self(Err(DeleteTalentError::NotFound))
    }
}

#[async_trait]
impl DeleteTalentUseCase for StubDeleteTalent {
    async fn execute(&self, _caller: UserId, _talent_id: i32) -> Result<(), DeleteTalentError> {
        self.0.clone()
    }
}

// ============================ Profiles ============================

#[derive(Default, Clone)]
pub struct StubUpsertProfile;

#[async_trait]
impl UpsertProfileUseCase for StubUpsertProfile {
    async fn execute(
        &self,
        _caller: UserId,
        _patch: ProfilePatch,
        _lists: ProfileLists,
    ) -> Result<UpsertOutcome, UpsertProfileError> {
        Err(UpsertProfileError::RepositoryError(not_stubbed()))
    }
}

#[derive(Default, Clone)]
pub struct StubUpdateProfile;

#[async_trait]
impl UpdateProfileUseCase for StubUpdateProfile {
    async fn execute(
        &self,
        _caller: UserId,
        _profile_id: i32,
        _patch: ProfilePatch,
        _lists: ProfileLists,
    ) -> Result<ProfileDetail, UpdateProfileError> {
        Err(UpdateProfileError::NotFound)
    }
}

#[derive(Clone)]
pub struct StubDeleteProfile(pub Result<(), DeleteProfileError>);

impl Default for StubDeleteProfile {
    fn default() -> Self {
        Self(Err(DeleteProfileError::NotFound))
    }
}

#[async_trait]
impl DeleteProfileUseCase for StubDeleteProfile {
    async fn execute(&self, _caller: UserId, _profile_id: i32) -> Result<(), DeleteProfileError> {
        self.0.clone()
    }
}

#[derive(Default, Clone)]
pub struct StubGetProfile;

#[async_trait]
impl GetProfileUseCase for StubGetProfile {
    async fn execute(&self, _profile_id: i32) -> Result<ProfileDetail, GetProfileError> {
        Err(GetProfileError::NotFound)
    }
}

#[derive(Default, Clone)]
pub struct StubListProfiles;

#[async_trait]
impl ListProfilesUseCase for StubListProfiles {
    async fn execute(
        &self,
        _filter: ProfileListFilter,
        page: PageRequest,
    ) -> Result<PageResult<ProfileCard>, ListProfilesError> {
        Ok(PageResult {
            items: Vec::new(),
            page: page.page,
            per_page: page.per_page,
            total: 0,
        })
    }
}

#[derive(Default, Clone)]
pub struct StubFeaturedProfiles;

#[async_trait]
impl FeaturedProfilesUseCase for StubFeaturedProfiles {
    async fn latest(&self) -> Result<Vec<ProfileCard>, FeaturedProfilesError> {
        Ok(Vec::new())
    }

    async fn most_viewed(&self) -> Result<Vec<ProfileCard>, FeaturedProfilesError> {
        Ok(Vec::new())
    }
}

#[derive(Default, Clone)]
pub struct StubMyProfile;

#[async_trait]
impl MyProfileUseCase for StubMyProfile {
    async fn execute(&self, _caller: UserId) -> Result<MyProfile, MyProfileError> {
        Err(MyProfileError::AccountNotFound)
    }
}

#[derive(Default, Clone)]
pub struct StubProfileCompletion;

#[async_trait]
impl ProfileCompletionUseCase for StubProfileCompletion {
    async fn execute(&self, _caller: UserId) -> Result<CompletionReport, ProfileCompletionError> {
        Err(ProfileCompletionError::NotFound)
    }
}

#[derive(Default, Clone)]
pub struct StubTrackView;

#[async_trait]
impl TrackViewUseCase for StubTrackView {
    async fn execute(
        &self,
        _profile_id: i32,
        _context: ViewContext,
    ) -> Result<ViewOutcome, TrackViewError> {
        Err(TrackViewError::NotFound)
    }
}

#[derive(Default, Clone)]
pub struct StubRecommendProfiles;

#[async_trait]
impl RecommendProfilesUseCase for StubRecommendProfiles {
    async fn execute(&self, _profile_id: i32) -> Result<Vec<ProfileDetail>, RecommendProfilesError> {
        Err(RecommendProfilesError::NotFound)
    }
}

#[derive(Default, Clone)]
pub struct StubToggleStatus;

#[async_trait]
impl ToggleStatusUseCase for StubToggleStatus {
    async fn execute(&self, _profile_id: i32) -> Result<ToggleOutcome, ToggleStatusError> {
        Err(ToggleStatusError::NotFound)
    }
}

// ============================ Documents ============================

#[derive(Default, Clone)]
pub struct StubDownloadCv;

#[async_trait]
impl DownloadCvUseCase for StubDownloadCv {
    async fn execute(&self, _profile_id: i32) -> Result<CvFile, DownloadCvError> {
        Err(DownloadCvError::NotFound)
    }
}

#[derive(Default, Clone)]
pub struct StubProfileQr;

#[async_trait]
impl ProfileQrUseCase for StubProfileQr {
    async fn execute(&self, _profile_id: i32, _base_url: &str) -> Result<QrImage, ProfileQrError> {
        Err(ProfileQrError::NotFound)
    }
}

// ============================ Admin ============================

#[derive(Default, Clone)]
pub struct StubAdminCheck;

#[async_trait]
impl AdminCheckUseCase for StubAdminCheck {
    async fn execute(&self, _user_id: UserId) -> Result<AdminCheck, AdminCheckError> {
        Err(AdminCheckError::UserNotFound)
    }
}

#[derive(Default, Clone)]
pub struct StubSearchProfiles;

#[async_trait]
impl SearchProfilesUseCase for StubSearchProfiles {
    async fn execute(
        &self,
        _filter: AdminProfileFilter,
    ) -> Result<AdminProfileList, SearchProfilesError> {
        Ok(AdminProfileList::from(Vec::new()))
    }
}

#[derive(Default, Clone)]
pub struct StubProfileStatistics;

#[async_trait]
impl ProfileStatisticsUseCase for StubProfileStatistics {
    async fn execute(&self) -> Result<ProfileStatistics, ProfileStatisticsError> {
        Ok(ProfileStatistics::default())
    }
}
