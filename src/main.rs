pub mod modules;
pub use modules::admin;
pub use modules::auth;
pub use modules::document;
pub use modules::profile;
pub use modules::skill;
pub use modules::talent;
pub mod api;
pub mod config;
pub mod health;
pub mod shared;

use crate::admin::adapter::outgoing::AdminQueryPostgres;
use crate::admin::application::admin_use_cases::AdminUseCases;
use crate::admin::application::service::{
    AdminCheckService, ProfileStatisticsService, SearchProfilesService,
};
use crate::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
use crate::auth::adapter::outgoing::security::argon2_hasher::Argon2Hasher;
use crate::auth::adapter::outgoing::user_query_postgres::UserQueryPostgres;
use crate::auth::adapter::outgoing::user_repository_postgres::UserRepositoryPostgres;
use crate::auth::application::auth_use_cases::AuthUseCases;
use crate::auth::application::ports::outgoing::{PasswordHasher, TokenProvider};
use crate::auth::application::use_cases::{
    ensure_admin::{EnsureAdminService, EnsureAdminUseCase},
    fetch_account::FetchAccountService,
    login_user::LoginUserUseCase,
    refresh_token::RefreshTokenUseCase,
    register_user::RegisterUserUseCase,
};
use crate::config::{load_env_files, AppConfig};
use crate::document::adapter::outgoing::{PrintPdfCvRenderer, QrCodePngRenderer};
use crate::document::application::document_use_cases::DocumentUseCases;
use crate::document::application::service::{DownloadCvService, ProfileQrService};
use crate::profile::adapter::outgoing::{ProfileQueryPostgres, ProfileRepositoryPostgres};
use crate::profile::application::profile_use_cases::ProfileUseCases;
use crate::profile::application::service::{
    DeleteProfileService, FeaturedProfilesService, GetProfileService, ListProfilesService,
    MyProfileService, ProfileCompletionService, RecommendProfilesService, ToggleStatusService,
    TrackViewService, UpdateProfileService, UpsertProfileService,
};
use crate::shared::api::{custom_json_config, custom_path_config, custom_query_config};
use crate::skill::adapter::outgoing::{
    EndorsementRepositoryPostgres, SkillQueryPostgres, SkillRepositoryPostgres,
};
use crate::skill::application::service::{
    CreateSkillService, DeleteSkillService, EndorseSkillService, GetSkillService,
    ListSkillsService, RemoveEndorsementService, UpdateSkillService,
};
use crate::skill::application::skill_use_cases::SkillUseCases;
use crate::talent::adapter::outgoing::{TalentQueryPostgres, TalentRepositoryPostgres};
use crate::talent::application::service::{
    CreateTalentService, DeleteTalentService, GetTalentService, ListTalentsService,
    UpdateTalentService,
};
use crate::talent::application::talent_use_cases::TalentUseCases;

use actix_web::{middleware::Logger, web, App, HttpServer};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::io;
use std::sync::Arc;
use std::time::Duration;

use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub auth: AuthUseCases,
    pub skill: SkillUseCases,
    pub talent: TalentUseCases,
    pub profile: ProfileUseCases,
    pub document: DocumentUseCases,
    pub admin: AdminUseCases,
    /// Frontend origin embedded in QR codes, without trailing slash.
    pub public_base_url: String,
}

fn startup_error(context: &str, err: impl std::fmt::Display) -> io::Error {
    io::Error::other(format!("{context}: {err}"))
}

#[cfg(not(tarpaulin_include))]
fn build_state(
    db: &Arc<DatabaseConnection>,
    jwt_service: &JwtTokenService,
    password_hasher: Arc<dyn PasswordHasher>,
    public_base_url: String,
) -> AppState {
    let token_provider: Arc<dyn TokenProvider> = Arc::new(jwt_service.clone());

    let user_query = UserQueryPostgres::new(Arc::clone(db));
    let user_repo = UserRepositoryPostgres::new(Arc::clone(db));

    let auth = AuthUseCases {
        register: Arc::new(RegisterUserUseCase::new(
            user_query.clone(),
            user_repo,
            Arc::clone(&password_hasher),
            Arc::clone(&token_provider),
        )),
        login: Arc::new(LoginUserUseCase::new(
            user_query.clone(),
            password_hasher,
            Arc::clone(&token_provider),
        )),
        refresh: Arc::new(RefreshTokenUseCase::new(token_provider)),
        fetch_account: Arc::new(FetchAccountService::new(user_query.clone())),
    };

    let skill_query = SkillQueryPostgres::new(Arc::clone(db));
    let skill_repo = SkillRepositoryPostgres::new(Arc::clone(db));
    let endorsements = EndorsementRepositoryPostgres::new(Arc::clone(db));

    let skill = SkillUseCases {
        list: Arc::new(ListSkillsService::new(skill_query.clone())),
        get: Arc::new(GetSkillService::new(skill_query.clone())),
        create: Arc::new(CreateSkillService::new(
            skill_query.clone(),
            skill_repo.clone(),
        )),
        update: Arc::new(UpdateSkillService::new(
            skill_query.clone(),
            skill_repo.clone(),
        )),
        delete: Arc::new(DeleteSkillService::new(skill_query.clone(), skill_repo)),
        endorse: Arc::new(EndorseSkillService::new(
            skill_query.clone(),
            endorsements.clone(),
        )),
        remove_endorsement: Arc::new(RemoveEndorsementService::new(skill_query, endorsements)),
    };

    let talent_query = TalentQueryPostgres::new(Arc::clone(db));
    let talent_repo = TalentRepositoryPostgres::new(Arc::clone(db));

    let talent = TalentUseCases {
        list: Arc::new(ListTalentsService::new(talent_query.clone())),
        get: Arc::new(GetTalentService::new(talent_query.clone())),
        create: Arc::new(CreateTalentService::new(
            talent_query.clone(),
            talent_repo.clone(),
        )),
        update: Arc::new(UpdateTalentService::new(
            talent_query.clone(),
            talent_repo.clone(),
        )),
        delete: Arc::new(DeleteTalentService::new(talent_query, talent_repo)),
    };

    let profile_query = ProfileQueryPostgres::new(Arc::clone(db));
    let profile_repo = ProfileRepositoryPostgres::new(Arc::clone(db));

    let profile = ProfileUseCases {
        upsert: Arc::new(UpsertProfileService::new(
            profile_query.clone(),
            profile_repo.clone(),
        )),
        update: Arc::new(UpdateProfileService::new(
            profile_query.clone(),
            profile_repo.clone(),
        )),
        delete: Arc::new(DeleteProfileService::new(
            profile_query.clone(),
            profile_repo.clone(),
        )),
        get: Arc::new(GetProfileService::new(profile_query.clone())),
        list: Arc::new(ListProfilesService::new(profile_query.clone())),
        featured: Arc::new(FeaturedProfilesService::new(profile_query.clone())),
        my_profile: Arc::new(MyProfileService::new(
            profile_query.clone(),
            user_query.clone(),
        )),
        completion: Arc::new(ProfileCompletionService::new(profile_query.clone())),
        track_view: Arc::new(TrackViewService::new(profile_repo.clone())),
        recommend: Arc::new(RecommendProfilesService::new(profile_query.clone())),
        toggle_status: Arc::new(ToggleStatusService::new(profile_repo)),
    };

    let document = DocumentUseCases {
        download_cv: Arc::new(DownloadCvService::new(
            profile_query.clone(),
            PrintPdfCvRenderer,
        )),
        qr_code: Arc::new(ProfileQrService::new(profile_query, QrCodePngRenderer)),
    };

    let admin_query = AdminQueryPostgres::new(Arc::clone(db));

    let admin = AdminUseCases {
        check: Arc::new(AdminCheckService::new(user_query)),
        search_profiles: Arc::new(SearchProfilesService::new(admin_query.clone())),
        statistics: Arc::new(ProfileStatisticsService::new(admin_query)),
    };

    AppState {
        auth,
        skill,
        talent,
        profile,
        document,
        admin,
        public_base_url,
    }
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> io::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    load_env_files();

    let config = AppConfig::from_env().map_err(|e| startup_error("Invalid configuration", e))?;
    let jwt_config = JwtConfig::from_env().map_err(|e| startup_error("Invalid JWT settings", e))?;
    let argon2_hasher =
        Argon2Hasher::from_env().map_err(|e| startup_error("Invalid Argon2 settings", e))?;

    let server_url = config.server_url();

    let mut opt = ConnectOptions::new(config.database_url.clone());
    opt.max_connections(20)
        .min_connections(2)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);

    let conn = Database::connect(opt)
        .await
        .map_err(|e| startup_error("Failed to connect to database", e))?;

    if config.run_migrations {
        info!("Applying pending migrations");
        Migrator::up(&conn, None)
            .await
            .map_err(|e| startup_error("Migration failed", e))?;
    }

    let db_arc = Arc::new(conn);
    let password_hasher: Arc<dyn PasswordHasher> = Arc::new(argon2_hasher);

    if let Some(seed) = config.admin_seed.clone() {
        let ensure_admin = EnsureAdminService::new(
            UserQueryPostgres::new(Arc::clone(&db_arc)),
            UserRepositoryPostgres::new(Arc::clone(&db_arc)),
            Arc::clone(&password_hasher),
        );
        let username = seed.username.clone();
        match ensure_admin.execute(seed).await {
            Ok(outcome) => info!(username = %username, ?outcome, "Admin account checked"),
            Err(e) => warn!(username = %username, error = %e, "Admin bootstrap skipped"),
        }
    }

    let jwt_service = JwtTokenService::new(jwt_config);
    let state = build_state(
        &db_arc,
        &jwt_service,
        password_hasher,
        config.public_base_url.clone(),
    );

    let token_provider_arc: Arc<dyn TokenProvider + Send + Sync> = Arc::new(jwt_service);

    info!(%server_url, "Server listening");

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&token_provider_arc)))
            .app_data(web::Data::new(Arc::clone(&db_arc)))
            .app_data(custom_json_config())
            .app_data(custom_query_config())
            .app_data(custom_path_config())
            .configure(init_routes)
    })
    .bind(server_url)?
    .run()
    .await
}

#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    use crate::admin::adapter::incoming::web::routes as admin_routes;
    use crate::auth::adapter::incoming::web::routes as auth_routes;
    use crate::document::adapter::incoming::web::routes as document_routes;
    use crate::profile::adapter::incoming::web::routes as profile_routes;
    use crate::skill::adapter::incoming::web::routes as skill_routes;
    use crate::talent::adapter::incoming::web::routes as talent_routes;

    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    cfg.service(crate::api::openapi::openapi_json);
    // Accounts
    cfg.service(auth_routes::register_user_handler);
    cfg.service(auth_routes::login_user_handler);
    cfg.service(auth_routes::refresh_token_handler);
    cfg.service(auth_routes::fetch_account_handler);
    // Admin
    cfg.service(admin_routes::admin_check_handler);
    cfg.service(admin_routes::admin_profiles_handler);
    cfg.service(admin_routes::admin_toggle_handler);
    cfg.service(admin_routes::admin_statistics_handler);
    // Profiles (static segments before `{id}`)
    cfg.service(profile_routes::my_profile_handler);
    cfg.service(profile_routes::profile_completion_handler);
    cfg.service(profile_routes::latest_profiles_handler);
    cfg.service(profile_routes::most_viewed_profiles_handler);
    cfg.service(profile_routes::list_profiles_handler);
    cfg.service(profile_routes::upsert_profile_handler);
    cfg.service(profile_routes::get_profile_handler);
    cfg.service(profile_routes::put_profile_handler);
    cfg.service(profile_routes::patch_profile_handler);
    cfg.service(profile_routes::delete_profile_handler);
    cfg.service(profile_routes::track_view_handler);
    cfg.service(profile_routes::recommendations_handler);
    cfg.service(profile_routes::toggle_status_handler);
    // Documents
    cfg.service(document_routes::download_cv_handler);
    cfg.service(document_routes::qr_code_handler);
    // Skills
    cfg.service(skill_routes::list_skills_handler);
    cfg.service(skill_routes::create_skill_handler);
    cfg.service(skill_routes::get_skill_handler);
    cfg.service(skill_routes::put_skill_handler);
    cfg.service(skill_routes::patch_skill_handler);
    cfg.service(skill_routes::delete_skill_handler);
    cfg.service(skill_routes::endorse_skill_handler);
    cfg.service(skill_routes::remove_endorsement_handler);
    // Talents
    cfg.service(talent_routes::list_talents_handler);
    cfg.service(talent_routes::create_talent_handler);
    cfg.service(talent_routes::get_talent_handler);
    cfg.service(talent_routes::put_talent_handler);
    cfg.service(talent_routes::patch_talent_handler);
    cfg.service(talent_routes::delete_talent_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e}");
    }
}
