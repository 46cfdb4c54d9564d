use std::sync::Arc;

use actix_web::web;

use crate::auth::application::auth_use_cases::AuthUseCases;
use crate::auth::application::use_cases::fetch_account::FetchAccountUseCase;
use crate::auth::application::use_cases::login_user::ILoginUserUseCase;
use crate::auth::application::use_cases::refresh_token::IRefreshTokenUseCase;
use crate::auth::application::use_cases::register_user::IRegisterUserUseCase;
use crate::modules::admin::application::admin_use_cases::AdminUseCases;
use crate::modules::admin::application::ports::incoming::use_cases::{
    AdminCheckUseCase, ProfileStatisticsUseCase, SearchProfilesUseCase,
};
use crate::modules::document::application::document_use_cases::DocumentUseCases;
use crate::modules::document::application::ports::incoming::use_cases::{
    DownloadCvUseCase, ProfileQrUseCase,
};
use crate::modules::profile::application::ports::incoming::use_cases::{
    DeleteProfileUseCase, FeaturedProfilesUseCase, GetProfileUseCase, ListProfilesUseCase,
    MyProfileUseCase, ProfileCompletionUseCase, RecommendProfilesUseCase, ToggleStatusUseCase,
    TrackViewUseCase, UpdateProfileUseCase, UpsertProfileUseCase,
};
use crate::modules::profile::application::profile_use_cases::ProfileUseCases;
use crate::modules::skill::application::ports::incoming::use_cases::{
    CreateSkillUseCase, DeleteSkillUseCase, EndorseSkillUseCase, ListSkillsUseCase,
    UpdateSkillUseCase,
};
use crate::modules::skill::application::skill_use_cases::SkillUseCases;
use crate::modules::talent::application::ports::incoming::use_cases::{
    CreateTalentUseCase, DeleteTalentUseCase, ListTalentsUseCase, UpdateTalentUseCase,
};
use crate::modules::talent::application::talent_use_cases::TalentUseCases;
use crate::tests::support::stubs::*;
use crate::AppState;

/// AppState where every use case is a stub; tests swap in the ones they exercise.
pub struct TestAppStateBuilder {
    auth: AuthUseCases,
    skill: SkillUseCases,
    talent: TalentUseCases,
    profile: ProfileUseCases,
    document: DocumentUseCases,
    admin: AdminUseCases,
    public_base_url: String,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            auth: AuthUseCases {
                register: Arc::new(StubRegisterUser),
                login: Arc::new(StubLoginUser),
                refresh: Arc::new(StubRefreshToken),
                fetch_account: Arc::new(StubFetchAccount),
            },
            skill: SkillUseCases {
                list: Arc::new(StubListSkills),
                get: Arc::new(StubGetSkill),
                create: Arc::new(StubCreateSkill),
                update: Arc::new(StubUpdateSkill),
                delete: Arc::new(StubDeleteSkill::default()),
                endorse: Arc::new(StubEndorseSkill::default()),
                remove_endorsement: Arc::new(StubRemoveEndorsement),
            },
            talent: TalentUseCases {
                list: Arc::new(StubListTalents::default()),
                get: Arc::new(StubGetTalent),
                create: Arc::new(StubCreateTalent),
                update: Arc::new(StubUpdateTalent),
                delete: Arc::new(StubDeleteTalent::default()),
            },
            profile: ProfileUseCases {
                upsert: Arc::new(StubUpsertProfile),
                update: Arc::new(StubUpdateProfile),
                delete: Arc::new(StubDeleteProfile::default()),
                get: Arc::new(StubGetProfile),
                list: Arc::new(StubListProfiles),
                featured: Arc::new(StubFeaturedProfiles),
                my_profile: Arc::new(StubMyProfile),
                completion: Arc::new(StubProfileCompletion),
                track_view: Arc::new(StubTrackView),
                recommend: Arc::new(StubRecommendProfiles),
                toggle_status: Arc::new(StubToggleStatus),
            },
            document: DocumentUseCases {
                download_cv: Arc::new(StubDownloadCv),
                qr_code: Arc::new(StubProfileQr),
            },
            admin: AdminUseCases {
                check: Arc::new(StubAdminCheck),
                search_profiles: Arc::new(StubSearchProfiles),
                statistics: Arc::new(StubProfileStatistics),
            },
            public_base_url: "http://localhost:3000".to_string(),
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_register_user(mut self, uc: impl IRegisterUserUseCase + 'static) -> Self {
        self.auth.register = Arc::new(uc);
        self
    }

    pub fn with_login_user(mut self, uc: impl ILoginUserUseCase + 'static) -> Self {
        self.auth.login = Arc::new(uc);
        self
    }

    pub fn with_refresh_token(mut self, uc: impl IRefreshTokenUseCase + 'static) -> Self {
        self.auth.refresh = Arc::new(uc);
        self
    }

    pub fn with_fetch_account(mut self, uc: impl FetchAccountUseCase + 'static) -> Self {
        self.auth.fetch_account = Arc::new(uc);
        self
    }

    pub fn with_list_skills(mut self, uc: impl ListSkillsUseCase + 'static) -> Self {
        self.skill.list = Arc::new(uc);
        self
    }

    pub fn with_create_skill(mut self, uc: impl CreateSkillUseCase + 'static) -> Self {
        self.skill.create = Arc::new(uc);
        self
    }

    pub fn with_update_skill(mut self, uc: impl UpdateSkillUseCase + 'static) -> Self {
        self.skill.update = Arc::new(uc);
        self
    }

    pub fn with_delete_skill(mut self, uc: impl DeleteSkillUseCase + 'static) -> Self {
        self.skill.delete = Arc::new(uc);
        self
    }

    pub fn with_endorse_skill(mut self, uc: impl EndorseSkillUseCase + 'static) -> Self {
        self.skill.endorse = Arc::new(uc);
        self
    }

    pub fn with_list_talents(mut self, uc: impl ListTalentsUseCase + 'static) -> Self {
        self.talent.list = Arc::new(uc);
        self
    }

    pub fn with_create_talent(mut self, uc: impl CreateTalentUseCase + 'static) -> Self {
        self.talent.create = Arc::new(uc);
        self
    }

    pub fn with_update_talent(mut self, uc: impl UpdateTalentUseCase + 'static) -> Self {
        self.talent.update = Arc::new(uc);
        self
    }

    pub fn with_delete_talent(mut self, uc: impl DeleteTalentUseCase + 'static) -> Self {
        self.talent.delete = Arc::new(uc);
        self
    }

    pub fn with_upsert_profile(mut self, uc: impl UpsertProfileUseCase + 'static) -> Self {
        self.profile.upsert = Arc::new(uc);
        self
    }

    pub fn with_update_profile(mut self, uc: impl UpdateProfileUseCase + 'static) -> Self {
        self.profile.update = Arc::new(uc);
        self
    }

    pub fn with_delete_profile(mut self, uc: impl DeleteProfileUseCase + 'static) -> Self {
        self.profile.delete = Arc::new(uc);
        self
    }

    pub fn with_get_profile(mut self, uc: impl GetProfileUseCase + 'static) -> Self {
        self.profile.get = Arc::new(uc);
        self
    }

    pub fn with_list_profiles(mut self, uc: impl ListProfilesUseCase + 'static) -> Self {
        self.profile.list = Arc::new(uc);
        self
    }

    pub fn with_featured_profiles(mut self, uc: impl FeaturedProfilesUseCase + 'static) -> Self {
        self.profile.featured = Arc::new(uc);
        self
    }

    pub fn with_my_profile(mut self, uc: impl MyProfileUseCase + 'static) -> Self {
        self.profile.my_profile = Arc::new(uc);
        self
    }

    pub fn with_profile_completion(mut self, uc: impl ProfileCompletionUseCase + 'static) -> Self {
        self.profile.completion = Arc::new(uc);
        self
    }

    pub fn with_track_view(mut self, uc: impl TrackViewUseCase + 'static) -> Self {
        self.profile.track_view = Arc::new(uc);
        self
    }

    pub fn with_recommend_profiles(mut self, uc: impl RecommendProfilesUseCase + 'static) -> Self {
        self.profile.recommend = Arc::new(uc);
        self
    }

    pub fn with_toggle_status(mut self, uc: impl ToggleStatusUseCase + 'static) -> Self {
        self.profile.toggle_status = Arc::new(uc);
        self
    }

    pub fn with_download_cv(mut self, uc: impl DownloadCvUseCase + 'static) -> Self {
        self.document.download_cv = Arc::new(uc);
        self
    }

    pub fn with_qr_code(mut self, uc: impl ProfileQrUseCase + 'static) -> Self {
        self.document.qr_code = Arc::new(uc);
        self
    }

    pub fn with_admin_check(mut self, uc: impl AdminCheckUseCase + 'static) -> Self {
        self.admin.check = Arc::new(uc);
        self
    }

    pub fn with_search_profiles(mut self, uc: impl SearchProfilesUseCase + 'static) -> Self {
        self.admin.search_profiles = Arc::new(uc);
        self
    }

    pub fn with_statistics(mut self, uc: impl ProfileStatisticsUseCase + 'static) -> Self {
        self.admin.statistics = Arc::new(uc);
        self
    }

    pub fn with_public_base_url(mut self, url: &str) -> Self {
        self.public_base_url = url.to_string();
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            auth: self.auth,
            skill: self.skill,
            talent: self.talent,
            profile: self.profile,
            document: self.document,
            admin: self.admin,
            public_base_url: self.public_base_url,
        })
    }
}
