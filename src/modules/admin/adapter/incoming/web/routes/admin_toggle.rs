use actix_web::{patch, web, Responder};

use crate::auth::adapter::incoming::web::extractors::auth::AdminUser;
use crate::modules::profile::adapter::incoming::web::routes::toggle_profile_status;
use crate::AppState;

#[patch("/api/accounts/admin/mahasiswa/{id:\\d+}/toggle/")]
pub async fn admin_toggle_handler(
    admin: AdminUser,
    path: web::Path<i32>,
    data: web::Data<AppState>,
) -> impl Responder {
    toggle_profile_status(&admin, path.into_inner(), &data).await
}
