use actix_web::{get, http::header, web, HttpResponse, Responder};
use serde::Deserialize;
use tracing::error;

use crate::modules::document::application::ports::incoming::use_cases::ProfileQrError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct QrQuery {
    #[serde(default)]
    pub download: Option<String>,
}

impl QrQuery {
    fn wants_download(&self) -> bool {
        self.download
            .as_deref()
            .is_some_and(|v| v.eq_ignore_ascii_case("true"))
    }
}

#[get("/api/mahasiswa/{id:\\d+}/qr-code/")]
pub async fn qr_code_handler(
    path: web::Path<i32>,
    query: web::Query<QrQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let profile_id = path.into_inner();

    match data
        .document
        .qr_code
        .execute(profile_id, &data.public_base_url)
        .await
    {
        Ok(image) => {
            let mut response = HttpResponse::Ok();
            response.content_type("image/png");
            if query.wants_download() {
                response.insert_header((
                    header::CONTENT_DISPOSITION,
                    format!("attachment; filename=\"{}\"", image.filename),
                ));
            }
            response.body(image.bytes)
        }
        Err(ProfileQrError::NotFound) => {
            ApiResponse::not_found("PROFILE_NOT_FOUND", "Mahasiswa not found")
        }
        Err(ProfileQrError::QueryError(e)) => {
            error!(profile_id, error = %e, "Failed to load profile for QR code");
            ApiResponse::internal_error()
        }
        Err(ProfileQrError::RenderFailed(e)) => {
            error!(profile_id, error = %e, "QR rendering failed");
            ApiResponse::internal_error_with(&e)
        }
    }
}
