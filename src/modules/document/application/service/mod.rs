mod download_cv_service;
mod profile_qr_service;

pub use download_cv_service::DownloadCvService;
pub use profile_qr_service::ProfileQrService;
