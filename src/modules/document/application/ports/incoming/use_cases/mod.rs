mod download_cv;
mod profile_qr;

pub use download_cv::{CvFile, DownloadCvError, DownloadCvUseCase};
pub use profile_qr::{ProfileQrError, ProfileQrUseCase, QrImage};
