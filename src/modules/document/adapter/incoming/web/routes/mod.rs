pub mod download_cv;
pub mod qr_code;

pub use download_cv::download_cv_handler;
pub use qr_code::qr_code_handler;
