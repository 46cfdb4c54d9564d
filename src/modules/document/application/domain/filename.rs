/// Makes a display name safe inside a quoted `Content-Disposition` filename.
pub fn safe_filename_part(name: &str) -> String {
    let cleaned: String = name
        .trim()
        .chars()
        .map(|c| match c {
            '"' | '\\' | '/' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect();

    if cleaned.is_empty() {
        "mahasiswa".to_string()
    } else {
        cleaned
    }
}

pub fn cv_filename(nama: &str) -> String {
    format!("{}_CV.pdf", safe_filename_part(nama))
}

pub fn qr_filename(nama: &str, profile_id: i32) -> String {
    format!("qrcode_{}_{}.png", safe_filename_part(nama), profile_id)
}
