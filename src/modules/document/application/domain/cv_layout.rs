use chrono::NaiveDate;

use crate::modules::profile::application::domain::entities::ProfileDetail;
use crate::modules::talent::application::domain::entities::TalentRecord;

pub const PAGE_WIDTH_MM: f32 = 210.0;
pub const PAGE_HEIGHT_MM: f32 = 297.0;

const MARGIN_X_MM: f32 = 25.4;
const MARGIN_TOP_MM: f32 = 25.4;
const MARGIN_BOTTOM_MM: f32 = 18.0;
const CONTENT_WIDTH_MM: f32 = PAGE_WIDTH_MM - 2.0 * MARGIN_X_MM;

const PT_TO_MM: f32 = 0.3528;
const LINE_SPACING: f32 = 1.4;
/// Mean Helvetica advance width as a fraction of the font size.
const AVG_GLYPH_EM: f32 = 0.5;

const TITLE_PT: f32 = 22.0;
const HEADING_PT: f32 = 13.0;
const BODY_PT: f32 = 10.0;
const SMALL_PT: f32 = 8.0;

const LABEL_WIDTH_MM: f32 = 30.0;
const LEVEL_COLUMN_MM: f32 = 110.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontStyle {
    Regular,
    Bold,
    Italic,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ink {
    Body,
    Heading,
    Muted,
}

impl Ink {
    pub fn rgb(self) -> (f32, f32, f32) {
        match self {
            Ink::Body => (0.0, 0.0, 0.0),
            Ink::Heading => (0.10, 0.14, 0.49),
            Ink::Muted => (0.40, 0.40, 0.40),
        }
    }
}

/// One positioned drawing instruction. Coordinates are millimetres from the
/// bottom-left corner of the page.
#[derive(Debug, Clone, PartialEq)]
pub enum Element {
    Text {
        text: String,
        x_mm: f32,
        y_mm: f32,
        size_pt: f32,
        style: FontStyle,
        ink: Ink,
    },
    Rule {
        x1_mm: f32,
        x2_mm: f32,
        y_mm: f32,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct CvLayout {
    pub pages: Vec<Vec<Element>>,
}

impl CvLayout {
    /// Every text run in drawing order, across pages.
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.pages.iter().flatten().filter_map(|el| match el {
            Element::Text { text, .. } => Some(text.as_str()),
            Element::Rule { .. } => None,
        })
    }
}

struct Composer {
    pages: Vec<Vec<Element>>,
    y: f32,
}

impl Composer {
    fn new() -> Self {
        Self {
            pages: vec![Vec::new()],
            y: PAGE_HEIGHT_MM - MARGIN_TOP_MM,
        }
    }

    fn ensure(&mut self, height: f32) {
        if self.y - height < MARGIN_BOTTOM_MM {
            self.pages.push(Vec::new());
            self.y = PAGE_HEIGHT_MM - MARGIN_TOP_MM;
        }
    }

    fn push(&mut self, element: Element) {
        if let Some(page) = self.pages.last_mut() {
            page.push(element);
        }
    }

    fn gap(&mut self, mm: f32) {
        self.y -= mm;
    }

    fn line(&mut self, text: String, x_mm: f32, size_pt: f32, style: FontStyle, ink: Ink) {
        let height = line_height(size_pt);
        self.ensure(height);
        self.y -= height;
        self.push(Element::Text {
            text,
            x_mm,
            y_mm: self.y,
            size_pt,
            style,
            ink,
        });
    }

    fn paragraph(&mut self, text: &str, size_pt: f32, style: FontStyle, ink: Ink) {
        for line in wrap(text, size_pt, CONTENT_WIDTH_MM) {
            self.line(line, MARGIN_X_MM, size_pt, style, ink);
        }
    }

    fn rule(&mut self) {
        self.ensure(3.0);
        self.y -= 1.5;
        self.push(Element::Rule {
            x1_mm: MARGIN_X_MM,
            x2_mm: PAGE_WIDTH_MM - MARGIN_X_MM,
            y_mm: self.y,
        });
        self.y -= 1.5;
    }

    fn heading(&mut self, text: &str) {
        // keep a heading together with at least one body line
        self.ensure(line_height(HEADING_PT) + line_height(BODY_PT) + 4.0);
        self.gap(4.0);
        self.line(text.to_string(), MARGIN_X_MM, HEADING_PT, FontStyle::Bold, Ink::Heading);
        self.rule();
    }

    /// Cells wrap inside their own column; the row moves to a new page whole.
    fn row(&mut self, cells: &[(&str, f32, f32, FontStyle)], size_pt: f32) {
        let wrapped: Vec<Vec<String>> = cells
            .iter()
            .map(|(text, _, width, _)| wrap(text, size_pt, *width))
            .collect();
        let lines = wrapped.iter().map(Vec::len).max().unwrap_or(0).max(1);
        let height = line_height(size_pt);
        self.ensure(height * lines as f32);

        let top = self.y;
        for (cell, (_, x_mm, _, style)) in wrapped.into_iter().zip(cells) {
            for (i, text) in cell.into_iter().enumerate() {
                self.push(Element::Text {
                    text,
                    x_mm: *x_mm,
                    y_mm: top - height * (i as f32 + 1.0),
                    size_pt,
                    style: *style,
                    ink: Ink::Body,
                });
            }
        }
        self.y = top - height * lines as f32;
    }

    fn finish(self) -> CvLayout {
        CvLayout { pages: self.pages }
    }
}

fn line_height(size_pt: f32) -> f32 {
    size_pt * PT_TO_MM * LINE_SPACING
}

/// Greedy word wrap using an average glyph width. Explicit newlines start a
/// new line and words longer than a line are split.
pub fn wrap(text: &str, size_pt: f32, width_mm: f32) -> Vec<String> {
    let max_chars = ((width_mm / (size_pt * PT_TO_MM * AVG_GLYPH_EM)) as usize).max(1);
    let mut lines = Vec::new();

    for raw in text.lines() {
        let mut current = String::new();
        for word in raw.split_whitespace() {
            let mut word: Vec<char> = word.chars().collect();
            while word.len() > max_chars {
                if !current.is_empty() {
                    lines.push(std::mem::take(&mut current));
                }
                let rest = word.split_off(max_chars);
                lines.push(word.into_iter().collect());
                word = rest;
            }

            let current_len = current.chars().count();
            if current_len > 0 && current_len + 1 + word.len() > max_chars {
                lines.push(std::mem::take(&mut current));
            }
            if !current.is_empty() {
                current.push(' ');
            }
            current.extend(word);
        }
        if !current.is_empty() {
            lines.push(current);
        }
    }

    lines
}

fn or_dash(value: Option<&str>) -> String {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => "-".to_string(),
    }
}

/// `January 2023 - March 2024`, or `January 2023 - Sekarang` while ongoing.
pub fn talent_period(talent: &TalentRecord) -> Option<String> {
    let start = talent.tanggal_mulai?;
    let end = match talent.tanggal_selesai {
        Some(end) => end.format("%B %Y").to_string(),
        None => "Sekarang".to_string(),
    };
    Some(format!("{} - {}", start.format("%B %Y"), end))
}

/// Newest first; undated entries go last.
fn talents_by_start_desc(talents: &[TalentRecord]) -> Vec<&TalentRecord> {
    let mut ordered: Vec<&TalentRecord> = talents.iter().collect();
    ordered.sort_by(|a, b| b.tanggal_mulai.cmp(&a.tanggal_mulai).then(b.id.cmp(&a.id)));
    ordered
}

pub fn layout_cv(detail: &ProfileDetail, generated_on: NaiveDate) -> CvLayout {
    let profile = &detail.profile;
    let mut page = Composer::new();

    for line in wrap(&profile.nama, TITLE_PT, CONTENT_WIDTH_MM) {
        page.line(line, MARGIN_X_MM, TITLE_PT, FontStyle::Bold, Ink::Heading);
    }
    page.gap(1.0);
    page.line(
        format!("NIM: {}", profile.nim),
        MARGIN_X_MM,
        BODY_PT + 1.0,
        FontStyle::Regular,
        Ink::Body,
    );
    let program = match profile.fakultas.as_deref().map(str::trim) {
        Some(fakultas) if !fakultas.is_empty() => format!("{} - {}", profile.prodi, fakultas),
        _ => profile.prodi.clone(),
    };
    page.paragraph(&program, BODY_PT + 1.0, FontStyle::Regular, Ink::Body);
    page.gap(2.0);
    page.rule();

    let contacts = [
        ("Email", or_dash(Some(profile.email.as_str()))),
        ("Telepon", or_dash(profile.telepon.as_deref())),
        ("LinkedIn", or_dash(profile.linkedin.as_deref())),
        ("GitHub", or_dash(profile.github.as_deref())),
    ];
    for (label, value) in &contacts {
        page.row(
            &[
                (format!("{label}:").as_str(), MARGIN_X_MM, LABEL_WIDTH_MM, FontStyle::Bold),
                (
                    value.as_str(),
                    MARGIN_X_MM + LABEL_WIDTH_MM,
                    CONTENT_WIDTH_MM - LABEL_WIDTH_MM,
                    FontStyle::Regular,
                ),
            ],
            BODY_PT,
        );
    }

    if let Some(bio) = profile.bio.as_deref().filter(|b| !b.trim().is_empty()) {
        page.heading("TENTANG SAYA");
        page.paragraph(bio, BODY_PT, FontStyle::Regular, Ink::Body);
    }

    if !detail.skills.is_empty() {
        page.heading("KEAHLIAN");
        let level_width = CONTENT_WIDTH_MM - LEVEL_COLUMN_MM;
        page.row(
            &[
                ("Skill", MARGIN_X_MM, LEVEL_COLUMN_MM - 5.0, FontStyle::Bold),
                ("Level", MARGIN_X_MM + LEVEL_COLUMN_MM, level_width, FontStyle::Bold),
            ],
            BODY_PT,
        );
        page.rule();
        for skill in &detail.skills {
            let level = or_dash(skill.level.as_deref());
            page.row(
                &[
                    (skill.nama.as_str(), MARGIN_X_MM, LEVEL_COLUMN_MM - 5.0, FontStyle::Regular),
                    (level.as_str(), MARGIN_X_MM + LEVEL_COLUMN_MM, level_width, FontStyle::Regular),
                ],
                BODY_PT,
            );
        }
    }

    if !detail.talents.is_empty() {
        page.heading("PORTFOLIO & PENGALAMAN");
        for talent in talents_by_start_desc(&detail.talents) {
            page.gap(2.0);
            page.paragraph(&talent.judul, BODY_PT + 2.0, FontStyle::Bold, Ink::Body);
            if let Some(kategori) = talent.kategori.as_deref().filter(|k| !k.trim().is_empty()) {
                page.paragraph(kategori, BODY_PT - 1.0, FontStyle::Italic, Ink::Muted);
            }
            if let Some(period) = talent_period(talent) {
                page.paragraph(&period, BODY_PT - 1.0, FontStyle::Regular, Ink::Muted);
            }
            page.paragraph(&talent.deskripsi, BODY_PT, FontStyle::Regular, Ink::Body);
            if let Some(link) = talent.link_portfolio.as_deref().filter(|l| !l.trim().is_empty()) {
                page.paragraph(&format!("Link: {link}"), BODY_PT - 1.0, FontStyle::Regular, Ink::Muted);
            }
        }
    }

    page.gap(6.0);
    page.rule();
    page.line(
        format!(
            "CV ini dibuat otomatis dari Talenta Mahasiswa UMS pada {}",
            generated_on.format("%d %B %Y")
        ),
        MARGIN_X_MM,
        SMALL_PT,
        FontStyle::Italic,
        Ink::Muted,
    );

    page.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::support::stubs::{sample_detail, sample_talent};
    use uuid::Uuid;

    fn generated_on() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, 2).unwrap()
    }

    fn all_text(layout: &CvLayout) -> Vec<String> {
        layout.texts().map(str::to_string).collect()
    }

    #[test]
    fn wrap_respects_width_and_keeps_words() {
        let text = "satu dua tiga empat lima enam tujuh delapan sembilan sepuluh";
        let lines = wrap(text, 10.0, 30.0);

        assert!(lines.len() > 1);
        assert_eq!(lines.join(" "), text);
        let max_chars = (30.0 / (10.0 * PT_TO_MM * AVG_GLYPH_EM)) as usize;
        assert!(lines.iter().all(|l| l.chars().count() <= max_chars));
    }

    #[test]
    fn wrap_splits_overlong_words_and_honours_newlines() {
        let lines = wrap(&"x".repeat(100), 10.0, 20.0);
        assert!(lines.len() > 1);
        assert_eq!(lines.concat().len(), 100);

        assert_eq!(wrap("a\nb", 10.0, 100.0), vec!["a", "b"]);
        assert!(wrap("   ", 10.0, 100.0).is_empty());
    }

    #[test]
    fn header_contact_and_footer_are_present() {
        let mut detail = sample_detail(1, Uuid::new_v4());
        detail.profile.nama = "Siti Aminah".into();
        detail.profile.fakultas = Some("FKI".into());
        detail.profile.telepon = None;

        let text = all_text(&layout_cv(&detail, generated_on()));

        assert_eq!(text[0], "Siti Aminah");
        assert!(text.contains(&format!("NIM: {}", detail.profile.nim)));
        assert!(text.contains(&format!("{} - FKI", detail.profile.prodi)));
        let telepon = text.iter().position(|t| t == "Telepon:").unwrap();
        assert_eq!(text[telepon + 1], "-");
        assert_eq!(
            text.last().unwrap(),
            "CV ini dibuat otomatis dari Talenta Mahasiswa UMS pada 02 May 2024"
        );
    }

    #[test]
    fn skills_table_shows_dash_for_missing_level() {
        let detail = sample_detail(1, Uuid::new_v4());
        let text = all_text(&layout_cv(&detail, generated_on()));

        assert!(text.contains(&"KEAHLIAN".to_string()));
        for skill in &detail.skills {
            let at = text.iter().position(|t| *t == skill.nama).unwrap();
            let expected = skill.level.clone().unwrap_or_else(|| "-".into());
            assert_eq!(text[at + 1], expected);
        }
    }

    #[test]
    fn talents_are_newest_first_with_period() {
        let mut detail = sample_detail(1, Uuid::new_v4());
        let mut older = sample_talent(10, 1);
        older.judul = "Proyek Lama".into();
        older.tanggal_mulai = NaiveDate::from_ymd_opt(2021, 1, 10);
        older.tanggal_selesai = NaiveDate::from_ymd_opt(2021, 6, 1);
        let mut newer = sample_talent(11, 1);
        newer.judul = "Proyek Baru".into();
        newer.tanggal_mulai = NaiveDate::from_ymd_opt(2023, 3, 1);
        newer.tanggal_selesai = None;
        detail.talents = vec![older, newer];

        let text = all_text(&layout_cv(&detail, generated_on()));

        let baru = text.iter().position(|t| t == "Proyek Baru").unwrap();
        let lama = text.iter().position(|t| t == "Proyek Lama").unwrap();
        assert!(baru < lama);
        assert!(text.contains(&"March 2023 - Sekarang".to_string()));
        assert!(text.contains(&"January 2021 - June 2021".to_string()));
    }

    #[test]
    fn long_content_overflows_onto_more_pages() {
        let mut detail = sample_detail(1, Uuid::new_v4());
        detail.profile.bio = Some("Lorem ipsum dolor sit amet. ".repeat(400));

        let layout = layout_cv(&detail, generated_on());

        assert!(layout.pages.len() > 1);
        for page in &layout.pages {
            for element in page {
                if let Element::Text { y_mm, .. } = element {
                    assert!(*y_mm >= MARGIN_BOTTOM_MM);
                    assert!(*y_mm <= PAGE_HEIGHT_MM - MARGIN_TOP_MM);
                }
            }
        }
    }

    #[test]
    fn empty_sections_are_omitted() {
        let mut detail = sample_detail(1, Uuid::new_v4());
        detail.profile.bio = None;
        detail.skills.clear();
        detail.talents.clear();

        let text = all_text(&layout_cv(&detail, generated_on()));

        assert!(!text.contains(&"TENTANG SAYA".to_string()));
        assert!(!text.contains(&"KEAHLIAN".to_string()));
        assert!(!text.contains(&"PORTFOLIO & PENGALAMAN".to_string()));
    }
}
