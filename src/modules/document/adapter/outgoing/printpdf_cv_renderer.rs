use printpdf::{
    BuiltinFont, Color, IndirectFontRef, Line, Mm, PdfDocument, PdfLayerReference, Point, Rgb,
};

use crate::modules::document::application::domain::cv_layout::{
    CvLayout, Element, FontStyle, Ink, PAGE_HEIGHT_MM, PAGE_WIDTH_MM,
};
use crate::modules::document::application::ports::outgoing::{CvRenderer, RenderError};

const LAYER: &str = "Layer 1";

struct Fonts {
    regular: IndirectFontRef,
    bold: IndirectFontRef,
    italic: IndirectFontRef,
}

impl Fonts {
    fn pick(&self, style: FontStyle) -> &IndirectFontRef {
        match style {
            FontStyle::Regular => &self.regular,
            FontStyle::Bold => &self.bold,
            FontStyle::Italic => &self.italic,
        }
    }
}

fn color(ink: Ink) -> Color {
    let (r, g, b) = ink.rgb();
    Color::Rgb(Rgb::new(r, g, b, None))
}

fn render_err(e: impl std::fmt::Display) -> RenderError {
    RenderError(format!("PDF generation failed: {e}"))
}

fn draw(layer: &PdfLayerReference, fonts: &Fonts, element: &Element) {
    match element {
        Element::Text {
            text,
            x_mm,
            y_mm,
            size_pt,
            style,
            ink,
        } => {
            layer.set_fill_color(color(*ink));
            layer.use_text(text.as_str(), *size_pt, Mm(*x_mm), Mm(*y_mm), fonts.pick(*style));
        }
        Element::Rule { x1_mm, x2_mm, y_mm } => {
            layer.set_outline_color(color(Ink::Muted));
            layer.set_outline_thickness(0.5);
            layer.add_line(Line {
                points: vec![
                    (Point::new(Mm(*x1_mm), Mm(*y_mm)), false),
                    (Point::new(Mm(*x2_mm), Mm(*y_mm)), false),
                ],
                is_closed: false,
            });
        }
    }
}

/// A4 PDFs drawn with the builtin Helvetica family, so no font files ship
/// with the binary.
#[derive(Debug, Clone, Copy, Default)]
pub struct PrintPdfCvRenderer;

impl CvRenderer for PrintPdfCvRenderer {
    fn render(&self, title: &str, layout: &CvLayout) -> Result<Vec<u8>, RenderError> {
        let (doc, first_page, first_layer) =
            PdfDocument::new(title, Mm(PAGE_WIDTH_MM), Mm(PAGE_HEIGHT_MM), LAYER);

        let fonts = Fonts {
            regular: doc.add_builtin_font(BuiltinFont::Helvetica).map_err(render_err)?,
            bold: doc
                .add_builtin_font(BuiltinFont::HelveticaBold)
                .map_err(render_err)?,
            italic: doc
                .add_builtin_font(BuiltinFont::HelveticaOblique)
                .map_err(render_err)?,
        };

        for (index, elements) in layout.pages.iter().enumerate() {
            let (page, layer) = if index == 0 {
                (first_page, first_layer)
            } else {
                doc.add_page(Mm(PAGE_WIDTH_MM), Mm(PAGE_HEIGHT_MM), LAYER)
            };
            let layer = doc.get_page(page).get_layer(layer);
            for element in elements {
                draw(&layer, &fonts, element);
            }
        }

        doc.save_to_bytes().map_err(render_err)
    }
}
