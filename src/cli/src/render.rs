use itertools::Itertools;
use owo_colors::OwoColorize;
use tesseract_core::{CENTER_FACELET, Cell, Color, FaceletState};

/// Draws a facelet state as one line per cell: the three edge groups, the
/// two corner groups, then the center.
pub struct Renderer {
    hidden: Vec<Cell>,
    glyph: String,
}

impl Renderer {
    pub fn new(hidden: Vec<Cell>, glyph: String) -> Renderer {
        Renderer { hidden, glyph }
    }

    /// The color a facelet is drawn with. Hidden cells, and facelets past
    /// the end of a cell, are drawn neutral.
    pub fn displayed_color(&self, state: &FaceletState, cell: Cell, facelet: usize) -> Color {
        if self.hidden.contains(&cell) {
            return Color::Neutral;
        }
        state.color_of(cell, facelet).unwrap_or(Color::Neutral)
    }

    pub fn render(&self, state: &FaceletState) -> String {
        let mut out = String::new();

        for cell in Cell::ALL {
            let paint = |facelets: std::ops::Range<usize>| {
                facelets
                    .map(|facelet| self.paint(self.displayed_color(state, cell, facelet)))
                    .join("")
            };

            out.push_str(&format!(
                "{} │ {} {} {} │ {} {} │ {}\n",
                cell.label().bold(),
                paint(0..4),
                paint(4..8),
                paint(8..12),
                paint(12..16),
                paint(16..20),
                paint(CENTER_FACELET..CENTER_FACELET + 1),
            ));
        }

        out
    }

    fn paint(&self, color: Color) -> String {
        let (r, g, b) = rgb(color);
        self.glyph.truecolor(r, g, b).to_string()
    }
}

fn rgb(color: Color) -> (u8, u8, u8) {
    match color {
        Color::Orange => (255, 140, 0),
        Color::Red => (220, 30, 30),
        Color::Green => (30, 170, 60),
        Color::Blue => (40, 80, 220),
        Color::Yellow => (240, 220, 30),
        Color::White => (245, 245, 245),
        Color::Pink => (255, 120, 190),
        Color::Coffee => (111, 78, 55),
        Color::Neutral => (0, 0, 0),
    }
}
