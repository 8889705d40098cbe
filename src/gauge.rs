/// Partial block glyphs, one eighth of a cell each, lightest first.
pub const GLYPHS: [char; 8] = ['▏', '▎', '▍', '▌', '▋', '▊', '▉', '█'];

/// The solid cell, last entry of [`GLYPHS`].
pub const FULL_BLOCK: char = GLYPHS[GLYPHS.len() - 1];

/// How much of the gauge a fraction covers.
///
/// `whole` counts the cells touched, including the terminal one, and is always
/// in `1..=width`. `glyph` indexes [`GLYPHS`] for that terminal cell.
///
/// The mapping always claims at least one cell, so an empty bar still shows
/// the thinnest glyph:
///
/// ```rust
/// use battery_gauge::Fill;
///
/// assert_eq!(Fill::new(0, 10, 5), Fill { whole: 1, glyph: 0 });
/// assert_eq!(Fill::new(5, 10, 5), Fill { whole: 3, glyph: 4 });
/// assert_eq!(Fill::new(10, 10, 5), Fill { whole: 5, glyph: 7 });
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fill {
    pub whole: usize,
    pub glyph: usize,
}

impl Fill {
    /// Maps `current / total` onto a gauge of `width` cells.
    pub fn new(current: u64, total: u64, width: usize) -> Self {
        Self::from_fraction(current as f64 / total as f64, width)
    }

    /// Maps a completion fraction onto a gauge of `width` cells.
    ///
    /// Fractions at or above `1.0` fill the gauge completely.
    pub fn from_fraction(fraction: f64, width: usize) -> Self {
        let steps = GLYPHS.len();
        if fraction >= 1.0 {
            return Self {
                whole: width,
                glyph: steps - 1,
            };
        }

        let scaled = (fraction * width as f64 * steps as f64) as usize;
        // f64 rounding may land exactly on the top bucket for fractions just below 1.0
        let scaled = scaled.min((width * steps).saturating_sub(1));
        Self {
            whole: scaled / steps + 1,
            glyph: scaled % steps,
        }
    }

    /// The glyph drawn in the terminal cell.
    pub fn terminal_glyph(&self) -> char {
        GLYPHS[self.glyph]
    }
}

/// The bracketed block gauge, `width + 2` characters wide.
///
/// ```rust
/// use battery_gauge::{Fill, Gauge};
///
/// let gauge = Gauge::new('|', '|', 5, Fill::new(5, 10, 5));
/// assert_eq!(gauge.to_string(), "|██▋  |");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Gauge {
    prefix: char,
    suffix: char,
    width: usize,
    fill: Fill,
}

impl Gauge {
    pub fn new(prefix: char, suffix: char, width: usize, fill: Fill) -> Self {
        Self {
            prefix,
            suffix,
            width,
            fill,
        }
    }

    pub fn fill(&self) -> Fill {
        self.fill
    }
}

impl std::fmt::Display for Gauge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let solid = self.fill.whole.saturating_sub(1);
        let blank = self.width.saturating_sub(self.fill.whole);
        write!(
            f,
            "{}{}{}{}{}",
            self.prefix,
            std::iter::repeat_n(FULL_BLOCK, solid).collect::<String>(),
            self.fill.terminal_glyph(),
            std::iter::repeat_n(' ', blank).collect::<String>(),
            self.suffix,
        )
    }
}
