use crate::core::Color;

/// Ten-color categorical palette used when the host configures none.
pub const DEFAULT_PALETTE: [Color; 10] = [
    Color::from_rgb8(0x1f, 0x77, 0xb4),
    Color::from_rgb8(0xff, 0x7f, 0x0e),
    Color::from_rgb8(0x2c, 0xa0, 0x2c),
    Color::from_rgb8(0xd6, 0x27, 0x28),
    Color::from_rgb8(0x94, 0x67, 0xbd),
    Color::from_rgb8(0x8c, 0x56, 0x4b),
    Color::from_rgb8(0xe3, 0x77, 0xc2),
    Color::from_rgb8(0x7f, 0x7f, 0x7f),
    Color::from_rgb8(0xbc, 0xbd, 0x22),
    Color::from_rgb8(0x17, 0xbe, 0xcf),
];

/// Cyclic color assignment over an ordered palette.
///
/// The cursor is state for one render pass: callers `reset` it before
/// laying out bars so identical input yields identical colors.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorCycle {
    palette: Vec<Color>,
    cursor: usize,
}

impl Default for ColorCycle {
    fn default() -> Self {
        Self {
            palette: DEFAULT_PALETTE.to_vec(),
            cursor: 0,
        }
    }
}

impl ColorCycle {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_palette(colors: Vec<Color>) -> Self {
        let mut cycle = Self::default();
        cycle.set_palette(colors);
        cycle
    }

    /// Replaces the palette and rewinds the cursor.
    ///
    /// An empty palette restores [`DEFAULT_PALETTE`].
    pub fn set_palette(&mut self, colors: Vec<Color>) {
        self.palette = if colors.is_empty() {
            DEFAULT_PALETTE.to_vec()
        } else {
            colors
        };
        self.cursor = 0;
    }

    #[must_use]
    pub fn palette(&self) -> &[Color] {
        &self.palette
    }

    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn reset(&mut self) {
        self.cursor = 0;
    }

    /// Returns the color under the cursor and advances, wrapping forever.
    pub fn next_color(&mut self) -> Color {
        let color = self.palette[self.cursor];
        self.cursor = (self.cursor + 1) % self.palette.len();
        color
    }
}

impl Iterator for ColorCycle {
    type Item = Color;

    fn next(&mut self) -> Option<Color> {
        Some(self.next_color())
    }
}

#[cfg(test)]
mod tests {
    use super::{ColorCycle, DEFAULT_PALETTE};
    use crate::core::Color;

    #[test]
    fn empty_palette_falls_back_to_default() {
        let cycle = ColorCycle::with_palette(Vec::new());
        assert_eq!(cycle.palette(), &DEFAULT_PALETTE);
    }

    #[test]
    fn set_palette_rewinds_cursor() {
        let mut cycle = ColorCycle::new();
        cycle.next_color();
        cycle.next_color();
        assert_eq!(cycle.cursor(), 2);

        cycle.set_palette(vec![Color::rgb(1.0, 0.0, 0.0)]);
        assert_eq!(cycle.cursor(), 0);
    }

    #[test]
    fn single_color_palette_repeats() {
        let red = Color::rgb(1.0, 0.0, 0.0);
        let cycle = ColorCycle::with_palette(vec![red]);
        assert!(cycle.take(5).all(|color| color == red));
    }
}
