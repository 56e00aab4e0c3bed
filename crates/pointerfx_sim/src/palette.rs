//! Particle color palettes

use pointerfx_math::Rgb;
use rand::Rng;

/// Indigo, rose, blue and green
pub const DEFAULT_PALETTE: [Rgb; 4] = [
    Rgb::new(79, 70, 229),
    Rgb::new(225, 29, 72),
    Rgb::new(59, 130, 246),
    Rgb::new(34, 197, 94),
];

/// A fixed set of base colors that new particles draw from uniformly
#[derive(Clone, Debug, PartialEq)]
pub struct Palette {
    colors: Vec<Rgb>,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            colors: DEFAULT_PALETTE.to_vec(),
        }
    }
}

impl Palette {
    /// Create a palette from the given colors
    ///
    /// An empty list falls back to [`DEFAULT_PALETTE`].
    pub fn new(colors: Vec<Rgb>) -> Self {
        if colors.is_empty() {
            Self::default()
        } else {
            Self { colors }
        }
    }

    /// All colors in the palette
    pub fn colors(&self) -> &[Rgb] {
        &self.colors
    }

    /// Number of colors
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Always false once constructed: empty input falls back to the default
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Pick a color uniformly at random
    pub fn pick<R: Rng + ?Sized>(&self, rng: &mut R) -> Rgb {
        self.colors[rng.random_range(0..self.colors.len())]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_default_palette() {
        let palette = Palette::default();
        assert_eq!(palette.len(), 4);
        assert_eq!(palette.colors()[0], Rgb::new(79, 70, 229));
    }

    #[test]
    fn test_empty_falls_back_to_default() {
        assert_eq!(Palette::new(Vec::new()), Palette::default());
    }

    #[test]
    fn test_pick_stays_in_palette() {
        let palette = Palette::default();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            let c = palette.pick(&mut rng);
            assert!(palette.colors().contains(&c));
        }
    }

    #[test]
    fn test_pick_covers_every_color() {
        let palette = Palette::default();
        let mut rng = StdRng::seed_from_u64(42);
        let mut seen = [false; 4];
        for _ in 0..400 {
            let c = palette.pick(&mut rng);
            let idx = palette.colors().iter().position(|p| *p == c).unwrap();
            seen[idx] = true;
        }
        assert!(seen.iter().all(|s| *s), "Colors seen: {:?}", seen);
    }

    #[test]
    fn test_single_color_palette() {
        let palette = Palette::new(vec![Rgb::new(1, 2, 3)]);
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(palette.pick(&mut rng), Rgb::new(1, 2, 3));
    }
}
