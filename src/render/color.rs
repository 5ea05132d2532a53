/// RGBA color with 8-bit components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) struct Rgba {
    pub(crate) r: u8,
    pub(crate) g: u8,
    pub(crate) b: u8,
    pub(crate) a: u8,
}

impl Rgba {
    pub(crate) const BLACK: Self = Self::new(0, 0, 0, 255);
    pub(crate) const WHITE: Self = Self::new(255, 255, 255, 255);
    /// Light gray used for grid lines
    pub(crate) const GRID: Self = Self::new(220, 220, 220, 255);
    /// Default series color (matplotlib's first cycle color)
    pub(crate) const SERIES: Self = Self::new(31, 119, 180, 255);

    pub(crate) const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub(crate) const fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}
