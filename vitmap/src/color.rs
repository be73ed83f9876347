///
/// The fill colour of a shape, as 8-bit RGBA components
///
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    /// Opaque black, the colour of a newly created shape
    pub const BLACK: Color          = Color { r: 0, g: 0, b: 0, a: 255 };

    /// Fully transparent
    pub const TRANSPARENT: Color    = Color { r: 0, g: 0, b: 0, a: 0 };

    ///
    /// Creates a colour from its components
    ///
    #[inline]
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Color {
        Color { r, g, b, a }
    }

    ///
    /// Returns the components of this colour as an array (in the order the renderer expects them)
    ///
    #[inline]
    pub fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl Default for Color {
    fn default() -> Color {
        Color::BLACK
    }
}

impl From<[u8; 4]> for Color {
    #[inline]
    fn from([r, g, b, a]: [u8; 4]) -> Color {
        Color { r, g, b, a }
    }
}
