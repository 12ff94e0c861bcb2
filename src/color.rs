// Simple color struct for the fixed palette, with a helper to format the
// rgba() string the 2d canvas wants for a given alpha

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Color {
        Color { r, g, b }
    }

    pub fn from_u32(num: u32) -> Color {
        let r = (num >> 16) as u8;
        let g = (num >> 8) as u8;
        let b = num as u8;

        Color { r, g, b }
    }

    /// Canvas fill/stroke style string, e.g. "rgba(0, 212, 255, 0.3)".
    pub fn to_rgba(&self, alpha: f64) -> String {
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, alpha)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_u32_unpacks_channels() {
        let c = Color::from_u32(0x00d4ff);
        assert_eq!(c, Color::new(0, 212, 255));
    }

    #[test]
    fn rgba_string_carries_alpha() {
        let c = Color::new(123, 47, 247);
        assert_eq!(c.to_rgba(0.3), "rgba(123, 47, 247, 0.3)");
    }
}
