/// Linear colour with channels in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb { r: 0.0, g: 0.0, b: 0.0 };

    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    pub fn from_u8((r, g, b): (u8, u8, u8)) -> Self {
        Self::new(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0)
    }

    pub fn to_u8(self) -> (u8, u8, u8) {
        (
            (self.r * 255.0).round().clamp(0.0, 255.0) as u8,
            (self.g * 255.0).round().clamp(0.0, 255.0) as u8,
            (self.b * 255.0).round().clamp(0.0, 255.0) as u8,
        )
    }

    /// HSL to RGB. `hue` is in degrees and may be outside `0..360`;
    /// `saturation` and `lightness` are fractions.
    pub fn from_hsl(hue: f32, saturation: f32, lightness: f32) -> Self {
        let h = wrap_hue(hue) / 60.0;
        let s = saturation.clamp(0.0, 1.0);
        let l = lightness.clamp(0.0, 1.0);

        let chroma = (1.0 - (2.0 * l - 1.0).abs()) * s;
        let x = chroma * (1.0 - (h % 2.0 - 1.0).abs());
        let (r, g, b) = match h as u32 {
            0 => (chroma, x, 0.0),
            1 => (x, chroma, 0.0),
            2 => (0.0, chroma, x),
            3 => (0.0, x, chroma),
            4 => (x, 0.0, chroma),
            _ => (chroma, 0.0, x),
        };
        let m = l - chroma / 2.0;
        Self::new(r + m, g + m, b + m)
    }
}

/// Bring any hue in degrees into `0..360`.
pub fn wrap_hue(hue: f32) -> f32 {
    let wrapped = hue.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs
    if wrapped >= 360.0 { 0.0 } else { wrapped }
}

pub fn random_hue() -> f32 {
    fastrand::f32() * 360.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: Rgb, b: Rgb) -> bool {
        (a.r - b.r).abs() < 1e-4 && (a.g - b.g).abs() < 1e-4 && (a.b - b.b).abs() < 1e-4
    }

    #[test]
    fn primary_hues() {
        assert!(close(Rgb::from_hsl(0.0, 1.0, 0.5), Rgb::new(1.0, 0.0, 0.0)));
        assert!(close(Rgb::from_hsl(120.0, 1.0, 0.5), Rgb::new(0.0, 1.0, 0.0)));
        assert!(close(Rgb::from_hsl(240.0, 1.0, 0.5), Rgb::new(0.0, 0.0, 1.0)));
    }

    #[test]
    fn zero_saturation_is_grey() {
        let grey = Rgb::from_hsl(200.0, 0.0, 0.65);
        assert!(close(grey, Rgb::new(0.65, 0.65, 0.65)));
    }

    #[test]
    fn hue_wraps_both_ways() {
        assert!(close(Rgb::from_hsl(-20.0, 1.0, 0.5), Rgb::from_hsl(340.0, 1.0, 0.5)));
        assert!(close(Rgb::from_hsl(380.0, 1.0, 0.5), Rgb::from_hsl(20.0, 1.0, 0.5)));
        assert_eq!(wrap_hue(360.0), 0.0);
        assert!(wrap_hue(-1e-9) < 360.0);
    }

    #[test]
    fn u8_conversion_clamps() {
        assert_eq!(Rgb::new(1.5, -0.2, 0.5).to_u8(), (255, 0, 128));
        assert_eq!(Rgb::from_u8((255, 0, 0)), Rgb::new(1.0, 0.0, 0.0));
    }
}
