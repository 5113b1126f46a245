//! Colors, perceptual gradients and Brewer palettes.

use std::f64::consts::PI;
use std::marker::PhantomData;
use rgb::{RGBA, RGB8};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::palettes::{self, ty::PaletteData, MAX_CLASSES, MIN_CLASSES};

/// The display color of a class.
pub type Color = RGB8;

/// Color of features whose value falls in no class.
pub const UNCLASSIFIED: Color = RGB8 { r: 0, g: 0, b: 0 };

/// Color of features in a layer that could not be classified at all.
pub const NEUTRAL: Color = RGB8 { r: 0x99, g: 0x99, b: 0x99 };

/// Color of the parks and greenways overlay.
pub const GREENSPACE: Color = RGB8 { r: 0x00, g: 0x6d, b: 0x2c };

/// A “continuous” range of colors parametrized by reals in \[0, 1\].
pub trait ColorRange<Color> {
    /// Returns the color corresponding to `t` ∈ \[0., 1.\].
    fn rgb(&self, t: f64) -> Color;
}

/// Specifies the methods a RGB color encoding must provide.
pub trait RGBColor: Sized {
    /// Return the red, green, blue and alpha components of the color
    /// (in \[0, 255\]).
    fn to_rgba(&self) -> RGBA<f64>;

    /// Create a color from its RGBA components (in \[0, 255\]).
    fn from_rgba(rgba: RGBA<f64>) -> Self;

    /// Return a gradient from color `c0` to color `c1`.
    ///
    /// # Example
    ///
    /// ```
    /// use rgb::RGB8;
    /// use choropleth_brewery::{RGBColor, ColorRange};
    /// let red = RGB8::new(255, 0, 0);
    /// let blue = RGB8::new(0, 0, 255);
    /// let grad = red.gradient(&blue);
    /// let rgb = grad.rgb(0.5);
    /// ```
    fn gradient(&self, c1: &Self) -> Gradient<Self> {
        let lch0 = Lch::from_rgb(Self::to_rgba(self));
        let lch1 = Lch::from_rgb(Self::to_rgba(c1));
        let h0 = lch0.h;
        let h1 = lch1.h;
        let dh = {
            if h1 > h0 && h1 - h0 > PI { h1 - (h0 + TWO_PI) }
            else if h1 < h0 && h0 - h1 > PI { h1 + TWO_PI - h0 }
            else { h1 - h0 } };
        Gradient { c0: lch0,
                   dc: Lch { l: lch1.l - lch0.l, c: lch1.c - lch0.c,
                             h: dh, a: lch1.a - lch0.a },
                   color: PhantomData }
    }

    /// CSS notation `#rrggbb` of the color.
    fn to_hex(&self) -> String {
        let RGBA { r, g, b, .. } = self.to_rgba();
        format!("#{:02x}{:02x}{:02x}", r as u8, g as u8, b as u8)
    }
}

impl RGBColor for RGB8 {
    #[inline]
    fn to_rgba(&self) -> RGBA<f64> {
        RGBA{ r: self.r as f64, g: self.g as f64, b: self.b as f64, a: 255. }
    }

    #[inline]
    fn from_rgba(c: RGBA<f64>) -> Self {
        // `as` saturates, rounding avoids 254.9999 → 254.
        RGB8 { r: c.r.round() as u8,  g: c.g.round() as u8,
               b: c.b.round() as u8 }
    }
}

/// Parse CSS colors `#rgb` or `#rrggbb` (the `#` is optional).
pub fn parse_hex(s: &str) -> Result<Color> {
    let err = || Error::InvalidColor(s.to_string());
    let h = s.trim();
    let h = h.strip_prefix('#').unwrap_or(h);
    if !h.is_ascii() { return Err(err()) }
    let digit = |i: usize, len: usize| {
        u8::from_str_radix(&h[i .. i + len], 16).map_err(|_| err())
    };
    match h.len() {
        3 => {
            let (r, g, b) = (digit(0, 1)?, digit(1, 1)?, digit(2, 1)?);
            Ok(RGB8::new(r * 17, g * 17, b * 17))
        }
        6 => Ok(RGB8::new(digit(0, 2)?, digit(2, 2)?, digit(4, 2)?)),
        _ => Err(err()),
    }
}

/// Serde adapter writing colors as `#rrggbb` strings.
pub mod hex {
    use super::{parse_hex, Color, RGBColor};
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(c: &Color, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&c.to_hex())
    }

    pub fn deserialize<'de, D>(d: D) -> Result<Color, D::Error>
    where D: Deserializer<'de> {
        let s = String::deserialize(d)?;
        parse_hex(&s).map_err(de::Error::custom)
    }
}

/// The type for colors in the CIE L*C*h*_ab color space with a D50
/// reference white point and an alpha component.  This color space is
/// CIE L*a*b* with polar coordinates.
#[derive(Clone, Copy)]
struct Lch {
    /// The lightness in the range 0. to 100.
    l: f64,
    /// The chroma, in the range 0. to 181.02, but less in practice.
    c: f64,
    /// The hue in degrees in the range 0. to 2π.
    h: f64,
    /// Alpha component
    a: f64,
}

const EPS0: f64 = 6. / 29.;
const EPS: f64 = EPS0 * EPS0 * EPS0 ;
const TWO_PI: f64 = 2. * PI;

impl Lch {
    // Channels are scaled to [0, 1] on the way in and back to [0, 255]
    // on the way out.
    fn from_rgb(c: RGBA<f64>) -> Lch {
        // See https://github.com/dbuenzli/gg/blob/b8704687d669d139bb4ac7a54115afc7e5caaa55/src/gg.ml#L2926
        const C0: f64 = 1. / 3.;
        const C1: f64 = 841. / 108.;
        const C2: f64 = 4. / 29.;
        let (r, g, b) = (c.r / 255., c.g / 255., c.b / 255.);
        let xr = 0.4522795 * r + 0.3993744 * g + 0.1483460 * b;
        let yr = 0.2225105 * r + 0.7168863 * g + 0.0606032 * b;
        let zr = 0.0168820 * r + 0.1176865 * g + 0.8654315 * b;
        let fx = if xr > EPS { xr.powf(C0) } else { C1 * xr + C2 };
        let fy = if yr > EPS { yr.powf(C0) } else { C1 * yr + C2 };
        let fz = if zr > EPS { zr.powf(C0) } else { C1 * zr + C2 };
        let l = 116. * fy - 16.;
        let a = 500. * (fx - fy);
        let b = 200. * (fy - fz);
        let h = { let h = b.atan2(a);
                  if h < 0. { h + TWO_PI } else { h } };
        Lch { l, c: a.hypot(b), h, a: c.a }
    }

    fn to_rgb(&self) -> RGBA<f64> {
        const C0: f64 = 108. / 841.;
        const C1: f64 = 4. / 29.;
        let a = self.c * self.h.cos();
        let b =  self.c * self.h.sin();
        let fy = (self.l + 16.) / 116.;
        let fx = a / 500. + fy;
        let fz = fy - b / 200.;
        let fx1 = if fx > EPS0 { fx * fx * fx } else { C0 * (fx - C1) };
        let fy1 = if fy > EPS0 { fy * fy * fy } else { C0 * (fy - C1) };
        let fz1 = if fz > EPS0 { fz * fz * fz } else { C0 * (fz - C1) };
        let r = 3.0215932  * fx1 - 1.6168777 * fy1 - 0.4047152 * fz1;
        let g = -0.9437222 * fx1 + 1.9161365 * fy1 + 0.0275856 * fz1;
        let b = 0.0693906  * fx1 - 0.2290271 * fy1 + 1.1596365 * fz1;
        let ch = |x: f64| (255. * x).clamp(0., 255.);
        RGBA { r: ch(r), g: ch(g), b: ch(b), a: self.a }
    }
}


/// Gradient between two colors.
///
/// Created by [`RGBColor::gradient`].  See the [`ColorRange`] trait
/// for methods.
pub struct Gradient<Color> {
    c0: Lch, // first color
    dc: Lch, // last - fist color
    color: PhantomData<Color>,
}

impl<Color> Gradient<Color>
where Color: RGBColor {
    /// Returns the color corresponding to `t` ∈ \[0., 1.\] but does
    /// not check the later condition.
    #[inline]
    fn rgb_unsafe(&self, t: f64) -> Color {
        let lhc = Lch { l: self.c0.l + t * self.dc.l,
              c: self.c0.c + t * self.dc.c,
              h: self.c0.h + t * self.dc.h,
              a: self.c0.a + t * self.dc.a };
        Color::from_rgba(lhc.to_rgb())
    }
}

impl<Color> ColorRange<Color> for Gradient<Color>
where Color: RGBColor {
    /// Returns the color corresponding to `t` ∈ \[0., 1.\], where
    /// `t == 0.` returns the first color provided in the gradient and
    /// `t == 1.` the second.
    fn rgb(&self, t: f64) -> Color { self.rgb_unsafe(t.clamp(0., 1.)) }
}


/// A Brewer palette with a fixed number of classes.
#[derive(Clone, Copy)]
pub struct Palette<Color> {
    palette: &'static PaletteData,
    color: PhantomData<Color>,
}

impl<Color: RGBColor> Palette<Color> {
    fn new(palette: &'static PaletteData) -> Self {
        Self { palette, color: PhantomData }
    }

    /// Returns the number of colors in the palette.
    ///
    /// Palettes countains at least 3 colors.
    pub fn len(&self) -> usize { self.palette.rgb.len() }

    /// Returns the RGB colors of the palette, lightest first.
    pub fn colors(&self) -> Vec<Color> {
        self.palette.rgb.iter().map(|&c| Color::from_rgba(c)).collect()
    }

    /// Returns a gradient going through all colors of the palette.
    pub fn gradient(&self) -> PaletteGradient<Color> {
        PaletteGradient {
            gradients: self.palette.rgb.windows(2)
                .map(|c| { let c0 = Color::from_rgba(c[0]);
                           let c1 = Color::from_rgba(c[1]);
                           c0.gradient(&c1) })
                .collect() }
    }

    /// Returns `n` colors evenly spaced along [`Palette::gradient`],
    /// from the lightest to the darkest.  A single color is the
    /// darkest one.
    pub fn resample(&self, n: usize) -> Vec<Color> {
        let g = self.gradient();
        match n {
            0 => vec![],
            1 => vec![g.rgb(1.)],
            _ => {
                let dt = 1. / (n - 1) as f64;
                (0 .. n).map(|i| g.rgb(i as f64 * dt)).collect()
            }
        }
    }
}

/// A gradient based on a [`Palette`].
pub struct PaletteGradient<Color> {
    gradients: Vec<Gradient<Color>>,
}

impl<Color> ColorRange<Color> for PaletteGradient<Color>
where Color: RGBColor {
    fn rgb(&self, t: f64) -> Color {
        let n = self.gradients.len();
        let tn = t.clamp(0., 1.) * n as f64;
        let i = tn.trunc() as usize;
        if i < n { self.gradients[i].rgb_unsafe(tn.fract()) }
        else { self.gradients[n-1].rgb_unsafe(1.) }
    }
}


/// Brewer single-hue sequential color schemes.
///
/// Sequential schemes suit ordered data that progress from low to
/// high: light colors for low values, dark colors for high values.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash,
         Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scheme {
    #[default]
    Blues,
    Greens,
    Greys,
    Oranges,
    Purples,
    Reds,
}

impl Scheme {
    fn data(self) -> &'static Vec<PaletteData> {
        match self {
            Scheme::Blues => &*palettes::BLUES,
            Scheme::Greens => &*palettes::GREENS,
            Scheme::Greys => &*palettes::GREYS,
            Scheme::Oranges => &*palettes::ORANGES,
            Scheme::Purples => &*palettes::PURPLES,
            Scheme::Reds => &*palettes::REDS,
        }
    }

    /// The Brewer palette with exactly `n` classes, if the scheme
    /// defines one (3 ≤ `n` ≤ 9).
    pub fn palette<Color: RGBColor>(self, n: usize) -> Option<Palette<Color>> {
        if !(MIN_CLASSES ..= MAX_CLASSES).contains(&n) { return None }
        Some(Palette::new(&self.data()[n - MIN_CLASSES]))
    }

    /// `n` colors of the scheme, lightest first.  Class counts the
    /// scheme does not define are resampled from the nearest palette.
    ///
    /// # Example
    ///
    /// ```
    /// use rgb::RGB8;
    /// use choropleth_brewery::Scheme;
    /// let blues: Vec<RGB8> = Scheme::Blues.colors(5);
    /// assert_eq!(blues[0], RGB8::new(0xef, 0xf3, 0xff));
    /// ```
    pub fn colors<Color: RGBColor>(self, n: usize) -> Vec<Color> {
        match self.palette(n) {
            Some(p) => p.colors(),
            None => {
                let nearest = n.clamp(MIN_CLASSES, MAX_CLASSES);
                Palette::<Color>::new(&self.data()[nearest - MIN_CLASSES])
                    .resample(n)
            }
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_round_trip() {
        let c = parse_hex("#3182bd").unwrap();
        assert_eq!(c, RGB8::new(0x31, 0x82, 0xbd));
        assert_eq!(c.to_hex(), "#3182bd");
        assert_eq!(parse_hex("#000").unwrap(), UNCLASSIFIED);
        assert_eq!(parse_hex("FFF").unwrap(), RGB8::new(255, 255, 255));
    }

    #[test]
    fn hex_rejects_garbage() {
        for s in ["", "#12", "#12345", "#gggggg", "#1234567", "#éé"] {
            assert!(matches!(parse_hex(s), Err(Error::InvalidColor(_))),
                    "{s:?} accepted");
        }
    }

    #[test]
    fn blues_five_matches_brewer() {
        let hex: Vec<_> = Scheme::Blues.colors::<RGB8>(5).iter()
            .map(|c| c.to_hex()).collect();
        assert_eq!(hex, ["#eff3ff", "#bdd7e7", "#6baed6", "#3182bd",
                         "#08519c"]);
    }

    #[test]
    fn every_scheme_defines_three_to_nine() {
        for s in [Scheme::Blues, Scheme::Greens, Scheme::Greys,
                  Scheme::Oranges, Scheme::Purples, Scheme::Reds] {
            for n in MIN_CLASSES ..= MAX_CLASSES {
                let p = s.palette::<RGB8>(n).unwrap();
                assert_eq!(p.len(), n, "{s:?}");
            }
            assert!(s.palette::<RGB8>(2).is_none());
            assert!(s.palette::<RGB8>(10).is_none());
        }
    }

    #[test]
    fn gradient_endpoints() {
        let c0 = RGB8::new(0xef, 0xf3, 0xff);
        let c1 = RGB8::new(0x08, 0x51, 0x9c);
        let g = c0.gradient(&c1);
        for (c, t) in [(c0, 0.), (c1, 1.)] {
            let d = g.rgb(t);
            assert!((d.r as i16 - c.r as i16).abs() <= 1
                    && (d.g as i16 - c.g as i16).abs() <= 1
                    && (d.b as i16 - c.b as i16).abs() <= 1,
                    "{} ≉ {}", d.to_hex(), c.to_hex());
        }
    }

    #[test]
    fn resampled_sizes() {
        for n in [1, 2, 10, 12] {
            assert_eq!(Scheme::Reds.colors::<RGB8>(n).len(), n);
        }
        // Lightness decreases along a sequential scheme.
        let c: Vec<RGB8> = Scheme::Greys.colors(12);
        for w in c.windows(2) {
            assert!(w[0].r >= w[1].r, "{} < {}", w[0].to_hex(), w[1].to_hex());
        }
    }
}
