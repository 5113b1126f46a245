pub(crate) use rgb::RGBA;

/// A Brewer palette for a fixed number of classes.
pub(crate) struct PaletteData {
    pub(crate) rgb: Vec<RGBA<f64>>, // Invariant: length ≥ 3
}

/// Build the palette data from `0xrrggbb` literals.
pub(crate) fn seq(hex: &[u32]) -> PaletteData {
    let rgb = hex.iter()
        .map(|&c| RGBA { r: ((c >> 16) & 0xff) as f64,
                         g: ((c >> 8) & 0xff) as f64,
                         b: (c & 0xff) as f64,
                         a: 255. })
        .collect();
    PaletteData { rgb }
}
