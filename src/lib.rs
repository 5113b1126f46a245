//! Natural-breaks classification and legends for choropleth maps.
//!
//! - [`compute_bins`] splits a numeric series into optimal classes
//!   (Jenks natural breaks, computed exactly).
//! - [`classify`] finds the class of a value.
//! - [`FormatKind`] renders values as percentages or dollars.
//! - [`build_legend`] and [`LegendState`] produce and switch legends.
//! - [`classify_layer`] and [`LayerSet`] do all of the above for
//!   GeoJSON feature collections, one per thematic layer.
//!
//! Class colors come from the sequential [schemes by Cynthia
//! Brewer](https://colorbrewer2.org/), see [`Scheme`].
//!
//! # Example
//!
//! ```
//! use choropleth_brewery::{classify_layer, FeatureCollection, FormatKind,
//!                          LayerSpec};
//! let tracts = FeatureCollection::from_json(r#"{ "features": [
//!     { "properties": { "percent_be": 0.08 } },
//!     { "properties": { "percent_be": 0.31 } },
//!     { "properties": { "percent_be": 0.12 } } ] }"#).unwrap();
//! let spec = LayerSpec::new("Percent Below Poverty", "percent_be",
//!                           FormatKind::Percent);
//! let layer = classify_layer(&spec, tracts.features);
//! assert_eq!(layer.features[1].tag.formatted_value.as_deref(), Some("31%"));
//! println!("{}", layer.legend.render_text());
//! ```

mod palettes;
mod color;
mod error;
mod format;
mod breaks;
mod classify;
mod legend;
mod config;
mod layer;
mod style;

pub use color::{hex, parse_hex, Color, ColorRange, Gradient, Palette,
                PaletteGradient, RGBColor, Scheme,
                GREENSPACE, NEUTRAL, UNCLASSIFIED};
pub use error::{Error, InvalidValue, Result};
pub use format::{format, FormatKind};
pub use breaks::{compute_bins, Bin, Breaks};
pub use classify::{classify, Class};
pub use legend::{build_legend, Legend, LegendEntry, LegendState};
pub use config::{LayerSpec, MapConfig, PaletteSpec, DEFAULT_CLASSES,
                 DEFAULT_NAME_PROPERTY};
pub use layer::{classify_collection, classify_layer, extract_values,
                ClassifiedLayer, Feature, FeatureCollection, LayerSet, Tag,
                TaggedFeature};
pub use style::{tooltip, FeatureStyle};
