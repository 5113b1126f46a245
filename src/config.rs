//! Layer configuration, read from JSON.
//!
//! ```json
//! { "nameProperty": "namelsad",
//!   "layers": [
//!     { "title": "Percent Below Poverty", "property": "percent_be",
//!       "format": "percent", "classes": 5, "palette": "reds" },
//!     { "title": "Median Household Income", "property": "median_inc",
//!       "format": "currency", "palette": ["#eff3ff", "#bdd7e7", "#6baed6",
//!                                          "#3182bd", "#08519c"] } ] }
//! ```

use std::collections::HashSet;
use std::fs;
use std::path::Path;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::color::{parse_hex, Color, Scheme};
use crate::error::{Error, Result};
use crate::format::FormatKind;

/// Default number of classes per layer.
pub const DEFAULT_CLASSES: usize = 5;

/// Property holding the display name of a census tract.
pub const DEFAULT_NAME_PROPERTY: &str = "namelsad";

fn default_classes() -> usize { DEFAULT_CLASSES }

fn default_name_property() -> String { DEFAULT_NAME_PROPERTY.to_string() }

/// Colors of a layer: a Brewer scheme or explicit `#rrggbb` strings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PaletteSpec {
    Scheme(Scheme),
    Colors(Vec<String>),
}

impl Default for PaletteSpec {
    fn default() -> Self { PaletteSpec::Scheme(Scheme::default()) }
}

impl PaletteSpec {
    /// The colors for `classes` classes.  Explicit lists are returned
    /// as given, even when shorter than `classes`.
    pub fn colors(&self, classes: usize) -> Result<Vec<Color>> {
        match self {
            PaletteSpec::Scheme(s) => Ok(s.colors(classes)),
            PaletteSpec::Colors(c) => c.iter().map(|s| parse_hex(s)).collect(),
        }
    }
}

/// One thematic layer: which property to classify and how to show it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayerSpec {
    /// Layer name, also the legend title.
    pub title: String,
    /// Numeric feature property to classify.
    pub property: String,
    #[serde(default)]
    pub format: FormatKind,
    #[serde(default = "default_classes")]
    pub classes: usize,
    #[serde(default)]
    pub palette: PaletteSpec,
}

impl LayerSpec {
    pub fn new(title: impl Into<String>, property: impl Into<String>,
               format: FormatKind) -> Self {
        LayerSpec { title: title.into(), property: property.into(), format,
                    classes: DEFAULT_CLASSES, palette: PaletteSpec::default() }
    }

    pub fn classes(mut self, classes: usize) -> Self {
        self.classes = classes;
        self
    }

    pub fn palette(mut self, palette: PaletteSpec) -> Self {
        self.palette = palette;
        self
    }

    /// Colors of the classes, checked to cover `classes`.
    pub fn colors(&self) -> Result<Vec<Color>> {
        if self.classes == 0 { return Err(Error::InvalidClassCount) }
        let colors = self.palette.colors(self.classes)?;
        if colors.len() < self.classes {
            return Err(Error::PaletteTooShort { needed: self.classes,
                                                available: colors.len() })
        }
        Ok(colors)
    }
}

/// The thematic layers of a map, in display order.  The first layer
/// provides the initial legend.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MapConfig {
    pub layers: Vec<LayerSpec>,
    #[serde(default = "default_name_property")]
    pub name_property: String,
}

impl Default for MapConfig {
    /// Housing cost, household income and poverty census layers.
    fn default() -> Self {
        use FormatKind::*;
        MapConfig {
            layers: vec![
                LayerSpec::new("Median Monthly Housing Cost", "median_mon",
                               Currency),
                LayerSpec::new("Median Household Income", "median_inc",
                               Currency),
                LayerSpec::new("Percent Below Poverty", "percent_be", Percent),
            ],
            name_property: default_name_property(),
        }
    }
}

impl MapConfig {
    /// Parse and validate a JSON configuration.
    pub fn from_json(s: &str) -> Result<Self> {
        let config: MapConfig = serde_json::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Read and validate a JSON configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!(path = %path.display(), "loading map configuration");
        Self::from_json(&fs::read_to_string(path)?)
    }

    /// Check that there is at least one layer, that titles are unique
    /// and that every palette is long enough.
    pub fn validate(&self) -> Result<()> {
        if self.layers.is_empty() {
            return Err(Error::Config("no layer configured".into()))
        }
        let mut titles = HashSet::new();
        for l in &self.layers {
            if !titles.insert(l.title.as_str()) {
                return Err(Error::Config(
                    format!("duplicate layer title {:?}", l.title)))
            }
            if l.property.is_empty() {
                return Err(Error::Config(
                    format!("layer {:?} has no property", l.title)))
            }
            l.colors()?;
        }
        Ok(())
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use rgb::RGB8;

    #[test]
    fn defaults_are_the_census_layers() {
        let c = MapConfig::default();
        c.validate().unwrap();
        let t: Vec<_> = c.layers.iter().map(|l| l.title.as_str()).collect();
        assert_eq!(t, ["Median Monthly Housing Cost", "Median Household Income",
                       "Percent Below Poverty"]);
        assert_eq!(c.layers[2].format, FormatKind::Percent);
        assert_eq!(c.layers[0].colors().unwrap()[4], RGB8::new(0x08, 0x51, 0x9c));
        assert_eq!(c.name_property, "namelsad");
    }

    #[test]
    fn parse_json() {
        let c = MapConfig::from_json(r##"{
            "layers": [
              { "title": "Poverty", "property": "percent_be",
                "format": "percent", "classes": 3, "palette": "reds" },
              { "title": "Income", "property": "median_inc",
                "palette": ["#000", "#ffffff"], "classes": 2 } ] }"##)
            .unwrap();
        assert_eq!(c.layers[0].palette, PaletteSpec::Scheme(Scheme::Reds));
        assert_eq!(c.layers[0].classes, 3);
        assert_eq!(c.layers[1].format, FormatKind::Plain);
        assert_eq!(c.layers[1].colors().unwrap(),
                   [RGB8::new(0, 0, 0), RGB8::new(255, 255, 255)]);
        assert_eq!(c.name_property, DEFAULT_NAME_PROPERTY);
    }

    #[test]
    fn invalid_configurations() {
        assert!(matches!(MapConfig::from_json(r#"{"layers": []}"#),
                         Err(Error::Config(_))));
        assert!(matches!(MapConfig::from_json(r#"{"layers": [
            {"title": "a", "property": "x"}, {"title": "a", "property": "y"}]}"#),
                         Err(Error::Config(_))));
        assert!(matches!(MapConfig::from_json(r##"{"layers": [
            {"title": "a", "property": "x", "palette": ["#fff"]}]}"##),
                         Err(Error::PaletteTooShort { needed: 5, available: 1 })));
        assert!(matches!(MapConfig::from_json(r#"{"layers": [
            {"title": "a", "property": "x", "palette": ["red"], "classes": 1}]}"#),
                         Err(Error::InvalidColor(_))));
        assert!(matches!(MapConfig::from_json(r#"{"layers": [
            {"title": "a", "property": "x", "classes": 0}]}"#),
                         Err(Error::InvalidClassCount)));
        assert!(matches!(MapConfig::from_json("{"), Err(Error::Json(_))));
    }

    #[test]
    fn load_missing_file() {
        assert!(matches!(MapConfig::load("/nonexistent/map.json"),
                         Err(Error::Io(_))));
    }
}
