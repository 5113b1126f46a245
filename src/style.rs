//! Drawing hints handed to map renderers.

use serde::Serialize;

use crate::color::{hex, Color, GREENSPACE};
use crate::layer::TaggedFeature;

const OUTLINE: Color = Color { r: 0x33, g: 0x33, b: 0x33 };

/// How to draw a polygon.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureStyle {
    #[serde(with = "hex")]
    pub stroke: Color,
    #[serde(with = "hex")]
    pub fill: Color,
    pub fill_opacity: f64,
    /// Stroke width in pixels.
    pub weight: f64,
}

impl FeatureStyle {
    /// Half transparent class color with a thin dark outline.
    pub fn choropleth(feature: &TaggedFeature) -> Self {
        FeatureStyle { stroke: OUTLINE, fill: feature.tag.color,
                       fill_opacity: 0.5, weight: 1. }
    }

    /// Opaque parks and greenways drawn over the choropleth.
    pub fn greenspace() -> Self {
        FeatureStyle { stroke: GREENSPACE, fill: GREENSPACE,
                       fill_opacity: 1., weight: 2. }
    }
}

/// `"<name>: <value>"` where the name is read from the property
/// `name_property`.  `None` if either is unavailable.
pub fn tooltip(feature: &TaggedFeature, name_property: &str) -> Option<String> {
    let name = feature.feature.properties.get(name_property)?.as_str()?;
    let value = feature.tag.formatted_value.as_deref()?;
    Some(format!("{name}: {value}"))
}
