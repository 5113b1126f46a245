//! Classification of whole feature collections, one per thematic layer.
//!
//! Each layer is classified on its own: a layer whose values cannot be
//! classified is drawn with [`NEUTRAL`] and an empty legend, and the
//! other layers are unaffected.

use std::sync::Arc;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use tracing::{info, warn};

use crate::breaks::{compute_bins, Breaks};
use crate::classify::classify;
use crate::color::{Color, RGBColor, NEUTRAL, UNCLASSIFIED};
use crate::config::{LayerSpec, MapConfig};
use crate::error::{InvalidValue, Result};
use crate::legend::{build_legend, Legend, LegendEntry, LegendState};

/// A GeoJSON feature.  The geometry and other members (`type`, `id`,
/// …) are carried along untouched.  `"properties": null` reads as no
/// property at all.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Feature {
    #[serde(default)]
    pub geometry: Value,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub properties: Map<String, Value>,
    #[serde(flatten)]
    pub other: Map<String, Value>,
}

fn null_as_empty<'de, D>(d: D) -> Result<Map<String, Value>, D::Error>
where D: Deserializer<'de> {
    Ok(Option::<Map<String, Value>>::deserialize(d)?.unwrap_or_default())
}

impl Feature {
    /// The property `name` as a finite number.
    pub fn number(&self, name: &str) -> Result<f64, InvalidValue> {
        match self.properties.get(name) {
            None | Some(Value::Null) => Err(InvalidValue::Missing),
            Some(Value::Number(n)) => match n.as_f64() {
                Some(x) if x.is_finite() => Ok(x),
                Some(x) => Err(InvalidValue::NonFinite(x)),
                None => Err(InvalidValue::NotNumeric),
            },
            Some(_) => Err(InvalidValue::NotNumeric),
        }
    }
}

/// A GeoJSON feature collection.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FeatureCollection {
    pub features: Vec<Feature>,
    #[serde(flatten)]
    pub other: Map<String, Value>,
}

impl FeatureCollection {
    pub fn from_json(s: &str) -> Result<Self> { Ok(serde_json::from_str(s)?) }
}

/// The values of `property`, in feature order.
pub fn extract_values(features: &[Feature], property: &str)
                      -> Vec<Result<f64, InvalidValue>> {
    features.iter().map(|f| f.number(property)).collect()
}

/// What classification attaches to a feature.
#[derive(Clone, Debug, PartialEq)]
pub struct Tag {
    /// Index of the class, `None` when the feature is unclassified.
    pub class: Option<usize>,
    pub color: Color,
    /// The feature's own value, formatted.  `None` for invalid values.
    pub formatted_value: Option<String>,
    /// The legend of the layer the feature belongs to.
    pub legend: Arc<Legend>,
}

/// A feature together with its classification.
#[derive(Clone, Debug, PartialEq)]
pub struct TaggedFeature {
    pub feature: Feature,
    pub tag: Tag,
}

impl TaggedFeature {
    /// The feature with `color`, `formattedValue` and `legend` added to
    /// its properties, for map renderers consuming plain GeoJSON.
    pub fn to_geojson(&self) -> Feature {
        let mut f = self.feature.clone();
        let p = &mut f.properties;
        p.insert("color".into(), Value::String(self.tag.color.to_hex()));
        p.insert("formattedValue".into(),
                 self.tag.formatted_value.clone().map_or(Value::Null,
                                                         Value::String));
        p.insert("legend".into(),
                 serde_json::to_value(&self.tag.legend.entries)
                 .unwrap_or(Value::Null));
        f
    }
}

/// A classified thematic layer.
#[derive(Clone, Debug)]
pub struct ClassifiedLayer {
    pub title: String,
    pub features: Vec<TaggedFeature>,
    pub legend: Arc<Legend>,
    /// `None` when the layer could not be classified.
    pub breaks: Option<Breaks>,
    /// Top-level members of the source collection other than
    /// `features` (`crs`, `name`, …).
    pub other: Map<String, Value>,
}

impl ClassifiedLayer {
    /// Whether the features carry class colors.
    pub fn is_styled(&self) -> bool { self.breaks.is_some() }

    /// The tagged collection, see [`TaggedFeature::to_geojson`].
    pub fn to_geojson(&self) -> FeatureCollection {
        let mut other = self.other.clone();
        other.insert("type".into(), Value::String("FeatureCollection".into()));
        FeatureCollection {
            features: self.features.iter().map(|f| f.to_geojson()).collect(),
            other }
    }
}

/// Classify a whole collection, keeping its top-level members for
/// [`ClassifiedLayer::to_geojson`].
pub fn classify_collection(spec: &LayerSpec, collection: FeatureCollection)
                           -> ClassifiedLayer {
    let FeatureCollection { features, other } = collection;
    ClassifiedLayer { other, ..classify_layer(spec, features) }
}

/// Classify `features` on `spec.property` into at most `spec.classes`
/// natural-breaks classes.
///
/// Features with a missing, non-numeric or non-finite value do not
/// take part in the computation of the classes; they are kept with the
/// [`UNCLASSIFIED`] color and no formatted value.  If no class can be
/// computed, every feature of the layer gets [`NEUTRAL`] and the
/// legend is empty.
pub fn classify_layer(spec: &LayerSpec, features: Vec<Feature>)
                      -> ClassifiedLayer {
    let values = extract_values(&features, &spec.property);
    let invalid = values.iter().filter(|v| v.is_err()).count();
    if invalid > 0 {
        warn!(layer = %spec.title, invalid, property = %spec.property,
              "features without a usable value");
    }
    let finite: Vec<f64> = values.iter().filter_map(|v| v.ok()).collect();
    let breaks = spec.colors()
        .and_then(|palette| compute_bins(&finite, spec.classes, &palette));
    let breaks = match breaks {
        Ok(b) => Some(b),
        Err(e) => {
            warn!(layer = %spec.title, error = %e, "layer left unstyled");
            None
        }
    };
    let entries = breaks.as_ref()
        .map(|b| build_legend(b.bins(), spec.format))
        .unwrap_or_default();
    let legend = Arc::new(Legend::new(spec.title.clone(), entries));

    let features: Vec<_> = features.into_iter().zip(values)
        .map(|(feature, value)| {
            let tag = tag(value, breaks.as_ref(), spec, &legend);
            TaggedFeature { feature, tag }
        })
        .collect();
    if let Some(b) = &breaks {
        info!(layer = %spec.title, features = features.len(),
              classes = b.len(), gvf = b.goodness_of_variance_fit(),
              "layer classified");
    }
    ClassifiedLayer { title: spec.title.clone(), features, legend, breaks,
                      other: Map::new() }
}

fn tag(value: Result<f64, InvalidValue>, breaks: Option<&Breaks>,
       spec: &LayerSpec, legend: &Arc<Legend>) -> Tag {
    let legend = Arc::clone(legend);
    let color = if breaks.is_some() { UNCLASSIFIED } else { NEUTRAL };
    let value = match value {
        Ok(x) => x,
        Err(_) => return Tag { class: None, color, formatted_value: None,
                               legend },
    };
    let formatted_value = spec.format.format(value).ok();
    match breaks.map(|b| classify(value, b.bins())) {
        Some(Ok(c)) => Tag { class: Some(c.index), color: c.color,
                             formatted_value, legend },
        Some(Err(e)) => {
            warn!(layer = %spec.title, value, error = %e, "value not classified");
            Tag { class: None, color: UNCLASSIFIED, formatted_value, legend }
        }
        None => Tag { class: None, color: NEUTRAL, formatted_value, legend },
    }
}

/// All thematic layers of a map and the legend on display.
#[derive(Clone, Debug)]
pub struct LayerSet {
    layers: Vec<ClassifiedLayer>,
    legend: LegendState,
}

impl LayerSet {
    /// Classify each configured layer with the collection of the same
    /// index in `datasets`.  Layers without a collection are classified
    /// as empty (hence unstyled); surplus collections are ignored.  The
    /// first layer's legend is the initial one.
    pub fn classify(config: &MapConfig,
                    datasets: impl IntoIterator<Item = FeatureCollection>)
                    -> Self {
        let mut datasets = datasets.into_iter();
        let layers: Vec<_> = config.layers.iter()
            .map(|spec| classify_collection(spec,
                                            datasets.next().unwrap_or_default()))
            .collect();
        let extra = datasets.count();
        if extra > 0 {
            warn!(extra, layers = layers.len(),
                  "more datasets than configured layers, extra ones ignored");
        }
        let legend = match layers.first() {
            Some(l) => LegendState::shared(Arc::clone(&l.legend)),
            None => LegendState::default(),
        };
        LayerSet { layers, legend }
    }

    pub fn layers(&self) -> &[ClassifiedLayer] { &self.layers }

    /// The layer titled `title`.
    pub fn get(&self, title: &str) -> Option<&ClassifiedLayer> {
        self.layers.iter().find(|l| l.title == title)
    }

    /// The displayed legend.
    pub fn legend_state(&self) -> &LegendState { &self.legend }

    /// Display the legend of the layer titled `title`.  Returns `None`,
    /// leaving the displayed legend as it was, for unknown titles.
    pub fn activate(&mut self, title: &str) -> Option<Arc<Legend>> {
        let i = self.layers.iter().position(|l| l.title == title)?;
        Some(self.legend.activate_layer(&self.layers[i]))
    }

    /// Display an arbitrary legend, as sent by the presentation layer.
    pub fn activate_legend(&mut self, title: impl Into<String>,
                           entries: Vec<LegendEntry>) -> Arc<Legend> {
        self.legend.activate(title, entries)
    }
}
