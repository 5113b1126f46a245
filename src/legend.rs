//! Legends and the currently displayed legend.

use std::fmt;
use std::sync::Arc;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::breaks::Bin;
use crate::color::{hex, Color, RGBColor};
use crate::format::FormatKind;
use crate::layer::ClassifiedLayer;

/// One line of a legend: the formatted bounds of a class and its
/// color.  A bound is `None` when it could not be formatted.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegendEntry {
    pub min: Option<String>,
    pub max: Option<String>,
    #[serde(with = "hex")]
    pub color: Color,
}

impl LegendEntry {
    /// Whether both bounds could be formatted.
    pub fn is_formatted(&self) -> bool {
        self.min.is_some() && self.max.is_some()
    }
}

impl fmt::Display for LegendEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let bound = |b: &Option<String>| b.clone().unwrap_or_else(|| "?".into());
        write!(f, "{} - {}", bound(&self.min), bound(&self.max))
    }
}

/// A titled list of legend entries, in class order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Legend {
    pub title: String,
    pub entries: Vec<LegendEntry>,
}

impl Legend {
    pub fn new(title: impl Into<String>, entries: Vec<LegendEntry>) -> Self {
        Legend { title: title.into(), entries }
    }

    /// Plain text rendering, one `color  min - max` line per entry
    /// under the title.
    pub fn render_text(&self) -> String {
        let mut s = self.title.clone();
        for e in &self.entries {
            s.push_str(&format!("\n{}  {e}", e.color.to_hex()));
        }
        s
    }
}

/// Format the observed range of every bin, from its lowest value to
/// its `max`.  An unformattable bound does not abort the legend, it is
/// left as `None`.
pub fn build_legend(bins: &[Bin], kind: FormatKind) -> Vec<LegendEntry> {
    let label = |x: f64| match kind.format(x) {
        Ok(s) => Some(s),
        Err(e) => {
            warn!(value = x, error = %e, "legend bound left unformatted");
            None
        }
    };
    bins.iter()
        .map(|b| LegendEntry { min: label(b.lower), max: label(b.max),
                               color: b.color })
        .collect()
}

/// The legend currently displayed.  Activating a layer replaces it
/// as a whole; readers holding a snapshot keep the old one.
#[derive(Clone, Debug, Default)]
pub struct LegendState {
    active: Arc<Legend>,
}

impl LegendState {
    pub fn new(initial: Legend) -> Self { Self::shared(Arc::new(initial)) }

    pub fn shared(initial: Arc<Legend>) -> Self {
        LegendState { active: initial }
    }

    /// Snapshot of the active legend.
    pub fn active(&self) -> Arc<Legend> { Arc::clone(&self.active) }

    /// Make `(title, entries)` the active legend and return it.
    pub fn activate(&mut self, title: impl Into<String>,
                    entries: Vec<LegendEntry>) -> Arc<Legend> {
        self.replace(Arc::new(Legend::new(title, entries)))
    }

    /// Display the legend of `layer`.
    pub fn activate_layer(&mut self, layer: &ClassifiedLayer) -> Arc<Legend> {
        self.replace(Arc::clone(&layer.legend))
    }

    /// Make an already shared legend the active one.
    pub fn replace(&mut self, legend: Arc<Legend>) -> Arc<Legend> {
        debug!(title = %legend.title, "legend activated");
        self.active = legend;
        self.active()
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use rgb::RGB8;

    fn entry(min: &str, max: &str, c: u8) -> LegendEntry {
        LegendEntry { min: Some(min.into()), max: Some(max.into()),
                      color: RGB8::new(c, c, c) }
    }

    #[test]
    fn legend_follows_bins() {
        let c = RGB8::new(0xef, 0xf3, 0xff);
        let d = RGB8::new(0x08, 0x51, 0x9c);
        let bins = [Bin { min: 0.05, max: 0.125, lower: 0.05, color: c,
                          count: 4 },
                    Bin { min: 0.125, max: 0.4, lower: 0.2, color: d,
                          count: 2 }];
        let l = build_legend(&bins, FormatKind::Percent);
        assert_eq!(l, [LegendEntry { min: Some("5%".into()),
                                     max: Some("13%".into()), color: c },
                       LegendEntry { min: Some("20%".into()),
                                     max: Some("40%".into()), color: d }]);
        assert_eq!(l[1].to_string(), "20% - 40%");
    }

    #[test]
    fn unformattable_bound_is_marked() {
        let c = RGB8::new(1, 2, 3);
        let bins = [Bin { min: f64::NAN, max: 3., lower: f64::NAN, color: c,
                          count: 0 },
                    Bin { min: 3., max: 1200., lower: 900., color: c,
                          count: 1 }];
        let l = build_legend(&bins, FormatKind::Currency);
        assert_eq!(l[0].min, None);
        assert_eq!(l[0].max.as_deref(), Some("$3"));
        assert!(!l[0].is_formatted());
        assert_eq!(l[0].to_string(), "? - $3");
        assert_eq!(l[1].to_string(), "$900 - $1,200");
    }

    #[test]
    fn activation_replaces_wholesale() {
        let mut state = LegendState::new(
            Legend::new("Housing", vec![entry("$1", "$2", 1),
                                        entry("$2", "$3", 2)]));
        let income = vec![entry("$10", "$20", 9)];
        let a = state.activate("Income", income.clone());
        assert_eq!(*a, Legend::new("Income", income));
        assert_eq!(state.active().entries.len(), 1);

        let poverty = vec![entry("1%", "5%", 3), entry("5%", "9%", 4),
                           entry("9%", "30%", 5)];
        state.activate("Poverty", poverty.clone());
        assert_eq!(*state.active(), Legend::new("Poverty", poverty));
        // An earlier snapshot is untouched.
        assert_eq!(a.title, "Income");
    }

    #[test]
    fn text_rendering() {
        let l = Legend::new("Median Monthly Housing Cost",
                            vec![entry("$500", "$800", 0xff)]);
        assert_eq!(l.render_text(),
                   "Median Monthly Housing Cost\n#ffffff  $500 - $800");
    }

    #[test]
    fn json_colors_are_hex() {
        let e = entry("1%", "2%", 0x10);
        let v = serde_json::to_value(&e).unwrap();
        assert_eq!(v["color"], "#101010");
        let back: LegendEntry = serde_json::from_value(v).unwrap();
        assert_eq!(back, e);
    }
}
