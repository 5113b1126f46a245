//! Display strings for attribute values.

use serde::{Deserialize, Serialize};
use crate::error::{Error, InvalidValue, Result};

/// How values of a layer are displayed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash,
         Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormatKind {
    /// Fractions shown as whole percentages: `0.23` → `23%`.
    Percent,
    /// US dollars with thousands separators: `1234` → `$1,234`.
    Currency,
    /// The shortest decimal representation of the number.
    #[default]
    Plain,
}

impl FormatKind {
    /// Format `value`.  Fails with [`Error::InvalidValue`] on `NaN`
    /// and infinities.
    ///
    /// Percentages are rounded half away from zero.  Currency keeps
    /// at most three fraction digits, like the en-US default number
    /// rendering.
    ///
    /// # Example
    ///
    /// ```
    /// use choropleth_brewery::FormatKind;
    /// assert_eq!(FormatKind::Percent.format(0.23).unwrap(), "23%");
    /// assert_eq!(FormatKind::Currency.format(1234.).unwrap(), "$1,234");
    /// ```
    pub fn format(self, value: f64) -> Result<String> {
        if !value.is_finite() {
            return Err(Error::InvalidValue(InvalidValue::NonFinite(value)))
        }
        let s = match self {
            FormatKind::Percent => {
                let pct = (value * 100.).round() + 0.;
                if !pct.is_finite() {
                    return Err(Error::InvalidValue(InvalidValue::NonFinite(pct)))
                }
                format!("{pct}%")
            }
            FormatKind::Currency => {
                // Beyond 2^53 there are no fraction digits left to round.
                let x = if value.abs() < 9.0e15 {
                    (value.abs() * 1000.).round() / 1000.
                } else { value.abs() };
                let sign = if value < 0. && x != 0. { "-" } else { "" };
                format!("{sign}${}", group_thousands(x))
            }
            FormatKind::Plain => format!("{}", value + 0.),
        };
        Ok(s)
    }
}

/// Format `value` according to `kind`.  See [`FormatKind::format`].
#[inline]
pub fn format(value: f64, kind: FormatKind) -> Result<String> {
    kind.format(value)
}

/// Insert `,` every three digits of the integer part of `x ≥ 0`.
fn group_thousands(x: f64) -> String {
    let s = x.to_string();
    let (int, frac) = match s.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (s.as_str(), None),
    };
    let mut out = String::with_capacity(s.len() + int.len() / 3);
    for (i, d) in int.chars().enumerate() {
        if i > 0 && (int.len() - i) % 3 == 0 { out.push(',') }
        out.push(d);
    }
    if let Some(f) = frac {
        out.push('.');
        out.push_str(f);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use FormatKind::*;

    #[test]
    fn percent() {
        assert_eq!(Percent.format(0.23).unwrap(), "23%");
        assert_eq!(Percent.format(0.005).unwrap(), "1%");
        assert_eq!(Percent.format(0.).unwrap(), "0%");
        assert_eq!(Percent.format(1.).unwrap(), "100%");
        assert_eq!(Percent.format(0.4449).unwrap(), "44%");
        assert_eq!(Percent.format(-0.001).unwrap(), "0%");
    }

    #[test]
    fn currency() {
        assert_eq!(Currency.format(1234.).unwrap(), "$1,234");
        assert_eq!(Currency.format(0.).unwrap(), "$0");
        assert_eq!(Currency.format(999.).unwrap(), "$999");
        assert_eq!(Currency.format(1000.).unwrap(), "$1,000");
        assert_eq!(Currency.format(61250.).unwrap(), "$61,250");
        assert_eq!(Currency.format(1234567.5).unwrap(), "$1,234,567.5");
        assert_eq!(Currency.format(12.3456).unwrap(), "$12.346");
        assert_eq!(Currency.format(-1234.).unwrap(), "-$1,234");
    }

    #[test]
    fn plain() {
        assert_eq!(Plain.format(1234.).unwrap(), "1234");
        assert_eq!(Plain.format(0.5).unwrap(), "0.5");
        assert_eq!(Plain.format(-0.).unwrap(), "0");
        assert_eq!(Plain.format(-2.25).unwrap(), "-2.25");
    }

    #[test]
    fn non_finite_is_invalid() {
        for kind in [Percent, Currency, Plain] {
            for x in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
                assert!(matches!(
                    kind.format(x),
                    Err(Error::InvalidValue(InvalidValue::NonFinite(_)))));
            }
        }
    }

    #[test]
    fn serde_names() {
        let k: FormatKind = serde_json::from_str("\"currency\"").unwrap();
        assert_eq!(k, Currency);
        assert_eq!(serde_json::to_string(&Percent).unwrap(), "\"percent\"");
    }
}
