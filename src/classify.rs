use crate::breaks::Bin;
use crate::color::Color;
use crate::error::{Error, InvalidValue, Result};

/// The class a value belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Class {
    /// Position of the bin in ascending order.
    pub index: usize,
    pub color: Color,
}

/// Return the first of `bins` whose closed range contains `value`.
///
/// A value on the boundary shared by two adjacent bins thus goes to
/// the lower one.  Fails with [`Error::InvalidValue`] if `value` is
/// not finite and with [`Error::Unclassified`] if no bin contains it;
/// callers then draw the feature with [`UNCLASSIFIED`][crate::UNCLASSIFIED].
pub fn classify(value: f64, bins: &[Bin]) -> Result<Class> {
    if !value.is_finite() {
        return Err(InvalidValue::NonFinite(value).into())
    }
    bins.iter()
        .position(|b| b.contains(value))
        .map(|index| Class { index, color: bins[index].color })
        .ok_or(Error::Unclassified(value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rgb::RGB8;

    fn bins() -> Vec<Bin> {
        let c = |i| RGB8::new(i, i, i);
        vec![Bin { min: 10., max: 12., lower: 10., color: c(1), count: 3 },
             Bin { min: 12., max: 52., lower: 50., color: c(2), count: 2 },
             Bin { min: 52., max: 90., lower: 90., color: c(3), count: 1 }]
    }

    #[test]
    fn inside() {
        let b = bins();
        assert_eq!(classify(11., &b).unwrap().index, 0);
        assert_eq!(classify(50., &b).unwrap().index, 1);
        assert_eq!(classify(90., &b).unwrap(),
                   Class { index: 2, color: RGB8::new(3, 3, 3) });
    }

    #[test]
    fn shared_boundary_goes_to_lower_bin() {
        let b = bins();
        assert_eq!(classify(12., &b).unwrap().index, 0);
        assert_eq!(classify(52., &b).unwrap().index, 1);
        assert_eq!(classify(10., &b).unwrap().index, 0);
    }

    #[test]
    fn outside_or_invalid() {
        let b = bins();
        assert!(matches!(classify(9.99, &b), Err(Error::Unclassified(_))));
        assert!(matches!(classify(90.5, &b), Err(Error::Unclassified(_))));
        assert!(matches!(classify(1., &[]), Err(Error::Unclassified(_))));
        assert!(matches!(classify(f64::NAN, &b),
                         Err(Error::InvalidValue(InvalidValue::NonFinite(_)))));
    }
}
