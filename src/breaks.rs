//! Natural breaks: optimal partition of a series into contiguous classes.
//!
//! The sorted series is split into `k` groups minimizing the sum, over
//! groups, of squared deviations from the group mean.  The optimum is
//! computed exactly by dynamic programming.  Let `D[q][j]` be the least
//! cost of splitting the first `j` values into `q + 1` groups; then
//! `D[q][j] = min_{i < j} D[q-1][i] + SSD(i, j)` where `SSD(i, j)` is
//! obtained in constant time from prefix sums.  The optimal `i` is
//! non-decreasing in `j`, so each row is filled by divide and conquer
//! in O(m log m) instead of O(m²).
//!
//! Equal values never end up in different groups: the program runs on
//! the distinct values, each weighted by its multiplicity.

use serde::Serialize;
use tracing::{debug, warn};

use crate::color::{hex, Color};
use crate::error::{Error, Result};

/// A class: the values in `[min, max]` are drawn with `color`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Bin {
    pub min: f64,
    pub max: f64,
    /// Smallest value of the series in this class.  It is `min` for
    /// the first class and lies above `min` for the others.
    pub lower: f64,
    #[serde(with = "hex")]
    pub color: Color,
    /// Number of values of the series that fall in this class.
    pub count: usize,
}

impl Bin {
    /// Whether `value` lies in `[min, max]`.
    #[inline]
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

/// The classes computed for a series.
///
/// Adjacent bins share their boundary: `bins[i].max == bins[i+1].min`,
/// so together they cover the whole range of the series.  There may be
/// fewer bins than requested, see [`Breaks::is_reduced`].
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Breaks {
    bins: Vec<Bin>,
    requested: usize,
    excluded: usize,
    within_ssd: f64,
    total_ssd: f64,
    gvf: f64,
}

impl Breaks {
    /// The classes, in ascending order of values.
    pub fn bins(&self) -> &[Bin] { &self.bins }

    /// Number of classes actually produced.
    pub fn len(&self) -> usize { self.bins.len() }

    /// Always `false`: a successful computation yields one class at least.
    pub fn is_empty(&self) -> bool { self.bins.is_empty() }

    /// Number of classes that was asked for.
    pub fn requested(&self) -> usize { self.requested }

    /// `true` when the series had fewer distinct values than the
    /// requested number of classes.
    pub fn is_reduced(&self) -> bool { self.bins.len() < self.requested }

    /// Number of non-finite values left out of the computation.
    pub fn excluded(&self) -> usize { self.excluded }

    /// Sum over classes of the squared deviations from the class mean.
    /// May be infinite for series whose spread exceeds `1e154`.
    pub fn within_ssd(&self) -> f64 { self.within_ssd }

    /// Squared deviations of the whole series from its mean.
    pub fn total_ssd(&self) -> f64 { self.total_ssd }

    /// Goodness of variance fit, `1 - within / total`, in \[0, 1\].
    /// A constant series fits perfectly.
    pub fn goodness_of_variance_fit(&self) -> f64 { self.gvf }
}

/// Compute at most `k` natural-breaks classes over `values`, the
/// `i`-th class being colored with `palette[i]`.
///
/// Non-finite values are ignored (and counted in
/// [`Breaks::excluded`]).  When the series has fewer than `k`
/// distinct values, one class per distinct value is returned.
///
/// # Example
///
/// ```
/// use rgb::RGB8;
/// use choropleth_brewery::compute_bins;
/// let palette = [RGB8::new(1, 1, 1), RGB8::new(2, 2, 2), RGB8::new(3, 3, 3)];
/// let breaks = compute_bins(&[10., 12., 11., 50., 52., 90.], 3, &palette)
///     .unwrap();
/// assert_eq!(breaks.len(), 3);
/// assert_eq!(breaks.bins()[0].max, 12.);
/// ```
pub fn compute_bins(values: &[f64], k: usize, palette: &[Color])
                    -> Result<Breaks> {
    if k == 0 { return Err(Error::InvalidClassCount) }
    if palette.len() < k {
        return Err(Error::PaletteTooShort { needed: k,
                                            available: palette.len() })
    }
    let mut sorted: Vec<f64> =
        values.iter().copied().filter(|x| x.is_finite()).collect();
    let excluded = values.len() - sorted.len();
    if excluded > 0 {
        warn!(excluded, "non-finite values left out of the classification");
    }
    if sorted.is_empty() { return Err(Error::EmptySeries) }
    sorted.sort_by(f64::total_cmp);

    let runs = distinct(&sorted);
    let k_eff = k.min(runs.len());
    if k_eff < k {
        debug!(requested = k, distinct = runs.len(),
               "fewer distinct values than classes");
    }
    let sums = PrefixSums::new(&runs);
    let groups = optimal_partition(&sums, k_eff);

    let mut bins = Vec::with_capacity(k_eff);
    let mut within = 0.;
    for (g, &(i, j)) in groups.iter().enumerate() {
        let lower = runs[i].0;
        let min = match bins.last() {
            Some(&Bin { max, .. }) => max,
            None => lower,
        };
        bins.push(Bin { min, max: runs[j - 1].0, lower, color: palette[g],
                        count: runs[i .. j].iter().map(|r| r.1).sum() });
        within += sums.ssd(i, j);
    }
    let total = sums.ssd(0, runs.len());
    let gvf = if total > 0. { (1. - within / total).clamp(0., 1.) } else { 1. };
    let unit2 = sums.unit * sums.unit;
    let breaks = Breaks { bins, requested: k, excluded,
                          within_ssd: within * unit2, total_ssd: total * unit2,
                          gvf };
    debug!(classes = breaks.len(), gvf = breaks.goodness_of_variance_fit(),
           "natural breaks computed");
    Ok(breaks)
}

/// Distinct values of a sorted slice with their multiplicities.
fn distinct(sorted: &[f64]) -> Vec<(f64, usize)> {
    let mut runs: Vec<(f64, usize)> = Vec::new();
    for &x in sorted {
        match runs.last_mut() {
            Some((y, n)) if *y == x => *n += 1,
            _ => runs.push((x, 1)),
        }
    }
    runs
}

/// Weighted prefix sums of the distinct values, shifted by the median
/// to limit cancellation in `SS - S²/W` and divided by `unit`, the
/// largest distance to the median, so that squares cannot overflow.
struct PrefixSums {
    w: Vec<f64>,
    s: Vec<f64>,
    ss: Vec<f64>,
    unit: f64,
}

impl PrefixSums {
    fn new(runs: &[(f64, usize)]) -> Self {
        let shift = runs[runs.len() / 2].0;
        let spread = |h: f64| runs.iter()
            .map(|&(x, _)| (h * x - h * shift).abs())
            .fold(0., f64::max);
        // Halve before subtracting when `x - shift` itself overflows.
        let mut half = 1.;
        let mut scale = spread(half);
        if !scale.is_finite() {
            half = 0.5;
            scale = spread(half);
        }
        if scale == 0. { scale = 1. }
        let n = runs.len() + 1;
        let (mut w, mut s, mut ss) =
            (Vec::with_capacity(n), Vec::with_capacity(n),
             Vec::with_capacity(n));
        w.push(0.);  s.push(0.);  ss.push(0.);
        for (i, &(x, count)) in runs.iter().enumerate() {
            let c = count as f64;
            let d = (half * x - half * shift) / scale;
            w.push(w[i] + c);
            s.push(s[i] + c * d);
            ss.push(ss[i] + c * d * d);
        }
        PrefixSums { w, s, ss, unit: scale / half }
    }

    /// Sum of squared deviations from their mean of the runs `i .. j`
    /// (requires `i < j`), in units of `unit²`.
    #[inline]
    fn ssd(&self, i: usize, j: usize) -> f64 {
        let w = self.w[j] - self.w[i];
        let s = self.s[j] - self.s[i];
        (self.ss[j] - self.ss[i] - s * s / w).max(0.)
    }
}

/// Split the `m` runs into `k ≤ m` non-empty contiguous groups of
/// least total SSD.  Returns the groups as half-open ranges `(i, j)`.
fn optimal_partition(sums: &PrefixSums, k: usize) -> Vec<(usize, usize)> {
    let m = sums.w.len() - 1;
    // cost[j]: best cost of the first `j` runs in `q + 1` groups.
    let mut cost: Vec<f64> = (0 ..= m)
        .map(|j| if j == 0 { f64::INFINITY } else { sums.ssd(0, j) })
        .collect();
    // split[q][j]: start of the last group in the optimum for `cost[j]`.
    let mut split = vec![vec![0; m + 1]; k];
    for q in 1 .. k {
        let mut next = vec![f64::INFINITY; m + 1];
        fill_row(sums, q, q + 1, m, q, m - 1, &cost, &mut next,
                 &mut split[q]);
        cost = next;
    }
    let mut groups = Vec::with_capacity(k);
    let mut j = m;
    for q in (0 .. k).rev() {
        let i = split[q][j];
        groups.push((i, j));
        j = i;
    }
    debug_assert_eq!(j, 0);
    groups.reverse();
    groups
}

/// Compute `cur[j]` for `j` in `lo ..= hi` knowing that the optimal
/// split lies in `split_lo ..= split_hi`.
#[allow(clippy::too_many_arguments)]
fn fill_row(sums: &PrefixSums, q: usize, lo: usize, hi: usize,
            split_lo: usize, split_hi: usize,
            prev: &[f64], cur: &mut [f64], split: &mut [usize]) {
    if lo > hi { return }
    let j = (lo + hi) / 2;
    let (mut best, mut arg) = (f64::INFINITY, split_lo.max(q));
    for i in split_lo.max(q) ..= split_hi.min(j - 1) {
        let c = prev[i] + sums.ssd(i, j);
        if c < best {
            best = c;
            arg = i;
        }
    }
    cur[j] = best;
    split[j] = arg;
    if j > lo { fill_row(sums, q, lo, j - 1, split_lo, arg, prev, cur, split) }
    fill_row(sums, q, j + 1, hi, arg, split_hi, prev, cur, split);
}
