//! Normative reference curves and percentile placement.
//!
//! One table per (metric, sex) pair for head circumference and one
//! sex-independent table for cephalic index, all behind a single
//! [`ReferenceCurveTable`]. Rows are interpolated linearly between the two
//! breakpoints that straddle the requested age; ages outside the table clamp
//! to the nearest boundary row and are reported as [`OutOfRangeAge`].
//!
//! Percentile placement is a coarse three-segment scheme, not a Gaussian fit:
//! below the lower bound the rank is scaled down from the bound toward 0,
//! between the bounds it is interpolated between the known percentile
//! columns, and above the upper bound it is scaled up toward 100.

mod data;
pub mod report;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Biological sex, used to select the head-circumference table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    #[serde(alias = "m", alias = "M", alias = "masculino")]
    Male,
    #[serde(alias = "f", alias = "F", alias = "feminino")]
    Female,
}

impl FromStr for Sex {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "m" | "male" | "masculino" => Ok(Self::Male),
            "f" | "female" | "feminino" => Ok(Self::Female),
            other => Err(format!("unknown sex `{other}` (expected m or f)")),
        }
    }
}

/// Which normative curve to consult.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    HeadCircumference,
    CephalicIndex,
}

impl Metric {
    /// Percentile rank of each table column.
    pub fn ranks(self) -> [f64; 5] {
        match self {
            Self::HeadCircumference => [3.0, 15.0, 50.0, 85.0, 97.0],
            Self::CephalicIndex => [3.0, 10.0, 50.0, 90.0, 97.0],
        }
    }

    /// Column indices of the lower and upper normal bounds
    /// (p3/p97 for head circumference, p10/p90 for cephalic index).
    fn bounds(self) -> (usize, usize) {
        match self {
            Self::HeadCircumference => (0, 4),
            Self::CephalicIndex => (1, 3),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::HeadCircumference => "Head circumference (mm)",
            Self::CephalicIndex => "Cephalic index",
        }
    }
}

impl FromStr for Metric {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "head-circumference" | "hc" => Ok(Self::HeadCircumference),
            "cephalic-index" | "ci" => Ok(Self::CephalicIndex),
            other => Err(format!("unknown metric `{other}`")),
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One row of a normative table: the five percentile columns at an age.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Breakpoint {
    age_months: f64,
    values: [f64; 5],
}

/// Age fell outside the table and was clamped to the nearest boundary row.
/// Not an error; the evaluation proceeds on the clamped row.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct OutOfRangeAge {
    pub metric: Metric,
    pub requested_months: f64,
    pub used_months: f64,
}

impl fmt::Display for OutOfRangeAge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: age {:.1} months is outside the reference table, using {:.0} months",
            self.metric, self.requested_months, self.used_months
        )
    }
}

/// Interpolated percentile values at one age.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CurvePoint {
    pub metric: Metric,
    pub age_months: f64,
    pub ranks: [f64; 5],
    pub values: [f64; 5],
    #[serde(skip_serializing_if = "Option::is_none")]
    pub out_of_range: Option<OutOfRangeAge>,
}

impl CurvePoint {
    pub fn p50(&self) -> f64 {
        self.values[2]
    }

    /// Lower normal bound value (p3 or p10).
    pub fn lower_bound(&self) -> f64 {
        self.values[self.metric.bounds().0]
    }

    /// Upper normal bound value (p97 or p90).
    pub fn upper_bound(&self) -> f64 {
        self.values[self.metric.bounds().1]
    }
}

/// Placement of an observed value relative to the normal bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Placement {
    Below,
    Normal,
    Above,
}

impl Placement {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Below => "below",
            Self::Normal => "normal",
            Self::Above => "above",
        }
    }
}

impl fmt::Display for Placement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PercentileEvaluation {
    pub classification: Placement,
    /// Approximate rank on a 0–100 scale.
    pub approximate_percentile: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub out_of_range: Option<OutOfRangeAge>,
}

/// All normative curves, immutable for the life of the process.
pub struct ReferenceCurveTable {
    head_circumference_male: &'static [Breakpoint],
    head_circumference_female: &'static [Breakpoint],
    cephalic_index: &'static [Breakpoint],
}

static STANDARD: ReferenceCurveTable = ReferenceCurveTable {
    head_circumference_male: data::HEAD_CIRCUMFERENCE_MALE,
    head_circumference_female: data::HEAD_CIRCUMFERENCE_FEMALE,
    cephalic_index: data::CEPHALIC_INDEX,
};

impl ReferenceCurveTable {
    /// The built-in normative tables.
    pub fn standard() -> &'static Self {
        &STANDARD
    }

    /// Head circumference needs a sex; cephalic index ignores it.
    fn curve(&self, metric: Metric, sex: Option<Sex>) -> Option<&'static [Breakpoint]> {
        match (metric, sex) {
            (Metric::HeadCircumference, Some(Sex::Male)) => Some(self.head_circumference_male),
            (Metric::HeadCircumference, Some(Sex::Female)) => Some(self.head_circumference_female),
            (Metric::HeadCircumference, None) => None,
            (Metric::CephalicIndex, _) => Some(self.cephalic_index),
        }
    }

    /// Covered age range in months, if a curve exists for this combination.
    pub fn range(&self, metric: Metric, sex: Option<Sex>) -> Option<(f64, f64)> {
        let curve = self.curve(metric, sex)?;
        Some((curve.first()?.age_months, curve.last()?.age_months))
    }

    /// Interpolated percentile values at `age_months`.
    /// Returns `None` only for head circumference without a sex.
    pub fn lookup(&self, metric: Metric, sex: Option<Sex>, age_months: f64) -> Option<CurvePoint> {
        let curve = self.curve(metric, sex)?;
        let (first, last) = (curve.first()?, curve.last()?);

        let clamp = |row: &Breakpoint| {
            let warning = OutOfRangeAge {
                metric,
                requested_months: age_months,
                used_months: row.age_months,
            };
            log::warn!("{warning}");
            CurvePoint {
                metric,
                age_months: row.age_months,
                ranks: metric.ranks(),
                values: row.values,
                out_of_range: Some(warning),
            }
        };

        if age_months < first.age_months {
            return Some(clamp(first));
        }
        if age_months > last.age_months {
            return Some(clamp(last));
        }

        let values = curve
            .windows(2)
            .find(|w| age_months <= w[1].age_months)
            .map(|w| interpolate_row(&w[0], &w[1], age_months))
            .unwrap_or(last.values);

        Some(CurvePoint {
            metric,
            age_months,
            ranks: metric.ranks(),
            values,
            out_of_range: None,
        })
    }

    /// Place `observed` against the curve at `age_months`.
    pub fn evaluate(
        &self,
        metric: Metric,
        sex: Option<Sex>,
        age_months: f64,
        observed: f64,
    ) -> Option<PercentileEvaluation> {
        let point = self.lookup(metric, sex, age_months)?;
        Some(PercentileEvaluation {
            classification: placement(&point, observed),
            approximate_percentile: approximate_percentile(&point, observed),
            out_of_range: point.out_of_range,
        })
    }
}

fn interpolate_row(lo: &Breakpoint, hi: &Breakpoint, age_months: f64) -> [f64; 5] {
    let span = hi.age_months - lo.age_months;
    if span <= 0.0 {
        return lo.values;
    }
    let frac = (age_months - lo.age_months) / span;
    let mut out = [0.0; 5];
    for (i, v) in out.iter_mut().enumerate() {
        *v = lo.values[i] + frac * (hi.values[i] - lo.values[i]);
    }
    out
}

fn placement(point: &CurvePoint, observed: f64) -> Placement {
    if observed < point.lower_bound() {
        Placement::Below
    } else if observed > point.upper_bound() {
        Placement::Above
    } else {
        Placement::Normal
    }
}

/// Three-segment approximate rank. Outside the bounds the distance is measured
/// in units of the bound-to-median spread and saturates at 0 / 100.
fn approximate_percentile(point: &CurvePoint, observed: f64) -> f64 {
    let (lo_col, hi_col) = point.metric.bounds();
    let (lo_rank, hi_rank) = (point.ranks[lo_col], point.ranks[hi_col]);
    let (lower, upper, p50) = (point.lower_bound(), point.upper_bound(), point.p50());

    if observed < lower {
        let spread = p50 - lower;
        if spread <= 0.0 {
            return 0.0;
        }
        let frac = (1.0 - (lower - observed) / spread).clamp(0.0, 1.0);
        return lo_rank * frac;
    }
    if observed > upper {
        let spread = upper - p50;
        if spread <= 0.0 {
            return 100.0;
        }
        let frac = ((observed - upper) / spread).clamp(0.0, 1.0);
        return hi_rank + (100.0 - hi_rank) * frac;
    }

    let knots: Vec<(f64, f64)> = (lo_col..=hi_col)
        .map(|i| (point.values[i], point.ranks[i]))
        .collect();
    piecewise(observed, &knots)
}

/// Linear interpolation over `(input, output)` knots sorted by input,
/// clamped at both ends.
fn piecewise(value: f64, knots: &[(f64, f64)]) -> f64 {
    debug_assert!(
        knots.windows(2).all(|w| w[0].0 <= w[1].0),
        "knots must be sorted by input in ascending order"
    );
    let Some(&(first_in, first_out)) = knots.first() else {
        return 0.0;
    };
    if value <= first_in {
        return first_out;
    }
    for w in knots.windows(2) {
        let ((x0, y0), (x1, y1)) = (w[0], w[1]);
        if value <= x1 {
            if x1 <= x0 {
                return y1;
            }
            return y0 + (value - x0) / (x1 - x0) * (y1 - y0);
        }
    }
    knots.last().map_or(first_out, |k| k.1)
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
