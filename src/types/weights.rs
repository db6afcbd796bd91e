//! Objective weights and the normalization that makes them comparable.
//!
//! Cost is counted in currency units, time in minutes and stops in hops.
//! Before the three are blended, each raw edge attribute is divided by a
//! fixed reference scale for that attribute. The scale is chosen once per
//! search and applied to every edge, otherwise composite weights of two
//! edges could not be compared.
//!
//! The default scale is the [`REFERENCE_SCALE`]: a fare of 100, a ride of
//! 60 minutes and 25 stops each count as one unit. On the reference line
//! this makes a single ₹5 hop worth 0.05, a 2.5 minute hop worth ~0.042
//! and one stop worth 0.04, so none of the objectives swamps the others.

use serde::{Deserialize, Serialize};

use crate::edge::Edge;
use crate::error::RouterError;

/// Tolerance used by [`WeightTriple::sums_to_one`].
pub const WEIGHT_SUM_TOLERANCE: f64 = 0.001;

/// Normalization divisors of the reference network.
pub const REFERENCE_SCALE: NormalizationScale = NormalizationScale {
    cost: 100.0,
    time: 60.0,
    stops: 25.0,
};

/// Relative importance of the three objectives.
///
/// Presentation layers normally keep the weights summing to 1.0, but the
/// optimizer accepts any non-negative values and computes whatever
/// composite score they imply. All-zero weights are valid and give every
/// route a score of zero.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawWeights")]
pub struct WeightTriple {
    cost: f64,
    time: f64,
    stops: f64,
}

#[derive(Deserialize)]
struct RawWeights {
    cost: f64,
    time: f64,
    stops: f64,
}

impl TryFrom<RawWeights> for WeightTriple {
    type Error = RouterError;

    fn try_from(raw: RawWeights) -> Result<Self, Self::Error> {
        WeightTriple::new(raw.cost, raw.time, raw.stops)
    }
}

impl WeightTriple {
    /// Creates a weight triple.
    ///
    /// # Errors
    /// [`RouterError::InvalidWeight`] if any weight is negative or not
    /// finite. Negative weights would break the non-negative edge weight
    /// assumption of the search.
    pub fn new(cost: f64, time: f64, stops: f64) -> Result<WeightTriple, RouterError> {
        for (name, value) in [("cost", cost), ("time", time), ("stops", stops)] {
            if !value.is_finite() || value < 0.0 {
                return Err(RouterError::InvalidWeight { name, value });
            }
        }
        Ok(WeightTriple { cost, time, stops })
    }

    pub fn cost(&self) -> f64 {
        self.cost
    }

    pub fn time(&self) -> f64 {
        self.time
    }

    pub fn stops(&self) -> f64 {
        self.stops
    }

    /// Whether the weights sum to 1.0 within [`WEIGHT_SUM_TOLERANCE`].
    ///
    /// This is the check collaborators apply to user input; the optimizer
    /// itself never requires it.
    pub fn sums_to_one(&self) -> bool {
        (self.cost + self.time + self.stops - 1.0).abs() <= WEIGHT_SUM_TOLERANCE
    }

    /// Blends a normalized edge into its composite weight.
    ///
    /// Terms with a zero weight are skipped, so an attribute that
    /// normalizes to infinity cannot turn the blend into `0 * inf = NaN`.
    pub fn composite(&self, normalized: NormalizedEdge) -> f64 {
        [
            (self.cost, normalized.cost),
            (self.time, normalized.time),
            (self.stops, normalized.stops),
        ]
        .into_iter()
        .filter(|(weight, _)| *weight > 0.0)
        .map(|(weight, value)| weight * value)
        .sum()
    }
}

impl WeightTriple {
    /// Cost 0.6, time 0.2, stops 0.2.
    pub const COST_FOCUS: WeightTriple = WeightTriple {
        cost: 0.6,
        time: 0.2,
        stops: 0.2,
    };

    /// Cost 0.2, time 0.6, stops 0.2.
    pub const TIME_FOCUS: WeightTriple = WeightTriple {
        cost: 0.2,
        time: 0.6,
        stops: 0.2,
    };

    /// Cost 0.2, time 0.2, stops 0.6.
    pub const FEWER_STOPS: WeightTriple = WeightTriple {
        cost: 0.2,
        time: 0.2,
        stops: 0.6,
    };
}

impl Default for WeightTriple {
    /// Cost 0.3, time 0.4, stops 0.3.
    fn default() -> Self {
        WeightTriple {
            cost: 0.3,
            time: 0.4,
            stops: 0.3,
        }
    }
}

/// Edge attributes after division by a [`NormalizationScale`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NormalizedEdge {
    pub cost: f64,
    pub time: f64,
    pub stops: f64,
}

/// Reference divisors for each raw edge attribute.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawScale")]
pub struct NormalizationScale {
    cost: f64,
    time: f64,
    stops: f64,
}

#[derive(Deserialize)]
struct RawScale {
    cost: f64,
    time: f64,
    stops: f64,
}

impl TryFrom<RawScale> for NormalizationScale {
    type Error = RouterError;

    fn try_from(raw: RawScale) -> Result<Self, Self::Error> {
        NormalizationScale::new(raw.cost, raw.time, raw.stops)
    }
}

impl NormalizationScale {
    /// Creates a scale from explicit divisors.
    ///
    /// # Errors
    /// [`RouterError::InvalidScale`] unless every divisor is finite and
    /// strictly positive.
    pub fn new(cost: f64, time: f64, stops: f64) -> Result<NormalizationScale, RouterError> {
        for (name, value) in [("cost", cost), ("time", time), ("stops", stops)] {
            if !value.is_finite() || value <= 0.0 {
                return Err(RouterError::InvalidScale { name, value });
            }
        }
        Ok(NormalizationScale { cost, time, stops })
    }

    /// Uses the largest single-edge value of each attribute as its
    /// divisor, so every normalized attribute falls in `[0, 1]`.
    ///
    /// An attribute whose maximum is zero (or an empty edge set) gets a
    /// divisor of 1; all its values are zero anyway.
    pub fn from_edge_maxima<'a>(edges: impl IntoIterator<Item = &'a Edge>) -> NormalizationScale {
        let (cost, time, stops) = edges.into_iter().fold((0.0_f64, 0.0_f64, 0_u32), |acc, e| {
            (acc.0.max(e.cost), acc.1.max(e.time), acc.2.max(e.stops))
        });
        let positive = |v: f64| if v > 0.0 { v } else { 1.0 };
        NormalizationScale {
            cost: positive(cost),
            time: positive(time),
            stops: positive(stops as f64),
        }
    }

    pub fn cost(&self) -> f64 {
        self.cost
    }

    pub fn time(&self) -> f64 {
        self.time
    }

    pub fn stops(&self) -> f64 {
        self.stops
    }

    /// Divides the raw attributes of `edge` by this scale.
    pub fn normalize(&self, edge: &Edge) -> NormalizedEdge {
        NormalizedEdge {
            cost: edge.cost / self.cost,
            time: edge.time / self.time,
            stops: edge.stops as f64 / self.stops,
        }
    }
}

impl Default for NormalizationScale {
    fn default() -> Self {
        REFERENCE_SCALE
    }
}
