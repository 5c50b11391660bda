use super::support::Support;
use crate::Probability;
use std::collections::BTreeMap;

/// A read-only discrete distribution.
///
/// This is the surface handed to reporting and plotting code: it can ask
/// for the mass at a point and walk the support, but it cannot mutate
/// anything.
///
/// # Implementations
///
/// - [`Histogram`](crate::Histogram) — count divided by total count
/// - [`Pmf`](crate::Pmf) — stored mass, normalized or not
/// - `BTreeMap<T, Probability>` — sorted association, O(log n) lookup
pub trait Density {
    /// The type of values in the distribution's support.
    type Support: Support;
    /// Returns the mass at point `x`, or 0 if not in support.
    fn density(&self, x: &Self::Support) -> Probability;
    /// Iterates over every value present in the distribution.
    fn support(&self) -> impl Iterator<Item = &Self::Support>;
    /// Owned (value, mass) pairs in support order.
    fn points(&self) -> Vec<(Self::Support, Probability)> {
        self.support()
            .map(|x| (x.clone(), self.density(x)))
            .collect()
    }
}

impl<T> Density for BTreeMap<T, Probability>
where
    T: Ord + Support,
{
    type Support = T;
    fn density(&self, x: &Self::Support) -> Probability {
        self.get(x).copied().unwrap_or(0.)
    }
    fn support(&self) -> impl Iterator<Item = &Self::Support> {
        self.keys()
    }
}
