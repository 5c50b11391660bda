use super::support::Support;
use crate::Arbitrary;
use std::cmp::Ordering;
use std::hash::Hash;
use std::hash::Hasher;

/// A float that can key a distribution.
///
/// `f64` is neither `Eq` nor `Hash`, so float observations (birth weights,
/// pregnancy lengths in fractional weeks) are wrapped in `Real`. Equality
/// and hashing go through a canonical bit pattern: `-0.0` equals `0.0`,
/// and every NaN equals every other NaN. Ordering is [`f64::total_cmp`]
/// on the same canonical form, so NaN sorts last.
#[derive(Debug, Clone, Copy, Default)]
pub struct Real(f64);

impl Real {
    pub fn new(x: f64) -> Self {
        Self(x)
    }
    pub fn get(self) -> f64 {
        self.0
    }
    fn canonical(self) -> f64 {
        match self.0 {
            x if x.is_nan() => f64::NAN,
            x if x == 0.0 => 0.0,
            x => x,
        }
    }
}

impl PartialEq for Real {
    fn eq(&self, other: &Self) -> bool {
        self.canonical().to_bits() == other.canonical().to_bits()
    }
}
impl Eq for Real {}

impl Hash for Real {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.canonical().to_bits().hash(state);
    }
}

impl Ord for Real {
    fn cmp(&self, other: &Self) -> Ordering {
        self.canonical().total_cmp(&other.canonical())
    }
}
impl PartialOrd for Real {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl From<f64> for Real {
    fn from(x: f64) -> Self {
        Self(x)
    }
}
impl From<f32> for Real {
    fn from(x: f32) -> Self {
        Self(x as f64)
    }
}
impl From<Real> for f64 {
    fn from(r: Real) -> Self {
        r.0
    }
}

impl Support for Real {
    /// NaN carries no magnitude.
    fn scalar(&self) -> Option<f64> {
        Some(self.0).filter(|x| !x.is_nan())
    }
}

impl Arbitrary for Real {
    fn random() -> Self {
        Self(rand::random::<f64>())
    }
}

impl std::fmt::Display for Real {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(&self.0, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn signed_zeros_collapse() {
        assert_eq!(Real::from(0.0), Real::from(-0.0));
        let set = [Real::from(0.0), Real::from(-0.0)]
            .into_iter()
            .collect::<HashSet<_>>();
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn nans_collapse() {
        let a = Real::from(f64::NAN);
        let b = Real::from(-f64::NAN);
        assert_eq!(a, b);
        assert_eq!(a.scalar(), None);
        assert!(Real::from(f64::INFINITY) < a);
    }

    #[test]
    fn total_order() {
        let mut xs = vec![Real::from(2.5), Real::from(-1.0), Real::from(7.25)];
        xs.sort();
        assert_eq!(xs, vec![Real::from(-1.0), Real::from(2.5), Real::from(7.25)]);
    }

    #[test]
    fn scalar_roundtrips() {
        assert_eq!(Real::from(6.5).scalar(), Some(6.5));
        assert_eq!(f64::from(Real::new(3.0)), 3.0);
    }
}
