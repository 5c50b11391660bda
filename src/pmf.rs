use super::density::Density;
use super::histogram::Histogram;
use super::support::Support;
use super::tally::Tally;
use crate::Arbitrary;
use crate::Error;
use crate::Frequency;
use crate::Probability;
use crate::Result;
use rand::Rng;

/// A probability mass function over discrete values.
///
/// Built from raw observations or pre-aggregated counts, a `Pmf` starts out
/// normalized: each value's mass is its count divided by the total count.
/// After that it is a mutable container. [`incr`](Pmf::incr) and
/// [`mult`](Pmf::mult) change individual masses and leave the total
/// wherever it lands; [`normalize`](Pmf::normalize) is the only operation
/// that restores a unit total, and it must be called explicitly.
///
/// Queries ([`prob`](Pmf::prob), [`total`](Pmf::total), [`mean`](Pmf::mean),
/// indexing) never mutate. Values enumerate in order of first insertion.
///
/// # Numeric Operations
///
/// [`mean`](Pmf::mean), [`var`](Pmf::var), and the bias transforms need
/// values with a numeric interpretation (see [`Support::scalar`]). On a
/// categorical key they fail with [`Error::NonNumericDomain`] before
/// touching any mass.
#[derive(Debug, Clone, PartialEq)]
pub struct Pmf<T: Support> {
    label: Option<String>,
    masses: Tally<T>,
}

impl<T: Support> Default for Pmf<T> {
    fn default() -> Self {
        Self {
            label: None,
            masses: Tally::default(),
        }
    }
}

impl<T: Support> Pmf<T> {
    /// relative frequency of each raw observation.
    /// an empty sequence yields an empty distribution.
    pub fn from_values<I>(values: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        Self::from(&Histogram::from_values(values))
    }
    /// relative frequency of pre-aggregated counts.
    pub fn from_counts<I>(counts: I) -> Result<Self>
    where
        I: IntoIterator<Item = (T, Frequency)>,
    {
        Histogram::from_counts(counts).map(|ref hist| Self::from(hist))
    }
    /// attach a display label.
    pub fn labeled(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// the mass of a given value. returns 0 if the value is absent.
    pub fn prob(&self, x: &T) -> Probability {
        self.masses.get(x)
    }
    /// sum of all masses. generally not 1 after incr or mult.
    pub fn total(&self) -> Probability {
        self.masses.sum()
    }
    pub fn is_normalized(&self) -> bool {
        (self.total() - 1.).abs() < crate::TOLERANCE
    }
    /// (value, mass) pairs in insertion order.
    /// each call starts a fresh traversal.
    pub fn items(&self) -> impl Iterator<Item = (&T, Probability)> + '_ {
        self.masses.iter()
    }
    /// all values in insertion order
    pub fn values(&self) -> impl Iterator<Item = &T> + '_ {
        self.masses.keys()
    }
    /// size of the support
    pub fn n(&self) -> usize {
        self.masses.len()
    }
    pub fn is_empty(&self) -> bool {
        self.n() == 0
    }
    /// independent copy, optionally relabeled.
    pub fn copy(&self, label: Option<&str>) -> Self {
        let mut copy = self.clone();
        if let Some(label) = label {
            copy.label = Some(label.to_owned());
        }
        copy
    }

    /// add amount (possibly negative) to the mass of x,
    /// inserting x if absent.
    /// does not renormalize: call normalize afterwards.
    pub fn incr(&mut self, x: T, amount: Probability) {
        *self.masses.slot(x) += amount;
    }
    /// add one unit of mass to x. see incr.
    pub fn incr_one(&mut self, x: T) {
        self.incr(x, 1.);
    }
    /// scale the mass of x by factor.
    /// an absent x enters the support with mass 0.
    /// does not renormalize: call normalize afterwards.
    pub fn mult(&mut self, x: T, factor: Probability) {
        *self.masses.slot(x) *= factor;
    }
    /// rescale every mass so the total is 1.
    /// returns the total before rescaling.
    pub fn normalize(&mut self) -> Result<Probability> {
        self.normalize_to(1.)
    }
    /// rescale every mass so the total is fraction.
    /// returns the total before rescaling.
    /// a zero (or non-finite) total cannot be rescaled.
    pub fn normalize_to(&mut self, fraction: Probability) -> Result<Probability> {
        let total = self.total();
        if total == 0. || !total.is_finite() {
            log::debug!("refusing to normalize {:?} with total {}", self.label, total);
            return Err(Error::DegenerateNormalization { total });
        }
        let factor = fraction / total;
        self.masses.weights_mut().for_each(|p| *p *= factor);
        Ok(total)
    }

    /// Σ x · p(x)
    pub fn mean(&self) -> Result<f64> {
        self.scalars()
            .map(|xps| xps.into_iter().map(|(x, p)| x * p).sum())
    }
    /// Σ p(x) · (x − μ)²
    pub fn var(&self) -> Result<f64> {
        let mu = self.mean()?;
        self.scalars()
            .map(|xps| xps.into_iter().map(|(x, p)| p * (x - mu).powi(2)).sum())
    }
    pub fn std(&self) -> Result<f64> {
        self.var().map(f64::sqrt)
    }

    /// draw a value with chance proportional to its mass.
    /// None if there is no positive mass to draw from.
    pub fn sample<R: Rng>(&self, rng: &mut R) -> Option<T> {
        let total = self.items().map(|(_, p)| p.max(0.)).sum::<Probability>();
        if !(total > 0.) {
            return None;
        }
        let target = rng.random::<Probability>() * total;
        let mut acc = 0.;
        let mut last = None;
        for (x, p) in self.items().filter(|(_, p)| *p > 0.) {
            acc += p;
            last = Some(x);
            if target < acc {
                return Some(x.clone());
            }
        }
        last.cloned()
    }
    /// n independent draws.
    pub fn samples<R: Rng>(&self, n: usize, rng: &mut R) -> Vec<T> {
        (0..n).filter_map(|_| self.sample(rng)).collect()
    }

    /// every (scalar value, mass) pair, or the first categorical value.
    pub(crate) fn scalars(&self) -> Result<Vec<(f64, Probability)>> {
        self.items()
            .map(|(x, p)| x.scalar().map(|s| (s, p)).ok_or_else(|| Error::non_numeric(x)))
            .collect()
    }
}

impl<T: Support + Ord> Pmf<T> {
    /// maximum likelihood value. ties go to the largest value.
    pub fn mode(&self) -> Option<&T> {
        self.items()
            .max_by(|(a, p), (b, q)| p.total_cmp(q).then_with(|| a.cmp(b)))
            .map(|(x, _)| x)
    }
    /// (value, mass) pairs sorted by value.
    pub fn render(&self) -> Vec<(T, Probability)> {
        let mut items = self
            .items()
            .map(|(x, p)| (x.clone(), p))
            .collect::<Vec<_>>();
        items.sort_by(|(a, _), (b, _)| a.cmp(b));
        items
    }
    /// the smallest value whose cumulative mass reaches p percent.
    /// None if the distribution never gets there.
    pub fn percentile(&self, p: f64) -> Option<T> {
        let target = p / 100.;
        let mut acc = 0.;
        self.render().into_iter().find_map(|(x, mass)| {
            acc += mass;
            (acc >= target).then_some(x)
        })
    }
}

impl<T: Support> From<&Histogram<T>> for Pmf<T> {
    fn from(hist: &Histogram<T>) -> Self {
        let total = hist.total();
        let mut pmf = Self {
            label: hist.label().map(str::to_owned),
            masses: Tally::default(),
        };
        if !(total > 0.) {
            return pmf;
        }
        for (x, count) in hist.items() {
            *pmf.masses.slot(x.clone()) = count / total;
        }
        pmf
    }
}

impl<T: Support> From<Histogram<T>> for Pmf<T> {
    fn from(hist: Histogram<T>) -> Self {
        Self::from(&hist)
    }
}

impl<T: Support> FromIterator<T> for Pmf<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_values(iter)
    }
}

/// Same contract as [`Pmf::prob`]: absent values index to 0.
impl<T: Support> std::ops::Index<&T> for Pmf<T> {
    type Output = Probability;
    fn index(&self, x: &T) -> &Self::Output {
        const ZERO: &Probability = &0.;
        self.masses.lookup(x).unwrap_or(ZERO)
    }
}

impl<T: Support> Density for Pmf<T> {
    type Support = T;
    fn density(&self, x: &Self::Support) -> Probability {
        self.prob(x)
    }
    fn support(&self) -> impl Iterator<Item = &Self::Support> {
        self.values()
    }
}

impl Arbitrary for Pmf<usize> {
    fn random() -> Self {
        Self::from(Histogram::random())
    }
}
