use super::density::Density;
use super::support::Support;
use super::tally::Tally;
use crate::Arbitrary;
use crate::Error;
use crate::Frequency;
use crate::Probability;
use crate::Result;

/// A frequency table over observed values.
///
/// The weight of a value is the number of times it was observed.
/// The sum of the weights is the total number of observations.
/// Values enumerate in order of first occurrence.
///
/// Histograms are immutable once built. To derive a probability
/// distribution, convert into a [`Pmf`](crate::Pmf).
#[derive(Debug, Clone, PartialEq)]
pub struct Histogram<T: Support> {
    label: Option<String>,
    counts: Tally<T>,
}

impl<T: Support> Default for Histogram<T> {
    fn default() -> Self {
        Self {
            label: None,
            counts: Tally::default(),
        }
    }
}

impl<T: Support> Histogram<T> {
    /// count each raw observation once.
    pub fn from_values<I>(values: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let hist = values
            .into_iter()
            .fold(Self::default(), Self::increment);
        log::trace!("histogram over {} values, {} observations", hist.n(), hist.total());
        hist
    }
    /// copy pre-aggregated counts. duplicate values accumulate.
    /// every count must be finite and non-negative.
    pub fn from_counts<I>(counts: I) -> Result<Self>
    where
        I: IntoIterator<Item = (T, Frequency)>,
    {
        let mut hist = Self::default();
        for (x, count) in counts {
            if !count.is_finite() || count < 0. {
                return Err(Error::invalid_frequency(&x, count));
            }
            *hist.counts.slot(x) += count;
        }
        Ok(hist)
    }
    /// attach a display label.
    pub fn labeled(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// the count of a given value. returns 0 if the value was never witnessed.
    pub fn freq(&self, x: &T) -> Frequency {
        self.counts.get(x)
    }
    /// sum of all counts
    pub fn total(&self) -> Frequency {
        self.counts.sum()
    }
    /// (value, count) pairs in order of first occurrence.
    /// each call starts a fresh traversal.
    pub fn items(&self) -> impl Iterator<Item = (&T, Frequency)> + '_ {
        self.counts.iter()
    }
    /// all witnessed values in order of first occurrence
    pub fn values(&self) -> impl Iterator<Item = &T> + '_ {
        self.counts.keys()
    }
    /// size of the support
    pub fn n(&self) -> usize {
        self.counts.len()
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


    fn increment(mut self, x: T) -> Self {
        *self.counts.slot(x) += 1.;
        self
    }
}

impl<T: Support + Ord> Histogram<T> {
    /// most frequent value. ties go to the largest value.
    pub fn mode(&self) -> Option<&T> {
        self.items()
            .max_by(|(a, f), (b, g)| f.total_cmp(g).then_with(|| a.cmp(b)))
            .map(|(x, _)| x)
    }
    /// the n greatest values with their counts, greatest first.
    pub fn largest(&self, n: usize) -> Vec<(T, Frequency)> {
        let mut sorted = self.sorted();
        sorted.reverse();
        sorted.truncate(n);
        sorted
    }
    /// the n least values with their counts, least first.
    pub fn smallest(&self, n: usize) -> Vec<(T, Frequency)> {
        let mut sorted = self.sorted();
        sorted.truncate(n);
        sorted
    }
    fn sorted(&self) -> Vec<(T, Frequency)> {
        let mut items = self
            .items()
            .map(|(x, f)| (x.clone(), f))
            .collect::<Vec<_>>();
        items.sort_by(|(a, _), (b, _)| a.cmp(b));
        items
    }
}

impl<T: Support> FromIterator<T> for Histogram<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_values(iter)
    }
}

impl<T: Support> Density for Histogram<T> {
    type Support = T;
    fn density(&self, x: &Self::Support) -> Probability {
        match self.total() {
            total if total > 0. => self.freq(x) / total,
            _ => 0.,
        }
    }
    fn support(&self) -> impl Iterator<Item = &Self::Support> {
        self.values()
    }
}

impl Arbitrary for Histogram<usize> {
    fn random() -> Self {
        (0..crate::ARBITRARY_SAMPLES)
            .map(|_| rand::random_range(0..crate::ARBITRARY_SUPPORT))
            .collect()
    }
}
