use super::pmf::Pmf;
use super::support::Support;
use crate::Error;
use crate::Result;

/// The distribution an observer would see under length-biased sampling.
///
/// When every member of a group is equally likely to be surveyed, a group
/// of size x is reported x times as often as it occurs. Each mass p(x) is
/// scaled by x and the result renormalized to 1.
///
/// Every value must be numeric ([`Error::NonNumericDomain`] otherwise).
/// The scaled masses must all be non-negative with a positive total, else
/// [`Error::DegenerateNormalization`]: all mass sitting on 0, or negative
/// values carrying mass, leave nothing a distribution can be rebuilt from.
pub fn bias<T: Support>(pmf: &Pmf<T>, label: Option<&str>) -> Result<Pmf<T>> {
    let sizes = pmf.scalars()?;
    let mut biased = pmf.copy(label);
    for (x, (size, _)) in pmf.values().zip(sizes) {
        biased.mult(x.clone(), size);
    }
    renormalize(&mut biased)?;
    log::debug!("biased {:?} over {} values", biased.label(), biased.n());
    Ok(biased)
}

/// Recover the underlying distribution from a length-biased one.
///
/// Inverse of [`bias`]: each mass p(x) is scaled by 1/x and the result
/// renormalized to 1. A value of 0 has no reciprocal and is rejected with
/// [`Error::DivisionByZero`] rather than skipped, since a biased sample
/// cannot contain groups of size 0 in the first place.
pub fn unbias<T: Support>(pmf: &Pmf<T>, label: Option<&str>) -> Result<Pmf<T>> {
    let sizes = pmf.scalars()?;
    if let Some((x, _)) = pmf
        .values()
        .zip(sizes.iter())
        .find(|(_, (size, _))| *size == 0.)
    {
        return Err(Error::division_by_zero(x));
    }
    let mut unbiased = pmf.copy(label);
    for (x, (size, _)) in pmf.values().zip(sizes) {
        unbiased.mult(x.clone(), size.recip());
    }
    renormalize(&mut unbiased)?;
    log::debug!("unbiased {:?} over {} values", unbiased.label(), unbiased.n());
    Ok(unbiased)
}

/// rescaled masses must be non-negative with a positive total
/// before they can be normalized back into a distribution.
fn renormalize<T: Support>(pmf: &mut Pmf<T>) -> Result<()> {
    let total = pmf.total();
    if !(total > 0.) || pmf.items().any(|(_, p)| p < 0.) {
        log::debug!("refusing to rescale {:?} with total {}", pmf.label(), total);
        return Err(Error::DegenerateNormalization { total });
    }
    pmf.normalize().map(|_| ())
}

impl<T: Support> Pmf<T> {
    /// see [`bias`]
    pub fn biased(&self, label: Option<&str>) -> Result<Self> {
        bias(self, label)
    }
    /// see [`unbias`]
    pub fn unbiased(&self, label: Option<&str>) -> Result<Self> {
        unbias(self, label)
    }
}
