//! Class Size Paradox
//!
//! Walks through length-biased sampling on the class-size example:
//! the dean's distribution, the one students report, and its recovery.

use empirical::Density;
use empirical::Pmf;

fn main() -> anyhow::Result<()> {
    empirical::log();
    let actual = Pmf::from_counts([
        (7u32, 8.),
        (12, 8.),
        (17, 14.),
        (22, 4.),
        (27, 6.),
        (32, 12.),
        (37, 8.),
        (42, 3.),
        (47, 2.),
    ])?
    .labeled("actual");
    let observed = actual.biased(Some("observed"))?;
    let unbiased = observed.unbiased(Some("unbiased"))?;
    for pmf in [&actual, &observed, &unbiased] {
        log::info!(
            "{:<9} mean {:>6.2}  std {:>6.2}",
            pmf.label().unwrap_or_default(),
            pmf.mean()?,
            pmf.std()?,
        );
    }
    for (size, p) in actual.points() {
        log::info!(
            "size {:>2}  actual {:.3}  observed {:.3}  diff {:+.1}pp",
            size,
            p,
            observed.prob(&size),
            100. * (observed.prob(&size) - p),
        );
    }
    Ok(())
}
