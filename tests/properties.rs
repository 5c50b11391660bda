use empirical::Error;
use empirical::Histogram;
use empirical::Pmf;
use empirical::bias;
use empirical::unbias;
use proptest::prelude::*;

fn counts() -> impl Strategy<Value = Vec<(i64, f64)>> {
    prop::collection::vec((-50i64..50, 0.5f64..100.), 1..24)
}

fn positive_counts() -> impl Strategy<Value = Vec<(i64, f64)>> {
    prop::collection::vec((1i64..200, 0.5f64..100.), 1..24)
}

proptest! {
    #[test]
    fn observations_sum_to_one(values in prop::collection::vec(0u16..64, 1..512)) {
        let pmf = Pmf::from_values(values);
        let total = pmf.items().map(|(_, p)| p).sum::<f64>();
        prop_assert!((total - 1.).abs() < 1e-9, "total {}", total);
    }

    #[test]
    fn absent_values_are_zero(values in prop::collection::vec(0u16..64, 0..128), missing in 64u16..128) {
        let pmf = Pmf::from_values(values.clone());
        let hist = Histogram::from_values(values);
        prop_assert_eq!(pmf.prob(&missing), 0.);
        prop_assert_eq!(pmf[&missing], 0.);
        prop_assert_eq!(hist.freq(&missing), 0.);
    }

    #[test]
    fn normalize_hits_fraction(
        counts in counts(),
        bumps in prop::collection::vec((-50i64..50, 0.01f64..5.), 0..16),
        fraction in 0.1f64..2.,
    ) {
        let mut pmf = Pmf::from_counts(counts).unwrap();
        for (x, amount) in bumps {
            pmf.incr(x, amount);
        }
        pmf.normalize_to(fraction).unwrap();
        prop_assert!((pmf.total() - fraction).abs() < 1e-9);
    }

    #[test]
    fn mult_by_zero_removes_value(counts in counts()) {
        let mut pmf = Pmf::from_counts(counts).unwrap();
        let x = *pmf.values().next().unwrap();
        pmf.mult(x, 0.);
        if pmf.total() > 0. {
            pmf.normalize().unwrap();
            prop_assert_eq!(pmf.prob(&x), 0.);
        } else {
            prop_assert!(pmf.normalize().is_err());
        }
    }

    #[test]
    fn unbias_inverts_bias(counts in positive_counts()) {
        let pmf = Pmf::from_counts(counts).unwrap();
        let roundtrip = unbias(&bias(&pmf, None).unwrap(), None).unwrap();
        for (x, p) in pmf.items() {
            prop_assert!((roundtrip.prob(x) - p).abs() < 1e-9);
        }
    }

    #[test]
    fn bias_over_mixed_signs_is_valid_or_degenerate(counts in counts()) {
        let pmf = Pmf::from_counts(counts).unwrap();
        match bias(&pmf, None) {
            Ok(biased) => {
                prop_assert!(biased.items().all(|(_, p)| p >= 0.));
                prop_assert!((biased.total() - 1.).abs() < 1e-9);
            }
            Err(e) => {
                prop_assert!(matches!(e, Error::DegenerateNormalization { .. }), "{}", e);
            }
        }
    }

    #[test]
    fn zero_counts_yield_empty_pmf(keys in prop::collection::vec(-50i64..50, 0..16)) {
        let pmf = Pmf::from_counts(keys.into_iter().map(|x| (x, 0.))).unwrap();
        prop_assert!(pmf.is_empty());
        prop_assert_eq!(pmf.total(), 0.);
    }

    #[test]
    fn bias_never_lowers_the_mean(counts in positive_counts()) {
        let pmf = Pmf::from_counts(counts).unwrap();
        let biased = bias(&pmf, None).unwrap();
        prop_assert!(biased.mean().unwrap() >= pmf.mean().unwrap() - 1e-9);
    }

    #[test]
    fn histogram_and_pmf_share_order(values in prop::collection::vec(0u8..32, 0..128)) {
        let hist = Histogram::from_values(values.clone());
        let pmf = Pmf::from(&hist);
        prop_assert!(hist.values().eq(pmf.values()));
        prop_assert_eq!(hist.total(), values.len() as f64);
    }
}
