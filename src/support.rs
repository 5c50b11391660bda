use std::fmt::Debug;
use std::hash::Hash;

/// Types that can serve as the values of a discrete distribution.
///
/// Keys must be hashable for lookup and debuggable for error reporting.
/// Numeric applicability is explicit: [`scalar`](Support::scalar) returns
/// the value's magnitude for numeric domains and `None` for categories,
/// so numeric operations ([`Pmf::mean`](crate::Pmf::mean),
/// [`bias`](crate::bias)) can reject a categorical key before doing any
/// arithmetic.
pub trait Support: Clone + Eq + Hash + Debug {
    /// The value as a real number, or `None` if it has no numeric meaning.
    fn scalar(&self) -> Option<f64>;
}

macro_rules! numeric {
    ($($t:ty),*) => {
        $(
            impl Support for $t {
                fn scalar(&self) -> Option<f64> {
                    Some(*self as f64)
                }
            }
        )*
    };
}

macro_rules! categorical {
    ($($t:ty),*) => {
        $(
            impl Support for $t {
                fn scalar(&self) -> Option<f64> {
                    None
                }
            }
        )*
    };
}

numeric!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
categorical!(bool, char, String, &'static str);
