//! Zero-coupon bond discounting under continuous compounding.

use mf_core::{DiscountFactor, Rate, Time};

/// Price at time `t` of a unit zero-coupon bond maturing at `maturity`,
/// `B(t, T) = e^(−r(T−t))`.
#[inline]
pub fn discount_factor(r: Rate, t: Time, maturity: Time) -> DiscountFactor {
    (-r * (maturity - t)).exp()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn unit_at_maturity() {
        assert_eq!(discount_factor(0.08, 0.75, 0.75), 1.0);
    }

    #[test]
    fn discounts_below_par() {
        let b = discount_factor(0.08, 0.0, 0.75);
        assert!(b < 1.0);
        assert_relative_eq!(b, (-0.06_f64).exp(), max_relative = 1e-15);
    }

    #[test]
    fn composes_over_subperiods() {
        let whole = discount_factor(0.05, 0.0, 2.0);
        let split = discount_factor(0.05, 0.0, 0.5) * discount_factor(0.05, 0.5, 2.0);
        assert_relative_eq!(whole, split, max_relative = 1e-14);
    }
}
