use std::fmt;

use crate::digits;

/// Radix of one limb. A power of ten, so decimal digit sums and digit counts
/// distribute over limbs without base conversion, and small enough that a
/// limb times a u64 scalar plus carry fits in a u128.
const RADIX: u64 = 1_000_000_000_000_000_000;

/// Decimal digits per full limb.
const RADIX_DIGITS: usize = 18;

/// Arbitrary-precision unsigned integer stored as little-endian base-10^18
/// limbs. Supports only what the factorial drill needs: in-place
/// multiplication by a machine-word scalar, decimal digit count, and decimal
/// digit sum.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BigNum {
    /// `limbs[0]` is the least significant. Never empty; no trailing zero
    /// limbs except for the value zero itself.
    limbs: Vec<u64>,
}

impl BigNum {
    pub fn one() -> Self {
        Self { limbs: vec![1] }
    }

    pub fn from_u64(value: u64) -> Self {
        if value < RADIX {
            return Self { limbs: vec![value] };
        }
        Self {
            limbs: vec![value % RADIX, value / RADIX],
        }
    }

    pub fn is_zero(&self) -> bool {
        self.limbs == [0]
    }

    /// Multiply in place by a scalar, propagating carries upward.
    pub fn mul_small(&mut self, factor: u64) {
        if factor == 0 {
            self.limbs = vec![0];
            return;
        }
        let mut carry: u128 = 0;
        for limb in &mut self.limbs {
            let product = u128::from(*limb) * u128::from(factor) + carry;
            *limb = (product % u128::from(RADIX)) as u64;
            carry = product / u128::from(RADIX);
        }
        while carry > 0 {
            self.limbs.push((carry % u128::from(RADIX)) as u64);
            carry /= u128::from(RADIX);
        }
    }

    /// Number of decimal digits.
    pub fn digit_count(&self) -> usize {
        let top = self.limbs[self.limbs.len() - 1];
        (self.limbs.len() - 1) * RADIX_DIGITS + decimal_len(top)
    }

    /// Sum of decimal digits, taken limb by limb.
    pub fn digit_sum(&self) -> u64 {
        self.limbs.iter().map(|&limb| digits::digit_sum(limb)).sum()
    }
}

impl fmt::Display for BigNum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut rest = self.limbs.iter().rev();
        // The most significant limb prints unpadded; every limb below it is a
        // full 18-digit block.
        if let Some(top) = rest.next() {
            write!(f, "{top}")?;
        }
        for limb in rest {
            write!(f, "{limb:018}")?;
        }
        Ok(())
    }
}

/// Number of decimal digits in a single limb value.
fn decimal_len(n: u64) -> usize {
    if n == 0 {
        return 1;
    }
    n.ilog10() as usize + 1
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_bigint::BigUint;
    use num_traits::One;

    fn factorial(n: u64) -> BigNum {
        let mut f = BigNum::one();
        for i in 2..=n {
            f.mul_small(i);
        }
        f
    }

    fn factorial_reference(n: u64) -> BigUint {
        let mut f = BigUint::one();
        for i in 2..=n {
            f *= i;
        }
        f
    }

    #[test]
    fn one_is_one() {
        let one = BigNum::one();
        assert_eq!(one.to_string(), "1");
        assert_eq!(one.digit_count(), 1);
        assert_eq!(one.digit_sum(), 1);
        assert!(!one.is_zero());
    }

    #[test]
    fn from_u64_below_radix() {
        let n = BigNum::from_u64(123_456_789);
        assert_eq!(n.to_string(), "123456789");
        assert_eq!(n.digit_count(), 9);
    }

    #[test]
    fn from_u64_above_radix_splits_limbs() {
        // u64::MAX needs two limbs: 18_446744073709551615
        let n = BigNum::from_u64(u64::MAX);
        assert_eq!(n.to_string(), "18446744073709551615");
        assert_eq!(n.digit_count(), 20);
        assert_eq!(n.digit_sum(), 87);
    }

    #[test]
    fn mul_small_carries_into_new_limb() {
        let mut n = BigNum::from_u64(RADIX - 1);
        n.mul_small(2);
        assert_eq!(n.to_string(), "1999999999999999998");
    }

    #[test]
    fn mul_small_by_zero() {
        let mut n = BigNum::from_u64(42);
        n.mul_small(0);
        assert!(n.is_zero());
        assert_eq!(n.to_string(), "0");
        assert_eq!(n.digit_count(), 1);
        assert_eq!(n.digit_sum(), 0);
    }

    #[test]
    fn display_pads_interior_limbs() {
        // 25! = 15511210043330985984000000: the low limb starts with a zero
        // that plain formatting would drop.
        assert_eq!(factorial(25).to_string(), "15511210043330985984000000");
    }

    #[test]
    fn matches_library_factorials() {
        for n in [0, 1, 2, 20, 21, 50, 100, 200] {
            assert_eq!(
                factorial(n).to_string(),
                factorial_reference(n).to_string(),
                "mismatch at {n}!"
            );
        }
    }

    #[test]
    fn digit_count_matches_string_length() {
        for n in [1, 19, 22, 38, 77, 150] {
            let f = factorial(n);
            assert_eq!(f.digit_count(), f.to_string().len(), "count at {n}!");
        }
    }

    #[test]
    fn digit_sum_matches_string_digits() {
        for n in [3, 10, 40, 120] {
            let f = factorial(n);
            let by_string: u64 = f
                .to_string()
                .bytes()
                .map(|b| u64::from(b - b'0'))
                .sum();
            assert_eq!(f.digit_sum(), by_string, "sum at {n}!");
        }
    }

    #[test]
    fn digit_sum_of_100_factorial() {
        assert_eq!(factorial(100).digit_sum(), 648);
    }
}
