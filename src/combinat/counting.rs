//! Exact integer counting helpers

use num_bigint::BigUint;
use num_traits::One;

/// n! as an exact big integer
pub fn factorial(n: usize) -> BigUint {
    (2..=n).fold(BigUint::one(), |acc, k| acc * k)
}

/// n^k as an exact big integer, with 0^0 = 1
pub fn power(n: usize, k: usize) -> BigUint {
    num_traits::pow(BigUint::from(n), k)
}

/// Number of size-k multisets drawn from n kinds, C(n + k - 1, k)
pub fn multichoose(n: &BigUint, k: usize) -> BigUint {
    if k == 0 {
        return BigUint::one();
    }
    num_integer::binomial(n + (k - 1), BigUint::from(k))
}

/// All positive divisors of n in ascending order
pub fn divisors(n: usize) -> Vec<usize> {
    let mut small = Vec::new();
    let mut large = Vec::new();
    let mut d = 1;
    while d * d <= n {
        if n % d == 0 {
            small.push(d);
            if d * d != n {
                large.push(n / d);
            }
        }
        d += 1;
    }
    small.extend(large.into_iter().rev());
    small
}

/// Stirling number of the second kind S(n, k)
pub fn stirling2(n: usize, k: usize) -> BigUint {
    // row[j] holds S(m, j) for the current m
    let mut row = vec![BigUint::from(0u32); k + 1];
    row[0] = BigUint::one();
    for m in 1..=n {
        for j in (1..=k.min(m)).rev() {
            row[j] = &row[j - 1] + &row[j] * j;
        }
        row[0] = BigUint::from(0u32);
    }
    row[k].clone()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factorial() {
        assert_eq!(factorial(0), BigUint::one());
        assert_eq!(factorial(1), BigUint::one());
        assert_eq!(factorial(5), BigUint::from(120u32));
        assert_eq!(factorial(20), BigUint::from(2_432_902_008_176_640_000u64));
    }

    #[test]
    fn test_power() {
        assert_eq!(power(0, 0), BigUint::one());
        assert_eq!(power(3, 3), BigUint::from(27u32));
        assert_eq!(power(16, 16), BigUint::from(18_446_744_073_709_551_616u128));
    }

    #[test]
    fn test_multichoose() {
        assert_eq!(multichoose(&BigUint::from(3u32), 2), BigUint::from(6u32));
        assert_eq!(multichoose(&BigUint::from(0u32), 0), BigUint::one());
        assert_eq!(multichoose(&BigUint::from(0u32), 2), BigUint::from(0u32));
        assert_eq!(multichoose(&BigUint::from(4u32), 1), BigUint::from(4u32));
        // C(4 + 2, 3)
        assert_eq!(multichoose(&BigUint::from(4u32), 3), BigUint::from(20u32));
    }

    #[test]
    fn test_divisors() {
        assert_eq!(divisors(1), vec![1]);
        assert_eq!(divisors(12), vec![1, 2, 3, 4, 6, 12]);
        assert_eq!(divisors(16), vec![1, 2, 4, 8, 16]);
        assert_eq!(divisors(13), vec![1, 13]);
    }

    #[test]
    fn test_stirling2() {
        let row: Vec<BigUint> = (0..=4).map(|k| stirling2(4, k)).collect();
        let expected: Vec<BigUint> = [0u32, 1, 7, 6, 1].iter().map(|&x| x.into()).collect();
        assert_eq!(row, expected);
        assert_eq!(stirling2(0, 0), BigUint::one());
    }
}
