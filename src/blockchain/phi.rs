use num_bigint::BigUint;
use num_traits::{One, Zero};

use crate::error::{ChainError, ChainResult};

/// Return the `n`-th decimal digit of the golden ratio's fractional part.
///
/// The ratio of consecutive Fibonacci numbers after `n * n` steps is
/// rounded (half up) to `n + 2` significant digits, scaled by `10^n`, and
/// the digit right before the decimal point is taken. Deterministic and
/// deliberately expensive: cost grows with `n²` big-integer additions.
pub fn digit_at(n: u32) -> ChainResult<u8> {
    let steps = n
        .checked_mul(n)
        .ok_or_else(|| ChainError::oracle(n, "fibonacci step count overflows"))?;

    let mut a = BigUint::zero();
    let mut b = BigUint::one();
    for _ in 0..steps {
        let next = &a + &b;
        a = std::mem::replace(&mut b, next);
    }

    if a.is_zero() {
        return Err(ChainError::oracle(n, "division by zero"));
    }

    // b / a lies in [1, 2], so n + 1 fractional digits give n + 2 significant ones.
    let exponent = n
        .checked_add(1)
        .ok_or_else(|| ChainError::oracle(n, "precision overflows"))?;
    let scaled = b * BigUint::from(10u32).pow(exponent);
    let rounded = (scaled * 2u32 + &a) / (a * 2u32);

    let digit = (rounded / 10u32) % 10u32;
    u8::try_from(&digit).map_err(|_| ChainError::oracle(n, "digit out of range"))
}
