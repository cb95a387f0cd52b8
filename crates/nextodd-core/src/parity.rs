//! Parity tests and the strict next-odd operation on primitive integers.

/// Parity and next-odd arithmetic for primitive integer types.
///
/// Parity is read from the low bit, which is correct for negative values
/// in two's complement (`-1` is odd, `-2` is even).
pub trait NextOdd: Sized + Copy {
    fn is_even(self) -> bool;

    fn is_odd(self) -> bool {
        !self.is_even()
    }

    /// Smallest odd value strictly greater than `self`.
    ///
    /// # Panics
    ///
    /// Overflows exactly like `+`: panics in debug builds when the result
    /// does not fit in `Self`. Use [`NextOdd::checked_next_odd`] when the
    /// input may sit at the top of the range.
    fn next_odd(self) -> Self;

    /// Like [`NextOdd::next_odd`], returning `None` on overflow.
    fn checked_next_odd(self) -> Option<Self>;
}

macro_rules! impl_next_odd {
    ($($t:ty),+ $(,)?) => {
        $(
            impl NextOdd for $t {
                #[inline]
                fn is_even(self) -> bool {
                    self & 1 == 0
                }

                #[inline]
                fn next_odd(self) -> Self {
                    if self.is_even() {
                        self + 1
                    } else {
                        self + 2
                    }
                }

                #[inline]
                fn checked_next_odd(self) -> Option<Self> {
                    let step = if self.is_even() { 1 } else { 2 };
                    self.checked_add(step)
                }
            }
        )+
    };
}

impl_next_odd!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

/// Strict entry point: the argument must already be an integer.
///
/// Non-integer values are rejected at compile time; there is no
/// conversion and no error path.
///
/// # Panics
///
/// Panics in debug builds for `i64::MAX`, whose next odd number is not
/// representable.
#[inline]
pub fn next_odd_strict(n: i64) -> i64 {
    n.next_odd()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_even_input_adds_one() {
        assert_eq!(next_odd_strict(4), 5);
        assert_eq!(next_odd_strict(0), 1);
        assert_eq!(next_odd_strict(-2), -1);
    }

    #[test]
    fn test_odd_input_adds_two() {
        assert_eq!(next_odd_strict(5), 7);
        assert_eq!(next_odd_strict(3), 5);
        assert_eq!(next_odd_strict(-1), 1);
        assert_eq!(next_odd_strict(-3), -1);
    }

    #[test]
    fn test_result_is_smallest_greater_odd() {
        for n in -1_000_i64..1_000 {
            let odd = next_odd_strict(n);
            assert!(odd.is_odd(), "{} -> {} is not odd", n, odd);
            assert!(odd > n);
            assert!(odd <= n + 2);
            // n + 1 is skipped only when it is even
            if odd == n + 2 {
                assert!((n + 1).is_even());
            }
        }
    }

    #[test]
    fn test_applying_twice_steps_by_two() {
        for n in -100_i64..100 {
            let once = next_odd_strict(n);
            assert_eq!(next_odd_strict(once), once + 2);
        }
    }

    #[test]
    fn test_parity_of_negatives() {
        assert!((-1_i32).is_odd());
        assert!((-2_i32).is_even());
        assert!(i64::MIN.is_even());
    }

    #[test]
    fn test_unsigned_types() {
        assert_eq!(0_u8.next_odd(), 1);
        assert_eq!(7_u32.next_odd(), 9);
        assert_eq!(10_usize.next_odd(), 11);
    }

    #[test]
    fn test_checked_at_upper_bound() {
        assert_eq!(i64::MAX.checked_next_odd(), None);
        assert_eq!((i64::MAX - 1).checked_next_odd(), Some(i64::MAX));
        assert_eq!((i64::MAX - 2).checked_next_odd(), Some(i64::MAX));
        assert_eq!(u8::MAX.checked_next_odd(), None);
        assert_eq!(253_u8.checked_next_odd(), None);
        assert_eq!(254_u8.checked_next_odd(), Some(255));
    }

    #[test]
    fn test_checked_at_lower_bound() {
        assert_eq!(i64::MIN.checked_next_odd(), Some(i64::MIN + 1));
        assert_eq!(i8::MIN.checked_next_odd(), Some(-127));
    }
}
