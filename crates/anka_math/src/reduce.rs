//! Digit reduction primitives.
//!
//! Two distinct reductions live here and are never interchangeable:
//! - [`reduce_digit`] collapses a value to 0..=9, optionally stopping at a
//!   master number (11, 22, 33) depending on the call site's [`SpecialPolicy`].
//! - [`reduce_matrix`] bounds a value to 1..=22 for the destiny matrix and
//!   returns an [`Arcana`], so its results cannot silently flow into code
//!   expecting a 1..=9 number.

/// The master numbers, exempt from reduction under [`SpecialPolicy::Preserve`].
pub const MASTER_NUMBERS: [u32; 3] = [11, 22, 33];

/// Upper bound of the destiny-matrix reduction.
pub const MATRIX_MAX: u32 = 22;

/// Whether a reduction stops at a master number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpecialPolicy {
    /// 11, 22 and 33 are returned unchanged.
    Preserve,
    /// Master numbers are reduced like any other value.
    Collapse,
}

/// Whether a calculator returns its reduced value or the raw sum.
///
/// Raw sums are needed downstream (karmic debt), so there is deliberately
/// no `Default`: every call site chooses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReductionMode {
    /// Pass the sum through [`reduce_digit`] with [`SpecialPolicy::Preserve`].
    Reduced,
    /// Return the pre-reduction sum.
    Raw,
}

/// True for 11, 22 and 33.
pub const fn is_master(n: u32) -> bool {
    matches!(n, 11 | 22 | 33)
}

/// Sum of the decimal digits of `n` (one pass).
pub const fn digit_sum(mut n: u32) -> u32 {
    let mut sum = 0;
    while n > 0 {
        sum += n % 10;
        n /= 10;
    }
    sum
}

/// Reduce `n` to a single digit, or to a master number when `policy` allows.
///
/// `0` is legal and returns `0`.
pub const fn reduce_digit(mut n: u32, policy: SpecialPolicy) -> u32 {
    loop {
        if matches!(policy, SpecialPolicy::Preserve) && is_master(n) {
            return n;
        }
        if n < 10 {
            return n;
        }
        n = digit_sum(n);
    }
}

/// A destiny-matrix value, always in 1..=22.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Arcana(u8);

impl Arcana {
    /// Wrap a value already in 1..=22.
    pub const fn new(n: u32) -> Option<Self> {
        if n >= 1 && n <= MATRIX_MAX {
            Some(Self(n as u8))
        } else {
            None
        }
    }

    /// The numeric value (1..=22).
    pub const fn get(self) -> u32 {
        self.0 as u32
    }
}

impl std::fmt::Display for Arcana {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Bound `n` to 1..=22: digit-sum while above 22, and map 0 to 22.
pub const fn reduce_matrix(mut n: u32) -> Arcana {
    while n > MATRIX_MAX {
        n = digit_sum(n);
    }
    if n == 0 {
        n = MATRIX_MAX;
    }
    Arcana(n as u8)
}

/// A digit reduction with every intermediate sum kept, e.g. `28 -> 10 -> 1`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reduction {
    /// Input value.
    pub raw: u32,
    /// Final reduced value.
    pub value: u32,
    /// Every value visited, starting with `raw` and ending with `value`.
    pub steps: Vec<u32>,
}

impl Reduction {
    /// True when the input needed no reduction.
    pub fn is_trivial(&self) -> bool {
        self.steps.len() == 1
    }
}

impl std::fmt::Display for Reduction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, step) in self.steps.iter().enumerate() {
            if i > 0 {
                f.write_str(" -> ")?;
            }
            write!(f, "{step}")?;
        }
        Ok(())
    }
}

/// Like [`reduce_digit`], but records the chain of intermediate sums.
pub fn reduction_chain(n: u32, policy: SpecialPolicy) -> Reduction {
    let mut steps = vec![n];
    let mut current = n;
    while reduce_digit(current, policy) != current {
        current = digit_sum(current);
        steps.push(current);
    }
    Reduction {
        raw: n,
        value: current,
        steps,
    }
}
