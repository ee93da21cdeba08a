//! Fixed-width signed integers for P-256 modular arithmetic
//!
//! A [`BigVal`] is nine 32-bit words, least significant first, read as a
//! two's complement number. The top word only carries sign and overflow
//! from additions, so a value at most a few multiples of the modulus away
//! from `[0, p)` still fits.
//!
//! Arithmetic keeps values *approximately* reduced: after each step the
//! top word is folded back by subtracting `MSW × p`. Comparisons, zero
//! tests and encodings are only meaningful on *precisely* reduced values,
//! which are represented by [`Canonical`]. The only way to obtain one from
//! arbitrary arithmetic output is [`BigVal::precise_reduce`].

use super::constants::{BIGLEN, FIELD_MODULUS, MSW, ORDER_MODULUS};
use core::cmp::Ordering;
use core::fmt;
use core::ops::{Add, Sub};
use subtle::{Choice, ConstantTimeEq};
use zeroize::Zeroize;

/// Nine-word two's complement integer
#[derive(Clone, Copy, PartialEq, Eq, Default, Zeroize)]
pub struct BigVal(pub(crate) [u32; BIGLEN]);

/// Modulus selector for reductions
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Modulus {
    /// The field prime p
    Field,
    /// The group order n
    Order,
}

impl Modulus {
    /// The modulus as a [`BigVal`]
    pub const fn value(self) -> BigVal {
        match self {
            Modulus::Field => FIELD_MODULUS,
            Modulus::Order => ORDER_MODULUS,
        }
    }
}

impl BigVal {
    /// Zero
    pub const ZERO: Self = Self([0; BIGLEN]);

    /// One
    pub const ONE: Self = Self::from_u32(1);

    /// Build from little-endian words
    pub const fn from_words(words: [u32; BIGLEN]) -> Self {
        Self(words)
    }

    /// Build from a small non-negative value
    pub const fn from_u32(value: u32) -> Self {
        let mut words = [0u32; BIGLEN];
        words[0] = value;
        Self(words)
    }

    /// Little-endian words
    pub fn words(&self) -> &[u32; BIGLEN] {
        &self.0
    }

    /// True if every word is zero
    ///
    /// For modular values this is only a zero test after precise reduction.
    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|&w| w == 0)
    }

    /// True if the value is exactly one
    pub fn is_one(&self) -> bool {
        self.0[0] == 1 && self.0[1..].iter().all(|&w| w == 0)
    }

    /// Low bit of the least significant word
    pub fn is_odd(&self) -> bool {
        self.0[0] & 1 == 1
    }

    /// Sign of the two's complement value
    pub fn is_negative(&self) -> bool {
        (self.0[MSW] as i32) < 0
    }

    /// Signed comparison: the top word is compared as `i32`, the rest unsigned
    pub fn signed_cmp(&self, other: &Self) -> Ordering {
        let ord = (self.0[MSW] as i32).cmp(&(other.0[MSW] as i32));
        if ord != Ordering::Equal {
            return ord;
        }
        for i in (0..MSW).rev() {
            let ord = self.0[i].cmp(&other.0[i]);
            if ord != Ordering::Equal {
                return ord;
            }
        }
        Ordering::Equal
    }

    /// Arithmetic shift right by one bit (floor division by two)
    pub fn halve(&self) -> Self {
        let mut out = [0u32; BIGLEN];
        let mut carry = self.0[MSW] & 1;
        out[MSW] = ((self.0[MSW] as i32) >> 1) as u32;
        for i in (0..MSW).rev() {
            let next = self.0[i] & 1;
            out[i] = (self.0[i] >> 1) | (carry << 31);
            carry = next;
        }
        Self(out)
    }

    /// `t` with `2t ≡ self (mod p)`
    ///
    /// Odd values get p added first. The low bit of the two's complement
    /// form decides, so approximately reduced inputs are fine.
    pub fn halve_mod_p(&self) -> Self {
        if self.is_odd() {
            self.adjust_p(1).halve()
        } else {
            self.halve()
        }
    }

    /// Multiply by three without reduction
    pub fn triple(&self) -> Self {
        let mut out = [0u32; BIGLEN];
        let mut accum: u64 = 0;
        for (o, &w) in out.iter_mut().zip(self.0.iter()) {
            accum += 3 * w as u64;
            *o = accum as u32;
            accum >>= 32;
        }
        Self(out)
    }

    /// Add `k × p`, for `-2^62 <= k <= 2^62`
    ///
    /// Uses the sparse signed form p = 2^256 - 2^224 + 2^192 + 2^96 - 1,
    /// so only five words receive a non-zero adjustment.
    pub fn adjust_p(&self, k: i64) -> Self {
        if k == 0 {
            return *self;
        }
        let adj: [i64; BIGLEN] = [-k, 0, 0, k, 0, 0, k, -k, k];
        let mut out = [0u32; BIGLEN];
        let mut w: i64 = 0;
        for i in 0..BIGLEN {
            w += self.0[i] as i64;
            w += adj[i];
            out[i] = w as u32;
            w >>= 32;
        }
        Self(out)
    }

    /// Multiply by a signed word; the product must fit in nine words
    pub fn mul_word(&self, k: i32) -> Self {
        let mut out = [0u32; BIGLEN];
        let mut w: i64 = 0;
        for (o, &word) in out.iter_mut().zip(self.0.iter()) {
            w += k as i64 * word as i64;
            *o = w as u32;
            w -= *o as i64;
            w >>= 32;
        }
        Self(out)
    }

    /// Subtract `MSW × p`, leaving the value approximately reduced
    pub fn approx_reduce(&self) -> Self {
        self.adjust_p(-(self.0[MSW] as i32 as i64))
    }

    /// Modular addition with approximate reduction
    pub fn add_p(&self, other: &Self) -> Self {
        (*self + *other).approx_reduce()
    }

    /// Modular subtraction with approximate reduction
    pub fn sub_p(&self, other: &Self) -> Self {
        (*self - *other).approx_reduce()
    }

    /// Reduce into `[0, modulus)`
    ///
    /// Folds the top word until it is zero, then subtracts or adds the
    /// modulus until the value is in range. Works for moduli slightly below
    /// 2^256, which covers both p and n.
    pub fn precise_reduce(&self, modulus: Modulus) -> Canonical {
        let m = modulus.value();
        let mut t = *self;
        while t.0[MSW] as i32 != 0 {
            let top = t.0[MSW] as i32;
            t = match modulus {
                Modulus::Field => t.adjust_p(-(top as i64)),
                Modulus::Order => t - m.mul_word(top),
            };
        }
        while t.signed_cmp(&m) != Ordering::Less {
            t = t - m;
        }
        while t.is_negative() {
            t = t + m;
        }
        Canonical(t)
    }
}

impl Add for BigVal {
    type Output = BigVal;

    /// Two's complement addition; the carry out of the top word is dropped
    fn add(self, rhs: BigVal) -> BigVal {
        let mut out = [0u32; BIGLEN];
        let mut v: u64 = 0;
        for i in 0..BIGLEN {
            v += self.0[i] as u64;
            v += rhs.0[i] as u64;
            out[i] = v as u32;
            v >>= 32;
        }
        BigVal(out)
    }
}

impl Sub for BigVal {
    type Output = BigVal;

    /// Two's complement subtraction (add the one's complement plus one)
    fn sub(self, rhs: BigVal) -> BigVal {
        let mut out = [0u32; BIGLEN];
        let mut v: u64 = 1;
        for i in 0..BIGLEN {
            v += self.0[i] as u64;
            v += (!rhs.0[i]) as u64;
            out[i] = v as u32;
            v >>= 32;
        }
        BigVal(out)
    }
}

impl ConstantTimeEq for BigVal {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.0[..].ct_eq(&other.0[..])
    }
}

impl fmt::Debug for BigVal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BigVal(0x")?;
        for w in self.0.iter().rev() {
            write!(f, "{:08x}", w)?;
        }
        write!(f, ")")
    }
}

/// A [`BigVal`] precisely reduced into `[0, modulus)`
///
/// Ordering, zero tests and wire encoding are defined on this type only.
#[derive(Clone, Copy, PartialEq, Eq, Default, Zeroize)]
pub struct Canonical(BigVal);

impl Canonical {
    /// Zero
    pub const ZERO: Self = Self(BigVal::ZERO);

    /// One
    pub const ONE: Self = Self(BigVal::ONE);

    /// The underlying value
    pub fn value(&self) -> &BigVal {
        &self.0
    }

    /// True for zero
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// True for one
    pub fn is_one(&self) -> bool {
        self.0.is_one()
    }

    /// Parity of the reduced value
    pub fn is_odd(&self) -> bool {
        self.0.is_odd()
    }
}

impl From<Canonical> for BigVal {
    fn from(value: Canonical) -> Self {
        value.0
    }
}

impl PartialOrd for Canonical {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Canonical {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.signed_cmp(&other.0)
    }
}

impl fmt::Debug for Canonical {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Canonical({:?})", self.0)
    }
}
