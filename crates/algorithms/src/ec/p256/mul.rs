//! Multiplication with approximate reduction modulo p or n
//!
//! The product is formed column by column: every partial product of equal
//! weight is summed into a 64-bit accumulator, overflows of that
//! accumulator are counted separately and folded back in once per output
//! word. Squaring visits each cross term once and adds it twice.
//!
//! The unsigned product is then corrected for negative operands and
//! reduced. For p the reduction folds each high word into lower positions
//! using 2^256 ≡ 2^224 - 2^192 - 2^96 + 1. For n it runs a short
//! long-division against the signed digit form of n. A final subtraction
//! of `MSW × modulus` leaves the result approximately reduced.

use super::bigval::{BigVal, Modulus};
use super::constants::{BIGLEN, MSW, ORDER_DIGITS, ORDER_MODULUS};

const WIDE: usize = 2 * BIGLEN;
const LOW_MASK: u64 = 0xffff_ffff;

/// Column accumulator: `sum + carries × 2^64`
#[derive(Default)]
struct Accumulator {
    sum: u64,
    carries: u64,
}

impl Accumulator {
    #[inline(always)]
    fn mac(&mut self, a: u32, b: u32) {
        let product = a as u64 * b as u64;
        let (sum, overflow) = self.sum.overflowing_add(product);
        self.sum = sum;
        self.carries += overflow as u64;
    }

    #[inline(always)]
    fn mac_double(&mut self, a: u32, b: u32) {
        self.mac(a, b);
        self.mac(a, b);
    }

    /// Emit the low 32 bits and shift the accumulator down one word
    #[inline(always)]
    fn shift_out(&mut self) -> i64 {
        let low = (self.sum & LOW_MASK) as i64;
        self.sum = (self.sum >> 32) + (self.carries << 32);
        self.carries = 0;
        low
    }
}

fn significant_words(a: &BigVal) -> usize {
    let mut words = BIGLEN;
    while words > 1 && a.0[words - 1] == 0 {
        words -= 1;
    }
    words
}

impl BigVal {
    /// `self × other`, approximately reduced modulo `modulus`
    ///
    /// Operands must be approximately reduced; larger inputs can overflow
    /// the intermediate columns.
    pub fn mul_mod(&self, other: &BigVal, modulus: Modulus) -> BigVal {
        multiply(self, other, false, modulus)
    }

    /// `self²`, approximately reduced modulo `modulus`
    pub fn square(&self, modulus: Modulus) -> BigVal {
        multiply(self, self, true, modulus)
    }
}

fn multiply(a: &BigVal, b: &BigVal, squaring: bool, modulus: Modulus) -> BigVal {
    if a.is_zero() || b.is_zero() {
        return BigVal::ZERO;
    }

    let mut w = unsigned_product(a, b, squaring);

    // signed(a) = unsigned(a) - 2^288 * neg(a); the 2^576 cross term only
    // matters in the top word.
    if a.is_negative() {
        for i in 0..BIGLEN {
            w[i + BIGLEN] -= b.0[i] as i64;
        }
    }
    if b.is_negative() {
        for i in 0..BIGLEN {
            w[i + BIGLEN] -= a.0[i] as i64;
        }
        if a.is_negative() {
            w[WIDE - 1] += 1i64 << 32;
        }
    }

    match modulus {
        Modulus::Field => fold_field(&mut w),
        Modulus::Order => fold_order(&mut w),
    }

    let mut out = [0u32; BIGLEN];
    let mut s: i64 = 0;
    for (o, &word) in out.iter_mut().zip(w.iter()) {
        s += word;
        *o = s as u32;
        s >>= 32;
    }
    let folded = BigVal(out);

    match modulus {
        Modulus::Field => folded.approx_reduce(),
        Modulus::Order => {
            if folded.0[MSW] != 0 {
                folded - ORDER_MODULUS.mul_word(folded.0[MSW] as i32)
            } else {
                folded
            }
        }
    }
}

/// Unsigned 18-word product; the top word keeps the full accumulator
fn unsigned_product(a: &BigVal, b: &BigVal, squaring: bool) -> [i64; WIDE] {
    let mut w = [0i64; WIDE];
    let mut acc = Accumulator::default();
    let a_words = significant_words(a);
    let mut i = 0usize;

    if squaring {
        while i < 2 * a_words - 1 {
            let mut j = (i + 1).saturating_sub(a_words);
            while 2 * j < i {
                acc.mac_double(a.0[i - j], a.0[j]);
                j += 1;
            }
            if i % 2 == 0 {
                acc.mac(a.0[i / 2], a.0[i / 2]);
            }
            w[i] = acc.shift_out();
            i += 1;
        }
    } else {
        let b_words = significant_words(b);
        while i < a_words + b_words - 1 {
            let min_j = (i + 1).saturating_sub(a_words);
            let max_j = core::cmp::min(b_words - 1, i);
            for j in min_j..=max_j {
                acc.mac(a.0[i - j], b.0[j]);
            }
            w[i] = acc.shift_out();
            i += 1;
        }
    }

    while i < WIDE - 1 {
        w[i] = (acc.sum & LOW_MASK) as i64;
        acc.sum >>= 32;
        i += 1;
    }
    w[WIDE - 1] = acc.sum as i64;
    w
}

/// Fold words 17..=8 into lower positions modulo p
fn fold_field(w: &mut [i64; WIDE]) {
    for i in (MSW..WIDE).rev() {
        let v = w[i];
        if v != 0 {
            w[i] = 0;
            w[i - 1] += v;
            w[i - 2] -= v;
            w[i - 5] -= v;
            w[i - 8] += v;
        }
    }
}

/// Knock off words 17..=8 by subtracting multiples of n
fn fold_order(w: &mut [i64; WIDE]) {
    // Normalize to 32-bit words except the top one.
    let mut carry: i64 = 0;
    for word in w.iter_mut().take(WIDE - 1) {
        *word += carry;
        carry = *word >> 32;
        *word -= carry << 32;
    }
    w[WIDE - 1] += carry;

    for i in (MSW..WIDE).rev() {
        let mut passes = 0;
        while w[i] != 0 && passes < 3 {
            let v = w[i];
            let mut carry: i64 = 0;
            for j in (i - MSW)..WIDE {
                let mut tmp = if j <= i {
                    w[j] - v * ORDER_DIGITS[j + MSW - i] + carry
                } else {
                    w[j] + carry
                };
                if j < WIDE - 1 {
                    carry = tmp >> 32;
                    tmp -= carry << 32;
                } else {
                    carry = 0;
                }
                w[j] = tmp;
            }
            passes += 1;
        }
    }
}
