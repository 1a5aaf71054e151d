//! GF(2^8) arithmetic module.
//!
//! This module implements finite field arithmetic over GF(2^8), using the irreducible polynomial
//! x^8 + x^4 + x^3 + x + 1 (0x11B). Multiplication, division and exponentiation go through the
//! discrete logarithm of the generator {03}: two constant 255-entry tables map every nonzero
//! element to its logarithm and back.
//!
//! # Design Choices
//! - **Log/Antilog Tables**: `a * b = g^(log a + log b)`. Both tables cover the 255 nonzero
//!   elements only and are indexed by `value - 1` (for `LOGS`) or by exponent (for `ILOGS`).
//! - **Embedded Data**: The tables are literal constants. [`generate_tables`] rebuilds them at
//!   compile time from the bit-serial multiply, and the tests check both agree.
//! - **Fallible Operations**: Division, inversion, logarithm and non-positive powers of zero
//!   return [`FieldError`] instead of panicking.
//!
//! # Usage
//! ```
//! use gf256_lagrange::GF;
//!
//! let a = GF::new(0x57);
//! let b = GF::new(0x83);
//! assert_eq!(a * b, GF::new(0xC1));
//! assert_eq!((a * b).div(b), Ok(a));
//! assert_eq!(a + a, GF::ZERO);
//! ```

use core::fmt;
use core::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};
use zeroize::Zeroize;

/// Low byte of irreducible polynomial (full poly: 0x11B).
const POLY: u8 = 0x1B;

/// Full irreducible polynomial (x^8 + x^4 + x^3 + x + 1).
const POLY_FULL: u16 = 0x11B;

/// Generator of the multiplicative group.
const GENERATOR: u8 = 0x03;

/// Order of the multiplicative group, i.e. the number of nonzero elements.
const ORDER: i32 = 255;

/// Discrete logarithm of each nonzero element in base {03}. Entry `v - 1` holds `log(v)`.
const LOGS: [u8; 255] = [
      0,  25,   1,  50,   2,  26, 198,  75, 199,  27, 104,  51, 238, 223,   3,
    100,   4, 224,  14,  52, 141, 129, 239,  76, 113,   8, 200, 248, 105,  28,
    193, 125, 194,  29, 181, 249, 185,  39, 106,  77, 228, 166, 114, 154, 201,
      9, 120, 101,  47, 138,   5,  33,  15, 225,  36,  18, 240, 130,  69,  53,
    147, 218, 142, 150, 143, 219, 189,  54, 208, 206, 148,  19,  92, 210, 241,
     64,  70, 131,  56, 102, 221, 253,  48, 191,   6, 139,  98, 179,  37, 226,
    152,  34, 136, 145,  16, 126, 110,  72, 195, 163, 182,  30,  66,  58, 107,
     40,  84, 250, 133,  61, 186,  43, 121,  10,  21, 155, 159,  94, 202,  78,
    212, 172, 229, 243, 115, 167,  87, 175,  88, 168,  80, 244, 234, 214, 116,
     79, 174, 233, 213, 231, 230, 173, 232,  44, 215, 117, 122, 235,  22,  11,
    245,  89, 203,  95, 176, 156, 169,  81, 160, 127,  12, 246, 111,  23, 196,
     73, 236, 216,  67,  31,  45, 164, 118, 123, 183, 204, 187,  62,  90, 251,
     96, 177, 134,  59,  82, 161, 108, 170,  85,  41, 157, 151, 178, 135, 144,
     97, 190, 220, 252, 188, 149, 207, 205,  55,  63,  91, 209,  83,  57, 132,
     60,  65, 162, 109,  71,  20,  42, 158,  93,  86, 242, 211, 171,  68,  17,
    146, 217,  35,  32,  46, 137, 180, 124, 184,  38, 119, 153, 227, 165, 103,
     74, 237, 222, 197,  49, 254,  24,  13,  99, 140, 128, 192, 247, 112,   7,
];

/// Powers of {03}. Entry `e` holds `3^e`.
const ILOGS: [u8; 255] = [
      1,   3,   5,  15,  17,  51,  85, 255,  26,  46, 114, 150, 161, 248,  19,
     53,  95, 225,  56,  72, 216, 115, 149, 164, 247,   2,   6,  10,  30,  34,
    102, 170, 229,  52,  92, 228,  55,  89, 235,  38, 106, 190, 217, 112, 144,
    171, 230,  49,  83, 245,   4,  12,  20,  60,  68, 204,  79, 209, 104, 184,
    211, 110, 178, 205,  76, 212, 103, 169, 224,  59,  77, 215,  98, 166, 241,
      8,  24,  40, 120, 136, 131, 158, 185, 208, 107, 189, 220, 127, 129, 152,
    179, 206,  73, 219, 118, 154, 181, 196,  87, 249,  16,  48,  80, 240,  11,
     29,  39, 105, 187, 214,  97, 163, 254,  25,  43, 125, 135, 146, 173, 236,
     47, 113, 147, 174, 233,  32,  96, 160, 251,  22,  58,  78, 210, 109, 183,
    194,  93, 231,  50,  86, 250,  21,  63,  65, 195,  94, 226,  61,  71, 201,
     64, 192,  91, 237,  44, 116, 156, 191, 218, 117, 159, 186, 213, 100, 172,
    239,  42, 126, 130, 157, 188, 223, 122, 142, 137, 128, 155, 182, 193,  88,
    232,  35, 101, 175, 234,  37, 111, 177, 200,  67, 197,  84, 252,  31,  33,
     99, 165, 244,   7,   9,  27,  45, 119, 153, 176, 203,  70, 202,  69, 207,
     74, 222, 121, 139, 134, 145, 168, 227,  62,  66, 198,  81, 243,  14,  18,
     54,  90, 238,  41, 123, 141, 140, 143, 138, 133, 148, 167, 242,  13,  23,
     57,  75, 221, 124, 132, 151, 162, 253,  28,  36, 108, 180, 199,  82, 246,
];

/// Errors raised by field operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    /// Division by (or inversion of) the zero element.
    DivideByZero,
    /// Discrete logarithm of the zero element.
    LogOfZero,
    /// Zero raised to a non-positive power.
    DomainError,
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldError::DivideByZero => write!(f, "Division by zero in GF(256)"),
            FieldError::LogOfZero => write!(f, "Logarithm of zero in GF(256)"),
            FieldError::DomainError => write!(f, "Zero raised to a non-positive power"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for FieldError {}

/// An element of GF(2^8).
///
/// Every byte is a valid and distinct element. The ordering is the numeric ordering of the
/// byte and carries no algebraic meaning.
#[derive(Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Zeroize)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize), serde(transparent))]
#[repr(transparent)]
pub struct GF(u8);

impl GF {
    /// The additive identity.
    pub const ZERO: GF = GF(0);
    /// The multiplicative identity.
    pub const ONE: GF = GF(1);
    /// The generator {03} of the multiplicative group.
    pub const GENERATOR: GF = GF(GENERATOR);
    /// Low byte of the reducing polynomial.
    pub const POLY: u8 = POLY;
    /// Size of the multiplicative group.
    pub const ORDER: i32 = ORDER;

    /// Wraps a raw byte.
    #[inline(always)]
    pub const fn new(value: u8) -> Self {
        GF(value)
    }

    /// Returns the underlying byte.
    #[inline(always)]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Indicates whether this element is zero, the only "falsy" element.
    #[inline(always)]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Divides `self` by `rhs`.
    ///
    /// # Failure Modes
    /// - `rhs == 0`: [`FieldError::DivideByZero`], whatever the dividend (zero included).
    pub fn div(self, rhs: Self) -> Result<Self, FieldError> {
        if rhs.is_zero() {
            return Err(FieldError::DivideByZero);
        }
        if self.is_zero() {
            return Ok(GF::ZERO);
        }

        let mut c = log_lookup(self.0) - log_lookup(rhs.0);
        if c < 0 {
            c += ORDER;
        }
        debug_assert!((0..ORDER).contains(&c));
        Ok(GF(ILOGS[c as usize]))
    }

    /// Multiplicative inverse, `1 / self`.
    pub fn inv(self) -> Result<Self, FieldError> {
        GF::ONE.div(self)
    }

    /// Discrete logarithm in base {03}, in `[0, 255)`.
    ///
    /// # Failure Modes
    /// - `self == 0`: [`FieldError::LogOfZero`].
    pub fn log(self) -> Result<u8, FieldError> {
        if self.is_zero() {
            return Err(FieldError::LogOfZero);
        }
        Ok(LOGS[(self.0 - 1) as usize])
    }

    /// Raises the generator {03} to the power `e`.
    ///
    /// Any exponent is accepted: it is reduced modulo 255 first, so negative exponents give
    /// inverses and `exp(255) == exp(0) == 1`.
    #[inline]
    pub fn exp(e: i32) -> Self {
        GF(ILOGS[e.rem_euclid(ORDER) as usize])
    }

    /// Raises `self` to the power `b`. The exponent may be negative when `self` is not zero.
    ///
    /// # Failure Modes
    /// - `self == 0` and `b <= 0`: [`FieldError::DomainError`].
    pub fn pow(self, b: i32) -> Result<Self, FieldError> {
        if self.is_zero() {
            return if b > 0 {
                Ok(GF::ZERO)
            } else {
                Err(FieldError::DomainError)
            };
        }

        let b = b.rem_euclid(ORDER);
        if b == 0 {
            return Ok(GF::ONE);
        }
        Ok(GF::exp(b * log_lookup(self.0)))
    }
}

/// Logarithm of a nonzero byte, widened for exponent arithmetic.
#[inline(always)]
fn log_lookup(a: u8) -> i32 {
    LOGS[(a - 1) as usize] as i32
}

/// Bit-serial multiplication with reduction modulo 0x11B.
///
/// Fixed 8 iterations with mask-based conditionals. Used to build the tables; field
/// multiplication itself goes through the tables.
pub(crate) const fn mul_bitserial(a: u8, b: u8) -> u8 {
    let mut result: u8 = 0;
    let mut aa: u16 = a as u16;
    let mut bb: u8 = b;

    let mut i = 0;
    while i < 8 {
        // Conditional add: if (bb & 1) result ^= aa
        let add_mask = (bb & 1).wrapping_mul(!0u8) as u16;
        result ^= (aa & add_mask) as u8;

        // Shift aa left and reduce mod poly if carry
        let carry = ((aa >> 7) & 1) as u8;
        let carry_mask = carry.wrapping_mul(!0u8) as u16;
        aa = ((aa << 1) & 0xFF) ^ (POLY_FULL & carry_mask);

        bb >>= 1;
        i += 1;
    }

    result
}

/// Rebuilds `(logs, ilogs)` by repeated multiplication by the generator.
///
/// Same layout as the embedded tables: `logs[v - 1] = log(v)` and `ilogs[e] = 3^e`.
pub const fn generate_tables() -> ([u8; 255], [u8; 255]) {
    let mut logs = [0u8; 255];
    let mut ilogs = [0u8; 255];

    let mut v: u8 = 1;
    let mut e = 0;
    while e < 255 {
        ilogs[e] = v;
        logs[(v - 1) as usize] = e as u8;
        v = mul_bitserial(v, GENERATOR);
        e += 1;
    }

    (logs, ilogs)
}

impl From<u8> for GF {
    #[inline(always)]
    fn from(value: u8) -> Self {
        GF(value)
    }
}

impl From<GF> for u8 {
    #[inline(always)]
    fn from(gf: GF) -> u8 {
        gf.0
    }
}

/// GF(2^8) addition: simple XOR, as the field characteristic is 2.
impl Add for GF {
    type Output = Self;

    #[inline(always)]
    fn add(self, rhs: Self) -> Self {
        GF(self.0 ^ rhs.0)
    }
}

impl AddAssign for GF {
    #[inline(always)]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

/// Subtraction is the same operation as addition.
impl Sub for GF {
    type Output = Self;

    #[inline(always)]
    fn sub(self, rhs: Self) -> Self {
        GF(self.0 ^ rhs.0)
    }
}

impl SubAssign for GF {
    #[inline(always)]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

/// Every element is its own additive inverse.
impl Neg for GF {
    type Output = Self;

    #[inline(always)]
    fn neg(self) -> Self {
        self
    }
}

/// GF(2^8) multiplication through the log/antilog tables.
impl Mul for GF {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        if self.is_zero() || rhs.is_zero() {
            return GF::ZERO;
        }

        let mut c = log_lookup(self.0) + log_lookup(rhs.0);
        if c >= ORDER {
            c -= ORDER;
        }
        debug_assert!((0..ORDER).contains(&c));
        GF(ILOGS[c as usize])
    }
}

impl MulAssign for GF {
    #[inline(always)]
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl fmt::Debug for GF {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "GF(0x{:02X})", self.0)
    }
}

impl fmt::Display for GF {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02X}", self.0)
    }
}

impl fmt::UpperHex for GF {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::UpperHex::fmt(&self.0, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::format;

    fn nonzero() -> impl Iterator<Item = GF> {
        (1u8..=255).map(GF)
    }

    fn all() -> impl Iterator<Item = GF> {
        (0u8..=255).map(GF)
    }

    #[test]
    fn test_zero() {
        let x = GF::default();
        assert!(x.is_zero());
        assert_eq!(x, GF::ZERO);
        assert_eq!(x, GF::from(0));
        assert_ne!(x, GF::ONE);
        assert!(x < GF::ONE);
        assert!(!GF::new(0x80).is_zero());
    }

    #[test]
    fn test_tables_are_mutual_inverses() {
        for v in 1u8..=255 {
            assert_eq!(ILOGS[LOGS[(v - 1) as usize] as usize], v);
        }
        for e in 0..255usize {
            assert_eq!(LOGS[(ILOGS[e] - 1) as usize] as usize, e);
        }
    }

    #[test]
    fn test_tables_match_generator() {
        let (logs, ilogs) = generate_tables();
        assert_eq!(logs, LOGS);
        assert_eq!(ilogs, ILOGS);
    }

    #[test]
    fn test_add() {
        assert_eq!(GF(0x01) + GF(0x01), GF(0x00));
        assert_eq!(GF(0x80) + GF(0x7F), GF(0xFF));

        for a in all() {
            assert_eq!(a + GF::ZERO, a);
            assert_eq!(a - GF::ZERO, a);
            assert_eq!(-a, a);
            assert!((a + a).is_zero());
            assert!((a - a).is_zero());

            for b in nonzero() {
                let c = a + b;
                assert_ne!(c, a);
                assert_eq!(c, b + a);
                assert_eq!(c, a - b);
                assert_eq!(c, b - a);
                assert_eq!(c - a, b);
                assert_eq!(c - b, a);
            }
        }
    }

    #[test]
    fn test_assign_ops() {
        let mut a = GF(0x57);
        a += GF(0x83);
        assert_eq!(a, GF(0xD4));
        a -= GF(0x83);
        assert_eq!(a, GF(0x57));
        a *= GF(0x83);
        assert_eq!(a, GF(0xC1));
    }

    #[test]
    fn test_mul() {
        // 0x02 * 0x03 = 0x06
        assert_eq!(GF(0x02) * GF(0x03), GF(0x06));
        // AES test vector
        assert_eq!(GF(0x57) * GF(0x83), GF(0xC1));
        assert_eq!(GF::ONE * GF::ONE, GF::ONE);
        assert_eq!(GF::ZERO * GF::ONE, GF::ZERO);
        assert_eq!(GF::ONE * GF::ZERO, GF::ZERO);
        assert_eq!(GF::ZERO * GF::ZERO, GF::ZERO);
    }

    #[test]
    fn test_mul_exhaustive() {
        for a in all() {
            assert_eq!(a * GF::ONE, a);
            assert!((a * GF::ZERO).is_zero());
            assert!((GF::ZERO * a).is_zero());

            for b in all() {
                let c = a * b;
                assert_eq!(c.0, mul_bitserial(a.0, b.0), "{:?} * {:?}", a, b);
                assert_eq!(c, b * a);
                if !b.is_zero() {
                    assert_eq!(c.div(b), Ok(a));
                }
            }
        }
    }

    #[test]
    fn test_associativity() {
        for a in nonzero().step_by(3) {
            for b in nonzero().step_by(5) {
                for c in all().step_by(7) {
                    assert_eq!(a * (b * c), (a * b) * c);
                    assert_eq!(a + (b + c), (a + b) + c);
                }
            }
        }
    }

    #[test]
    fn test_distribution() {
        for a in nonzero() {
            for b in nonzero() {
                for c in (1..=b.0).rev().map(GF) {
                    assert_eq!(a * (b + c), a * b + a * c);
                }
            }
        }
    }

    #[test]
    fn test_div() {
        assert_eq!(GF(0x02).div(GF(0x02)), Ok(GF(0x01)));
        assert_eq!(GF(0x00).div(GF(0x01)), Ok(GF(0x00)));
        assert_eq!(GF(0x01).div(GF(0x02)), Ok(GF(0x8D)));
        assert_eq!(GF(0x01).div(GF(0x03)), Ok(GF(0xF6)));

        for a in all() {
            assert_eq!(a.div(GF::ZERO), Err(FieldError::DivideByZero));
            for b in nonzero() {
                let c = a.div(b).unwrap();
                assert_eq!(c * b, a);
            }
        }
    }

    #[test]
    fn test_inv() {
        assert_eq!(GF(0x02).inv(), Ok(GF(0x8D)));
        assert_eq!(GF(0x01).inv(), Ok(GF(0x01)));
        assert_eq!(GF(0x03).inv(), Ok(GF(0xF6)));
        assert_eq!(GF(0x00).inv(), Err(FieldError::DivideByZero));

        for a in nonzero() {
            let b = a.inv().unwrap();
            assert_eq!(a * b, GF::ONE, "inv({:02x}) * {:02x} != 1", a.0, b.0);
            assert_eq!(a.pow(-1), Ok(b));
        }
    }

    #[test]
    fn test_log() {
        assert_eq!(GF::ZERO.log(), Err(FieldError::LogOfZero));
        assert_eq!(GF::ONE.log(), Ok(0));
        assert_eq!(GF::GENERATOR.log(), Ok(1));

        for a in nonzero() {
            let l = a.log().unwrap();
            assert!((l as i32) < GF::ORDER);
            assert_eq!(GF::exp(l as i32), a);
        }
    }

    #[test]
    fn test_exp_wraps() {
        assert_eq!(GF::exp(0), GF::ONE);
        assert_eq!(GF::exp(1), GF::GENERATOR);
        assert_eq!(GF::exp(255), GF::ONE);
        assert_eq!(GF::exp(-1), GF(0xF6));
        assert_eq!(GF::exp(254), GF(0xF6));
        for e in -600..600 {
            assert_eq!(GF::exp(e), GF::exp(e + 255));
            assert_eq!(GF::exp(e) * GF::exp(-e), GF::ONE);
        }
        assert_eq!(GF::exp(i32::MIN), GF::exp(i32::MIN.rem_euclid(255)));
    }

    #[test]
    fn test_pow_zero() {
        assert_eq!(GF::ZERO.pow(1), Ok(GF::ZERO));
        assert_eq!(GF::ZERO.pow(300), Ok(GF::ZERO));
        assert_eq!(GF::ZERO.pow(0), Err(FieldError::DomainError));
        assert_eq!(GF::ZERO.pow(-1), Err(FieldError::DomainError));
    }

    #[test]
    fn test_pow_period() {
        for a in nonzero() {
            assert_eq!(a.pow(0), Ok(GF::ONE));
            assert_eq!(a.pow(255), Ok(GF::ONE));

            let mut i = 0;
            let mut p = GF::ONE;
            loop {
                assert!(i < GF::ORDER);
                p *= a;
                i += 1;
                assert!(!p.is_zero());
                assert_eq!(a.pow(i), Ok(p));
                assert_eq!(p * a.pow(-i).unwrap(), GF::ONE);
                if p == GF::ONE {
                    break;
                }
            }
            assert_eq!(GF::ORDER % i, 0);
        }

        // {02} generates a subgroup of order 51
        let two = GF(0x02);
        assert_eq!(two.pow(51), Ok(GF::ONE));
        assert!((1..51).all(|i| two.pow(i) != Ok(GF::ONE)));
    }

    #[test]
    fn test_pow_negative() {
        for a in nonzero().step_by(11) {
            for i in -520..520 {
                assert_eq!(a.pow(i).unwrap() * a.pow(-i).unwrap(), GF::ONE);
            }
        }
    }

    #[test]
    fn test_formatting() {
        assert_eq!(format!("{}", GF(0x0A)), "0A");
        assert_eq!(format!("{}", GF(0x00)), "00");
        assert_eq!(format!("{}", GF(0xFF)), "FF");
        assert_eq!(format!("{:?}", GF(0x3C)), "GF(0x3C)");
        assert_eq!(format!("{:X}", GF(0xAB)), "AB");
        assert_eq!(format!("{}", FieldError::LogOfZero), "Logarithm of zero in GF(256)");
    }

    #[test]
    fn test_conversions() {
        for v in 0u8..=255 {
            assert_eq!(u8::from(GF::from(v)), v);
            assert_eq!(GF::new(v).value(), v);
        }
    }

    #[test]
    fn test_zeroize() {
        let mut a = GF(0xAA);
        a.zeroize();
        assert!(a.is_zero());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_transparent() {
        assert_eq!(serde_json::to_string(&GF(0xC1)).unwrap(), "193");
        assert_eq!(serde_json::from_str::<GF>("7").unwrap(), GF(0x07));
        assert!(serde_json::from_str::<GF>("256").is_err());
    }
}
