use std::fmt::{Debug, Display};
use std::hash::Hash;
use std::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use ark_std::{One, Zero};

pub trait FieldOps<Rhs = Self, Output = Self>:
    Add<Rhs, Output = Output> + Sub<Rhs, Output = Output> + Mul<Rhs, Output = Output>
{
}

/// The prime field every relation is evaluated over.
///
/// Only the operations the relations and the trace builder need are exposed; the field
/// itself is an external collaborator (see [`ark`] for the BN254 scalar field).
pub trait HonkField:
    'static
    + Sized
    + Zero
    + One
    + Neg<Output = Self>
    + FieldOps<Self, Self>
    + for<'a> FieldOps<&'a Self, Self>
    + AddAssign<Self>
    + SubAssign<Self>
    + MulAssign<Self>
    + for<'a> AddAssign<&'a Self>
    + for<'a> SubAssign<&'a Self>
    + for<'a> MulAssign<&'a Self>
    + core::iter::Sum<Self>
    + for<'a> core::iter::Sum<&'a Self>
    + core::iter::Product<Self>
    + for<'a> core::iter::Product<&'a Self>
    + Eq
    + Copy
    + Sync
    + Send
    + Display
    + Debug
    + Default
    + Hash
{
    /// Number of bytes occupied by a single field element.
    const NUM_BYTES: usize;

    fn random<R: rand_core::RngCore>(rng: &mut R) -> Self;
    fn from_u8(n: u8) -> Self {
        Self::from_u64(n as u64)
    }
    fn from_u64(n: u64) -> Self;
    fn from_u128(n: u128) -> Self;
    fn from_i64(val: i64) -> Self;
    fn square(&self) -> Self;
    fn inverse(&self) -> Option<Self>;
    fn to_u64(&self) -> Option<u64>;

    /// Does a field multiplication with a `u64`.
    #[inline(always)]
    fn mul_u64(&self, n: u64) -> Self {
        *self * Self::from_u64(n)
    }

    fn mul_pow_2(&self, mut pow: usize) -> Self {
        if pow > 255 {
            panic!("pow > 255");
        }
        let mut res = *self;
        while pow >= 64 {
            res = res.mul_u64(1 << 63);
            pow -= 63;
        }
        res.mul_u64(1 << pow)
    }

    /// `2^pow` as a field element.
    #[inline]
    fn pow_2(pow: usize) -> Self {
        Self::one().mul_pow_2(pow)
    }
}

pub mod ark;
