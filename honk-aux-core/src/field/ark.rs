use ark_ff::{prelude::*, BigInt, PrimeField, UniformRand};

use super::{FieldOps, HonkField};

impl FieldOps for ark_bn254::Fr {}
impl FieldOps<&ark_bn254::Fr, ark_bn254::Fr> for &ark_bn254::Fr {}
impl FieldOps<&ark_bn254::Fr, ark_bn254::Fr> for ark_bn254::Fr {}

impl HonkField for ark_bn254::Fr {
    const NUM_BYTES: usize = 32;

    fn random<R: rand_core::RngCore>(rng: &mut R) -> Self {
        <Self as UniformRand>::rand(rng)
    }

    #[inline]
    fn from_u64(n: u64) -> Self {
        <Self as From<u64>>::from(n)
    }

    #[inline]
    fn from_u128(n: u128) -> Self {
        if n <= u64::MAX as u128 {
            <Self as HonkField>::from_u64(n as u64)
        } else {
            let bigint = BigInt::new([n as u64, (n >> 64) as u64, 0, 0]);
            // Any u128 is far below the 254-bit modulus.
            <Self as PrimeField>::from_bigint(bigint).unwrap_or_default()
        }
    }

    fn from_i64(val: i64) -> Self {
        if val.is_negative() {
            -<Self as HonkField>::from_u64(val.unsigned_abs())
        } else {
            <Self as HonkField>::from_u64(val as u64)
        }
    }

    fn square(&self) -> Self {
        <Self as ark_ff::Field>::square(self)
    }

    fn inverse(&self) -> Option<Self> {
        <Self as ark_ff::Field>::inverse(self)
    }

    fn to_u64(&self) -> Option<u64> {
        let bigint = self.into_bigint();
        let limbs: &[u64] = bigint.as_ref();
        let result = limbs[0];

        if <Self as HonkField>::from_u64(result) != *self {
            None
        } else {
            Some(result)
        }
    }
}
