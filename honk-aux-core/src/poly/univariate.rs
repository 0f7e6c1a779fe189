use std::ops::{Add, AddAssign, Index, Mul, MulAssign, Neg, Sub, SubAssign};

use bytemuck::TransparentWrapper;

use crate::field::HonkField;

/// A univariate polynomial of degree < `N`, stored as its evaluations at the points
/// `0, 1, ..., N - 1`.
///
/// Addition and multiplication are pointwise. In evaluation form this *is* polynomial
/// arithmetic as long as the degree of the result stays below `N`, which is the invariant
/// every relation sizes its univariates for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(transparent)]
pub struct Univariate<F, const N: usize> {
    pub evaluations: [F; N],
}

// SAFETY: `Univariate` is `repr(transparent)` over `[F; N]`.
unsafe impl<F, const N: usize> TransparentWrapper<[F; N]> for Univariate<F, N> {}

impl<F: HonkField, const N: usize> Univariate<F, N> {
    pub const LENGTH: usize = N;

    pub fn new(evaluations: [F; N]) -> Self {
        Self { evaluations }
    }

    pub fn zero() -> Self {
        Self {
            evaluations: [F::zero(); N],
        }
    }

    pub fn constant(value: F) -> Self {
        Self {
            evaluations: [value; N],
        }
    }

    pub fn random<R: rand_core::RngCore>(rng: &mut R) -> Self {
        Self {
            evaluations: std::array::from_fn(|_| F::random(rng)),
        }
    }

    /// The degree-1 polynomial through `(0, v0)` and `(1, v1)`, evaluated at every point
    /// of the domain. This is how a column's pair of hypercube values becomes an edge.
    pub fn extend_edge(v0: F, v1: F) -> Self {
        let delta = v1 - v0;
        let mut evaluations = [v0; N];
        let mut current = v0;
        for eval in evaluations.iter_mut().skip(1) {
            current += delta;
            *eval = current;
        }
        Self { evaluations }
    }

    /// Reinterprets the first `M` evaluations as a shorter univariate without copying.
    ///
    /// Only sound for relations whose degree fits in `M`. `M > N` fails to compile.
    #[inline]
    pub fn view<const M: usize>(&self) -> &Univariate<F, M> {
        const { assert!(M <= N, "cannot view a univariate as a longer one") };
        match self.evaluations.first_chunk::<M>() {
            Some(prefix) => <Univariate<F, M> as TransparentWrapper<[F; M]>>::wrap_ref(prefix),
            None => unreachable!("M <= N is checked at compile time"),
        }
    }

    #[inline]
    pub fn value_at(&self, i: usize) -> F {
        self.evaluations[i]
    }

    pub fn evaluations(&self) -> &[F; N] {
        &self.evaluations
    }

    pub fn is_zero(&self) -> bool {
        self.evaluations.iter().all(|e| e.is_zero())
    }

    /// Evaluates the polynomial at an arbitrary point `u` by Lagrange interpolation over
    /// the domain `{0, ..., N - 1}`.
    pub fn evaluate(&self, u: &F) -> F {
        if let Some(i) = (0..N).find(|&i| F::from_u64(i as u64) == *u) {
            return self.evaluations[i];
        }

        // l(u) = prod_j (u - j)
        let differences: [F; N] = std::array::from_fn(|j| *u - F::from_u64(j as u64));
        let full_product: F = differences.iter().product();

        let mut result = F::zero();
        for (i, eval) in self.evaluations.iter().enumerate() {
            // w_i = prod_{j != i} (i - j) = (-1)^(N - 1 - i) * i! * (N - 1 - i)!
            let mut weight = F::one();
            for j in 0..N {
                if j != i {
                    weight *= F::from_i64(i as i64 - j as i64);
                }
            }
            let denominator = weight * differences[i];
            let inverse = denominator
                .inverse()
                .unwrap_or_else(|| unreachable!("u is not a domain point"));
            result += *eval * full_product * inverse;
        }
        result
    }
}

impl<F: HonkField, const N: usize> Default for Univariate<F, N> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<F, const N: usize> Index<usize> for Univariate<F, N> {
    type Output = F;

    #[inline(always)]
    fn index(&self, index: usize) -> &F {
        &self.evaluations[index]
    }
}

impl<F: HonkField, const N: usize> From<[F; N]> for Univariate<F, N> {
    fn from(evaluations: [F; N]) -> Self {
        Self::new(evaluations)
    }
}

impl<F: HonkField, const N: usize> AddAssign<&Self> for Univariate<F, N> {
    #[inline]
    fn add_assign(&mut self, rhs: &Self) {
        for (lhs, rhs) in self.evaluations.iter_mut().zip(rhs.evaluations.iter()) {
            *lhs += rhs;
        }
    }
}

impl<F: HonkField, const N: usize> SubAssign<&Self> for Univariate<F, N> {
    #[inline]
    fn sub_assign(&mut self, rhs: &Self) {
        for (lhs, rhs) in self.evaluations.iter_mut().zip(rhs.evaluations.iter()) {
            *lhs -= rhs;
        }
    }
}

impl<F: HonkField, const N: usize> MulAssign<&Self> for Univariate<F, N> {
    #[inline]
    fn mul_assign(&mut self, rhs: &Self) {
        for (lhs, rhs) in self.evaluations.iter_mut().zip(rhs.evaluations.iter()) {
            *lhs *= rhs;
        }
    }
}

impl<F: HonkField, const N: usize> AddAssign<F> for Univariate<F, N> {
    #[inline]
    fn add_assign(&mut self, rhs: F) {
        self.evaluations.iter_mut().for_each(|e| *e += rhs);
    }
}

impl<F: HonkField, const N: usize> SubAssign<F> for Univariate<F, N> {
    #[inline]
    fn sub_assign(&mut self, rhs: F) {
        self.evaluations.iter_mut().for_each(|e| *e -= rhs);
    }
}

impl<F: HonkField, const N: usize> MulAssign<F> for Univariate<F, N> {
    #[inline]
    fn mul_assign(&mut self, rhs: F) {
        self.evaluations.iter_mut().for_each(|e| *e *= rhs);
    }
}

impl<F: HonkField, const N: usize> Neg for Univariate<F, N> {
    type Output = Self;

    #[inline]
    fn neg(mut self) -> Self {
        self.evaluations.iter_mut().for_each(|e| *e = -*e);
        self
    }
}

/// Owned and borrowed binary operators, all forwarding to the `*Assign<&Self>` impls.
macro_rules! impl_univariate_binop {
    ($trait:ident, $method:ident, $assign_method:ident) => {
        impl<F: HonkField, const N: usize> $trait<Univariate<F, N>> for Univariate<F, N> {
            type Output = Self;

            #[inline]
            fn $method(mut self, rhs: Self) -> Self {
                self.$assign_method(&rhs);
                self
            }
        }

        impl<'a, F: HonkField, const N: usize> $trait<&'a Univariate<F, N>> for Univariate<F, N> {
            type Output = Self;

            #[inline]
            fn $method(mut self, rhs: &'a Self) -> Self {
                self.$assign_method(rhs);
                self
            }
        }

        impl<'a, 'b, F: HonkField, const N: usize> $trait<&'b Univariate<F, N>>
            for &'a Univariate<F, N>
        {
            type Output = Univariate<F, N>;

            #[inline]
            fn $method(self, rhs: &'b Univariate<F, N>) -> Univariate<F, N> {
                let mut result = *self;
                result.$assign_method(rhs);
                result
            }
        }

        impl<F: HonkField, const N: usize> $trait<F> for Univariate<F, N> {
            type Output = Self;

            #[inline]
            fn $method(mut self, rhs: F) -> Self {
                self.$assign_method(rhs);
                self
            }
        }

        impl<'a, F: HonkField, const N: usize> $trait<&'a F> for Univariate<F, N> {
            type Output = Self;

            #[inline]
            fn $method(mut self, rhs: &'a F) -> Self {
                self.$assign_method(*rhs);
                self
            }
        }
    };
}

impl_univariate_binop!(Add, add, add_assign);
impl_univariate_binop!(Sub, sub, sub_assign);
impl_univariate_binop!(Mul, mul, mul_assign);

impl<F: HonkField, const N: usize> AddAssign<Self> for Univariate<F, N> {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self += &rhs;
    }
}

impl<F: HonkField, const N: usize> MulAssign<Self> for Univariate<F, N> {
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        *self *= &rhs;
    }
}
