use std::fmt::Debug;
use std::ops::{Add, AddAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::field::HonkField;
use crate::poly::univariate::Univariate;

pub mod auxiliary;
pub mod entities;
pub mod memory_record;
pub mod parameters;

pub use auxiliary::AuxiliaryRelation;
pub use entities::{AllEntities, Column, Entity, ExtendedEdges, PurportedEvaluations};
pub use parameters::RelationParameters;

/// The algebra a relation's identities are written in.
///
/// Implemented by the field itself (verifier side: one value per entity) and by
/// [`Univariate`] (prover side: one extended edge per entity), so both sides run the same
/// code and cannot drift apart.
pub trait RelationValue<F: HonkField>:
    Clone
    + Debug
    + Add<Self, Output = Self>
    + for<'a> Add<&'a Self, Output = Self>
    + Sub<Self, Output = Self>
    + for<'a> Sub<&'a Self, Output = Self>
    + Mul<Self, Output = Self>
    + for<'a> Mul<&'a Self, Output = Self>
    + Add<F, Output = Self>
    + Sub<F, Output = Self>
    + Mul<F, Output = Self>
    + Neg<Output = Self>
    + AddAssign<Self>
    + for<'a> AddAssign<&'a Self>
    + for<'a> SubAssign<&'a Self>
    + for<'a> MulAssign<&'a Self>
    + MulAssign<F>
{
    /// `1 − self`.
    #[inline]
    fn one_minus(&self) -> Self {
        -self.clone() + F::one()
    }

    /// `self² − self`, which vanishes exactly on {0, 1}.
    #[inline]
    fn booleanity(&self) -> Self {
        self.clone() * self - self
    }
}

impl<F: HonkField> RelationValue<F> for F {}
impl<F: HonkField, const N: usize> RelationValue<F> for Univariate<F, N> {}

/// Per-sub-relation running sums that can be merged across workers.
pub trait Accumulator<F: HonkField>: Clone + Debug + Default + Send + Sync {
    fn merge(&mut self, other: &Self);
    /// One value per sub-relation: each accumulated univariate evaluated at `u`.
    fn evaluate(&self, u: &F) -> Vec<F>;
}

/// `NUM` sub-relation accumulators, each a univariate of length `LEN`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SubrelationAccumulators<F, const LEN: usize, const NUM: usize>(
    pub [Univariate<F, LEN>; NUM],
);

impl<F: HonkField, const LEN: usize, const NUM: usize> SubrelationAccumulators<F, LEN, NUM> {
    pub fn zero() -> Self {
        Self(std::array::from_fn(|_| Univariate::zero()))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Univariate<F, LEN>> {
        self.0.iter()
    }

    /// The value of every sub-relation at domain point `point`.
    pub fn evaluations_at(&self, point: usize) -> [F; NUM] {
        std::array::from_fn(|i| self.0[i].value_at(point))
    }

    pub fn is_zero(&self) -> bool {
        self.0.iter().all(Univariate::is_zero)
    }
}

impl<F: HonkField, const LEN: usize, const NUM: usize> Default
    for SubrelationAccumulators<F, LEN, NUM>
{
    fn default() -> Self {
        Self::zero()
    }
}

impl<F, const LEN: usize, const NUM: usize> Index<usize> for SubrelationAccumulators<F, LEN, NUM> {
    type Output = Univariate<F, LEN>;

    fn index(&self, subrelation: usize) -> &Self::Output {
        &self.0[subrelation]
    }
}

impl<F, const LEN: usize, const NUM: usize> IndexMut<usize>
    for SubrelationAccumulators<F, LEN, NUM>
{
    fn index_mut(&mut self, subrelation: usize) -> &mut Self::Output {
        &mut self.0[subrelation]
    }
}

impl<F: HonkField, const LEN: usize, const NUM: usize> AddAssign<&Self>
    for SubrelationAccumulators<F, LEN, NUM>
{
    fn add_assign(&mut self, rhs: &Self) {
        for (lhs, rhs) in self.0.iter_mut().zip(rhs.0.iter()) {
            *lhs += rhs;
        }
    }
}

impl<F: HonkField, const LEN: usize, const NUM: usize> Accumulator<F>
    for SubrelationAccumulators<F, LEN, NUM>
{
    fn merge(&mut self, other: &Self) {
        *self += other;
    }

    fn evaluate(&self, u: &F) -> Vec<F> {
        self.0.iter().map(|univariate| univariate.evaluate(u)).collect()
    }
}

/// A family of polynomial identities checked by sumcheck.
///
/// Each sub-relation is accumulated independently; the orchestrator later batches them
/// with powers of a separator challenge. Accumulation is plain field addition, so edges
/// may be visited in any order and partial accumulators merged at any point.
pub trait Relation<F: HonkField>: Send + Sync {
    const NAME: &'static str;
    /// One more than the degree of the relation.
    const RELATION_LENGTH: usize;
    const SUBRELATION_LENGTHS: &'static [usize];

    type Accumulators: Accumulator<F>;
    type Evaluations: Clone + Debug + Default + AsRef<[F]> + AsMut<[F]>;

    /// Adds `scaling_factor · C(edge)` to each sub-relation accumulator, where `edge`
    /// holds every entity extended to `N ≥ RELATION_LENGTH` points.
    fn add_edge_contribution<const N: usize>(
        accumulators: &mut Self::Accumulators,
        edge: &ExtendedEdges<F, N>,
        relation_parameters: &RelationParameters<F>,
        scaling_factor: &F,
    );

    /// The same identities over plain field values: what a verifier evaluates at the
    /// final sumcheck point, and what a row-by-row trace check evaluates at each row.
    fn add_full_relation_value_contribution(
        evaluations: &mut Self::Evaluations,
        purported_evaluations: &PurportedEvaluations<F>,
        relation_parameters: &RelationParameters<F>,
        scaling_factor: &F,
    );

    fn num_subrelations() -> usize {
        Self::SUBRELATION_LENGTHS.len()
    }
}
