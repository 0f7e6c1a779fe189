use std::marker::PhantomData;

use rayon::prelude::*;

use crate::field::HonkField;
use crate::relations::{Accumulator, Relation, RelationParameters};
use crate::trace::Trace;
use crate::utils::errors::RelationFailure;

/// `[1, ζ, ζ², ...]`, one scaling factor per edge.
pub fn scaling_factor_powers<F: HonkField>(zeta: F, num_edges: usize) -> Vec<F> {
    std::iter::successors(Some(F::one()), |power| Some(*power * zeta))
        .take(num_edges)
        .collect()
}

/// The relation part of one sumcheck round: every edge of the first variable extended to
/// `N` points and fed through a relation, each scaled by its own factor.
pub struct RelationRound<F: HonkField, R: Relation<F>> {
    relation_parameters: RelationParameters<F>,
    scaling_factors: Vec<F>,
    _relation: PhantomData<R>,
}

impl<F: HonkField, R: Relation<F>> RelationRound<F, R> {
    pub fn new(relation_parameters: RelationParameters<F>, scaling_factors: Vec<F>) -> Self {
        Self {
            relation_parameters,
            scaling_factors,
            _relation: PhantomData,
        }
    }

    /// Scales edge `i` by `ζ^i`.
    pub fn with_challenge(
        relation_parameters: RelationParameters<F>,
        zeta: F,
        num_edges: usize,
    ) -> Self {
        Self::new(relation_parameters, scaling_factor_powers(zeta, num_edges))
    }

    pub fn relation_parameters(&self) -> &RelationParameters<F> {
        &self.relation_parameters
    }

    #[inline]
    fn add_edge<const N: usize>(&self, accumulators: &mut R::Accumulators, trace: &Trace<F>, i: usize) {
        let edge = trace.edge::<N>(i);
        R::add_edge_contribution(
            accumulators,
            &edge,
            &self.relation_parameters,
            &self.scaling_factors[i],
        );
    }

    fn check_shape<const N: usize>(&self, trace: &Trace<F>) {
        assert!(
            N >= R::RELATION_LENGTH,
            "{} needs edges of length {}, got {N}",
            R::NAME,
            R::RELATION_LENGTH
        );
        assert_eq!(self.scaling_factors.len(), trace.num_edges());
    }

    /// Sums the contributions of all edges, one accumulator per worker merged at the end.
    #[tracing::instrument(skip_all, name = "RelationRound::accumulate")]
    pub fn accumulate<const N: usize>(&self, trace: &Trace<F>) -> R::Accumulators {
        self.check_shape::<N>(trace);
        (0..trace.num_edges())
            .into_par_iter()
            .fold(R::Accumulators::default, |mut accumulators, i| {
                self.add_edge::<N>(&mut accumulators, trace, i);
                accumulators
            })
            .reduce(R::Accumulators::default, |mut running, new| {
                running.merge(&new);
                running
            })
    }

    #[tracing::instrument(skip_all, name = "RelationRound::accumulate_sequential")]
    pub fn accumulate_sequential<const N: usize>(&self, trace: &Trace<F>) -> R::Accumulators {
        self.check_shape::<N>(trace);
        let mut accumulators = R::Accumulators::default();
        for i in 0..trace.num_edges() {
            self.add_edge::<N>(&mut accumulators, trace, i);
        }
        accumulators
    }
}

/// Evaluates the scalar form of `R` on every row of `trace` and reports the first row with
/// a non-vanishing sub-relation.
#[tracing::instrument(skip_all, name = "check_relation")]
pub fn check_relation<F: HonkField, R: Relation<F>>(
    trace: &Trace<F>,
    relation_parameters: &RelationParameters<F>,
) -> Result<(), RelationFailure> {
    let failure = (0..trace.len()).into_par_iter().find_map_first(|row| {
        let mut evaluations = R::Evaluations::default();
        R::add_full_relation_value_contribution(
            &mut evaluations,
            &trace.row(row),
            relation_parameters,
            &F::one(),
        );
        evaluations
            .as_ref()
            .iter()
            .position(|value| !value.is_zero())
            .map(|subrelation| RelationFailure {
                relation: R::NAME,
                row,
                subrelation,
            })
    });
    match failure {
        Some(failure) => {
            tracing::debug!(%failure, "relation check failed");
            Err(failure)
        }
        None => Ok(()),
    }
}
