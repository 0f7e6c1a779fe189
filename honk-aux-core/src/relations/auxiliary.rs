//! The auxiliary relation: RAM/ROM memory consistency and non-native field arithmetic.
//!
//! Several custom gates share the `q_aux` selector and are told apart by which of the
//! other selectors are set:
//!
//! | gate type                    | q_aux | q_l | q_r | q_o | q_4 | q_m | q_c | q_arith |
//! | ---------------------------- | ----- | --- | --- | --- | --- | --- | --- | ------- |
//! | Bigfield Limb Accumulation 1 | 1     | 0   | 0   | 1   | 1   | 0   | --- | 0       |
//! | Bigfield Limb Accumulation 2 | 1     | 0   | 0   | 1   | 0   | 1   | --- | 0       |
//! | Bigfield Product 1           | 1     | 0   | 1   | 1   | 0   | 0   | --- | 0       |
//! | Bigfield Product 2           | 1     | 0   | 1   | 0   | 1   | 0   | --- | 0       |
//! | Bigfield Product 3           | 1     | 0   | 1   | 0   | 0   | 1   | --- | 0       |
//! | RAM/ROM access gate          | 1     | 1   | 0   | 0   | 0   | 1   | --- | 0       |
//! | RAM timestamp check          | 1     | 1   | 0   | 0   | 1   | 0   | --- | 0       |
//! | ROM consistency check        | 1     | 1   | 1   | 0   | 0   | 0   | --- | 0       |
//! | RAM consistency check        | 1     | 0   | 0   | 0   | 0   | 0   | 0   | 1       |
//!
//! The RAM consistency identity is degree 3, so only two selectors can gate it if the
//! relation is to stay at degree 5. The selectors are mutually exclusive per row; the
//! circuit builder guarantees that and nothing here checks it.

use crate::field::HonkField;

use super::entities::{AllEntities, ExtendedEdges, PurportedEvaluations};
use super::memory_record::{fold_fields, partial_record_check};
use super::{Relation, RelationParameters, RelationValue, SubrelationAccumulators};

/// Bigfield limbs are 68 bits wide.
pub const NUM_LIMB_BITS: usize = 68;
/// Range decomposition splits a limb into 14-bit sublimbs.
pub const NUM_SUBLIMB_BITS: usize = 14;

pub const RELATION_LENGTH: usize = 6;
pub const NUM_SUBRELATIONS: usize = 6;

pub const AUXILIARY_IDENTITY: usize = 0;
pub const ROM_INDEX_IS_MONOTONIC: usize = 1;
pub const ROM_VALUES_MATCH_ON_EQUAL_INDEX: usize = 2;
pub const RAM_READ_MATCHES_LAST_WRITE: usize = 3;
pub const RAM_INDEX_IS_MONOTONIC: usize = 4;
pub const RAM_NEXT_ACCESS_IS_BOOLEAN: usize = 5;

pub type AuxiliaryAccumulators<F> =
    SubrelationAccumulators<F, RELATION_LENGTH, NUM_SUBRELATIONS>;

#[inline]
pub fn limb_size<F: HonkField>() -> F {
    F::pow_2(NUM_LIMB_BITS)
}

#[inline]
pub fn sublimb_shift<F: HonkField>() -> F {
    F::pow_2(NUM_SUBLIMB_BITS)
}

pub struct AuxiliaryRelation;

impl AuxiliaryRelation {
    /// Evaluates all six sub-relations, each already multiplied by its selector product
    /// and by `scaling_factor`.
    ///
    /// Generic over the value type so the prover (univariates over an edge) and the
    /// verifier (field elements at a point) evaluate literally the same expressions.
    pub fn evaluate_subrelations<F: HonkField, T: RelationValue<F>>(
        entities: &AllEntities<&T>,
        eta: F,
        scaling_factor: F,
    ) -> [T; NUM_SUBRELATIONS] {
        let AllEntities {
            q_m,
            q_c,
            q_l,
            q_r,
            q_o,
            q_4,
            q_arith,
            q_aux,
            w_l,
            w_r,
            w_o,
            w_4,
            w_l_shift,
            w_r_shift,
            w_o_shift,
            w_4_shift,
        } = *entities;

        let limb_size = limb_size::<F>();
        let sublimb_shift = sublimb_shift::<F>();

        // Bigfield gate 2: (w_1·w_4 + w_2·w_3 − w_3')·2^68 − w_4' + w_1·w_2' + w_1'·w_2
        let mut limb_subproduct = w_l.clone() * w_r_shift + &(w_l_shift.clone() * w_r);
        let mut non_native_field_gate_2 = w_l.clone() * w_4 + &(w_r.clone() * w_o) - w_o_shift;
        non_native_field_gate_2 *= limb_size;
        non_native_field_gate_2 -= w_4_shift;
        non_native_field_gate_2 += &limb_subproduct;
        non_native_field_gate_2 *= q_4;

        limb_subproduct *= limb_size;
        limb_subproduct += &(w_l_shift.clone() * w_r_shift);
        let non_native_field_gate_1 = (limb_subproduct.clone() - &(w_o.clone() + w_4)) * q_o;
        let non_native_field_gate_3 =
            (limb_subproduct + w_4 - &(w_o_shift.clone() + w_4_shift)) * q_m;

        let non_native_field_identity =
            (non_native_field_gate_1 + non_native_field_gate_2 + non_native_field_gate_3) * q_r;

        // Sublimbs of a limb, most significant first: (w_2', w_1', w_3, w_2, w_1) -> w_4
        let mut limb_accumulator_1 = w_r_shift.clone() * sublimb_shift;
        limb_accumulator_1 += w_l_shift;
        limb_accumulator_1 *= sublimb_shift;
        limb_accumulator_1 += w_o;
        limb_accumulator_1 *= sublimb_shift;
        limb_accumulator_1 += w_r;
        limb_accumulator_1 *= sublimb_shift;
        limb_accumulator_1 += w_l;
        limb_accumulator_1 -= w_4;
        limb_accumulator_1 *= q_4;

        // (w_3', w_2', w_1', w_4, w_3) -> w_4'
        let mut limb_accumulator_2 = w_o_shift.clone() * sublimb_shift;
        limb_accumulator_2 += w_r_shift;
        limb_accumulator_2 *= sublimb_shift;
        limb_accumulator_2 += w_l_shift;
        limb_accumulator_2 *= sublimb_shift;
        limb_accumulator_2 += w_4;
        limb_accumulator_2 *= sublimb_shift;
        limb_accumulator_2 += w_o;
        limb_accumulator_2 -= w_4_shift;
        limb_accumulator_2 *= q_m;

        let limb_accumulator_identity = (limb_accumulator_1 + limb_accumulator_2) * q_o;

        // Memory record check: q_c + w_1·η + w_2·η² + w_3·η³ − w_4 (q_c = 0 for ROM).
        let partial_record_check = partial_record_check(q_c, w_l, w_r, w_o, eta);
        let memory_record_check = partial_record_check.clone() - w_4;

        let q_aux_by_scaling = q_aux.clone() * scaling_factor;

        // ROM consistency over the sorted records:
        //  1. w_1, w_2, w_3 fold to the record in w_4
        //  2. adjacent indices differ by 0 or 1
        //  3. equal adjacent indices imply equal records
        let index_delta = w_l_shift.clone() - w_l;
        let record_delta = w_4_shift.clone() - w_4;

        let index_is_monotonically_increasing = index_delta.booleanity();
        let adjacent_values_match_if_adjacent_indices_match =
            index_delta.one_minus() * &record_delta;

        let rom_selector = q_l.clone() * q_r;
        let rom_gate = rom_selector.clone() * &q_aux_by_scaling;
        let rom_index_is_monotonic = index_is_monotonically_increasing.clone() * &rom_gate;
        let rom_values_match = adjacent_values_match_if_adjacent_indices_match * &rom_gate;
        let ROM_consistency_check_identity = memory_record_check.clone() * &rom_selector;

        // RAM consistency over the sorted records.
        //
        // For an honest prover w_4 − (w_1·η + w_2·η² + w_3·η³) is the access bit, so it
        // has to be boolean. If two adjacent records share an index and the second one
        // is a READ, their values must match. Every RAM cell must be initialised by a
        // WRITE; that is the circuit writer's job.
        let access_type = w_4.clone() - &partial_record_check;
        let access_check = access_type.booleanity();

        let next_gate_access_type =
            w_4_shift.clone() - &fold_fields(w_l_shift, w_r_shift, w_o_shift, eta);

        let value_delta = w_o_shift.clone() - w_o;
        let adjacent_values_match_if_adjacent_indices_match_and_next_access_is_a_read_operation =
            index_delta.one_minus() * &value_delta * &next_gate_access_type.one_minus();

        // The read/write identity cannot be applied to the last sorted record, so its
        // access bit is instead checked from the record before it.
        let next_gate_access_type_is_boolean = next_gate_access_type.booleanity();

        let ram_gate = q_arith.clone() * &q_aux_by_scaling;
        let ram_read_matches_last_write =
            adjacent_values_match_if_adjacent_indices_match_and_next_access_is_a_read_operation
                * &ram_gate;
        let ram_index_is_monotonic = index_is_monotonically_increasing * &ram_gate;
        let ram_next_access_is_boolean = next_gate_access_type_is_boolean * &ram_gate;
        let RAM_consistency_check_identity = access_check * q_arith;

        // RAM timestamp consistency
        //
        // | w_1   | w_2       | w_3             | w_4 |
        // | index | timestamp | timestamp_check | --  |
        //
        // If index_{i+1} == index_i then timestamp_check = timestamp_{i+1} − timestamp_i,
        // and with index_{i+1} == index_i + 1 it must be zero.
        let timestamp_delta = w_r_shift.clone() - w_r;
        let RAM_timestamp_check_identity = index_delta.one_minus() * &timestamp_delta - w_o;

        let mut memory_identity = ROM_consistency_check_identity;
        memory_identity += RAM_timestamp_check_identity * &(q_4.clone() * q_l);
        memory_identity += memory_record_check * &(q_m.clone() * q_l);
        memory_identity += RAM_consistency_check_identity;

        let auxiliary_identity =
            (memory_identity + non_native_field_identity + limb_accumulator_identity)
                * &q_aux_by_scaling;

        [
            auxiliary_identity,
            rom_index_is_monotonic,
            rom_values_match,
            ram_read_matches_last_write,
            ram_index_is_monotonic,
            ram_next_access_is_boolean,
        ]
    }
}

impl<F: HonkField> Relation<F> for AuxiliaryRelation {
    const NAME: &'static str = "Auxiliary";
    const RELATION_LENGTH: usize = RELATION_LENGTH;
    const SUBRELATION_LENGTHS: &'static [usize] = &[RELATION_LENGTH; NUM_SUBRELATIONS];

    type Accumulators = AuxiliaryAccumulators<F>;
    type Evaluations = [F; NUM_SUBRELATIONS];

    #[inline]
    fn add_edge_contribution<const N: usize>(
        accumulators: &mut Self::Accumulators,
        edge: &ExtendedEdges<F, N>,
        relation_parameters: &RelationParameters<F>,
        scaling_factor: &F,
    ) {
        // Every sub-relation has the same length, so one view serves them all.
        let view = edge.view::<RELATION_LENGTH>();
        let contributions =
            Self::evaluate_subrelations(&view, relation_parameters.eta, *scaling_factor);
        for (accumulator, contribution) in accumulators.0.iter_mut().zip(contributions.iter()) {
            *accumulator += contribution;
        }
    }

    #[inline]
    fn add_full_relation_value_contribution(
        evaluations: &mut Self::Evaluations,
        purported_evaluations: &PurportedEvaluations<F>,
        relation_parameters: &RelationParameters<F>,
        scaling_factor: &F,
    ) {
        let contributions = Self::evaluate_subrelations(
            &purported_evaluations.as_refs(),
            relation_parameters.eta,
            *scaling_factor,
        );
        for (evaluation, contribution) in evaluations.iter_mut().zip(contributions) {
            *evaluation += contribution;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::poly::univariate::Univariate;
    use crate::relations::entities::Entity;
    use crate::relations::memory_record::fold_memory_record;
    use crate::relations::Accumulator;
    use ark_bn254::Fr;
    use ark_std::{test_rng, One, Zero};

    fn fr(n: u64) -> Fr {
        <Fr as HonkField>::from_u64(n)
    }

    fn evaluate_row(row: &PurportedEvaluations<Fr>, eta: Fr) -> [Fr; NUM_SUBRELATIONS] {
        let mut evals = [Fr::zero(); NUM_SUBRELATIONS];
        AuxiliaryRelation::add_full_relation_value_contribution(
            &mut evals,
            row,
            &RelationParameters::with_eta(eta),
            &Fr::one(),
        );
        evals
    }

    fn random_row(rng: &mut impl rand_core::RngCore) -> PurportedEvaluations<Fr> {
        AllEntities::from_fn(|_| Fr::random(rng))
    }

    #[test]
    fn memory_record_check_on_access_gate() {
        let eta = fr(7);
        let mut row = PurportedEvaluations::<Fr>::default();
        row.q_aux = Fr::one();
        row.q_l = Fr::one();
        row.q_m = Fr::one();
        row.q_c = fr(1);
        row.w_l = fr(3);
        row.w_r = fr(5);
        row.w_o = fr(9);
        row.w_4 = fr(3354);
        assert_eq!(evaluate_row(&row, eta), [Fr::zero(); NUM_SUBRELATIONS]);

        row.w_4 = fr(3355);
        let evals = evaluate_row(&row, eta);
        assert_eq!(evals[AUXILIARY_IDENTITY], -Fr::one());
        assert!(evals[1..].iter().all(Fr::is_zero));
    }

    #[test]
    fn ram_access_type_must_be_boolean() {
        let eta = fr(7);
        let mut row = PurportedEvaluations::<Fr>::default();
        row.q_aux = Fr::one();
        row.q_arith = Fr::one();
        row.w_l = fr(3);
        row.w_r = fr(5);
        row.w_o = fr(9);
        // the next row is a read of the following index
        row.w_l_shift = fr(4);
        row.w_4_shift = fold_memory_record(fr(4), Fr::zero(), Fr::zero(), Fr::zero(), eta);

        for access in 0..2 {
            row.w_4 = fold_memory_record(fr(3), fr(5), fr(9), fr(access), eta);
            assert_eq!(evaluate_row(&row, eta), [Fr::zero(); NUM_SUBRELATIONS]);
        }

        row.w_4 = fold_memory_record(fr(3), fr(5), fr(9), fr(2), eta);
        // 2² − 2
        assert_eq!(evaluate_row(&row, eta)[AUXILIARY_IDENTITY], fr(2));
    }

    #[test]
    fn ram_timestamp_check() {
        let mut row = PurportedEvaluations::<Fr>::default();
        row.q_aux = Fr::one();
        row.q_l = Fr::one();
        row.q_4 = Fr::one();
        row.w_l = fr(2);
        row.w_l_shift = fr(2);
        row.w_r = fr(5);
        row.w_r_shift = fr(8);
        row.w_o = fr(3);
        assert!(evaluate_row(&row, fr(11)).iter().all(Fr::is_zero));

        row.w_o = Fr::zero();
        assert_eq!(evaluate_row(&row, fr(11))[AUXILIARY_IDENTITY], fr(3));

        // A new index forces the timestamp difference column to zero.
        row.w_l_shift = fr(3);
        assert!(evaluate_row(&row, fr(11)).iter().all(Fr::is_zero));
        row.w_o = fr(3);
        assert_eq!(evaluate_row(&row, fr(11))[AUXILIARY_IDENTITY], -fr(3));
    }

    #[test]
    fn rom_consistency_subrelations() {
        let eta = fr(5);
        let mut row = PurportedEvaluations::<Fr>::default();
        row.q_aux = Fr::one();
        row.q_l = Fr::one();
        row.q_r = Fr::one();
        [row.w_l, row.w_r, row.w_o, row.w_4] = [fr(1), fr(6), fr(4), Fr::zero()];
        row.w_4 = fold_memory_record(row.w_l, row.w_r, row.w_o, Fr::zero(), eta);

        // Same index, same record.
        row.w_l_shift = row.w_l;
        row.w_4_shift = row.w_4;
        assert!(evaluate_row(&row, eta).iter().all(Fr::is_zero));

        // Same index, different record.
        row.w_4_shift = row.w_4 + Fr::one();
        let evals = evaluate_row(&row, eta);
        assert_eq!(evals[ROM_VALUES_MATCH_ON_EQUAL_INDEX], Fr::one());
        assert!(evals[ROM_INDEX_IS_MONOTONIC].is_zero());

        // Index jumps by two.
        row.w_l_shift = fr(3);
        let evals = evaluate_row(&row, eta);
        assert_eq!(evals[ROM_INDEX_IS_MONOTONIC], fr(2));
        // (1 − 2) · 1
        assert_eq!(evals[ROM_VALUES_MATCH_ON_EQUAL_INDEX], -Fr::one());
        // RAM sub-relations are not selected on a ROM row.
        assert!(evals[RAM_READ_MATCHES_LAST_WRITE..].iter().all(Fr::is_zero));
    }

    #[test]
    fn ram_sorted_block_subrelations() {
        let eta = fr(3);
        let mut row = PurportedEvaluations::<Fr>::default();
        row.q_aux = Fr::one();
        row.q_arith = Fr::one();
        [row.w_l, row.w_r, row.w_o] = [fr(2), fr(4), fr(6)];
        row.w_4 = fold_memory_record(row.w_l, row.w_r, row.w_o, Fr::one(), eta);
        // Next record skips an index.
        [row.w_l_shift, row.w_r_shift, row.w_o_shift] = [fr(4), fr(1), fr(6)];
        row.w_4_shift =
            fold_memory_record(row.w_l_shift, row.w_r_shift, row.w_o_shift, Fr::zero(), eta);

        let evals = evaluate_row(&row, eta);
        assert_eq!(evals[RAM_INDEX_IS_MONOTONIC], fr(2));
        // (1 − 2) · 0 · 1
        assert!(evals[RAM_READ_MATCHES_LAST_WRITE].is_zero());
        assert!(evals[RAM_NEXT_ACCESS_IS_BOOLEAN].is_zero());
        assert!(evals[AUXILIARY_IDENTITY].is_zero());

        // A write to the same index may change the value; a read may not.
        row.w_l_shift = fr(2);
        row.w_o_shift = fr(8);
        row.w_4_shift =
            fold_memory_record(row.w_l_shift, row.w_r_shift, row.w_o_shift, Fr::one(), eta);
        assert!(evaluate_row(&row, eta).iter().all(Fr::is_zero));
        row.w_4_shift -= Fr::one();
        assert_eq!(evaluate_row(&row, eta)[RAM_READ_MATCHES_LAST_WRITE], fr(2));
    }

    // a = a0·2^68 + a1 and b = b0·2^68 + b1, with (a0, b0) on the gate row and
    // (a1, b1) on the next.
    const A: (u128, u128) = (3, 1000);
    const B: (u128, u128) = (5, 77);

    fn int(n: u128) -> Fr {
        <Fr as HonkField>::from_u128(n)
    }

    fn bigfield_row(q_o: u64, q_4: u64, q_m: u64) -> PurportedEvaluations<Fr> {
        let mut row = PurportedEvaluations::<Fr>::default();
        row.q_aux = Fr::one();
        row.q_r = Fr::one();
        [row.q_o, row.q_4, row.q_m] = [fr(q_o), fr(q_4), fr(q_m)];
        [row.w_l, row.w_r] = [int(A.0), int(B.0)];
        [row.w_l_shift, row.w_r_shift] = [int(A.1), int(B.1)];
        row
    }

    /// Low 136 bits of `a·b` as integers: `(a0·b1 + a1·b0)·2^68 + a1·b1`.
    fn low_product() -> u128 {
        ((A.0 * B.1 + A.1 * B.0) << NUM_LIMB_BITS) + A.1 * B.1
    }

    #[test]
    fn bigfield_product_1_matches_integer_limb_product() {
        let eta = fr(13);
        let mut row = bigfield_row(1, 0, 0);
        row.w_o = int(123_456);
        row.w_4 = int(low_product() - 123_456);
        assert_eq!(evaluate_row(&row, eta), [Fr::zero(); NUM_SUBRELATIONS]);

        row.w_4 += Fr::one();
        let evals = evaluate_row(&row, eta);
        assert_eq!(evals[AUXILIARY_IDENTITY], -Fr::one());
        assert!(evals[1..].iter().all(Fr::is_zero));

        // The operands are not symmetric, so swapping a1 and b1 breaks the gate.
        row.w_4 -= Fr::one();
        std::mem::swap(&mut row.w_l_shift, &mut row.w_r_shift);
        assert!(!evaluate_row(&row, eta)[AUXILIARY_IDENTITY].is_zero());
    }

    #[test]
    fn bigfield_product_2_matches_integer_limb_product() {
        let eta = fr(13);
        let (w_4, w_o, w_o_shift) = (11u128, 13u128, 20u128);
        let mut row = bigfield_row(0, 1, 0);
        row.w_4 = int(w_4);
        row.w_o = int(w_o);
        row.w_o_shift = int(w_o_shift);
        let high = A.0 * w_4 + B.0 * w_o - w_o_shift;
        row.w_4_shift = int((high << NUM_LIMB_BITS) + A.0 * B.1 + A.1 * B.0);
        assert_eq!(evaluate_row(&row, eta), [Fr::zero(); NUM_SUBRELATIONS]);

        row.w_4_shift += Fr::one();
        let evals = evaluate_row(&row, eta);
        assert_eq!(evals[AUXILIARY_IDENTITY], -Fr::one());
        assert!(evals[1..].iter().all(Fr::is_zero));
    }

    #[test]
    fn bigfield_product_3_matches_integer_limb_product() {
        let eta = fr(13);
        let (w_4, w_o_shift) = (9u128, 100u128);
        let mut row = bigfield_row(0, 0, 1);
        row.w_4 = int(w_4);
        row.w_o_shift = int(w_o_shift);
        row.w_4_shift = int(low_product() + w_4 - w_o_shift);
        assert_eq!(evaluate_row(&row, eta), [Fr::zero(); NUM_SUBRELATIONS]);

        row.w_4_shift += Fr::one();
        let evals = evaluate_row(&row, eta);
        assert_eq!(evals[AUXILIARY_IDENTITY], -Fr::one());
        assert!(evals[1..].iter().all(Fr::is_zero));
    }

    #[test]
    fn scaling_factor_scales_every_subrelation() {
        let mut rng = test_rng();
        let row = random_row(&mut rng);
        let params = RelationParameters::random(&mut rng);
        let scaling = Fr::random(&mut rng);

        let mut unscaled = [Fr::zero(); NUM_SUBRELATIONS];
        AuxiliaryRelation::add_full_relation_value_contribution(
            &mut unscaled,
            &row,
            &params,
            &Fr::one(),
        );
        let mut scaled = [Fr::zero(); NUM_SUBRELATIONS];
        AuxiliaryRelation::add_full_relation_value_contribution(
            &mut scaled,
            &row,
            &params,
            &scaling,
        );
        for (u, s) in unscaled.iter().zip(scaled.iter()) {
            assert_eq!(*u * scaling, *s);
        }
    }

    #[test]
    fn zero_q_aux_disables_everything() {
        let mut rng = test_rng();
        let mut row = random_row(&mut rng);
        row.q_aux = Fr::zero();
        assert!(evaluate_row(&row, Fr::random(&mut rng)).iter().all(Fr::is_zero));
    }

    #[test]
    fn edge_contribution_matches_row_evaluation_at_every_point() {
        let mut rng = test_rng();
        let params = RelationParameters::random(&mut rng);
        let scaling = Fr::random(&mut rng);
        let edge: ExtendedEdges<Fr, 8> = AllEntities::from_fn(|_| {
            Univariate::extend_edge(Fr::random(&mut rng), Fr::random(&mut rng))
        });

        let mut accumulators = AuxiliaryAccumulators::<Fr>::default();
        AuxiliaryRelation::add_edge_contribution(&mut accumulators, &edge, &params, &scaling);

        for point in 0..RELATION_LENGTH {
            let mut expected = [Fr::zero(); NUM_SUBRELATIONS];
            AuxiliaryRelation::add_full_relation_value_contribution(
                &mut expected,
                &edge.row_at(point),
                &params,
                &scaling,
            );
            assert_eq!(accumulators.evaluations_at(point), expected);
        }

        // Degree ≤ 5 means the six evaluations pin the polynomial down: evaluating off the
        // domain agrees with the relation on the interpolated row.
        let r = Fr::random(&mut rng);
        let row_at_r: PurportedEvaluations<Fr> = AllEntities::from_fn(|entity| {
            let column = edge.get(entity);
            column[0] + r * (column[1] - column[0])
        });
        let mut expected = [Fr::zero(); NUM_SUBRELATIONS];
        AuxiliaryRelation::add_full_relation_value_contribution(
            &mut expected,
            &row_at_r,
            &params,
            &scaling,
        );
        assert_eq!(accumulators.evaluate(&r), expected.to_vec());
    }

    #[test]
    fn contributions_accumulate_additively() {
        let mut rng = test_rng();
        let params = RelationParameters::random(&mut rng);
        let edges: Vec<ExtendedEdges<Fr, 6>> = (0..3)
            .map(|_| AllEntities::from_fn(|_| Univariate::random(&mut rng)))
            .collect();

        let mut together = AuxiliaryAccumulators::<Fr>::default();
        for edge in edges.iter() {
            AuxiliaryRelation::add_edge_contribution(&mut together, edge, &params, &Fr::one());
        }

        let mut reversed = AuxiliaryAccumulators::<Fr>::default();
        for edge in edges.iter().rev() {
            let mut single = AuxiliaryAccumulators::<Fr>::default();
            AuxiliaryRelation::add_edge_contribution(&mut single, edge, &params, &Fr::one());
            reversed.merge(&single);
        }
        assert_eq!(together, reversed);

        // Determinism
        let mut again = AuxiliaryAccumulators::<Fr>::default();
        for edge in edges.iter() {
            AuxiliaryRelation::add_edge_contribution(&mut again, edge, &params, &Fr::one());
        }
        assert_eq!(together, again);
    }

    #[test]
    fn relation_shape() {
        assert_eq!(<AuxiliaryRelation as Relation<Fr>>::num_subrelations(), 6);
        assert!(<AuxiliaryRelation as Relation<Fr>>::SUBRELATION_LENGTHS
            .iter()
            .all(|&len| len <= <AuxiliaryRelation as Relation<Fr>>::RELATION_LENGTH));
        assert_eq!(limb_size::<Fr>(), <Fr as HonkField>::from_u128(1u128 << 68));
        assert_eq!(sublimb_shift::<Fr>(), fr(1 << 14));
        assert!(Entity::W4Shift.is_shifted());
    }
}
