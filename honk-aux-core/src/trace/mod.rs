//! Execution traces for the auxiliary gates, and the builder that produces valid ones.

use rayon::prelude::*;
use strum::{EnumCount, IntoEnumIterator};

use crate::field::HonkField;
use crate::poly::univariate::Univariate;
use crate::relations::{AllEntities, Column, Entity, ExtendedEdges, PurportedEvaluations};
use crate::utils::math::Math;

pub mod builder;
pub mod gates;
pub mod memory;
pub mod workload;

pub use builder::{AuxiliaryTraceBuilder, RamId, RomId};
pub use gates::{AuxiliaryGate, BigfieldProduct, LimbAccumulation};
pub use workload::{random_trace, WorkloadConfig, WorkloadSummary};

pub const NUM_COLUMNS: usize = Column::COUNT;

/// One row of the trace, indexed by [`Column::index`].
pub type Row<F> = [F; NUM_COLUMNS];

/// The twelve columns read by the auxiliary relation, stored column-major.
///
/// Reads past the last row return zero, which is what the shifted wires see on the final
/// row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Trace<F: HonkField> {
    columns: [Vec<F>; NUM_COLUMNS],
}

impl<F: HonkField> Trace<F> {
    pub fn new(num_rows: usize) -> Self {
        Self {
            columns: std::array::from_fn(|_| vec![F::zero(); num_rows]),
        }
    }

    #[tracing::instrument(skip_all)]
    pub fn from_rows(rows: &[Row<F>]) -> Self {
        let columns = std::array::from_fn(|column| {
            rows.par_iter().map(|row| row[column]).collect::<Vec<F>>()
        });
        Self { columns }
    }

    pub fn len(&self) -> usize {
        self.columns[0].len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// `log2` of the number of rows, i.e. the number of sumcheck variables.
    pub fn num_vars(&self) -> usize {
        self.len().log_2()
    }

    pub fn num_edges(&self) -> usize {
        self.len() / 2
    }

    pub fn column(&self, column: Column) -> &[F] {
        &self.columns[column.index()]
    }

    #[inline]
    pub fn value(&self, column: Column, row: usize) -> F {
        self.columns[column.index()]
            .get(row)
            .copied()
            .unwrap_or_else(F::zero)
    }

    pub fn set(&mut self, column: Column, row: usize, value: F) {
        self.columns[column.index()][row] = value;
    }

    #[inline]
    fn entity_value(&self, entity: Entity, row: usize) -> F {
        let (column, offset) = entity.source();
        self.value(column, row + offset)
    }

    /// Every entity at `row`: the row itself plus the wires of `row + 1`.
    pub fn row(&self, row: usize) -> PurportedEvaluations<F> {
        AllEntities::from_fn(|entity| self.entity_value(entity, row))
    }

    /// The `i`-th edge `(2i, 2i + 1)` of the first sumcheck variable, with every entity
    /// extended to `N` points.
    #[inline]
    pub fn edge<const N: usize>(&self, i: usize) -> ExtendedEdges<F, N> {
        AllEntities::from_fn(|entity| {
            Univariate::extend_edge(
                self.entity_value(entity, 2 * i),
                self.entity_value(entity, 2 * i + 1),
            )
        })
    }

    /// Appends all-zero rows until the length is a power of two.
    pub fn pad_to_power_of_two(&mut self) {
        let padded = self.len().next_power_of_two().max(2);
        for column in self.columns.iter_mut() {
            column.resize(padded, F::zero());
        }
    }

    /// Row `row` laid out as [`Row`].
    pub fn raw_row(&self, row: usize) -> Row<F> {
        let mut values = [F::zero(); NUM_COLUMNS];
        for column in Column::iter() {
            values[column.index()] = self.value(column, row);
        }
        values
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ark_bn254::Fr;
    use ark_std::Zero;

    fn fr(n: u64) -> Fr {
        <Fr as HonkField>::from_u64(n)
    }

    fn counting_trace(num_rows: usize) -> Trace<Fr> {
        let rows: Vec<Row<Fr>> = (0..num_rows)
            .map(|row| std::array::from_fn(|column| fr((100 * row + column) as u64)))
            .collect();
        Trace::from_rows(&rows)
    }

    #[test]
    fn shifted_entities_read_the_next_row() {
        let trace = counting_trace(4);
        let row = trace.row(1);
        assert_eq!(row.q_aux, fr(100 + Column::QAux as u64));
        assert_eq!(row.w_l_shift, fr(200 + Column::WL as u64));
        assert_eq!(row.w_4_shift, fr(200 + Column::W4 as u64));

        // Past the end everything is zero.
        let last = trace.row(3);
        assert!(last.w_l_shift.is_zero());
        assert!(trace.value(Column::QM, 17).is_zero());
        assert_eq!(trace.raw_row(2)[Column::WO.index()], fr(200 + Column::WO as u64));
    }

    #[test]
    fn edges_interpolate_adjacent_rows() {
        let trace = counting_trace(4);
        let edge = trace.edge::<6>(1);
        assert_eq!(edge.row_at(0), trace.row(2));
        assert_eq!(edge.row_at(1), trace.row(3));
        // Linear continuation: 2·row3 − row2 at point 2.
        assert_eq!(edge.w_r.value_at(2), fr(400 + Column::WR as u64));
    }

    #[test]
    fn padding_reaches_a_power_of_two() {
        let mut trace = counting_trace(5);
        trace.pad_to_power_of_two();
        assert_eq!(trace.len(), 8);
        assert_eq!(trace.num_vars(), 3);
        assert_eq!(trace.num_edges(), 4);
        assert!(trace.column(Column::W4)[5..].iter().all(Fr::is_zero));

        let mut single = Trace::<Fr>::new(1);
        single.pad_to_power_of_two();
        assert_eq!(single.len(), 2);
    }
}
