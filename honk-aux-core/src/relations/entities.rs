use strum::EnumCount;
use strum_macros::{EnumCount as EnumCountMacro, EnumIter};

use crate::field::HonkField;
use crate::poly::univariate::Univariate;

/// The trace columns read by the auxiliary relation: eight selectors followed by the four
/// wires.
#[repr(usize)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, EnumIter, EnumCountMacro)]
pub enum Column {
    QM,
    QC,
    QL,
    QR,
    QO,
    Q4,
    QArith,
    QAux,
    WL,
    WR,
    WO,
    W4,
}

impl Column {
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn is_selector(self) -> bool {
        !matches!(self, Column::WL | Column::WR | Column::WO | Column::W4)
    }
}

/// Every value a relation can read at one row: the twelve columns plus the four wires
/// shifted by one row.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, EnumIter, EnumCountMacro)]
pub enum Entity {
    QM,
    QC,
    QL,
    QR,
    QO,
    Q4,
    QArith,
    QAux,
    WL,
    WR,
    WO,
    W4,
    WLShift,
    WRShift,
    WOShift,
    W4Shift,
}

impl Entity {
    /// The column this entity reads, and the row offset it reads it at.
    pub fn source(self) -> (Column, usize) {
        match self {
            Entity::QM => (Column::QM, 0),
            Entity::QC => (Column::QC, 0),
            Entity::QL => (Column::QL, 0),
            Entity::QR => (Column::QR, 0),
            Entity::QO => (Column::QO, 0),
            Entity::Q4 => (Column::Q4, 0),
            Entity::QArith => (Column::QArith, 0),
            Entity::QAux => (Column::QAux, 0),
            Entity::WL => (Column::WL, 0),
            Entity::WR => (Column::WR, 0),
            Entity::WO => (Column::WO, 0),
            Entity::W4 => (Column::W4, 0),
            Entity::WLShift => (Column::WL, 1),
            Entity::WRShift => (Column::WR, 1),
            Entity::WOShift => (Column::WO, 1),
            Entity::W4Shift => (Column::W4, 1),
        }
    }

    pub fn is_shifted(self) -> bool {
        self.source().1 == 1
    }
}

const _: () = assert!(Entity::COUNT == Column::COUNT + 4);

/// One value of type `T` per [`Entity`].
///
/// `T = Univariate<F, N>` is an extended edge handed to the prover-side relation,
/// `T = F` a single row (or the purported evaluations at the sumcheck challenge) handed
/// to the verifier-side relation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AllEntities<T> {
    pub q_m: T,
    pub q_c: T,
    pub q_l: T,
    pub q_r: T,
    pub q_o: T,
    pub q_4: T,
    pub q_arith: T,
    pub q_aux: T,
    pub w_l: T,
    pub w_r: T,
    pub w_o: T,
    pub w_4: T,
    pub w_l_shift: T,
    pub w_r_shift: T,
    pub w_o_shift: T,
    pub w_4_shift: T,
}

pub type ExtendedEdges<F, const N: usize> = AllEntities<Univariate<F, N>>;
pub type PurportedEvaluations<F> = AllEntities<F>;

impl<T> AllEntities<T> {
    pub fn from_fn(mut f: impl FnMut(Entity) -> T) -> Self {
        Self {
            q_m: f(Entity::QM),
            q_c: f(Entity::QC),
            q_l: f(Entity::QL),
            q_r: f(Entity::QR),
            q_o: f(Entity::QO),
            q_4: f(Entity::Q4),
            q_arith: f(Entity::QArith),
            q_aux: f(Entity::QAux),
            w_l: f(Entity::WL),
            w_r: f(Entity::WR),
            w_o: f(Entity::WO),
            w_4: f(Entity::W4),
            w_l_shift: f(Entity::WLShift),
            w_r_shift: f(Entity::WRShift),
            w_o_shift: f(Entity::WOShift),
            w_4_shift: f(Entity::W4Shift),
        }
    }

    pub fn get(&self, entity: Entity) -> &T {
        match entity {
            Entity::QM => &self.q_m,
            Entity::QC => &self.q_c,
            Entity::QL => &self.q_l,
            Entity::QR => &self.q_r,
            Entity::QO => &self.q_o,
            Entity::Q4 => &self.q_4,
            Entity::QArith => &self.q_arith,
            Entity::QAux => &self.q_aux,
            Entity::WL => &self.w_l,
            Entity::WR => &self.w_r,
            Entity::WO => &self.w_o,
            Entity::W4 => &self.w_4,
            Entity::WLShift => &self.w_l_shift,
            Entity::WRShift => &self.w_r_shift,
            Entity::WOShift => &self.w_o_shift,
            Entity::W4Shift => &self.w_4_shift,
        }
    }

    pub fn get_mut(&mut self, entity: Entity) -> &mut T {
        match entity {
            Entity::QM => &mut self.q_m,
            Entity::QC => &mut self.q_c,
            Entity::QL => &mut self.q_l,
            Entity::QR => &mut self.q_r,
            Entity::QO => &mut self.q_o,
            Entity::Q4 => &mut self.q_4,
            Entity::QArith => &mut self.q_arith,
            Entity::QAux => &mut self.q_aux,
            Entity::WL => &mut self.w_l,
            Entity::WR => &mut self.w_r,
            Entity::WO => &mut self.w_o,
            Entity::W4 => &mut self.w_4,
            Entity::WLShift => &mut self.w_l_shift,
            Entity::WRShift => &mut self.w_r_shift,
            Entity::WOShift => &mut self.w_o_shift,
            Entity::W4Shift => &mut self.w_4_shift,
        }
    }

    pub fn map<'a, U>(&'a self, mut f: impl FnMut(&'a T) -> U) -> AllEntities<U> {
        AllEntities::from_fn(|entity| f(self.get(entity)))
    }
}

impl<F: HonkField, const N: usize> ExtendedEdges<F, N> {
    /// Narrows every entity to its first `M` evaluations, without copying.
    pub fn view<const M: usize>(&self) -> AllEntities<&Univariate<F, M>> {
        self.map(|u| u.view::<M>())
    }

    /// The scalar row obtained by evaluating every entity at domain point `i`.
    pub fn row_at(&self, i: usize) -> PurportedEvaluations<F> {
        AllEntities::from_fn(|entity| self.get(entity).value_at(i))
    }
}

impl<F: HonkField> PurportedEvaluations<F> {
    pub fn as_refs(&self) -> AllEntities<&F> {
        self.map(|value| value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ark_bn254::Fr;
    use strum::IntoEnumIterator;

    #[test]
    fn entity_sources_cover_columns_once() {
        let unshifted: Vec<Column> = Entity::iter()
            .filter(|e| !e.is_shifted())
            .map(|e| e.source().0)
            .collect();
        assert_eq!(unshifted, Column::iter().collect::<Vec<_>>());

        let shifted: Vec<Column> = Entity::iter()
            .filter(|e| e.is_shifted())
            .map(|e| e.source().0)
            .collect();
        assert!(shifted.iter().all(|c| !c.is_selector()));
        assert_eq!(shifted.len(), 4);
    }

    #[test]
    fn get_matches_from_fn() {
        let entities = AllEntities::from_fn(|e| e as usize);
        for (i, entity) in Entity::iter().enumerate() {
            assert_eq!(*entities.get(entity), i);
        }

        let mut entities = entities;
        *entities.get_mut(Entity::W4Shift) = 99;
        assert_eq!(entities.w_4_shift, 99);
    }

    #[test]
    fn row_at_reads_each_extended_edge() {
        let edge: ExtendedEdges<Fr, 6> = AllEntities::from_fn(|e| {
            Univariate::extend_edge(Fr::from(e as u64), Fr::from(2 * e as u64))
        });
        let row = edge.row_at(2);
        // v0 + 2 * (v1 - v0) = 3 * v0
        assert_eq!(row.w_l, Fr::from(3 * Entity::WL as u64));
        assert_eq!(edge.view::<4>().q_aux.evaluations.len(), 4);
    }
}
