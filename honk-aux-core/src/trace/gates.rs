use strum_macros::EnumIter;

use crate::field::HonkField;
use crate::relations::auxiliary::{limb_size, sublimb_shift, NUM_SUBLIMB_BITS};
use crate::relations::Column;
use crate::utils::errors::TraceError;

use super::Row;

pub const NUM_SUBLIMBS: usize = 5;

/// The gate types multiplexed behind `q_aux`. Only the trace builder names them; the
/// relation reads the selector products directly.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, EnumIter)]
pub enum AuxiliaryGate {
    LimbAccumulation1,
    LimbAccumulation2,
    NonNativeProduct1,
    NonNativeProduct2,
    NonNativeProduct3,
    MemoryAccess,
    RamTimestampCheck,
    RomConsistencyCheck,
    RamConsistencyCheck,
}

impl AuxiliaryGate {
    /// The selectors set to one for this gate, besides `q_aux`.
    pub fn selectors(self) -> &'static [Column] {
        match self {
            AuxiliaryGate::LimbAccumulation1 => &[Column::QO, Column::Q4],
            AuxiliaryGate::LimbAccumulation2 => &[Column::QO, Column::QM],
            AuxiliaryGate::NonNativeProduct1 => &[Column::QR, Column::QO],
            AuxiliaryGate::NonNativeProduct2 => &[Column::QR, Column::Q4],
            AuxiliaryGate::NonNativeProduct3 => &[Column::QR, Column::QM],
            AuxiliaryGate::MemoryAccess => &[Column::QL, Column::QM],
            AuxiliaryGate::RamTimestampCheck => &[Column::QL, Column::Q4],
            AuxiliaryGate::RomConsistencyCheck => &[Column::QL, Column::QR],
            AuxiliaryGate::RamConsistencyCheck => &[Column::QArith],
        }
    }

    /// A row carrying this gate with the given wires. `q_c` is left for the caller.
    pub fn row<F: HonkField>(self, wires: [F; 4]) -> Row<F> {
        let mut row = [F::zero(); super::NUM_COLUMNS];
        row[Column::QAux.index()] = F::one();
        for selector in self.selectors() {
            row[selector.index()] = F::one();
        }
        set_wires(&mut row, wires);
        row
    }
}

/// A row with no selectors, holding wires read through the shift of the row above.
pub fn wire_row<F: HonkField>(wires: [F; 4]) -> Row<F> {
    let mut row = [F::zero(); super::NUM_COLUMNS];
    set_wires(&mut row, wires);
    row
}

fn set_wires<F: HonkField>(row: &mut Row<F>, [w_l, w_r, w_o, w_4]: [F; 4]) {
    row[Column::WL.index()] = w_l;
    row[Column::WR.index()] = w_r;
    row[Column::WO.index()] = w_o;
    row[Column::W4.index()] = w_4;
}

/// The three gates of a non-native (bigfield) multiplication. Each spans its own row and
/// the shifted wires of the next one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumIter)]
pub enum BigfieldProduct {
    /// `(a0·b1 + a1·b0)·2^68 + a1·b1 = w_3 + w_4`; solves for `w_4`.
    First,
    /// `(a0·w_4 + b0·w_3 − w_3')·2^68 + a0·b1 + a1·b0 = w_4'`; solves for `w_4'`.
    Second,
    /// `(a0·b1 + a1·b0)·2^68 + a1·b1 + w_4 = w_3' + w_4'`; solves for `w_4'`.
    Third,
}

impl BigfieldProduct {
    pub fn gate(self) -> AuxiliaryGate {
        match self {
            BigfieldProduct::First => AuxiliaryGate::NonNativeProduct1,
            BigfieldProduct::Second => AuxiliaryGate::NonNativeProduct2,
            BigfieldProduct::Third => AuxiliaryGate::NonNativeProduct3,
        }
    }

    /// Overwrites the dependent wire of `wires` (this row) or `shifted` (next row) so the
    /// gate's identity holds.
    pub fn complete<F: HonkField>(self, wires: &mut [F; 4], shifted: &mut [F; 4]) {
        let [w_l, w_r, w_o, w_4] = *wires;
        let [w_l_shift, w_r_shift, w_o_shift, _] = *shifted;
        let limb_size = limb_size::<F>();

        let cross_terms = w_l * w_r_shift + w_l_shift * w_r;
        let limb_product = cross_terms * limb_size + w_l_shift * w_r_shift;
        match self {
            BigfieldProduct::First => wires[3] = limb_product - w_o,
            BigfieldProduct::Second => {
                shifted[3] = (w_l * w_4 + w_r * w_o - w_o_shift) * limb_size + cross_terms
            }
            BigfieldProduct::Third => shifted[3] = limb_product + w_4 - w_o_shift,
        }
    }
}

/// The two range-decomposition gates: five 14-bit sublimbs recombine into one limb.
#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumIter)]
pub enum LimbAccumulation {
    /// Sublimbs in `(w_1, w_2, w_3, w_1', w_2')`, limb in `w_4`.
    First,
    /// Sublimbs in `(w_3, w_4, w_1', w_2', w_3')`, limb in `w_4'`.
    Second,
}

impl LimbAccumulation {
    pub fn gate(self) -> AuxiliaryGate {
        match self {
            LimbAccumulation::First => AuxiliaryGate::LimbAccumulation1,
            LimbAccumulation::Second => AuxiliaryGate::LimbAccumulation2,
        }
    }

    /// The gate row and the row after it, for sublimbs given least significant first.
    pub fn wires<F: HonkField>(self, sublimbs: [u64; NUM_SUBLIMBS]) -> ([F; 4], [F; 4]) {
        let [s0, s1, s2, s3, s4] = sublimbs.map(F::from_u64);
        let limb = accumulate_sublimbs(&[s0, s1, s2, s3, s4]);
        match self {
            LimbAccumulation::First => ([s0, s1, s2, limb], [s3, s4, F::zero(), F::zero()]),
            LimbAccumulation::Second => ([F::zero(), F::zero(), s0, s1], [s2, s3, s4, limb]),
        }
    }
}

/// `sum_i s_i · 2^(14·i)`.
pub fn accumulate_sublimbs<F: HonkField>(sublimbs: &[F]) -> F {
    let shift = sublimb_shift::<F>();
    sublimbs
        .iter()
        .rev()
        .fold(F::zero(), |acc, sublimb| acc * shift + sublimb)
}

/// Splits a limb of at most `5 · 14` bits into sublimbs, least significant first.
pub fn decompose_limb(limb: u128) -> Result<[u64; NUM_SUBLIMBS], TraceError> {
    let max_bits = NUM_SUBLIMBS * NUM_SUBLIMB_BITS;
    if limb >> max_bits != 0 {
        return Err(TraceError::LimbTooLarge { limb, max_bits });
    }
    let mask = (1u128 << NUM_SUBLIMB_BITS) - 1;
    Ok(std::array::from_fn(|i| {
        ((limb >> (i * NUM_SUBLIMB_BITS)) & mask) as u64
    }))
}

/// Rejects any sublimb that does not fit in 14 bits.
pub fn check_sublimbs(sublimbs: &[u64; NUM_SUBLIMBS]) -> Result<(), TraceError> {
    match sublimbs
        .iter()
        .position(|&sublimb| sublimb >> NUM_SUBLIMB_BITS != 0)
    {
        Some(position) => Err(TraceError::SublimbTooLarge {
            position,
            value: sublimbs[position],
        }),
        None => Ok(()),
    }
}
