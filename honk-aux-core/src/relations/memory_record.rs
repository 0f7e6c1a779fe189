//! Folding of RAM/ROM memory records into a single field element.
//!
//! A record `(index i, secondary s, value v, access a)` is encoded as
//!
//! ```text
//! record = a + i·η + s·η² + v·η³
//! ```
//!
//! For ROM the secondary field is the second stored value and `a = 0`; for RAM it is the
//! timestamp and `a` is the access flag (0 = read, 1 = write). Folding lets the set
//! equality between the execution-order records and the sorted records be checked as a
//! single-column permutation.
//!
//! Wire layout of an access gate:
//!
//! | gate | w_l | w_r       | w_o   | q_c    | w_4    |
//! | ---- | --- | --------- | ----- | ------ | ------ |
//! | ROM  | i   | value 2   | value | --     | record |
//! | RAM  | i   | timestamp | value | access | record |

use crate::field::HonkField;

use super::RelationValue;

/// `i·η + s·η² + v·η³`, evaluated with Horner's rule.
#[inline]
pub fn fold_fields<F: HonkField, T: RelationValue<F>>(
    index: &T,
    secondary: &T,
    value: &T,
    eta: F,
) -> T {
    let mut folded = value.clone() * eta;
    folded += secondary;
    folded *= eta;
    folded += index;
    folded * eta
}

/// `q_c + w_l·η + w_r·η² + w_o·η³`: the record as the gate's selectors and first three
/// wires describe it.
#[inline]
pub fn partial_record_check<F: HonkField, T: RelationValue<F>>(
    q_c: &T,
    w_l: &T,
    w_r: &T,
    w_o: &T,
    eta: F,
) -> T {
    fold_fields(w_l, w_r, w_o, eta) + q_c
}

/// `q_c + w_l·η + w_r·η² + w_o·η³ − w_4`: zero exactly when `w_4` holds the folded record
/// of the other wires, with `q_c` supplying the access flag.
#[inline]
pub fn memory_record_check<F: HonkField, T: RelationValue<F>>(
    q_c: &T,
    w_l: &T,
    w_r: &T,
    w_o: &T,
    w_4: &T,
    eta: F,
) -> T {
    partial_record_check(q_c, w_l, w_r, w_o, eta) - w_4
}

/// `a + i·η + s·η² + v·η³`.
#[inline]
pub fn fold_memory_record<F: HonkField>(index: F, secondary: F, value: F, access: F, eta: F) -> F {
    fold_fields(&index, &secondary, &value, eta) + access
}

/// A memory record as the trace builder tracks it before it is written into a gate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MemoryRecord<F: HonkField> {
    pub index: F,
    pub secondary: F,
    pub value: F,
    pub access: F,
}

impl<F: HonkField> MemoryRecord<F> {
    pub fn rom(index: F, value: F, value_2: F) -> Self {
        Self {
            index,
            secondary: value_2,
            value,
            access: F::zero(),
        }
    }

    pub fn ram(index: F, timestamp: F, value: F, is_write: bool) -> Self {
        Self {
            index,
            secondary: timestamp,
            value,
            access: if is_write { F::one() } else { F::zero() },
        }
    }

    pub fn fold(&self, eta: F) -> F {
        fold_memory_record(self.index, self.secondary, self.value, self.access, eta)
    }

    /// The wires `[w_l, w_r, w_o, w_4]` of a gate holding this record.
    pub fn wires(&self, eta: F) -> [F; 4] {
        [self.index, self.secondary, self.value, self.fold(eta)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ark_bn254::Fr;
    use ark_std::{test_rng, One, Zero};

    fn fr(n: u64) -> Fr {
        <Fr as HonkField>::from_u64(n)
    }

    #[test]
    fn folds_known_record() {
        // 1 + 3·7 + 5·49 + 9·343
        let record = fold_memory_record(fr(3), fr(5), fr(9), fr(1), fr(7));
        assert_eq!(record, fr(3354));

        let check = memory_record_check(&fr(1), &fr(3), &fr(5), &fr(9), &fr(3354), fr(7));
        assert!(check.is_zero());

        let bad = memory_record_check(&fr(1), &fr(3), &fr(5), &fr(9), &fr(3353), fr(7));
        assert_eq!(bad, Fr::one());
    }

    #[test]
    fn record_wires_satisfy_record_check() {
        let mut rng = test_rng();
        let eta = Fr::random(&mut rng);
        let record = MemoryRecord::ram(fr(4), fr(11), Fr::random(&mut rng), true);
        let [w_l, w_r, w_o, w_4] = record.wires(eta);
        assert!(memory_record_check(&record.access, &w_l, &w_r, &w_o, &w_4, eta).is_zero());

        // Without the access flag the same wires are off by exactly one.
        let partial = memory_record_check(&Fr::zero(), &w_l, &w_r, &w_o, &w_4, eta);
        assert_eq!(partial, -Fr::one());
    }

    #[test]
    fn rom_records_have_no_access_bit() {
        let record = MemoryRecord::rom(fr(2), fr(10), fr(20));
        assert!(record.access.is_zero());
        assert_eq!(record.secondary, fr(20));
        assert_eq!(record.fold(fr(2)), fr(2 * 2 + 20 * 4 + 10 * 8));
    }
}
