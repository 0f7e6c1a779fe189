//! ROM and RAM arrays: the records they produce and the sorted blocks that prove those
//! records consistent.
//!
//! Every access emits a memory access gate holding the folded record in `w_4`. At
//! finalisation the same multiset of records is written again, sorted by index (and by
//! timestamp for RAM), as a consistency block. The permutation argument tying the two
//! copies together lives outside this crate.

use itertools::Itertools;

use crate::field::HonkField;
use crate::relations::memory_record::MemoryRecord;
use crate::relations::Column;
use crate::utils::errors::TraceError;

use super::gates::{wire_row, AuxiliaryGate};
use super::Row;

/// A record together with the integer keys it is sorted by.
#[derive(Clone, Copy, Debug)]
struct SortableRecord<F: HonkField> {
    index: usize,
    timestamp: u64,
    record: MemoryRecord<F>,
}

/// The access gate for `record`. For RAM `q_c` carries the access flag.
pub fn access_gate<F: HonkField>(record: &MemoryRecord<F>, eta: F) -> Row<F> {
    let mut row = AuxiliaryGate::MemoryAccess.row(record.wires(eta));
    row[Column::QC.index()] = record.access;
    row
}

#[derive(Clone, Debug)]
pub struct RomArray<F: HonkField> {
    id: usize,
    values: Vec<(F, F)>,
    records: Vec<SortableRecord<F>>,
}

impl<F: HonkField> RomArray<F> {
    pub fn new(id: usize, values: Vec<(F, F)>) -> Self {
        Self {
            id,
            values,
            records: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn num_records(&self) -> usize {
        self.records.len()
    }

    fn push(&mut self, index: usize, (value, value_2): (F, F)) -> MemoryRecord<F> {
        let record = MemoryRecord::rom(F::from_u64(index as u64), value, value_2);
        self.records.push(SortableRecord {
            index,
            timestamp: 0,
            record,
        });
        record
    }

    /// Records a read of `index`.
    pub fn read(&mut self, index: usize) -> Result<MemoryRecord<F>, TraceError> {
        let values = *self
            .values
            .get(index)
            .ok_or(TraceError::IndexOutOfBounds {
                array: self.id,
                index,
                size: self.values.len(),
            })?;
        Ok(self.push(index, values))
    }

    /// Records one read of every index, in order.
    pub fn read_all(&mut self) -> Vec<MemoryRecord<F>> {
        (0..self.values.len())
            .map(|index| self.push(index, self.values[index]))
            .collect()
    }

    /// Consistency rows over the records sorted by index, then a terminator whose index
    /// is one past the largest so the last record's index step is one.
    pub fn consistency_block(&self, eta: F) -> Vec<Row<F>> {
        let mut sorted = self.records.clone();
        sorted.sort_by_key(|r| r.index);

        let mut rows: Vec<Row<F>> = sorted
            .iter()
            .map(|r| AuxiliaryGate::RomConsistencyCheck.row(r.record.wires(eta)))
            .collect();
        if let Some(last) = sorted.last() {
            let end = MemoryRecord::rom(F::from_u64(last.index as u64 + 1), F::zero(), F::zero());
            rows.push(wire_row(end.wires(eta)));
        }
        rows
    }
}

#[derive(Clone, Debug)]
pub struct RamArray<F: HonkField> {
    id: usize,
    state: Vec<F>,
    records: Vec<SortableRecord<F>>,
    access_count: u64,
}

impl<F: HonkField> RamArray<F> {
    pub fn new(id: usize, size: usize) -> Self {
        Self {
            id,
            state: vec![F::zero(); size],
            records: Vec::with_capacity(size),
            access_count: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.state.len()
    }

    pub fn is_empty(&self) -> bool {
        self.state.is_empty()
    }

    pub fn num_records(&self) -> usize {
        self.records.len()
    }

    fn check_index(&self, index: usize) -> Result<(), TraceError> {
        if index >= self.state.len() {
            return Err(TraceError::IndexOutOfBounds {
                array: self.id,
                index,
                size: self.state.len(),
            });
        }
        Ok(())
    }

    fn push(&mut self, index: usize, value: F, is_write: bool) -> MemoryRecord<F> {
        let timestamp = self.access_count;
        self.access_count += 1;
        let record = MemoryRecord::ram(
            F::from_u64(index as u64),
            F::from_u64(timestamp),
            value,
            is_write,
        );
        self.records.push(SortableRecord {
            index,
            timestamp,
            record,
        });
        record
    }

    pub fn read(&mut self, index: usize) -> Result<MemoryRecord<F>, TraceError> {
        self.check_index(index)?;
        let value = self.state[index];
        Ok(self.push(index, value, false))
    }

    pub fn write(&mut self, index: usize, value: F) -> Result<MemoryRecord<F>, TraceError> {
        self.check_index(index)?;
        self.state[index] = value;
        Ok(self.push(index, value, true))
    }

    /// Records a write of zero to every cell, in order.
    pub fn initialise(&mut self) -> Vec<MemoryRecord<F>> {
        self.state.fill(F::zero());
        (0..self.state.len())
            .map(|index| self.push(index, F::zero(), true))
            .collect()
    }

    fn sorted_records(&self) -> Vec<SortableRecord<F>> {
        let mut sorted = self.records.clone();
        sorted.sort_by_key(|r| (r.index, r.timestamp));
        sorted
    }

    /// Consistency rows over the records sorted by `(index, timestamp)`, then a terminator
    /// read of index `size` so the last record still sees an index step of one and a
    /// boolean access type.
    pub fn consistency_block(&self, eta: F) -> Vec<Row<F>> {
        let mut rows: Vec<Row<F>> = self
            .sorted_records()
            .iter()
            .map(|r| AuxiliaryGate::RamConsistencyCheck.row(r.record.wires(eta)))
            .collect();
        if !rows.is_empty() {
            let end = MemoryRecord::ram(
                F::from_u64(self.state.len() as u64),
                F::zero(),
                F::zero(),
                false,
            );
            rows.push(wire_row(end.wires(eta)));
        }
        rows
    }

    /// `(index, timestamp, timestamp_check)` rows over the sorted records, where the check
    /// is the timestamp step to the next record of the same index and zero at an index
    /// change. The last row only serves as the shift of the one before and has no gate.
    pub fn timestamp_block(&self) -> Vec<Row<F>> {
        let sorted = self.sorted_records();
        let mut rows = Vec::with_capacity(sorted.len());
        for (current, next) in sorted.iter().tuple_windows() {
            let timestamp_check = if next.index == current.index {
                F::from_u64(next.timestamp - current.timestamp)
            } else {
                F::zero()
            };
            rows.push(AuxiliaryGate::RamTimestampCheck.row([
                current.record.index,
                current.record.secondary,
                timestamp_check,
                F::zero(),
            ]));
        }
        if let Some(last) = sorted.last() {
            rows.push(wire_row([
                last.record.index,
                last.record.secondary,
                F::zero(),
                F::zero(),
            ]));
        }
        rows
    }
}
