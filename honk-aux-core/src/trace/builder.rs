use crate::field::HonkField;
use crate::utils::errors::TraceError;

use super::gates::{check_sublimbs, wire_row, BigfieldProduct, LimbAccumulation, NUM_SUBLIMBS};
use super::memory::{access_gate, RamArray, RomArray};
use super::{Row, Trace, NUM_COLUMNS};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RomId(usize);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RamId(usize);

/// Writes auxiliary gates row by row and, on [`finalize`](Self::finalize), appends the
/// sorted memory blocks those gates need.
///
/// `eta` must be the value the relation is later evaluated with, since every record is
/// folded with it as it is written.
#[derive(Clone, Debug)]
pub struct AuxiliaryTraceBuilder<F: HonkField> {
    eta: F,
    rows: Vec<Row<F>>,
    rom_arrays: Vec<RomArray<F>>,
    ram_arrays: Vec<RamArray<F>>,
}

impl<F: HonkField> AuxiliaryTraceBuilder<F> {
    pub fn new(eta: F) -> Self {
        Self {
            eta,
            // The first row of the trace is all zero.
            rows: vec![[F::zero(); NUM_COLUMNS]],
            rom_arrays: Vec::new(),
            ram_arrays: Vec::new(),
        }
    }

    pub fn eta(&self) -> F {
        self.eta
    }

    /// Rows written so far; the next gate lands at this row.
    pub fn num_rows(&self) -> usize {
        self.rows.len()
    }

    /// Creates a ROM array and reads every index once, so each index owns at least one
    /// record in the sorted block.
    pub fn rom_array(&mut self, values: Vec<(F, F)>) -> RomId {
        let id = self.rom_arrays.len();
        let mut rom = RomArray::new(id, values);
        for record in rom.read_all() {
            self.rows.push(access_gate(&record, self.eta));
        }
        self.rom_arrays.push(rom);
        RomId(id)
    }

    /// Reads `(value, value_2)` at `index`.
    pub fn read_rom(&mut self, id: RomId, index: usize) -> Result<(F, F), TraceError> {
        let rom = self
            .rom_arrays
            .get_mut(id.0)
            .ok_or(TraceError::UnknownArray(id.0))?;
        let record = rom.read(index)?;
        self.rows.push(access_gate(&record, self.eta));
        Ok((record.value, record.secondary))
    }

    /// Creates a RAM array of `size` cells, each initialised by a write of zero.
    pub fn ram_array(&mut self, size: usize) -> RamId {
        let id = self.ram_arrays.len();
        let mut ram = RamArray::new(id, size);
        for record in ram.initialise() {
            self.rows.push(access_gate(&record, self.eta));
        }
        self.ram_arrays.push(ram);
        RamId(id)
    }

    fn ram(&mut self, id: RamId) -> Result<&mut RamArray<F>, TraceError> {
        self.ram_arrays
            .get_mut(id.0)
            .ok_or(TraceError::UnknownArray(id.0))
    }

    pub fn read_ram(&mut self, id: RamId, index: usize) -> Result<F, TraceError> {
        let record = self.ram(id)?.read(index)?;
        self.rows.push(access_gate(&record, self.eta));
        Ok(record.value)
    }

    pub fn write_ram(&mut self, id: RamId, index: usize, value: F) -> Result<(), TraceError> {
        let record = self.ram(id)?.write(index, value)?;
        self.rows.push(access_gate(&record, self.eta));
        Ok(())
    }

    /// Emits a bigfield product gate and the row holding its shifted wires. The dependent
    /// wire is computed; whatever the caller passed in its place is ignored. Returns the
    /// completed `(wires, shifted)`.
    pub fn non_native_product(
        &mut self,
        product: BigfieldProduct,
        mut wires: [F; 4],
        mut shifted: [F; 4],
    ) -> ([F; 4], [F; 4]) {
        product.complete(&mut wires, &mut shifted);
        self.rows.push(product.gate().row(wires));
        self.rows.push(wire_row(shifted));
        (wires, shifted)
    }

    /// Emits a limb accumulation gate recombining five 14-bit sublimbs, least significant
    /// first. Returns the limb.
    pub fn limb_accumulation(
        &mut self,
        gate: LimbAccumulation,
        sublimbs: [u64; NUM_SUBLIMBS],
    ) -> Result<F, TraceError> {
        check_sublimbs(&sublimbs)?;
        let (wires, shifted) = gate.wires::<F>(sublimbs);
        self.rows.push(gate.gate().row(wires));
        self.rows.push(wire_row(shifted));
        Ok(match gate {
            LimbAccumulation::First => wires[3],
            LimbAccumulation::Second => shifted[3],
        })
    }

    /// Appends the ROM consistency blocks, then for each RAM array its consistency block
    /// and timestamp block, and pads to a power of two.
    #[tracing::instrument(skip_all)]
    pub fn finalize(mut self) -> Trace<F> {
        let gate_rows = self.rows.len();
        for rom in self.rom_arrays.iter() {
            self.rows.extend(rom.consistency_block(self.eta));
        }
        for ram in self.ram_arrays.iter() {
            self.rows.extend(ram.consistency_block(self.eta));
            self.rows.extend(ram.timestamp_block());
        }
        tracing::debug!(
            gate_rows,
            memory_rows = self.rows.len() - gate_rows,
            rom_arrays = self.rom_arrays.len(),
            ram_arrays = self.ram_arrays.len(),
            "finalizing auxiliary trace"
        );

        let mut trace = Trace::from_rows(&self.rows);
        trace.pad_to_power_of_two();
        trace
    }
}
