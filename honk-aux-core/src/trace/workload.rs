//! Random but valid auxiliary workloads, used by the CLI, the benchmarks and the tests.

use rand_core::RngCore;

use crate::field::HonkField;
use crate::utils::errors::TraceError;

use super::gates::decompose_limb;
use super::{AuxiliaryTraceBuilder, BigfieldProduct, LimbAccumulation, Trace};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WorkloadConfig {
    pub rom_size: usize,
    pub ram_size: usize,
    /// Random reads and writes issued against the RAM array.
    pub ram_ops: usize,
    /// Each one emits a bigfield product gate and a limb accumulation gate.
    pub bigfield_gates: usize,
}

impl Default for WorkloadConfig {
    fn default() -> Self {
        Self {
            rom_size: 16,
            ram_size: 16,
            ram_ops: 64,
            bigfield_gates: 8,
        }
    }
}

/// Where the generated gates ended up in the trace.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WorkloadSummary {
    pub ram_read_rows: Vec<usize>,
    pub ram_writes: usize,
    pub rom_reads: usize,
    pub bigfield_rows: Vec<usize>,
    pub limb_rows: Vec<usize>,
}

fn random_index(rng: &mut impl RngCore, size: usize) -> usize {
    (rng.next_u64() % size as u64) as usize
}

/// A uniformly random limb of at most 70 bits.
fn random_limb(rng: &mut impl RngCore) -> u128 {
    let wide = ((rng.next_u64() as u128) << 64) | rng.next_u64() as u128;
    wide >> 58
}

#[tracing::instrument(skip_all)]
pub fn random_trace<F: HonkField, R: RngCore>(
    config: &WorkloadConfig,
    eta: F,
    rng: &mut R,
) -> Result<(Trace<F>, WorkloadSummary), TraceError> {
    let mut builder = AuxiliaryTraceBuilder::new(eta);
    let mut summary = WorkloadSummary::default();

    if config.rom_size > 0 {
        let values = (0..config.rom_size)
            .map(|_| (F::random(rng), F::random(rng)))
            .collect();
        let rom = builder.rom_array(values);
        for _ in 0..config.rom_size {
            builder.read_rom(rom, random_index(rng, config.rom_size))?;
            summary.rom_reads += 1;
        }
    }

    if config.ram_size > 0 {
        let ram = builder.ram_array(config.ram_size);
        for _ in 0..config.ram_ops {
            let index = random_index(rng, config.ram_size);
            if rng.next_u32() % 2 == 0 {
                builder.write_ram(ram, index, F::random(rng))?;
                summary.ram_writes += 1;
            } else {
                summary.ram_read_rows.push(builder.num_rows());
                builder.read_ram(ram, index)?;
            }
        }
    }

    let products = [
        BigfieldProduct::First,
        BigfieldProduct::Second,
        BigfieldProduct::Third,
    ];
    for i in 0..config.bigfield_gates {
        summary.bigfield_rows.push(builder.num_rows());
        let wires = std::array::from_fn(|_| F::random(rng));
        let shifted = std::array::from_fn(|_| F::random(rng));
        builder.non_native_product(products[i % products.len()], wires, shifted);

        let gate = if i % 2 == 0 {
            LimbAccumulation::First
        } else {
            LimbAccumulation::Second
        };
        summary.limb_rows.push(builder.num_rows());
        builder.limb_accumulation(gate, decompose_limb(random_limb(rng))?)?;
    }

    tracing::info!(
        rom_reads = summary.rom_reads,
        ram_reads = summary.ram_read_rows.len(),
        ram_writes = summary.ram_writes,
        bigfield_gates = config.bigfield_gates,
        "generated auxiliary workload"
    );
    Ok((builder.finalize(), summary))
}
