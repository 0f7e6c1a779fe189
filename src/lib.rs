//! Drives the auxiliary relation over generated traces: build a workload, optionally tamper
//! with it, check every row and accumulate one sumcheck round.

use ark_bn254::Fr;
use ark_std::{One, Zero};
use clap::Args;
use eyre::{bail, Result};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

use honk_aux_core::field::HonkField;
use honk_aux_core::relations::{AuxiliaryRelation, Column, RelationParameters};
use honk_aux_core::subprotocols::{check_relation, RelationRound};
use honk_aux_core::trace::{random_trace, WorkloadConfig};
use honk_aux_core::utils::errors::RelationFailure;

pub use honk_aux_core;

#[derive(Args, Debug, Clone)]
pub struct WorkloadArgs {
    /// Entries in the ROM array
    #[clap(long, default_value_t = 16)]
    pub rom_size: usize,

    /// Cells in the RAM array
    #[clap(long, default_value_t = 16)]
    pub ram_size: usize,

    /// Random RAM reads and writes
    #[clap(long, default_value_t = 64)]
    pub ram_ops: usize,

    /// Bigfield product and limb accumulation gate pairs
    #[clap(long, default_value_t = 8)]
    pub bigfield_gates: usize,

    /// Seed for the workload and the relation parameters
    #[clap(long, default_value_t = 0)]
    pub seed: u64,

    /// Corrupt the value of one RAM read before checking
    #[clap(long)]
    pub tamper: bool,
}

impl WorkloadArgs {
    pub fn config(&self) -> WorkloadConfig {
        WorkloadConfig {
            rom_size: self.rom_size,
            ram_size: self.ram_size,
            ram_ops: self.ram_ops,
            bigfield_gates: self.bigfield_gates,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    pub num_rows: usize,
    pub tampered_row: Option<usize>,
    pub check: Result<(), RelationFailure>,
    /// Whether every accumulated sub-relation is zero at both hypercube points.
    pub round_vanishes: bool,
}

#[tracing::instrument(skip_all)]
pub fn run(args: &WorkloadArgs) -> Result<RunReport> {
    let mut rng = ChaCha20Rng::seed_from_u64(args.seed);
    let params = RelationParameters::<Fr>::random(&mut rng);
    let (mut trace, summary) = random_trace(&args.config(), params.eta, &mut rng)?;
    tracing::info!(rows = trace.len(), num_vars = trace.num_vars(), "built trace");

    let tampered_row = if args.tamper {
        if summary.ram_read_rows.is_empty() {
            bail!("--tamper needs at least one RAM read; raise --ram-size and --ram-ops");
        }
        let row = summary.ram_read_rows[rng.gen_range(0..summary.ram_read_rows.len())];
        let value = trace.value(Column::WO, row);
        trace.set(Column::WO, row, value + Fr::one());
        tracing::warn!(row, "tampered with a RAM read");
        Some(row)
    } else {
        None
    };

    let check = check_relation::<Fr, AuxiliaryRelation>(&trace, &params);

    let zeta = Fr::random(&mut rng);
    let round = RelationRound::<Fr, AuxiliaryRelation>::with_challenge(
        params,
        zeta,
        trace.num_edges(),
    );
    let accumulators = round.accumulate::<6>(&trace);
    let round_vanishes = (0..2).all(|point| {
        accumulators
            .evaluations_at(point)
            .iter()
            .all(Fr::is_zero)
    });

    Ok(RunReport {
        num_rows: trace.len(),
        tampered_row,
        check,
        round_vanishes,
    })
}
