use crate::field::HonkField;

/// Verifier randomness fixed once per proof and threaded explicitly through every
/// relation evaluation.
///
/// The auxiliary relation only reads `eta`, which folds a memory record into one field
/// element. The same `eta` must be used by the trace builder that writes the records,
/// otherwise every memory identity fails.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RelationParameters<F: HonkField> {
    pub eta: F,
    pub beta: F,
    pub gamma: F,
    pub public_input_delta: F,
    pub lookup_grand_product_delta: F,
}

impl<F: HonkField> RelationParameters<F> {
    pub fn with_eta(eta: F) -> Self {
        Self {
            eta,
            ..Default::default()
        }
    }

    pub fn random<R: rand_core::RngCore>(rng: &mut R) -> Self {
        Self {
            eta: F::random(rng),
            beta: F::random(rng),
            gamma: F::random(rng),
            public_input_delta: F::random(rng),
            lookup_grand_product_delta: F::random(rng),
        }
    }
}
