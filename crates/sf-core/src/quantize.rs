use crate::constants::{BIN_COUNT, ENERGY_EXPONENT, INTENSITY_GAIN, RADIUS_BASE, RADIUS_STEP};
use crate::math::clamp;
use crate::tokenizer::TokenSeed;

/// Token after quantization: seed fields plus the derived energy, bin,
/// radius and intensity values used by color and layout.
#[derive(Clone, Debug)]
pub struct ScaledToken {
    pub id: String,
    pub text: String,
    pub weight: f64,
    pub norm: f64,
    pub energy: f64,
    pub bin: u32,
    pub radius: f64,
    pub intensity: f64,
}

/// Normalize seed weights against the run maximum and derive the discrete
/// visual attributes. Order-preserving and pure.
///
/// The run maximum is floored at 1 so a zero-weight run still quantizes;
/// `energy = norm^0.75` compresses the low end so light tokens stay visible.
pub fn quantize(seeds: Vec<TokenSeed>) -> Vec<ScaledToken> {
    let max_weight = seeds.iter().fold(0.0_f64, |m, s| m.max(s.weight)).max(1.0);

    seeds
        .into_iter()
        .map(|seed| {
            let norm = clamp(seed.weight / max_weight, 0.0, 1.0);
            let energy = norm.powf(ENERGY_EXPONENT);
            let bin = ((energy * BIN_COUNT).round() as u32).max(1);
            let radius = RADIUS_BASE + bin as f64 * RADIUS_STEP;
            let intensity = clamp(energy * INTENSITY_GAIN, 0.0, 1.0);
            ScaledToken {
                id: seed.id,
                text: seed.text,
                weight: seed.weight,
                norm,
                energy,
                bin,
                radius,
                intensity,
            }
        })
        .collect()
}
