/// Spiral step angle in radians — the golden angle, truncated to the
/// precision the layout was tuned against. Changing it moves every token,
/// so it is frozen rather than derived from φ.
pub const SPIRAL_ANGLE: f64 = 2.399_963_23;

/// Spiral base radius for the first token ring.
pub const SPIRAL_BASE: f64 = 40.0;

/// Spiral growth factor, multiplied by √index.
pub const SPIRAL_GROWTH: f64 = 28.0;

/// Number of quantization bins.
pub const BIN_COUNT: f64 = 5.0;

/// Concave compression exponent applied to normalized weight.
pub const ENERGY_EXPONENT: f64 = 0.75;

/// Node radius = RADIUS_BASE + bin * RADIUS_STEP.
pub const RADIUS_BASE: f64 = 16.0;
pub const RADIUS_STEP: f64 = 6.0;

/// Intensity gain over energy, clamped to [0, 1] afterwards.
pub const INTENSITY_GAIN: f64 = 1.25;

/// Edge-length scale in the attention cohesion term 1 / (1 + len / COHESION_SCALE).
pub const COHESION_SCALE: f64 = 120.0;

/// Expansions with a value below this are flagged as noise.
pub const NOISE_FLOOR: f64 = 0.05;

/// Maximum number of narrative threads seeded from the focus list.
pub const MAX_THREADS: usize = 4;

/// Number of ranked expansions surfaced in the retrieval summary.
pub const SUMMARY_LIMIT: usize = 5;

/// Maximum character rotations generated by the expansion fallback.
pub const MAX_ROTATIONS: usize = 3;

/// Prompt substituted when the caller provides a blank one.
pub const FALLBACK_PROMPT: &str = "Explain the space-field engine briefly.";

/// Token text substituted when the input tokenizes to nothing.
pub const FALLBACK_TOKEN: &str = "void";

/// Numerical epsilon for near-zero comparisons.
pub const EPSILON: f64 = 1e-10;
