use serde::{Deserialize, Serialize};

use crate::attention::AttentionMap;
use crate::color::ColorStats;
use crate::field::Bounds;
use crate::retrieval::Retrieval;

/// Diagnostic aggregates captured at the end of a run.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Telemetry {
    pub bounds: Bounds,
    pub color: ColorStats,
    pub retrieval_size: usize,
    pub peak_attention: Option<String>,
}

pub fn capture_telemetry(
    bounds: Bounds,
    color: ColorStats,
    retrieval: &Retrieval,
    attention: &AttentionMap,
) -> Telemetry {
    Telemetry {
        bounds,
        color,
        retrieval_size: retrieval.summary.len(),
        peak_attention: attention.peak().map(str::to_string),
    }
}
