//! Space-field cognition engine.
//!
//! Turns a short text prompt into a deterministic, structured space field: a
//! typed graph of tokens and derived associations, laid out in 2D, colored,
//! clustered into regions, scored for salience and narrated into a short
//! synthetic explanation. Purely synchronous and table-driven — no model
//! inference, no network, no randomness.
//!
//! Zero I/O — the persistence and presentation layers live elsewhere.

pub mod attention;
pub mod color;
pub mod constants;
pub mod expand;
pub mod export;
pub mod field;
pub mod formatting;
pub mod glyphs;
pub mod graph;
pub mod layout;
pub mod math;
pub mod pipeline;
pub mod quantize;
pub mod reasoning;
pub mod regions;
pub mod retrieval;
pub mod safety;
pub mod telemetry;
pub mod threads;
pub mod time;
pub mod tokenizer;

pub use attention::{AttentionMap, compute_attention};
pub use color::{ColorField, ColorStats, assign_colors};
pub use constants::{FALLBACK_PROMPT, MAX_THREADS, NOISE_FLOOR};
pub use expand::{AssociationTable, ExpansionKind, expand};
pub use export::{
    CURRENT_VERSION, WireField, WirePackage, bundle, export_field, export_json, import_json,
    import_package,
};
pub use field::{Bounds, Edge, Expansion, SpaceField, Token, Triangle};
pub use formatting::{Formatted, format_output};
pub use glyphs::{ALPHABET, assign};
pub use graph::{Graph, build_graph};
pub use layout::{Layout, LayoutParams, layout_nodes};
pub use pipeline::{Pipeline, PipelineResult};
pub use quantize::quantize;
pub use reasoning::synthesize_reasoning;
pub use regions::{Region, RegionMap, derive_regions};
pub use retrieval::{Retrieval, build_retrieval};
pub use safety::{SafetyReport, run_safety_checks};
pub use telemetry::{Telemetry, capture_telemetry};
pub use threads::{Thread, build_threads};
pub use tokenizer::{TokenSeed, tokenize};
