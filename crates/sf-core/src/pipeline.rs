//! The synchronous transformation pipeline.
//!
//! One call to [`Pipeline::run`] takes a prompt through every stage in
//! dependency order and returns a fully-assembled result. Each stage is a
//! pure function of the previous stage's output; nothing here touches I/O,
//! the clock or randomness, so the same prompt always produces the same
//! field.

use crate::attention::{AttentionMap, compute_attention};
use crate::color::assign_colors;
use crate::constants::FALLBACK_PROMPT;
use crate::expand::{AssociationTable, expand};
use crate::export::{WirePackage, bundle, export_field};
use crate::field::{Expansion, SpaceField, Token};
use crate::formatting::{Formatted, format_output};
use crate::glyphs::assign;
use crate::graph::{Graph, build_graph};
use crate::layout::{LayoutParams, layout_nodes};
use crate::quantize::quantize;
use crate::reasoning::synthesize_reasoning;
use crate::regions::{RegionMap, derive_regions};
use crate::retrieval::{Retrieval, build_retrieval};
use crate::safety::{SafetyReport, run_safety_checks};
use crate::telemetry::{Telemetry, capture_telemetry};
use crate::threads::{Thread, build_threads};
use crate::tokenizer::tokenize;

/// Pipeline configuration: the injected association table and the layout
/// tunables.
#[derive(Clone, Debug)]
pub struct Pipeline {
    associations: AssociationTable,
    params: LayoutParams,
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}

/// Everything one run produces.
#[derive(Clone, Debug)]
pub struct PipelineResult {
    /// The effective prompt after blank-input fallback.
    pub prompt: String,
    pub field: SpaceField,
    pub regions: RegionMap,
    pub retrieval: Retrieval,
    pub graph: Graph,
    pub attention: AttentionMap,
    pub threads: Vec<Thread>,
    pub reasoning: String,
    pub formatted: Formatted,
    pub safety: SafetyReport,
    pub telemetry: Telemetry,
    pub answer: String,
    pub trace: String,
}

impl Pipeline {
    pub fn new() -> Self {
        Self {
            associations: AssociationTable::builtin(),
            params: LayoutParams::default(),
        }
    }

    pub fn with_associations(mut self, table: AssociationTable) -> Self {
        self.associations = table;
        self
    }

    pub fn with_params(mut self, params: LayoutParams) -> Self {
        self.params = params;
        self
    }

    /// Run the full pipeline on a prompt.
    pub fn run(&self, prompt: &str) -> PipelineResult {
        let effective = match prompt.trim() {
            "" => FALLBACK_PROMPT,
            trimmed => trimmed,
        }
        .to_string();

        let glyphed = assign(quantize(tokenize(&effective)));
        let expansion_seeds = expand(&glyphed, &self.associations);
        let colors = assign_colors(&glyphed, &expansion_seeds);
        let layout = layout_nodes(&glyphed, &expansion_seeds, &self.params);

        let tokens: Vec<Token> = glyphed
            .into_iter()
            .zip(colors.tokens.iter())
            .zip(layout.token_pos.iter())
            .map(|((t, color), pos)| Token {
                id: t.id,
                text: t.text,
                weight: t.weight,
                norm: t.norm,
                energy: t.energy,
                bin: t.bin,
                radius: t.radius,
                intensity: t.intensity,
                glyph: t.glyph,
                hsv: color.hsv,
                rgb: color.rgb,
                alpha: color.alpha,
                pos: *pos,
            })
            .collect();

        let expansions: Vec<Expansion> = expansion_seeds
            .into_iter()
            .zip(colors.expansions.iter())
            .zip(layout.expansion_pos.iter())
            .map(|((e, color), pos)| Expansion {
                id: e.id,
                of: e.of,
                kind: e.kind,
                text: e.text,
                v: e.v,
                glyph: e.glyph,
                hsv: color.hsv,
                rgb: color.rgb,
                alpha: color.alpha,
                pos: *pos,
            })
            .collect();

        let field = SpaceField {
            tokens,
            expansions,
            triangles: colors.triangles,
            edges: layout.edges,
            bounds: layout.bounds,
        };

        let regions = derive_regions(&field.tokens);
        let retrieval = build_retrieval(&field);
        let graph = build_graph(&field);
        let attention = compute_attention(&graph);
        let threads = build_threads(&attention, &field.expansions);
        let reasoning = synthesize_reasoning(&threads);
        let formatted = format_output(&reasoning, &regions.regions, &field.tokens);
        let safety = run_safety_checks(&field.tokens, &field.expansions);
        let telemetry = capture_telemetry(field.bounds, colors.stats, &retrieval, &attention);

        let answer = [
            format!("Prompt: \"{effective}\""),
            reasoning.clone(),
            formatted.region_summary.clone(),
        ]
        .iter()
        .filter(|line| !line.is_empty())
        .cloned()
        .collect::<Vec<_>>()
        .join("\n");

        let trace = format!(
            "pipeline: {} tokens, {} expansions, {} triangles, {} edges, {} regions, {} threads",
            field.tokens.len(),
            field.expansions.len(),
            field.triangles.len(),
            field.edges.len(),
            regions.regions.len(),
            threads.len(),
        );

        PipelineResult {
            prompt: effective,
            field,
            regions,
            retrieval,
            graph,
            attention,
            threads,
            reasoning,
            formatted,
            safety,
            telemetry,
            answer,
            trace,
        }
    }
}

impl PipelineResult {
    /// Bundle this run into an exportable wire package.
    pub fn to_package(&self) -> WirePackage {
        bundle(
            export_field(&self.field),
            Some(&self.retrieval),
            Some(&self.graph),
            &self.prompt,
            &self.answer,
            &self.trace,
        )
    }
}
