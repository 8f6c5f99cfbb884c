use std::collections::HashMap;

use crate::constants::{SPIRAL_ANGLE, SPIRAL_BASE, SPIRAL_GROWTH};
use crate::expand::ExpansionSeed;
use crate::field::{Bounds, Edge};
use crate::glyphs::GlyphedToken;
use crate::math::{Vec2, lerp};

/// Tunable layout parameters. The defaults reproduce the reference layout
/// exactly; treat them as frozen unless output compatibility is irrelevant.
#[derive(Clone, Copy, Debug)]
pub struct LayoutParams {
    /// Damping of the relax pass on token positions.
    pub token_damping: f64,
    /// Damping of the relax pass on expansion positions.
    pub expansion_damping: f64,
    /// Relax pass count.
    pub relax_iterations: usize,
    /// Scatter distance as a multiple of the parent radius.
    pub scatter_scale: f64,
}

impl Default for LayoutParams {
    fn default() -> Self {
        Self {
            token_damping: 0.03,
            expansion_damping: 0.06,
            relax_iterations: 1,
            scatter_scale: 1.8,
        }
    }
}

/// Output of the layout stage: positions parallel to the input sequences,
/// the edge list, and the token bounding box.
#[derive(Clone, Debug)]
pub struct Layout {
    pub token_pos: Vec<[f64; 2]>,
    pub expansion_pos: Vec<[f64; 2]>,
    pub edges: Vec<Edge>,
    pub bounds: Bounds,
}

/// Place tokens and expansions in 2D space.
///
/// Tokens sit on a golden-angle spiral, recentered so the layout is
/// zero-mean. Expansions scatter around their parent along an index-derived
/// direction at a distance proportional to the parent radius; every
/// expansion contributes one edge back to its parent. A single relax pass
/// pulls all positions slightly toward the origin to trim extreme
/// excursions, and the bounding box covers token discs inclusive of radius.
pub fn layout_nodes(
    tokens: &[GlyphedToken],
    expansions: &[ExpansionSeed],
    params: &LayoutParams,
) -> Layout {
    let mut token_pos: Vec<Vec2> = tokens
        .iter()
        .enumerate()
        .map(|(index, _)| {
            let angle = index as f64 * SPIRAL_ANGLE;
            let radius = SPIRAL_BASE + (index as f64).sqrt() * SPIRAL_GROWTH;
            Vec2::new(angle.cos() * radius, angle.sin() * radius)
        })
        .collect();

    let n = token_pos.len().max(1) as f64;
    let centroid = token_pos
        .iter()
        .fold(Vec2::default(), |acc, p| Vec2::new(acc.x + p.x, acc.y + p.y));
    let centroid = Vec2::new(centroid.x / n, centroid.y / n);
    for p in &mut token_pos {
        p.x -= centroid.x;
        p.y -= centroid.y;
    }

    let index_of: HashMap<&str, usize> = tokens
        .iter()
        .enumerate()
        .map(|(i, t)| (t.id.as_str(), i))
        .collect();

    let mut expansion_pos: Vec<Vec2> = expansions
        .iter()
        .enumerate()
        .map(|(index, exp)| {
            if tokens.is_empty() {
                return Vec2::default();
            }
            let parent = index_of
                .get(exp.of.as_str())
                .copied()
                .unwrap_or(index % tokens.len());
            let direction = Vec2::new((index as f64).sin(), (index as f64).cos()).normalize();
            let distance = tokens[parent].radius * params.scatter_scale;
            Vec2::new(
                token_pos[parent].x + direction.x * distance,
                token_pos[parent].y + direction.y * distance,
            )
        })
        .collect();

    let edges: Vec<Edge> = expansions
        .iter()
        .map(|exp| Edge {
            a: exp.of.clone(),
            b: exp.id.clone(),
            k: exp.v,
        })
        .collect();

    for _ in 0..params.relax_iterations {
        for p in &mut token_pos {
            p.x = lerp(p.x, 0.0, params.token_damping);
            p.y = lerp(p.y, 0.0, params.token_damping);
        }
        for p in &mut expansion_pos {
            p.x = lerp(p.x, 0.0, params.expansion_damping);
            p.y = lerp(p.y, 0.0, params.expansion_damping);
        }
    }

    let bounds = tokens.iter().zip(token_pos.iter()).fold(
        Bounds::default(),
        |acc, (token, pos)| Bounds {
            min_x: acc.min_x.min(pos.x - token.radius),
            max_x: acc.max_x.max(pos.x + token.radius),
            min_y: acc.min_y.min(pos.y - token.radius),
            max_y: acc.max_y.max(pos.y + token.radius),
        },
    );

    Layout {
        token_pos: token_pos.into_iter().map(|p| [p.x, p.y]).collect(),
        expansion_pos: expansion_pos.into_iter().map(|p| [p.x, p.y]).collect(),
        edges,
        bounds,
    }
}
