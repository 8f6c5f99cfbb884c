use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::expand::ExpansionSeed;
use crate::field::Triangle;
use crate::glyphs::GlyphedToken;
use crate::math::hsv_to_rgb;

/// Color assignment for a single node, keyed by node id.
#[derive(Clone, Debug)]
pub struct NodeColor {
    pub id: String,
    pub hsv: [f64; 3],
    pub rgb: [f64; 3],
    pub alpha: f64,
}

/// Aggregate palette diagnostics for telemetry.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize)]
pub struct ColorStats {
    pub mean_hue: f64,
    pub mean_value: f64,
}

/// Output of the color stage: per-node colors, triangle groupings and
/// palette statistics.
#[derive(Clone, Debug)]
pub struct ColorField {
    pub tokens: Vec<NodeColor>,
    pub expansions: Vec<NodeColor>,
    pub triangles: Vec<Triangle>,
    pub stats: ColorStats,
}

/// Derive colors for tokens, expansions and triangles.
///
/// The base hue comes from token-count parity; token hues cycle uniformly
/// across the sequence with saturation and value scaled by intensity.
/// Expansions echo their parent's hue with reduced saturation and value;
/// an index-derived hue stands in when the parent is absent. Triangles
/// average the HSV of three consecutive expansions, dropping short tails.
pub fn assign_colors(tokens: &[GlyphedToken], expansions: &[ExpansionSeed]) -> ColorField {
    let base_hue = (tokens.len() % 12) as f64 / 12.0;

    let token_colors: Vec<NodeColor> = tokens
        .iter()
        .enumerate()
        .map(|(index, token)| {
            let hue = (base_hue + index as f64 / tokens.len().max(1) as f64) % 1.0;
            let hsv = [
                hue,
                0.6 + token.intensity * 0.3,
                0.75 + token.intensity * 0.25,
            ];
            NodeColor {
                id: token.id.clone(),
                hsv,
                rgb: hsv_to_rgb(hsv),
                alpha: 0.9,
            }
        })
        .collect();

    let parents: HashMap<&str, (&GlyphedToken, &NodeColor)> = tokens
        .iter()
        .zip(token_colors.iter())
        .map(|(t, c)| (t.id.as_str(), (t, c)))
        .collect();

    let expansion_colors: Vec<NodeColor> = expansions
        .iter()
        .enumerate()
        .map(|(index, exp)| {
            let parent = parents.get(exp.of.as_str());
            let hue = match parent {
                Some((_, color)) => color.hsv[0] % 1.0,
                None => (base_hue + index as f64 * 0.01) % 1.0,
            };
            let intensity = parent.map(|(t, _)| t.intensity).unwrap_or(0.5);
            let hsv = [hue, 0.45 + intensity * 0.4, 0.6 + intensity * 0.3];
            NodeColor {
                id: exp.id.clone(),
                hsv,
                rgb: hsv_to_rgb(hsv),
                alpha: 0.75,
            }
        })
        .collect();

    let triangles: Vec<Triangle> = expansions
        .chunks(3)
        .zip(expansion_colors.chunks(3))
        .enumerate()
        .filter(|(_, (chunk, _))| chunk.len() == 3)
        .map(|(i, (chunk, colors))| {
            let avg = |axis: usize| colors.iter().map(|c| c.hsv[axis]).sum::<f64>() / 3.0;
            let hsv = [avg(0), avg(1), avg(2)];
            Triangle {
                id: format!("tri-{i}"),
                nodes: [chunk[0].of.clone(), chunk[1].of.clone(), chunk[2].of.clone()],
                hsv,
                rgb: hsv_to_rgb(hsv),
                alpha: 0.35,
            }
        })
        .collect();

    let count = token_colors.len().max(1) as f64;
    let stats = ColorStats {
        mean_hue: token_colors.iter().map(|c| c.hsv[0]).sum::<f64>() / count,
        mean_value: token_colors.iter().map(|c| c.hsv[2]).sum::<f64>() / count,
    };

    ColorField {
        tokens: token_colors,
        expansions: expansion_colors,
        triangles,
        stats,
    }
}
