use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::field::Token;

/// Cluster of tokens sharing a quantization tier.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Region {
    pub id: String,
    pub key: String,
    pub members: Vec<String>,
    pub center: [f64; 2],
}

/// All regions of a run plus the token → region reverse index.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct RegionMap {
    pub regions: Vec<Region>,
    pub by_token: HashMap<String, String>,
}

/// Partition tokens by quantization bin. One region per observed bin,
/// ordered by first encounter; centroid is the mean member position.
/// Every token belongs to exactly one region.
pub fn derive_regions(tokens: &[Token]) -> RegionMap {
    let mut order: Vec<u32> = Vec::new();
    let mut groups: HashMap<u32, Vec<&Token>> = HashMap::new();

    for token in tokens {
        if !groups.contains_key(&token.bin) {
            order.push(token.bin);
        }
        groups.entry(token.bin).or_default().push(token);
    }

    let regions: Vec<Region> = order
        .iter()
        .enumerate()
        .map(|(index, bin)| {
            let members = &groups[bin];
            let n = members.len().max(1) as f64;
            let cx = members.iter().map(|m| m.pos[0]).sum::<f64>() / n;
            let cy = members.iter().map(|m| m.pos[1]).sum::<f64>() / n;
            Region {
                id: format!("reg-{index}"),
                key: format!("tier-{bin}"),
                members: members.iter().map(|m| m.id.clone()).collect(),
                center: [cx, cy],
            }
        })
        .collect();

    let mut by_token = HashMap::new();
    for region in &regions {
        for member in &region.members {
            by_token.insert(member.clone(), region.id.clone());
        }
    }

    RegionMap { regions, by_token }
}
