//! Spatial clustering of vector paths into icon candidates.
//!
//! Small and medium vector paths that sit close together usually form one
//! decorative or iconographic shape. Clustering is connected components over
//! a bounding-box adjacency relation: two paths are adjacent when their
//! boxes, expanded by the gap tolerance, overlap. The pairwise adjacency
//! test is O(n^2).

use crate::config::ConversionOptions;
use crate::elements::{IconCandidate, IconClass, VectorPathRecord};

/// Group a page's vector paths into icon candidates.
///
/// Paths whose width or height falls outside the configured icon size range
/// are excluded before clustering; degenerate boxes never pass the size
/// floor. An empty result means "no icons detected", not an error.
pub fn cluster_icons(
    vectors: &[VectorPathRecord],
    options: &ConversionOptions,
) -> Vec<IconCandidate> {
    let min_size = options.min_icon_size_pt;
    let max_size = options.max_icon_size_pt;

    let filtered: Vec<&VectorPathRecord> = vectors
        .iter()
        .filter(|v| {
            let width = v.bbox.width();
            let height = v.bbox.height();
            width >= min_size && height >= min_size && width <= max_size && height <= max_size
        })
        .collect();

    if filtered.is_empty() {
        return Vec::new();
    }

    connected_components(&filtered, options.cluster_gap_pt)
        .into_iter()
        .enumerate()
        .map(|(cluster_idx, component)| {
            let members: Vec<VectorPathRecord> =
                component.iter().map(|&i| filtered[i].clone()).collect();
            let bbox = members
                .iter()
                .skip(1)
                .fold(members[0].bbox, |acc, m| acc.union(&m.bbox));

            IconCandidate {
                id: format!("icon_{}", cluster_idx),
                bbox,
                members,
                classification: IconClass::VectorCandidate,
            }
        })
        .collect()
}

/// Connected components over the gap-adjacency relation.
///
/// Depth-first traversal from each unvisited record; the resulting partition
/// does not depend on input order, only member visitation order does.
fn connected_components(records: &[&VectorPathRecord], gap: f32) -> Vec<Vec<usize>> {
    let mut components = Vec::new();
    let mut visited = vec![false; records.len()];

    for start in 0..records.len() {
        if visited[start] {
            continue;
        }
        visited[start] = true;

        let mut stack = vec![start];
        let mut component = Vec::new();

        while let Some(current) = stack.pop() {
            component.push(current);
            for next in 0..records.len() {
                if visited[next] {
                    continue;
                }
                if records[current].bbox.is_within_gap(&records[next].bbox, gap) {
                    visited[next] = true;
                    stack.push(next);
                }
            }
        }

        components.push(component);
    }

    components
}
