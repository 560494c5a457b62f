//! Property tests for geometry and clustering invariants.

use deck_oxide::cluster::cluster_icons;
use deck_oxide::elements::{IconCandidate, VectorPathRecord};
use deck_oxide::geometry::{
    curve_segment_count, flatten_cubic, BoundingBox, Point, MAX_CURVE_SEGMENTS,
    MIN_CURVE_SEGMENTS,
};
use deck_oxide::ConversionOptions;
use proptest::prelude::*;

fn canonical_partition(icons: &[IconCandidate]) -> Vec<Vec<String>> {
    let mut groups: Vec<Vec<String>> = icons
        .iter()
        .map(|icon| {
            let mut ids: Vec<String> = icon.members.iter().map(|m| m.id.clone()).collect();
            ids.sort();
            ids
        })
        .collect();
    groups.sort();
    groups
}

fn record(id: String, x0: f32, y0: f32, w: f32, h: f32) -> VectorPathRecord {
    VectorPathRecord {
        id,
        bbox: BoundingBox::from_corners(x0, y0, x0 + w, y0 + h),
        ops: Vec::new(),
        stroke: None,
        fill: None,
        stroke_width: 0.75,
        closed: false,
        kind: "s".to_string(),
    }
}

/// Icon-sized boxes plus a random visiting order over them.
fn boxes_and_order() -> impl Strategy<Value = (Vec<(f32, f32, f32, f32)>, Vec<usize>)> {
    prop::collection::vec(
        (0.0f32..300.0, 0.0f32..300.0, 8.0f32..80.0, 8.0f32..80.0),
        1..10,
    )
    .prop_flat_map(|boxes| {
        let indices: Vec<usize> = (0..boxes.len()).collect();
        (Just(boxes), Just(indices).prop_shuffle())
    })
}

proptest! {
    #[test]
    fn normalized_boxes_are_ordered_and_in_page(
        x0 in -500.0f32..1500.0,
        y0 in -500.0f32..1500.0,
        x1 in -500.0f32..1500.0,
        y1 in -500.0f32..1500.0,
    ) {
        let bbox = BoundingBox::normalized(x0, y0, x1, y1, 612.0, 792.0);
        prop_assert!(bbox.x0 <= bbox.x1);
        prop_assert!(bbox.y0 <= bbox.y1);
        prop_assert!(bbox.x0 >= 0.0 && bbox.x1 <= 612.0);
        prop_assert!(bbox.y0 >= 0.0 && bbox.y1 <= 792.0);
    }

    #[test]
    fn segment_count_is_bounded_and_monotone(
        c1 in 0.0f32..5000.0,
        c2 in 0.0f32..5000.0,
        tolerance in 0.0f32..5.0,
    ) {
        let (short, long) = if c1 <= c2 { (c1, c2) } else { (c2, c1) };
        let s_short = curve_segment_count(short, tolerance);
        let s_long = curve_segment_count(long, tolerance);

        prop_assert!(s_short >= MIN_CURVE_SEGMENTS && s_short <= MAX_CURVE_SEGMENTS);
        prop_assert!(s_long >= MIN_CURVE_SEGMENTS && s_long <= MAX_CURVE_SEGMENTS);
        prop_assert!(s_short <= s_long);
    }

    #[test]
    fn flattened_curves_keep_endpoints_and_bounds(
        coords in prop::array::uniform8(-400.0f32..400.0),
        tolerance in 0.0f32..5.0,
    ) {
        let [x0, y0, x1, y1, x2, y2, x3, y3] = coords;
        let p0 = Point::new(x0, y0);
        let p3 = Point::new(x3, y3);
        let points = flatten_cubic(p0, Point::new(x1, y1), Point::new(x2, y2), p3, tolerance);

        prop_assert!(points.len() >= MIN_CURVE_SEGMENTS + 1);
        prop_assert!(points.len() <= MAX_CURVE_SEGMENTS + 1);
        prop_assert_eq!(points[0], p0);
        prop_assert_eq!(*points.last().unwrap(), p3);
    }

    #[test]
    fn clustering_partition_is_order_independent((boxes, order) in boxes_and_order()) {
        let options = ConversionOptions::default();

        let original: Vec<VectorPathRecord> = boxes
            .iter()
            .enumerate()
            .map(|(i, &(x0, y0, w, h))| record(format!("p{}", i), x0, y0, w, h))
            .collect();
        let permuted: Vec<VectorPathRecord> =
            order.iter().map(|&i| original[i].clone()).collect();

        let a = canonical_partition(&cluster_icons(&original, &options));
        let b = canonical_partition(&cluster_icons(&permuted, &options));
        prop_assert_eq!(a, b);
    }

    #[test]
    fn every_record_lands_in_exactly_one_cluster((boxes, _) in boxes_and_order()) {
        let options = ConversionOptions::default();
        let records: Vec<VectorPathRecord> = boxes
            .iter()
            .enumerate()
            .map(|(i, &(x0, y0, w, h))| record(format!("p{}", i), x0, y0, w, h))
            .collect();

        let icons = cluster_icons(&records, &options);
        let mut seen: Vec<String> = icons
            .iter()
            .flat_map(|icon| icon.members.iter().map(|m| m.id.clone()))
            .collect();
        seen.sort();
        seen.dedup();

        // Every box here passes the size filter, so the clusters cover all
        // records exactly once.
        prop_assert_eq!(seen.len(), records.len());
    }
}
