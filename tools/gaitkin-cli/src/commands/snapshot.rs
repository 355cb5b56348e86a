//! Vectors and angles of a single static pose.

use gaitkin_model::{Point2D, Segment, Vector2D};
use gaitkin_processing_core::snapshot::{analyze_pose, StaticPose};

pub fn run(
    il_crest: Point2D,
    grt_troc: Point2D,
    lat_con: Point2D,
    lat_mall: Point2D,
) -> anyhow::Result<()> {
    let report = analyze_pose(&StaticPose {
        iliac_crest: il_crest,
        greater_trochanter: grt_troc,
        lateral_condyle: lat_con,
        lateral_malleolus: lat_mall,
    });

    let fmt_vector = |v: Vector2D| format!("({:.2}, {:.2})", v.x, v.y);

    println!("Position vectors:");
    println!("  Trunk vector: {}", fmt_vector(report.trunk_vector));
    println!("  Thigh vector: {}", fmt_vector(report.thigh_vector));
    println!("  Shank vector: {}", fmt_vector(report.shank_vector));
    println!();

    println!("Segment angles:");
    for segment in [Segment::Trunk, Segment::Thigh, Segment::Shank] {
        if let Some(angle) = report.segment_angle(segment) {
            println!("  {segment}: {angle:.2} degrees");
        }
    }
    println!();

    println!("Joint angles:");
    println!("  hip: {:.2} degrees", report.hip_angle);
    println!("  knee: {:.2} degrees", report.knee_angle);

    Ok(())
}
