//! Drag a label around a radius dimension and print the geometry the
//! renderer would receive at each stop.
//!
//! Run with `RUST_LOG=debug` and the `tracing` feature to watch the
//! placement decisions as they happen:
//!
//! ```sh
//! cargo run --example label_drag --features tracing
//! ```

use dimline::{
    Angle, DatumLabel, Dimension, RadialDimension, StandardConfig, compute_placement,
};
use glam::dvec2;
use std::f64::consts::FRAC_PI_2;

fn main() -> Result<(), dimline::ConfigError> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let dim: Dimension = RadialDimension::try_new(
        dvec2(0.0, 0.0),
        10.0,
        Angle::new(0.0),
        Angle::new(FRAC_PI_2),
        false,
    )?
    .into();

    let mut label = DatumLabel::try_new(dvec2(5.0, 5.0), dvec2(6.0, 2.5))?;
    let config = StandardConfig::asme();

    let stops = [
        dvec2(5.0, 5.0),
        dvec2(25.0, 25.0),
        dvec2(-18.0, -18.0),
        dvec2(-25.0, 6.0),
    ];

    label.begin_drag();
    for stop in stops {
        label.set_pos_from_center(stop.x, stop.y);
        let result = compute_placement(&dim, &label, &config);

        println!(
            "label at ({:>6.1}, {:>6.1})  sector: {}",
            stop.x,
            stop.y,
            result
                .sector
                .map(|s| s.to_string())
                .unwrap_or_else(|| "-".into()),
        );
        println!(
            "  line ({:.2}, {:.2}) -> ({:.2}, {:.2})",
            result.line.0.x, result.line.0.y, result.line.1.x, result.line.1.y
        );
        for arrow in &result.arrows {
            println!(
                "  arrow at ({:.2}, {:.2}) pointing {:.3} rad",
                arrow.anchor.x,
                arrow.anchor.y,
                arrow.direction.radians()
            );
        }
        if !result.leader.is_empty() {
            let pts: Vec<String> = result
                .leader
                .iter()
                .map(|p| format!("({:.2}, {:.2})", p.x, p.y))
                .collect();
            println!("  leader landing {}", pts.join(" -> "));
        }
    }
    label.end_drag();

    Ok(())
}
