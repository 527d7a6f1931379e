//! `roadsight` – one demo perception tick over simulator ground truth.
//!
//! Seeds a [`SimWorld`] from `roadsight.toml` (or a built-in demo layout),
//! converts every traffic-sign actor into a [`SpeedLimitSign`] record,
//! renders the overlays onto an [`ImageCanvas`], and prints the resulting
//! [`DetectionBatch`] as one JSON line on stdout.

mod config;

use std::collections::HashMap;
use std::path::Path;

use tracing::{info, warn};

use roadsight_perception::{BoundingBox2D, SpeedLimitSign, Transform};
use roadsight_sim::{ActorKind, SimActor, SimWorld};
use roadsight_types::{DetectionBatch, LogRecord};
use roadsight_viz::{ColorMap, ImageCanvas};

fn main() {
    // ── Structured logging ────────────────────────────────────────────────
    // RUST_LOG controls the filter (defaults to "info"); set
    // ROADSIGHT_LOG_FORMAT=json for newline-delimited JSON logs.
    let log_level = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_level));

    if std::env::var("ROADSIGHT_LOG_FORMAT").as_deref() == Ok("json") {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_target(true)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_target(true)
            .compact()
            .init();
    }

    // ── Configuration ─────────────────────────────────────────────────────
    let cfg = match config::load_from(Path::new("roadsight.toml")) {
        Ok(Some(cfg)) => {
            info!(signs = cfg.signs.len(), "loaded roadsight.toml");
            cfg
        }
        Ok(None) => {
            info!("no roadsight.toml found, using the built-in demo world");
            config::Config::default()
        }
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    };

    // ── Ground-truth world ────────────────────────────────────────────────
    let mut world = SimWorld::new();
    let mut projected_boxes: HashMap<i64, BoundingBox2D> = HashMap::new();
    for seed in &cfg.signs {
        world.spawn(SimActor::speed_limit_sign(
            seed.id,
            seed.limit_kmh,
            seed.transform,
        ));
        if let Some([x_min, x_max, y_min, y_max]) = seed.bbox {
            projected_boxes.insert(seed.id, BoundingBox2D::new(x_min, x_max, y_min, y_max));
        }
    }
    // A non-sign actor in the world exercises the kind filter on the query.
    world.spawn(SimActor::new(
        1000,
        ActorKind::Vehicle,
        "vehicle.lincoln.mkz2017",
        cfg.ego,
    ));
    info!(actors = world.len(), "world seeded");

    // ── Perception tick ───────────────────────────────────────────────────
    let ego = Transform::from_sim(&cfg.ego);
    let mut canvas = ImageCanvas::new(cfg.canvas_width, cfg.canvas_height);
    let colors = ColorMap::default();
    let mut records: Vec<LogRecord> = Vec::new();

    for actor in world.actors_of_kind(ActorKind::TrafficSign) {
        let sign = match SpeedLimitSign::from_sim_actor(actor) {
            Ok(sign) => sign,
            Err(e) => {
                warn!(id = actor.id(), error = %e, "skipping unparseable actor");
                continue;
            }
        };

        let sign = match projected_boxes.get(&sign.id()) {
            Some(bbox) => sign.with_bounding_box(*bbox),
            None => {
                info!(id = sign.id(), "sign has no projected box, not drawable this tick");
                continue;
            }
        };

        if let Err(e) = sign.draw_on_image(&mut canvas, &colors, Some(&ego)) {
            warn!(id = sign.id(), error = %e, "overlay draw failed");
        }
        match sign.log_entry() {
            Ok((text, (min, max))) => records.push(LogRecord {
                text,
                min_corner: [min.x, min.y],
                max_corner: [max.x, max.y],
            }),
            Err(e) => warn!(id = sign.id(), error = %e, "log projection failed"),
        }
    }

    // ── Output ────────────────────────────────────────────────────────────
    let batch = DetectionBatch::new(records);
    match serde_json::to_string(&batch) {
        Ok(line) => println!("{line}"),
        Err(e) => warn!(error = %e, "failed to serialize detection batch"),
    }
    info!(
        detections = batch.records.len(),
        annotations = canvas.annotations().len(),
        "tick complete"
    );
}
