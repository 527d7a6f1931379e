//! [`SpeedLimitSign`] – a detected speed-limit sign.
//!
//! Two ways to build one: the direct constructor for sensor-inferred
//! detections, and [`SpeedLimitSign::from_sim_actor`] for simulator ground
//! truth, which derives the limit from the actor's dotted type identifier
//! (`"traffic.speed_limit.30"` → 30 km/h) and is certain by definition
//! (confidence 1.0, no camera-view bounding box).
//!
//! Downstream stages depend on the two projections byte-for-byte: the log
//! tuple `("speed limit <limit>", (min, max))` and the overlay text
//! `"<limit> speed limit <confidence to one decimal>"`.

use roadsight_sim::SimActor;
use roadsight_types::DetectionError;
use roadsight_viz::{ColorMap, ImageCanvas};

use crate::geometry::{BoundingBox2D, Point2D};
use crate::obstacle::{DetectedObstacle, fmt_option};
use crate::transform::Transform;

/// The fixed label every speed-limit record carries; never caller-settable.
pub const SPEED_LIMIT_LABEL: &str = "speed limit";

/// A detected speed-limit sign: the generic record plus the posted limit.
///
/// Immutable after construction; clone-and-read is safe from any number of
/// threads.
#[derive(Debug, Clone, PartialEq)]
pub struct SpeedLimitSign {
    obstacle: DetectedObstacle,
    speed_limit: u32,
}

impl SpeedLimitSign {
    /// Build a record from sensor-inferred values.
    ///
    /// `speed_limit` is the posted limit in km/h and `confidence` the
    /// detector's belief in [0, 1].  Neither is range-checked here; the
    /// detector that produced them owns that contract.  Pass `id = -1` when
    /// no stable id is known.
    pub fn new(
        speed_limit: u32,
        confidence: f32,
        bounding_box: Option<BoundingBox2D>,
        id: i64,
        transform: Option<Transform>,
    ) -> Self {
        Self {
            obstacle: DetectedObstacle::new(
                bounding_box,
                confidence,
                SPEED_LIMIT_LABEL,
                id,
                transform,
            ),
            speed_limit,
        }
    }

    /// Build a ground-truth record from a simulator traffic-sign actor.
    ///
    /// The limit is the integer after the last `.` of the actor's type
    /// identifier; the world pose is converted from the actor's native
    /// transform.  Ground truth is certain, so the result always has
    /// confidence exactly 1.0 and no camera-view bounding box.
    ///
    /// # Errors
    ///
    /// - [`DetectionError::TypeMismatch`] when the actor is not a traffic
    ///   sign.
    /// - [`DetectionError::Parse`] when the type-id suffix is not an
    ///   integer.
    pub fn from_sim_actor(actor: &SimActor) -> Result<Self, DetectionError> {
        if !actor.is_traffic_sign() {
            return Err(DetectionError::TypeMismatch {
                actor_id: actor.id(),
                kind: actor.kind().to_string(),
            });
        }
        let suffix = actor.type_id().rsplit('.').next().unwrap_or_default();
        let speed_limit = suffix.parse::<u32>().map_err(|source| DetectionError::Parse {
            type_id: actor.type_id().to_string(),
            source,
        })?;
        let transform = Transform::from_sim(actor.transform());
        Ok(Self::new(speed_limit, 1.0, None, actor.id(), Some(transform)))
    }

    /// The posted limit in km/h.
    pub fn speed_limit(&self) -> u32 {
        self.speed_limit
    }

    pub fn confidence(&self) -> f32 {
        self.obstacle.confidence
    }

    /// Always [`SPEED_LIMIT_LABEL`].
    pub fn label(&self) -> &str {
        &self.obstacle.label
    }

    pub fn id(&self) -> i64 {
        self.obstacle.id
    }

    pub fn bounding_box(&self) -> Option<&BoundingBox2D> {
        self.obstacle.bounding_box.as_ref()
    }

    pub fn transform(&self) -> Option<&Transform> {
        self.obstacle.transform.as_ref()
    }

    /// Attach a camera-view bounding box, e.g. after projecting a
    /// ground-truth pose into the image.  Consumes the record; every other
    /// field carries over unchanged.
    pub fn with_bounding_box(mut self, bounding_box: BoundingBox2D) -> Self {
        self.obstacle.bounding_box = Some(bounding_box);
        self
    }

    /// The log projection: display text plus the box's corner pair.
    ///
    /// The text is `"<label> <limit>"` with a single ASCII space, e.g.
    /// `"speed limit 30"`.
    ///
    /// # Errors
    ///
    /// [`DetectionError::MissingGeometry`] when no bounding box is set —
    /// ground-truth records need a projected box attached first.
    pub fn log_entry(&self) -> Result<(String, (Point2D, Point2D)), DetectionError> {
        let corners = self.obstacle.corner_points()?;
        Ok((
            format!("{} {}", self.obstacle.label, self.speed_limit),
            corners,
        ))
    }

    /// Draw this sign onto `canvas` with overlay text
    /// `"<limit> <label> <confidence>"`, confidence rendered to one decimal
    /// place (e.g. `"30 speed limit 1.0"`).
    ///
    /// # Errors
    ///
    /// [`DetectionError::MissingGeometry`] when no bounding box is set.
    pub fn draw_on_image(
        &self,
        canvas: &mut ImageCanvas,
        colors: &ColorMap,
        ego_transform: Option<&Transform>,
    ) -> Result<(), DetectionError> {
        // `{:.1}` alone ties to even (0.875 -> "0.8"); the overlay contract
        // rounds half away from zero.
        let confidence = (f64::from(self.obstacle.confidence) * 10.0).round() / 10.0;
        let text = format!(
            "{} {} {confidence:.1}",
            self.speed_limit, self.obstacle.label
        );
        self.obstacle
            .draw_on_image(canvas, colors, ego_transform, &text)
    }
}

impl std::fmt::Display for SpeedLimitSign {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "SpeedLimitSign(label: {}, limit: {}, confidence: {}, id: {}, transform: {}, bbox: {})",
            self.obstacle.label,
            self.speed_limit,
            self.obstacle.confidence,
            self.obstacle.id,
            fmt_option(&self.obstacle.transform),
            fmt_option(&self.obstacle.bounding_box)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use roadsight_sim::{ActorKind, SimTransform};
    use roadsight_viz::Color;

    #[test]
    fn label_is_fixed_regardless_of_inputs() {
        let with_everything = SpeedLimitSign::new(
            120,
            0.3,
            Some(BoundingBox2D::new(1, 2, 3, 4)),
            99,
            Some(Transform::identity()),
        );
        let bare = SpeedLimitSign::new(0, 0.0, None, -1, None);
        assert_eq!(with_everything.label(), "speed limit");
        assert_eq!(bare.label(), "speed limit");
    }

    #[test]
    fn ground_truth_parses_limit_and_is_certain() {
        let actor = SimActor::speed_limit_sign(12, 45, SimTransform::at(5.0, 0.0, 1.0));
        let sign = SpeedLimitSign::from_sim_actor(&actor).unwrap();
        assert_eq!(sign.speed_limit(), 45);
        assert!((sign.confidence() - 1.0).abs() < f32::EPSILON);
        assert_eq!(sign.id(), 12);
        assert!(sign.bounding_box().is_none());
        let pose = sign.transform().expect("ground truth carries a pose");
        assert!((pose.translation.x - 5.0).abs() < 1e-5);
    }

    #[test]
    fn ground_truth_rejects_non_sign_actor() {
        let actor = SimActor::new(
            3,
            ActorKind::Vehicle,
            "vehicle.tesla.model3",
            SimTransform::default(),
        );
        match SpeedLimitSign::from_sim_actor(&actor) {
            Err(DetectionError::TypeMismatch { actor_id, kind }) => {
                assert_eq!(actor_id, 3);
                assert_eq!(kind, "vehicle");
            }
            other => panic!("expected TypeMismatch, got {other:?}"),
        }
    }

    #[test]
    fn ground_truth_rejects_non_numeric_suffix() {
        let actor = SimActor::new(
            4,
            ActorKind::TrafficSign,
            "traffic.speed_limit.fast",
            SimTransform::default(),
        );
        match SpeedLimitSign::from_sim_actor(&actor) {
            Err(DetectionError::Parse { type_id, .. }) => {
                assert_eq!(type_id, "traffic.speed_limit.fast");
            }
            other => panic!("expected Parse, got {other:?}"),
        }
    }

    #[test]
    fn log_entry_pairs_text_with_corners() {
        let sign = SpeedLimitSign::new(30, 0.9, Some(BoundingBox2D::new(0, 10, 0, 20)), -1, None);
        let (text, (min, max)) = sign.log_entry().unwrap();
        assert_eq!(text, "speed limit 30");
        assert_eq!(min, Point2D::new(0, 0));
        assert_eq!(max, Point2D::new(10, 20));
    }

    #[test]
    fn log_entry_without_bbox_is_missing_geometry() {
        let actor = SimActor::speed_limit_sign(1, 30, SimTransform::default());
        let sign = SpeedLimitSign::from_sim_actor(&actor).unwrap();
        match sign.log_entry() {
            Err(DetectionError::MissingGeometry { label }) => assert_eq!(label, "speed limit"),
            other => panic!("expected MissingGeometry, got {other:?}"),
        }
    }

    #[test]
    fn overlay_text_rounds_confidence_to_one_decimal() {
        let sign = SpeedLimitSign::new(30, 0.875, Some(BoundingBox2D::new(2, 12, 2, 12)), -1, None);
        let mut canvas = ImageCanvas::new(24, 24);
        sign.draw_on_image(&mut canvas, &ColorMap::default(), None)
            .unwrap();
        assert_eq!(canvas.annotations()[0].text, "30 speed limit 0.9");
        // The box is painted in the speed-limit palette color.
        assert_eq!(canvas.pixel(2, 2), Some(Color::AMBER));
    }

    #[test]
    fn attaching_a_bbox_makes_projections_usable() {
        let actor = SimActor::speed_limit_sign(8, 60, SimTransform::at(10.0, 0.0, 2.0));
        let sign = SpeedLimitSign::from_sim_actor(&actor)
            .unwrap()
            .with_bounding_box(BoundingBox2D::new(5, 25, 5, 35));
        let (text, (min, max)) = sign.log_entry().unwrap();
        assert_eq!(text, "speed limit 60");
        assert_eq!(min, Point2D::new(5, 5));
        assert_eq!(max, Point2D::new(25, 35));
        // Everything else carried over.
        assert_eq!(sign.id(), 8);
        assert_eq!(sign.speed_limit(), 60);
    }

    #[test]
    fn field_values_survive_every_operation() {
        let sign = SpeedLimitSign::new(50, 0.75, Some(BoundingBox2D::new(0, 5, 0, 5)), 21, None);
        let _ = sign.log_entry().unwrap();
        let mut canvas = ImageCanvas::new(8, 8);
        sign.draw_on_image(&mut canvas, &ColorMap::default(), None)
            .unwrap();
        let _ = sign.to_string();
        assert_eq!(sign.speed_limit(), 50);
        assert!((sign.confidence() - 0.75).abs() < f32::EPSILON);
        assert_eq!(sign.id(), 21);
    }

    #[test]
    fn display_has_stable_field_order_across_paths() {
        let direct = SpeedLimitSign::new(30, 1.0, None, 5, None);
        let actor = SimActor::speed_limit_sign(5, 30, SimTransform::default());
        let derived = SpeedLimitSign::from_sim_actor(&actor).unwrap();

        let direct_str = direct.to_string();
        let derived_str = derived.to_string();
        for s in [&direct_str, &derived_str] {
            assert!(s.starts_with("SpeedLimitSign(label: speed limit, limit: 30"), "got: {s}");
        }
        let label_pos = derived_str.find("label:").unwrap();
        let limit_pos = derived_str.find("limit: 30").unwrap();
        let id_pos = derived_str.find("id:").unwrap();
        assert!(label_pos < limit_pos && limit_pos < id_pos);
    }
}
