//! [`DetectedObstacle`] – the generic detected-object record.
//!
//! Every specialized detection (speed-limit sign, traffic light, ...) embeds
//! one of these by value and delegates the shared operations to it: the
//! bounding-box corner query for logging, and the color-mapped box-plus-text
//! overlay for visualization.

use roadsight_types::DetectionError;
use roadsight_viz::{ColorMap, ImageCanvas};
use tracing::trace;

use crate::geometry::{BoundingBox2D, Point2D};
use crate::transform::Transform;

/// Vertical offset between a box edge and its overlay text, in pixels.
const TEXT_OFFSET_PX: i32 = 12;

/// A normalized detected object.
///
/// `id` is the simulator actor id for ground-truth records and `-1` when
/// unknown.  `bounding_box` is present for sensor-image detections and
/// absent for ground truth that has not been projected into camera view;
/// `transform` is the world pose when one is known.
#[derive(Debug, Clone, PartialEq)]
pub struct DetectedObstacle {
    pub confidence: f32,
    pub bounding_box: Option<BoundingBox2D>,
    pub label: String,
    pub id: i64,
    pub transform: Option<Transform>,
}

impl DetectedObstacle {
    pub fn new(
        bounding_box: Option<BoundingBox2D>,
        confidence: f32,
        label: impl Into<String>,
        id: i64,
        transform: Option<Transform>,
    ) -> Self {
        Self {
            confidence,
            bounding_box,
            label: label.into(),
            id,
            transform,
        }
    }

    /// The bounding box's (min, max) corner pair.
    ///
    /// # Errors
    ///
    /// [`DetectionError::MissingGeometry`] when no bounding box is set.
    pub fn corner_points(&self) -> Result<(Point2D, Point2D), DetectionError> {
        let bbox = self.require_bbox()?;
        Ok((bbox.min_point(), bbox.max_point()))
    }

    /// Draw this detection onto `canvas`: the bounding box in the label's
    /// mapped color, `text` anchored just above the box, and — when both the
    /// ego pose and this record's pose are known — the straight-line
    /// distance below the box.
    ///
    /// Mutates the canvas in place.  Not internally thread-safe; callers
    /// serialize concurrent draws onto a shared canvas.
    ///
    /// # Errors
    ///
    /// [`DetectionError::MissingGeometry`] when no bounding box is set.
    pub fn draw_on_image(
        &self,
        canvas: &mut ImageCanvas,
        colors: &ColorMap,
        ego_transform: Option<&Transform>,
        text: &str,
    ) -> Result<(), DetectionError> {
        let bbox = self.require_bbox()?;
        let color = colors.color_for(&self.label);
        let min = bbox.min_point();
        let max = bbox.max_point();
        trace!(label = %self.label, id = self.id, "drawing detection");

        canvas.draw_rect(min.x, min.y, max.x, max.y, color);
        canvas.annotate_text(min.x, (min.y - TEXT_OFFSET_PX).max(0), text, color);

        if let (Some(ego), Some(pose)) = (ego_transform, self.transform.as_ref()) {
            let distance = ego.distance_to(pose);
            canvas.annotate_text(min.x, max.y + TEXT_OFFSET_PX, format!("{distance:.1} m"), color);
        }
        Ok(())
    }

    fn require_bbox(&self) -> Result<&BoundingBox2D, DetectionError> {
        self.bounding_box
            .as_ref()
            .ok_or_else(|| DetectionError::MissingGeometry {
                label: self.label.clone(),
            })
    }
}

impl std::fmt::Display for DetectedObstacle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "DetectedObstacle(label: {}, confidence: {}, id: {}, transform: {}, bbox: {})",
            self.label,
            self.confidence,
            self.id,
            fmt_option(&self.transform),
            fmt_option(&self.bounding_box)
        )
    }
}

/// Format an optional field as its Display form or `none`.
pub(crate) fn fmt_option<T: std::fmt::Display>(value: &Option<T>) -> String {
    match value {
        Some(v) => v.to_string(),
        None => "none".to_string(),
    }
}
