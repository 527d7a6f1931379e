//! `roadsight-perception` – normalized detected-object records.
//!
//! Turns raw detections (sensor-inferred or simulator ground truth) into the
//! value types the rest of the pipeline consumes: a bounding box in image
//! space, a pose in the world frame, and a record type per object class with
//! stable log and overlay projections.
//!
//! # Modules
//!
//! - [`geometry`] – [`Point2D`][geometry::Point2D] and
//!   [`BoundingBox2D`][geometry::BoundingBox2D]: axis-aligned pixel-space
//!   rectangles with min/max corner queries.
//! - [`transform`] – [`Transform`][transform::Transform]: world pose as
//!   translation + unit quaternion, convertible from the simulator's native
//!   degree-based representation.
//! - [`obstacle`] – [`DetectedObstacle`][obstacle::DetectedObstacle]: the
//!   generic record every specialized detection embeds.
//! - [`speed_limit_sign`] –
//!   [`SpeedLimitSign`][speed_limit_sign::SpeedLimitSign]: a detected
//!   speed-limit sign with its posted limit in km/h.

pub mod geometry;
pub mod obstacle;
pub mod speed_limit_sign;
pub mod transform;

pub use geometry::{BoundingBox2D, Point2D};
pub use obstacle::DetectedObstacle;
pub use speed_limit_sign::SpeedLimitSign;
pub use transform::{Quaternion, Transform, Vec3};
