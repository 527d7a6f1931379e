//! Simulator actor snapshots.
//!
//! A [`SimActor`] is the opaque handle the perception layer sees: an integer
//! id, an explicit [`ActorKind`] tag, the simulator's dotted type identifier
//! (e.g. `"traffic.speed_limit.30"`), and the actor's pose in the
//! simulator's native representation.  The kind tag replaces runtime type
//! inspection: consumers check capabilities against the tag, never against a
//! concrete simulator class.

use serde::{Deserialize, Serialize};

// ────────────────────────────────────────────────────────────────────────────
// Actor kinds
// ────────────────────────────────────────────────────────────────────────────

/// Category tag for a simulator actor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActorKind {
    TrafficSign,
    TrafficLight,
    Vehicle,
    Walker,
}

impl std::fmt::Display for ActorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ActorKind::TrafficSign => write!(f, "traffic sign"),
            ActorKind::TrafficLight => write!(f, "traffic light"),
            ActorKind::Vehicle => write!(f, "vehicle"),
            ActorKind::Walker => write!(f, "walker"),
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Native transform
// ────────────────────────────────────────────────────────────────────────────

/// An actor pose in the simulator's native convention: location in metres,
/// rotation as Euler angles in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SimTransform {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    /// Rotation around the Y axis (degrees).
    #[serde(default)]
    pub pitch: f32,
    /// Rotation around the Z axis (degrees).
    #[serde(default)]
    pub yaw: f32,
    /// Rotation around the X axis (degrees).
    #[serde(default)]
    pub roll: f32,
}

impl SimTransform {
    /// A pose at the given location with zero rotation.
    pub fn at(x: f32, y: f32, z: f32) -> Self {
        Self {
            x,
            y,
            z,
            ..Self::default()
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Actor snapshot
// ────────────────────────────────────────────────────────────────────────────

/// Snapshot of one simulator actor at query time.
///
/// Immutable once built; the world registry hands out references and the
/// perception layer reads ids, type ids, and transforms through the
/// accessors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimActor {
    id: i64,
    kind: ActorKind,
    type_id: String,
    transform: SimTransform,
}

impl SimActor {
    /// Create an actor snapshot with an explicit dotted type identifier.
    pub fn new(
        id: i64,
        kind: ActorKind,
        type_id: impl Into<String>,
        transform: SimTransform,
    ) -> Self {
        Self {
            id,
            kind,
            type_id: type_id.into(),
            transform,
        }
    }

    /// Convenience constructor for a posted speed-limit sign, producing the
    /// simulator's `traffic.speed_limit.<limit>` type identifier.
    pub fn speed_limit_sign(id: i64, limit_kmh: u32, transform: SimTransform) -> Self {
        Self::new(
            id,
            ActorKind::TrafficSign,
            format!("traffic.speed_limit.{limit_kmh}"),
            transform,
        )
    }

    /// Simulator-assigned actor id.
    pub fn id(&self) -> i64 {
        self.id
    }

    /// The actor's category tag.
    pub fn kind(&self) -> ActorKind {
        self.kind
    }

    /// The simulator's dotted type identifier for this actor.
    pub fn type_id(&self) -> &str {
        &self.type_id
    }

    /// The actor's pose in the simulator's native convention.
    pub fn transform(&self) -> &SimTransform {
        &self.transform
    }

    /// Whether this actor is a traffic sign (speed limits, stops, yields).
    pub fn is_traffic_sign(&self) -> bool {
        self.kind == ActorKind::TrafficSign
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn speed_limit_sign_builds_dotted_type_id() {
        let actor = SimActor::speed_limit_sign(7, 30, SimTransform::at(1.0, 2.0, 0.0));
        assert_eq!(actor.type_id(), "traffic.speed_limit.30");
        assert_eq!(actor.id(), 7);
        assert!(actor.is_traffic_sign());
    }

    #[test]
    fn vehicle_is_not_a_traffic_sign() {
        let actor = SimActor::new(
            3,
            ActorKind::Vehicle,
            "vehicle.tesla.model3",
            SimTransform::default(),
        );
        assert!(!actor.is_traffic_sign());
        assert_eq!(actor.kind().to_string(), "vehicle");
    }

    #[test]
    fn sim_transform_at_has_zero_rotation() {
        let t = SimTransform::at(4.0, -2.0, 1.5);
        assert!((t.x - 4.0).abs() < 1e-6);
        assert!((t.yaw).abs() < 1e-6);
        assert!((t.pitch).abs() < 1e-6);
        assert!((t.roll).abs() < 1e-6);
    }
}
