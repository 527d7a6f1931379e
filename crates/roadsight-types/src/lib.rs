//! `roadsight-types` – shared value types for the Roadsight perception stack.
//!
//! Every crate in the workspace speaks these types: the global
//! [`DetectionError`] enum covering the ways a detection record can fail to
//! be built or projected, and the [`DetectionBatch`] message that carries one
//! tick's worth of log entries downstream.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Global error type for record construction and projection failures.
///
/// All variants are fatal to the single call that raised them: no partial
/// record is ever returned, and no retries or default substitutions happen
/// inside the perception core.
#[derive(Error, Debug)]
pub enum DetectionError {
    /// A ground-truth factory was invoked on an actor of the wrong kind.
    #[error("actor {actor_id} is a '{kind}', not a traffic sign")]
    TypeMismatch {
        /// Simulator id of the offending actor.
        actor_id: i64,
        /// The actor kind that was actually found.
        kind: String,
    },

    /// The dotted type identifier did not end in a parseable integer.
    #[error("cannot parse a speed limit from type id '{type_id}'")]
    Parse {
        /// The full type identifier that was being parsed.
        type_id: String,
        #[source]
        source: std::num::ParseIntError,
    },

    /// A log or draw projection needed a bounding box that was never set.
    #[error("'{label}' record has no bounding box")]
    MissingGeometry {
        /// Label of the record missing its geometry.
        label: String,
    },
}

/// One serialized log entry: display text plus the pixel-space corner pair
/// of the detection's bounding box (`[x, y]`, min then max).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogRecord {
    pub text: String,
    pub min_corner: [i32; 2],
    pub max_corner: [i32; 2],
}

/// A timestamped batch of detection log entries, emitted once per pipeline
/// tick and consumed by whatever log-writing component sits downstream.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetectionBatch {
    pub timestamp: DateTime<Utc>,
    pub records: Vec<LogRecord>,
}

impl DetectionBatch {
    /// Create a batch stamped with the current wall-clock time.
    pub fn new(records: Vec<LogRecord>) -> Self {
        Self {
            timestamp: Utc::now(),
            records,
        }
    }
}
