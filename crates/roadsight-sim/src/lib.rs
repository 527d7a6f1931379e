//! `roadsight-sim` – in-process driving-simulator ground truth.
//!
//! Provides the actor model the perception crates consume when they build
//! records from simulator state instead of sensor inference.  Nothing here
//! talks to a live simulator process; the [`SimWorld`][world::SimWorld]
//! registry is populated by tests, configs, or a bridge layer, and queried
//! once per tick.
//!
//! # Modules
//!
//! - [`actor`] – [`SimActor`][actor::SimActor]: snapshot of one simulator
//!   actor (tagged kind, dotted type id, native transform).
//! - [`world`] – [`SimWorld`][world::SimWorld]: id-keyed actor registry with
//!   spawn and by-kind queries.

pub mod actor;
pub mod world;

pub use actor::{ActorKind, SimActor, SimTransform};
pub use world::SimWorld;
