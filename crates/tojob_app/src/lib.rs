//! ToJob app runtime: controller wiring over the core state machine and the
//! engine's IO boundaries.
pub mod controller;
pub mod logging;
pub mod splash;
