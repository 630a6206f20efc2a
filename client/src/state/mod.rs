//! Client-side state models.
//!
//! DESIGN
//! ======
//! State lives in plain structs wrapped in `RwSignal`s by the view that owns
//! them. Components receive values and callbacks, never the signals.

pub mod modal;
