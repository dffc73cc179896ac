//! Shared client-side state.
//!
//! DESIGN
//! ======
//! State transitions are pure methods on plain structs so they can be unit
//! tested natively; components hold them in `RwSignal`s provided via
//! context and the side effects live in `app.rs`.

pub mod auth;
