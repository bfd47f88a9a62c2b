// Vizboard - app/mod.rs
//
// Application layer: state management and view orchestration.
// Dependencies: core layer.
// Must NOT depend on: ui specifics.

pub mod state;
