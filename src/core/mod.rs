// Vizboard - core/mod.rs
//
// Core business logic layer: data model, generators, filtering, export.
// Must NOT depend on: ui, app, or egui types.

pub mod export;
pub mod filter;
pub mod generate;
pub mod heat;
pub mod model;
