// Vizboard - ui/panels/mod.rs

pub mod chart;
pub mod grid;
pub mod heatmap;
pub mod menu;
pub mod table;
