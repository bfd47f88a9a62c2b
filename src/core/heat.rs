// Vizboard - core/heat.rs
//
// Intensity bucketing for the heatmap views.
// Core layer: pure logic, no I/O or UI dependencies. The mapping from
// level to fill colour lives in the ui layer.

use crate::util::constants::HEAT_THRESHOLDS;

/// The five heat levels an intensity value can fall into, coldest first.
///
/// Bucketing uses half-open ranges over the thresholds in
/// `HEAT_THRESHOLDS`: 0..20, 20..40, 40..60, 60..80, 80 and above.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum HeatLevel {
    VeryLow,
    Low,
    Medium,
    High,
    VeryHigh,
}

impl HeatLevel {
    /// Classify an intensity value into its heat level.
    pub fn from_value(value: u8) -> Self {
        if value < HEAT_THRESHOLDS[0] {
            HeatLevel::VeryLow
        } else if value < HEAT_THRESHOLDS[1] {
            HeatLevel::Low
        } else if value < HEAT_THRESHOLDS[2] {
            HeatLevel::Medium
        } else if value < HEAT_THRESHOLDS[3] {
            HeatLevel::High
        } else {
            HeatLevel::VeryHigh
        }
    }

    /// Returns all variants in legend order (coldest first).
    pub fn all() -> &'static [HeatLevel] {
        &[
            HeatLevel::VeryLow,
            HeatLevel::Low,
            HeatLevel::Medium,
            HeatLevel::High,
            HeatLevel::VeryHigh,
        ]
    }

    /// The lowest intensity value that maps to this level.
    /// Used to label the legend swatches.
    pub fn floor_value(&self) -> u8 {
        match self {
            HeatLevel::VeryLow => 0,
            HeatLevel::Low => HEAT_THRESHOLDS[0],
            HeatLevel::Medium => HEAT_THRESHOLDS[1],
            HeatLevel::High => HEAT_THRESHOLDS[2],
            HeatLevel::VeryHigh => HEAT_THRESHOLDS[3],
        }
    }

    /// Human-readable label for display.
    pub fn label(&self) -> &'static str {
        match self {
            HeatLevel::VeryLow => "Very low",
            HeatLevel::Low => "Low",
            HeatLevel::Medium => "Medium",
            HeatLevel::High => "High",
            HeatLevel::VeryHigh => "Very high",
        }
    }
}

impl std::fmt::Display for HeatLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bucket_boundaries() {
        assert_eq!(HeatLevel::from_value(0), HeatLevel::VeryLow);
        assert_eq!(HeatLevel::from_value(19), HeatLevel::VeryLow);
        assert_eq!(HeatLevel::from_value(20), HeatLevel::Low);
        assert_eq!(HeatLevel::from_value(39), HeatLevel::Low);
        assert_eq!(HeatLevel::from_value(40), HeatLevel::Medium);
        assert_eq!(HeatLevel::from_value(59), HeatLevel::Medium);
        assert_eq!(HeatLevel::from_value(60), HeatLevel::High);
        assert_eq!(HeatLevel::from_value(79), HeatLevel::High);
        assert_eq!(HeatLevel::from_value(80), HeatLevel::VeryHigh);
        assert_eq!(HeatLevel::from_value(99), HeatLevel::VeryHigh);
    }

    #[test]
    fn test_levels_cover_full_intensity_range() {
        // Every generatable value maps to exactly one level, and the
        // mapping is monotonic in the value.
        let mut previous = HeatLevel::from_value(0);
        for value in 0..crate::util::constants::HEAT_MAX_INTENSITY {
            let level = HeatLevel::from_value(value);
            assert!(level >= previous);
            previous = level;
        }
    }

    #[test]
    fn test_floor_values_match_legend_order() {
        let floors: Vec<u8> = HeatLevel::all().iter().map(|l| l.floor_value()).collect();
        assert_eq!(floors, vec![0, 20, 40, 60, 80]);
        // Each floor value classifies back into its own level.
        for level in HeatLevel::all() {
            assert_eq!(HeatLevel::from_value(level.floor_value()), *level);
        }
    }
}
