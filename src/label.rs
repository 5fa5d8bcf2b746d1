use std::cmp::Ordering;

use crate::error::{AreaError, Result};

/// Unit thresholds and precision for area labels.
#[derive(Debug, Clone)]
pub struct LabelFormat {
    /// Areas at or above this many m² are shown in hectares.
    pub hectare_threshold: f64,
    /// Areas at or above this many m² are shown in km².
    pub km2_threshold: f64,
    pub m2_decimals: usize,
    pub hectare_decimals: usize,
    pub km2_decimals: usize,
}

impl Default for LabelFormat {
    fn default() -> Self {
        Self {
            hectare_threshold: 10_000.0,
            km2_threshold: 1_000_000.0,
            m2_decimals: 1,
            hectare_decimals: 2,
            km2_decimals: 2,
        }
    }
}

impl LabelFormat {
    pub fn format(&self, area: f64) -> Result<String> {
        if !area.is_finite() || area < 0.0 {
            return Err(AreaError::InvalidInput(format!("area: {}", area)));
        }
        // NaN thresholds compare as None and are rejected too.
        let monotonic = matches!(
            self.hectare_threshold.partial_cmp(&self.km2_threshold),
            Some(Ordering::Less | Ordering::Equal)
        );
        if !monotonic {
            return Err(AreaError::InvalidInput(format!(
                "label thresholds not monotonic: {} ha > {} km2",
                self.hectare_threshold, self.km2_threshold
            )));
        }
        // Units are picked on the rounded value so 9999.96 reads "1.00 ha".
        let m2 = round_to(area, self.m2_decimals);
        if m2 < self.hectare_threshold {
            return Ok(format!("{:.*} m²", self.m2_decimals, m2));
        }
        let ha = round_to(area / 10_000.0, self.hectare_decimals);
        if ha * 10_000.0 < self.km2_threshold {
            return Ok(format!("{:.*} ha", self.hectare_decimals, ha));
        }
        let km2 = round_to(area / 1_000_000.0, self.km2_decimals);
        Ok(format!("{:.*} km²", self.km2_decimals, km2))
    }
}

fn round_to(v: f64, decimals: usize) -> f64 {
    let scale = 10f64.powi(decimals as i32);
    (v * scale).round() / scale
}

pub fn format_area(area: f64) -> Result<String> {
    LabelFormat::default().format(area)
}
