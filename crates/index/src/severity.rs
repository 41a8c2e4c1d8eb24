//! Drought severity classification of standardized index values.
//!
//! Classes and colors follow the conventional SPEI legend. More negative
//! values are drier; values are in standard-deviation units relative to
//! the cross-bin statistic.

use std::fmt;

/// Default rendering range for index maps (min, max).
pub const DEFAULT_RENDER_RANGE: (f64, f64) = (-2.0, 1.5);

/// Drought severity classes, driest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SeverityClass {
    /// Index ≤ −2.0.
    ExtremeDrought,
    /// Index in (−2.0, −1.5].
    SevereDrought,
    /// Index in (−1.5, −1.0].
    ModerateDrought,
    /// Index in (−1.0, 1.0).
    NearNormal,
    /// Index in [1.0, 1.5).
    ModeratelyWet,
    /// Index ≥ 1.5.
    VeryWet,
}

impl SeverityClass {
    /// All classes, driest first.
    pub const ALL: [SeverityClass; 6] = [
        SeverityClass::ExtremeDrought,
        SeverityClass::SevereDrought,
        SeverityClass::ModerateDrought,
        SeverityClass::NearNormal,
        SeverityClass::ModeratelyWet,
        SeverityClass::VeryWet,
    ];

    /// Classifies an index value. Returns `None` for no-data values.
    pub fn classify(value: f64) -> Option<SeverityClass> {
        if !value.is_finite() {
            return None;
        }
        Some(if value <= -2.0 {
            SeverityClass::ExtremeDrought
        } else if value <= -1.5 {
            SeverityClass::SevereDrought
        } else if value <= -1.0 {
            SeverityClass::ModerateDrought
        } else if value < 1.0 {
            SeverityClass::NearNormal
        } else if value < 1.5 {
            SeverityClass::ModeratelyWet
        } else {
            SeverityClass::VeryWet
        })
    }

    /// Human-readable label including the index range.
    pub fn label(&self) -> &'static str {
        match self {
            SeverityClass::ExtremeDrought => "Extreme Drought (<= -2.0)",
            SeverityClass::SevereDrought => "Severe Drought (-2.0 to -1.5)",
            SeverityClass::ModerateDrought => "Moderate Drought (-1.5 to -1.0)",
            SeverityClass::NearNormal => "Near Normal (-1.0 to 1.0)",
            SeverityClass::ModeratelyWet => "Moderately Wet (1.0 to 1.5)",
            SeverityClass::VeryWet => "Very Wet (>= 1.5)",
        }
    }

    /// Short machine-friendly name, used as a histogram key.
    pub fn name(&self) -> &'static str {
        match self {
            SeverityClass::ExtremeDrought => "extreme_drought",
            SeverityClass::SevereDrought => "severe_drought",
            SeverityClass::ModerateDrought => "moderate_drought",
            SeverityClass::NearNormal => "near_normal",
            SeverityClass::ModeratelyWet => "moderately_wet",
            SeverityClass::VeryWet => "very_wet",
        }
    }

    /// Palette color for map rendering.
    pub fn color(&self) -> &'static str {
        match self {
            SeverityClass::ExtremeDrought => "#d73027",
            SeverityClass::SevereDrought => "#fc8d59",
            SeverityClass::ModerateDrought => "#fee08b",
            SeverityClass::NearNormal => "#d9ef8b",
            SeverityClass::ModeratelyWet => "#91cf60",
            SeverityClass::VeryWet => "#1a9850",
        }
    }
}

impl fmt::Display for SeverityClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_boundaries() {
        assert_eq!(
            SeverityClass::classify(-2.5),
            Some(SeverityClass::ExtremeDrought)
        );
        assert_eq!(
            SeverityClass::classify(-2.0),
            Some(SeverityClass::ExtremeDrought)
        );
        assert_eq!(
            SeverityClass::classify(-1.7),
            Some(SeverityClass::SevereDrought)
        );
        assert_eq!(
            SeverityClass::classify(-1.2),
            Some(SeverityClass::ModerateDrought)
        );
        assert_eq!(SeverityClass::classify(0.0), Some(SeverityClass::NearNormal));
        assert_eq!(
            SeverityClass::classify(1.0),
            Some(SeverityClass::ModeratelyWet)
        );
        assert_eq!(SeverityClass::classify(1.5), Some(SeverityClass::VeryWet));
        assert_eq!(SeverityClass::classify(3.0), Some(SeverityClass::VeryWet));
    }

    #[test]
    fn no_data_is_unclassified() {
        assert_eq!(SeverityClass::classify(f64::NAN), None);
        assert_eq!(SeverityClass::classify(f64::INFINITY), None);
    }

    #[test]
    fn palette_is_six_distinct_colors() {
        let colors: Vec<&str> = SeverityClass::ALL.iter().map(|c| c.color()).collect();
        assert_eq!(colors.len(), 6);
        for (i, a) in colors.iter().enumerate() {
            for b in &colors[i + 1..] {
                assert_ne!(a, b);
            }
        }
        assert_eq!(colors[0], "#d73027");
        assert_eq!(colors[5], "#1a9850");
    }

    #[test]
    fn render_range_matches_legend() {
        assert_eq!(DEFAULT_RENDER_RANGE, (-2.0, 1.5));
    }
}
