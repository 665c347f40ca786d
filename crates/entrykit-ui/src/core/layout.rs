//! Container-width layout classification.

/// Container widths below this render the stacked single-column layout.
pub const MOBILE_MAX_WIDTH: f64 = 600.0;

/// Which branch of the login layout to render.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LayoutMode {
    /// Brand bar, heading, form and footer stacked vertically.
    #[default]
    SingleColumn,
    /// Decorative brand panel beside the form.
    TwoPanel,
}

impl LayoutMode {
    /// Classify a measured container width. No hysteresis.
    #[must_use]
    pub fn for_width(width: f64) -> Self {
        if width < MOBILE_MAX_WIDTH {
            Self::SingleColumn
        } else {
            Self::TwoPanel
        }
    }

    /// Whether this is the mobile branch.
    #[must_use]
    pub const fn is_mobile(self) -> bool {
        matches!(self, Self::SingleColumn)
    }

    /// Value for the `data-layout` attribute.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::SingleColumn => "single-column",
            Self::TwoPanel => "two-panel",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn narrow_containers_stack() {
        assert_eq!(LayoutMode::for_width(500.0), LayoutMode::SingleColumn);
        assert_eq!(LayoutMode::for_width(0.0), LayoutMode::SingleColumn);
        assert!(LayoutMode::for_width(320.0).is_mobile());
    }

    #[test]
    fn wide_containers_split() {
        assert_eq!(LayoutMode::for_width(800.0), LayoutMode::TwoPanel);
        assert_eq!(LayoutMode::for_width(600.0), LayoutMode::TwoPanel);
    }

    #[test]
    fn threshold_flips_both_ways_without_hysteresis() {
        let widths = [599.5, 600.0, 599.9, 601.0, 400.0];
        let modes: Vec<_> = widths.iter().map(|w| LayoutMode::for_width(*w)).collect();
        assert_eq!(
            modes,
            [
                LayoutMode::SingleColumn,
                LayoutMode::TwoPanel,
                LayoutMode::SingleColumn,
                LayoutMode::TwoPanel,
                LayoutMode::SingleColumn,
            ]
        );
    }
}
