use crate::render::Color;

/// Sequential colormap sampled by linear interpolation between evenly spaced
/// RGB stops.
#[derive(Debug, Clone, Copy)]
pub struct SequentialColormap {
    pub name: &'static str,
    stops: &'static [(f64, f64, f64)],
}

/// Yellow→orange→red scale matching the matplotlib `YlOrRd` anchors.
pub const YL_OR_RD: SequentialColormap = SequentialColormap {
    name: "YlOrRd",
    stops: &[
        (1.000, 1.000, 0.800),
        (1.000, 0.929, 0.627),
        (0.996, 0.851, 0.463),
        (0.996, 0.698, 0.298),
        (0.992, 0.553, 0.235),
        (0.988, 0.306, 0.165),
        (0.890, 0.102, 0.110),
        (0.741, 0.000, 0.149),
        (0.502, 0.000, 0.149),
    ],
};

impl SequentialColormap {
    /// Samples the scale at `t`, clamped into `[0, 1]`.
    #[must_use]
    pub fn sample(&self, t: f64) -> Color {
        let t = if t.is_finite() { t.clamp(0.0, 1.0) } else { 0.0 };
        let segments = (self.stops.len() - 1) as f64;
        let position = t * segments;
        let index = (position.floor() as usize).min(self.stops.len() - 2);
        let fraction = position - index as f64;

        let (r0, g0, b0) = self.stops[index];
        let (r1, g1, b1) = self.stops[index + 1];
        Color::rgb(
            r0 + (r1 - r0) * fraction,
            g0 + (g1 - g0) * fraction,
            b0 + (b1 - b0) * fraction,
        )
    }
}

/// Normalizes counts onto `[0, 1]` over their natural logs.
///
/// The observed log min maps to 0 and the log max to 1. When every count is
/// equal the normalization span is zero; instead of dividing by zero, every
/// value maps to the mid-scale 0.5.
#[must_use]
pub fn log_normalize_counts(counts: &[u64]) -> Vec<f64> {
    if counts.is_empty() {
        return Vec::new();
    }

    let logs: Vec<f64> = counts.iter().map(|c| ((*c).max(1) as f64).ln()).collect();
    let min = logs.iter().copied().fold(f64::INFINITY, f64::min);
    let max = logs.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let span = max - min;

    if span <= f64::EPSILON {
        return vec![0.5; logs.len()];
    }
    logs.into_iter().map(|v| (v - min) / span).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn sample_endpoints_hit_the_anchor_colors() {
        let low = YL_OR_RD.sample(0.0);
        assert_relative_eq!(low.red, 1.0);
        assert_relative_eq!(low.green, 1.0);
        assert_relative_eq!(low.blue, 0.8);

        let high = YL_OR_RD.sample(1.0);
        assert_relative_eq!(high.red, 0.502);
        assert_relative_eq!(high.blue, 0.149);
    }

    #[test]
    fn sample_clamps_out_of_range_input() {
        assert_eq!(YL_OR_RD.sample(-2.0), YL_OR_RD.sample(0.0));
        assert_eq!(YL_OR_RD.sample(7.5), YL_OR_RD.sample(1.0));
    }

    #[test]
    fn sample_moves_toward_red_monotonically() {
        let a = YL_OR_RD.sample(0.1);
        let b = YL_OR_RD.sample(0.9);
        assert!(b.red < a.red || b.green < a.green);
    }

    #[test]
    fn log_normalize_maps_extremes_to_unit_interval() {
        let normalized = log_normalize_counts(&[1, 3, 9]);
        assert_relative_eq!(normalized[0], 0.0);
        assert_relative_eq!(normalized[1], 0.5, epsilon = 1e-12);
        assert_relative_eq!(normalized[2], 1.0);
    }

    #[test]
    fn log_normalize_equal_counts_map_to_mid_scale() {
        assert_eq!(log_normalize_counts(&[4, 4, 4]), vec![0.5, 0.5, 0.5]);
        assert_eq!(log_normalize_counts(&[1]), vec![0.5]);
    }

    #[test]
    fn log_normalize_empty_is_empty() {
        assert!(log_normalize_counts(&[]).is_empty());
    }
}
