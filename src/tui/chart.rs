//! Quintile bar chart: derives proportional bar specs from observations.

use crate::content::QuintileObservation;

/// Height of the tallest bar, in the design units of the study layout.
pub const MAX_BAR_HEIGHT: f64 = 150.0;

/// One renderable bar derived from a [`QuintileObservation`].
#[derive(Debug, Clone, PartialEq)]
pub struct BarSpec {
    /// Category label ("Q1".."Q5").
    pub label: String,
    /// Proportional height in `0.0..=MAX_BAR_HEIGHT`.
    pub height: f64,
    /// Compact value shown on the bar, one decimal place.
    pub value_label: String,
    /// Three-decimal value plus description, shown as supplementary detail.
    pub detail: String,
}

/// Builds bar specs for the observations. The tallest bar resolves to
/// [`MAX_BAR_HEIGHT`]; all-zero values degrade to zero heights and an empty
/// input produces an empty output, neither is an error.
pub fn build_bars(observations: &[QuintileObservation]) -> Vec<BarSpec> {
    let max = observations
        .iter()
        .map(|o| o.avg_return_bps)
        .fold(0.0_f64, f64::max);

    observations
        .iter()
        .map(|obs| {
            let height = if max > 0.0 {
                obs.avg_return_bps / max * MAX_BAR_HEIGHT
            } else {
                0.0
            };
            BarSpec {
                label: obs.quintile.to_string(),
                height,
                value_label: format!("{:.1} bps", obs.avg_return_bps),
                detail: format!(
                    "{}: {:.3} bps return",
                    obs.description, obs.avg_return_bps
                ),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn obs(quintile: &'static str, value: f64) -> QuintileObservation {
        QuintileObservation {
            quintile,
            avg_return_bps: value,
            description: "desc",
            interpretation: "interp",
        }
    }

    #[test]
    fn tallest_bar_reaches_max_height() {
        let bars = build_bars(&[
            obs("Q1", 1.683),
            obs("Q2", 2.5),
            obs("Q3", 3.0),
            obs("Q4", 3.8),
            obs("Q5", 4.748),
        ]);
        assert_eq!(bars.len(), 5);
        assert!((bars[4].height - MAX_BAR_HEIGHT).abs() < 1e-9);
        // Q1 scales to 1.683 / 4.748 * 150 ≈ 53.17.
        assert!((bars[0].height - 53.17).abs() < 0.01);
    }

    #[test]
    fn labels_carry_one_decimal_and_detail_three() {
        let bars = build_bars(&[obs("Q1", 1.683)]);
        assert_eq!(bars[0].value_label, "1.7 bps");
        assert_eq!(bars[0].detail, "desc: 1.683 bps return");
    }

    #[test]
    fn all_zero_values_degrade_to_zero_heights() {
        let bars = build_bars(&[obs("Q1", 0.0), obs("Q2", 0.0)]);
        assert!(bars.iter().all(|b| b.height == 0.0));
    }

    #[test]
    fn empty_input_renders_nothing() {
        assert!(build_bars(&[]).is_empty());
    }

    #[test]
    fn heights_preserve_observation_proportions() {
        let bars = build_bars(&[obs("Q1", 1.0), obs("Q2", 2.0), obs("Q3", 4.0)]);
        assert!((bars[0].height * 2.0 - bars[1].height).abs() < 1e-9);
        assert!((bars[1].height * 2.0 - bars[2].height).abs() < 1e-9);
        assert!((bars[2].height - MAX_BAR_HEIGHT).abs() < 1e-9);
    }
}
