//! The fixed reveal timeline

use std::time::Duration;

use super::state::{RevealState, RevealStep, Stage};

/// Ordered reveal steps, each with its delay after the previous step
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevealTimeline {
    steps: Vec<(Duration, RevealStep)>,
}

impl RevealTimeline {
    /// The welcome reveal: logo, four decorations, headline, hold, fade
    pub fn standard() -> Self {
        Self::from_millis(&[
            (200, RevealStep::Show(Stage::Logo)),
            (400, RevealStep::Show(Stage::Microscope)),
            (200, RevealStep::Show(Stage::Laptop)),
            (200, RevealStep::Show(Stage::Gear)),
            (200, RevealStep::Show(Stage::Chart)),
            (400, RevealStep::Show(Stage::Headline)),
            (1900, RevealStep::BeginFadeOut),
            (1000, RevealStep::Finish),
        ])
    }

    /// Build a timeline from relative delays in milliseconds
    pub fn from_millis(steps: &[(u64, RevealStep)]) -> Self {
        Self {
            steps: steps
                .iter()
                .map(|(delay, step)| (Duration::from_millis(*delay), *step))
                .collect(),
        }
    }

    /// Number of steps
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Whether the timeline has no steps
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Steps paired with their offset from mount
    pub fn schedule(&self) -> impl Iterator<Item = (Duration, RevealStep)> + '_ {
        self.steps.iter().scan(Duration::ZERO, |offset, (delay, step)| {
            *offset += *delay;
            Some((*offset, *step))
        })
    }

    /// Offset of the last step from mount
    pub fn total_duration(&self) -> Duration {
        self.steps.iter().map(|(delay, _)| *delay).sum()
    }

    /// State of a running reveal `elapsed` after mount
    pub fn state_at(&self, elapsed: Duration) -> RevealState {
        let mut state = RevealState::running();
        for (offset, step) in self.schedule() {
            if offset > elapsed {
                break;
            }
            step.apply(&mut state);
        }
        state
    }
}

impl Default for RevealTimeline {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(millis: u64) -> Duration {
        Duration::from_millis(millis)
    }

    #[test]
    fn test_cumulative_offsets() {
        let offsets: Vec<u64> = RevealTimeline::standard()
            .schedule()
            .map(|(offset, _)| offset.as_millis() as u64)
            .collect();

        assert_eq!(offsets, vec![200, 600, 800, 1000, 1200, 1600, 3500, 4500]);
    }

    #[test]
    fn test_offsets_strictly_increase() {
        let timeline = RevealTimeline::standard();
        let offsets: Vec<Duration> = timeline.schedule().map(|(offset, _)| offset).collect();
        assert!(offsets.windows(2).all(|pair| pair[0] < pair[1]));
        assert_eq!(timeline.total_duration(), ms(4500));
    }

    #[test]
    fn test_step_order() {
        let steps: Vec<RevealStep> = RevealTimeline::standard()
            .schedule()
            .map(|(_, step)| step)
            .collect();

        let mut expected: Vec<RevealStep> = Stage::ALL.into_iter().map(RevealStep::Show).collect();
        expected.push(RevealStep::BeginFadeOut);
        expected.push(RevealStep::Finish);
        assert_eq!(steps, expected);
    }

    #[test]
    fn test_state_at_600ms() {
        let state = RevealTimeline::standard().state_at(ms(600));

        assert!(state.active);
        assert!(!state.fading_out);
        assert_eq!(
            state.shown_stages().collect::<Vec<_>>(),
            vec![Stage::Logo, Stage::Microscope]
        );
        assert!(!state.is_shown(Stage::Headline));
    }

    #[test]
    fn test_state_at_boundaries() {
        let timeline = RevealTimeline::standard();
        assert_eq!(timeline.state_at(ms(199)).shown_count(), 0);
        assert_eq!(timeline.state_at(ms(200)).shown_count(), 1);
        assert!(!timeline.state_at(ms(3499)).fading_out);
        assert!(timeline.state_at(ms(3500)).fading_out);
        assert!(timeline.state_at(ms(4499)).active);
        assert!(!timeline.state_at(ms(4600)).active);
    }
}
