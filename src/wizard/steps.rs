//! Step topology — the branching rule of the wizard.
//!
//! Steps keep a fixed numbering per track; they are never renumbered.
//! Step 0 (user-type selection) is shown only while `user_type` is
//! unset, the instant it is set step 1 becomes the active step.
//!
//! | user type | 0 | 1 | 2 | 3 | 4 |
//! |-----------|---|---|---|---|---|
//! | unset     | selection (terminal until chosen) | — | — | — | — |
//! | tourist   | (skipped) | Trip basics | Interests | Budget & dining | Transport & final details |
//! | local     | (skipped) | Exploration basics | Interests | Discovery preferences | — |

use serde::Serialize;

use super::model::UserType;

/// One entry of the step-header list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StepDescriptor {
    pub index: usize,
    pub title: &'static str,
}

const SELECTION_STEP: StepDescriptor = StepDescriptor {
    index: 0,
    title: "Who's exploring?",
};

const SELECTION_STEPS: [StepDescriptor; 1] = [SELECTION_STEP];

const TOURIST_STEPS: [StepDescriptor; 4] = [
    StepDescriptor {
        index: 1,
        title: "Trip basics",
    },
    StepDescriptor {
        index: 2,
        title: "Interests",
    },
    StepDescriptor {
        index: 3,
        title: "Budget & dining",
    },
    StepDescriptor {
        index: 4,
        title: "Transport & final details",
    },
];

const LOCAL_STEPS: [StepDescriptor; 3] = [
    StepDescriptor {
        index: 1,
        title: "Exploration basics",
    },
    StepDescriptor {
        index: 2,
        title: "Interests",
    },
    StepDescriptor {
        index: 3,
        title: "Discovery preferences",
    },
];

/// Total step count. Pure function of the user type — recomputed on
/// every read, never stored.
pub fn total_steps(user_type: UserType) -> usize {
    match user_type {
        UserType::Unset => 1,
        UserType::Tourist => 5,
        UserType::Local => 4,
    }
}

/// The step headers visible for a track (step 0 only while unset).
pub fn visible_steps(user_type: UserType) -> &'static [StepDescriptor] {
    match user_type {
        UserType::Unset => &SELECTION_STEPS,
        UserType::Tourist => &TOURIST_STEPS,
        UserType::Local => &LOCAL_STEPS,
    }
}

/// Look up one step by its fixed index, if the track has it.
pub fn step(user_type: UserType, index: usize) -> Option<StepDescriptor> {
    visible_steps(user_type)
        .iter()
        .copied()
        .find(|s| s.index == index)
}

/// Clamp a requested step index into `[0, total_steps)`.
pub fn clamp_step(user_type: UserType, requested: usize) -> usize {
    requested.min(total_steps(user_type) - 1)
}

/// Progress through the wizard, as a rounded percentage.
///
/// Overview mode reads as done; while the user type is unset a fixed
/// 20% is shown.
pub fn progress_percent(user_type: UserType, current_step: usize, overview_mode: bool) -> u8 {
    if overview_mode {
        return 100;
    }
    if user_type == UserType::Unset {
        return 20;
    }
    let total = total_steps(user_type);
    (((current_step + 1) as f64 / total as f64) * 100.0).round() as u8
}

/// Step-header completion marker: purely positional, not a
/// field-completeness check.
pub fn is_completed(current_step: usize, index: usize) -> bool {
    current_step > index
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_steps_per_track() {
        assert_eq!(total_steps(UserType::Unset), 1);
        assert_eq!(total_steps(UserType::Tourist), 5);
        assert_eq!(total_steps(UserType::Local), 4);
    }

    #[test]
    fn fixed_numbering_is_preserved() {
        let tourist = visible_steps(UserType::Tourist);
        assert_eq!(tourist.len(), 4);
        assert_eq!(tourist[0].index, 1);
        assert_eq!(tourist[3].index, 4);
        assert_eq!(tourist[3].title, "Transport & final details");

        let local = visible_steps(UserType::Local);
        assert_eq!(local.len(), 3);
        assert_eq!(local[2].index, 3);
        assert_eq!(local[2].title, "Discovery preferences");
    }

    #[test]
    fn selection_step_only_while_unset() {
        assert_eq!(step(UserType::Unset, 0), Some(SELECTION_STEP));
        assert_eq!(step(UserType::Tourist, 0), None);
        assert_eq!(step(UserType::Local, 0), None);
        assert_eq!(step(UserType::Local, 4), None);
        assert!(step(UserType::Tourist, 4).is_some());
    }

    #[test]
    fn clamp_step_never_exceeds_range() {
        assert_eq!(clamp_step(UserType::Local, 99), 3);
        assert_eq!(clamp_step(UserType::Tourist, 99), 4);
        assert_eq!(clamp_step(UserType::Unset, 7), 0);
        assert_eq!(clamp_step(UserType::Local, 2), 2);
    }

    #[test]
    fn progress_rounds_per_track() {
        assert_eq!(progress_percent(UserType::Unset, 0, false), 20);
        assert_eq!(progress_percent(UserType::Tourist, 0, false), 20);
        assert_eq!(progress_percent(UserType::Tourist, 4, false), 100);
        // (1+1)/4 = 50, (3+1)/4 = 100
        assert_eq!(progress_percent(UserType::Local, 1, false), 50);
        assert_eq!(progress_percent(UserType::Local, 3, false), 100);
        // (2+1)/5 = 60
        assert_eq!(progress_percent(UserType::Tourist, 2, false), 60);
    }

    #[test]
    fn overview_reads_as_done() {
        assert_eq!(progress_percent(UserType::Tourist, 1, true), 100);
        assert_eq!(progress_percent(UserType::Unset, 0, true), 100);
    }

    #[test]
    fn completion_marker_is_positional() {
        assert!(is_completed(3, 1));
        assert!(is_completed(3, 2));
        assert!(!is_completed(3, 3));
        assert!(!is_completed(1, 2));
    }
}
