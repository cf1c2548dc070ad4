/// Visual treatment of a task priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriorityIndicator {
    pub label: &'static str,
    pub color: &'static str,
}

const NEUTRAL: PriorityIndicator = PriorityIndicator { label: "N/A", color: "neutral" };

pub const LEVELS: [(i32, PriorityIndicator); 5] = [
    (1, PriorityIndicator { label: "Baixa", color: "green" }),
    (2, PriorityIndicator { label: "Média", color: "yellow" }),
    (3, PriorityIndicator { label: "Alta", color: "orange" }),
    (4, PriorityIndicator { label: "Crítica", color: "red" }),
    (5, PriorityIndicator { label: "Urgente", color: "purple" }),
];

impl PriorityIndicator {
    /// Total over `i32`; anything outside `1..=5` renders neutral.
    pub fn for_priority(priority: i32) -> Self {
        LEVELS
            .iter()
            .find(|(level, _)| *level == priority)
            .map(|(_, indicator)| *indicator)
            .unwrap_or(NEUTRAL)
    }

    /// Same as [`Self::for_priority`] for tasks whose priority may be absent.
    pub fn for_task(priority: Option<i32>) -> Self {
        priority.map_or(NEUTRAL, Self::for_priority)
    }

    pub fn css_class(&self) -> String {
        format!("priority priority-{}", self.color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(1, "Baixa", "green")]
    #[case(2, "Média", "yellow")]
    #[case(3, "Alta", "orange")]
    #[case(4, "Crítica", "red")]
    #[case(5, "Urgente", "purple")]
    fn maps_known_levels(#[case] priority: i32, #[case] label: &str, #[case] color: &str) {
        let indicator = PriorityIndicator::for_priority(priority);
        assert_eq!(indicator.label, label);
        assert_eq!(indicator.color, color);
    }

    #[rstest]
    #[case(0)]
    #[case(6)]
    #[case(-1)]
    #[case(i32::MAX)]
    #[case(i32::MIN)]
    fn out_of_range_is_neutral(#[case] priority: i32) {
        assert_eq!(PriorityIndicator::for_priority(priority), NEUTRAL);
    }

    #[rstest]
    #[case(None, "N/A")]
    #[case(Some(0), "N/A")]
    #[case(Some(3), "Alta")]
    fn absent_priority_is_neutral(#[case] priority: Option<i32>, #[case] label: &str) {
        assert_eq!(PriorityIndicator::for_task(priority).label, label);
    }

    #[test]
    fn every_level_has_non_empty_label_and_color() {
        for p in 1..=5 {
            let indicator = PriorityIndicator::for_priority(p);
            assert!(!indicator.label.is_empty() && !indicator.color.is_empty());
            assert_ne!(indicator, NEUTRAL);
        }
        assert_eq!(PriorityIndicator::for_priority(4).css_class(), "priority priority-red");
    }
}
