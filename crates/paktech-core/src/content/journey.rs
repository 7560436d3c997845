//! Client journey roadmap steps.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JourneyStep {
    pub number: u8,
    pub title: &'static str,
    pub description: &'static str,
    pub duration: &'static str,
}

static STEPS: &[JourneyStep] = &[
    JourneyStep {
        number: 1,
        title: "Discovery Call",
        description: "We learn about your business, goals and audience, and agree what success looks like.",
        duration: "Day 1",
    },
    JourneyStep {
        number: 2,
        title: "Proposal & Plan",
        description: "A fixed scope, timeline and quote, with milestones you can hold us to.",
        duration: "Days 2-5",
    },
    JourneyStep {
        number: 3,
        title: "Design",
        description: "Wireframes and high-fidelity designs, refined with your feedback.",
        duration: "Weeks 1-3",
    },
    JourneyStep {
        number: 4,
        title: "Build & Test",
        description: "Development in short iterations with a staging link you can review at any time.",
        duration: "Weeks 3-7",
    },
    JourneyStep {
        number: 5,
        title: "Launch",
        description: "Go-live, analytics setup and a handover session for your team.",
        duration: "Week 8",
    },
    JourneyStep {
        number: 6,
        title: "Grow",
        description: "Ongoing support, performance reviews and marketing to keep the results coming.",
        duration: "Ongoing",
    },
];

pub fn journey_steps() -> &'static [JourneyStep] {
    STEPS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn steps_are_numbered_in_order() {
        for (i, step) in journey_steps().iter().enumerate() {
            assert_eq!(usize::from(step.number), i + 1);
        }
    }
}
