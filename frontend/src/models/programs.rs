pub const MISSING_DESCRIPTION: &str = "Details for this program are not available yet.";

pub const PROGRAMS: &[(&str, &str)] = &[
    (
        "Flex Muscle",
        "Build strength and muscle definition with progressive resistance circuits. \
         Three coached sessions a week focusing on compound lifts, mobility and recovery.",
    ),
    (
        "Cardio Exercise",
        "Raise your endurance with interval runs, rowing and cycling blocks. \
         Sessions adapt to your heart-rate zones so every workout stays challenging.",
    ),
    (
        "Basic Yoga",
        "A gentle introduction to yoga postures, breathing and balance. \
         Ideal for beginners who want flexibility, posture and calm in one class.",
    ),
    (
        "Weight Lifting",
        "Technique-first barbell training covering squat, bench, deadlift and overhead press. \
         Includes a personalised progression plan reviewed by your trainer.",
    ),
];

pub fn describe(name: &str) -> Option<&'static str> {
    PROGRAMS
        .iter()
        .find(|(program, _)| *program == name)
        .map(|(_, description)| *description)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgramDetail {
    pub title: String,
    pub body: String,
    pub known: bool,
}

impl ProgramDetail {
    pub fn lookup(name: &str) -> Self {
        match describe(name) {
            Some(body) => Self {
                title: name.to_string(),
                body: body.to_string(),
                known: true,
            },
            None => Self {
                title: name.to_string(),
                body: MISSING_DESCRIPTION.to_string(),
                known: false,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_known_program() {
        let detail = ProgramDetail::lookup("Basic Yoga");
        assert!(detail.known);
        assert_eq!(detail.title, "Basic Yoga");
        assert_eq!(detail.body, describe("Basic Yoga").unwrap());
        assert!(detail.body.starts_with("A gentle introduction to yoga"));
    }

    #[test]
    fn test_lookup_unknown_program() {
        let detail = ProgramDetail::lookup("Underwater Chess");
        assert!(!detail.known);
        assert_eq!(detail.title, "Underwater Chess");
        assert_eq!(detail.body, MISSING_DESCRIPTION);
    }

    #[test]
    fn test_program_names_are_unique() {
        for (i, (name, _)) in PROGRAMS.iter().enumerate() {
            assert!(PROGRAMS[i + 1..].iter().all(|(other, _)| other != name));
        }
    }
}
