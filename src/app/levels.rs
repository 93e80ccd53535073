use serde::{Deserialize, Serialize};

/// The five explanation depths the user can pick on the slider.
///
/// Each level carries a fixed instruction sentence that is prefixed onto the
/// system message of every completion request. The set is closed: the slider
/// maps positions 0-4 onto these variants and nothing else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ExplanationLevel {
    Child,
    Simple,
    #[default]
    Detailed,
    Academic,
    Expert,
}

impl ExplanationLevel {
    /// All levels in slider order.
    pub const ALL: [ExplanationLevel; 5] = [
        ExplanationLevel::Child,
        ExplanationLevel::Simple,
        ExplanationLevel::Detailed,
        ExplanationLevel::Academic,
        ExplanationLevel::Expert,
    ];

    /// Slider position of this level (0-4).
    pub fn ordinal(self) -> u8 {
        match self {
            ExplanationLevel::Child => 0,
            ExplanationLevel::Simple => 1,
            ExplanationLevel::Detailed => 2,
            ExplanationLevel::Academic => 3,
            ExplanationLevel::Expert => 4,
        }
    }

    /// Level for a slider position. Out-of-range values return None.
    pub fn from_ordinal(value: u8) -> Option<Self> {
        Self::ALL.get(value as usize).copied()
    }

    pub fn label(self) -> &'static str {
        match self {
            ExplanationLevel::Child => "Child",
            ExplanationLevel::Simple => "Simple",
            ExplanationLevel::Detailed => "Detailed",
            ExplanationLevel::Academic => "Academic",
            ExplanationLevel::Expert => "Expert",
        }
    }

    /// Instruction sentence appended to the system message for this level.
    pub fn instruction(self) -> &'static str {
        match self {
            ExplanationLevel::Child => {
                "Explain this to me like I'm 5 years old. Use simple words and concepts."
            }
            ExplanationLevel::Simple => {
                "Explain this in simple terms that anyone can understand."
            }
            ExplanationLevel::Detailed => "Provide a detailed explanation of this concept.",
            ExplanationLevel::Academic => {
                "Give me an academic explanation with proper terminology and context."
            }
            ExplanationLevel::Expert => {
                "Provide an expert-level explanation with advanced concepts and details."
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_level_is_detailed() {
        assert_eq!(ExplanationLevel::default(), ExplanationLevel::Detailed);
    }

    #[test]
    fn test_ordinal_roundtrip() {
        for level in ExplanationLevel::ALL {
            assert_eq!(ExplanationLevel::from_ordinal(level.ordinal()), Some(level));
        }
    }

    #[test]
    fn test_from_ordinal_out_of_range() {
        assert_eq!(ExplanationLevel::from_ordinal(5), None);
        assert_eq!(ExplanationLevel::from_ordinal(255), None);
    }

    #[test]
    fn test_labels_are_distinct() {
        let labels: Vec<&str> = ExplanationLevel::ALL.iter().map(|l| l.label()).collect();
        assert_eq!(labels, vec!["Child", "Simple", "Detailed", "Academic", "Expert"]);
    }

    #[test]
    fn test_instructions_are_distinct() {
        for a in ExplanationLevel::ALL {
            for b in ExplanationLevel::ALL {
                if a != b {
                    assert_ne!(a.instruction(), b.instruction());
                }
            }
        }
    }

    #[test]
    fn test_level_serialization() {
        let json = serde_json::to_string(&ExplanationLevel::Academic).unwrap();
        assert!(json.contains("Academic"));
        let parsed: ExplanationLevel = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, ExplanationLevel::Academic);
    }
}
