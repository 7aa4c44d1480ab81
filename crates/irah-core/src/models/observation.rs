use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// The clinical sub-scales that feed the IRAH composite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Scale {
    /// Fugulin nursing-workload classification.
    Fugulin,
    /// Subjective global assessment of nutritional status.
    Asg,
    /// Medical Research Council muscle-strength sum score.
    Mrc,
    /// Discharge-risk triage ("Triagem de Alta").
    Triagem,
    /// Charlson comorbidity index.
    Charlson,
}

impl Scale {
    /// Every sub-scale, in record column order.
    pub const ALL: [Scale; 5] = [
        Scale::Fugulin,
        Scale::Asg,
        Scale::Mrc,
        Scale::Triagem,
        Scale::Charlson,
    ];

    /// The sub-scales measured as integer points.
    pub const NUMERIC: [Scale; 4] = [Scale::Fugulin, Scale::Mrc, Scale::Triagem, Scale::Charlson];

    pub fn id(&self) -> &'static str {
        match self {
            Scale::Fugulin => "fugulin",
            Scale::Asg => "asg",
            Scale::Mrc => "mrc",
            Scale::Triagem => "triagem",
            Scale::Charlson => "charlson",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Scale::Fugulin => "Fugulin",
            Scale::Asg => "ASG",
            Scale::Mrc => "MRC",
            Scale::Triagem => "Triagem de Alta",
            Scale::Charlson => "Charlson Index",
        }
    }

    /// Valid raw domain for integer sub-scales. `None` for ASG, which is categorical.
    pub fn domain(&self) -> Option<ScoreRange> {
        match self {
            Scale::Fugulin => Some(ScoreRange { min: 0, max: 100 }),
            Scale::Asg => None,
            Scale::Mrc => Some(ScoreRange { min: 0, max: 60 }),
            Scale::Triagem => Some(ScoreRange { min: 0, max: 20 }),
            Scale::Charlson => Some(ScoreRange { min: 0, max: 50 }),
        }
    }
}

impl fmt::Display for Scale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Inclusive integer range of a raw measurement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreRange {
    pub min: i32,
    pub max: i32,
}

impl ScoreRange {
    pub fn contains(&self, value: i32) -> bool {
        (self.min..=self.max).contains(&value)
    }
}

/// ASG nutritional category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AsgCategory {
    /// No assessment recorded. Scores the same as well-nourished.
    #[default]
    Unspecified,
    /// ASG A.
    WellNourished,
    /// ASG B.
    ModeratelyMalnourished,
    /// ASG C.
    SeverelyMalnourished,
}

impl AsgCategory {
    pub const ALL: [AsgCategory; 4] = [
        AsgCategory::Unspecified,
        AsgCategory::WellNourished,
        AsgCategory::ModeratelyMalnourished,
        AsgCategory::SeverelyMalnourished,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            AsgCategory::Unspecified => "unspecified",
            AsgCategory::WellNourished => "well_nourished",
            AsgCategory::ModeratelyMalnourished => "moderately_malnourished",
            AsgCategory::SeverelyMalnourished => "severely_malnourished",
        }
    }

    /// The label shown by the evaluation form.
    pub fn form_label(&self) -> &'static str {
        match self {
            AsgCategory::Unspecified => "",
            AsgCategory::WellNourished => "Bem nutrido (ASG A)",
            AsgCategory::ModeratelyMalnourished => "Moderadamente desnutrido (ASG B)",
            AsgCategory::SeverelyMalnourished => "Gravemente desnutrido (ASG C)",
        }
    }

    /// Parse a category from an identifier, an ASG letter, or a form label.
    ///
    /// An empty label means "unspecified". Anything else that is not
    /// recognised is an error; there is no silent fallback.
    pub fn from_label(label: &str) -> Result<Self, CoreError> {
        let normalized = label.trim().to_lowercase();
        let category = match normalized.as_str() {
            "" | "unspecified" => AsgCategory::Unspecified,
            "a" | "asg a" | "well_nourished" | "well-nourished" | "bem nutrido (asg a)" => {
                AsgCategory::WellNourished
            }
            "b"
            | "asg b"
            | "moderately_malnourished"
            | "moderately-malnourished"
            | "moderadamente desnutrido (asg b)" => AsgCategory::ModeratelyMalnourished,
            "c"
            | "asg c"
            | "severely_malnourished"
            | "severely-malnourished"
            | "gravemente desnutrido (asg c)" => AsgCategory::SeverelyMalnourished,
            _ => return Err(CoreError::UnknownAsgCategory(label.to_string())),
        };
        Ok(category)
    }
}

impl FromStr for AsgCategory {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_label(s)
    }
}

impl fmt::Display for AsgCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Raw input to one evaluation, as captured by the evaluation form.
///
/// Values are kept signed and unvalidated here; domain checks happen in the
/// normalizer so an out-of-range entry is reported rather than unrepresentable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ClinicalObservation {
    pub fugulin: i32,
    pub asg: AsgCategory,
    pub mrc: i32,
    pub triagem: i32,
    pub charlson: i32,
}

impl ClinicalObservation {
    /// Raw points for an integer sub-scale. `None` for ASG.
    pub fn raw(&self, scale: Scale) -> Option<i32> {
        match scale {
            Scale::Fugulin => Some(self.fugulin),
            Scale::Asg => None,
            Scale::Mrc => Some(self.mrc),
            Scale::Triagem => Some(self.triagem),
            Scale::Charlson => Some(self.charlson),
        }
    }
}
