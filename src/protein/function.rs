//! Rule-based guess at a protein's functional category
//!
//! Each [`Rule`] adds a fixed number of points to one category when its
//! [`Condition`] holds. The category with the highest total wins; a winner
//! below [`MIN_CONFIDENCE`] is reported as [`FunctionCategory::Unknown`].
//! Conditions that compare against a quantity nobody could compute simply do
//! not fire.

use std::collections::BTreeMap;
use std::fmt;

use log::debug;

use crate::protein::shape::ShapeCategory;

/// Scores below this are not trusted
pub const MIN_CONFIDENCE: u32 = 30;
/// Losing categories above this score are listed as alternatives
pub const ALTERNATIVE_THRESHOLD: u32 = 10;

const LOW_CONFIDENCE_NOTE: &str = "Not enough evidence for reliable function prediction.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FunctionCategory {
    Enzyme,
    Signaling,
    Membrane,
    Structural,
    Unknown,
}

impl FunctionCategory {
    /// Tie-break order: the first maximal category wins
    pub const ALL: [FunctionCategory; 5] = [
        FunctionCategory::Enzyme,
        FunctionCategory::Signaling,
        FunctionCategory::Membrane,
        FunctionCategory::Structural,
        FunctionCategory::Unknown,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            FunctionCategory::Enzyme => "Enzyme",
            FunctionCategory::Signaling => "Signaling",
            FunctionCategory::Membrane => "Membrane",
            FunctionCategory::Structural => "Structural",
            FunctionCategory::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for FunctionCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Annotation fields pulled out of an external protein record
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnnotationEvidence {
    /// PTM / cofactor remarks; carried along but not scored
    pub cofactors: Vec<String>,
    pub localization: Vec<String>,
    /// Interaction partner labels
    pub interactions: Vec<String>,
    pub regulation: Vec<String>,
    pub ec_numbers: Vec<String>,
}

/// Computed properties the rules look at
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ObservedTraits {
    pub charge: Option<f64>,
    pub hydrophobicity: Option<f64>,
    pub shape: Option<ShapeCategory>,
    pub diffusion: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Condition {
    ChargeAboveHydrophobicityBelow { charge: f64, hydrophobicity: f64 },
    ShapeIs(ShapeCategory),
    ShapeIsNot(ShapeCategory),
    ShapeIsChargeBelow(ShapeCategory, f64),
    HydrophobicityAbove(f64),
    DiffusionAbove(f64),
    DiffusionBelow(f64),
    HasEcNumbers,
    /// Exact match against one of the localization values
    LocalizedTo(&'static str),
    /// Substring match against any interaction partner label
    InteractsWith(&'static str),
    /// Exact match against one of the regulation values
    RegulatedBy(&'static str),
}

impl Condition {
    pub fn holds(&self, traits: &ObservedTraits, evidence: &AnnotationEvidence) -> bool {
        match *self {
            Condition::ChargeAboveHydrophobicityBelow { charge, hydrophobicity } => {
                traits.charge.is_some_and(|c| c > charge)
                    && traits.hydrophobicity.is_some_and(|h| h < hydrophobicity)
            }
            Condition::ShapeIs(shape) => traits.shape == Some(shape),
            Condition::ShapeIsNot(shape) => traits.shape.is_some_and(|s| s != shape),
            Condition::ShapeIsChargeBelow(shape, charge) => {
                traits.shape == Some(shape) && traits.charge.is_some_and(|c| c < charge)
            }
            Condition::HydrophobicityAbove(limit) => {
                traits.hydrophobicity.is_some_and(|h| h > limit)
            }
            Condition::DiffusionAbove(limit) => traits.diffusion.is_some_and(|d| d > limit),
            Condition::DiffusionBelow(limit) => traits.diffusion.is_some_and(|d| d < limit),
            Condition::HasEcNumbers => !evidence.ec_numbers.is_empty(),
            Condition::LocalizedTo(place) => evidence.localization.iter().any(|l| l == place),
            Condition::InteractsWith(label) => {
                evidence.interactions.iter().any(|i| i.contains(label))
            }
            Condition::RegulatedBy(text) => evidence.regulation.iter().any(|r| r == text),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rule {
    pub category: FunctionCategory,
    pub condition: Condition,
    pub points: u32,
    pub note: Option<&'static str>,
}

impl Rule {
    pub fn applies(&self, traits: &ObservedTraits, evidence: &AnnotationEvidence) -> bool {
        self.condition.holds(traits, evidence)
    }

    fn explain(&self, evidence: &AnnotationEvidence) -> Option<String> {
        let note = self.note?;
        match self.condition {
            Condition::HasEcNumbers => Some(format!("{note} ({})", evidence.ec_numbers.join(", "))),
            _ => Some(note.to_string()),
        }
    }
}

pub const RULES: [Rule; 12] = [
    Rule {
        category: FunctionCategory::Enzyme,
        condition: Condition::ChargeAboveHydrophobicityBelow { charge: 4.0, hydrophobicity: 0.0 },
        points: 60,
        note: Some("High positive charge and low hydrophobicity are characteristic of enzymes."),
    },
    Rule {
        category: FunctionCategory::Enzyme,
        condition: Condition::ShapeIs(ShapeCategory::CompactSpherical),
        points: 20,
        note: Some("Compact shape increases the likelihood of enzymatic activity."),
    },
    Rule {
        category: FunctionCategory::Enzyme,
        condition: Condition::HasEcNumbers,
        points: 30,
        note: Some("EC number present, supports enzymatic activity"),
    },
    Rule {
        category: FunctionCategory::Signaling,
        condition: Condition::DiffusionAbove(0.005),
        points: 50,
        note: Some("High diffusion could indicate a signaling role."),
    },
    Rule {
        category: FunctionCategory::Signaling,
        condition: Condition::ShapeIsChargeBelow(ShapeCategory::CompactSpherical, 2.0),
        points: 30,
        note: Some("Small neutral protein with a spherical shape, possible signaling peptide."),
    },
    Rule {
        category: FunctionCategory::Signaling,
        condition: Condition::LocalizedTo("Secreted"),
        points: 20,
        note: Some("Protein is secreted, which may indicate a signaling role."),
    },
    Rule {
        category: FunctionCategory::Membrane,
        condition: Condition::HydrophobicityAbove(2.0),
        points: 70,
        note: Some("High hydrophobicity suggests possible membrane integration."),
    },
    Rule {
        category: FunctionCategory::Membrane,
        condition: Condition::ShapeIsNot(ShapeCategory::CompactSpherical),
        points: 10,
        note: None,
    },
    Rule {
        category: FunctionCategory::Membrane,
        condition: Condition::InteractsWith("Membrane"),
        points: 30,
        note: Some("Protein interacts with membrane proteins."),
    },
    Rule {
        category: FunctionCategory::Structural,
        condition: Condition::ShapeIs(ShapeCategory::ElongatedMultidomain),
        points: 60,
        note: Some("Long, elongated proteins often serve a structural role."),
    },
    Rule {
        category: FunctionCategory::Structural,
        condition: Condition::DiffusionBelow(0.002),
        points: 20,
        note: Some("Low diffusion may indicate a structural role."),
    },
    Rule {
        category: FunctionCategory::Structural,
        condition: Condition::RegulatedBy("Inhibited by"),
        points: 10,
        note: Some("Inhibition regulates protein function, suggesting a structural role."),
    },
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verdict {
    pub category: FunctionCategory,
    /// Score of the best category, kept even when it is overridden to Unknown
    pub confidence: u32,
    pub alternatives: BTreeMap<FunctionCategory, u32>,
    /// Triggered rule notes in evaluation order
    pub notes: Vec<String>,
}

pub fn classify_function(traits: &ObservedTraits, evidence: &AnnotationEvidence) -> Verdict {
    classify_with_rules(&RULES, traits, evidence)
}

pub fn classify_with_rules(
    rules: &[Rule],
    traits: &ObservedTraits,
    evidence: &AnnotationEvidence,
) -> Verdict {
    let mut scores: BTreeMap<FunctionCategory, u32> =
        FunctionCategory::ALL.iter().map(|&c| (c, 0)).collect();
    let mut notes = Vec::new();

    for rule in rules.iter().filter(|rule| rule.applies(traits, evidence)) {
        *scores.entry(rule.category).or_insert(0) += rule.points;
        if let Some(note) = rule.explain(evidence) {
            notes.push(note);
        }
    }

    let mut best = FunctionCategory::ALL[0];
    let mut confidence = scores[&best];
    for category in FunctionCategory::ALL {
        if scores[&category] > confidence {
            best = category;
            confidence = scores[&category];
        }
    }

    if confidence < MIN_CONFIDENCE {
        best = FunctionCategory::Unknown;
        notes.push(LOW_CONFIDENCE_NOTE.to_string());
    }

    let alternatives = scores
        .into_iter()
        .filter(|&(category, score)| category != best && score > ALTERNATIVE_THRESHOLD)
        .collect();

    debug!("Function verdict: {best} at {confidence}%");
    Verdict {
        category: best,
        confidence,
        alternatives,
        notes,
    }
}
