// src/render/lifepath.rs
use std::fmt;

use crate::parse::Lifepath;
use crate::render::templates::{
    self, detail_block, record_row, REQUIREMENTS_LABEL, SKILLS_LABEL, SPECIAL_LABEL, TRAITS_LABEL,
};

/// Stands in for an empty stats or traits cell.
pub const PLACEHOLDER: &str = "-";

/// Point values are compared to this literally, so `"00"` counts as non-zero.
const ZERO_POINTS: &str = "0";

fn or_placeholder(value: &str) -> &str {
    if value.is_empty() {
        PLACEHOLDER
    } else {
        value
    }
}

/// Which form the skills line takes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkillBlock<'a> {
    /// Named skills plus general points
    Combined {
        skill_points: &'a str,
        skills: &'a str,
        general_points: &'a str,
    },
    /// General points only; the named skill list is not shown
    GeneralOnly { general_points: &'a str },
    /// Named skills only
    Named {
        skill_points: &'a str,
        skills: &'a str,
    },
}

impl<'a> SkillBlock<'a> {
    pub fn select(lifepath: &'a Lifepath) -> Self {
        let general = lifepath.general_skill_points.as_str();
        let named = lifepath.skill_points.as_str();
        match (general != ZERO_POINTS, named != ZERO_POINTS) {
            (true, true) => SkillBlock::Combined {
                skill_points: named,
                skills: &lifepath.skills,
                general_points: general,
            },
            (true, false) => SkillBlock::GeneralOnly {
                general_points: general,
            },
            (false, _) => SkillBlock::Named {
                skill_points: named,
                skills: &lifepath.skills,
            },
        }
    }
}

impl fmt::Display for SkillBlock<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkillBlock::Combined {
                skill_points,
                skills,
                general_points,
            } => write!(f, "{skill_points}pts: {skills}; {general_points}pts: General"),
            SkillBlock::GeneralOnly { general_points } => write!(f, "{general_points}pts: General"),
            SkillBlock::Named {
                skill_points,
                skills,
            } => write!(f, "{skill_points}pts: {skills}"),
        }
    }
}

pub fn render_requirements(requirements: &str) -> String {
    detail_block(REQUIREMENTS_LABEL, requirements)
}

pub fn render_special(special: &str) -> String {
    detail_block(SPECIAL_LABEL, special)
}

/// Render one lifepath as a minipage: the shaded row, skills, traits, then
/// requirements and special notes when the input carries them.
pub fn render_lifepath(lifepath: &Lifepath) -> String {
    let mut out = record_row(
        &lifepath.name,
        &lifepath.years,
        &lifepath.res,
        or_placeholder(&lifepath.stats),
        &lifepath.leads,
    );

    let skills = SkillBlock::select(lifepath);
    out.push_str(&detail_block(SKILLS_LABEL, &skills.to_string()));

    let traits = format!(
        "{}pts: {}",
        lifepath.trait_points,
        or_placeholder(&lifepath.traits)
    );
    out.push_str(&detail_block(TRAITS_LABEL, &traits));

    if let Some(requirements) = lifepath.requirements.as_deref().filter(|r| !r.is_empty()) {
        out.push_str(&render_requirements(requirements));
    }
    if let Some(special) = lifepath.special.as_deref().filter(|s| !s.is_empty()) {
        out.push_str(&render_special(special));
    }

    out.push_str(templates::RECORD_CLOSE);
    out
}
