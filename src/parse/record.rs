// src/parse/record.rs
use crate::error::{LifepathError, Result};
use crate::parse::header::{columns, ColumnLayout};

/// Marker value for boolean-ish cells (`use`, `born`).
pub const TRUE_MARKER: &str = "TRUE";

/// One input line after splitting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRow {
    /// 1-based physical line number in the input.
    pub line: usize,
    pub fields: Vec<String>,
}

impl RawRow {
    pub fn new(line: usize, fields: Vec<String>) -> Self {
        Self { line, fields }
    }

    /// Cell at `pos`, or `MissingField` naming `column` when the row is short.
    pub fn cell(&self, pos: usize, column: &str) -> Result<&str> {
        self.fields
            .get(pos)
            .map(String::as_str)
            .ok_or_else(|| LifepathError::MissingField {
                line: self.line,
                column: column.to_string(),
            })
    }

    pub fn id(&self, layout: &ColumnLayout) -> Result<i64> {
        let raw = self.cell(layout.id, columns::ID)?;
        raw.trim().parse().map_err(|_| LifepathError::InvalidId {
            line: self.line,
            value: raw.to_string(),
        })
    }

    /// True when the `use` cell is exactly `TRUE`.
    pub fn is_used(&self, layout: &ColumnLayout) -> Result<bool> {
        Ok(self.cell(layout.used, columns::USE)? == TRUE_MARKER)
    }
}

/// A lifepath entry, typed once at the parse boundary.
///
/// Point values stay strings: the renderer compares them verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Lifepath {
    pub id: i64,
    pub setting: String,
    /// Whether the setting is a top-level one characters can be born into.
    pub born: bool,
    pub name: String,
    pub years: String,
    pub res: String,
    pub stats: String,
    pub leads: String,
    pub skill_points: String,
    pub skills: String,
    pub general_skill_points: String,
    pub trait_points: String,
    pub traits: String,
    pub requirements: Option<String>,
    pub special: Option<String>,
}

impl Lifepath {
    pub fn from_row(row: &RawRow, layout: &ColumnLayout) -> Result<Self> {
        let text = |pos: usize, column: &str| row.cell(pos, column).map(str::to_string);
        let optional = |pos: Option<usize>, column: &str| pos.map(|p| text(p, column)).transpose();

        Ok(Self {
            id: row.id(layout)?,
            setting: row
                .cell(layout.setting, columns::SETTING)?
                .trim_matches(' ')
                .to_string(),
            born: row.cell(layout.born, columns::BORN)?.trim_matches(' ') == TRUE_MARKER,
            name: text(layout.name, columns::NAME)?,
            years: text(layout.years, columns::YEARS)?,
            res: text(layout.res, columns::RES)?,
            stats: text(layout.stats, columns::STATS)?,
            leads: text(layout.leads, columns::LEADS)?,
            skill_points: text(layout.skill_points, columns::SKILL_POINTS)?,
            skills: text(layout.skills, columns::SKILLS)?,
            general_skill_points: text(layout.general_skill_points, columns::GENERAL_SKILL_POINTS)?,
            trait_points: text(layout.trait_points, columns::TRAIT_POINTS)?,
            traits: text(layout.traits, columns::TRAITS)?,
            requirements: optional(layout.requirements, columns::REQUIREMENTS)?,
            special: optional(layout.special, columns::SPECIAL)?,
        })
    }
}
