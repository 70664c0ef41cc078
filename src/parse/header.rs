// src/parse/header.rs
use std::collections::HashMap;

use tracing::{debug, warn};

use crate::error::{LifepathError, Result};

/// Column names the renderer understands.
pub mod columns {
    pub const ID: &str = "id";
    pub const USE: &str = "use";
    pub const SETTING: &str = "setting";
    pub const BORN: &str = "born";
    pub const NAME: &str = "name";
    pub const YEARS: &str = "years";
    pub const RES: &str = "res";
    pub const STATS: &str = "stats";
    pub const LEADS: &str = "leads";
    pub const SKILL_POINTS: &str = "skill_points";
    pub const SKILLS: &str = "skills";
    pub const GENERAL_SKILL_POINTS: &str = "general_skill_points";
    pub const TRAIT_POINTS: &str = "trait_points";
    pub const TRAITS: &str = "traits";
    pub const REQUIREMENTS: &str = "requirements";
    pub const SPECIAL: &str = "special";
}

/// Column name → 0-based position, taken from the header row.
#[derive(Debug, Clone, Default)]
pub struct HeaderIndex {
    positions: HashMap<String, usize>,
}

impl HeaderIndex {
    /// Names are trimmed; when a name repeats, the last position wins.
    pub fn from_row(header: &[String]) -> Self {
        let mut positions = HashMap::with_capacity(header.len());
        for (idx, raw) in header.iter().enumerate() {
            let name = raw.trim();
            if let Some(prev) = positions.insert(name.to_string(), idx) {
                warn!(column = name, prev, idx, "duplicate header column, keeping the later one");
            }
        }
        Self { positions }
    }

    pub fn get(&self, name: &str) -> Option<usize> {
        self.positions.get(name).copied()
    }

    /// Position of a column that must exist.
    pub fn position(&self, name: &str) -> Result<usize> {
        self.get(name)
            .ok_or_else(|| LifepathError::UnknownColumn(name.to_string()))
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

/// Positions of every column a lifepath is read from, resolved once so rows
/// can be converted without further name lookups.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnLayout {
    pub id: usize,
    pub used: usize,
    pub setting: usize,
    pub born: usize,
    pub name: usize,
    pub years: usize,
    pub res: usize,
    pub stats: usize,
    pub leads: usize,
    pub skill_points: usize,
    pub skills: usize,
    pub general_skill_points: usize,
    pub trait_points: usize,
    pub traits: usize,
    pub requirements: Option<usize>,
    pub special: Option<usize>,
}

impl ColumnLayout {
    pub fn resolve(index: &HeaderIndex) -> Result<Self> {
        let layout = Self {
            id: index.position(columns::ID)?,
            used: index.position(columns::USE)?,
            setting: index.position(columns::SETTING)?,
            born: index.position(columns::BORN)?,
            name: index.position(columns::NAME)?,
            years: index.position(columns::YEARS)?,
            res: index.position(columns::RES)?,
            stats: index.position(columns::STATS)?,
            leads: index.position(columns::LEADS)?,
            skill_points: index.position(columns::SKILL_POINTS)?,
            skills: index.position(columns::SKILLS)?,
            general_skill_points: index.position(columns::GENERAL_SKILL_POINTS)?,
            trait_points: index.position(columns::TRAIT_POINTS)?,
            traits: index.position(columns::TRAITS)?,
            requirements: index.get(columns::REQUIREMENTS),
            special: index.get(columns::SPECIAL),
        };
        debug!(
            requirements = layout.requirements.is_some(),
            special = layout.special.is_some(),
            "resolved column layout"
        );
        Ok(layout)
    }
}
