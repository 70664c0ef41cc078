// src/document/sections.rs
use std::fmt;

use crate::parse::Lifepath;
use crate::render::templates::section_heading;

/// Whether a section is a top-level setting or a subsetting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingKind {
    Setting,
    Subsetting,
}

impl SettingKind {
    pub fn of(lifepath: &Lifepath) -> Self {
        if lifepath.born {
            SettingKind::Setting
        } else {
            SettingKind::Subsetting
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SettingKind::Setting => "Setting",
            SettingKind::Subsetting => "Subsetting",
        }
    }
}

/// Heading that opens a section; its kind comes from the section's first record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionHeading {
    pub setting: String,
    pub kind: SettingKind,
}

impl fmt::Display for SectionHeading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let title = format!("{} {}", self.setting, self.kind.as_str());
        f.write_str(&section_heading(&title))
    }
}

/// Remembers the setting of the previous record.
#[derive(Debug, Default)]
pub struct SectionTracker {
    current: Option<String>,
}

impl SectionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed the next record; returns a heading when its setting differs from
    /// the previous record's.
    pub fn advance(&mut self, lifepath: &Lifepath) -> Option<SectionHeading> {
        if self.current.as_deref() == Some(lifepath.setting.as_str()) {
            return None;
        }
        self.current = Some(lifepath.setting.clone());
        Some(SectionHeading {
            setting: lifepath.setting.clone(),
            kind: SettingKind::of(lifepath),
        })
    }
}

/// A maximal run of adjacent records sharing a setting.
#[derive(Debug)]
pub struct Section<'a> {
    pub heading: SectionHeading,
    pub lifepaths: &'a [Lifepath],
}

/// Cut the ordered records into sections. Settings that come back after an
/// interruption start a new section with the same heading.
pub fn group_sections(lifepaths: &[Lifepath]) -> Vec<Section<'_>> {
    let mut tracker = SectionTracker::new();
    let mut sections: Vec<Section<'_>> = Vec::new();
    let mut start = 0;
    let mut pending: Option<SectionHeading> = None;

    for (idx, lifepath) in lifepaths.iter().enumerate() {
        if let Some(heading) = tracker.advance(lifepath) {
            if let Some(prev) = pending.replace(heading) {
                sections.push(Section {
                    heading: prev,
                    lifepaths: &lifepaths[start..idx],
                });
            }
            start = idx;
        }
    }
    if let Some(last) = pending {
        sections.push(Section {
            heading: last,
            lifepaths: &lifepaths[start..],
        });
    }
    sections
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lp(setting: &str, born: bool, name: &str) -> Lifepath {
        Lifepath {
            setting: setting.into(),
            born,
            name: name.into(),
            ..Default::default()
        }
    }

    fn headings(sections: &[Section<'_>]) -> Vec<String> {
        sections.iter().map(|s| s.heading.to_string()).collect()
    }

    #[test]
    fn one_heading_per_adjacent_run() {
        let lps = vec![
            lp("Town", true, "a"),
            lp("Town", true, "b"),
            lp("Court", false, "c"),
        ];
        let sections = group_sections(&lps);
        assert_eq!(
            headings(&sections),
            vec!["\\section*{Town Setting}", "\\section*{Court Subsetting}"]
        );
        assert_eq!(sections[0].lifepaths.len(), 2);
        assert_eq!(sections[1].lifepaths[0].name, "c");
    }

    #[test]
    fn recurring_setting_reopens() {
        let lps = vec![
            lp("Town", true, "a"),
            lp("Sea", true, "b"),
            lp("Town", true, "c"),
        ];
        let sections = group_sections(&lps);
        assert_eq!(sections.len(), 3);
        assert_eq!(sections[0].heading, sections[2].heading);
    }

    #[test]
    fn kind_comes_from_first_record_of_the_run() {
        let lps = vec![lp("Town", false, "a"), lp("Town", true, "b")];
        let sections = group_sections(&lps);
        assert_eq!(headings(&sections), vec!["\\section*{Town Subsetting}"]);
    }

    #[test]
    fn empty_setting_still_opens_a_section() {
        let mut tracker = SectionTracker::new();
        let heading = tracker.advance(&lp("", true, "a")).unwrap();
        assert_eq!(heading.to_string(), "\\section*{ Setting}");
        assert!(tracker.advance(&lp("", false, "b")).is_none());
    }

    #[test]
    fn no_records_no_sections() {
        assert!(group_sections(&[]).is_empty());
    }
}
