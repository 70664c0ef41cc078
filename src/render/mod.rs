// src/render/mod.rs
pub mod lifepath;
pub mod templates;

pub use lifepath::{render_lifepath, render_requirements, render_special, SkillBlock, PLACEHOLDER};
