//! Skill catalog data structures
//!
//! This module contains the static catalog of selectable skills, grouped by
//! category, plus the precomputed inverse lookup (skill name -> category
//! kind) used for coverage validation. The catalog can be overridden by a
//! skills.json file; otherwise the built-in default is used.

use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::models::CategoryKind;

/// A labelled group of skills sharing one category kind
#[derive(Debug, Clone, Deserialize)]
pub struct SkillCategory {
    pub label: String,
    pub kind: CategoryKind,
    pub skills: Vec<String>,
}

/// On-disk shape of a skills.json catalog override
#[derive(Debug, Deserialize)]
struct CatalogFile {
    categories: Vec<SkillCategory>,
}

/// Catalog of all selectable skills with the inverse kind lookup
#[derive(Debug, Clone)]
pub struct SkillCatalog {
    pub categories: Vec<SkillCategory>,
    // Built once at construction; duplicate skill names keep their first
    // category's kind.
    index: HashMap<String, CategoryKind>,
}

impl SkillCatalog {
    fn from_categories(categories: Vec<SkillCategory>) -> Self {
        let mut index = HashMap::new();
        for category in &categories {
            for skill in &category.skills {
                index.entry(skill.clone()).or_insert(category.kind);
            }
        }
        Self { categories, index }
    }

    /// Built-in catalog used when no skills.json override is present
    pub fn default_catalog() -> Self {
        let group = |label: &str, kind: CategoryKind, skills: &[&str]| SkillCategory {
            label: label.to_string(),
            kind,
            skills: skills.iter().map(|s| s.to_string()).collect(),
        };

        Self::from_categories(vec![
            group(
                "Markup & Styling",
                CategoryKind::Code,
                &["HTML", "CSS", "Sass", "Tailwind"],
            ),
            group(
                "Programming",
                CategoryKind::Code,
                &["JavaScript", "TypeScript", "React"],
            ),
            group(
                "Planning & Workflow",
                CategoryKind::Planning,
                &["Git", "Figma", "Agile", "Design Systems"],
            ),
            group(
                "Communication & Docs",
                CategoryKind::Communication,
                &["Storybook", "Code Review", "Documentation", "Pair Programming"],
            ),
        ])
    }

    /// Load a catalog override from a JSON file
    pub fn load(path: &Path) -> io::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let file: CatalogFile = serde_json::from_str(&content)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        if file.categories.iter().all(|c| c.skills.is_empty()) {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                "catalog contains no skills",
            ));
        }
        Ok(Self::from_categories(file.categories))
    }

    /// Resolve the catalog in order of priority:
    /// 1. Explicit path from the CLI
    /// 2. ./skills.json (local project customization)
    /// 3. <config_dir>/skills-tui/skills.json (global user config)
    /// 4. Built-in default
    pub fn resolve(explicit: Option<&Path>) -> io::Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        let local = PathBuf::from("skills.json");
        if local.exists() {
            return Self::load(&local);
        }

        if let Some(config_dir) = dirs::config_dir() {
            let global = config_dir.join("skills-tui").join("skills.json");
            if global.exists() {
                return Self::load(&global);
            }
        }

        Ok(Self::default_catalog())
    }

    /// Category kind for a skill name, if the skill exists in the catalog
    pub fn kind_of(&self, skill: &str) -> Option<CategoryKind> {
        self.index.get(skill).copied()
    }

    /// Total number of skills across all categories
    pub fn skill_count(&self) -> usize {
        self.categories.iter().map(|c| c.skills.len()).sum()
    }

    /// Skills flattened in display order (category order, then skill order).
    /// This order drives the selection cursor.
    pub fn flat_skills(&self) -> impl Iterator<Item = &str> {
        self.categories
            .iter()
            .flat_map(|c| c.skills.iter().map(String::as_str))
    }

    /// Skill at a flattened cursor position
    pub fn skill_at(&self, index: usize) -> Option<&str> {
        self.flat_skills().nth(index)
    }
}
