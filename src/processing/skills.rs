//! Skill vocabulary and skill sets

use serde::{Deserialize, Serialize};
use std::collections::btree_set::{self, BTreeSet};
use std::collections::HashSet;
use std::fmt;
use std::sync::{Arc, LazyLock};

/// Skills recognized by the screener, in display order
const BUILTIN_SKILLS: &[&str] = &[
    "python", "r", "machine learning", "data analysis", "pandas", "numpy", "scikit-learn",
    "deep learning", "data visualization", "sql", "tableau", "powerbi", "statistics",
    "data engineering", "big data", "spark", "hadoop", "aws", "azure", "docker", "kubernetes",
    "web development", "html", "css", "javascript", "react", "node.js", "django", "git",
    "flask", "fastapi", "java", "nlp", "data cleaning", "backend", "devops",
];

static BUILTIN: LazyLock<Arc<SkillVocabulary>> =
    LazyLock::new(|| Arc::new(SkillVocabulary::new(BUILTIN_SKILLS.iter().copied())));

/// Ordered, read-only list of known skills
#[derive(Debug, Clone)]
pub struct SkillVocabulary {
    skills: Vec<String>,
    lookup: HashSet<String>,
}

impl SkillVocabulary {
    /// Entries are lowercased and trimmed; duplicates keep their first position
    pub fn new<I, S>(skills: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut ordered = Vec::new();
        let mut lookup = HashSet::new();

        for skill in skills {
            let skill = skill.as_ref().trim().to_lowercase();
            if !skill.is_empty() && lookup.insert(skill.clone()) {
                ordered.push(skill);
            }
        }

        Self {
            skills: ordered,
            lookup,
        }
    }

    /// The compiled-in vocabulary, shared for the life of the process
    pub fn builtin() -> Arc<SkillVocabulary> {
        Arc::clone(&BUILTIN)
    }

    pub fn contains(&self, skill: &str) -> bool {
        self.lookup.contains(skill)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.skills.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.skills.len()
    }

    pub fn is_empty(&self) -> bool {
        self.skills.is_empty()
    }
}

/// Set of skills found in one text
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SkillSet(BTreeSet<String>);

impl SkillSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn intersection(&self, other: &SkillSet) -> SkillSet {
        SkillSet(self.0.intersection(&other.0).cloned().collect())
    }

    pub fn difference(&self, other: &SkillSet) -> SkillSet {
        SkillSet(self.0.difference(&other.0).cloned().collect())
    }

    pub fn is_subset(&self, other: &SkillSet) -> bool {
        self.0.is_subset(&other.0)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for SkillSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        SkillSet(iter.into_iter().map(Into::into).collect())
    }
}

impl IntoIterator for SkillSet {
    type Item = String;
    type IntoIter = btree_set::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

/// Comma separated, alphabetical
impl fmt::Display for SkillSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined = self.iter().collect::<Vec<_>>().join(", ");
        f.write_str(&joined)
    }
}
