use anyhow::{Context, Result};
use leptos::leptos_dom::logging::console_error;
use once_cell::sync::Lazy;
use serde::Deserialize;

use crate::typewriter::TypewriterConfig;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ProjectEntry {
    pub title: String,
    pub description: String,
    pub image: String,
    pub link: String,
    #[serde(default)]
    pub note: Option<String>,
}

impl ProjectEntry {
    /// Call-to-action text, e.g. `View App (Coming Soon)`.
    pub fn cta_label(&self) -> String {
        match self.note.as_deref().map(str::trim) {
            Some(note) if !note.is_empty() => format!("View App {note}"),
            _ => "View App".to_owned(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ResumeLink {
    pub label: String,
    pub href: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ProfileLink {
    pub label: String,
    pub url: String,
    /// devicon name, `github` -> `devicon-github-plain`
    #[serde(default)]
    pub icon: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Contact {
    pub email: String,
    #[serde(default)]
    pub links: Vec<ProfileLink>,
}

impl Contact {
    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email)
    }
}

/// Everything the page says about its owner.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Profile {
    pub name: String,
    pub greeting: String,
    pub roles: Vec<String>,
    pub typewriter: TypewriterConfig,
    pub about: String,
    pub projects: Vec<ProjectEntry>,
    pub leadership: String,
    pub skills: Vec<String>,
    pub resumes: Vec<ResumeLink>,
    pub contact: Contact,
    pub footer: String,
}

impl Profile {
    pub fn from_yaml(src: &str) -> Result<Self> {
        serde_yaml::from_str(src).context("parse profile yaml")
    }

    pub fn skills_line(&self) -> String {
        self.skills.join(", ")
    }
}

const YML: &str = include_str!("../data/profile.yml");

pub static PROFILE: Lazy<Profile> = Lazy::new(|| {
    Profile::from_yaml(YML).unwrap_or_else(|e| {
        console_error(&format!("{e:#}"));
        Profile::default()
    })
});
