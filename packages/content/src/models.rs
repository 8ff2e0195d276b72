//! # Portfolio records
//!
//! Every entity the site persists is a flat row in one table of the content
//! store. Each kind comes in two shapes:
//!
//! | Record | Draft | Table |
//! |--------|-------|-------|
//! | [`Project`] | [`ProjectDraft`] | `projects` |
//! | [`About`] | [`AboutDraft`] | `about` (singleton) |
//! | [`NewsItem`] | [`NewsDraft`] | `tech_news` |
//! | n/a | [`ContactMessage`] | `messages` (write-only) |
//!
//! The record carries the server-assigned fields (`id`, timestamps); the
//! draft carries only what a form can write. Inserts and updates always send
//! a draft, so a client can never overwrite an identifier.
//!
//! All types are `Serialize + Deserialize` so they cross the server/client
//! boundary as the JSON rows of the store protocol.

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::query::Table;

/// A persisted row with a stable identifier and a writable projection.
pub trait Record: Clone + Serialize + DeserializeOwned {
    type Draft: Clone + Serialize + DeserializeOwned;

    const TABLE: Table;

    fn id(&self) -> Uuid;

    /// Writable fields of this record, used to pre-fill an edit form.
    fn draft(&self) -> Self::Draft;
}

/// A showcased project.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    /// Image URL
    pub image: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub github: Option<String>,
    pub live_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectDraft {
    pub title: String,
    pub description: String,
    pub image: String,
    pub tags: Vec<String>,
    pub github: Option<String>,
    pub live_url: Option<String>,
}

impl Record for Project {
    type Draft = ProjectDraft;

    const TABLE: Table = Table::Projects;

    fn id(&self) -> Uuid {
        self.id
    }

    fn draft(&self) -> ProjectDraft {
        ProjectDraft {
            title: self.title.clone(),
            description: self.description.clone(),
            image: self.image.clone(),
            tags: self.tags.clone(),
            github: self.github.clone(),
            live_url: self.live_url.clone(),
        }
    }
}

/// The singleton "about me" row.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct About {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub location: String,
    pub bio: String,
    pub experience: String,
    pub profile_image: String,
    pub cv_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AboutDraft {
    pub name: String,
    pub email: String,
    pub location: String,
    pub bio: String,
    pub experience: String,
    pub profile_image: String,
    pub cv_url: Option<String>,
}

impl About {
    /// Biography split on line breaks, blank lines dropped.
    pub fn bio_paragraphs(&self) -> Vec<&str> {
        self.bio
            .split('\n')
            .map(str::trim_end)
            .filter(|p| !p.trim().is_empty())
            .collect()
    }
}

impl Record for About {
    type Draft = AboutDraft;

    const TABLE: Table = Table::About;

    fn id(&self) -> Uuid {
        self.id
    }

    fn draft(&self) -> AboutDraft {
        AboutDraft {
            name: self.name.clone(),
            email: self.email.clone(),
            location: self.location.clone(),
            bio: self.bio.clone(),
            experience: self.experience.clone(),
            profile_image: self.profile_image.clone(),
            cv_url: self.cv_url.clone(),
        }
    }
}

/// A curated tech news entry shown on the dashboard.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NewsItem {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub url: String,
    pub source: String,
    pub image_url: String,
    pub published_at: DateTime<Utc>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NewsDraft {
    pub title: String,
    pub description: String,
    pub url: String,
    pub source: String,
    pub image_url: String,
    pub published_at: DateTime<Utc>,
}

impl Default for NewsDraft {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            url: String::new(),
            source: String::new(),
            image_url: String::new(),
            published_at: Utc::now(),
        }
    }
}

impl Record for NewsItem {
    type Draft = NewsDraft;

    const TABLE: Table = Table::TechNews;

    fn id(&self) -> Uuid {
        self.id
    }

    fn draft(&self) -> NewsDraft {
        NewsDraft {
            title: self.title.clone(),
            description: self.description.clone(),
            url: self.url.clone(),
            source: self.source.clone(),
            image_url: self.image_url.clone(),
            published_at: self.published_at,
        }
    }
}

/// A contact-form submission. Also the JSON body of the email function.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

/// Parse the comma-separated tag field of the project form.
///
/// Entries are trimmed and kept in order. Duplicates are kept; empty entries
/// are dropped so no stored tag is blank.
pub fn parse_tags(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect()
}

/// Inverse of [`parse_tags`] for pre-filling the form.
pub fn join_tags(tags: &[String]) -> String {
    tags.join(", ")
}

/// Blank form input becomes `None`.
pub fn optional(input: &str) -> Option<String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
