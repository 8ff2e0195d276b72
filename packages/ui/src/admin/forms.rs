//! Text-field state for the manager forms and its conversion to drafts.

use chrono::Utc;
use content::models::{join_tags, optional, parse_tags};
use content::{About, AboutDraft, NewsDraft, NewsItem, Project, ProjectDraft};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProjectForm {
    pub title: String,
    pub description: String,
    pub image: String,
    /// Comma-separated
    pub tags: String,
    pub github: String,
    pub live_url: String,
}

impl ProjectForm {
    pub fn from_project(project: &Project) -> Self {
        Self {
            title: project.title.clone(),
            description: project.description.clone(),
            image: project.image.clone(),
            tags: join_tags(&project.tags),
            github: project.github.clone().unwrap_or_default(),
            live_url: project.live_url.clone().unwrap_or_default(),
        }
    }

    pub fn to_draft(&self) -> ProjectDraft {
        ProjectDraft {
            title: self.title.clone(),
            description: self.description.clone(),
            image: self.image.clone(),
            tags: parse_tags(&self.tags),
            github: optional(&self.github),
            live_url: optional(&self.live_url),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct AboutForm {
    pub name: String,
    pub email: String,
    pub location: String,
    pub bio: String,
    pub experience: String,
    pub profile_image: String,
    pub cv_url: String,
}

impl AboutForm {
    pub fn from_about(about: &About) -> Self {
        Self {
            name: about.name.clone(),
            email: about.email.clone(),
            location: about.location.clone(),
            bio: about.bio.clone(),
            experience: about.experience.clone(),
            profile_image: about.profile_image.clone(),
            cv_url: about.cv_url.clone().unwrap_or_default(),
        }
    }

    pub fn to_draft(&self) -> AboutDraft {
        AboutDraft {
            name: self.name.clone(),
            email: self.email.clone(),
            location: self.location.clone(),
            bio: self.bio.clone(),
            experience: self.experience.clone(),
            profile_image: self.profile_image.clone(),
            cv_url: optional(&self.cv_url),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct NewsForm {
    pub title: String,
    pub description: String,
    pub url: String,
    pub source: String,
    pub image_url: String,
}

impl NewsForm {
    pub fn from_item(item: &NewsItem) -> Self {
        Self {
            title: item.title.clone(),
            description: item.description.clone(),
            url: item.url.clone(),
            source: item.source.clone(),
            image_url: item.image_url.clone(),
        }
    }

    /// Every submit re-stamps `published_at`.
    pub fn to_draft(&self) -> NewsDraft {
        NewsDraft {
            title: self.title.clone(),
            description: self.description.clone(),
            url: self.url.clone(),
            source: self.source.clone(),
            image_url: self.image_url.clone(),
            published_at: Utc::now(),
        }
    }
}
