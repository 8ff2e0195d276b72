//! # Manager edit workflow
//!
//! Every admin manager runs the same state machine:
//!
//! ```text
//! Loading ──► Viewing ◄──► Editing { id: Some(_) }   (update path)
//!                    ◄──► Editing { id: None }      (insert path)
//! ```
//!
//! The attached id alone decides the write: [`Mode::plan`] turns a submitted
//! draft into exactly one [`WriteOp`], and [`Content::apply`] performs exactly
//! that one call. Deletion goes through [`Content::delete_confirmed`], which
//! makes no call at all unless the user confirmed.

use uuid::Uuid;

use crate::models::Record;
use crate::repo::{Content, ContentStore, StoreError};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Mode {
    #[default]
    Loading,
    Viewing,
    Editing {
        id: Option<Uuid>,
    },
}

impl Mode {
    /// Initial mode for a singleton manager once its row has been looked up:
    /// no row means first-time setup.
    pub fn for_singleton(existing: Option<Uuid>) -> Self {
        match existing {
            Some(_) => Mode::Viewing,
            None => Mode::Editing { id: None },
        }
    }

    pub fn create() -> Self {
        Mode::Editing { id: None }
    }

    pub fn edit(id: Uuid) -> Self {
        Mode::Editing { id: Some(id) }
    }

    pub fn is_editing(&self) -> bool {
        matches!(self, Mode::Editing { .. })
    }

    /// The record the form is bound to, if any.
    pub fn target(&self) -> Option<Uuid> {
        match self {
            Mode::Editing { id } => *id,
            _ => None,
        }
    }

    /// Mode once a submitted write has finished. A failed write keeps the
    /// form open with its values.
    pub fn after_write(self, succeeded: bool) -> Self {
        if succeeded {
            Mode::Viewing
        } else {
            self
        }
    }

    /// The single write a submit in this mode performs.
    pub fn plan<D>(&self, draft: D) -> Option<WriteOp<D>> {
        match self {
            Mode::Editing { id: Some(id) } => Some(WriteOp::Update(*id, draft)),
            Mode::Editing { id: None } => Some(WriteOp::Insert(draft)),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum WriteOp<D> {
    Insert(D),
    Update(Uuid, D),
}

impl<D> WriteOp<D> {
    fn verb(&self) -> &'static str {
        match self {
            WriteOp::Insert(_) => "add",
            WriteOp::Update(..) => "update",
        }
    }

    fn past_tense(&self) -> &'static str {
        match self {
            WriteOp::Insert(_) => "added",
            WriteOp::Update(..) => "updated",
        }
    }

    /// e.g. "Project added successfully"
    pub fn success_notice(&self, noun: &str) -> String {
        format!("{noun} {} successfully", self.past_tense())
    }

    /// e.g. "Failed to update project"
    pub fn failure_notice(&self, noun: &str) -> String {
        format!("Failed to {} {}", self.verb(), noun.to_lowercase())
    }
}

/// Notice for a singleton manager, where every save reads as an update,
/// e.g. "About content updated successfully".
pub fn singleton_notice(noun: &str, succeeded: bool) -> String {
    let op = WriteOp::Update(Uuid::nil(), ());
    if succeeded {
        op.success_notice(noun)
    } else {
        op.failure_notice(noun)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Saved {
    Inserted,
    Updated(Uuid),
}

impl<S: ContentStore> Content<S> {
    /// Perform one planned write.
    pub async fn apply<R: Record>(&self, op: &WriteOp<R::Draft>) -> Result<Saved, StoreError> {
        match op {
            WriteOp::Insert(draft) => {
                self.insert::<R>(draft).await?;
                Ok(Saved::Inserted)
            }
            WriteOp::Update(id, draft) => {
                self.update::<R>(*id, draft).await?;
                Ok(Saved::Updated(*id))
            }
        }
    }

    /// Delete `id` if and only if the user confirmed. Returns whether a
    /// delete was issued.
    pub async fn delete_confirmed<R: Record>(
        &self,
        id: Uuid,
        confirmed: bool,
    ) -> Result<bool, StoreError> {
        if !confirmed {
            return Ok(false);
        }
        self.delete::<R>(id).await?;
        Ok(true)
    }
}
