//! Recording status presentation
//!
//! One table maps each labelled status to its label and color category.
//! `RecordingStatus::None` and raw codes outside the enumeration are
//! unresolved: callers omit the annotation instead of failing.

use crate::models::RecordingStatus;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorCategory {
    Pending,
    Active,
    Complete,
    Failed,
}

impl ColorCategory {
    pub fn color(self) -> &'static str {
        match self {
            ColorCategory::Pending => "#3333aa",
            ColorCategory::Active | ColorCategory::Failed => "#aa3333",
            ColorCategory::Complete => "#33aa33",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusStyle {
    pub label: &'static str,
    pub category: ColorCategory,
}

impl StatusStyle {
    const fn new(label: &'static str, category: ColorCategory) -> Self {
        Self { label, category }
    }

    pub fn color(&self) -> &'static str {
        self.category.color()
    }
}

pub fn resolve(status: RecordingStatus) -> Option<StatusStyle> {
    use ColorCategory::*;

    let style = match status {
        RecordingStatus::None => return None,
        RecordingStatus::Scheduled => StatusStyle::new("Scheduled", Pending),
        RecordingStatus::Recording => StatusStyle::new("Recording", Active),
        RecordingStatus::Done => StatusStyle::new("Done", Complete),
        RecordingStatus::Aborted => StatusStyle::new("Recording aborted", Failed),
        RecordingStatus::NoTransponder => StatusStyle::new("No transponder", Failed),
        RecordingStatus::FileError => StatusStyle::new("File error", Failed),
        RecordingStatus::DiskFull => StatusStyle::new("Disk full", Failed),
        RecordingStatus::BufferError => StatusStyle::new("Buffer error", Failed),
    };
    Some(style)
}

/// Resolve a raw scheduler status code
pub fn resolve_code(code: i32) -> Option<StatusStyle> {
    RecordingStatus::from_code(code).and_then(resolve)
}
