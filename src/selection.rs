//! Filter-selection state.
//!
//! A [`Selection`] is the four-field filter state for one render cycle; `None`
//! means "all" for that dimension. The cascade consumes it read-only and never
//! mutates it — re-offering valid choices after an upstream change is the
//! presentation layer's job.
//!
//! [`SelectionHolder`] is the toolkit-neutral "selection holder with change
//! notification": widgets write through its setters, and registered observers are
//! told about every change so they can trigger a new render pass.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::types::VacancyRecord;

/// The current filter state. Each field is either unset (`None`, meaning "all")
/// or one specific value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    /// Health-region filter.
    pub region: Option<String>,
    /// Municipality filter.
    pub municipality: Option<String>,
    /// Hospital filter.
    pub hospital: Option<String>,
    /// Role filter.
    pub role: Option<String>,
}

impl Selection {
    /// The empty selection: every dimension unset.
    pub fn all() -> Self {
        Self::default()
    }

    /// Set the region filter.
    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    /// Set the municipality filter.
    pub fn with_municipality(mut self, municipality: impl Into<String>) -> Self {
        self.municipality = Some(municipality.into());
        self
    }

    /// Set the hospital filter.
    pub fn with_hospital(mut self, hospital: impl Into<String>) -> Self {
        self.hospital = Some(hospital.into());
        self
    }

    /// Set the role filter.
    pub fn with_role(mut self, role: impl Into<String>) -> Self {
        self.role = Some(role.into());
        self
    }

    /// True if `record` satisfies every set field as an equality predicate.
    /// Unset fields contribute no predicate.
    pub fn matches(&self, record: &VacancyRecord) -> bool {
        let field_ok = |want: &Option<String>, got: &str| match want {
            Some(v) => v == got,
            None => true,
        };
        field_ok(&self.region, &record.health_region)
            && field_ok(&self.municipality, &record.municipality)
            && field_ok(&self.hospital, &record.hospital)
            && field_ok(&self.role, &record.role)
    }
}

/// Observer interface for selection changes.
pub trait SelectionObserver: Send + Sync {
    /// Called after the held selection changed, with old and new state.
    fn on_change(&self, old: &Selection, new: &Selection);
}

/// Owns the live [`Selection`] and notifies observers on every change.
///
/// No UI dependency: a terminal prompt, a web form, or a desktop widget can all
/// drive the same holder.
#[derive(Default)]
pub struct SelectionHolder {
    current: Selection,
    observers: Vec<Arc<dyn SelectionObserver>>,
}

impl fmt::Debug for SelectionHolder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SelectionHolder")
            .field("current", &self.current)
            .field("observers_len", &self.observers.len())
            .finish()
    }
}

impl SelectionHolder {
    /// Create a holder with an initial selection.
    pub fn new(initial: Selection) -> Self {
        Self {
            current: initial,
            observers: Vec::new(),
        }
    }

    /// The selection as of now.
    pub fn current(&self) -> &Selection {
        &self.current
    }

    /// Register an observer for subsequent changes.
    pub fn subscribe(&mut self, observer: Arc<dyn SelectionObserver>) {
        self.observers.push(observer);
    }

    /// Replace the whole selection. No-op (and no notification) if unchanged.
    pub fn replace(&mut self, next: Selection) {
        if next == self.current {
            return;
        }
        let old = std::mem::replace(&mut self.current, next);
        for obs in &self.observers {
            obs.on_change(&old, &self.current);
        }
    }

    /// Set or clear the region filter.
    pub fn set_region(&mut self, region: Option<String>) {
        let mut next = self.current.clone();
        next.region = region;
        self.replace(next);
    }

    /// Set or clear the municipality filter.
    pub fn set_municipality(&mut self, municipality: Option<String>) {
        let mut next = self.current.clone();
        next.municipality = municipality;
        self.replace(next);
    }

    /// Set or clear the hospital filter.
    pub fn set_hospital(&mut self, hospital: Option<String>) {
        let mut next = self.current.clone();
        next.hospital = hospital;
        self.replace(next);
    }

    /// Set or clear the role filter.
    pub fn set_role(&mut self, role: Option<String>) {
        let mut next = self.current.clone();
        next.role = role;
        self.replace(next);
    }
}
