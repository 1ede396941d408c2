//! Per-user session state for the interactive dashboard.
use crate::core::profile::UserProfile;
use tracing::debug;

/// Everything the dashboard remembers between commands. Nothing here
/// outlives the process.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Session {
    profile: Option<UserProfile>,
    last_term: Option<String>,
    edit_requested: bool,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn profile(&self) -> Option<&UserProfile> {
        self.profile.as_ref()
    }

    pub fn has_profile(&self) -> bool {
        self.profile.is_some()
    }

    /// Stores a submitted profile, replacing any earlier one.
    pub fn save_profile(&mut self, profile: UserProfile) {
        debug!(name = %profile.name, "Saving profile");
        self.profile = Some(profile);
        self.edit_requested = false;
    }

    pub fn request_edit(&mut self) {
        self.edit_requested = true;
    }

    /// Drops a pending edit, keeping the saved profile as it was.
    pub fn cancel_edit(&mut self) {
        self.edit_requested = false;
    }

    /// True when the profile form should be shown instead of recommendations.
    pub fn needs_form(&self) -> bool {
        self.profile.is_none() || self.edit_requested
    }

    pub fn last_term(&self) -> Option<&str> {
        self.last_term.as_deref()
    }

    pub fn record_search(&mut self, term: &str) {
        self.last_term = Some(term.to_string());
    }

    /// Resolves the term to display: a fresh query wins, otherwise the last
    /// searched one. Blank queries count as no query.
    pub fn resolve_term(&mut self, query: Option<&str>) -> Option<String> {
        match query.map(str::trim).filter(|q| !q.is_empty()) {
            Some(q) => {
                self.record_search(q);
                Some(q.to_string())
            }
            None => self.last_term.clone(),
        }
    }

    /// Forgets the profile, the last search and any pending edit.
    pub fn reset(&mut self) {
        debug!("Resetting session");
        *self = Session::default();
    }
}
