//! Provider onboarding form model.
//!
//! DESIGN
//! ======
//! The dynamic (domain, expertise) pair list is an ordered container whose
//! mutation methods enforce the invariants — at least one row always
//! remains, and incomplete pairs never reach the payload — so the render
//! layer stays a dumb projection of `DomainRows`.

#[cfg(test)]
#[path = "provider_form_test.rs"]
mod provider_form_test;

use crate::net::types::{DomainChoice, ProviderCreateRequest};

/// Expertise levels on the wire, in display order.
pub const EXPERTISE_LEVELS: [&str; 3] = ["debutant", "intermediaire", "expert"];

/// Delay before the post-success reset and redirect, long enough for the
/// success message to be read.
pub const SUCCESS_REDIRECT_DELAY_MS: u32 = 1500;

/// Fallback shown when the server gives no failure message.
pub const GENERIC_FAILURE_MESSAGE: &str = "Could not create your provider profile. Please try again.";

/// One editable (domain, expertise level) pair.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DomainRow {
    pub domain_id: String,
    pub expertise: String,
}

impl DomainRow {
    /// A pair is complete when both sides are chosen.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.domain_id.is_empty() && !self.expertise.is_empty()
    }
}

/// The ordered, dynamically sized list of domain rows.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DomainRows {
    rows: Vec<DomainRow>,
}

impl Default for DomainRows {
    /// Starts with a single empty row.
    fn default() -> Self {
        Self {
            rows: vec![DomainRow::default()],
        }
    }
}

impl DomainRows {
    #[must_use]
    pub fn rows(&self) -> &[DomainRow] {
        &self.rows
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Append a fresh empty row.
    pub fn push_row(&mut self) {
        self.rows.push(DomainRow::default());
    }

    /// Whether any row may currently be removed.
    #[must_use]
    pub fn can_remove(&self) -> bool {
        self.rows.len() > 1
    }

    /// Remove the row at `index`. Refuses (returns `false`) when it is the
    /// last remaining row or the index is out of range.
    pub fn remove_row(&mut self, index: usize) -> bool {
        if !self.can_remove() || index >= self.rows.len() {
            return false;
        }
        self.rows.remove(index);
        true
    }

    pub fn set_domain(&mut self, index: usize, domain_id: String) {
        if let Some(row) = self.rows.get_mut(index) {
            row.domain_id = domain_id;
        }
    }

    pub fn set_expertise(&mut self, index: usize, expertise: String) {
        if let Some(row) = self.rows.get_mut(index) {
            row.expertise = expertise;
        }
    }

    /// The payload value for `domaines`: complete pairs only, and `None`
    /// (wire `null`) rather than an empty list when nothing is complete.
    #[must_use]
    pub fn payload(&self) -> Option<Vec<DomainChoice>> {
        let complete: Vec<DomainChoice> = self
            .rows
            .iter()
            .filter(|row| row.is_complete())
            .map(|row| DomainChoice {
                domaine_id: row.domain_id.clone(),
                niveau: row.expertise.clone(),
            })
            .collect();
        if complete.is_empty() { None } else { Some(complete) }
    }

    /// Back to the initial single empty row.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Submission status of the onboarding form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum FormStatus {
    #[default]
    Idle,
    Submitting,
    Success,
    Failed(String),
}

/// Validate the scalar fields and assemble the creation request.
///
/// # Errors
///
/// Returns a user-facing message when a required field is blank or the
/// hourly rate does not parse as a positive number.
pub fn build_request(
    description: &str,
    disponibilite: &str,
    tarif_horaire: &str,
    order: i64,
    rows: &DomainRows,
) -> Result<ProviderCreateRequest, &'static str> {
    if description.trim().is_empty() {
        return Err("Describe the services you offer.");
    }
    if disponibilite.trim().is_empty() {
        return Err("Tell clients when you are available.");
    }
    let tarif: f64 = tarif_horaire
        .trim()
        .parse()
        .map_err(|_| "Enter a valid hourly rate.")?;
    if tarif <= 0.0 {
        return Err("Enter a valid hourly rate.");
    }
    Ok(ProviderCreateRequest {
        description: description.trim().to_owned(),
        disponibilite: disponibilite.trim().to_owned(),
        tarif_horaire: tarif,
        order,
        domaines: rows.payload(),
    })
}
