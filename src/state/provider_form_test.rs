use super::*;

fn filled_rows() -> DomainRows {
    let mut rows = DomainRows::default();
    rows.set_domain(0, "d-1".to_owned());
    rows.set_expertise(0, "expert".to_owned());
    rows
}

// =============================================================
// Row list invariants
// =============================================================

#[test]
fn starts_with_one_empty_row() {
    let rows = DomainRows::default();
    assert_eq!(rows.len(), 1);
    assert!(!rows.rows()[0].is_complete());
}

#[test]
fn push_appends_an_empty_row() {
    let mut rows = filled_rows();
    rows.push_row();
    assert_eq!(rows.len(), 2);
    assert!(!rows.rows()[1].is_complete());
}

#[test]
fn last_row_cannot_be_removed() {
    let mut rows = DomainRows::default();
    assert!(!rows.can_remove());
    assert!(!rows.remove_row(0));
    assert_eq!(rows.len(), 1);
}

#[test]
fn any_row_may_be_removed_while_more_than_one_remains() {
    let mut rows = filled_rows();
    rows.push_row();
    assert!(rows.can_remove());
    assert!(rows.remove_row(0));
    assert_eq!(rows.len(), 1);
    // Back down to one: the remove control goes away again.
    assert!(!rows.can_remove());
}

#[test]
fn out_of_range_removal_is_refused() {
    let mut rows = filled_rows();
    rows.push_row();
    assert!(!rows.remove_row(5));
    assert_eq!(rows.len(), 2);
}

#[test]
fn reset_returns_to_a_single_empty_row() {
    let mut rows = filled_rows();
    rows.push_row();
    rows.reset();
    assert_eq!(rows, DomainRows::default());
}

// =============================================================
// Payload assembly
// =============================================================

#[test]
fn payload_filters_incomplete_pairs() {
    let mut rows = filled_rows();
    rows.push_row();
    rows.set_domain(1, "d-2".to_owned());
    // Row 1 has a domain but no expertise level.
    let payload = rows.payload().unwrap();
    assert_eq!(payload.len(), 1);
    assert_eq!(payload[0].domaine_id, "d-1");
}

#[test]
fn all_incomplete_rows_yield_absent_marker_not_empty_list() {
    let mut rows = DomainRows::default();
    rows.push_row();
    rows.set_domain(1, "d-2".to_owned());
    assert_eq!(rows.payload(), None);
}

#[test]
fn payload_preserves_row_order() {
    let mut rows = filled_rows();
    rows.push_row();
    rows.set_domain(1, "d-2".to_owned());
    rows.set_expertise(1, "debutant".to_owned());
    let payload = rows.payload().unwrap();
    assert_eq!(payload[0].domaine_id, "d-1");
    assert_eq!(payload[1].domaine_id, "d-2");
}

// =============================================================
// Request validation
// =============================================================

#[test]
fn build_request_assembles_complete_form() {
    let req = build_request("Plumbing repairs", "weekdays 9-17", "35.5", 2, &filled_rows()).unwrap();
    assert_eq!(req.description, "Plumbing repairs");
    assert!((req.tarif_horaire - 35.5).abs() < f64::EPSILON);
    assert_eq!(req.order, 2);
    assert_eq!(req.domaines.as_ref().map(Vec::len), Some(1));
}

#[test]
fn build_request_rejects_blank_description() {
    assert!(build_request("  ", "weekdays", "35", 0, &filled_rows()).is_err());
}

#[test]
fn build_request_rejects_blank_availability() {
    assert!(build_request("Plumbing", "", "35", 0, &filled_rows()).is_err());
}

#[test]
fn build_request_rejects_unparseable_rate() {
    assert!(build_request("Plumbing", "weekdays", "abc", 0, &filled_rows()).is_err());
}

#[test]
fn build_request_rejects_non_positive_rate() {
    assert!(build_request("Plumbing", "weekdays", "0", 0, &filled_rows()).is_err());
    assert!(build_request("Plumbing", "weekdays", "-3", 0, &filled_rows()).is_err());
}

#[test]
fn build_request_sends_absent_domaines_when_none_complete() {
    let req = build_request("Plumbing", "weekdays", "35", 0, &DomainRows::default()).unwrap();
    assert_eq!(req.domaines, None);
    let raw = serde_json::to_value(&req).unwrap();
    assert!(raw.get("domaines").unwrap().is_null());
}

// =============================================================
// Constants
// =============================================================

#[test]
fn expertise_levels_are_distinct() {
    assert_eq!(EXPERTISE_LEVELS.len(), 3);
    assert_ne!(EXPERTISE_LEVELS[0], EXPERTISE_LEVELS[1]);
    assert_ne!(EXPERTISE_LEVELS[1], EXPERTISE_LEVELS[2]);
}

#[test]
fn form_status_default_is_idle() {
    assert_eq!(FormStatus::default(), FormStatus::Idle);
}
