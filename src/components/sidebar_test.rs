use super::*;

#[test]
fn admin_role_gets_admin_links() {
    assert_eq!(links_for_role("admin"), ADMIN_LINKS);
}

#[test]
fn prestataire_role_gets_provider_links() {
    assert_eq!(links_for_role("prestataire"), PROVIDER_LINKS);
}

#[test]
fn unknown_roles_fall_back_to_user_links() {
    assert_eq!(links_for_role("user"), USER_LINKS);
    assert_eq!(links_for_role("anything"), USER_LINKS);
}

#[test]
fn pane_label_resolves_known_key() {
    assert_eq!(pane_label(PROVIDER_LINKS, "reviews"), "Reviews");
}

#[test]
fn pane_label_falls_back_to_first_link() {
    assert_eq!(pane_label(USER_LINKS, "nope"), "Overview");
}

#[test]
fn link_keys_are_unique_within_each_set() {
    for links in [ADMIN_LINKS, PROVIDER_LINKS, USER_LINKS] {
        for (i, a) in links.iter().enumerate() {
            for b in &links[i + 1..] {
                assert_ne!(a.key, b.key);
            }
        }
    }
}
