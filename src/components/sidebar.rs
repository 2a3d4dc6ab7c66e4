//! Dashboard sidebar: a navigation shell keyed by an active-tab string.

#[cfg(test)]
#[path = "sidebar_test.rs"]
mod sidebar_test;

use leptos::prelude::*;

/// One sidebar entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SidebarLink {
    pub key: &'static str,
    pub label: &'static str,
}

pub const ADMIN_LINKS: &[SidebarLink] = &[
    SidebarLink { key: "overview", label: "Overview" },
    SidebarLink { key: "users", label: "Users" },
    SidebarLink { key: "providers", label: "Providers" },
    SidebarLink { key: "reports", label: "Reports" },
];

pub const PROVIDER_LINKS: &[SidebarLink] = &[
    SidebarLink { key: "overview", label: "Overview" },
    SidebarLink { key: "services", label: "My services" },
    SidebarLink { key: "reviews", label: "Reviews" },
    SidebarLink { key: "availability", label: "Availability" },
];

pub const USER_LINKS: &[SidebarLink] = &[
    SidebarLink { key: "overview", label: "Overview" },
    SidebarLink { key: "requests", label: "My requests" },
    SidebarLink { key: "settings", label: "Settings" },
];

/// The link set for a role string.
pub fn links_for_role(role: &str) -> &'static [SidebarLink] {
    match role {
        "admin" => ADMIN_LINKS,
        "prestataire" => PROVIDER_LINKS,
        _ => USER_LINKS,
    }
}

/// Display label for an active-tab key, falling back to the first link
/// when the key is not in the set.
pub fn pane_label(links: &'static [SidebarLink], key: &str) -> &'static str {
    links
        .iter()
        .find(|link| link.key == key)
        .or_else(|| links.first())
        .map_or("", |link| link.label)
}

/// Vertical tab list. The active tab is owned by the hosting page; clicks
/// only write back into that signal.
#[component]
pub fn Sidebar(links: &'static [SidebarLink], active_tab: RwSignal<String>) -> impl IntoView {
    view! {
        <nav class="sidebar">
            {links
                .iter()
                .map(|link| {
                    let key = link.key;
                    view! {
                        <button
                            class="sidebar__tab"
                            class:sidebar__tab--active=move || active_tab.get() == key
                            on:click=move |_| active_tab.set(key.to_owned())
                        >
                            {link.label}
                        </button>
                    }
                })
                .collect::<Vec<_>>()}
        </nav>
    }
}
