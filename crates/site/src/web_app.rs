use desktop_runtime::{parse_open_param, DeepLinkState, DesktopProvider, DesktopShell};
use leptos::*;
use leptos_meta::*;
use leptos_router::*;
use platform_host_web::build_host_services;

#[component]
pub fn SiteApp() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Personal Homepage" />
        <Meta name="description" content="A classic Mac OS desktop-style personal homepage." />

        <Router>
            <main class="site-root">
                <Routes>
                    <Route path="" view=DesktopEntry />
                    <Route path="/*any" view=DesktopEntry />
                </Routes>
            </main>
        </Router>
    }
}

/// Boot deep link read from the `open` query parameter.
fn boot_deep_link(open: Option<&str>) -> DeepLinkState {
    open.map(parse_open_param).unwrap_or_default()
}

#[component]
pub fn DesktopEntry() -> impl IntoView {
    let query = use_query_map();
    let deep_link = query.with_untracked(|map| boot_deep_link(map.get("open").map(String::as_str)));

    view! {
        <DesktopProvider host_services=build_host_services() deep_link=deep_link>
            <DesktopShell />
        </DesktopProvider>
    }
}

#[cfg(test)]
mod tests {
    use desktop_runtime::{AppId, DeepLinkError};
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn missing_open_param_opens_nothing() {
        assert!(boot_deep_link(None).is_empty());
    }

    #[test]
    fn open_param_becomes_boot_deep_link() {
        let deep_link = boot_deep_link(Some("about,paint"));
        assert_eq!(deep_link.open, vec![AppId::About]);
        assert_eq!(
            deep_link.rejected,
            vec![DeepLinkError::UnknownApp("paint".to_string())]
        );
    }
}
