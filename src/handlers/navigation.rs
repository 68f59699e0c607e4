use axum::{
    extract::Query,
    response::Response,
    routing::get,
    Router,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::common::success_response;
use crate::errors::ServiceError;
use crate::AppState;

/// One entry of the navigation shell. The icon is an identifier the client
/// shell maps to its icon set.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct Section {
    pub name: &'static str,
    pub path: &'static str,
    pub icon: &'static str,
}

/// The fixed, ordered section list rendered by the shell.
pub const SECTIONS: &[Section] = &[
    Section {
        name: "ダッシュボード",
        path: "/dashboard",
        icon: "layout-dashboard",
    },
    Section {
        name: "得意先",
        path: "/customers",
        icon: "users",
    },
    Section {
        name: "仕入先",
        path: "/suppliers",
        icon: "building-2",
    },
    Section {
        name: "案件",
        path: "/projects",
        icon: "folder-kanban",
    },
    Section {
        name: "見積",
        path: "/quotes",
        icon: "file-text",
    },
    Section {
        name: "受注",
        path: "/sales-orders",
        icon: "shopping-cart",
    },
    Section {
        name: "請求",
        path: "/invoices",
        icon: "receipt",
    },
    Section {
        name: "納品書",
        path: "/delivery-notes",
        icon: "package",
    },
    Section {
        name: "送付ログ",
        path: "/delivery-logs",
        icon: "send",
    },
];

/// The section matching the given location, by exact path.
pub fn active_section(path: &str) -> Option<&'static Section> {
    SECTIONS.iter().find(|s| s.path == path)
}

#[derive(Debug, Default, Deserialize)]
struct NavigationQuery {
    /// Current client location; the matching section is flagged active.
    #[serde(default)]
    path: Option<String>,
}

#[derive(Debug, Serialize)]
struct SectionResponse {
    name: &'static str,
    path: &'static str,
    icon: &'static str,
    active: bool,
}

async fn get_navigation(Query(query): Query<NavigationQuery>) -> Result<Response, ServiceError> {
    let current = query.path.as_deref().unwrap_or("");
    let sections: Vec<SectionResponse> = SECTIONS
        .iter()
        .map(|s| SectionResponse {
            name: s.name,
            path: s.path,
            icon: s.icon,
            active: s.path == current,
        })
        .collect();
    Ok(success_response(sections))
}

pub fn routes() -> Router<AppState> {
    Router::new().route("/", get(get_navigation))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn section_order_is_fixed() {
        let paths: Vec<_> = SECTIONS.iter().map(|s| s.path).collect();
        assert_eq!(
            paths,
            [
                "/dashboard",
                "/customers",
                "/suppliers",
                "/projects",
                "/quotes",
                "/sales-orders",
                "/invoices",
                "/delivery-notes",
                "/delivery-logs",
            ]
        );
    }

    #[test]
    fn active_section_matches_exact_path() {
        let section = active_section("/customers").expect("section exists");
        assert_eq!(section.name, "得意先");
    }

    #[test]
    fn nested_paths_do_not_match() {
        assert!(active_section("/customers/new").is_none());
        assert!(active_section("").is_none());
        assert!(active_section("/unknown").is_none());
    }
}
