//! Navigation bar and breadcrumb renderers
//!
//! Both are re-rendered from scratch after every routing step, whatever the
//! resolved view. The nav bar highlights the current section; a subject page
//! highlights its owning semester.

use super::{RenderContext, RenderError};
use crate::core::router::ViewState;
use askama::Template;

/// Navigation entry for the game page, unrelated to the catalog
const GAME_PAGE: &str = "tic-tac-toe.html";

#[derive(Template)]
#[template(path = "nav_bar.html")]
struct NavBarTemplate {
    links: Vec<NavLink>,
    game_href: &'static str,
}

struct NavLink {
    href: String,
    label: String,
    active: bool,
}

#[derive(Template)]
#[template(path = "breadcrumbs.html")]
struct BreadcrumbsTemplate {
    crumbs: Vec<Crumb>,
}

struct Crumb {
    href: Option<String>,
    label: String,
}

/// Render the navigation bar: home, every semester, and the game link
///
/// # Errors
/// Returns an error if template rendering fails
pub fn nav_bar(ctx: &RenderContext<'_>) -> Result<String, RenderError> {
    let active_semester = ctx.view.semester_index();

    let mut links = vec![NavLink {
        href: ViewState::Home.fragment(),
        label: "🏠 Home".to_string(),
        active: ctx.view == ViewState::Home,
    }];

    for (si, sem) in ctx.catalog.semesters.iter().enumerate() {
        links.push(NavLink {
            href: ViewState::Semester(si).fragment(),
            label: sem.name.clone(),
            active: active_semester == Some(si),
        });
    }

    NavBarTemplate {
        links,
        game_href: GAME_PAGE,
    }
    .render()
}

/// Render the breadcrumb trail for the current view
///
/// Home is always present and linked. Semester and subject views append the
/// owning semester as a link; subject views end with the unlinked subject
/// name, for exactly three segments.
///
/// # Errors
/// Returns an error if template rendering fails
pub fn breadcrumbs(ctx: &RenderContext<'_>) -> Result<String, RenderError> {
    let mut crumbs = vec![Crumb {
        href: Some(ViewState::Home.fragment()),
        label: "Home".to_string(),
    }];

    if let Some(si) = ctx.view.semester_index() {
        if let Some(sem) = ctx.catalog.semester(si) {
            crumbs.push(Crumb {
                href: Some(ViewState::Semester(si).fragment()),
                label: sem.name.clone(),
            });
        }
    }

    if let ViewState::Subject(si, ji) = ctx.view {
        if let Some(subj) = ctx.catalog.subject(si, ji) {
            crumbs.push(Crumb {
                href: None,
                label: subj.name.clone(),
            });
        }
    }

    BreadcrumbsTemplate { crumbs }.render()
}
