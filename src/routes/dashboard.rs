use actix_web::{web, HttpRequest, HttpResponse, Result};
use askama::Template;
use serde::Deserialize;

use crate::{
    auth::bearer_token,
    dashboard::DashboardShell,
    routes::customer::redirect_to_login,
    templates::render,
};

#[derive(Clone, Debug)]
struct NavItem {
    id: &'static str,
    label: &'static str,
    href: &'static str,
    active: bool,
}

#[derive(Template)]
#[template(path = "dashboard.html")]
struct DashboardTemplate {
    nav: Vec<NavItem>,
    active_section: String,
    sidebar_open: bool,
}

#[derive(Deserialize)]
struct DashboardQuery {
    section: Option<String>,
    /// Reported by the client so narrow screens get the sidebar closed
    /// after navigating.
    viewport: Option<u32>,
    sidebar: Option<String>,
}

const NAV_SECTIONS: [(&str, &str, &str); 3] = [
    ("home", "Home", "/dashboard?section=home"),
    ("appointments", "Appointments", "/dashboard?section=appointments"),
    ("history", "History", "/dashboard?section=history"),
];

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/dashboard").route(web::get().to(dashboard)));
}

async fn dashboard(req: HttpRequest, query: web::Query<DashboardQuery>) -> Result<HttpResponse> {
    if bearer_token(&req).is_none() {
        return Ok(redirect_to_login());
    }

    let query = query.into_inner();
    let mut shell = DashboardShell::new();
    if query.sidebar.as_deref() == Some("open") {
        shell.toggle_sidebar();
    }
    if let Some(section) = query.section.as_deref() {
        shell.handle_navigate(section, query.viewport.unwrap_or(u32::MAX));
    }

    let active = shell.active_section();
    let nav = NAV_SECTIONS
        .iter()
        .map(|(id, label, href)| NavItem {
            id,
            label,
            href,
            active: *id == active,
        })
        .collect();

    Ok(render(DashboardTemplate {
        nav,
        active_section: active,
        sidebar_open: shell.sidebar_open,
    }))
}
