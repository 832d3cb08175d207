//! Route definitions.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A storefront view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Route {
    /// Catalog and cart.
    Home,
    /// Admin sign-in. Not guarded.
    AdminLogin,
    /// Catalog management.
    AdminDashboard,
}

/// Static description of a route, as shown in route listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RouteMeta {
    pub route: Route,
    pub name: &'static str,
    pub path: &'static str,
    pub title: &'static str,
}

impl Route {
    /// All routes in declaration order.
    pub fn all() -> [Route; 3] {
        [Route::Home, Route::AdminLogin, Route::AdminDashboard]
    }

    /// Path relative to the router base.
    pub fn path(&self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::AdminLogin => "/admin",
            Route::AdminDashboard => "/admin/dashboard",
        }
    }

    /// Route name used for named navigation.
    pub fn name(&self) -> &'static str {
        match self {
            Route::Home => "home",
            Route::AdminLogin => "login",
            Route::AdminDashboard => "dashboard",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Route::Home => "Loja",
            Route::AdminLogin => "Login do Administrador",
            Route::AdminDashboard => "Painel Administrativo",
        }
    }

    pub fn is_admin(&self) -> bool {
        matches!(self, Route::AdminLogin | Route::AdminDashboard)
    }

    pub fn meta(&self) -> RouteMeta {
        RouteMeta {
            route: *self,
            name: self.name(),
            path: self.path(),
            title: self.title(),
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::all().into_iter().find(|r| r.name() == name)
    }

    /// Match a path relative to the router base. A single trailing slash is
    /// ignored and an empty path is home.
    pub fn resolve(path: &str) -> Option<Self> {
        if path.is_empty() || path == "/" {
            return Some(Route::Home);
        }
        let path = path.strip_suffix('/').unwrap_or(path);
        Self::all()
            .into_iter()
            .filter(|r| *r != Route::Home)
            .find(|r| r.path() == path)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
