//! Navigation table for the Vitrine storefront.
//!
//! The storefront has three views:
//!
//! ```text
//! /                 -> home       (catalog and cart)
//! /admin            -> login      (admin sign-in)
//! /admin/dashboard  -> dashboard  (catalog management)
//! ```
//!
//! # Usage
//!
//! ```rust
//! use vitrine_router::prelude::*;
//!
//! let router = Router::new("/loja/");
//! assert_eq!(router.href(Route::AdminDashboard), "/loja/admin/dashboard");
//! assert_eq!(router.resolve("/loja/admin/").unwrap(), Route::AdminLogin);
//! ```

pub mod prelude;
mod route;

pub use route::{Route, RouteMeta};

use thiserror::Error;

/// Errors from resolving a location.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RouteError {
    /// No view is mapped to the path.
    #[error("No route matches path: {0}")]
    NotFound(String),

    /// The path lies outside the configured base.
    #[error("Path {path} is outside base {base}")]
    OutsideBase { path: String, base: String },

    /// No view has the given name.
    #[error("Unknown route name: {0}")]
    UnknownName(String),
}

/// Maps views to URLs under a base path (the history base URL).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Router {
    base: String,
}

impl Router {
    /// Create a router mounted at `base`. Leading and trailing slashes are
    /// normalized, so `"loja"`, `"/loja"` and `"/loja/"` are equivalent.
    pub fn new(base: impl AsRef<str>) -> Self {
        let trimmed = base.as_ref().trim_matches('/');
        let base = if trimmed.is_empty() {
            String::new()
        } else {
            format!("/{}", trimmed)
        };
        Self { base }
    }

    /// Base path without trailing slash; empty when mounted at the root.
    pub fn base(&self) -> &str {
        &self.base
    }

    /// Full URL path for a view.
    pub fn href(&self, route: Route) -> String {
        match route {
            Route::Home if self.base.is_empty() => "/".to_string(),
            Route::Home => format!("{}/", self.base),
            _ => format!("{}{}", self.base, route.path()),
        }
    }

    /// Resolve a location (path with optional query or fragment) to a view.
    pub fn resolve(&self, location: &str) -> Result<Route, RouteError> {
        let path = strip_query_and_fragment(location);
        let relative = if self.base.is_empty() {
            path
        } else {
            match path.strip_prefix(self.base.as_str()) {
                Some(rest) if rest.is_empty() || rest.starts_with('/') => rest,
                _ => {
                    return Err(RouteError::OutsideBase {
                        path: path.to_string(),
                        base: self.base.clone(),
                    })
                }
            }
        };

        let route = Route::resolve(relative);
        tracing::trace!(location, ?route, "resolved location");
        route.ok_or_else(|| RouteError::NotFound(path.to_string()))
    }

    /// Full URL path for a view looked up by name.
    pub fn href_for_name(&self, name: &str) -> Result<String, RouteError> {
        Route::from_name(name)
            .map(|r| self.href(r))
            .ok_or_else(|| RouteError::UnknownName(name.to_string()))
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::new("/")
    }
}

fn strip_query_and_fragment(location: &str) -> &str {
    let end = location.find(['?', '#']).unwrap_or(location.len());
    &location[..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_router_hrefs() {
        let router = Router::default();
        assert_eq!(router.href(Route::Home), "/");
        assert_eq!(router.href(Route::AdminLogin), "/admin");
        assert_eq!(router.href(Route::AdminDashboard), "/admin/dashboard");
    }

    #[test]
    fn test_base_normalization() {
        assert_eq!(Router::new("loja").base(), "/loja");
        assert_eq!(Router::new("/loja/").base(), "/loja");
        assert_eq!(Router::new("").base(), "");
    }

    #[test]
    fn test_resolve_with_base() {
        let router = Router::new("/loja");
        assert_eq!(router.resolve("/loja").unwrap(), Route::Home);
        assert_eq!(router.resolve("/loja/").unwrap(), Route::Home);
        assert_eq!(router.resolve("/loja/admin").unwrap(), Route::AdminLogin);
        assert_eq!(
            router.resolve("/loja/admin/dashboard?tab=estoque").unwrap(),
            Route::AdminDashboard
        );
    }

    #[test]
    fn test_resolve_with_base_rejects_double_slash() {
        let router = Router::new("/loja");
        assert_eq!(
            router.resolve("/loja//"),
            Err(RouteError::NotFound("/loja//".to_string()))
        );
    }

    #[test]
    fn test_resolve_outside_base() {
        let router = Router::new("/loja");
        assert!(matches!(
            router.resolve("/lojas/admin"),
            Err(RouteError::OutsideBase { .. })
        ));
    }

    #[test]
    fn test_resolve_unknown() {
        let router = Router::default();
        assert_eq!(
            router.resolve("/produtos#topo"),
            Err(RouteError::NotFound("/produtos".to_string()))
        );
    }

    #[test]
    fn test_href_for_name() {
        let router = Router::default();
        assert_eq!(router.href_for_name("dashboard").unwrap(), "/admin/dashboard");
        assert!(matches!(
            router.href_for_name("checkout"),
            Err(RouteError::UnknownName(_))
        ));
    }
}
