//! Prelude for convenient imports.
//!
//! ```rust
//! use vitrine_router::prelude::*;
//! ```

pub use crate::{Route, RouteError, RouteMeta, Router};
