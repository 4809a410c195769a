//! Application shell: document, routes, navigation and the router

pub mod document;
pub mod navigation;
pub mod router;
pub mod routes;

pub use document::{Document, EyeIcon, Modal};
pub use navigation::{Navigator, RecordingNavigator};
pub use router::{ActivePage, Router};
pub use routes::{RoutePath, RouteState, render_path, render_route};
