//! Route paths and the static path → page mapping

use crate::core::BilledError;
use crate::views::{
    ActiveIcon, BillsUiProps, DashboardUiProps, NewBillUiProps, bills_ui, dashboard_ui,
    error_page, new_bill_ui,
};
use std::fmt;
use std::str::FromStr;

/// Pages reachable through navigation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoutePath {
    Bills,
    NewBill,
    Dashboard,
}

impl RoutePath {
    pub fn as_str(&self) -> &'static str {
        match self {
            RoutePath::Bills => "#employee/bills",
            RoutePath::NewBill => "#employee/bill/new",
            RoutePath::Dashboard => "#admin/dashboard",
        }
    }
}

impl fmt::Display for RoutePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RoutePath {
    type Err = BilledError;

    fn from_str(path: &str) -> Result<Self, Self::Err> {
        match path {
            "#employee/bills" => Ok(RoutePath::Bills),
            "#employee/bill/new" => Ok(RoutePath::NewBill),
            "#admin/dashboard" => Ok(RoutePath::Dashboard),
            other => Err(BilledError::UnknownRoute(other.to_string())),
        }
    }
}

/// State passed to a page when rendering a route
#[derive(Debug, Clone, Default)]
pub struct RouteState {
    pub loading: bool,
    pub error: Option<String>,
}

/// Render the page of `path` with no data
pub fn render_route(path: RoutePath, state: &RouteState) -> Result<String, BilledError> {
    match path {
        RoutePath::Bills => bills_ui(&BillsUiProps {
            loading: state.loading,
            error: state.error.clone(),
            ..BillsUiProps::default()
        }),
        RoutePath::NewBill => new_bill_ui(&NewBillUiProps::default()),
        RoutePath::Dashboard => dashboard_ui(&DashboardUiProps {
            loading: state.loading,
            error: state.error.clone(),
            ..DashboardUiProps::default()
        }),
    }
}

/// Render the page for a raw path; unknown paths get an error page
pub fn render_path(path: &str, state: &RouteState, layout_height: u32) -> Result<String, BilledError> {
    match path.parse::<RoutePath>() {
        Ok(route) => render_route(route, state),
        Err(e) => error_page(&e.to_string(), ActiveIcon::None, layout_height),
    }
}
