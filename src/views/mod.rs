//! Page views
//!
//! Every view is a pure function from props to markup. Templates are
//! embedded in the binary and compiled once, on first render.

use crate::core::{BillStatus, BillView, BilledError, EXPENSE_TYPES, NewBillForm, format_status};
use serde::Serialize;
use std::sync::OnceLock;
use tera::{Context, Tera};

/// Height of the vertical navigation bar when nothing else is configured
pub const DEFAULT_LAYOUT_HEIGHT: u32 = 120;

const TEMPLATES: [(&str, &str); 6] = [
    ("vertical_layout.html", include_str!("templates/vertical_layout.html")),
    ("loading.html", include_str!("templates/loading.html")),
    ("error.html", include_str!("templates/error.html")),
    ("bills.html", include_str!("templates/bills.html")),
    ("new_bill.html", include_str!("templates/new_bill.html")),
    ("dashboard.html", include_str!("templates/dashboard.html")),
];

fn templates() -> Result<&'static Tera, BilledError> {
    static ENGINE: OnceLock<Result<Tera, String>> = OnceLock::new();
    ENGINE
        .get_or_init(|| {
            let mut tera = Tera::default();
            tera.add_raw_templates(TEMPLATES)
                .map(|_| tera)
                .map_err(|e| BilledError::from(e).to_string())
        })
        .as_ref()
        .map_err(|message| BilledError::Template(message.clone()))
}

/// Icon highlighted in the vertical navigation bar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveIcon {
    /// Bills list
    Window,
    /// New bill form
    Mail,
    #[default]
    None,
}

impl ActiveIcon {
    fn as_str(&self) -> &'static str {
        match self {
            ActiveIcon::Window => "window",
            ActiveIcon::Mail => "mail",
            ActiveIcon::None => "",
        }
    }
}

fn render(template: &str, active_icon: ActiveIcon, layout_height: u32, mut context: Context) -> Result<String, BilledError> {
    context.insert("active_icon", active_icon.as_str());
    context.insert("layout_height", &layout_height);
    Ok(templates()?.render(template, &context)?)
}

/// Page shown while data is being fetched
pub fn loading_page(active_icon: ActiveIcon, layout_height: u32) -> Result<String, BilledError> {
    render("loading.html", active_icon, layout_height, Context::new())
}

/// Page shown when a page could not be built; `error` is shown verbatim
pub fn error_page(error: &str, active_icon: ActiveIcon, layout_height: u32) -> Result<String, BilledError> {
    let mut context = Context::new();
    context.insert("error", error);
    render("error.html", active_icon, layout_height, context)
}

/// Props of the bills list page
#[derive(Debug, Clone, PartialEq)]
pub struct BillsUiProps {
    pub data: Vec<BillView>,
    pub loading: bool,
    pub error: Option<String>,
    pub layout_height: u32,
}

impl Default for BillsUiProps {
    fn default() -> Self {
        Self {
            data: Vec::new(),
            loading: false,
            error: None,
            layout_height: DEFAULT_LAYOUT_HEIGHT,
        }
    }
}

impl BillsUiProps {
    pub fn with_data(data: Vec<BillView>) -> Self {
        Self {
            data,
            ..Self::default()
        }
    }

    pub fn with_error(error: impl Into<String>) -> Self {
        Self {
            error: Some(error.into()),
            ..Self::default()
        }
    }
}

/// Bills list page: loading, error, or one row per bill in the given order
pub fn bills_ui(props: &BillsUiProps) -> Result<String, BilledError> {
    if props.loading {
        return loading_page(ActiveIcon::Window, props.layout_height);
    }
    if let Some(error) = &props.error {
        return error_page(error, ActiveIcon::Window, props.layout_height);
    }

    let mut context = Context::new();
    context.insert("bills", &props.data);
    render("bills.html", ActiveIcon::Window, props.layout_height, context)
}

/// Props of the new bill page
#[derive(Debug, Clone, PartialEq)]
pub struct NewBillUiProps {
    pub form: NewBillForm,
    pub file_error: String,
    pub layout_height: u32,
}

impl Default for NewBillUiProps {
    fn default() -> Self {
        Self {
            form: NewBillForm::default(),
            file_error: String::new(),
            layout_height: DEFAULT_LAYOUT_HEIGHT,
        }
    }
}

/// New bill form page
pub fn new_bill_ui(props: &NewBillUiProps) -> Result<String, BilledError> {
    let mut context = Context::new();
    context.insert("form", &props.form);
    context.insert("file_error", &props.file_error);
    context.insert("expense_types", &EXPENSE_TYPES);
    render("new_bill.html", ActiveIcon::Mail, props.layout_height, context)
}

/// Props of the admin dashboard page
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardUiProps {
    pub data: Vec<BillView>,
    pub loading: bool,
    pub error: Option<String>,
    pub layout_height: u32,
}

impl Default for DashboardUiProps {
    fn default() -> Self {
        Self {
            data: Vec::new(),
            loading: false,
            error: None,
            layout_height: DEFAULT_LAYOUT_HEIGHT,
        }
    }
}

#[derive(Serialize)]
struct StatusGroup<'a> {
    status: &'static str,
    label: &'static str,
    bills: Vec<&'a BillView>,
}

fn dashboard_label(status: BillStatus) -> &'static str {
    match status {
        BillStatus::Pending => format_status(status),
        BillStatus::Accepted => "Validé",
        BillStatus::Refused => "Refusé",
    }
}

/// Admin dashboard: bills grouped by status
pub fn dashboard_ui(props: &DashboardUiProps) -> Result<String, BilledError> {
    if props.loading {
        return loading_page(ActiveIcon::None, props.layout_height);
    }
    if let Some(error) = &props.error {
        return error_page(error, ActiveIcon::None, props.layout_height);
    }

    let groups: Vec<StatusGroup<'_>> = [BillStatus::Pending, BillStatus::Accepted, BillStatus::Refused]
        .into_iter()
        .map(|status| StatusGroup {
            status: status.as_str(),
            label: dashboard_label(status),
            bills: props.data.iter().filter(|bill| bill.status == status).collect(),
        })
        .collect();

    let mut context = Context::new();
    context.insert("groups", &groups);
    render("dashboard.html", ActiveIcon::None, props.layout_height, context)
}
