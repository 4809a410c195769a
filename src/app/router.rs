//! Router: renders the page of a route and builds its container
//!
//! Data routes render a loading page first, then the data or an error page.
//! The container of the current page stays reachable through
//! [`Router::active_page`] until the next navigation.

use crate::app::document::Document;
use crate::app::navigation::Navigator;
use crate::app::routes::RoutePath;
use crate::config::FormConfig;
use crate::containers::{Bills, Collaborators, Dashboard, NewBill};
use crate::core::{BilledError, LocalStorage, Store};
use crate::views::{
    ActiveIcon, BillsUiProps, DashboardUiProps, NewBillUiProps, bills_ui, dashboard_ui,
    error_page, new_bill_ui,
};
use async_trait::async_trait;
use std::sync::{Arc, Mutex, PoisonError, Weak};

/// Container of the page currently shown
#[derive(Clone)]
pub enum ActivePage {
    Bills(Arc<Bills>),
    NewBill(Arc<NewBill>),
    Dashboard(Arc<Dashboard>),
}

struct RouterInner {
    document: Arc<Document>,
    store: Option<Arc<dyn Store>>,
    local_storage: Arc<dyn LocalStorage>,
    form: FormConfig,
    active: Mutex<Option<ActivePage>>,
}

#[derive(Clone)]
pub struct Router {
    inner: Arc<RouterInner>,
}

/// Navigator handed to containers; weak so pages do not keep the router alive
struct RouterHandle(Weak<RouterInner>);

#[async_trait]
impl Navigator for RouterHandle {
    async fn navigate(&self, path: RoutePath) {
        let Some(inner) = self.0.upgrade() else {
            tracing::warn!(route = %path, "navigation after router was dropped");
            return;
        };

        if let Err(e) = (Router { inner }).on_navigate(path).await {
            tracing::error!(route = %path, error = %e, "navigation failed");
        }
    }
}

impl Router {
    pub fn new(
        document: Arc<Document>,
        store: Option<Arc<dyn Store>>,
        local_storage: Arc<dyn LocalStorage>,
    ) -> Self {
        Self::with_form_config(document, store, local_storage, FormConfig::default())
    }

    /// Router whose new bill pages use `form` defaults
    pub fn with_form_config(
        document: Arc<Document>,
        store: Option<Arc<dyn Store>>,
        local_storage: Arc<dyn LocalStorage>,
        form: FormConfig,
    ) -> Self {
        Self {
            inner: Arc::new(RouterInner {
                document,
                store,
                local_storage,
                form,
                active: Mutex::new(None),
            }),
        }
    }

    pub fn document(&self) -> &Arc<Document> {
        &self.inner.document
    }

    /// Navigation function for containers built outside the router
    pub fn navigator(&self) -> Arc<dyn Navigator> {
        Arc::new(RouterHandle(Arc::downgrade(&self.inner)))
    }

    fn collaborators(&self) -> Collaborators {
        Collaborators {
            document: self.inner.document.clone(),
            on_navigate: self.navigator(),
            store: self.inner.store.clone(),
            local_storage: self.inner.local_storage.clone(),
        }
    }

    fn set_active(&self, page: Option<ActivePage>) {
        *self
            .inner
            .active
            .lock()
            .unwrap_or_else(PoisonError::into_inner) = page;
    }

    pub fn active_page(&self) -> Option<ActivePage> {
        self.inner
            .active
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn bills_page(&self) -> Option<Arc<Bills>> {
        match self.active_page()? {
            ActivePage::Bills(bills) => Some(bills),
            _ => None,
        }
    }

    pub fn new_bill_page(&self) -> Option<Arc<NewBill>> {
        match self.active_page()? {
            ActivePage::NewBill(new_bill) => Some(new_bill),
            _ => None,
        }
    }

    pub fn dashboard_page(&self) -> Option<Arc<Dashboard>> {
        match self.active_page()? {
            ActivePage::Dashboard(dashboard) => Some(dashboard),
            _ => None,
        }
    }

    /// Navigate to a raw path; unknown paths render an error page
    pub async fn on_navigate_path(&self, path: &str) -> Result<(), BilledError> {
        match path.parse::<RoutePath>() {
            Ok(route) => self.on_navigate(route).await,
            Err(e) => {
                tracing::warn!(path = %path, "unknown route");
                self.set_active(None);
                let height = self.inner.document.ui().layout_height;
                self.inner
                    .document
                    .set_body(error_page(&e.to_string(), ActiveIcon::None, height)?);
                Ok(())
            }
        }
    }

    /// Navigate to `path`
    pub async fn on_navigate(&self, path: RoutePath) -> Result<(), BilledError> {
        let document = &self.inner.document;
        let layout_height = document.ui().layout_height;

        tracing::info!(route = %path, "navigating");
        document.push_location(path);

        match path {
            RoutePath::Bills => {
                document.set_body(bills_ui(&BillsUiProps {
                    loading: true,
                    layout_height,
                    ..BillsUiProps::default()
                })?);

                let bills = Arc::new(Bills::new(self.collaborators()));
                self.set_active(Some(ActivePage::Bills(bills.clone())));

                let props = match bills.get_bills().await {
                    Ok(data) => BillsUiProps {
                        data,
                        layout_height,
                        ..BillsUiProps::default()
                    },
                    Err(e) => BillsUiProps {
                        error: Some(e.to_string()),
                        layout_height,
                        ..BillsUiProps::default()
                    },
                };
                document.set_body(bills_ui(&props)?);
            }
            RoutePath::NewBill => {
                document.set_body(new_bill_ui(&NewBillUiProps {
                    layout_height,
                    ..NewBillUiProps::default()
                })?);

                let new_bill =
                    NewBill::new(self.collaborators()).with_form_config(&self.inner.form);
                self.set_active(Some(ActivePage::NewBill(Arc::new(new_bill))));
            }
            RoutePath::Dashboard => {
                document.set_body(dashboard_ui(&DashboardUiProps {
                    loading: true,
                    layout_height,
                    ..DashboardUiProps::default()
                })?);

                let dashboard = Arc::new(Dashboard::new(self.collaborators()));
                self.set_active(Some(ActivePage::Dashboard(dashboard.clone())));

                let props = match dashboard.get_bills_all_users().await {
                    Ok(data) => DashboardUiProps {
                        data,
                        layout_height,
                        ..DashboardUiProps::default()
                    },
                    Err(e) => DashboardUiProps {
                        error: Some(e.to_string()),
                        layout_height,
                        ..DashboardUiProps::default()
                    },
                };
                document.set_body(dashboard_ui(&props)?);
            }
        }

        Ok(())
    }
}

#[async_trait]
impl Navigator for Router {
    async fn navigate(&self, path: RoutePath) {
        if let Err(e) = self.on_navigate(path).await {
            tracing::error!(route = %path, error = %e, "navigation failed");
        }
    }
}
