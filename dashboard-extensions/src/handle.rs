//! Publishes the live [`DashboardApp`] so plugins can be reloaded without
//! mutating a composition readers may be holding.

use crate::app::DashboardApp;
use crate::error::ExtensionError;
use crate::plugin::Plugin;
use arc_swap::ArcSwap;
use std::sync::Arc;
use tracing::{info, warn};

/// Holds the currently published composition.
///
/// Readers take an `Arc` snapshot without locking and keep using it for as
/// long as they like; a reload builds a complete new app and swaps the
/// pointer.
#[derive(Debug)]
pub struct ExtensionHandle {
    current: ArcSwap<DashboardApp>,
}

impl ExtensionHandle {
    pub fn new(app: DashboardApp) -> Self {
        Self {
            current: ArcSwap::from_pointee(app),
        }
    }

    /// The composition readers should use right now.
    pub fn current(&self) -> Arc<DashboardApp> {
        self.current.load_full()
    }

    /// Replaces the published composition, returning the previous one.
    pub fn publish(&self, app: DashboardApp) -> Arc<DashboardApp> {
        self.current.swap(Arc::new(app))
    }

    /// Composes `external` behind the built-in plugin and publishes it. On a
    /// configuration error the previous composition stays live.
    pub fn reload(&self, external: Vec<Plugin>) -> Result<Arc<DashboardApp>, ExtensionError> {
        match DashboardApp::new(external) {
            Ok(app) => {
                info!(plugins = app.plugins().len(), "publishing reloaded extensions");
                let next = Arc::new(app);
                self.current.store(Arc::clone(&next));
                Ok(next)
            }
            Err(e) => {
                warn!("extension reload rejected, keeping current composition: {}", e);
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::module::{LinkModule, Linkable};
    use dashboard_types::CustomFieldModel;

    fn linking(name: &str, target: &str) -> Plugin {
        Plugin::builder(name)
            .link(LinkModule::new().with(CustomFieldModel::Order, vec![Linkable::one(target)]))
            .build()
            .unwrap()
    }

    #[test]
    fn snapshot_survives_reload() {
        let handle = ExtensionHandle::new(DashboardApp::new(vec![linking("a", "customer")]).unwrap());
        let before = handle.current();

        handle.reload(vec![linking("b", "region")]).unwrap();

        assert_eq!(before.link_fields(CustomFieldModel::Order, "id"), "id,+customer.*");
        assert_eq!(handle.current().link_fields(CustomFieldModel::Order, "id"), "id,+region.*");
    }

    #[test]
    fn publish_returns_previous() {
        let handle = ExtensionHandle::new(DashboardApp::new(Vec::new()).unwrap());
        let previous = handle.publish(DashboardApp::new(vec![linking("a", "customer")]).unwrap());
        assert_eq!(previous.plugins().len(), 1);
        assert_eq!(handle.current().plugins().len(), 2);
    }

    #[test]
    fn failed_reload_keeps_previous() {
        let handle = ExtensionHandle::new(DashboardApp::new(vec![linking("a", "customer")]).unwrap());
        let result = handle.reload(vec![linking("dup", "x"), linking("dup", "y")]);
        assert!(matches!(result, Err(ExtensionError::DuplicatePlugin(_))));
        assert_eq!(handle.current().plugins(), ["dashboard".to_string(), "a".to_string()]);
    }

    #[test]
    fn readers_on_other_threads_see_whole_compositions() {
        let handle = Arc::new(ExtensionHandle::new(DashboardApp::new(Vec::new()).unwrap()));
        let readers: Vec<_> = (0..4)
            .map(|_| {
                let handle = Arc::clone(&handle);
                std::thread::spawn(move || {
                    for _ in 0..200 {
                        let fields = handle.current().link_fields(CustomFieldModel::Order, "id");
                        assert!(fields == "id" || fields == "id,+customer.*", "torn read: {fields}");
                    }
                })
            })
            .collect();

        for _ in 0..50 {
            handle.reload(vec![linking("a", "customer")]).unwrap();
            handle.reload(Vec::new()).unwrap();
        }
        for reader in readers {
            reader.join().unwrap();
        }
    }
}
