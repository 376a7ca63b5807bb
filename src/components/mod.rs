pub mod common;
pub mod nav_bar;
pub mod pyqs_page;
pub mod solution_modal;
pub mod upload_modal;

use dioxus::prelude::*;
use crate::backend::blobs::BlobStore;
use crate::backend::catalog::Catalog;
use crate::backend::config::PortalConfig;
use crate::backend::session::Session;

#[derive(Clone, Copy)]
pub struct AppState {
    pub session: Signal<Session>,
    pub catalog: Signal<Catalog>,
    pub blobs: Signal<BlobStore>, // Uploaded files, keyed by blob reference
    pub config: Signal<PortalConfig>,
}

impl AppState {
    pub fn new(config: &PortalConfig) -> Self {
        Self::with_seed(config, crate::backend::seed_catalog)
    }

    /// Signal initializers only run on the first render, so `seed` builds the catalog once.
    pub fn with_seed(config: &PortalConfig, seed: impl FnOnce(&PortalConfig) -> Catalog) -> Self {
        Self {
            session: use_signal(|| config.session.clone()),
            catalog: use_signal(|| seed(config)),
            blobs: use_signal(BlobStore::new),
            config: use_signal(|| config.clone()),
        }
    }
}
