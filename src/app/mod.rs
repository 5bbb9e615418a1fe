use std::{path::PathBuf, sync::Arc};

use derive_more::Deref;
use tokio::net::TcpListener;
use tracing::info;

use crate::{
    config::AppConfig,
    store::{self, ActivityStore},
    Result,
};

// ###################################
// ->  Structs
// ###################################
pub struct App {
    pub app_state: AppState,
    pub listener: TcpListener,
}
impl App {
    pub fn new(app_state: AppState, listener: TcpListener) -> Self {
        App {
            app_state,
            listener,
        }
    }

    pub async fn build_from_config(config: &AppConfig) -> Result<Self> {
        let catalog = match &config.catalog.seed_file {
            Some(seed_file) => store::load_catalog_file(seed_file)?,
            None => store::default_catalog(),
        };
        info!(
            "{:<20} - {} activities",
            "Catalog loaded:",
            catalog.len()
        );

        let app_state = AppState::new(
            ActivityStore::new(catalog),
            PathBuf::from(&config.static_config.dir),
        );

        let listener = TcpListener::bind(config.net_config.socket_addr()).await?;
        let addr = listener.local_addr()?;
        info!("{:<20} - {}", "Listening on:", addr);

        Ok(App::new(app_state, listener))
    }
}

pub struct InternalState {
    pub store: ActivityStore,
    pub static_dir: PathBuf,
}

/// Application state containing all global data.
/// It implements `Deref` to easily access the fields on `InternalState`
/// Uses an `Arc` so it can be cloned around.
#[derive(Clone, Deref)]
pub struct AppState(Arc<InternalState>);

impl AppState {
    pub fn new(store: ActivityStore, static_dir: PathBuf) -> Self {
        AppState(Arc::new(InternalState { store, static_dir }))
    }
}
