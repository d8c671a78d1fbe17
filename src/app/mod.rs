pub mod serve;

// re-export
pub use serve::serve;

use std::sync::Arc;

use derive_more::Deref;
use tokio::net::TcpListener;
use tracing::info;

use crate::{
    config::{AppConfig, SiteConfig},
    templ_manager::TemplateManager,
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

    /// Loads the templates and binds the listener.
    /// Binding to port `0` lets the OS pick a free port, `App::local_addr` reports it.
    pub async fn build_from_config(config: AppConfig) -> Result<Self> {
        let tm = TemplateManager::init(&config.site_config.templates_glob)?;
        let app_state = AppState::new(tm, config.site_config);

        let listener = TcpListener::bind(config.net_config.socket_addr()).await?;
        let addr = listener.local_addr()?;
        info!("{:<20} - {}", "Listening on:", addr);

        let app = App::new(app_state, listener);
        Ok(app)
    }

    pub fn local_addr(&self) -> Result<std::net::SocketAddr> {
        Ok(self.listener.local_addr()?)
    }
}

pub struct InternalState {
    pub templ_mgr: TemplateManager,
    pub site: SiteConfig,
}

/// Application state containing all global data.
/// It implements `Deref` to easily access the fields on `InternalState`
/// Uses an `Arc` so it can be cloned around.
#[derive(Clone, Deref)]
pub struct AppState(Arc<InternalState>);

impl AppState {
    pub fn new(templ_mgr: TemplateManager, site: SiteConfig) -> Self {
        AppState(Arc::new(InternalState { templ_mgr, site }))
    }
}
