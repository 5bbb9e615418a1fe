use std::{net::SocketAddr, sync::OnceLock};

use anyhow::Result;
use mergington::{
    config::{AppConfig, CatalogConfig, NetConfig, StaticConfig},
    init_dbg_tracing,
    store::Catalog,
    App, AppState,
};
use reqwest::{redirect, Response};

/// Set `TEST_LOG` to see the server logs while the tests run.
fn init_test_subscriber() {
    static SUBSCRIBER: OnceLock<()> = OnceLock::new();
    SUBSCRIBER.get_or_init(|| {
        if std::env::var("TEST_LOG").is_ok() {
            init_dbg_tracing();
        }
    });
}

/// Spaces in activity names have to be percent-encoded in the path.
pub fn encode_activity(name: &str) -> String {
    name.replace(' ', "%20")
}

pub struct TestApp {
    pub addr: SocketAddr,
    pub http_client: reqwest::Client,
    pub app_state: AppState,
}

impl TestApp {
    /// Spawns the app on a random port with a fresh copy of the default catalog.
    pub async fn spawn() -> Result<Self> {
        Self::spawn_with_catalog(CatalogConfig::default()).await
    }

    /// Trying to bind *port 0* will trigger an OS scan for an available port.
    pub async fn spawn_with_catalog(catalog: CatalogConfig) -> Result<Self> {
        init_test_subscriber();

        let config = AppConfig {
            net_config: NetConfig {
                host: [127, 0, 0, 1],
                app_port: 0,
            },
            static_config: StaticConfig {
                dir: "static".to_string(),
            },
            catalog,
        };

        let app = App::build_from_config(&config).await?;
        let addr = app.listener.local_addr()?;
        let app_state = app.app_state.clone();

        tokio::spawn(mergington::serve(app));

        let http_client = reqwest::Client::builder()
            .redirect(redirect::Policy::none())
            .build()?;

        Ok(TestApp {
            addr,
            http_client,
            app_state,
        })
    }

    pub async fn get_activities(&self) -> Result<Catalog> {
        let catalog = self
            .http_client
            .get(format!("http://{}/activities", self.addr))
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        Ok(catalog)
    }

    /// Activity names in the order the server serialized them.
    pub async fn get_activity_names(&self) -> Result<Vec<String>> {
        Ok(self.get_activities().await?.into_keys().collect())
    }

    pub async fn post_signup(&self, activity: &str, email: &str) -> Result<Response> {
        let res = self
            .http_client
            .post(format!(
                "http://{}/activities/{}/signup",
                self.addr,
                encode_activity(activity)
            ))
            .query(&[("email", email)])
            .send()
            .await?;

        Ok(res)
    }

    pub async fn delete_unregister(&self, activity: &str, email: &str) -> Result<Response> {
        let res = self
            .http_client
            .delete(format!(
                "http://{}/activities/{}/unregister",
                self.addr,
                encode_activity(activity)
            ))
            .query(&[("email", email)])
            .send()
            .await?;

        Ok(res)
    }
}
