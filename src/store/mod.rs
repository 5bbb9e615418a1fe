//! The in-memory activity catalog and the operations students can perform on it.

mod seed;

pub use seed::{default_catalog, load_catalog_file, parse_catalog};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use tracing::debug;

/// Activities keyed by their (unique, case-sensitive) name, in seed order.
pub type Catalog = IndexMap<String, Activity>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    pub description: String,
    pub schedule: String,
    /// Informational only, signups past this number are still accepted.
    pub max_participants: u32,
    /// Participant emails in signup order.
    #[serde(default)]
    pub participants: Vec<String>,
}

impl Activity {
    pub fn is_signed_up(&self, email: &str) -> bool {
        self.participants.iter().any(|p| p == email)
    }
}

/// Shared activity catalog.
/// Mutations take the write lock so concurrent signups can't lose each other's updates.
#[derive(Debug, Default)]
pub struct ActivityStore {
    activities: RwLock<Catalog>,
}

impl ActivityStore {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            activities: RwLock::new(catalog),
        }
    }

    /// A snapshot of the whole catalog.
    pub async fn list(&self) -> Catalog {
        self.activities.read().await.clone()
    }

    pub async fn get(&self, activity_name: &str) -> Option<Activity> {
        self.activities.read().await.get(activity_name).cloned()
    }

    /// Appends `email` to the participants of `activity_name`.
    pub async fn signup(&self, activity_name: &str, email: &str) -> StoreResult<()> {
        let mut activities = self.activities.write().await;
        let activity = activities
            .get_mut(activity_name)
            .ok_or_else(|| StoreError::ActivityNotFound(activity_name.to_string()))?;

        if activity.is_signed_up(email) {
            return Err(StoreError::AlreadySignedUp {
                activity: activity_name.to_string(),
                email: email.to_string(),
            });
        }

        activity.participants.push(email.to_string());
        debug!(
            "{:<12} - {email} joined '{activity_name}' ({}/{})",
            "signup",
            activity.participants.len(),
            activity.max_participants
        );

        Ok(())
    }

    /// Removes `email` from the participants of `activity_name`, keeping the order of the rest.
    pub async fn unregister(&self, activity_name: &str, email: &str) -> StoreResult<()> {
        let mut activities = self.activities.write().await;
        let activity = activities
            .get_mut(activity_name)
            .ok_or_else(|| StoreError::ActivityNotFound(activity_name.to_string()))?;

        let position = activity
            .participants
            .iter()
            .position(|p| p == email)
            .ok_or_else(|| StoreError::NotSignedUp {
                activity: activity_name.to_string(),
                email: email.to_string(),
            })?;

        activity.participants.remove(position);
        debug!("{:<12} - {email} left '{activity_name}'", "unregister");

        Ok(())
    }
}

// ###################################
// ->   ERROR
// ###################################
pub type StoreResult<T> = core::result::Result<T, StoreError>;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("activity not found: {0}")]
    ActivityNotFound(String),
    #[error("{email} is already signed up for '{activity}'")]
    AlreadySignedUp { activity: String, email: String },
    #[error("{email} is not signed up for '{activity}'")]
    NotSignedUp { activity: String, email: String },

    #[error("failed to read the catalog seed file: {0}")]
    SeedRead(#[from] std::io::Error),
    #[error("failed to parse the catalog seed file: {0}")]
    SeedParse(#[from] toml::de::Error),
}
