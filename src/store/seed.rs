//! Where the activity catalog comes from when the service starts.

use std::path::Path;

use serde::Deserialize;
use tracing::info;

use super::{Activity, Catalog, StoreResult};

/// Shape of a TOML catalog file: an `[activities]` table keyed by activity name.
#[derive(Deserialize)]
struct CatalogFile {
    activities: Catalog,
}

pub fn load_catalog_file(path: impl AsRef<Path>) -> StoreResult<Catalog> {
    let path = path.as_ref();
    info!(
        "{:<20} - Loading the activity catalog from {}",
        "catalog seed",
        path.display()
    );
    let content = std::fs::read_to_string(path)?;
    parse_catalog(&content)
}

pub fn parse_catalog(content: &str) -> StoreResult<Catalog> {
    let file: CatalogFile = toml::from_str(content)?;
    Ok(file.activities)
}

/// The catalog the school starts every term with.
pub fn default_catalog() -> Catalog {
    let seed: [(&str, &str, &str, u32, &[&str]); 9] = [
        (
            "Chess Club",
            "Learn strategies and compete in chess tournaments",
            "Fridays, 3:30 PM - 5:00 PM",
            12,
            &["michael@mergington.edu", "daniel@mergington.edu"],
        ),
        (
            "Programming Class",
            "Learn programming fundamentals and build software projects",
            "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
            20,
            &["emma@mergington.edu", "sophia@mergington.edu"],
        ),
        (
            "Gym Class",
            "Physical education and sports activities",
            "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
            30,
            &["john@mergington.edu", "olivia@mergington.edu"],
        ),
        (
            "Basketball Team",
            "Practice and compete in inter-school basketball games",
            "Wednesdays and Fridays, 4:00 PM - 5:30 PM",
            15,
            &[],
        ),
        (
            "Soccer Club",
            "Train together and play friendly soccer matches",
            "Tuesdays and Thursdays, 4:00 PM - 5:30 PM",
            22,
            &[],
        ),
        (
            "Art Club",
            "Explore painting, drawing and sculpture",
            "Thursdays, 3:30 PM - 5:00 PM",
            15,
            &[],
        ),
        (
            "Drama Club",
            "Act, direct and stage the school plays",
            "Mondays and Wednesdays, 4:00 PM - 5:30 PM",
            20,
            &[],
        ),
        (
            "Math Club",
            "Solve challenging problems and prepare for math olympiads",
            "Tuesdays, 3:30 PM - 4:30 PM",
            10,
            &[],
        ),
        (
            "Debate Team",
            "Sharpen public speaking and argumentation skills",
            "Fridays, 4:00 PM - 5:30 PM",
            16,
            &[],
        ),
    ];

    seed.into_iter()
        .map(
            |(name, description, schedule, max_participants, participants)| {
                let activity = Activity {
                    description: description.to_string(),
                    schedule: schedule.to_string(),
                    max_participants,
                    participants: participants.iter().map(|p| p.to_string()).collect(),
                };
                (name.to_string(), activity)
            },
        )
        .collect()
}
