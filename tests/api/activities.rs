use anyhow::Result;
use mergington::config::CatalogConfig;
use reqwest::StatusCode;
use serde_json::Value;

use crate::helpers::TestApp;

#[tokio::test]
async fn activities_returns_a_json_object() -> Result<()> {
    let app = TestApp::spawn().await?;

    let res = app
        .http_client
        .get(format!("http://{}/activities", app.addr))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);

    let body: Value = res.json().await?;
    let activities = body.as_object().expect("catalog is a JSON object");
    assert!(activities.contains_key("Chess Club"));

    for (name, activity) in activities {
        for field in ["description", "schedule", "max_participants"] {
            assert!(activity.get(field).is_some(), "'{name}' is missing '{field}'");
        }
        assert!(
            activity["participants"].is_array(),
            "'{name}' participants is not a list"
        );
    }

    Ok(())
}

#[tokio::test]
async fn activities_initial_participants() -> Result<()> {
    let app = TestApp::spawn().await?;

    let catalog = app.get_activities().await?;
    let chess = &catalog["Chess Club"];

    assert_eq!(chess.participants.len(), 2);
    assert!(chess.is_signed_up("michael@mergington.edu"));
    assert!(chess.is_signed_up("daniel@mergington.edu"));

    Ok(())
}

#[tokio::test]
async fn every_app_starts_from_the_seed_catalog() -> Result<()> {
    let first = TestApp::spawn().await?;
    first
        .post_signup("Art Club", "painter@mergington.edu")
        .await?
        .error_for_status()?;

    let second = TestApp::spawn().await?;
    let catalog = second.get_activities().await?;
    assert!(catalog["Art Club"].participants.is_empty());

    Ok(())
}

#[tokio::test]
async fn activities_keep_seed_order() -> Result<()> {
    let app = TestApp::spawn().await?;

    let names = app.get_activity_names().await?;
    assert_eq!(
        names,
        [
            "Chess Club",
            "Programming Class",
            "Gym Class",
            "Basketball Team",
            "Soccer Club",
            "Art Club",
            "Drama Club",
            "Math Club",
            "Debate Team",
        ]
    );

    Ok(())
}

#[tokio::test]
async fn activities_raw_json_starts_with_the_first_seeded_activity() -> Result<()> {
    let app = TestApp::spawn().await?;

    let body = app
        .http_client
        .get(format!("http://{}/activities", app.addr))
        .send()
        .await?
        .text()
        .await?;

    assert!(
        body.starts_with(r#"{"Chess Club":"#),
        "unexpected start of body: {}",
        &body[..body.len().min(40)]
    );

    Ok(())
}

#[tokio::test]
async fn seed_file_replaces_the_builtin_catalog() -> Result<()> {
    let app = TestApp::spawn_with_catalog(CatalogConfig {
        seed_file: Some("config/catalog.example.toml".to_string()),
    })
    .await?;

    let names = app.get_activity_names().await?;
    assert_eq!(names, ["Robotics Club", "Chess Club"]);

    let catalog = app.get_activities().await?;
    assert_eq!(catalog["Robotics Club"].max_participants, 8);
    assert!(catalog["Robotics Club"].participants.is_empty());

    app.post_signup("Robotics Club", "builder@mergington.edu")
        .await?
        .error_for_status()?;

    Ok(())
}
