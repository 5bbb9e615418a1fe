use anyhow::Result;
use reqwest::{header::LOCATION, StatusCode};

use crate::helpers::TestApp;

#[tokio::test]
async fn root_redirects_to_static_index() -> Result<()> {
    let app = TestApp::spawn().await?;

    let res = app
        .http_client
        .get(format!("http://{}/", app.addr))
        .send()
        .await?;

    assert_eq!(res.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(
        res.headers().get(LOCATION).map(|v| v.to_str()).transpose()?,
        Some("/static/index.html")
    );

    Ok(())
}

#[tokio::test]
async fn static_front_end_is_served() -> Result<()> {
    let app = TestApp::spawn().await?;

    for (file, needle) in [
        ("index.html", "signup-form"),
        ("app.js", "/activities"),
        ("styles.css", ".activity-card"),
    ] {
        let res = app
            .http_client
            .get(format!("http://{}/static/{file}", app.addr))
            .send()
            .await?;

        assert_eq!(res.status(), StatusCode::OK, "for static/{file}");
        assert!(res.text().await?.contains(needle), "for static/{file}");
    }

    Ok(())
}

#[tokio::test]
async fn missing_static_file_404() -> Result<()> {
    let app = TestApp::spawn().await?;

    let res = app
        .http_client
        .get(format!("http://{}/static/nope.html", app.addr))
        .send()
        .await?;

    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    Ok(())
}
