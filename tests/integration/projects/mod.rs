//! Projects API integration tests over a content directory

use axum::http::StatusCode;
use serde_json::json;

use crate::common::{get_json, get_raw, slugs, sources, TestApp};

mod test_list_projects {
    use super::*;

    #[tokio::test]
    async fn test_empty_content_root_lists_nothing() {
        let app = TestApp::new().unwrap();
        let router = app.router().unwrap();

        let (status, body) = get_json(&router, "/api/projects").await.unwrap();
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!([]));
    }

    #[tokio::test]
    async fn test_missing_content_root_is_created() {
        let app = TestApp::new().unwrap();
        let root = app.root().join("public").join("projects");
        let app = app.with_var("CONTENT_ROOT", &root.display().to_string());
        let router = app.router().unwrap();

        let (status, body) = get_json(&router, "/api/projects").await.unwrap();
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!([]));
        assert!(root.is_dir());
    }

    #[tokio::test]
    async fn test_projects_sorted_and_empty_projects_dropped() {
        let app = TestApp::new().unwrap();
        app.add_project("Voovue", &["Eyewear branding-01.jpeg"]).unwrap();
        app.add_project("Alochayya", &["1.png", "2.png"]).unwrap();
        app.add_project("notes", &["readme.txt"]).unwrap();
        let router = app.router().unwrap();

        let (status, body) = get_json(&router, "/api/projects").await.unwrap();
        assert_eq!(status, StatusCode::OK);
        assert_eq!(slugs(&body), vec!["Alochayya", "Voovue"]);

        let first = &body[0];
        assert_eq!(first["title"], "Alochayya");
        assert_eq!(first["thumbnail"], "/projects/Alochayya/1.png");
        assert!(first.get("description").is_none());
    }
}

mod test_get_project {
    use super::*;

    #[tokio::test]
    async fn test_assets_in_natural_order() {
        let app = TestApp::new().unwrap();
        app.add_project("So-FI", &["10.gif", "2.png", "1.gif", "11.png", "clip.mp4"])
            .unwrap();
        let router = app.router().unwrap();

        let (status, body) = get_json(&router, "/api/projects/So-FI").await.unwrap();
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["title"], "So FI");
        assert_eq!(
            sources(&body),
            vec![
                "/projects/So-FI/1.gif",
                "/projects/So-FI/2.png",
                "/projects/So-FI/10.gif",
                "/projects/So-FI/11.png",
                "/projects/So-FI/clip.mp4",
            ]
        );
        assert_eq!(body["assets"][0]["type"], "image");
        assert_eq!(body["assets"][4]["type"], "video");
        assert_eq!(body["assets"][0]["filename"], "1.gif");
        assert_eq!(body["thumbnail"], "/projects/So-FI/1.gif");
    }

    #[tokio::test]
    async fn test_manifest_videos_are_merged_by_position() {
        let app = TestApp::new().unwrap();
        app.add_project("Alochayya", &["1.png", "2.png", "3.png"]).unwrap();
        app.add_manifest(
            "Alochayya",
            &json!({
                "videos": [
                    { "url": "https://www.youtube.com/watch?v=YbD_oaI4DH8", "caption": "Project Video" },
                    { "url": "https://vimeo.com/76979871", "position": 0.5 }
                ]
            }),
        )
        .unwrap();
        let router = app.router().unwrap();

        let (status, body) = get_json(&router, "/api/projects/Alochayya").await.unwrap();
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            sources(&body),
            vec![
                "/projects/Alochayya/1.png",
                "https://player.vimeo.com/video/76979871",
                "/projects/Alochayya/2.png",
                "/projects/Alochayya/3.png",
                "https://www.youtube.com/embed/YbD_oaI4DH8",
            ]
        );

        let video = &body["assets"][4];
        assert_eq!(video["type"], "youtube");
        assert_eq!(video["caption"], "Project Video");
        assert!(video.get("filename").is_none());
        assert!(video.get("order").is_none());
    }

    #[tokio::test]
    async fn test_malformed_manifest_degrades_to_files() {
        let app = TestApp::new().unwrap();
        let dir = app.add_project("PLUGD", &["1.png"]).unwrap();
        std::fs::write(dir.join("videos.json"), "{\"videos\": 42}").unwrap();
        let router = app.router().unwrap();

        let (status, body) = get_json(&router, "/api/projects/PLUGD").await.unwrap();
        assert_eq!(status, StatusCode::OK);
        assert_eq!(sources(&body), vec!["/projects/PLUGD/1.png"]);
    }

    #[tokio::test]
    async fn test_unknown_slug_is_404() {
        let app = TestApp::new().unwrap();
        app.add_project("Ektara", &["Presentation.png"]).unwrap();
        let router = app.router().unwrap();

        let (status, body) = get_json(&router, "/api/projects/unknown-slug").await.unwrap();
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body["error"].is_string());
    }

    #[tokio::test]
    async fn test_project_with_only_unrecognized_files_is_404() {
        let app = TestApp::new().unwrap();
        app.add_project("drafts", &["notes.txt"]).unwrap();
        let router = app.router().unwrap();

        let (status, _) = get_json(&router, "/api/projects/drafts").await.unwrap();
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_empty_slug_is_400() {
        let app = TestApp::new().unwrap();
        let router = app.router().unwrap();

        let (status, body) = get_json(&router, "/api/projects/").await.unwrap();
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Project slug is required");
    }

    #[tokio::test]
    async fn test_traversal_slug_is_404() {
        let app = TestApp::new().unwrap();
        std::fs::write(app.root().join("secret.png"), b"outside").unwrap();
        let inner = app.root().join("inner");
        std::fs::create_dir(&inner).unwrap();
        let app = app.with_var("CONTENT_ROOT", &inner.display().to_string());
        let router = app.router().unwrap();

        let (status, _) = get_json(&router, "/api/projects/..").await.unwrap();
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, _) = get_json(&router, "/api/projects/..%2F..").await.unwrap();
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}

mod test_static_files {
    use super::*;

    #[tokio::test]
    async fn test_asset_src_is_served() {
        let app = TestApp::new().unwrap();
        app.add_project("S-connect", &["1.png"]).unwrap();
        let router = app.router().unwrap();

        let (_, body) = get_json(&router, "/api/projects/S-connect").await.unwrap();
        let src = body["assets"][0]["src"].as_str().unwrap().to_string();

        let (status, bytes) = get_raw(&router, &src).await.unwrap();
        assert_eq!(status, StatusCode::OK);
        assert_eq!(bytes, b"fixture 1.png");
    }

    #[tokio::test]
    async fn test_custom_asset_prefix() {
        let app = TestApp::new()
            .unwrap()
            .with_var("ASSET_URL_PREFIX", "/media/");
        app.add_project("Rootprint", &["portfolio rootprint-01.png"]).unwrap();
        let router = app.router().unwrap();

        let (_, body) = get_json(&router, "/api/projects/Rootprint").await.unwrap();
        assert_eq!(
            body["thumbnail"],
            "/media/Rootprint/portfolio rootprint-01.png"
        );

        let (status, _) = get_raw(&router, "/media/Rootprint/portfolio%20rootprint-01.png")
            .await
            .unwrap();
        assert_eq!(status, StatusCode::OK);
    }
}

mod test_revalidation {
    use super::*;

    #[tokio::test]
    async fn test_cached_listing_ignores_changes_within_window() {
        let app = TestApp::new()
            .unwrap()
            .with_var("REVALIDATE_SECONDS", "3600");
        app.add_project("Ektara", &["1.png"]).unwrap();
        let router = app.router().unwrap();

        let (_, body) = get_json(&router, "/api/projects").await.unwrap();
        assert_eq!(slugs(&body), vec!["Ektara"]);

        app.add_project("Voovue", &["1.png"]).unwrap();

        let (_, body) = get_json(&router, "/api/projects").await.unwrap();
        assert_eq!(slugs(&body), vec!["Ektara"]);

        let (status, _) = get_json(&router, "/api/projects/Voovue").await.unwrap();
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_uncached_listing_reflects_changes() {
        let app = TestApp::new().unwrap();
        app.add_project("Ektara", &["1.png"]).unwrap();
        let router = app.router().unwrap();

        get_json(&router, "/api/projects").await.unwrap();
        app.add_project("Voovue", &["1.png"]).unwrap();

        let (_, body) = get_json(&router, "/api/projects").await.unwrap();
        assert_eq!(slugs(&body), vec!["Ektara", "Voovue"]);
    }
}
