use actix_web::http::StatusCode;
use actix_web::http::header::ContentType;
use actix_web::{App, test};
use corporate_site::configure;
use corporate_site::models::config::ServerConfig;
use corporate_site::repository::DieselRepository;
use corporate_site::uploads::UploadStorage;
use serde_json::{Value, json};
use tempfile::TempDir;

mod common;

const BOUNDARY: &str = "----corporate-site-test-boundary";

enum Part<'a> {
    Text(&'a str, &'a str),
    File(&'a str, &'a str, &'a str, &'a [u8]),
}

fn multipart(parts: &[Part<'_>]) -> (String, Vec<u8>) {
    let mut body = Vec::new();
    for part in parts {
        body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
        match part {
            Part::Text(name, value) => {
                body.extend_from_slice(
                    format!("Content-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n")
                        .as_bytes(),
                );
            }
            Part::File(name, file_name, content_type, bytes) => {
                body.extend_from_slice(
                    format!(
                        "Content-Disposition: form-data; name=\"{name}\"; filename=\"{file_name}\"\r\nContent-Type: {content_type}\r\n\r\n"
                    )
                    .as_bytes(),
                );
                body.extend_from_slice(bytes);
                body.extend_from_slice(b"\r\n");
            }
        }
    }
    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
    (format!("multipart/form-data; boundary={BOUNDARY}"), body)
}

struct Site {
    _db: common::TestDb,
    uploads: TempDir,
    repo: DieselRepository,
    storage: UploadStorage,
}

impl Site {
    fn new(name: &str) -> Self {
        let db = common::TestDb::new(name);
        let uploads = tempfile::tempdir().unwrap();
        let repo = DieselRepository::new(db.pool());
        let storage = UploadStorage::new(uploads.path());
        Self {
            _db: db,
            uploads,
            repo,
            storage,
        }
    }

    fn config(&self) -> ServerConfig {
        ServerConfig {
            address: "127.0.0.1".into(),
            port: 0,
            database_url: ":memory:".into(),
            upload_dir: self.uploads.path().to_string_lossy().into_owned(),
            max_upload_size: 1024 * 1024,
            default_page_size: 2,
        }
    }

    fn file_exists(&self, public_path: &str) -> bool {
        self.storage
            .resolve(public_path)
            .map(|path| path.exists())
            .unwrap_or(false)
    }
}

macro_rules! app {
    ($site:expr) => {
        test::init_service(App::new().configure(|cfg| {
            configure(
                cfg,
                $site.repo.clone(),
                $site.storage.clone(),
                $site.config(),
            )
        }))
        .await
    };
}

#[actix_web::test]
async fn test_header_links_crud() {
    let site = Site::new("test_header_links_crud.db");
    let app = app!(site);

    let req = test::TestRequest::post()
        .uri("/api/header")
        .set_json(json!({"lang": "en", "label": "Home", "url": "/", "sort_order": 1}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let created: Value = test::read_body_json(resp).await;
    let id = created["id"].as_i64().unwrap();

    let req = test::TestRequest::get().uri("/api/header?lang=en").to_request();
    let links: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(links.as_array().unwrap().len(), 1);

    // Arabic is the default language.
    let req = test::TestRequest::get().uri("/api/header").to_request();
    let links: Value = test::call_and_read_body_json(&app, req).await;
    assert!(links.as_array().unwrap().is_empty());

    let req = test::TestRequest::put()
        .uri(&format!("/api/header/{id}"))
        .set_json(json!({"label": "Start", "url": "#top"}))
        .to_request();
    let updated: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(updated["label"], "Start");
    assert_eq!(updated["lang"], "en");

    let req = test::TestRequest::delete()
        .uri(&format!("/api/header/{id}"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert!(body["message"].is_string());

    let req = test::TestRequest::delete()
        .uri(&format!("/api/header/{id}"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_invalid_requests_are_bad_requests() {
    let site = Site::new("test_invalid_requests.db");
    let app = app!(site);

    let req = test::TestRequest::get().uri("/api/services?lang=fr").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert!(body["message"].is_string());

    let req = test::TestRequest::post()
        .uri("/api/statistics")
        .insert_header(ContentType::json())
        .set_payload("{\"label\": ")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let req = test::TestRequest::post()
        .uri("/api/contacts")
        .set_json(json!({"name": "Sam", "email": "not-an-email", "message": "Hi"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let req = test::TestRequest::put()
        .uri("/api/story/0")
        .set_json(json!({"title": "Story", "content": "Text"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let (content_type, body) = multipart(&[Part::Text("content", "No title")]);
    let req = test::TestRequest::post()
        .uri("/api/blogs")
        .insert_header(("content-type", content_type))
        .set_payload(body)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let req = test::TestRequest::get().uri("/api/blogs/999").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_blog_uploads_follow_record_lifecycle() {
    let site = Site::new("test_blog_uploads.db");
    let app = app!(site);

    let (content_type, body) = multipart(&[
        Part::Text("lang", "en"),
        Part::Text("title", "Opening"),
        Part::Text("content", "<p>We opened</p>"),
        Part::File("image", "cover.png", "image/png", b"\x89PNGcover"),
        Part::File("additional_images", "one.jpg", "image/jpeg", b"one"),
        Part::File("additional_images", "two.jpg", "image/jpeg", b"two"),
    ]);
    let req = test::TestRequest::post()
        .uri("/api/blogs")
        .insert_header(("content-type", content_type))
        .set_payload(body)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let blog: Value = test::read_body_json(resp).await;
    let id = blog["id"].as_i64().unwrap();
    let cover = blog["image"].as_str().unwrap().to_string();
    assert!(cover.starts_with("/uploads/"));
    assert!(site.file_exists(&cover));
    assert_eq!(blog["additional_images"].as_array().unwrap().len(), 2);

    let req = test::TestRequest::get().uri(&cover).to_request();
    let served = test::call_and_read_body(&app, req).await;
    assert_eq!(&served[..], b"\x89PNGcover");

    let (content_type, body) = multipart(&[
        Part::Text("title", "Opening day"),
        Part::Text("content", "<p>We opened</p>"),
        Part::File("image", "new.png", "image/png", b"\x89PNGnew"),
    ]);
    let req = test::TestRequest::put()
        .uri(&format!("/api/blogs/{id}"))
        .insert_header(("content-type", content_type))
        .set_payload(body)
        .to_request();
    let updated: Value = test::call_and_read_body_json(&app, req).await;
    let new_cover = updated["image"].as_str().unwrap().to_string();
    assert_ne!(new_cover, cover);
    assert!(!site.file_exists(&cover));
    assert!(site.file_exists(&new_cover));
    // No gallery in the request keeps the stored one.
    assert_eq!(updated["additional_images"], blog["additional_images"]);

    let req = test::TestRequest::delete()
        .uri(&format!("/api/blogs/{id}"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert!(!site.file_exists(&new_cover));
    assert!(site.storage.list().unwrap().is_empty());
}

#[actix_web::test]
async fn test_unsupported_upload_is_rejected_without_leftovers() {
    let site = Site::new("test_unsupported_upload.db");
    let app = app!(site);

    let (content_type, body) = multipart(&[
        Part::Text("title", "Bridge"),
        Part::Text("description", "Steel"),
        Part::File("image", "plan.pdf", "application/pdf", b"%PDF"),
    ]);
    let req = test::TestRequest::post()
        .uri("/api/projects")
        .insert_header(("content-type", content_type))
        .set_payload(body)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert!(site.storage.list().unwrap().is_empty());
}

#[actix_web::test]
async fn test_project_listing_and_background() {
    let site = Site::new("test_project_listing.db");
    let app = app!(site);

    for title in ["Bridge", "Tower", "Harbor"] {
        let (content_type, body) = multipart(&[
            Part::Text("lang", "en"),
            Part::Text("title", title),
            Part::Text("description", "Built on time"),
        ]);
        let req = test::TestRequest::post()
            .uri("/api/projects")
            .insert_header(("content-type", content_type))
            .set_payload(body)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);
    }

    let req = test::TestRequest::get().uri("/api/projects?lang=en").to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.headers().get("X-Total-Count").is_none());
    let all: Value = test::read_body_json(resp).await;
    assert_eq!(all.as_array().unwrap().len(), 3);

    let req = test::TestRequest::get()
        .uri("/api/projects?lang=en&page=1")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.headers().get("X-Total-Count").unwrap(), "3");
    let page: Value = test::read_body_json(resp).await;
    assert_eq!(page.as_array().unwrap().len(), 2);

    let req = test::TestRequest::get()
        .uri("/api/projects?lang=EN&page=2")
        .to_request();
    let last: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(last.as_array().unwrap().len(), 1);

    let req = test::TestRequest::get().uri("/api/projects?lang=").to_request();
    let arabic: Value = test::call_and_read_body_json(&app, req).await;
    assert!(arabic.as_array().unwrap().is_empty());

    let req = test::TestRequest::get()
        .uri(&format!("/api/projects?lang=en&page={}", usize::MAX))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert!(body["message"].is_string());

    let req = test::TestRequest::get().uri("/api/projects/background").to_request();
    let background: Value = test::call_and_read_body_json(&app, req).await;
    assert!(background["image"].is_null());

    let (content_type, body) =
        multipart(&[Part::File("image", "bg.webp", "image/webp", b"RIFFbg")]);
    let req = test::TestRequest::put()
        .uri("/api/projects/background")
        .insert_header(("content-type", content_type))
        .set_payload(body)
        .to_request();
    let background: Value = test::call_and_read_body_json(&app, req).await;
    let first = background["image"].as_str().unwrap().to_string();
    assert!(first.ends_with(".webp"));

    let (content_type, body) = multipart(&[Part::File("image", "bg.png", "image/png", b"png")]);
    let req = test::TestRequest::put()
        .uri("/api/projects/background")
        .insert_header(("content-type", content_type))
        .set_payload(body)
        .to_request();
    let background: Value = test::call_and_read_body_json(&app, req).await;
    assert!(site.file_exists(background["image"].as_str().unwrap()));
    assert!(!site.file_exists(&first));
}

#[actix_web::test]
async fn test_company_intro_gallery() {
    let site = Site::new("test_company_intro_gallery.db");
    let app = app!(site);

    let req = test::TestRequest::get().uri("/api/company-intro?lang=en").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let req = test::TestRequest::put()
        .uri("/api/company-intro?lang=en")
        .set_json(json!({"headline": "Building tomorrow", "description": "Since 1990"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let mut paths = Vec::new();
    for name in ["a.png", "b.png"] {
        let (content_type, body) = multipart(&[Part::File("image", name, "image/png", b"png")]);
        let req = test::TestRequest::post()
            .uri("/api/company-intro/image?lang=en")
            .insert_header(("content-type", content_type))
            .set_payload(body)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);
        let intro: Value = test::read_body_json(resp).await;
        paths = intro["images"]
            .as_array()
            .unwrap()
            .iter()
            .map(|p| p.as_str().unwrap().to_string())
            .collect();
    }
    assert_eq!(paths.len(), 2);

    let req = test::TestRequest::delete()
        .uri("/api/company-intro/image/0?lang=en")
        .to_request();
    let intro: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(intro["images"], json!([paths[1]]));
    assert!(!site.file_exists(&paths[0]));

    let req = test::TestRequest::delete()
        .uri("/api/company-intro/image/5?lang=en")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_feature_items_are_appended() {
    let site = Site::new("test_feature_items.db");
    let app = app!(site);

    let req = test::TestRequest::post()
        .uri("/api/features")
        .set_json(json!({"lang": "ar", "title": "الجودة", "items": ["أولا", "ثانيا"]}))
        .to_request();
    let section: Value = test::call_and_read_body_json(&app, req).await;
    let id = section["id"].as_i64().unwrap();

    let req = test::TestRequest::post()
        .uri(&format!("/api/features/{id}/item"))
        .set_json(json!({"content": "ثالثا"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let item: Value = test::read_body_json(resp).await;
    assert_eq!(item["sort_order"], 2);

    let req = test::TestRequest::get().uri("/api/features").to_request();
    let sections: Value = test::call_and_read_body_json(&app, req).await;
    let items = sections[0]["items"].as_array().unwrap();
    assert_eq!(items.len(), 3);
    assert_eq!(items[2]["content"], "ثالثا");

    let req = test::TestRequest::post()
        .uri("/api/features/999/item")
        .set_json(json!({"content": "Orphan"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
