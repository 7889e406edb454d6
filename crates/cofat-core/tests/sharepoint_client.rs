//! HTTP-level tests for `SharePointClient` against a mock SharePoint site.

use cofat_core::workflow::{delete_item, save_item, DeleteOutcome};
use cofat_core::{
    Attachment, AttachmentDeletion, AttachmentFile, EditBuffer, Error, FormDigest, ItemFields,
    ItemTarget, ListItemApi, PageParameters, RequestContext, SharePointClient,
};
use pretty_assertions::assert_eq;
use wiremock::matchers::{body_bytes, body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const ITEM_PATH: &str = "/_api/web/lists/getbytitle('Actualites')/items(12)";

fn client() -> SharePointClient {
    SharePointClient::new(Some("test-token".to_string())).expect("client should build")
}

fn target(server: &MockServer) -> ItemTarget {
    ItemTarget::new(server.uri(), "Actualites", 12)
}

fn digest() -> FormDigest {
    FormDigest::new("0xDIGEST")
}

async fn mount_contextinfo(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/_api/contextinfo"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "FormDigestTimeoutSeconds": 1800,
            "FormDigestValue": "0xDIGEST",
        })))
        .mount(server)
        .await;
}

#[tokio::test]
async fn request_digest_sends_bearer_token() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/_api/contextinfo"))
        .and(header("Authorization", "Bearer test-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "FormDigestTimeoutSeconds": 1800,
            "FormDigestValue": "0xDIGEST",
        })))
        .expect(1)
        .mount(&server)
        .await;

    let digest = client().request_digest(&server.uri()).await.unwrap();

    assert_eq!(digest.value, "0xDIGEST");
    assert_eq!(digest.timeout_seconds, Some(1800));
}

#[tokio::test]
async fn update_item_merges_with_unconditional_match() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(ITEM_PATH))
        .and(header("X-HTTP-Method", "MERGE"))
        .and(header("IF-MATCH", "*"))
        .and(header("X-RequestDigest", "0xDIGEST"))
        .and(body_json(serde_json::json!({
            "Title": "Titre",
            "Contenu": "Corps",
            "CouleurTexte": "aa",
        })))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    client()
        .update_item(&target(&server), &digest(), &ItemFields::new("Titre", "Corps"))
        .await
        .unwrap();
}

#[tokio::test]
async fn update_item_error_carries_response_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(ITEM_PATH))
        .respond_with(
            ResponseTemplate::new(400).set_body_string("Column 'Contenu' does not exist."),
        )
        .mount(&server)
        .await;

    let error = client()
        .update_item(&target(&server), &digest(), &ItemFields::new("a", "b"))
        .await
        .unwrap_err();

    match error {
        Error::Api { status, detail, .. } => {
            assert_eq!(status, 400);
            assert_eq!(detail, "Column 'Contenu' does not exist.");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn upload_error_keeps_long_response_body() {
    let server = MockServer::start().await;
    let message = format!("{}; the file could not be stored", "x".repeat(300));
    let body = serde_json::json!({
        "odata.error": { "code": "-2130575257", "message": { "value": message } }
    })
    .to_string();
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500).set_body_string(format!("  {body}\n")))
        .mount(&server)
        .await;

    let attachment = Attachment {
        file_name: "affiche.png".to_string(),
        bytes: vec![1, 2, 3],
    };
    let error = client()
        .upload_attachment(&target(&server), &digest(), &attachment)
        .await
        .unwrap_err();

    match error {
        Error::Api { status, detail, .. } => {
            assert_eq!(status, 500);
            assert_eq!(detail, body);
            assert!(detail.ends_with("the file could not be stored\"}}}"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn list_attachments_reads_file_names_and_etags() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!("{ITEM_PATH}/AttachmentFiles")))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "value": [
                { "odata.etag": "\"1\"", "FileName": "affiche.png" },
                { "odata.etag": "\"2\"", "FileName": "programme.pdf" },
            ]
        })))
        .mount(&server)
        .await;

    let files = client().list_attachments(&target(&server)).await.unwrap();

    assert_eq!(
        files,
        vec![
            AttachmentFile {
                file_name: "affiche.png".to_string(),
                etag: Some("\"1\"".to_string()),
            },
            AttachmentFile {
                file_name: "programme.pdf".to_string(),
                etag: Some("\"2\"".to_string()),
            },
        ]
    );
}

#[tokio::test]
async fn delete_attachment_maps_conflict_and_failure() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(format!("{ITEM_PATH}/AttachmentFiles('ok.png')")))
        .and(header("X-HTTP-Method", "DELETE"))
        .and(header("IF-MATCH", "\"1\""))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path(format!("{ITEM_PATH}/AttachmentFiles('busy.png')")))
        .respond_with(ResponseTemplate::new(409))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path(format!("{ITEM_PATH}/AttachmentFiles('broken.png')")))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let client = client();
    let target = target(&server);
    let file = |name: &str| AttachmentFile {
        file_name: name.to_string(),
        etag: Some("\"1\"".to_string()),
    };

    assert_eq!(
        client
            .delete_attachment(&target, &digest(), &file("ok.png"))
            .await
            .unwrap(),
        AttachmentDeletion::Deleted
    );
    assert_eq!(
        client
            .delete_attachment(&target, &digest(), &file("busy.png"))
            .await
            .unwrap(),
        AttachmentDeletion::Conflict
    );
    let error = client
        .delete_attachment(&target, &digest(), &file("broken.png"))
        .await
        .unwrap_err();
    match error {
        Error::Api { status, detail, .. } => {
            assert_eq!(status, 500);
            assert_eq!(detail, "Internal Server Error");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn upload_attachment_posts_raw_bytes() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(format!(
            "{ITEM_PATH}/AttachmentFiles/add(FileName='affiche.png')"
        )))
        .and(header("X-RequestDigest", "0xDIGEST"))
        .and(body_bytes(vec![0x89, 0x50, 0x4e, 0x47]))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    client()
        .upload_attachment(
            &target(&server),
            &digest(),
            &Attachment::new("affiche.png", vec![0x89, 0x50, 0x4e, 0x47]),
        )
        .await
        .unwrap();
}

#[tokio::test]
async fn edit_workflow_replaces_attachment_end_to_end() {
    let server = MockServer::start().await;
    mount_contextinfo(&server).await;
    Mock::given(method("POST"))
        .and(path(ITEM_PATH))
        .and(header("X-HTTP-Method", "MERGE"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(format!("{ITEM_PATH}/AttachmentFiles")))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "value": [
                { "odata.etag": "\"1\"", "FileName": "old-a.png" },
                { "odata.etag": "\"4\"", "FileName": "old-b.png" },
            ]
        })))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path(format!("{ITEM_PATH}/AttachmentFiles('old-a.png')")))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path(format!("{ITEM_PATH}/AttachmentFiles('old-b.png')")))
        .respond_with(ResponseTemplate::new(409))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path(format!("{ITEM_PATH}/AttachmentFiles/add(FileName='new.png')")))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let ctx = RequestContext::new(
        Some(server.uri()),
        PageParameters::from_query("ActualiteId=12&CofatList=Actualites"),
    );
    let buffer = EditBuffer {
        title: "Titre".to_string(),
        content: "Corps".to_string(),
        attachment: Some(Attachment::new("new.png", vec![1, 2, 3])),
    };

    let report = save_item(&client(), &ctx, &buffer, "aa").await.unwrap();

    let attachment = report.attachment.expect("attachment report");
    assert_eq!(attachment.deleted, 1);
    assert_eq!(attachment.conflicts, 1);
    assert_eq!(attachment.uploaded_file_name, "new.png");
}

#[tokio::test]
async fn delete_workflow_deletes_item_unconditionally() {
    let server = MockServer::start().await;
    mount_contextinfo(&server).await;
    Mock::given(method("POST"))
        .and(path(ITEM_PATH))
        .and(header("X-HTTP-Method", "DELETE"))
        .and(header("IF-MATCH", "*"))
        .and(header("X-RequestDigest", "0xDIGEST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let ctx = RequestContext::new(
        Some(server.uri()),
        PageParameters::from_query("ActualiteId=12&CofatList=Actualites"),
    );

    let outcome = delete_item(&client(), &ctx, |_| true).await.unwrap();

    assert_eq!(
        outcome,
        DeleteOutcome::Deleted {
            redirect_to: server.uri(),
        }
    );
}

#[tokio::test]
#[ignore = "Requires SHAREPOINT_WEB_URL and SHAREPOINT_ACCESS_TOKEN plus network access"]
async fn live_site_issues_request_digest() {
    let _ = dotenvy::dotenv();

    let config = cofat_core::SiteConfig::from_env().expect("site config should parse");
    let web_url = config.web_url.clone().expect("SHAREPOINT_WEB_URL should be set");
    let client = SharePointClient::from_config(&config).expect("client should build");

    let digest = client
        .request_digest(&web_url)
        .await
        .unwrap_or_else(|error| panic!("contextinfo failed for {web_url}: {error}"));
    assert!(!digest.value.trim().is_empty());
}
