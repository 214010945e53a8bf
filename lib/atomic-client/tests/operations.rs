#![allow(missing_docs)]

use atomic_client::model::{
    AccessTokenCreateInput, AssetCreateInput, JobCancelInput, OptionUpdateInput,
    PlanSubscribeInput, PublisherListInput, SendMailInput, UserDeleteInput, UserGetInput,
    UserImportInput, UserListInput,
};
use atomic_client::{ErrorKind, ListParams, RequestParams};
use rstest::rstest;
use serde_json::json;
use uuid::Uuid;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

mod common;
pub use self::common::*;

#[rstest]
#[tokio::test]
async fn should_get_user_with_expansion(#[future] server: TestServer) -> anyhow::Result<()> {
    let server = server.await;
    let user_id = Uuid::new_v4();
    Mock::given(method("GET"))
        .and(path(format!("/api/1.0.0/users/{user_id}")))
        .and(query_param("expand", "roles"))
        .and(header("Atomic-Instance", "acme"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": user_id,
            "login": "jane",
            "roles": ["admin"],
            "favorite_color": "blue",
        })))
        .expect(1)
        .mount(&server.mock)
        .await;

    let params = RequestParams::new()
        .with_instance("acme")
        .with_expand("roles");
    let user = server
        .client
        .user_get(&params, &UserGetInput { user_id })
        .await?;

    assert_eq!(user.id, user_id);
    assert_eq!(user.login.as_deref(), Some("jane"));
    assert_eq!(user.roles, vec!["admin".to_string()]);
    assert_eq!(user.extra.get("favorite_color"), Some(&json!("blue")));

    Ok(())
}

#[rstest]
#[tokio::test]
async fn should_list_users_with_pagination(#[future] server: TestServer) -> anyhow::Result<()> {
    let server = server.await;
    Mock::given(method("GET"))
        .and(path("/api/1.0.0/users"))
        .and(query_param("limit", "20"))
        .and(query_param("offset", "40"))
        .and(query_param("roles", "admin"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": Uuid::new_v4(), "login": "jane"},
            {"id": Uuid::new_v4(), "login": "john"},
        ])))
        .expect(1)
        .mount(&server.mock)
        .await;

    let input = UserListInput {
        page: ListParams::page(20, 40),
        roles: vec!["admin".to_string()],
        ..Default::default()
    };
    let users = server.client.user_list(&RequestParams::new(), &input).await?;

    let logins = users
        .iter()
        .filter_map(|user| user.login.as_deref())
        .collect::<Vec<_>>();
    assert_eq!(logins, ["jane", "john"]);

    Ok(())
}

#[rstest]
#[case::no_content(ResponseTemplate::new(204))]
#[case::ignored_body(ResponseTemplate::new(200).set_body_json(json!({"deleted": true})))]
#[tokio::test]
async fn should_ignore_body_of_void_operation(
    #[future] server: TestServer,
    #[case] response: ResponseTemplate,
) -> anyhow::Result<()> {
    let server = server.await;
    let user_id = Uuid::new_v4();
    Mock::given(method("DELETE"))
        .and(path(format!("/api/1.0.0/users/{user_id}")))
        .respond_with(response)
        .expect(1)
        .mount(&server.mock)
        .await;

    server
        .client
        .user_delete(&RequestParams::new(), &UserDeleteInput { user_id })
        .await?;

    let requests = server.received().await;
    let [request] = requests.as_slice() else {
        anyhow::bail!("expected a single request, got {}", requests.len());
    };
    // identifiers travel in the path only
    assert_eq!(request.url.query(), None);

    Ok(())
}

#[rstest]
#[tokio::test]
async fn should_reject_nil_identifier_locally(#[future] server: TestServer) -> anyhow::Result<()> {
    let server = server.await;

    let result = server
        .client
        .user_get(&RequestParams::new(), &UserGetInput { user_id: Uuid::nil() })
        .await;

    let Err(error) = result else {
        anyhow::bail!("a nil identifier is invalid");
    };
    assert_eq!(error.kind(), ErrorKind::Validation);
    assert!(server.received().await.is_empty());

    Ok(())
}

#[rstest]
#[tokio::test]
async fn should_create_application_token(#[future] server: TestServer) -> anyhow::Result<()> {
    let server = server.await;
    let application_id = Uuid::new_v4();
    Mock::given(method("POST"))
        .and(path(format!("/api/1.0.0/applications/{application_id}/tokens")))
        .and(body_json(json!({"scope": ["read"], "expires_in": 3600})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": Uuid::new_v4(),
            "application_id": application_id,
            "token": "secret-token",
            "scope": ["read"],
        })))
        .expect(1)
        .mount(&server.mock)
        .await;

    let input = AccessTokenCreateInput {
        application_id: Some(application_id),
        scope: vec!["read".to_string()],
        expires_in: Some(3600),
        ..Default::default()
    };
    let token = server
        .client
        .access_token_create(&RequestParams::new(), &input)
        .await?;

    assert_eq!(token.application_id, Some(application_id));
    assert_eq!(token.token.as_deref(), Some("secret-token"));
    assert!(!format!("{token:?}").contains("secret-token"));

    Ok(())
}

#[rstest]
#[case::no_owner(None, None, "user_id or application_id is required")]
#[case::both_owners(
    Some(Uuid::new_v4()),
    Some(Uuid::new_v4()),
    "only one of user_id or application_id is allowed"
)]
#[tokio::test]
async fn should_require_exactly_one_token_owner(
    #[future] server: TestServer,
    #[case] user_id: Option<Uuid>,
    #[case] application_id: Option<Uuid>,
    #[case] reason: &str,
) -> anyhow::Result<()> {
    let server = server.await;
    let input = AccessTokenCreateInput {
        user_id,
        application_id,
        ..Default::default()
    };

    let result = server
        .client
        .access_token_create(&RequestParams::new(), &input)
        .await;

    let Err(error) = result else {
        anyhow::bail!("the token owner is ambiguous");
    };
    assert_eq!(error.kind(), ErrorKind::Validation);
    assert!(error.to_string().ends_with(reason), "unexpected error: {error}");
    assert!(server.received().await.is_empty());

    Ok(())
}

#[rstest]
#[tokio::test]
async fn should_upload_asset_as_multipart(#[future] server: TestServer) -> anyhow::Result<()> {
    let server = server.await;
    let asset_id = Uuid::new_v4();
    Mock::given(method("POST"))
        .and(path("/api/1.0.0/assets"))
        .and(query_param("filename", "cover.png"))
        .and(query_param("mime_type", "image/png"))
        .and(query_param("public", "true"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": asset_id,
            "filename": "cover.png",
            "mime_type": "image/png",
            "size": 4,
        })))
        .expect(1)
        .mount(&server.mock)
        .await;

    let input = AssetCreateInput {
        filename: "cover.png".to_string(),
        mime_type: "image/png".to_string(),
        payload: b"\x89PNG".to_vec().into(),
        public: Some(true),
        ..Default::default()
    };
    let asset = server
        .client
        .asset_create(&RequestParams::new(), &input)
        .await?;
    assert_eq!(asset.id, asset_id);
    assert_eq!(asset.size, Some(4));

    let requests = server.received().await;
    let [request] = requests.as_slice() else {
        anyhow::bail!("expected a single request, got {}", requests.len());
    };
    let content_type = request
        .headers
        .get("content-type")
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default();
    assert!(
        content_type.starts_with("multipart/form-data; boundary="),
        "unexpected content type: {content_type}"
    );
    let body = String::from_utf8_lossy(&request.body);
    assert!(body.contains(r#"Content-Disposition: form-data; name="file"; filename="cover.png""#));
    assert!(body.contains("Content-Type: image/png\r\n"));
    assert!(body.contains("Content-Length: 4\r\n"));

    Ok(())
}

#[rstest]
#[tokio::test]
async fn should_not_upload_empty_asset(#[future] server: TestServer) -> anyhow::Result<()> {
    let server = server.await;
    let input = AssetCreateInput {
        filename: "cover.png".to_string(),
        mime_type: "image/png".to_string(),
        ..Default::default()
    };

    let result = server
        .client
        .asset_create(&RequestParams::new(), &input)
        .await;

    let Err(error) = result else {
        anyhow::bail!("an empty payload is invalid");
    };
    assert_eq!(error.to_string(), "Validation failed: invalid 'payload': is required");

    Ok(())
}

#[rstest]
#[tokio::test]
async fn should_import_users_as_job(#[future] server: TestServer) -> anyhow::Result<()> {
    let server = server.await;
    let job_id = Uuid::new_v4();
    Mock::given(method("POST"))
        .and(path("/api/1.0.0/users/import"))
        .and(query_param("send_welcome", "false"))
        .respond_with(ResponseTemplate::new(202).set_body_json(json!({
            "id": job_id,
            "type": "user_import",
            "state": "pending",
        })))
        .expect(1)
        .mount(&server.mock)
        .await;

    let input = UserImportInput {
        filename: "users.csv".to_string(),
        payload: "login,email\njane,jane@example.com\n".into(),
        send_welcome: Some(false),
        ..Default::default()
    };
    let job = server
        .client
        .user_import(&RequestParams::new(), &input)
        .await?;
    assert_eq!(job.id, job_id);
    assert_eq!(job.kind, "user_import");

    let requests = server.received().await;
    let [request] = requests.as_slice() else {
        anyhow::bail!("expected a single request, got {}", requests.len());
    };
    let body = String::from_utf8_lossy(&request.body);
    assert!(body.contains("Content-Type: text/csv\r\n"));

    Ok(())
}

#[rstest]
#[tokio::test]
async fn should_list_publishers_with_total(#[future] server: TestServer) -> anyhow::Result<()> {
    let server = server.await;
    Mock::given(method("GET"))
        .and(path("/api/1.0.0/publishers"))
        .and(query_param("limit", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "publishers": [{"id": Uuid::new_v4(), "name": "Daily"}],
            "total": 12,
        })))
        .expect(1)
        .mount(&server.mock)
        .await;

    let input = PublisherListInput {
        page: ListParams {
            limit: Some(1),
            offset: None,
        },
        ..Default::default()
    };
    let page = server
        .client
        .publisher_list(&RequestParams::new(), &input)
        .await?;

    assert_eq!(page.total, 12);
    assert_eq!(page.publishers.len(), 1);

    Ok(())
}

#[rstest]
#[tokio::test]
async fn should_update_option_by_name(#[future] server: TestServer) -> anyhow::Result<()> {
    let server = server.await;
    Mock::given(method("PUT"))
        .and(path("/api/1.0.0/options/site.title"))
        .and(body_json(json!({"value": "Acme News"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "name": "site.title",
            "value": "Acme News",
        })))
        .expect(1)
        .mount(&server.mock)
        .await;

    let input = OptionUpdateInput {
        name: "site.title".to_string(),
        value: json!("Acme News"),
        ..Default::default()
    };
    let option = server
        .client
        .option_update(&RequestParams::new(), &input)
        .await?;

    assert_eq!(option.value, json!("Acme News"));

    Ok(())
}

#[rstest]
#[tokio::test]
async fn should_subscribe_user_to_plan(#[future] server: TestServer) -> anyhow::Result<()> {
    let server = server.await;
    let plan_id = Uuid::new_v4();
    let user_id = Uuid::new_v4();
    Mock::given(method("POST"))
        .and(path(format!("/api/1.0.0/plans/{plan_id}/subscribe")))
        .and(body_json(json!({"user_id": user_id, "quantity": 2})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": Uuid::new_v4(),
            "plan_id": plan_id,
            "user_id": user_id,
            "status": "active",
        })))
        .expect(1)
        .mount(&server.mock)
        .await;

    let input = PlanSubscribeInput {
        plan_id,
        user_id,
        quantity: Some(2),
        ..Default::default()
    };
    let subscription = server
        .client
        .plan_subscribe(&RequestParams::new(), &input)
        .await?;

    assert_eq!(subscription.plan_id, plan_id);
    assert_eq!(subscription.status.as_deref(), Some("active"));

    Ok(())
}

#[rstest]
#[tokio::test]
async fn should_send_mail(#[future] server: TestServer) -> anyhow::Result<()> {
    let server = server.await;
    Mock::given(method("POST"))
        .and(path("/api/1.0.0/mail"))
        .and(body_json(json!({
            "to": ["jane@example.com", "john@example.com"],
            "subject": "Welcome",
            "text": "Hello",
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": "m1", "to": ["jane@example.com"], "status": "queued"},
            {"id": "m2", "to": ["john@example.com"], "status": "queued"},
        ])))
        .expect(1)
        .mount(&server.mock)
        .await;

    let input = SendMailInput {
        to: vec!["jane@example.com".to_string(), "john@example.com".to_string()],
        subject: Some("Welcome".to_string()),
        text: Some("Hello".to_string()),
        ..Default::default()
    };
    let messages = server
        .client
        .send_mail(&RequestParams::new(), &input)
        .await?;

    assert_eq!(messages.len(), 2);
    assert!(
        messages
            .iter()
            .all(|message| message.status.as_deref() == Some("queued"))
    );

    Ok(())
}

#[rstest]
#[tokio::test]
async fn should_cancel_job(#[future] server: TestServer) -> anyhow::Result<()> {
    let server = server.await;
    let job_id = Uuid::new_v4();
    Mock::given(method("DELETE"))
        .and(path(format!("/api/1.0.0/jobs/{job_id}")))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server.mock)
        .await;

    server
        .client
        .job_cancel(&RequestParams::new(), &JobCancelInput { job_id })
        .await?;

    Ok(())
}

#[rstest]
#[tokio::test]
async fn should_surface_conflict(#[future] server: TestServer) -> anyhow::Result<()> {
    let server = server.await;
    let job_id = Uuid::new_v4();
    Mock::given(method("DELETE"))
        .and(path(format!("/api/1.0.0/jobs/{job_id}")))
        .respond_with(ResponseTemplate::new(409).set_body_json(json!({
            "code": "job_completed",
            "message": "the job already completed",
        })))
        .mount(&server.mock)
        .await;

    let result = server
        .client
        .job_cancel(&RequestParams::new(), &JobCancelInput { job_id })
        .await;

    let Err(error) = result else {
        anyhow::bail!("a completed job cannot be cancelled");
    };
    let Some(api_error) = error.as_api_error() else {
        anyhow::bail!("expected an API error, got {error}");
    };
    assert_eq!(api_error.status().as_u16(), 409);
    assert_eq!(api_error.code(), Some("job_completed"));
    assert_eq!(
        api_error.last_response().status_line(),
        "409 Conflict"
    );

    Ok(())
}
