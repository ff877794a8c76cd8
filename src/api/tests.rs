//! API Client Tests
//!
//! Interceptor behavior against a scripted transport.

#[cfg(test)]
mod tests {
    use crate::api::{self, extract_detail, ApiClient, ApiError, Method};
    use crate::session::tests::record_events;
    use crate::session::{Session, SessionEvent};
    use crate::testing::{client_with, MockReply, MockTransport, TEST_BASE};

    fn setup(path: &str, reply: MockReply) -> (Session, MockTransport, ApiClient) {
        let session = Session::in_memory();
        let transport = MockTransport::default();
        transport.reply(path, reply);
        let client = client_with(&session, &transport);
        (session, transport, client)
    }

    #[tokio::test]
    async fn test_bearer_header_injected_when_signed_in() {
        let (session, transport, client) = setup("/logs/", MockReply::json(200, "[]"));
        session.set("tok123".to_string());

        api::list_logs(&client).await.expect("list logs");

        let request = transport.request_to("/logs/").unwrap();
        assert_eq!(request.method, Method::Get);
        assert_eq!(request.url, format!("{TEST_BASE}/logs/"));
        assert_eq!(request.header("authorization"), Some("Bearer tok123"));
        assert!(request.body.is_none());
    }

    #[tokio::test]
    async fn test_no_header_without_credential() {
        let (_session, transport, client) = setup("/materials/", MockReply::json(200, "[]"));

        api::list_materials(&client).await.expect("list materials");

        assert!(transport.request_to("/materials/").unwrap().header("Authorization").is_none());
    }

    #[tokio::test]
    async fn test_header_follows_latest_credential() {
        let (session, transport, client) = setup("/documents/", MockReply::json(200, "[]"));
        session.set("first".to_string());
        api::list_documents(&client).await.unwrap();
        session.set("second".to_string());
        api::list_documents(&client).await.unwrap();

        let headers: Vec<_> = transport
            .requests()
            .iter()
            .map(|r| r.header("Authorization").map(str::to_string))
            .collect();
        assert_eq!(headers, vec![Some("Bearer first".to_string()), Some("Bearer second".to_string())]);
    }

    #[tokio::test]
    async fn test_401_expires_session_and_propagates() {
        let (session, _transport, client) = setup("/logs/", MockReply::json(401, r#"{"detail":"Could not validate credentials"}"#));
        session.set("stale".to_string());
        let events = record_events(&session);

        let err = api::list_logs(&client).await.unwrap_err();

        assert_eq!(err, ApiError::SessionExpired);
        assert!(!session.is_authenticated());
        assert_eq!(*events.lock().unwrap(), vec![SessionEvent::Expired]);
    }

    #[tokio::test]
    async fn test_other_statuses_pass_through() {
        let (session, _transport, client) = setup("/materials/7", MockReply::json(404, r#"{"detail":"Material not found"}"#));
        session.set("tok".to_string());

        let err = api::get_material(&client, 7).await.unwrap_err();

        assert_eq!(
            err,
            ApiError::Status { status: 404, detail: Some("Material not found".to_string()) }
        );
        assert_eq!(err.detail(), Some("Material not found"));
        assert!(session.is_authenticated());
    }

    #[tokio::test]
    async fn test_403_does_not_expire_session() {
        let (session, _transport, client) = setup("/progress/", MockReply::json(403, r#"{"detail":"Insufficient permissions"}"#));
        session.set("tok".to_string());

        let err = api::get_progress(&client).await.unwrap_err();
        assert!(!err.is_session_expired());
        assert!(session.is_authenticated());
    }

    #[tokio::test]
    async fn test_login_401_is_not_session_expiry() {
        let (session, _transport, client) = setup("/auth/login", MockReply::json(401, r#"{"detail":"Incorrect username or password"}"#));
        let events = record_events(&session);

        let err = api::login(&client, "a", "b").await.unwrap_err();

        assert_eq!(err.detail(), Some("Incorrect username or password"));
        assert!(events.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_decode_error() {
        let (_session, _transport, client) = setup("/logs/", MockReply::json(200, r#"{"unexpected": true}"#));
        let err = api::list_logs(&client).await.unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }

    #[tokio::test]
    async fn test_network_error() {
        let (_session, _transport, client) = setup("/logs/", MockReply::NetworkDown);
        let err = api::list_logs(&client).await.unwrap_err();
        assert!(matches!(err, ApiError::Network(_)));
    }

    #[tokio::test]
    async fn test_material_detail() {
        let body = r#"{"id": 7, "ddt_number": "DDT-7", "packing_list": "Panels x100", "container_id": "CONT-123",
                       "batch_number": "B-7", "non_conformity": true, "notes": null}"#;
        let (_session, transport, client) = setup("/materials/7", MockReply::json(200, body));

        let detail = api::get_material(&client, 7).await.unwrap();

        assert_eq!(detail.container_id.as_deref(), Some("CONT-123"));
        assert_eq!(detail.non_conformity, Some(true));
        assert_eq!(detail.notes, None);
        assert!(transport.request_to("/materials/7").is_some());
    }

    #[tokio::test]
    async fn test_base_trailing_slash_trimmed() {
        let transport = MockTransport::default();
        transport.reply("/logs/", MockReply::json(200, "[]"));
        let client = ApiClient::new("http://api.test/", Session::in_memory(), transport.clone());

        api::list_logs(&client).await.unwrap();
        assert_eq!(transport.request_to("/logs/").unwrap().url, "http://api.test/logs/");
    }

    #[test]
    fn test_extract_detail() {
        assert_eq!(extract_detail(r#"{"detail":"nope"}"#).as_deref(), Some("nope"));
        assert_eq!(extract_detail(r#"{"detail":""}"#), None);
        assert_eq!(extract_detail(r#"{"detail":[{"msg":"x"}]}"#), None);
        assert_eq!(extract_detail(r#"{"message":"other"}"#), None);
        assert_eq!(extract_detail("<html>"), None);
    }
}
