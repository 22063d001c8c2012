mod common;

use chrono::NaiveDate;
use comagic::core::kernel::MAX_ATTEMPTS;
use comagic::models::{Account, Call, SipLine, Tag};
use comagic::payloads::{EmployeeGroupPayload, EmployeeUpdate};
use comagic::{
    Comagic, ComagicConfig, ComagicError, EmployeeStatus, ListOptions, ProtocolError, Record,
    ReportOptions, Sort,
};
use common::{error, expired, result, ScriptedTransport};
use serde_json::{json, Value};
use std::sync::atomic::{AtomicUsize, Ordering};

async fn login_client(transport: ScriptedTransport) -> Comagic<ScriptedTransport> {
    Comagic::with_transport(transport, &ComagicConfig::with_login("user", "secret"))
        .await
        .unwrap()
}

async fn token_client(transport: ScriptedTransport) -> Comagic<ScriptedTransport> {
    Comagic::with_transport(transport, &ComagicConfig::with_token("abc"))
        .await
        .unwrap()
}

#[cfg(test)]
mod reauthentication {
    use super::*;
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn test_login_happens_once_at_construction() {
        let client = login_client(ScriptedTransport::with_login(|_| result(json!([])))).await;

        let requests = client.session().transport().requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].method, "login.user");
        assert_eq!(
            Value::Object(requests[0].params.clone()),
            json!({"login": "user", "password": "secret"})
        );
        assert_eq!(client.session().access_token(), "tok-1");
    }

    #[tokio::test]
    async fn test_expiry_on_every_attempt_stops_after_bound() {
        let mut client = login_client(ScriptedTransport::with_login(|_| expired())).await;

        let err = client.get_tags(ListOptions::new()).await.unwrap_err();

        assert_eq!(err.code(), Some(-32001));
        assert!(err.is_session_expired());
        let transport = client.session().transport();
        assert_eq!(transport.calls_to("get.tags"), MAX_ATTEMPTS as usize);
        // one login at construction plus one between each pair of attempts
        assert_eq!(transport.calls_to("login.user"), 4);
    }

    #[tokio::test]
    async fn test_single_expiry_is_retried_with_fresh_token() {
        let calls = AtomicUsize::new(0);
        let mut client = login_client(ScriptedTransport::with_login(move |_| {
            if calls.fetch_add(1, Ordering::SeqCst) == 0 {
                expired()
            } else {
                result(json!([{"id": 1, "name": "lead", "type": "user"}]))
            }
        }))
        .await;

        let tags: Vec<Tag> = client
            .get_tags(ListOptions::new())
            .await
            .unwrap()
            .collect::<Result<_, _>>()
            .unwrap();

        assert_eq!(tags.len(), 1);
        let transport = client.session().transport();
        assert_eq!(transport.calls_to("login.user"), 2);

        let sent: Vec<_> = transport
            .requests()
            .into_iter()
            .filter(|request| request.method == "get.tags")
            .collect();
        assert_eq!(sent.len(), 2);
        assert_eq!(sent[0].access_token(), Some("tok-1"));
        assert_eq!(sent[1].access_token(), Some("tok-2"));
        // the resubmitted envelope is otherwise unchanged
        assert_eq!(sent[0].id, sent[1].id);
        assert_eq!(sent[0].params["fields"], sent[1].params["fields"]);
    }

    #[tokio::test]
    async fn test_token_session_surfaces_expiry_immediately() {
        let mut client = token_client(ScriptedTransport::new(|_| expired())).await;

        let err = client.get_account(None).await.unwrap_err();

        assert!(err.is_session_expired());
        let transport = client.session().transport();
        assert_eq!(transport.requests().len(), 1);
        assert_eq!(transport.calls_to("login.user"), 0);
    }

    #[tokio::test]
    async fn test_rejected_login_fails_construction() {
        let transport =
            ScriptedTransport::new(|_| error(-32000, "Invalid login or password", Value::Null));
        let err = Comagic::with_transport(transport, &ComagicConfig::with_login("user", "wrong"))
            .await
            .unwrap_err();

        assert_eq!(err.code(), Some(-32000));
    }

    #[tokio::test]
    async fn test_empty_credentials_fail_construction() {
        for config in [
            ComagicConfig::with_token(""),
            ComagicConfig::with_login("", ""),
            ComagicConfig::with_login("user", ""),
        ] {
            let transport = ScriptedTransport::with_login(|_| result(json!([])));
            let err = Comagic::with_transport(transport, &config).await.unwrap_err();

            assert!(matches!(err, ComagicError::Params(_)));
            assert_eq!(err.code(), None);
        }
    }

    #[tokio::test]
    async fn test_login_without_token_in_result_is_protocol_error() {
        let transport = ScriptedTransport::new(|_| result(json!({"expire_at": 1})));
        let err = Comagic::with_transport(transport, &ComagicConfig::with_login("user", "secret"))
            .await
            .unwrap_err();

        assert_eq!(err.code(), Some(502));
    }
}

#[cfg(test)]
mod requests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn test_list_with_defaults_sends_token_and_all_fields_only() {
        let mut client = token_client(ScriptedTransport::new(|_| {
            result(json!([
                {"id": 1, "name": "lead", "type": "user", "colour": "red"},
                {"id": 2, "name": "spam"}
            ]))
        }))
        .await;

        let tags: Vec<Tag> = client
            .get_tags(ListOptions::new())
            .await
            .unwrap()
            .collect::<Result<_, _>>()
            .unwrap();

        let requests = client.session().transport().requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].jsonrpc, "2.0");
        assert_eq!(requests[0].method, "get.tags");
        assert!(requests[0].id.starts_with("req_get_tags_"));
        assert_eq!(
            Value::Object(requests[0].params.clone()),
            json!({"access_token": "abc", "fields": ["id", "name", "type"]})
        );

        assert_eq!(tags.len(), 2);
        assert_eq!(tags[0].r#type, Some(json!("user")));
        assert_eq!(tags[1].r#type, None);
        assert_eq!(
            serde_json::to_value(&tags[0]).unwrap(),
            json!({"id": 1, "name": "lead", "type": "user"})
        );
    }

    #[tokio::test]
    async fn test_supplied_options_and_impersonation_are_sent() {
        let mut client = token_client(ScriptedTransport::new(|_| result(json!([])))).await;

        let records = client
            .get_tags(
                ListOptions::new()
                    .limit(0)
                    .offset(10)
                    .filter(json!({"field": "name", "operator": "=", "value": "lead"}))
                    .fields([Tag::FIELD.id])
                    .sort([Sort::asc(Tag::FIELD.name)])
                    .user_id(0),
            )
            .await
            .unwrap();
        assert_eq!(records.len(), 0);

        let params = Value::Object(client.session().transport().requests()[0].params.clone());
        assert_eq!(
            params,
            json!({
                "access_token": "abc",
                "user_id": 0,
                "limit": 0,
                "offset": 10,
                "filter": {"field": "name", "operator": "=", "value": "lead"},
                "sort": [{"field": "name", "order": "asc"}],
                "fields": ["id"],
            })
        );
    }

    #[tokio::test]
    async fn test_report_sends_date_range() {
        let mut client = token_client(ScriptedTransport::new(|_| {
            result(json!([{"id": 9, "start_time": "2024-02-01 12:00:00", "finish_time": ""}]))
        }))
        .await;
        let from = NaiveDate::from_ymd_opt(2024, 2, 1).unwrap().and_hms_opt(0, 0, 0).unwrap();
        let till = NaiveDate::from_ymd_opt(2024, 2, 2).unwrap().and_hms_opt(0, 0, 0).unwrap();

        let calls: Vec<Call> = client
            .get_calls_report(ReportOptions::new(from, till))
            .await
            .unwrap()
            .collect::<Result<_, _>>()
            .unwrap();

        let request = &client.session().transport().requests()[0];
        assert_eq!(request.method, "get.calls_report");
        assert_eq!(request.params["date_from"], json!("2024-02-01 00:00:00"));
        assert_eq!(request.params["date_till"], json!("2024-02-02 00:00:00"));
        assert_eq!(
            request.params["fields"].as_array().unwrap().len(),
            Call::FIELDS.len()
        );
        assert_eq!(calls[0].start_time.unwrap().date(), from.date());
        assert_eq!(calls[0].finish_time, None);
    }

    #[tokio::test]
    async fn test_chat_messages_report_sends_chat_id_without_dates() {
        let mut client = token_client(ScriptedTransport::new(|_| result(json!([])))).await;

        client
            .get_chat_messages_report(77, ListOptions::new().limit(5))
            .await
            .unwrap();

        let request = &client.session().transport().requests()[0];
        assert_eq!(request.params["chat"], json!(77));
        assert_eq!(request.params["limit"], json!(5));
        assert!(!request.params.contains_key("date_from"));
    }

    #[tokio::test]
    async fn test_account_is_first_element_of_result() {
        let mut client = token_client(ScriptedTransport::new(|_| {
            result(json!([{"app_id": 1103, "name": "Shop", "timezone": "Europe/Moscow"}]))
        }))
        .await;

        let account = client.get_account(Some(5)).await.unwrap();

        assert_eq!(
            account,
            Account {
                app_id: Some(json!(1103)),
                name: Some(json!("Shop")),
                timezone: Some(json!("Europe/Moscow")),
            }
        );
        let request = &client.session().transport().requests()[0];
        assert_eq!(
            Value::Object(request.params.clone()),
            json!({"access_token": "abc", "user_id": 5})
        );
    }

    #[tokio::test]
    async fn test_created_sip_line_is_mapped() {
        let mut client = token_client(ScriptedTransport::new(|_| {
            json!({"jsonrpc": "2.0", "id": "req", "result": {"data": {"id": 31, "password": "p4ss"}}})
        }))
        .await;

        let line: SipLine = client.create_sip_line(12, "74950000000", None).await.unwrap();

        assert_eq!(line.id, Some(json!(31)));
        assert_eq!(line.password, Some(json!("p4ss")));
        let request = &client.session().transport().requests()[0];
        assert_eq!(request.method, "create.sip_lines");
        assert_eq!(request.params["employee_id"], json!(12));
    }

    #[tokio::test]
    async fn test_mutation_returns_unwrapped_result() {
        let mut client = token_client(ScriptedTransport::new(|_| result(json!({"id": 4})))).await;

        let changes = EmployeeUpdate {
            status: Some("break".parse::<EmployeeStatus>().unwrap()),
            ..EmployeeUpdate::default()
        };
        let out = client.update_employee(4, &changes, None).await.unwrap();

        assert_eq!(out, json!({"id": 4}));
        let request = &client.session().transport().requests()[0];
        assert_eq!(
            Value::Object(request.params.clone()),
            json!({"access_token": "abc", "id": 4, "status": "break"})
        );
    }
}

#[cfg(test)]
mod failures {
    use super::*;
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn test_server_error_is_mirrored() {
        let mut client = token_client(ScriptedTransport::new(|_| {
            error(-32602, "Invalid parameter value", json!({"field": "limit"}))
        }))
        .await;

        let err = client.get_tags(ListOptions::new()).await.unwrap_err();

        match err {
            ComagicError::Protocol(protocol) => assert_eq!(
                protocol,
                ProtocolError {
                    code: -32602,
                    message: "Invalid parameter value".to_string(),
                    data: Some(json!({"field": "limit"})),
                }
            ),
            ComagicError::Params(msg) => panic!("unexpected params error: {}", msg),
        }
    }

    #[tokio::test]
    async fn test_invalid_input_never_reaches_network() {
        let mut client = token_client(ScriptedTransport::new(|_| result(json!({})))).await;

        assert!(matches!(
            "lunch".parse::<EmployeeStatus>(),
            Err(ComagicError::Params(_))
        ));
        let err = client
            .create_employee_group(&EmployeeGroupPayload::default(), None)
            .await
            .unwrap_err();

        assert!(matches!(err, ComagicError::Params(_)));
        assert_eq!(err.code(), None);
        assert!(client.session().transport().requests().is_empty());
    }

    #[tokio::test]
    async fn test_malformed_timestamp_fails_only_its_record() {
        let mut client = token_client(ScriptedTransport::new(|_| {
            result(json!([
                {"id": 1, "start_time": "2024-01-01 10:00:00"},
                {"id": 2, "start_time": "yesterday"}
            ]))
        }))
        .await;
        let day = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap().and_hms_opt(0, 0, 0).unwrap();

        let mut calls = client
            .get_calls_report(ReportOptions::new(day, day))
            .await
            .unwrap();

        assert!(calls.next().unwrap().is_ok());
        assert_eq!(calls.next().unwrap().unwrap_err().code(), Some(502));
        assert!(calls.next().is_none());
    }

    #[tokio::test]
    async fn test_response_without_result_or_error() {
        let mut client = token_client(ScriptedTransport::new(|_| json!({"jsonrpc": "2.0"}))).await;

        let err = client.delete_tag(1, None).await.unwrap_err();

        assert_eq!(err.code(), Some(502));
    }
}
