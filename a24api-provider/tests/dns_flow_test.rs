//! 端到端流程测试：规划 → 发送 → 渲染
//!
//! Drives `DnsService` through a scripted transport, without network.

mod common;

use a24api_provider::schema::{self, LEADING_COLUMNS};
use a24api_provider::{
    ApiError, DnsService, ExitStatus, FieldKind, FilterSet, Function, HttpMethod, OutputMode,
    RecordKind,
};
use common::{ScriptedTransport, args, invocation};

/// Create arguments for every kind: `[domain, kind, fields...]`.
fn create_args(kind: RecordKind) -> Vec<&'static str> {
    let fields: &[&str] = match kind {
        RecordKind::A => &["www", "600", "192.0.2.1"],
        RecordKind::Aaaa => &["www", "600", "2001:db8::1"],
        RecordKind::Cname => &["alias", "600", "www.example.com"],
        RecordKind::Txt => &["@", "3600", "v=spf1 -all"],
        RecordKind::Ns => &["sub", "86400", "ns1.example.net"],
        RecordKind::Sshfp => &["host", "600", "4", "2", "abcdef0123"],
        RecordKind::Srv => &["_sip._tcp", "600", "10", "60", "5060", "sip.example.com"],
        RecordKind::Tlsa => &["_443._tcp", "600", "3", "1", "1", "deadbeef"],
        RecordKind::Caa => &["@", "600", "0", "issue", "letsencrypt.org"],
        RecordKind::Mx => &["@", "3600", "10", "mail.example.com"],
    };
    let mut all = vec!["example.com", kind.as_str()];
    all.extend_from_slice(fields);
    all
}

/// What the server would list after a create: the sent body with numeric
/// fields as JSON numbers, plus `hashId` and `type`.
fn listed(kind: RecordKind, body: &serde_json::Value, hash_id: &str) -> serde_json::Value {
    let schema = schema::lookup(kind);
    let mut object = serde_json::Map::new();
    object.insert("hashId".into(), hash_id.into());
    object.insert("type".into(), kind.as_str().into());
    for field in schema.fields {
        let text = body[field.key].as_str().unwrap();
        let value = if field.kind == FieldKind::Integer {
            serde_json::Value::from(text.parse::<i64>().unwrap())
        } else {
            serde_json::Value::from(text)
        };
        object.insert(field.key.into(), value);
    }
    serde_json::Value::Object(object)
}

#[tokio::test]
async fn create_then_list_round_trips_every_kind() {
    for kind in RecordKind::ALL {
        let values = create_args(kind);
        let create = invocation(Function::Create, &values, OutputMode::Inline);

        let transport = ScriptedTransport::new().respond(200, "");
        let outcome = DnsService::new(&transport).run(&create).await.unwrap();
        assert_eq!(outcome.output, "200 OK\n", "{kind}");

        let sent = transport.sent();
        let body = sent[0].body.clone().unwrap();
        assert_eq!(
            body.as_object().unwrap().len(),
            schema::lookup(kind).arity(),
            "{kind}: body has exactly the schema keys"
        );
        assert!(body.get("hashId").is_none(), "{kind}: no hashId on create");

        let listing = serde_json::Value::Array(vec![listed(kind, &body, "h1")]).to_string();
        let list = invocation(Function::List, &["example.com"], OutputMode::Inline);
        let transport = ScriptedTransport::new().respond(200, &listing);
        let outcome = DnsService::new(&transport).run(&list).await.unwrap();

        let mut expected: Vec<String> = vec!["example.com".into(), "h1".into(), kind.to_string()];
        for (index, value) in values[2..].iter().enumerate() {
            let is_txt_text = kind == RecordKind::Txt && index == 2;
            expected.push(if is_txt_text {
                format!("\"{value}\"")
            } else {
                (*value).to_string()
            });
        }
        assert_eq!(outcome.output, format!("{}\n", expected.join(" ")), "{kind}");
        assert_eq!(
            schema::lookup(kind).columns().len(),
            LEADING_COLUMNS.len() + schema::lookup(kind).arity(),
            "{kind}"
        );
    }
}

#[tokio::test]
async fn update_carries_hash_id_and_uses_put() {
    let update = invocation(
        Function::Update,
        &["example.com", "h42", "srv", "_sip._tcp", "600", "10", "60", "5060", "sip"],
        OutputMode::Inline,
    );
    let transport = ScriptedTransport::new().respond(200, "");
    let outcome = DnsService::new(&transport).run(&update).await.unwrap();
    assert_eq!(outcome.status, ExitStatus::Success);

    let sent = transport.sent();
    assert_eq!(sent[0].method, HttpMethod::Put);
    assert_eq!(sent[0].path, "/dns/example.com/srv/v1");
    let body = sent[0].body.as_ref().unwrap();
    assert_eq!(body["hashId"], "h42");
    assert_eq!(body["port"], "5060");
    assert_eq!(body.as_object().unwrap().len(), 7);
}

#[tokio::test]
async fn update_of_missing_record_reports_translated_code() {
    let update = invocation(
        Function::Update,
        &["example.com", "gone", "A", "www", "600", "192.0.2.1"],
        OutputMode::Inline,
    );
    let transport = ScriptedTransport::new().respond(400, r#"{"message":"not found"}"#);
    let outcome = DnsService::new(&transport).run(&update).await.unwrap();
    assert_eq!(outcome.output, "400 DNS_RECORD_TO_UPDATE_NOT_FOUND\n");
    assert_eq!(outcome.status.code(), 2);
}

#[tokio::test]
async fn invalid_token_on_listing() {
    let list = invocation(Function::List, &[], OutputMode::Json);
    let transport = ScriptedTransport::new().respond(401, "");
    let outcome = DnsService::new(&transport).run(&list).await.unwrap();
    assert_eq!(outcome.output, "401 TOKEN_INVALID\n");
    assert_eq!(outcome.status, ExitStatus::ApiError);
}

#[tokio::test]
async fn filtered_mixed_listing() {
    let body = r#"[
        {"hashId": "1", "type": "A", "name": "www", "ttl": 600, "ip": "192.0.2.1"},
        {"hashId": "2", "type": "AAAA", "name": "www", "ttl": 600, "ip": "2001:db8::1"},
        {"hashId": "3", "type": "MX", "name": "@", "ttl": 3600, "priority": 10, "mailserver": "mx.example.com"},
        {"hashId": "4", "type": "DNAME", "name": "x", "ttl": 600, "target": "y"},
        {"hashId": "5", "type": "TXT", "name": "www", "ttl": 600, "text": "hello"}
    ]"#;
    let mut list = invocation(Function::List, &["example.com"], OutputMode::Inline);
    list.filters = FilterSet::new(Some("^www$"), Some("^A"), None).unwrap();

    let transport = ScriptedTransport::new().respond(200, body);
    let outcome = DnsService::new(&transport).run(&list).await.unwrap();
    assert_eq!(
        outcome.output,
        "example.com 1 A    www 600 192.0.2.1\nexample.com 2 AAAA www 600 2001:db8::1\n"
    );
}

#[tokio::test]
async fn json_listing_is_unfiltered() {
    let body = r#"[{"hashId":"1","type":"A","name":"www","ttl":600,"ip":"192.0.2.1"}]"#;
    let mut list = invocation(Function::List, &["example.com"], OutputMode::Json);
    list.filters = FilterSet::new(Some("^nothing$"), None, None).unwrap();

    let transport = ScriptedTransport::new().respond(200, body);
    let outcome = DnsService::new(&transport).run(&list).await.unwrap();
    assert!(outcome.output.contains("\"hashId\": \"1\""));
    assert!(outcome.output.starts_with("[\n    {\n        \"hashId\""));
}

#[tokio::test]
async fn transport_failure_propagates() {
    let list = invocation(Function::List, &[], OutputMode::Inline);
    let transport = ScriptedTransport::new();
    let err = DnsService::new(&transport).run(&list).await.unwrap_err();
    assert!(matches!(err, ApiError::TransportFailure { .. }));
}

#[test]
fn validation_happens_before_any_request() {
    let result = a24api_provider::Command::plan(
        a24api_provider::Service::Dns,
        Function::Create,
        &args(&["example.com", "A", "www", "ten", "192.0.2.1"]),
    );
    assert!(matches!(result, Err(ApiError::InvalidFieldValue { .. })));
}
