use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::{
    BulkPromotionalSms, Credentials, DndType, PromotionalSms, SenderId, SmsId, SmsKind,
    TransactionalSms,
};

#[derive(Debug, thiserror::Error)]
pub enum WireError {
    #[error("invalid JSON response: {0}")]
    Json(#[from] serde_json::Error),

    #[error("response contains {actual} sms ids for {expected} recipients")]
    RecipientCountMismatch { expected: usize, actual: usize },
}

/// Rejection reported by SMS Owl in a non-200 response body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteRejection {
    pub status: Option<String>,
    pub message: String,
}

#[derive(Debug, Serialize)]
struct CommonFields<'a> {
    account_id: &'a str,
    api_key: &'a str,
    dnd_type: &'static str,
    sms_type: &'static str,
    sender_id: &'a str,
}

impl<'a> CommonFields<'a> {
    fn new(
        credentials: &'a Credentials,
        dnd_type: DndType,
        kind: SmsKind,
        sender_id: &'a SenderId,
    ) -> Self {
        Self {
            account_id: credentials.account_id().as_str(),
            api_key: credentials.api_key().expose(),
            dnd_type: dnd_type.as_str(),
            sms_type: kind.as_str(),
            sender_id: sender_id.as_str(),
        }
    }
}

#[derive(Debug, Serialize)]
struct PromotionalPayload<'a, To> {
    #[serde(flatten)]
    common: CommonFields<'a>,
    to: To,
    message: &'a str,
}

#[derive(Debug, Serialize)]
struct TransactionalPayload<'a> {
    #[serde(flatten)]
    common: CommonFields<'a>,
    to: &'a str,
    template_id: &'a str,
    placeholders: &'a BTreeMap<String, String>,
}

#[derive(Debug, Deserialize)]
struct SingleSuccessJson {
    sms_id: String,
}

#[derive(Debug, Deserialize)]
struct BulkSuccessJson {
    sms_ids: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorJson {
    #[serde(default)]
    status: Option<String>,
    message: String,
}

pub fn encode_promotional_body(
    credentials: &Credentials,
    request: &PromotionalSms,
) -> Result<String, serde_json::Error> {
    serde_json::to_string(&PromotionalPayload {
        common: CommonFields::new(
            credentials,
            request.dnd_type(),
            request.kind(),
            request.sender_id(),
        ),
        to: request.to().raw(),
        message: request.message().as_str(),
    })
}

pub fn encode_bulk_promotional_body(
    credentials: &Credentials,
    request: &BulkPromotionalSms,
) -> Result<String, serde_json::Error> {
    let to = request
        .recipients()
        .iter()
        .map(|phone| phone.raw())
        .collect::<Vec<_>>();

    serde_json::to_string(&PromotionalPayload {
        common: CommonFields::new(
            credentials,
            request.dnd_type(),
            request.kind(),
            request.sender_id(),
        ),
        to,
        message: request.message().as_str(),
    })
}

pub fn encode_transactional_body(
    credentials: &Credentials,
    request: &TransactionalSms,
) -> Result<String, serde_json::Error> {
    serde_json::to_string(&TransactionalPayload {
        common: CommonFields::new(
            credentials,
            request.dnd_type(),
            request.kind(),
            request.sender_id(),
        ),
        to: request.to().raw(),
        template_id: request.template_id().as_str(),
        placeholders: request.placeholders(),
    })
}

pub fn decode_single_success(json: &str) -> Result<SmsId, WireError> {
    let parsed: SingleSuccessJson = serde_json::from_str(json)?;
    Ok(SmsId::new(parsed.sms_id))
}

pub fn decode_bulk_success(
    request: &BulkPromotionalSms,
    json: &str,
) -> Result<Vec<SmsId>, WireError> {
    let parsed: BulkSuccessJson = serde_json::from_str(json)?;
    let expected = request.recipients().len();
    if parsed.sms_ids.len() != expected {
        return Err(WireError::RecipientCountMismatch {
            expected,
            actual: parsed.sms_ids.len(),
        });
    }
    Ok(parsed.sms_ids.into_iter().map(SmsId::new).collect())
}

pub fn decode_rejection(json: &str) -> Result<RemoteRejection, WireError> {
    let parsed: ErrorJson = serde_json::from_str(json)?;
    Ok(RemoteRejection {
        status: parsed.status,
        message: parsed.message,
    })
}

#[cfg(test)]
mod tests {
    use serde_json::{Value, json};

    use crate::domain::Placeholders;

    use super::*;

    fn credentials() -> Credentials {
        Credentials::new("acc-1", "key-1")
    }

    fn parse(body: &str) -> Value {
        serde_json::from_str(body).unwrap()
    }

    #[test]
    fn encode_single_promotional_body() {
        let request = PromotionalSms::new("SENDER1", "+911234567890", "Hello");
        let body = encode_promotional_body(&credentials(), &request).unwrap();

        assert_eq!(
            parse(&body),
            json!({
                "account_id": "acc-1",
                "api_key": "key-1",
                "dnd_type": "promotional",
                "sms_type": "normal",
                "sender_id": "SENDER1",
                "to": "+911234567890",
                "message": "Hello"
            })
        );
    }

    #[test]
    fn encode_bulk_promotional_body_keeps_order_and_kind() {
        let request = BulkPromotionalSms::new(
            "SENDER1",
            ["+911234567890", "+911234567891"],
            "Hello",
        )
        .with_kind(SmsKind::Flash);
        let body = parse(&encode_bulk_promotional_body(&credentials(), &request).unwrap());

        assert_eq!(body["to"], json!(["+911234567890", "+911234567891"]));
        assert_eq!(body["sms_type"], "flash");
        assert_eq!(body["dnd_type"], "promotional");
        assert_eq!(body["message"], "Hello");
    }

    #[test]
    fn encode_transactional_body_nests_placeholders() {
        let mut placeholders = Placeholders::new();
        placeholders.insert("name".to_owned(), "Alice".to_owned());
        placeholders.insert("otp".to_owned(), "4821".to_owned());
        let request = TransactionalSms::new("SENDER1", "+911234567890", "tmpl-7", placeholders);

        let body = parse(&encode_transactional_body(&credentials(), &request).unwrap());

        assert_eq!(
            body,
            json!({
                "account_id": "acc-1",
                "api_key": "key-1",
                "dnd_type": "transactional",
                "sms_type": "normal",
                "sender_id": "SENDER1",
                "to": "+911234567890",
                "template_id": "tmpl-7",
                "placeholders": { "name": "Alice", "otp": "4821" }
            })
        );
        assert!(body.get("message").is_none());
    }

    #[test]
    fn encode_transactional_body_with_empty_placeholders() {
        let request =
            TransactionalSms::new("SENDER1", "+911234567890", "tmpl-7", Placeholders::new());
        let body = parse(&encode_transactional_body(&credentials(), &request).unwrap());
        assert_eq!(body["placeholders"], json!({}));
    }

    #[test]
    fn encoding_is_deterministic_for_identical_inputs() {
        let request = TransactionalSms::new("SENDER1", "+911234567890", "tmpl", Placeholders::new())
            .placeholder("otp", "4821")
            .placeholder("name", "Alice");

        let first = encode_transactional_body(&Credentials::new("acc", "key"), &request).unwrap();
        let second = encode_transactional_body(&Credentials::new("acc", "key"), &request).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn decode_single_success_returns_sms_id() {
        let id = decode_single_success(r#"{"status":"ok","sms_id":"ABC123"}"#).unwrap();
        assert_eq!(id.as_str(), "ABC123");
    }

    #[test]
    fn decode_single_success_requires_sms_id() {
        let err = decode_single_success(r#"{"status":"ok"}"#).unwrap_err();
        assert!(matches!(err, WireError::Json(_)));
    }

    #[test]
    fn decode_bulk_success_keeps_order() {
        let request = BulkPromotionalSms::new("S", ["1", "2", "3"], "m");
        let ids = decode_bulk_success(&request, r#"{"status":"ok","sms_ids":["a","b","c"]}"#)
            .unwrap();
        assert_eq!(ids, vec![SmsId::new("a"), SmsId::new("b"), SmsId::new("c")]);
    }

    #[test]
    fn decode_bulk_success_rejects_count_mismatch() {
        let request = BulkPromotionalSms::new("S", ["1", "2", "3"], "m");
        let err = decode_bulk_success(&request, r#"{"status":"ok","sms_ids":["a","b"]}"#)
            .unwrap_err();
        assert!(matches!(
            err,
            WireError::RecipientCountMismatch {
                expected: 3,
                actual: 2
            }
        ));
    }

    #[test]
    fn decode_rejection_keeps_message_verbatim() {
        let rejection =
            decode_rejection(r#"{"status":"error","message":"  Invalid sender id "}"#).unwrap();
        assert_eq!(rejection.status.as_deref(), Some("error"));
        assert_eq!(rejection.message, "  Invalid sender id ");
    }

    #[test]
    fn decode_rejection_fails_on_non_json() {
        let err = decode_rejection("<html>Bad Gateway</html>").unwrap_err();
        assert!(matches!(err, WireError::Json(_)));
    }
}
