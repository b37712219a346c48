use serde_json::Value;

use likebot_core::format_expiry_timestamp;

use crate::like_client::LikeTransportResult;

/// Fallback for a missing nickname.
pub const NICKNAME_UNKNOWN: &str = "Unknown";

/// Fallback for missing numeric or status text fields.
pub const FIELD_UNAVAILABLE: &str = "N/A";

/// Hangul filler the provider embeds in nicknames as invisible padding.
const INVISIBLE_SEPARATOR: char = '\u{3164}';

#[derive(Debug, Clone, PartialEq, Eq)]
/// Typed outcome of one like request, exactly one case per request.
pub enum LikeOutcome {
    Success {
        nickname: String,
        uid: String,
        region_code: String,
        level: String,
        likes_before: String,
        likes_added: String,
        likes_after: String,
        quota_remaining: String,
        key_expiry: String,
    },
    /// The provider reported no like available for this player today.
    QuotaExceeded,
    PlayerNotFound {
        uid: String,
    },
    ServiceError {
        status: u16,
        message: String,
    },
    Timeout,
    MissingArgument,
    ChannelNotAllowed,
}

/// Classifies a transport result into the typed outcome.
///
/// Provider deployments disagree on payload details, so every nested field
/// is read defensively and absence degrades to a sentinel instead of
/// failing the classification. Any top-level status other than a success
/// marker is treated as the daily quota being exhausted; the provider does
/// not distinguish its non-success states further.
pub fn classify_transport_result(
    result: LikeTransportResult,
    uid: &str,
    region_code: &str,
) -> LikeOutcome {
    match result {
        LikeTransportResult::Ok(body) => classify_body(&body, uid, region_code),
        LikeTransportResult::NotFoundStatus => LikeOutcome::PlayerNotFound {
            uid: uid.to_string(),
        },
        LikeTransportResult::HttpError { status, message } => {
            LikeOutcome::ServiceError { status, message }
        }
        LikeTransportResult::TimedOut => LikeOutcome::Timeout,
    }
}

fn classify_body(body: &Value, uid: &str, region_code: &str) -> LikeOutcome {
    if !status_indicates_success(body.get("status")) {
        return LikeOutcome::QuotaExceeded;
    }

    let empty = Value::Object(Default::default());
    let response = body.get("response").unwrap_or(&empty);

    let nickname = text_field(response, "PlayerNickname", NICKNAME_UNKNOWN)
        .replace(INVISIBLE_SEPARATOR, " ");
    let key_expiry =
        format_expiry_timestamp(response.get("KeyExpiresAt").and_then(Value::as_str));

    LikeOutcome::Success {
        nickname,
        uid: uid.to_string(),
        region_code: region_code.to_string(),
        level: text_field(response, "PlayerLevel", FIELD_UNAVAILABLE),
        likes_before: text_field(response, "LikesbeforeCommand", FIELD_UNAVAILABLE),
        likes_added: text_field(response, "LikesGivenByAPI", FIELD_UNAVAILABLE),
        likes_after: text_field(response, "LikesafterCommand", FIELD_UNAVAILABLE),
        quota_remaining: text_field(response, "KeyRemainingRequests", FIELD_UNAVAILABLE),
        key_expiry,
    }
}

fn status_indicates_success(status: Option<&Value>) -> bool {
    match status {
        Some(Value::Number(number)) => number.as_i64() == Some(1),
        Some(Value::Bool(flag)) => *flag,
        _ => false,
    }
}

/// Reads a field that providers serialize as string, number, or boolean.
fn text_field(object: &Value, key: &str, fallback: &str) -> String {
    match object.get(key) {
        Some(Value::String(text)) => text.clone(),
        Some(Value::Number(number)) => number.to_string(),
        Some(Value::Bool(flag)) => flag.to_string(),
        _ => fallback.to_string(),
    }
}
