//! Tests for Discord-side rendering of like outcomes.

use likebot_access::ChannelToggle;
use likebot_like::LikeOutcome;

use super::render_helpers::{outcome_message, toggle_notice};

fn success_outcome() -> LikeOutcome {
    LikeOutcome::Success {
        nickname: "DARK LORD".to_string(),
        uid: "12345678".to_string(),
        region_code: "bd".to_string(),
        level: "61".to_string(),
        likes_before: "120".to_string(),
        likes_added: "100".to_string(),
        likes_after: "220".to_string(),
        quota_remaining: "14/30".to_string(),
        key_expiry: "07 March 2025, 06:45 PM".to_string(),
    }
}

#[test]
fn success_message_lists_player_and_like_fields() {
    let message = outcome_message(&success_outcome());
    assert_eq!(message.title, "Like Added");
    assert_eq!(message.color, 0x00FFFF);
    for fragment in [
        "Nickname: `DARK LORD`",
        "UID: `12345678`",
        "Region: `BD`",
        "Level: `61`",
        "Likes Before: `120`",
        "Likes Added: `100`",
        "Likes After: `220`",
        "Remaining Quota: `14/30`",
        "Key Expires At: `07 March 2025, 06:45 PM`",
    ] {
        assert!(
            message.description.contains(fragment),
            "missing {fragment} in {}",
            message.description
        );
    }
}

#[test]
fn success_without_region_renders_placeholder() {
    let outcome = match success_outcome() {
        LikeOutcome::Success { uid, .. } => LikeOutcome::Success {
            nickname: "Rook".to_string(),
            uid,
            region_code: String::new(),
            level: "N/A".to_string(),
            likes_before: "N/A".to_string(),
            likes_added: "N/A".to_string(),
            likes_after: "N/A".to_string(),
            quota_remaining: "N/A".to_string(),
            key_expiry: "N/A".to_string(),
        },
        other => other,
    };
    let message = outcome_message(&outcome);
    assert!(message.description.contains("Region: `N/A`"));
}

#[test]
fn quota_exceeded_is_informational_red() {
    let message = outcome_message(&LikeOutcome::QuotaExceeded);
    assert_eq!(message.title, "Max Likes Sent Already");
    assert_eq!(message.color, 0xFF0000);
    assert!(message.description.contains("Try again tomorrow"));
}

#[test]
fn player_not_found_echoes_the_uid() {
    let message = outcome_message(&LikeOutcome::PlayerNotFound {
        uid: "999".to_string(),
    });
    assert_eq!(message.title, "Player Not Found");
    assert!(message.description.contains("`999`"));
}

#[test]
fn service_error_carries_status_code() {
    let message = outcome_message(&LikeOutcome::ServiceError {
        status: 503,
        message: "server returned: 503".to_string(),
    });
    assert_eq!(message.title, "Error");
    assert!(message.description.contains("503"));
}

#[test]
fn policy_and_argument_outcomes_have_guidance() {
    assert!(outcome_message(&LikeOutcome::MissingArgument)
        .description
        .contains("/like bd 1234567890"));
    assert!(outcome_message(&LikeOutcome::ChannelNotAllowed)
        .description
        .contains("not allowed"));
    assert!(outcome_message(&LikeOutcome::Timeout)
        .description
        .contains("too long"));
}

#[test]
fn toggle_notice_mentions_the_channel() {
    assert_eq!(
        toggle_notice(ChannelToggle::Added, 42),
        "<#42> is now allowed for `/like`."
    );
    assert_eq!(
        toggle_notice(ChannelToggle::Removed, 42),
        "<#42> is no longer allowed for `/like`."
    );
}
