//! Pure rendering of like outcomes into Discord embed content.

use serenity::all::{CreateEmbed, Timestamp};

use likebot_access::ChannelToggle;
use likebot_like::like_outcome::FIELD_UNAVAILABLE;
use likebot_like::LikeOutcome;

const COLOR_SUCCESS: u32 = 0x00FFFF;
const COLOR_QUOTA: u32 = 0xFF0000;
const COLOR_NOT_FOUND: u32 = 0xE74C3C;
const COLOR_NEUTRAL: u32 = 0x7289DA;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Embed content before it is handed to the serenity builder, kept separate
/// so rendering is testable without a gateway connection.
pub(crate) struct OutcomeMessage {
    pub(crate) title: String,
    pub(crate) description: String,
    pub(crate) color: u32,
}

pub(crate) fn outcome_message(outcome: &LikeOutcome) -> OutcomeMessage {
    match outcome {
        LikeOutcome::Success {
            nickname,
            uid,
            region_code,
            level,
            likes_before,
            likes_added,
            likes_after,
            quota_remaining,
            key_expiry,
        } => OutcomeMessage {
            title: "Like Added".to_string(),
            description: format!(
                "**PLAYER INFO**\n\
                 Nickname: `{nickname}`\n\
                 UID: `{uid}`\n\
                 Region: `{}`\n\
                 Level: `{level}`\n\n\
                 **LIKE STATUS**\n\
                 Likes Before: `{likes_before}`\n\
                 Likes Added: `{likes_added}`\n\
                 Likes After: `{likes_after}`\n\n\
                 **KEY INFO**\n\
                 Remaining Quota: `{quota_remaining}`\n\
                 Key Expires At: `{key_expiry}`",
                region_display(region_code)
            ),
            color: COLOR_SUCCESS,
        },
        LikeOutcome::QuotaExceeded => OutcomeMessage {
            title: "Max Likes Sent Already".to_string(),
            description: "The maximum likes were already sent to this player today.\n\
                          Try again tomorrow."
                .to_string(),
            color: COLOR_QUOTA,
        },
        LikeOutcome::PlayerNotFound { uid } => OutcomeMessage {
            title: "Player Not Found".to_string(),
            description: format!(
                "UID `{uid}` not found or not accessible.\nMake sure it's correct."
            ),
            color: COLOR_NOT_FOUND,
        },
        LikeOutcome::ServiceError { status, message } => OutcomeMessage {
            title: "Error".to_string(),
            description: format!("{message} (status {status})"),
            color: COLOR_NEUTRAL,
        },
        LikeOutcome::Timeout => OutcomeMessage {
            title: "Timeout".to_string(),
            description: "The server took too long to respond.".to_string(),
            color: COLOR_NEUTRAL,
        },
        LikeOutcome::MissingArgument => OutcomeMessage {
            title: "Missing Argument".to_string(),
            description: "Please provide both region and UID. Example: `/like bd 1234567890`"
                .to_string(),
            color: COLOR_NEUTRAL,
        },
        LikeOutcome::ChannelNotAllowed => OutcomeMessage {
            title: "Channel Not Allowed".to_string(),
            description: "This channel is not allowed for `/like`.".to_string(),
            color: COLOR_NEUTRAL,
        },
    }
}

pub(crate) fn outcome_embed(outcome: &LikeOutcome) -> CreateEmbed {
    let message = outcome_message(outcome);
    CreateEmbed::new()
        .title(message.title)
        .description(message.description)
        .colour(message.color)
        .timestamp(Timestamp::now())
}

pub(crate) fn toggle_notice(toggle: ChannelToggle, channel_id: u64) -> String {
    match toggle {
        ChannelToggle::Added => format!("<#{channel_id}> is now allowed for `/like`."),
        ChannelToggle::Removed => format!("<#{channel_id}> is no longer allowed for `/like`."),
    }
}

fn region_display(region_code: &str) -> String {
    if region_code.is_empty() {
        FIELD_UNAVAILABLE.to_string()
    } else {
        region_code.to_uppercase()
    }
}
