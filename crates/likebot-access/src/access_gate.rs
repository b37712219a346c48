use crate::like_channel_store::LikeChannelStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Gate decision for a like request's originating context.
pub enum AccessDecision {
    Allowed,
    DeniedDirectMessage,
    DeniedChannelNotAllowed,
}

impl AccessDecision {
    pub fn allowed(self) -> bool {
        matches!(self, Self::Allowed)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Allowed => "allowed",
            Self::DeniedDirectMessage => "denied_direct_message",
            Self::DeniedChannelNotAllowed => "denied_channel_not_allowed",
        }
    }
}

/// Decides whether a like request may run in its originating context.
///
/// Opt-in model: direct messages are denied, and a guild with no configured
/// allowlist denies everywhere until an administrator enables a channel.
pub fn check_channel_access(
    store: &LikeChannelStore,
    guild_id: Option<&str>,
    channel_id: &str,
) -> AccessDecision {
    let Some(guild_id) = guild_id else {
        return AccessDecision::DeniedDirectMessage;
    };
    if store.is_channel_allowed(guild_id, channel_id) {
        AccessDecision::Allowed
    } else {
        AccessDecision::DeniedChannelNotAllowed
    }
}
