use likebot_access::{check_channel_access, LikeChannelStore};

use crate::like_client::LikeApiClient;
use crate::like_outcome::{classify_transport_result, LikeOutcome};
use crate::like_request::{normalize_like_args, RawLikeArgs};

#[derive(Debug, Clone)]
/// Originating context of a like request, as reported by the host surface.
pub struct LikeRequestContext {
    /// Absent for direct messages.
    pub guild_id: Option<String>,
    pub channel_id: String,
}

/// Runs one like request end to end: gate, normalize, dispatch, classify.
///
/// Always produces a [`LikeOutcome`]; no failure mode escapes to the caller.
/// At most one outbound call is made, and only after the gate and the
/// normalizer have both passed.
pub async fn run_like_request(
    store: &LikeChannelStore,
    client: &LikeApiClient,
    context: &LikeRequestContext,
    args: &RawLikeArgs,
) -> LikeOutcome {
    let decision = check_channel_access(store, context.guild_id.as_deref(), &context.channel_id);
    if !decision.allowed() {
        tracing::debug!(
            channel_id = %context.channel_id,
            decision = decision.as_str(),
            "like request rejected by channel gate"
        );
        return LikeOutcome::ChannelNotAllowed;
    }

    let Some(request) = normalize_like_args(args) else {
        return LikeOutcome::MissingArgument;
    };

    let transport = client.send_like(&request).await;
    classify_transport_result(transport, &request.uid, &request.region_code)
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use likebot_access::like_channel_store::LIKE_CHANNEL_CONFIG_FILE_NAME;
    use serde_json::json;

    fn store_with_channel(dir: &tempfile::TempDir, guild: &str, channel: &str) -> LikeChannelStore {
        let store =
            LikeChannelStore::load(dir.path().join(LIKE_CHANNEL_CONFIG_FILE_NAME)).expect("load");
        store.toggle_channel(guild, channel).expect("toggle");
        store
    }

    fn context(guild: Option<&str>, channel: &str) -> LikeRequestContext {
        LikeRequestContext {
            guild_id: guild.map(str::to_string),
            channel_id: channel.to_string(),
        }
    }

    fn args(region: Option<&str>, uid: Option<&str>) -> RawLikeArgs {
        RawLikeArgs {
            region: region.map(str::to_string),
            uid: uid.map(str::to_string),
        }
    }

    #[tokio::test]
    async fn gated_channel_never_reaches_the_provider() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = store_with_channel(&dir, "guild-1", "100");
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET);
            then.status(200).json_body(json!({"status": 1}));
        });
        let client = LikeApiClient::new(server.base_url(), "k", 2_000).expect("client");

        let outcome = run_like_request(
            &store,
            &client,
            &context(Some("guild-1"), "999"),
            &args(Some("bd"), Some("42")),
        )
        .await;

        assert_eq!(outcome, LikeOutcome::ChannelNotAllowed);
        assert_eq!(mock.calls(), 0);
    }

    #[tokio::test]
    async fn direct_message_is_rejected() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = store_with_channel(&dir, "guild-1", "100");
        let client = LikeApiClient::new("http://127.0.0.1:9", "k", 100).expect("client");

        let outcome =
            run_like_request(&store, &client, &context(None, "100"), &args(None, Some("42")))
                .await;
        assert_eq!(outcome, LikeOutcome::ChannelNotAllowed);
    }

    #[tokio::test]
    async fn missing_arguments_short_circuit_before_dispatch() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = store_with_channel(&dir, "guild-1", "100");
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET);
            then.status(200).json_body(json!({"status": 1}));
        });
        let client = LikeApiClient::new(server.base_url(), "k", 2_000).expect("client");

        let outcome = run_like_request(
            &store,
            &client,
            &context(Some("guild-1"), "100"),
            &args(None, None),
        )
        .await;

        assert_eq!(outcome, LikeOutcome::MissingArgument);
        assert_eq!(mock.calls(), 0);
    }

    #[tokio::test]
    async fn allowed_request_flows_to_classification() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = store_with_channel(&dir, "guild-1", "100");
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET).path("/bd/12345678").query_param("key", "k");
            then.status(200).json_body(json!({
                "status": 1,
                "response": {"PlayerNickname": "Rook", "LikesGivenByAPI": 100}
            }));
        });
        let client = LikeApiClient::new(server.base_url(), "k", 2_000).expect("client");

        let outcome = run_like_request(
            &store,
            &client,
            &context(Some("guild-1"), "100"),
            &args(Some("bd"), Some("12345678")),
        )
        .await;

        match outcome {
            LikeOutcome::Success {
                nickname,
                likes_added,
                ..
            } => {
                assert_eq!(nickname, "Rook");
                assert_eq!(likes_added, "100");
            }
            other => panic!("expected success, got {other:?}"),
        }
        assert_eq!(mock.calls(), 1);
    }

    #[tokio::test]
    async fn uid_only_invocation_uses_default_backend() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = store_with_channel(&dir, "guild-1", "100");
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET).path("/ind/12345678");
            then.status(200).json_body(json!({"status": 0}));
        });
        let client = LikeApiClient::new(server.base_url(), "k", 2_000).expect("client");

        let outcome = run_like_request(
            &store,
            &client,
            &context(Some("guild-1"), "100"),
            &args(Some("12345678"), None),
        )
        .await;

        assert_eq!(outcome, LikeOutcome::QuotaExceeded);
        assert_eq!(mock.calls(), 1);
    }
}
