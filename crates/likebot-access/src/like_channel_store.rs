use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};

use likebot_core::write_text_atomic;

pub const LIKE_CHANNEL_CONFIG_FILE_NAME: &str = "like_channels.json";

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
/// Allowed-channel entry persisted per guild.
pub struct GuildChannelEntry {
    #[serde(default)]
    pub like_channels: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
/// On-disk document mapping guild ids to their allowed like channels.
pub struct LikeChannelConfigFile {
    #[serde(default)]
    pub servers: BTreeMap<String, GuildChannelEntry>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Result of flipping a channel's allowlist membership.
pub enum ChannelToggle {
    Added,
    Removed,
}

impl ChannelToggle {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Added => "added",
            Self::Removed => "removed",
        }
    }
}

/// Durable guild allowlist with a lock-guarded in-memory mirror.
///
/// All reads and writes go through the same mutex so concurrent toggles
/// cannot lose updates, and every mutation is flushed with an atomic
/// temp-file-then-rename before the caller observes the result.
pub struct LikeChannelStore {
    path: PathBuf,
    state: Mutex<LikeChannelConfigFile>,
}

impl LikeChannelStore {
    /// Loads the allowlist document, healing an absent or corrupt file.
    ///
    /// A file that fails to parse is logged, discarded, and replaced with a
    /// fresh empty document on disk. Load never fails because of document
    /// content, only on filesystem errors while persisting the default.
    pub fn load(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let state = match std::fs::read_to_string(&path) {
            Ok(raw) => match serde_json::from_str::<LikeChannelConfigFile>(&raw) {
                Ok(parsed) => parsed,
                Err(error) => {
                    tracing::warn!(
                        path = %path.display(),
                        %error,
                        "like channel config is corrupt; resetting to empty document"
                    );
                    let default = LikeChannelConfigFile::default();
                    persist_config(&path, &default)?;
                    default
                }
            },
            Err(_) => {
                let default = LikeChannelConfigFile::default();
                persist_config(&path, &default)?;
                default
            }
        };
        Ok(Self {
            path,
            state: Mutex::new(state),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns true when the channel is in the guild's allowed set.
    ///
    /// A poisoned lock denies: the safe answer for an access check.
    pub fn is_channel_allowed(&self, guild_id: &str, channel_id: &str) -> bool {
        let Ok(state) = self.state.lock() else {
            return false;
        };
        state
            .servers
            .get(guild_id)
            .map(|entry| entry.like_channels.iter().any(|id| id == channel_id))
            .unwrap_or(false)
    }

    /// Flips the channel's membership in the guild's allowed set.
    ///
    /// The updated document is persisted before the toggle result is
    /// returned, so a crash after this call cannot forget the change.
    pub fn toggle_channel(&self, guild_id: &str, channel_id: &str) -> Result<ChannelToggle> {
        let mut state = self
            .state
            .lock()
            .map_err(|_| anyhow!("like channel store lock is poisoned"))?;
        let entry = state.servers.entry(guild_id.to_string()).or_default();
        let toggle = match entry.like_channels.iter().position(|id| id == channel_id) {
            Some(index) => {
                entry.like_channels.remove(index);
                ChannelToggle::Removed
            }
            None => {
                entry.like_channels.push(channel_id.to_string());
                ChannelToggle::Added
            }
        };
        persist_config(&self.path, &state)?;
        Ok(toggle)
    }

    /// Snapshot of the current document, for diagnostics and tests.
    pub fn snapshot(&self) -> Result<LikeChannelConfigFile> {
        let state = self
            .state
            .lock()
            .map_err(|_| anyhow!("like channel store lock is poisoned"))?;
        Ok(state.clone())
    }
}

fn persist_config(path: &Path, config: &LikeChannelConfigFile) -> Result<()> {
    let rendered =
        serde_json::to_string_pretty(config).context("failed to serialize like channel config")?;
    write_text_atomic(path, &rendered)
        .with_context(|| format!("failed to persist like channel config {}", path.display()))
}
