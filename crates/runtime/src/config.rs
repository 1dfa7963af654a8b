//! Runtime configuration structures and loaders.
use std::env;
use std::path::PathBuf;

use mahjong_core::TxReceipt;

/// Chain identifier stamped on play records when none is configured.
pub const DEFAULT_CHAIN_ID: &str = "1776";
/// Address plays are sent to when none is configured.
pub const DEFAULT_TO_ADDRESS: &str = "0x6cd6592b7d2a9b1e59aa60a6138434d2fe4cd062";
/// Value sent per play, in ether, when none is configured.
pub const DEFAULT_PLAY_VALUE: &str = "0.000001";

/// Settings needed to open a play session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RuntimeConfig {
    /// Directory for the file store; `None` selects the platform data dir.
    pub save_data_dir: Option<PathBuf>,
    /// When false, the profile lives in memory only.
    pub enable_persistence: bool,
    pub chain_id: String,
    pub to_address: String,
    pub play_value: String,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            save_data_dir: None,
            enable_persistence: true,
            chain_id: DEFAULT_CHAIN_ID.to_owned(),
            to_address: DEFAULT_TO_ADDRESS.to_owned(),
            play_value: DEFAULT_PLAY_VALUE.to_owned(),
        }
    }
}

impl RuntimeConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `SAVE_DATA_DIR` - Directory for save data (default: platform-specific)
    /// - `ENABLE_PERSISTENCE` - Persist the profile to disk (default: true)
    /// - `GAME_CHAIN_ID` - Chain id recorded with each play (default: 1776)
    /// - `GAME_TO_ADDRESS` - Destination address recorded with each play
    /// - `GAME_PLAY_VALUE` - Ether value recorded with each play (default: 0.000001)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        config.save_data_dir = env::var("SAVE_DATA_DIR").ok().map(PathBuf::from);

        if let Some(enable) = read_env::<bool>("ENABLE_PERSISTENCE") {
            config.enable_persistence = enable;
        }

        if let Some(chain_id) = read_non_empty("GAME_CHAIN_ID") {
            config.chain_id = chain_id;
        }
        if let Some(to) = read_non_empty("GAME_TO_ADDRESS") {
            config.to_address = to;
        }
        if let Some(value) = read_non_empty("GAME_PLAY_VALUE") {
            config.play_value = value;
        }

        config
    }

    /// Receipt for a confirmed transaction sent with this configuration.
    pub fn receipt(&self, tx_hash: impl Into<String>, block_number: Option<u64>) -> TxReceipt {
        TxReceipt {
            chain_id: self.chain_id.clone(),
            to: self.to_address.clone(),
            value: self.play_value.clone(),
            tx_hash: tx_hash.into(),
            block_number,
        }
    }

    /// Directory the file store should use.
    pub fn data_dir(&self) -> PathBuf {
        self.save_data_dir.clone().unwrap_or_else(default_data_dir)
    }
}

/// Platform data directory for Hash Mahjong.
///
/// Follows platform conventions:
/// - macOS: `~/Library/Application Support/hash-mahjong`
/// - Linux: `~/.local/share/hash-mahjong` (or `$XDG_DATA_HOME/hash-mahjong`)
/// - Windows: `%APPDATA%\hash-mahjong`
/// - Fallback: `./save_data`
pub fn default_data_dir() -> PathBuf {
    directories::ProjectDirs::from("", "", "hash-mahjong")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("./save_data"))
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.trim().parse().ok()
}

fn read_non_empty(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|value| value.trim().to_owned())
        .filter(|value| !value.is_empty())
}
