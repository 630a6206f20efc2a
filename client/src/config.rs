//! Client configuration substituted into the bundle at build time.
//!
//! Values come from the build environment through `option_env!`, so the
//! compiled WASM carries them as string constants. Nothing is read at
//! runtime.

pub const DEFAULT_GAME_SERVER_URL: &str = "ws://127.0.0.1:8080";

/// Build-time values the UI layer may display or hand to other modules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub api_key: Option<String>,
    pub treasury_public_key: Option<String>,
    pub game_server_url: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self { api_key: None, treasury_public_key: None, game_server_url: DEFAULT_GAME_SERVER_URL.to_owned() }
    }
}

impl ClientConfig {
    /// Build typed config from variables captured at compile time.
    ///
    /// Optional:
    /// - `ARENA_API_KEY`
    /// - `ARENA_TREASURY_PUBKEY`
    /// - `ARENA_GAME_SERVER_URL`: default `ws://127.0.0.1:8080`
    pub fn from_build_env() -> Self {
        Self::from_vars(
            option_env!("ARENA_API_KEY"),
            option_env!("ARENA_TREASURY_PUBKEY"),
            option_env!("ARENA_GAME_SERVER_URL"),
        )
    }

    /// Build config from raw values; blank values count as absent.
    pub fn from_vars(api_key: Option<&str>, treasury_public_key: Option<&str>, game_server_url: Option<&str>) -> Self {
        let game_server_url = non_blank(game_server_url)
            .map_or(DEFAULT_GAME_SERVER_URL, |url| url.trim_end_matches('/'))
            .to_owned();
        Self {
            api_key: non_blank(api_key).map(str::to_owned),
            treasury_public_key: non_blank(treasury_public_key).map(str::to_owned),
            game_server_url,
        }
    }

    /// Host (and port) part of the game-server URL, for display.
    pub fn game_server_host(&self) -> &str {
        let without_scheme = self
            .game_server_url
            .split_once("://")
            .map_or(self.game_server_url.as_str(), |(_, rest)| rest);
        without_scheme.split('/').next().unwrap_or(without_scheme)
    }
}

fn non_blank(raw: Option<&str>) -> Option<&str> {
    raw.map(str::trim).filter(|v| !v.is_empty())
}

/// Abbreviate a long key as `head…tail`. Keys of 12 chars or fewer are
/// returned unchanged.
pub fn short_key(key: &str) -> String {
    const EDGE: usize = 4;
    let chars: Vec<char> = key.chars().collect();
    if chars.len() <= EDGE * 3 {
        return key.to_owned();
    }
    let head: String = chars[..EDGE].iter().collect();
    let tail: String = chars[chars.len() - EDGE..].iter().collect();
    format!("{head}…{tail}")
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
