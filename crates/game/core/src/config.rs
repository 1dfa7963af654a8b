/// Game constants shared by the engine and its callers.
///
/// These are versioned behaviour, not runtime configuration: changing any of
/// them changes the outcome of past and future plays.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GameConfig;

impl GameConfig {
    // ===== seed =====
    /// Number of trailing hash characters that form a seed.
    pub const SEED_LEN: usize = 10;
    /// Alphabet a seed is drawn from, in enumeration order.
    pub const ALPHABET: &'static [u8; 16] = b"0123456789abcdef";

    // ===== progression =====
    /// Highest reachable level. Experience stops accruing here.
    pub const MAX_LEVEL: u32 = 100;
    /// Experience granted for a play that matches no rule.
    pub const CONSOLATION_EXP: u64 = 5;

    // ===== persistence =====
    /// Number of play records retained, oldest evicted first.
    pub const HISTORY_LIMIT: usize = 50;
}
