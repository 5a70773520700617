//! Pending station confirmations.
//!
//! When the best match is plausible but not certain, the user is asked
//! "Did you mean ...?" with accept/decline buttons. Each question is backed
//! by a single-use token carried in the button payload. The token table is
//! the only mutable state shared between queries.
//!
//! Offers the user never answers are reclaimed after an idle period, so
//! the table stays bounded.

use std::fmt;
use std::sync::Arc;
use std::time::{Duration, Instant};

use base64::{Engine as _, engine::general_purpose::URL_SAFE_NO_PAD};
use moka::future::Cache as MokaCache;
use moka::policy::EvictionPolicy;
use tracing::{debug, info};

use crate::domain::Station;

/// Identifier of the chat a confirmation was offered in.
pub type ConversationId = i64;

/// Random bytes per token; 16 bytes encode to 22 base64 characters.
const TOKEN_BYTES: usize = 16;

/// Attempts at drawing a token that is not already pending.
const TOKEN_ATTEMPTS: usize = 8;

/// Errors from the confirmation flow.
#[derive(Debug, thiserror::Error)]
pub enum ConfirmError {
    /// The token is unknown, expired or was already used
    #[error("unknown, expired or already used confirmation token")]
    InvalidToken,

    /// The OS random source failed
    #[error("failed to generate confirmation token: {0}")]
    Random(#[from] getrandom::Error),

    /// Every drawn token was already pending
    #[error("failed to generate an unused confirmation token")]
    TokenCollision,
}

/// Configuration for the confirmation table.
#[derive(Debug, Clone)]
pub struct ConfirmConfig {
    /// How long an unanswered offer stays valid.
    pub idle_ttl: Duration,

    /// Maximum number of outstanding offers.
    pub max_pending: u64,
}

impl ConfirmConfig {
    /// Set a custom idle period.
    pub fn with_idle_ttl(mut self, idle_ttl: Duration) -> Self {
        self.idle_ttl = idle_ttl;
        self
    }
}

impl Default for ConfirmConfig {
    fn default() -> Self {
        Self {
            idle_ttl: Duration::from_secs(10 * 60),
            max_pending: 10_000,
        }
    }
}

/// Opaque, unguessable identifier of a pending confirmation.
///
/// URL-safe base64, short enough for a chat button's callback data.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Token(String);

impl Token {
    fn generate() -> Result<Self, ConfirmError> {
        let mut bytes = [0u8; TOKEN_BYTES];
        getrandom::getrandom(&mut bytes)?;
        Ok(Token(URL_SAFE_NO_PAD.encode(bytes)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for Token {
    fn from(s: String) -> Self {
        Token(s)
    }
}

impl From<&str> for Token {
    fn from(s: &str) -> Self {
        Token(s.to_string())
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Token({})", self.0)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A suggestion waiting for the user's answer.
#[derive(Debug, Clone)]
struct PendingConfirmation {
    conversation: ConversationId,
    station: Arc<Station>,
    created_at: Instant,
}

/// The user's answer to a confirmation.
#[derive(Debug, Clone)]
pub enum Confirmation {
    /// The user accepted the suggested station.
    Resolved(Arc<Station>),
    /// The user turned the suggestion down.
    Declined,
}

/// Issues and redeems confirmation tokens.
pub struct InteractionController {
    pending: MokaCache<Token, PendingConfirmation>,
    idle_ttl: Duration,
}

impl InteractionController {
    /// Create a controller with the given configuration.
    pub fn new(config: &ConfirmConfig) -> Self {
        // LRU: when full, the oldest offer goes, never the one just made
        let pending = MokaCache::builder()
            .time_to_idle(config.idle_ttl)
            .max_capacity(config.max_pending)
            .eviction_policy(EvictionPolicy::lru())
            .build();

        Self {
            pending,
            idle_ttl: config.idle_ttl,
        }
    }

    /// Offer `station` to the user in `conversation`, returning the token
    /// their answer must carry.
    pub async fn offer(
        &self,
        conversation: ConversationId,
        station: Arc<Station>,
    ) -> Result<Token, ConfirmError> {
        let pending = PendingConfirmation {
            conversation,
            station,
            created_at: Instant::now(),
        };

        for _ in 0..TOKEN_ATTEMPTS {
            let token = Token::generate()?;
            let entry = self
                .pending
                .entry(token.clone())
                .or_insert(pending.clone())
                .await;

            if entry.is_fresh() {
                info!(
                    conversation,
                    station = pending.station.name(),
                    "offered station for confirmation"
                );
                return Ok(token);
            }
        }

        Err(ConfirmError::TokenCollision)
    }

    /// Redeem a token with the user's answer.
    ///
    /// Each token succeeds at most once: the entry is removed atomically, so
    /// of two concurrent calls with the same token exactly one wins.
    pub async fn resolve(
        &self,
        token: &Token,
        accepted: bool,
    ) -> Result<Confirmation, ConfirmError> {
        let Some(pending) = self.pending.remove(token).await else {
            debug!(%token, "confirmation token not pending");
            return Err(ConfirmError::InvalidToken);
        };

        if pending.created_at.elapsed() > self.idle_ttl {
            debug!(%token, "confirmation token expired");
            return Err(ConfirmError::InvalidToken);
        }

        info!(
            conversation = pending.conversation,
            station = pending.station.name(),
            accepted,
            "confirmation answered"
        );

        if accepted {
            Ok(Confirmation::Resolved(pending.station))
        } else {
            Ok(Confirmation::Declined)
        }
    }

    /// Approximate number of outstanding offers.
    pub fn pending_count(&self) -> u64 {
        self.pending.entry_count()
    }

    /// Evict expired offers now instead of on the next table access.
    pub async fn run_housekeeping(&self) {
        self.pending.run_pending_tasks().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::StationCatalog;

    fn station(name: &str) -> Arc<Station> {
        let json = format!(
            r#"[{{"name": "{name}", "code": ["EW24"], "lines": [
                {{"line": "EW", "timings": [{{"dest": "Pasir Ris", "last": "23:12"}}]}}
            ]}}]"#
        );
        let catalog = StationCatalog::from_json_str(&json).unwrap();
        Arc::clone(&catalog.stations()[0])
    }

    fn controller() -> InteractionController {
        InteractionController::new(&ConfirmConfig::default())
    }

    #[test]
    fn default_config() {
        let config = ConfirmConfig::default();
        assert_eq!(config.idle_ttl, Duration::from_secs(600));
        assert_eq!(config.max_pending, 10_000);
    }

    #[test]
    fn token_shape() {
        let token = Token::generate().unwrap();
        assert_eq!(token.as_str().len(), 22);
        assert!(
            token
                .as_str()
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        );
    }

    #[test]
    fn tokens_differ() {
        let a = Token::generate().unwrap();
        let b = Token::generate().unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn error_display() {
        assert_eq!(
            ConfirmError::InvalidToken.to_string(),
            "unknown, expired or already used confirmation token"
        );
    }

    #[tokio::test]
    async fn accept_resolves_station() {
        let controller = controller();
        let token = controller.offer(42, station("Jurong East")).await.unwrap();

        match controller.resolve(&token, true).await.unwrap() {
            Confirmation::Resolved(s) => assert_eq!(s.name(), "Jurong East"),
            Confirmation::Declined => panic!("expected Resolved"),
        }
    }

    #[tokio::test]
    async fn decline() {
        let controller = controller();
        let token = controller.offer(42, station("Jurong East")).await.unwrap();

        assert!(matches!(
            controller.resolve(&token, false).await.unwrap(),
            Confirmation::Declined
        ));
    }

    #[tokio::test]
    async fn token_is_single_use() {
        let controller = controller();
        let token = controller.offer(42, station("Jurong East")).await.unwrap();

        assert!(controller.resolve(&token, true).await.is_ok());
        assert!(matches!(
            controller.resolve(&token, true).await,
            Err(ConfirmError::InvalidToken)
        ));
        assert!(matches!(
            controller.resolve(&token, false).await,
            Err(ConfirmError::InvalidToken)
        ));
    }

    #[tokio::test]
    async fn declined_token_is_consumed() {
        let controller = controller();
        let token = controller.offer(42, station("Jurong East")).await.unwrap();

        assert!(controller.resolve(&token, false).await.is_ok());
        assert!(controller.resolve(&token, true).await.is_err());
    }

    #[tokio::test]
    async fn unknown_token() {
        let controller = controller();
        let result = controller.resolve(&Token::from("not-a-token"), true).await;
        assert!(matches!(result, Err(ConfirmError::InvalidToken)));
    }

    #[tokio::test]
    async fn offers_are_independent() {
        let controller = controller();
        let a = controller.offer(1, station("Jurong East")).await.unwrap();
        let b = controller.offer(2, station("Clementi")).await.unwrap();
        assert_ne!(a, b);

        match controller.resolve(&b, true).await.unwrap() {
            Confirmation::Resolved(s) => assert_eq!(s.name(), "Clementi"),
            Confirmation::Declined => panic!("expected Resolved"),
        }
        match controller.resolve(&a, true).await.unwrap() {
            Confirmation::Resolved(s) => assert_eq!(s.name(), "Jurong East"),
            Confirmation::Declined => panic!("expected Resolved"),
        }
    }

    #[tokio::test]
    async fn stale_token_rejected() {
        let config = ConfirmConfig::default().with_idle_ttl(Duration::from_millis(50));
        let controller = InteractionController::new(&config);
        let token = controller.offer(42, station("Jurong East")).await.unwrap();

        tokio::time::sleep(Duration::from_millis(150)).await;

        assert!(matches!(
            controller.resolve(&token, true).await,
            Err(ConfirmError::InvalidToken)
        ));
    }

    #[tokio::test]
    async fn housekeeping_reclaims_stale_offers() {
        let config = ConfirmConfig::default().with_idle_ttl(Duration::from_millis(50));
        let controller = InteractionController::new(&config);
        for conversation in 0..10 {
            controller
                .offer(conversation, station("Jurong East"))
                .await
                .unwrap();
        }

        tokio::time::sleep(Duration::from_millis(150)).await;
        controller.run_housekeeping().await;

        assert_eq!(controller.pending_count(), 0);
    }

    #[tokio::test]
    async fn full_table_keeps_newest_offer() {
        let config = ConfirmConfig {
            max_pending: 3,
            ..ConfirmConfig::default()
        };
        let controller = InteractionController::new(&config);

        let mut tokens = Vec::new();
        for conversation in 0..10 {
            let token = controller
                .offer(conversation, station("Jurong East"))
                .await
                .unwrap();
            controller.run_housekeeping().await;
            tokens.push(token);
        }

        assert!(controller.pending_count() <= 3);
        assert!(matches!(
            controller.resolve(&tokens[0], true).await,
            Err(ConfirmError::InvalidToken)
        ));
        match controller.resolve(&tokens[9], true).await.unwrap() {
            Confirmation::Resolved(s) => assert_eq!(s.name(), "Jurong East"),
            Confirmation::Declined => panic!("expected Resolved"),
        }
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_resolution_succeeds_once() {
        let controller = Arc::new(controller());
        let token = controller.offer(42, station("Jurong East")).await.unwrap();

        let handles: Vec<_> = (0..16)
            .map(|i| {
                let controller = Arc::clone(&controller);
                let token = token.clone();
                tokio::spawn(async move { controller.resolve(&token, i % 2 == 0).await })
            })
            .collect();

        let mut successes = 0;
        for handle in handles {
            if handle.await.unwrap().is_ok() {
                successes += 1;
            }
        }
        assert_eq!(successes, 1);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_offers_get_distinct_tokens() {
        let controller = Arc::new(controller());
        let station = station("Jurong East");

        let handles: Vec<_> = (0..32)
            .map(|i| {
                let controller = Arc::clone(&controller);
                let station = Arc::clone(&station);
                tokio::spawn(async move { controller.offer(i, station).await.unwrap() })
            })
            .collect();

        let mut tokens = std::collections::HashSet::new();
        for handle in handles {
            tokens.insert(handle.await.unwrap());
        }
        assert_eq!(tokens.len(), 32);
    }
}
