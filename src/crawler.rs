use crate::config::Config;
use crate::errors::AppError;
use crate::graph_client::GraphClient;
use crate::models::UserRecord;
use crate::storage::UserStorage;

/// Sequential enumeration driver.
///
/// Walks uids from a resolved start up to the configured ceiling, one at a
/// time: fetch from the Graph, convert, store. Failures are logged and
/// skipped, except the rate-limit condition, which pauses the whole run and
/// then retries the same uid.
pub struct Crawler {
    client: GraphClient,
    storage: UserStorage,
    config: Config,
}

impl Crawler {
    pub fn new(client: GraphClient, storage: UserStorage, config: Config) -> Self {
        Self {
            client,
            storage,
            config,
        }
    }

    /// Resolves the starting uid: the stored high-water mark plus one when
    /// resuming, otherwise 0.
    pub async fn resolve_start(&self) -> Result<u64, AppError> {
        if self.config.resume {
            self.storage.next_uid().await
        } else {
            Ok(0)
        }
    }

    /// Runs the enumeration loop from `start` up to (not including) the
    /// configured ceiling. Returns the number of users stored.
    ///
    /// Aborts before the first fetch when the ceiling is below the start.
    /// A ctrl-c during the rate-limit pause ends the run cleanly.
    pub async fn run(&self, start: u64) -> anyhow::Result<u64> {
        if self.config.max_uid < start {
            anyhow::bail!(
                "max uid {} is less than starting uid {}",
                self.config.max_uid,
                start
            );
        }
        tracing::info!("grabbing uids from {} to {}", start, self.config.max_uid);

        let mut total: u64 = 0;
        let mut uid = start;
        while uid < self.config.max_uid {
            match self.step(uid).await {
                Ok(user) => {
                    total += 1;
                    tracing::info!("stored uid {} ({})", uid, user.username);
                    if total % 1000 == 0 {
                        tracing::info!("{} users stored", total);
                    }
                }
                Err(e) => {
                    tracing::warn!("failed uid {}: {}", uid, e);
                    if e.is_rate_limit() {
                        if !self.pause().await {
                            break;
                        }
                        // Retry the same uid once the limit window has
                        // passed.
                        continue;
                    }
                }
            }
            uid += 1;
        }

        Ok(total)
    }

    /// One fetch → convert → store chain for a single uid.
    async fn step(&self, uid: u64) -> Result<UserRecord, AppError> {
        let profile = self.client.fetch_profile(uid).await?;
        let user = profile.into_record()?;
        self.storage.store(&user).await?;
        Ok(user)
    }

    /// Stalls for the configured backoff. Returns false if the wait was
    /// interrupted by ctrl-c, in which case the run should stop.
    async fn pause(&self) -> bool {
        tracing::info!(
            "request limit reached, pausing for {:?}",
            self.config.rate_limit_backoff
        );
        tokio::select! {
            _ = tokio::time::sleep(self.config.rate_limit_backoff) => true,
            _ = tokio::signal::ctrl_c() => {
                tracing::info!("interrupted during rate-limit pause, shutting down");
                false
            }
        }
    }
}
