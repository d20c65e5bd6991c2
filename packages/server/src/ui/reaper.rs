//! Inactivity reaper driver.
//!
//! Runs the reap sweep on a fixed period for the lifetime of the process.
//! The sweep period and the inactivity threshold are independent settings;
//! a cycle failure is logged and the next cycle proceeds regardless.

use std::sync::Arc;
use std::time::Duration;

use crate::usecase::ReapInactiveUseCase;

/// Periodic driver for [`ReapInactiveUseCase`]
pub struct InactivityReaper {
    /// 1 スイープ分のユースケース
    usecase: Arc<ReapInactiveUseCase>,
    /// スイープ間隔
    interval: Duration,
}

impl InactivityReaper {
    /// Create a new InactivityReaper
    pub fn new(usecase: Arc<ReapInactiveUseCase>, interval: Duration) -> Self {
        Self { usecase, interval }
    }

    /// Run the sweep loop forever. Intended to be `tokio::spawn`-ed.
    ///
    /// There is no cancellation path: the loop lives as long as the process.
    pub async fn run(self) {
        let mut ticker = tokio::time::interval(self.interval);
        // interval の最初の tick は即座に完了するため読み捨てる
        ticker.tick().await;

        loop {
            ticker.tick().await;
            if let Err(e) = self.usecase.execute().await {
                // 失敗はログに残すのみ。HTTP 応答は存在しないしタイマーも止めない
                tracing::error!("Reaper cycle failed: {}", e);
            }
        }
    }
}
