use std::env;
use std::time::Duration;

use engine::EngineConfig;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub api_port: u16,
    pub metrics_port: u16,
    pub engine: EngineSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EngineSettings {
    pub worker_count: usize,
    pub process_delay_ms: u64,
    pub shutdown_timeout_secs: u64,
    /// Number of OPEN bets enqueued at startup for demonstration purposes.
    pub seed_bets: u64,
}

impl Config {
    pub fn load() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        Ok(Config {
            api_port: env::var("API_PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()?,
            metrics_port: env::var("METRICS_PORT")
                .unwrap_or_else(|_| "9090".to_string())
                .parse()?,
            engine: EngineSettings {
                worker_count: env::var("ENGINE_WORKER_COUNT")
                    .unwrap_or_else(|_| "4".to_string())
                    .parse()?,
                process_delay_ms: env::var("ENGINE_PROCESS_DELAY_MS")
                    .unwrap_or_else(|_| "0".to_string())
                    .parse()?,
                shutdown_timeout_secs: env::var("ENGINE_SHUTDOWN_TIMEOUT_SECS")
                    .unwrap_or_else(|_| "60".to_string())
                    .parse()?,
                seed_bets: env::var("ENGINE_SEED_BETS")
                    .unwrap_or_else(|_| "0".to_string())
                    .parse()?,
            },
        })
    }
}

impl EngineSettings {
    pub fn to_engine_config(&self) -> EngineConfig {
        EngineConfig {
            worker_count: self.worker_count,
            process_delay: Duration::from_millis(self.process_delay_ms),
            shutdown_timeout: Duration::from_secs(self.shutdown_timeout_secs),
        }
    }
}
