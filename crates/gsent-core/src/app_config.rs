use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub guardian_api_key: String,
    pub guardian_base_url: String,
    pub log_level: String,
    pub request_timeout_secs: u64,
    pub user_agent: String,
    pub max_retries: u32,
    pub retry_backoff_base_ms: u64,
    pub fetch_concurrency: usize,
    pub output_dir: PathBuf,
}
