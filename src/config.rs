use std::path::PathBuf;
use clap::Parser;

#[derive(Parser, Clone, Debug)]
pub struct Config {
    #[clap(env, long, default_value = "http://localhost:8080")]
    pub api_base_url: String,
    #[clap(env, long, default_value = ".maya-portal/session.json")]
    pub session_file: PathBuf,
    #[clap(env, long, default_value_t = 15)]
    pub request_timeout_secs: u64,
}
