use anyhow::Context;
use bsky_core::ServiceConfig;

const DEFAULT_HOSTNAME: &str = "example.com";
const DEFAULT_PORT: u16 = 3000;
const DEFAULT_LISTEN_HOST: &str = "localhost";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub service: ServiceConfig,
    pub port: u16,
    pub listen_host: String,
}

impl AppConfig {
    /// `.env` があれば読み込んだうえで環境変数から設定を組み立てる
    pub fn from_env() -> anyhow::Result<Self> {
        if let Err(e) = dotenv::dotenv() {
            tracing::debug!("No .env file loaded: {}", e);
        }
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// `lookup` で各設定値を解決する（空文字列は未設定として扱う）
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.is_empty());

        let hostname = non_empty("FEEDGEN_HOSTNAME").unwrap_or_else(|| DEFAULT_HOSTNAME.to_string());
        let service_did =
            non_empty("FEEDGEN_SERVICE_DID").unwrap_or_else(|| format!("did:web:{}", hostname));

        let port = match non_empty("FEEDGEN_PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .with_context(|| format!("Invalid FEEDGEN_PORT: {:?}", raw))?,
            None => DEFAULT_PORT,
        };

        let listen_host =
            non_empty("FEEDGEN_LISTENHOST").unwrap_or_else(|| DEFAULT_LISTEN_HOST.to_string());

        Ok(Self {
            service: ServiceConfig::new(service_did, hostname),
            port,
            listen_host,
        })
    }

    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.listen_host, self.port)
    }
}
