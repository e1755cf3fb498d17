use serde::{Deserialize, Serialize};

pub const DID_CONTEXT_V1: &str = "https://www.w3.org/ns/did/v1";
pub const FEED_GENERATOR_SERVICE_ID: &str = "#bsky_fg";
pub const FEED_GENERATOR_SERVICE_TYPE: &str = "BskyFeedGenerator";

/// フィードジェネレーターのサービス識別情報
///
/// 起動時に一度だけ組み立てられ、以降は読み取り専用で扱う。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    pub service_did: String,
    pub hostname: String,
}

impl ServiceConfig {
    pub fn new(service_did: impl Into<String>, hostname: impl Into<String>) -> Self {
        Self {
            service_did: service_did.into(),
            hostname: hostname.into(),
        }
    }

    /// `service_did` が `hostname` で終わっている場合のみ DID ドキュメントを公開する
    ///
    /// 単純な文字列の後方一致であり、ドメイン区切り (`.`) は確認しない。
    /// 空の hostname は常に一致する。
    pub fn serves_did_document(&self) -> bool {
        self.service_did.ends_with(&self.hostname)
    }
}

/// `/.well-known/did.json` のレスポンス型
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DidDocument {
    #[serde(rename = "@context")]
    pub context: Vec<String>,
    pub id: String,
    pub service: Vec<DidService>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DidService {
    pub id: String,
    #[serde(rename = "type")]
    pub service_type: String,
    #[serde(rename = "serviceEndpoint")]
    pub service_endpoint: String,
}

impl DidService {
    pub fn feed_generator(hostname: &str) -> Self {
        Self {
            id: FEED_GENERATOR_SERVICE_ID.to_string(),
            service_type: FEED_GENERATOR_SERVICE_TYPE.to_string(),
            service_endpoint: format!("https://{}", hostname),
        }
    }
}

impl DidDocument {
    /// 後方一致の判定をせずにドキュメントを組み立てる
    ///
    /// 判定込みで求める場合は [`did_document_for`] を使う。
    pub fn for_service(config: &ServiceConfig) -> Self {
        Self {
            context: vec![DID_CONTEXT_V1.to_string()],
            id: config.service_did.clone(),
            service: vec![DidService::feed_generator(&config.hostname)],
        }
    }
}

/// 設定から公開すべき DID ドキュメントを求める
///
/// 後方一致しない場合は `None`（呼び出し側で 404 にする）。
pub fn did_document_for(config: &ServiceConfig) -> Option<DidDocument> {
    if !config.serves_did_document() {
        return None;
    }
    Some(DidDocument::for_service(config))
}
