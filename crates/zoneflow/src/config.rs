//! 環境変数からの設定読み込み
//!
//! 必須の値が揃っているか（空でないか）だけをここで検証する。
//! 名前やリージョンの形式チェックはAzure側の検証に委ねる。

use thiserror::Error;

// 必須の環境変数
const ENV_SUBSCRIPTION_ID: &str = "AZURE_SUBSCRIPTION_ID";
const ENV_CLIENT_ID: &str = "AZURE_CLIENT_ID";
const ENV_LOCATION: &str = "AZURE_LOCATION";
const ENV_RESOURCE_GROUP: &str = "AZURE_RESOURCEGROUP_NAME";
const ENV_ZONE_NAME: &str = "AZURE_PRIVATE_DNSZONE";

// 任意の環境変数
const ENV_RECORD_SET_NAME: &str = "AZURE_RECORDSET_NAME";
const ENV_KEEP_RESOURCE: &str = "KEEP_RESOURCE";
const ENV_PROVISION_RESOURCE_GROUP: &str = "PROVISION_RESOURCE_GROUP";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("環境変数 {0} が設定されていません")]
    MissingEnvVar(String),
}

/// 実行全体で共有する設定（構築後は変更しない）
#[derive(Debug, Clone)]
pub struct Config {
    /// 対象のサブスクリプションID
    pub subscription_id: String,

    /// ユーザー割り当てマネージドIDのクライアントID
    pub client_id: String,

    /// リソースを配置するリージョン（例: "eastus"）
    pub location: String,

    /// 使用する（または作成する）リソースグループ名
    pub resource_group: String,

    /// 作成するプライベートDNSゾーン名
    pub zone_name: String,

    /// Someの場合のみAレコードセットを作成する
    pub record_set_name: Option<String>,

    /// trueなら作成したリソースを削除せずに残す
    pub keep_resources: bool,

    /// trueならリソースグループも作成する（削除時はグループごと削除）
    pub provision_resource_group: bool,
}

impl Config {
    /// 環境変数から設定を構築する。
    ///
    /// 必須の変数が未設定または空文字列の場合は、その変数名を含む
    /// エラーを返す。リモート呼び出しが始まる前にここで失敗させる。
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            subscription_id: required(ENV_SUBSCRIPTION_ID)?,
            client_id: required(ENV_CLIENT_ID)?,
            location: required(ENV_LOCATION)?,
            resource_group: required(ENV_RESOURCE_GROUP)?,
            zone_name: required(ENV_ZONE_NAME)?,
            record_set_name: optional(ENV_RECORD_SET_NAME),
            keep_resources: flag(ENV_KEEP_RESOURCE),
            provision_resource_group: flag(ENV_PROVISION_RESOURCE_GROUP),
        })
    }
}

fn required(name: &str) -> Result<String, ConfigError> {
    match std::env::var(name) {
        Ok(value) if !value.is_empty() => Ok(value),
        _ => Err(ConfigError::MissingEnvVar(name.to_string())),
    }
}

fn optional(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|value| !value.is_empty())
}

/// フラグは「空でない値が設定されているか」だけを見る。
/// "0" や "false" でも、設定されていれば有効になる。
fn flag(name: &str) -> bool {
    optional(name).is_some()
}
