mod commands;
mod config;

use clap::{Parser, Subcommand};
use colored::Colorize;
use zoneflow_cloud::DnsProvider;
use zoneflow_cloud_azure::AzureProvider;

use crate::config::Config;

#[derive(Parser)]
#[command(name = "zoneflow")]
#[command(about = "作って、確かめて、片付ける。Azure Private DNSの検証ツール。", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// プライベートDNSゾーンを作成して検証する（既定では終了前に削除）
    Up {
        /// 作成したリソースを削除せずに残す（KEEP_RESOURCE と同じ）
        #[arg(long)]
        keep: bool,

        /// リソースグループも作成する（PROVISION_RESOURCE_GROUP と同じ）
        #[arg(long)]
        with_resource_group: bool,
    },
    /// 残っているリソースを削除する
    Down {
        /// ゾーンだけでなくリソースグループごと削除する
        #[arg(long)]
        with_resource_group: bool,
    },
    /// バージョン情報を表示
    Version,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    // Versionコマンドは設定不要なので先に処理する
    if matches!(cli.command, Commands::Version) {
        println!("zoneflow {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    // 環境変数から設定を構築（不足があればリモート呼び出しの前に終了）
    let config = Config::from_env()?;

    match cli.command {
        Commands::Up {
            keep,
            with_resource_group,
        } => {
            // CLIフラグは環境変数の設定に上書きでORする
            let config = Config {
                keep_resources: config.keep_resources || keep,
                provision_resource_group: config.provision_resource_group || with_resource_group,
                ..config
            };
            let provider = build_provider(&config)?;
            let outcome = commands::up::handle(&config, &provider).await?;

            println!();
            println!("{}", "✓ すべてのステップが完了しました！".green().bold());
            if !outcome.cleaned_up {
                println!("{}", "  残っているリソース:".dimmed());
                if let Some(id) = &outcome.resource_group_id {
                    println!("    {}", id.dimmed());
                }
                println!("    {}", outcome.zone_id.dimmed());
                if let Some(id) = &outcome.record_set_id {
                    println!("    {}", id.dimmed());
                }
                println!(
                    "{}",
                    "  削除するには zoneflow down を実行してください".dimmed()
                );
            }
        }
        Commands::Down {
            with_resource_group,
        } => {
            let delete_group = with_resource_group || config.provision_resource_group;
            let provider = build_provider(&config)?;
            commands::down::handle(&config, &provider, delete_group).await?;
        }
        Commands::Version => {
            // すでに上で処理済み
            unreachable!()
        }
    }

    Ok(())
}

/// マネージドIDで認証するAzureプロバイダを構築する
fn build_provider(config: &Config) -> anyhow::Result<AzureProvider> {
    let provider = AzureProvider::new(config.subscription_id.clone(), config.client_id.clone())?;
    tracing::debug!("provider: {}", provider.name());
    Ok(provider)
}
