//! downコマンド: 残っているリソースの削除だけを行う
//!
//! `up --keep`（またはKEEP_RESOURCE）で残したリソースの後片付け用。

use colored::Colorize;
use zoneflow_cloud::DnsProvider;

use crate::config::Config;

pub async fn handle(
    config: &Config,
    provider: &dyn DnsProvider,
    delete_resource_group: bool,
) -> anyhow::Result<()> {
    if delete_resource_group {
        println!(
            "{}",
            format!("■ リソースグループ {} を削除中...", config.resource_group)
                .yellow()
                .bold()
        );
        let operation = provider.delete_resource_group(&config.resource_group).await?;
        operation.wait_until_done().await?;
    } else {
        println!(
            "{}",
            format!("■ プライベートDNSゾーン {} を削除中...", config.zone_name)
                .yellow()
                .bold()
        );
        let operation = provider
            .delete_private_zone(&config.resource_group, &config.zone_name)
            .await?;
        operation.wait_until_done().await?;
    }

    println!();
    println!("{}", "✓ 削除が完了しました！".green().bold());
    Ok(())
}
