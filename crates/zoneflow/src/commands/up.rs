//! upコマンド: ゾーンの作成から後片付けまでを一気に実行する

use colored::Colorize;
use zoneflow_cloud::{DnsProvider, RecordData, RecordType};

use crate::config::Config;

/// 実行で作成（・削除）したリソースのサマリ
#[derive(Debug, Clone)]
pub struct Outcome {
    pub resource_group_id: Option<String>,
    pub zone_id: String,
    pub record_set_id: Option<String>,
    pub cleaned_up: bool,
}

/// 作成 → 完了待ち → （任意で）レコードセット → 後片付け の順に実行する。
///
/// 途中で失敗した場合はそこで中断し、後片付けは行わない。
/// 残ったリソースは `zoneflow down` で削除できる。
pub async fn handle(config: &Config, provider: &dyn DnsProvider) -> anyhow::Result<Outcome> {
    // リソースグループ作成はフラグ指定時のみ（既存グループを使う運用が既定）
    let mut resource_group_id = None;
    if config.provision_resource_group {
        println!(
            "{}",
            format!("▶ リソースグループ {} を作成中...", config.resource_group)
                .green()
                .bold()
        );
        let group = provider
            .create_resource_group(&config.resource_group, &config.location)
            .await?;
        println!("  ✓ 作成完了: {}", group.id.cyan());
        resource_group_id = Some(group.id);
    }

    println!(
        "{}",
        format!("▶ プライベートDNSゾーン {} を作成中...", config.zone_name)
            .green()
            .bold()
    );
    let operation = provider
        .create_private_zone(&config.resource_group, &config.zone_name, &config.location)
        .await?;
    let zone = operation.wait_until_done().await?;
    println!("  ✓ 作成完了: {}", zone.id.cyan());

    // レコードセットは名前が設定されている場合のみ作成
    let mut record_set_id = None;
    if let Some(record_set_name) = &config.record_set_name {
        println!(
            "{}",
            format!("▶ Aレコードセット {} を作成中...", record_set_name)
                .green()
                .bold()
        );
        let record_set = provider
            .create_record_set(
                &config.resource_group,
                &config.zone_name,
                RecordType::A,
                record_set_name,
                &RecordData::default(),
            )
            .await?;
        println!("  ✓ 作成完了: {}", record_set.id.cyan());
        record_set_id = Some(record_set.id);
    }

    println!();
    let cleaned_up = if config.keep_resources {
        println!(
            "{}",
            "ℹ KEEP_RESOURCE が設定されているため、リソースを残します".dimmed()
        );
        false
    } else {
        cleanup(config, provider, resource_group_id.is_some()).await?;
        true
    };

    Ok(Outcome {
        resource_group_id,
        zone_id: zone.id,
        record_set_id,
        cleaned_up,
    })
}

/// この実行で作成したものを削除する。
/// リソースグループを作成していればグループごと、そうでなければゾーンのみ。
async fn cleanup(
    config: &Config,
    provider: &dyn DnsProvider,
    delete_group: bool,
) -> anyhow::Result<()> {
    if delete_group {
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
    println!("{}", "✓ クリーンアップ完了".green().bold());
    Ok(())
}
