//! テスト用のモックプロバイダ
//!
//! 呼び出しを順番どおりに記録し、完了待ちの成否を切り替えられる。
//! IDは名前から決まる固定値を返すので、冪等性の検証にも使える。

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use zoneflow_cloud::{
    CloudError, DnsProvider, Operation, PrivateZone, RecordData, RecordSet, RecordType,
    ResourceGroup, Result,
};

pub struct MockProvider {
    calls: Arc<Mutex<Vec<String>>>,
    fail_zone_wait: bool,
    fail_delete_wait: bool,
}

impl MockProvider {
    pub fn new() -> Self {
        Self {
            calls: Arc::new(Mutex::new(Vec::new())),
            fail_zone_wait: false,
            fail_delete_wait: false,
        }
    }

    /// ゾーン作成の完了待ちを失敗させる
    pub fn fail_zone_wait(mut self) -> Self {
        self.fail_zone_wait = true;
        self
    }

    /// 削除の完了待ちを失敗させる
    pub fn fail_delete_wait(mut self) -> Self {
        self.fail_delete_wait = true;
        self
    }

    /// これまでの呼び出し一覧
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: String) {
        self.calls.lock().unwrap().push(call);
    }

    fn operation<T: Send + 'static>(
        &self,
        label: &'static str,
        result: Result<T>,
    ) -> Box<dyn Operation<T>> {
        Box::new(MockOperation {
            calls: self.calls.clone(),
            label,
            result,
        })
    }
}

/// wait_until_done時に "wait:{label}" を記録してから結果を返す
struct MockOperation<T> {
    calls: Arc<Mutex<Vec<String>>>,
    label: &'static str,
    result: Result<T>,
}

#[async_trait]
impl<T: Send + 'static> Operation<T> for MockOperation<T> {
    async fn wait_until_done(self: Box<Self>) -> Result<T> {
        self.calls.lock().unwrap().push(format!("wait:{}", self.label));
        self.result
    }
}

#[async_trait]
impl DnsProvider for MockProvider {
    fn name(&self) -> &str {
        "mock"
    }

    async fn create_resource_group(&self, name: &str, location: &str) -> Result<ResourceGroup> {
        self.record(format!("create_group:{}", name));
        Ok(ResourceGroup {
            id: format!("/subscriptions/sub/resourceGroups/{}", name),
            name: name.to_string(),
            location: location.to_string(),
        })
    }

    async fn create_private_zone(
        &self,
        resource_group: &str,
        zone_name: &str,
        location: &str,
    ) -> Result<Box<dyn Operation<PrivateZone>>> {
        self.record(format!("create_zone:{}", zone_name));
        let result = if self.fail_zone_wait {
            Err(CloudError::OperationFailed(
                "private DNS zone ended in state Failed".to_string(),
            ))
        } else {
            Ok(PrivateZone {
                id: format!(
                    "/subscriptions/sub/resourceGroups/{}/providers/Microsoft.Network/privateDnsZones/{}",
                    resource_group, zone_name
                ),
                name: zone_name.to_string(),
                location: location.to_string(),
                provisioning_state: Some("Succeeded".to_string()),
            })
        };
        Ok(self.operation("create_zone", result))
    }

    async fn create_record_set(
        &self,
        resource_group: &str,
        zone_name: &str,
        record_type: RecordType,
        relative_name: &str,
        _data: &RecordData,
    ) -> Result<RecordSet> {
        self.record(format!("create_record_set:{}", relative_name));
        Ok(RecordSet {
            id: format!(
                "/subscriptions/sub/resourceGroups/{}/providers/Microsoft.Network/privateDnsZones/{}/{}/{}",
                resource_group,
                zone_name,
                record_type.as_str(),
                relative_name
            ),
            name: relative_name.to_string(),
            record_type,
            ttl: None,
            a_records: Vec::new(),
        })
    }

    async fn delete_private_zone(
        &self,
        _resource_group: &str,
        zone_name: &str,
    ) -> Result<Box<dyn Operation<()>>> {
        self.record(format!("delete_zone:{}", zone_name));
        let result = if self.fail_delete_wait {
            Err(CloudError::Timeout(
                "private DNS zone still present after 60 polls".to_string(),
            ))
        } else {
            Ok(())
        };
        Ok(self.operation("delete_zone", result))
    }

    async fn delete_resource_group(&self, name: &str) -> Result<Box<dyn Operation<()>>> {
        self.record(format!("delete_group:{}", name));
        let result = if self.fail_delete_wait {
            Err(CloudError::Timeout(
                "resource group still present after 60 polls".to_string(),
            ))
        } else {
            Ok(())
        };
        Ok(self.operation("delete_group", result))
    }
}
