//! 账户服务（JSON 文件持久化）
//!
//! 内存中的 [`InMemoryAccountService`] 负责校验与状态，
//! 每次成功修改后把完整列表写回 `accounts.json`。
//! 写文件失败时内存状态回滚到修改前，内存与文件保持一致。

use std::future::Future;

use admin_console_core::services::InMemoryAccountService;
use admin_console_core::traits::AccountService;
use admin_console_core::types::{Account, AccountDraft, RecordId};
use admin_console_core::CoreResult;
use async_trait::async_trait;
use tokio::sync::Mutex;

use super::json_store::JsonFile;
use super::seed;

pub struct JsonAccountService {
    file: JsonFile,
    inner: InMemoryAccountService,
    /// 串行化 修改 + 写文件
    writes: Mutex<()>,
}

impl JsonAccountService {
    /// 打开数据文件；文件不存在时写入示例数据
    pub async fn open(file: JsonFile) -> CoreResult<Self> {
        let accounts = if let Some(accounts) = file.load::<Account>().await? {
            accounts
        } else {
            let accounts = seed::accounts();
            file.save(&accounts).await?;
            tracing::info!("Seeded {} with sample accounts", file.path().display());
            accounts
        };

        Ok(Self {
            file,
            inner: InMemoryAccountService::with_records(accounts),
            writes: Mutex::new(()),
        })
    }

    /// 执行修改并写回文件；写文件失败时恢复修改前的状态
    async fn persisted<T>(
        &self,
        mutation: impl Future<Output = CoreResult<T>> + Send,
    ) -> CoreResult<T> {
        let _guard = self.writes.lock().await;
        let before = self.inner.snapshot().await;
        let value = mutation.await?;

        if let Err(e) = self.file.save(&self.inner.snapshot().await).await {
            tracing::error!("Failed to write {}: {e}", self.file.path().display());
            self.inner.replace(before).await;
            return Err(e);
        }
        Ok(value)
    }
}

#[async_trait]
impl AccountService for JsonAccountService {
    async fn get_all(&self) -> CoreResult<Vec<Account>> {
        self.inner.get_all().await
    }

    async fn create(&self, draft: AccountDraft) -> CoreResult<Account> {
        self.persisted(self.inner.create(draft)).await
    }

    async fn update(&self, id: RecordId, draft: AccountDraft) -> CoreResult<Account> {
        self.persisted(self.inner.update(id, draft)).await
    }

    async fn delete(&self, id: RecordId) -> CoreResult<()> {
        self.persisted(self.inner.delete(id)).await
    }
}

#[cfg(test)]
mod tests {
    use admin_console_core::types::{AccountRole, AccountStatus};
    use admin_console_core::CoreError;

    use super::*;

    #[tokio::test]
    async fn seeds_missing_file_and_persists_changes() {
        let dir = tempfile::tempdir().unwrap();
        let file = JsonFile::new(dir.path().join("accounts.json"));

        let service = JsonAccountService::open(file.clone()).await.unwrap();
        let seeded = service.get_all().await.unwrap();
        assert!(!seeded.is_empty());
        assert!(file.path().exists());

        let created = service
            .create(AccountDraft {
                username: "newbie".to_string(),
                email: "newbie@example.com".to_string(),
                role: AccountRole::User,
                status: AccountStatus::Active,
            })
            .await
            .unwrap();

        // 重新打开后数据仍在
        let reopened = JsonAccountService::open(file).await.unwrap();
        let accounts = reopened.get_all().await.unwrap();
        assert_eq!(accounts.len(), seeded.len() + 1);
        assert!(accounts.iter().any(|a| a.id == created.id && a.username == "newbie"));
    }

    #[tokio::test]
    async fn failed_mutation_leaves_file_untouched() {
        let dir = tempfile::tempdir().unwrap();
        let file = JsonFile::new(dir.path().join("accounts.json"));
        let service = JsonAccountService::open(file.clone()).await.unwrap();
        let before = std::fs::read_to_string(file.path()).unwrap();

        assert!(service.delete(9999).await.is_err());
        assert_eq!(std::fs::read_to_string(file.path()).unwrap(), before);
    }

    fn draft(username: &str) -> AccountDraft {
        AccountDraft {
            username: username.to_string(),
            email: format!("{username}@example.com"),
            role: AccountRole::User,
            status: AccountStatus::Active,
        }
    }

    #[tokio::test]
    async fn failed_write_rolls_back_memory() {
        let dir = tempfile::tempdir().unwrap();
        let data = dir.path().join("data");
        let file = JsonFile::new(data.join("accounts.json"));
        let service = JsonAccountService::open(file.clone()).await.unwrap();
        let before = service.get_all().await.unwrap();

        // 数据目录的位置被普通文件占用，写文件必然失败
        std::fs::remove_dir_all(&data).unwrap();
        std::fs::write(&data, "").unwrap();

        let created = service.create(draft("hana")).await;
        assert!(matches!(created, Err(CoreError::StorageError(_))));
        assert_eq!(service.get_all().await.unwrap(), before);

        let deleted = service.delete(before[0].id).await;
        assert!(matches!(deleted, Err(CoreError::StorageError(_))));
        assert_eq!(service.get_all().await.unwrap(), before);

        // 恢复后重试同一条记录不会撞上用户名重复
        std::fs::remove_file(&data).unwrap();
        let created = service.create(draft("hana")).await.unwrap();
        let accounts = service.get_all().await.unwrap();
        assert_eq!(accounts.len(), before.len() + 1);

        let on_disk: Vec<Account> = file.load().await.unwrap().unwrap();
        let ids = |list: &[Account]| list.iter().map(|a| a.id).collect::<Vec<_>>();
        assert_eq!(ids(&on_disk), ids(&accounts));
        assert!(on_disk.iter().any(|a| a.id == created.id));
    }

    #[tokio::test]
    async fn corrupt_file_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("accounts.json");
        std::fs::write(&path, "{not json").unwrap();

        let result = JsonAccountService::open(JsonFile::new(path)).await;
        assert!(matches!(
            result,
            Err(CoreError::SerializationError(_))
        ));
    }
}
