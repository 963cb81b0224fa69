//! 文章服务（JSON 文件持久化）
//!
//! 与账户服务相同：写文件失败时回滚内存状态。

use std::future::Future;

use admin_console_core::services::InMemoryArticleService;
use admin_console_core::traits::ArticleService;
use admin_console_core::types::{Article, ArticleDraft, RecordId};
use admin_console_core::CoreResult;
use async_trait::async_trait;
use tokio::sync::Mutex;

use super::json_store::JsonFile;
use super::seed;

pub struct JsonArticleService {
    file: JsonFile,
    inner: InMemoryArticleService,
    writes: Mutex<()>,
}

impl JsonArticleService {
    /// 打开数据文件；文件不存在时写入示例数据
    pub async fn open(file: JsonFile) -> CoreResult<Self> {
        let articles = if let Some(articles) = file.load::<Article>().await? {
            articles
        } else {
            let articles = seed::articles();
            file.save(&articles).await?;
            tracing::info!("Seeded {} with sample articles", file.path().display());
            articles
        };

        Ok(Self {
            file,
            inner: InMemoryArticleService::with_records(articles),
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
impl ArticleService for JsonArticleService {
    async fn get_all(&self) -> CoreResult<Vec<Article>> {
        self.inner.get_all().await
    }

    async fn create(&self, draft: ArticleDraft) -> CoreResult<Article> {
        self.persisted(self.inner.create(draft)).await
    }

    async fn update(&self, id: RecordId, draft: ArticleDraft) -> CoreResult<Article> {
        self.persisted(self.inner.update(id, draft)).await
    }

    async fn delete(&self, id: RecordId) -> CoreResult<()> {
        self.persisted(self.inner.delete(id)).await
    }

    async fn publish(&self, id: RecordId) -> CoreResult<Article> {
        self.persisted(self.inner.publish(id)).await
    }

    async fn archive(&self, id: RecordId) -> CoreResult<Article> {
        self.persisted(self.inner.archive(id)).await
    }

    async fn restore(&self, id: RecordId) -> CoreResult<Article> {
        self.persisted(self.inner.restore(id)).await
    }
}

#[cfg(test)]
mod tests {
    use admin_console_core::types::ArticleStatus;
    use admin_console_core::CoreError;

    use super::*;

    #[tokio::test]
    async fn workflow_changes_are_written_to_disk() {
        let dir = tempfile::tempdir().unwrap();
        let file = JsonFile::new(dir.path().join("articles.json"));
        let service = JsonArticleService::open(file.clone()).await.unwrap();

        let draft = service
            .get_all()
            .await
            .unwrap()
            .into_iter()
            .find(|a| a.status == ArticleStatus::Draft)
            .unwrap();
        service.publish(draft.id).await.unwrap();

        let on_disk: Vec<Article> = file.load().await.unwrap().unwrap();
        let published = on_disk.iter().find(|a| a.id == draft.id).unwrap();
        assert_eq!(published.status, ArticleStatus::Published);
    }

    #[tokio::test]
    async fn failed_write_rolls_back_memory() {
        let dir = tempfile::tempdir().unwrap();
        let data = dir.path().join("data");
        let file = JsonFile::new(data.join("articles.json"));
        let service = JsonArticleService::open(file.clone()).await.unwrap();
        let before = service.get_all().await.unwrap();
        let draft = before
            .iter()
            .find(|a| a.status == ArticleStatus::Draft)
            .unwrap()
            .clone();

        std::fs::remove_dir_all(&data).unwrap();
        std::fs::write(&data, "").unwrap();

        let published = service.publish(draft.id).await;
        assert!(matches!(published, Err(CoreError::StorageError(_))));
        let created = service
            .create(ArticleDraft {
                title: "Offline".to_string(),
                content: String::new(),
                author: "kim".to_string(),
                category: None,
                status: ArticleStatus::Draft,
            })
            .await;
        assert!(matches!(created, Err(CoreError::StorageError(_))));
        assert_eq!(service.get_all().await.unwrap(), before);

        // 回滚后工作流仍可从原状态继续
        std::fs::remove_file(&data).unwrap();
        let published = service.publish(draft.id).await.unwrap();
        assert_eq!(published.status, ArticleStatus::Published);

        let on_disk: Vec<Article> = file.load().await.unwrap().unwrap();
        assert_eq!(on_disk.len(), before.len());
        let saved = on_disk.iter().find(|a| a.id == draft.id).unwrap();
        assert_eq!(saved.status, ArticleStatus::Published);
    }

    #[tokio::test]
    async fn existing_file_is_not_reseeded() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("articles.json");
        std::fs::write(&path, "[]").unwrap();

        let service = JsonArticleService::open(JsonFile::new(path)).await.unwrap();
        assert!(service.get_all().await.unwrap().is_empty());
    }
}
