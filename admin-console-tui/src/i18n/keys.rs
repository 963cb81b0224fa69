//! 翻译键定义
//!
//! 定义所有翻译文本的结构体，提供编译期类型检查。
//!
//! ## 分类标准
//!
//! 1. **按 UI 组件位置分类**：文本归属于它出现的 UI 组件
//! 2. **弹窗内容归 `modal.*`**
//! 3. **记录字段与枚举值**：`fields.*` / `values.*`，按字段键查找
//! 4. **跨组件复用归 `common.*`**
//! 5. **键盘提示归 `hints.*`**

/// 所有翻译文本的根结构
pub struct Translations {
    /// 通用文本
    pub common: CommonTexts,
    /// 键盘提示
    pub hints: HintTexts,
    /// 标签页
    pub tabs: TabTexts,
    /// 统计卡片
    pub stats: StatsTexts,
    /// 字段名（表头与表单标签）
    pub fields: FieldTexts,
    /// 枚举值（角色、状态、分类）
    pub values: ValueTexts,
    /// 行操作
    pub actions: ActionTexts,
    /// 成功 / 错误通知
    pub notices: NoticeTexts,
    /// 弹窗文本
    pub modal: ModalTexts,
    /// 帮助弹窗
    pub help: HelpTexts,
}

// ============================================================================
// 通用文本
// ============================================================================

pub struct CommonTexts {
    pub app_name: &'static str,
    pub subtitle: &'static str,
    pub create: &'static str,
    pub cancel: &'static str,
    pub success: &'static str,
    pub error: &'static str,
    pub no_data: &'static str,
    pub total: &'static str,
}

// ============================================================================
// 键盘提示
// ============================================================================

pub struct HintTexts {
    pub select: &'static str,
    pub switch_tab: &'static str,
    pub add: &'static str,
    pub edit: &'static str,
    pub delete: &'static str,
    pub workflow: &'static str,
    pub refresh: &'static str,
    pub dismiss: &'static str,
    pub help: &'static str,
    pub quit: &'static str,
    pub next_field: &'static str,
    pub choose: &'static str,
    pub submit: &'static str,
    pub newline: &'static str,
    pub close: &'static str,
}

// ============================================================================
// 页面
// ============================================================================

pub struct TabTexts {
    pub articles: &'static str,
    pub accounts: &'static str,
}

pub struct StatsTexts {
    pub active: &'static str,
    pub inactive: &'static str,
    pub suspended: &'static str,
    pub admin: &'static str,
    pub published: &'static str,
    pub draft: &'static str,
    pub archived: &'static str,
    pub views: &'static str,
}

impl StatsTexts {
    /// 按统计项键查找
    pub fn get(&self, key: &str) -> Option<&'static str> {
        Some(match key {
            "active" => self.active,
            "inactive" => self.inactive,
            "suspended" => self.suspended,
            "admin" => self.admin,
            "published" => self.published,
            "draft" => self.draft,
            "archived" => self.archived,
            "views" => self.views,
            _ => return None,
        })
    }
}

pub struct FieldTexts {
    pub id: &'static str,
    pub username: &'static str,
    pub email: &'static str,
    pub role: &'static str,
    pub status: &'static str,
    pub created_at: &'static str,
    pub last_login: &'static str,
    pub title: &'static str,
    pub author: &'static str,
    pub category: &'static str,
    pub views: &'static str,
    pub content: &'static str,
    pub actions: &'static str,
}

impl FieldTexts {
    /// 按字段键查找
    pub fn get(&self, key: &str) -> Option<&'static str> {
        Some(match key {
            "id" => self.id,
            "username" => self.username,
            "email" => self.email,
            "role" => self.role,
            "status" => self.status,
            "createdAt" => self.created_at,
            "lastLogin" => self.last_login,
            "title" => self.title,
            "author" => self.author,
            "category" => self.category,
            "views" => self.views,
            "content" => self.content,
            "actions" => self.actions,
            _ => return None,
        })
    }
}

pub struct ValueTexts {
    pub user: &'static str,
    pub moderator: &'static str,
    pub admin: &'static str,
    pub active: &'static str,
    pub inactive: &'static str,
    pub suspended: &'static str,
    pub draft: &'static str,
    pub published: &'static str,
    pub archived: &'static str,
    pub development: &'static str,
    pub design: &'static str,
    pub accessibility: &'static str,
}

impl ValueTexts {
    /// 按枚举值查找，未知值原样返回
    pub fn display<'a>(&self, value: &'a str) -> &'a str {
        match value {
            "user" => self.user,
            "moderator" => self.moderator,
            "admin" => self.admin,
            "active" => self.active,
            "inactive" => self.inactive,
            "suspended" => self.suspended,
            "draft" => self.draft,
            "published" => self.published,
            "archived" => self.archived,
            "development" => self.development,
            "design" => self.design,
            "accessibility" => self.accessibility,
            other => other,
        }
    }
}

pub struct ActionTexts {
    pub edit: &'static str,
    pub delete: &'static str,
    pub publish: &'static str,
    pub archive: &'static str,
    pub restore: &'static str,
}

pub struct NoticeTexts {
    pub account_created: &'static str,
    pub article_created: &'static str,
    pub account_updated: &'static str,
    pub article_updated: &'static str,
    pub deleted: &'static str,
    pub published: &'static str,
    pub archived: &'static str,
    pub restored: &'static str,
    pub load_failed: &'static str,
    pub create_failed: &'static str,
    pub update_failed: &'static str,
    pub delete_failed: &'static str,
    pub action_failed: &'static str,
}

// ============================================================================
// 弹窗
// ============================================================================

pub struct ModalTexts {
    pub new_account: &'static str,
    pub new_article: &'static str,
    pub edit_account: &'static str,
    pub edit_article: &'static str,
    pub update: &'static str,
    pub required: &'static str,
    pub select_hint: &'static str,
    pub confirm_delete: ConfirmDeleteTexts,
}

pub struct ConfirmDeleteTexts {
    pub title: &'static str,
    pub message: &'static str,
    pub cancel: &'static str,
    pub delete: &'static str,
}

pub struct HelpTexts {
    pub title: &'static str,
    /// (按键, 说明)
    pub entries: &'static [(&'static str, &'static str)],
}
