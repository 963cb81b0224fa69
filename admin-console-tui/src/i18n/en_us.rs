//! 英文翻译 (en-US)

use super::keys::{
    ActionTexts, CommonTexts, ConfirmDeleteTexts, FieldTexts, HelpTexts, HintTexts, ModalTexts,
    NoticeTexts, StatsTexts, TabTexts, Translations, ValueTexts,
};

pub const TRANSLATIONS: Translations = Translations {
    common: CommonTexts {
        app_name: "Admin Console",
        subtitle: "Manage accounts and articles",
        create: "New",
        cancel: "Cancel",
        success: "Success",
        error: "Error",
        no_data: "No records yet",
        total: "Total",
    },

    hints: HintTexts {
        select: "Select",
        switch_tab: "Switch tab",
        add: "New",
        edit: "Edit",
        delete: "Delete",
        workflow: "Publish/Archive/Restore",
        refresh: "Refresh",
        dismiss: "Dismiss",
        help: "Help",
        quit: "Quit",
        next_field: "Next field",
        choose: "Choose",
        submit: "Submit",
        newline: "New line",
        close: "Close",
    },

    tabs: TabTexts {
        articles: "Articles",
        accounts: "Accounts",
    },

    stats: StatsTexts {
        active: "Active",
        inactive: "Inactive",
        suspended: "Suspended",
        admin: "Admins",
        published: "Published",
        draft: "Drafts",
        archived: "Archived",
        views: "Total views",
    },

    fields: FieldTexts {
        id: "ID",
        username: "Username",
        email: "Email",
        role: "Role",
        status: "Status",
        created_at: "Created",
        last_login: "Last login",
        title: "Title",
        author: "Author",
        category: "Category",
        views: "Views",
        content: "Content",
        actions: "Actions",
    },

    values: ValueTexts {
        user: "User",
        moderator: "Moderator",
        admin: "Admin",
        active: "Active",
        inactive: "Inactive",
        suspended: "Suspended",
        draft: "Draft",
        published: "Published",
        archived: "Archived",
        development: "Development",
        design: "Design",
        accessibility: "Accessibility",
    },

    actions: ActionTexts {
        edit: "Edit",
        delete: "Delete",
        publish: "Publish",
        archive: "Archive",
        restore: "Restore",
    },

    notices: NoticeTexts {
        account_created: "Account created",
        article_created: "Article created",
        account_updated: "Account updated",
        article_updated: "Article updated",
        deleted: "Deleted",
        published: "Published",
        archived: "Archived",
        restored: "Restored",
        load_failed: "Failed to load data",
        create_failed: "Failed to create",
        update_failed: "Failed to update",
        delete_failed: "Failed to delete",
        action_failed: "Action failed",
    },

    modal: ModalTexts {
        new_account: "New Account",
        new_article: "New Article",
        edit_account: "Edit Account",
        edit_article: "Edit Article",
        update: "Update",
        required: "*",
        select_hint: "←→ to choose",
        confirm_delete: ConfirmDeleteTexts {
            title: "Confirm Deletion",
            message: "Are you sure you want to delete this?",
            cancel: "Cancel",
            delete: "Delete",
        },
    },

    help: HelpTexts {
        title: "Keyboard Shortcuts",
        entries: &[
            ("Tab / 1 / 2", "Switch between articles and accounts"),
            ("↑↓ / j k", "Move selection"),
            ("a", "New record"),
            ("e / Enter", "Edit selected record"),
            ("d", "Delete selected record"),
            ("p", "Publish, archive or restore article"),
            ("r", "Reload"),
            ("s / x", "Dismiss success / error"),
            ("?", "This help"),
            ("q / Ctrl+C", "Quit"),
        ],
    },
};
