//! 韩文翻译 (ko-KR)

use super::keys::{
    ActionTexts, CommonTexts, ConfirmDeleteTexts, FieldTexts, HelpTexts, HintTexts, ModalTexts,
    NoticeTexts, StatsTexts, TabTexts, Translations, ValueTexts,
};

pub const TRANSLATIONS: Translations = Translations {
    common: CommonTexts {
        app_name: "관리 시스템",
        subtitle: "사용자와 게시글을 관리하세요",
        create: "새로 만들기",
        cancel: "취소",
        success: "성공",
        error: "오류",
        no_data: "데이터가 없습니다",
        total: "전체",
    },

    hints: HintTexts {
        select: "선택",
        switch_tab: "탭 전환",
        add: "새로 만들기",
        edit: "수정",
        delete: "삭제",
        workflow: "게시/보관/복원",
        refresh: "새로고침",
        dismiss: "닫기",
        help: "도움말",
        quit: "종료",
        next_field: "다음 항목",
        choose: "선택",
        submit: "확인",
        newline: "줄바꿈",
        close: "닫기",
    },

    tabs: TabTexts {
        articles: "게시글",
        accounts: "사용자",
    },

    stats: StatsTexts {
        active: "활성",
        inactive: "비활성",
        suspended: "정지",
        admin: "관리자",
        published: "게시됨",
        draft: "임시저장",
        archived: "보관됨",
        views: "총 조회수",
    },

    fields: FieldTexts {
        id: "ID",
        username: "사용자명",
        email: "이메일",
        role: "역할",
        status: "상태",
        created_at: "생성일",
        last_login: "마지막 로그인",
        title: "제목",
        author: "작성자",
        category: "카테고리",
        views: "조회수",
        content: "내용",
        actions: "관리",
    },

    values: ValueTexts {
        user: "사용자",
        moderator: "운영자",
        admin: "관리자",
        active: "활성",
        inactive: "비활성",
        suspended: "정지",
        draft: "임시저장",
        published: "게시됨",
        archived: "보관됨",
        development: "Development",
        design: "Design",
        accessibility: "Accessibility",
    },

    actions: ActionTexts {
        edit: "수정",
        delete: "삭제",
        publish: "게시",
        archive: "보관",
        restore: "복원",
    },

    notices: NoticeTexts {
        account_created: "사용자가 생성되었습니다",
        article_created: "게시글이 생성되었습니다",
        account_updated: "사용자가 수정되었습니다",
        article_updated: "게시글이 수정되었습니다",
        deleted: "삭제되었습니다",
        published: "게시되었습니다",
        archived: "보관되었습니다",
        restored: "복원되었습니다",
        load_failed: "데이터를 불러오는데 실패했습니다",
        create_failed: "생성에 실패했습니다",
        update_failed: "수정에 실패했습니다",
        delete_failed: "삭제에 실패했습니다",
        action_failed: "작업에 실패했습니다",
    },

    modal: ModalTexts {
        new_account: "새 사용자 만들기",
        new_article: "새 게시글 만들기",
        edit_account: "사용자 수정",
        edit_article: "게시글 수정",
        update: "수정 완료",
        required: "*",
        select_hint: "←→ 선택",
        confirm_delete: ConfirmDeleteTexts {
            title: "삭제 확인",
            message: "정말 삭제하시겠습니까?",
            cancel: "취소",
            delete: "삭제",
        },
    },

    help: HelpTexts {
        title: "단축키",
        entries: &[
            ("Tab / 1 / 2", "게시글 / 사용자 탭 전환"),
            ("↑↓ / j k", "선택 이동"),
            ("a", "새로 만들기"),
            ("e / Enter", "선택한 항목 수정"),
            ("d", "선택한 항목 삭제"),
            ("p", "게시 / 보관 / 복원"),
            ("r", "새로고침"),
            ("s / x", "성공 / 오류 메시지 닫기"),
            ("?", "도움말"),
            ("q / Ctrl+C", "종료"),
        ],
    },
};
