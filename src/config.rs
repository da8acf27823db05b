//! Application configuration constants
//!
//! Central location for store identifiers, the canonical enumeration
//! labels, and the weekly checklist catalogue. The label sets come from
//! the original paper forms and are deliberately kept in Korean; stores
//! must round-trip them byte-for-byte.

/// File stem of the daily bowel-movement store
pub const DAILY_STORE: &str = "daily_checks";

/// File stem of the weekly checklist store
pub const WEEKLY_STORE: &str = "weekly_checks";

/// File stem of the read-only research-paper corpus
pub const PAPERS_STORE: &str = "health_info";

/// Default bind address for the HTTP API
pub const DEFAULT_BIND: &str = "127.0.0.1:8642";

// ===== Bristol stool scale =====

/// Lowest valid Bristol stool type
pub const BRISTOL_MIN: u8 = 1;

/// Highest valid Bristol stool type
pub const BRISTOL_MAX: u8 = 7;

// ===== Daily entry enumerations =====

/// Valid time-of-day buckets for a bowel movement
pub const TIME_BUCKETS: &[&str] = &[
    "새벽 (5~7시)",
    "아침 (7~9시)",
    "점심 (11~13시)",
    "저녁 (17~20시)",
    "밤 늦게 (21시 이후)",
];

/// Valid stool color labels
pub const STOOL_COLORS: &[&str] = &[
    "연갈색 (정상)",
    "갈색 (이상적)",
    "짙은 갈색 (건조함)",
    "노란색 (지방성 설사)",
    "녹색 (빠른 장 통과)",
    "검은색 (소화관 출혈 가능)",
    "붉은색 (하부 출혈 가능)",
];

// ===== Weekly checklist catalogue =====

/// The three fixed checklist categories with their canonical item texts.
/// Every submitted checklist must cover all three categories; item-level
/// drift against the canonical sets is tolerated with a warning.
pub const CHECKLIST_CATEGORIES: &[(&str, &[&str])] = &[
    (
        "식습관",
        &[
            "매일 과일과 채소를 충분히 섭취했다 (하루 최소 5가지 종류)",
            "식이섬유가 풍부한 통곡물을 주 3회 이상 섭취했다",
            "하루 물을 8잔 이상 마셨다",
            "발효 식품을 주 3회 이상 섭취했다",
            "패스트푸드나 인스턴트 식품 섭취를 2회 이하로 줄였다",
            "음식을 천천히 씹어 먹었다",
            "과식이나 폭식을 하지 않았다",
            "음주를 피하거나 최소화했다",
        ],
    ),
    (
        "생활습관",
        &[
            "규칙적으로 아침, 점심, 저녁 식사를 했다",
            "매일 30분 이상 가벼운 운동을 했다",
            "스트레스 관리를 위한 시간을 가졌다",
            "충분한 수면을 취했다 (7~8시간)",
            "아침에 개운하게 일어났다",
            "전자기기 사용 시간을 줄였다",
            "변비나 설사 증상 개선을 위해 노력했다",
        ],
    ),
    (
        "신체 증상",
        &[
            "복부 팽만감이나 가스가 심하지 않았다",
            "복통이나 불편함이 없었다",
            "규칙적인 배변 활동을 했다",
            "소화가 잘 되었다",
            "피부 상태가 좋았다",
            "피로감이 심하지 않았다",
        ],
    ),
];

/// Canonical item set for one category, or `None` for an unknown category
pub fn checklist_items(category: &str) -> Option<&'static [&'static str]> {
    CHECKLIST_CATEGORIES
        .iter()
        .find(|(name, _)| *name == category)
        .map(|(_, items)| *items)
}
