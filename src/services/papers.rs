//! Reference corpus service
//!
//! The research-paper summaries are hand-authored, written once by the
//! `seed-papers` binary, and read-only for the running application.

use crate::config;
use crate::error::{AppError, Result};
use crate::store::{CoreContent, DetailedContent, PaperRecord, RecordStore};

/// Service exposing the read-only paper corpus
#[derive(Clone)]
pub struct PapersService {
    store: RecordStore,
}

impl PapersService {
    pub fn new(store: RecordStore) -> Self {
        Self { store }
    }

    /// The full corpus; an unreadable or missing file reads as empty
    pub async fn list_papers(&self) -> Vec<PaperRecord> {
        self.store.load_or_empty(config::PAPERS_STORE).await
    }
}

/// Write the initial corpus. Refuses to clobber an existing file unless
/// `force` is set; returns the number of papers written.
pub async fn seed_corpus(store: &RecordStore, force: bool) -> Result<usize> {
    if store.exists(config::PAPERS_STORE) && !force {
        return Err(AppError::Generic(format!(
            "corpus already exists at {:?} (use --force to overwrite)",
            store.path_for(config::PAPERS_STORE)
        )));
    }

    let papers = initial_papers();
    store.save(config::PAPERS_STORE, &papers).await?;

    tracing::info!(
        "Seeded {} papers into {:?}",
        papers.len(),
        store.path_for(config::PAPERS_STORE)
    );

    Ok(papers.len())
}

/// The hand-authored seed corpus
pub fn initial_papers() -> Vec<PaperRecord> {
    vec![
        PaperRecord {
            id: "bmj_2016_1".to_string(),
            title: "Whole grain consumption and risk of cardiovascular disease, cancer, and all cause and cause specific mortality".to_string(),
            authors: vec![
                "Dagfinn Aune".to_string(),
                "NaNa Keum".to_string(),
                "Edward Giovannucci".to_string(),
            ],
            journal: "BMJ (British Medical Journal)".to_string(),
            year: 2016,
            citations: 1250,
            doi: "10.1136/bmj.i2716".to_string(),
            core_content: CoreContent {
                summary: "식이섬유가 풍부한 전곡물 섭취가 장 건강에 미치는 영향에 대한 대규모 메타분석 연구입니다.\n\n\
                          주요 발견:\n\
                          1. 하루 90g의 전곡물 섭취는 대장암 위험을 17% 감소시킵니다.\n\
                          2. 식이섬유 섭취는 장 운동을 활성화하고 배변 규칙성을 향상시킵니다.\n\
                          3. 전곡물에 포함된 프리바이오틱스는 유익균 성장을 촉진합니다.\n\n\
                          실천 방안:\n\
                          - 매일 현미, 귀리, 퀴노아 등 다양한 전곡물을 섭취하세요\n\
                          - 하루 최소 3회 이상 전곡물 포함 식사를 하세요\n\
                          - 정제된 밀가루 대신 통밀 제품을 선택하세요".to_string(),
                key_findings: vec![
                    "전곡물 섭취와 장 건강의 직접적 연관성 입증".to_string(),
                    "식이섬유 섭취량과 배변 규칙성의 양의 상관관계".to_string(),
                    "장내 미생물 다양성 증가 효과".to_string(),
                ],
            },
            detailed_content: DetailedContent {
                methodology: "29개 연구, 총 참여자 수 3.8백만 명 대상 메타분석".to_string(),
                results: "상세한 통계 분석 결과와 위험비(Hazard Ratio) 데이터".to_string(),
                discussion: "전곡물 섭취의 장기적 건강 영향과 최적 섭취량 제안".to_string(),
                practical_implications: None,
            },
            tags: vec![
                "전곡물".to_string(),
                "식이섬유".to_string(),
                "장건강".to_string(),
            ],
        },
        PaperRecord {
            id: "gut_2018_1".to_string(),
            title: "Role of the gut microbiota in nutrition and health".to_string(),
            authors: vec![
                "Harry J Flint".to_string(),
                "Karen P Scott".to_string(),
                "Petra Louis".to_string(),
            ],
            journal: "Nature Reviews Gastroenterology & Hepatology".to_string(),
            year: 2018,
            citations: 890,
            doi: "10.1038/s41575-018-0061-2".to_string(),
            core_content: CoreContent {
                summary: "장내 미생물과 건강한 배변 활동의 관계를 분석한 종합 연구입니다.\n\n\
                          핵심 내용:\n\
                          1. 장내 미생물 다양성이 높을수록 배변 건강이 향상됩니다.\n\
                          2. 프로바이오틱스와 프리바이오틱스의 균형이 중요합니다.\n\
                          3. 식단의 다양성이 장내 미생물 생태계에 직접적 영향을 미칩니다.\n\n\
                          권장 사항:\n\
                          - 발효식품을 규칙적으로 섭취하세요\n\
                          - 다양한 채소와 과일을 섭취하여 미생물 다양성을 높이세요\n\
                          - 과도한 항생제 사용을 피하세요".to_string(),
                key_findings: vec![
                    "장내 미생물 균형과 배변 건강의 상관관계".to_string(),
                    "식이 다양성의 중요성".to_string(),
                    "프로바이오틱스의 효과".to_string(),
                ],
            },
            detailed_content: DetailedContent {
                methodology: "최근 10년간의 장내 미생물 연구 메타분석".to_string(),
                results: "미생물 다양성과 건강 지표의 상관관계 분석".to_string(),
                discussion: "식단 조절을 통한 장내 미생물 관리 방안".to_string(),
                practical_implications: None,
            },
            tags: vec![
                "장내미생물".to_string(),
                "프로바이오틱스".to_string(),
                "장건강".to_string(),
            ],
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    async fn create_test_store() -> (RecordStore, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let store = RecordStore::new(temp_dir.path().to_path_buf());
        store.initialize().await.unwrap();
        (store, temp_dir)
    }

    #[test]
    fn test_seed_papers_have_unique_ids() {
        let papers = initial_papers();
        let mut ids: Vec<&str> = papers.iter().map(|p| p.id.as_str()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), papers.len());
    }

    #[tokio::test]
    async fn test_seed_then_list() {
        let (store, _temp) = create_test_store().await;

        let written = seed_corpus(&store, false).await.unwrap();
        assert_eq!(written, 2);

        let service = PapersService::new(store);
        let papers = service.list_papers().await;
        assert_eq!(papers.len(), 2);
        assert_eq!(papers[0].id, "bmj_2016_1");
        assert_eq!(papers[0].year, 2016);
        assert_eq!(papers[1].citations, 890);
    }

    #[tokio::test]
    async fn test_seed_refuses_to_overwrite_without_force() {
        let (store, _temp) = create_test_store().await;

        seed_corpus(&store, false).await.unwrap();
        assert!(seed_corpus(&store, false).await.is_err());
        assert!(seed_corpus(&store, true).await.is_ok());
    }

    #[tokio::test]
    async fn test_empty_corpus_lists_as_empty() {
        let (store, _temp) = create_test_store().await;

        let service = PapersService::new(store);
        assert!(service.list_papers().await.is_empty());
    }
}
