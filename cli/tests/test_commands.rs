//! Integration tests for CLI commands.

#[cfg(test)]
mod tests {
    use std::{fs, path::Path};

    use scicover_cli::{
        commands::{archive, validate, years},
        source::DataSource,
    };
    use scicover_shared::{LoadErrorKind, Selection};
    use tempfile::TempDir;

    const INDEX: &str = r#"{
        "lastUpdated": "2024-03-10T08:00:00Z",
        "articles": [
            {"id": "science-2024-03-08", "journal": "Science", "date": "2024-03-08",
             "path": "science/2024-03-08.json", "title_zh": "海洋", "title_en": "Oceans"},
            {"id": "nature-2024-01-11", "journal": "Nature", "date": "2024-01-11",
             "path": "nature/2024-01-11.json", "title_zh": "星系", "title_en": "Galaxies"},
            {"id": "asr-2023-12-01", "journal": "American Sociological Review", "date": "2023-12-01",
             "path": "asr/2023-12-01.json", "title_zh": "城市", "title_en": "Cities"}
        ]
    }"#;

    fn detail(id: &str, journal: &str, date: &str) -> String {
        format!(
            r#"{{
                "id": "{id}",
                "journal": "{journal}",
                "date": "{date}",
                "coverImage": {{"url": "images/{id}.jpg"}},
                "coverStory": {{
                    "title": {{"zh": "标题", "en": "Title"}},
                    "summary": {{"zh": "第一段\n\n第二段", "en": "First.\n\nSecond."}},
                    "keyArticle": {{"title": "Key"}}
                }}
            }}"#
        )
    }

    fn write(root: &Path, relative: &str, body: &str) {
        let path = root.join(relative);
        fs::create_dir_all(path.parent().expect("parent dir")).expect("create dirs");
        fs::write(path, body).expect("write document");
    }

    fn site() -> TempDir {
        let dir = tempfile::tempdir().expect("create temp dir");
        write(dir.path(), "data/index.json", INDEX);
        write(
            dir.path(),
            "data/science/2024-03-08.json",
            &detail("science-2024-03-08", "Science", "2024-03-08"),
        );
        write(
            dir.path(),
            "data/nature/2024-01-11.json",
            &detail("nature-2024-01-11", "Nature", "2024-01-11"),
        );
        write(
            dir.path(),
            "data/asr/2023-12-01.json",
            &detail("asr-2023-12-01", "American Sociological Review", "2023-12-01"),
        );
        dir
    }

    fn source(dir: &TempDir) -> DataSource {
        DataSource::parse(&dir.path().to_string_lossy())
    }

    #[tokio::test(flavor = "current_thread")]
    async fn loads_documents_from_a_directory() {
        let dir = site();
        let local = tokio::task::LocalSet::new();
        local
            .run_until(async {
                let cache = source(&dir).build_cache();
                let index = cache.load_index().await.expect("index loads");
                assert_eq!(index.articles.len(), 3);

                let article = cache
                    .load_article("nature-2024-01-11")
                    .await
                    .expect("article loads");
                assert_eq!(article.journal, "Nature");
                assert_eq!(article.cover_story.summary.en, "First.\n\nSecond.");

                let missing = cache.load_article("cell-2020-01-01").await;
                assert_eq!(
                    missing.map(|_| ()).map_err(|err| err.kind()),
                    Err(LoadErrorKind::NotInIndex)
                );
            })
            .await;
    }

    #[tokio::test(flavor = "current_thread")]
    async fn missing_index_is_reported_as_unavailable() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let local = tokio::task::LocalSet::new();
        local
            .run_until(async {
                let cache = source(&dir).build_cache();
                let err = cache.load_index().await.expect_err("no index on disk");
                assert_eq!(err.to_string(), "Failed to load article index");
            })
            .await;
    }

    #[tokio::test(flavor = "current_thread")]
    async fn year_facets_use_calendar_months() {
        let dir = site();
        let local = tokio::task::LocalSet::new();
        local
            .run_until(async {
                let cache = source(&dir).build_cache();
                let index = cache.load_index().await.expect("index loads");
                let facets = years::year_facets(&index);
                assert_eq!(
                    facets,
                    vec![
                        years::YearFacet {
                            year: 2024,
                            months: vec![1, 3],
                        },
                        years::YearFacet {
                            year: 2023,
                            months: vec![12],
                        },
                    ]
                );
            })
            .await;
    }

    #[tokio::test(flavor = "current_thread")]
    async fn archive_month_without_data_lists_whole_year() {
        let dir = site();
        let local = tokio::task::LocalSet::new();
        local
            .run_until(async {
                let cache = source(&dir).build_cache();
                let index = cache.load_index().await.expect("index loads");

                let march = archive::select(&index, Some(2024), Some(3));
                assert_eq!(march.month(), Selection::Only(2));
                let ids = march.apply(&index).iter().map(|e| e.id.as_str()).collect::<Vec<_>>();
                assert_eq!(ids, vec!["science-2024-03-08"]);

                let june = archive::select(&index, Some(2024), Some(6));
                assert_eq!(june.month(), Selection::All);
                assert_eq!(june.apply(&index).len(), 2);
            })
            .await;
    }

    #[tokio::test(flavor = "current_thread")]
    async fn validate_accepts_a_consistent_site() {
        let dir = site();
        let local = tokio::task::LocalSet::new();
        local
            .run_until(async {
                let cache = source(&dir).build_cache();
                let index = cache.load_index().await.expect("index loads");
                assert!(validate::check_index(&index).is_empty());
                assert!(validate::check_details(&cache, &index).await.is_empty());
            })
            .await;
    }

    #[tokio::test(flavor = "current_thread")]
    async fn validate_reports_every_kind_of_problem() {
        let dir = site();
        let broken_index = r#"{
            "lastUpdated": "2024-03-10",
            "articles": [
                {"id": "science-2024-03-08", "journal": "Science", "date": "2024-03-08",
                 "path": "science/2024-03-08.json", "title_zh": "海洋", "title_en": "Oceans"},
                {"id": "science-2024-03-08", "journal": "Science", "date": "2024-03-08",
                 "path": "science/2024-03-08.json", "title_zh": "海洋", "title_en": "Oceans"},
                {"id": "mystery", "journal": "Journal of Mysteries", "date": "someday",
                 "path": "mystery.json", "title_zh": "谜", "title_en": "Mystery"}
            ]
        }"#;
        write(dir.path(), "data/index.json", broken_index);

        let local = tokio::task::LocalSet::new();
        local
            .run_until(async {
                let cache = source(&dir).build_cache();
                let index = cache.load_index().await.expect("index loads");

                let index_problems = validate::check_index(&index);
                assert_eq!(
                    index_problems,
                    vec![
                        validate::Problem::DuplicateId {
                            id: "science-2024-03-08".to_string(),
                        },
                        validate::Problem::BadDate {
                            id: "mystery".to_string(),
                            date: "someday".to_string(),
                        },
                        validate::Problem::UnknownJournal {
                            id: "mystery".to_string(),
                            journal: "Journal of Mysteries".to_string(),
                        },
                    ]
                );

                let detail_problems = validate::check_details(&cache, &index).await;
                assert_eq!(
                    detail_problems,
                    vec![validate::Problem::DetailUnavailable {
                        id: "mystery".to_string(),
                        reason: "Failed to load article".to_string(),
                    }]
                );
            })
            .await;
    }
}
