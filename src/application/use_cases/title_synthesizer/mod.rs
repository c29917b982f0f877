//! Content title generation for enriched courses
//!
//! A remote chat-completions model is asked first when one is configured.
//! Any failure on that path is logged and the deterministic template path
//! answers instead, so callers always receive a title list.

mod llm_output;
mod prompts;
mod topic;

pub use topic::extract_main_topic;

use crate::domain::catalog::{
    detect_language_track, CategoryDef, ContentTitleSet, CourseRecord, TitleSource,
    GENERIC_TEMPLATE, TOPIC_PLACEHOLDER,
};
use crate::domain::error::{AppError, Result};
use crate::domain::llm_config::LLMConfig;
use crate::infrastructure::llm_clients::LLMClient;
use llm_output::{parse_title_list, MAX_TITLES};
use prompts::{build_system_prompt, build_user_prompt};
use std::sync::Arc;

pub struct TitleSynthesizer {
    llm_client: Option<Arc<dyn LLMClient + Send + Sync>>,
    config: LLMConfig,
}

impl TitleSynthesizer {
    pub fn new(llm_client: Option<Arc<dyn LLMClient + Send + Sync>>, config: LLMConfig) -> Self {
        Self { llm_client, config }
    }

    pub fn template_only() -> Self {
        Self {
            llm_client: None,
            config: LLMConfig {
                enabled: false,
                ..LLMConfig::default()
            },
        }
    }

    pub fn uses_remote(&self) -> bool {
        self.llm_client.is_some() && self.config.enabled
    }

    /// Ordered content titles for one course. Never fails.
    pub async fn generate_content_titles(
        &self,
        course: &CourseRecord,
        category: &'static CategoryDef,
    ) -> ContentTitleSet {
        if self.uses_remote() {
            match self.generate_remote(course, category).await {
                Ok(titles) => {
                    return ContentTitleSet {
                        titles,
                        source: TitleSource::Remote,
                    }
                }
                Err(err) => {
                    tracing::warn!(
                        title = %course.title,
                        error = %err,
                        "Remote title generation failed, using template"
                    );
                }
            }
        }

        ContentTitleSet {
            titles: Self::generate_from_template(&course.title, &course.description, category),
            source: TitleSource::Template,
        }
    }

    /// Ask the remote model for 4-5 titles within the configured timeout
    pub async fn generate_remote(
        &self,
        course: &CourseRecord,
        category: &'static CategoryDef,
    ) -> Result<Vec<String>> {
        let client = self
            .llm_client
            .as_ref()
            .ok_or_else(|| AppError::LLMError("No remote client configured".to_string()))?;

        let track = detect_language_track(&format!("{} {}", course.title, course.description));
        let system = build_system_prompt(track);
        let user = build_user_prompt(&course.title, &course.description, category);

        let raw = tokio::time::timeout(
            self.config.timeout(),
            client.generate(&self.config, &system, &user),
        )
        .await
        .map_err(|_| {
            AppError::LLMError(format!(
                "Remote call timed out after {}s",
                self.config.timeout_secs
            ))
        })??;

        let titles = parse_title_list(&raw)?;
        tracing::debug!(title = %course.title, count = titles.len(), "Remote titles accepted");
        Ok(titles)
    }

    /// Deterministic titles from the language track or category template
    pub fn generate_from_template(
        title: &str,
        description: &str,
        category: &CategoryDef,
    ) -> Vec<String> {
        if let Some(track) = detect_language_track(&format!("{} {}", title, description)) {
            return track.template.iter().map(|t| t.to_string()).collect();
        }

        let topic = extract_main_topic(title);
        if topic.is_empty() {
            return GENERIC_TEMPLATE.iter().map(|t| t.to_string()).collect();
        }

        category
            .title_template
            .iter()
            .take(MAX_TITLES)
            .map(|t| t.replace(TOPIC_PLACEHOLDER, &topic))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::{category_by_name, default_category, LANGUAGE_TRACKS};
    use async_trait::async_trait;
    use std::time::Duration;

    struct StubClient {
        reply: std::result::Result<String, String>,
        delay: Option<Duration>,
    }

    impl StubClient {
        fn replying(reply: &str) -> Arc<dyn LLMClient + Send + Sync> {
            Arc::new(Self {
                reply: Ok(reply.to_string()),
                delay: None,
            })
        }
    }

    #[async_trait]
    impl LLMClient for StubClient {
        async fn generate(&self, _config: &LLMConfig, _system: &str, _user: &str) -> Result<String> {
            if let Some(delay) = self.delay {
                tokio::time::sleep(delay).await;
            }
            self.reply.clone().map_err(AppError::LLMError)
        }
    }

    fn remote_config() -> LLMConfig {
        LLMConfig {
            api_key: Some("test-key".to_string()),
            timeout_secs: 1,
            ..LLMConfig::default()
        }
    }

    fn python_course() -> CourseRecord {
        CourseRecord {
            title: "Introduction to Python Programming".to_string(),
            description: "Learn variables, loops, and functions".to_string(),
            ..CourseRecord::default()
        }
    }

    fn computer_science() -> &'static CategoryDef {
        category_by_name("Computer Science").unwrap()
    }

    #[tokio::test]
    async fn test_remote_titles_are_used() {
        let client = StubClient::replying(
            r#"{"titles": ["Python Basics", "Control Flow", "Functions", "Modules", "Projects"]}"#,
        );
        let synthesizer = TitleSynthesizer::new(Some(client), remote_config());

        let result = synthesizer
            .generate_content_titles(&python_course(), computer_science())
            .await;
        assert_eq!(result.source, TitleSource::Remote);
        assert_eq!(result.titles[0], "Python Basics");
        assert_eq!(result.titles.len(), 5);
    }

    #[tokio::test]
    async fn test_remote_error_falls_back_to_template() {
        let client: Arc<dyn LLMClient + Send + Sync> = Arc::new(StubClient {
            reply: Err("HTTP 401".to_string()),
            delay: None,
        });
        let synthesizer = TitleSynthesizer::new(Some(client), remote_config());

        let result = synthesizer
            .generate_content_titles(&python_course(), computer_science())
            .await;
        assert_eq!(result.source, TitleSource::Template);
        assert!(result.titles[0].starts_with("Introduction to Python"));
    }

    #[tokio::test]
    async fn test_malformed_and_short_replies_fall_back() {
        for reply in ["not json at all", r#"["One", "Two"]"#, r#"{"titles": 3}"#] {
            let synthesizer =
                TitleSynthesizer::new(Some(StubClient::replying(reply)), remote_config());
            let result = synthesizer
                .generate_content_titles(&python_course(), computer_science())
                .await;
            assert_eq!(result.source, TitleSource::Template, "{reply}");
            assert_eq!(result.titles.len(), 5);
        }
    }

    #[tokio::test]
    async fn test_remote_timeout_is_error() {
        let client: Arc<dyn LLMClient + Send + Sync> = Arc::new(StubClient {
            reply: Ok(r#"["A", "B", "C", "D"]"#.to_string()),
            delay: Some(Duration::from_secs(5)),
        });
        let synthesizer = TitleSynthesizer::new(Some(client), remote_config());

        let err = synthesizer
            .generate_remote(&python_course(), computer_science())
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::LLMError(_)));
    }

    #[tokio::test]
    async fn test_disabled_remote_is_not_called() {
        let config = LLMConfig {
            enabled: false,
            ..remote_config()
        };
        let client: Arc<dyn LLMClient + Send + Sync> = Arc::new(StubClient {
            reply: Ok(r#"["A", "B", "C", "D"]"#.to_string()),
            delay: None,
        });
        let synthesizer = TitleSynthesizer::new(Some(client), config);

        assert!(!synthesizer.uses_remote());
        let result = synthesizer
            .generate_content_titles(&python_course(), computer_science())
            .await;
        assert_eq!(result.source, TitleSource::Template);
    }

    #[tokio::test]
    async fn test_template_only_synthesizer() {
        let synthesizer = TitleSynthesizer::template_only();
        let result = synthesizer
            .generate_content_titles(&python_course(), computer_science())
            .await;

        assert_eq!(result.source, TitleSource::Template);
        assert_eq!(result.titles[0], "Introduction to Python Programming");
        assert!(result
            .titles
            .iter()
            .all(|t| t.contains("Python Programming")));
    }

    #[test]
    fn test_language_track_overrides_category() {
        let titles = TitleSynthesizer::generate_from_template(
            "Beginner Mandarin Chinese Course",
            "",
            default_category(),
        );
        assert_eq!(
            titles,
            vec![
                "Introduction to Mandarin Chinese",
                "Pinyin and Characters",
                "Grammar and Sentence Structure",
                "Reading and Writing",
                "Listening and Speaking",
            ]
        );
    }

    #[test]
    fn test_every_language_track_template() {
        for track in LANGUAGE_TRACKS.iter() {
            let title = format!("Beginner {} Course", track.display_name);
            let titles = TitleSynthesizer::generate_from_template(&title, "", default_category());
            assert_eq!(titles, track.template.to_vec(), "{}", track.key);
        }
    }

    #[test]
    fn test_intro_phrase_without_topic_gets_generic_template() {
        let titles = TitleSynthesizer::generate_from_template(
            "Introduction to (Python)",
            "",
            computer_science(),
        );
        assert_eq!(titles, GENERIC_TEMPLATE.to_vec());
    }

    #[test]
    fn test_empty_course_gets_generic_template() {
        let titles = TitleSynthesizer::generate_from_template("", "", default_category());
        assert_eq!(titles, GENERIC_TEMPLATE.to_vec());
    }

    #[test]
    fn test_template_substitutes_topic() {
        let science = category_by_name("Science").unwrap();
        let titles =
            TitleSynthesizer::generate_from_template("Advanced Organic Chemistry II", "", science);
        assert_eq!(titles.len(), 5);
        assert!(titles.iter().all(|t| !t.contains(TOPIC_PLACEHOLDER)));
        assert!(titles.iter().any(|t| t.contains("Organic Chemistry")));
    }
}
