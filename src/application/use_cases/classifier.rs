//! Keyword-scoring course classifier
//!
//! Maps free text onto the compiled-in taxonomy in three steps:
//! - category: +3 for every scoring term found as a substring, +1 for every
//!   word (longer than 3 chars) of a multi-word term found as a whole token
//! - subcategory: number of keyword occurrences within the winning category
//! - skill: first declared skill mentioned by the long description
//!
//! Ties always go to the first-declared candidate.

use crate::domain::catalog::{
    default_category, CategoryDef, ClassificationResult, CourseRecord, CATEGORIES,
    DEFAULT_SUBCATEGORY,
};
use std::collections::HashSet;

const EXACT_MATCH_WEIGHT: u32 = 3;
const WORD_MATCH_WEIGHT: u32 = 1;
const MIN_WORD_LEN: usize = 4;

pub struct CourseClassifier;

impl CourseClassifier {
    /// Classify a course from its title, short and long descriptions
    pub fn classify(course: &CourseRecord) -> ClassificationResult {
        let text = format!("{} {} {}", course.title, course.about, course.description);
        let category = Self::detect_category(&text);
        let subcategory = Self::detect_subcategory(&text, category);
        let skill = Self::detect_skill(&course.description, category);

        ClassificationResult {
            category,
            subcategory: subcategory.to_string(),
            skill: skill.to_string(),
        }
    }

    /// Highest-scoring category; the first registered one when nothing matches
    pub fn detect_category(text: &str) -> &'static CategoryDef {
        let haystack = text.to_lowercase();
        let tokens = tokenize(&haystack);

        let mut best: Option<(&'static CategoryDef, u32)> = None;
        for category in CATEGORIES.iter() {
            let score = Self::score_category(&haystack, &tokens, category);
            tracing::trace!(category = category.name, score, "Category score");
            match best {
                Some((_, best_score)) if score <= best_score => {}
                _ => best = Some((category, score)),
            }
        }

        match best {
            Some((category, score)) if score > 0 => category,
            _ => default_category(),
        }
    }

    /// `haystack` must already be lower-cased and `tokens` derived from it
    fn score_category(haystack: &str, tokens: &HashSet<&str>, category: &CategoryDef) -> u32 {
        category
            .scoring_terms()
            .map(|term| {
                let term = term.to_lowercase();
                let mut score = 0;
                if haystack.contains(&term) {
                    score += EXACT_MATCH_WEIGHT;
                }

                let words: Vec<&str> = term.split_whitespace().collect();
                if words.len() > 1 {
                    score += words
                        .iter()
                        .filter(|w| w.chars().count() >= MIN_WORD_LEN && tokens.contains(*w))
                        .count() as u32
                        * WORD_MATCH_WEIGHT;
                }
                score
            })
            .sum()
    }

    /// Best subcategory of `category`, or `Introduction` when no keyword occurs
    pub fn detect_subcategory(text: &str, category: &'static CategoryDef) -> &'static str {
        let haystack = text.to_lowercase();

        let mut best_name = DEFAULT_SUBCATEGORY;
        let mut best_score = 0usize;
        for subcategory in category.subcategories {
            let score: usize = subcategory
                .keywords
                .iter()
                .map(|kw| haystack.matches(kw).count())
                .sum();
            if score > best_score {
                best_score = score;
                best_name = subcategory.name;
            }
        }

        best_name
    }

    /// First declared skill named in `description`, else the category's first skill
    pub fn detect_skill(description: &str, category: &'static CategoryDef) -> &'static str {
        let haystack = description.to_lowercase();
        category
            .skills
            .iter()
            .find(|skill| haystack.contains(&skill.to_lowercase()))
            .copied()
            .unwrap_or_else(|| category.default_skill())
    }
}

fn tokenize(haystack: &str) -> HashSet<&str> {
    haystack
        .split(|c: char| !c.is_alphanumeric())
        .filter(|t| !t.is_empty())
        .collect()
}
