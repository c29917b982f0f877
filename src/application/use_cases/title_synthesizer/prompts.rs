use crate::domain::catalog::{CategoryDef, LanguageTrack};

const SYSTEM_PROMPT: &str = "You are an experienced curriculum designer. \
Given a course, you outline its lessons as short content titles ordered from \
foundational to advanced. Reply with JSON only.";

pub(crate) fn build_system_prompt(track: Option<&LanguageTrack>) -> String {
    match track {
        Some(track) => format!(
            "{} You specialise in teaching {} as a foreign language: cover \
             pronunciation, vocabulary, grammar, reading, writing, listening \
             and speaking in a sensible learning order.",
            SYSTEM_PROMPT, track.display_name
        ),
        None => SYSTEM_PROMPT.to_string(),
    }
}

pub(crate) fn build_user_prompt(title: &str, description: &str, category: &CategoryDef) -> String {
    let description = if description.trim().is_empty() {
        "(none)"
    } else {
        description.trim()
    };

    format!(
        r#"Lesson Title: {title}
Description: {description}
Category: {category}

Write 4 to 5 content titles for this course.
Rules:
- Order them logically, starting with the fundamentals and ending with advanced material
- Each title is at most 8 words and does not repeat the course title verbatim
- No numbering, no commentary

Return a JSON object of the form {{"titles": ["...", "..."]}} and nothing else."#,
        title = title.trim(),
        description = description,
        category = category.name,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::{category_by_name, detect_language_track};

    #[test]
    fn test_user_prompt_carries_course_fields() {
        let cs = category_by_name("Computer Science").unwrap();
        let prompt = build_user_prompt("Intro to Rust", "Ownership and borrowing", cs);

        assert!(prompt.contains("Lesson Title: Intro to Rust"));
        assert!(prompt.contains("Description: Ownership and borrowing"));
        assert!(prompt.contains("Category: Computer Science"));
        assert!(prompt.contains(r#"{"titles": ["#));
    }

    #[test]
    fn test_user_prompt_marks_missing_description() {
        let cs = category_by_name("Computer Science").unwrap();
        assert!(build_user_prompt("Algebra", "  ", cs).contains("Description: (none)"));
    }

    #[test]
    fn test_system_prompt_specialises_for_language() {
        let track = detect_language_track("Mandarin for travellers");
        assert!(build_system_prompt(track).contains("teaching Chinese"));
        assert_eq!(build_system_prompt(None), SYSTEM_PROMPT);
    }
}
