// ============================================================
// CATEGORY REGISTRY
// ============================================================
// Compiled-in taxonomy: categories, subcategories, skills and
// per-category content title templates

/// Placeholder substituted with the extracted main topic
pub const TOPIC_PLACEHOLDER: &str = "{topic}";

/// Subcategory used when no subcategory keyword matches
pub const DEFAULT_SUBCATEGORY: &str = "Introduction";

/// Template used when no main topic can be extracted
pub const GENERIC_TEMPLATE: [&str; 5] = [
    "Introduction to Course",
    "Basic Concepts",
    "Intermediate Topics",
    "Advanced Topics",
    "Practical Applications",
];

/// A subcategory within exactly one category
#[derive(Debug, PartialEq, Eq)]
pub struct SubcategoryDef {
    pub name: &'static str,
    pub keywords: &'static [&'static str],
}

/// A top-level category
#[derive(Debug, PartialEq, Eq)]
pub struct CategoryDef {
    /// Stable identifier written to the `categoryId` column
    pub id: &'static str,
    pub name: &'static str,

    /// Ordered skills; the first one is the default skill
    pub skills: &'static [&'static str],

    /// Extra scoring terms, never persisted
    pub keywords: &'static [&'static str],

    /// Declared in tie-break order; the last entry is always `Introduction`
    pub subcategories: &'static [SubcategoryDef],

    /// Ordered from introductory to advanced
    pub title_template: &'static [&'static str],
}

impl CategoryDef {
    /// Skills followed by extra keywords, in declaration order
    pub fn scoring_terms(&self) -> impl Iterator<Item = &'static str> {
        self.skills.iter().chain(self.keywords.iter()).copied()
    }

    pub fn default_skill(&self) -> &'static str {
        self.skills[0]
    }
}

const INTRODUCTION: SubcategoryDef = SubcategoryDef {
    name: DEFAULT_SUBCATEGORY,
    keywords: &["intro", "introduction", "beginner", "basic", "getting started"],
};

pub static CATEGORIES: [CategoryDef; 8] = [
    CategoryDef {
        id: "cat001",
        name: "Computer Science",
        skills: &[
            "Programming",
            "Algorithms",
            "Data Structures",
            "Software Engineering",
            "Computer Science",
            "Python",
            "JavaScript",
            "Web Development",
        ],
        keywords: &[
            "coding",
            "software development",
            "cybersecurity",
            "artificial intelligence",
        ],
        subcategories: &[
            SubcategoryDef {
                name: "Programming Fundamentals",
                keywords: &["programming", "coding", "variables", "loops", "functions", "basics"],
            },
            SubcategoryDef {
                name: "Algorithms & Data Structures",
                keywords: &["algorithm", "data structure", "efficiency", "optimization", "sorting"],
            },
            SubcategoryDef {
                name: "Web Development",
                keywords: &["web", "html", "css", "javascript", "frontend", "backend"],
            },
            SubcategoryDef {
                name: "Software Engineering",
                keywords: &[
                    "software engineering",
                    "development lifecycle",
                    "testing",
                    "debugging",
                    "version control",
                ],
            },
            SubcategoryDef {
                name: "Computer Architecture",
                keywords: &["computer architecture", "hardware", "systems", "low-level", "assembly"],
            },
            INTRODUCTION,
        ],
        title_template: &[
            "Introduction to {topic}",
            "{topic} Fundamentals and Core Concepts",
            "Working with {topic} Tools",
            "Building Projects with {topic}",
            "Advanced {topic}",
        ],
    },
    CategoryDef {
        id: "cat002",
        name: "Business & Management",
        skills: &[
            "Leadership",
            "Project Management",
            "Marketing",
            "Finance",
            "Management",
            "Business",
            "Strategy",
            "Organizational Behavior",
        ],
        keywords: &["entrepreneurship", "accounting", "economics", "supply chain"],
        subcategories: &[
            SubcategoryDef {
                name: "Leadership",
                keywords: &["leadership", "leading", "managing teams", "influence", "motivation"],
            },
            SubcategoryDef {
                name: "Project Management",
                keywords: &["project management", "planning", "execution", "milestones", "timeline"],
            },
            SubcategoryDef {
                name: "Marketing",
                keywords: &[
                    "marketing",
                    "promotion",
                    "branding",
                    "customer acquisition",
                    "market research",
                ],
            },
            SubcategoryDef {
                name: "Finance",
                keywords: &["finance", "financial", "budgeting", "investment", "accounting"],
            },
            SubcategoryDef {
                name: "Strategy",
                keywords: &[
                    "strategy",
                    "strategic planning",
                    "competitive advantage",
                    "business model",
                ],
            },
            INTRODUCTION,
        ],
        title_template: &[
            "Introduction to {topic}",
            "Core Principles of {topic}",
            "{topic} in Practice",
            "Strategic {topic} Decisions",
            "Advanced {topic} Case Studies",
        ],
    },
    CategoryDef {
        id: "cat003",
        name: "Data Analysis & Statistics",
        skills: &[
            "Data Analysis",
            "Statistics",
            "Machine Learning",
            "Data Visualization",
            "Analytics",
            "Data Science",
            "R Programming",
            "Big Data",
        ],
        keywords: &["data analytics", "probability", "regression", "data mining"],
        subcategories: &[
            SubcategoryDef {
                name: "Statistical Analysis",
                keywords: &[
                    "statistics",
                    "statistical",
                    "probability",
                    "distribution",
                    "hypothesis testing",
                ],
            },
            SubcategoryDef {
                name: "Machine Learning",
                keywords: &[
                    "machine learning",
                    "ml",
                    "prediction",
                    "classification",
                    "regression",
                    "clustering",
                ],
            },
            SubcategoryDef {
                name: "Data Visualization",
                keywords: &["visualization", "charts", "graphs", "dashboard", "presentation"],
            },
            SubcategoryDef {
                name: "Data Processing",
                keywords: &[
                    "data processing",
                    "cleaning",
                    "transformation",
                    "wrangling",
                    "preprocessing",
                ],
            },
            SubcategoryDef {
                name: "Big Data",
                keywords: &["big data", "large scale", "distributed computing", "hadoop", "spark"],
            },
            INTRODUCTION,
        ],
        title_template: &[
            "Introduction to {topic}",
            "Collecting and Preparing Data for {topic}",
            "Analytical Methods in {topic}",
            "Visualizing and Interpreting {topic} Results",
            "Advanced {topic}",
        ],
    },
    CategoryDef {
        id: "cat004",
        name: "Education & Teacher Training",
        skills: &[
            "Teaching",
            "Curriculum Design",
            "Educational Technology",
            "Assessment",
            "Education",
            "Learning",
            "Training",
            "Instructional Design",
        ],
        keywords: &["pedagogy", "classroom", "teacher"],
        subcategories: &[
            SubcategoryDef {
                name: "Teaching Methods",
                keywords: &["teaching", "instruction", "pedagogy", "lesson planning", "classroom"],
            },
            SubcategoryDef {
                name: "Educational Technology",
                keywords: &[
                    "educational technology",
                    "edtech",
                    "digital learning",
                    "online education",
                ],
            },
            SubcategoryDef {
                name: "Assessment",
                keywords: &["assessment", "evaluation", "testing", "feedback", "grading"],
            },
            SubcategoryDef {
                name: "Curriculum Design",
                keywords: &["curriculum", "syllabus", "course design", "learning objectives"],
            },
            SubcategoryDef {
                name: "Learning Theory",
                keywords: &[
                    "learning theory",
                    "educational psychology",
                    "cognition",
                    "knowledge acquisition",
                ],
            },
            INTRODUCTION,
        ],
        title_template: &[
            "Introduction to {topic}",
            "Learning Theory Behind {topic}",
            "Designing Lessons for {topic}",
            "Assessment in {topic}",
            "Advanced Practice in {topic}",
        ],
    },
    CategoryDef {
        id: "cat005",
        name: "Health & Safety",
        skills: &[
            "Public Health",
            "Mental Health",
            "Safety",
            "Wellness",
            "Health",
            "Psychology",
            "Medicine",
            "Healthcare",
        ],
        keywords: &["nutrition", "epidemiology", "first aid", "disease"],
        subcategories: &[
            SubcategoryDef {
                name: "Public Health",
                keywords: &["public health", "population health", "epidemiology", "health policy"],
            },
            SubcategoryDef {
                name: "Mental Health",
                keywords: &["mental health", "psychology", "wellbeing", "stress", "mindfulness"],
            },
            SubcategoryDef {
                name: "Safety",
                keywords: &["safety", "risk assessment", "hazard prevention", "workplace safety"],
            },
            SubcategoryDef {
                name: "Healthcare",
                keywords: &["healthcare", "medicine", "clinical", "patient care", "health systems"],
            },
            SubcategoryDef {
                name: "Wellness",
                keywords: &["wellness", "health promotion", "lifestyle", "prevention", "self-care"],
            },
            INTRODUCTION,
        ],
        title_template: &[
            "Introduction to {topic}",
            "Foundations of {topic}",
            "Risk Factors and Prevention in {topic}",
            "{topic} in Practice",
            "Advanced Topics in {topic}",
        ],
    },
    CategoryDef {
        id: "cat006",
        name: "Communication",
        skills: &[
            "Public Speaking",
            "Writing",
            "Interpersonal Communication",
            "Digital Communication",
            "Communication",
            "Presentation",
            "Negotiation",
            "Media",
        ],
        keywords: &["public relations", "journalism", "storytelling", "rhetoric"],
        subcategories: &[
            SubcategoryDef {
                name: "Public Speaking",
                keywords: &["public speaking", "presentation", "speaking", "audience", "delivery"],
            },
            SubcategoryDef {
                name: "Writing",
                keywords: &["writing", "composition", "grammar", "style", "content creation"],
            },
            SubcategoryDef {
                name: "Interpersonal Communication",
                keywords: &["interpersonal", "conversation", "listening", "empathy", "relationships"],
            },
            SubcategoryDef {
                name: "Digital Communication",
                keywords: &["digital communication", "social media", "online", "virtual", "remote"],
            },
            SubcategoryDef {
                name: "Media Studies",
                keywords: &["media", "journalism", "content creation", "broadcasting", "publishing"],
            },
            INTRODUCTION,
        ],
        title_template: &[
            "Introduction to {topic}",
            "Core {topic} Skills",
            "Audience and Context in {topic}",
            "{topic} Across Media",
            "Advanced {topic}",
        ],
    },
    CategoryDef {
        id: "cat007",
        name: "Humanities",
        skills: &[
            "History",
            "Philosophy",
            "Literature",
            "Art",
            "Culture",
            "Society",
            "Ethics",
            "Critical Thinking",
        ],
        keywords: &["literary", "religion", "anthropology", "civilization"],
        subcategories: &[
            SubcategoryDef {
                name: "History",
                keywords: &["history", "historical", "past", "civilization", "chronology"],
            },
            SubcategoryDef {
                name: "Philosophy",
                keywords: &["philosophy", "philosophical", "ethics", "logic", "metaphysics"],
            },
            SubcategoryDef {
                name: "Literature",
                keywords: &["literature", "literary", "fiction", "poetry", "drama"],
            },
            SubcategoryDef {
                name: "Art",
                keywords: &["art", "artistic", "aesthetics", "creative expression", "visual arts"],
            },
            SubcategoryDef {
                name: "Cultural Studies",
                keywords: &["culture", "cultural", "society", "anthropology", "social studies"],
            },
            INTRODUCTION,
        ],
        title_template: &[
            "Introduction to {topic}",
            "Key Thinkers and Sources in {topic}",
            "Historical Context of {topic}",
            "Critical Analysis of {topic}",
            "Contemporary Debates in {topic}",
        ],
    },
    CategoryDef {
        id: "cat008",
        name: "Science",
        skills: &[
            "Biology",
            "Chemistry",
            "Physics",
            "Environmental Science",
            "Research",
            "Mathematics",
            "Engineering",
            "Scientific Method",
        ],
        keywords: &["astronomy", "genetics", "ecology", "quantum"],
        subcategories: &[
            SubcategoryDef {
                name: "Biology",
                keywords: &["biology", "biological", "organism", "ecosystem", "genetics"],
            },
            SubcategoryDef {
                name: "Chemistry",
                keywords: &["chemistry", "chemical", "molecular", "reaction", "compounds"],
            },
            SubcategoryDef {
                name: "Physics",
                keywords: &["physics", "physical", "energy", "motion", "forces"],
            },
            SubcategoryDef {
                name: "Environmental Science",
                keywords: &[
                    "environmental",
                    "climate",
                    "sustainability",
                    "ecology",
                    "conservation",
                ],
            },
            SubcategoryDef {
                name: "Scientific Method",
                keywords: &[
                    "scientific method",
                    "research",
                    "experimentation",
                    "hypothesis",
                    "analysis",
                ],
            },
            INTRODUCTION,
        ],
        title_template: &[
            "Introduction to {topic}",
            "Fundamental Principles of {topic}",
            "Experimental Methods in {topic}",
            "Applications of {topic}",
            "Advanced {topic}",
        ],
    },
];

/// First-declared category, returned when nothing scores
pub fn default_category() -> &'static CategoryDef {
    &CATEGORIES[0]
}

pub fn category_by_name(name: &str) -> Option<&'static CategoryDef> {
    CATEGORIES.iter().find(|c| c.name == name)
}

pub fn category_by_id(id: &str) -> Option<&'static CategoryDef> {
    CATEGORIES.iter().find(|c| c.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_registry_shape() {
        let ids: HashSet<_> = CATEGORIES.iter().map(|c| c.id).collect();
        let names: HashSet<_> = CATEGORIES.iter().map(|c| c.name).collect();
        assert_eq!(ids.len(), CATEGORIES.len());
        assert_eq!(names.len(), CATEGORIES.len());

        for category in CATEGORIES.iter() {
            assert!(!category.skills.is_empty(), "{} has no skills", category.name);
            assert!(
                (4..=5).contains(&category.title_template.len()),
                "{} template size",
                category.name
            );
            assert_eq!(
                category.subcategories.last().map(|s| s.name),
                Some(DEFAULT_SUBCATEGORY)
            );
            assert!(category
                .title_template
                .iter()
                .all(|t| t.contains(TOPIC_PLACEHOLDER)));
        }
    }

    #[test]
    fn test_lookups() {
        assert_eq!(default_category().name, "Computer Science");
        assert_eq!(category_by_name("Science").map(|c| c.id), Some("cat008"));
        assert_eq!(category_by_id("cat002").map(|c| c.name), Some("Business & Management"));
        assert!(category_by_name("Cooking").is_none());
    }

    #[test]
    fn test_scoring_terms_order() {
        let terms: Vec<_> = CATEGORIES[0].scoring_terms().collect();
        assert_eq!(terms.first(), Some(&"Programming"));
        assert_eq!(terms.last(), Some(&"artificial intelligence"));
        assert_eq!(
            terms.len(),
            CATEGORIES[0].skills.len() + CATEGORIES[0].keywords.len()
        );
    }
}
