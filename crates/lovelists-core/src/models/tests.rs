#[cfg(test)]
mod model_tests {
    use crate::models::{CatalogQuery, Difficulty, ProgressStats, Template};

    fn create_test_template() -> Template {
        Template {
            id: "declutter".to_string(),
            title: "Declutter the Kitchen".to_string(),
            description: "Clear counters and cupboards".to_string(),
            category: "Home & Life Admin".to_string(),
            tags: vec!["home".to_string(), "Cleaning".to_string()],
            time_mins: 90,
            difficulty: Some(Difficulty::Easy),
            good_for: vec!["Weekends".to_string()],
            steps: vec!["Empty the counters".to_string(), "Wipe down".to_string()],
        }
    }

    #[test]
    fn test_template_deserializes_camel_case_fields() {
        let json = r#"{
            "id": "wedding",
            "title": "Wedding Plan",
            "description": "From engagement to the big day",
            "category": "Events",
            "tags": ["wedding"],
            "timeMins": 45,
            "difficulty": "Hard",
            "goodFor": ["Couples"],
            "steps": ["Set a budget", "Book a venue"]
        }"#;

        let template: Template = serde_json::from_str(json).expect("valid template");
        assert_eq!(template.time_mins, 45);
        assert_eq!(template.difficulty, Some(Difficulty::Hard));
        assert_eq!(template.good_for, vec!["Couples".to_string()]);
        assert_eq!(template.step_count(), 2);
    }

    #[test]
    fn test_template_optional_fields_default() {
        let json = r#"{"id": "bare", "title": "Bare"}"#;
        let template: Template = serde_json::from_str(json).expect("valid template");

        assert_eq!(template.description, "");
        assert_eq!(template.category, "");
        assert!(template.tags.is_empty());
        assert_eq!(template.time_mins, 0);
        assert_eq!(template.difficulty, None);
        assert!(template.steps.is_empty());
        assert_eq!(template.display_category(), "Other");
    }

    #[test]
    fn test_difficulty_from_str() {
        assert_eq!("easy".parse::<Difficulty>(), Ok(Difficulty::Easy));
        assert_eq!("MEDIUM".parse::<Difficulty>(), Ok(Difficulty::Medium));
        assert_eq!("Hard".parse::<Difficulty>(), Ok(Difficulty::Hard));
        assert!("extreme".parse::<Difficulty>().is_err());
    }

    #[test]
    fn test_time_label() {
        let mut template = create_test_template();
        assert_eq!(template.time_label(), Some("1 hr 30 min".to_string()));

        template.time_mins = 0;
        assert_eq!(template.time_label(), None);

        template.time_mins = 20;
        assert_eq!(template.time_label(), Some("20 min".to_string()));

        template.time_mins = 120;
        assert_eq!(template.time_label(), Some("2 hr".to_string()));
    }

    #[test]
    fn test_has_tag_is_case_insensitive_exact() {
        let template = create_test_template();
        assert!(template.has_tag("HOME"));
        assert!(template.has_tag("cleaning"));
        assert!(!template.has_tag("hom"));
    }

    #[test]
    fn test_display_category_uses_normalization() {
        let template = create_test_template();
        assert_eq!(template.display_category(), "Home");
    }

    #[test]
    fn test_query_is_active() {
        assert!(!CatalogQuery::default().is_active());
        assert!(!CatalogQuery::text("   ").is_active());
        assert!(CatalogQuery::text("wed").is_active());
        assert!(CatalogQuery::tag("home").is_active());
        assert!(CatalogQuery::category("Events").is_active());
    }

    #[test]
    fn test_progress_stats_flags() {
        let empty = ProgressStats::default();
        assert!(!empty.is_complete());
        assert!(!empty.is_started());

        let partial = ProgressStats {
            done: 1,
            total: 3,
            pct: 33,
        };
        assert!(partial.is_started());
        assert!(!partial.is_complete());

        let full = ProgressStats {
            done: 3,
            total: 3,
            pct: 100,
        };
        assert!(full.is_complete());
    }
}
