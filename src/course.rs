use crate::core::error::VerseError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A course the assistant can discuss.
///
/// `EnglishLiterature` is the general starting context; the other four are
/// the ones a student can pick from the course list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Course {
    #[default]
    #[serde(rename = "English Literature")]
    EnglishLiterature,
    #[serde(rename = "The American Novel Since 1945")]
    AmericanNovel,
    #[serde(rename = "Introduction to Theory of Literature")]
    TheoryOfLiterature,
    #[serde(rename = "Milton")]
    Milton,
    #[serde(rename = "Modern Poetry")]
    ModernPoetry,
}

impl Course {
    /// Courses offered in the course list, in display order.
    pub const SELECTABLE: [Course; 4] = [
        Course::AmericanNovel,
        Course::TheoryOfLiterature,
        Course::Milton,
        Course::ModernPoetry,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Course::EnglishLiterature => "English Literature",
            Course::AmericanNovel => "The American Novel Since 1945",
            Course::TheoryOfLiterature => "Introduction to Theory of Literature",
            Course::Milton => "Milton",
            Course::ModernPoetry => "Modern Poetry",
        }
    }

    /// Resolves a selectable course from its name (case-insensitive) or its
    /// 1-based position in the course list.
    pub fn parse_selectable(input: &str) -> Result<Course, VerseError> {
        let input = input.trim();

        if let Ok(index) = input.parse::<usize>() {
            return index
                .checked_sub(1)
                .and_then(|i| Self::SELECTABLE.get(i).copied())
                .ok_or_else(|| VerseError::UnknownCourse(input.to_string()));
        }

        Self::SELECTABLE
            .iter()
            .copied()
            .find(|course| course.name().eq_ignore_ascii_case(input))
            .ok_or_else(|| VerseError::UnknownCourse(input.to_string()))
    }
}

impl fmt::Display for Course {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_course_is_english_literature() {
        assert_eq!(Course::default(), Course::EnglishLiterature);
        assert_eq!(Course::default().to_string(), "English Literature");
    }

    #[test]
    fn parses_names_case_insensitively() {
        assert_eq!(Course::parse_selectable("Milton").unwrap(), Course::Milton);
        assert_eq!(
            Course::parse_selectable("  modern poetry ").unwrap(),
            Course::ModernPoetry
        );
        assert_eq!(
            Course::parse_selectable("the american novel since 1945").unwrap(),
            Course::AmericanNovel
        );
    }

    #[test]
    fn parses_list_positions() {
        assert_eq!(Course::parse_selectable("1").unwrap(), Course::AmericanNovel);
        assert_eq!(
            Course::parse_selectable("2").unwrap(),
            Course::TheoryOfLiterature
        );
        assert_eq!(Course::parse_selectable("4").unwrap(), Course::ModernPoetry);
        assert!(Course::parse_selectable("0").is_err());
        assert!(Course::parse_selectable("5").is_err());
    }

    #[test]
    fn default_course_is_not_selectable() {
        let err = Course::parse_selectable("English Literature").unwrap_err();
        assert!(matches!(err, VerseError::UnknownCourse(_)));
    }

    #[test]
    fn serializes_as_display_name() {
        let json = serde_json::to_string(&Course::TheoryOfLiterature).unwrap();
        assert_eq!(json, "\"Introduction to Theory of Literature\"");
        let parsed: Course = serde_yml::from_str("Milton").unwrap();
        assert_eq!(parsed, Course::Milton);
    }
}
