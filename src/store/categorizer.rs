use crate::models::Category;

const WORK_KEYWORDS: [&str; 5] = ["meeting", "project", "client", "sprint", "deadline"];
const PERSONAL_KEYWORDS: [&str; 5] = ["birthday", "family", "party", "doctor", "gym"];

/// Infers a category from the event title and notes.
///
/// Matching is plain substring search over the lower-cased text, with Work
/// keywords checked before Personal ones.
pub fn categorize(title: &str, notes: Option<&str>) -> Category {
    let haystack = format!(
        "{} {}",
        title.to_lowercase(),
        notes.unwrap_or_default().to_lowercase()
    );

    if WORK_KEYWORDS.iter().any(|kw| haystack.contains(kw)) {
        Category::Work
    } else if PERSONAL_KEYWORDS.iter().any(|kw| haystack.contains(kw)) {
        Category::Personal
    } else {
        Category::Other
    }
}
