// Metadata scorer — profile description presence and length.

use crate::models::CategoryResult;
use crate::scoring::signals::ProfileSignals;

const BRIEF_DESCRIPTION_CHARS: usize = 10;

/// Score the profile description. A blank description counts for slightly
/// more on a brand-new account.
pub fn score_metadata(description: Option<&str>, signals: &ProfileSignals) -> CategoryResult {
    let description = description.unwrap_or("");

    if description.trim().is_empty() {
        if signals.is_new_account() {
            return CategoryResult::new(
                60,
                "Profile description is missing; many new users leave this blank.",
            );
        }
        return CategoryResult::new(
            50,
            "Profile description is missing; note that many genuine users leave this blank.",
        );
    }

    if description.chars().count() < BRIEF_DESCRIPTION_CHARS {
        CategoryResult::new(50, "Profile description is very brief.")
    } else {
        CategoryResult::new(20, "Profile description appears normal.")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_age(age: Option<f64>) -> ProfileSignals {
        ProfileSignals {
            account_age_years: age,
            posting_frequency: 0,
            karma_ratio: None,
        }
    }

    #[test]
    fn test_blank_description_new_account() {
        assert_eq!(score_metadata(Some("   "), &with_age(Some(0.3))).score, 60);
    }

    #[test]
    fn test_blank_description_unknown_age() {
        assert_eq!(score_metadata(None, &with_age(None)).score, 50);
    }

    #[test]
    fn test_brief_and_normal() {
        let signals = with_age(Some(4.0));
        assert_eq!(score_metadata(Some("hi all"), &signals).score, 50);
        assert_eq!(score_metadata(Some("Gardener, dad."), &signals).score, 20);
    }

    #[test]
    fn test_length_includes_surrounding_whitespace() {
        // 4 visible chars padded to 10
        assert_eq!(
            score_metadata(Some("   abcd   "), &with_age(Some(4.0))).score,
            20
        );
    }
}
