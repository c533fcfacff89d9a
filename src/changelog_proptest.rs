//! Property-based tests for changelog promotion and extraction.

#[cfg(test)]
mod proptest_tests {
    use crate::changelog::{collapse_blank_lines, extract_section, promote, PromoteStatus};
    use proptest::prelude::*;

    const DATE: &str = "2024-02-03";

    fn version() -> impl Strategy<Value = String> {
        "[0-9]{1,2}\\.[0-9]{1,2}\\.[0-9]{1,2}"
    }

    fn bullets() -> impl Strategy<Value = Vec<String>> {
        prop::collection::vec("[a-z]{1,12}( [a-z]{1,12}){0,3}", 1..6)
    }

    fn changelog_with(bullets: &[String], gap: usize) -> String {
        let body: String = bullets.iter().map(|b| format!("- {}\n", b)).collect();
        format!(
            "# Changelog\n\n## [Unreleased]{}{}\n## [100.0.0] - 2020-01-01\n\n- Initial.\n",
            "\n".repeat(gap),
            body
        )
    }

    // ============================================================================
    // collapse_blank_lines
    // ============================================================================

    proptest! {
        /// Property: no run of three newlines survives
        #[test]
        fn collapse_leaves_no_triple_newline(input in "[a-z\n]*") {
            let result = collapse_blank_lines(&input);
            prop_assert!(!result.contains("\n\n\n"));
        }

        /// Property: collapsing twice changes nothing
        #[test]
        fn collapse_is_idempotent(input in "[a-z #\n]*") {
            let once = collapse_blank_lines(&input);
            prop_assert_eq!(collapse_blank_lines(&once), once.clone());
        }

        /// Property: collapsing only removes newlines
        #[test]
        fn collapse_keeps_other_characters(input in "[a-z #\n]*") {
            let result = collapse_blank_lines(&input);
            let strip = |s: &str| s.replace('\n', "");
            prop_assert_eq!(strip(&result), strip(&input));
        }
    }

    // ============================================================================
    // promote / extract_section
    // ============================================================================

    proptest! {
        /// Property: promoted notes carry every Unreleased bullet
        #[test]
        fn promoted_section_contains_every_bullet(
            version in version(),
            bullets in bullets(),
            gap in 1usize..5,
        ) {
            let text = changelog_with(&bullets, gap);
            let promotion = promote(&text, &version, DATE).unwrap();
            prop_assert_eq!(promotion.status, PromoteStatus::Promoted);

            let updated = promotion.updated.unwrap();
            let section = extract_section(&updated, &version).unwrap().unwrap();
            let heading = format!("## [{}] - {}\n", version, DATE);
            prop_assert!(section.starts_with(&heading));
            for bullet in &bullets {
                let line = format!("- {}", bullet);
                prop_assert!(section.contains(&line));
            }
        }

        /// Property: a second promotion of the same version is refused and
        /// leaves the document untouched
        #[test]
        fn promotion_is_not_repeated(version in version(), bullets in bullets()) {
            let text = changelog_with(&bullets, 2);
            let updated = promote(&text, &version, DATE).unwrap().updated.unwrap();

            let again = promote(&updated, &version, DATE).unwrap();
            prop_assert_eq!(again.status, PromoteStatus::VersionAlreadyExists);
            prop_assert!(again.updated.is_none());
        }

        /// Property: the promoted document keeps exactly one empty Unreleased
        /// section and no triple newlines
        #[test]
        fn promotion_resets_unreleased(version in version(), bullets in bullets()) {
            let text = changelog_with(&bullets, 3);
            let updated = promote(&text, &version, DATE).unwrap().updated.unwrap();

            prop_assert_eq!(updated.matches("## [Unreleased]").count(), 1);
            let promoted_heading = format!("## [Unreleased]\n\n## [{}]", version);
            prop_assert!(updated.contains(&promoted_heading));
            prop_assert!(!updated.contains("\n\n\n"));
            prop_assert!(updated.ends_with("## [100.0.0] - 2020-01-01\n\n- Initial.\n"));
        }

        /// Property: text without an Unreleased heading is never modified
        #[test]
        fn missing_unreleased_is_untouched(version in version(), text in "[a-z \n]*") {
            let promotion = promote(&text, &version, DATE).unwrap();
            prop_assert_eq!(promotion.status, PromoteStatus::MissingUnreleased);
            prop_assert!(promotion.updated.is_none());
        }
    }
}
