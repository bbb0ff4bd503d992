//! Skills coverage rubric

use crate::lexicon::Lexicon;
use crate::processing::clamp_score;
use serde::{Deserialize, Serialize};

/// Skill lexicon hits found in a document
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillsBreakdown {
    pub technical: Vec<String>,
    pub soft: Vec<String>,
    pub modern: Vec<String>,
    pub has_skills_section: bool,
}

impl SkillsBreakdown {
    pub fn collect(lower: &str, lexicon: &Lexicon) -> Self {
        let owned = |found: std::collections::BTreeSet<&str>| -> Vec<String> {
            found.into_iter().map(str::to_string).collect()
        };

        Self {
            technical: owned(lexicon.technical_skills().find_words(lower)),
            soft: owned(lexicon.soft_skills().find_words(lower)),
            modern: owned(lexicon.modern_skills().find_words(lower)),
            has_skills_section: lexicon.has_skills_section(lower),
        }
    }

    pub fn score(&self) -> u8 {
        let tech = self.technical.len() as i32;
        let soft = self.soft.len() as i32;

        // Technical skills weigh twice as much as soft skills
        let mut score = (tech * 4 + soft * 2).min(70);

        score += diversity_bonus(tech, soft);

        if self.has_skills_section {
            score += 10;
        }

        score += self.modern.len() as i32 * 2;

        clamp_score(score)
    }
}

fn diversity_bonus(tech: i32, soft: i32) -> i32 {
    if tech >= 10 && soft >= 5 {
        15
    } else if tech >= 7 && soft >= 3 {
        10
    } else if tech >= 5 && soft >= 2 {
        5
    } else {
        0
    }
}

/// Score skills coverage of lower-cased text
pub fn score_skills(lower: &str, lexicon: &Lexicon) -> u8 {
    SkillsBreakdown::collect(lower, lexicon).score()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lexicon() -> Lexicon {
        Lexicon::builtin().unwrap()
    }

    #[test]
    fn test_empty_text_scores_zero() {
        assert_eq!(score_skills("", &lexicon()), 0);
    }

    #[test]
    fn test_javascript_does_not_count_java() {
        let breakdown = SkillsBreakdown::collect("javascript", &lexicon());
        assert_eq!(breakdown.technical, vec!["javascript".to_string()]);
        assert_eq!(breakdown.score(), 4);
    }

    #[test]
    fn test_modern_skills_add_on_top() {
        // docker + kubernetes: 2 tech (8) + 2 modern (4)
        let breakdown = SkillsBreakdown::collect("docker and kubernetes", &lexicon());
        assert_eq!(breakdown.modern.len(), 2);
        assert_eq!(breakdown.score(), 12);
    }

    #[test]
    fn test_diversity_bonus_tiers() {
        assert_eq!(diversity_bonus(10, 5), 15);
        assert_eq!(diversity_bonus(12, 4), 10);
        assert_eq!(diversity_bonus(7, 3), 10);
        assert_eq!(diversity_bonus(6, 2), 5);
        assert_eq!(diversity_bonus(20, 1), 0);
        assert_eq!(diversity_bonus(4, 9), 0);
    }

    #[test]
    fn test_skills_section_bonus() {
        let with = SkillsBreakdown::collect("technical skills\nrust", &lexicon());
        let without = SkillsBreakdown::collect("toolbox\nrust", &lexicon());
        assert!(with.has_skills_section);
        assert_eq!(with.score(), without.score() + 10);
    }

    #[test]
    fn test_base_is_capped_and_total_clamped() {
        let lexicon = lexicon();
        let text: String = lexicon
            .technical_skills()
            .iter()
            .chain(lexicon.soft_skills().iter())
            .collect::<Vec<_>>()
            .join(" , ");
        let text = format!("skills\n{}", text);
        assert_eq!(score_skills(&text, &lexicon), 100);
    }
}
