//! # Response Matcher
//!
//! File: cli/src/assistant/matcher.rs
//!
//! ## Overview
//!
//! Maps one free-text message to one canned reply:
//! 1. Normalize the input (lower case, no diacritics).
//! 2. Walk the rules in priority order; the first rule with a trigger contained
//!    in the input decides the category.
//! 3. With no match, use the fallback category.
//! 4. Pick a reply from that category's pool with a uniform random index.
//!
//! Category selection is deterministic; only step 4 consumes randomness, and
//! the random source can be injected through `respond_with`.
//!
//! ## Examples
//!
//! ```rust
//! use educirculos::assistant::{Category, KeywordRule, ResponseMatcher, ResponsePool};
//!
//! let pool = ResponsePool::new([
//!     (Category::Greeting, vec!["¡Hola!"]),
//!     (Category::Help, vec!["¿En qué te ayudo?"]),
//! ])?;
//! let rules = vec![KeywordRule::new(Category::Greeting, ["hola"])?];
//! let matcher = ResponseMatcher::new(pool, rules, Category::Help)?;
//!
//! assert_eq!(matcher.classify("HOLA"), Category::Greeting);
//! assert_eq!(matcher.respond("xyz123"), "¿En qué te ayudo?");
//! # Ok::<(), educirculos::core::error::EduError>(())
//! ```
//!
use super::category::Category;
use super::normalize::normalize;
use super::pool::ResponsePool;
use super::rules::KeywordRule;
use crate::core::config::AssistantSettings;
use crate::core::error::EduError;
use rand::Rng;
use tracing::{debug, trace};

/// The category chosen for an input and the reply drawn from its pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchResult<'a> {
    pub category: Category,
    pub reply: &'a str,
}

/// Data-driven keyword matcher. Immutable once built; share it behind `Arc`.
#[derive(Debug, Clone)]
pub struct ResponseMatcher {
    pool: ResponsePool,
    rules: Vec<KeywordRule>,
    fallback: Category,
}

impl ResponseMatcher {
    /// Builds a matcher from an already validated pool and an ordered rule list.
    ///
    /// Fails with `UndefinedCategory` if any rule, or the fallback, names a
    /// category that has no pool.
    pub fn new(
        pool: ResponsePool,
        rules: Vec<KeywordRule>,
        fallback: Category,
    ) -> Result<Self, EduError> {
        let referenced = rules
            .iter()
            .map(KeywordRule::category)
            .chain(std::iter::once(fallback));
        for category in referenced {
            if !pool.contains(category) {
                return Err(EduError::UndefinedCategory {
                    category: category.to_string(),
                });
            }
        }
        debug!(
            "Response matcher ready: {} rules, fallback '{}'",
            rules.len(),
            fallback
        );
        Ok(Self {
            pool,
            rules,
            fallback,
        })
    }

    /// Builds a matcher from the `[assistant]` configuration section.
    pub fn from_settings(settings: &AssistantSettings) -> Result<Self, EduError> {
        let pool = ResponsePool::new(
            settings
                .responses
                .iter()
                .map(|(category, replies)| (*category, replies.clone())),
        )?;
        let rules = settings
            .rules
            .iter()
            .map(|rule| KeywordRule::new(rule.category, &rule.triggers))
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(pool, rules, settings.fallback)
    }

    /// Selects the category for `input` without drawing a reply.
    pub fn classify(&self, input: &str) -> Category {
        let normalized = normalize(input);
        let category = self
            .rules
            .iter()
            .find(|rule| rule.matches(&normalized))
            .map_or(self.fallback, KeywordRule::category);
        trace!("Classified {:?} as '{}'", normalized, category);
        category
    }

    /// Classifies `input` and draws the reply from `rng`.
    pub fn respond_with<'a, R: Rng + ?Sized>(&'a self, input: &str, rng: &mut R) -> MatchResult<'a> {
        let category = self.classify(input);
        // Every rule category and the fallback were checked against the pool in `new`.
        let reply = self.pool.pick(category, rng).unwrap_or_default();
        MatchResult { category, reply }
    }

    /// Classifies `input` and draws the reply from the thread-local generator.
    pub fn respond(&self, input: &str) -> String {
        self.respond_with(input, &mut rand::rng()).reply.to_owned()
    }

    pub fn pool(&self) -> &ResponsePool {
        &self.pool
    }

    /// Rules in priority order.
    pub fn rules(&self) -> &[KeywordRule] {
        &self.rules
    }

    pub fn fallback(&self) -> Category {
        self.fallback
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::{AssistantSettings, RuleConfig};
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::{BTreeMap, HashSet};

    fn small_matcher() -> ResponseMatcher {
        let pool = ResponsePool::new([
            (Category::Greeting, vec!["g1", "g2"]),
            (Category::Courses, vec!["c1"]),
            (Category::Help, vec!["h1", "h2", "h3"]),
        ])
        .unwrap();
        let rules = vec![
            KeywordRule::new(Category::Greeting, ["hola", "buenas"]).unwrap(),
            KeywordRule::new(Category::Courses, ["curso", "curriculo"]).unwrap(),
            KeywordRule::new(Category::Help, ["ayuda"]).unwrap(),
        ];
        ResponseMatcher::new(pool, rules, Category::Help).unwrap()
    }

    #[test]
    fn test_first_matching_rule_wins() {
        let matcher = small_matcher();
        assert_eq!(matcher.classify("hola, quiero ver un curso"), Category::Greeting);
        assert_eq!(matcher.classify("ayuda con mi curso"), Category::Courses);
        assert_eq!(matcher.classify("necesito ayuda"), Category::Help);
    }

    #[test]
    fn test_accents_and_case_are_ignored() {
        let matcher = small_matcher();
        assert_eq!(matcher.classify("El CURRÍCULO hondureño"), Category::Courses);
        assert_eq!(
            matcher.classify("currículo"),
            matcher.classify("curriculo")
        );
    }

    #[test]
    fn test_fallback_for_unmatched_and_empty_input() {
        let matcher = small_matcher();
        assert_eq!(matcher.classify("xyz123"), Category::Help);
        assert_eq!(matcher.classify(""), Category::Help);
        assert!(!matcher.respond("").is_empty());
    }

    #[test]
    fn test_injected_rng_makes_reply_deterministic() {
        let matcher = small_matcher();
        let mut rng = StdRng::seed_from_u64(42);
        let mut expected_rng = StdRng::seed_from_u64(42);

        let result = matcher.respond_with("necesito ayuda", &mut rng);
        let expected = ["h1", "h2", "h3"][expected_rng.random_range(0..3)];
        assert_eq!(
            result,
            MatchResult {
                category: Category::Help,
                reply: expected
            }
        );
    }

    #[test]
    fn test_every_reply_is_eventually_drawn() {
        let matcher = small_matcher();
        let mut rng = StdRng::seed_from_u64(3);
        let seen: HashSet<&str> = (0..500)
            .map(|_| matcher.respond_with("xyz", &mut rng).reply)
            .collect();
        assert_eq!(seen, HashSet::from(["h1", "h2", "h3"]));
    }

    #[test]
    fn test_rule_with_unpooled_category_is_rejected() {
        let pool = ResponsePool::new([(Category::Help, vec!["h1"])]).unwrap();
        let rules = vec![KeywordRule::new(Category::Circles, ["grupo"]).unwrap()];
        let err = ResponseMatcher::new(pool, rules, Category::Help).unwrap_err();
        assert_eq!(
            err,
            EduError::UndefinedCategory {
                category: "circles".into()
            }
        );
    }

    #[test]
    fn test_unpooled_fallback_is_rejected() {
        let pool = ResponsePool::new([(Category::Greeting, vec!["g1"])]).unwrap();
        let err = ResponseMatcher::new(pool, Vec::new(), Category::Help).unwrap_err();
        assert!(matches!(err, EduError::UndefinedCategory { .. }));
    }

    #[test]
    fn test_from_settings_validates_pools() {
        let mut responses = BTreeMap::new();
        responses.insert(Category::Help, vec!["h1".to_string()]);
        responses.insert(Category::Greeting, Vec::new());
        let settings = AssistantSettings {
            rules: vec![RuleConfig {
                category: Category::Greeting,
                triggers: vec!["hola".into()],
            }],
            responses,
            ..AssistantSettings::default()
        };
        let err = ResponseMatcher::from_settings(&settings).unwrap_err();
        assert_eq!(
            err,
            EduError::EmptyPool {
                category: "greeting".into()
            }
        );
    }
}
