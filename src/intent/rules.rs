//! The ordered intent rule table.
//!
//! Precedence between keyword families is part of the classification
//! contract: an input containing both a greeting word and a thanks word is
//! a greeting because greetings are checked first. Encoding the order as a
//! static table makes it testable on its own, independent of the
//! classifier's control flow.

/// How a rule's keywords are matched against the normalized input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchKind {
    /// The whole input must equal one of the keywords.
    Exact,
    /// The input must contain one of the keywords as a substring.
    Contains,
}

/// Which intent a matched rule resolves to.
///
/// `Important` and `Marks` need parameter extraction against the store's
/// category list, so the classifier finishes their construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleAction {
    Farewell,
    Greeting,
    Identity,
    Role,
    Mood,
    Thanks,
    Help,
    Categories,
    Important,
    Marks,
}

/// One entry of the precedence table: a keyword predicate paired with the
/// intent it constructs.
#[derive(Debug, Clone, Copy)]
pub struct IntentRule {
    pub keywords: &'static [&'static str],
    pub kind: MatchKind,
    pub action: RuleAction,
}

impl IntentRule {
    /// Test this rule against an already-normalized (lowercased, trimmed)
    /// input.
    pub fn matches(&self, input: &str) -> bool {
        match self.kind {
            MatchKind::Exact => self.keywords.iter().any(|k| input == *k),
            MatchKind::Contains => self.keywords.iter().any(|k| input.contains(k)),
        }
    }
}

const FAREWELLS: &[&str] = &["bye", "exit", "quit"];

const GREETINGS: &[&str] = &["hello", "hi", "hey", "namaste", "good morning", "wassup"];

const IDENTITY_QUERIES: &[&str] = &[
    "what is your name",
    "who are you",
    "tell me your name",
    "what are you called",
];

const ROLE_QUERIES: &[&str] = &[
    "what do you do",
    "what is your role",
    "what's your job",
    "who built you",
];

const MOOD_QUERIES: &[&str] = &[
    "how are you",
    "how's it going",
    "how are you doing",
    "how's your day",
];

const THANK_YOU_KEYWORDS: &[&str] = &["thank you", "thanks", "shukriya", "dhanyavad"];

const HELP_KEYWORDS: &[&str] = &[
    "help",
    "assist",
    "guidance",
    "support",
    "can you help me",
    "i need some help",
];

const CATEGORY_KEYWORDS: &[&str] = &["categories"];

const IMPORTANT_KEYWORDS: &[&str] = &[
    "important question",
    "top questions",
    "mostly asked",
    "expected questions",
    "frequent questions",
];

const MARKS_KEYWORDS: &[&str] = &["marks"];

/// The precedence table, evaluated top to bottom. First match wins; the
/// fallback when nothing matches is `Intent::Unknown`.
pub static RULES: &[IntentRule] = &[
    IntentRule {
        keywords: FAREWELLS,
        kind: MatchKind::Exact,
        action: RuleAction::Farewell,
    },
    IntentRule {
        keywords: GREETINGS,
        kind: MatchKind::Contains,
        action: RuleAction::Greeting,
    },
    IntentRule {
        keywords: IDENTITY_QUERIES,
        kind: MatchKind::Contains,
        action: RuleAction::Identity,
    },
    IntentRule {
        keywords: ROLE_QUERIES,
        kind: MatchKind::Contains,
        action: RuleAction::Role,
    },
    IntentRule {
        keywords: MOOD_QUERIES,
        kind: MatchKind::Contains,
        action: RuleAction::Mood,
    },
    IntentRule {
        keywords: THANK_YOU_KEYWORDS,
        kind: MatchKind::Contains,
        action: RuleAction::Thanks,
    },
    IntentRule {
        keywords: HELP_KEYWORDS,
        kind: MatchKind::Contains,
        action: RuleAction::Help,
    },
    IntentRule {
        keywords: CATEGORY_KEYWORDS,
        kind: MatchKind::Contains,
        action: RuleAction::Categories,
    },
    IntentRule {
        keywords: IMPORTANT_KEYWORDS,
        kind: MatchKind::Contains,
        action: RuleAction::Important,
    },
    IntentRule {
        keywords: MARKS_KEYWORDS,
        kind: MatchKind::Contains,
        action: RuleAction::Marks,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_precedence_order_is_fixed() {
        let order: Vec<RuleAction> = RULES.iter().map(|r| r.action).collect();
        assert_eq!(
            order,
            vec![
                RuleAction::Farewell,
                RuleAction::Greeting,
                RuleAction::Identity,
                RuleAction::Role,
                RuleAction::Mood,
                RuleAction::Thanks,
                RuleAction::Help,
                RuleAction::Categories,
                RuleAction::Important,
                RuleAction::Marks,
            ]
        );
    }

    #[test]
    fn test_exact_match_does_not_fire_on_containment() {
        let farewell = &RULES[0];
        assert_eq!(farewell.kind, MatchKind::Exact);
        assert!(farewell.matches("bye"));
        assert!(!farewell.matches("goodbye everyone"));
    }

    #[test]
    fn test_contains_match() {
        let greeting = &RULES[1];
        assert!(greeting.matches("hello there"));
        assert!(greeting.matches("well hello"));
        assert!(!greeting.matches("important questions on ai"));
    }
}
