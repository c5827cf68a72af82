//! The closed set of intents a user turn can resolve to.

/// The classified purpose of a single user utterance.
///
/// Classification is total: every input produces exactly one intent, with
/// [`Intent::Unknown`] as the fallback. Query intents carry their extracted
/// parameters as `Option`s — `None` means the intent family matched but the
/// parameter could not be extracted, which the resolver answers with a
/// guidance message instead of running a query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    /// The user is ending the conversation.
    Farewell,
    /// A greeting ("hello", "hi", ...).
    Greeting,
    /// "What is your name?" and friends.
    IdentityQuery,
    /// "What do you do?" and friends.
    RoleQuery,
    /// "How are you?" and friends.
    MoodQuery,
    /// Thanks in any of the recognized phrasings.
    Thanks,
    /// An explicit request for usage guidance.
    HelpRequest,
    /// List the available categories.
    ListCategories,
    /// Important questions for a category; `None` when no known category
    /// name appeared in the input.
    ImportantQuestions { category: Option<String> },
    /// Questions with a given marks value in a category; either parameter
    /// may be missing.
    MarksQuestions {
        category: Option<String>,
        marks: Option<String>,
    },
    /// Nothing matched; surfaced to the user as a help hint.
    Unknown,
}
