//! Identity intercept: canned answers to "who made you" questions.
//!
//! A prompt whose lowercase form contains any phrase of the table below is
//! answered locally with one of four fixed replies and never reaches the
//! generative model. Matching is plain substring containment, so a phrase
//! embedded in a longer, unrelated sentence triggers the intercept too.

/// Language group of an identity phrase.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Language {
    English,
    /// Roman Urdu and Urdu script.
    Urdu,
    /// Romanised Hindi and Devanagari.
    Hindi,
    French,
    Spanish,
    German,
}

const ENGLISH_PHRASES: &[&str] = &[
    "who created you",
    "who made you",
    "who coded you",
    "who invented you",
    "who is behind you",
    "who gave you life",
    "who made your system",
    "who is your founder",
    "who constructed you",
    "who engineered you",
    "who brought you to existence",
    "who assembled you",
    "who is responsible for you",
    "who trained you",
    "who is your mastermind",
    "who is your architect",
    "who structured you",
    "who formulated you",
    "who is your designer",
    "who gave you intelligence",
    "who is your brainchild",
    "who constructed your logic",
    "who shaped your existence",
    "who created your algorithms",
    "who implemented you",
    "who configured you",
    "who made your AI",
    "who programmed your functions",
    "who gave you commands",
    "who built your database",
    "who wrote your code",
    "who is your developer team",
    "who set up your system",
    "who initialized you",
    "who developed you",
    "who is your developer",
];

const URDU_PHRASES: &[&str] = &[
    "tumhara developer kon hai",
    "tumhari programming kisne ki",
    "tumhara bananay wala kon hai",
    "tumhari takhleeq kisne ki",
    "tumhari pehchan kya hai",
    "tum kaise bane",
    "tumhari technology kisne develop ki",
    "tumhara malik kon hai",
    "tumhe kisne create kiya",
    "tumhari pehchan kisne banai",
    "تمہاری تخلیق کس نے کی",
    "تمہاری پہچان کس نے بنائی",
    "تمہارا نظام کس نے ترتیب دیا",
    "تمہاری پروسیسنگ کس نے بنائی",
    "تمہاری سافٹ ویئر ڈیولپمنٹ کس نے کی",
    "تمہاری کوڈنگ کس نے لکھی",
    "تمہیں بنانے کا مقصد کیا تھا",
    "تمہارا خالق کون ہے",
    "تمہیں چلانے والا کون ہے",
    "تمہاری بیک اینڈ ڈیولپمنٹ کس نے کی",
    "تمہاری انٹیلیجنس کہاں سے آئی",
    "تمہارے سسٹم کو کس نے بنایا",
    "تمہاری ڈیٹا بیس کو کس نے تیار کیا",
];

const HINDI_PHRASES: &[&str] = &[
    "aapko kisne develop kiya",
    "aapka nirmaan kisne kiya",
    "aapki rachna kisne ki",
    "aapko kisne tayar kiya",
    "aapka nirman kisne kiya",
    "aapko kisne socha",
    "aapke peeche kaun hai",
    "aapki takhneek kisne banai",
    "aapki coding kisne ki",
    "aapki rachna kaun hai",
    "आपको किसने विकसित किया",
    "आपकी संरचना किसने की",
    "आपका डिज़ाइन किसने तैयार किया",
    "आपका सिस्टम किसने बनाया",
    "आपका डेटा प्रोसेसिंग सिस्टम किसने बनाया",
    "आपके कोडिंग का जनक कौन है",
    "आपकी बुनियाद किसने रखी",
    "आपकी सोच किसने विकसित की",
    "आपका निर्माण किसके द्वारा हुआ",
    "आपके सॉफ़्टवेयर को किसने बनाया",
    "आपकी लॉजिक बिल्डिंग किसने की",
    "आपकी मशीन लर्निंग किसने सेटअप की",
];

const FRENCH_PHRASES: &[&str] = &[
    "qui vous a créé",
    "qui est votre créateur",
    "qui vous a conçu",
    "qui vous a développé",
    "qui êtes-vous",
    "parlez-moi de vous",
];

const SPANISH_PHRASES: &[&str] = &[
    "quién te creó",
    "quién es tu creador",
    "quién te diseñó",
    "quién te desarrolló",
    "quién eres",
    "háblame de ti",
];

const GERMAN_PHRASES: &[&str] = &[
    "wer hat dich erschaffen",
    "wer ist dein entwickler",
    "wer hat dich gemacht",
    "wer bist du",
    "erzähl mir von dir",
    "wer hat dich programmiert",
];

/// The phrase table, grouped by language.
pub const IDENTITY_PHRASES: &[(Language, &[&str])] = &[
    (Language::English, ENGLISH_PHRASES),
    (Language::Urdu, URDU_PHRASES),
    (Language::Hindi, HINDI_PHRASES),
    (Language::French, FRENCH_PHRASES),
    (Language::Spanish, SPANISH_PHRASES),
    (Language::German, GERMAN_PHRASES),
];

/// The four canned identity replies.
pub const IDENTITY_RESPONSES: [&str; 4] = [
    "I am MindScope AI, an advanced artificial intelligence created by Riaz Hussain. I specialize in engaging conversations, answering questions, and helping with various tasks. How can I assist you today?",
    "I'm MindScope AI, developed by Riaz Hussain - a skilled AI Developer and Software Engineer. I'm designed to be your intelligent companion for discussions, problem-solving, and creative tasks.",
    "Thanks for asking! I'm MindScope AI, and I was created by Riaz Hussain, an experienced AI developer. I'm here to help you with any questions or tasks you might have.",
    "I'm an AI assistant called MindScope, developed by Riaz Hussain. I combine advanced language understanding with helpful capabilities to assist users like you. What can I help you with?",
];

const FNV_OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

/// 64-bit FNV-1a hash. Stable across runs and platforms.
pub fn fnv1a_64(bytes: &[u8]) -> u64 {
    bytes.iter().fold(FNV_OFFSET_BASIS, |hash, byte| {
        (hash ^ u64::from(*byte)).wrapping_mul(FNV_PRIME)
    })
}

/// Index into [`IDENTITY_RESPONSES`] for a prompt.
pub fn response_index(prompt: &str) -> usize {
    (fnv1a_64(prompt.as_bytes()) % IDENTITY_RESPONSES.len() as u64) as usize
}

/// One entry of the compiled phrase table.
#[derive(Debug, Clone)]
struct IdentityPhrase {
    language: Language,
    /// Lowercased so it can be compared against a lowercased prompt.
    text: String,
}

/// Compiled identity phrase table.
#[derive(Debug, Clone)]
pub struct IdentityIntercept {
    phrases: Vec<IdentityPhrase>,
}

impl Default for IdentityIntercept {
    fn default() -> Self {
        Self::new()
    }
}

impl IdentityIntercept {
    pub fn new() -> Self {
        let phrases = IDENTITY_PHRASES
            .iter()
            .flat_map(|(language, phrases)| {
                phrases.iter().map(move |text| IdentityPhrase {
                    language: *language,
                    text: text.to_lowercase(),
                })
            })
            .collect();
        Self { phrases }
    }

    /// Language of the first phrase contained in `prompt`, if any.
    pub fn matched_language(&self, prompt: &str) -> Option<Language> {
        let lowered = prompt.to_lowercase();
        self.phrases
            .iter()
            .find(|phrase| lowered.contains(phrase.text.as_str()))
            .map(|phrase| phrase.language)
    }

    /// Canned reply for `prompt`, or `None` if it is not an identity question.
    ///
    /// The reply is picked by `fnv1a_64(prompt) % 4` over the prompt as
    /// submitted, so the same prompt always gets the same reply.
    pub fn check(&self, prompt: &str) -> Option<&'static str> {
        let language = self.matched_language(prompt)?;
        let index = response_index(prompt);
        tracing::debug!(?language, index, "Identity question intercepted");
        Some(IDENTITY_RESPONSES[index])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fnv1a_known_vectors() {
        assert_eq!(fnv1a_64(b""), 0xcbf29ce484222325);
        assert_eq!(fnv1a_64(b"a"), 0xaf63dc4c8601ec8c);
        assert_eq!(fnv1a_64(b"foobar"), 0x85944171f73967e8);
    }

    #[test]
    fn test_table_sizes() {
        let intercept = IdentityIntercept::new();
        let expected: usize = IDENTITY_PHRASES.iter().map(|(_, p)| p.len()).sum();
        assert_eq!(intercept.phrases.len(), expected);
        assert_eq!(IDENTITY_PHRASES.len(), 6);
        assert_eq!(ENGLISH_PHRASES.len(), 36);
    }

    #[test]
    fn test_english_questions_match_case_insensitively() {
        let intercept = IdentityIntercept::new();
        for prompt in [
            "Who created you?",
            "Who made you, really?",
            "Who developed you?",
            "WHO TRAINED YOU",
        ] {
            assert_eq!(intercept.matched_language(prompt), Some(Language::English));
        }
        assert!(intercept.matched_language("What is the capital of France?").is_none());
    }

    #[test]
    fn test_each_language_group_matches() {
        let intercept = IdentityIntercept::new();
        let cases = [
            ("Hey, who is your developer?", Language::English),
            ("Tumhara developer kon hai?", Language::Urdu),
            ("تمہارا خالق کون ہے؟", Language::Urdu),
            ("Aapko kisne develop kiya?", Language::Hindi),
            ("आपको किसने विकसित किया?", Language::Hindi),
            ("Qui vous a créé ?", Language::French),
            ("¿Quién te creó?", Language::Spanish),
            ("Wer hat dich gemacht?", Language::German),
        ];
        for (prompt, language) in cases {
            assert_eq!(
                intercept.matched_language(prompt),
                Some(language),
                "prompt: {}",
                prompt
            );
        }
    }

    #[test]
    fn test_uppercase_table_entry_matches_after_lowercasing() {
        let intercept = IdentityIntercept::new();
        assert!(intercept.check("So who made your AI anyway?").is_some());
    }

    #[test]
    fn test_substring_inside_longer_sentence_triggers() {
        let intercept = IdentityIntercept::new();
        // "wer bist du" hides inside an unrelated German sentence.
        assert_eq!(
            intercept.matched_language("Sag mir, wer bist du eigentlich beim Schach?"),
            Some(Language::German)
        );
        assert!(intercept
            .check("I wonder who trained your dog, and also who trained you")
            .is_some());
    }

    #[test]
    fn test_check_returns_one_of_four_deterministically() {
        let intercept = IdentityIntercept::new();
        let prompt = "Who developed you?";
        let first = intercept.check(prompt).unwrap();
        let second = intercept.check(prompt).unwrap();
        assert_eq!(first, second);
        assert!(IDENTITY_RESPONSES.contains(&first));
        assert_eq!(first, IDENTITY_RESPONSES[response_index(prompt)]);
    }

    #[test]
    fn test_check_hashes_original_prompt_not_lowercased() {
        let index = response_index("Who Developed You?");
        let expected = (fnv1a_64("Who Developed You?".as_bytes()) % 4) as usize;
        assert_eq!(index, expected);
    }

    #[test]
    fn test_check_none_for_regular_prompt() {
        let intercept = IdentityIntercept::new();
        assert!(intercept.check("Write a haiku about autumn").is_none());
    }

    #[test]
    fn test_all_responses_mention_mindscope_and_creator() {
        for response in IDENTITY_RESPONSES {
            assert!(response.contains("MindScope"));
            assert!(response.contains("Riaz Hussain"));
        }
    }

    #[test]
    fn test_response_index_in_range() {
        for prompt in ["", "a", "who coded you", "wer bist du", "तुम कौन"] {
            assert!(response_index(prompt) < IDENTITY_RESPONSES.len());
        }
    }
}
