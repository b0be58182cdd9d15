#![deny(missing_docs)]

//! # Inflector
//!
//! English noun pluralization and singularization.
//!
//! The rules operate on the last `_` or `-` separated segment of a word, so
//! `test_item` pluralizes to `test_items` and `blog-categories` singularizes to
//! `blog-category`. An `Inflector` is constructed once per invocation and passed
//! by reference into the naming and field parsing code.

use std::collections::HashMap;

/// Singular/plural pairs that no suffix rule can derive.
const IRREGULAR: &[(&str, &str)] = &[
    ("person", "people"),
    ("man", "men"),
    ("woman", "women"),
    ("child", "children"),
    ("tooth", "teeth"),
    ("foot", "feet"),
    ("mouse", "mice"),
    ("goose", "geese"),
    ("ox", "oxen"),
    ("criterion", "criteria"),
    ("analysis", "analyses"),
    ("crisis", "crises"),
    ("leaf", "leaves"),
    ("knife", "knives"),
    ("life", "lives"),
    ("wife", "wives"),
    ("half", "halves"),
    ("wolf", "wolves"),
    ("shelf", "shelves"),
    ("loaf", "loaves"),
    ("thief", "thieves"),
    ("hero", "heroes"),
    ("potato", "potatoes"),
    ("tomato", "tomatoes"),
    ("echo", "echoes"),
    ("veto", "vetoes"),
    ("movie", "movies"),
    ("cookie", "cookies"),
    ("pie", "pies"),
    ("tie", "ties"),
    ("zombie", "zombies"),
    ("quiz", "quizzes"),
];

/// Words with identical singular and plural forms.
const UNCOUNTABLE: &[&str] = &[
    "equipment",
    "information",
    "rice",
    "money",
    "species",
    "series",
    "fish",
    "sheep",
    "deer",
    "news",
    "data",
    "metadata",
    "media",
    "feedback",
    "software",
    "audio",
];

/// Singular nouns ending in `-us`. Their plurals take `-es` (`statuses`).
const US_SINGULARS: &[&str] = &[
    "abacus", "apparatus", "bonus", "bus", "cactus", "campus", "census", "chorus", "circus",
    "citrus", "consensus", "corpus", "exodus", "focus", "fungus", "genius", "hiatus",
    "hippopotamus", "impetus", "lotus", "minus", "nexus", "octopus", "onus", "opus",
    "platypus", "plus", "prospectus", "radius", "rebus", "sinus", "status", "stimulus",
    "syllabus", "thesaurus", "uterus", "virus", "walrus",
];

/// Singular nouns ending in `-che`, which would otherwise lose their `e`.
const CHE_SINGULARS: &[&str] = &[
    "avalanche", "cache", "cliche", "creche", "headache", "moustache", "mustache", "niche",
    "panache", "psyche", "quiche", "toothache",
];

/// English inflection service.
#[derive(Debug, Clone)]
pub struct Inflector {
    to_plural: HashMap<String, String>,
    to_singular: HashMap<String, String>,
    uncountable: Vec<String>,
}

impl Default for Inflector {
    fn default() -> Self {
        Self::english()
    }
}

impl Inflector {
    /// Builds an inflector loaded with the built-in English tables.
    pub fn english() -> Self {
        let mut to_plural = HashMap::with_capacity(IRREGULAR.len());
        let mut to_singular = HashMap::with_capacity(IRREGULAR.len());
        for (singular, plural) in IRREGULAR {
            to_plural.insert((*singular).to_string(), (*plural).to_string());
            to_singular.insert((*plural).to_string(), (*singular).to_string());
        }
        Self {
            to_plural,
            to_singular,
            uncountable: UNCOUNTABLE.iter().map(|w| (*w).to_string()).collect(),
        }
    }

    /// Registers an additional irregular pair, e.g. domain vocabulary.
    pub fn with_irregular(mut self, singular: &str, plural: &str) -> Self {
        let singular = singular.to_lowercase();
        let plural = plural.to_lowercase();
        self.to_plural.insert(singular.clone(), plural.clone());
        self.to_singular.insert(plural, singular);
        self
    }

    /// Registers an additional uncountable word.
    pub fn with_uncountable(mut self, word: &str) -> Self {
        self.uncountable.push(word.to_lowercase());
        self
    }

    /// `category` -> `categories`, `test_item` -> `test_items`.
    pub fn pluralize(&self, word: &str) -> String {
        map_last_segment(word, |w| self.pluralize_word(w))
    }

    /// `categories` -> `category`, `test_items` -> `test_item`.
    pub fn singularize(&self, word: &str) -> String {
        map_last_segment(word, |w| self.singularize_word(w))
    }

    fn is_uncountable(&self, word: &str) -> bool {
        self.uncountable.iter().any(|u| u == word)
    }

    fn pluralize_word(&self, word: &str) -> String {
        if word.is_empty() || self.is_uncountable(word) || self.to_singular.contains_key(word) {
            return word.to_string();
        }
        if let Some(plural) = self.to_plural.get(word) {
            return plural.clone();
        }

        if let Some(stem) = word.strip_suffix('y') {
            if stem.chars().last().is_some_and(|c| !is_vowel(c)) {
                return format!("{stem}ies");
            }
        }

        if ["s", "x", "z", "ch", "sh"].iter().any(|s| word.ends_with(s)) {
            return format!("{word}es");
        }

        format!("{word}s")
    }

    fn singularize_word(&self, word: &str) -> String {
        if word.is_empty() || self.is_uncountable(word) || self.to_plural.contains_key(word) {
            return word.to_string();
        }
        if let Some(singular) = self.to_singular.get(word) {
            return singular.clone();
        }

        if let Some(stem) = word.strip_suffix("ies") {
            if stem.len() > 1 {
                return format!("{stem}y");
            }
        }

        if let Some(stem) = word.strip_suffix("es") {
            if stem.ends_with("us") {
                return if is_us_singular(stem) {
                    stem.to_string()
                } else {
                    format!("{stem}e")
                };
            }
            if stem.ends_with("ch")
                && CHE_SINGULARS
                    .iter()
                    .any(|w| word.ends_with(&format!("{w}s")))
            {
                return format!("{stem}e");
            }
            if ["ss", "sh", "ch", "x", "zz"].iter().any(|s| stem.ends_with(s)) {
                return stem.to_string();
            }
        }

        if word.ends_with("ss") || word.ends_with("is") || is_us_singular(word) {
            return word.to_string();
        }

        match word.strip_suffix('s') {
            Some(stem) if !stem.is_empty() => stem.to_string(),
            _ => word.to_string(),
        }
    }
}

fn is_us_singular(word: &str) -> bool {
    US_SINGULARS.iter().any(|w| word.ends_with(w))
}

fn is_vowel(c: char) -> bool {
    matches!(c, 'a' | 'e' | 'i' | 'o' | 'u')
}

/// Applies `f` to the lowercased last segment and restores a leading capital.
fn map_last_segment(word: &str, f: impl Fn(&str) -> String) -> String {
    let split_at = word.rfind(['_', '-']).map(|i| i + 1).unwrap_or(0);
    let (prefix, last) = word.split_at(split_at);

    let mut inflected = f(&last.to_lowercase());
    if last.chars().next().is_some_and(char::is_uppercase) {
        inflected = capitalize(&inflected);
    }
    format!("{prefix}{inflected}")
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pluralize_regular_rules() {
        let inflector = Inflector::english();
        assert_eq!(inflector.pluralize("post"), "posts");
        assert_eq!(inflector.pluralize("category"), "categories");
        assert_eq!(inflector.pluralize("day"), "days");
        assert_eq!(inflector.pluralize("box"), "boxes");
        assert_eq!(inflector.pluralize("status"), "statuses");
        assert_eq!(inflector.pluralize("branch"), "branches");
        assert_eq!(inflector.pluralize("choice"), "choices");
    }

    #[test]
    fn test_pluralize_irregular_and_uncountable() {
        let inflector = Inflector::english();
        assert_eq!(inflector.pluralize("person"), "people");
        assert_eq!(inflector.pluralize("knife"), "knives");
        assert_eq!(inflector.pluralize("news"), "news");
        assert_eq!(inflector.pluralize("people"), "people");
    }

    #[test]
    fn test_singularize_inverts_pluralize() {
        let inflector = Inflector::english();
        for word in [
            "post", "category", "task", "choice", "box", "status", "branch", "person", "house",
            "address", "leaf", "movie", "size", "cache", "excuse", "niche", "menu", "bus",
            "campus", "cause", "dish", "buzz", "prize", "avalanche", "fuse", "warehouse",
        ] {
            let plural = inflector.pluralize(word);
            assert_eq!(inflector.singularize(&plural), word, "round trip via {plural}");
        }
    }

    #[test]
    fn test_singularize_is_identity_on_singulars() {
        let inflector = Inflector::english();
        for word in [
            "category", "status", "address", "post", "news", "child", "size", "niche", "menu",
            "bonus",
        ] {
            assert_eq!(inflector.singularize(word), word);
        }
    }

    #[test]
    fn test_plural_us_words() {
        let inflector = Inflector::english();
        assert_eq!(inflector.singularize("menus"), "menu");
        assert_eq!(inflector.singularize("statuses"), "status");
        assert_eq!(inflector.singularize("minibuses"), "minibus");
        assert_eq!(inflector.singularize("excuses"), "excuse");
    }

    #[test]
    fn test_compound_words_only_touch_last_segment() {
        let inflector = Inflector::english();
        assert_eq!(inflector.pluralize("test_item"), "test_items");
        assert_eq!(inflector.singularize("test_items"), "test_item");
        assert_eq!(inflector.singularize("blog-categories"), "blog-category");
    }

    #[test]
    fn test_preserves_leading_capital() {
        let inflector = Inflector::english();
        assert_eq!(inflector.pluralize("Category"), "Categories");
        assert_eq!(inflector.singularize("People"), "Person");
    }

    #[test]
    fn test_custom_vocabulary() {
        let inflector = Inflector::english()
            .with_irregular("cactus", "cacti")
            .with_uncountable("staff");
        assert_eq!(inflector.pluralize("cactus"), "cacti");
        assert_eq!(inflector.singularize("cacti"), "cactus");
        assert_eq!(inflector.pluralize("staff"), "staff");
    }
}
