use serde::{Deserialize, Serialize};
use std::fmt;

/// A field identifier broken into words, convertible between casing
/// conventions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Name {
    pub words: Vec<String>,
}

impl Name {
    /// Create a new Name from a slice of words
    pub fn new(words: &[&str]) -> Self {
        Name {
            words: words.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Parse a Name from a string (kebab-case, snake_case, camelCase, etc)
    pub fn from(name: &str) -> Self {
        let mut words = Vec::new();
        let mut current_word = String::new();

        for c in name.chars() {
            if c == '_' || c == '-' || c == ' ' || c == '.' {
                if !current_word.is_empty() {
                    words.push(current_word);
                    current_word = String::new();
                }
            } else if c.is_uppercase() {
                if !current_word.is_empty() {
                    words.push(current_word);
                    current_word = String::new();
                }
                current_word.push(c);
            } else {
                current_word.push(c);
            }
        }
        if !current_word.is_empty() {
            words.push(current_word);
        }

        Name { words }
    }

    pub fn to_camel_case(&self) -> String {
        let mut result = String::new();
        for (i, word) in self.words.iter().enumerate() {
            if i == 0 {
                result.push_str(&word.to_lowercase());
            } else {
                let mut chars = word.chars();
                if let Some(first) = chars.next() {
                    result.push(first.to_ascii_uppercase());
                    result.push_str(&chars.as_str().to_lowercase());
                }
            }
        }
        result
    }

    pub fn to_pascal_case(&self) -> String {
        self.words
            .iter()
            .map(|w| {
                let mut chars = w.chars();
                match chars.next() {
                    None => String::new(),
                    Some(f) => f.to_ascii_uppercase().to_string() + &chars.as_str().to_lowercase(),
                }
            })
            .collect::<Vec<String>>()
            .join("")
    }

    pub fn to_snake_case(&self) -> String {
        self.words.join("_").to_lowercase()
    }

    pub fn to_screaming_snake_case(&self) -> String {
        self.words.join("_").to_uppercase()
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_snake_case())
    }
}
