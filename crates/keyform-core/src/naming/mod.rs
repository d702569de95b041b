pub mod name;

pub use name::Name;

/// Stock transforms usable as [`AliasGenerator`](crate::alias::AliasGenerator)
/// slots. Each parses the canonical name into words and re-renders it in the
/// target convention.
pub fn to_camel(s: &str) -> String {
    Name::from(s).to_camel_case()
}

pub fn to_pascal(s: &str) -> String {
    Name::from(s).to_pascal_case()
}

pub fn to_snake(s: &str) -> String {
    Name::from(s).to_snake_case()
}

pub fn to_screaming_snake(s: &str) -> String {
    Name::from(s).to_screaming_snake_case()
}
