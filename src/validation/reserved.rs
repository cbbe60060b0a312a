//! Java reserved words and literals.

use std::collections::HashSet;
use std::sync::LazyLock;

/// Words that can never be used as an identifier, including the literals
/// `true`, `false` and `null`
pub const RESERVED_WORDS: &[&str] = &[
    "abstract", "assert", "boolean", "break", "byte", "case", "catch", "char", "class", "const",
    "continue", "default", "do", "double", "else", "enum", "extends", "final", "finally",
    "float", "for", "goto", "if", "implements", "import", "instanceof", "int", "interface",
    "long", "native", "new", "package", "private", "protected", "public", "return", "short",
    "static", "strictfp", "super", "switch", "synchronized", "this", "throw", "throws",
    "transient", "try", "void", "volatile", "while", "true", "false", "null",
];

static RESERVED_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| RESERVED_WORDS.iter().copied().collect());

/// Case-sensitive reserved-word lookup
pub fn is_reserved(word: &str) -> bool {
    RESERVED_SET.contains(word)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_reserved() {
        assert!(is_reserved("class"));
        assert!(is_reserved("null"));
        assert!(is_reserved("goto"));
        assert!(!is_reserved("Class"));
        assert!(!is_reserved("var"));
        assert!(!is_reserved(""));
    }

    #[test]
    fn test_no_duplicates() {
        assert_eq!(RESERVED_SET.len(), RESERVED_WORDS.len());
        assert_eq!(RESERVED_WORDS.len(), 53);
    }
}
