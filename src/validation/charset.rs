//! Identifier character classes, keyed on Unicode general category.

use unicode_general_category::{get_general_category, GeneralCategory};

/// Whether `ch` may begin an identifier: any letter (including letter
/// numbers such as `Ⅻ`), `_` or `$`
pub fn is_identifier_start(ch: char) -> bool {
    ch == '_' || ch == '$' || is_letter(get_general_category(ch))
}

/// Whether `ch` may appear after the first character of an identifier:
/// start characters, decimal digits, connector punctuation and combining marks
pub fn is_identifier_part(ch: char) -> bool {
    if ch == '$' {
        return true;
    }
    let category = get_general_category(ch);
    is_letter(category)
        || matches!(
            category,
            GeneralCategory::DecimalNumber
                | GeneralCategory::ConnectorPunctuation
                | GeneralCategory::NonspacingMark
                | GeneralCategory::SpacingMark
        )
}

fn is_letter(category: GeneralCategory) -> bool {
    matches!(
        category,
        GeneralCategory::UppercaseLetter
            | GeneralCategory::LowercaseLetter
            | GeneralCategory::TitlecaseLetter
            | GeneralCategory::ModifierLetter
            | GeneralCategory::OtherLetter
            | GeneralCategory::LetterNumber
    )
}
