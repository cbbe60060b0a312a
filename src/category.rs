//! Kinds of program element an identifier can name.

use std::fmt;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// The program element an identifier is validated for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Class,
    Method,
    Variable,
    /// A dotted package name, validated segment by segment
    #[value(name = "package")]
    #[serde(rename = "package")]
    PackageSegment,
    Generic,
}

impl Category {
    /// All categories in menu order
    pub const ALL: [Category; 5] = [
        Category::Class,
        Category::Method,
        Category::Variable,
        Category::PackageSegment,
        Category::Generic,
    ];

    /// Label used at the start of failure messages
    pub fn label(self) -> &'static str {
        match self {
            Category::Class => "Class name",
            Category::Method => "Method name",
            Category::Variable => "Variable name",
            Category::PackageSegment => "Package name",
            Category::Generic => "Identifier",
        }
    }

    /// Noun used in the success line, e.g. "'Foo' is a valid class name."
    pub fn noun(self) -> &'static str {
        match self {
            Category::Class => "class name",
            Category::Method => "method name",
            Category::Variable => "variable name",
            Category::PackageSegment => "package name",
            Category::Generic => "generic identifier",
        }
    }

    /// Map an interactive menu choice ("1" to "5") to its category
    pub fn from_menu_choice(choice: &str) -> Option<Self> {
        match choice {
            "1" => Some(Category::Class),
            "2" => Some(Category::Method),
            "3" => Some(Category::Variable),
            "4" => Some(Category::PackageSegment),
            "5" => Some(Category::Generic),
            _ => None,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.noun())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_choices_follow_menu_order() {
        for (i, category) in Category::ALL.iter().enumerate() {
            let choice = (i + 1).to_string();
            assert_eq!(Category::from_menu_choice(&choice), Some(*category));
        }
        assert_eq!(Category::from_menu_choice("6"), None);
        assert_eq!(Category::from_menu_choice(" 1"), None);
    }

    #[test]
    fn test_package_serializes_as_package() {
        let json = serde_json::to_string(&Category::PackageSegment).unwrap();
        assert_eq!(json, "\"package\"");
        let parsed = Category::from_str("package", true).unwrap();
        assert_eq!(parsed, Category::PackageSegment);
    }
}
