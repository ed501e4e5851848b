//! Syntax tree of a stylesheet
//!
//! Every node keeps the whitespace and comments ("fluff") found around it so
//! that `text()` can re-render the source in canonical form without losing
//! comments or deliberate blank lines.

use std::fmt;

use crate::layout::{indent_block, ltrim, outdent_block, rtrim};
use crate::token::Token;

/// Root of the tree: the rules of one stylesheet, or of one at-rule body.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SectionList {
    pub sections: Vec<Section>,
}

impl SectionList {
    /// Sections separated by one blank line, ending with a single newline.
    pub fn text(&self) -> String {
        let sections: Vec<String> = self
            .sections
            .iter()
            .map(|section| section.text().trim().to_string())
            .collect();
        let mut out = sections.join("\n\n");
        out.push('\n');
        out
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Section> {
        self.sections.iter()
    }
}

impl fmt::Display for SectionList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text())
    }
}

impl<'a> IntoIterator for &'a SectionList {
    type Item = &'a Section;
    type IntoIter = std::slice::Iter<'a, Section>;

    fn into_iter(self) -> Self::IntoIter {
        self.sections.iter()
    }
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Section {
    /// `selectors { declarations }`
    Leaf(LeafSection),
    /// `@media ... { sections }` and other block at-rules
    Nested(NestedSection),
}

impl Section {
    pub fn text(&self) -> String {
        match self {
            Self::Leaf(section) => section.text(),
            Self::Nested(section) => section.text(),
        }
    }

    /// For a nested section this is the at-rule prelude.
    pub fn selector_list(&self) -> &SelectorList {
        match self {
            Self::Leaf(section) => &section.selector_list,
            Self::Nested(section) => &section.selector_list,
        }
    }

    pub fn pre_fluff(&self) -> &str {
        match self {
            Self::Leaf(section) => &section.pre_fluff,
            Self::Nested(section) => &section.pre_fluff,
        }
    }

    pub fn post_fluff(&self) -> &str {
        match self {
            Self::Leaf(section) => &section.post_fluff,
            Self::Nested(section) => &section.post_fluff,
        }
    }

    pub fn as_leaf(&self) -> Option<&LeafSection> {
        match self {
            Self::Leaf(section) => Some(section),
            Self::Nested(_) => None,
        }
    }

    pub fn as_nested(&self) -> Option<&NestedSection> {
        match self {
            Self::Leaf(_) => None,
            Self::Nested(section) => Some(section),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LeafSection {
    pub selector_list: SelectorList,
    pub declaration_block: DeclarationBlock,
    pub pre_fluff: String,
    pub post_fluff: String,
}

impl LeafSection {
    pub fn text(&self) -> String {
        let anchor = self.selector_list.indentation();
        let mut out = pre_fluff_text(&self.pre_fluff, anchor);
        out.push_str(&self.selector_list.text());
        out.push(' ');
        out.push_str(&self.declaration_block.text());
        out.push('\n');
        out.push_str(&post_fluff_text(&self.post_fluff, anchor));
        out
    }
}

/// Comments above a rule, followed by a newline when there are any.
fn pre_fluff_text(fluff: &str, anchor: usize) -> String {
    let mut out = rtrim(&outdent_block(fluff.trim_start(), anchor));
    if !out.is_empty() {
        out.push('\n');
    }
    out
}

/// Comments after a rule's closing brace.
fn post_fluff_text(fluff: &str, anchor: usize) -> String {
    rtrim(&ltrim(&outdent_block(fluff, anchor)))
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NestedSection {
    /// The at-rule and its condition, held as a one-selector list.
    pub selector_list: SelectorList,
    pub section_list: SectionList,
    pub pre_fluff: String,
    pub post_fluff: String,
}

impl NestedSection {
    pub fn text(&self) -> String {
        let anchor = self.selector_list.indentation();
        let mut out = pre_fluff_text(&self.pre_fluff, anchor);
        out.push_str(&self.selector_list.text());
        out.push_str(" {\n");
        out.push_str(&indent_block(self.section_list.text().trim_end()));
        out.push_str("\n}\n");
        out.push_str(&post_fluff_text(&self.post_fluff, anchor));
        out
    }
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SelectorList {
    pub selectors: Vec<Selector>,
}

impl SelectorList {
    /// One selector per line.
    pub fn text(&self) -> String {
        self.selectors
            .iter()
            .map(Selector::text)
            .collect::<Vec<_>>()
            .join(",\n")
    }

    /// Source indentation of the first selector, in chars.
    fn indentation(&self) -> usize {
        self.selectors
            .first()
            .and_then(|selector| selector.levels.first())
            .map_or(0, |level| level.column.saturating_sub(1))
    }
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Selector {
    /// Compound selectors and combinators, in source order.
    pub levels: Vec<Token>,
    pub pre_fluff: String,
    pub post_fluff: String,
}

impl Selector {
    pub fn text(&self) -> String {
        self.levels().collect::<Vec<_>>().join(" ")
    }

    pub fn levels(&self) -> impl Iterator<Item = &str> {
        self.levels.iter().map(|level| level.text.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DeclarationBlock {
    pub open: Token,
    pub close: Token,
    pub declarations: Vec<Declaration>,
}

impl DeclarationBlock {
    pub fn text(&self) -> String {
        let mut out = String::from("{\n");
        for declaration in &self.declarations {
            out.push_str(&indent_block(&declaration.text()));
        }
        out.push('}');
        out
    }
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Declaration {
    pub property: Token,
    pub value: Value,
    /// Whether the source had the trailing `;`. It is emitted either way.
    pub has_semicolon: bool,
    pub pre_fluff: String,
    /// Only fluff from the line of the `;`.
    pub post_fluff: String,
}

impl Declaration {
    pub fn property(&self) -> &str {
        &self.property.text
    }

    /// Rendered as if the property started at column 1. Continuation lines
    /// of comments and values keep their indentation relative to the
    /// property.
    pub fn text(&self) -> String {
        let mut out = ltrim(&self.pre_fluff).trim_end().to_string();
        if !out.is_empty() {
            out.push('\n');
        }
        out.push_str(self.property());
        out.push(':');

        let value = self.value.text();
        let value = value.trim_end();
        if value.starts_with('\n') {
            out.push_str(value);
        } else {
            out.push(' ');
            out.push_str(value.trim_start());
        }

        out.push(';');
        out.push_str(&rtrim(&self.post_fluff));
        out.push('\n');
        outdent_block(&out, self.property.column.saturating_sub(1))
    }
}

/// The value of a declaration. The lexer hands it over as a single token.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Value {
    pub token: Token,
    pub pre_fluff: String,
    pub post_fluff: String,
}

impl Value {
    pub fn text(&self) -> String {
        format!("{}{}{}", self.pre_fluff, self.token.text, self.post_fluff)
    }

    pub fn as_str(&self) -> &str {
        &self.token.text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token(text: &str) -> Token {
        Token::new(text, 1, 1)
    }

    fn declaration(property: &str, value: &str) -> Declaration {
        Declaration {
            property: token(property),
            value: Value {
                token: token(value),
                pre_fluff: " ".to_string(),
                post_fluff: String::new(),
            },
            has_semicolon: true,
            pre_fluff: "\n    ".to_string(),
            post_fluff: "\n".to_string(),
        }
    }

    fn leaf(selectors: &[&str], declarations: Vec<Declaration>) -> LeafSection {
        LeafSection {
            selector_list: SelectorList {
                selectors: selectors
                    .iter()
                    .map(|s| Selector {
                        levels: s.split(' ').map(token).collect(),
                        pre_fluff: String::new(),
                        post_fluff: String::new(),
                    })
                    .collect(),
            },
            declaration_block: DeclarationBlock {
                open: token("{"),
                close: token("}"),
                declarations,
            },
            pre_fluff: String::new(),
            post_fluff: String::new(),
        }
    }

    #[test]
    fn test_declaration_text() {
        assert_eq!(declaration("color", "red").text(), "color: red;\n");
    }

    #[test]
    fn test_semicolon_is_always_emitted() {
        let mut decl = declaration("color", "red");
        decl.has_semicolon = false;
        decl.post_fluff = String::new();
        assert_eq!(decl.text(), "color: red;\n");
    }

    #[test]
    fn test_declaration_with_comment_before() {
        let mut decl = declaration("top", "0");
        decl.pre_fluff = "\n    /* why */\n    ".to_string();
        decl.post_fluff = " /* same line */\n".to_string();
        assert_eq!(decl.text(), "/* why */\ntop: 0; /* same line */\n");
    }

    #[test]
    fn test_value_starting_on_next_line() {
        let mut decl = declaration("grid-template-areas", "\"a b\"\n        \"c d\"");
        decl.value.pre_fluff = "\n        ".to_string();
        assert_eq!(
            decl.text(),
            "grid-template-areas:\n        \"a b\"\n        \"c d\";\n"
        );
    }

    #[test]
    fn test_leaf_section_text() {
        let section = leaf(&["h1", "a > b"], vec![declaration("top", "0")]);
        assert_eq!(section.text(), "h1,\na > b {\n    top: 0;\n}\n");
    }

    #[test]
    fn test_nested_section_text() {
        let inner = leaf(&["h5"], vec![declaration("margin", "0")]);
        let nested = NestedSection {
            selector_list: SelectorList {
                selectors: vec![Selector {
                    levels: vec![token("@media"), token("(max-width: 300px)")],
                    pre_fluff: String::new(),
                    post_fluff: String::new(),
                }],
            },
            section_list: SectionList {
                sections: vec![Section::Leaf(inner)],
            },
            pre_fluff: "\n".to_string(),
            post_fluff: "\n".to_string(),
        };
        assert_eq!(
            nested.text(),
            "@media (max-width: 300px) {\n    h5 {\n        margin: 0;\n    }\n}\n"
        );
    }

    #[test]
    fn test_section_list_joins_with_blank_line() {
        let list = SectionList {
            sections: vec![
                Section::Leaf(leaf(&["a"], vec![declaration("top", "0")])),
                Section::Leaf(leaf(&["b"], vec![declaration("left", "0")])),
            ],
        };
        assert_eq!(
            list.text(),
            "a {\n    top: 0;\n}\n\nb {\n    left: 0;\n}\n"
        );
        assert_eq!(list.to_string(), list.text());
    }

    #[test]
    fn test_empty_section_list() {
        assert_eq!(SectionList::default().text(), "\n");
    }
}
