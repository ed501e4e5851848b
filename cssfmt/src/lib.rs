//! Parser and canonical re-serializer for a restricted CSS dialect.
//!
//! ```
//! let sheet = cssfmt::parse("p { color: red }").unwrap();
//! assert_eq!(sheet.text(), "p {\n    color: red;\n}\n");
//! ```

pub mod error;
pub mod layout;
pub mod node;
pub mod parser;
pub mod token;
pub mod tokenizer;

pub use error::{ErrorKind, ParseError, Result};
pub use layout::{dedent_block, indent_block, ltrim, outdent_block, rtrim};
pub use node::*;
pub use parser::parse;
pub use token::Token;
pub use tokenizer::tokenize;
