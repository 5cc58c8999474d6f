pub mod document;
pub mod error;
pub mod format;
pub mod matcher;
pub mod name;
pub mod position;
pub mod statement;

pub use document::Document;
pub use error::{MatchError, NameMismatch};
pub use format::{EditConfig, format_decimal, same_at_precision};
pub use matcher::{LineMatch, find_evolve_for, find_statement, locate};
pub use name::{decode_name, encode_name, names_match, normalize_name};
pub use position::{MapPosition, Viewport, to_normalized, to_pixels};
pub use statement::{Statement, StatementKind, parse_statement};

// Re-export kurbo geometry so downstream crates share one version
pub use kurbo::{Point, Rect, Vec2};
