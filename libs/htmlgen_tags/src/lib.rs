//! Metainformation about the predefined HTML tags of htmlgen.

pub mod kind;
pub mod db;

pub use kind::{TagKind, InvalidTagKind};
pub use db::{TagDb, TagMeta, TAGDB, read_tag_db, get_env_bool, parse_flag};
