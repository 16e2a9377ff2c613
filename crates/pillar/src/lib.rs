//! pillar: internal linking and recategorization for a blog's posts file.
//!
//! A static site keeps its posts in one JSON file. pillar reads that file, appends a
//! "related articles" section pointing every post at the most relevant pillar pages, and
//! reassigns categories from an ordered keyword rule list. The pillar catalog, fallback order
//! and rules live in `.pillar.toml`, so the passes can be rerun whenever the catalog changes:
//! posts that already carry the section are left alone.

#![warn(missing_docs)]

pub mod cli;
