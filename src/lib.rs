//! exportdir - filter, facet and page an export directory held in memory
//!
//! The [`directory`] engine is pure and synchronous. [`source`] loads the
//! snapshot once, [`config`] says from where, and [`cli`] renders views.

pub mod cli;
pub mod config;
pub mod directory;
pub mod observability;
pub mod source;
