//! gradebook-core — assessment records and the owning record list.
//!
//! This crate defines the polymorphic [`record::Record`] capability, its three
//! concrete variants, the LIFO [`list::RecordList`] that owns them, and the
//! console session that populates a list interactively.

pub mod config;
pub mod console;
pub mod error;
pub mod list;
pub mod model;
pub mod record;
pub mod render;
pub mod session;

pub use config::{load_config_from, GradebookConfig};
pub use console::{Console, ScorePolicy};
pub use error::CatalogError;
pub use list::{ListState, RecordList};
pub use model::{Captions, RecordKind, Score};
pub use record::{new_record, ExamRecord, FinalExamRecord, Record, RecordView, TestRecord};
pub use render::OutputFormat;
pub use session::{run_session, SessionOptions};
