pub mod config;
pub mod error;
pub mod profile;
pub mod types;

pub use config::{ChatConfig, FolioConfig, GeneralConfig};
pub use error::{FolioError, Result};
pub use profile::{ContactDetails, EducationSummary, ExperienceEntry, KnowledgeBase, Period};
pub use types::Timestamp;
