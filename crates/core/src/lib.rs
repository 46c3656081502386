#![forbid(unsafe_code)]

pub mod error;
pub mod model;
pub mod navigator;
pub mod quiz;
pub mod time;

pub use error::Error;
pub use navigator::{NavAction, NavError, NavItem, PageKind, Session, nav_items, resolve_page};
pub use quiz::{AnalysisTicket, QuizError, QuizEvent, QuizRun, RecordingState};
pub use time::Clock;
