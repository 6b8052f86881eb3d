pub mod adapters;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub mod config;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use crate::adapters::http::HttpTransport;
pub use crate::adapters::notify::{MessageLog, TracingNotifier};
pub use crate::core::service::HeroService;
pub use crate::domain::model::{Ack, DeleteTarget, Hero, NewHero};
pub use crate::domain::ports::{Notifier, Transport};
pub use crate::utils::error::{ApiError, Result};
