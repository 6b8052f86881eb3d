pub mod service;

pub use crate::domain::model::{Ack, DeleteTarget, Hero, NewHero};
pub use crate::domain::ports::{Notifier, Transport};
pub use crate::utils::error::Result;
