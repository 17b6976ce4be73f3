mod application;

pub use application::{ApplicationInput, ApplicationRecord, ApplicationStatus};
