pub mod config;
pub mod demo;
pub mod error;
pub mod label;
pub mod placeholder;
pub mod prompt;
pub mod session;
pub mod storyboard;
pub mod template;
pub mod verification;

pub use config::{API_KEY_VAR, ApiConfig, CONFIG_FILE, api_key_from_env};
pub use demo::demo_detection;
pub use error::AppError;
pub use label::Label;
pub use placeholder::{Placeholder, PlaceholderSpec, Provenance, simulated_value};
pub use prompt::detection_instruction;
pub use session::{Phase, Session};
pub use storyboard::{Scene, Storyboard};
pub use template::Template;
pub use verification::{Selection, VerificationRecord, simulate_verification, suggested_value};
