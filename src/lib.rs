//! factboard: Turn idea blurbs into fact-checked three-scene storyboards.
//!
//! The pipeline: placeholder detection (external text generation), simulated
//! fill, draft storyboard, simulated verification, human choice per
//! placeholder, final storyboard. Nothing persists beyond one run.

pub mod app;
pub mod domain;
pub mod ports;
pub mod services;

use app::AppContext;
use app::commands::{compose as compose_cmd, detect};
use ports::TextGenerator;

pub use app::commands::build::{BuildOptions, DraftOutcome, FinalOutcome, draft, finalize};
pub use app::commands::detect::DetectOutcome;
pub use domain::{
    ApiConfig, AppError, Label, Phase, Placeholder, PlaceholderSpec, Provenance, Scene, Selection,
    Session, Storyboard, Template, VerificationRecord,
};

/// Run placeholder detection for a blurb with the given client.
///
/// Returns the instruction that was sent and the raw, unparsed response.
pub fn detect_with<G: TextGenerator>(generator: G, blurb: &str) -> Result<DetectOutcome, AppError> {
    let ctx = AppContext::new(generator);
    detect::execute(&ctx, blurb)
}

/// Render the detection instruction for a blurb without contacting the
/// service.
pub fn detection_instruction(blurb: &str) -> Result<String, AppError> {
    detect::instruction(blurb)
}

/// Compose a three-scene storyboard from an already-resolved blurb.
pub fn compose(blurb: &str) -> Result<Storyboard, AppError> {
    compose_cmd::execute(blurb)
}
