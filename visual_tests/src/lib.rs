mod capture;
mod compare;

pub use capture::{capture_scenario, CaptureConfig, Scenario};
pub use compare::{compare_buffers, compare_images, generate_diff_image, CompareResult};

use square_view::renderer::RenderError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum VisualTestError {
    #[error("Failed to render scenario: {0}")]
    Render(#[from] RenderError),
    #[error("Failed to compare images: {0}")]
    Compare(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),
}

pub type Result<T> = std::result::Result<T, VisualTestError>;

/// Configuration for a visual test
#[derive(Clone)]
pub struct VisualTestConfig {
    pub scenario: Scenario,
    /// Similarity threshold (0.0 to 1.0, default 0.99)
    pub similarity_threshold: f64,
}

impl VisualTestConfig {
    pub fn new(scenario: Scenario) -> Self {
        Self {
            scenario,
            similarity_threshold: 0.99,
        }
    }
}

/// Result of a visual test
pub struct VisualTestResult {
    /// Whether the test passed (similarity >= threshold)
    pub passed: bool,
    /// True when no reference existed and the capture was recorded as one
    pub recorded: bool,
    /// The similarity score (0.0 to 1.0)
    pub similarity: f64,
    /// Path to the captured rendering
    pub captured_path: PathBuf,
    /// Path to the reference image
    pub reference_path: PathBuf,
    /// Path to diff image (if generated on failure)
    pub diff_path: Option<PathBuf>,
}

/// Get the path to the references directory
pub fn references_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("references")
}

/// Get the path to a reference image for a scenario
pub fn reference_path(name: &str) -> PathBuf {
    references_dir().join(format!("{}.png", name))
}

/// Get the path to the output directory for test artifacts
pub fn output_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("output")
}

/// Get the path to a captured rendering
pub fn captured_path(name: &str) -> PathBuf {
    output_dir().join(format!("{}_captured.png", name))
}

/// Get the path to a diff image
pub fn diff_path(name: &str) -> PathBuf {
    output_dir().join(format!("{}_diff.png", name))
}

/// Run a visual regression test.
///
/// A missing reference is recorded from the capture and the test passes.
pub fn run_visual_test(config: &VisualTestConfig) -> Result<VisualTestResult> {
    std::fs::create_dir_all(output_dir())?;

    let name = &config.scenario.name;
    let ref_path = reference_path(name);
    let cap_path = captured_path(name);

    capture_scenario(&CaptureConfig {
        scenario: config.scenario.clone(),
        output_path: cap_path.clone(),
    })?;

    if !ref_path.exists() {
        std::fs::create_dir_all(references_dir())?;
        std::fs::copy(&cap_path, &ref_path)?;
        log::warn!("No reference for '{}', recorded {}", name, ref_path.display());
        return Ok(VisualTestResult {
            passed: true,
            recorded: true,
            similarity: 1.0,
            captured_path: cap_path,
            reference_path: ref_path,
            diff_path: None,
        });
    }

    let compare_result = compare_images(&ref_path, &cap_path)?;
    let passed = compare_result.similarity >= config.similarity_threshold;

    let diff = if !passed {
        let diff_file = diff_path(name);
        generate_diff_image(&ref_path, &cap_path, &diff_file)?;
        Some(diff_file)
    } else {
        None
    };

    Ok(VisualTestResult {
        passed,
        recorded: false,
        similarity: compare_result.similarity,
        captured_path: cap_path,
        reference_path: ref_path,
        diff_path: diff,
    })
}

/// Re-render a scenario straight into its reference image
pub fn update_reference(scenario: &Scenario) -> Result<PathBuf> {
    std::fs::create_dir_all(references_dir())?;

    let ref_path = reference_path(&scenario.name);
    capture_scenario(&CaptureConfig {
        scenario: scenario.clone(),
        output_path: ref_path.clone(),
    })?;

    log::info!("Updated reference: {}", ref_path.display());
    Ok(ref_path)
}

/// Check if we're in update references mode
pub fn should_update_references() -> bool {
    std::env::var("UPDATE_REFERENCES").is_ok()
}
