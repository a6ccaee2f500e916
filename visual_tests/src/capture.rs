use crate::Result;
use square_view::prelude::*;
use std::path::PathBuf;

/// One hosted rendering of the square widget.
#[derive(Debug, Clone)]
pub struct Scenario {
    /// Name used for reference and output file names
    pub name: String,
    pub width: MeasureSpec,
    pub height: MeasureSpec,
    pub padding: Padding,
    pub style: SquareStyle,
    /// Surface color behind the widget
    pub background: Color,
}

impl Scenario {
    pub fn new(name: impl Into<String>, width: MeasureSpec, height: MeasureSpec) -> Self {
        Self {
            name: name.into(),
            width,
            height,
            padding: Padding::default(),
            style: SquareStyle::default(),
            background: Color::WHITE,
        }
    }

    pub fn padding(mut self, padding: impl Into<Padding>) -> Self {
        self.padding = padding.into();
        self
    }

    pub fn style(mut self, style: SquareStyle) -> Self {
        self.style = style;
        self
    }
}

/// Configuration for capturing a scenario
pub struct CaptureConfig {
    pub scenario: Scenario,
    /// Path where the rendering will be saved
    pub output_path: PathBuf,
}

/// Lay out, paint and rasterize a scenario, then save it as PNG.
pub fn capture_scenario(config: &CaptureConfig) -> Result<()> {
    let scenario = &config.scenario;
    let widget = SquareWidget::with_style(scenario.style).padding(scenario.padding);
    let mut host = Host::new(widget).background_color(scenario.background);

    let size = host.layout(scenario.width, scenario.height);
    host.frame();
    host.render()?.save_png(&config.output_path)?;

    log::debug!(
        "Captured '{}' at {}x{} to {}",
        scenario.name,
        size.width,
        size.height,
        config.output_path.display()
    );
    Ok(())
}
