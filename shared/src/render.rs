//! Text renderers for the calculator view
//!
//! All renderers read the same [`ViewState`] and differ only in what they
//! draw around the result. Colours come from a [`Palette`] chosen by the
//! state's dark-mode flag; with colour disabled the output is plain text.

use crate::health_metrics::{reference_table, scale_position, BmiReport, BoundaryConvention};
use crate::view::ViewState;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Width of the scale bar in characters
pub const SCALE_WIDTH: usize = 40;

const TITLE: &str = "BMI Calculator";
const PROMPT: &str = "Enter your measurements and press Calculate.";

/// ANSI colour set for one theme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub heading: &'static str,
    pub accent: &'static str,
    pub error: &'static str,
    pub muted: &'static str,
    pub reset: &'static str,
}

impl Palette {
    pub const PLAIN: Palette = Palette {
        heading: "",
        accent: "",
        error: "",
        muted: "",
        reset: "",
    };

    pub const LIGHT: Palette = Palette {
        heading: "\x1b[1;30m",
        accent: "\x1b[35m",
        error: "\x1b[31m",
        muted: "\x1b[90m",
        reset: "\x1b[0m",
    };

    pub const DARK: Palette = Palette {
        heading: "\x1b[1;97m",
        accent: "\x1b[96m",
        error: "\x1b[91m",
        muted: "\x1b[37m",
        reset: "\x1b[0m",
    };

    pub fn for_state(state: &ViewState, color: bool) -> Palette {
        match (color, state.dark_mode) {
            (false, _) => Palette::PLAIN,
            (true, false) => Palette::LIGHT,
            (true, true) => Palette::DARK,
        }
    }
}

/// Renders a view state to text
pub trait Renderer: Send + Sync {
    fn variant(&self) -> RenderVariant;

    /// Write the view for `state` line by line
    fn write_view(&self, out: &mut dyn fmt::Write, state: &ViewState, palette: &Palette) -> fmt::Result;

    fn render(&self, state: &ViewState, palette: &Palette) -> String {
        RenderedView {
            renderer: self,
            state,
            palette,
        }
        .to_string()
    }
}

struct RenderedView<'a, R: ?Sized> {
    renderer: &'a R,
    state: &'a ViewState,
    palette: &'a Palette,
}

impl<R: Renderer + ?Sized> fmt::Display for RenderedView<'_, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.renderer.write_view(f, self.state, self.palette)
    }
}

/// Available renderers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum RenderVariant {
    /// Form summary, result and health tip
    #[default]
    Classic,
    /// Classic plus a toggleable reference table
    ReferenceTable,
    /// Classic plus a coloured scale bar with a marker
    Scale,
}

impl RenderVariant {
    pub fn renderer(&self, convention: BoundaryConvention) -> Box<dyn Renderer> {
        match self {
            RenderVariant::Classic => Box::new(ClassicRenderer),
            RenderVariant::ReferenceTable => Box::new(ReferenceTableRenderer { convention }),
            RenderVariant::Scale => Box::new(ScaleRenderer { width: SCALE_WIDTH }),
        }
    }
}

impl std::str::FromStr for RenderVariant {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "classic" => Ok(RenderVariant::Classic),
            "reference_table" | "table" => Ok(RenderVariant::ReferenceTable),
            "scale" | "gradient" => Ok(RenderVariant::Scale),
            _ => Err(format!("Unknown render variant: {}", s)),
        }
    }
}

// ============================================================================
// Classic
// ============================================================================

#[derive(Debug, Clone, Copy, Default)]
pub struct ClassicRenderer;

impl ClassicRenderer {
    fn write_form(out: &mut dyn fmt::Write, state: &ViewState, p: &Palette) -> fmt::Result {
        let form = &state.form;
        let units = form.unit_system;
        writeln!(out, "{}{}{}", p.heading, TITLE, p.reset)?;
        writeln!(out, "Unit System: {}", units.description())?;
        writeln!(out, "Weight ({}): {}", units.weight_unit(), form.weight)?;
        writeln!(out, "Height ({}): {}", units.height_unit(), form.height)?;
        if !form.age.trim().is_empty() {
            writeln!(out, "Age: {}", form.age.trim())?;
        }
        if !form.gender.trim().is_empty() {
            writeln!(out, "Gender: {}", form.gender.trim())?;
        }
        Ok(())
    }

    fn write_result(out: &mut dyn fmt::Write, report: &BmiReport, p: &Palette) -> fmt::Result {
        writeln!(out)?;
        writeln!(out, "Your BMI: {}", report.formatted_value)?;
        writeln!(out, "{}{}{}", p.accent, report.label, p.reset)?;
        writeln!(out, "{}", report.health_tip)?;
        let range = &report.healthy_weight_range;
        writeln!(
            out,
            "{}Healthy weight for your height: {:.1} – {:.1} {}{}",
            p.muted, range.min, range.max, range.unit, p.reset
        )
    }

    /// Shared body of every variant
    fn write_body(out: &mut dyn fmt::Write, state: &ViewState, p: &Palette) -> fmt::Result {
        Self::write_form(out, state, p)?;
        if let Some(report) = state.report() {
            Self::write_result(out, report, p)
        } else if let Some(message) = state.error_message() {
            writeln!(out)?;
            writeln!(out, "{}{}{}", p.error, message, p.reset)
        } else {
            writeln!(out)?;
            writeln!(out, "{}{}{}", p.muted, PROMPT, p.reset)
        }
    }
}

impl Renderer for ClassicRenderer {
    fn variant(&self) -> RenderVariant {
        RenderVariant::Classic
    }

    fn write_view(&self, out: &mut dyn fmt::Write, state: &ViewState, palette: &Palette) -> fmt::Result {
        Self::write_body(out, state, palette)
    }
}

// ============================================================================
// Reference table
// ============================================================================

#[derive(Debug, Clone, Copy, Default)]
pub struct ReferenceTableRenderer {
    pub convention: BoundaryConvention,
}

impl Renderer for ReferenceTableRenderer {
    fn variant(&self) -> RenderVariant {
        RenderVariant::ReferenceTable
    }

    fn write_view(&self, out: &mut dyn fmt::Write, state: &ViewState, palette: &Palette) -> fmt::Result {
        ClassicRenderer::write_body(out, state, palette)?;
        writeln!(out)?;

        if !state.show_table {
            return writeln!(out, "{}[Show BMI reference table]{}", palette.muted, palette.reset);
        }

        let current = state.report().map(|r| r.category);
        writeln!(out, "{}{:<14}{}{}", palette.heading, "Category", "BMI Range", palette.reset)?;
        for row in reference_table(self.convention) {
            let line = format!("{:<14}{}", row.label, row.range);
            if Some(row.category) == current {
                writeln!(out, "{}{} <{}", palette.accent, line, palette.reset)?;
            } else {
                writeln!(out, "{}", line)?;
            }
        }
        writeln!(out, "{}[Hide BMI reference table]{}", palette.muted, palette.reset)
    }
}

// ============================================================================
// Scale
// ============================================================================

#[derive(Debug, Clone, Copy)]
pub struct ScaleRenderer {
    pub width: usize,
}

impl Default for ScaleRenderer {
    fn default() -> Self {
        Self { width: SCALE_WIDTH }
    }
}

impl ScaleRenderer {
    /// Bar of `width` cells with `^` under the marker position, e.g.
    /// `[..........==========~~~~~~~~~~##########]`
    pub fn bar(&self, bmi: f64) -> (String, String) {
        let width = self.width.max(4);
        let segment = width / 4;
        let bar: String = (0..width)
            .map(|i| match (i / segment.max(1)).min(3) {
                0 => '.',
                1 => '=',
                2 => '~',
                _ => '#',
            })
            .collect();

        let cell = ((scale_position(bmi) / 100.0) * width as f64).floor() as usize;
        let cell = cell.min(width - 1);
        let marker = format!(" {}^", " ".repeat(cell));
        (format!("[{}]", bar), marker)
    }
}

impl Renderer for ScaleRenderer {
    fn variant(&self) -> RenderVariant {
        RenderVariant::Scale
    }

    fn write_view(&self, out: &mut dyn fmt::Write, state: &ViewState, palette: &Palette) -> fmt::Result {
        ClassicRenderer::write_body(out, state, palette)?;

        if let Some(report) = state.report() {
            let (bar, marker) = self.bar(report.value);
            writeln!(out)?;
            writeln!(out, "{}{}{}", palette.accent, bar, palette.reset)?;
            writeln!(out, "{}", marker)?;
            writeln!(
                out,
                "{}Underweight | Normal | Overweight | Obese{}",
                palette.muted, palette.reset
            )?;
        }
        Ok(())
    }
}
