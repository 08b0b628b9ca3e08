//! Index page rendering via `minijinja`.
//!
//! The page is rendered server-side from a [`SimulationFrame`] so the first
//! paint already shows the configured initial state. The embedded script
//! then posts the full parameter vector to `/api/calculate` on every
//! control change and redraws from the returned frame.

use minijinja::{Environment, context};
use trapa_model::SeasonProfile;
use trapa_types::{IndicatorKind, SimulationFrame};

use crate::error::ObserverError;

const INDEX_TEMPLATE: &str = include_str!("../templates/index.html.j2");

/// Name the index template is registered under. The `.html` suffix turns
/// on HTML auto-escaping.
const INDEX_NAME: &str = "index.html";

/// Holds the compiled page templates.
#[derive(Debug)]
pub struct PageRenderer {
    env: Environment<'static>,
}

impl PageRenderer {
    /// Compile the built-in templates.
    ///
    /// # Errors
    ///
    /// Returns [`ObserverError::Template`] if a template fails to parse.
    pub fn new() -> Result<Self, ObserverError> {
        let mut env = Environment::new();
        env.add_template_owned(INDEX_NAME, INDEX_TEMPLATE)
            .map_err(|e| ObserverError::Template(format!("index template: {e}")))?;
        Ok(Self { env })
    }

    /// Render the index page for the given frame.
    ///
    /// # Errors
    ///
    /// Returns [`ObserverError::Template`] if rendering fails.
    pub fn render_index(&self, frame: &SimulationFrame) -> Result<String, ObserverError> {
        let bars: Vec<_> = frame
            .bars
            .iter()
            .map(|bar| {
                context! {
                    id => bar_id(bar.kind),
                    label => bar.kind.label(),
                    display => bar.display,
                    fill_percent => bar.fill_percent,
                    colour => bar_colour(bar.kind),
                }
            })
            .collect();

        self.env
            .get_template(INDEX_NAME)
            .and_then(|tpl| {
                tpl.render(context! {
                    frame => frame,
                    bars => bars,
                    water_gradient => frame.visual.water_gradient_css(),
                    particle_class => frame.particles.band.css_class(),
                    seasons => SeasonProfile::table(),
                })
            })
            .map_err(|e| ObserverError::Template(format!("index render failed: {e}")))
    }
}

/// DOM id of an indicator bar.
const fn bar_id(kind: IndicatorKind) -> &'static str {
    match kind {
        IndicatorKind::WaterClarity => "clarity",
        IndicatorKind::SedimentOxygen => "sediment",
        IndicatorKind::StratificationRisk => "stratification",
        IndicatorKind::DissolvedOxygen => "oxygen",
        IndicatorKind::NutrientAvailability => "nutrient",
        IndicatorKind::DecompositionRate => "decomp",
        IndicatorKind::MicrobialBiomass => "biomass",
        IndicatorKind::MicrobialDiversity => "diversity",
    }
}

/// Tailwind fill colour of an indicator bar.
const fn bar_colour(kind: IndicatorKind) -> &'static str {
    match kind {
        IndicatorKind::WaterClarity => "bg-blue-500",
        IndicatorKind::SedimentOxygen => "bg-green-500",
        IndicatorKind::StratificationRisk => "bg-red-500",
        IndicatorKind::DissolvedOxygen => "bg-cyan-500",
        IndicatorKind::NutrientAvailability => "bg-yellow-500",
        IndicatorKind::DecompositionRate => "bg-orange-500",
        IndicatorKind::MicrobialBiomass => "bg-purple-500",
        IndicatorKind::MicrobialDiversity => "bg-pink-500",
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use trapa_core::SimulationController;
    use trapa_types::ControlParameters;

    use super::*;

    #[test]
    fn template_compiles() {
        assert!(PageRenderer::new().is_ok());
    }

    #[test]
    fn index_shows_the_initial_state() {
        let renderer = PageRenderer::new().unwrap();
        let frame = SimulationController::seeded(ControlParameters::default(), 1).into_frame();
        let html = renderer.render_index(&frame).unwrap();

        assert!(html.contains("Trapa Natans Ecological Impact Simulation"));
        assert!(html.contains("2.0m"));
        assert!(html.contains("8.5 mg"));
        assert!(html.contains("Low Water Chestnut Coverage (0%)"));
        assert!(html.contains("Nutrient Level: 5/10"));
        assert!(html.contains("Reading the Controls"));
        assert!(html.contains("rgb(140, 155, 190)"));
        assert_eq!(html.matches("class=\"microbe bg-blue-400\"").count(), 12);
    }
}
