//! State types for the viewer UI.
//!
//! These types are independent of rendering and can be tested in
//! isolation.

/// Events that can occur in the viewer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewerEvent {
    /// User requested quit (Ctrl+C or Ctrl+Q).
    Quit,
}

/// Background render mode for the map area.
///
/// The original map widget offers two switchable base layers; the
/// terminal equivalent is cosmetic shading behind the region cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BaseLayer {
    #[default]
    Plain,
    Shaded,
}

impl BaseLayer {
    pub fn toggle(&mut self) {
        *self = match self {
            BaseLayer::Plain => BaseLayer::Shaded,
            BaseLayer::Shaded => BaseLayer::Plain,
        };
    }

    pub fn name(&self) -> &'static str {
        match self {
            BaseLayer::Plain => "Default Map",
            BaseLayer::Shaded => "Satellite View",
        }
    }
}

/// Mutable UI state of the viewer.
///
/// The search input buffer holds the raw text as typed; normalization
/// happens inside the search pass, per keystroke.
#[derive(Debug, Clone, Default)]
pub struct ViewerState {
    /// Raw contents of the search input field.
    pub input: String,
    /// Region under the inspection cursor, if any.
    pub selected: Option<usize>,
    /// Background render mode.
    pub base_layer: BaseLayer,
    /// Dataset path shown in the header.
    pub dataset_name: String,
    /// Load failure message when the viewer runs in degraded mode.
    pub load_error: Option<String>,
}

impl ViewerState {
    pub fn new(dataset_name: String, load_error: Option<String>) -> Self {
        Self {
            dataset_name,
            load_error,
            ..Self::default()
        }
    }

    /// Move the inspection cursor to the next region, wrapping around.
    pub fn select_next(&mut self, region_count: usize) {
        if region_count == 0 {
            self.selected = None;
            return;
        }
        self.selected = Some(match self.selected {
            Some(i) => (i + 1) % region_count,
            None => 0,
        });
    }

    /// Move the inspection cursor to the previous region, wrapping
    /// around.
    pub fn select_prev(&mut self, region_count: usize) {
        if region_count == 0 {
            self.selected = None;
            return;
        }
        self.selected = Some(match self.selected {
            Some(0) | None => region_count - 1,
            Some(i) => i - 1,
        });
    }
}
