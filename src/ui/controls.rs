use crate::{
    bands::{BandRequest, TravelMode},
    ui::legend::LegendRow,
    BandError,
};

/// Styling class of the status banner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Error,
}

/// One status banner message.
#[derive(Debug, Clone, PartialEq)]
pub struct StatusMessage {
    pub level: StatusLevel,
    pub text: String,
}

/// State behind the control panel form.
///
/// Value fields hold raw text exactly as a form input would; parsing and
/// validation happen on generate, through [`ControlPanel::parse_request`].
#[derive(Debug, Clone, PartialEq)]
pub struct ControlPanel {
    /// Location name text field.
    pub location: String,
    pub mode: TravelMode,
    pub distance_value: String,
    pub time_value: String,
    pub num_bands: String,
    /// Exactly one of the two control groups is visible at a time.
    pub distance_controls_visible: bool,
    pub time_controls_visible: bool,
    pub generate_enabled: bool,
    pub loading: bool,
    pub status: Option<StatusMessage>,
    pub legend: Vec<LegendRow>,
}

impl ControlPanel {
    pub fn new() -> Self {
        let mut panel = Self {
            location: String::new(),
            mode: TravelMode::default(),
            distance_value: "5".to_string(),
            time_value: "30".to_string(),
            num_bands: "3".to_string(),
            distance_controls_visible: false,
            time_controls_visible: false,
            generate_enabled: true,
            loading: false,
            status: None,
            legend: Vec::new(),
        };
        panel.update_mode_controls();
        panel
    }

    /// Switches travel mode and re-toggles control group visibility.
    pub fn set_mode(&mut self, mode: TravelMode) {
        self.mode = mode;
        self.update_mode_controls();
    }

    /// Keeps the visibility flags mutually exclusive for the current mode.
    pub fn update_mode_controls(&mut self) {
        self.distance_controls_visible = self.mode == TravelMode::Distance;
        self.time_controls_visible = !self.distance_controls_visible;
    }

    /// The raw budget text of the active mode.
    pub fn active_value(&self) -> &str {
        match self.mode {
            TravelMode::Distance => &self.distance_value,
            TravelMode::Time => &self.time_value,
        }
    }

    /// Parses and validates the form into a generation request.
    pub fn parse_request(&self) -> Result<BandRequest, BandError> {
        let total_value = self
            .active_value()
            .trim()
            .parse::<f64>()
            .map_err(|_| BandError::InvalidTotal {
                field: self.mode.field_name(),
            })?;
        let num_bands = self
            .num_bands
            .trim()
            .parse::<i64>()
            .map_err(|_| BandError::InvalidBandCount)?;

        BandRequest::new(total_value, num_bands, self.mode)
    }

    pub fn show_info(&mut self, text: impl Into<String>) {
        self.status = Some(StatusMessage {
            level: StatusLevel::Info,
            text: text.into(),
        });
    }

    pub fn show_error(&mut self, text: impl Into<String>) {
        self.status = Some(StatusMessage {
            level: StatusLevel::Error,
            text: text.into(),
        });
    }
}

impl Default for ControlPanel {
    fn default() -> Self {
        Self::new()
    }
}
