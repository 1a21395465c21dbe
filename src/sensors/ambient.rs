use super::AmbientSensors;

/// Plain snapshot of the ambient sensors
///
/// Firmware copies the debouncer and battery gauge state into this struct
/// between frames; tests and the preview set the fields directly.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AmbientState {
    pub dark: bool,
    pub light_level: u16,
    pub darkness_progress: u8,
    pub battery: Option<u8>,
}

impl AmbientState {
    /// Light level snapshot without battery gauge
    pub const fn new(dark: bool) -> Self {
        Self {
            dark,
            light_level: 0,
            darkness_progress: if dark { u8::MAX } else { 0 },
            battery: None,
        }
    }

    #[must_use]
    pub const fn with_light_level(mut self, light_level: u16) -> Self {
        self.light_level = light_level;
        self
    }

    #[must_use]
    pub const fn with_battery(mut self, percent: u8) -> Self {
        self.battery = Some(percent);
        self
    }
}

impl AmbientSensors for AmbientState {
    fn is_dark(&self) -> bool {
        self.dark
    }

    fn light_level(&self) -> u16 {
        self.light_level
    }

    fn darkness_progress(&self) -> u8 {
        self.darkness_progress
    }

    fn battery_level(&self) -> Option<u8> {
        self.battery
    }
}
