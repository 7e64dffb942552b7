// Rotary knob state, independent of the DOM.
//
// Vertical drag distance maps onto the configured value range: 100 pixels of
// travel (before `sensitivity` scaling) sweeps the full range. The knob
// mirrors an externally owned value and only diverges from it mid-drag.

use thiserror::Error;

// Value range maps onto a 270° arc, min at -135°.
pub const ARC_START_DEG: f64 = -135.0;
pub const ARC_SWEEP_DEG: f64 = 270.0;
pub const DRAG_TRAVEL_PX: f64 = 100.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum KnobSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl KnobSize {
    #[inline]
    pub fn class_name(self) -> &'static str {
        match self {
            KnobSize::Small => "knob-small",
            KnobSize::Medium => "knob-medium",
            KnobSize::Large => "knob-large",
        }
    }

    #[inline]
    pub fn diameter_px(self) -> u32 {
        match self {
            KnobSize::Small => 64,
            KnobSize::Medium => 80,
            KnobSize::Large => 96,
        }
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum KnobError {
    #[error("knob range is empty: min {min} must be below max {max}")]
    EmptyRange { min: i32, max: i32 },
    #[error("knob step must be positive, got {0}")]
    InvalidStep(i32),
    #[error("knob sensitivity must be finite and positive, got {0}")]
    InvalidSensitivity(f64),
}

#[derive(Clone, Debug, PartialEq)]
pub struct KnobConfig {
    pub min: i32,
    pub max: i32,
    pub step: i32,
    pub sensitivity: f64,
    pub size: KnobSize,
    pub show_value: bool,
    pub label: String,
    pub color: String,
}

impl Default for KnobConfig {
    fn default() -> Self {
        Self {
            min: 0,
            max: 10,
            step: 1,
            sensitivity: 0.5,
            size: KnobSize::Medium,
            show_value: true,
            label: String::new(),
            color: "#ff0000".to_string(),
        }
    }
}

impl KnobConfig {
    pub fn validate(&self) -> Result<(), KnobError> {
        if self.min >= self.max {
            return Err(KnobError::EmptyRange {
                min: self.min,
                max: self.max,
            });
        }
        if self.step <= 0 {
            return Err(KnobError::InvalidStep(self.step));
        }
        if !self.sensitivity.is_finite() || self.sensitivity <= 0.0 {
            return Err(KnobError::InvalidSensitivity(self.sensitivity));
        }
        Ok(())
    }

    #[inline]
    pub fn range(&self) -> f64 {
        self.max as f64 - self.min as f64
    }

    /// Clamp into bounds, then snap half-up onto the `min + k * step` grid.
    pub fn quantize(&self, raw: f64) -> i32 {
        let min = self.min as f64;
        let max = self.max as f64;
        let step = self.step as f64;
        let clamped = raw.clamp(min, max);
        let snapped = min + ((clamped - min) / step + 0.5).floor() * step;
        snapped.min(max) as i32
    }

    #[inline]
    pub fn rotation_deg(&self, value: i32) -> f64 {
        ARC_START_DEG + ARC_SWEEP_DEG * (value as f64 - self.min as f64) / self.range()
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct DragAnchor {
    start_y: f64,
    start_value: i32,
}

#[derive(Clone, Debug)]
pub struct Knob {
    config: KnobConfig,
    value: i32,
    rotation_deg: f64,
    drag: Option<DragAnchor>,
}

impl Knob {
    pub fn new(config: KnobConfig, value: i32) -> Result<Self, KnobError> {
        config.validate()?;
        let value = value.clamp(config.min, config.max);
        let rotation_deg = config.rotation_deg(value);
        Ok(Self {
            config,
            value,
            rotation_deg,
            drag: None,
        })
    }

    #[inline]
    pub fn value(&self) -> i32 {
        self.value
    }

    #[inline]
    pub fn rotation_deg(&self) -> f64 {
        self.rotation_deg
    }

    #[inline]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    pub fn begin_drag(&mut self, pointer_y: f64) {
        self.drag = Some(DragAnchor {
            start_y: pointer_y,
            start_value: self.value,
        });
    }

    /// Returns the new value when it differs from the last one emitted.
    pub fn drag_to(&mut self, pointer_y: f64) -> Option<i32> {
        let anchor = self.drag?;
        let delta_y = (anchor.start_y - pointer_y) * self.config.sensitivity;
        let delta_value = delta_y / DRAG_TRAVEL_PX * self.config.range();
        let candidate = self
            .config
            .quantize(anchor.start_value as f64 + delta_value);
        if candidate == self.value {
            return None;
        }
        self.set_value(candidate);
        Some(candidate)
    }

    /// Returns whether a drag was in progress.
    pub fn end_drag(&mut self) -> bool {
        self.drag.take().is_some()
    }

    /// Mirror an external value. Ignored mid-drag; returns whether anything changed.
    pub fn sync(&mut self, external: i32) -> bool {
        if self.is_dragging() {
            return false;
        }
        let value = external.clamp(self.config.min, self.config.max);
        let rotation_deg = self.config.rotation_deg(value);
        let changed = value != self.value || rotation_deg != self.rotation_deg;
        self.value = value;
        self.rotation_deg = rotation_deg;
        changed
    }

    /// Mirror external bounds and value. New bounds are validated first;
    /// ignored mid-drag like [`Knob::sync`].
    pub fn reconcile(&mut self, min: i32, max: i32, external: i32) -> Result<bool, KnobError> {
        if self.is_dragging() {
            return Ok(false);
        }
        let bounds_changed = min != self.config.min || max != self.config.max;
        if bounds_changed {
            let config = KnobConfig {
                min,
                max,
                ..self.config.clone()
            };
            config.validate()?;
            self.config = config;
        }
        Ok(self.sync(external) || bounds_changed)
    }

    fn set_value(&mut self, value: i32) {
        self.value = value;
        self.rotation_deg = self.config.rotation_deg(value);
    }
}
