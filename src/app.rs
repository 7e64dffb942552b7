//! Wires user actions to [`MixerState`] and keeps the panel in step with it.

use crate::constants::{KNOB_MAX, KNOB_MIN, KNOB_SENSITIVITY, KNOB_STEP};
use crate::knob::{KnobConfig, KnobSize};
use crate::knob_widget::KnobWidget;
use crate::model::{EmotionId, MixerState, Toggle, MAX_SELECTED};
use crate::panel::{self, PanelView};
use smallvec::SmallVec;
use std::cell::RefCell;
use std::rc::Rc;

struct MountedKnob {
    emotion: EmotionId,
    widget: KnobWidget,
}

pub struct Mixer {
    state: RefCell<MixerState>,
    view: PanelView,
    knobs: RefCell<SmallVec<[MountedKnob; MAX_SELECTED]>>,
}

fn knob_config_for(emotion: EmotionId) -> KnobConfig {
    let info = emotion.info();
    KnobConfig {
        min: KNOB_MIN,
        max: KNOB_MAX,
        step: KNOB_STEP,
        sensitivity: KNOB_SENSITIVITY,
        size: KnobSize::Large,
        show_value: true,
        label: info.local_name.to_string(),
        color: info.color.to_string(),
    }
}

impl Mixer {
    pub fn new(view: PanelView) -> Rc<Self> {
        Rc::new(Self {
            state: RefCell::new(MixerState::new()),
            view,
            knobs: RefCell::new(SmallVec::new()),
        })
    }

    #[inline]
    pub fn view(&self) -> &PanelView {
        &self.view
    }

    pub fn toggle_power(self: &Rc<Self>) {
        let on = self.state.borrow_mut().toggle_power();
        log::info!("[power] {}", if on { "on" } else { "off" });
        self.refresh();
    }

    pub fn toggle_emotion(self: &Rc<Self>, emotion: EmotionId) {
        let (outcome, selected) = {
            let mut state = self.state.borrow_mut();
            let outcome = state.toggle(emotion);
            (outcome, state.len())
        };
        match outcome {
            Toggle::Selected => log::info!("[select] + {} ({}/{})", emotion, selected, MAX_SELECTED),
            Toggle::Deselected => log::info!("[select] - {} ({}/{})", emotion, selected, MAX_SELECTED),
            Toggle::Ignored => {
                log::debug!("[select] {} ignored, selection full", emotion);
                return;
            }
        }
        self.refresh();
    }

    pub fn randomize(self: &Rc<Self>, count: usize) {
        let result = {
            let mut state = self.state.borrow_mut();
            state
                .randomize(count, &mut rand::thread_rng())
                .map(|channels| channels.to_vec())
        };
        match result {
            Ok(channels) => log::info!("[random] {:?}", channels),
            Err(e) => {
                log::warn!("[random] {}", e);
                return;
            }
        }
        self.refresh();
    }

    fn set_intensity(&self, emotion: EmotionId, value: i32) {
        let stored = self.state.borrow_mut().set_intensity(emotion, value);
        match stored {
            Ok(v) => {
                log::debug!("[knob] {} = {}", emotion, v);
                panel::render_status(&self.view, &self.state.borrow());
            }
            Err(e) => log::warn!("[knob] {}", e),
        }
    }

    pub fn refresh(self: &Rc<Self>) {
        panel::render(&self.view, &self.state.borrow());
        if let Err(e) = self.sync_knobs() {
            log::error!("[knob] mount failed: {:?}", e);
        }
    }

    /// Mount, unmount and reconcile knobs so there is one per selected
    /// channel, in selection order. No knobs exist while powered off.
    fn sync_knobs(self: &Rc<Self>) -> anyhow::Result<()> {
        let state = self.state.borrow();
        let mut knobs = self.knobs.borrow_mut();
        if !state.power() {
            knobs.clear();
            return Ok(());
        }
        knobs.retain(|k| state.is_selected(k.emotion));

        for channel in state.channels() {
            let intensity = channel.intensity as i32;
            match knobs.iter().find(|k| k.emotion == channel.emotion) {
                Some(mounted) => {
                    mounted.widget.reconcile(KNOB_MIN, KNOB_MAX, intensity)?;
                    // re-appending moves the node into selection order
                    crate::dom::append(&self.view.knob_row, mounted.widget.root())?;
                }
                None => {
                    let widget = KnobWidget::mount(
                        &self.view.document,
                        &self.view.knob_row,
                        knob_config_for(channel.emotion),
                        intensity,
                        self.intensity_callback(channel.emotion),
                    )?;
                    knobs.push(MountedKnob {
                        emotion: channel.emotion,
                        widget,
                    });
                }
            }
        }
        Ok(())
    }

    fn intensity_callback(self: &Rc<Self>, emotion: EmotionId) -> impl Fn(i32) + 'static {
        let weak = Rc::downgrade(self);
        move |value| {
            if let Some(mixer) = weak.upgrade() {
                mixer.set_intensity(emotion, value);
            }
        }
    }
}
