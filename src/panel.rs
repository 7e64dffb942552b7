//! DOM for the mixer panel and rendering of [`MixerState`] into it.

use crate::constants::{DIMMED_OPACITY, RANDOM_COUNTS, TITLE};
use crate::dom;
use crate::model::{random_label, EmotionId, MixerState};
use web_sys as web;

pub struct PanelView {
    pub document: web::Document,
    pub power_button: web::HtmlElement,
    pub status: web::HtmlElement,
    pub controls: web::HtmlElement,
    pub random_buttons: Vec<(usize, web::HtmlElement)>,
    pub emotion_grid: web::HtmlElement,
    pub emotion_buttons: Vec<(EmotionId, web::HtmlElement)>,
    pub knob_row: web::HtmlElement,
}

pub fn build(document: &web::Document, host: &web::Element) -> anyhow::Result<PanelView> {
    let root = dom::create(document, "div", "retro-layout")?;

    let header = dom::create(document, "div", "retro-panel darker header")?;
    let power_button = dom::create_with_text(document, "button", "power-button", "⏻")?;
    _ = power_button.set_attribute("aria-label", "power");
    dom::append(&header, &power_button)?;
    let title = dom::create_with_text(document, "h2", "title", TITLE)?;
    dom::append(&header, &title)?;
    dom::append(&root, &header)?;

    let display = dom::create(document, "div", "retro-panel darker display")?;
    let status = dom::create(document, "span", "status")?;
    dom::append(&display, &status)?;
    dom::append(&root, &display)?;

    // Everything below is only shown while powered on.
    let controls = dom::create(document, "div", "controls")?;

    let random_row = dom::create(document, "div", "retro-panel darker random-row")?;
    let mut random_buttons = Vec::with_capacity(RANDOM_COUNTS.len());
    for count in RANDOM_COUNTS {
        let button = dom::create_with_text(document, "button", "random-button", &random_label(count))?;
        _ = button.set_attribute("data-count", &count.to_string());
        dom::append(&random_row, &button)?;
        random_buttons.push((count, button));
    }
    dom::append(&controls, &random_row)?;

    let emotion_grid = dom::create(document, "div", "retro-panel emotion-grid")?;
    let mut emotion_buttons = Vec::with_capacity(EmotionId::ALL.len());
    for id in EmotionId::ALL {
        let info = id.info();
        let button = dom::create(document, "button", "emotion-button")?;
        _ = button.set_attribute("data-code", info.code);
        _ = button.style().set_property("--emotion-color", info.color);
        let name = dom::create_with_text(document, "div", "emotion-name", info.local_name)?;
        let code = dom::create_with_text(document, "div", "emotion-code", &format!("({})", info.code))?;
        dom::append(&button, &name)?;
        dom::append(&button, &code)?;
        dom::append(&emotion_grid, &button)?;
        emotion_buttons.push((id, button));
    }
    dom::append(&controls, &emotion_grid)?;

    let knob_row = dom::create(document, "div", "retro-panel knob-row")?;
    dom::append(&controls, &knob_row)?;
    dom::append(&root, &controls)?;

    dom::append(host, &root)?;

    Ok(PanelView {
        document: document.clone(),
        power_button,
        status,
        controls,
        random_buttons,
        emotion_grid,
        emotion_buttons,
        knob_row,
    })
}

pub fn render_status(view: &PanelView, state: &MixerState) {
    view.status.set_text_content(Some(&state.status_line()));
    dom::set_class(&view.status, "online", state.power());
    dom::set_class(&view.status, "empty", state.is_empty());
}

pub fn render(view: &PanelView, state: &MixerState) {
    dom::set_class(&view.power_button, "on", state.power());
    render_status(view, state);
    dom::set_visible(&view.controls, state.power());

    for (count, button) in &view.random_buttons {
        dom::set_class(button, "active", state.last_random() == Some(*count));
    }

    for (id, button) in &view.emotion_buttons {
        dom::set_class(button, "selected", state.is_selected(*id));
        match state.intensity(*id) {
            Some(v) => {
                _ = button.set_attribute("data-intensity", &v.to_string());
            }
            None => {
                _ = button.remove_attribute("data-intensity");
            }
        }
        let opacity = if state.is_dimmed(*id) { DIMMED_OPACITY } else { "1" };
        _ = button.style().set_property("opacity", opacity);
    }
}
