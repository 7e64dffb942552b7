use crate::app::Mixer;
use crate::dom;
use crate::model::EmotionId;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn wire_controls(mixer: &Rc<Mixer>) {
    let view = mixer.view();

    let m = mixer.clone();
    dom::add_click_listener(&view.power_button, move |_| m.toggle_power());

    for (count, button) in &view.random_buttons {
        let m = mixer.clone();
        let count = *count;
        dom::add_click_listener(button, move |_| m.randomize(count));
    }

    // One delegated listener for the whole grid; buttons carry `data-code`.
    let m = mixer.clone();
    dom::add_click_listener(&view.emotion_grid, move |ev| {
        if let Some(emotion) = emotion_for_event(&ev) {
            m.toggle_emotion(emotion);
        }
    });
}

fn emotion_for_event(ev: &web::Event) -> Option<EmotionId> {
    let target = ev.target()?.dyn_into::<web::Element>().ok()?;
    let button = target.closest("[data-code]").ok()??;
    let code = button.get_attribute("data-code")?;
    match EmotionId::from_code(&code) {
        Ok(emotion) => Some(emotion),
        Err(e) => {
            log::warn!("[select] {}", e);
            None
        }
    }
}
