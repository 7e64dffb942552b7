#![cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;
use web_sys as web;

mod app;
mod constants;
mod dom;
mod events;
mod knob;
mod knob_widget;
mod model;
mod panel;

fn mount_point(document: &web::Document) -> anyhow::Result<web::Element> {
    if let Some(el) = document.get_element_by_id(constants::MOUNT_ELEMENT_ID) {
        return Ok(el);
    }
    log::info!(
        "#{} not found, mounting into <body>",
        constants::MOUNT_ELEMENT_ID
    );
    let body = document.body().ok_or_else(|| anyhow::anyhow!("no body"))?;
    Ok(body.into())
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(constants::LOG_LEVEL).ok();
    log::info!("emotion-mixer starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let host = mount_point(&document)?;

    let view = panel::build(&document, &host)?;
    let mixer = app::Mixer::new(view);
    events::wire_controls(&mixer);
    mixer.refresh();
    Ok(())
}
