#![cfg(target_arch = "wasm32")]
use folio_core::{Camera, CameraRig, PoseTable, RigParams, Scene, SCENE_SEED};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod dom;
mod events;
mod frame;
mod input;
mod loading;
mod render;
mod ui;
mod viewer;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("folio-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

fn canvas_by_id(
    document: &web::Document,
    id: &str,
) -> anyhow::Result<Option<web::HtmlCanvasElement>> {
    let Some(el) = document.get_element_by_id(id) else {
        return Ok(None);
    };
    el.dyn_into::<web::HtmlCanvasElement>()
        .map(Some)
        .map_err(|e| anyhow::anyhow!("#{id} is not a canvas: {:?}", e))
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    if let Some(canvas) = canvas_by_id(&document, constants::SCROLL_CANVAS_ID)? {
        ui::wire_page_ui(&window, &document);
        return run_scroll_page(window, document, canvas).await;
    }
    if let Some(canvas) = canvas_by_id(&document, constants::VIEWER_CANVAS_ID)? {
        return viewer::run(canvas).await;
    }

    // Content pages without a 3D background still get the UI behaviour.
    log::warn!(
        "no #{} or #{} canvas found",
        constants::SCROLL_CANVAS_ID,
        constants::VIEWER_CANVAS_ID
    );
    ui::wire_page_ui(&window, &document);
    Ok(())
}

async fn run_scroll_page(
    window: web::Window,
    document: web::Document,
    canvas: web::HtmlCanvasElement,
) -> anyhow::Result<()> {
    dom::wire_canvas_resize(&canvas);
    loading::schedule_hide(&window, &document);

    let rig = CameraRig::new(PoseTable::portfolio(), RigParams::default())?;
    let scene = Scene::portfolio(SCENE_SEED);
    log::info!(
        "[scroll] {} sections, ease {:.2}",
        rig.poses().len(),
        rig.params().ease
    );

    // Listeners only overwrite the latest value; the frame loop reads them.
    let scroll = Rc::new(RefCell::new(input::ScrollState::default()));
    let pointer = Rc::new(RefCell::new(input::PointerState::default()));
    events::wire_scroll(scroll.clone());
    events::wire_pointer_parallax(pointer.clone());

    let aspect = canvas.width().max(1) as f32 / canvas.height().max(1) as f32;
    let gpu = render::init_gpu(
        &canvas,
        Camera::scroll_page(aspect),
        constants::SCROLL_CLEAR,
    )
    .await;

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        rig,
        scene,
        scroll,
        pointer,
        window,
        document,
        canvas,
        gpu,
        started: Instant::now(),
        instances: Vec::new(),
    }));
    frame::start_loop(move || frame_ctx.borrow_mut().frame());
    Ok(())
}
