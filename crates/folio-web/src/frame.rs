use crate::dom;
use crate::input;
use crate::render::{self, GpuState};
use folio_core::{BillboardInstance, CameraRig, Scene};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Per-frame state of the scroll page. The rig's smoothed camera is only
/// touched from [`FrameContext::frame`]; listeners only write the input
/// cells.
pub struct FrameContext {
    pub rig: CameraRig,
    pub scene: Scene,
    pub scroll: Rc<RefCell<input::ScrollState>>,
    pub pointer: Rc<RefCell<input::PointerState>>,

    pub window: web::Window,
    pub document: web::Document,
    pub canvas: web::HtmlCanvasElement,
    pub gpu: Option<GpuState>,

    pub started: Instant,
    pub instances: Vec<BillboardInstance>,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let elapsed = self.started.elapsed().as_secs_f32();
        let scroll = self.scroll.borrow().offset;
        let pointer = self.pointer.borrow().offset;
        let total = dom::page_scrollable(&self.window, &self.document);

        let pose = self.rig.step(scroll, total, pointer);

        self.scene.build_instances(elapsed, pose.position, &mut self.instances);

        if let Some(g) = &mut self.gpu {
            g.resize_if_needed(self.canvas.width(), self.canvas.height());
            g.set_camera(&pose);
            render::present(g, &self.instances);
        }
    }
}

/// Drive `tick` from `requestAnimationFrame` until the page goes away.
pub fn start_loop(mut tick: impl FnMut() + 'static) {
    let raf: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let raf_next = raf.clone();
    *raf.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        tick();
        request_frame(&raf_next);
    }) as Box<dyn FnMut()>));
    request_frame(&raf);
}

fn request_frame(raf: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    let Some(w) = web::window() else {
        return;
    };
    if let Some(cb) = raf.borrow().as_ref() {
        if let Err(e) = w.request_animation_frame(cb.as_ref().unchecked_ref()) {
            log::error!("requestAnimationFrame failed: {:?}", e);
        }
    }
}
