//! Standalone model viewer page: one placeholder model under damped orbit
//! controls.

use crate::constants::VIEWER_CLEAR;
use crate::dom;
use crate::frame;
use crate::input;
use crate::render::{self, GpuState};
use folio_core::{BillboardInstance, CameraPose, OrbitRig, Scene, ViewerParams};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

struct ViewerFrame {
    orbit: Rc<RefCell<OrbitRig>>,
    scene: Scene,
    canvas: web::HtmlCanvasElement,
    gpu: Option<GpuState>,
    instances: Vec<BillboardInstance>,
}

impl ViewerFrame {
    fn frame(&mut self) {
        let pose = {
            let mut orbit = self.orbit.borrow_mut();
            orbit.update();
            CameraPose::new(orbit.eye(), orbit.target())
        };
        self.scene.build_instances(0.0, pose.position, &mut self.instances);
        if let Some(g) = &mut self.gpu {
            g.resize_if_needed(self.canvas.width(), self.canvas.height());
            g.set_camera(&pose);
            render::present(g, &self.instances);
        }
    }
}

pub async fn run(canvas: web::HtmlCanvasElement) -> anyhow::Result<()> {
    let orbit = OrbitRig::new(ViewerParams::default())?;
    dom::wire_canvas_resize(&canvas);

    let aspect = canvas.width().max(1) as f32 / canvas.height().max(1) as f32;
    let gpu = render::init_gpu(&canvas, orbit.camera(aspect), VIEWER_CLEAR).await;

    let orbit = Rc::new(RefCell::new(orbit));
    wire_orbit_controls(&canvas, orbit.clone());

    let mut viewer = ViewerFrame {
        orbit,
        scene: Scene::viewer(),
        canvas,
        gpu,
        instances: Vec::new(),
    };
    log::info!("model viewer running");
    frame::start_loop(move || viewer.frame());
    Ok(())
}

fn wire_orbit_controls(canvas: &web::HtmlCanvasElement, orbit: Rc<RefCell<OrbitRig>>) {
    let drag = Rc::new(RefCell::new(input::DragState::default()));

    // pointerdown
    {
        let drag = drag.clone();
        let target = canvas.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
            drag.borrow_mut().begin(ev.client_x() as f32, ev.client_y() as f32);
            _ = target.set_pointer_capture(ev.pointer_id());
            ev.prevent_default();
        }) as Box<dyn FnMut(_)>);
        _ = canvas
            .add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    // pointermove
    {
        let drag = drag.clone();
        let orbit = orbit.clone();
        let el = canvas.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
            let moved = drag
                .borrow_mut()
                .drag_to(ev.client_x() as f32, ev.client_y() as f32);
            if let Some((dx, dy)) = moved {
                let height = el.client_height() as f32;
                orbit.borrow_mut().rotate_by_pixels(dx, dy, height);
            }
        }) as Box<dyn FnMut(_)>);
        _ = canvas
            .add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    // pointerup / pointercancel
    for kind in ["pointerup", "pointercancel"] {
        let drag = drag.clone();
        let closure = Closure::wrap(Box::new(move |_ev: web::PointerEvent| {
            drag.borrow_mut().end();
        }) as Box<dyn FnMut(_)>);
        _ = canvas.add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref());
        closure.forget();
    }

    // wheel
    {
        let closure = Closure::wrap(Box::new(move |ev: web::WheelEvent| {
            orbit.borrow_mut().zoom_by_wheel(ev.delta_y() as f32);
            ev.prevent_default();
        }) as Box<dyn FnMut(_)>);
        _ = canvas.add_event_listener_with_callback("wheel", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
