use crate::input;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Track `window.scrollY` into `scroll`. Registered passive.
pub fn wire_scroll(scroll: Rc<RefCell<input::ScrollState>>) {
    let Some(window) = web::window() else {
        return;
    };
    scroll.borrow_mut().offset = crate::dom::scroll_y(&window);
    let win = window.clone();
    let closure = Closure::wrap(Box::new(move || {
        scroll.borrow_mut().offset = crate::dom::scroll_y(&win);
    }) as Box<dyn FnMut()>);
    let opts = web::AddEventListenerOptions::new();
    opts.set_passive(true);
    _ = window.add_event_listener_with_callback_and_add_event_listener_options(
        "scroll",
        closure.as_ref().unchecked_ref(),
        &opts,
    );
    closure.forget();
}

/// Track the pointer relative to the viewport centre into `pointer`.
pub fn wire_pointer_parallax(pointer: Rc<RefCell<input::PointerState>>) {
    let Some(window) = web::window() else {
        return;
    };
    let win = window.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        pointer.borrow_mut().offset = input::pointer_offset(&ev, &win);
    }) as Box<dyn FnMut(_)>);
    _ = window.add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
    closure.forget();
}
