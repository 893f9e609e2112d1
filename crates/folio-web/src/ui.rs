//! DOM side of the page content: nav highlighting, contact form, skills,
//! about text and project card tilt.

use crate::constants::{
    nav_link_selector, ABOUT_ID, EMAIL_INPUT_ID, MESSAGE_INPUT_ID, NAME_INPUT_ID,
    NAV_ACTIVE_CLASS, PROJECT_CARD_SELECTOR, SECTION_SELECTOR, SKILLS_ID, SKILL_FILL_DELAY_MS,
    SKILL_FILL_SELECTOR, SUBMIT_BUTTON_ID,
};
use crate::dom;
use folio_core::ui::{
    about_html, card_tilt_transform, fill_width, section_is_active, skills_html, ContactForm,
    ABOUT_PARAGRAPHS, CONTACT_INCOMPLETE_ALERT, CONTACT_RECIPIENT, SKILLS,
};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn wire_page_ui(window: &web::Window, document: &web::Document) {
    wire_nav_highlight(window, document);
    wire_contact_form(window, document);
    render_skills(window, document);
    render_about(document);
    wire_card_tilt(document);
}

fn update_active_link(window: &web::Window, document: &web::Document) {
    let scroll_y = window.scroll_y().unwrap_or(0.0);
    dom::for_each_element::<web::HtmlElement>(document, SECTION_SELECTOR, |sec| {
        let id = sec.id();
        let top = sec.offset_top() as f64;
        let height = sec.offset_height() as f64;
        if let Ok(Some(link)) = document.query_selector(&nav_link_selector(&id)) {
            _ = link
                .class_list()
                .toggle_with_force(NAV_ACTIVE_CLASS, section_is_active(scroll_y, top, height));
        }
    });
}

fn wire_nav_highlight(window: &web::Window, document: &web::Document) {
    update_active_link(window, document);
    let win = window.clone();
    let doc = document.clone();
    let closure = Closure::wrap(Box::new(move || {
        update_active_link(&win, &doc);
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

fn wire_contact_form(window: &web::Window, document: &web::Document) {
    let win = window.clone();
    let doc = document.clone();
    dom::add_click_listener(document, SUBMIT_BUTTON_ID, move || {
        let form = ContactForm {
            name: dom::element_value(&doc, NAME_INPUT_ID),
            email: dom::element_value(&doc, EMAIL_INPUT_ID),
            message: dom::element_value(&doc, MESSAGE_INPUT_ID),
        };
        match form.compose(CONTACT_RECIPIENT) {
            Ok(draft) => {
                let url = draft.gmail_compose_url(|s| js_sys::encode_uri_component(s).into());
                if let Err(e) = win.open_with_url_and_target(&url, "_blank") {
                    log::warn!("could not open mail compose window: {:?}", e);
                }
            }
            Err(e) => {
                log::info!("[contact] {e}");
                _ = win.alert_with_message(CONTACT_INCOMPLETE_ALERT);
            }
        }
    });
}

fn render_skills(window: &web::Window, document: &web::Document) {
    let Some(el) = document.get_element_by_id(SKILLS_ID) else {
        return;
    };
    el.set_inner_html(&skills_html(&SKILLS));
    let doc = document.clone();
    dom::set_timeout(window, SKILL_FILL_DELAY_MS, move || {
        dom::for_each_element::<web::HtmlElement>(&doc, SKILL_FILL_SELECTOR, |bar| {
            let width = bar
                .get_attribute("data-level")
                .and_then(|level| fill_width(&level));
            if let Some(width) = width {
                _ = bar.style().set_property("width", &width);
            }
        });
    });
}

fn render_about(document: &web::Document) {
    let Some(el) = document.get_element_by_id(ABOUT_ID) else {
        return;
    };
    el.set_inner_html(&about_html(&ABOUT_PARAGRAPHS));
    create_icons();
}

// Icons come from the optional lucide script tag.
fn create_icons() {
    let global = js_sys::global();
    let Ok(lucide) = js_sys::Reflect::get(&global, &"lucide".into()) else {
        return;
    };
    if lucide.is_undefined() || lucide.is_null() {
        return;
    }
    let create = js_sys::Reflect::get(&lucide, &"createIcons".into())
        .ok()
        .and_then(|f| f.dyn_into::<js_sys::Function>().ok());
    if let Some(create) = create {
        if let Err(e) = create.call0(&lucide) {
            log::warn!("lucide.createIcons failed: {:?}", e);
        }
    }
}

fn wire_card_tilt(document: &web::Document) {
    dom::for_each_element::<web::HtmlElement>(document, PROJECT_CARD_SELECTOR, |card| {
        let card_move = card.clone();
        let on_move = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
            let r = card_move.get_bounding_client_rect();
            let transform = card_tilt_transform(
                ev.client_x() as f64,
                ev.client_y() as f64,
                r.left(),
                r.top(),
                r.width(),
                r.height(),
            );
            _ = card_move.style().set_property("transform", &transform);
        }) as Box<dyn FnMut(_)>);
        _ = card.add_event_listener_with_callback("mousemove", on_move.as_ref().unchecked_ref());
        on_move.forget();

        let card_leave = card.clone();
        let on_leave = Closure::wrap(Box::new(move || {
            _ = card_leave.style().set_property("transform", "");
        }) as Box<dyn FnMut()>);
        _ = card.add_event_listener_with_callback("mouseleave", on_leave.as_ref().unchecked_ref());
        on_leave.forget();
    });
}
