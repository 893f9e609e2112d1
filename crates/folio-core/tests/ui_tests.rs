// Host-side tests for page content formatting and interaction helpers.

use folio_core::ui::*;
use folio_core::ContactError;

#[test]
fn nav_link_active_window_is_offset_by_header() {
    // section at 1000px, 600px tall: active for 920 <= y < 1520
    assert!(!section_is_active(919.0, 1000.0, 600.0));
    assert!(section_is_active(920.0, 1000.0, 600.0));
    assert!(section_is_active(1519.0, 1000.0, 600.0));
    assert!(!section_is_active(1520.0, 1000.0, 600.0));
    // first section is active at the top of the page
    assert!(section_is_active(0.0, 0.0, 700.0));
}

#[test]
fn contact_form_trims_and_composes() {
    let form = ContactForm {
        name: "  Ada ".into(),
        email: "ada@example.com\n".into(),
        message: "\tHello there ".into(),
    };
    let draft = form.compose(CONTACT_RECIPIENT).unwrap();
    assert_eq!(draft.recipient, CONTACT_RECIPIENT);
    assert_eq!(draft.subject, "Portfolio contact from Ada");
    assert_eq!(
        draft.body,
        "Name: Ada\nEmail: ada@example.com\n\nMessage:\nHello there"
    );
}

#[test]
fn contact_form_reports_first_blank_field() {
    let form = ContactForm {
        name: "Ada".into(),
        email: "   ".into(),
        message: String::new(),
    };
    assert_eq!(
        form.compose(CONTACT_RECIPIENT),
        Err(ContactError::MissingField("email"))
    );
    assert_eq!(
        ContactForm::default().compose(CONTACT_RECIPIENT),
        Err(ContactError::MissingField("name"))
    );
}

#[test]
fn compose_url_encodes_each_part() {
    let draft = MailDraft {
        recipient: "a@b.c".into(),
        subject: "Hi".into(),
        body: "x y".into(),
    };
    let url = draft.gmail_compose_url(|s| s.replace(' ', "%20").replace('@', "%40"));
    assert_eq!(
        url,
        "https://mail.google.com/mail/?view=cm&fs=1&to=a%40b.c&su=Hi&body=x%20y"
    );
}

#[test]
fn skills_render_one_row_per_skill_with_levels() {
    let html = skills_html(&SKILLS);
    assert_eq!(html.matches("class=\"sf-skill\"").count(), SKILLS.len());
    for s in SKILLS {
        assert!(html.contains(s.name));
        assert!(html.contains(&format!("data-level=\"{}\"", s.level)));
    }
}

#[test]
fn fill_width_parses_levels() {
    assert_eq!(fill_width("85").as_deref(), Some("85%"));
    assert_eq!(fill_width(" 90 ").as_deref(), Some("90%"));
    assert_eq!(fill_width("250").as_deref(), Some("100%"));
    assert_eq!(fill_width("abc"), None);
}

#[test]
fn about_renders_all_paragraphs_with_icons() {
    let html = about_html(&ABOUT_PARAGRAPHS);
    for p in ABOUT_PARAGRAPHS {
        assert!(html.contains(p));
    }
    for icon in ["user", "heart", "rocket"] {
        assert!(html.contains(&format!("data-lucide=\"{icon}\"")));
    }
}

#[test]
fn card_tilt_follows_pointer() {
    // centre of the card: no tilt
    assert_eq!(
        card_tilt_transform(150.0, 100.0, 100.0, 50.0, 100.0, 100.0),
        "translateY(-8px) rotate(1deg) rotateX(0deg) rotateY(0deg)"
    );
    // bottom-right corner
    assert_eq!(
        card_tilt_transform(200.0, 150.0, 100.0, 50.0, 100.0, 100.0),
        "translateY(-8px) rotate(1deg) rotateX(-3deg) rotateY(3deg)"
    );
    // degenerate rect
    assert_eq!(
        card_tilt_transform(5.0, 5.0, 0.0, 0.0, 0.0, 0.0),
        "translateY(-8px) rotate(1deg) rotateX(0deg) rotateY(0deg)"
    );
}

#[test]
fn loading_screen_hides_once() {
    let latch = HideOnce::default();
    assert!(!latch.is_hidden());
    assert!(latch.trigger());
    assert!(latch.is_hidden());
    assert!(!latch.trigger());
    assert!(!latch.trigger());
}
