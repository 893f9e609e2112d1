// DOM hooks and page timing constants.

// Canvases; which one is present decides the page mode
pub const SCROLL_CANVAS_ID: &str = "webgl";
pub const VIEWER_CANVAS_ID: &str = "threeCanvas";

// Loading screen
pub const LOADING_SCREEN_ID: &str = "loading-screen";
pub const LOADING_HIDE_DELAY_MS: i32 = 2800;
pub const LOADING_FADE_MS: i32 = 1100; // slightly longer than the 1s CSS transition
pub const LOADING_FADE_TRANSITION: &str = "opacity 1s ease";

// Page content
pub const SECTION_SELECTOR: &str = "section[id]";
pub const SKILLS_ID: &str = "skills";
pub const SKILL_FILL_SELECTOR: &str = ".sf-fill";
pub const SKILL_FILL_DELAY_MS: i32 = 600;
pub const ABOUT_ID: &str = "about";
pub const PROJECT_CARD_SELECTOR: &str = ".project-card";
pub const NAV_ACTIVE_CLASS: &str = "active";

// Contact form
pub const SUBMIT_BUTTON_ID: &str = "submitBtn";
pub const NAME_INPUT_ID: &str = "name";
pub const EMAIL_INPUT_ID: &str = "email";
pub const MESSAGE_INPUT_ID: &str = "message";

// Clear colours, linear space. #0a0a12 for the scroll page.
pub const SCROLL_CLEAR: wgpu::Color = wgpu::Color {
    r: 0.003,
    g: 0.003,
    b: 0.006,
    a: 1.0,
};
pub const VIEWER_CLEAR: wgpu::Color = wgpu::Color::BLACK;

#[inline]
pub fn nav_link_selector(section_id: &str) -> String {
    format!(".nav a[href=\"#{section_id}\"]")
}
