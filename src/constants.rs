// Page wiring constants: element ids, selectors and asset locations.
// Simulation tuning lives in `hero_core::constants`.

// Canvases
pub const HERO_CANVAS_ID: &str = "hero-canvas";
pub const CONFETTI_CANVAS_ID: &str = "confetti";
pub const RENDERER_ATTR: &str = "data-renderer";

// Hero section watched by the visibility observer
pub const HERO_SECTION_SELECTOR: &str = ".hero";
pub const HERO_VISIBLE_THRESHOLD: f64 = 0.1;

// Canvas2D hero trail wash; a full clear is used while scrolling
pub const TRAIL_FILL: &str = "rgba(0, 0, 0, 0.1)";

// GPU hero texture
pub const LOGO_PATH: &str = "Asserts/logo/memor-high-resolution-logo-transparent.png";
pub const LOGO_READY_THRESHOLD: usize = 1;

// Interest form
pub const FORM_ID: &str = "interestForm";
pub const SUCCESS_MESSAGE_ID: &str = "successMessage";
pub const FORM_NAME_ID: &str = "name";
pub const FORM_EMAIL_ID: &str = "email";
pub const FORM_MESSAGE_ID: &str = "message";
pub const SUBMIT_SELECTOR: &str = "button[type=\"submit\"]";
pub const SENDING_LABEL: &str = "Sending...";
pub const EMPTY_MESSAGE: &str = "No message provided";
pub const FORM_RESET_MS: i32 = 5000;
pub const EMAILJS_SERVICE_ID: &str = "service_1q8q6n8";
pub const EMAILJS_TEMPLATE_ID: &str = "template_kt8dxw6";
pub const EMAILJS_RECIPIENTS: &str = "vs3128@nyu.edu, as20373@nyu.edu";
pub const SEND_FAILED_ALERT: &str =
    "Oops! Something went wrong. Please try again or contact us directly at vs3128@nyu.edu";

// Lightbox
pub const LIGHTBOX_ID: &str = "lightbox";
pub const LIGHTBOX_IMG_ID: &str = "lightbox-img";
pub const LIGHTBOX_CAPTION_ID: &str = "lightbox-caption";
pub const LIGHTBOX_CLOSE_SELECTOR: &str = ".lightbox-close";
pub const LIGHTBOX_PREV_ID: &str = "lightbox-prev";
pub const LIGHTBOX_NEXT_ID: &str = "lightbox-next";
pub const PROTOTYPE_CARD_SELECTOR: &str = ".prototype-card";
pub const SHOW_CLASS: &str = "show";

// Scroll fade-in
pub const FADE_SELECTOR: &str = ".feature-card, .prototype-card, .scenario-card";
pub const FADE_THRESHOLD: f64 = 0.1;
pub const FADE_ROOT_MARGIN: &str = "0px 0px -100px 0px";
pub const FADE_OFFSET_PX: f32 = 30.0;
pub const FADE_TRANSITION: &str = "opacity 0.6s ease, transform 0.6s ease";

// Navbar, restyled once the page scrolls past the threshold
pub const NAVBAR_SELECTOR: &str = ".navbar";
pub const NAVBAR_SCROLL_THRESHOLD: f64 = 100.0;
pub const NAVBAR_BG_TOP: &str = "rgba(255, 255, 255, 0.95)";
pub const NAVBAR_SHADOW_TOP: &str = "0 4px 6px -1px rgba(0, 0, 0, 0.1)";
pub const NAVBAR_BG_SCROLLED: &str = "rgba(255, 255, 255, 0.98)";
pub const NAVBAR_SHADOW_SCROLLED: &str = "0 10px 15px -3px rgba(0, 0, 0, 0.1)";

// Buttons and anchors
pub const RIPPLE_SELECTOR: &str = ".btn-primary, .btn-nav";
pub const RIPPLE_CLASS: &str = "ripple";
pub const RIPPLE_LIFETIME_MS: i32 = 600;
pub const ANCHOR_SELECTOR: &str = "a[href^=\"#\"]";
pub const RIPPLE_CSS: &str = "
.btn-primary, .btn-nav { position: relative; overflow: hidden; }
.ripple {
    position: absolute;
    border-radius: 50%;
    background: rgba(255, 255, 255, 0.6);
    transform: scale(0);
    animation: ripple-animation 0.6s ease-out;
    pointer-events: none;
}
@keyframes ripple-animation { to { transform: scale(4); opacity: 0; } }
";

/// Hero photo pool, loaded in this order.
pub const HERO_IMAGE_PATHS: [&str; 70] = [
    "Asserts/Memor website images/0bbbddaa-3ee3-4472-8474-1b3fa07c416d.jpg",
    "Asserts/Memor website images/1fd74786-7dbc-4379-b72b-22f1d6217a8e.jpg",
    "Asserts/Memor website images/20240112_003705.jpg",
    "Asserts/Memor website images/3749A24D-B022-404B-A784-6E926E58362C.jpg",
    "Asserts/Memor website images/39552bd0-cf91-4657-988a-82b5b45b30bf.jpg",
    "Asserts/Memor website images/79a44c1c-894c-4292-994c-1af3015fc011.jpg",
    "Asserts/Memor website images/7e01c55b-a5dc-43d8-8442-47150b9bb32d.jpg",
    "Asserts/Memor website images/92e5fe9c-3149-48f3-9a7e-b76b6cc4530f.jpg",
    "Asserts/Memor website images/aeede821-f943-4dd0-8344-304f1dea7071.jpg",
    "Asserts/Memor website images/FullSizeRender.jpg",
    "Asserts/Memor website images/FullSizeRender(1).jpg",
    "Asserts/Memor website images/IMG_0016.JPG",
    "Asserts/Memor website images/IMG_0020.JPG",
    "Asserts/Memor website images/IMG_0124.JPG",
    "Asserts/Memor website images/IMG_0188.jpg",
    "Asserts/Memor website images/IMG_0221.jpg",
    "Asserts/Memor website images/IMG_0238.jpg",
    "Asserts/Memor website images/IMG_0290.JPG",
    "Asserts/Memor website images/IMG_0454.JPG",
    "Asserts/Memor website images/IMG_0472.JPG",
    "Asserts/Memor website images/IMG_0582.jpg",
    "Asserts/Memor website images/IMG_0863.JPG",
    "Asserts/Memor website images/IMG_1411.JPG",
    "Asserts/Memor website images/IMG_1414.JPG",
    "Asserts/Memor website images/IMG_5650.jpg",
    "Asserts/Memor website images/IMG_5821.jpg",
    "Asserts/Memor website images/IMG_6063.jpg",
    "Asserts/Memor website images/IMG_6241.JPG",
    "Asserts/Memor website images/IMG_6399.jpg",
    "Asserts/Memor website images/IMG_6502.jpg",
    "Asserts/Memor website images/IMG_6614.JPG",
    "Asserts/Memor website images/IMG_6622.JPG",
    "Asserts/Memor website images/IMG_6680.JPG",
    "Asserts/Memor website images/IMG_6717.JPG",
    "Asserts/Memor website images/IMG_6745.jpg",
    "Asserts/Memor website images/IMG_6757.PNG",
    "Asserts/Memor website images/IMG_6800.JPG",
    "Asserts/Memor website images/IMG_6821.JPG",
    "Asserts/Memor website images/IMG_6823.JPG",
    "Asserts/Memor website images/IMG_6898.JPG",
    "Asserts/Memor website images/IMG_7043.JPG",
    "Asserts/Memor website images/IMG_7047.jpg",
    "Asserts/Memor website images/IMG_7056.JPG",
    "Asserts/Memor website images/IMG_7098.jpg",
    "Asserts/Memor website images/IMG_7658.JPG",
    "Asserts/Memor website images/IMG_7685.JPG",
    "Asserts/Memor website images/IMG_7686.JPG",
    "Asserts/Memor website images/IMG_7690.JPG",
    "Asserts/Memor website images/IMG_8460.JPG",
    "Asserts/Memor website images/IMG_8461.JPG",
    "Asserts/Memor website images/IMG_8731.JPG",
    "Asserts/Memor website images/IMG_8774.JPG",
    "Asserts/Memor website images/IMG_8842.JPG",
    "Asserts/Memor website images/IMG_9183.JPG",
    "Asserts/Memor website images/IMG_9191.JPG",
    "Asserts/Memor website images/IMG_9360.JPG",
    "Asserts/Memor website images/IMG_9394.JPG",
    "Asserts/Memor website images/IMG_9510.JPG",
    "Asserts/Memor website images/IMG_9512.JPG",
    "Asserts/Memor website images/IMG_9534.JPG",
    "Asserts/Memor website images/IMG_9753.JPG",
    "Asserts/Memor website images/IMG_9759.JPG",
    "Asserts/Memor website images/IMG_9841.JPG",
    "Asserts/Memor website images/IMG_9848.JPG",
    "Asserts/Memor website images/IMG_9849.JPG",
    "Asserts/Memor website images/IMG_9888.JPG",
    "Asserts/Memor website images/IMG_9889.JPG",
    "Asserts/Memor website images/IMG_9894.JPG",
    "Asserts/Memor website images/IMG_9979.JPG",
    "Asserts/Memor website images/IMG-20240117-WA0025.jpeg",
];
