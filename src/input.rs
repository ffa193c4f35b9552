use glam::Vec2;
use web_sys as web;

// ---------------- Pointer helpers ----------------
#[inline]
pub fn client_to_canvas_px(client_x: f32, client_y: f32, canvas: &web::HtmlCanvasElement) -> Vec2 {
    let rect = canvas.get_bounding_client_rect();
    let x_css = client_x - rect.left() as f32;
    let y_css = client_y - rect.top() as f32;
    let w = rect.width() as f32;
    let h = rect.height() as f32;
    if w > 0.0 && h > 0.0 {
        Vec2::new(
            x_css / w * canvas.width() as f32,
            y_css / h * canvas.height() as f32,
        )
    } else {
        Vec2::new(x_css, y_css)
    }
}

#[inline]
pub fn mouse_canvas_px(ev: &web::MouseEvent, canvas: &web::HtmlCanvasElement) -> Vec2 {
    client_to_canvas_px(ev.client_x() as f32, ev.client_y() as f32, canvas)
}

/// First active touch in canvas pixels, if any.
#[inline]
pub fn touch_canvas_px(ev: &web::TouchEvent, canvas: &web::HtmlCanvasElement) -> Option<Vec2> {
    let touch = ev.touches().get(0)?;
    Some(client_to_canvas_px(
        touch.client_x() as f32,
        touch.client_y() as f32,
        canvas,
    ))
}
