use crate::lightbox::LightboxAction;

/// Keys honoured while the lightbox is open.
#[inline]
pub fn lightbox_action_for_key(key: &str) -> Option<LightboxAction> {
    match key {
        "Escape" | "Esc" => Some(LightboxAction::Close),
        "ArrowLeft" | "Left" => Some(LightboxAction::Prev),
        "ArrowRight" | "Right" => Some(LightboxAction::Next),
        _ => None,
    }
}
