//! Interest form: submits through the page's EmailJS client and celebrates
//! with confetti on success.

use crate::confetti::Confetti;
use crate::constants::*;
use crate::dom;
use anyhow::anyhow;
use std::rc::Rc;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

const EMAILJS_GLOBAL: &str = "emailjs";
const EMAILJS_PUBLIC_KEY: &str = "zCa56oiSeEWI9Kv82";

/// Fields sent to the mail template.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Submission {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl Submission {
    fn to_params(&self) -> anyhow::Result<js_sys::Object> {
        let message = if self.message.trim().is_empty() {
            EMPTY_MESSAGE
        } else {
            self.message.as_str()
        };
        let params = js_sys::Object::new();
        for (key, value) in [
            ("from_name", self.name.as_str()),
            ("from_email", self.email.as_str()),
            ("message", message),
            ("to_email", EMAILJS_RECIPIENTS),
            ("reply_to", self.email.as_str()),
        ] {
            js_sys::Reflect::set(&params, &JsValue::from_str(key), &JsValue::from_str(value))
                .map_err(|e| anyhow!("param {}: {:?}", key, e))?;
        }
        Ok(params)
    }
}

fn emailjs() -> anyhow::Result<JsValue> {
    let global = js_sys::global();
    let client = js_sys::Reflect::get(&global, &JsValue::from_str(EMAILJS_GLOBAL))
        .map_err(|e| anyhow!("{:?}", e))?;
    if client.is_undefined() || client.is_null() {
        return Err(anyhow!("EmailJS client not loaded"));
    }
    Ok(client)
}

fn method(client: &JsValue, name: &str) -> anyhow::Result<js_sys::Function> {
    js_sys::Reflect::get(client, &JsValue::from_str(name))
        .map_err(|e| anyhow!("{:?}", e))?
        .dyn_into::<js_sys::Function>()
        .map_err(|_| anyhow!("emailjs.{} is not a function", name))
}

fn init_client() -> anyhow::Result<()> {
    let client = emailjs()?;
    method(&client, "init")?
        .call1(&client, &JsValue::from_str(EMAILJS_PUBLIC_KEY))
        .map_err(|e| anyhow!("emailjs.init failed: {:?}", e))?;
    Ok(())
}

async fn send(submission: &Submission) -> anyhow::Result<()> {
    let client = emailjs()?;
    let promise = method(&client, "send")?
        .call3(
            &client,
            &JsValue::from_str(EMAILJS_SERVICE_ID),
            &JsValue::from_str(EMAILJS_TEMPLATE_ID),
            &submission.to_params()?,
        )
        .map_err(|e| anyhow!("emailjs.send threw: {:?}", e))?
        .dyn_into::<js_sys::Promise>()
        .map_err(|_| anyhow!("emailjs.send did not return a promise"))?;
    JsFuture::from(promise)
        .await
        .map_err(|e| anyhow!("emailjs.send rejected: {:?}", e))?;
    Ok(())
}

#[derive(Clone)]
struct FormParts {
    form: web::HtmlFormElement,
    success: Option<web::HtmlElement>,
    name: web::HtmlInputElement,
    email: web::HtmlInputElement,
    message: web::HtmlTextAreaElement,
    submit: Option<web::HtmlButtonElement>,
}

impl FormParts {
    fn find(document: &web::Document) -> anyhow::Result<Self> {
        fn by_id<T: JsCast>(document: &web::Document, id: &str) -> anyhow::Result<T> {
            document
                .get_element_by_id(id)
                .ok_or_else(|| anyhow!("missing #{}", id))?
                .dyn_into::<T>()
                .map_err(|_| anyhow!("#{} has an unexpected element type", id))
        }
        let form: web::HtmlFormElement = by_id(document, FORM_ID)?;
        let submit = form
            .query_selector(SUBMIT_SELECTOR)
            .ok()
            .flatten()
            .and_then(|el| el.dyn_into::<web::HtmlButtonElement>().ok());
        Ok(Self {
            success: by_id(document, SUCCESS_MESSAGE_ID).ok(),
            name: by_id(document, FORM_NAME_ID)?,
            email: by_id(document, FORM_EMAIL_ID)?,
            message: by_id(document, FORM_MESSAGE_ID)?,
            submit,
            form,
        })
    }

    fn submission(&self) -> Submission {
        Submission {
            name: self.name.value(),
            email: self.email.value(),
            message: self.message.value(),
        }
    }

    fn set_sending(&self, label: &str, sending: bool) {
        if let Some(button) = &self.submit {
            button.set_text_content(Some(label));
            button.set_disabled(sending);
        }
    }

    fn show_success(&self) {
        dom::set_style(&self.form, "display", "none");
        if let Some(success) = &self.success {
            _ = success.class_list().add_1(SHOW_CLASS);
        }
    }

    fn reset(&self, label: &str) {
        self.form.reset();
        dom::set_style(&self.form, "display", "block");
        if let Some(success) = &self.success {
            _ = success.class_list().remove_1(SHOW_CLASS);
        }
        self.set_sending(label, false);
    }
}

/// Hook the interest form's submit event. Missing pieces are logged and the
/// form is left to the browser.
pub fn wire_form(document: &web::Document, confetti: Option<Rc<Confetti>>) {
    let parts = match FormParts::find(document) {
        Ok(parts) => parts,
        Err(e) => {
            log::warn!("[form] not wired: {:?}", e);
            return;
        }
    };
    if let Err(e) = init_client() {
        log::warn!("[form] {:?}", e);
    }

    let form = parts.form.clone();
    dom::add_listener(&form, "submit", move |ev| {
        ev.prevent_default();
        let parts = parts.clone();
        let confetti = confetti.clone();
        spawn_local(async move {
            let label = parts
                .submit
                .as_ref()
                .and_then(|b| b.text_content())
                .unwrap_or_default();
            parts.set_sending(SENDING_LABEL, true);
            match send(&parts.submission()).await {
                Ok(()) => {
                    log::info!("[form] message sent");
                    parts.show_success();
                    if let Some(confetti) = &confetti {
                        confetti.fire();
                    }
                    dom::set_timeout(FORM_RESET_MS, move || parts.reset(&label));
                }
                Err(e) => {
                    log::error!("[form] {:?}", e);
                    if let Some(window) = web::window() {
                        _ = window.alert_with_message(SEND_FAILED_ALERT);
                    }
                    parts.set_sending(&label, false);
                }
            }
        });
    });
}

