// Copyright 2026 the Teahouse Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Contact form: validation rendering and the success overlay.
//!
//! Submission never leaves the page. Every submit is intercepted, the present
//! fields are read into a [`FormInput`], and the [`FormReport`] is rendered:
//! inline errors for failed fields, or the overlay plus a reset on success.
//!
//! [`FormReport`]: teahouse_core::form::FormReport

use teahouse_backend_web::DomError;
use teahouse_backend_web::dom::{Scope as _, listen};
use teahouse_backend_web::timer::set_timeout;
use teahouse_core::config::SiteConfig;
use teahouse_core::form::{Field, FieldOutcome, FormInput, validate_form};
use teahouse_core::trace::{Feature, FieldEvent, SubmissionEvent};
use wasm_bindgen::JsCast as _;
use web_sys::{
    Document, Element, HtmlElement, HtmlFormElement, HtmlInputElement, HtmlTextAreaElement,
};

use crate::diag;

const ERROR_CLASS: &str = "error-message";
const ERROR_SELECTOR: &str = ".error-message";
const ERROR_COLOR: &str = "#e74c3c";
const OVERLAY_CLASS: &str = "success-message";
const KEYFRAMES_ID: &str = "teahouse-fade-in-scale";

const OVERLAY_STYLE: &str = "position: fixed; top: 50%; left: 50%; \
    transform: translate(-50%, -50%); \
    background: linear-gradient(135deg, #8BC34A, #689F38); color: white; \
    padding: 30px 50px; border-radius: 16px; \
    box-shadow: 0 10px 40px rgba(0,0,0,0.3); z-index: 9999; \
    text-align: center; animation: fadeInScale 0.3s ease;";

const OVERLAY_HTML: &str = "\
    <div style=\"font-size: 3rem; margin-bottom: 15px;\">✓</div>\
    <div style=\"font-size: 1.2rem; font-weight: 600;\">提交成功！</div>\
    <div style=\"font-size: 0.9rem; margin-top: 10px; opacity: 0.9;\">感谢您的留言，我们会尽快回复您。</div>";

const KEYFRAMES: &str = "@keyframes fadeInScale { \
    from { opacity: 0; transform: translate(-50%, -50%) scale(0.8); } \
    to { opacity: 1; transform: translate(-50%, -50%) scale(1); } }";

/// A field's control.
enum Control {
    Input(HtmlInputElement),
    TextArea(HtmlTextAreaElement),
}

impl Control {
    fn find(form: &HtmlFormElement, field: Field) -> Result<Option<Self>, DomError> {
        Ok(match field {
            Field::Name | Field::Email => form
                .query_as::<HtmlInputElement>(field.selector())?
                .map(Self::Input),
            Field::Message => form
                .query_as::<HtmlTextAreaElement>(field.selector())?
                .map(Self::TextArea),
        })
    }

    fn value(&self) -> String {
        match self {
            Self::Input(el) => el.value(),
            Self::TextArea(el) => el.value(),
        }
    }

    fn element(&self) -> &HtmlElement {
        match self {
            Self::Input(el) => el,
            Self::TextArea(el) => el,
        }
    }
}

pub(crate) fn init(config: &SiteConfig, document: &Document) -> Result<(), DomError> {
    let selector = config.selectors.contact_form;
    let Some(form) = document.query_as::<HtmlFormElement>(selector)? else {
        diag::inert(Feature::ContactForm, selector);
        return Ok(());
    };
    let config = *config;
    let doc = document.clone();
    let target = form.clone();
    listen(&form, "submit", move |event| {
        event.prevent_default();
        diag::check(Feature::ContactForm, submit(&config, &doc, &target));
    })
}

fn submit(
    config: &SiteConfig,
    document: &Document,
    form: &HtmlFormElement,
) -> Result<(), DomError> {
    let [name, email, message] = Field::ALL.map(|field| Control::find(form, field));
    let controls = [name?, email?, message?];
    let values = controls.each_ref().map(|c| c.as_ref().map(Control::value));
    let input = FormInput {
        name: values[0].as_deref(),
        email: values[1].as_deref(),
        message: values[2].as_deref(),
    };
    let report = validate_form(&input);

    let mut invalid_fields = 0;
    for ((field, outcome), control) in report.outcomes().iter().zip(&controls) {
        let (Some(outcome), Some(control)) = (outcome, control) else {
            continue;
        };
        match outcome {
            FieldOutcome::Valid => clear_error(control.element(), config)?,
            FieldOutcome::Invalid(message) => {
                invalid_fields += 1;
                show_error(document, control.element(), config, message)?;
            }
        }
        diag::trace(|t| {
            t.field(&FieldEvent {
                field: *field,
                valid: outcome.is_valid(),
            });
        });
    }

    let success = report.is_success();
    diag::trace(|t| {
        t.submission(&SubmissionEvent {
            success,
            invalid_fields,
        });
    });
    if success {
        show_success(config, document)?;
        form.reset();
    }
    Ok(())
}

fn field_group(control: &HtmlElement, config: &SiteConfig) -> Result<Option<Element>, DomError> {
    Ok(control.closest(config.selectors.form_group)?)
}

fn remove_existing_error(group: &Element) -> Result<(), DomError> {
    if let Some(existing) = group.query(ERROR_SELECTOR)? {
        existing.remove();
    }
    Ok(())
}

fn show_error(
    document: &Document,
    control: &HtmlElement,
    config: &SiteConfig,
    message: &str,
) -> Result<(), DomError> {
    control.style().set_property("border-color", ERROR_COLOR)?;
    let Some(group) = field_group(control, config)? else {
        return Ok(());
    };
    remove_existing_error(&group)?;

    let error: HtmlElement = document.create_element("div")?.unchecked_into();
    error.set_class_name(ERROR_CLASS);
    let style = error.style();
    style.set_property("color", ERROR_COLOR)?;
    style.set_property("font-size", "0.85rem")?;
    style.set_property("margin-top", "5px")?;
    error.set_text_content(Some(message));
    group.append_child(&error)?;
    Ok(())
}

fn clear_error(control: &HtmlElement, config: &SiteConfig) -> Result<(), DomError> {
    if let Some(group) = field_group(control, config)? {
        remove_existing_error(&group)?;
    }
    control.style().set_property("border-color", "")?;
    Ok(())
}

/// Adds the overlay's keyframes to `<head>` unless an earlier submission did.
fn ensure_keyframes(document: &Document) -> Result<(), DomError> {
    if document.get_element_by_id(KEYFRAMES_ID).is_some() {
        return Ok(());
    }
    let Some(head) = document.head() else {
        return Ok(());
    };
    let style = document.create_element("style")?;
    style.set_id(KEYFRAMES_ID);
    style.set_text_content(Some(KEYFRAMES));
    head.append_child(&style)?;
    Ok(())
}

fn show_success(config: &SiteConfig, document: &Document) -> Result<(), DomError> {
    let body = document.body().ok_or(DomError::NoBody)?;
    ensure_keyframes(document)?;

    let overlay: HtmlElement = document.create_element("div")?.unchecked_into();
    overlay.set_class_name(OVERLAY_CLASS);
    overlay.style().set_css_text(OVERLAY_STYLE);
    overlay.set_inner_html(OVERLAY_HTML);
    body.append_child(&overlay)?;

    let fade_out = config.success_fade_out;
    set_timeout(config.success_display, move || {
        // Play the entrance backwards, then drop the node.
        let reverse = overlay
            .style()
            .set_property("animation", "fadeInScale 0.3s ease reverse");
        diag::check(Feature::ContactForm, reverse.map_err(DomError::from));
        let result = set_timeout(fade_out, move || overlay.remove());
        diag::check(Feature::ContactForm, result);
    })
}
