use crate::core::Viewport;
use anyhow::anyhow;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Current inner size of the window; zero when it cannot be read.
pub fn viewport() -> Viewport {
    let Some(w) = web::window() else {
        return Viewport::default();
    };
    let width = w.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    let height = w.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    Viewport::new(width as f32, height as f32)
}

pub fn create(
    document: &web::Document,
    tag: &str,
    class: &str,
) -> anyhow::Result<web::HtmlElement> {
    let el = document
        .create_element(tag)
        .map_err(|e| anyhow!("create <{}>: {:?}", tag, e))?
        .dyn_into::<web::HtmlElement>()
        .map_err(|e| anyhow!("<{}> is not an HtmlElement: {:?}", tag, e))?;
    el.set_class_name(class);
    Ok(el)
}

pub fn text(
    document: &web::Document,
    tag: &str,
    class: &str,
    content: &str,
) -> anyhow::Result<web::HtmlElement> {
    let el = create(document, tag, class)?;
    el.set_text_content(Some(content));
    Ok(el)
}

/// `<img>`; an empty `alt` marks it decorative.
pub fn image(
    document: &web::Document,
    src: &str,
    alt: &str,
    class: &str,
) -> anyhow::Result<web::HtmlElement> {
    let img = web::HtmlImageElement::new().map_err(|e| anyhow!("create <img>: {:?}", e))?;
    img.set_src(src);
    img.set_alt(alt);
    img.set_class_name(class);
    if alt.is_empty() {
        _ = img.set_attribute("aria-hidden", "true");
    }
    Ok(img.unchecked_into::<web::HtmlElement>())
}

pub fn append(parent: &web::Node, child: &web::Node) -> anyhow::Result<()> {
    parent
        .append_child(child)
        .map(|_| ())
        .map_err(|e| anyhow!("append_child: {:?}", e))
}

#[inline]
pub fn set_style(el: &web::HtmlElement, prop: &str, value: &str) {
    _ = el.style().set_property(prop, value);
}

#[inline]
pub fn set_px(el: &web::HtmlElement, prop: &str, px: f32) {
    set_style(el, prop, &format!("{:.2}px", px));
}

#[inline]
pub fn set_opacity(el: &web::HtmlElement, opacity: f32) {
    set_style(el, "opacity", &format!("{:.3}", opacity.clamp(0.0, 1.0)));
}

/// Insert (once) a `<style>` element carrying the card's rules.
pub fn inject_stylesheet(document: &web::Document, id: &str, css: &str) -> anyhow::Result<()> {
    if document.get_element_by_id(id).is_some() {
        return Ok(());
    }
    let style = document
        .create_element("style")
        .map_err(|e| anyhow!("create <style>: {:?}", e))?;
    style.set_id(id);
    style.set_text_content(Some(css));
    let head = document.head().ok_or_else(|| anyhow!("document has no <head>"))?;
    append(&head, &style)
}

/// Reader for `data-<key>` attributes on `el`.
pub fn data_lookup(el: &web::Element) -> impl Fn(&str) -> Option<String> + '_ {
    move |key: &str| el.get_attribute(&format!("data-{}", key))
}
