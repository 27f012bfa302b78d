//! Stylesheet insertion.

use crate::prelude::*;

use crate::Error;
use crate::Result;

use web_sys::Document;
use web_sys::Element;
use web_sys::HtmlStyleElement;



/// Append a `<style>` element with the given CSS to the document's head, or to its body or root
/// element in documents without a head.
pub fn insert_css(document:&Document, css:&str) -> Result<HtmlStyleElement> {
    let container = container(document)?;
    let style     = document.create_element("style")?;
    let style     = style.dyn_into::<HtmlStyleElement>().map_err(|_| Error::TypeMismatch("HtmlStyleElement"))?;
    style.set_type("text/css");
    style.set_text_content(Some(css));
    container.append_child(&style)?;
    Ok(style)
}

/// The first of `head`, `body` and `documentElement` present in the document.
fn container(document:&Document) -> Result<Element> {
    let head = || document.head().map(|head| head.unchecked_into::<Element>());
    let body = || document.body().map(|body| body.unchecked_into::<Element>());
    head().or_else(body).or_else(|| document.document_element()).ok_or(Error::MissingContainer)
}
