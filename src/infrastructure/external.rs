//! Resources injected into `<head>` for the lifetime of a view.
//!
//! Everything added through [`ScopedExternalResources`] is removed again on
//! [`ScopedExternalResources::release`] or drop, including a pending script
//! `onload` callback.

use crate::config::TradingViewOptions;
use crate::domain::errors::{AppError, AppResult};
use crate::domain::logging::LogComponent;
use crate::{log_debug, log_warn};
use js_sys::{Array, Function, JSON, Reflect};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlScriptElement};

const COMPONENT: LogComponent = LogComponent::Infrastructure("ExternalResources");

fn browser_err(context: &str, err: JsValue) -> AppError {
    AppError::Browser(format!("{context}: {err:?}"))
}

fn document() -> AppResult<Document> {
    web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| AppError::Browser("document not available".to_string()))
}

#[derive(Default)]
pub struct ScopedExternalResources {
    nodes: Vec<Element>,
    onload: Vec<(HtmlScriptElement, Closure<dyn FnMut()>)>,
}

impl ScopedExternalResources {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of injected nodes still attached
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn inject_stylesheet(&mut self, css: &str) -> AppResult<()> {
        let document = document()?;
        let head = document.head().ok_or_else(|| AppError::Browser("<head> missing".to_string()))?;
        let style = document.create_element("style").map_err(|e| browser_err("create <style>", e))?;
        style.set_text_content(Some(css));
        head.append_child(&style).map_err(|e| browser_err("append <style>", e))?;
        self.nodes.push(style);
        Ok(())
    }

    /// Append an async `<script src>`; `on_load` runs once it has loaded
    pub fn inject_script(&mut self, src: &str, on_load: impl FnOnce() + 'static) -> AppResult<()> {
        let document = document()?;
        let head = document.head().ok_or_else(|| AppError::Browser("<head> missing".to_string()))?;
        let script: HtmlScriptElement = document
            .create_element("script")
            .map_err(|e| browser_err("create <script>", e))?
            .dyn_into()
            .map_err(|_| AppError::Browser("<script> cast failed".to_string()))?;
        script.set_src(src);
        script.set_async(true);

        let callback = Closure::once(on_load);
        script.set_onload(Some(callback.as_ref().unchecked_ref()));
        head.append_child(&script).map_err(|e| browser_err("append <script>", e))?;

        log_debug!(COMPONENT, "injected script {src}");
        self.nodes.push(script.clone().unchecked_into());
        self.onload.push((script, callback));
        Ok(())
    }

    pub fn release(&mut self) {
        for (script, _callback) in self.onload.drain(..) {
            script.set_onload(None);
        }
        let count = self.nodes.len();
        for node in self.nodes.drain(..) {
            node.remove();
        }
        if count > 0 {
            log_debug!(COMPONENT, "released {count} injected nodes");
        }
    }
}

impl Drop for ScopedExternalResources {
    fn drop(&mut self) {
        self.release();
    }
}

/// Construct `new TradingView.widget(options)`; needs `tv.js` loaded
pub fn mount_trading_view(options: &TradingViewOptions) -> AppResult<()> {
    let window = web_sys::window().ok_or_else(|| AppError::Browser("window not available".to_string()))?;
    let namespace = Reflect::get(&window, &JsValue::from_str("TradingView"))
        .map_err(|e| browser_err("TradingView lookup", e))?;
    if namespace.is_undefined() {
        log_warn!(COMPONENT, "TradingView namespace missing after script load");
        return Err(AppError::Browser("TradingView not loaded".to_string()));
    }
    let constructor: Function = Reflect::get(&namespace, &JsValue::from_str("widget"))
        .map_err(|e| browser_err("TradingView.widget lookup", e))?
        .dyn_into()
        .map_err(|_| AppError::Browser("TradingView.widget is not a constructor".to_string()))?;

    let json = serde_json::to_string(options).map_err(|e| AppError::Config(e.to_string()))?;
    let config = JSON::parse(&json).map_err(|e| browser_err("widget options", e))?;
    Reflect::construct(&constructor, &Array::of1(&config)).map_err(|e| browser_err("new TradingView.widget", e))?;
    Ok(())
}
