//! DOM side of the demo: context lookup, alert, key listener, frame loop.

use std::cell::RefCell;
use std::rc::Rc;

use glyph_spin_core::render::{FrameRenderer, GpuContext};
use glyph_spin_core::transform::aspect_ratio;
use glyph_spin_core::{setup, Demo, DemoError, Host};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{HtmlCanvasElement, KeyboardEvent, WebGl2RenderingContext, Window};

use crate::parse_config;

type Shared = Rc<RefCell<Demo<GpuContext>>>;

fn to_js(err: DemoError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// [`Host`] backed by the page's `window`.
///
/// Keeps the canvas it resolved so the frame loop can read its live size.
pub struct BrowserHost {
    window: Window,
    canvas: Option<HtmlCanvasElement>,
}

impl BrowserHost {
    pub fn new(window: Window) -> Self {
        Self {
            window,
            canvas: None,
        }
    }
}

impl Host for BrowserHost {
    type Gpu = GpuContext;

    fn acquire_context(&mut self, canvas_id: &str) -> Result<GpuContext, DemoError> {
        let document = self
            .window
            .document()
            .ok_or_else(|| DemoError::Host("window has no document".into()))?;
        let canvas = document
            .get_element_by_id(canvas_id)
            .ok_or_else(|| DemoError::Host(format!("no element with id '{canvas_id}'")))?
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| DemoError::Host(format!("element '{canvas_id}' is not a canvas")))?;

        let webgl2 = canvas
            .get_context("webgl2")
            .map_err(|e| DemoError::ContextUnavailable(format!("{e:?}")))?
            .ok_or_else(|| DemoError::ContextUnavailable("canvas returned no webgl2 context".into()))?
            .dyn_into::<WebGl2RenderingContext>()
            .map_err(|_| DemoError::ContextUnavailable("context is not WebGL2".into()))?;

        self.canvas = Some(canvas);
        Ok(GpuContext::new(glow::Context::from_webgl2_context(webgl2)))
    }

    fn alert(&mut self, message: &str) {
        if let Err(e) = self.window.alert_with_message(message) {
            log::error!("alert failed: {e:?}");
        }
    }
}

fn init_logging() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Debug).is_err() {
        log::debug!("logger already installed");
    }
}

/// Sets up the demo and starts the frame loop.
///
/// `config_json` is an optional JSON object overriding any of the
/// defaults (canvas id, fov, rotation step, toggle key, colors).
///
/// # Errors
///
/// Returns the setup error as a string. A missing WebGL2 context has
/// already been alerted by the time this returns.
#[wasm_bindgen]
pub fn start(config_json: Option<String>) -> Result<(), JsValue> {
    init_logging();

    let config = parse_config(config_json.as_deref()).map_err(to_js)?;
    let window = web_sys::window().ok_or_else(|| to_js(DemoError::Host("no window".into())))?;

    let mut host = BrowserHost::new(window.clone());
    let demo = setup(&mut host, config).map_err(to_js)?;
    let canvas = host
        .canvas
        .take()
        .ok_or_else(|| to_js(DemoError::Host("canvas was not retained".into())))?;
    let renderer = FrameRenderer::new(&demo).map_err(to_js)?;

    let demo: Shared = Rc::new(RefCell::new(demo));
    install_key_listener(&window, demo.clone())?;
    run_frame_loop(window, canvas, demo, renderer)
}

/// Listens for key presses on the document for the rest of the page's life.
fn install_key_listener(window: &Window, demo: Shared) -> Result<(), JsValue> {
    let document = window
        .document()
        .ok_or_else(|| to_js(DemoError::Host("window has no document".into())))?;

    let keydown = Closure::<dyn FnMut(KeyboardEvent)>::new(move |ev: KeyboardEvent| {
        demo.borrow_mut().handle_key(&ev.code());
    });
    document.add_event_listener_with_callback("keydown", keydown.as_ref().unchecked_ref())?;
    // Never removed.
    keydown.forget();
    Ok(())
}

fn request_frame(window: &Window, callback: &Closure<dyn FnMut()>) -> Result<i32, JsValue> {
    window.request_animation_frame(callback.as_ref().unchecked_ref())
}

/// Ticks and draws once per display refresh, forever.
///
/// The callback holds a reference to itself so it can re-arm; the cycle
/// lives until the page is torn down.
fn run_frame_loop(
    window: Window,
    canvas: HtmlCanvasElement,
    demo: Shared,
    renderer: FrameRenderer,
) -> Result<(), JsValue> {
    let f: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let g = f.clone();
    let loop_window = window.clone();

    *g.borrow_mut() = Some(Closure::<dyn FnMut()>::new(move || {
        let aspect = aspect_ratio(
            f64::from(canvas.client_width()),
            f64::from(canvas.client_height()),
        );
        {
            let mut demo = demo.borrow_mut();
            let frame = demo.tick(aspect);
            renderer.draw(demo.gpu(), &frame);
        }

        if let Some(callback) = f.borrow().as_ref() {
            if let Err(e) = request_frame(&loop_window, callback) {
                log::error!("requestAnimationFrame failed: {e:?}");
            }
        }
    }));

    if let Some(callback) = g.borrow().as_ref() {
        request_frame(&window, callback)?;
    }
    log::info!("frame loop started");
    Ok(())
}
