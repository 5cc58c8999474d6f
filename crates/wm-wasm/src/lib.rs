//! WASM bridge for the Wardley map editor.
//!
//! Compiled via `wasm-pack build --target web`. The JS shell owns the map
//! text and the undo history; it passes the current text into every call
//! and receives committed text through its `mutateMapText` callback.

pub mod request;

use request::{parse_corner, parse_element, parse_mutation};
use wasm_bindgen::prelude::*;
use wm_core::format::EditConfig;
use wm_core::position::{MapPosition, Viewport};
use wm_core::Vec2;
use wm_editor::input::{InputEvent, Modifiers};
use wm_editor::sync::{
    MapElement, MapMutation, MapTextSink, SyncError, SyncOutcome, apply_mutation, dispatch,
};
use wm_editor::tools::{LabelTool, MoveTool, RegionTool, Tool};

/// The gesture currently in progress.
enum ActiveTool {
    Move(MoveTool),
    Label(LabelTool),
    Region(RegionTool),
}

impl ActiveTool {
    fn tool(&mut self) -> &mut dyn Tool {
        match self {
            Self::Move(tool) => tool,
            Self::Label(tool) => tool,
            Self::Region(tool) => tool,
        }
    }
}

/// Forwards committed text to the shell's `mutateMapText` callback.
struct JsSink<'a>(&'a js_sys::Function);

impl MapTextSink for JsSink<'_> {
    fn mutate_map_text(&mut self, text: String) {
        if let Err(err) = self.0.call1(&JsValue::NULL, &JsValue::from_str(&text)) {
            web_sys::console::error_2(&"mutateMapText failed:".into(), &err);
        }
    }
}

/// The WASM-facing editor controller.
#[wasm_bindgen]
pub struct MapEditor {
    viewport: Viewport,
    config: EditConfig,
    mutate_map_text: js_sys::Function,
    active: Option<ActiveTool>,
}

#[wasm_bindgen]
impl MapEditor {
    /// Create an editor for a canvas of the given size.
    #[wasm_bindgen(constructor)]
    pub fn new(width: f64, height: f64, mutate_map_text: js_sys::Function) -> Self {
        console_setup();
        Self {
            viewport: Viewport { width, height },
            config: EditConfig::default(),
            mutate_map_text,
            active: None,
        }
    }

    /// Resize the canvas. Affects gestures started afterwards.
    pub fn resize(&mut self, width: f64, height: f64) {
        self.viewport = Viewport { width, height };
    }

    /// Replace the edit configuration from JSON; missing keys keep defaults.
    /// Returns `false` on malformed JSON.
    pub fn set_config(&mut self, json: &str) -> bool {
        match serde_json::from_str::<EditConfig>(json) {
            Ok(config) => {
                self.config = config;
                true
            }
            Err(err) => {
                log::warn!("ignoring edit config: {err}");
                false
            }
        }
    }

    /// Apply a JSON mutation request to `map_text`.
    /// Returns `true` when `mutateMapText` was called.
    pub fn apply(&self, map_text: &str, request: &str) -> bool {
        match parse_mutation(request, self.viewport) {
            Ok(mutation) => self.commit(map_text, &mutation),
            Err(err) => {
                log::warn!("{err}");
                false
            }
        }
    }

    /// The text a request would produce, without committing it.
    /// Returns `None` when nothing would change or the request fails.
    pub fn preview(&self, map_text: &str, request: &str) -> Option<String> {
        let mutation = parse_mutation(request, self.viewport).ok()?;
        match apply_mutation(map_text, &mutation, &self.config) {
            Ok(SyncOutcome::Changed(text)) => Some(text),
            Ok(SyncOutcome::Unchanged) | Err(_) => None,
        }
    }

    // ─── Gestures ────────────────────────────────────────────────────────

    /// Start dragging an element currently drawn at `(maturity, visibility)`.
    pub fn begin_move(&mut self, element: &str, maturity: f64, visibility: f64) -> bool {
        self.begin(element, |element, viewport, config| {
            ActiveTool::Move(MoveTool::new(
                element,
                MapPosition::new(maturity, visibility),
                viewport,
                config,
            ))
        })
    }

    /// Start dragging an element's label from its current pixel offset.
    pub fn begin_label(&mut self, element: &str, dx: f64, dy: f64) -> bool {
        self.begin(element, |element, _, _| {
            ActiveTool::Label(LabelTool::new(element, Vec2::new(dx, dy)))
        })
    }

    /// Start drawing a region from scratch.
    pub fn begin_region_draw(&mut self, element: &str) -> bool {
        self.begin(element, |element, viewport, config| {
            ActiveTool::Region(RegionTool::draw(element, viewport, config))
        })
    }

    /// Start resizing the region `[v_top, m_left, v_bottom, m_right]` by one
    /// of its corners (`topLeft`, `topRight`, `bottomLeft`, `bottomRight`).
    #[allow(clippy::too_many_arguments)]
    pub fn begin_region_resize(
        &mut self,
        element: &str,
        v_top: f64,
        m_left: f64,
        v_bottom: f64,
        m_right: f64,
        corner: &str,
    ) -> bool {
        let corner = match parse_corner(corner) {
            Ok(corner) => corner,
            Err(err) => {
                log::warn!("{err}");
                return false;
            }
        };
        self.begin(element, |element, viewport, config| {
            ActiveTool::Region(RegionTool::resize(
                element,
                MapPosition::new(m_left, v_top),
                MapPosition::new(m_right, v_bottom),
                corner,
                viewport,
                config,
            ))
        })
    }

    pub fn handle_pointer_down(&mut self, x: f64, y: f64, shift: bool) {
        self.feed(&InputEvent::from_pointer_down(x, y, modifiers(shift)));
    }

    pub fn handle_pointer_move(&mut self, x: f64, y: f64, shift: bool) {
        self.feed(&InputEvent::from_pointer_move(x, y, modifiers(shift)));
    }

    /// Finish the gesture and commit its mutation against `map_text`.
    /// Returns `true` when `mutateMapText` was called.
    pub fn handle_pointer_up(&mut self, map_text: &str, x: f64, y: f64, shift: bool) -> bool {
        let mutation = self.feed(&InputEvent::from_pointer_up(x, y, modifiers(shift)));
        self.active = None;
        match mutation {
            Some(mutation) => self.commit(map_text, &mutation),
            None => false,
        }
    }

    /// Abort the gesture (Escape). Nothing is committed.
    pub fn cancel(&mut self) {
        self.feed(&InputEvent::Cancel);
        self.active = None;
    }

    /// Live gesture preview as JSON, or an empty string when there is
    /// nothing to draw. Regions below the minimum size have no preview.
    pub fn gesture_preview(&self) -> String {
        let value = match &self.active {
            Some(ActiveTool::Move(tool)) => tool.preview().map(|p| {
                serde_json::json!({ "maturity": p.maturity, "visibility": p.visibility })
            }),
            Some(ActiveTool::Label(tool)) => tool
                .preview()
                .map(|offset| serde_json::json!({ "dx": offset.x, "dy": offset.y })),
            Some(ActiveTool::Region(tool)) => tool.preview().map(|rect| {
                serde_json::json!({
                    "x": rect.x0,
                    "y": rect.y0,
                    "width": rect.width(),
                    "height": rect.height(),
                })
            }),
            None => None,
        };
        value.map(|v| v.to_string()).unwrap_or_default()
    }
}

impl MapEditor {
    fn begin(
        &mut self,
        element: &str,
        make: impl FnOnce(MapElement, Viewport, &EditConfig) -> ActiveTool,
    ) -> bool {
        match parse_element(element) {
            Ok(element) => {
                self.active = Some(make(element, self.viewport, &self.config));
                true
            }
            Err(err) => {
                log::warn!("{err}");
                self.active = None;
                false
            }
        }
    }

    fn feed(&mut self, event: &InputEvent) -> Option<MapMutation> {
        self.active.as_mut()?.tool().handle(event)
    }

    fn commit(&self, map_text: &str, mutation: &MapMutation) -> bool {
        let mut sink = JsSink(&self.mutate_map_text);
        match dispatch(map_text, mutation, &self.config, &mut sink) {
            Ok(committed) => committed,
            Err(err) => {
                report(&err);
                false
            }
        }
    }
}

fn modifiers(shift: bool) -> Modifiers {
    if shift { Modifiers::SHIFT } else { Modifiers::NONE }
}

/// Surface user-visible failures as a blocking alert.
fn report(err: &SyncError) {
    if !err.is_user_visible() {
        return;
    }
    if let Some(window) = web_sys::window()
        && window.alert_with_message(&err.to_string()).is_err()
    {
        log::error!("alert failed: {err}");
    }
}

// ─── Console logging and panic hook ──────────────────────────────────────

#[cfg(target_arch = "wasm32")]
struct ConsoleLogger;

#[cfg(target_arch = "wasm32")]
impl log::Log for ConsoleLogger {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        metadata.level() <= log::Level::Debug
    }

    fn log(&self, record: &log::Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let msg = JsValue::from_str(&format!("[{}] {}", record.target(), record.args()));
        match record.level() {
            log::Level::Error => web_sys::console::error_1(&msg),
            log::Level::Warn => web_sys::console::warn_1(&msg),
            _ => web_sys::console::debug_1(&msg),
        }
    }

    fn flush(&self) {}
}

fn console_setup() {
    #[cfg(target_arch = "wasm32")]
    {
        use std::sync::Once;
        static SETUP: Once = Once::new();
        static LOGGER: ConsoleLogger = ConsoleLogger;
        SETUP.call_once(|| {
            std::panic::set_hook(Box::new(|info| {
                let msg = format!("Map editor WASM panic: {info}");
                web_sys::console::error_1(&msg.into());
            }));
            if log::set_logger(&LOGGER).is_ok() {
                log::set_max_level(log::LevelFilter::Debug);
            }
        });
    }
}
