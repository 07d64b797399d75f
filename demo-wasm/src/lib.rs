use flagrig::{Axis, ContainerRect, FlagRig, Frame, Key, PointerId, RigConfig, RigObserver, Vec2};
use wasm_bindgen::prelude::*;

// ---- Console logging ----

/// Writes rig events to the browser console when enabled.
pub struct ConsoleObserver {
    enabled: bool,
}

impl ConsoleObserver {
    fn log(&self, msg: &str) {
        if self.enabled {
            web_sys::console::log_1(&JsValue::from_str(msg));
        }
    }
}

impl RigObserver<f64> for ConsoleObserver {
    fn on_bounds(&mut self, width: f64, height: f64, anchor: Vec2<f64>) {
        self.log(&format!(
            "flagrig: bounds {:.0}x{:.0}, anchor ({:.1}, {:.1})",
            width, height, anchor.x, anchor.y
        ));
    }

    fn on_drag_start(&mut self, pointer: PointerId) {
        self.log(&format!("flagrig: drag start pointer={}", pointer.0));
    }

    fn on_drag_end(&mut self, pointer: PointerId) {
        self.log(&format!("flagrig: drag end pointer={}", pointer.0));
    }

    fn on_impulse(&mut self, key: Key) {
        self.log(&format!("flagrig: impulse {:?}", key));
    }

    fn on_bounce(&mut self, axis: Axis, velocity: f64) {
        self.log(&format!("flagrig: bounce {:?} v={:.1}", axis, velocity));
    }
}

// ---- Flag rig ----

/// Browser handle for one mounted flag.
///
/// The page owns the `requestAnimationFrame` loop and the listeners; it
/// forwards events here and calls `free()` on unmount after cancelling both.
#[wasm_bindgen]
pub struct FlagRigDemo {
    rig: FlagRig<f64, ConsoleObserver>,
    last: Option<Frame<f64>>,
}

#[wasm_bindgen]
impl FlagRigDemo {
    #[wasm_bindgen(constructor)]
    pub fn new(reduced_motion: bool, now_ms: f64) -> Result<FlagRigDemo, JsValue> {
        let config = RigConfig::new().with_reduced_motion(reduced_motion);
        let rig = FlagRig::with_observer(config, now_ms, ConsoleObserver { enabled: false })
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(FlagRigDemo { rig, last: None })
    }

    /// Container `getBoundingClientRect()` values.
    ///
    /// Pointer events are converted with the origin from the last call, so the
    /// host must call this again whenever the container moves on screen: on
    /// scroll as well as on resize.
    pub fn resize(&mut self, left: f64, top: f64, width: f64, height: f64) {
        self.rig.resize(ContainerRect::new(left, top, width, height));
    }

    /// Returns true when the page should `preventDefault()` and capture the pointer.
    pub fn pointer_down(&mut self, pointer_id: i32, client_x: f64, client_y: f64) -> bool {
        self.rig
            .pointer_down(PointerId(pointer_id), Vec2::new(client_x, client_y))
            .is_consumed()
    }

    pub fn pointer_move(&mut self, pointer_id: i32, client_x: f64, client_y: f64) {
        self.rig.pointer_move(PointerId(pointer_id), Vec2::new(client_x, client_y));
    }

    pub fn pointer_up(&mut self, pointer_id: i32) {
        self.rig.pointer_up(PointerId(pointer_id));
    }

    pub fn pointer_cancel(&mut self, pointer_id: i32) {
        self.rig.pointer_cancel(PointerId(pointer_id));
    }

    /// Returns true when the page should `preventDefault()` (stops arrow/space scrolling).
    pub fn key_down(&mut self, key: &str) -> bool {
        self.rig.key_down(key).is_consumed()
    }

    pub fn set_reduced_motion(&mut self, reduced_motion: bool, now_ms: f64) {
        self.rig.set_reduced_motion(reduced_motion, now_ms);
    }

    pub fn set_debug(&mut self, enabled: bool) {
        self.rig.observer_mut().enabled = enabled;
    }

    /// Advance to `now_ms` (the rAF timestamp).
    ///
    /// Returns [tx, ty, rotation_deg, ax, ay, cx, cy, bx, by, sag].
    pub fn tick(&mut self, now_ms: f64) -> Vec<f32> {
        let frame = self.rig.tick(now_ms);
        self.last = Some(frame);
        let t = frame.tether;
        vec![
            frame.translate.x as f32,
            frame.translate.y as f32,
            frame.rotation_deg as f32,
            frame.anchor.x as f32,
            frame.anchor.y as f32,
            t.control.x as f32,
            t.control.y as f32,
            t.end.x as f32,
            t.end.y as f32,
            t.sag as f32,
        ]
    }

    /// `d` attribute for the tether and its shadow copy.
    pub fn tether_path(&self) -> String {
        self.current().tether.svg_path()
    }

    /// `style.transform` for the flag button.
    pub fn transform(&self) -> String {
        self.current().css_transform()
    }

    /// Anchor marker `cx` attribute.
    pub fn anchor_cx(&self) -> String {
        self.current().anchor_marker().0
    }

    /// Anchor marker `cy` attribute.
    pub fn anchor_cy(&self) -> String {
        self.current().anchor_marker().1
    }

    pub fn is_dragging(&self) -> bool {
        self.rig.is_dragging()
    }
}

impl FlagRigDemo {
    fn current(&self) -> Frame<f64> {
        self.last.unwrap_or_else(|| self.rig.frame())
    }
}
