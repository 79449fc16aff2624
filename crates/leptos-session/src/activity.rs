//! Window-level user activity listeners

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

/// Interaction events that count as user activity
pub const ACTIVITY_EVENTS: [&str; 5] = ["mousemove", "mousedown", "click", "scroll", "keypress"];

/// One callback registered for every [`ACTIVITY_EVENTS`] entry on `window`.
/// Dropping it removes all of them together.
pub struct ActivityListeners {
    window: web_sys::Window,
    callback: Closure<dyn FnMut(web_sys::Event)>,
}

impl ActivityListeners {
    pub fn bind(on_activity: impl Fn() + 'static) -> Option<Self> {
        let window = web_sys::window()?;
        let callback = Closure::<dyn FnMut(web_sys::Event)>::new(move |_ev: web_sys::Event| {
            on_activity();
        });

        for event in ACTIVITY_EVENTS {
            if let Err(err) =
                window.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
            {
                log::warn!("[IDLE] could not listen for {}: {:?}", event, err);
            }
        }
        Some(Self { window, callback })
    }
}

impl Drop for ActivityListeners {
    fn drop(&mut self) {
        for event in ACTIVITY_EVENTS {
            let _ = self
                .window
                .remove_event_listener_with_callback(event, self.callback.as_ref().unchecked_ref());
        }
    }
}
