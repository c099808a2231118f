use wasm_bindgen::prelude::*;

pub mod animation;
pub mod config;
pub mod error;
pub mod host;
pub mod interaction;
pub mod log;
pub mod math;
pub mod particles;
pub mod render;
pub mod scroll;
mod mount;

pub use config::EffectsConfig;
pub use error::EffectsError;

/// Initialize panic hook for better error messages
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Handle to the behaviors attached to the current page.
///
/// Construct once the document has loaded:
///
/// ```js
/// const fx = new MicroInteractions();
/// // or: MicroInteractions.withConfig("nav:\n  threshold_px: 120\n");
/// ```
#[wasm_bindgen]
pub struct MicroInteractions {
    mounted: mount::Mounted,
}

#[wasm_bindgen]
impl MicroInteractions {
    /// Mount every behavior with the default configuration
    #[wasm_bindgen(constructor)]
    pub fn new() -> Result<MicroInteractions, JsValue> {
        Self::mount_with(&EffectsConfig::default())
    }

    /// Mount with a YAML configuration; omitted keys keep their defaults
    #[wasm_bindgen(js_name = withConfig)]
    pub fn with_config(yaml: &str) -> Result<MicroInteractions, JsValue> {
        let config = EffectsConfig::from_yaml(yaml)?;
        Self::mount_with(&config)
    }

    fn mount_with(config: &EffectsConfig) -> Result<MicroInteractions, JsValue> {
        let mounted = mount::mount(config)?;
        Ok(Self { mounted })
    }

    /// Cancel the dot field loop, pending counters and the typing effect.
    /// Event-driven behaviors stay attached.
    #[wasm_bindgen]
    pub fn stop(&self) {
        self.mounted.handle.cancel();
    }

    #[wasm_bindgen(js_name = isStopped)]
    pub fn is_stopped(&self) -> bool {
        self.mounted.handle.is_cancelled()
    }

    /// Names of the behaviors that found their elements
    #[wasm_bindgen]
    pub fn mounted(&self) -> js_sys::Array {
        self.mounted
            .behaviors
            .iter()
            .map(|name| JsValue::from_str(name))
            .collect()
    }
}
