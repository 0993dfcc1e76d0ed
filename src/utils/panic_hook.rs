use leptos::logging::log;
use std::panic;

/// Sets up a custom panic hook that adds context to reactive-owner disposal
/// panics. A scheduled retry delay is not tied to the life of the view that
/// started it, so a flow can resume and write its signals after unmount.
pub fn set_custom_panic_hook() {
    let original_hook = panic::take_hook();

    panic::set_hook(Box::new(move |panic_info| {
        // Call the original hook first
        original_hook(panic_info);

        // Extract panic message
        let message = if let Some(s) = panic_info.payload().downcast_ref::<String>() {
            s.clone()
        } else if let Some(s) = panic_info.payload().downcast_ref::<&str>() {
            s.to_string()
        } else {
            "Unknown panic".to_string()
        };

        if message.contains("OwnerDisposed") {
            log!("[PANIC] Reactive owner disposal detected. This usually happens when:");
            log!("[PANIC] 1. A submission flow resumed after its view was unmounted");
            log!("[PANIC] 2. A retry delay fired and the flow wrote signals that are gone");
            log!("[PANIC] 3. The one-shot reviews load finished after navigation");
        }
    }));
}

/// Call in main.rs during app initialization
pub fn init() {
    log!("[PANIC_HOOK] Setting up custom panic hook");
    set_custom_panic_hook();
}
