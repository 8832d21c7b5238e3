//! Blocking user notification.

/// Show `message` in a blocking browser alert. Also logged, so the message
/// survives in non-browser builds.
pub fn alert(message: &str) {
    log::warn!("alert: {message}");
    #[cfg(feature = "csr")]
    {
        if let Some(window) = web_sys::window() {
            if let Err(e) = window.alert_with_message(message) {
                log::error!("window.alert failed: {e:?}");
            }
        }
    }
}
