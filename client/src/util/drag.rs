//! Drag-and-drop `DataTransfer` access.
//!
//! Items put their payload under [`PAYLOAD_MEDIA_TYPE`]; lists read the
//! advertised types on drag-over and the payload on drop. Requires a browser
//! environment; elsewhere reads come back empty.

use leptos::ev::DragEvent;
#[cfg(feature = "csr")]
use projects::drag::{DRAG_EFFECT, PAYLOAD_MEDIA_TYPE};

/// Store `payload` as the drag's plain-text data and allow a move.
pub fn set_payload(ev: &DragEvent, payload: &str) {
    #[cfg(feature = "csr")]
    {
        let Some(transfer) = ev.data_transfer() else {
            log::warn!("dragstart without dataTransfer; payload not set");
            return;
        };
        if let Err(e) = transfer.set_data(PAYLOAD_MEDIA_TYPE, payload) {
            log::warn!("failed to set drag payload: {e:?}");
        }
        transfer.set_effect_allowed(DRAG_EFFECT);
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (ev, payload);
    }
}

/// Media types advertised by the drag, in order.
pub fn payload_types(ev: &DragEvent) -> Vec<String> {
    #[cfg(feature = "csr")]
    {
        ev.data_transfer()
            .map(|transfer| transfer.types().iter().filter_map(|t| t.as_string()).collect())
            .unwrap_or_default()
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = ev;
        Vec::new()
    }
}

/// The plain-text payload of a drop, if any.
pub fn read_payload(ev: &DragEvent) -> Option<String> {
    #[cfg(feature = "csr")]
    {
        let transfer = ev.data_transfer()?;
        match transfer.get_data(PAYLOAD_MEDIA_TYPE) {
            Ok(data) if !data.is_empty() => Some(data),
            Ok(_) => None,
            Err(e) => {
                log::warn!("failed to read drop payload: {e:?}");
                None
            }
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = ev;
        None
    }
}
