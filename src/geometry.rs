/*
 * Client-area to frame-size translation. The non-client frame (borders,
 * caption) is a pure function of the style flags, but a menu bar wraps to a
 * variable number of rows depending on the frame width, so its height can
 * only be learned by probing the window itself: hand it a frame rectangle of
 * effectively unbounded height and ask where the client area would start.
 */
use crate::host::HostWindow;
use crate::types::{FrameStyle, Rect, Size};

/// Sentinel frame bottom for the menu probe. Tall enough that the menu can
/// never push the client top past it.
const PROBE_BOTTOM: i32 = 0x7FFF;

/// Computes the outer frame size that yields exactly `client` as the client
/// area, menu bar included. Never fails: a frame-computation error falls back
/// to the raw client size, a probe error to the unmenued frame.
pub(crate) fn compute_frame_size(
    host: &dyn HostWindow,
    client: Size,
    has_menu: bool,
    style: FrameStyle,
) -> Size {
    let client_rect = Rect::from_size(client);

    let mut frame = match host.frame_rect_for_client(client_rect, style, has_menu) {
        Ok(rect) => rect,
        Err(err) => {
            log::error!(
                "Frame computation failed for {:?}: {err}; using raw client size",
                host.raw()
            );
            return client;
        }
    };

    if has_menu {
        // The adjusted frame accounts for one menu row only. Probe with an
        // unbounded-height copy so row wrapping at this width is observable,
        // then grow the frame by the client's probed start offset.
        let probe = Rect::new(frame.left, frame.top, frame.right, PROBE_BOTTOM);
        match host.client_top_for_frame(probe) {
            Ok(client_top) => {
                frame.bottom += client_top;
            }
            Err(err) => {
                log::warn!(
                    "Menu height probe failed for {:?}: {err}; sizing without menu allowance",
                    host.raw()
                );
            }
        }
    }

    frame.size()
}
