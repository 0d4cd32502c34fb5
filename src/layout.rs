/*
 * Margin policy for the hosted child. A margined window insets the child from
 * every client edge by a fixed dialog-unit margin, converted per axis so the
 * visual weight matches the system font on both axes.
 */
use crate::sizing::Sizing;
use crate::types::Rect;

/// Margin between the client edges and the hosted child, in dialog units.
pub const WINDOW_MARGIN: i32 = 7;

/// Insets `client` by the window margin on all four edges.
pub(crate) fn inset_by_margin(client: Rect, sizing: &Sizing) -> Rect {
    let dx = sizing.dlg_units_to_x(WINDOW_MARGIN);
    let dy = sizing.dlg_units_to_y(WINDOW_MARGIN);
    Rect {
        left: client.left + dx,
        top: client.top + dy,
        right: client.right - dx,
        bottom: client.bottom - dy,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_margin_insets_all_four_edges() {
        let sizing = Sizing::new(4, 8); // one dialog unit per pixel
        let inset = inset_by_margin(Rect::new(0, 0, 320, 240), &sizing);
        assert_eq!(inset, Rect::new(7, 7, 313, 233));
    }

    #[test]
    fn test_margin_converts_per_axis() {
        let sizing = Sizing::new(8, 8); // horizontal units twice as wide
        let inset = inset_by_margin(Rect::new(0, 0, 320, 240), &sizing);
        assert_eq!(inset.left, 14);
        assert_eq!(inset.top, 7);
    }
}
