use ratatui::layout::Rect;

/// Gap kept between the dialog and the right edge.
pub const MARGIN_X: u16 = 2;
/// Gap kept between the dialog and the top/bottom edges.
pub const MARGIN_Y: u16 = 1;

/// Rect of `width` x `height` anchored to the bottom-right corner of `area`.
///
/// `progress` below `1.0` pushes the rect down toward (and past) the bottom
/// edge; the returned rect is clipped to `area`.
pub fn anchored_rect(area: Rect, width: u16, height: u16, progress: f64) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    let x = area.x + area.width.saturating_sub(width + MARGIN_X).min(area.width - width);
    let resting_y = area.y + area.height.saturating_sub(height + MARGIN_Y);
    let travel = area.bottom().saturating_sub(resting_y) as f64;
    let offset = ((1.0 - progress.clamp(0.0, 1.0)) * travel).round() as u16;
    let y = resting_y.saturating_add(offset).min(area.bottom());
    Rect {
        x,
        y,
        width,
        height: height.min(area.bottom() - y),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn settled_rect_sits_bottom_right() {
        let rect = anchored_rect(Rect::new(0, 0, 80, 24), 40, 10, 1.0);
        assert_eq!(rect, Rect::new(38, 13, 40, 10));
    }

    #[test]
    fn start_of_transition_is_off_screen() {
        let rect = anchored_rect(Rect::new(0, 0, 80, 24), 40, 10, 0.0);
        assert_eq!(rect.height, 0);
    }

    #[test]
    fn oversized_dialog_is_clipped() {
        let rect = anchored_rect(Rect::new(0, 0, 20, 5), 40, 10, 1.0);
        assert_eq!(rect.width, 20);
        assert_eq!(rect.height, 5);
        assert_eq!(rect.x, 0);
    }
}
