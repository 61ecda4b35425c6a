use gpui::prelude::*;
use gpui::{Div, FontWeight, MouseButton, div, px, rgb};

const ACCENT: u32 = 0x4CAF50;

fn check_box(checked: bool) -> Div {
    let (fill, edge) = if checked {
        (ACCENT, ACCENT)
    } else {
        (0x2a2a2a, 0x666666)
    };

    div()
        .flex()
        .items_center()
        .justify_center()
        .size(px(22.0))
        .rounded(px(4.0))
        .bg(rgb(fill))
        .border_1()
        .border_color(rgb(edge))
        .text_color(rgb(0xffffff))
        .when(checked, |this| this.child("✓"))
}

/// A checkbox with its label. The whole row is the hit target.
pub fn labeled_checkbox(
    label: &'static str,
    checked: bool,
    on_toggle: impl Fn(&bool, &mut gpui::Window, &mut gpui::App) + 'static,
) -> impl IntoElement {
    div()
        .flex()
        .items_center()
        .gap_2()
        .px_3()
        .py_2()
        .rounded(px(8.0))
        .cursor_pointer()
        .on_mouse_down(MouseButton::Left, move |_, window, cx| {
            on_toggle(&checked, window, cx)
        })
        .child(check_box(checked))
        .child(
            div()
                .text_color(rgb(0xffffff))
                .font_weight(FontWeight::MEDIUM)
                .child(label),
        )
}
