use gpui::prelude::*;
use gpui::{FontWeight, MouseButton, MouseDownEvent, div, px, rgb};

/// A flat push button. `primary` buttons use the accent colour.
pub fn button(
    label: &'static str,
    primary: bool,
    on_click: impl Fn(&MouseDownEvent, &mut gpui::Window, &mut gpui::App) + 'static,
) -> impl IntoElement {
    div()
        .flex()
        .items_center()
        .justify_center()
        .min_w(px(110.0))
        .px_4()
        .py_2()
        .rounded(px(8.0))
        .bg(if primary {
            rgb(0x4CAF50)
        } else {
            rgb(0x4a4a4a)
        })
        .border_1()
        .border_color(if primary {
            rgb(0x66BB6A)
        } else {
            rgb(0x555555)
        })
        .text_color(rgb(0xffffff))
        .font_weight(FontWeight::MEDIUM)
        .cursor_pointer()
        .on_mouse_down(MouseButton::Left, on_click)
        .child(label)
}
