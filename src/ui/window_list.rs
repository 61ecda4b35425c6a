use gpui::prelude::*;
use gpui::{FontWeight, MouseButton, div, px, rgb};

use crate::state::{WindowEntry, WindowHandle};
use crate::ui::controller::Controller;

/// Build the window list: a scrollable stack of selectable rows, one per
/// entry of the last enumeration.
///
/// Rows are keyed by handle, so two windows sharing a title remain
/// separately selectable.
pub fn window_list(
    windows: &[WindowEntry],
    selected: Option<WindowHandle>,
    cx: &mut gpui::Context<Controller>,
) -> impl IntoElement + use<> {
    let mut list = div()
        .id("window-list")
        .flex()
        .flex_col()
        .gap_1()
        .w_full()
        .max_w(px(500.0))
        .h(px(260.0))
        .p_1()
        .rounded(px(8.0))
        .bg(rgb(0x383838))
        .overflow_y_scroll();

    if windows.is_empty() {
        list = list.child(
            div()
                .p_4()
                .text_sm()
                .text_color(rgb(0x888888))
                .child("No windows found. Press Refresh."),
        );
    }

    for entry in windows {
        let is_selected = selected == Some(entry.handle);
        let handle = entry.handle;

        let row = div()
            .flex()
            .items_center()
            .justify_between()
            .gap_3()
            .px_3()
            .py_2()
            .w_full()
            .rounded(px(6.0))
            .bg(if is_selected {
                rgb(0x555555)
            } else {
                rgb(0x383838)
            })
            .cursor_pointer()
            .on_mouse_down(
                MouseButton::Left,
                cx.listener(move |this, _, _window, cx| {
                    this.selected = Some(handle);
                    cx.notify();
                }),
            )
            .child(
                div()
                    .flex_grow()
                    .overflow_hidden()
                    .whitespace_nowrap()
                    .text_color(rgb(0xffffff))
                    .font_weight(if is_selected {
                        FontWeight::BOLD
                    } else {
                        FontWeight::NORMAL
                    })
                    .child(entry.title.clone()),
            )
            .child(
                div()
                    .text_xs()
                    .text_color(rgb(0x888888))
                    .child(handle.to_string()),
            );

        list = list.child(row);
    }

    list
}
