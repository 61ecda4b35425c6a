use std::cell::Cell;
use std::rc::Rc;

use gpui::prelude::*;
use gpui::{Bounds, FontWeight, MouseButton, MouseDownEvent, MouseMoveEvent, Pixels, div, px, rgb};

use crate::state::{MAX_OPACITY, MIN_OPACITY};
use crate::ui::controller::Controller;

const TRACK_WIDTH: f32 = 400.0;
const KNOB_SIZE: f32 = 16.0;
const PRESETS: [u8; 5] = [10, 25, 50, 75, 100];

/// Track bounds as last laid out; mouse positions are mapped against it.
pub type TrackBounds = Rc<Cell<Option<Bounds<Pixels>>>>;

/// Opacity section: heading with the current value, the track, and a row
/// of preset chips.
pub fn opacity_slider(
    opacity: u8,
    track_bounds: &TrackBounds,
    cx: &mut gpui::Context<Controller>,
) -> impl IntoElement + use<> {
    let presets = PRESETS.map(|percent| preset_chip(percent, opacity == percent, cx));
    let caption = |text: String| div().text_sm().text_color(rgb(0x666666)).child(text);

    div()
        .flex()
        .flex_col()
        .gap_2()
        .w_full()
        .max_w(px(500.0))
        .child(
            div()
                .flex()
                .justify_between()
                .items_center()
                .font_weight(FontWeight::BOLD)
                .child(div().text_color(rgb(0xcccccc)).child("Opacity:"))
                .child(
                    div()
                        .px_3()
                        .py_1()
                        .rounded(px(6.0))
                        .bg(rgb(0x2a2a2a))
                        .text_color(rgb(0x4CAF50))
                        .child(format!("{opacity}%")),
                ),
        )
        .child(
            div()
                .flex()
                .items_center()
                .gap_3()
                .child(caption(format!("{MIN_OPACITY}%")))
                .child(track(track_fraction(opacity) * TRACK_WIDTH, track_bounds, cx))
                .child(caption(format!("{MAX_OPACITY}%"))),
        )
        .child(div().flex().gap_2().mt_1().children(presets))
}

fn track(
    filled: f32,
    track_bounds: &TrackBounds,
    cx: &mut gpui::Context<Controller>,
) -> impl IntoElement + use<> {
    let bar = |width: f32, color: u32| {
        div()
            .absolute()
            .left(px(0.0))
            .top(px(10.0))
            .w(px(width))
            .h(px(8.0))
            .rounded(px(4.0))
            .bg(rgb(color))
    };

    let surface = div()
        .relative()
        .w(px(TRACK_WIDTH))
        .h(px(28.0))
        .cursor_pointer()
        .on_mouse_down(
            MouseButton::Left,
            cx.listener(|this, ev: &MouseDownEvent, _window, cx| {
                if let Some(opacity) = opacity_at(ev.position.x, &this.slider_bounds) {
                    this.set_opacity(opacity, cx);
                }
            }),
        )
        .on_mouse_move(cx.listener(|this, ev: &MouseMoveEvent, _window, cx| {
            if ev.pressed_button == Some(MouseButton::Left)
                && let Some(opacity) = opacity_at(ev.position.x, &this.slider_bounds)
            {
                this.set_opacity(opacity, cx);
            }
        }))
        .child(bar(TRACK_WIDTH, 0x4a4a4a))
        .child(bar(filled, 0x4CAF50))
        .child(
            div()
                .absolute()
                .left(px(filled - KNOB_SIZE / 2.0))
                .top(px(6.0))
                .size(px(KNOB_SIZE))
                .rounded_full()
                .bg(rgb(0xffffff))
                .border_2()
                .border_color(rgb(0x4CAF50)),
        );

    // The wrapper records where the surface landed after layout.
    let bounds_cell = track_bounds.clone();
    div()
        .on_children_prepainted(move |bounds, _window, _cx| {
            if let Some(b) = bounds.first() {
                bounds_cell.set(Some(*b));
            }
        })
        .child(surface)
}

fn track_fraction(opacity: u8) -> f32 {
    let offset = opacity.clamp(MIN_OPACITY, MAX_OPACITY) - MIN_OPACITY;
    f32::from(offset) / f32::from(MAX_OPACITY - MIN_OPACITY)
}

/// Opacity under a window-space X coordinate, or `None` before the first
/// layout.
fn opacity_at(x: Pixels, track_bounds: &TrackBounds) -> Option<u8> {
    let bounds = track_bounds.get()?;
    let left: f32 = bounds.origin.x.into();
    let width: f32 = bounds.size.width.into();
    let x: f32 = x.into();
    let fraction = ((x - left) / width).clamp(0.0, 1.0);
    let steps = (fraction * f32::from(MAX_OPACITY - MIN_OPACITY)).round() as u8;
    Some(MIN_OPACITY + steps)
}

fn preset_chip(
    percent: u8,
    active: bool,
    cx: &mut gpui::Context<Controller>,
) -> impl IntoElement + use<> {
    let (bg, fg) = if active {
        (0x4CAF50, 0xffffff)
    } else {
        (0x2a2a2a, 0x888888)
    };

    div()
        .px_3()
        .py_1()
        .rounded(px(6.0))
        .bg(rgb(bg))
        .text_sm()
        .text_color(rgb(fg))
        .cursor_pointer()
        .on_mouse_down(
            MouseButton::Left,
            cx.listener(move |this, _, _window, cx| this.set_opacity(percent, cx)),
        )
        .child(format!("{percent}%"))
}
