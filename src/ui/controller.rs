use std::cell::Cell;
use std::rc::Rc;

use gpui::prelude::*;
use gpui::{FontWeight, div, px, rgb};

use crate::config::FormDefaults;
use crate::state::{
    ControlError, DisplayConfig, WindowHandle, WindowStateController, clamp_opacity,
};
use crate::ui::components::{TrackBounds, button, labeled_checkbox, opacity_slider};
use crate::ui::window_list::window_list;
use crate::win32::Win32Backend;

/// Feedback line shown under the buttons after an action.
pub enum Notice {
    Warning(String),
    Applied(String),
}

/// Central application view.
///
/// Holds the form state (selection, opacity, checkboxes) and the
/// [`WindowStateController`] that performs every window mutation.
pub struct Controller {
    /// Baselines and the last window snapshot.
    pub state: WindowStateController<Win32Backend>,
    /// Handle of the selected row, if any.
    pub selected: Option<WindowHandle>,
    /// Requested opacity in percent (10–100).
    pub opacity: u8,
    pub click_through: bool,
    pub always_on_top: bool,
    /// Result of the last Apply or Refresh, if it needs to be shown.
    pub notice: Option<Notice>,
    /// Where the slider track was laid out in the last frame.
    pub slider_bounds: TrackBounds,
}

impl Controller {
    /// Create the view and take the first window snapshot.
    pub fn new(defaults: &FormDefaults) -> Self {
        let form = defaults.display_config();
        let mut controller = Self {
            state: WindowStateController::new(Win32Backend),
            selected: None,
            opacity: form.opacity,
            click_through: form.click_through,
            always_on_top: form.always_on_top,
            notice: None,
            slider_bounds: Rc::new(Cell::new(None)),
        };
        controller.refresh();
        controller
    }

    /// Move the slider. Re-renders only when the value changes.
    pub fn set_opacity(&mut self, opacity: u8, cx: &mut gpui::Context<Self>) {
        let opacity = clamp_opacity(opacity);
        if self.opacity != opacity {
            self.opacity = opacity;
            cx.notify();
        }
    }

    /// Re-enumerate windows, dropping the selection if its window is gone.
    pub fn refresh(&mut self) {
        match self.state.refresh() {
            Ok(_) => {
                if self.state.resolve_handle(self.selected).is_err() {
                    self.selected = None;
                }
                self.notice = None;
            }
            Err(e) => {
                tracing::warn!(error = %e, "window enumeration failed");
                self.notice = Some(Notice::Warning(e.user_message()));
            }
        }
    }

    /// Apply the form to the selected window.
    pub fn apply(&mut self) {
        let config = DisplayConfig::new(self.opacity, self.click_through, self.always_on_top);

        let result = self
            .state
            .resolve_handle(self.selected)
            .and_then(|handle| self.state.apply(handle, &config).map(|()| handle));

        self.notice = Some(match result {
            Ok(handle) => {
                let title = self
                    .state
                    .entry(handle)
                    .map(|entry| entry.title.clone())
                    .unwrap_or_else(|| handle.to_string());
                Notice::Applied(format!("Applied {}% to \"{}\"", config.opacity, title))
            }
            Err(e) => {
                if matches!(e, ControlError::NoSelection | ControlError::NotFound(_)) {
                    tracing::warn!(error = %e, "apply without a valid selection");
                }
                Notice::Warning(e.user_message())
            }
        });
    }
}

impl Render for Controller {
    fn render(
        &mut self,
        _window: &mut gpui::Window,
        cx: &mut gpui::Context<Self>,
    ) -> impl IntoElement {
        let window_count = self.state.windows().len();

        let list = window_list(self.state.windows(), self.selected, cx);
        let slider = opacity_slider(self.opacity, &self.slider_bounds, cx);

        let options = div()
            .flex()
            .items_center()
            .justify_center()
            .gap_4()
            .child(labeled_checkbox(
                "Always on Top",
                self.always_on_top,
                cx.listener(|this, _, _window, cx| {
                    this.always_on_top = !this.always_on_top;
                    cx.notify();
                }),
            ))
            .child(labeled_checkbox(
                "Click-Through",
                self.click_through,
                cx.listener(|this, _, _window, cx| {
                    this.click_through = !this.click_through;
                    cx.notify();
                }),
            ));

        let buttons = div()
            .flex()
            .gap_3()
            .child(button(
                "Apply",
                true,
                cx.listener(|this, _, _window, cx| {
                    this.apply();
                    cx.notify();
                }),
            ))
            .child(button(
                "Refresh",
                false,
                cx.listener(|this, _, _window, cx| {
                    this.refresh();
                    cx.notify();
                }),
            ));

        let notice = self.notice.as_ref().map(|notice| {
            let (text, fg, bg, border) = match notice {
                Notice::Warning(text) => (text.clone(), 0xFFCC80, 0x3a2e1e, 0xFFB300),
                Notice::Applied(text) => (text.clone(), 0x81C784, 0x1e3a1e, 0x4CAF50),
            };
            div()
                .w_full()
                .max_w(px(500.0))
                .px_4()
                .py_3()
                .rounded(px(8.0))
                .bg(rgb(bg))
                .border_1()
                .border_color(rgb(border))
                .text_sm()
                .text_color(rgb(fg))
                .child(text)
        });

        let sep = || div().w_full().max_w(px(500.0)).h(px(1.0)).bg(rgb(0x4a4a4a));

        div()
            .flex()
            .flex_col()
            .gap_4()
            .size_full()
            .p_6()
            .items_center()
            .bg(rgb(0x2b2b2b))
            .child(
                div()
                    .flex()
                    .items_center()
                    .justify_between()
                    .w_full()
                    .max_w(px(500.0))
                    .child(
                        div()
                            .text_lg()
                            .font_weight(FontWeight::BOLD)
                            .text_color(rgb(0xffffff))
                            .child("Windows"),
                    )
                    .child(
                        div()
                            .text_sm()
                            .text_color(rgb(0x888888))
                            .child(format!("{window_count} open")),
                    ),
            )
            .child(list)
            .child(sep())
            .child(slider)
            .child(options)
            .child(sep())
            .child(buttons)
            .children(notice)
    }
}
