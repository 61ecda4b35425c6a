pub mod components;
pub mod controller;
pub mod window_list;

use gpui::{AppContext, Application, Bounds, WindowBounds, WindowOptions, px, size};

use crate::config::FormDefaults;

pub use controller::Controller;

/// Open the control window and run the GUI event loop until it closes.
pub fn run(defaults: FormDefaults) {
    Application::new().run(move |app: &mut gpui::App| {
        let bounds = Bounds::centered(None, size(px(560.0), px(760.0)), app);

        let opened = app.open_window(
            WindowOptions {
                window_bounds: Some(WindowBounds::Windowed(bounds)),
                titlebar: Some(gpui::TitlebarOptions {
                    title: Some("Window Opacity Control".into()),
                    ..Default::default()
                }),
                ..Default::default()
            },
            |_, cx| cx.new(|_| Controller::new(&defaults)),
        );

        if let Err(e) = opened {
            tracing::error!(error = %e, "failed to open the control window");
            app.quit();
        }
    });
}
