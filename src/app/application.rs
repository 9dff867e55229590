//! Application - App Initialization and Window Management
//!
//! Main entry point for the GPUI application.

use gpui::{
    AnyView, App, AppContext, Application, Bounds, KeyBinding, SharedString, TitlebarOptions,
    WindowBounds, WindowOptions, actions, px, size,
};
use gpui_component::Root;
use tracing::{error, info};

use crate::constants::{APP_TITLE, MIN_WINDOW_HEIGHT, MIN_WINDOW_WIDTH};
use crate::settings::AppSettings;
use crate::views::WelcomeView;

actions!(welcome, [Quit]);

/// Run the Welcome GUI application
pub fn run_app(settings: AppSettings) {
    Application::new()
        .with_assets(gpui_component_assets::Assets)
        .run(move |cx: &mut App| {
            gpui_component::init(cx);

            cx.bind_keys([
                KeyBinding::new("cmd-q", Quit, None),
                KeyBinding::new("ctrl-q", Quit, None),
            ]);
            cx.on_action(|_: &Quit, cx: &mut App| cx.quit());

            // Quit the app when all windows are closed (macOS behavior)
            cx.on_window_closed(|cx| {
                if cx.windows().is_empty() {
                    cx.quit();
                }
            })
            .detach();

            let window_size = size(px(settings.window.width), px(settings.window.height));
            let bounds = Bounds::centered(None, window_size, cx);
            let window_options = WindowOptions {
                window_bounds: Some(WindowBounds::Windowed(bounds)),
                window_min_size: Some(size(px(MIN_WINDOW_WIDTH), px(MIN_WINDOW_HEIGHT))),
                titlebar: Some(TitlebarOptions {
                    title: Some(SharedString::from(APP_TITLE)),
                    ..Default::default()
                }),
                ..Default::default()
            };

            let theme = settings.theme;
            let palette = settings.palette();
            let opened = cx.open_window(window_options, move |window, cx| {
                theme.apply(window, cx);
                let view = cx.new(|_cx| WelcomeView::new(palette));
                cx.new(|cx| Root::new(AnyView::from(view), window, cx))
            });

            match opened {
                Ok(_) => {
                    info!(theme = ?theme, "Main window opened");
                    cx.activate(true);
                }
                Err(e) => {
                    error!(error = %e, "Failed to open main window");
                    cx.quit();
                }
            }
        });
}
