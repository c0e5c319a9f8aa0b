use crate::*;

use glutin::{
    dpi::LogicalSize,
    event::{Event, WindowEvent},
    event_loop::{ControlFlow, EventLoop},
    window::WindowBuilder,
};

use log::{error, info};

/// Opens a window with the default `PageConfig` and shows the rectangle in it. The keys 1, 2, 3
/// and R act as the red, green, blue and reset buttons.
///
/// This function never returns: the process ends when the window is closed, or with exit code
/// 1 when the application couldn't start.
pub fn start() {
    start_with_page_config(PageConfig::default())
}

/// Like `start`, but uses the given JSON object to override fields of the default `PageConfig`.
pub fn start_with_config(config_json: &str) {
    match PageConfig::from_json(config_json) {
        Ok(config) => start_with_page_config(config),
        Err(config_error) => {
            init_logging(log::LevelFilter::Info);
            ExitReporter.report_fatal_error(&InitError::from(config_error));
        }
    }
}

fn init_logging(level: log::LevelFilter) {
    // The RUST_LOG environment variable can still override the configured level
    let _ = env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .try_init();
}

fn start_with_page_config(config: PageConfig) {
    init_logging(config.get_log_level().unwrap_or(log::LevelFilter::Info));

    let event_loop = EventLoop::new();
    let builder = WindowBuilder::new()
        .with_decorations(true)
        .with_maximized(false)
        .with_resizable(true)
        .with_title(config.window_title.clone())
        .with_inner_size(LogicalSize::new(config.window_width as f64, config.window_height as f64))
        .with_visible(true);

    let windowed_context = match glutin::ContextBuilder::new().build_windowed(builder, &event_loop) {
        Ok(not_current) => match unsafe { not_current.make_current() } {
            Ok(current) => current,
            Err((_, context_error)) => {
                ExitReporter.report_fatal_error(&InitError::ContextUnavailable(context_error.to_string()));
                return;
            }
        },
        Err(creation_error) => {
            ExitReporter.report_fatal_error(&InitError::ContextUnavailable(creation_error.to_string()));
            return;
        }
    };
    info!("Created an OpenGL context for window '{}'", config.window_title);

    let gl = unsafe {
        glow::Context::from_loader_function(|function_name| {
            windowed_context.get_proc_address(function_name)
        })
    };

    let mut application = match Application::launch(Ok(GlowBackend::new(gl)), &mut ExitReporter) {
        Some(application) => application,
        None => return,
    };
    let size = windowed_context.window().inner_size();
    application.resize(size.width, size.height);
    if let Err(swap_error) = windowed_context.swap_buffers() {
        error!("Failed to swap buffers: {}", swap_error);
    }

    event_loop.run(move |event, _target, control_flow| {
        // Everything happens in response to events, so there is no need to poll
        *control_flow = ControlFlow::Wait;

        let rendered = match event {
            Event::WindowEvent { event: window_event, .. } => match window_event {
                WindowEvent::CloseRequested => {
                    *control_flow = ControlFlow::Exit;
                    false
                }
                WindowEvent::Resized(new_size) => {
                    windowed_context.resize(new_size);
                    application.resize(new_size.width, new_size.height);
                    true
                }
                WindowEvent::ReceivedCharacter(character) => {
                    match ColorButton::from_shortcut(character) {
                        Some(button) => {
                            application.fire_button_click(button);
                            true
                        }
                        None => false,
                    }
                }
                _ => false,
            },
            Event::RedrawRequested(_) => {
                // This wrapper never requests a redraw, so this must have come from the OS
                application.redraw();
                true
            }
            _ => false,
        };

        if rendered {
            if let Err(swap_error) = windowed_context.swap_buffers() {
                error!("Failed to swap buffers: {}", swap_error);
            }
        }
    });
}

/// Logs fatal errors and terminates the process, since there is no page to show an alert on
struct ExitReporter;

impl FatalErrorReporter for ExitReporter {
    fn report_fatal_error(&mut self, init_error: &InitError) {
        error!("Failed to start: {}", init_error);
        std::process::exit(1);
    }
}
