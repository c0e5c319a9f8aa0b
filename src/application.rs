use crate::*;

use log::{debug, info};

/// The color of the rectangle before any button is clicked, and after the reset button is clicked
pub const DEFAULT_COLOR: Color = Color::RED;

/// Receives the fatal error that prevented the `Application` from starting. The *wrapper* decides
/// how to show it to the user: the web wrapper logs it and shows an alert dialog, and the desktop
/// wrapper logs it and exits.
pub trait FatalErrorReporter {
    fn report_fatal_error(&mut self, error: &InitError);
}

/// The `Application` is the 'highest' object that is cross-platform. It owns the `Renderer` and
/// remembers the color that the rectangle currently has.
///
/// The *wrapper* is responsible for acquiring the graphics context, passing it to `launch`, and
/// forwarding the button events to `fire_button_click`. The application knows nothing about the
/// wrapper, so it can be tested with regular unit tests, without any window or browser.
pub struct Application<B: GraphicsBackend> {
    renderer: Renderer<B>,
    current_color: Color,
}

impl<B: GraphicsBackend> Application<B> {
    /// Initializes the `Renderer` with the given *backend* and draws the rectangle in the
    /// `DEFAULT_COLOR`.
    pub fn new(backend: B) -> Result<Self, InitError> {
        let mut result = Self {
            renderer: Renderer::initialize(backend)?,
            current_color: DEFAULT_COLOR,
        };
        result.redraw();
        Ok(result)
    }

    /// Starts the `Application` from the result of acquiring the graphics context.
    ///
    /// If the acquisition failed, or if the initialization of the `Renderer` fails, the error
    /// is given to the *reporter* (exactly once) and `None` is returned. Nothing will be drawn
    /// in that case.
    pub fn launch(
        acquired: Result<B, InitError>, reporter: &mut dyn FatalErrorReporter
    ) -> Option<Self> {
        match acquired.and_then(Self::new) {
            Ok(application) => {
                info!("Started the application");
                Some(application)
            }
            Err(init_error) => {
                reporter.report_fatal_error(&init_error);
                None
            }
        }
    }

    /// Redraws the rectangle in the color of the given *button*.
    pub fn fire_button_click(&mut self, button: ColorButton) {
        debug!("Button {:?} was clicked", button);
        self.current_color = button.get_color();
        self.redraw();
    }

    /// Draws the rectangle again in its current color. The *wrapper* should call this when the
    /// platform lost the contents of the frame.
    pub fn redraw(&mut self) {
        self.renderer.render(self.current_color);
    }

    /// Informs the `Application` that the drawable area now has the given *width* and *height*
    /// (in pixels), and redraws the rectangle.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.renderer.resize(width, height);
        self.redraw();
    }

    pub fn get_current_color(&self) -> Color {
        self.current_color
    }

    pub fn get_renderer(&self) -> &Renderer<B> {
        &self.renderer
    }
}

#[cfg(test)]
mod tests {

    use crate::*;
    use crate::renderer::{GlCall, RecordingBackend};

    #[derive(Default)]
    struct RecordingReporter {
        messages: Vec<String>,
    }

    impl FatalErrorReporter for RecordingReporter {
        fn report_fatal_error(&mut self, error: &InitError) {
            self.messages.push(error.to_string());
        }
    }

    fn launched() -> Application<RecordingBackend> {
        let mut reporter = RecordingReporter::default();
        let application = Application::launch(Ok(RecordingBackend::new()), &mut reporter);
        assert!(reporter.messages.is_empty());
        match application {
            Some(application) => application,
            None => panic!("The application should start"),
        }
    }

    fn last_drawn_color(application: &Application<RecordingBackend>) -> [f32; 4] {
        match application.get_renderer().get_backend().get_last_drawn_color() {
            Some(color) => color,
            None => panic!("Nothing has been drawn yet"),
        }
    }

    #[test]
    fn test_initial_draw_is_red() {
        let application = launched();
        let backend = application.get_renderer().get_backend();

        assert_eq!(1, backend.count_draws());
        assert_eq!([1.0, 0.0, 0.0, 1.0], last_drawn_color(&application));
        assert_eq!(DEFAULT_COLOR, application.get_current_color());
    }

    #[test]
    fn test_every_button() {
        let mut application = launched();
        let expected = [
            (ColorButton::Red, [1.0, 0.0, 0.0, 1.0]),
            (ColorButton::Green, [0.0, 1.0, 0.0, 1.0]),
            (ColorButton::Blue, [0.0, 0.0, 1.0, 1.0]),
            (ColorButton::Reset, [1.0, 0.0, 0.0, 1.0]),
        ];

        // Try every button after every other button
        for (previous, _) in &expected {
            for (button, color) in &expected {
                application.fire_button_click(*previous);
                application.fire_button_click(*button);
                assert_eq!(*color, last_drawn_color(&application));
            }
        }
    }

    #[test]
    fn test_reset_is_idempotent() {
        let mut application = launched();
        application.fire_button_click(ColorButton::Blue);
        application.fire_button_click(ColorButton::Reset);
        assert_eq!([1.0, 0.0, 0.0, 1.0], last_drawn_color(&application));
        application.fire_button_click(ColorButton::Reset);
        assert_eq!([1.0, 0.0, 0.0, 1.0], last_drawn_color(&application));
        assert_eq!(DEFAULT_COLOR, application.get_current_color());
    }

    #[test]
    fn test_scenario() {
        let mut application = launched();
        let bounds = application.get_renderer().get_geometry().get_bounds();
        assert_eq!(Bounds::new(-0.7, -0.5, 0.7, 0.5), bounds);

        let calls = application.get_renderer().get_backend().get_calls();
        assert_eq!(GlCall::ClearColor([0.0, 0.0, 0.0, 1.0]), calls[0]);
        assert_eq!([1.0, 0.0, 0.0, 1.0], last_drawn_color(&application));

        application.fire_button_click(ColorButton::Green);
        assert_eq!([0.0, 1.0, 0.0, 1.0], last_drawn_color(&application));

        application.fire_button_click(ColorButton::Reset);
        assert_eq!([1.0, 0.0, 0.0, 1.0], last_drawn_color(&application));

        let backend = application.get_renderer().get_backend();
        assert_eq!(3, backend.count_draws());
        assert_eq!(1, backend.count_uploads());
    }

    #[test]
    fn test_redraw_and_resize_keep_color() {
        let mut application = launched();
        application.fire_button_click(ColorButton::Blue);

        application.redraw();
        assert_eq!([0.0, 0.0, 1.0, 1.0], last_drawn_color(&application));

        application.resize(300, 200);
        assert_eq!([0.0, 0.0, 1.0, 1.0], last_drawn_color(&application));
        assert!(application.get_renderer().get_backend().get_calls().contains(&GlCall::Viewport(300, 200)));
    }

    #[test]
    fn test_context_failure() {
        let mut reporter = RecordingReporter::default();
        let acquired: Result<RecordingBackend, InitError> = Err(InitError::ContextUnavailable(
            "getContext returned null".to_string()
        ));

        assert!(Application::launch(acquired, &mut reporter).is_none());
        assert_eq!(1, reporter.messages.len());
        assert!(reporter.messages[0].starts_with("Unable to initialize WebGL."));
    }

    #[test]
    fn test_compile_failure() {
        let mut reporter = RecordingReporter::default();
        let backend = RecordingBackend::new()
            .fail_compile(ShaderStage::Vertex, "ERROR: 0:1: 'attribut' : syntax error");
        let calls = backend.share_calls();

        assert!(Application::launch(Ok(backend), &mut reporter).is_none());
        assert_eq!(1, reporter.messages.len());
        assert!(reporter.messages[0].contains("ERROR: 0:1: 'attribut' : syntax error"));
        assert!(calls.borrow().iter().all(|call| !call.is_draw()));
    }

    #[test]
    fn test_link_failure() {
        let mut reporter = RecordingReporter::default();
        let backend = RecordingBackend::new().fail_link("Varyings do not match");
        let calls = backend.share_calls();

        assert!(Application::launch(Ok(backend), &mut reporter).is_none());
        assert_eq!(
            vec!["Unable to initialize the shader program: Varyings do not match".to_string()],
            reporter.messages
        );
        assert!(calls.borrow().iter().all(|call| !call.is_draw()));
    }

    #[test]
    fn test_missing_attribute_is_reported_once() {
        let mut reporter = RecordingReporter::default();
        let backend = RecordingBackend::new().without_attributes();
        let calls = backend.share_calls();

        assert!(Application::launch(Ok(backend), &mut reporter).is_none());
        assert_eq!(
            vec!["The shader program doesn't have the vertex input 'aVertexPosition'".to_string()],
            reporter.messages
        );
        assert!(calls.borrow().iter().all(|call| !call.is_draw()));
    }

    #[test]
    fn test_buffer_failure_is_reported_once() {
        let mut reporter = RecordingReporter::default();
        let backend = RecordingBackend::new().fail_buffer("out of memory");
        let calls = backend.share_calls();

        assert!(Application::launch(Ok(backend), &mut reporter).is_none());
        assert_eq!(1, reporter.messages.len());
        assert!(reporter.messages[0].contains("out of memory"));
        assert!(calls.borrow().iter().all(|call| !call.is_draw()));
    }
}
