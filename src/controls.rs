use crate::*;

/// Represents one of the 4 buttons of the page, each of which makes the `Application` redraw the
/// rectangle with a fixed color.
///
/// The *wrapper* converts the platform events (clicks on the buttons in the browser or key
/// presses on desktop) to `ColorButton`s and passes them to `Application::fire_button_click`.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum ColorButton {
    Red,
    Green,
    Blue,
    /// Goes back to the initial color of the `Application`
    Reset,
}

impl ColorButton {
    pub const ALL: [ColorButton; 4] = [
        ColorButton::Red,
        ColorButton::Green,
        ColorButton::Blue,
        ColorButton::Reset,
    ];

    /// Gets the color that the rectangle should get when this button is clicked
    pub fn get_color(&self) -> Color {
        match self {
            ColorButton::Red => Color::RED,
            ColorButton::Green => Color::GREEN,
            ColorButton::Blue => Color::BLUE,
            ColorButton::Reset => DEFAULT_COLOR,
        }
    }

    /// Gets the id of the element of this button in the default page layout
    pub fn get_default_element_id(&self) -> &'static str {
        match self {
            ColorButton::Red => "color1",
            ColorButton::Green => "color2",
            ColorButton::Blue => "color3",
            ColorButton::Reset => "resetColor",
        }
    }

    /// Gets the button that belongs to the given keyboard character on desktop, if any
    pub fn from_shortcut(character: char) -> Option<ColorButton> {
        match character.to_ascii_lowercase() {
            '1' => Some(ColorButton::Red),
            '2' => Some(ColorButton::Green),
            '3' => Some(ColorButton::Blue),
            'r' => Some(ColorButton::Reset),
            _ => None,
        }
    }
}
