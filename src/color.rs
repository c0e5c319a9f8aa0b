/// Represents an RGBA color with 8 bits per channel.
///
/// The `Renderer` uses this struct as the fill color of the rectangle. The graphics API wants
/// floating point components between 0.0 and 1.0, which can be obtained with the `get_*_float`
/// methods or with `to_float_array`. The channel values 0 and 255 are converted to exactly 0.0
/// and 1.0.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct Color {
    red: u8,
    green: u8,
    blue: u8,
    alpha: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const RED: Color = Color::rgb(255, 0, 0);
    pub const GREEN: Color = Color::rgb(0, 255, 0);
    pub const BLUE: Color = Color::rgb(0, 0, 255);

    pub const fn rgb(red: u8, green: u8, blue: u8) -> Self {
        Self {
            red,
            green,
            blue,
            alpha: u8::MAX,
        }
    }

    pub const fn rgba(red: u8, green: u8, blue: u8, alpha: u8) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    pub fn get_red_int(&self) -> u8 {
        self.red
    }

    pub fn get_green_int(&self) -> u8 {
        self.green
    }

    pub fn get_blue_int(&self) -> u8 {
        self.blue
    }

    pub fn get_alpha_int(&self) -> u8 {
        self.alpha
    }

    pub fn get_red_float(&self) -> f32 {
        self.red as f32 / 255.0
    }

    pub fn get_green_float(&self) -> f32 {
        self.green as f32 / 255.0
    }

    pub fn get_blue_float(&self) -> f32 {
        self.blue as f32 / 255.0
    }

    pub fn get_alpha_float(&self) -> f32 {
        self.alpha as f32 / 255.0
    }

    /// Gets the (red, green, blue, alpha) components of this color as floats between 0.0 and
    /// 1.0, in the order the uniform color parameter of the fragment shader expects them.
    pub fn to_float_array(&self) -> [f32; 4] {
        [
            self.get_red_float(),
            self.get_green_float(),
            self.get_blue_float(),
            self.get_alpha_float(),
        ]
    }
}
