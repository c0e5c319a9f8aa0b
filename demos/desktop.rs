fn main() {
    color_rect::start();
}
