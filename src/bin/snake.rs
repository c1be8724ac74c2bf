use crossterm::style::Color;

use snake_duo::app;
use snake_duo::game::Ruleset;
use snake_duo::term::Palette;

fn main() {
    let palette = Palette {
        head: Color::Green,
        body: Color::DarkGreen,
        food: Color::Red,
    };

    app::run(Ruleset::classic(), palette);
}
