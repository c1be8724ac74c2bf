use crossterm::style::Color;

use snake_duo::app;
use snake_duo::game::Ruleset;
use snake_duo::term::Palette;

fn main() {
    let palette = Palette {
        head: Color::Cyan,
        body: Color::Green,
        food: Color::DarkYellow,
    };

    app::run(Ruleset::reverse(), palette);
}
