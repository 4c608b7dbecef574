//! CLI styles for clap.

use clap::builder::styling::{AnsiColor, Color, Style, Styles};

//--------------------------------------------------------------------------------------------------
// Functions
//--------------------------------------------------------------------------------------------------

/// Help and error styling shared by every `registry` subcommand.
pub fn styles() -> Styles {
    Styles::styled()
        .header(bold(AnsiColor::Yellow))
        .usage(bold(AnsiColor::Green))
        .literal(plain(AnsiColor::Cyan))
        .placeholder(plain(AnsiColor::Cyan))
        .error(bold(AnsiColor::Red))
        .invalid(bold(AnsiColor::Red))
        .valid(bold(AnsiColor::Green))
}

fn plain(color: AnsiColor) -> Style {
    Style::new().fg_color(Some(Color::Ansi(color)))
}

fn bold(color: AnsiColor) -> Style {
    plain(color).bold()
}
