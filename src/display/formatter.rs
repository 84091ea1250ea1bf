//! Markdown terminal formatting using termimad

use termimad::{gray, MadSkin};

use crate::display::terminal::should_use_colors;

/// Print markdown to terminal with rich formatting (or plain fallback)
pub fn print_markdown(markdown: &str) {
    if should_use_colors() {
        if let Err(e) = print_rich(markdown) {
            eprintln!(
                "Warning: Terminal rendering failed ({}), using plain output",
                e
            );
            print_plain(markdown);
        }
    } else {
        print_plain(markdown);
    }
}

/// Print with termimad styling
fn print_rich(markdown: &str) -> Result<(), termimad::Error> {
    let mut skin = MadSkin::default();
    customize_skin(&mut skin);
    skin.print_text(markdown);
    Ok(())
}

/// Customize termimad skin for release log sections
fn customize_skin(skin: &mut MadSkin) {
    use termimad::crossterm::style::{Attribute, Color::*};

    // Version headings: bold yellow, subsections blue
    skin.headers[0].set_fg(Yellow);
    skin.headers[0].add_attr(Attribute::Bold);
    skin.headers[1].set_fg(Yellow);
    skin.headers[1].add_attr(Attribute::Bold);
    skin.headers[2].set_fg(Blue);

    // Command tokens are bold in the source; make them stand out
    skin.bold.set_fg(Cyan);
    skin.bold.add_attr(Attribute::Bold);
    skin.italic.add_attr(Attribute::Italic);

    // Inline code and code blocks
    skin.inline_code.set_fg(Green);
    skin.code_block.set_bg(gray(2));
    skin.code_block.set_fg(Green);

    // Summary table
    skin.table.set_fg(White);

    // List bullets
    skin.bullet.set_fg(Yellow);
}

/// Print plain markdown without formatting
fn print_plain(markdown: &str) {
    println!("{}", markdown);
}
