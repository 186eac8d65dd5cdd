//! `scrawl styles` - list the fill styles.

use scrawl::FillStyle;

/// Execute the styles command.
pub fn cmd_styles() {
    println!("Available fill styles:");
    println!();
    for style in FillStyle::all() {
        println!("  {:<12} {}", style.name(), style.description());
    }
}
