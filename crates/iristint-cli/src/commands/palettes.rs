use anyhow::Result;
use clap::Args;
use console::Style;
use iristint_core::palette::PALETTE;

#[derive(Args)]
pub struct PalettesArgs {}

pub fn run(_args: &PalettesArgs) -> Result<()> {
    let name_style = Style::new().green();
    let label_style = Style::new().bold().white();
    let value_style = Style::new().dim();

    println!();
    for entry in PALETTE.iter() {
        println!(
            "  {:<18} {:<18} {}",
            name_style.apply_to(entry.name),
            label_style.apply_to(entry.label),
            value_style.apply_to(format!(
                "h={:.2} s={:.2} v={:.2}",
                entry.hsv.h, entry.hsv.s, entry.hsv.v
            ))
        );
    }
    println!();

    Ok(())
}
