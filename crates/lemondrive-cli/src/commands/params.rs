//! Parameter listing command.

use clap::Args;
use lemondrive_dsp::PARAMS;

#[derive(Args)]
pub struct ParamsArgs {
    /// Print as a TOML preset template instead of a table
    #[arg(long)]
    toml: bool,
}

pub fn run(args: ParamsArgs) -> anyhow::Result<()> {
    if args.toml {
        println!("name = \"New preset\"");
        println!();
        println!("[params]");
        for desc in &PARAMS {
            println!("{} = {}", desc.string_id, desc.default);
        }
        return Ok(());
    }

    println!(
        "{:<10} {:<22} {:<14} {}",
        "Name", "Range", "Default", "Preset ID"
    );
    for desc in &PARAMS {
        println!(
            "{:<10} {:<22} {:<14} {}",
            desc.name,
            format!(
                "{} .. {}",
                desc.format_value(desc.min),
                desc.format_value(desc.max)
            ),
            desc.format_value(desc.default),
            desc.string_id
        );
    }

    Ok(())
}
