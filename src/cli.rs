use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "redeck",
    version,
    about = "Updates a simulation DATA deck for the next restart"
)]
pub struct Cli {
    /// Name of the DATA file (needs to be the same for the NAME.X0000 and
    /// NAME.S0000 report files).
    #[arg(value_name = "NAME[.DATA]")]
    pub deck: String,

    /// Back up the DATA file as "NAME.DATA.BACKUP" before writing.
    #[arg(short = 'b', long)]
    pub backup: bool,

    /// Restore the DATA file from "NAME.DATA.BACKUP" before processing.
    #[arg(long)]
    pub restore: bool,

    /// Show additional messages for debugging.
    #[arg(short = 'v', long)]
    pub verbose: bool,
}
