use clap::Parser;

use crate::utils::version;

#[derive(Parser, Debug)]
#[command(author, version = version(), about)]
pub struct Cli {
    #[arg(
        short,
        long,
        value_name = "FLOAT",
        help = "Tick rate, i.e. number of ticks per second",
        default_value_t = 4.0
    )]
    pub tick_rate: f64,

    #[arg(
        short,
        long,
        value_name = "FLOAT",
        help = "Frame rate, i.e. number of frames per second",
        default_value_t = 30.0
    )]
    pub frame_rate: f64,

    #[arg(
        long,
        value_name = "URL",
        help = "Backend base URL, overriding api.base_url from the config file"
    )]
    pub api_url: Option<String>,

    #[arg(
        long,
        help = "Show the dashboard with sample data and no backend calls"
    )]
    pub preview: bool,
}
